use crate::base;
use crate::cli;

/// A single command invocation.
pub struct Invocation<'a> {
    /// Command line arguments. First arg is the binary name, which doesn't do
    /// anything useful, so can be empty.
    pub args: &'a [&'a str],

    /// Text fed to the command's prompts, one answer per line.
    pub input: &'a str,

    pub res: cli::testing::ResultMatcher<'a>,
}

impl Invocation<'_> {
    /// Parses and runs the command against `fs`. Returns the result along with
    /// everything the command wrote to its prompt output.
    pub fn run(&self, fs: &base::Fs) -> (anyhow::Result<cli::Output>, String) {
        let root = match <cli::Root as clap::Parser>::try_parse_from(self.args) {
            Ok(cmd) => cmd,
            Err(e) => panic!("{}", e),
        };
        let mut prompter = base::Prompter::new(self.input.as_bytes(), Vec::new());
        let res = root.run(fs, &mut prompter);
        let transcript = String::from_utf8(prompter.output().clone()).unwrap();
        (res, transcript)
    }
}

/// Test case encapsulating expectations for the given command invocations.
/// Commands may mutate the filesystem.
pub struct MutCase<'a> {
    pub invocations: &'a [Invocation<'a>],

    /// Filesystem state prior to running the command.
    pub initial_state: cli::testing::StrState<'a>,

    /// Desired filesystem state after running the command.
    pub final_state: cli::testing::State,
}

impl MutCase<'_> {
    /// 1. Creates a tempdir and initializes files based on `initial_state`
    /// 1. Runs each command and checks result using `res`
    /// 1. Checks if files match `final_state`
    pub fn run(self) {
        let (fs, _td) = cli::testing::tempfs();
        self.initial_state.to_fs(&fs);

        for inv in self.invocations {
            let (res, _) = inv.run(&fs);
            inv.res.assert_matches(res);
        }

        let got_final_state = cli::testing::State::from_fs(&fs);
        assert_eq!(got_final_state, self.final_state);
    }
}

/// Test case encapsulating expectations for the given command invocations.
/// Commands are expected to leave filesystem state unchanged.
pub struct Case<'a> {
    pub invocations: &'a [Invocation<'a>],
    pub initial_state: cli::testing::StrState<'a>,
}

impl Case<'_> {
    /// 1. Creates a tempdir and initializes files based on `initial_state`
    /// 1. Runs each command and checks result using `res`
    /// 1. Checks if files match `initial_state`
    pub fn run(self) {
        let tc = MutCase {
            invocations: self.invocations,
            final_state: self.initial_state.to_state(),
            initial_state: self.initial_state,
        };
        tc.run()
    }
}

/// Generates test functions from test cases.
///
/// Accepts one or more tuples of the form `(testcase_name: ident, testcase:
/// Case|MutCase)`. Creates a submodule named `cmd_testcases` in the caller's
/// module, and then for each test case tuple, creates a corresponding function
/// named `testcase_name`.
macro_rules! generate_testcases {
    ($(($name:ident, $testcase:expr)),+ $(,)?) => {
        mod cmd_testcases {
            use super::*;

            $(
                #[test]
                fn $name() {
                    $testcase.run()
                }
            )+
        }
    };
}

pub(crate) use generate_testcases;
