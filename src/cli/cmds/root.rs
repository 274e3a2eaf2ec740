use anyhow::Context;

use crate::base;
use crate::cli;

/// Personal income and expense ledger
///
/// Run without a command to use the interactive menu.
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Add(cli::cmds::add::Add),
    View(cli::cmds::view::View),
    Plot(cli::cmds::plot::Plot),
    Menu(cli::cmds::menu::Menu),
}

impl Root {
    pub fn run<R, W>(
        self,
        fs: &base::Fs,
        prompter: &mut base::Prompter<R, W>,
    ) -> anyhow::Result<cli::Output>
    where
        R: std::io::BufRead,
        W: std::io::Write,
    {
        let command = self
            .command
            .unwrap_or_else(|| Commands::Menu(cli::cmds::menu::Menu::default()));
        if let Commands::Init(cmd) = command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read_config()
            .with_context(|| format!("failed to read '{}'", fs.config_path().display()))?;

        match command {
            Commands::Init(_) => unreachable!(),
            Commands::Add(cmd) => cmd.run(fs, prompter),
            Commands::View(cmd) => cmd.run(fs, &config),
            Commands::Plot(cmd) => cmd.run(fs, &config),
            Commands::Menu(cmd) => cmd.run(fs, &config, prompter),
        }
    }
}
