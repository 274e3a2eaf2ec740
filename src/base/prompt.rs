use crate::base;

/// Message shown after any rejected date.
pub const DATE_HINT: &str = "Invalid date format. Please enter the date in dd-mm-yyyy format.";

/// Line-oriented prompting over any input/output pair.
///
/// Every `ask_*` style method loops until the user supplies a valid value,
/// printing a corrective message after each rejected line. Only I/O failures
/// escape; running out of input counts as one, because no valid value can
/// arrive after it.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> Prompter<R, W>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the writer prompts are printed to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints `prompt` and returns the next line without its line terminator.
    pub fn line(&mut self, prompt: &str) -> std::io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input ended before a valid value was entered",
            ));
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(line)
    }

    fn retry<T, E>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> std::io::Result<T>
    where
        E: std::fmt::Display,
    {
        loop {
            let line = self.line(prompt)?;
            match parse(&line) {
                Ok(v) => return Ok(v),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Asks for a `dd-mm-yyyy` date. If `allow_default` is set, an empty line
    /// means today.
    pub fn date(&mut self, prompt: &str, allow_default: bool) -> std::io::Result<base::Date> {
        self.retry(prompt, |s| {
            base::Date::parse_or_today(s, allow_default).map_err(|_| DATE_HINT)
        })
    }

    pub fn amount(&mut self) -> std::io::Result<base::Amount> {
        self.retry("Enter the amount: ", str::parse::<base::Amount>)
    }

    pub fn category(&mut self) -> std::io::Result<base::Category> {
        self.retry(
            "Enter the category ('I' for Income or 'E' for Expense): ",
            base::Category::from_code,
        )
    }

    /// Free-form; any line, including an empty one, is accepted.
    pub fn description(&mut self) -> std::io::Result<String> {
        self.line("Enter a description (optional): ")
    }

    /// Returns whether the answer is `y` or `Y`.
    pub fn confirm(&mut self, prompt: &str) -> std::io::Result<bool> {
        Ok(self.line(prompt)?.trim().eq_ignore_ascii_case("y"))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    fn transcript(mut p: Prompter<&[u8], Vec<u8>>) -> String {
        String::from_utf8(p.output().clone()).unwrap()
    }

    #[rstest]
    #[case("31-01-2025\n", false, "31-01-2025", 0)]
    #[case("31-01-2025\r\n", false, "31-01-2025", 0)]
    #[case("\n", true, "30-03-2015", 0)]
    #[case("\nbad\n2025-01-31\n01-02-2025\n", false, "01-02-2025", 3)]
    #[case("32-01-2025\n\n", true, "30-03-2015", 1)]
    fn test_date(
        #[case] input: &str,
        #[case] allow_default: bool,
        #[case] want: base::Date,
        #[case] rejections: usize,
    ) {
        let mut p = prompter(input);
        assert_eq!(p.date("Date: ", allow_default).unwrap(), want);
        let out = transcript(p);
        assert_eq!(out.matches(DATE_HINT).count(), rejections);
        assert_eq!(out.matches("Date: ").count(), rejections + 1);
    }

    #[test]
    fn test_amount_distinguishes_rejections() {
        let mut p = prompter("abc\n0\n-3\n12.5\n");
        assert_eq!(p.amount().unwrap(), base::Amount(12.5));
        assert_eq!(
            transcript(p),
            "Enter the amount: Invalid amount. Please enter a number.\n\
             Enter the amount: Amount must be a non-negative non-zero value.\n\
             Enter the amount: Amount must be a non-negative non-zero value.\n\
             Enter the amount: "
        );
    }

    #[rstest]
    #[case("i\n", base::Category::Income, 0)]
    #[case("E\n", base::Category::Expense, 0)]
    #[case("x\nincome\ne\n", base::Category::Expense, 2)]
    fn test_category(
        #[case] input: &str,
        #[case] want: base::Category,
        #[case] rejections: usize,
    ) {
        let mut p = prompter(input);
        assert_eq!(p.category().unwrap(), want);
        assert_eq!(
            transcript(p).matches("Invalid category.").count(),
            rejections
        );
    }

    #[rstest]
    #[case("\n", "")]
    #[case("  lunch with Sam \n", "  lunch with Sam ")]
    #[case("no newline", "no newline")]
    fn test_description(#[case] input: &str, #[case] want: &str) {
        assert_eq!(prompter(input).description().unwrap(), want)
    }

    #[rstest]
    #[case("y\n", true)]
    #[case(" Y \n", true)]
    #[case("n\n", false)]
    #[case("yes\n", false)]
    #[case("\n", false)]
    fn test_confirm(#[case] input: &str, #[case] want: bool) {
        assert_eq!(prompter(input).confirm("? ").unwrap(), want)
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let err = prompter("bad\nworse\n").date("Date: ", false).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
        let err = prompter("").amount().unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
