//! Coloured terminal output and the interactive overwrite prompt.

use std::io::{self, BufRead, Write};

use md_flashcards_core::{Presenter, ReportKind};

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

const BANNER: &str = r"
    __  ___           __       __
   /  |/  /___ ______/ /______/ /___ _      ______
  / /|_/ / __ `/ ___/ //_/ __  / __ \ | /| / / __ \
 / /  / / /_/ / /  / ,< / /_/ / /_/ / |/ |/ / / / /
/_/  /_/\__,_/_/  /_/|_|\__,_/\____/|__/|__/_/ /_/

        >  >  >  >  >   Flashcards
";

/// Presenter writing to stdout and reading answers from stdin.
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
}

impl TerminalPresenter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn banner(&mut self) {
        let _ = writeln!(self.output, "{CYAN}{BANNER}{RESET}");
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Formats a message the way it appears on the terminal.
pub fn styled(kind: ReportKind, message: &str) -> String {
    match kind {
        ReportKind::Error => format!("{RED}{message}{RESET}"),
        ReportKind::Warning => format!("{YELLOW}[WARNING]: {message}{RESET}"),
        ReportKind::Success => format!("{GREEN}{message}{RESET}"),
        ReportKind::Info => format!("{CYAN}[INFO]: {message}{RESET}"),
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        let _ = write!(self.output, "{GREEN}? {prompt} (y/N) {RESET}");
        let _ = self.output.flush();

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(err) => {
                tracing::warn!("could not read answer: {}", err);
                false
            }
        }
    }

    fn report(&mut self, kind: ReportKind, message: &str) {
        let _ = writeln!(self.output, "{}", styled(kind, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn presenter(input: &str) -> TerminalPresenter<&[u8], Vec<u8>> {
        TerminalPresenter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn confirm_accepts_yes() {
        assert!(presenter("y\n").confirm("overwrite?"));
        assert!(presenter("YES\n").confirm("overwrite?"));
    }

    #[test]
    fn confirm_defaults_to_no() {
        assert!(!presenter("\n").confirm("overwrite?"));
        assert!(!presenter("").confirm("overwrite?"));
        assert!(!presenter("nope\n").confirm("overwrite?"));
    }

    #[test]
    fn confirm_prints_prompt() {
        let mut presenter = presenter("n\n");
        presenter.confirm("out.txt already exists, do you want to overwrite?");
        let output = String::from_utf8(presenter.into_output()).unwrap();
        assert!(output.contains("out.txt already exists, do you want to overwrite? (y/N)"));
    }

    #[test]
    fn warning_is_prefixed() {
        assert_eq!(
            styled(ReportKind::Warning, "Could not write all flashcards..."),
            "\x1b[33m[WARNING]: Could not write all flashcards...\x1b[0m"
        );
    }

    #[test]
    fn report_writes_one_line() {
        let mut presenter = presenter("");
        presenter.report(ReportKind::Info, "Found 2 flashcards!");
        let output = String::from_utf8(presenter.into_output()).unwrap();
        assert_eq!(output, "\x1b[36m[INFO]: Found 2 flashcards!\x1b[0m\n");
    }
}
