use crate::core::confirm::Confirm;
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Yes/no confirmation read from a line of input (stdin by default).
/// Anything other than `y`/`yes` declines, including EOF.
pub struct LinePrompt<R> {
    input: R,
}

impl LinePrompt<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Confirm for LinePrompt<R> {
    fn confirm(&mut self, prompt: &str) -> bool {
        warning(prompt);
        print!("Confirm [y/N]: ");
        let _ = io::stdout().flush();

        let mut s = String::new();
        if self.input.read_line(&mut s).is_ok() {
            matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
        } else {
            false
        }
    }
}
