use std::io::{self, BufRead, Write};

/// Answers yes/no questions at the session's decision points.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Asks on a writer and reads the answer as one line from a reader.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        let _ = write!(self.output, "{} [y/N]: ", message);
        let _ = self.output.flush();

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) => {
                // Keep later output off the prompt line.
                let _ = writeln!(self.output);
                false
            }
            Ok(_) => is_affirmative(&answer),
            Err(e) => {
                tracing::debug!("Could not read answer: {}", e);
                false
            }
        }
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
