//! Interactive input of the factorial argument.

use std::io::{self, BufRead, Write};

/// Errors reading n from the user.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("no input provided")]
    Eof,

    #[error("not an integer: {0:?}")]
    Parse(String),
}

/// Prompt on `output` and read one integer from `input`.
///
/// Blank lines are skipped; the first whitespace-separated token of the
/// first non-blank line is parsed.
pub fn read_n<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i64, PromptError> {
    write!(output, "Factorial of: ")?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::Eof);
        }
        if let Some(token) = line.split_whitespace().next() {
            return token
                .parse()
                .map_err(|_| PromptError::Parse(token.to_string()));
        }
    }
}
