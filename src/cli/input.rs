//! User input utilities for interactive CLI prompts

use crate::{Error, Result};
use std::io::{self, BufRead, Write};

/// Get user confirmation for an action
pub fn prompt_confirmation(message: &str, default_yes: bool) -> Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt_confirmation_from(&mut stdin.lock(), &mut stdout, message, default_yes)
}

/// Confirmation prompt over arbitrary reader and writer
///
/// Re-asks until the answer is empty, `y`/`yes` or `n`/`no`. End of input
/// counts as the default answer.
pub fn prompt_confirmation_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    default_yes: bool,
) -> Result<bool> {
    let default_text = if default_yes { "Y/n" } else { "y/N" };

    loop {
        write!(output, "{} [{}]: ", message, default_text)
            .and_then(|_| output.flush())
            .map_err(|e| Error::io("Failed to write prompt".to_string(), e))?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

        if read == 0 {
            return Ok(default_yes);
        }

        match line.trim().to_lowercase().as_str() {
            "" => return Ok(default_yes),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {
                writeln!(output, "Please enter 'y' for yes or 'n' for no.")
                    .map_err(|e| Error::io("Failed to write prompt".to_string(), e))?;
            }
        }
    }
}
