//! Console prompt for the base letters
//!
//! Used when `find` is run without letters on the command line.

use std::io::{self, BufRead, Write};

/// Prompt for the base word on stdin
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed or stdin cannot be read.
pub fn prompt_letters() -> Result<String, String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    read_answer("Base Word", &mut stdin.lock(), &mut stdout)
}

/// Write `prompt` and read one line of input without its line terminator
fn read_answer<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String, String> {
    write!(output, "{prompt}: ").map_err(|e| e.to_string())?;
    output.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(|e| e.to_string())?;

    let answer = line.trim_end_matches(['\n', '\r']);
    Ok(answer.to_string())
}
