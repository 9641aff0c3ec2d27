use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter 'exit' to stop or any key to continue: ";
pub const FINISHED: &str = "Script execution finished.";

/// Keep prompting until the user types `exit` (any case) or input ends.
///
/// Returns how many times the loop continued.
pub fn prompt_loop<R: BufRead, W: Write>(input: R, output: &mut W) -> std::io::Result<usize> {
    let mut continued = 0;
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        if line?.eq_ignore_ascii_case("exit") {
            break;
        }
        writeln!(output, "Continuing...")?;
        continued += 1;
    }

    writeln!(output, "{FINISHED}")?;
    Ok(continued)
}
