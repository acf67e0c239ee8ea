use crate::utils::error::{Result, RosterError};
use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

/// Line-oriented console: one input source, a normal output and an error
/// output. Generic so sessions can be scripted in tests.
pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl Console<StdinLock<'static>, Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }

    /// Reads one raw line without its terminator (`\n` or `\r\n`; a lone
    /// `\r` stays in the line). End of input is reported as `InputClosed`.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RosterError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Writes `text` with no newline, flushes, then reads the answer.
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        self.print(text)?;
        self.read_line()
    }

    pub fn print(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    pub fn report_error(&mut self, text: &str) -> Result<()> {
        writeln!(self.err, "{}", text)?;
        self.err.flush()?;
        Ok(())
    }

    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.out, self.err)
    }
}
