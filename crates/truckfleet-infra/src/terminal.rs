//! Console implementation over stdin/stdout

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::thread;
use std::time::Duration;

use truckfleet_domain::Console;
use truckfleet_types::Result;

pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl TerminalConsole<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(answer))
    }

    fn pause(&mut self, duration: Duration) {
        let _ = self.output.flush();
        thread::sleep(duration);
    }
}
