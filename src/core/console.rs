use crate::core::Operator;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// An [`Operator`] backed by a line reader and a writer, normally stdin and
/// stdout.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead + Send, W: Write + Send> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead + Send, W: Write + Send> Operator for Console<R, W> {
    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        // 只去掉換行符，其餘內容原樣保留
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
