use std::io::{self, BufRead, Write};

use colored::Colorize;
use fincalc_core::types::Money;
use fincalc_core::FinCalcResult;
use fincalc_core::validate::{self, NumberKind, Scalar};
use tracing::debug;

/// Line-oriented console: prompts on `writer`, reads answers from `reader`.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Print `prompt` and read one line. `None` once input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()))
    }

    /// Prompt until the answer satisfies `kind`.
    ///
    /// Invalid answers are reported and asked again, without limit. Closed
    /// input surfaces as `ErrorKind::UnexpectedEof`.
    pub fn get_number(&mut self, prompt: &str, kind: NumberKind) -> io::Result<Scalar> {
        self.ask(prompt, kind, |text| validate::parse_number(text, kind))
    }

    pub fn get_amount(&mut self, prompt: &str) -> io::Result<Money> {
        self.ask(prompt, NumberKind::NonNegativeReal, validate::parse_amount)
    }

    pub fn get_count(&mut self, prompt: &str) -> io::Result<u32> {
        self.ask(prompt, NumberKind::PositiveInteger, validate::parse_count)
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        kind: NumberKind,
        parse: impl Fn(&str) -> FinCalcResult<T>,
    ) -> io::Result<T> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed while waiting for a number",
                ));
            };

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(input = %line, expected = %kind, "rejected numeric input");
                    writeln!(self.writer, "{}", e.to_string().as_str().yellow())?;
                }
            }
        }
    }
}
