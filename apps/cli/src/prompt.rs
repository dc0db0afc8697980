//! Line-oriented console prompts.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use invtrack_core::trades::{normalize_symbol, parse_amount, parse_trade_date};
use rust_decimal::Decimal;

/// Reads answers from `input` and writes prompts and messages to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Writes `text` as is.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Shows `prompt` and returns the trimmed answer.
    ///
    /// Fails with `UnexpectedEof` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.print(prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before all questions were answered",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Asks for a ticker symbol until a non-blank one is given; returns it upper-cased.
    pub fn ask_symbol(&mut self, prompt: &str) -> io::Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            match normalize_symbol(&answer) {
                Ok(symbol) => return Ok(symbol),
                Err(_) => self.say("Stock symbol cannot be empty. Please try again.")?,
            }
        }
    }

    pub fn ask_trade_date(&mut self, prompt: &str) -> io::Result<NaiveDate> {
        loop {
            let answer = self.ask(prompt)?;
            match parse_trade_date(&answer) {
                Ok(date) => return Ok(date),
                Err(_) => self.say("Incorrect format. Please try again.")?,
            }
        }
    }

    pub fn ask_amount(&mut self, prompt: &str) -> io::Result<Decimal> {
        loop {
            let answer = self.ask(prompt)?;
            match parse_amount(&answer) {
                Ok(amount) => return Ok(amount),
                Err(_) => self.say("Please enter an amount greater than zero.")?,
            }
        }
    }

    /// Accepts `y`, `yes`, `n` or `no` in any case; anything else is asked again.
    pub fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            let answer = self.ask(prompt)?.to_ascii_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer Y or N.")?,
            }
        }
    }
}
