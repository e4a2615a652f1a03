//! Line-oriented input helpers for the shell.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::common::Result;

/// Reads answers from `input`, writing prompts to `out`.
///
/// Every reader returns `Ok(None)` once input is exhausted.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// The output sink, for writing listings between prompts.
    #[inline]
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Prompt and read one line, without its line terminator.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompt until the answer parses as a `T` inside `range`.
    pub fn read_in_range<T>(&mut self, prompt: &str, range: RangeInclusive<T>) -> Result<Option<T>>
    where
        T: FromStr + PartialOrd + Display,
    {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<T>() {
                Ok(value) if range.contains(&value) => return Ok(Some(value)),
                _ => writeln!(
                    self.out,
                    "Please enter a number between {} and {}.",
                    range.start(),
                    range.end()
                )?,
            }
        }
    }

    /// Prompt for a comma-separated list, see [`split_list`].
    pub fn read_list(&mut self, prompt: &str) -> Result<Option<Vec<String>>> {
        Ok(self.read_line(prompt)?.map(|line| split_list(&line)))
    }
}

/// Split on commas, trim spaces and tabs, drop empty entries.
pub fn split_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(|part| part.trim_matches([' ', '\t']))
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list(" Actor A,\tActor B , ,,Actor C\t"),
            vec!["Actor A", "Actor B", "Actor C"]
        );
        assert!(split_list("").is_empty());
        assert!(split_list(" , \t,").is_empty());
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut p = prompter("Alice\r\nBob\n");
        assert_eq!(p.read_line("> ").unwrap().as_deref(), Some("Alice"));
        assert_eq!(p.read_line("> ").unwrap().as_deref(), Some("Bob"));
        assert_eq!(p.read_line("> ").unwrap(), None);
    }

    #[test]
    fn test_read_in_range_reprompts() {
        let mut p = prompter("abc\n20\n-1\n 7 \n");
        let value = p.read_in_range::<usize>("Slot: ", 0..=14).unwrap();
        assert_eq!(value, Some(7));

        let text = String::from_utf8(p.out.clone()).unwrap();
        assert_eq!(
            text.matches("Please enter a number between 0 and 14.").count(),
            3
        );
        assert_eq!(text.matches("Slot: ").count(), 4);
    }

    #[test]
    fn test_read_in_range_eof() {
        let mut p = prompter("oops\n");
        assert_eq!(p.read_in_range::<i32>("Id: ", 0..=10).unwrap(), None);
    }

    #[test]
    fn test_read_list() {
        let mut p = prompter("A, B\n");
        assert_eq!(
            p.read_list("Actors: ").unwrap(),
            Some(vec!["A".to_string(), "B".to_string()])
        );
    }
}
