//! CSV row parser
//!
//! Quoted fields may span lines. With lazy quotes a quote that does not
//! close a field is kept as a literal character, and a quoted field left
//! open at end of input simply ends there.

use super::options::CsvOptions;
use crate::error::{Error, Result};

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// How a field was terminated
enum FieldEnd {
    Delimiter,
    Record,
}

struct CsvParser<'o> {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    options: &'o CsvOptions,
}

/// Parse CSV text into rows of string fields
///
/// Blank lines are skipped and rows may have differing field counts.
pub(crate) fn parse_csv(content: &str, options: &CsvOptions) -> Result<Vec<Vec<String>>> {
    let mut parser = CsvParser {
        chars: content.replace("\r\n", "\n").chars().collect(),
        pos: 0,
        line: 1,
        options,
    };

    let mut rows = Vec::new();
    while let Some(c) = parser.peek() {
        if c == '\n' {
            parser.pos += 1;
            parser.line += 1;
            continue;
        }
        let mut row = parser.read_record()?;
        if options.trim_space {
            for field in &mut row {
                *field = field.trim().to_string();
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

impl CsvParser<'_> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn read_record(&mut self) -> Result<Vec<String>> {
        let mut fields = Vec::new();
        loop {
            let (field, end) = self.read_field()?;
            fields.push(field);
            if let FieldEnd::Record = end {
                return Ok(fields);
            }
        }
    }

    fn read_field(&mut self) -> Result<(String, FieldEnd)> {
        if self.options.trim_leading_space {
            while matches!(self.peek(), Some(c) if c.is_whitespace() && c != '\n') {
                self.pos += 1;
            }
        }

        if self.peek() == Some(QUOTE) {
            self.pos += 1;
            self.read_quoted()
        } else {
            self.read_unquoted()
        }
    }

    fn read_unquoted(&mut self) -> Result<(String, FieldEnd)> {
        let mut field = String::new();
        loop {
            match self.peek() {
                None => return Ok((field, FieldEnd::Record)),
                Some('\n') => {
                    self.pos += 1;
                    self.line += 1;
                    return Ok((field, FieldEnd::Record));
                }
                Some(DELIMITER) => {
                    self.pos += 1;
                    return Ok((field, FieldEnd::Delimiter));
                }
                Some(QUOTE) if !self.options.lazy_quotes => {
                    return Err(Error::csv(format!(
                        "bare quote in non-quoted field at line {}",
                        self.line
                    )));
                }
                Some(c) => {
                    field.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    fn read_quoted(&mut self) -> Result<(String, FieldEnd)> {
        let start_line = self.line;
        let mut field = String::new();
        loop {
            match self.peek() {
                None if self.options.lazy_quotes => return Ok((field, FieldEnd::Record)),
                None => {
                    return Err(Error::csv(format!(
                        "extraneous or missing quote in quoted field starting at line {start_line}"
                    )));
                }
                Some(QUOTE) => match self.chars.get(self.pos + 1).copied() {
                    Some(QUOTE) => {
                        field.push(QUOTE);
                        self.pos += 2;
                    }
                    Some(DELIMITER) => {
                        self.pos += 2;
                        return Ok((field, FieldEnd::Delimiter));
                    }
                    Some('\n') => {
                        self.pos += 2;
                        self.line += 1;
                        return Ok((field, FieldEnd::Record));
                    }
                    None => {
                        self.pos += 1;
                        return Ok((field, FieldEnd::Record));
                    }
                    Some(_) if self.options.lazy_quotes => {
                        field.push(QUOTE);
                        self.pos += 1;
                    }
                    Some(_) => {
                        return Err(Error::csv(format!(
                            "extraneous or missing quote in quoted field at line {}",
                            self.line
                        )));
                    }
                },
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    field.push(c);
                    self.pos += 1;
                }
            }
        }
    }
}
