// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/config/parser.rs
//!
//! INI-style config file parser
//!
//! Both config files share one layout:
//!
//! ```text
//! # comment
//! [SECTION]
//! key = value        (settings.conf uses '=')
//! keys : command     (keys.conf uses ':')
//! ```
//!
//! Lines are parsed one at a time with nom combinators, keeping the line
//! number of every entry for error reporting. The parser only structures
//! text; interpreting sections and values is left to the loader.
//!
//! A value that begins with `"` is a JSON string literal and is decoded.
//! `quote_value` produces one for text that would not survive a line
//! (control characters, surrounding whitespace, empty text).

use nom::{
    bytes::complete::{take_till1, take_while1},
    character::complete::{char, space0},
    sequence::delimited,
    IResult, Parser,
};
use thiserror::Error;

/// Parse errors with line number context
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    #[error("Entry outside of any section on line {line}")]
    EntryOutsideSection { line: usize },

    #[error("Section [{name}] defined twice (again on line {line})")]
    DuplicateSection { name: String, line: usize },
}

/// One `key <delimiter> value` line
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub key: String,
    pub value: String,
    /// 1-based line number
    pub line: usize,
}

/// A `[NAME]` header and the entries below it
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub name: String,
    pub line: usize,
    pub entries: Vec<Entry>,
}

/// Parses a complete config file.
///
/// # Arguments
/// * `content` - The full file content
/// * `delimiter` - Character separating key from value (`=` or `:`)
///
/// # Example
/// ```
/// use image_viewer_config::config::parser::parse_document;
///
/// let sections = parse_document("[LIBRARY]\nwidth = 0.4\n", '=')?;
/// assert_eq!(sections[0].name, "LIBRARY");
/// assert_eq!(sections[0].entries[0].value, "0.4");
/// # Ok::<(), image_viewer_config::config::parser::ParseError>(())
/// ```
pub fn parse_document(content: &str, delimiter: char) -> Result<Vec<Section>, ParseError> {
    let mut sections: Vec<Section> = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        // Skip empty lines and comments
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') || line_trimmed.starts_with(';')
        {
            continue;
        }

        if line_trimmed.starts_with('[') {
            let name = parse_section_header(line_trimmed).map_err(|_| ParseError::InvalidSyntax {
                line: line_num,
                message: format!("malformed section header '{}'", line_trimmed),
            })?;

            if sections.iter().any(|section| section.name == name) {
                return Err(ParseError::DuplicateSection {
                    name: name.to_string(),
                    line: line_num,
                });
            }

            sections.push(Section {
                name: name.to_string(),
                line: line_num,
                entries: Vec::new(),
            });
            continue;
        }

        let (key, value) = match parse_entry(line_trimmed, delimiter) {
            Ok((_, (key, value))) if !key.is_empty() => (key, value),
            _ => {
                return Err(ParseError::InvalidSyntax {
                    line: line_num,
                    message: format!("expected 'key {} value', found '{}'", delimiter, line_trimmed),
                });
            }
        };

        let section = sections
            .last_mut()
            .ok_or(ParseError::EntryOutsideSection { line: line_num })?;

        let value = unquote_value(value).ok_or_else(|| ParseError::InvalidSyntax {
            line: line_num,
            message: format!("malformed quoted value {}", value),
        })?;

        section.entries.push(Entry {
            key: key.to_string(),
            value,
            line: line_num,
        });
    }

    Ok(sections)
}

/// Parses `[NAME]`, allowing nothing but whitespace after the bracket.
pub fn parse_section_header(input: &str) -> Result<&str, nom::Err<nom::error::Error<&str>>> {
    let (rest, name) = delimited(
        char('['),
        take_while1(|c: char| c != ']' && c != '['),
        char(']'),
    )
    .parse(input)?;

    let (rest, _) = space0::<_, nom::error::Error<&str>>(rest)?;
    if !rest.is_empty() || name.trim().is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            rest,
            nom::error::ErrorKind::Eof,
        )));
    }

    Ok(name.trim())
}

/// Parses `key <delimiter> value`
///
/// The key ends at the first delimiter. Everything after it, trimmed,
/// is the value, which may be empty.
pub fn parse_entry(input: &str, delimiter: char) -> IResult<&str, (&str, &str)> {
    let (input, key) = take_till1(|c: char| c == delimiter)(input)?;
    let (input, _) = (char(delimiter), space0).parse(input)?;

    Ok(("", (key.trim(), input.trim())))
}

/// Renders `value` so that `parse_entry` reads it back unchanged.
///
/// Plain text is written as-is. Anything empty, padded, containing a
/// control character or starting with `"` becomes a JSON string.
pub fn quote_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value.trim() != value
        || value.starts_with('"')
        || value.chars().any(char::is_control);

    if needs_quotes {
        serde_json::Value::String(value.to_string()).to_string()
    } else {
        value.to_string()
    }
}

/// Decodes a value written by `quote_value`. `None` for a broken literal.
fn unquote_value(value: &str) -> Option<String> {
    if value.starts_with('"') {
        serde_json::from_str::<String>(value).ok()
    } else {
        Some(value.to_string())
    }
}
