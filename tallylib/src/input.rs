//! Numeric input loading.
//!
//! The library owns data loading so callers stay thin: values arrive either
//! as a JSON array of numbers or as numeric text separated by whitespace
//! and/or commas. Format detection looks at the first non-whitespace byte.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::error::TallyError;
use crate::Result;

/// Wire format of a numeric input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// Detect from content: JSON when the input starts with `[`.
    #[default]
    Auto,
    /// JSON array of numbers.
    Json,
    /// Numeric text separated by whitespace and/or commas.
    Text,
}

impl FromStr for InputFormat {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(InputFormat::Auto),
            "json" => Ok(InputFormat::Json),
            "text" => Ok(InputFormat::Text),
            _ => Err(TallyError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

/// Read numeric values from a file.
pub fn read_values(path: impl AsRef<Path>, format: InputFormat) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| TallyError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_values(&content, format)
}

/// Read numeric values from an arbitrary reader (e.g. stdin).
pub fn read_values_from(reader: &mut impl Read, format: InputFormat) -> Result<Vec<f64>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_values(&content, format)
}

/// Parse numeric values from already-loaded content.
pub fn parse_values(content: &str, format: InputFormat) -> Result<Vec<f64>> {
    match format {
        InputFormat::Json => parse_json(content),
        InputFormat::Text => parse_text(content),
        InputFormat::Auto => {
            if content.trim_start().starts_with('[') {
                parse_json(content)
            } else {
                parse_text(content)
            }
        }
    }
}

fn parse_json(content: &str) -> Result<Vec<f64>> {
    Ok(serde_json::from_str(content)?)
}

fn parse_text(content: &str) -> Result<Vec<f64>> {
    content
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse().map_err(|_| TallyError::InvalidNumber {
                token: token.to_string(),
            })
        })
        .collect()
}
