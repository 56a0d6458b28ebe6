//! Field delimiter detection.

use serde::{Deserialize, Serialize};

/// Field delimiter of pasted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// Tab-separated, as produced by copying spreadsheet cells.
    #[default]
    Tab,
    /// Comma-separated.
    Comma,
}

impl Delimiter {
    /// The delimiter character.
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Comma => ',',
        }
    }

    /// The delimiter as a byte, for the csv writer.
    pub fn as_byte(&self) -> u8 {
        self.as_char() as u8
    }
}

impl std::str::FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tab" | "tsv" | "\\t" => Ok(Delimiter::Tab),
            "comma" | "csv" | "," => Ok(Delimiter::Comma),
            _ => Err(format!("Unknown delimiter: {}. Use tab or comma.", s)),
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Delimiter::Tab => write!(f, "tab"),
            Delimiter::Comma => write!(f, "comma"),
        }
    }
}

/// Detect the delimiter from the first line of the input.
///
/// Tab wins over comma when both are present; a line with neither falls back
/// to tab.
pub fn detect_delimiter(text: &str) -> Delimiter {
    let first_line = text.lines().next().unwrap_or("");

    if first_line.contains('\t') {
        Delimiter::Tab
    } else if first_line.contains(',') {
        Delimiter::Comma
    } else {
        Delimiter::Tab
    }
}
