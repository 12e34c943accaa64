//! Shared enums used by options, presets and the CLI.
//! `TextMode` selects the layout algorithm, `EndOfLine` the line terminator.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    /// Maintain (as best as possible) the original physical layout
    Layout,
    /// Physical layout optimized for simple one-column pages
    Simple,
    /// Like `Simple`, but copes better with slightly rotated text
    Simple2,
    /// Physical layout optimized for tabular data
    Table,
    /// Strict fixed character pitch and height grid
    #[value(name = "lineprinter")]
    LinePrinter,
    /// Keep the text in content stream order
    Raw,
}

impl TextMode {
    pub fn flag(&self) -> &'static str {
        match self {
            TextMode::Layout => "-layout",
            TextMode::Simple => "-simple",
            TextMode::Simple2 => "-simple2",
            TextMode::Table => "-table",
            TextMode::LinePrinter => "-lineprinter",
            TextMode::Raw => "-raw",
        }
    }
}

impl std::fmt::Display for TextMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextMode::Layout => write!(f, "Layout"),
            TextMode::Simple => write!(f, "Simple"),
            TextMode::Simple2 => write!(f, "Simple2"),
            TextMode::Table => write!(f, "Table"),
            TextMode::LinePrinter => write!(f, "LinePrinter"),
            TextMode::Raw => write!(f, "Raw"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    Unix,
    Dos,
    Mac,
}

impl EndOfLine {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndOfLine::Unix => "unix",
            EndOfLine::Dos => "dos",
            EndOfLine::Mac => "mac",
        }
    }
}

impl std::fmt::Display for EndOfLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
