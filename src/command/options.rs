//! Options accepted by [`Command::new`](crate::Command::new). Each variant maps
//! onto one `pdftotext` flag (or a fixed sequence of flags for the composite
//! variants). Descriptions follow the pdftotext(1) manual.
//!
//! Reference: <https://www.xpdfreader.com/pdftotext-man.html>
use std::path::PathBuf;

use super::Command;
use crate::types::{EndOfLine, TextMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOption {
    /// Set a custom location for the `pdftotext` executable.
    CustomPath(PathBuf),

    /// Read this config file in place of `~/.xpdfrc` or the system-wide
    /// config file (`-cfg`).
    CustomConfig(PathBuf),

    /// First page to convert (`-f`).
    PageFrom(u64),

    /// Last page to convert (`-l`).
    PageTo(u64),

    /// Range of pages to convert, expanded to `PageFrom` then `PageTo`.
    PageRange { from: u64, to: u64 },

    /// Text layout mode. Modes are not mutually checked here: supplying two
    /// emits both flags and leaves the outcome to `pdftotext`.
    Mode(TextMode),

    /// Character pitch in points (`-fixed`).
    ///
    /// Works only with the layout, table and line printer modes. In table
    /// mode it fixes the character spacing within each line.
    CharFixedWidth(u64),

    /// Line spacing in points (`-linespacing`). Line printer mode only.
    ///
    /// If either grid dimension is left out in line printer mode, the tool
    /// attempts to compute an appropriate value.
    LineFixedSpacing(u64),

    /// Remove text hidden by clipping before layout, then add it back in
    /// (`-clip`). Helps with tables where clipped text would overlap the next
    /// column.
    TextClipping,

    /// Discard diagonal text, i.e. text not close to one of the 0, 90, 180 or
    /// 270 degree axes (`-nodiag`). Useful to skip watermarks.
    NoTextDiagonal,

    /// Output text encoding (`-enc`). The name is case-sensitive and must be
    /// defined by a `unicodeMap` entry; `pdftotext -listencodings` prints the
    /// available ones. The tool defaults to `Latin1`.
    Encoding(String),

    /// End-of-line convention for the output (`-eol`).
    EndOfLine(EndOfLine),

    /// Don't insert a page break (form feed) at the end of each page
    /// (`-nopgbrk`).
    NoPageBreak,

    /// Insert a Unicode byte order marker at the start of the output (`-bom`).
    ByteOrderMarker,

    /// Left margin in points; text within it is discarded (`-marginl`).
    MarginLeft(u64),

    /// Right margin in points; text within it is discarded (`-marginr`).
    MarginRight(u64),

    /// Top margin in points; text within it is discarded (`-margint`).
    MarginTop(u64),

    /// Bottom margin in points; text within it is discarded (`-marginb`).
    MarginBottom(u64),

    /// All four margins, expanded in the order top, right, bottom, left.
    Margin {
        top: u64,
        right: u64,
        bottom: u64,
        left: u64,
    },

    /// Owner password for the PDF file (`-opw`). Bypasses all security
    /// restrictions.
    OwnerPassword(String),

    /// User password for the PDF file (`-upw`).
    UserPassword(String),

    /// Append one raw token verbatim, for flags not modelled above (e.g. `-q`).
    Arg(String),
}

impl CommandOption {
    /// Apply this option to a command under construction.
    ///
    /// Composite variants apply their constituent options to the same command,
    /// so `PageRange` and `Margin` produce exactly the tokens their atomic
    /// parts would.
    pub fn apply(self, cmd: &mut Command) {
        match self {
            CommandOption::CustomPath(path) => cmd.path = path,
            CommandOption::CustomConfig(path) => {
                cmd.push("-cfg");
                cmd.push(path);
            }
            CommandOption::PageFrom(page) => cmd.push_value("-f", page),
            CommandOption::PageTo(page) => cmd.push_value("-l", page),
            CommandOption::PageRange { from, to } => {
                CommandOption::PageFrom(from).apply(cmd);
                CommandOption::PageTo(to).apply(cmd);
            }
            CommandOption::Mode(mode) => cmd.push_mode(mode),
            CommandOption::CharFixedWidth(width) => cmd.push_value("-fixed", width),
            CommandOption::LineFixedSpacing(spacing) => cmd.push_value("-linespacing", spacing),
            CommandOption::TextClipping => cmd.push("-clip"),
            CommandOption::NoTextDiagonal => cmd.push("-nodiag"),
            CommandOption::Encoding(name) => cmd.push_value("-enc", name),
            CommandOption::EndOfLine(eol) => cmd.push_value("-eol", eol),
            CommandOption::NoPageBreak => cmd.push("-nopgbrk"),
            CommandOption::ByteOrderMarker => cmd.push("-bom"),
            CommandOption::MarginLeft(margin) => cmd.push_value("-marginl", margin),
            CommandOption::MarginRight(margin) => cmd.push_value("-marginr", margin),
            CommandOption::MarginTop(margin) => cmd.push_value("-margint", margin),
            CommandOption::MarginBottom(margin) => cmd.push_value("-marginb", margin),
            CommandOption::Margin {
                top,
                right,
                bottom,
                left,
            } => {
                CommandOption::MarginTop(top).apply(cmd);
                CommandOption::MarginRight(right).apply(cmd);
                CommandOption::MarginBottom(bottom).apply(cmd);
                CommandOption::MarginLeft(left).apply(cmd);
            }
            CommandOption::OwnerPassword(password) => cmd.push_value("-opw", password),
            CommandOption::UserPassword(password) => cmd.push_value("-upw", password),
            CommandOption::Arg(token) => cmd.push(token),
        }
    }
}
