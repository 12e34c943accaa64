use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::command::{Command, CommandOption};
use crate::error::{Error, Result};
use crate::types::{EndOfLine, TextMode};

/// Margins in points, applied in the order top, right, bottom, left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: u64,
    pub right: u64,
    pub bottom: u64,
    pub left: u64,
}

impl Margins {
    pub fn uniform(points: u64) -> Self {
        Self {
            top: points,
            right: points,
            bottom: points,
            left: points,
        }
    }
}

/// Extraction parameters suitable for JSON presets and the CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractParams {
    /// Executable location; `None` means `/usr/bin/pdftotext`
    pub pdftotext_path: Option<PathBuf>,
    /// xpdfrc-style config file handed to the tool via `-cfg`
    pub config_file: Option<PathBuf>,
    pub first_page: Option<u64>,
    pub last_page: Option<u64>,
    pub mode: Option<TextMode>,
    pub fixed_width: Option<u64>,
    pub line_spacing: Option<u64>,
    pub clip: bool,
    pub no_diagonal: bool,
    pub encoding: Option<String>,
    pub eol: Option<EndOfLine>,
    pub no_page_break: bool,
    pub bom: bool,
    pub margins: Option<Margins>,
    pub owner_password: Option<String>,
    pub user_password: Option<String>,
    /// Kill the tool after this many seconds; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl ExtractParams {
    /// Load a JSON preset. Missing fields fall back to their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let params = serde_json::from_str(&raw).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(preset = ?path, "loaded extraction preset");
        Ok(params)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Translate into options, in a fixed order: executable, config file,
    /// pages, mode, grid, filters, output format, margins, passwords.
    pub fn to_options(&self) -> Vec<CommandOption> {
        let mut opts = Vec::new();

        if let Some(path) = &self.pdftotext_path {
            opts.push(CommandOption::CustomPath(path.clone()));
        }
        if let Some(cfg) = &self.config_file {
            opts.push(CommandOption::CustomConfig(cfg.clone()));
        }
        match (self.first_page, self.last_page) {
            (Some(from), Some(to)) => opts.push(CommandOption::PageRange { from, to }),
            (Some(from), None) => opts.push(CommandOption::PageFrom(from)),
            (None, Some(to)) => opts.push(CommandOption::PageTo(to)),
            (None, None) => {}
        }
        if let Some(mode) = self.mode {
            opts.push(CommandOption::Mode(mode));
        }
        if let Some(width) = self.fixed_width {
            opts.push(CommandOption::CharFixedWidth(width));
        }
        if let Some(spacing) = self.line_spacing {
            opts.push(CommandOption::LineFixedSpacing(spacing));
        }
        if self.clip {
            opts.push(CommandOption::TextClipping);
        }
        if self.no_diagonal {
            opts.push(CommandOption::NoTextDiagonal);
        }
        if let Some(enc) = &self.encoding {
            opts.push(CommandOption::Encoding(enc.clone()));
        }
        if let Some(eol) = self.eol {
            opts.push(CommandOption::EndOfLine(eol));
        }
        if self.no_page_break {
            opts.push(CommandOption::NoPageBreak);
        }
        if self.bom {
            opts.push(CommandOption::ByteOrderMarker);
        }
        if let Some(m) = self.margins {
            opts.push(CommandOption::Margin {
                top: m.top,
                right: m.right,
                bottom: m.bottom,
                left: m.left,
            });
        }
        if let Some(pw) = &self.owner_password {
            opts.push(CommandOption::OwnerPassword(pw.clone()));
        }
        if let Some(pw) = &self.user_password {
            opts.push(CommandOption::UserPassword(pw.clone()));
        }

        opts
    }

    pub fn build(&self) -> Command {
        Command::new(self.to_options())
    }

    /// Build the command and run it on `input`, honouring `timeout_secs`.
    pub fn extract(&self, input: &Path) -> Result<Cursor<Vec<u8>>> {
        let cmd = self.build();
        match self.timeout() {
            Some(timeout) => cmd.run_with_timeout(input, timeout),
            None => cmd.run(input),
        }
    }
}
