//! The `pdftotext` command: an executable path plus an ordered argument list,
//! built from [`CommandOption`]s and executed once per input file.
pub mod options;

pub use options::CommandOption;

use std::ffi::OsString;
use std::fmt;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};
use crate::process::{self, Stop};
use crate::types::TextMode;

/// Location of `pdftotext` used unless `CommandOption::CustomPath` is given.
pub const DEFAULT_PDFTOTEXT_PATH: &str = "/usr/bin/pdftotext";

/// Placeholder rendered in place of the input path by [`Command::describe`].
pub const INPUT_PLACEHOLDER: &str = "<inpath>";

/// Trailing argument that makes `pdftotext` write to standard output.
pub(crate) const STDOUT_MARKER: &str = "-";

const SECRET_FLAGS: [&str; 2] = ["-opw", "-upw"];

/// One planned invocation of `pdftotext`.
///
/// Arguments keep the order in which options were applied; nothing is
/// deduplicated. Once built, a command is read-only and can be run any number
/// of times, from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    path: PathBuf,
    args: Vec<OsString>,
    modes: Vec<TextMode>,
}

impl Default for Command {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PDFTOTEXT_PATH),
            args: Vec::new(),
            modes: Vec::new(),
        }
    }
}

impl Command {
    /// Build a command, applying `options` in order.
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = CommandOption>,
    {
        let mut cmd = Self::default();
        for option in options {
            option.apply(&mut cmd);
        }
        cmd
    }

    /// Build a command like [`Command::new`], then reject it when the
    /// executable is missing or more than one text mode was requested.
    pub fn try_new<I>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = CommandOption>,
    {
        let cmd = Self::new(options);
        cmd.validate()?;
        Ok(cmd)
    }

    /// Apply one more option.
    pub fn with(mut self, option: CommandOption) -> Self {
        option.apply(&mut self);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    pub(crate) fn push(&mut self, token: impl Into<OsString>) {
        self.args.push(token.into());
    }

    pub(crate) fn push_mode(&mut self, mode: TextMode) {
        self.modes.push(mode);
        self.push(mode.flag());
    }

    pub(crate) fn push_value(&mut self, flag: &str, value: impl ToString) {
        self.push(flag);
        self.push(value.to_string());
    }

    fn validate(&self) -> Result<()> {
        if !self.path.is_file() {
            return Err(Error::Construction(format!(
                "pdftotext executable not found at {}",
                self.path.display()
            )));
        }

        if self.modes.len() > 1 {
            let names: Vec<String> = self.modes.iter().map(|m| m.to_string()).collect();
            return Err(Error::Construction(format!(
                "conflicting text modes: {}",
                names.join(", ")
            )));
        }

        Ok(())
    }

    /// Full argument list for one run: options, input, then the stdout marker.
    pub(crate) fn invocation_args(&self, input: &Path) -> Vec<OsString> {
        let mut args = self.args.clone();
        args.push(input.as_os_str().to_owned());
        args.push(OsString::from(STDOUT_MARKER));
        args
    }

    /// Convert `input` and return the captured text as a readable stream.
    pub fn run(&self, input: impl AsRef<Path>) -> Result<Cursor<Vec<u8>>> {
        let out = process::execute(self, input.as_ref(), Stop::Never)?;
        Ok(Cursor::new(out))
    }

    /// Like [`Command::run`], but kill the child and fail with
    /// [`Error::Timeout`] once `timeout` has elapsed.
    pub fn run_with_timeout(
        &self,
        input: impl AsRef<Path>,
        timeout: Duration,
    ) -> Result<Cursor<Vec<u8>>> {
        let out = process::execute(self, input.as_ref(), Stop::After(timeout))?;
        Ok(Cursor::new(out))
    }

    /// Like [`Command::run`], but kill the child and fail with
    /// [`Error::Cancelled`] as soon as `cancel` is set.
    pub fn run_until_cancelled(
        &self,
        input: impl AsRef<Path>,
        cancel: &AtomicBool,
    ) -> Result<Cursor<Vec<u8>>> {
        let out = process::execute(self, input.as_ref(), Stop::Flag(cancel))?;
        Ok(Cursor::new(out))
    }

    /// Run and drain the output into a `String`. Non UTF-8 output (e.g. with a
    /// `Latin1` encoding) is reported as [`Error::Io`].
    pub fn run_to_string(&self, input: impl AsRef<Path>) -> Result<String> {
        let mut out = self.run(input)?;
        let mut text = String::new();
        out.read_to_string(&mut text)?;
        debug!(bytes = text.len(), "decoded pdftotext output");
        Ok(text)
    }

    /// Render the command as it would be invoked, with `<inpath>` standing in
    /// for the input file. Never spawns anything.
    pub fn describe(&self) -> String {
        self.render(false)
    }

    /// Same as [`Command::describe`], with password values masked.
    pub fn describe_redacted(&self) -> String {
        self.render(true)
    }

    fn render(&self, redact: bool) -> String {
        let mut s = self.path.display().to_string();
        let mut mask_next = false;
        for arg in &self.args {
            s.push(' ');
            if mask_next {
                s.push_str("***");
            } else {
                s.push_str(&arg.to_string_lossy());
            }
            mask_next = redact && arg.to_str().is_some_and(|a| SECRET_FLAGS.contains(&a));
        }
        s.push(' ');
        s.push_str(INPUT_PLACEHOLDER);
        s
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
