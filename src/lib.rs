#![doc = r#"
pdftotext — a typed options wrapper around the Xpdf/Poppler `pdftotext` tool.

This crate builds a `pdftotext` invocation from typed options and runs it as a
subprocess, returning the extracted plain text. It does no PDF parsing itself:
decoding, layout analysis and extraction are all done by the external binary.

Requirements
------------
- A `pdftotext` executable (Xpdf or Poppler). The default location is
  `/usr/bin/pdftotext`; use `CommandOption::CustomPath` to point elsewhere.

Quick start
-----------
```rust,no_run
use std::io::Read;
use pdftotext::{Command, CommandOption, TextMode};

fn main() -> pdftotext::Result<()> {
    let cmd = Command::new([
        CommandOption::Encoding("UTF-8".to_string()),
        CommandOption::Mode(TextMode::Layout),
        CommandOption::Margin { top: 20, right: 20, bottom: 20, left: 20 },
        CommandOption::NoPageBreak,
    ]);

    let mut out = cmd.run("./example.pdf")?;
    let mut text = String::new();
    out.read_to_string(&mut text)?;
    println!("{text}");
    Ok(())
}
```

Options are applied in order and appended verbatim: nothing is deduplicated
and conflicting modes are passed through. `Command::try_new` adds a check that
the executable exists and that at most one text mode was requested.

Timeouts and cancellation
-------------------------
```rust,no_run
use std::time::Duration;
use pdftotext::{Command, Error};

let cmd = Command::new([]);
match cmd.run_with_timeout("big.pdf", Duration::from_secs(10)) {
    Ok(_text) => {}
    Err(Error::Timeout(after)) => eprintln!("gave up after {after:?}"),
    Err(other) => eprintln!("{other}"),
}
```

`Command::run_until_cancelled` does the same with an `AtomicBool` flag. In
both cases the child is killed and reaped before the error is returned.

Presets
-------
`ExtractParams` is a serde-friendly bundle of every option, loadable from JSON:

```rust,no_run
use std::path::Path;
use pdftotext::ExtractParams;

fn main() -> pdftotext::Result<()> {
    let params = ExtractParams::from_json_file(Path::new("preset.json"))?;
    println!("{}", params.build().describe_redacted());
    let _text = params.extract(Path::new("report.pdf"))?;
    Ok(())
}
```

Error handling
--------------
All fallible functions return `pdftotext::Result<T>`. A failed run is an
`Error::Execution`, which carries either the spawn error or the exit code and
the tool's standard error text.

Useful modules
--------------
- [`command`] — `Command`, `CommandOption`, the default executable path.
- [`process`] — subprocess execution and `ExecError`.
- [`params`] — `ExtractParams` presets.
- [`types`] — `TextMode` and `EndOfLine`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod command;
pub mod error;
pub mod params;
pub mod process;
pub mod types;

pub use command::{Command, CommandOption, DEFAULT_PDFTOTEXT_PATH, INPUT_PLACEHOLDER};
pub use error::{Error, Result};
pub use params::{ExtractParams, Margins};
pub use process::ExecError;
pub use types::{EndOfLine, TextMode};
