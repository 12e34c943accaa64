use std::fs;
use std::io::{self, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use pdftotext::{ExtractParams, Margins};

use super::args::CliArgs;
use super::errors::AppError;

fn parse_margins(value: &str) -> Result<Margins, AppError> {
    let invalid = || AppError::InvalidMargins {
        value: value.to_string(),
    };
    let parts = value
        .split(',')
        .map(|p| p.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;

    match parts.as_slice() {
        [all] => Ok(Margins::uniform(*all)),
        [top, right, bottom, left] => Ok(Margins {
            top: *top,
            right: *right,
            bottom: *bottom,
            left: *left,
        }),
        _ => Err(invalid()),
    }
}

/// Merge command line flags over the preset (or the defaults).
fn resolve_params(args: &CliArgs) -> Result<ExtractParams, AppError> {
    let mut params = match &args.preset {
        Some(path) => ExtractParams::from_json_file(path)?,
        None => ExtractParams::default(),
    };

    if args.pdftotext.is_some() {
        params.pdftotext_path = args.pdftotext.clone();
    }
    if args.cfg.is_some() {
        params.config_file = args.cfg.clone();
    }
    if args.first.is_some() {
        params.first_page = args.first;
    }
    if args.last.is_some() {
        params.last_page = args.last;
    }
    if args.mode.is_some() {
        params.mode = args.mode;
    }
    if args.fixed.is_some() {
        params.fixed_width = args.fixed;
    }
    if args.linespacing.is_some() {
        params.line_spacing = args.linespacing;
    }
    if args.enc.is_some() {
        params.encoding = args.enc.clone();
    }
    if args.eol.is_some() {
        params.eol = args.eol;
    }
    if let Some(margins) = &args.margins {
        params.margins = Some(parse_margins(margins)?);
    }
    if args.opw.is_some() {
        params.owner_password = args.opw.clone();
    }
    if args.upw.is_some() {
        params.user_password = args.upw.clone();
    }
    if args.timeout.is_some() {
        params.timeout_secs = args.timeout;
    }
    params.clip |= args.clip;
    params.no_diagonal |= args.nodiag;
    params.no_page_break |= args.nopgbrk;
    params.bom |= args.bom;

    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(io::stderr)
            .init();
    }

    let params = resolve_params(&args)?;

    if args.print_command {
        println!("{}", params.build().describe_redacted());
        return Ok(());
    }

    let input = args.input.ok_or(AppError::MissingArgument {
        arg: "<INPUT>".to_string(),
    })?;

    let text = params.extract(&input).map_err(AppError::from)?.into_inner();

    match &args.output {
        Some(output) => {
            fs::write(output, &text).map_err(AppError::from)?;
            info!("Extracted {:?} -> {:?} ({} bytes)", input, output, text.len());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&text).map_err(AppError::from)?;
            stdout.flush().map_err(AppError::from)?;
        }
    }

    Ok(())
}
