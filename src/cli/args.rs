use clap::Parser;
use std::path::PathBuf;

use pdftotext::{EndOfLine, TextMode};

#[derive(Parser)]
#[command(name = "pdf2txt", version, about = "Convert PDF files to plain text with pdftotext")]
pub struct CliArgs {
    /// Input PDF file
    #[arg(required_unless_present = "print_command")]
    pub input: Option<PathBuf>,

    /// Output text file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON preset with extraction parameters; flags below override it
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Location of the pdftotext executable (default /usr/bin/pdftotext)
    #[arg(long)]
    pub pdftotext: Option<PathBuf>,

    /// xpdfrc config file passed through to pdftotext
    #[arg(long)]
    pub cfg: Option<PathBuf>,

    /// First page to convert
    #[arg(short = 'f', long)]
    pub first: Option<u64>,

    /// Last page to convert
    #[arg(short = 'l', long)]
    pub last: Option<u64>,

    /// Text layout mode
    #[arg(short, long, value_enum)]
    pub mode: Option<TextMode>,

    /// Character pitch in points (layout, table and lineprinter modes)
    #[arg(long)]
    pub fixed: Option<u64>,

    /// Line spacing in points (lineprinter mode)
    #[arg(long)]
    pub linespacing: Option<u64>,

    /// Remove clipped text before layout
    #[arg(long, default_value_t = false)]
    pub clip: bool,

    /// Discard diagonal text (e.g. watermarks)
    #[arg(long, default_value_t = false)]
    pub nodiag: bool,

    /// Output text encoding, e.g. UTF-8 (see `pdftotext -listencodings`)
    #[arg(long)]
    pub enc: Option<String>,

    /// End-of-line convention
    #[arg(long, value_enum)]
    pub eol: Option<EndOfLine>,

    /// Don't insert page breaks between pages
    #[arg(long, default_value_t = false)]
    pub nopgbrk: bool,

    /// Insert a Unicode byte order marker
    #[arg(long, default_value_t = false)]
    pub bom: bool,

    /// Margins in points: one value for all sides, or top,right,bottom,left
    #[arg(long)]
    pub margins: Option<String>,

    /// Owner password
    #[arg(long)]
    pub opw: Option<String>,

    /// User password
    #[arg(long)]
    pub upw: Option<String>,

    /// Kill pdftotext after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the pdftotext command line (passwords masked) and exit
    #[arg(long, default_value_t = false)]
    pub print_command: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
