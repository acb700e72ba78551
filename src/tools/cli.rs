use clap::Parser;
use log::info;
use std::{fmt::Display, fmt::Formatter};

/// Verbosity of user information
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Zip, Unzip, Test
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug)]
pub struct HsOpts {
    /// Vec of names of files to read for input. Empty means standard input.
    pub files: Vec<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Wrap the emitted decoder in script tags
    pub html: bool,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HsOpts {
    pub fn new() -> Self {
        Self {
            files: vec![],
            force_overwrite: false,
            html: false,
            op_mode: Mode::Zip,
            output: Output::File,
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for HsOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman text compressor that emits a self-decoding script",
    long_about = "
    Compresses text with a single Huffman table and writes the result as a small JavaScript
    program. The tree and the bitstream are stored in string literals using a character set
    that never needs escaping, and the program decodes them back into the page."
)]
pub struct Args {
    /// Files to process. Standard input is used when none are given
    #[clap()]
    files: Vec<String>,

    /// Compress the input files (default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Decompress a previously emitted script
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Compress in memory and verify that decoding gives the input back
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Force overwriting output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Wrap the decoder in <script> tags
    #[clap(long = "html")]
    html: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 2)]
    v: u8,
}

/// Put command line information from CLAP into our internal structure.
pub fn opts_from_args(args: Args) -> HsOpts {
    let mut opts = HsOpts::new();
    opts.files = args.files;
    opts.force_overwrite = args.force;
    opts.html = args.html;

    if args.compress {
        opts.op_mode = Mode::Zip
    };
    if args.decompress {
        opts.op_mode = Mode::Unzip
    };
    if args.test {
        opts.op_mode = Mode::Test
    };

    // No file names means we are a filter
    if args.stdout || opts.files.is_empty() {
        opts.output = Output::Stdout
    };

    opts.verbose = match args.v {
        0 => Verbosity::Quiet,
        1 => Verbosity::Errors,
        2 => Verbosity::Warnings,
        3 => Verbosity::Info,
        4 => Verbosity::Debug,
        _ => Verbosity::Trace,
    };
    opts
}

/// Parse the command line and set the log level.
pub fn hsopts_init() -> HsOpts {
    let opts = opts_from_args(Args::parse());
    log::set_max_level(opts.verbose.level());

    info!("---- Initialization ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Output goes to {}", opts.output);
    if opts.files.is_empty() {
        info!("Getting input from stdin");
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    opts
}
