//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use huffscript::compression::{compress::compress, decompress};
use huffscript::tools::cli::{hsopts_init, Mode};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace. The cli narrows this down.
    // Logs go to stderr so they never mix with a script written to stdout.
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Unable to start the logger");
    }

    let options = hsopts_init();

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Zip => compress(&options),
        Mode::Unzip => decompress::decompress(&options),
        Mode::Test => decompress::self_test(&options),
    };

    match &result {
        Ok(()) => info!("Done.\n"),
        Err(e) => error!("{}", e),
    }
    result
}
