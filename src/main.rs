use std::ffi::OsString;
use std::path::PathBuf;

use calculate_sales::pipeline;
use calculate_sales::{Result, SalesError};
use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(error) = init_tracing().and_then(|()| run(parse_cli(std::env::args_os())?)) {
        debug!(?error, "run aborted");
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    pipeline::run(&cli.directory)?;
    Ok(())
}

/// Help and version requests exit through clap; every other parse failure
/// is a bad invocation.
fn parse_cli<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).or_else(|error| match error.kind() {
        ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => error.exit(),
        _ => Err(SalesError::BadInvocation(error.to_string())),
    })
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| SalesError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Aggregate daily branch sales records into branch.out."
)]
struct Cli {
    /// Directory holding branch.lst and the numbered .rcd files.
    directory: PathBuf,
}
