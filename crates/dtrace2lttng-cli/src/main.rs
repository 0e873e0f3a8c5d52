#![allow(missing_docs)]
#![allow(clippy::print_stderr)]

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;

use miette::IntoDiagnostic;

use dtrace2lttng_cli::CliOpts;

use tracing_subscriber::EnvFilter;

fn main() {
    let cli = CliOpts::parse_from_cmdline();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_env_var("DTRACE2LTTNG_LOG")
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = evaluate_translate(cli.input, cli.output, cli.provider) {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn evaluate_translate(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    provider: String,
) -> miette::Result<()> {
    let input: Box<dyn Read> = if let Some(input) = input {
        Box::new(File::open(input).into_diagnostic()?)
    } else {
        Box::new(std::io::stdin().lock())
    };

    let output: Box<dyn Write> = if let Some(output) = output {
        Box::new(BufWriter::new(File::create(output).into_diagnostic()?))
    } else {
        Box::new(std::io::stdout().lock())
    };

    dtrace2lttng_cli::evaluate_translate(input, output, provider).map(|_| ())
}
