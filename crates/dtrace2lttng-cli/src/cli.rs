use std::path::PathBuf;

use dtrace2lttng_core::emit::DEFAULT_PROVIDER;

/// Translates DTrace probe declarations into LTTng tracepoint definitions.
///
/// Probe declarations are read from standard input (or `--input`), and the
/// tracepoint definitions are written to standard output (or `--output`).
#[derive(clap::Parser)]
#[clap(version)]
pub struct CliOpts {
    /// Path to the DTrace provider definition to translate.
    #[clap(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Path to the optional destination of the tracepoint definitions.
    #[clap(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Tracepoint provider name of the generated events.
    #[clap(short, long, value_name = "NAME", default_value = DEFAULT_PROVIDER)]
    pub provider: String,
}

impl CliOpts {
    /// Parses the CLI from the command-line.
    ///
    /// # Warning
    ///
    /// Exits on error.
    pub fn parse_from_cmdline() -> Self {
        <Self as clap::Parser>::parse()
    }
}
