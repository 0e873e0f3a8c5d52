/// Error type of this crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A probe argument has a type that maps to no tracepoint field kind.
    #[error("bad type {type_fragment:?} in probe {probe}({args})")]
    InvalidArgumentType {
        /// Normalized name of the probe.
        probe: String,

        /// Argument list of the probe, with whitespace collapsed.
        args: String,

        /// Type of the offending argument.
        type_fragment: String,
    },

    /// Failure to write the generated tracepoints.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type of this crate.
pub type Result<T> = core::result::Result<T, Error>;
