use std::io::{self, Write};

use crate::classify::TracepointEvent;

/// Maximum number of arguments of an LTTng tracepoint.
///
/// Arguments past this limit are dropped from the generated event.
pub const MAX_TRACEPOINT_ARGS: usize = 10;

/// Provider name used when none is configured.
pub const DEFAULT_PROVIDER: &str = "erlang";

/// Configuration of the generated tracepoint events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Tracepoint provider of every event.
    pub provider: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_owned(),
        }
    }
}

/// Writer of `TRACEPOINT_EVENT` definitions.
pub struct Emitter<W> {
    output: W,
    config: EmitConfig,
}

impl<W: Write> Emitter<W> {
    /// Initializes the emitter with an output writer.
    pub const fn new(output: W, config: EmitConfig) -> Self {
        Self { output, config }
    }

    /// Writes the definition of `event`.
    ///
    /// The definition is rendered in full before being written.
    pub fn emit(&mut self, event: &TracepointEvent) -> io::Result<()> {
        if event.arguments.len() > MAX_TRACEPOINT_ARGS {
            tracing::warn!(
                probe = %event.name,
                dropped = event.arguments.len() - MAX_TRACEPOINT_ARGS,
                "too many arguments for a tracepoint",
            );
        }

        let definition = render(&self.config.provider, event);
        self.output.write_all(definition.as_bytes())
    }

    /// Flushes the output writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    /// Returns the output writer.
    pub fn into_inner(self) -> W {
        self.output
    }
}

/// Renders the `TRACEPOINT_EVENT` definition of `event`, followed by a blank
/// line.
pub fn render(provider: &str, event: &TracepointEvent) -> String {
    let arguments = event.arguments.iter().take(MAX_TRACEPOINT_ARGS);

    let args = arguments
        .clone()
        .map(|arg| {
            format!(
                "{}, {}_arg",
                arg.declaration.type_fragment, arg.declaration.identifier
            )
        })
        .collect::<Vec<_>>()
        .join(",\n\t\t");

    let fields = arguments
        .map(|arg| arg.field().to_string())
        .collect::<Vec<_>>()
        .join("\n\t\t");

    format!(
        "TRACEPOINT_EVENT(\n\t{provider},\n\t{name},\n\tTP_ARGS(\n\t\t{args}\n\t),\n\tTP_FIELDS(\n\t\t{fields}\n\t)\n)\n\n",
        name = event.name,
    )
}
