use std::io::Write;

use crate::Result;
use crate::classify::classify_probe;
use crate::emit::{EmitConfig, Emitter};
use crate::extract::ProbeExtractor;

/// Translates every probe declaration of `input` into a tracepoint event
/// definition written to `output`, in declaration order.
///
/// Returns the number of written definitions. On error, the definitions of
/// the previous probes are kept in `output`, and nothing is written for the
/// failing probe and the following ones.
#[tracing::instrument(name = "Translate", skip_all, fields(provider = %config.provider))]
pub fn translate(input: &str, output: impl Write, config: EmitConfig) -> Result<usize> {
    let mut emitter = Emitter::new(output, config);
    let mut count = 0;

    for probe in ProbeExtractor::new(input) {
        tracing::debug!(probe = probe.name(), line = probe.line(), "probe found");

        let event = classify_probe(&probe)?;
        emitter.emit(&event)?;

        count += 1;
    }

    emitter.flush()?;

    tracing::info!(count, "tracepoints generated");

    Ok(count)
}
