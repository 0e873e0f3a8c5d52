use std::io::{Read, Write};

use dtrace2lttng_core::emit::EmitConfig;
use miette::IntoDiagnostic;

/// Runs the translation of the probe declarations read from `input`.
///
/// The whole input is read before any tracepoint definition is written.
pub fn evaluate_translate(
    mut input: impl Read,
    output: impl Write,
    provider: String,
) -> miette::Result<usize> {
    validate_provider(&provider).into_diagnostic()?;

    let mut source = String::new();
    input.read_to_string(&mut source).into_diagnostic()?;

    tracing::debug!(bytes = source.len(), "input read");

    dtrace2lttng_core::translate(&source, output, EmitConfig { provider }).into_diagnostic()
}

fn validate_provider(provider: &str) -> Result<(), Error> {
    let mut chars = provider.chars();

    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if is_identifier {
        Ok(())
    } else {
        Err(Error::InvalidProvider(provider.to_owned()))
    }
}

/// Error type of the CLI.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The tracepoint provider name is not a C identifier.
    #[error("invalid tracepoint provider name: {0:?}")]
    InvalidProvider(String),
}

#[cfg(test)]
mod tests {
    use super::{Error, validate_provider};

    #[test]
    fn provider_must_be_identifier() {
        assert!(validate_provider("erlang").is_ok());
        assert!(validate_provider("_my_app2").is_ok());

        for provider in ["", "2app", "my-app", "my app", "é"] {
            assert!(matches!(
                validate_provider(provider),
                Err(Error::InvalidProvider(p)) if p == provider
            ));
        }
    }
}
