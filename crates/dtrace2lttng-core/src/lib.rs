//! This crate translates DTrace probe declarations into LTTng tracepoint
//! event definitions.
//!
//! The translation is a single forward pass over the probe definitions:
//! - The [ProbeExtractor](self::extract::ProbeExtractor) finds every
//!   `probe <name>(<args>);` declaration.
//! - The [classifier](self::classify::classify_probe) maps every argument
//!   to an integer or string tracepoint field.
//! - The [Emitter](self::emit::Emitter) writes one `TRACEPOINT_EVENT`
//!   definition per probe.
//!
//! ```
//! use dtrace2lttng_core::emit::EmitConfig;
//!
//! let mut header = Vec::new();
//!
//! let count = dtrace2lttng_core::translate(
//!     "probe process__spawn(char *p, int pid);",
//!     &mut header,
//!     EmitConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(count, 1);
//! assert!(String::from_utf8(header).unwrap().contains("ctf_integer(int, pid, pid_arg)"));
//! ```

/// Module classifying probe arguments into tracepoint fields.
pub mod classify;

/// Module writing tracepoint event definitions.
pub mod emit;

/// Module extracting probe declarations.
pub mod extract;

/// Module tokenizing probe definitions.
pub mod lexer;

mod error;
mod translate;

pub use self::error::{Error, Result};
pub use self::translate::translate;
