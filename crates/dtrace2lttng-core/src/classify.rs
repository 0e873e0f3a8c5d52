use core::fmt;
use core::mem;

use crate::extract::ProbeDeclaration;
use crate::lexer::{Lexer, TokenKind};
use crate::{Error, Result};

/// Kind of tracepoint field recording a probe argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Recorded with `ctf_integer`.
    Integer,

    /// Recorded with `ctf_string`.
    String,
}

/// Classification rule, matching argument types containing `needle`.
#[derive(Debug, Clone, Copy)]
pub struct TypeRule {
    /// Substring looked up in the argument type.
    pub needle: &'static str,

    /// Field kind of the matching arguments.
    pub kind: FieldKind,
}

/// Classification rules, by decreasing precedence.
///
/// `int` comes first, so `uint8_t` arguments are recorded as integers.
pub const TYPE_RULES: &[TypeRule] = &[
    TypeRule {
        needle: "int",
        kind: FieldKind::Integer,
    },
    TypeRule {
        needle: "char",
        kind: FieldKind::String,
    },
];

impl FieldKind {
    /// Returns the kind of the first rule matching `type_fragment`, if any.
    pub fn of_type(type_fragment: &str) -> Option<Self> {
        TYPE_RULES
            .iter()
            .find(|rule| type_fragment.contains(rule.needle))
            .map(|rule| rule.kind)
    }
}

/// Declaration of a single probe argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDeclaration {
    /// Type of the argument, with its tokens separated by single spaces.
    pub type_fragment: String,

    /// Name of the argument.
    pub identifier: String,
}

impl ArgumentDeclaration {
    fn from_tokens(mut tokens: Vec<&str>) -> Self {
        let identifier = tokens.pop().unwrap_or_default().to_owned();

        Self {
            type_fragment: tokens.join(" "),
            identifier,
        }
    }
}

/// Splits a probe argument list on its commas.
///
/// Commas are never nested, so types containing commas (e.g., function
/// pointers) are not supported. In each argument the last token is the
/// identifier, and the preceding ones are the type.
pub fn split_arguments(raw_args: &str) -> Vec<ArgumentDeclaration> {
    let mut arguments = Vec::new();
    let mut tokens = Vec::new();

    for token in Lexer::new(raw_args) {
        match token.kind {
            TokenKind::Comma => {
                arguments.push(ArgumentDeclaration::from_tokens(mem::take(&mut tokens)));
            }
            TokenKind::Whitespace => (),
            _ => tokens.push(token.text(raw_args)),
        }
    }

    arguments.push(ArgumentDeclaration::from_tokens(tokens));
    arguments
}

/// Probe argument with its field kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedArgument {
    /// Declaration of the argument.
    pub declaration: ArgumentDeclaration,

    /// Kind of field recording the argument.
    pub kind: FieldKind,
}

impl ClassifiedArgument {
    /// Returns the tracepoint field recording this argument.
    pub fn field(&self) -> Field<'_> {
        let ArgumentDeclaration {
            type_fragment,
            identifier,
        } = &self.declaration;

        match self.kind {
            FieldKind::Integer => Field::Integer {
                type_fragment,
                identifier,
            },
            FieldKind::String => Field::String { identifier },
        }
    }
}

/// Tracepoint field, displayed as its `TP_FIELDS` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    /// Integer field.
    Integer {
        /// C type of the integer.
        type_fragment: &'a str,

        /// Name of the field.
        identifier: &'a str,
    },

    /// Null-terminated string field.
    String {
        /// Name of the field.
        identifier: &'a str,
    },
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer {
                type_fragment,
                identifier,
            } => write!(f, "ctf_integer({type_fragment}, {identifier}, {identifier}_arg)"),
            Self::String { identifier } => write!(f, "ctf_string({identifier}, {identifier}_arg)"),
        }
    }
}

/// Tracepoint event derived from a probe declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracepointEvent {
    /// Normalized name of the probe.
    pub name: String,

    /// Classified arguments of the probe, in declaration order.
    pub arguments: Vec<ClassifiedArgument>,
}

/// Classifies every argument of `probe`.
///
/// Fails on the first argument whose type matches none of the [TYPE_RULES].
pub fn classify_probe(probe: &ProbeDeclaration<'_>) -> Result<TracepointEvent> {
    let name = probe.normalized_name();

    let arguments = split_arguments(probe.raw_args())
        .into_iter()
        .map(|declaration| match FieldKind::of_type(&declaration.type_fragment) {
            Some(kind) => Ok(ClassifiedArgument { declaration, kind }),
            None => Err(Error::InvalidArgumentType {
                probe: name.clone(),
                args: collapse_whitespace(probe.raw_args()),
                type_fragment: declaration.type_fragment,
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TracepointEvent { name, arguments })
}

/// Replaces every whitespace run of `text` with a single space.
fn collapse_whitespace(text: &str) -> String {
    Lexer::new(text)
        .map(|tok| match tok.kind {
            TokenKind::Whitespace => " ",
            _ => tok.text(text),
        })
        .collect()
}
