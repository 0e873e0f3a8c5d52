use core::ops::Range;

/// Kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Maximal run of alphanumeric or `_` characters.
    Word,

    /// Maximal run of whitespace characters (newlines included).
    Whitespace,

    /// `(`
    LParen,

    /// `)`
    RParen,

    /// `,`
    Comma,

    /// `;`
    Semicolon,

    /// Any other single character (e.g., `*`).
    Punct,
}

/// Token produced by [Lexer], referencing its source text by byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Kind of the token.
    pub kind: TokenKind,

    /// Byte span of the token within the lexed source.
    pub span: Range<usize>,
}

impl Token {
    /// Returns the text of this token within `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }
}

/// Lazy tokenizer over probe definition text.
///
/// The concatenation of all token texts is the lexed source itself, so no
/// character is ever dropped.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer starting at the beginning of `source`.
    pub const fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Returns the source being lexed.
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the byte offset of the next token.
    pub const fn offset(&self) -> usize {
        self.pos
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let c = self.source[start..].chars().next()?;

        let (kind, end) = match c {
            '(' => (TokenKind::LParen, start + 1),
            ')' => (TokenKind::RParen, start + 1),
            ',' => (TokenKind::Comma, start + 1),
            ';' => (TokenKind::Semicolon, start + 1),
            c if is_word_char(c) => (TokenKind::Word, scan_while(self.source, start, is_word_char)),
            c if c.is_whitespace() => (
                TokenKind::Whitespace,
                scan_while(self.source, start, char::is_whitespace),
            ),
            c => (TokenKind::Punct, start + c.len_utf8()),
        };

        self.pos = end;

        Some(Token {
            kind,
            span: start..end,
        })
    }
}

/// Returns the end offset of the run of characters matching `pred` at `start`.
fn scan_while(source: &str, start: usize, pred: impl Fn(char) -> bool) -> usize {
    source[start..]
        .char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(source.len(), |(i, _)| start + i)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::{Lexer, TokenKind};

    fn kinds_and_texts(source: &str) -> Vec<(TokenKind, &str)> {
        Lexer::new(source)
            .map(|tok| (tok.kind, tok.text(source)))
            .collect()
    }

    #[test]
    fn lex_probe_declaration() {
        assert_eq!(
            kinds_and_texts("probe foo(char *x);"),
            vec![
                (TokenKind::Word, "probe"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Word, "foo"),
                (TokenKind::LParen, "("),
                (TokenKind::Word, "char"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Punct, "*"),
                (TokenKind::Word, "x"),
                (TokenKind::RParen, ")"),
                (TokenKind::Semicolon, ";"),
            ]
        );
    }

    #[test]
    fn whitespace_runs_span_lines() {
        assert_eq!(
            kinds_and_texts("a \n\t b"),
            vec![
                (TokenKind::Word, "a"),
                (TokenKind::Whitespace, " \n\t "),
                (TokenKind::Word, "b"),
            ]
        );
    }

    #[test]
    fn tokens_cover_whole_source() {
        let source = "/* comment */\nprovider erlang {\n\tprobe é_1(uint64_t  v, ...);\n};\n";

        let rebuilt: String = Lexer::new(source).map(|tok| tok.text(source)).collect();

        assert_eq!(rebuilt, source);
    }

    #[test]
    fn empty_source_has_no_token() {
        assert_eq!(Lexer::new("").next(), None);
    }
}
