use crate::lexer::{Lexer, Token, TokenKind};

/// Probe declaration found in a DTrace provider definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeDeclaration<'a> {
    name: &'a str,
    raw_args: &'a str,
    line: usize,
}

impl<'a> ProbeDeclaration<'a> {
    /// Returns the probe name, as declared.
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the probe name with every `__` collapsed to `_`.
    ///
    /// DTrace turns `__` into `-` in probe names, which LTTng has no
    /// equivalent for.
    pub fn normalized_name(&self) -> String {
        self.name.replace("__", "_")
    }

    /// Returns the verbatim text between the declaration's parentheses.
    pub const fn raw_args(&self) -> &'a str {
        self.raw_args
    }

    /// Returns the 1-based line of the `probe` keyword.
    pub const fn line(&self) -> usize {
        self.line
    }
}

/// Lazy, single-pass scanner of probe declarations.
///
/// A declaration has the form `probe <name>(<args>);` where `probe` is the
/// first word of a line. The arguments span every character up to the first
/// `)`, newlines included, so nested parentheses are not supported. Text
/// that doesn't match this form is skipped.
#[derive(Debug, Clone)]
pub struct ProbeExtractor<'a> {
    tokens: Lexer<'a>,
    at_line_start: bool,
    line: usize,
}

impl<'a> ProbeExtractor<'a> {
    /// Creates an extractor scanning the whole `source`.
    pub const fn new(source: &'a str) -> Self {
        Self {
            tokens: Lexer::new(source),
            at_line_start: true,
            line: 1,
        }
    }
}

impl<'a> Iterator for ProbeExtractor<'a> {
    type Item = ProbeDeclaration<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.tokens.source();

        loop {
            let token = self.tokens.next()?;

            match token.kind {
                TokenKind::Whitespace => {
                    let newlines = token.text(source).matches('\n').count();
                    self.line += newlines;
                    self.at_line_start |= newlines > 0;
                }
                TokenKind::Word if self.at_line_start && token.text(source) == "probe" => {
                    self.at_line_start = false;

                    let mut lookahead = self.tokens.clone();

                    if let Some((name, raw_args)) = match_declaration(&mut lookahead) {
                        let line = self.line;

                        self.line += source[token.span.end..lookahead.offset()]
                            .matches('\n')
                            .count();
                        self.tokens = lookahead;

                        return Some(ProbeDeclaration {
                            name,
                            raw_args,
                            line,
                        });
                    }
                }
                _ => self.at_line_start = false,
            }
        }
    }
}

/// Matches the rest of a declaration following the `probe` keyword.
fn match_declaration<'a>(tokens: &mut Lexer<'a>) -> Option<(&'a str, &'a str)> {
    let source = tokens.source();

    expect(tokens, TokenKind::Whitespace)?;

    let name = expect(tokens, TokenKind::Word)?.text(source);
    let open = expect(tokens, TokenKind::LParen)?;
    let close = tokens.find(|tok| tok.kind == TokenKind::RParen)?;

    let mut next = tokens.next()?;
    if next.kind == TokenKind::Whitespace {
        next = tokens.next()?;
    }

    (next.kind == TokenKind::Semicolon).then_some((name, &source[open.span.end..close.span.start]))
}

fn expect(tokens: &mut Lexer<'_>, kind: TokenKind) -> Option<Token> {
    tokens.next().filter(|tok| tok.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::ProbeExtractor;

    fn extract(source: &str) -> Vec<(&str, &str)> {
        ProbeExtractor::new(source)
            .map(|probe| (probe.name(), probe.raw_args()))
            .collect()
    }

    #[test]
    fn no_probe() {
        assert!(extract("").is_empty());
        assert!(extract("provider erlang {\n};\n").is_empty());
    }

    #[test]
    fn single_probe() {
        assert_eq!(extract("probe p(int x);"), vec![("p", "int x")]);
    }

    #[test]
    fn indented_probes_over_several_lines() {
        let source = indoc::indoc! {"
            provider erlang {
                probe message__send(char *sender, char *receiver,
                                    uint32_t size, int token_label);

                probe process__spawn(char *p, char *mfa);
            };
        "};

        let probes: Vec<_> = ProbeExtractor::new(source).collect();

        assert_eq!(probes.len(), 2);

        assert_eq!(probes[0].name(), "message__send");
        assert_eq!(probes[0].normalized_name(), "message_send");
        assert_eq!(probes[0].line(), 2);
        assert_eq!(
            probes[0].raw_args(),
            "char *sender, char *receiver,\n                        uint32_t size, int token_label"
        );

        assert_eq!(probes[1].name(), "process__spawn");
        assert_eq!(probes[1].line(), 5);
    }

    #[test]
    fn whitespace_before_terminator() {
        assert_eq!(extract("probe p(int x) \n ;"), vec![("p", "int x")]);
    }

    #[test]
    fn probe_keyword_must_start_a_line() {
        assert!(extract("/* probe p(int x); */").is_empty());
        assert!(extract("x; probe p(int x);").is_empty());
        assert!(extract("probes p(int x);").is_empty());
    }

    #[test]
    fn scanning_resumes_after_terminator() {
        let source = indoc::indoc! {"
            probe a(int x); probe b(int y);
            probe
            probe f(int w);
        "};

        assert_eq!(extract(source), vec![("a", "int x"), ("f", "int w")]);
    }

    #[test]
    fn line_numbers_across_multiline_declarations() {
        let source = indoc::indoc! {"
            probe a(int x,
                    int y);
            probe bad(int x)

            probe c(int z);
        "};

        let lines: Vec<_> = ProbeExtractor::new(source)
            .map(|probe| (probe.name(), probe.line()))
            .collect();

        assert_eq!(lines, vec![("a", 1), ("c", 5)]);
    }

    #[test]
    fn malformed_declarations_are_skipped() {
        let source = indoc::indoc! {"
            probe missing_terminator(int x)
            probe spaced (int x);
            probe(int x);
            probe good(int x);
        "};

        assert_eq!(extract(source), vec![("good", "int x")]);
    }

    #[test]
    fn nested_parentheses_are_not_supported() {
        assert!(extract("probe p(int (*f)(int), int x);").is_empty());
    }

    #[test]
    fn normalize_double_underscores() {
        let probe = ProbeExtractor::new("probe a__b____c___d(int x);")
            .next()
            .expect("probe");

        assert_eq!(probe.normalized_name(), "a_b__c__d");
    }
}
