//! Brace-aware scanner over component script text.
//!
//! The scanner understands just enough JavaScript to delimit object
//! literals: quoted strings, template literals, line and block comments,
//! and nested `()`, `[]` and `{}` groups. It never builds a syntax tree.

use std::ops::Range;

/// A cursor over a source string.
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Create a scanner positioned at a byte offset.
    pub fn at(source: &'a str, pos: usize) -> Self {
        Self { source, pos }
    }

    /// Get the current position.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Get the remaining source.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Peek at the next character.
    pub fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consume and return the next character.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Check if the remaining source starts with the given string.
    pub fn starts_with(&self, s: &str) -> bool {
        self.remaining().starts_with(s)
    }

    /// Consume a string if the remaining source starts with it.
    pub fn consume(&mut self, s: &str) -> bool {
        if self.starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Check if at end of input.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Skip whitespace and comments.
    pub fn skip_trivia(&mut self) {
        loop {
            while matches!(self.peek_char(), Some(c) if c.is_whitespace()) {
                self.next_char();
            }
            if !self.skip_comment() {
                break;
            }
        }
    }

    /// Skip a `//` or `/* */` comment if one starts here.
    fn skip_comment(&mut self) -> bool {
        if self.consume("//") {
            while let Some(c) = self.next_char() {
                if c == '\n' {
                    break;
                }
            }
            true
        } else if self.consume("/*") {
            match self.remaining().find("*/") {
                Some(offset) => self.pos += offset + 2,
                None => self.pos = self.source.len(),
            }
            true
        } else {
            false
        }
    }

    /// Read a JavaScript identifier.
    pub fn read_identifier(&mut self) -> Option<&'a str> {
        let start = self.pos;
        match self.peek_char() {
            Some(c) if is_ident_start(c) => {
                self.next_char();
            }
            _ => return None,
        }
        while matches!(self.peek_char(), Some(c) if is_ident_continue(c)) {
            self.next_char();
        }
        Some(&self.source[start..self.pos])
    }

    /// Read a `'`, `"` or `` ` `` delimited literal.
    ///
    /// Returns `None` when no literal starts here or it is unterminated; the
    /// position is left unchanged in that case.
    pub fn read_quoted_string(&mut self) -> Option<QuotedLiteral<'a>> {
        let start = self.pos;
        let quote = self.peek_char()?;
        if !matches!(quote, '\'' | '"' | '`') {
            return None;
        }
        self.next_char();

        let value_start = self.pos;
        while let Some(c) = self.next_char() {
            if c == '\\' {
                self.next_char();
            } else if c == quote {
                return Some(QuotedLiteral {
                    raw: &self.source[value_start..self.pos - 1],
                    quote,
                    span: start..self.pos,
                });
            } else if c == '\n' && quote != '`' {
                break;
            }
        }

        self.pos = start;
        None
    }

    /// Skip one value expression, stopping before a top-level `,` or the
    /// closing delimiter of the enclosing group.
    fn skip_value(&mut self) {
        let mut depth = 0usize;
        while let Some(c) = self.peek_char() {
            match c {
                '\'' | '"' | '`' => {
                    if self.read_quoted_string().is_none() {
                        self.next_char();
                    }
                }
                '/' if self.skip_comment() => {}
                '(' | '[' | '{' => {
                    depth += 1;
                    self.next_char();
                }
                ')' | ']' | '}' => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                    self.next_char();
                }
                ',' if depth == 0 => break,
                _ => {
                    self.next_char();
                }
            }
        }
    }
}

/// A quoted literal as it appears in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotedLiteral<'a> {
    /// The text between the quotes, escapes left as written.
    pub raw: &'a str,
    /// The quote character.
    pub quote: char,
    /// The byte range of the literal including both quotes.
    pub span: Range<usize>,
}

impl QuotedLiteral<'_> {
    /// The literal's value with simple escape sequences resolved.
    pub fn value(&self) -> String {
        unescape(self.raw)
    }
}

/// One `key: value` entry at the top level of an object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry<'a> {
    /// The key, without quotes.
    pub key: &'a str,
    /// Byte range of the value expression, trimmed.
    pub value: Range<usize>,
}

/// Find the `}` matching the `{` at byte offset `open`.
///
/// Returns `None` if `open` is not a `{` or the literal is unterminated.
pub fn matching_brace(source: &str, open: usize) -> Option<usize> {
    if source.as_bytes().get(open) != Some(&b'{') {
        return None;
    }

    let mut scanner = Scanner::at(source, open + 1);
    loop {
        scanner.skip_value();
        // Stray `)` and `]` are stepped over along with separators.
        if scanner.next_char()? == '}' {
            return Some(scanner.pos() - 1);
        }
    }
}

/// List the top-level `key: value` entries of the object body in `body`.
///
/// Shorthand properties, spreads and methods are skipped. Quoted keys are
/// reported without their quotes.
pub fn object_entries(source: &str, body: Range<usize>) -> Vec<ObjectEntry<'_>> {
    let inner = &source[..body.end];
    let mut scanner = Scanner::at(inner, body.start);
    let mut entries = Vec::new();

    while !scanner.is_eof() {
        scanner.skip_trivia();
        if scanner.is_eof() {
            break;
        }

        let key = match scanner.peek_char() {
            Some('\'' | '"') => scanner.read_quoted_string().map(|lit| lit.raw),
            _ => scanner.read_identifier(),
        };

        if let Some(key) = key {
            scanner.skip_trivia();
            if scanner.consume(":") {
                scanner.skip_trivia();
                let value_start = scanner.pos();
                scanner.skip_value();
                let value_end = value_start + inner[value_start..scanner.pos()].trim_end().len();
                entries.push(ObjectEntry {
                    key,
                    value: value_start..value_end,
                });
            }
        }

        scanner.skip_value();
        if !scanner.consume(",") {
            // A stray closer inside the body; step over it.
            scanner.next_char();
        }
    }

    entries
}

/// Resolve the escape sequences a prop default is likely to contain.
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Render a value as a single-quoted JavaScript string literal.
pub fn single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Check whether `name` is a plain JavaScript identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if is_ident_start(c)) && chars.all(is_ident_continue)
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_quoted_string() {
        let mut scanner = Scanner::new(r#""hello \"world\"" rest"#);
        let lit = scanner.read_quoted_string().unwrap();
        assert_eq!(lit.raw, r#"hello \"world\""#);
        assert_eq!(lit.value(), r#"hello "world""#);
        assert_eq!(lit.span, 0..17);
    }

    #[test]
    fn test_unterminated_string_is_rejected() {
        let mut scanner = Scanner::new("'open\nnext");
        assert!(scanner.read_quoted_string().is_none());
        assert_eq!(scanner.pos(), 0);
    }

    #[test]
    fn test_matching_brace_nested() {
        let source = "a: { b: { c: 1 }, d: '}' } tail";
        assert_eq!(matching_brace(source, 3), Some(25));
    }

    #[test]
    fn test_matching_brace_skips_comments_and_templates() {
        let source = "{ /* } */ x: `${a}}`, // }\n y: 2 }";
        assert_eq!(matching_brace(source, 0), Some(source.len() - 1));
    }

    #[test]
    fn test_matching_brace_unterminated() {
        assert_eq!(matching_brace("{ a: { b: 1 }", 0), None);
        assert_eq!(matching_brace("no brace", 0), None);
    }

    #[test]
    fn test_object_entries() {
        let source = "{ type: String, 'default': 'x', ...rest, short, fn() { return 1 }, n: [1, 2] }";
        let close = matching_brace(source, 0).unwrap();
        let entries = object_entries(source, 1..close);
        let keys: Vec<_> = entries.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["type", "default", "n"]);
        assert_eq!(&source[entries[0].value.clone()], "String");
        assert_eq!(&source[entries[1].value.clone()], "'x'");
        assert_eq!(&source[entries[2].value.clone()], "[1, 2]");
    }

    #[test]
    fn test_object_entries_ignore_nested_keys() {
        let source = "{ inner: { default: 'no' }, type: Object }";
        let close = matching_brace(source, 0).unwrap();
        let keys: Vec<_> = object_entries(source, 1..close)
            .into_iter()
            .map(|e| e.key)
            .collect();
        assert_eq!(keys, vec!["inner", "type"]);
    }

    #[test]
    fn test_single_quoted_escapes() {
        assert_eq!(single_quoted("it's"), r"'it\'s'");
        assert_eq!(single_quoted(r"a\b"), r"'a\\b'");
        assert_eq!(unescape(r"it\'s"), "it's");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("buttonText"));
        assert!(is_identifier("$attrs"));
        assert!(is_identifier("données"));
        assert!(is_identifier("größe2"));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier("a b"));
        assert!(!is_identifier(""));
    }
}
