//! Lossless line tokenizer.
//!
//! Scans left to right and at each position tries, in order: a comment
//! marker, a string delimiter, a word (keyword or identifier) and a numeric
//! literal. Anything else becomes plain text, and adjacent plain slices are
//! merged. Every step consumes at least one character, and the concatenated
//! token contents always equal the input line.

use super::language::LanguageSpec;
use crate::model::{SyntaxToken, TokenKind};
use crate::traits::{DefaultPalette, TokenPalette};
use std::ops::Range;

/// Tokenize one line with the default palette.
///
/// Unknown languages produce a single plain token; an empty line produces no
/// tokens.
///
/// # Example
/// ```
/// use gh_diff_narrative::highlight::tokenize;
/// use gh_diff_narrative::TokenKind;
///
/// let tokens = tokenize("// todo: fix", "javascript");
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].kind, TokenKind::Comment);
/// ```
pub fn tokenize(line: &str, language: &str) -> Vec<SyntaxToken> {
    tokenize_with_palette(line, LanguageSpec::lookup(language), &DefaultPalette)
}

/// Tokenize one line for an already-resolved language and palette.
pub fn tokenize_with_palette(
    line: &str,
    spec: &LanguageSpec,
    palette: &dyn TokenPalette,
) -> Vec<SyntaxToken> {
    if line.is_empty() {
        return Vec::new();
    }

    let spans = if spec.is_plain_text() {
        vec![(TokenKind::Plain, 0..line.len())]
    } else {
        Lexer::new(line, spec).run()
    };

    spans
        .into_iter()
        .map(|(kind, range)| SyntaxToken {
            content: line[range].to_string(),
            kind,
            color: palette.color(kind).to_string(),
            style: palette.style(kind),
        })
        .collect()
}

struct Lexer<'a> {
    line: &'a str,
    spec: &'a LanguageSpec,
    pos: usize,
    spans: Vec<(TokenKind, Range<usize>)>,
}

impl<'a> Lexer<'a> {
    fn new(line: &'a str, spec: &'a LanguageSpec) -> Self {
        Self {
            line,
            spec,
            pos: 0,
            spans: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<(TokenKind, Range<usize>)> {
        let line = self.line;
        while self.pos < line.len() {
            let rest = &line[self.pos..];
            let (kind, len) = self
                .comment(rest)
                .or_else(|| self.string(rest))
                .or_else(|| self.word(rest))
                .or_else(|| self.number(rest))
                .unwrap_or_else(|| (TokenKind::Plain, first_char_len(rest)));
            debug_assert!(len > 0, "lexer must always make progress");
            self.push(kind, len);
        }
        self.spans
    }

    fn push(&mut self, kind: TokenKind, len: usize) {
        let end = self.pos + len;
        match self.spans.last_mut() {
            Some((TokenKind::Plain, range)) if kind == TokenKind::Plain => range.end = end,
            _ => self.spans.push((kind, self.pos..end)),
        }
        self.pos = end;
    }

    /// Longest matching comment marker wins.
    fn comment(&self, rest: &str) -> Option<(TokenKind, usize)> {
        let line_marker = self
            .spec
            .line_comments
            .iter()
            .filter(|m| rest.starts_with(**m))
            .map(|m| m.len())
            .max();

        let block_marker = self
            .spec
            .block_comment
            .filter(|(open, _)| rest.starts_with(open));

        match (line_marker, block_marker) {
            (Some(line_len), Some((open, _))) if line_len >= open.len() => {
                Some((TokenKind::Comment, rest.len()))
            }
            (_, Some((open, close))) => {
                let end = rest[open.len()..]
                    .find(close)
                    .map_or(rest.len(), |idx| open.len() + idx + close.len());
                Some((TokenKind::Comment, end))
            }
            (Some(_), None) => Some((TokenKind::Comment, rest.len())),
            (None, None) => None,
        }
    }

    /// A quoted literal up to the matching quote, or to end of line.
    fn string(&self, rest: &str) -> Option<(TokenKind, usize)> {
        let quote = rest.chars().next()?;
        if !self.spec.string_delimiters.contains(&quote) {
            return None;
        }

        let mut chars = rest.char_indices().skip(1);
        while let Some((idx, ch)) = chars.next() {
            if ch == '\\' {
                chars.next();
            } else if ch == quote {
                return Some((TokenKind::String, idx + ch.len_utf8()));
            }
        }
        Some((TokenKind::String, rest.len()))
    }

    fn word(&self, rest: &str) -> Option<(TokenKind, usize)> {
        let first = rest.chars().next()?;
        if !(first.is_alphabetic() || first == '_') {
            return None;
        }

        let len = rest
            .char_indices()
            .find(|(_, ch)| !is_word_char(*ch))
            .map_or(rest.len(), |(idx, _)| idx);

        let kind = if self.spec.is_keyword(&rest[..len]) {
            TokenKind::Keyword
        } else {
            TokenKind::Plain
        };
        Some((kind, len))
    }

    /// A digit run, optionally followed by `.` and another digit run.
    fn number(&self, rest: &str) -> Option<(TokenKind, usize)> {
        let int_len = digit_run(rest);
        if int_len == 0 {
            return None;
        }

        let after = &rest[int_len..];
        let frac_len = after
            .strip_prefix('.')
            .map(digit_run)
            .filter(|len| *len > 0)
            .map_or(0, |len| len + 1);

        Some((TokenKind::Number, int_len + frac_len))
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

fn first_char_len(s: &str) -> usize {
    s.chars().next().map_or(1, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(line: &str, language: &str) -> Vec<(TokenKind, String)> {
        tokenize(line, language)
            .into_iter()
            .map(|t| (t.kind, t.content))
            .collect()
    }

    fn concat(line: &str, language: &str) -> String {
        tokenize(line, language)
            .into_iter()
            .map(|t| t.content)
            .collect()
    }

    #[test]
    fn test_line_comment_is_single_token() {
        let tokens = tokenize("// todo: fix", "javascript");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].content, "// todo: fix");
        assert!(tokens[0].style.is_some());
    }

    #[test]
    fn test_keywords_strings_numbers() {
        assert_eq!(
            kinds("const x = \"hi\" + 42;", "javascript"),
            vec![
                (TokenKind::Keyword, "const".to_string()),
                (TokenKind::Plain, " x = ".to_string()),
                (TokenKind::String, "\"hi\"".to_string()),
                (TokenKind::Plain, " + ".to_string()),
                (TokenKind::Number, "42".to_string()),
                (TokenKind::Plain, ";".to_string()),
            ]
        );
    }

    #[test]
    fn test_keyword_needs_whole_word() {
        assert_eq!(
            kinds("format iffy", "rust"),
            vec![(TokenKind::Plain, "format iffy".to_string())]
        );
        assert_eq!(
            kinds("x1 = 2", "python"),
            vec![
                (TokenKind::Plain, "x1 = ".to_string()),
                (TokenKind::Number, "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_trailing_comment_after_code() {
        assert_eq!(
            kinds("return 3.14 # pi", "python"),
            vec![
                (TokenKind::Keyword, "return".to_string()),
                (TokenKind::Plain, " ".to_string()),
                (TokenKind::Number, "3.14".to_string()),
                (TokenKind::Plain, " ".to_string()),
                (TokenKind::Comment, "# pi".to_string()),
            ]
        );
    }

    #[test]
    fn test_comment_marker_inside_string_is_string() {
        assert_eq!(
            kinds("url = \"http://x\"", "go"),
            vec![
                (TokenKind::Plain, "url = ".to_string()),
                (TokenKind::String, "\"http://x\"".to_string()),
            ]
        );
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        assert_eq!(
            kinds("let s = \"open", "rust"),
            vec![
                (TokenKind::Keyword, "let".to_string()),
                (TokenKind::Plain, " s = ".to_string()),
                (TokenKind::String, "\"open".to_string()),
            ]
        );
    }

    #[test]
    fn test_escaped_quote_stays_in_string() {
        assert_eq!(
            kinds(r#""a\"b" c"#, "javascript"),
            vec![
                (TokenKind::String, r#""a\"b""#.to_string()),
                (TokenKind::Plain, " c".to_string()),
            ]
        );
    }

    #[test]
    fn test_block_comment_closes_on_same_line() {
        assert_eq!(
            kinds("int /* size */ n", "c"),
            vec![
                (TokenKind::Keyword, "int".to_string()),
                (TokenKind::Plain, " ".to_string()),
                (TokenKind::Comment, "/* size */".to_string()),
                (TokenKind::Plain, " n".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_language_is_single_plain_token() {
        let tokens = tokenize("fn main() { // hi", "cobol-2099");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Plain);
        assert_eq!(tokens[0].content, "fn main() { // hi");
    }

    #[test]
    fn test_empty_line() {
        assert!(tokenize("", "rust").is_empty());
        assert!(tokenize("", "nope").is_empty());
    }

    #[test]
    fn test_round_trip_on_awkward_input() {
        let lines = [
            "  \t  ",
            "'''",
            "\\",
            "/*",
            "a/*b*/c//d",
            "héllo wörld 12.x 1..2",
            "`template ${x}`",
            "日本語 = 'テスト' # コメント",
            "SELECT * FROM t -- done",
        ];
        for language in ["javascript", "python", "rust", "sql", "shell", "unknown"] {
            for line in lines {
                assert_eq!(concat(line, language), line, "{language}: {line:?}");
            }
        }
    }

    #[test]
    fn test_no_empty_tokens() {
        for token in tokenize("if (a) { return b; } // c", "typescript") {
            assert!(!token.content.is_empty());
        }
    }
}
