use crate::{keywords::keyword_kind, priv_prelude::*};
use std::iter::FusedIterator;

#[extension_trait]
impl CharExt for char {
    fn as_single_punct(self) -> Option<TokenKind> {
        match self {
            ';' => Some(TokenKind::Semicolon),
            ',' => Some(TokenKind::Comma),
            '(' => Some(TokenKind::ParenthesisOpen),
            ')' => Some(TokenKind::ParenthesisClose),
            '{' => Some(TokenKind::CurlyOpen),
            '}' => Some(TokenKind::CurlyClose),
            '[' => Some(TokenKind::BracketOpen),
            ']' => Some(TokenKind::BracketClose),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Times),
            '=' => Some(TokenKind::Equal),
            _ => None,
        }
    }

    fn is_identifier_start(self) -> bool {
        self.is_xid_start()
    }

    fn is_identifier_continue(self) -> bool {
        self.is_xid_continue()
    }
}

#[derive(Clone)]
struct CharIndicesInner<'a> {
    src: &'a str,
    position: usize,
}

impl<'a> Iterator for CharIndicesInner<'a> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<(usize, char)> {
        let c = self.src[self.position..].chars().next()?;
        let ret = (self.position, c);
        self.position += c.len_utf8();
        Some(ret)
    }
}

type CharIndices<'a> = std::iter::Peekable<CharIndicesInner<'a>>;

/// Lazily turns source text into tokens.
///
/// Comments and whitespace never surface. Characters that start no token come out as
/// `ILLEGAL_CHAR` instead of stopping the scan. The last token is always `EOF`, after which
/// the iterator is exhausted.
pub struct Scanner<'a> {
    src: &'a Arc<str>,
    char_indices: CharIndices<'a>,
    line: usize,
    line_start: usize,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a Arc<str>) -> Scanner<'a> {
        Scanner {
            src,
            char_indices: CharIndicesInner {
                src: &src[..],
                position: 0,
            }
            .peekable(),
            line: 1,
            line_start: 0,
            finished: false,
        }
    }

    fn scan_token(&mut self) -> Token {
        while let Some((index, character)) = self.char_indices.next() {
            if character == '\n' {
                self.start_line(index + 1);
                continue;
            }
            if character.is_whitespace() {
                continue;
            }
            if character == '/' {
                match self.char_indices.peek() {
                    Some((_, '/')) => {
                        self.skip_line_comment();
                        continue;
                    }
                    Some((_, '*')) => {
                        if self.skip_block_comment() {
                            continue;
                        }
                        return self.token_until(TokenKind::IllegalChar, index);
                    }
                    _ => return self.token_until(TokenKind::IllegalChar, index),
                }
            }
            if character == '"' {
                return self.scan_string(index);
            }
            if character.is_identifier_start() {
                while let Some((_, next_character)) = self.char_indices.peek() {
                    if !next_character.is_identifier_continue() {
                        break;
                    }
                    let _ = self.char_indices.next();
                }
                let end = self.current_offset();
                let kind = keyword_kind(&self.src[index..end]).unwrap_or(TokenKind::Identifier);
                return self.token(kind, index, end);
            }
            if character.is_ascii_digit() {
                while let Some((_, next_character)) = self.char_indices.peek() {
                    if !next_character.is_ascii_digit() {
                        break;
                    }
                    let _ = self.char_indices.next();
                }
                return self.token_until(TokenKind::IntLiteral, index);
            }
            let kind = match character {
                ':' if self.eat('=') => TokenKind::ColonEqual,
                ':' => TokenKind::Colon,
                '<' if self.eat('=') => TokenKind::LessThanEqual,
                '<' if self.eat('>') => TokenKind::Unequal,
                '<' => TokenKind::LessThan,
                '>' if self.eat('=') => TokenKind::MoreThanEqual,
                '>' => TokenKind::MoreThan,
                other => other.as_single_punct().unwrap_or(TokenKind::IllegalChar),
            };
            return self.token_until(kind, index);
        }
        let end = self.src.len();
        Token::new(
            TokenKind::Eof,
            Span::end_of(self.src.clone()),
            self.line,
            self.column_of(end),
        )
    }

    fn eat(&mut self, expected: char) -> bool {
        self.char_indices
            .next_if(|&(_, character)| character == expected)
            .is_some()
    }

    fn skip_line_comment(&mut self) {
        while let Some((index, character)) = self.char_indices.next() {
            if character == '\n' {
                self.start_line(index + 1);
                break;
            }
        }
    }

    /// Skips `/* ... */`. The opening `/` is already consumed and `*` is next.
    ///
    /// On an unterminated comment nothing is consumed beyond the `/` and `false` is returned.
    fn skip_block_comment(&mut self) -> bool {
        let checkpoint = self.char_indices.clone();
        let _ = self.char_indices.next();
        let mut last_newline = None;
        let mut newlines = 0;
        while let Some((index, character)) = self.char_indices.next() {
            match character {
                '\n' => {
                    newlines += 1;
                    last_newline = Some(index);
                }
                '*' if self.eat('/') => {
                    self.line += newlines;
                    if let Some(index) = last_newline {
                        self.line_start = index + 1;
                    }
                    return true;
                }
                _ => (),
            }
        }
        self.char_indices = checkpoint;
        false
    }

    /// Scans `"..."` where `""` stands for one quote. Strings may not span lines.
    fn scan_string(&mut self, start: usize) -> Token {
        let checkpoint = self.char_indices.clone();
        while let Some((_, character)) = self.char_indices.next() {
            match character {
                '"' if self.eat('"') => (),
                '"' => return self.token_until(TokenKind::StringLiteral, start),
                '\n' => break,
                _ => (),
            }
        }
        self.char_indices = checkpoint;
        self.token_until(TokenKind::IllegalChar, start)
    }

    fn start_line(&mut self, line_start: usize) {
        self.line += 1;
        self.line_start = line_start;
    }

    fn current_offset(&mut self) -> usize {
        match self.char_indices.peek() {
            Some(&(offset, _)) => offset,
            None => self.src.len(),
        }
    }

    /// Columns are 1-based and count characters from the start of the current line.
    fn column_of(&self, offset: usize) -> usize {
        self.src[self.line_start..offset].chars().count() + 1
    }

    fn token_until(&mut self, kind: TokenKind, start: usize) -> Token {
        let end = self.current_offset();
        self.token(kind, start, end)
    }

    fn token(&self, kind: TokenKind, start: usize, end: usize) -> Token {
        let span = Span::new(self.src.clone(), start, end)
            .unwrap_or_else(|| Span::end_of(self.src.clone()));
        Token::new(kind, span, self.line, self.column_of(start))
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.scan_token();
        self.finished = token.is(TokenKind::Eof);
        tracing::trace!(%token, line = token.line, column = token.column, "scanned");
        Some(token)
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scans all of `src` eagerly. The returned tokens end with `EOF`.
pub fn lex(src: &Arc<str>) -> Vec<Token> {
    let tokens = Scanner::new(src).collect::<Vec<_>>();
    tracing::debug!(tokens = tokens.len(), "scanned source");
    tokens
}
