use crate::{priv_prelude::*, token::Scanner};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// A predictive parser holding exactly one token of lookahead.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a Arc<str>) -> Parser<'a> {
        let mut scanner = Scanner::new(src);
        let current = scanner
            .next()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, Span::end_of(src.clone()), 1, 1));
        Parser { scanner, current }
    }

    /// The lookahead token.
    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn has(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub fn has_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current.kind)
    }

    /// Consumes the lookahead and returns it. Past the end, `EOF` is returned again.
    pub fn advance(&mut self) -> Token {
        let next = match self.scanner.next() {
            Some(token) => token,
            None => self.current.clone(),
        };
        mem::replace(&mut self.current, next)
    }

    /// Consumes the lookahead if it is a `kind`.
    pub fn take(&mut self, kind: TokenKind) -> Option<Token> {
        self.has(kind).then(|| self.advance())
    }

    /// Consumes the lookahead if it is any of `kinds`.
    pub fn take_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        self.has_any(kinds).then(|| self.advance())
    }

    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        match self.take(kind) {
            Some(token) => Ok(token),
            None => Err(self.error(Expected::One(kind))),
        }
    }

    pub fn expect_any(&mut self, kinds: &[TokenKind]) -> ParseResult<Token> {
        match self.take_any(kinds) {
            Some(token) => Ok(token),
            None => Err(self.error(Expected::AnyOf(kinds.to_vec()))),
        }
    }

    /// A syntax error pointing at the lookahead.
    pub fn error(&self, expected: Expected) -> SyntaxError {
        SyntaxError::new(expected, self.current.clone())
    }

    /// Parses a `T` in its canonical way.
    pub fn parse<T: Parse>(&mut self) -> ParseResult<T> {
        T::parse(self)
    }

    /// Parses a `T` if the lookahead can begin one.
    pub fn parse_opt<T: Parse>(&mut self) -> ParseResult<Option<T>> {
        if self.has_any(T::FIRST) {
            self.parse().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Parses `T`s for as long as the lookahead can begin one.
    pub fn parse_while<T: Parse>(&mut self) -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        while let Some(item) = self.parse_opt()? {
            items.push(item);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn expect_reports_the_offending_token() {
        let src: Arc<str> = Arc::from("x ;");
        let mut parser = Parser::new(&src);
        assert_matches!(parser.expect(TokenKind::Identifier), Ok(token) if token.as_str() == "x");
        let err = parser.expect(TokenKind::ColonEqual).unwrap_err();
        assert_eq!(err.expected, Expected::One(TokenKind::ColonEqual));
        assert_eq!(err.found.kind, TokenKind::Semicolon);
        assert_eq!(err.found.column, 3);
    }

    #[test]
    fn advancing_past_the_end_keeps_returning_eof() {
        let src: Arc<str> = Arc::from("end");
        let mut parser = Parser::new(&src);
        assert!(parser.advance().is(TokenKind::End));
        assert!(parser.advance().is(TokenKind::Eof));
        assert!(parser.advance().is(TokenKind::Eof));
        assert!(parser.has(TokenKind::Eof));
    }

    #[test]
    fn expect_any_reports_the_whole_set() {
        let src: Arc<str> = Arc::from("begin");
        let mut parser = Parser::new(&src);
        let err = parser.expect_any(FIRST_SIMPLE_TYPE).unwrap_err();
        assert_eq!(err.expected, Expected::AnyOf(FIRST_SIMPLE_TYPE.to_vec()));
        assert!(parser.take(TokenKind::Begin).is_some());
    }
}
