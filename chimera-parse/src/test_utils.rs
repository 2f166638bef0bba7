use crate::priv_prelude::*;

/// Parses all of `input` as a `T`, panicking on leftovers or errors.
pub fn parse<T: Parse>(input: &str) -> T {
    let src: Arc<str> = Arc::from(input);
    let mut parser = Parser::new(&src);
    let value = parser
        .parse::<T>()
        .unwrap_or_else(|err| panic!("failed to parse {input:?}: {err}"));
    assert!(
        parser.has(TokenKind::Eof),
        "unparsed input after {input:?}: {}",
        parser.current()
    );
    value
}

/// Parses `input` as a `T`, expecting a syntax error.
pub fn parse_err<T: Parse + std::fmt::Debug>(input: &str) -> SyntaxError {
    let src: Arc<str> = Arc::from(input);
    let mut parser = Parser::new(&src);
    match parser.parse::<T>() {
        Ok(value) => panic!("{input:?} unexpectedly parsed as {value:?}"),
        Err(err) => err,
    }
}
