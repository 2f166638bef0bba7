use crate::priv_prelude::*;

/// A grammar production.
pub trait Parse: Sized {
    /// Token kinds that can begin this production.
    const FIRST: &'static [TokenKind];

    fn parse(parser: &mut Parser) -> ParseResult<Self>;
}
