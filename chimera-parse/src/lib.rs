mod expr;
mod first;
mod item;
mod keywords;
mod parse;
mod parser;
mod priv_prelude;
mod program;
mod statement;
#[cfg(test)]
mod test_utils;
mod token;

use crate::priv_prelude::*;
pub use crate::{
    first::{
        FIRST_DECLARATION, FIRST_EXPR, FIRST_LOGIC_OPERATOR, FIRST_MUL_OPERATOR, FIRST_PRIMARY,
        FIRST_RELATIONAL_OPERATOR, FIRST_SIMPLE_LITERAL, FIRST_SIMPLE_TYPE, FIRST_STATEMENT,
        FIRST_SUM_OPERATOR, FIRST_TYPE, FIRST_UNARY_OPERATOR,
    },
    keywords::{keyword_kind, KEYWORDS},
    parse::Parse,
    parser::{ParseResult, Parser},
    token::{lex, Scanner},
};

/// Parses one whole compilation unit.
pub fn parse_program(src: &Arc<str>) -> ParseResult<Program> {
    let mut parser = Parser::new(src);
    let program = parser.parse::<Program>()?;
    tracing::debug!(
        procedures = program.procedures.procedures.len(),
        statements = program.statements.len(),
        "parsed program"
    );
    Ok(program)
}
