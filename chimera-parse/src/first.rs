//! First sets: the token kinds that can begin each production.

use chimera_ast::TokenKind::{self, *};

pub const FIRST_DECLARATION: &[TokenKind] = &[Const, Var, Procedure];

pub const FIRST_SIMPLE_TYPE: &[TokenKind] = &[Integer, String, Boolean];

pub const FIRST_TYPE: &[TokenKind] = &[Integer, String, Boolean, List];

pub const FIRST_SIMPLE_LITERAL: &[TokenKind] = &[IntLiteral, StringLiteral, True, False];

pub const FIRST_STATEMENT: &[TokenKind] = &[Identifier, If, Loop, For, Return, Exit];

pub const FIRST_LOGIC_OPERATOR: &[TokenKind] = &[And, Or, Xor];

pub const FIRST_RELATIONAL_OPERATOR: &[TokenKind] = &[
    Equal,
    Unequal,
    LessThan,
    MoreThan,
    LessThanEqual,
    MoreThanEqual,
];

pub const FIRST_SUM_OPERATOR: &[TokenKind] = &[Plus, Minus];

pub const FIRST_MUL_OPERATOR: &[TokenKind] = &[Times, Div, Rem];

pub const FIRST_UNARY_OPERATOR: &[TokenKind] = &[Not, Minus];

pub const FIRST_PRIMARY: &[TokenKind] = &[
    Identifier,
    IntLiteral,
    StringLiteral,
    True,
    False,
    CurlyOpen,
    BracketOpen,
    ParenthesisOpen,
];

pub const FIRST_EXPR: &[TokenKind] = &[
    Identifier,
    IntLiteral,
    StringLiteral,
    True,
    False,
    CurlyOpen,
    BracketOpen,
    ParenthesisOpen,
    Not,
    Minus,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expression_first_set_is_primary_plus_unary() {
        let mut expected = FIRST_PRIMARY.to_vec();
        expected.extend_from_slice(FIRST_UNARY_OPERATOR);
        expected.sort();
        let mut actual = FIRST_EXPR.to_vec();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn operator_levels_are_disjoint() {
        let levels = [
            FIRST_LOGIC_OPERATOR,
            FIRST_RELATIONAL_OPERATOR,
            FIRST_SUM_OPERATOR,
            FIRST_MUL_OPERATOR,
        ];
        for (i, lhs) in levels.iter().enumerate() {
            for rhs in &levels[i + 1..] {
                assert!(lhs.iter().all(|kind| !rhs.contains(kind)));
            }
        }
    }
}
