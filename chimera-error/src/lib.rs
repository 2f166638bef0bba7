pub mod error;
pub mod parser_error;
pub mod semantic_error;

pub use crate::{
    error::CompileError,
    parser_error::{Expected, SyntaxError},
    semantic_error::{SemanticError, SemanticErrorKind},
};
