pub mod span;
pub use span::{LineCol, Span};

pub mod ty;
pub use ty::Type;

pub trait Spanned {
    fn span(&self) -> Span;
}

impl<T: Spanned> Spanned for Box<T> {
    fn span(&self) -> Span {
        (**self).span()
    }
}
