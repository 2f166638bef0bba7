use std::{fmt, sync::Arc};

/// A 1-based line and column pair, as reported to users.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// A byte range into a shared source text.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    src: Arc<str>,
    start: usize,
    end: usize,
}

impl Span {
    pub fn new(src: Arc<str>, start: usize, end: usize) -> Option<Span> {
        let _ = src.get(start..end)?;
        Some(Span { src, start, end })
    }

    /// An empty span sitting right after the last byte of `src`.
    pub fn end_of(src: Arc<str>) -> Span {
        let end = src.len();
        Span {
            src,
            start: end,
            end,
        }
    }

    pub fn dummy() -> Span {
        Span {
            src: Arc::from(""),
            start: 0,
            end: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.src[self.start..self.end]
    }

    pub fn join(lhs: Span, rhs: Span) -> Span {
        assert!(Arc::ptr_eq(&lhs.src, &rhs.src));
        Span {
            src: lhs.src,
            start: lhs.start,
            end: rhs.end,
        }
    }

    pub fn src(&self) -> &Arc<str> {
        &self.src
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("as_str", &self.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn span_rejects_out_of_range() {
        let src: Arc<str> = Arc::from("abc");
        assert!(Span::new(src.clone(), 1, 3).is_some());
        assert!(Span::new(src.clone(), 2, 4).is_none());
        assert!(Span::new(src, 2, 1).is_none());
    }

    #[test]
    fn join_covers_both_spans() {
        let src: Arc<str> = Arc::from("x := 10;");
        let lhs = Span::new(src.clone(), 0, 1).unwrap();
        let rhs = Span::new(src.clone(), 5, 7).unwrap();
        assert_eq!(Span::join(lhs, rhs).as_str(), "x := 10");
        assert_eq!(Span::end_of(src).as_str(), "");
    }
}
