use core::ops::Range;

use thiserror::Error;

/// The kind of an input error.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("not an integer or integer overflow `{0}`")]
    NotInteger(String),
    #[error("not utf-8")]
    NotUtf8,
    #[error("expected line")]
    ExpectedLine,
    #[error("expected tuple of length `{0}`")]
    ExpectedTuple(usize),
    #[error("unexpected eof")]
    UnexpectedEof,
    #[error("array out of capacity ({0})")]
    ArrayCapacity(usize),
}

/// Error raised through input processing.
#[derive(Debug, Error)]
#[error("{kind} (at bytes {span:?})")]
pub struct IStrError {
    pub(crate) span: Range<usize>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Byte range of the original input the error refers to.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}
