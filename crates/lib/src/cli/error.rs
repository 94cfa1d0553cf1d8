use core::fmt;
use core::ops::Range;

use crate::input::{IStrError, NL};

/// Associate `path:line:column` context with an input error.
pub(crate) fn error_context(path: &'static str, data: &[u8], error: anyhow::Error) -> anyhow::Error {
    let span = find_span(&error);
    let pos = pos_from(data, span);
    error.context(ErrorContext { path, pos })
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy)]
pub(crate) struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        write!(f, "{line}:{}", self.column)
    }
}

/// Resolve a byte span to the line and column where it starts.
fn pos_from(data: &[u8], span: Range<usize>) -> LineCol {
    let Some(prefix) = data.get(..span.start) else {
        return LineCol::default();
    };

    let line = memchr::memchr_iter(NL, prefix).count();

    let column = match memchr::memrchr(NL, prefix) {
        Some(n) => span.start - (n + 1),
        None => span.start,
    };

    LineCol::new(line, column)
}

/// Unwrap an error fully in case it has been threaded through multiple
/// layers of processing.
fn find_span(error: &anyhow::Error) -> Range<usize> {
    match error.downcast_ref::<IStrError>() {
        Some(e) => e.span(),
        None => 0..0,
    }
}

#[derive(Debug)]
struct ErrorContext {
    path: &'static str,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}
