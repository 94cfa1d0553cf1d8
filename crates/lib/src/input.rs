//! Input parser.

mod error;
mod iter;


use core::mem;
use core::ops;
use std::str::from_utf8;

use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};
pub use self::iter::Iter;

type Result<T> = std::result::Result<T, IStrError>;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
///
/// Borrows the raw input and keeps track of how far into the original data
/// it has advanced so errors can point back at it.
#[derive(Debug, Clone, Copy)]
pub struct IStr<'data> {
    /// The data being parsed.
    data: &'data [u8],
    /// Byte offset of `data` into the original input.
    index: usize,
}

impl<'data> IStr<'data> {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'data [u8]) -> Self {
        Self { data, index: 0 }
    }

    /// Byte offset into the original input.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'data [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'data BStr {
        BStr::new(self.data)
    }

    /// Construct an iterator over the current input.
    #[inline]
    pub fn iter<T>(&mut self) -> Iter<'_, 'data, T> {
        Iter::new(self)
    }

    /// Parse the next value as `T`.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput<'data>,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput<'data>,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if the input
    /// has run out of lines.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput<'data>,
    {
        let index = self.index;

        let Some(line) = self.try_line()? else {
            return Err(IStrError::new(index..self.index, ErrorKind::ExpectedLine));
        };

        Ok(line)
    }

    /// Parse the next line as `T`, returns `Ok(None)` if the input has run
    /// out of lines.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput<'data>,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        let Some(output) = line.try_next()? else {
            return Ok(None);
        };

        Ok(Some(output))
    }

    /// Try to parse the next whitespace-separated word.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(usize, T)>>
    where
        T: FromInput<'data>,
    {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((s, value)))
    }

    /// Split once at the position produced by `find` or until the end of
    /// input, returning the consumed chunk.
    fn split_once_at<F>(&mut self, find: F) -> Option<IStr<'data>>
    where
        F: FnOnce(&[u8]) -> Option<usize>,
    {
        if self.data.is_empty() {
            return None;
        }

        let index = self.index;

        let Some(at) = find(self.data) else {
            self.index = self.index.saturating_add(self.data.len());
            let data = mem::take(&mut self.data);
            return Some(IStr { data, index });
        };

        let data = self.data.get(..at)?;
        self.advance(at.checked_add(1)?);
        Some(IStr { data, index })
    }

    /// Split once at the given byte or until the end of input.
    #[inline]
    fn split_once(&mut self, b: u8) -> Option<IStr<'data>> {
        self.split_once_at(|data| memchr::memchr(b, data))
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(n);
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr<'data>> {
        let index = self.index.checked_add(range.start)?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

/// A value that can be parsed from input.
pub trait FromInput<'data>: Sized {
    /// Error kind raised when the value is required but input has run out.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returns `Ok(None)` if there is no more data to
    /// process.
    fn try_from_input(p: &mut IStr<'data>) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr<'data>) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

macro_rules! tuple {
    ($num:literal => $($ty:ident $var:ident),* $(,)?) => {
        impl<'data, $($ty,)*> FromInput<'data> for ($($ty,)*)
        where
            $($ty: FromInput<'data>,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr<'data>) -> Result<Option<Self>> {
                $(
                    let Some($var) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($($var,)*)))
            }
        }
    }
}

macro_rules! integer {
    ($ty:ty) => {
        impl<'data> FromInput<'data> for $ty {
            #[inline]
            fn try_from_input(p: &mut IStr<'data>) -> Result<Option<Self>> {
                let index = p.index;

                let Some((n, string)) = p.try_next_word::<&str>()? else {
                    return Ok(None);
                };

                let Ok(value) = str::parse(string) else {
                    return Err(IStrError::new(
                        index.saturating_add(n)..p.index,
                        ErrorKind::NotInteger(string.into()),
                    ));
                };

                Ok(Some(value))
            }
        }
    };
}

tuple!(1 => A a);
tuple!(2 => A a, B b);
tuple!(3 => A a, B b, C c);
tuple!(4 => A a, B b, C c, D d);

integer!(usize);
integer!(isize);
integer!(u8);
integer!(u16);
integer!(u32);
integer!(u64);
integer!(i8);
integer!(i16);
integer!(i32);
integer!(i64);

impl<'data> FromInput<'data> for &'data [u8] {
    #[inline]
    fn try_from_input(p: &mut IStr<'data>) -> Result<Option<Self>> {
        let data = mem::take(&mut p.data);
        p.index = p.index.saturating_add(data.len());
        Ok(Some(data))
    }
}

impl<'data> FromInput<'data> for &'data str {
    #[inline]
    fn try_from_input(p: &mut IStr<'data>) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

impl<'data> FromInput<'data> for &'data BStr {
    #[inline]
    fn try_from_input(p: &mut IStr<'data>) -> Result<Option<Self>> {
        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        Ok(Some(BStr::new(data)))
    }
}

impl<'data, T, const N: usize> FromInput<'data> for arrayvec::ArrayVec<T, N>
where
    T: FromInput<'data>,
{
    #[inline]
    fn try_from_input(p: &mut IStr<'data>) -> Result<Option<Self>> {
        let index = p.index;
        let mut output = arrayvec::ArrayVec::new();

        while let Some(element) = T::try_from_input(p)? {
            if output.remaining_capacity() == 0 {
                return Err(IStrError::new(index..p.index, ErrorKind::ArrayCapacity(N)));
            }

            output.push(element);
        }

        Ok(Some(output))
    }
}

impl<'data, T> FromInput<'data> for Vec<T>
where
    T: FromInput<'data>,
{
    #[inline]
    fn try_from_input(p: &mut IStr<'data>) -> Result<Option<Self>> {
        let mut output = Vec::new();

        while let Some(element) = T::try_from_input(p)? {
            output.push(element);
        }

        Ok(Some(output))
    }
}
