use std::marker::PhantomData;

use crate::input::{FromInput, IStr, IStrError};

/// Iterator over an [IStr].
pub struct Iter<'a, 'data, T> {
    input: &'a mut IStr<'data>,
    _marker: PhantomData<T>,
}

impl<'a, 'data, T> Iter<'a, 'data, T> {
    pub(crate) fn new(input: &'a mut IStr<'data>) -> Self {
        Self {
            input,
            _marker: PhantomData,
        }
    }
}

impl<'a, 'data, T> Iterator for Iter<'a, 'data, T>
where
    T: FromInput<'data>,
{
    type Item = Result<T, IStrError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.try_next().transpose()
    }
}
