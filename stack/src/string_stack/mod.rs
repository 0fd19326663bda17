#[cfg(test)]
mod tests;

use core::fmt;

use crate::{MAX_ELEMENT_BYTE_SIZE, Stack, StackError, StackResult};

/// A [`Stack`] of owned strings, each at most [`MAX_ELEMENT_BYTE_SIZE`] bytes.
///
/// Pushing copies the string in, popping hands the copy back to the caller.
#[derive(Default)]
pub struct StringStack {
    inner: Stack<Box<str>>,
}

impl StringStack {
    pub fn new() -> Self {
        Self {
            inner: Stack::new(),
        }
    }

    pub fn try_new() -> StackResult<Self> {
        Ok(Self {
            inner: Stack::try_new()?,
        })
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Pushes a copy of `item`.
    ///
    /// The length check runs after the buffer has made room, so an oversized
    /// item can still leave the stack with a larger capacity.
    pub fn push(&mut self, item: &str) -> StackResult<()> {
        self.inner.push_with(|| {
            if item.len() > MAX_ELEMENT_BYTE_SIZE {
                return Err(StackError::ElementTooLarge {
                    len: item.len(),
                    max: MAX_ELEMENT_BYTE_SIZE,
                });
            }
            let mut copy = String::new();
            copy.try_reserve_exact(item.len())?;
            copy.push_str(item);
            Ok(copy.into_boxed_str())
        })
    }

    pub fn pop(&mut self) -> StackResult<String> {
        self.inner.pop().map(String::from)
    }
}

impl fmt::Debug for StringStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringStack")
            .field("size", &self.size())
            .field("capacity", &self.capacity())
            .finish()
    }
}
