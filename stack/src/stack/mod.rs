
use core::fmt;

use crate::{INITIAL_CAPACITY, MAX_CAPACITY, StackError, StackResult, policy};

/// A last-in-first-out stack over a contiguous buffer.
///
/// The buffer starts at [`INITIAL_CAPACITY`] slots, doubles whenever a push
/// finds it full and halves once pops leave it a quarter full. It never holds
/// more than [`MAX_CAPACITY`] elements.
pub struct Stack<T> {
    // live elements are `elements[..top]`, the bottom of the stack at index 0
    elements: Vec<T>,
    capacity: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Like [`Stack::new`], but reports a failed allocation instead of aborting.
    pub fn try_new() -> StackResult<Self> {
        let mut elements = Vec::new();
        elements.try_reserve_exact(INITIAL_CAPACITY)?;
        Ok(Self {
            elements,
            capacity: INITIAL_CAPACITY,
        })
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Number of slots in the current buffer.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// `true` once the stack holds [`MAX_CAPACITY`] elements.
    /// A stack whose current buffer is used up is not full, it grows on the
    /// next push.
    pub fn is_full(&self) -> bool {
        self.size() == MAX_CAPACITY
    }

    pub fn push(&mut self, item: T) -> StackResult<()> {
        self.push_with(|| Ok(item))
    }

    /// Makes room for one more element, then stores whatever `make` produces.
    /// If `make` fails the stack keeps its size but may already have grown.
    pub(crate) fn push_with(&mut self, make: impl FnOnce() -> StackResult<T>) -> StackResult<()> {
        if self.is_full() {
            log::debug!("refusing push, stack holds {MAX_CAPACITY} elements");
            return Err(StackError::StackFull);
        }
        if self.size() == self.capacity {
            self.reallocate(policy::grown_capacity(self.capacity))?;
        }
        let item = make()?;
        self.elements.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> StackResult<T> {
        let popped = self.elements.pop().ok_or(StackError::StackEmpty)?;
        if let Some(new_capacity) = policy::shrunk_capacity(self.capacity, self.size()) {
            // the element is already off the stack, a failed shrink only costs memory
            if let Err(err) = self.reallocate(new_capacity) {
                log::warn!(
                    "keeping {} slots for {} elements: {err}",
                    self.capacity,
                    self.size()
                );
            }
        }
        Ok(popped)
    }

    /// Moves the live elements into a fresh buffer of exactly `new_capacity`
    /// slots. On failure the old buffer stays in place untouched.
    fn reallocate(&mut self, new_capacity: usize) -> StackResult<()> {
        debug_assert!(new_capacity >= self.size());
        debug_assert!((INITIAL_CAPACITY..=MAX_CAPACITY).contains(&new_capacity));

        let mut new_elements = Vec::new();
        new_elements.try_reserve_exact(new_capacity)?;
        new_elements.append(&mut self.elements);

        log::trace!(
            "resized stack buffer {} -> {} slots ({} elements)",
            self.capacity,
            new_capacity,
            new_elements.len()
        );
        self.elements = new_elements;
        self.capacity = new_capacity;
        Ok(())
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("size", &self.size())
            .field("capacity", &self.capacity)
            .finish()
    }
}
