//! Capacity transitions for [`Stack`](crate::Stack).
//!
//! Growth doubles and shrinking halves. Every capacity produced here stays
//! within `INITIAL_CAPACITY..=MAX_CAPACITY`.

use crate::{INITIAL_CAPACITY, MAX_CAPACITY};

fn clamp_capacity(capacity: usize) -> usize {
    capacity.clamp(INITIAL_CAPACITY, MAX_CAPACITY)
}

/// Capacity to grow to once a buffer of `capacity` slots is completely used.
pub fn grown_capacity(capacity: usize) -> usize {
    clamp_capacity(capacity.saturating_mul(2))
}

/// Capacity to shrink to after a pop left `top` live elements in a buffer of
/// `capacity` slots, or `None` if the buffer should be kept as is.
///
/// A shrink happens once the stack is at most a quarter full, which leaves
/// room for the same number of pushes before the next growth.
pub fn shrunk_capacity(capacity: usize, top: usize) -> Option<usize> {
    if top > capacity / 4 {
        return None;
    }
    let new_capacity = clamp_capacity(capacity / 2).max(top);
    (new_capacity < capacity).then_some(new_capacity)
}
