use std::collections::TryReserveError;

pub mod policy;
mod response;
mod stack;
mod string_stack;

pub use response::ResponseCode;
pub use stack::Stack;
pub use string_stack::StringStack;

/// Number of slots a freshly constructed stack allocates.
/// Shrinking never goes below this.
pub const INITIAL_CAPACITY: usize = 16;

/// Hard ceiling on both the number of slots and the number of live elements.
pub const MAX_CAPACITY: usize = 32768;

/// Longest string, in bytes, a [`StringStack`] accepts.
pub const MAX_ELEMENT_BYTE_SIZE: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    #[error("Could not allocate the stack buffer")]
    OutOfMemory,
    #[error("Stack has reached maximum capacity")]
    StackFull,
    #[error("Cannot pop from an empty stack")]
    StackEmpty,
    #[error("Element of {len} bytes exceeds the maximum of {max} bytes")]
    ElementTooLarge { len: usize, max: usize },
}

impl From<TryReserveError> for StackError {
    fn from(_: TryReserveError) -> Self {
        StackError::OutOfMemory
    }
}

pub type StackResult<T> = Result<T, StackError>;
