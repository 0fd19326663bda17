use std::fmt::Display;

use crate::StackError;

/// Flat status code for the outcome of a stack operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    Success,
    OutOfMemory,
    StackFull,
    StackEmpty,
    ElementTooLarge,
}

impl ResponseCode {
    pub fn of<T>(result: &Result<T, StackError>) -> Self {
        match result {
            Ok(_) => ResponseCode::Success,
            Err(e) => e.into(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ResponseCode::Success => "success",
            ResponseCode::OutOfMemory => "out_of_memory",
            ResponseCode::StackFull => "stack_full",
            ResponseCode::StackEmpty => "stack_empty",
            ResponseCode::ElementTooLarge => "element_too_large",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        [
            ResponseCode::Success,
            ResponseCode::OutOfMemory,
            ResponseCode::StackFull,
            ResponseCode::StackEmpty,
            ResponseCode::ElementTooLarge,
        ]
        .into_iter()
        .find(|code| code.name() == name)
    }
}

impl From<&StackError> for ResponseCode {
    fn from(value: &StackError) -> Self {
        match value {
            StackError::OutOfMemory => ResponseCode::OutOfMemory,
            StackError::StackFull => ResponseCode::StackFull,
            StackError::StackEmpty => ResponseCode::StackEmpty,
            StackError::ElementTooLarge { .. } => ResponseCode::ElementTooLarge,
        }
    }
}

impl Display for ResponseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
