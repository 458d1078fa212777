use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    /// Input rejected before or by the store (missing, blank, malformed or too long).
    InvalidInput,
    /// A unique value is already taken.
    Conflict,
    /// A foreign key points at nothing.
    UnknownReference,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::InvalidInput => write!(f, "Invalid input"),
            KernelError::Conflict => write!(f, "Value already exists"),
            KernelError::UnknownReference => write!(f, "Referenced entity does not exist"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
