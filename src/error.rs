/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Errors
//!
//! Error type returned by the checked functional operations of the atomic
//! types.
//!
//! A CAS that loses a race is not an error: the retry loops absorb it, and
//! the compare-and-set methods report it through their `Err(actual)` value.
//!
//! # Author
//!
//! Haixing Hu

use thiserror::Error;

/// Errors reported by atomic operations.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AtomicError {
    /// A required update or accumulator function was absent.
    ///
    /// Raised before the operation reads or writes the atomic value.
    #[error("{operation}: the function argument must not be absent")]
    NullArgument {
        /// The name of the operation that rejected the argument.
        operation: &'static str,
    },
}

/// Result alias for atomic operations that can fail.
pub type AtomicResult<T> = Result<T, AtomicError>;
