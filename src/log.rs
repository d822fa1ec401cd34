/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Logging Macros
//!
//! Thin wrappers over `tracing` that compile to nothing unless the
//! `tracing` feature is enabled, so the CAS loops stay free of logging cost
//! in default builds.
//!
//! # Author
//!
//! Haixing Hu

/// Records that a CAS retry loop needed more than one attempt.
///
/// # Parameters
///
/// * `$atomic` - The name of the atomic type.
/// * `$operation` - The name of the operation running the loop.
/// * `$retries` - The number of failed CAS attempts before success.
#[cfg(feature = "tracing")]
macro_rules! trace_contention {
    ($atomic:expr, $operation:expr, $retries:expr) => {
        if $retries > 0 {
            tracing::trace!(
                atomic = $atomic,
                operation = $operation,
                retries = $retries,
                "CAS retry loop was contended"
            );
        }
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_contention {
    ($atomic:expr, $operation:expr, $retries:expr) => {
        let _ = (&$atomic, &$operation, &$retries);
    };
}

/// Records that a checked operation rejected an absent function argument.
///
/// # Parameters
///
/// * `$operation` - The name of the rejecting operation.
#[cfg(feature = "tracing")]
macro_rules! debug_null_argument {
    ($operation:expr) => {
        tracing::debug!(
            operation = $operation,
            "rejected absent function argument"
        );
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_null_argument {
    ($operation:expr) => {
        let _ = &$operation;
    };
}
