/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atomic-float
//!
//! Lock-free atomic floating point cells providing a JDK-like atomic API.
//!
//! Hardware offers no atomic floating point instructions, so `AtomicF32` and
//! `AtomicF64` store the IEEE-754 bit pattern of their value in an
//! `AtomicU32` / `AtomicU64` and run every read-modify-write operation as a
//! compare-and-swap retry loop on that integral word.
//!
//! ## Design Goals
//!
//! - **Linearizability**: Every operation takes effect atomically, and no
//!   concurrent update is ever lost
//! - **Lock Freedom**: No operation blocks or takes a lock
//! - **Bit Exactness**: Values round-trip bit for bit, including NaN
//!   payloads and the sign of zero
//! - **Completeness**: Provides the full `java.util.concurrent.atomic`
//!   operation set for floating point payloads
//!
//! ## Features
//!
//! - Floating-point atomic types: `AtomicF32`, `AtomicF64`
//! - Traits for generic code: `Atomic`, `UpdatableAtomic`, `AtomicNumber`
//! - Optional `tracing` events (feature `tracing`)
//! - Optional `serde` support (feature `serde`)
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic_float::AtomicF64;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let total = Arc::new(AtomicF64::new(0.0));
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let total = total.clone();
//!     let handle = thread::spawn(move || {
//!         for _ in 0..100 {
//!             total.add_and_get(1.0);
//!         }
//!     });
//!     handles.push(handle);
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(total.get(), 1000.0);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![forbid(unsafe_code)]

#[macro_use]
mod log;

#[cfg(loom)]
mod primitive {
    pub(crate) mod sync {
        pub(crate) mod atomic {
            pub(crate) use loom::sync::atomic::{
                AtomicU32,
                AtomicU64,
                Ordering,
            };
        }
    }
}

#[cfg(not(loom))]
mod primitive {
    pub(crate) mod sync {
        pub(crate) mod atomic {
            pub(crate) use std::sync::atomic::{
                AtomicU32,
                AtomicU64,
                Ordering,
            };
        }
    }
}

pub mod atomic;
pub mod error;

// Re-export all atomic types, traits and errors
pub use atomic::{
    Atomic,
    AtomicF32,
    AtomicF64,
    AtomicNumber,
    UpdatableAtomic,
};
pub use error::{
    AtomicError,
    AtomicResult,
};
