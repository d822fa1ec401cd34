/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Types
//!
//! Provides lock-free atomic floating point types. These types store the
//! bit pattern of their value in a `std::sync::atomic` integer of the same
//! width and provide an API similar to Java's
//! `java.util.concurrent.atomic` package.
//!
//! # Features
//!
//! - Sequentially consistent ordering for every operation but `lazy_set`
//! - Rich set of high-level operations (increment, decrement, functional
//!   updates, accumulation, etc.)
//! - Bit-pattern compare-and-set, including NaN payloads
//! - Zero-cost abstraction with inline methods
//!
//! # Author
//!
//! Haixing Hu

mod atomic_float_macro;

mod atomic_f32;
mod atomic_f64;
mod traits;

pub use atomic_f32::AtomicF32;
pub use atomic_f64::AtomicF64;
pub use traits::{
    Atomic,
    AtomicNumber,
    UpdatableAtomic,
};
