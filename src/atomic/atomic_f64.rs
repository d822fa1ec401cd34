/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Floating Point
//!
//! Provides a lock-free atomic 64-bit floating point type. Implemented
//! using bit conversion with `AtomicU64`.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::atomic_float_macro::impl_atomic_float;
use crate::primitive::sync::atomic::{
    AtomicU64,
    Ordering,
};

impl_atomic_float!(
    AtomicF64,
    AtomicU64,
    f64,
    "64-bit floating point number"
);
