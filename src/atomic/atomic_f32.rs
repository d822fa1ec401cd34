/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 32-bit Floating Point
//!
//! Provides a lock-free atomic 32-bit floating point type. Implemented
//! using bit conversion with `AtomicU32`.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::atomic_float_macro::impl_atomic_float;
use crate::primitive::sync::atomic::{
    AtomicU32,
    Ordering,
};

impl_atomic_float!(
    AtomicF32,
    AtomicU32,
    f32,
    "32-bit floating point number"
);
