/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines common traits for atomic types, providing a unified interface
//! for atomic operations.
//!
//! # Author
//!
//! Haixing Hu

use crate::error::{
    AtomicError,
    AtomicResult,
};

/// Common trait for all atomic types.
///
/// Provides basic atomic operations including get, set, swap, and
/// compare-and-set.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The value type stored in the atomic.
    type Value;

    /// Gets the current value.
    ///
    /// Uses `SeqCst` ordering.
    ///
    /// # Returns
    ///
    /// The current value.
    fn get(&self) -> Self::Value;

    /// Sets a new value.
    ///
    /// Uses `SeqCst` ordering.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to set.
    fn set(&self, value: Self::Value);

    /// Eventually sets a new value.
    ///
    /// Uses `Release` ordering: the write is not ordered before later
    /// operations of the calling thread, so it may become visible to other
    /// threads after them.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to set.
    fn lazy_set(&self, value: Self::Value);

    /// Sets a new value, returning the old value.
    ///
    /// Uses `SeqCst` ordering.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to swap in.
    ///
    /// # Returns
    ///
    /// The old value.
    fn get_and_set(&self, value: Self::Value) -> Self::Value;

    /// Alias of [`get_and_set`](Atomic::get_and_set).
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to swap in.
    ///
    /// # Returns
    ///
    /// The old value.
    #[inline]
    fn swap(&self, value: Self::Value) -> Self::Value {
        self.get_and_set(value)
    }

    /// Compares and sets the value atomically.
    ///
    /// If the current value equals `current`, sets it to `new` and returns
    /// `Ok(())`. Otherwise, returns `Err(actual)` where `actual` is the
    /// current value.
    ///
    /// Uses `SeqCst` ordering on both success and failure.
    ///
    /// # Parameters
    ///
    /// * `current` - The expected current value.
    /// * `new` - The new value to set if current matches.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `Err(actual)` on failure where `actual` is
    /// the real current value.
    fn compare_and_set(&self, current: Self::Value, new: Self::Value) -> Result<(), Self::Value>;

    /// Weak version of compare-and-set.
    ///
    /// May spuriously fail even when the comparison succeeds, but never
    /// succeeds when it does not. Should be used in a loop.
    ///
    /// # Parameters
    ///
    /// * `current` - The expected current value.
    /// * `new` - The new value to set if current matches.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `Err(actual)` on failure.
    fn weak_compare_and_set(
        &self,
        current: Self::Value,
        new: Self::Value,
    ) -> Result<(), Self::Value>;

    /// Compares and exchanges the value atomically, returning the previous
    /// value.
    ///
    /// If the current value equals `current`, sets it to `new` and returns
    /// the old value. Otherwise, returns the actual current value.
    ///
    /// This is similar to `compare_and_set` but always returns the actual
    /// value instead of a Result, which can be more convenient in CAS loops.
    ///
    /// # Parameters
    ///
    /// * `current` - The expected current value.
    /// * `new` - The new value to set if current matches.
    ///
    /// # Returns
    ///
    /// The value before the operation.
    fn compare_and_exchange(&self, current: Self::Value, new: Self::Value) -> Self::Value;
}

/// Trait for atomic types that support functional updates.
///
/// Functions passed to these methods run inside a CAS loop and may be
/// invoked several times under contention. Only the invocation whose result
/// is successfully published takes effect, so the functions must be free of
/// side effects.
///
/// # Author
///
/// Haixing Hu
pub trait UpdatableAtomic: Atomic {
    /// Updates the value using a function, returning the old value.
    ///
    /// Internally uses a CAS loop until the update succeeds.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that takes the current value and returns the new
    ///   value.
    ///
    /// # Returns
    ///
    /// The old value before the update.
    fn get_and_update<F>(&self, f: F) -> Self::Value
    where
        F: Fn(Self::Value) -> Self::Value;

    /// Updates the value using a function, returning the new value.
    ///
    /// Internally uses a CAS loop until the update succeeds.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that takes the current value and returns the new
    ///   value.
    ///
    /// # Returns
    ///
    /// The new value after the update.
    fn update_and_get<F>(&self, f: F) -> Self::Value
    where
        F: Fn(Self::Value) -> Self::Value;

    /// Combines the value with `x` using a function, returning the old
    /// value.
    ///
    /// Internally uses a CAS loop until the update succeeds. The function
    /// is called as `f(current, x)`.
    ///
    /// # Parameters
    ///
    /// * `x` - The operand combined with the current value.
    /// * `f` - The accumulator function.
    ///
    /// # Returns
    ///
    /// The old value before the update.
    fn get_and_accumulate<F>(&self, x: Self::Value, f: F) -> Self::Value
    where
        F: Fn(Self::Value, Self::Value) -> Self::Value;

    /// Combines the value with `x` using a function, returning the new
    /// value.
    ///
    /// Internally uses a CAS loop until the update succeeds. The function
    /// is called as `f(current, x)`.
    ///
    /// # Parameters
    ///
    /// * `x` - The operand combined with the current value.
    /// * `f` - The accumulator function.
    ///
    /// # Returns
    ///
    /// The new value after the update.
    fn accumulate_and_get<F>(&self, x: Self::Value, f: F) -> Self::Value
    where
        F: Fn(Self::Value, Self::Value) -> Self::Value;

    /// Checked form of [`get_and_update`](Self::get_and_update) for a
    /// function that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::NullArgument`] if `f` is `None`. The atomic
    /// value is not touched in that case.
    fn try_get_and_update<F>(&self, f: Option<F>) -> AtomicResult<Self::Value>
    where
        F: Fn(Self::Value) -> Self::Value,
    {
        let f = require(f, "get_and_update")?;
        Ok(self.get_and_update(f))
    }

    /// Checked form of [`update_and_get`](Self::update_and_get) for a
    /// function that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::NullArgument`] if `f` is `None`. The atomic
    /// value is not touched in that case.
    fn try_update_and_get<F>(&self, f: Option<F>) -> AtomicResult<Self::Value>
    where
        F: Fn(Self::Value) -> Self::Value,
    {
        let f = require(f, "update_and_get")?;
        Ok(self.update_and_get(f))
    }

    /// Checked form of [`get_and_accumulate`](Self::get_and_accumulate) for
    /// a function that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::NullArgument`] if `f` is `None`. The atomic
    /// value is not touched in that case.
    fn try_get_and_accumulate<F>(&self, x: Self::Value, f: Option<F>) -> AtomicResult<Self::Value>
    where
        F: Fn(Self::Value, Self::Value) -> Self::Value,
    {
        let f = require(f, "get_and_accumulate")?;
        Ok(self.get_and_accumulate(x, f))
    }

    /// Checked form of [`accumulate_and_get`](Self::accumulate_and_get) for
    /// a function that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::NullArgument`] if `f` is `None`. The atomic
    /// value is not touched in that case.
    fn try_accumulate_and_get<F>(&self, x: Self::Value, f: Option<F>) -> AtomicResult<Self::Value>
    where
        F: Fn(Self::Value, Self::Value) -> Self::Value,
    {
        let f = require(f, "accumulate_and_get")?;
        Ok(self.accumulate_and_get(x, f))
    }
}

/// Trait for atomic numeric types.
///
/// Provides arithmetic operations and numeric coercions of the current
/// value.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicNumber: UpdatableAtomic {
    /// Increments the value by 1, returning the old value.
    ///
    /// # Returns
    ///
    /// The old value before incrementing.
    fn get_and_increment(&self) -> Self::Value;

    /// Increments the value by 1, returning the new value.
    ///
    /// # Returns
    ///
    /// The new value after incrementing.
    fn increment_and_get(&self) -> Self::Value;

    /// Decrements the value by 1, returning the old value.
    ///
    /// # Returns
    ///
    /// The old value before decrementing.
    fn get_and_decrement(&self) -> Self::Value;

    /// Decrements the value by 1, returning the new value.
    ///
    /// # Returns
    ///
    /// The new value after decrementing.
    fn decrement_and_get(&self) -> Self::Value;

    /// Adds a delta to the value, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The old value before adding.
    fn get_and_add(&self, delta: Self::Value) -> Self::Value;

    /// Adds a delta to the value, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The new value after adding.
    fn add_and_get(&self, delta: Self::Value) -> Self::Value;

    /// Returns the current value converted to `i32`.
    ///
    /// Saturates at the bounds of `i32`; NaN converts to 0.
    fn int_value(&self) -> i32;

    /// Returns the current value converted to `i64`.
    ///
    /// Saturates at the bounds of `i64`; NaN converts to 0.
    fn long_value(&self) -> i64;

    /// Returns the current value converted to `f32`.
    fn float_value(&self) -> f32;

    /// Returns the current value converted to `f64`.
    fn double_value(&self) -> f64;
}

#[inline]
fn require<F>(f: Option<F>, operation: &'static str) -> AtomicResult<F> {
    f.ok_or_else(|| {
        debug_null_argument!(operation);
        AtomicError::NullArgument { operation }
    })
}
