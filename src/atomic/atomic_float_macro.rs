/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Float Macro
//!
//! Provides a macro to generate atomic floating point types with consistent
//! implementations.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate atomic floating point types.
///
/// This macro generates a complete atomic floating point type with all
/// methods, trait implementations, and documentation. The generated type
/// stores the IEEE-754 bit pattern of its value in an unsigned integer
/// atomic of the same width.
///
/// The invoking module must have `fmt` and `Ordering` in scope.
///
/// # Parameters
///
/// * `$name` - The name of the atomic type (e.g., `AtomicF64`)
/// * `$inner_type` - The backing integer atomic type (e.g., `AtomicU64`)
/// * `$value_type` - The value type (e.g., `f64`)
/// * `$doc_type` - The type description for documentation (e.g., "64-bit
///   floating point number")
macro_rules! impl_atomic_float {
    ($name:ident, $inner_type:ty, $value_type:ty, $doc_type:expr) => {
        #[doc = concat!("Atomic ", $doc_type, ".")]
        ///
        /// Provides lock-free atomic operations on a floating point value.
        /// All methods are thread-safe and can be shared across threads.
        ///
        /// # Memory Ordering Strategy
        ///
        /// Every operation except `lazy_set` uses `SeqCst` ordering on the
        /// backing integer atomic, including the failure ordering of CAS.
        /// `lazy_set` uses `Release`, so the write may become visible to
        /// other threads only after later operations of the writer.
        ///
        /// # Implementation Details
        ///
        /// Hardware doesn't provide atomic floating point operations, so the
        /// value is stored as its bit pattern (`to_bits()` / `from_bits()`)
        /// in a same-width integer atomic. Read-modify-write operations
        /// (`get_and_add`, `update_and_get`, ...) read the bits, compute the
        /// new value, and publish it with a CAS, retrying from the freshly
        /// observed bits whenever another thread won the race. No update is
        /// ever lost, and no lock is ever taken.
        ///
        /// # Bit-Pattern Comparison
        ///
        /// `compare_and_set` and its variants compare raw bit patterns, not
        /// floating point values. A NaN therefore matches a NaN with the
        /// identical bit pattern, while `0.0` and `-0.0` do not match each
        /// other.
        ///
        /// # Example
        ///
        /// ```rust
        #[doc = concat!("use prism3_atomic_float::", stringify!($name), ";")]
        /// use std::sync::Arc;
        /// use std::thread;
        ///
        #[doc = concat!("let sum = Arc::new(", stringify!($name), "::new(0.0));")]
        /// let mut handles = vec![];
        ///
        /// for _ in 0..10 {
        ///     let sum = sum.clone();
        ///     let handle = thread::spawn(move || {
        ///         for _ in 0..100 {
        ///             sum.add_and_get(1.0);
        ///         }
        ///     });
        ///     handles.push(handle);
        /// }
        ///
        /// for handle in handles {
        ///     handle.join().unwrap();
        /// }
        ///
        /// assert_eq!(sum.get(), 1000.0);
        /// ```
        ///
        /// # Author
        ///
        /// Haixing Hu
        #[repr(transparent)]
        pub struct $name {
            inner: $inner_type,
        }

        impl $name {
            /// Creates a new atomic floating point number.
            ///
            /// # Parameters
            ///
            /// * `value` - The initial value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_float::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(2.5);")]
            /// assert_eq!(atomic.get(), 2.5);
            /// ```
            #[inline]
            pub fn new(value: $value_type) -> Self {
                Self {
                    inner: <$inner_type>::new(value.to_bits()),
                }
            }

            /// Gets the current value.
            ///
            /// # Memory Ordering
            ///
            /// Uses `SeqCst` ordering, so the load observes the latest value
            /// in the single total order of all `SeqCst` operations.
            ///
            /// # Returns
            ///
            /// The current value, bit for bit as it was stored.
            #[inline]
            pub fn get(&self) -> $value_type {
                <$value_type>::from_bits(self.inner.load(Ordering::SeqCst))
            }

            /// Sets a new value.
            ///
            /// # Memory Ordering
            ///
            /// Uses `SeqCst` ordering.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value to set.
            #[inline]
            pub fn set(&self, value: $value_type) {
                self.inner.store(value.to_bits(), Ordering::SeqCst);
            }

            /// Eventually sets a new value.
            ///
            /// # Memory Ordering
            ///
            /// Uses `Release` ordering. Writes made by this thread before
            /// the call are visible to any thread that observes the new
            /// value, but the store itself is not ordered before later
            /// operations of this thread. Use it when other threads do not
            /// need to see the value immediately.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value to set.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_float::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(0.0);")]
            /// atomic.lazy_set(1.5);
            /// assert_eq!(atomic.get(), 1.5);
            /// ```
            #[inline]
            pub fn lazy_set(&self, value: $value_type) {
                self.inner.store(value.to_bits(), Ordering::Release);
            }

            /// Sets a new value, returning the old value.
            ///
            /// # Memory Ordering
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
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_float::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(1.0);")]
            /// assert_eq!(atomic.get_and_set(2.0), 1.0);
            /// assert_eq!(atomic.get(), 2.0);
            /// ```
            #[inline]
            pub fn get_and_set(&self, value: $value_type) -> $value_type {
                <$value_type>::from_bits(
                    self.inner.swap(value.to_bits(), Ordering::SeqCst),
                )
            }

            /// Compares and sets the value atomically.
            ///
            /// If the bit pattern of the current value equals the bit
            /// pattern of `current`, sets it to `new` and returns `Ok(())`.
            /// Otherwise, returns `Err(actual)` where `actual` is the
            /// current value.
            ///
            /// # Memory Ordering
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
            /// `Ok(())` on success, or `Err(actual)` on failure.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_float::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(", stringify!($value_type), "::NAN);")]
            #[doc = concat!("assert!(atomic.compare_and_set(", stringify!($value_type), "::NAN, 5.0).is_ok());")]
            /// assert_eq!(atomic.get(), 5.0);
            /// ```
            #[inline]
            pub fn compare_and_set(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> Result<(), $value_type> {
                self.inner
                    .compare_exchange(
                        current.to_bits(),
                        new.to_bits(),
                        Ordering::SeqCst,
                        Ordering::SeqCst,
                    )
                    .map(|_| ())
                    .map_err(<$value_type>::from_bits)
            }

            /// Weak version of compare-and-set.
            ///
            /// May spuriously fail even when the bit patterns match, but
            /// never succeeds when they don't. Should be used in a loop.
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
            /// `Ok(())` on success, or `Err(actual)` on failure.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_float::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(1.0);")]
            /// let mut current = atomic.get();
            /// loop {
            ///     match atomic.weak_compare_and_set(current, current + 1.0) {
            ///         Ok(_) => break,
            ///         Err(actual) => current = actual,
            ///     }
            /// }
            /// assert_eq!(atomic.get(), 2.0);
            /// ```
            #[inline]
            pub fn weak_compare_and_set(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> Result<(), $value_type> {
                self.inner
                    .compare_exchange_weak(
                        current.to_bits(),
                        new.to_bits(),
                        Ordering::SeqCst,
                        Ordering::SeqCst,
                    )
                    .map(|_| ())
                    .map_err(<$value_type>::from_bits)
            }

            /// Compares and exchanges the value atomically, returning the
            /// previous value.
            ///
            /// If the bit pattern of the current value equals the bit
            /// pattern of `current`, sets it to `new`. Either way, returns
            /// the value witnessed before the operation.
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
            /// The value before the operation.
            #[inline]
            pub fn compare_and_exchange(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> $value_type {
                let prev_bits = self
                    .inner
                    .compare_exchange(
                        current.to_bits(),
                        new.to_bits(),
                        Ordering::SeqCst,
                        Ordering::SeqCst,
                    )
                    .unwrap_or_else(|actual_bits| actual_bits);
                <$value_type>::from_bits(prev_bits)
            }

            /// Increments the value by 1, returning the old value.
            #[inline]
            pub fn get_and_increment(&self) -> $value_type {
                self.cas_loop("get_and_increment", |x| x + 1.0).0
            }

            /// Increments the value by 1, returning the new value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_float::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10.0);")]
            /// assert_eq!(atomic.increment_and_get(), 11.0);
            /// ```
            #[inline]
            pub fn increment_and_get(&self) -> $value_type {
                self.cas_loop("increment_and_get", |x| x + 1.0).1
            }

            /// Decrements the value by 1, returning the old value.
            #[inline]
            pub fn get_and_decrement(&self) -> $value_type {
                self.cas_loop("get_and_decrement", |x| x - 1.0).0
            }

            /// Decrements the value by 1, returning the new value.
            #[inline]
            pub fn decrement_and_get(&self) -> $value_type {
                self.cas_loop("decrement_and_get", |x| x - 1.0).1
            }

            /// Atomically adds a value, returning the old value.
            ///
            /// # Memory Ordering
            ///
            /// Internally uses a CAS loop with a weak `SeqCst` CAS. The loop
            /// re-reads and re-applies the addition after every failed
            /// attempt, so concurrent additions are never lost.
            ///
            /// # Performance
            ///
            /// May be slow in high-contention scenarios due to the CAS loop.
            ///
            /// # Parameters
            ///
            /// * `delta` - The value to add.
            ///
            /// # Returns
            ///
            /// The old value before adding.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_float::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10.0);")]
            /// assert_eq!(atomic.get_and_add(5.5), 10.0);
            /// assert_eq!(atomic.get(), 15.5);
            /// ```
            #[inline]
            pub fn get_and_add(&self, delta: $value_type) -> $value_type {
                self.cas_loop("get_and_add", |x| x + delta).0
            }

            /// Atomically adds a value, returning the new value.
            ///
            /// Same retry discipline as [`get_and_add`](Self::get_and_add).
            ///
            /// # Parameters
            ///
            /// * `delta` - The value to add.
            ///
            /// # Returns
            ///
            /// The new value after adding.
            #[inline]
            pub fn add_and_get(&self, delta: $value_type) -> $value_type {
                self.cas_loop("add_and_get", |x| x + delta).1
            }

            /// Atomically subtracts a value, returning the old value.
            #[inline]
            pub fn get_and_sub(&self, delta: $value_type) -> $value_type {
                self.cas_loop("get_and_sub", |x| x - delta).0
            }

            /// Atomically subtracts a value, returning the new value.
            #[inline]
            pub fn sub_and_get(&self, delta: $value_type) -> $value_type {
                self.cas_loop("sub_and_get", |x| x - delta).1
            }

            /// Atomically multiplies by a factor, returning the old value.
            #[inline]
            pub fn get_and_mul(&self, factor: $value_type) -> $value_type {
                self.cas_loop("get_and_mul", |x| x * factor).0
            }

            /// Atomically multiplies by a factor, returning the new value.
            #[inline]
            pub fn mul_and_get(&self, factor: $value_type) -> $value_type {
                self.cas_loop("mul_and_get", |x| x * factor).1
            }

            /// Atomically divides by a divisor, returning the old value.
            ///
            /// Division by zero follows IEEE-754 and yields an infinity or
            /// NaN rather than panicking.
            #[inline]
            pub fn get_and_div(&self, divisor: $value_type) -> $value_type {
                self.cas_loop("get_and_div", |x| x / divisor).0
            }

            /// Atomically divides by a divisor, returning the new value.
            #[inline]
            pub fn div_and_get(&self, divisor: $value_type) -> $value_type {
                self.cas_loop("div_and_get", |x| x / divisor).1
            }

            /// Updates the value using a function, returning the old value.
            ///
            /// # Memory Ordering
            ///
            /// Internally uses a CAS loop with a weak `SeqCst` CAS.
            ///
            /// # Side Effects
            ///
            /// `f` may be called more than once when other threads update
            /// the value concurrently; results of calls whose CAS failed are
            /// discarded. `f` must therefore be free of side effects.
            ///
            /// # Parameters
            ///
            /// * `f` - A function that takes the current value and returns
            ///   the new value.
            ///
            /// # Returns
            ///
            /// The old value before the update.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_float::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10.0);")]
            /// assert_eq!(atomic.get_and_update(|x| x * 2.0), 10.0);
            /// assert_eq!(atomic.get(), 20.0);
            /// ```
            #[inline]
            pub fn get_and_update<F>(&self, f: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                self.cas_loop("get_and_update", f).0
            }

            /// Updates the value using a function, returning the new value.
            ///
            /// Same retry discipline and side-effect rules as
            /// [`get_and_update`](Self::get_and_update).
            ///
            /// # Parameters
            ///
            /// * `f` - A function that takes the current value and returns
            ///   the new value.
            ///
            /// # Returns
            ///
            /// The new value after the update.
            #[inline]
            pub fn update_and_get<F>(&self, f: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                self.cas_loop("update_and_get", f).1
            }

            /// Combines the value with `x` using a function, returning the
            /// old value.
            ///
            /// The function is called as `f(current, x)` inside a CAS loop
            /// and must be free of side effects.
            ///
            /// # Parameters
            ///
            /// * `x` - The operand combined with the current value.
            /// * `f` - The accumulator function.
            ///
            /// # Returns
            ///
            /// The old value before the update.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_float::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10.0);")]
            /// assert_eq!(atomic.get_and_accumulate(10.0, |a, b| a + b), 10.0);
            /// assert_eq!(atomic.get(), 20.0);
            /// ```
            #[inline]
            pub fn get_and_accumulate<F>(
                &self,
                x: $value_type,
                f: F,
            ) -> $value_type
            where
                F: Fn($value_type, $value_type) -> $value_type,
            {
                self.cas_loop("get_and_accumulate", |current| f(current, x)).0
            }

            /// Combines the value with `x` using a function, returning the
            /// new value.
            ///
            /// The function is called as `f(current, x)` inside a CAS loop
            /// and must be free of side effects.
            ///
            /// # Parameters
            ///
            /// * `x` - The operand combined with the current value.
            /// * `f` - The accumulator function.
            ///
            /// # Returns
            ///
            /// The new value after the update.
            #[inline]
            pub fn accumulate_and_get<F>(
                &self,
                x: $value_type,
                f: F,
            ) -> $value_type
            where
                F: Fn($value_type, $value_type) -> $value_type,
            {
                self.cas_loop("accumulate_and_get", |current| f(current, x)).1
            }

            /// Returns the current value converted to `i32`.
            ///
            /// Saturates at the bounds of `i32`; NaN converts to 0.
            #[inline]
            pub fn int_value(&self) -> i32 {
                self.get() as i32
            }

            /// Returns the current value converted to `i64`.
            ///
            /// Saturates at the bounds of `i64`; NaN converts to 0.
            #[inline]
            pub fn long_value(&self) -> i64 {
                self.get() as i64
            }

            /// Returns the current value converted to `f32`.
            #[inline]
            #[allow(clippy::unnecessary_cast)]
            pub fn float_value(&self) -> f32 {
                self.get() as f32
            }

            /// Returns the current value converted to `f64`.
            #[inline]
            #[allow(clippy::unnecessary_cast)]
            pub fn double_value(&self) -> f64 {
                self.get() as f64
            }

            /// Runs the CAS retry loop shared by every read-modify-write
            /// operation.
            ///
            /// The loop works on raw bits: a failed CAS hands back the bits
            /// it observed, and the next attempt recomputes from exactly
            /// those bits.
            ///
            /// # Returns
            ///
            /// The `(old, new)` pair of the successful attempt.
            #[inline]
            fn cas_loop<F>(
                &self,
                operation: &'static str,
                f: F,
            ) -> ($value_type, $value_type)
            where
                F: Fn($value_type) -> $value_type,
            {
                let mut current_bits = self.inner.load(Ordering::SeqCst);
                let mut retries: u32 = 0;
                loop {
                    let current = <$value_type>::from_bits(current_bits);
                    let new = f(current);
                    match self.inner.compare_exchange_weak(
                        current_bits,
                        new.to_bits(),
                        Ordering::SeqCst,
                        Ordering::SeqCst,
                    ) {
                        Ok(_) => {
                            trace_contention!(
                                stringify!($name),
                                operation,
                                retries
                            );
                            return (current, new);
                        }
                        Err(actual_bits) => {
                            current_bits = actual_bits;
                            retries = retries.saturating_add(1);
                        }
                    }
                }
            }
        }

        // Trait implementations: These methods forward to the struct's
        // direct implementations for API consistency. This design allows
        // both convenient direct method calls (atomic.get()) and generic
        // trait-based programming (fn foo<T: Atomic>(atomic: &T)).

        impl crate::atomic::traits::Atomic for $name {
            type Value = $value_type;

            #[inline]
            fn get(&self) -> $value_type {
                self.get()
            }

            #[inline]
            fn set(&self, value: $value_type) {
                self.set(value);
            }

            #[inline]
            fn lazy_set(&self, value: $value_type) {
                self.lazy_set(value);
            }

            #[inline]
            fn get_and_set(&self, value: $value_type) -> $value_type {
                self.get_and_set(value)
            }

            #[inline]
            fn compare_and_set(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> Result<(), $value_type> {
                self.compare_and_set(current, new)
            }

            #[inline]
            fn weak_compare_and_set(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> Result<(), $value_type> {
                self.weak_compare_and_set(current, new)
            }

            #[inline]
            fn compare_and_exchange(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> $value_type {
                self.compare_and_exchange(current, new)
            }
        }

        impl crate::atomic::traits::UpdatableAtomic for $name {
            #[inline]
            fn get_and_update<F>(&self, f: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                self.get_and_update(f)
            }

            #[inline]
            fn update_and_get<F>(&self, f: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                self.update_and_get(f)
            }

            #[inline]
            fn get_and_accumulate<F>(&self, x: $value_type, f: F) -> $value_type
            where
                F: Fn($value_type, $value_type) -> $value_type,
            {
                self.get_and_accumulate(x, f)
            }

            #[inline]
            fn accumulate_and_get<F>(&self, x: $value_type, f: F) -> $value_type
            where
                F: Fn($value_type, $value_type) -> $value_type,
            {
                self.accumulate_and_get(x, f)
            }
        }

        impl crate::atomic::traits::AtomicNumber for $name {
            #[inline]
            fn get_and_increment(&self) -> $value_type {
                self.get_and_increment()
            }

            #[inline]
            fn increment_and_get(&self) -> $value_type {
                self.increment_and_get()
            }

            #[inline]
            fn get_and_decrement(&self) -> $value_type {
                self.get_and_decrement()
            }

            #[inline]
            fn decrement_and_get(&self) -> $value_type {
                self.decrement_and_get()
            }

            #[inline]
            fn get_and_add(&self, delta: $value_type) -> $value_type {
                self.get_and_add(delta)
            }

            #[inline]
            fn add_and_get(&self, delta: $value_type) -> $value_type {
                self.add_and_get(delta)
            }

            #[inline]
            fn int_value(&self) -> i32 {
                self.int_value()
            }

            #[inline]
            fn long_value(&self) -> i64 {
                self.long_value()
            }

            #[inline]
            fn float_value(&self) -> f32 {
                self.float_value()
            }

            #[inline]
            fn double_value(&self) -> f64 {
                self.double_value()
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(0.0)
            }
        }

        impl From<$value_type> for $name {
            #[inline]
            fn from(value: $value_type) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("value", &self.get())
                    .finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.get(), f)
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.get(), serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                <$value_type as serde::Deserialize<'de>>::deserialize(deserializer)
                    .map(Self::new)
            }
        }
    };
}

pub(crate) use impl_atomic_float;
