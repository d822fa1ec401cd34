/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Gauge Example
//!
//! Demonstrates publishing a floating point gauge between threads, and the
//! bit-pattern semantics of compare-and-set.

use prism3_atomic_float::{AtomicF32, UpdatableAtomic};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    println!("=== Atomic Gauge Example ===\n");

    // Example 1: Publishing a gauge
    println!("1. Publishing a Gauge:");
    let temperature = Arc::new(AtomicF32::new(20.0));

    let sensor = {
        let temperature = temperature.clone();
        thread::spawn(move || {
            for step in 1..=5 {
                // Readers do not need to see each sample immediately
                temperature.lazy_set(20.0 + step as f32 * 0.5);
                thread::sleep(Duration::from_millis(10));
            }
        })
    };

    sensor.join().unwrap();
    println!("   Last reading: {}", temperature);

    // Example 2: Compare-and-set
    println!("\n2. Compare-and-Set:");
    let gauge = AtomicF32::new(10.0);

    match gauge.compare_and_set(10.0, 20.0) {
        Ok(_) => println!("   CAS succeeded: value is now {}", gauge),
        Err(actual) => println!("   CAS failed: actual value was {}", actual),
    }

    match gauge.compare_and_set(10.0, 30.0) {
        Ok(_) => println!("   CAS succeeded: value is now {}", gauge),
        Err(actual) => println!("   CAS failed: actual value was {}", actual),
    }

    // Example 3: Bit-pattern comparison
    println!("\n3. Bit-Pattern Comparison:");
    let gauge = AtomicF32::new(0.0);
    let old = gauge.get_and_set(f32::NAN);
    println!("   Swapped in NaN, old value: {}", old);
    println!(
        "   CAS(NaN -> 5.0) succeeds: {}",
        gauge.compare_and_set(f32::NAN, 5.0).is_ok()
    );
    println!("   Value now: {}", gauge);
    println!(
        "   CAS(-0.0 -> 1.0) on 0.0 succeeds: {}",
        AtomicF32::new(0.0).compare_and_set(-0.0, 1.0).is_ok()
    );

    // Example 4: Checked updates with an optional function
    println!("\n4. Checked Updates:");
    let gauge = AtomicF32::new(2.0);
    let square: Option<fn(f32) -> f32> = Some(|x| x * x);
    let missing: Option<fn(f32) -> f32> = None;

    match gauge.try_update_and_get(square) {
        Ok(value) => println!("   Squared: {}", value),
        Err(e) => println!("   Error: {}", e),
    }

    match gauge.try_update_and_get(missing) {
        Ok(value) => println!("   Updated: {}", value),
        Err(e) => println!("   Error: {}", e),
    }

    println!("\n=== Example completed ===");
}
