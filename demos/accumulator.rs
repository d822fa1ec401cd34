/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Accumulator Example
//!
//! Demonstrates using atomic floats as thread-safe running statistics.

use prism3_atomic_float::{AtomicF64, AtomicNumber};
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Atomic Accumulator Example ===\n");

    // Example 1: Basic arithmetic
    println!("1. Basic Arithmetic:");
    let total = AtomicF64::new(10.0);
    println!("   Initial value: {}", total);

    total.increment_and_get();
    println!("   After increment: {}", total);

    total.add_and_get(2.5);
    println!("   After adding 2.5: {}", total);

    let old = total.get_and_decrement();
    println!("   After decrement - old: {}, new: {}", old, total);

    // Example 2: Multi-threaded running sum, minimum and maximum
    println!("\n2. Multi-threaded Running Statistics:");
    let sum = Arc::new(AtomicF64::new(0.0));
    let min = Arc::new(AtomicF64::new(f64::INFINITY));
    let max = Arc::new(AtomicF64::new(f64::NEG_INFINITY));
    let num_threads = 8;
    let samples_per_thread = 1000;

    let mut handles = vec![];
    for i in 0..num_threads {
        let sum = sum.clone();
        let min = min.clone();
        let max = max.clone();
        let handle = thread::spawn(move || {
            for j in 0..samples_per_thread {
                let sample = ((i * samples_per_thread + j) % 97) as f64 * 0.5;
                sum.add_and_get(sample);
                min.accumulate_and_get(sample, f64::min);
                max.accumulate_and_get(sample, f64::max);
            }
            println!("   Thread {} completed", i);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let count = (num_threads * samples_per_thread) as f64;
    println!("   Sum: {}", sum);
    println!("   Mean: {:.3}", sum.get() / count);
    println!("   Min: {}, Max: {}", min, max);

    // Example 3: Functional updates
    println!("\n3. Functional Updates:");
    let balance = AtomicF64::new(100.0);
    println!("   Initial balance: {}", balance);

    let old = balance.get_and_update(|x| x * 1.05);
    println!("   After 5% interest - old: {}, new: {:.2}", old, balance.get());

    let new = balance.update_and_get(|x| (x - 20.0).max(0.0));
    println!("   After withdrawing 20 - new: {:.2}", new);

    // Example 4: Generic code over atomic numbers
    println!("\n4. Numeric Coercions:");
    report(&balance);

    println!("\n=== Example completed ===");
}

fn report<T: AtomicNumber>(atomic: &T) {
    println!("   int_value: {}", atomic.int_value());
    println!("   long_value: {}", atomic.long_value());
    println!("   float_value: {}", atomic.float_value());
    println!("   double_value: {}", atomic.double_value());
}
