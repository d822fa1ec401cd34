/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_float::AtomicF32;
use std::sync::Arc;
use std::thread;

const EPSILON: f32 = 1e-6;

test_atomic_float!(AtomicF32, f32, common);

#[test]
fn test_new_pi() {
    let atomic = AtomicF32::new(std::f32::consts::PI);
    assert!((atomic.get() - std::f32::consts::PI).abs() < EPSILON);
}

#[test]
fn test_get_and_set_nan_then_compare_and_set() {
    let atomic = AtomicF32::new(0.0);
    assert_eq!(atomic.get_and_set(f32::NAN), 0.0);
    assert_eq!(atomic.get().to_bits(), f32::NAN.to_bits());
    assert!(atomic.compare_and_set(f32::NAN, 5.0).is_ok());
    assert_eq!(atomic.get(), 5.0);
}

#[test]
fn test_signaling_nan_bits_preserved() {
    let signaling = f32::from_bits(0x7f80_0001);
    let atomic = AtomicF32::new(signaling);
    assert_eq!(atomic.get().to_bits(), 0x7f80_0001);
    assert!(atomic.compare_and_set(signaling, 1.0).is_ok());
}

#[test]
fn test_double_value_widens() {
    let atomic = AtomicF32::new(0.1);
    assert_eq!(atomic.double_value(), 0.1_f32 as f64);
    assert_eq!(atomic.float_value(), 0.1);
}

#[test]
fn test_debug_display() {
    let atomic = AtomicF32::new(std::f32::consts::PI);
    let debug_str = format!("{:?}", atomic);
    assert!(debug_str.contains("3.14"));
    let display_str = format!("{}", atomic);
    assert!(display_str.contains("3.14"));
}

#[test]
fn test_concurrent_add() {
    let sum = Arc::new(AtomicF32::new(0.0));
    let mut handles = vec![];

    for _ in 0..10 {
        let sum = sum.clone();
        let handle = thread::spawn(move || {
            for _ in 0..100 {
                sum.add_and_get(0.01);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // Due to floating point precision, result may not be exactly 10.0
    let result = sum.get();
    assert!((result - 10.0).abs() < 0.01);
}

#[test]
fn test_concurrent_mul() {
    let value = Arc::new(AtomicF32::new(1.0));
    let mut handles = vec![];

    for _ in 0..5 {
        let value = value.clone();
        let handle = thread::spawn(move || {
            value.mul_and_get(2.0);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // Powers of two are exact, so the result is exactly 2^5
    assert_eq!(value.get(), 32.0);
}

#[test]
fn test_concurrent_div() {
    let value = Arc::new(AtomicF32::new(1024.0));
    let mut handles = vec![];

    for _ in 0..5 {
        let value = value.clone();
        let handle = thread::spawn(move || {
            value.get_and_div(2.0);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(value.get(), 32.0);
}

#[test]
fn test_concurrent_sub_high_contention() {
    let atomic = Arc::new(AtomicF32::new(1000.0));
    let mut handles = vec![];

    for _ in 0..20 {
        let atomic = atomic.clone();
        let handle = thread::spawn(move || {
            for _ in 0..10 {
                atomic.sub_and_get(1.0);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // Whole numbers below 2^24 are exact in f32
    assert_eq!(atomic.get(), 800.0);
}

#[test]
fn test_concurrent_mul_and_div() {
    let atomic = Arc::new(AtomicF32::new(100.0));
    let mut handles = vec![];

    // Some threads multiply, some divide
    for i in 0..10 {
        let atomic = atomic.clone();
        let handle = thread::spawn(move || {
            if i % 2 == 0 {
                atomic.mul_and_get(1.1);
            } else {
                atomic.div_and_get(1.1);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // Rounding depends on the interleaving, but stays close to the start
    let result = atomic.get();
    assert!((result - 100.0).abs() < 0.01);
}
