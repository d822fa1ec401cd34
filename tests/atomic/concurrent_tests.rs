/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_float::{
    AtomicF32,
    AtomicF64,
};
use std::sync::atomic::{
    AtomicBool as StdAtomicBool,
    AtomicUsize as StdAtomicUsize,
    Ordering,
};
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

const NUM_THREADS: usize = 10;
const ITERATIONS_PER_THREAD: usize = 1000;

// Test concurrent increments
#[test]
fn test_concurrent_increment() {
    let counter = Arc::new(AtomicF64::new(0.0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                counter.increment_and_get();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.get(), (NUM_THREADS * ITERATIONS_PER_THREAD) as f64);
}

// Test concurrent decrements
#[test]
fn test_concurrent_decrement() {
    let counter = Arc::new(AtomicF32::new(10000.0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..100 {
                counter.decrement_and_get();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.get(), 10000.0 - (NUM_THREADS * 100) as f32);
}

// Test that each thread's weak CAS loop eventually commits exactly once
#[test]
fn test_concurrent_weak_cas_loop() {
    let atomic = Arc::new(AtomicF64::new(0.0));
    let success_count = Arc::new(StdAtomicUsize::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let atomic = atomic.clone();
        let success_count = success_count.clone();
        let handle = thread::spawn(move || {
            let mut current = atomic.get();
            loop {
                match atomic.weak_compare_and_set(current, current + 1.0) {
                    Ok(_) => {
                        success_count.fetch_add(1, Ordering::Relaxed);
                        break;
                    }
                    Err(actual) => current = actual,
                }
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(atomic.get(), NUM_THREADS as f64);
    assert_eq!(success_count.load(Ordering::Relaxed), NUM_THREADS);
}

// Test that exactly one racing strong CAS wins
#[test]
fn test_concurrent_compare_and_set_single_winner() {
    let atomic = Arc::new(AtomicF32::new(0.0));
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let winners = Arc::new(StdAtomicUsize::new(0));
    let mut handles = vec![];

    for i in 0..NUM_THREADS {
        let atomic = atomic.clone();
        let barrier = barrier.clone();
        let winners = winners.clone();
        let handle = thread::spawn(move || {
            barrier.wait();
            if atomic.compare_and_set(0.0, (i + 1) as f32).is_ok() {
                winners.fetch_add(1, Ordering::Relaxed);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(winners.load(Ordering::Relaxed), 1);
    let final_value = atomic.get();
    assert!(final_value >= 1.0 && final_value <= NUM_THREADS as f32);
}

// Test that swaps form a chain: every value is handed out exactly once
#[test]
fn test_concurrent_get_and_set_hands_out_each_value_once() {
    let atomic = Arc::new(AtomicF64::new(0.0));
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let mut handles = vec![];

    for i in 0..NUM_THREADS {
        let atomic = atomic.clone();
        let barrier = barrier.clone();
        let handle = thread::spawn(move || {
            barrier.wait();
            atomic.get_and_set((i + 1) as f64)
        });
        handles.push(handle);
    }

    let mut seen: Vec<f64> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    seen.push(atomic.get());
    seen.sort_by(f64::total_cmp);

    let expected: Vec<f64> = (0..=NUM_THREADS).map(|i| i as f64).collect();
    assert_eq!(seen, expected);
}

// Test concurrent running maximum through accumulate
#[test]
fn test_concurrent_accumulate_max() {
    let max = Arc::new(AtomicF64::new(f64::NEG_INFINITY));
    let mut handles = vec![];

    for i in 0..NUM_THREADS {
        let max = max.clone();
        let handle = thread::spawn(move || {
            for j in 0..ITERATIONS_PER_THREAD {
                max.accumulate_and_get((i * ITERATIONS_PER_THREAD + j) as f64, f64::max);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(max.get(), (NUM_THREADS * ITERATIONS_PER_THREAD - 1) as f64);
}

// Test that the previous values returned by get_and_add are all distinct
#[test]
fn test_concurrent_get_and_add_returns_distinct_previous_values() {
    let atomic = Arc::new(AtomicF32::new(0.0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let atomic = atomic.clone();
        let handle = thread::spawn(move || {
            (0..100)
                .map(|_| atomic.get_and_add(1.0))
                .collect::<Vec<f32>>()
        });
        handles.push(handle);
    }

    let mut previous: Vec<f32> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();
    previous.sort_by(f32::total_cmp);

    let expected: Vec<f32> = (0..NUM_THREADS * 100).map(|i| i as f32).collect();
    assert_eq!(previous, expected);
}

// Test that lazily published data becomes visible to a spinning reader
#[test]
fn test_lazy_set_publishes_value() {
    let gauge = Arc::new(AtomicF64::new(0.0));
    let done = Arc::new(StdAtomicBool::new(false));

    let reader = {
        let gauge = gauge.clone();
        let done = done.clone();
        thread::spawn(move || {
            while gauge.get() != 42.0 {
                thread::yield_now();
            }
            done.store(true, Ordering::SeqCst);
        })
    };

    gauge.lazy_set(42.0);
    reader.join().unwrap();

    assert!(done.load(Ordering::SeqCst));
    assert_eq!(gauge.get(), 42.0);
}

// Test mixed operations on shared cells
#[test]
fn test_concurrent_mixed_operations() {
    let atomic = Arc::new(AtomicF64::new(0.0));
    let mut handles = vec![];

    for i in 0..NUM_THREADS {
        let atomic = atomic.clone();
        let handle = thread::spawn(move || {
            for _ in 0..100 {
                match i % 4 {
                    0 => {
                        atomic.get_and_add(2.0);
                    }
                    1 => {
                        atomic.update_and_get(|x| x + 2.0);
                    }
                    2 => {
                        atomic.accumulate_and_get(2.0, |a, b| a + b);
                    }
                    _ => {
                        atomic.increment_and_get();
                        atomic.get_and_increment();
                    }
                }
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(atomic.get(), (NUM_THREADS * 100 * 2) as f64);
}
