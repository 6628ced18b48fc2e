//! Tests for SearchContext kernels and dispatch.

#![allow(clippy::cast_precision_loss)]

use std::thread;

use super::config::KernelConfig;
use super::context::SearchContext;
use super::matrix::Matrix;

const EPSILON: f64 = 1e-9;

fn sample_data(rows: usize, cols: usize) -> (Vec<f64>, Matrix<f64>) {
    let query: Vec<f64> = (0..cols).map(|j| (j as f64 * 0.3).cos() + 1.5).collect();
    let values: Vec<f64> = (0..rows * cols)
        .map(|k| ((k as f64) * 0.17).sin() + 2.0)
        .collect();
    let matrix = Matrix::new(rows, cols, values).expect("valid shape");
    (query, matrix)
}

fn parallel(workers: usize) -> KernelConfig {
    KernelConfig::new()
        .with_multithread(true)
        .with_max_workers(workers)
}

fn assert_all_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= EPSILON * e.abs().max(1.0),
            "row {i}: got {a}, expected {e}"
        );
    }
}

#[test]
fn test_manhattan_distance_known_values() {
    let ctx = SearchContext::from_rows(
        vec![1.0_f32, 2.0, 3.0],
        vec![vec![1.0, 2.0, 3.0], vec![4.0, 0.0, 3.5]],
        KernelConfig::default(),
    )
    .expect("equal rows");

    assert_eq!(ctx.manhattan_distance(0), 0.0);
    assert_eq!(ctx.manhattan_distance(1), 5.5);
}

#[test]
fn test_manhattan_distance_same_across_simd_flag() {
    for cols in [1, 3, 5, 127, 128, 129, 300] {
        let (query, data) = sample_data(4, cols);
        let scalar = SearchContext::new(query.clone(), data.clone(), KernelConfig::new());
        let simd = SearchContext::new(query, data, KernelConfig::new().with_simd(true));
        for row in 0..4 {
            let a = scalar.manhattan_distance(row);
            let b = simd.manhattan_distance(row);
            assert!((a - b).abs() <= EPSILON * a.max(1.0), "cols={cols} row={row}");
        }
    }
}

#[test]
#[should_panic(expected = "out of range")]
fn test_manhattan_distance_row_out_of_range() {
    let (query, data) = sample_data(2, 4);
    let ctx = SearchContext::new(query, data, KernelConfig::default());
    let _ = ctx.manhattan_distance(2);
}

#[test]
fn test_dot_product_all_sequential_vs_parallel() {
    for rows in [0, 1, 2, 7, 64] {
        let (query, data) = sample_data(rows, 33);
        let expected = SearchContext::new(query.clone(), data.clone(), KernelConfig::new())
            .dot_product_all();
        assert_eq!(expected.len(), rows);

        for workers in [1, 2, 0] {
            let actual =
                SearchContext::new(query.clone(), data.clone(), parallel(workers)).dot_product_all();
            assert_all_close(&actual, &expected);
        }
    }
}

#[test]
fn test_dot_product_all_fully_populated() {
    let (query, data) = sample_data(200, 16);
    for workers in [1, 2, 0] {
        let result = SearchContext::new(query.clone(), data.clone(), parallel(workers))
            .dot_product_all();
        assert_eq!(result.len(), 200);
        assert!(result.iter().all(|&v| v != 0.0), "workers={workers}");
    }
}

#[test]
fn test_dot_product_known_values() {
    let ctx = SearchContext::from_rows(
        vec![1.0_f64, -1.0],
        vec![vec![2.0, 3.0], vec![0.5, 0.5], vec![-4.0, 4.0]],
        parallel(2),
    )
    .expect("equal rows");
    assert_eq!(ctx.dot_product_all(), vec![-1.0, 0.0, -8.0]);
}

#[test]
fn test_half_squared_norm_all_formula() {
    let (query, data) = sample_data(50, 17);
    let expected: Vec<f64> = data
        .rows_iter()
        .map(|row| 0.5 * row.iter().map(|x| x * x).sum::<f64>())
        .collect();

    for config in [KernelConfig::new(), parallel(3), parallel(0)] {
        let actual = SearchContext::new(query.clone(), data.clone(), config).half_squared_norm_all();
        assert_all_close(&actual, &expected);
    }
}

#[test]
fn test_manhattan_all_matches_per_row() {
    let (query, data) = sample_data(40, 131);
    let ctx = SearchContext::new(query, data, parallel(4).with_simd(true));
    let all = ctx.manhattan_all();
    assert_eq!(all.len(), 40);
    for (row, value) in all.iter().enumerate() {
        assert_eq!(*value, ctx.manhattan_distance(row));
    }
}

#[test]
fn test_squared_euclidean_all_matches_direct() {
    let (query, data) = sample_data(25, 12);
    let expected: Vec<f64> = data
        .rows_iter()
        .map(|row| {
            query
                .iter()
                .zip(row)
                .map(|(q, d)| (q - d) * (q - d))
                .sum::<f64>()
        })
        .collect();

    let actual = SearchContext::new(query, data, parallel(2)).squared_euclidean_all();
    for (a, e) in actual.iter().zip(&expected) {
        assert!((a - e).abs() <= 1e-9 * e.max(1.0), "got {a}, expected {e}");
    }
}

#[test]
fn test_squared_euclidean_identical_vectors_is_zero() {
    let ctx = SearchContext::from_rows(
        vec![0.1_f32, 0.2, 0.3],
        vec![vec![0.1, 0.2, 0.3]],
        KernelConfig::default(),
    )
    .expect("equal rows");
    let distance = ctx.squared_euclidean_all()[0];
    assert!(distance >= 0.0);
    assert!(distance < 1e-6);
}

#[test]
fn test_zero_length_rows_return_zero() {
    let data = Matrix::<f32>::new(3, 0, Vec::new()).expect("zero columns");
    for config in [
        KernelConfig::new(),
        KernelConfig::new().with_simd(true),
        parallel(2),
    ] {
        let ctx = SearchContext::new(Vec::<f32>::new(), data.clone(), config);
        assert_eq!(ctx.manhattan_distance(0), 0.0);
        assert_eq!(ctx.dot_product_all(), vec![0.0; 3]);
        assert_eq!(ctx.half_squared_norm_all(), vec![0.0; 3]);
    }
}

#[test]
fn test_workers_resolved_at_construction() {
    let (query, data) = sample_data(1, 1);
    let fixed = SearchContext::new(query.clone(), data.clone(), parallel(5));
    assert_eq!(fixed.workers().get(), 5);

    let auto = SearchContext::new(query, data, parallel(0));
    assert_eq!(auto.workers(), KernelConfig::new().effective_workers());
    assert_eq!(auto.config().max_workers, 0);
}

#[test]
fn test_shared_context_queried_concurrently() {
    let (query, data) = sample_data(64, 24);
    let ctx = SearchContext::new(query, data, parallel(0));
    let expected = ctx.dot_product_all();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| ctx.dot_product_all())).collect();
        for handle in handles {
            let result = handle.join().expect("worker thread");
            assert_all_close(&result, &expected);
        }
    });
}

#[test]
fn test_estimate_bin_size_uses_row_count() {
    let (query, data) = sample_data(300, 1);
    let ctx = SearchContext::new(query, data, KernelConfig::default());
    assert_eq!(ctx.estimate_bin_size(), 2);
}

#[test]
#[should_panic(expected = "Vector dimensions must match")]
fn test_parallel_manhattan_all_mismatched_query_panics() {
    let data = Matrix::new(32, 2, vec![1.0_f32; 64]).expect("valid shape");
    let ctx = SearchContext::new(vec![1.0_f32; 4], data, parallel(2).with_simd(true));
    let _ = ctx.manhattan_all();
}
