//! Comparison drivers
//!
//! Each driver runs the eager pass, releases its result, then runs the lazy
//! pass, bracketing every pass with a single combined construction-plus-
//! consumption interval. Consumption folds the produced values into a sum
//! (discarded through `black_box`) to force complete computation.

use std::hint::black_box;
use std::time::Instant;

use tracing::{debug, info};

use crate::memory::MemoryProbe;
use crate::producer;
use crate::report::{ComparisonReport, Measurement, RowReport};
use crate::BenchError;

/// Fixed element count for the row scenario.
pub const ROW_COUNT: usize = 1_000_000;

/// Measure the eager and lazy square producers for `n` elements.
///
/// Samples time and resident memory around each pass; the eager result is
/// dropped before the lazy pass starts so its allocation does not inflate
/// the second measurement. Probe failures propagate untouched.
pub fn run_comparison<P: MemoryProbe>(
    n: u64,
    probe: &mut P,
) -> Result<ComparisonReport, BenchError> {
    info!(elements = n, "comparing eager and lazy square production");

    let start = Instant::now();
    let mem_before = probe.resident_memory_mb()?;

    let values = producer::squares_eager(n);
    black_box(sum_squares(values.iter().copied()));

    let eager = Measurement {
        seconds: start.elapsed().as_secs_f64(),
        delta_mb: probe.resident_memory_mb()? - mem_before,
    };
    drop(values);
    debug!(
        seconds = eager.seconds,
        delta_mb = eager.delta_mb,
        "eager pass finished"
    );

    let start = Instant::now();
    let mem_before = probe.resident_memory_mb()?;

    black_box(sum_squares(producer::squares_lazy(n)));

    let lazy = Measurement {
        seconds: start.elapsed().as_secs_f64(),
        delta_mb: probe.resident_memory_mb()? - mem_before,
    };
    debug!(
        seconds = lazy.seconds,
        delta_mb = lazy.delta_mb,
        "lazy pass finished"
    );

    Ok(ComparisonReport::new(n, eager, lazy))
}

/// Measure the eager and lazy row producers, time only.
///
/// Fixed at [`ROW_COUNT`] rows; mimics reading a large file line by line.
pub fn run_row_comparison() -> RowReport {
    info!(rows = ROW_COUNT, "comparing eager and lazy row production");

    let start = Instant::now();
    let rows = producer::rows_eager(ROW_COUNT);
    for row in &rows {
        black_box(row);
    }
    let eager_seconds = start.elapsed().as_secs_f64();
    drop(rows);

    let start = Instant::now();
    for row in producer::rows_lazy(ROW_COUNT) {
        black_box(&row);
    }
    let lazy_seconds = start.elapsed().as_secs_f64();

    debug!(eager_seconds, lazy_seconds, "row passes finished");
    RowReport {
        eager_seconds,
        lazy_seconds,
    }
}

/// Forcing sum; u128 so the squares of the default 10M-element run cannot
/// overflow the accumulator.
fn sum_squares<I: Iterator<Item = u64>>(values: I) -> u128 {
    values.fold(0u128, |acc, v| acc + u128::from(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_squares_matches_closed_form() {
        // sum of i^2 for i in 0..n is (n-1)n(2n-1)/6
        let n = 1_000u128;
        let expected = (n - 1) * n * (2 * n - 1) / 6;
        assert_eq!(sum_squares(producer::squares_lazy(1_000)), expected);
        assert_eq!(
            sum_squares(producer::squares_eager(1_000).into_iter()),
            expected
        );
    }

    #[test]
    fn test_sum_of_empty_sequence_is_zero() {
        assert_eq!(sum_squares(producer::squares_lazy(0)), 0);
        assert_eq!(sum_squares(producer::squares_eager(0).into_iter()), 0);
    }
}
