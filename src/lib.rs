//! # Eager vs. Lazy Sequence Production
//!
//! This crate measures the space/time tradeoff between two ways of
//! producing a derived sequence:
//!
//! 1. **Eager**: materialize all values into a `Vec` before use
//! 2. **Lazy**: yield each value on demand from a cursor `Iterator`
//!
//! Both producers compute the same values; the eager one pays O(n) resident
//! memory to hold them all at once, the lazy one pays a cursor's worth.
//! The drivers in [`bench`] run each producer while sampling wall-clock
//! time and process resident memory, then render a comparison report with
//! derived ratios.
//!
//! ## Usage Example
//!
//! ```ignore
//! use seqbench::{run_comparison, SysinfoProbe};
//!
//! let mut probe = SysinfoProbe::new();
//! let report = run_comparison(10_000_000, &mut probe)?;
//! println!("{report}");
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - each implements one piece of the measurement
pub mod bench;      // Comparison drivers
pub mod memory;     // Resident-memory probing
pub mod producer;   // Eager and lazy sequence producers
pub mod report;     // Reports, ratios, rendering
pub mod util;       // Helper functions

// Re-exports for convenience
pub use bench::{run_comparison, run_row_comparison, ROW_COUNT};
pub use memory::{MemoryProbe, SysinfoProbe};
pub use producer::{rows_eager, rows_lazy, squares_eager, squares_lazy, Rows, Squares};
pub use report::{ComparisonReport, Measurement, RowReport, MEMORY_RATIO_EPSILON_MB};

use thiserror::Error;

/// Element count for the numeric scenario when none is given.
pub const DEFAULT_ELEMENT_COUNT: u64 = 10_000_000;

/// Errors that can occur while measuring
///
/// There is no recovery path: a probe that cannot see its own process makes
/// every subsequent measurement meaningless, so callers propagate and abort.
#[derive(Error, Debug)]
pub enum BenchError {
    /// The operating system did not report the inspected process.
    #[error("process {pid} is not visible to the memory probe")]
    ProcessNotVisible {
        /// Identifier of the process whose memory was requested
        pid: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_element_count() {
        assert_eq!(DEFAULT_ELEMENT_COUNT, 10_000_000);
    }

    #[test]
    fn test_error_message_names_pid() {
        let err = BenchError::ProcessNotVisible { pid: 42 };
        assert!(err.to_string().contains("42"));
    }
}
