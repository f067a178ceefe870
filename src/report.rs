//! Reports, ratios, rendering
//!
//! Pure data derived from the sampled times and memory deltas. The drivers
//! fill these in; `Display` renders the fixed French report format.

use std::fmt;

use crate::util::format_number;

/// Added to the lazy memory delta before dividing, so the ratio stays
/// finite when the lazy side's measured delta rounds to exactly zero.
pub const MEMORY_RATIO_EPSILON_MB: f64 = 0.001;

/// Elapsed time and resident-memory growth for one producer pass.
///
/// The interval covers construction plus full consumption, measured as one
/// combined span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Wall-clock seconds for the whole pass
    pub seconds: f64,
    /// Resident-memory growth over the pass, in megabytes
    pub delta_mb: f64,
}

/// Side-by-side cost of the eager and lazy square producers.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    /// Number of values each producer emitted
    pub element_count: u64,
    /// Cost of the fully materialized pass
    pub eager: Measurement,
    /// Cost of the on-demand pass
    pub lazy: Measurement,
}

impl ComparisonReport {
    /// Assemble a report from the two measured passes.
    pub fn new(element_count: u64, eager: Measurement, lazy: Measurement) -> Self {
        Self {
            element_count,
            eager,
            lazy,
        }
    }

    /// How many times longer the eager pass took.
    pub fn time_ratio(&self) -> f64 {
        self.eager.seconds / self.lazy.seconds
    }

    /// How many times more resident memory the eager pass claimed.
    ///
    /// The divisor carries [`MEMORY_RATIO_EPSILON_MB`] so a lazy delta of
    /// zero still yields a finite ratio.
    pub fn memory_ratio(&self) -> f64 {
        self.eager.delta_mb / (self.lazy.delta_mb + MEMORY_RATIO_EPSILON_MB)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Comparaison pour {} éléments:",
            format_number(self.element_count)
        )?;
        writeln!(f)?;
        writeln!(f, "Approche traditionnelle (vecteur):")?;
        writeln!(f, "Temps d'exécution: {:.2} secondes", self.eager.seconds)?;
        writeln!(f, "Utilisation mémoire: {:.2} MB", self.eager.delta_mb)?;
        writeln!(f)?;
        writeln!(f, "Approche avec itérateur paresseux:")?;
        writeln!(f, "Temps d'exécution: {:.2} secondes", self.lazy.seconds)?;
        writeln!(f, "Utilisation mémoire: {:.2} MB", self.lazy.delta_mb)?;
        writeln!(f)?;
        writeln!(f, "Ratio d'amélioration:")?;
        writeln!(f, "Temps: {:.1}x plus rapide", self.time_ratio())?;
        write!(f, "Mémoire: {:.1}x moins de mémoire", self.memory_ratio())
    }
}

/// Elapsed time of the eager and lazy row producers.
///
/// The row scenario measures time only; memory stays unsampled there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowReport {
    /// Seconds to materialize and walk every row
    pub eager_seconds: f64,
    /// Seconds to produce and walk every row on demand
    pub lazy_seconds: f64,
}

impl fmt::Display for RowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Test de lecture d'un gros fichier:")?;
        writeln!(f, "Temps version traditionnelle: {:.2}s", self.eager_seconds)?;
        write!(f, "Temps version itérateur: {:.2}s", self.lazy_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_ratio() {
        let report = ComparisonReport::new(
            100,
            Measurement {
                seconds: 2.0,
                delta_mb: 80.0,
            },
            Measurement {
                seconds: 0.5,
                delta_mb: 0.0,
            },
        );
        assert_eq!(report.time_ratio(), 4.0);
    }

    #[test]
    fn test_memory_ratio_is_finite_at_zero_lazy_delta() {
        let report = ComparisonReport::new(
            100,
            Measurement {
                seconds: 1.0,
                delta_mb: 76.29,
            },
            Measurement {
                seconds: 1.0,
                delta_mb: 0.0,
            },
        );
        let ratio = report.memory_ratio();
        assert!(ratio.is_finite(), "ratio {ratio} must stay finite");
        assert_eq!(ratio, 76.29 / MEMORY_RATIO_EPSILON_MB);
    }
}
