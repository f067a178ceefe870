//! Resident-memory probing
//!
//! Wraps the operating system's view of the current process behind a
//! single-method capability so tests can substitute a scripted probe.

use sysinfo::{Pid, System};

use crate::BenchError;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Read-only access to the current process's resident memory.
pub trait MemoryProbe {
    /// Resident set size of the process, in megabytes.
    fn resident_memory_mb(&mut self) -> Result<f64, BenchError>;
}

/// Probe backed by the operating system's process table via `sysinfo`.
///
/// Holds the `System` handle across samples so repeated refreshes reuse its
/// internal buffers instead of rebuilding the whole process table.
#[derive(Debug)]
pub struct SysinfoProbe {
    system: System,
    pid: Pid,
}

impl SysinfoProbe {
    /// Create a probe targeting the calling process.
    pub fn new() -> Self {
        Self {
            system: System::new(),
            pid: Pid::from_u32(std::process::id()),
        }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProbe for SysinfoProbe {
    fn resident_memory_mb(&mut self) -> Result<f64, BenchError> {
        if !self.system.refresh_process(self.pid) {
            return Err(BenchError::ProcessNotVisible {
                pid: self.pid.as_u32(),
            });
        }
        let process =
            self.system
                .process(self.pid)
                .ok_or(BenchError::ProcessNotVisible {
                    pid: self.pid.as_u32(),
                })?;
        // `Process::memory` reports bytes
        Ok(process.memory() as f64 / BYTES_PER_MB)
    }
}
