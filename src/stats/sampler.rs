//! Resource sampler backed by sysinfo.

use sysinfo::{Pid, System};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Memory and load at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResourceSnapshot {
    /// Resident set size of this process in bytes
    pub memory_bytes: u64,
    /// 1-minute system load average
    pub load_average: f64,
}

impl ResourceSnapshot {
    pub fn memory_mb(&self) -> f64 {
        self.memory_bytes as f64 / BYTES_PER_MB
    }

    /// `"12.34 MB"`
    pub fn memory_display(&self) -> String {
        format!("{:.2} MB", self.memory_mb())
    }

    /// `"0.52%"`
    pub fn load_display(&self) -> String {
        format!("{:.2}%", self.load_average)
    }
}

/// Source of resource snapshots.
pub trait ResourceSampler {
    fn sample(&mut self) -> ResourceSnapshot;
}

/// Samples the current process and system through sysinfo.
pub struct SystemSampler {
    system: System,
    pid: Option<Pid>,
}

impl SystemSampler {
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::warn!(error = e, "cannot determine own pid, memory will read 0");
                None
            }
        };
        Self {
            system: System::new(),
            pid,
        }
    }
}

impl Default for SystemSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceSampler for SystemSampler {
    fn sample(&mut self) -> ResourceSnapshot {
        let memory_bytes = self
            .pid
            .filter(|pid| self.system.refresh_process(*pid))
            .and_then(|pid| self.system.process(pid))
            .map(|process| process.memory())
            .unwrap_or(0);

        ResourceSnapshot {
            memory_bytes,
            load_average: System::load_average().one,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_is_reported_in_megabytes_with_two_decimals() {
        let snapshot = ResourceSnapshot {
            memory_bytes: 52_428_800 + 524_288,
            load_average: 0.5234,
        };
        assert_eq!(snapshot.memory_mb(), 50.5);
        assert_eq!(snapshot.memory_display(), "50.50 MB");
        assert_eq!(snapshot.load_display(), "0.52%");
    }

    #[test]
    fn empty_snapshot_formats_as_zero() {
        let snapshot = ResourceSnapshot::default();
        assert_eq!(snapshot.memory_display(), "0.00 MB");
        assert_eq!(snapshot.load_display(), "0.00%");
    }

    #[test]
    fn system_sampler_sees_own_process() {
        let mut sampler = SystemSampler::new();
        let snapshot = sampler.sample();
        if cfg!(any(target_os = "linux", target_os = "macos")) {
            assert!(snapshot.memory_bytes > 0);
        }
        assert!(snapshot.load_average >= 0.0);
    }
}
