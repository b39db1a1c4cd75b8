//! # Memory Introspection
//!
//! Optional host capability behind a trait seam. When the host cannot
//! report heap usage, the probe answers `None` and the metric is simply
//! omitted - never synthesized, never an error.

/// Source of process memory readings.
pub trait MemoryProbe {
    /// Current resident memory in bytes, or `None` when unavailable.
    fn resident_bytes(&self) -> Option<u64>;
}

/// A probe for hosts without memory introspection. Always `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullProbe;

impl MemoryProbe for NullProbe {
    fn resident_bytes(&self) -> Option<u64> {
        None
    }
}

/// Reads the process resident set from `/proc/self/statm`.
///
/// Degrades to `None` on platforms without procfs or when the file cannot
/// be parsed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResidentMemoryProbe;

impl MemoryProbe for ResidentMemoryProbe {
    fn resident_bytes(&self) -> Option<u64> {
        #[cfg(target_os = "linux")]
        {
            // statm fields are in pages; the second is the resident set.
            const PAGE_SIZE: u64 = 4096;

            let statm = std::fs::read_to_string("/proc/self/statm").ok()?;
            let resident_pages: u64 = statm.split_whitespace().nth(1)?.parse().ok()?;
            Some(resident_pages * PAGE_SIZE)
        }

        #[cfg(not(target_os = "linux"))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_probe_reports_nothing() {
        assert_eq!(NullProbe.resident_bytes(), None);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_resident_probe_reads_procfs() {
        let bytes = ResidentMemoryProbe.resident_bytes();
        // A running test process always has a nonzero resident set.
        assert!(bytes.is_some());
        assert!(bytes.unwrap() > 0);
    }
}
