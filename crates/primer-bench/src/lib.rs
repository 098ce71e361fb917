//! Benchmark profiles for the Primer workspace.
//!
//! Provides pre-built [`DriverConfig`] profiles:
//!
//! - [`reference_profile`]: the default run (20-element buffers, 39-value sequence)
//! - [`stress_profile`]: 1M-element buffers and a 100K-value sequence

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use primer_arena::ArenaConfig;
use primer_engine::DriverConfig;

/// The default run, unchanged.
pub fn reference_profile() -> DriverConfig {
    DriverConfig::default()
}

/// A large run for throughput measurements.
///
/// Buffers hold 1M elements each and the sequence grows by 100K values.
/// The arena is sized to exactly the run's peak.
pub fn stress_profile() -> DriverConfig {
    let buffer_len = 1 << 20;
    let mut config = DriverConfig {
        buffer_len,
        sum_len: buffer_len,
        fill_value: 1,
        append_count: 100_000,
        seed: smallvec::smallvec![6, 2, 3, 7, 5, 4, 1],
        ..DriverConfig::default()
    };
    config.arena = ArenaConfig::new(
        primer_engine::config::PEAK_ALLOCATIONS,
        config.peak_elements(),
    );
    config
}
