//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for [`HeapArena`](crate::HeapArena).
///
/// Caps how much the arena may hold at once. Validated at construction;
/// immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Maximum number of simultaneously live allocations.
    ///
    /// Default: 64. Must be at least 1.
    pub max_allocations: usize,

    /// Maximum number of `i32` elements across all live allocations.
    /// A scalar counts as one element.
    ///
    /// Default: 1_048_576 (4MB). Must be at least 1.
    pub max_elements: usize,
}

impl ArenaConfig {
    /// Default live-allocation cap.
    pub const DEFAULT_MAX_ALLOCATIONS: usize = 64;

    /// Default live-element cap.
    pub const DEFAULT_MAX_ELEMENTS: usize = 1 << 20;

    /// Create a config with the given caps.
    pub fn new(max_allocations: usize, max_elements: usize) -> Self {
        Self {
            max_allocations,
            max_elements,
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.max_allocations == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "max_allocations must be at least 1".into(),
            });
        }
        if self.max_elements == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "max_elements must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Element cap expressed in bytes.
    pub fn max_bytes(&self) -> usize {
        self.max_elements.saturating_mul(std::mem::size_of::<i32>())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ALLOCATIONS, Self::DEFAULT_MAX_ELEMENTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_element_cap_is_4mb() {
        assert_eq!(ArenaConfig::default().max_bytes(), 4 * 1024 * 1024);
    }

    #[test]
    fn default_is_valid() {
        assert!(ArenaConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_caps_rejected() {
        assert!(matches!(
            ArenaConfig::new(0, 10).validate(),
            Err(ArenaError::InvalidConfig { .. })
        ));
        assert!(matches!(
            ArenaConfig::new(10, 0).validate(),
            Err(ArenaError::InvalidConfig { .. })
        ));
    }
}
