//! Platform memory accounting capability

use cardmem_core::MemoryInfo;

/// Memory pools tracked by the card platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryPool {
    /// Storage retained across power cycles
    Persistent,
    /// Volatile memory cleared on card reset
    TransientReset,
    /// Volatile memory cleared when the applet is deselected
    TransientDeselect,
}

/// Capability interface over the platform's resource accounting facility
///
/// Implementations report the number of free bytes per pool as a 16-bit
/// count. Measuring is read-only: repeated queries with no intervening
/// allocation activity return identical values.
pub trait MemoryAccounting {
    /// Free bytes currently available in `pool`
    fn available(&self, pool: MemoryPool) -> u16;

    /// Measure all three pools in the fixed reporting order
    fn measure(&self) -> MemoryInfo {
        MemoryInfo {
            persistent: self.available(MemoryPool::Persistent),
            transient_reset: self.available(MemoryPool::TransientReset),
            transient_deselect: self.available(MemoryPool::TransientDeselect),
        }
    }
}

/// Accounting backed by fixed counters
///
/// Stands in for a real platform in tests and virtual card setups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAccounting {
    /// Free persistent bytes
    pub persistent: u16,
    /// Free transient-reset bytes
    pub transient_reset: u16,
    /// Free transient-deselect bytes
    pub transient_deselect: u16,
}

impl MemoryAccounting for FixedAccounting {
    fn available(&self, pool: MemoryPool) -> u16 {
        match pool {
            MemoryPool::Persistent => self.persistent,
            MemoryPool::TransientReset => self.transient_reset,
            MemoryPool::TransientDeselect => self.transient_deselect,
        }
    }
}
