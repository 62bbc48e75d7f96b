//! Unified error type for menupad.
//!
//! We avoid `alloc` - all variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A device handle is absent or not ready, so the transaction was never
    /// attempted.  Distinct from transport failures so the bus fault counter
    /// is not polluted by programming errors.
    NotReady,

    /// The bus transaction was NACKed or failed at the transport level.
    Transport,

    /// The bus transaction exceeded its deadline.
    Timeout,
}
