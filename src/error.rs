//! Error types for the i.MX DWMAC glue
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Variant lookup and probe-time configuration failures
//! - [`ClockError`]: Clock gate and clock rate failures
//! - [`ResetError`]: PHY reset line failures (never fatal to probe)
//! - [`ProbeError`]: Bring-up steps that abort probe
//! - [`LinkError`]: Link-speed callback conditions (never fatal)
//! - [`DiagnosticError`]: Diagnostic attribute lookup and parse failures
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by most driver methods.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and variant errors
///
/// These errors occur while resolving the hardware variant or reading the
/// device description during probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No policy exists for the device-match identity
    UnsupportedVariant,
    /// The encoder has no mapping for the PHY interface mode
    UnsupportedInterface,
    /// Register windows or IRQs could not be resolved
    PlatformResources,
    /// The tx clock could not be resolved
    MissingTxClock,
    /// The variant requires a mem clock that could not be resolved
    MissingMemClock,
    /// The variant requires an interface-mode regmap that could not be resolved
    MissingInterfaceRegmap,
    /// The interface-mode register offset is missing
    MissingInterfaceOffset,
    /// The variant requires a firmware handle that is not available
    MissingFirmware,
    /// Writing the interface-mode selection failed
    InterfaceWriteFailed,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::UnsupportedVariant => "unsupported hardware variant",
            ConfigError::UnsupportedInterface => "unsupported PHY interface mode",
            ConfigError::PlatformResources => "platform resources unavailable",
            ConfigError::MissingTxClock => "tx clock unavailable",
            ConfigError::MissingMemClock => "mem clock unavailable",
            ConfigError::MissingInterfaceRegmap => "interface-mode regmap unavailable",
            ConfigError::MissingInterfaceOffset => "interface-mode register offset missing",
            ConfigError::MissingFirmware => "system controller firmware unavailable",
            ConfigError::InterfaceWriteFailed => "interface-mode write failed",
        }
    }
}

// =============================================================================
// Clock Errors
// =============================================================================

/// Clock resource errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// Enabling the mem clock failed (tx clock untouched)
    MemClockFailed,
    /// Enabling the tx clock failed (mem clock rolled back)
    TxClockFailed,
    /// The tx clock rejected a rate change (previous rate kept)
    RateRejected,
}

impl core::fmt::Display for ClockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ClockError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ClockError::MemClockFailed => "mem clock enable failed",
            ClockError::TxClockFailed => "tx clock enable failed",
            ClockError::RateRejected => "tx clock rate rejected",
        }
    }
}

// =============================================================================
// Reset Errors
// =============================================================================

/// PHY reset line errors
///
/// Probe treats every reset error as a warning and continues without
/// reset control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetError {
    /// The reset line could not be acquired or driven
    AcquireFailed,
    /// Post-reset delay exceeds the 1 s limit
    InvalidPostDelay,
}

impl core::fmt::Display for ResetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ResetError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResetError::AcquireFailed => "failed to acquire PHY reset line",
            ResetError::InvalidPostDelay => "invalid PHY reset post delay",
        }
    }
}

// =============================================================================
// Probe Errors
// =============================================================================

/// Bring-up failures that abort probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProbeError {
    /// Clocks could not be enabled
    ClockInitFailed,
    /// Interface-mode programming failed
    InterfaceInitFailed,
    /// The MAC core refused registration
    CoreRegistrationFailed,
}

impl core::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ProbeError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProbeError::ClockInitFailed => "clock init failed",
            ProbeError::InterfaceInitFailed => "interface init failed",
            ProbeError::CoreRegistrationFailed => "MAC core registration failed",
        }
    }
}

// =============================================================================
// Link Errors
// =============================================================================

/// Link-speed callback conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Speed has no tx clock mapping (clock left unchanged)
    InvalidSpeed,
}

impl core::fmt::Display for LinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LinkError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LinkError::InvalidSpeed => "invalid link speed",
        }
    }
}

// =============================================================================
// Diagnostic Errors
// =============================================================================

/// Diagnostic control plane errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DiagnosticError {
    /// No diagnostic attribute has this name
    UnknownAttribute,
    /// Address payload did not contain six well-formed octets
    MalformedAddress,
    /// PHY identity matches none of the scripted families
    UnrecognizedPhy,
}

impl core::fmt::Display for DiagnosticError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DiagnosticError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DiagnosticError::UnknownAttribute => "unknown diagnostic attribute",
            DiagnosticError::MalformedAddress => "malformed MAC address",
            DiagnosticError::UnrecognizedPhy => "unrecognized PHY",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::UnsupportedVariant)) => { /* ... */ }
///     Err(Error::Clock(ClockError::TxClockFailed)) => { /* ... */ }
///     Err(Error::Link(LinkError::InvalidSpeed)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// Clock error
    Clock(ClockError),
    /// Reset error
    Reset(ResetError),
    /// Probe error
    Probe(ProbeError),
    /// Link error
    Link(LinkError),
    /// Diagnostic error
    Diagnostic(DiagnosticError),
}

impl Error {
    /// Whether this error aborts the operation that raised it
    pub const fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Error::Reset(_)
                | Error::Link(_)
                | Error::Clock(ClockError::RateRejected)
                | Error::Diagnostic(
                    DiagnosticError::MalformedAddress | DiagnosticError::UnrecognizedPhy
                )
        )
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Clock(e) => write!(f, "clock: {}", e.as_str()),
            Error::Reset(e) => write!(f, "reset: {}", e.as_str()),
            Error::Probe(e) => write!(f, "probe: {}", e.as_str()),
            Error::Link(e) => write!(f, "link: {}", e.as_str()),
            Error::Diagnostic(e) => write!(f, "diagnostic: {}", e.as_str()),
        }
    }
}

// From impls for automatic conversion
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<ClockError> for Error {
    fn from(e: ClockError) -> Self {
        Error::Clock(e)
    }
}

impl From<ResetError> for Error {
    fn from(e: ResetError) -> Self {
        Error::Reset(e)
    }
}

impl From<ProbeError> for Error {
    fn from(e: ProbeError) -> Self {
        Error::Probe(e)
    }
}

impl From<LinkError> for Error {
    fn from(e: LinkError) -> Self {
        Error::Link(e)
    }
}

impl From<DiagnosticError> for Error {
    fn from(e: DiagnosticError) -> Self {
        Error::Diagnostic(e)
    }
}

/// Result type alias for glue operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for clock operations
pub type ClockResult<T> = core::result::Result<T, ClockError>;

/// Result type alias for reset operations
pub type ResetResult<T> = core::result::Result<T, ResetError>;

// =============================================================================
// Unit Tests
// =============================================================================
