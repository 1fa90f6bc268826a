//! Glue configuration types
//!
//! Types read once from the device description at probe time.

use crate::internal::constants::{PHY_RESET_DEFAULT_DURATION_MS, PHY_RESET_MAX_MS};

/// MAC-to-PHY electrical interface mode
///
/// Only MII, RMII and the RGMII family are supported by the i.MX glue; the
/// remaining modes exist so an unsupported description can be reported
/// instead of silently mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyInterfaceMode {
    /// Media Independent Interface
    Mii,
    /// Gigabit Media Independent Interface
    Gmii,
    /// Reduced Media Independent Interface
    Rmii,
    /// Reduced Gigabit Media Independent Interface
    #[default]
    Rgmii,
    /// RGMII with internal rx and tx delays
    RgmiiId,
    /// RGMII with internal rx delay
    RgmiiRxid,
    /// RGMII with internal tx delay
    RgmiiTxid,
    /// Serial Gigabit Media Independent Interface
    Sgmii,
}

impl PhyInterfaceMode {
    /// True for RGMII and all of its delay sub-variants
    pub const fn is_rgmii(self) -> bool {
        matches!(
            self,
            Self::Rgmii | Self::RgmiiId | Self::RgmiiRxid | Self::RgmiiTxid
        )
    }

    /// Interface name as used in device descriptions
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mii => "mii",
            Self::Gmii => "gmii",
            Self::Rmii => "rmii",
            Self::Rgmii => "rgmii",
            Self::RgmiiId => "rgmii-id",
            Self::RgmiiRxid => "rgmii-rxid",
            Self::RgmiiTxid => "rgmii-txid",
            Self::Sgmii => "sgmii",
        }
    }
}

impl core::fmt::Display for PhyInterfaceMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PHY reset line timing
///
/// Durations are in milliseconds. An assert duration above 1 s is replaced
/// by the 1 ms default when the sequence runs; a post delay above 1 s makes
/// the sequence fail without touching the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResetTiming {
    /// Line level that holds the PHY in reset is high
    pub active_high: bool,
    /// Time the line is held in reset
    pub assert_duration_ms: u32,
    /// Wait after releasing reset (0 = none)
    pub post_delay_ms: u32,
}

impl Default for ResetTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl ResetTiming {
    /// Active-low reset, 1 ms assert, no post delay
    pub const fn new() -> Self {
        Self {
            active_high: false,
            assert_duration_ms: PHY_RESET_DEFAULT_DURATION_MS,
            post_delay_ms: 0,
        }
    }

    /// Set the reset polarity
    #[must_use]
    pub const fn with_active_high(mut self, active_high: bool) -> Self {
        self.active_high = active_high;
        self
    }

    /// Set the assert duration
    #[must_use]
    pub const fn with_assert_duration_ms(mut self, ms: u32) -> Self {
        self.assert_duration_ms = ms;
        self
    }

    /// Set the post-reset delay
    #[must_use]
    pub const fn with_post_delay_ms(mut self, ms: u32) -> Self {
        self.post_delay_ms = ms;
        self
    }

    /// Assert duration after the 1 s sanity clamp
    pub const fn effective_assert_ms(&self) -> u32 {
        if self.assert_duration_ms > PHY_RESET_MAX_MS {
            PHY_RESET_DEFAULT_DURATION_MS
        } else {
            self.assert_duration_ms
        }
    }

    /// Whether the post delay is within the accepted range
    pub const fn post_delay_valid(&self) -> bool {
        self.post_delay_ms <= PHY_RESET_MAX_MS
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
