//! Centralized Constants
//!
//! Single source of truth for the magic numbers used by the glue layer.
//!
//! # Organization
//!
//! - **Clock frequencies**: RGMII tx clock rates per link speed
//! - **Link speeds**: Speed values passed to the link-speed callback
//! - **Reset timing**: PHY reset limits and defaults
//! - **MAC address**: Station address layout
//! - **Diagnostics**: Trigger values and report placeholders
//!
//! # Note
//!
//! Interface-mode register fields live beside their encoders in
//! `variant/encoder.rs`, and PHY register addresses in `hal/mdio.rs`.

// =============================================================================
// Clock Frequencies
// =============================================================================

/// RGMII tx clock for 1000 Mbps (125 MHz)
pub const RGMII_1000M_CLK_HZ: u32 = 125_000_000;

/// RGMII tx clock for 100 Mbps (25 MHz)
pub const RGMII_100M_CLK_HZ: u32 = 25_000_000;

/// RGMII tx clock for 10 Mbps (2.5 MHz)
pub const RGMII_10M_CLK_HZ: u32 = 2_500_000;

// =============================================================================
// Link Speeds
// =============================================================================

/// 10 Mbps link speed as reported by the MAC core
pub const SPEED_10: u32 = 10;

/// 100 Mbps link speed as reported by the MAC core
pub const SPEED_100: u32 = 100;

/// 1000 Mbps link speed as reported by the MAC core
pub const SPEED_1000: u32 = 1000;

// =============================================================================
// Reset Timing
// =============================================================================

/// Longest accepted reset assert duration or post delay (1 s)
pub const PHY_RESET_MAX_MS: u32 = 1000;

/// Assert duration used when none is configured or the configured one is too long
pub const PHY_RESET_DEFAULT_DURATION_MS: u32 = 1;

/// Waits at or below this use a busy-style microsecond delay
pub const PHY_RESET_BUSY_WAIT_MAX_MS: u32 = 20;

// =============================================================================
// MAC Address
// =============================================================================

/// MAC address length in bytes
pub const MAC_ADDR_LEN: usize = 6;

/// Group (multicast) bit of the first address octet
pub const MAC_ADDR_MULTICAST_BIT: u8 = 0x01;

// =============================================================================
// Diagnostics
// =============================================================================

/// The only trigger value that runs a diagnostic script
pub const DIAG_TRIGGER_EXECUTE: u64 = 1;

/// Value reported for a PHY register that could not be read
pub const PHY_REG_UNREADABLE: u16 = 0xFFFF;

/// Longest register snapshot taken by any diagnostic report
pub const DIAG_REPORT_MAX_REGS: usize = 5;
