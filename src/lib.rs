//! i.MX DWMAC Glue
//!
//! A `no_std`, `no_alloc` bring-up layer for the Synopsys DesignWare EQoS
//! Ethernet MAC as integrated on NXP i.MX SoCs (i.MX8MP, i.MX8DXL, i.MX93).
//!
//! The MAC core driver itself lives elsewhere. This crate does the
//! SoC-specific work around it:
//!
//! - picks the per-variant policy (DMA address width, clock topology,
//!   interface-mode encoding)
//! - gates the `mem` and `tx` clocks with rollback on partial failure
//! - pulses the board's PHY reset line
//! - programs the MAC-to-PHY interface mode through a shared register or the
//!   system controller firmware
//! - retunes the RGMII tx clock whenever the link speed changes
//! - exposes PHY compliance-test diagnostics
//!
//! # Architecture
//!
//! 1. **Driver Layer** ([`driver`]): [`probe`], the probed [`Device`] and its
//!    [`GlueOps`] callbacks
//! 2. **Policy Layer** ([`variant`], [`phy`], [`diag`]): static tables keyed
//!    by compatible string and PHY identifier
//! 3. **HAL Layer** ([`hal`]): traits for clocks, shared registers, firmware,
//!    MDIO and the reset sequencer
//!
//! Every hardware touch goes through a trait, so the crate carries no
//! register-access API of its own.
//!
//! # Features
//!
//! - `defmt`: Log through defmt and derive `defmt::Format` for public types
//! - `log`: Log through the `log` facade
//! - `critical-section`: Enable the ISR-safe [`sync::SharedDevice`] slot
//!
//! # Example
//!
//! ```ignore
//! use ph_imx_dwmac::{GlueOps, probe};
//!
//! let mut device = probe(&mut board, &mut stmmac, &mut sysfs, &mut delay)?;
//!
//! // Suspend / resume
//! device.clocks_config(false)?;
//! device.clocks_config(true)?;
//! device.init()?;
//!
//! // Link renegotiated at 100 Mbps
//! device.fix_speed(100)?;
//!
//! let parts = device.remove(&mut stmmac, &mut sysfs);
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels mirror the [lints] tables in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// Must come first so the logging macros are visible to every module
#[macro_use]
mod fmt;

// =============================================================================
// Modules
// =============================================================================

pub mod diag;
pub mod driver;
pub mod error;
pub mod hal;
pub mod phy;
pub mod variant;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use diag::{DiagTarget, Report, StationAddress, WriteOutcome};
pub use driver::{
    AttributeRegistry, CoreSetup, Device, DeviceParts, GlueOps, MacCore, PhyInterfaceMode,
    Platform, PlatformResources, ResetTiming, probe,
};
pub use error::{
    ClockError, ConfigError, ConfigResult, DiagnosticError, Error, LinkError, ProbeError,
    ResetError, Result,
};
pub use phy::PhyFamily;
pub use variant::{AddressWidth, EncoderFamily, InterfaceSelection, VariantPolicy};

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedDevice;

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types.
pub mod constants {
    pub use crate::internal::constants::{
        // MAC address
        MAC_ADDR_LEN,
        // Reset timing
        PHY_RESET_BUSY_WAIT_MAX_MS,
        PHY_RESET_DEFAULT_DURATION_MS,
        PHY_RESET_MAX_MS,
        // Clocks
        RGMII_10M_CLK_HZ,
        RGMII_100M_CLK_HZ,
        RGMII_1000M_CLK_HZ,
        // Link speeds
        SPEED_10,
        SPEED_100,
        SPEED_1000,
    };
}
