//! Synchronization Support
//!
//! ISR-safe sharing of a probed device between contexts:
//!
//! - **Primitives** (`primitives`): [`CriticalSectionCell`] - ISR-safe
//!   interior mutability
//! - **Shared Wrapper** (`shared`): [`SharedDevice`] - a static slot the
//!   device is installed into after probe
//!
//! # Feature Flags
//!
//! - `critical-section`: Enables this module
//!
//! # Example
//!
//! ```ignore
//! use ph_imx_dwmac::driver::{Device, GlueOps};
//! use ph_imx_dwmac::sync::SharedDevice;
//!
//! static ETH: SharedDevice<Device<Board>> = SharedDevice::new();
//!
//! ETH.install(probe(&mut board, &mut core, &mut registry, &mut delay)?);
//!
//! // Link-monitor task
//! ETH.with(|dev| dev.fix_speed(link.speed_mbps()));
//!
//! // Diagnostic caller; the script completes before the section is released
//! ETH.with(|dev| dev.diag_write("mau", "1", &mut target));
//! ```

// Primitives module (requires critical-section)
mod primitives;

pub use primitives::CriticalSectionCell;

// Shared wrapper (requires critical-section)
mod shared;

pub use shared::SharedDevice;
