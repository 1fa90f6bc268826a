//! Bring-up and runtime glue for one EQoS instance.
//!
//! - [`config`] - Interface modes and PHY reset timing
//! - [`platform`] - Traits for the device description, MAC core and attribute registry
//! - [`probe`] - The bring-up sequence
//! - [`glue`] - The probed [`Device`] and its [`GlueOps`] callbacks
//!
//! # Example
//!
//! ```ignore
//! use ph_imx_dwmac::driver::{probe, GlueOps};
//!
//! let mut device = probe(&mut board, &mut stmmac, &mut sysfs, &mut delay)?;
//!
//! // On every link change
//! device.fix_speed(1000)?;
//! ```

// Submodules
pub mod config;
pub mod glue;
pub mod platform;
pub mod probe;

// Re-exports for convenience
pub use config::{PhyInterfaceMode, ResetTiming};
pub use glue::{Device, DeviceParts, GlueOps, InterfaceTarget, tx_clock_rate};
pub use platform::{AttributeRegistry, CoreSetup, MacCore, Platform, PlatformResources};
pub use probe::probe;
