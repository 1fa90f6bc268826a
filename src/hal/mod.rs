//! Hardware Abstraction Layer
//!
//! Traits for every hardware touch the glue makes, plus the managers that
//! sequence them. Nothing here knows about a concrete register-access API.
//!
//! # Modules
//!
//! - [`clock`]: Clock trait and the mem/tx clock manager
//! - [`firmware`]: System controller firmware control calls
//! - [`mdio`]: MDIO bus for PHY register access
//! - [`regmap`]: Shared register (syscon) access
//! - [`reset`]: PHY reset line sequencer
//!
//! # Delay Integration
//!
//! All types that require delays use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL.

pub mod clock;
pub mod firmware;
pub mod mdio;
pub mod regmap;
pub mod reset;

// Re-export commonly used types
pub use clock::{Clock, ClockManager, ClockState};
pub use firmware::ScuFirmware;
pub use mdio::MdioBus;
pub use regmap::{InterfaceRegister, Regmap};
pub use reset::{ResetLine, ResetSequencer, ResetSpec, ResetState};
