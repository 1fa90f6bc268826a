//! External collaborators
//!
//! The glue never parses a device description, registers a network device
//! or creates attribute files itself. These traits are the seams to the code
//! that does.

use embedded_hal::digital::OutputPin;

use super::config::{PhyInterfaceMode, ResetTiming};
use crate::hal::clock::Clock;
use crate::hal::firmware::ScuFirmware;
use crate::hal::regmap::Regmap;
use crate::hal::reset::ResetLine;
use crate::variant::AddressWidth;

/// Register window and interrupt lines of the MAC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlatformResources {
    /// Base address of the MAC register window
    pub base: usize,
    /// Main MAC interrupt
    pub irq: u32,
    /// Wake-on-LAN interrupt, if wired separately
    pub wol_irq: Option<u32>,
    /// Low-power-idle interrupt, if wired separately
    pub lpi_irq: Option<u32>,
}

/// Device-description collaborator, read once at probe
pub trait Platform {
    /// Clock handle
    type Clock: Clock;
    /// Shared register block handle
    type Regmap: Regmap;
    /// System controller handle
    type Firmware: ScuFirmware;
    /// PHY reset GPIO
    type ResetPin: OutputPin;

    /// Register windows and IRQs
    fn resources(&mut self) -> Option<PlatformResources>;

    /// Device-match identity (compatible string)
    fn compatible(&self) -> &str;

    /// The board supplies the RMII reference clock
    fn rmii_refclk_ext(&self) -> bool;

    /// Resolve a clock by name
    fn clock(&mut self, name: &'static str) -> Option<Self::Clock>;

    /// Resolve the regmap holding the interface-mode register
    fn interface_regmap(&mut self) -> Option<Self::Regmap>;

    /// Offset of the interface-mode register within the regmap
    fn interface_offset(&self) -> Option<u32>;

    /// Resolve the system controller
    fn firmware(&mut self) -> Option<Self::Firmware>;

    /// Request the PHY reset line
    fn reset_line(&mut self) -> ResetLine<Self::ResetPin>;

    /// PHY reset polarity and delays
    fn reset_timing(&self) -> ResetTiming;

    /// Negotiated MAC-to-PHY interface
    fn interface_mode(&self) -> PhyInterfaceMode;
}

/// What the MAC core receives at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoreSetup {
    /// DMA address width
    pub address_width: AddressWidth,
    /// MAC-to-PHY interface
    pub interface: PhyInterfaceMode,
    /// Register window and IRQs
    pub resources: PlatformResources,
}

/// The MAC core driver the glue hands off to
pub trait MacCore {
    /// Registration error
    type Error: core::fmt::Debug;

    /// Register the network device
    fn register(&mut self, setup: &CoreSetup) -> Result<(), Self::Error>;

    /// Tear the network device down
    fn unregister(&mut self);
}

/// Creates and removes named diagnostic attributes
pub trait AttributeRegistry {
    /// Creation error
    type Error: core::fmt::Debug;

    /// Expose an attribute
    fn create(&mut self, name: &'static str) -> Result<(), Self::Error>;

    /// Remove an attribute
    fn remove(&mut self, name: &'static str);
}
