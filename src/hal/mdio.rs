//! MDIO (Management Data Input/Output) HAL
//!
//! PHY register access goes through the MAC core's MDIO bus, which this
//! crate never owns. [`MdioBus`] is the seam; the diagnostic sequencer only
//! needs single register reads and writes.

use crate::internal::constants::PHY_REG_UNREADABLE;

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// Register addresses are passed through unmasked. Some vendor test
/// registers sit above the Clause 22 range and it is up to the bus to map
/// them.
pub trait MdioBus {
    /// Bus error
    type Error: core::fmt::Debug;

    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16, Self::Error>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<(), Self::Error>;
}

impl<T: MdioBus + ?Sized> MdioBus for &mut T {
    type Error = T::Error;

    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16, Self::Error> {
        T::read(self, phy_addr, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<(), Self::Error> {
        T::write(self, phy_addr, reg_addr, value)
    }
}

// =============================================================================
// PHY Register Definitions (IEEE 802.3 standard registers)
// =============================================================================

/// Standard PHY register addresses (IEEE 802.3 Clause 22)
pub mod phy_reg {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0x00;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 0x01;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 0x02;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 0x03;
}

// =============================================================================
// PHY Helper Functions
// =============================================================================

/// Read the 32-bit PHY identifier (PHYIDR1 high, PHYIDR2 low)
pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32, M::Error> {
    let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)? as u32;
    let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)? as u32;
    Ok((id1 << 16) | id2)
}

/// Read a register, substituting `0xFFFF` when the bus fails
pub fn read_or_unreadable<M: MdioBus>(mdio: &mut M, phy_addr: u8, reg_addr: u8) -> u16 {
    mdio.read(phy_addr, reg_addr).unwrap_or(PHY_REG_UNREADABLE)
}

// =============================================================================
// Unit Tests
// =============================================================================
