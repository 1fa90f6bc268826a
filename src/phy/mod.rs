//! Ethernet PHY identification
//!
//! The diagnostic sequencer only needs to know which vendor script to run,
//! so PHYs are identified by the 32-bit identifier read from PHYIDR1/PHYIDR2
//! and matched exactly (revision bits included).
//!
//! # Supported PHY Chips
//!
//! | PHY     | Vendor              | Identifier   |
//! |---------|---------------------|--------------|
//! | AR8031  | Qualcomm Atheros    | `0x004dd074` |
//! | KSZ9031 | Microchip (Micrel)  | `0x00221622` |
//! | YT8531  | Motorcomm           | `0x4f51e91b` |

use crate::hal::mdio::{MdioBus, read_phy_id};

/// AR8031 identifier
pub const PHY_ID_AR8031: u32 = 0x004D_D074;

/// KSZ9031 identifier
pub const PHY_ID_KSZ9031: u32 = 0x0022_1622;

/// YT8531 identifier
pub const PHY_ID_YT8531: u32 = 0x4F51_E91B;

/// Identifier reported when the PHY cannot be read
pub const PHY_ID_UNREADABLE: u32 = 0xFFFF_FFFF;

/// PHY family with its own set of compliance test scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyFamily {
    /// Qualcomm Atheros AR8031
    Ar8031,
    /// Microchip KSZ9031
    Ksz9031,
    /// Motorcomm YT8531
    Yt8531,
}

impl PhyFamily {
    /// All scripted families
    pub const ALL: [Self; 3] = [Self::Ar8031, Self::Ksz9031, Self::Yt8531];

    /// Match an identifier exactly
    pub const fn from_id(id: u32) -> Option<Self> {
        match id {
            PHY_ID_AR8031 => Some(Self::Ar8031),
            PHY_ID_KSZ9031 => Some(Self::Ksz9031),
            PHY_ID_YT8531 => Some(Self::Yt8531),
            _ => None,
        }
    }

    /// Identifier of this family
    pub const fn id(self) -> u32 {
        match self {
            Self::Ar8031 => PHY_ID_AR8031,
            Self::Ksz9031 => PHY_ID_KSZ9031,
            Self::Yt8531 => PHY_ID_YT8531,
        }
    }

    /// Part name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ar8031 => "AR8031",
            Self::Ksz9031 => "KSZ9031",
            Self::Yt8531 => "YT8531",
        }
    }
}

/// Read the identifier of the PHY at `phy_addr`.
///
/// A bus failure yields [`PHY_ID_UNREADABLE`], which matches no family.
pub fn identify<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> u32 {
    read_phy_id(mdio, phy_addr).unwrap_or(PHY_ID_UNREADABLE)
}

// =============================================================================
// Unit Tests
// =============================================================================
