//! Interface-mode encoders
//!
//! Each SoC family selects the MAC-to-PHY interface differently. Families A
//! and C program a field in a shared general-purpose register; Family B asks
//! the system controller firmware to do it. The encoders are pure and say
//! nothing about how the result reaches hardware.

use crate::driver::config::PhyInterfaceMode;
use crate::error::{ConfigError, ConfigResult};
use crate::hal::firmware::{IMX_SC_C_CLK_GEN_EN_VALUE, intf_sel};

// =============================================================================
// Family A Register Fields (i.MX8MP GPR)
// =============================================================================

/// Interface mode field, bits [21:16]
pub const GPR_ENET_QOS_INTF_MODE_MASK: u32 = 0x3F << 16;
/// MII select
pub const GPR_ENET_QOS_INTF_SEL_MII: u32 = 0x0 << 16;
/// RMII select
pub const GPR_ENET_QOS_INTF_SEL_RMII: u32 = 0x4 << 16;
/// RGMII select
pub const GPR_ENET_QOS_INTF_SEL_RGMII: u32 = 0x1 << 16;
/// Clock generation enable
pub const GPR_ENET_QOS_CLK_GEN_EN: u32 = 0x1 << 19;
/// RMII tx clock sourced internally
pub const GPR_ENET_QOS_CLK_TX_CLK_SEL: u32 = 0x1 << 20;
/// RGMII enable
pub const GPR_ENET_QOS_RGMII_EN: u32 = 0x1 << 21;

// =============================================================================
// Family C Register Fields (i.MX93 GPR)
// =============================================================================

/// Interface mode field, bits [3:0]
pub const MX93_GPR_ENET_QOS_INTF_MODE_MASK: u32 = 0xF;
/// MII select
pub const MX93_GPR_ENET_QOS_INTF_SEL_MII: u32 = 0x0 << 1;
/// RMII select
pub const MX93_GPR_ENET_QOS_INTF_SEL_RMII: u32 = 0x4 << 1;
/// RGMII select
pub const MX93_GPR_ENET_QOS_INTF_SEL_RGMII: u32 = 0x1 << 1;
/// Clock generation enable
pub const MX93_GPR_ENET_QOS_CLK_GEN_EN: u32 = 0x1 << 0;

// =============================================================================
// Encoder Output
// =============================================================================

/// How an interface mode is applied to hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterfaceSelection {
    /// Read-modify-write of `mask` bits in the interface-mode register
    Register {
        /// Bits owned by the interface-mode field
        mask: u32,
        /// New field value (already shifted)
        value: u32,
    },
    /// Two system-controller control calls, interface select first
    Firmware {
        /// Value for the interface-select control
        intf_sel: u32,
        /// Value for the clock-generation-enable control
        clk_gen_en: u32,
    },
}

/// Interface-mode encoder family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderFamily {
    /// i.MX8MP: 6-bit GPR field with RMII tx clock source and RGMII enable bits
    A,
    /// i.MX8DXL: system controller firmware
    B,
    /// i.MX93: 4-bit GPR field
    C,
}

impl EncoderFamily {
    /// Encode `mode` for this family.
    ///
    /// `rmii_refclk_ext` only affects Family A in RMII mode, where an external
    /// reference clock leaves the tx clock source bit clear.
    pub fn encode(
        self,
        mode: PhyInterfaceMode,
        rmii_refclk_ext: bool,
    ) -> ConfigResult<InterfaceSelection> {
        match self {
            Self::A => encode_family_a(mode, rmii_refclk_ext),
            Self::B => encode_family_b(mode),
            Self::C => encode_family_c(mode),
        }
    }
}

fn encode_family_a(mode: PhyInterfaceMode, rmii_refclk_ext: bool) -> ConfigResult<InterfaceSelection> {
    let mut value = match mode {
        PhyInterfaceMode::Mii => GPR_ENET_QOS_INTF_SEL_MII,
        PhyInterfaceMode::Rmii => {
            let mut v = GPR_ENET_QOS_INTF_SEL_RMII;
            if !rmii_refclk_ext {
                v |= GPR_ENET_QOS_CLK_TX_CLK_SEL;
            }
            v
        }
        m if m.is_rgmii() => GPR_ENET_QOS_INTF_SEL_RGMII | GPR_ENET_QOS_RGMII_EN,
        _ => return unsupported(mode),
    };

    value |= GPR_ENET_QOS_CLK_GEN_EN;
    Ok(InterfaceSelection::Register {
        mask: GPR_ENET_QOS_INTF_MODE_MASK,
        value,
    })
}

fn encode_family_b(mode: PhyInterfaceMode) -> ConfigResult<InterfaceSelection> {
    let select = match mode {
        PhyInterfaceMode::Mii => GPR_ENET_QOS_INTF_SEL_MII,
        PhyInterfaceMode::Rmii => GPR_ENET_QOS_INTF_SEL_RMII,
        m if m.is_rgmii() => GPR_ENET_QOS_INTF_SEL_RGMII,
        _ => return unsupported(mode),
    };

    Ok(InterfaceSelection::Firmware {
        intf_sel: intf_sel(select),
        clk_gen_en: IMX_SC_C_CLK_GEN_EN_VALUE,
    })
}

fn encode_family_c(mode: PhyInterfaceMode) -> ConfigResult<InterfaceSelection> {
    let mut value = match mode {
        PhyInterfaceMode::Mii => MX93_GPR_ENET_QOS_INTF_SEL_MII,
        PhyInterfaceMode::Rmii => MX93_GPR_ENET_QOS_INTF_SEL_RMII,
        m if m.is_rgmii() => MX93_GPR_ENET_QOS_INTF_SEL_RGMII,
        _ => return unsupported(mode),
    };

    value |= MX93_GPR_ENET_QOS_CLK_GEN_EN;
    Ok(InterfaceSelection::Register {
        mask: MX93_GPR_ENET_QOS_INTF_MODE_MASK,
        value,
    })
}

fn unsupported(mode: PhyInterfaceMode) -> ConfigResult<InterfaceSelection> {
    debug!("interface {} not supported by imx dwmac", mode.as_str());
    Err(ConfigError::UnsupportedInterface)
}

// =============================================================================
// Unit Tests
// =============================================================================
