//! Hardware variant policies
//!
//! One immutable policy per supported EQoS integration, selected once at
//! probe time from the device-match identity and never mutated.
//!
//! | compatible               | family | addr | tx clk auto adj | mem clk | select   |
//! |--------------------------|--------|------|-----------------|---------|----------|
//! | `nxp,imx8mp-dwmac-eqos`  | A      | 34   | no              | no      | register |
//! | `nxp,imx8dxl-dwmac-eqos` | B      | 32   | yes             | yes     | firmware |
//! | `nxp,imx93-dwmac-eqos`   | C      | 32   | yes             | yes     | register |

pub mod encoder;

pub use encoder::{EncoderFamily, InterfaceSelection};

use crate::driver::config::PhyInterfaceMode;
use crate::error::{ConfigError, ConfigResult};

/// DMA address width handed to the MAC core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressWidth {
    /// 32-bit addressing
    Bits32,
    /// 34-bit addressing
    Bits34,
}

impl AddressWidth {
    /// Width in bits
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits32 => 32,
            Self::Bits34 => 34,
        }
    }
}

/// How the interface mode reaches hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterfaceSelect {
    /// Field in a shared general-purpose register
    Regmap,
    /// System controller firmware control calls
    Firmware,
}

/// Per-variant bring-up policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VariantPolicy {
    /// Device-match identity
    pub compatible: &'static str,
    /// DMA address width
    pub address_width: AddressWidth,
    /// MAC adjusts the RGMII tx clock itself on speed changes
    pub auto_tx_clock_adjust: bool,
    /// Interface-mode encoder
    pub family: EncoderFamily,
    /// A `mem` clock gates the MAC memories
    pub needs_mem_clock: bool,
    /// Interface-mode delivery path
    pub interface_select: InterfaceSelect,
}

impl VariantPolicy {
    /// Encode an interface mode with this variant's encoder
    pub fn encode_interface(
        &self,
        mode: PhyInterfaceMode,
        rmii_refclk_ext: bool,
    ) -> ConfigResult<InterfaceSelection> {
        self.family.encode(mode, rmii_refclk_ext)
    }

    /// Whether a regmap and register offset must be resolved at probe
    pub const fn needs_interface_regmap(&self) -> bool {
        matches!(self.interface_select, InterfaceSelect::Regmap)
    }

    /// Whether the system controller firmware must be resolved at probe
    pub const fn needs_firmware(&self) -> bool {
        matches!(self.interface_select, InterfaceSelect::Firmware)
    }
}

/// i.MX8MP
pub const IMX8MP: VariantPolicy = VariantPolicy {
    compatible: "nxp,imx8mp-dwmac-eqos",
    address_width: AddressWidth::Bits34,
    auto_tx_clock_adjust: false,
    family: EncoderFamily::A,
    needs_mem_clock: false,
    interface_select: InterfaceSelect::Regmap,
};

/// i.MX8DXL
pub const IMX8DXL: VariantPolicy = VariantPolicy {
    compatible: "nxp,imx8dxl-dwmac-eqos",
    address_width: AddressWidth::Bits32,
    auto_tx_clock_adjust: true,
    family: EncoderFamily::B,
    needs_mem_clock: true,
    interface_select: InterfaceSelect::Firmware,
};

/// i.MX93
pub const IMX93: VariantPolicy = VariantPolicy {
    compatible: "nxp,imx93-dwmac-eqos",
    address_width: AddressWidth::Bits32,
    auto_tx_clock_adjust: true,
    family: EncoderFamily::C,
    needs_mem_clock: true,
    interface_select: InterfaceSelect::Regmap,
};

/// Every supported variant, in match order
pub static VARIANTS: [VariantPolicy; 3] = [IMX8MP, IMX8DXL, IMX93];

/// Resolve the policy for a device-match identity.
///
/// There is no fallback policy: an unknown identity is fatal to probe.
pub fn lookup(compatible: &str) -> ConfigResult<&'static VariantPolicy> {
    VARIANTS
        .iter()
        .find(|v| v.compatible == compatible)
        .ok_or(ConfigError::UnsupportedVariant)
}

// =============================================================================
// Unit Tests
// =============================================================================
