//! Probed device and the callbacks the MAC core invokes
//!
//! [`Device`] owns every hardware handle resolved at probe. The MAC core
//! drives it through [`GlueOps`]: clock gating around suspend/resume,
//! interface programming around open/close, and tx clock retuning on every
//! link speed change.

use super::config::PhyInterfaceMode;
use super::platform::{AttributeRegistry, CoreSetup, MacCore, Platform, PlatformResources};
use crate::diag::{self, AttributeSet, DiagTarget, DiagnosticOp, Report, StationAddress, WriteOutcome};
use crate::error::{ClockError, ConfigError, DiagnosticError, Error, LinkError, Result};
use crate::hal::clock::{ClockManager, ClockState};
use crate::hal::firmware::apply_interface;
use crate::hal::mdio::MdioBus;
use crate::hal::regmap::InterfaceRegister;
use crate::hal::reset::ResetState;
use crate::internal::constants::{
    RGMII_10M_CLK_HZ, RGMII_100M_CLK_HZ, RGMII_1000M_CLK_HZ, SPEED_10, SPEED_100, SPEED_1000,
};
use crate::variant::{InterfaceSelection, VariantPolicy};

// =============================================================================
// Callback Surface
// =============================================================================

/// Runtime callbacks exposed to the MAC core
pub trait GlueOps {
    /// Enable or disable the MAC clocks
    fn clocks_config(&mut self, enable: bool) -> Result<()>;

    /// Program the interface mode
    fn init(&mut self) -> Result<()>;

    /// Undo [`init`](Self::init)
    fn exit(&mut self);

    /// Retune the tx clock after a link speed change.
    ///
    /// Errors are advisory: the device keeps running at the previous rate.
    fn fix_speed(&mut self, speed: u32) -> Result<()>;
}

/// RGMII tx clock rate for a link speed in Mbps
pub const fn tx_clock_rate(speed: u32) -> Option<u32> {
    match speed {
        SPEED_1000 => Some(RGMII_1000M_CLK_HZ),
        SPEED_100 => Some(RGMII_100M_CLK_HZ),
        SPEED_10 => Some(RGMII_10M_CLK_HZ),
        _ => None,
    }
}

// =============================================================================
// Device
// =============================================================================

/// Where the interface mode is written
#[derive(Debug)]
pub enum InterfaceTarget<R: crate::hal::Regmap, F> {
    /// Field in a shared register
    Register(InterfaceRegister<R>),
    /// System controller firmware
    Firmware(F),
}

/// A probed EQoS instance
///
/// Created by [`probe`](super::probe::probe) and consumed by
/// [`remove`](Self::remove).
pub struct Device<P: Platform> {
    pub(super) variant: &'static VariantPolicy,
    pub(super) clocks: ClockManager<P::Clock>,
    pub(super) interface_target: InterfaceTarget<P::Regmap, P::Firmware>,
    pub(super) rmii_refclk_ext: bool,
    pub(super) interface: PhyInterfaceMode,
    pub(super) reset_pin: Option<P::ResetPin>,
    pub(super) reset_state: ResetState,
    pub(super) resources: PlatformResources,
    pub(super) attributes: AttributeSet,
}

/// Hardware handles given back by [`Device::remove`]
pub struct DeviceParts<P: Platform> {
    /// tx clock
    pub tx_clock: P::Clock,
    /// mem clock, for variants that use one
    pub mem_clock: Option<P::Clock>,
    /// Interface-mode regmap, for register-mediated variants
    pub regmap: Option<P::Regmap>,
    /// System controller, for firmware-mediated variants
    pub firmware: Option<P::Firmware>,
    /// PHY reset line, if one was acquired
    pub reset_pin: Option<P::ResetPin>,
}

impl<P: Platform> Device<P> {
    /// Variant policy selected at probe
    pub fn variant(&self) -> &'static VariantPolicy {
        self.variant
    }

    /// MAC-to-PHY interface
    pub fn interface(&self) -> PhyInterfaceMode {
        self.interface
    }

    /// Whether the board supplies the RMII reference clock
    pub fn rmii_refclk_ext(&self) -> bool {
        self.rmii_refclk_ext
    }

    /// Clock gate state
    pub fn clock_state(&self) -> ClockState {
        self.clocks.state()
    }

    /// Last tx clock rate accepted by the clock
    pub fn tx_rate(&self) -> Option<u32> {
        self.clocks.tx_rate()
    }

    /// How far the PHY reset sequence got during probe
    pub fn reset_state(&self) -> ResetState {
        self.reset_state
    }

    /// Whether the device holds a PHY reset line
    pub fn has_reset_line(&self) -> bool {
        self.reset_pin.is_some()
    }

    /// Register window and IRQs
    pub fn resources(&self) -> PlatformResources {
        self.resources
    }

    /// Diagnostic attributes that were registered successfully
    pub fn attributes(&self) -> AttributeSet {
        self.attributes
    }

    /// What the MAC core is registered with
    pub fn core_setup(&self) -> CoreSetup {
        CoreSetup {
            address_width: self.variant.address_width,
            interface: self.interface,
            resources: self.resources,
        }
    }

    fn registered(&self, name: &str) -> core::result::Result<&'static DiagnosticOp, DiagnosticError> {
        diag::find(name)
            .filter(|op| self.attributes.contains(op.attribute))
            .ok_or(DiagnosticError::UnknownAttribute)
    }

    /// Read a registered diagnostic attribute
    pub fn diag_read<M: MdioBus, S: StationAddress>(
        &self,
        name: &str,
        target: &mut DiagTarget<'_, M, S>,
    ) -> Result<Report> {
        let op = self.registered(name)?;
        Ok(diag::read(op, target))
    }

    /// Write a registered diagnostic attribute
    pub fn diag_write<M: MdioBus, S: StationAddress>(
        &self,
        name: &str,
        payload: &str,
        target: &mut DiagTarget<'_, M, S>,
    ) -> Result<WriteOutcome> {
        let op = self.registered(name)?;
        Ok(diag::write(op, payload, target))
    }

    /// Tear the device down.
    ///
    /// Removes the diagnostic attributes, unregisters from the MAC core,
    /// undoes interface programming and gates the clocks, then hands back
    /// every owned hardware handle.
    pub fn remove<C: MacCore, A: AttributeRegistry>(
        mut self,
        core: &mut C,
        registry: &mut A,
    ) -> DeviceParts<P> {
        for op in diag::DIAGNOSTICS.iter().rev() {
            if self.attributes.contains(op.attribute) {
                registry.remove(op.name);
                self.attributes.remove(op.attribute);
            }
        }

        core.unregister();
        self.exit();
        let _ = self.clocks.configure(false);

        let (regmap, firmware) = match self.interface_target {
            InterfaceTarget::Register(reg) => (Some(reg.into_inner()), None),
            InterfaceTarget::Firmware(fw) => (None, Some(fw)),
        };
        let (tx_clock, mem_clock) = self.clocks.into_parts();

        DeviceParts {
            tx_clock,
            mem_clock,
            regmap,
            firmware,
            reset_pin: self.reset_pin,
        }
    }
}

impl<P: Platform> GlueOps for Device<P> {
    fn clocks_config(&mut self, enable: bool) -> Result<()> {
        self.clocks.configure(enable).map_err(Error::from)
    }

    fn init(&mut self) -> Result<()> {
        let selection = self
            .variant
            .encode_interface(self.interface, self.rmii_refclk_ext)?;

        let written = match (&mut self.interface_target, selection) {
            (InterfaceTarget::Register(reg), InterfaceSelection::Register { mask, value }) => {
                reg.write_field(mask, value).is_ok()
            }
            (
                InterfaceTarget::Firmware(fw),
                InterfaceSelection::Firmware {
                    intf_sel,
                    clk_gen_en,
                },
            ) => apply_interface(fw, intf_sel, clk_gen_en).is_ok(),
            _ => false,
        };

        if written {
            debug!("interface mode {} programmed", self.interface.as_str());
            Ok(())
        } else {
            Err(ConfigError::InterfaceWriteFailed.into())
        }
    }

    fn exit(&mut self) {}

    fn fix_speed(&mut self, speed: u32) -> Result<()> {
        if self.variant.auto_tx_clock_adjust
            || matches!(self.interface, PhyInterfaceMode::Mii | PhyInterfaceMode::Rmii)
        {
            return Ok(());
        }

        let Some(rate) = tx_clock_rate(speed) else {
            error!("invalid speed {}", speed);
            return Err(LinkError::InvalidSpeed.into());
        };

        self.clocks.set_tx_rate(rate).map_err(|e: ClockError| {
            error!("failed to set tx rate {}", rate);
            Error::from(e)
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
