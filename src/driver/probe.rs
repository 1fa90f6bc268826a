//! Bring-up orchestration
//!
//! [`probe`] runs the fixed bring-up sequence for one EQoS instance:
//!
//! 1. Resolve the register window and IRQs
//! 2. Select the variant policy
//! 3. Resolve clocks and the interface-mode target the variant needs
//! 4. Pulse the PHY reset line (best effort)
//! 5. Assemble the [`Device`] that carries the [`GlueOps`] callbacks
//! 6. Enable clocks
//! 7. Program the interface mode
//! 8. Register with the MAC core
//! 9. Create the diagnostic attributes (best effort)
//!
//! A failure in steps 1-3 or 6-8 aborts probe. Everything acquired so far is
//! released in reverse order: explicit teardown for clocks and interface
//! programming, drop for the handles themselves.

use embedded_hal::delay::DelayNs;

use super::glue::{Device, GlueOps, InterfaceTarget};
use super::platform::{AttributeRegistry, MacCore, Platform};
use crate::diag::{AttributeSet, DIAGNOSTICS};
use crate::error::{ConfigError, ConfigResult, ProbeError, Result};
use crate::hal::clock::{CLK_MEM_NAME, CLK_TX_NAME, ClockManager};
use crate::hal::regmap::InterfaceRegister;
use crate::hal::reset::{ResetSequencer, ResetSpec};
use crate::variant::{self, InterfaceSelect, VariantPolicy};

/// Handles resolved from the device description
struct ParsedConfig<P: Platform> {
    clocks: ClockManager<P::Clock>,
    interface_target: InterfaceTarget<P::Regmap, P::Firmware>,
    rmii_refclk_ext: bool,
}

/// Resolve what the variant requires.
///
/// Only the resources the variant declares are looked up; anything else the
/// description provides is left alone.
fn parse_config<P: Platform>(platform: &mut P, variant: &VariantPolicy) -> ConfigResult<ParsedConfig<P>> {
    let rmii_refclk_ext = platform.rmii_refclk_ext();

    let Some(tx) = platform.clock(CLK_TX_NAME) else {
        error!("failed to get tx clock");
        return Err(ConfigError::MissingTxClock);
    };

    let mem = if variant.needs_mem_clock {
        let Some(mem) = platform.clock(CLK_MEM_NAME) else {
            error!("failed to get mem clock");
            return Err(ConfigError::MissingMemClock);
        };
        Some(mem)
    } else {
        None
    };

    let interface_target = match variant.interface_select {
        InterfaceSelect::Regmap => {
            let regmap = platform
                .interface_regmap()
                .ok_or(ConfigError::MissingInterfaceRegmap)?;
            let Some(offset) = platform.interface_offset() else {
                error!("can't get intf mode reg offset");
                return Err(ConfigError::MissingInterfaceOffset);
            };
            InterfaceTarget::Register(InterfaceRegister::new(regmap, offset))
        }
        InterfaceSelect::Firmware => {
            InterfaceTarget::Firmware(platform.firmware().ok_or(ConfigError::MissingFirmware)?)
        }
    };

    Ok(ParsedConfig {
        clocks: ClockManager::new(tx, mem),
        interface_target,
        rmii_refclk_ext,
    })
}

/// Bring up one EQoS instance.
///
/// Reset line problems and attribute registration failures are logged and
/// skipped. Every other failure is returned after unwinding.
pub fn probe<P, C, A, D>(
    platform: &mut P,
    core: &mut C,
    registry: &mut A,
    delay: &mut D,
) -> Result<Device<P>>
where
    P: Platform,
    C: MacCore,
    A: AttributeRegistry,
    D: DelayNs,
{
    let resources = platform
        .resources()
        .ok_or(ConfigError::PlatformResources)?;

    let variant = variant::lookup(platform.compatible()).inspect_err(|_| {
        error!("failed to get match data");
    })?;

    let parsed = parse_config(platform, variant).inspect_err(|e| {
        error!("failed to parse device description: {}", e.as_str());
    })?;

    let mut reset = ResetSpec::new(platform.reset_line(), platform.reset_timing());
    let mut sequencer = ResetSequencer::new();
    if let Err(e) = sequencer.run(&mut reset, delay) {
        warn!("phy reset skipped: {}", e.as_str());
    }

    let mut device = Device {
        variant,
        clocks: parsed.clocks,
        interface_target: parsed.interface_target,
        rmii_refclk_ext: parsed.rmii_refclk_ext,
        interface: platform.interface_mode(),
        reset_pin: reset.line.into_pin(),
        reset_state: sequencer.state(),
        resources,
        attributes: AttributeSet::empty(),
    };

    if device.clocks_config(true).is_err() {
        return Err(ProbeError::ClockInitFailed.into());
    }

    if let Err(e) = device.init() {
        error!("interface init failed: {}", e);
        let _ = device.clocks_config(false);
        return Err(ProbeError::InterfaceInitFailed.into());
    }

    if core.register(&device.core_setup()).is_err() {
        error!("mac core registration failed");
        device.exit();
        let _ = device.clocks_config(false);
        return Err(ProbeError::CoreRegistrationFailed.into());
    }

    for op in &DIAGNOSTICS {
        match registry.create(op.name) {
            Ok(()) => device.attributes.insert(op.attribute),
            Err(_) => warn!("could not create attribute {}", op.name),
        }
    }

    info!(
        "{} probed, {} interface",
        variant.compatible,
        device.interface.as_str()
    );
    Ok(device)
}

// =============================================================================
// Unit Tests
// =============================================================================
