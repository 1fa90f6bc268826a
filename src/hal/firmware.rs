//! System controller firmware access
//!
//! On i.MX8DXL the interface mode is not in a GPR; the system controller
//! unit (SCU) owns it and is driven through misc control calls.

/// SCU resource id of the EQoS Ethernet controller
pub const IMX_SC_R_ENET_1: u32 = 252;

/// SCU control: interface select
pub const IMX_SC_C_INTF_SEL: u32 = 59;

/// SCU control: clock generation enable
pub const IMX_SC_C_CLK_GEN_EN: u32 = 58;

/// Value written to [`IMX_SC_C_CLK_GEN_EN`]
pub const IMX_SC_C_CLK_GEN_EN_VALUE: u32 = 1;

/// Firmware interface-select value for a Family A GPR select field
///
/// The SCU takes the unshifted select code.
pub const fn intf_sel(gpr_select: u32) -> u32 {
    gpr_select >> 16
}

/// System controller misc control
pub trait ScuFirmware {
    /// Transport or firmware error
    type Error: core::fmt::Debug;

    /// Set a misc control value for a resource
    fn set_control(&mut self, resource: u32, control: u32, value: u32) -> Result<(), Self::Error>;
}

impl<T: ScuFirmware + ?Sized> ScuFirmware for &mut T {
    type Error = T::Error;

    fn set_control(&mut self, resource: u32, control: u32, value: u32) -> Result<(), Self::Error> {
        T::set_control(self, resource, control, value)
    }
}

/// Apply a firmware interface selection.
///
/// Both controls are always attempted; the first failure is returned.
pub fn apply_interface<F: ScuFirmware>(
    firmware: &mut F,
    intf_sel: u32,
    clk_gen_en: u32,
) -> Result<(), F::Error> {
    let sel = firmware.set_control(IMX_SC_R_ENET_1, IMX_SC_C_INTF_SEL, intf_sel);
    let clk = firmware.set_control(IMX_SC_R_ENET_1, IMX_SC_C_CLK_GEN_EN, clk_gen_en);
    sel.and(clk)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec;

    use super::*;
    use crate::test_utils::{Event, MockFirmware, event_log};

    #[test]
    fn intf_sel_unshifts() {
        assert_eq!(intf_sel(0x4 << 16), 4);
        assert_eq!(intf_sel(0x1 << 16), 1);
        assert_eq!(intf_sel(0), 0);
    }

    #[test]
    fn apply_issues_select_then_clock_enable() {
        let log = event_log();
        let mut fw = MockFirmware::new(&log);

        apply_interface(&mut fw, 4, 1).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                Event::FirmwareControl {
                    resource: 252,
                    control: 59,
                    value: 4
                },
                Event::FirmwareControl {
                    resource: 252,
                    control: 58,
                    value: 1
                },
            ]
        );
    }

    #[test]
    fn apply_attempts_second_call_after_first_fails() {
        let log = event_log();
        let mut fw = MockFirmware::new(&log).failing_control(IMX_SC_C_INTF_SEL);

        assert!(apply_interface(&mut fw, 1, 1).is_err());

        // The failed call is not recorded; the clock enable still went out
        assert_eq!(
            *log.borrow(),
            vec![Event::FirmwareControl {
                resource: 252,
                control: 58,
                value: 1
            }]
        );
    }

    #[test]
    fn apply_reports_second_failure() {
        let log = event_log();
        let mut fw = MockFirmware::new(&log).failing_control(IMX_SC_C_CLK_GEN_EN);
        assert!(apply_interface(&mut fw, 0, 1).is_err());
        assert_eq!(log.borrow().len(), 1);
    }
}
