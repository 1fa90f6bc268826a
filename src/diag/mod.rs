//! Diagnostic Command Sequencer
//!
//! A fixed table of named diagnostic attributes used during Ethernet
//! compliance testing. Each attribute supports:
//!
//! - **read**: a snapshot of a fixed set of PHY registers as text. Never
//!   fails; registers that cannot be read show as `0xffff`.
//! - **write**: a textual trigger. Only the value `1` does anything; it
//!   identifies the attached PHY and runs that family's register script.
//!   Other values are accepted and ignored.
//!
//! The `mac` attribute reads and replaces the station address instead.
//!
//! Writes are fire-and-forget: a failed MDIO write is not detected and the
//! rest of the script still runs.
//!
//! # Example
//!
//! ```ignore
//! use ph_imx_dwmac::diag::{self, DiagTarget};
//!
//! let mut target = DiagTarget::new(&mut mdio, phy_addr, &mut station);
//! let op = diag::find("template_1000base").unwrap();
//! diag::write(op, "1\n", &mut target);
//! let report = diag::read(op, &mut target);
//! ```

pub mod mac;
pub mod scripts;

pub use mac::{StationAddress, parse_address};
pub use scripts::{PhyWrite, Script};

use core::fmt::Write as _;

use crate::hal::mdio::{MdioBus, read_or_unreadable};
use crate::internal::constants::{DIAG_REPORT_MAX_REGS, DIAG_TRIGGER_EXECUTE, MAC_ADDR_LEN};
use crate::internal::parse::parse_ulong_auto;
use crate::phy::{self, PhyFamily};

/// Report buffer capacity in bytes
pub const REPORT_CAPACITY: usize = 96;

// Widest entry is "0x1e = 0xffff" plus a two-space separator
const _: () = assert!(DIAG_REPORT_MAX_REGS * 15 + 1 <= REPORT_CAPACITY);

// =============================================================================
// Attributes
// =============================================================================

/// Diagnostic attribute identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Attribute {
    /// 1000BASE-T transmit template (peak, voltage, droop)
    Template1000Base,
    /// 1000BASE-T jitter with the PHY as master
    JitterMaster,
    /// 1000BASE-T non-linear distortion
    Distortion,
    /// 100BASE-TX transmit template
    Template100Base,
    /// 10BASE-T link pulse shape
    LinkPulse,
    /// 10BASE-T MAU / loopback
    Mau,
    /// Station address
    Mac,
    /// 10BASE-T harmonic content
    Harmonic,
}

impl Attribute {
    /// Bit used in [`AttributeSet`]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of registered attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AttributeSet(u8);

impl AttributeSet {
    /// No attributes
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add an attribute
    pub fn insert(&mut self, attr: Attribute) {
        self.0 |= attr.bit();
    }

    /// Remove an attribute
    pub fn remove(&mut self, attr: Attribute) {
        self.0 &= !attr.bit();
    }

    /// Check membership
    pub const fn contains(&self, attr: Attribute) -> bool {
        self.0 & attr.bit() != 0
    }

    /// Number of attributes in the set
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// True if no attribute is registered
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// What a diagnostic does when triggered
#[derive(Debug, Clone, Copy)]
pub enum OpKind {
    /// Run a PHY register script and report PHY registers
    PhyTest {
        /// Script for a PHY family
        script: fn(PhyFamily) -> Script,
        /// Registers shown by `read`
        report_registers: &'static [u8],
    },
    /// Show or replace the station address
    StationAddress,
}

/// One diagnostic attribute
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticOp {
    /// Attribute identity
    pub attribute: Attribute,
    /// Attribute name as exposed to the operator
    pub name: &'static str,
    /// Behaviour
    pub kind: OpKind,
}

impl DiagnosticOp {
    /// Script to run for a PHY identifier, if the PHY is scripted
    pub fn script_for(&self, phy_id: u32) -> Option<Script> {
        match self.kind {
            OpKind::PhyTest { script, .. } => PhyFamily::from_id(phy_id).map(script),
            OpKind::StationAddress => None,
        }
    }
}

const REGS_1000BASE_TEMPLATE: &[u8] = &[0x10, 0x1d, 0x1e, 0x24];
const REGS_1000BASE_JITTER: &[u8] = &[0x10, 0x1d, 0x1e, 0x00];
const REGS_1000BASE_DISTORTION: &[u8] = &[0x10, 0x1d, 0x1e, 0x00, 0x09];
const REGS_10_100BASE: &[u8] = &[0x10, 0x00, 0x1d, 0x1e];

/// Every diagnostic, in registration order
pub static DIAGNOSTICS: [DiagnosticOp; 8] = [
    DiagnosticOp {
        attribute: Attribute::Template1000Base,
        name: "template_1000base",
        kind: OpKind::PhyTest {
            script: scripts::template_1000base,
            report_registers: REGS_1000BASE_TEMPLATE,
        },
    },
    DiagnosticOp {
        attribute: Attribute::JitterMaster,
        name: "jitter_master",
        kind: OpKind::PhyTest {
            script: scripts::jitter_master,
            report_registers: REGS_1000BASE_JITTER,
        },
    },
    DiagnosticOp {
        attribute: Attribute::Distortion,
        name: "distortion",
        kind: OpKind::PhyTest {
            script: scripts::distortion,
            report_registers: REGS_1000BASE_DISTORTION,
        },
    },
    DiagnosticOp {
        attribute: Attribute::Template100Base,
        name: "template_100base",
        kind: OpKind::PhyTest {
            script: scripts::template_100base,
            report_registers: REGS_10_100BASE,
        },
    },
    DiagnosticOp {
        attribute: Attribute::LinkPulse,
        name: "link_pulse",
        kind: OpKind::PhyTest {
            script: scripts::link_pulse,
            report_registers: REGS_10_100BASE,
        },
    },
    DiagnosticOp {
        attribute: Attribute::Mau,
        name: "mau",
        kind: OpKind::PhyTest {
            script: scripts::mau,
            report_registers: REGS_10_100BASE,
        },
    },
    DiagnosticOp {
        attribute: Attribute::Mac,
        name: "mac",
        kind: OpKind::StationAddress,
    },
    DiagnosticOp {
        attribute: Attribute::Harmonic,
        name: "harmonic",
        kind: OpKind::PhyTest {
            script: scripts::harmonic,
            report_registers: REGS_10_100BASE,
        },
    },
];

/// Look up a diagnostic by attribute name
pub fn find(name: &str) -> Option<&'static DiagnosticOp> {
    DIAGNOSTICS.iter().find(|op| op.name == name)
}

/// Look up a diagnostic by identity
pub fn get(attribute: Attribute) -> &'static DiagnosticOp {
    &DIAGNOSTICS[attribute as usize]
}

// =============================================================================
// Target and Results
// =============================================================================

/// Hardware a diagnostic acts on: the PHY behind an MDIO bus plus the
/// station address owned by the MAC core
pub struct DiagTarget<'a, M: MdioBus, S: StationAddress> {
    mdio: &'a mut M,
    phy_addr: u8,
    station: &'a mut S,
}

impl<'a, M: MdioBus, S: StationAddress> DiagTarget<'a, M, S> {
    /// Bundle the PHY and station address
    pub fn new(mdio: &'a mut M, phy_addr: u8, station: &'a mut S) -> Self {
        Self {
            mdio,
            phy_addr,
            station,
        }
    }

    /// PHY address on the MDIO bus
    pub fn phy_addr(&self) -> u8 {
        self.phy_addr
    }
}

/// Formatted register snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report(heapless::String<REPORT_CAPACITY>);

impl Report {
    /// Report text
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl core::fmt::Display for Report {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a diagnostic write
///
/// Every outcome is a success from the caller's point of view; the variants
/// only exist so callers and tests can tell what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteOutcome {
    /// Trigger value was not `1`
    Ignored,
    /// A script ran
    Executed {
        /// PHY family the script was selected for
        family: PhyFamily,
        /// Number of register writes issued
        writes: usize,
    },
    /// PHY identifier matched no scripted family; nothing written
    UnrecognizedPhy(u32),
    /// New station address applied
    AddressCommitted([u8; MAC_ADDR_LEN]),
    /// Payload was not six well-formed octets; nothing applied
    MalformedAddress,
}

// =============================================================================
// Operations
// =============================================================================

/// Produce the report for a diagnostic
pub fn read<M: MdioBus, S: StationAddress>(op: &DiagnosticOp, target: &mut DiagTarget<'_, M, S>) -> Report {
    let mut out = heapless::String::new();

    // Capacity covers the longest report; a formatting error cannot occur
    let _ = match op.kind {
        OpKind::PhyTest {
            report_registers, ..
        } => format_registers(&mut out, target, report_registers),
        OpKind::StationAddress => format_address(&mut out, &target.station.read_hw_address()),
    };

    Report(out)
}

fn format_registers<M: MdioBus, S: StationAddress>(
    out: &mut heapless::String<REPORT_CAPACITY>,
    target: &mut DiagTarget<'_, M, S>,
    registers: &[u8],
) -> core::fmt::Result {
    for (i, &reg) in registers.iter().enumerate() {
        if i > 0 {
            out.write_str("  ")?;
        }
        let value = read_or_unreadable(&mut *target.mdio, target.phy_addr, reg);
        write!(out, "{reg:#04x} = {value:#x}")?;
    }
    out.write_char('\n')
}

fn format_address(
    out: &mut heapless::String<REPORT_CAPACITY>,
    addr: &[u8; MAC_ADDR_LEN],
) -> core::fmt::Result {
    writeln!(
        out,
        "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
        addr[0], addr[1], addr[2], addr[3], addr[4], addr[5]
    )
}

/// Handle a write to a diagnostic.
///
/// Never fails. Unknown PHYs and malformed addresses are only logged at
/// debug level.
pub fn write<M: MdioBus, S: StationAddress>(
    op: &DiagnosticOp,
    payload: &str,
    target: &mut DiagTarget<'_, M, S>,
) -> WriteOutcome {
    match op.kind {
        OpKind::PhyTest { .. } => run_script(op, payload, target),
        OpKind::StationAddress => match parse_address(payload) {
            Some(addr) => {
                mac::commit(&mut *target.station, &addr);
                info!("station address changed by diagnostic");
                WriteOutcome::AddressCommitted(addr)
            }
            None => {
                debug!("mac: malformed address ignored");
                WriteOutcome::MalformedAddress
            }
        },
    }
}

fn run_script<M: MdioBus, S: StationAddress>(
    op: &DiagnosticOp,
    payload: &str,
    target: &mut DiagTarget<'_, M, S>,
) -> WriteOutcome {
    if parse_ulong_auto(payload) != DIAG_TRIGGER_EXECUTE {
        return WriteOutcome::Ignored;
    }

    let phy_id = phy::identify(&mut *target.mdio, target.phy_addr);
    let (Some(family), Some(script)) = (PhyFamily::from_id(phy_id), op.script_for(phy_id)) else {
        debug!("{}: no script for phy id {}", op.name, phy_id);
        return WriteOutcome::UnrecognizedPhy(phy_id);
    };

    info!("{}: {} test", op.name, family.name());
    for &(reg, value) in script {
        let _ = target.mdio.write(target.phy_addr, reg, value);
    }

    WriteOutcome::Executed {
        family,
        writes: script.len(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
