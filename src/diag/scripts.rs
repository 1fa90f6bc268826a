//! PHY compliance test scripts
//!
//! Literal `(register, value)` sequences, one per diagnostic and PHY family.
//! Order is significant and every script is written exactly once per
//! trigger; there is no read-back.
//!
//! Vendor indirect access used below:
//! - AR8031: `0x1d` selects a debug register, `0x1e` writes it.
//! - YT8531: `0x1e` selects an extended register, `0x1f` writes it
//!   (`0xa000` is the common/UTP page select, `0x27` the UTP test control).

use crate::phy::PhyFamily;

/// One PHY register write
pub type PhyWrite = (u8, u16);

/// An ordered register-write script
pub type Script = &'static [PhyWrite];

// =============================================================================
// 1000BASE-T Transmit Template (test mode 1)
// =============================================================================

const AR8031_TEMPLATE_1000BASE: Script = &[
    (0x10, 0x0800),
    (0x1d, 0x000b),
    (0x1e, 0x0009),
    (0x1d, 0x0004),
    (0x1e, 0xfbbb),
    (0x00, 0x8140),
    (0x09, 0x2200),
];

const KSZ9031_TEMPLATE_1000BASE: Script = &[(0x00, 0x0140), (0x09, 0x3b00)];

const YT8531_TEMPLATE_1000BASE: Script = &[
    (0x1e, 0x0027),
    (0x1f, 0x2026),
    (0x10, 0x0002),
    (0x00, 0x8140),
    (0x09, 0x2200),
    (0x00, 0x8140),
];

// =============================================================================
// 1000BASE-T Jitter as Master (test mode 2)
// =============================================================================

const AR8031_JITTER_MASTER: Script = &[
    (0x10, 0x0800),
    (0x1d, 0x000b),
    (0x1e, 0x0009),
    (0x00, 0x8140),
    (0x09, 0x4200),
];

const KSZ9031_JITTER_MASTER: Script = &[(0x00, 0x0140), (0x09, 0x5b00)];

const YT8531_JITTER_MASTER: Script = &[
    (0x1e, 0x0027),
    (0x1f, 0x2026),
    (0x10, 0x0002),
    (0x00, 0x8140),
    (0x5a, 0x5a00),
    (0x00, 0x8140),
];

// =============================================================================
// 1000BASE-T Distortion (test mode 4)
// =============================================================================

const AR8031_DISTORTION: Script = &[
    (0x10, 0x0800),
    (0x1d, 0x000b),
    (0x1e, 0x0009),
    (0x00, 0x8140),
    (0x09, 0x8200),
];

const KSZ9031_DISTORTION: Script = &[(0x00, 0x0140), (0x09, 0x9b00)];

const YT8531_DISTORTION: Script = &[
    (0x1e, 0x0027),
    (0x1f, 0x2026),
    (0x10, 0x0002),
    (0x00, 0x8140),
    (0x09, 0x8200),
    (0x00, 0x8140),
];

// =============================================================================
// 100BASE-TX Template
// =============================================================================

const AR8031_TEMPLATE_100BASE: Script = &[
    (0x10, 0x0800),
    (0x00, 0xa100),
    (0x1d, 0x0029),
    (0x1e, 0x36dc),
    (0x1d, 0x000b),
    (0x1e, 0x3c40),
];

const KSZ9031_TEMPLATE_100BASE: Script = &[(0x00, 0x2100), (0x1c, 0x00c0)];

const YT8531_TEMPLATE_100BASE: Script = &[
    (0x1e, 0xa000),
    (0x1f, 0x0000),
    (0x1e, 0x0027),
    (0x1f, 0x2026),
    (0x10, 0x0002),
    (0x00, 0xa100),
];

// =============================================================================
// 10BASE-T Link Pulse
// =============================================================================

const AR8031_LINK_PULSE: Script = &[
    (0x10, 0x0800),
    (0x00, 0x8100),
    (0x1d, 0x0029),
    (0x1e, 0x36dc),
    (0x1d, 0x000b),
    (0x1e, 0x3c40),
    (0x1d, 0x0012),
    (0x1e, 0x4c0f),
];

const KSZ9031_LINK_PULSE: Script = &[(0x00, 0x0100)];

const YT8531_LINK_PULSE: Script = &[
    (0x1e, 0xa000),
    (0x1f, 0x0000),
    (0x00, 0x8100),
    (0x0a, 0x020b),
];

// =============================================================================
// 10BASE-T MAU / Loopback
// =============================================================================

const AR8031_MAU: Script = &[
    (0x10, 0x0800),
    (0x00, 0x8100),
    (0x1d, 0x0029),
    (0x1e, 0x36dc),
    (0x1d, 0x000b),
    (0x1e, 0x3c40),
    (0x1d, 0x0012),
    (0x1e, 0x4c0e),
];

const KSZ9031_10BASE_LOOPBACK: Script = &[(0x00, 0x0100), (0x11, 0x01f4), (0x1c, 0x00c0)];

const YT8531_MAU: Script = &[(0x10, 0x0002), (0x00, 0x8100)];

// =============================================================================
// 10BASE-T Harmonic
// =============================================================================

const AR8031_HARMONIC: Script = &[
    (0x10, 0x0800),
    (0x00, 0x8100),
    (0x1d, 0x0029),
    (0x1e, 0x36dc),
    (0x1d, 0x000b),
    (0x1e, 0x3c40),
    (0x1d, 0x0012),
    (0x1e, 0x4c0d),
];

const YT8531_HARMONIC: Script = &[
    (0x1e, 0xa000),
    (0x1f, 0x0000),
    (0x00, 0x8100),
    (0x0a, 0x0209),
];

// =============================================================================
// Script Selectors
// =============================================================================

pub(crate) fn template_1000base(family: PhyFamily) -> Script {
    match family {
        PhyFamily::Ar8031 => AR8031_TEMPLATE_1000BASE,
        PhyFamily::Ksz9031 => KSZ9031_TEMPLATE_1000BASE,
        PhyFamily::Yt8531 => YT8531_TEMPLATE_1000BASE,
    }
}

pub(crate) fn jitter_master(family: PhyFamily) -> Script {
    match family {
        PhyFamily::Ar8031 => AR8031_JITTER_MASTER,
        PhyFamily::Ksz9031 => KSZ9031_JITTER_MASTER,
        PhyFamily::Yt8531 => YT8531_JITTER_MASTER,
    }
}

pub(crate) fn distortion(family: PhyFamily) -> Script {
    match family {
        PhyFamily::Ar8031 => AR8031_DISTORTION,
        PhyFamily::Ksz9031 => KSZ9031_DISTORTION,
        PhyFamily::Yt8531 => YT8531_DISTORTION,
    }
}

pub(crate) fn template_100base(family: PhyFamily) -> Script {
    match family {
        PhyFamily::Ar8031 => AR8031_TEMPLATE_100BASE,
        PhyFamily::Ksz9031 => KSZ9031_TEMPLATE_100BASE,
        PhyFamily::Yt8531 => YT8531_TEMPLATE_100BASE,
    }
}

pub(crate) fn link_pulse(family: PhyFamily) -> Script {
    match family {
        PhyFamily::Ar8031 => AR8031_LINK_PULSE,
        PhyFamily::Ksz9031 => KSZ9031_LINK_PULSE,
        PhyFamily::Yt8531 => YT8531_LINK_PULSE,
    }
}

pub(crate) fn mau(family: PhyFamily) -> Script {
    match family {
        PhyFamily::Ar8031 => AR8031_MAU,
        PhyFamily::Ksz9031 => KSZ9031_10BASE_LOOPBACK,
        PhyFamily::Yt8531 => YT8531_MAU,
    }
}

// KSZ9031 has no dedicated harmonic mode; the 10BASE-T loopback setup is used
pub(crate) fn harmonic(family: PhyFamily) -> Script {
    match family {
        PhyFamily::Ar8031 => AR8031_HARMONIC,
        PhyFamily::Ksz9031 => KSZ9031_10BASE_LOOPBACK,
        PhyFamily::Yt8531 => YT8531_HARMONIC,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
