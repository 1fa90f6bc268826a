//! Shared register (syscon) access
//!
//! The interface-mode field lives in a general-purpose register shared with
//! other blocks, so it is only ever updated with a masked read-modify-write.

/// Masked access to a shared register block
pub trait Regmap {
    /// Bus or lookup error
    type Error: core::fmt::Debug;

    /// Replace the `mask` bits of the register at `offset` with `value`
    fn update_bits(&mut self, offset: u32, mask: u32, value: u32) -> Result<(), Self::Error>;
}

impl<T: Regmap + ?Sized> Regmap for &mut T {
    type Error = T::Error;

    fn update_bits(&mut self, offset: u32, mask: u32, value: u32) -> Result<(), Self::Error> {
        T::update_bits(self, offset, mask, value)
    }
}

/// A regmap handle paired with the offset of the interface-mode register
#[derive(Debug)]
pub struct InterfaceRegister<R: Regmap> {
    regmap: R,
    offset: u32,
}

impl<R: Regmap> InterfaceRegister<R> {
    /// Pair a regmap with a register offset
    pub const fn new(regmap: R, offset: u32) -> Self {
        Self { regmap, offset }
    }

    /// Register offset within the regmap
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Update the interface-mode field
    pub fn write_field(&mut self, mask: u32, value: u32) -> Result<(), R::Error> {
        self.regmap.update_bits(self.offset, mask, value)
    }

    /// Give back the regmap handle
    pub fn into_inner(self) -> R {
        self.regmap
    }
}
