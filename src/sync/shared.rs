//! ISR-safe device slot using critical sections.
//!
//! Provides [`SharedDevice`], a static home for a device that is created at
//! runtime by probe and torn down by remove.

use super::primitives::CriticalSectionCell;

/// ISR-safe slot holding at most one device.
///
/// All access goes through `critical_section::with()`, disabling interrupts
/// for the duration of the closure. A diagnostic script or a clock retune
/// run inside one closure therefore never interleaves with another caller.
///
/// # Example
///
/// ```ignore
/// static ETH: SharedDevice<Device<Board>> = SharedDevice::new();
///
/// ETH.install(device);
/// ETH.with(|dev| dev.fix_speed(100));
/// let device = ETH.take();
/// ```
pub struct SharedDevice<T> {
    inner: CriticalSectionCell<Option<T>>,
}

impl<T> SharedDevice<T> {
    /// Create an empty slot (const, suitable for static initialization).
    pub const fn new() -> Self {
        Self {
            inner: CriticalSectionCell::new(None),
        }
    }

    /// Store a device, returning the one it replaces.
    pub fn install(&self, device: T) -> Option<T> {
        self.inner.with(|slot| slot.replace(device))
    }

    /// Remove the device, leaving the slot empty.
    pub fn take(&self) -> Option<T> {
        self.inner.with(Option::take)
    }

    /// Whether a device is installed
    pub fn is_installed(&self) -> bool {
        self.inner.with(|slot| slot.is_some())
    }

    /// Execute a closure with exclusive access to the device.
    ///
    /// Returns `None` when the slot is empty.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.inner.with(|slot| slot.as_mut().map(f))
    }

    /// Try to execute a closure, returning `None` if the slot is empty or
    /// already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.inner.try_with(|slot| slot.as_mut().map(f)).flatten()
    }
}

impl<T> Default for SharedDevice<T> {
    fn default() -> Self {
        Self::new()
    }
}
