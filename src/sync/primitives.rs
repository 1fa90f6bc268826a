//! Synchronization primitives for ISR-safe access.

use core::cell::RefCell;
use critical_section::Mutex;

/// Cell providing interior mutability with critical section protection.
///
/// Combines `critical_section::Mutex` with `RefCell` for safe mutable access
/// from both normal code and interrupt handlers.
pub struct CriticalSectionCell<T> {
    inner: Mutex<RefCell<T>>,
}

impl<T> CriticalSectionCell<T> {
    /// Create a new cell (const, suitable for static initialization).
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(value)),
        }
    }

    /// Execute a closure with exclusive mutable access.
    ///
    /// Interrupts are disabled for the duration of the closure.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        critical_section::with(|cs| {
            let mut value = self.inner.borrow_ref_mut(cs);
            f(&mut value)
        })
    }

    /// Try to execute a closure, returning `None` if already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .try_borrow_mut()
                .ok()
                .map(|mut value| f(&mut value))
        })
    }
}

// SAFETY: CriticalSectionCell uses critical sections to protect all access.
unsafe impl<T> Sync for CriticalSectionCell<T> {}

#[cfg(test)]
#[allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn critical_section_cell_new() {
        let cell: CriticalSectionCell<u32> = CriticalSectionCell::new(42);
        let value = cell.with(|v| *v);
        assert_eq!(value, 42);
    }

    #[test]
    fn critical_section_cell_with_mutates() {
        let cell: CriticalSectionCell<u32> = CriticalSectionCell::new(0);
        cell.with(|v| *v += 10);
        let value = cell.with(|v| *v);
        assert_eq!(value, 10);
    }

    #[test]
    fn critical_section_cell_with_returns_value() {
        let cell: CriticalSectionCell<u32> = CriticalSectionCell::new(42);
        let result = cell.with(|v| *v * 2);
        assert_eq!(result, 84);
    }

    #[test]
    fn critical_section_cell_try_with_succeeds() {
        let cell: CriticalSectionCell<u32> = CriticalSectionCell::new(42);
        let result = cell.try_with(|v| *v);
        assert_eq!(result, Some(42));
    }

    #[test]
    fn critical_section_cell_static_usage() {
        static CELL: CriticalSectionCell<u32> = CriticalSectionCell::new(0);
        CELL.with(|v| *v = 100);
        let value = CELL.with(|v| *v);
        assert_eq!(value, 100);
    }

    #[test]
    fn critical_section_cell_try_with_fails_when_borrowed() {
        let cell: CriticalSectionCell<u32> = CriticalSectionCell::new(1);
        let nested = cell.with(|_| cell.try_with(|v| *v));
        assert_eq!(nested, None);
    }
}
