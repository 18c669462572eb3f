// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 houthacker

//! Arena address type.

use core::fmt;
use core::ops::{Add, Sub};

/// An address inside the VM's memory arena.
///
/// Address zero is the null sentinel (free-list terminators, unallocated
/// buffers), which is why arenas are exposed at a non-zero base. Byte
/// offsets are applied with the `+` and `-` operators; the distance
/// between two addresses comes from [`Addr::offset_from`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Addr(u64);

impl Addr {
    /// The null address.
    pub const NULL: Self = Self(0);

    /// Create an address from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Check if this is the null address.
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// The raw address value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Byte distance from `origin` up to this address.
    ///
    /// `origin` must not lie above `self`.
    #[inline]
    #[must_use]
    pub const fn offset_from(self, origin: Self) -> u64 {
        self.0 - origin.0
    }
}

impl Add<u64> for Addr {
    type Output = Self;

    fn add(self, bytes: u64) -> Self {
        Self(self.0 + bytes)
    }
}

impl Sub<u64> for Addr {
    type Output = Self;

    fn sub(self, bytes: u64) -> Self {
        Self(self.0 - bytes)
    }
}

impl fmt::Debug for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Addr")
            .field(&format_args!("{:#x}", self.0))
            .finish()
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
