/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Byte alignment
//!
//! The number of leading bytes of a raw buffer that are skipped before
//! decoding begins. Scrubbing it exposes structure that doesn't start
//! on a sample boundary.

use core::fmt::{Display, Formatter};

/// Number of leading bytes skipped, always in `0..=7`
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ByteAlignment(u8);

impl ByteAlignment {
    pub const MAX: u8 = 7;

    /// Create an alignment, returning `None` if `bytes` is larger than
    /// [`ByteAlignment::MAX`]
    pub const fn new(bytes: u8) -> Option<ByteAlignment> {
        if bytes > Self::MAX {
            return None;
        }
        Some(ByteAlignment(bytes))
    }

    /// Create an alignment, clamping `bytes` into `0..=7`
    ///
    /// ```
    /// use binview_core::alignment::ByteAlignment;
    /// assert_eq!(ByteAlignment::clamped(12).get(), 7);
    /// assert_eq!(ByteAlignment::clamped(-3).get(), 0);
    /// ```
    pub fn clamped(bytes: i64) -> ByteAlignment {
        ByteAlignment(bytes.clamp(0, i64::from(Self::MAX)) as u8)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Display for ByteAlignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
