/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! How consecutive samples are grouped into pixels
use core::fmt::{Display, Formatter};
use core::str::FromStr;

#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum ColorMode {
    /// One sample per pixel
    #[default]
    Grayscale,
    /// Three samples per pixel, consumed as R,G,B,R,G,B...
    RGB
}

impl ColorMode {
    /// Number of samples that make up a pixel
    pub const fn channels(self) -> usize {
        match self {
            Self::Grayscale => 1,
            Self::RGB => 3
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Grayscale => "Grayscale",
            Self::RGB => "RGB"
        }
    }
}

impl Display for ColorMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no color mode
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownMode;

impl Display for UnknownMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown color mode, expected grayscale or rgb")
    }
}

impl FromStr for ColorMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if ["grayscale", "gray", "grey", "luma", "l"]
            .iter()
            .any(|x| x.eq_ignore_ascii_case(s))
        {
            return Ok(Self::Grayscale);
        }
        if s.eq_ignore_ascii_case("rgb") {
            return Ok(Self::RGB);
        }
        Err(UnknownMode)
    }
}
