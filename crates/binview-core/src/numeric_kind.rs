/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Numeric kinds a byte buffer can be reinterpreted as
//!
//! Every kind has a fixed byte width and a classification which decides
//! how its samples are mapped to display intensities.
//!
//!|NumericKind |native type |width |class    |
//!|------------|------------|------|---------|
//!|`Uint8`     | [`u8`]     |1     |Unsigned |
//!|`Uint16`    | [`u16`]    |2     |Unsigned |
//!|`Uint32`    | [`u32`]    |4     |Unsigned |
//!|`Uint64`    | [`u64`]    |8     |Unsigned |
//!|`Int8`      | [`i8`]     |1     |Signed   |
//!|`Int16`     | [`i16`]    |2     |Signed   |
//!|`Int32`     | [`i32`]    |4     |Signed   |
//!|`Int64`     | [`i64`]    |8     |Signed   |
//!|`Float32`   | [`f32`]    |4     |Float    |
//!|`Float64`   | [`f64`]    |8     |Float    |
use core::fmt::{Display, Formatter};
use core::str::FromStr;

/// How samples of a numeric kind are rescaled for display
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NumericClass {
    /// Divided by the type maximum
    Unsigned,
    /// Rescaled over the full `min..=max` range of the type
    Signed,
    /// Clamped to `0.0..=1.0`
    Float
}

/// The numeric type samples are decoded as
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum NumericKind {
    #[default]
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64
}

/// Every numeric kind, in the order a picker would list them
pub static ALL_KINDS: [NumericKind; 10] = [
    NumericKind::Uint8,
    NumericKind::Uint16,
    NumericKind::Uint32,
    NumericKind::Uint64,
    NumericKind::Int8,
    NumericKind::Int16,
    NumericKind::Int32,
    NumericKind::Int64,
    NumericKind::Float32,
    NumericKind::Float64
];

impl NumericKind {
    /// Number of bytes a single sample occupies
    ///
    /// ```
    /// use binview_core::numeric_kind::NumericKind;
    /// assert_eq!(NumericKind::Int16.byte_width(), 2);
    /// assert_eq!(NumericKind::Float64.byte_width(), 8);
    /// ```
    pub const fn byte_width(self) -> usize {
        match self {
            Self::Uint8 | Self::Int8 => 1,
            Self::Uint16 | Self::Int16 => 2,
            Self::Uint32 | Self::Int32 | Self::Float32 => 4,
            Self::Uint64 | Self::Int64 | Self::Float64 => 8
        }
    }

    pub const fn class(self) -> NumericClass {
        match self {
            Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64 => NumericClass::Unsigned,
            Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 => NumericClass::Signed,
            Self::Float32 | Self::Float64 => NumericClass::Float
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self.class(), NumericClass::Float)
    }

    pub const fn is_signed(self) -> bool {
        matches!(self.class(), NumericClass::Signed)
    }

    /// The lowercase name of the kind, e.g `uint16` or `float32`
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64"
        }
    }
}

impl Display for NumericKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no numeric kind
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownKind;

impl Display for UnknownKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown numeric kind, expected one of uint8..uint64, int8..int64, float32, float64")
    }
}

impl FromStr for NumericKind {
    type Err = UnknownKind;

    /// Parse a kind from its name, `u16`, `i32` and `f64` style shorthands
    /// are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        for kind in ALL_KINDS {
            if kind.name().eq_ignore_ascii_case(s) {
                return Ok(kind);
            }
        }
        let kind = match s {
            "u8" => Self::Uint8,
            "u16" => Self::Uint16,
            "u32" => Self::Uint32,
            "u64" => Self::Uint64,
            "i8" => Self::Int8,
            "i16" => Self::Int16,
            "i32" => Self::Int32,
            "i64" => Self::Int64,
            "f32" => Self::Float32,
            "f64" => Self::Float64,
            _ => return Err(UnknownKind)
        };
        Ok(kind)
    }
}
