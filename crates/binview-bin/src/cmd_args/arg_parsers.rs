/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use binview_core::color_mode::ColorMode;
use binview_core::numeric_kind::NumericKind;
use clap::builder::PossibleValue;
use clap::ValueEnum;

#[derive(Copy, Clone, Debug)]
pub struct INumericKind(pub NumericKind);

impl INumericKind {
    pub const fn to_kind(self) -> NumericKind {
        self.0
    }
}

static KIND_VALUES: [INumericKind; 10] = [
    INumericKind(NumericKind::Uint8),
    INumericKind(NumericKind::Uint16),
    INumericKind(NumericKind::Uint32),
    INumericKind(NumericKind::Uint64),
    INumericKind(NumericKind::Int8),
    INumericKind(NumericKind::Int16),
    INumericKind(NumericKind::Int32),
    INumericKind(NumericKind::Int64),
    INumericKind(NumericKind::Float32),
    INumericKind(NumericKind::Float64)
];

impl ValueEnum for INumericKind {
    fn value_variants<'a>() -> &'a [Self] {
        &KIND_VALUES
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.0.name()))
    }
}

#[derive(Copy, Clone, Debug)]
#[allow(clippy::upper_case_acronyms)]
pub enum IColorMode {
    Grayscale,
    RGB
}

impl IColorMode {
    pub const fn to_mode(self) -> ColorMode {
        match self {
            IColorMode::Grayscale => ColorMode::Grayscale,
            IColorMode::RGB => ColorMode::RGB
        }
    }
}

impl ValueEnum for IColorMode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Grayscale, Self::RGB]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Grayscale => PossibleValue::new("grayscale").alias("gray"),
            Self::RGB => PossibleValue::new("rgb")
        })
    }
}
