/*
* Copyright (c) 2023.
*
* This software is free software;

 You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
*/
//! Sample to intensity conversion
//!
//! Maps samples of any numeric kind into displayable 8 bit intensities.
//! The mapping is fixed per kind, two buffers of the same kind always map
//! the same value to the same intensity.
//!
//!|class     |mapping                                    |
//!|----------|-------------------------------------------|
//!|unsigned  | `value * 255 / T::MAX`                    |
//!|signed    | `(value - T::MIN) * 255 / (T::MAX - T::MIN)` |
//!|float     | `clamp(value, 0.0, 1.0) * 255`, NaN is 0  |
//!
//! Results are clamped into `0..=255` and truncated.
use binview_core::color_mode::ColorMode;

use crate::frame::Frame;
use crate::samples::{Sample, SampleSlice};

/// A sample type that can be mapped to an 8 bit intensity
pub trait ToIntensity: Sample {
    fn to_intensity(self) -> u8;
}

/// Clamp into `0..=255` and truncate
#[inline(always)]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn clamp_to_u8(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

macro_rules! impl_unsigned_intensity {
    ($($t:ty),*) => {
        $(
            impl ToIntensity for $t {
                #[inline(always)]
                #[allow(clippy::cast_precision_loss)]
                fn to_intensity(self) -> u8 {
                    // multiply first, keeps u8 an exact identity
                    clamp_to_u8((self as f64 * 255.0) / (<$t>::MAX as f64))
                }
            }
        )*
    };
}

macro_rules! impl_signed_intensity {
    ($($t:ty),*) => {
        $(
            impl ToIntensity for $t {
                #[inline(always)]
                #[allow(clippy::cast_precision_loss)]
                fn to_intensity(self) -> u8 {
                    let min = <$t>::MIN as f64;
                    let range = <$t>::MAX as f64 - min;

                    clamp_to_u8(((self as f64 - min) * 255.0) / range)
                }
            }
        )*
    };
}

macro_rules! impl_float_intensity {
    ($($t:ty),*) => {
        $(
            impl ToIntensity for $t {
                #[inline(always)]
                fn to_intensity(self) -> u8 {
                    if self.is_nan() {
                        return 0;
                    }
                    clamp_to_u8(f64::from(self).clamp(0.0, 1.0) * 255.0)
                }
            }
        )*
    };
}

impl_unsigned_intensity!(u8, u16, u32, u64);
impl_signed_intensity!(i8, i16, i32, i64);
impl_float_intensity!(f32, f64);

/// An image of 8 bit intensities ready to hand to a renderer
///
/// Pixels are row major, for [`ColorMode::RGB`] the three channels of a pixel
/// are stored next to each other.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IntensityImage {
    pixels: Vec<u8>,
    width:  usize,
    height: usize,
    mode:   ColorMode
}

impl IntensityImage {
    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    pub const fn channels(&self) -> usize {
        self.mode.channels()
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// The channel values of the pixel at `(x, y)`
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let channels = self.channels();
        let start = (y * self.width + x) * channels;

        self.pixels.get(start..start + channels)
    }
}

/// Map every sample in `from` into `to`
///
/// Only `min(from.len(), to.len())` samples are converted
pub fn normalize_into<T: ToIntensity>(from: &[T], to: &mut [u8]) {
    for (old, new) in from.iter().zip(to.iter_mut()) {
        *new = old.to_intensity();
    }
}

/// Convert u8 samples, an identity mapping
fn normalize_u8(from: &[u8], to: &mut [u8]) {
    to.copy_from_slice(from);
}

/// Convert u16 samples
///
/// `255 / 65535` is exactly `1 / 257` so integer division gives the same
/// result as the floating point mapping
fn normalize_u16(from: &[u16], to: &mut [u8]) {
    for (old, new) in from.iter().zip(to.iter_mut()) {
        *new = (old / 257) as u8;
    }
}

/// Convert a frame into an image of 8 bit intensities.
///
/// The only allocation is the output buffer, sized to the frame.
pub fn normalize(frame: &Frame<'_>) -> IntensityImage {
    let samples = frame.samples();
    let mut pixels = vec![0_u8; samples.len()];

    match samples {
        SampleSlice::U8(from) => normalize_u8(from, &mut pixels),
        SampleSlice::U16(from) => normalize_u16(from, &mut pixels),
        SampleSlice::U32(from) => normalize_into(from, &mut pixels),
        SampleSlice::U64(from) => normalize_into(from, &mut pixels),
        SampleSlice::I8(from) => normalize_into(from, &mut pixels),
        SampleSlice::I16(from) => normalize_into(from, &mut pixels),
        SampleSlice::I32(from) => normalize_into(from, &mut pixels),
        SampleSlice::I64(from) => normalize_into(from, &mut pixels),
        SampleSlice::F32(from) => normalize_into(from, &mut pixels),
        SampleSlice::F64(from) => normalize_into(from, &mut pixels)
    }

    IntensityImage {
        pixels,
        width: frame.width(),
        height: frame.height(),
        mode: frame.mode()
    }
}
