/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single frame, the rectangular window of samples being looked at
//!
//! Frames never copy, they borrow the window straight out of the
//! decoded [`SampleSequence`](crate::samples::SampleSequence).

use std::num::NonZeroUsize;

use binview_core::color_mode::ColorMode;
use binview_core::log::trace;
use binview_core::numeric_kind::NumericKind;

use crate::samples::{SampleSequence, SampleSlice};

/// A `height x width x channels` grid of raw samples
///
/// Samples are stored row major, with the channels of a pixel
/// kept next to each other.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame<'a> {
    samples: SampleSlice<'a>,
    offset:  usize,
    width:   usize,
    height:  usize,
    mode:    ColorMode
}

/// The outcome of extracting a frame
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Extraction<'a> {
    /// At least one full row could be formed
    Frame(Frame<'a>),
    /// The window starting at the offset is too small to form a single row.
    ///
    /// This is an expected outcome while scrubbing, not an error
    InsufficientData
}

impl<'a> Extraction<'a> {
    pub const fn is_insufficient(&self) -> bool {
        matches!(self, Self::InsufficientData)
    }

    pub fn frame(&self) -> Option<&Frame<'a>> {
        match self {
            Self::Frame(frame) => Some(frame),
            Self::InsufficientData => None
        }
    }

    pub fn into_frame(self) -> Option<Frame<'a>> {
        match self {
            Self::Frame(frame) => Some(frame),
            Self::InsufficientData => None
        }
    }
}

impl<'a> Frame<'a> {
    /// Every sample in the frame, `width * height * channels` of them
    pub const fn samples(&self) -> SampleSlice<'a> {
        self.samples
    }

    pub fn kind(&self) -> NumericKind {
        self.samples.kind()
    }

    /// Index of the first sample of the frame within its sequence
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    pub const fn channels(&self) -> usize {
        self.mode.channels()
    }

    /// Number of samples making up one row
    pub const fn stride(&self) -> usize {
        self.width * self.mode.channels()
    }

    /// Samples of row `y`, or `None` if `y` is past the last row
    pub fn row(&self, y: usize) -> Option<SampleSlice<'a>> {
        if y >= self.height {
            return None;
        }
        let stride = self.stride();
        self.samples.get(y * stride..(y + 1) * stride)
    }
}

/// Shape a window of `samples` into a frame.
///
/// # Arguments
/// - `samples`: Decoded samples to view
/// - `offset`: Index of the first sample to use, callers clamp this to
///   `0..samples.len()`. Offsets past the end yield [`Extraction::InsufficientData`]
/// - `width`: Pixels per row
/// - `mode`: Decides how many samples make up a pixel
///
/// # Returns
/// A frame of `floor((len - offset) / (width * channels))` rows viewing
/// exactly `height * width * channels` samples from `offset` onwards, samples
/// after the last full row are left unused.
///
/// If not even one row fits, [`Extraction::InsufficientData`].
///
/// This does not copy or convert any sample.
pub fn extract(
    samples: &SampleSequence, offset: usize, width: NonZeroUsize, mode: ColorMode
) -> Extraction<'_> {
    let available = samples.len().saturating_sub(offset);

    let stride = match width.get().checked_mul(mode.channels()) {
        Some(stride) => stride,
        None => return Extraction::InsufficientData
    };
    let height = available / stride;

    if height < 1 {
        trace!(
            "{available} samples from offset {offset} can't fill a {} sample row",
            stride
        );
        return Extraction::InsufficientData;
    }

    // height * stride <= available so this can't overflow or go out of bounds
    let end = offset + height * stride;

    match samples.as_slice().get(offset..end) {
        Some(window) => Extraction::Frame(Frame {
            samples: window,
            offset,
            width: width.get(),
            height,
            mode
        }),
        None => Extraction::InsufficientData
    }
}
