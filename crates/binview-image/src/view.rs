/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The view state
//!
//! Holds the loaded buffer and the parameters the pipeline is driven with.
//! Changing the numeric kind or alignment re-decodes the buffer, every other
//! change only affects the frame and is recomputed on [`ViewState::render`].
use std::num::NonZeroUsize;
use std::path::Path;

use binview_core::alignment::ByteAlignment;
use binview_core::color_mode::ColorMode;
use binview_core::log::{debug, info, trace};
use binview_core::numeric_kind::NumericKind;

use crate::errors::LoadErrors;
use crate::frame::{extract, Extraction};
use crate::normalize::{normalize, IntensityImage};
use crate::raw::RawBuffer;
use crate::samples::{decode, SampleSequence};
use crate::status::{Status, ViewStatus};

/// Pixels per row a fresh view starts with
pub const DEFAULT_WIDTH: NonZeroUsize = match NonZeroUsize::new(1280) {
    Some(width) => width,
    None => panic!("default width is non zero")
};

/// Result of rendering the current view
#[derive(Clone, Debug, PartialEq)]
pub struct Render {
    /// The image, `None` if nothing is loaded or there wasn't enough data
    pub image:  Option<IntensityImage>,
    pub status: Status
}

/// Current parameters plus the loaded buffer and its decoded samples
#[derive(Clone, Debug)]
pub struct ViewState {
    source:    Option<RawBuffer>,
    samples:   SampleSequence,
    kind:      NumericKind,
    alignment: ByteAlignment,
    offset:    usize,
    width:     NonZeroUsize,
    mode:      ColorMode
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new()
    }
}

impl ViewState {
    /// A view with nothing loaded, `uint8` samples, no alignment,
    /// grayscale and [`DEFAULT_WIDTH`] pixels per row
    pub fn new() -> ViewState {
        ViewState {
            source:    None,
            samples:   SampleSequence::empty(NumericKind::default()),
            kind:      NumericKind::default(),
            alignment: ByteAlignment::default(),
            offset:    0,
            width:     DEFAULT_WIDTH,
            mode:      ColorMode::default()
        }
    }

    /// Replace the loaded buffer, re-decoding it and resetting the offset
    pub fn load(&mut self, source: RawBuffer) {
        info!("Loading {} ({} bytes)", source.name(), source.len());

        self.source = Some(source);
        self.offset = 0;
        self.reload();
    }

    /// Read `path` and load it.
    ///
    /// On failure the current buffer and parameters are left untouched.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadErrors> {
        let source = RawBuffer::read(path)?;
        self.load(source);
        Ok(())
    }

    /// Decode the buffer under the current kind and alignment
    fn reload(&mut self) {
        let bytes = self.source.as_ref().map(|x| x.bytes()).unwrap_or(&[]);

        self.samples = decode(bytes, self.kind, self.alignment);

        if self.offset > self.max_offset() {
            debug!(
                "Offset {} is past the last sample {}, resetting to 0",
                self.offset,
                self.max_offset()
            );
            self.offset = 0;
        }
        debug!(
            "Decoded {} elements of {} with alignment {}",
            self.samples.len(),
            self.kind,
            self.alignment
        );
    }

    pub fn set_kind(&mut self, kind: NumericKind) {
        if kind != self.kind {
            self.kind = kind;
            self.reload();
        }
    }

    pub fn set_alignment(&mut self, alignment: ByteAlignment) {
        if alignment != self.alignment {
            self.alignment = alignment;
            self.reload();
        }
    }

    /// Set the offset, clamped to `0..=max_offset()`
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset.min(self.max_offset());
        trace!("Offset set to {}", self.offset);
    }

    /// Move the offset by `delta` samples, clamping at both ends
    pub fn adjust_offset(&mut self, delta: isize) {
        let offset = self.offset.saturating_add_signed(delta);
        self.set_offset(offset);
    }

    pub fn set_width(&mut self, width: NonZeroUsize) {
        self.width = width;
    }

    /// Grow or shrink the width by `delta` pixels, it never drops below one
    pub fn adjust_width(&mut self, delta: isize) {
        let width = self.width.get().saturating_add_signed(delta);
        self.width = NonZeroUsize::new(width).unwrap_or(NonZeroUsize::MIN);
    }

    pub fn set_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
    }

    pub fn has_data(&self) -> bool {
        self.source.is_some()
    }

    /// Display name of the loaded buffer
    pub fn name(&self) -> Option<&str> {
        self.source.as_ref().map(|x| x.name())
    }

    pub fn source(&self) -> Option<&RawBuffer> {
        self.source.as_ref()
    }

    pub const fn kind(&self) -> NumericKind {
        self.kind
    }

    pub const fn alignment(&self) -> ByteAlignment {
        self.alignment
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn width(&self) -> NonZeroUsize {
        self.width
    }

    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    /// The decoded samples, cached until the kind or alignment changes
    pub fn samples(&self) -> &SampleSequence {
        &self.samples
    }

    pub fn element_count(&self) -> usize {
        self.samples.len()
    }

    /// The largest valid offset, `0` for an empty sequence
    pub fn max_offset(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }

    /// Shape the current window into a frame
    pub fn extract(&self) -> Extraction<'_> {
        extract(&self.samples, self.offset, self.width, self.mode)
    }

    /// Run the frame and normalize stages and describe the outcome
    pub fn render(&self) -> Render {
        if !self.has_data() {
            return Render {
                image:  None,
                status: self.status_with(ViewStatus::Empty)
            };
        }
        match self.extract() {
            Extraction::Frame(frame) => {
                let image = normalize(&frame);
                let view = ViewStatus::Frame {
                    width:  frame.width(),
                    height: frame.height(),
                    mode:   frame.mode(),
                    offset: frame.offset()
                };
                Render {
                    image:  Some(image),
                    status: self.status_with(view)
                }
            }
            Extraction::InsufficientData => Render {
                image:  None,
                status: self.status_with(ViewStatus::NotEnoughData)
            }
        }
    }

    /// The status of the current view, computing the frame shape without
    /// normalizing it
    pub fn status(&self) -> Status {
        let view = if !self.has_data() {
            ViewStatus::Empty
        } else {
            match self.extract() {
                Extraction::Frame(frame) => ViewStatus::Frame {
                    width:  frame.width(),
                    height: frame.height(),
                    mode:   frame.mode(),
                    offset: frame.offset()
                },
                Extraction::InsufficientData => ViewStatus::NotEnoughData
            }
        };
        self.status_with(view)
    }

    fn status_with(&self, view: ViewStatus) -> Status {
        Status {
            name: self.name().map(str::to_string),
            elements: self.samples.len(),
            kind: self.kind,
            alignment: self.alignment,
            view
        }
    }
}
