/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reinterpret arbitrary binary data as images
//!
//! The crate turns a raw byte buffer into something a human can look at
//! to spot headers, padding, repeating records or embedded images.
//!
//! It is split into three stages
//!
//! - [`samples::decode`]: raw bytes + numeric kind + byte alignment to a typed [`SampleSequence`]
//! - [`frame::extract`]: a window of samples shaped by offset, width and color mode into a [`Frame`]
//! - [`normalize::normalize`]: a frame of any numeric kind to 8 bit intensities
//!
//! [`ViewState`] binds the three together, caching the decoded samples and
//! recomputing the cheap stages on every parameter change.
//!
//! # Example
//! ```
//! use std::num::NonZeroUsize;
//! use binview_image::raw::RawBuffer;
//! use binview_image::view::ViewState;
//!
//! let mut state = ViewState::new();
//! state.load(RawBuffer::new((0..12).collect(), "counting.bin"));
//! state.set_width(NonZeroUsize::new(3).unwrap());
//!
//! let render = state.render();
//! let image = render.image.unwrap();
//! assert_eq!(image.height(), 4);
//! assert_eq!(image.pixels(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
//! ```
//!
//! [`SampleSequence`]: samples::SampleSequence
//! [`Frame`]: frame::Frame
//! [`ViewState`]: view::ViewState

pub use binview_core;

pub mod errors;
pub mod frame;
pub mod normalize;
pub mod raw;
pub mod samples;
mod serde;
pub mod status;
pub mod view;
