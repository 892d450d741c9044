/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use binview_core::alignment::ByteAlignment;
use binview_core::color_mode::ColorMode;
use binview_core::numeric_kind::NumericKind;
use binview_image::raw::RawBuffer;
use binview_image::view::ViewState;
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;

mod properties;
mod scenarios;

/// One view of a buffer and what it should render to
#[derive(Clone, Deserialize, Debug)]
pub struct ScenarioEntry {
    pub name:       String,
    pub bytes:      Vec<u8>,
    pub kind:       String,
    pub align:      u8,
    pub width:      usize,
    pub offset:     usize,
    pub mode:       String,
    pub elements:   usize,
    /// `None` when the view can't form a single row
    pub dimensions: Option<[usize; 2]>,
    pub pixels:     Option<Vec<u8>>,
    pub comment:    Option<String>
}

impl ScenarioEntry {
    /// Build a view state with the entry's buffer and parameters applied
    pub fn view(&self) -> ViewState {
        let mut state = ViewState::new();

        state.load(RawBuffer::new(self.bytes.clone(), self.name.as_str()));
        state.set_kind(self.kind.parse::<NumericKind>().unwrap());
        state.set_alignment(ByteAlignment::new(self.align).unwrap());
        state.set_width(NonZeroUsize::new(self.width).unwrap());
        state.set_mode(self.mode.parse::<ColorMode>().unwrap());
        state.set_offset(self.offset);

        state
    }
}

pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}
