/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Human readable status of a view
use std::fmt::{Display, Formatter};

use binview_core::alignment::ByteAlignment;
use binview_core::color_mode::ColorMode;
use binview_core::numeric_kind::NumericKind;

/// What the current parameters produced
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ViewStatus {
    /// Nothing has been loaded yet
    Empty,
    /// A frame was produced
    Frame {
        width:  usize,
        height: usize,
        mode:   ColorMode,
        offset: usize
    },
    /// The window is too small for a single row
    NotEnoughData
}

/// A snapshot of the sample sequence and what was rendered from it
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Status {
    /// Display name of the loaded buffer
    pub name:      Option<String>,
    /// Number of decoded samples
    pub elements:  usize,
    pub kind:      NumericKind,
    pub alignment: ByteAlignment,
    pub view:      ViewStatus
}

impl Status {
    pub const fn byte_width(&self) -> usize {
        self.kind.byte_width()
    }

    /// Summary of the decoded sequence alone, shown after a reload
    ///
    /// e.g. `Loaded 6 elements of uint16 (2 bytes) | Byte align: 0`
    pub fn sequence_summary(&self) -> String {
        format!(
            "Loaded {} elements of {} ({} bytes) | Byte align: {}",
            self.elements,
            self.kind,
            self.byte_width(),
            self.alignment
        )
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.view {
            ViewStatus::Empty => write!(f, "Load a file to begin"),
            ViewStatus::Frame {
                width,
                height,
                mode,
                offset
            } => {
                write!(
                    f,
                    "{width}x{height} | {mode} | Offset: {offset} | {} ({}B) | Align: {} | {} elements | {}",
                    self.kind,
                    self.byte_width(),
                    self.alignment,
                    self.elements,
                    self.name.as_deref().unwrap_or("")
                )
            }
            ViewStatus::NotEnoughData => {
                write!(f, "Not enough data | {}", self.sequence_summary())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use binview_core::alignment::ByteAlignment;
    use binview_core::color_mode::ColorMode;
    use binview_core::numeric_kind::NumericKind;

    use crate::status::{Status, ViewStatus};

    fn status(view: ViewStatus) -> Status {
        Status {
            name: Some("dump.bin".to_string()),
            elements: 6,
            kind: NumericKind::Uint16,
            alignment: ByteAlignment::new(1).unwrap(),
            view
        }
    }

    #[test]
    fn frame_line() {
        let s = status(ViewStatus::Frame {
            width:  3,
            height: 2,
            mode:   ColorMode::Grayscale,
            offset: 0
        });
        assert_eq!(
            s.to_string(),
            "3x2 | Grayscale | Offset: 0 | uint16 (2B) | Align: 1 | 6 elements | dump.bin"
        );
    }

    #[test]
    fn not_enough_data_line() {
        let s = status(ViewStatus::NotEnoughData);
        assert_eq!(
            s.to_string(),
            "Not enough data | Loaded 6 elements of uint16 (2 bytes) | Byte align: 1"
        );
    }
}
