/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use binview_image::status::Status;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// The status of one run, printed with `--json`
pub struct StatusReport<'a> {
    file:   Option<&'a Path>,
    status: &'a Status,
    output: Option<&'a Path>
}

impl<'a> StatusReport<'a> {
    pub fn new(file: Option<&'a Path>, status: &'a Status, output: Option<&'a Path>) -> StatusReport<'a> {
        StatusReport {
            file,
            status,
            output
        }
    }
}

impl<'a> Serialize for StatusReport<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("StatusReport", 3)?;

        state.serialize_field("file", &self.file.map(|x| x.to_string_lossy()))?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("output", &self.output.map(|x| x.to_string_lossy()))?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;
    use std::path::Path;

    use binview_image::raw::RawBuffer;
    use binview_image::view::ViewState;

    use crate::serde::StatusReport;

    #[test]
    fn report_fields() {
        let mut state = ViewState::new();
        state.load(RawBuffer::new((0..12).collect(), "counting.bin"));
        state.set_width(NonZeroUsize::new(3).unwrap());

        let status = state.status();
        let report = StatusReport::new(Some(Path::new("counting.bin")), &status, None);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["file"], "counting.bin");
        assert!(value["output"].is_null());
        assert_eq!(value["status"]["elements"], 12);
        assert_eq!(value["status"]["kind"], "uint8");
    }
}
