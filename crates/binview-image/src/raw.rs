/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The raw bytes being looked at
use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::Deref;
use std::path::Path;

use binview_core::log::info;

use crate::errors::LoadErrors;

/// An immutable byte buffer plus the name it is displayed under
///
/// Created once per load and never mutated afterwards
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawBuffer {
    bytes: Vec<u8>,
    name:  String
}

impl RawBuffer {
    /// Wrap bytes that came from somewhere other than a file.
    ///
    /// Empty buffers are fine, they decode to no samples
    pub fn new(bytes: Vec<u8>, name: impl Into<String>) -> RawBuffer {
        RawBuffer {
            bytes,
            name: name.into()
        }
    }

    /// Read a whole file, the display name is the file name without
    /// its directories
    pub fn read<P: AsRef<Path>>(path: P) -> Result<RawBuffer, LoadErrors> {
        let path = path.as_ref();

        if path.is_dir() {
            return Err(LoadErrors::NotAFile(path.to_path_buf()));
        }
        let file = File::open(path)?;
        let size_hint = file.metadata().map(|x| x.len() as usize).unwrap_or(0);

        let mut bytes = Vec::with_capacity(size_hint);
        BufReader::new(file).read_to_end(&mut bytes)?;

        let name = path
            .file_name()
            .map(|x| x.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        info!("Read {} bytes from {:?}", bytes.len(), path);

        Ok(RawBuffer { bytes, name })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Deref for RawBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}
