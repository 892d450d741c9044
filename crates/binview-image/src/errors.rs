/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible while loading a raw buffer
//!
//! Loading is the only fallible part of the crate, decoding, framing and
//! normalizing always produce a value.
use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::PathBuf;

pub enum LoadErrors {
    /// The path exists but isn't a regular file
    NotAFile(PathBuf),
    IoErrors(io::Error)
}

impl Debug for LoadErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAFile(path) => {
                writeln!(f, "Path {path:?} is not a file")
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error: {err}")
            }
        }
    }
}

impl Display for LoadErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAFile(path) => write!(f, "{} is not a file", path.display()),
            Self::IoErrors(err) => write!(f, "{err}")
        }
    }
}

impl std::error::Error for LoadErrors {}

impl From<io::Error> for LoadErrors {
    fn from(value: io::Error) -> Self {
        LoadErrors::IoErrors(value)
    }
}
