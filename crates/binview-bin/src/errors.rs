/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;

use binview_image::errors::LoadErrors;

/// Errors that stop a command line workflow
pub enum CmdErrors {
    Load(LoadErrors),
    Io(io::Error),
    /// The image encoder rejected the output
    Encode(String),
    /// An output was requested but there was no image to write
    NoImage(&'static str),
    GenericString(String)
}

impl Debug for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(err) => writeln!(f, "Could not load input: {err:?}"),
            Self::Io(err) => writeln!(f, "I/O error: {err}"),
            Self::Encode(err) => writeln!(f, "Could not encode image: {err}"),
            Self::NoImage(reason) => writeln!(f, "No image to write: {reason}"),
            Self::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(err) => write!(f, "Error: {err}"),
            Self::Io(err) => write!(f, "Error: {err}"),
            Self::Encode(err) => write!(f, "Error: could not encode image, {err}"),
            Self::NoImage(reason) => write!(f, "Error: no image to write, {reason}"),
            Self::GenericString(err) => write!(f, "Error: {err}")
        }
    }
}

impl std::error::Error for CmdErrors {}

impl From<LoadErrors> for CmdErrors {
    fn from(value: LoadErrors) -> Self {
        CmdErrors::Load(value)
    }
}

impl From<io::Error> for CmdErrors {
    fn from(value: io::Error) -> Self {
        CmdErrors::Io(value)
    }
}

impl From<String> for CmdErrors {
    fn from(value: String) -> Self {
        CmdErrors::GenericString(value)
    }
}
