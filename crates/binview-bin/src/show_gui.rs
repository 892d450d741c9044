/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::env::temp_dir;
use std::path::PathBuf;
use std::time::UNIX_EPOCH;

use binview_image::normalize::IntensityImage;
use log::trace;

use crate::errors::CmdErrors;
use crate::file_io::write_image;

/// Write `image` to a temporary PNG and hand it to the platform viewer
pub fn open_in_default_app(image: &IntensityImage) -> Result<PathBuf, CmdErrors> {
    let time = std::time::SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|x| x.as_millis())
        .unwrap_or(0);

    let mut path = temp_dir();
    path.push(format!("binview-{time}.png"));

    let size = write_image(image, &path)?;
    trace!("Wrote {:?} bytes", size);

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(&path).spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(&path)
            .spawn()?;
    }
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(&path).spawn()?;
    }
    Ok(path)
}
