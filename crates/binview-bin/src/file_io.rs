/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Writing rendered views to disk
use std::ffi::OsStr;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use binview_core::color_mode::ColorMode;
use binview_image::normalize::IntensityImage;
use log::{debug, trace};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;
use zune_png::PngEncoder;
use zune_ppm::PPMEncoder;

use crate::errors::CmdErrors;

/// Output formats a view can be written as
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Png,
    /// Binary netpbm, P5 for grayscale and P6 for rgb
    Ppm
}

impl OutputFormat {
    /// Pick a format from the extension of `path`
    pub fn from_path(path: &Path) -> Option<OutputFormat> {
        let ext = path.extension().and_then(OsStr::to_str)?;

        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(OutputFormat::Png),
            "ppm" | "pgm" | "pnm" => Some(OutputFormat::Ppm),
            _ => None
        }
    }
}

pub const fn mode_to_colorspace(mode: ColorMode) -> ColorSpace {
    match mode {
        ColorMode::Grayscale => ColorSpace::Luma,
        ColorMode::RGB => ColorSpace::RGB
    }
}

/// Encode `image` in `format`, returning the encoded bytes
pub fn encode_image(image: &IntensityImage, format: OutputFormat) -> Result<Vec<u8>, CmdErrors> {
    let options = EncoderOptions::new(
        image.width(),
        image.height(),
        mode_to_colorspace(image.mode()),
        BitDepth::Eight
    );
    trace!(
        "Encoding {}x{} {} image as {:?}",
        image.width(),
        image.height(),
        image.mode(),
        format
    );

    match format {
        OutputFormat::Png => Ok(PngEncoder::new(image.pixels(), options).encode()),
        OutputFormat::Ppm => PPMEncoder::new(image.pixels(), options)
            .encode()
            .map_err(|e| CmdErrors::Encode(format!("{e:?}")))
    }
}

/// Encode `image` and write it to `path`, the format is picked from
/// the extension
pub fn write_image(image: &IntensityImage, path: &Path) -> Result<usize, CmdErrors> {
    let format = OutputFormat::from_path(path).ok_or_else(|| {
        CmdErrors::GenericString(format!(
            "Cannot tell the output format of {path:?}, use a .png, .ppm or .pgm extension"
        ))
    })?;

    let encoded = encode_image(image, format)?;

    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    let mut buf_writer = BufWriter::new(file);
    buf_writer.write_all(&encoded)?;
    buf_writer.flush()?;

    debug!("Wrote {} bytes to {:?}", encoded.len(), path);

    Ok(encoded.len())
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;
    use std::path::Path;

    use binview_core::color_mode::ColorMode;
    use binview_image::raw::RawBuffer;
    use binview_image::view::ViewState;

    use crate::file_io::{encode_image, OutputFormat};

    fn image(mode: ColorMode) -> binview_image::normalize::IntensityImage {
        let mut state = ViewState::new();
        state.load(RawBuffer::new((0..24).collect(), "t"));
        state.set_width(NonZeroUsize::new(4).unwrap());
        state.set_mode(mode);
        state.render().image.unwrap()
    }

    #[test]
    fn formats_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a.PNG")), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_path(Path::new("a.pgm")), Some(OutputFormat::Ppm));
        assert_eq!(OutputFormat::from_path(Path::new("a.jpg")), None);
        assert_eq!(OutputFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn png_signature() {
        let bytes = encode_image(&image(ColorMode::Grayscale), OutputFormat::Png).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn ppm_headers() {
        let gray = encode_image(&image(ColorMode::Grayscale), OutputFormat::Ppm).unwrap();
        assert_eq!(&gray[..2], b"P5");
        // 4x6 grayscale, pixels at the end
        assert!(gray.ends_with(&(0..24).collect::<Vec<u8>>()));

        let rgb = encode_image(&image(ColorMode::RGB), OutputFormat::Ppm).unwrap();
        assert_eq!(&rgb[..2], b"P6");
    }
}
