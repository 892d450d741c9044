/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::num::NonZeroUsize;

use binview_core::alignment::ByteAlignment;
use binview_core::color_mode::ColorMode;
use binview_core::numeric_kind::NumericKind;
use binview_image::view::DEFAULT_WIDTH;
use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};

use crate::cmd_args::arg_parsers::{IColorMode, INumericKind};

/// View parameters and switches gathered from the command line
#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub kind:           NumericKind,
    pub alignment:      ByteAlignment,
    pub width:          NonZeroUsize,
    pub offset:         usize,
    pub mode:           ColorMode,
    pub override_files: bool,
    pub json:           bool,
    pub view:           bool,
    pub interactive:    bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            kind:           NumericKind::Uint8,
            alignment:      ByteAlignment::default(),
            width:          DEFAULT_WIDTH,
            offset:         0,
            mode:           ColorMode::Grayscale,
            override_files: false,
            json:           false,
            view:           false,
            interactive:    false
        }
    }
}

impl Default for CmdOptions {
    fn default() -> Self {
        CmdOptions::new()
    }
}

fn flag(options: &ArgMatches, id: &str) -> bool {
    options.get_one::<bool>(id).copied().unwrap_or(false)
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(kind) = options.get_one::<INumericKind>("kind") {
        cmd_options.kind = kind.to_kind();
    }
    if let Some(align) = options.get_one::<u8>("align") {
        cmd_options.alignment = ByteAlignment::clamped(i64::from(*align));
    }
    if let Some(width) = options.get_one::<u64>("width") {
        let width = usize::try_from(*width).unwrap_or(usize::MAX);
        cmd_options.width = NonZeroUsize::new(width).unwrap_or(NonZeroUsize::MIN);
    }
    if let Some(offset) = options.get_one::<usize>("offset") {
        cmd_options.offset = *offset;
    }
    if let Some(mode) = options.get_one::<IColorMode>("mode") {
        cmd_options.mode = mode.to_mode();
    }

    if options.value_source("all-yes") == Some(ValueSource::CommandLine) {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options.json = flag(options, "json");
    cmd_options.view = flag(options, "view");
    cmd_options.interactive = flag(options, "interactive");

    info!(
        "View options: {} align {} width {} offset {} {}",
        cmd_options.kind,
        cmd_options.alignment,
        cmd_options.width,
        cmd_options.offset,
        cmd_options.mode
    );
    cmd_options
}

/// Pick the log level from the logging flags, warnings by default
pub fn log_level(options: &ArgMatches) -> Level {
    if flag(options, "debug") {
        Level::Debug
    } else if flag(options, "trace") {
        Level::Trace
    } else if flag(options, "warn") {
        Level::Warn
    } else if flag(options, "info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if simple_logger::init_with_level(log_level).is_err() {
        // a logger is already installed, keep it
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use binview_core::color_mode::ColorMode;
    use binview_core::numeric_kind::NumericKind;
    use log::Level;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::{log_level, parse_options};

    #[test]
    fn defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["binview", "-i", "a.bin"])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(options.kind, NumericKind::Uint8);
        assert_eq!(options.alignment.get(), 0);
        assert_eq!(options.width.get(), 1280);
        assert_eq!(options.offset, 0);
        assert_eq!(options.mode, ColorMode::Grayscale);
        assert!(!options.override_files);
        assert_eq!(log_level(&matches), Level::Warn);
    }

    #[test]
    fn view_options() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "binview", "-i", "a.bin", "--kind", "float32", "--align", "3", "-w", "64",
                "--offset", "100", "--mode", "rgb", "--json", "-y", "--debug"
            ])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(options.kind, NumericKind::Float32);
        assert_eq!(options.alignment.get(), 3);
        assert_eq!(options.width.get(), 64);
        assert_eq!(options.offset, 100);
        assert_eq!(options.mode, ColorMode::RGB);
        assert!(options.json);
        assert!(options.override_files);
        assert_eq!(log_level(&matches), Level::Debug);
    }
}
