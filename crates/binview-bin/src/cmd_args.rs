/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub mod arg_parsers;
pub mod help_strings;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::{IColorMode, INumericKind};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("binview")
        .about("View arbitrary binary data as an image")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Binary file to read data from"))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Image to write the rendered view to")
            .long_help(help_strings::OUTPUT_HELP))
        .arg(Arg::new("kind")
            .long("kind")
            .short('k')
            .help_heading("VIEW")
            .help("Numeric type to reinterpret the bytes as")
            .default_value("uint8")
            .value_parser(value_parser!(INumericKind)))
        .arg(Arg::new("align")
            .long("align")
            .short('a')
            .help_heading("VIEW")
            .help("Leading bytes to skip before decoding")
            .long_help(help_strings::ALIGN_HELP)
            .default_value("0")
            .value_parser(value_parser!(u8).range(0..=7)))
        .arg(Arg::new("width")
            .long("width")
            .short('w')
            .help_heading("VIEW")
            .help("Pixels per row")
            .default_value("1280")
            .value_parser(value_parser!(u64).range(1..)))
        .arg(Arg::new("offset")
            .long("offset")
            .help_heading("VIEW")
            .help("Index of the first sample to display, clamped to the last sample")
            .default_value("0")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("mode")
            .long("mode")
            .short('m')
            .help_heading("VIEW")
            .help("How samples are grouped into pixels")
            .default_value("grayscale")
            .value_parser(value_parser!(IColorMode)))
        .arg(Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print the status as JSON instead of a status line"))
        .arg(Arg::new("view")
            .long("view")
            .action(ArgAction::SetTrue)
            .help("Open the rendered view in the default image viewer"))
        .arg(Arg::new("interactive")
            .long("interactive")
            .action(ArgAction::SetTrue)
            .help("Read view commands from standard input")
            .long_help(help_strings::INTERACTIVE_HELP))
        .arg(Arg::new("all-yes")
            .long("yes")
            .short('y')
            .action(ArgAction::SetTrue)
            .help("Overwrite existing output files without asking"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the loaded data"))
}

#[cfg(test)]
mod tests {
    use super::create_cmd_args;

    #[test]
    fn verify_cmd() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn rejects_bad_alignment_and_width() {
        assert!(create_cmd_args()
            .try_get_matches_from(["binview", "-i", "a.bin", "--align", "8"])
            .is_err());
        assert!(create_cmd_args()
            .try_get_matches_from(["binview", "-i", "a.bin", "--width", "0"])
            .is_err());
    }
}
