/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A line oriented shell driving a [`ViewState`]
//!
//! Every line is one command, after each command the status line is
//! written out. Bad commands and failed loads are reported and the
//! shell keeps going.
use std::io::{BufRead, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use binview_core::alignment::ByteAlignment;
use binview_core::color_mode::ColorMode;
use binview_core::numeric_kind::NumericKind;
use binview_image::view::ViewState;
use log::{debug, error};

use crate::errors::CmdErrors;
use crate::file_io::write_image;
use crate::repeat::RepeatTimer;

pub static SHELL_HELP: &str = "Commands:
  open PATH                 load a file
  kind NAME                 uint8..uint64, int8..int64, float32, float64
  align N                   skip N (0-7) leading bytes
  mode gray|rgb             group samples into pixels
  width N | +D | -D         set or step the pixels per row, usually by 1 or 10
  offset N | +D | -D        set or step the first sample shown, usually by 1 or 100
  hold width|offset D MS    hold a step button of D for MS milliseconds
  write PATH                write the current view as .png/.ppm/.pgm
  status                    print the status line
  help                      print this help
  quit                      leave the shell";

/// Set a value or move it relative to where it is
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Step {
    To(usize),
    By(isize)
}

/// What a hold command steps
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HoldTarget {
    Width,
    Offset
}

#[derive(Clone, Debug, PartialEq)]
pub enum ShellCommand {
    Open(PathBuf),
    Kind(NumericKind),
    Align(ByteAlignment),
    Mode(ColorMode),
    Width(Step),
    Offset(Step),
    Hold {
        target: HoldTarget,
        delta:  isize,
        held:   Duration
    },
    Write(PathBuf),
    Status,
    Help,
    Quit
}

fn parse_step(value: &str) -> Result<Step, String> {
    let step = if value.starts_with('+') || value.starts_with('-') {
        value.parse::<isize>().map(Step::By)
    } else {
        value.parse::<usize>().map(Step::To)
    };
    step.map_err(|e| format!("Invalid step `{value}`: {e}"))
}

fn required<'a>(name: &str, rest: &'a str, what: &str) -> Result<&'a str, String> {
    if rest.is_empty() {
        return Err(format!("`{name}` expects {what}"));
    }
    Ok(rest)
}

/// Parse one line of input, blank lines and `#` comments give `None`
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, "")
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "open" | "o" => ShellCommand::Open(PathBuf::from(required(name, rest, "a path")?)),
        "kind" | "k" => {
            let kind = required(name, rest, "a numeric kind")?
                .parse::<NumericKind>()
                .map_err(|e| e.to_string())?;
            ShellCommand::Kind(kind)
        }
        "align" | "a" => {
            let value = required(name, rest, "a number between 0 and 7")?;
            let align = value
                .parse::<u8>()
                .ok()
                .and_then(ByteAlignment::new)
                .ok_or_else(|| format!("Invalid alignment `{value}`, expected 0-7"))?;
            ShellCommand::Align(align)
        }
        "mode" | "m" => {
            let mode = required(name, rest, "gray or rgb")?
                .parse::<ColorMode>()
                .map_err(|e| e.to_string())?;
            ShellCommand::Mode(mode)
        }
        "width" | "w" => ShellCommand::Width(parse_step(required(name, rest, "a width")?)?),
        "offset" | "off" => ShellCommand::Offset(parse_step(required(name, rest, "an offset")?)?),
        "hold" => {
            let args: Vec<&str> = required(name, rest, "a target, step and duration")?
                .split_whitespace()
                .collect();

            if args.len() != 3 {
                return Err(format!(
                    "hold expected 3 arguments `width|offset DELTA MILLIS`, got {}",
                    args.len()
                ));
            }
            let target = match args[0] {
                "width" | "w" => HoldTarget::Width,
                "offset" | "off" => HoldTarget::Offset,
                other => return Err(format!("Cannot hold `{other}`, expected width or offset"))
            };
            let delta = args[1]
                .parse::<isize>()
                .map_err(|e| format!("Invalid delta `{}`: {e}", args[1]))?;
            let millis = args[2]
                .parse::<u64>()
                .map_err(|e| format!("Invalid duration `{}`: {e}", args[2]))?;

            ShellCommand::Hold {
                target,
                delta,
                held: Duration::from_millis(millis)
            }
        }
        "write" | "save" => ShellCommand::Write(PathBuf::from(required(name, rest, "a path")?)),
        "status" | "s" => ShellCommand::Status,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("Unknown command `{other}`, type `help` for a list"))
    };
    Ok(Some(command))
}

/// Whether the shell should keep reading
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit
}

pub struct Shell {
    state:          ViewState,
    override_files: bool
}

impl Shell {
    pub fn new(state: ViewState, override_files: bool) -> Shell {
        Shell {
            state,
            override_files
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    fn apply_step(&mut self, target: HoldTarget, step: Step) {
        match (target, step) {
            (HoldTarget::Width, Step::To(width)) => {
                self.state
                    .set_width(NonZeroUsize::new(width).unwrap_or(NonZeroUsize::MIN));
            }
            (HoldTarget::Width, Step::By(delta)) => self.state.adjust_width(delta),
            (HoldTarget::Offset, Step::To(offset)) => self.state.set_offset(offset),
            (HoldTarget::Offset, Step::By(delta)) => self.state.adjust_offset(delta)
        }
    }

    fn write_view(&self, path: &Path) -> Result<String, CmdErrors> {
        if path.exists() && !self.override_files {
            return Err(CmdErrors::GenericString(format!(
                "{path:?} already exists, start the shell with --yes to overwrite"
            )));
        }
        let render = self.state.render();
        let image = render
            .image
            .ok_or(CmdErrors::NoImage("the current view has no frame"))?;
        let size = write_image(&image, path)?;

        Ok(format!("Wrote {size} bytes to {}", path.display()))
    }

    /// Run `command` and return the text to show for it
    pub fn execute(&mut self, command: ShellCommand) -> Result<(Flow, String), CmdErrors> {
        debug!("Executing {:?}", command);

        let message = match command {
            ShellCommand::Open(path) => {
                self.state.load_file(&path)?;
                format!("{}\n{}", self.state.status().sequence_summary(), self.state.status())
            }
            ShellCommand::Kind(kind) => {
                self.state.set_kind(kind);
                format!("{}\n{}", self.state.status().sequence_summary(), self.state.status())
            }
            ShellCommand::Align(alignment) => {
                self.state.set_alignment(alignment);
                format!("{}\n{}", self.state.status().sequence_summary(), self.state.status())
            }
            ShellCommand::Mode(mode) => {
                self.state.set_mode(mode);
                self.state.status().to_string()
            }
            ShellCommand::Width(step) => {
                self.apply_step(HoldTarget::Width, step);
                self.state.status().to_string()
            }
            ShellCommand::Offset(step) => {
                self.apply_step(HoldTarget::Offset, step);
                self.state.status().to_string()
            }
            ShellCommand::Hold {
                target,
                delta,
                held
            } => {
                let fires = RepeatTimer::fires_while_held(held);
                debug!("Holding for {:?} fires {} times", held, fires);

                // steps clamp at the same bound, so they can be applied at once
                let fires = isize::try_from(fires).unwrap_or(isize::MAX);
                self.apply_step(target, Step::By(delta.saturating_mul(fires)));
                self.state.status().to_string()
            }
            ShellCommand::Write(path) => self.write_view(&path)?,
            ShellCommand::Status => self.state.status().to_string(),
            ShellCommand::Help => SHELL_HELP.to_string(),
            ShellCommand::Quit => return Ok((Flow::Quit, String::new()))
        };
        Ok((Flow::Continue, message))
    }

    /// Read commands from `input` until it ends or `quit`, writing
    /// results to `output`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), CmdErrors> {
        writeln!(output, "{}", self.state.status())?;

        for line in input.lines() {
            let line = line?;

            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(reason) => {
                    writeln!(output, "Error: {reason}")?;
                    continue;
                }
            };
            match self.execute(command) {
                Ok((Flow::Quit, _)) => break,
                Ok((Flow::Continue, message)) => writeln!(output, "{message}")?,
                Err(err) => {
                    error!("{:?}", err);
                    writeln!(output, "{err}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;
    use std::time::Duration;

    use binview_core::color_mode::ColorMode;
    use binview_core::numeric_kind::NumericKind;
    use binview_image::raw::RawBuffer;
    use binview_image::view::ViewState;

    use crate::shell::{parse_command, HoldTarget, Shell, ShellCommand, Step};

    fn shell() -> Shell {
        let mut state = ViewState::new();
        state.load(RawBuffer::new((0..=255).collect(), "ramp.bin"));
        Shell::new(state, false)
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("  "), Ok(None));
        assert_eq!(parse_command("# comment"), Ok(None));
        assert_eq!(
            parse_command("kind int16"),
            Ok(Some(ShellCommand::Kind(NumericKind::Int16)))
        );
        assert_eq!(
            parse_command("mode rgb"),
            Ok(Some(ShellCommand::Mode(ColorMode::RGB)))
        );
        assert_eq!(
            parse_command("width +10"),
            Ok(Some(ShellCommand::Width(Step::By(10))))
        );
        assert_eq!(
            parse_command("offset 42"),
            Ok(Some(ShellCommand::Offset(Step::To(42))))
        );
        assert_eq!(
            parse_command("hold offset -100 350"),
            Ok(Some(ShellCommand::Hold {
                target: HoldTarget::Offset,
                delta:  -100,
                held:   Duration::from_millis(350)
            }))
        );
    }

    #[test]
    fn rejects_bad_commands() {
        assert!(parse_command("align 8").is_err());
        assert!(parse_command("kind float16").is_err());
        assert!(parse_command("width").is_err());
        assert!(parse_command("hold width 1").is_err());
        assert!(parse_command("frobnicate").is_err());
    }

    #[test]
    fn steps_clamp() {
        let mut shell = shell();

        shell.execute(ShellCommand::Width(Step::To(0))).unwrap();
        assert_eq!(shell.state().width(), NonZeroUsize::MIN);

        shell.execute(ShellCommand::Offset(Step::By(-5))).unwrap();
        assert_eq!(shell.state().offset(), 0);

        shell.execute(ShellCommand::Offset(Step::To(1000))).unwrap();
        assert_eq!(shell.state().offset(), 255);
    }

    #[test]
    fn hold_repeats_the_step() {
        let mut shell = shell();
        shell.execute(ShellCommand::Width(Step::To(16))).unwrap();

        // one fire on press, then 300ms and 350ms
        shell
            .execute(ShellCommand::Hold {
                target: HoldTarget::Width,
                delta:  10,
                held:   Duration::from_millis(360)
            })
            .unwrap();
        assert_eq!(shell.state().width().get(), 46);
    }

    #[test]
    fn run_reports_and_continues() {
        let mut shell = shell();
        let input = b"width 16\nbogus\nopen /this/path/should/not/exist.bin\nkind uint16\nquit\nwidth 1\n";
        let mut output = Vec::new();

        shell.run(&input[..], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("16x16 | Grayscale | Offset: 0 | uint8 (1B)"));
        assert!(text.contains("Error: Unknown command `bogus`"));
        assert!(text.contains("Loaded 128 elements of uint16 (2 bytes) | Byte align: 0"));
        // the failed open kept the ramp and quit stopped before `width 1`
        assert_eq!(shell.state().name(), Some("ramp.bin"));
        assert_eq!(shell.state().width().get(), 16);
    }

    #[test]
    fn write_without_frame_fails() {
        let mut shell = shell();
        let mut path = std::env::temp_dir();
        path.push(format!("binview-shell-{}.png", std::process::id()));

        // 256 samples can't fill a 1280 wide row
        assert!(shell.execute(ShellCommand::Write(path.clone())).is_err());
        assert!(!path.exists());
    }
}
