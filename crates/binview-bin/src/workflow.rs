/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{stdin, stdout, BufRead};
use std::path::Path;

use binview_image::view::ViewState;
use clap::ArgMatches;
use log::{debug, info, warn};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CmdErrors;
use crate::file_io::write_image;
use crate::serde::StatusReport;
use crate::shell::Shell;
use crate::show_gui::open_in_default_app;

/// Apply the view parameters in `cmd_opts` to `state`
///
/// The offset is applied last so it is clamped against the sequence the
/// other parameters produce.
pub(crate) fn apply_options(state: &mut ViewState, cmd_opts: &CmdOptions) {
    state.set_kind(cmd_opts.kind);
    state.set_alignment(cmd_opts.alignment);
    state.set_width(cmd_opts.width);
    state.set_mode(cmd_opts.mode);
    state.set_offset(cmd_opts.offset);
}

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), CmdErrors> {
    info!("Creating workflows from input");

    let in_file = args.get_one::<String>("in").map(Path::new);
    let out_file = args.get_one::<String>("out").map(Path::new);

    let mut state = ViewState::new();

    match in_file {
        Some(in_file) => {
            if let Some(out_file) = out_file {
                verify_file_paths(in_file, out_file, cmd_opts)?;
            }
            state.load_file(in_file)?;
        }
        None if cmd_opts.interactive => {
            debug!("No input, starting with an empty view");
        }
        None => {
            return Err(CmdErrors::GenericString(
                "No input file, pass one with --input or use --interactive".to_string()
            ));
        }
    }
    apply_options(&mut state, cmd_opts);

    let render = state.render();

    if cmd_opts.json {
        let report = StatusReport::new(in_file, &render.status, out_file);
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| CmdErrors::GenericString(e.to_string()))?;
        println!("{json}");
    } else {
        println!("{}", render.status);
    }

    if let Some(out_file) = out_file {
        let image = render
            .image
            .as_ref()
            .ok_or(CmdErrors::NoImage("the view has no full row, lower --width or --offset"))?;
        let size = write_image(image, out_file)?;
        info!("Wrote {} bytes to {:?}", size, out_file);
    }

    if cmd_opts.view {
        match render.image.as_ref() {
            Some(image) => {
                let path = open_in_default_app(image)?;
                debug!("Opened {:?}", path);
            }
            None => warn!("Nothing to view, {}", render.status)
        }
    }

    if cmd_opts.interactive {
        let mut shell = Shell::new(state, cmd_opts.override_files);
        shell.run(stdin().lock(), stdout().lock())?;
    }

    Ok(())
}

fn verify_file_paths(in_path: &Path, out_path: &Path, cmd_opts: &CmdOptions) -> Result<(), CmdErrors> {
    if in_path == out_path {
        return Err(CmdErrors::GenericString(format!(
            "Cannot use {in_path:?} as both input and output"
        )));
    }

    if out_path.exists() {
        if cmd_opts.override_files {
            info!("Overwriting path {:?} ", out_path);
        } else {
            println!("File {out_path:?} exists, overwrite [y/N]");
            let mut result = String::new();

            stdin().lock().read_line(&mut result)?;

            if result.trim() != "y" {
                return Err(CmdErrors::GenericString(format!(
                    "Not overwriting file {out_path:?}"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;
    use std::path::Path;

    use binview_core::alignment::ByteAlignment;
    use binview_core::numeric_kind::NumericKind;
    use binview_image::raw::RawBuffer;
    use binview_image::view::ViewState;

    use crate::cmd_parsers::global_options::CmdOptions;
    use crate::workflow::{apply_options, verify_file_paths};

    #[test]
    fn offset_is_clamped_after_kind() {
        let mut state = ViewState::new();
        state.load(RawBuffer::new(vec![0; 16], "zeros"));

        let mut options = CmdOptions::new();
        options.kind = NumericKind::Uint32;
        options.alignment = ByteAlignment::new(2).unwrap();
        options.width = NonZeroUsize::new(2).unwrap();
        options.offset = 100;

        apply_options(&mut state, &options);

        // 14 bytes left, 3 uint32 samples
        assert_eq!(state.element_count(), 3);
        assert_eq!(state.offset(), 2);
    }

    #[test]
    fn same_input_and_output_is_rejected() {
        let options = CmdOptions::new();
        let path = Path::new("dump.bin");

        assert!(verify_file_paths(path, path, &options).is_err());
        assert!(verify_file_paths(path, Path::new("/this/path/should/not/exist.png"), &options).is_ok());
    }
}
