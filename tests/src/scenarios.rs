/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use binview_image::status::ViewStatus;

use crate::{fixture_path, ScenarioEntry};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_scenarios() {
    let file = fixture_path().join("scenarios.json");

    let json_file = read(file).unwrap();

    let entries: Vec<ScenarioEntry> = serde_json::from_slice(&json_file).unwrap();

    let mut error = false;
    let mut failed = Vec::new();

    for entry in &entries {
        let state = entry.view();
        let render = state.render();

        let matches = state.element_count() == entry.elements
            && match (&entry.dimensions, &render.image) {
                (Some([w, h]), Some(image)) => {
                    image.dimensions() == (*w, *h)
                        && entry
                            .pixels
                            .as_ref()
                            .map_or(true, |pixels| image.pixels() == pixels.as_slice())
                }
                (None, None) => render.status.view == ViewStatus::NotEnoughData,
                _ => false
            };

        if !matches {
            error = true;
            failed.push((entry.name.clone(), render.status.to_string()));
        }
    }
    if error {
        panic!("The following scenarios failed {:#?}", failed);
    }
}

#[test]
fn scenario_status_lines() {
    let file = fixture_path().join("scenarios.json");
    let entries: Vec<ScenarioEntry> = serde_json::from_slice(&read(file).unwrap()).unwrap();

    let counting = entries.iter().find(|x| x.name == "counting").unwrap();
    assert_eq!(
        counting.view().status().to_string(),
        "3x4 | Grayscale | Offset: 0 | uint8 (1B) | Align: 0 | 12 elements | counting"
    );

    let short = entries
        .iter()
        .find(|x| x.name == "counting as uint16, one byte skipped")
        .unwrap();
    let mut state = short.view();
    state.set_offset(1);
    assert_eq!(
        state.status().to_string(),
        "Not enough data | Loaded 5 elements of uint16 (2 bytes) | Byte align: 1"
    );
}
