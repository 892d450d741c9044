/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Properties every buffer has to satisfy, checked on random data
use std::num::NonZeroUsize;

use binview_core::alignment::ByteAlignment;
use binview_core::color_mode::ColorMode;
use binview_core::numeric_kind::ALL_KINDS;
use binview_image::frame::extract;
use binview_image::normalize::normalize;
use binview_image::samples::decode;
use nanorand::{Rng, WyRand};

use crate::hash;

const MODES: [ColorMode; 2] = [ColorMode::Grayscale, ColorMode::RGB];

fn random_buffer(rng: &mut WyRand, max_len: usize) -> Vec<u8> {
    let len = rng.generate_range(0..max_len);
    let mut raw = vec![0_u8; len];
    rng.fill(&mut raw);
    raw
}

#[test]
fn decoded_length() {
    let mut rng = WyRand::new_seed(0xb1_7e5);

    for _ in 0..200 {
        let raw = random_buffer(&mut rng, 128);

        for kind in ALL_KINDS {
            for align in 0..=ByteAlignment::MAX {
                let samples = decode(&raw, kind, ByteAlignment::new(align).unwrap());
                let align = usize::from(align);

                let expected = if align < raw.len() {
                    (raw.len() - align) / kind.byte_width()
                } else {
                    0
                };
                assert_eq!(samples.len(), expected, "{kind} align {align} len {}", raw.len());
                assert_eq!(samples.kind(), kind);
            }
        }
    }
}

#[test]
fn pipeline_is_idempotent() {
    let mut rng = WyRand::new_seed(42);

    for _ in 0..50 {
        let raw = random_buffer(&mut rng, 4096);
        let align = ByteAlignment::new(rng.generate_range(0_u8..8)).unwrap();
        let width = NonZeroUsize::new(rng.generate_range(1_usize..64)).unwrap();

        for kind in ALL_KINDS {
            let first = decode(&raw, kind, align);
            let second = decode(&raw, kind, align);
            assert_eq!(
                hash(first.as_slice().as_bytes()),
                hash(second.as_slice().as_bytes())
            );

            for mode in MODES {
                let a = extract(&first, 0, width, mode);
                let b = extract(&second, 0, width, mode);
                assert_eq!(a.is_insufficient(), b.is_insufficient());

                if let (Some(a), Some(b)) = (a.into_frame(), b.into_frame()) {
                    assert_eq!(hash(a.samples().as_bytes()), hash(b.samples().as_bytes()));

                    let a = normalize(&a);
                    let b = normalize(&b);

                    assert_eq!(hash(a.pixels()), hash(b.pixels()), "{kind} {mode}");
                    assert_eq!(a.dimensions(), b.dimensions());
                }
            }
        }
    }
}

#[test]
fn uint8_grayscale_reproduces_bytes() {
    let mut rng = WyRand::new_seed(7);

    for _ in 0..20 {
        let mut raw = random_buffer(&mut rng, 1024);
        // one full row of width 1 at least
        raw.push(rng.generate());

        let samples = decode(&raw, ALL_KINDS[0], ByteAlignment::default());
        let frame = extract(&samples, 0, NonZeroUsize::MIN, ColorMode::Grayscale)
            .into_frame()
            .unwrap();
        let image = normalize(&frame);

        assert_eq!(hash(image.pixels()), hash(&raw));
        assert_eq!(image.pixels(), raw.as_slice());
    }
}

#[test]
fn row_boundaries() {
    let mut rng = WyRand::new_seed(0xf00d);

    for _ in 0..100 {
        let width = rng.generate_range(1_usize..32);
        let offset = rng.generate_range(0_usize..16);

        for mode in MODES {
            let row = width * mode.channels();
            let raw = vec![0_u8; offset + row];
            let samples = decode(&raw, ALL_KINDS[0], ByteAlignment::default());
            let width = NonZeroUsize::new(width).unwrap();

            // exactly one row
            let frame = extract(&samples, offset, width, mode).into_frame().unwrap();
            assert_eq!(frame.height(), 1);

            // one sample short
            assert!(extract(&samples, offset + 1, width, mode).is_insufficient());
        }
    }
}
