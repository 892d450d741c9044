/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};

/// Size of the buffer every benchmark works on
pub const BUFFER_SIZE: usize = 1 << 24;

/// A buffer of `len` random bytes, seeded so every run sees the same data
pub fn sample_buffer(len: usize) -> Vec<u8> {
    let mut rng = WyRand::new_seed(0x2545_f491);
    let mut buffer = vec![0_u8; len];

    rng.fill(&mut buffer);
    buffer
}
