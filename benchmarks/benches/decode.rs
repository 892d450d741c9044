/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use binview_benches::{sample_buffer, BUFFER_SIZE};
use binview_core::alignment::ByteAlignment;
use binview_core::numeric_kind::ALL_KINDS;
use binview_image::samples::decode;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_decode(c: &mut Criterion) {
    let data = sample_buffer(BUFFER_SIZE);

    let mut group = c.benchmark_group("binview: Decode samples");

    group.throughput(Throughput::Bytes(data.len() as u64));

    for kind in ALL_KINDS {
        group.bench_function(kind.name(), |b| {
            b.iter(|| black_box(decode(&data, kind, ByteAlignment::default())))
        });
    }
    // odd alignment forces the unaligned copy for every wide kind
    let align = ByteAlignment::new(3).unwrap_or_default();

    for kind in ALL_KINDS.iter().filter(|x| x.byte_width() > 1) {
        group.bench_function(format!("{kind} align 3"), |b| {
            b.iter(|| black_box(decode(&data, *kind, align)))
        });
    }
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_decode);

criterion_main!(benches);
