/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Raw bytes to typed samples
//!
//! Decoding skips the first `alignment` bytes, truncates what remains to a
//! whole number of samples and reinterprets it as little endian values of the
//! requested numeric kind.
//!
//! Decoding is total, every combination of buffer, kind and alignment
//! produces a (possibly empty) sequence.
use std::fmt::Debug;
use std::ops::Range;

use binview_core::alignment::ByteAlignment;
use binview_core::log::trace;
use binview_core::numeric_kind::NumericKind;
use bytemuck::Pod;

/// A native type a sample can be decoded into
pub trait Sample: Pod + Debug + PartialEq {
    /// The numeric kind this type represents
    const KIND: NumericKind;

    /// Convert a value read in little endian order to native order
    fn swap_from_le(self) -> Self;
}

macro_rules! impl_int_sample {
    ($($t:ty => $kind:ident),*) => {
        $(
            impl Sample for $t {
                const KIND: NumericKind = NumericKind::$kind;

                #[inline(always)]
                fn swap_from_le(self) -> Self {
                    <$t>::from_le(self)
                }
            }
        )*
    };
}

macro_rules! impl_float_sample {
    ($($t:ty => $bits:ty, $kind:ident),*) => {
        $(
            impl Sample for $t {
                const KIND: NumericKind = NumericKind::$kind;

                #[inline(always)]
                fn swap_from_le(self) -> Self {
                    <$t>::from_bits(<$bits>::from_le(self.to_bits()))
                }
            }
        )*
    };
}

impl_int_sample!(
    u8 => Uint8, u16 => Uint16, u32 => Uint32, u64 => Uint64,
    i8 => Int8, i16 => Int16, i32 => Int32, i64 => Int64
);
impl_float_sample!(f32 => u32, Float32, f64 => u64, Float64);

/// A decoded, read-only run of samples of one numeric kind
///
/// This owns its samples, frames borrow from it via [`SampleSlice`]
#[derive(Clone, Debug, PartialEq)]
pub enum SampleSequence {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    U64(Vec<u64>),
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    F32(Vec<f32>),
    F64(Vec<f64>)
}

/// A borrowed window into a [`SampleSequence`]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SampleSlice<'a> {
    U8(&'a [u8]),
    U16(&'a [u16]),
    U32(&'a [u32]),
    U64(&'a [u64]),
    I8(&'a [i8]),
    I16(&'a [i16]),
    I32(&'a [i32]),
    I64(&'a [i64]),
    F32(&'a [f32]),
    F64(&'a [f64])
}

/// Run `$body` with `$v` bound to the payload of whichever variant `$value` is
macro_rules! with_variant {
    ($enum:ident, $value:expr, |$v:ident| $body:expr) => {
        match $value {
            $enum::U8($v) => $body,
            $enum::U16($v) => $body,
            $enum::U32($v) => $body,
            $enum::U64($v) => $body,
            $enum::I8($v) => $body,
            $enum::I16($v) => $body,
            $enum::I32($v) => $body,
            $enum::I64($v) => $body,
            $enum::F32($v) => $body,
            $enum::F64($v) => $body
        }
    };
}

/// Like `with_variant` but wraps the result back into the same `SampleSlice` variant
macro_rules! map_to_slice {
    ($enum:ident, $value:expr, |$v:ident| $body:expr) => {
        match $value {
            $enum::U8($v) => SampleSlice::U8($body),
            $enum::U16($v) => SampleSlice::U16($body),
            $enum::U32($v) => SampleSlice::U32($body),
            $enum::U64($v) => SampleSlice::U64($body),
            $enum::I8($v) => SampleSlice::I8($body),
            $enum::I16($v) => SampleSlice::I16($body),
            $enum::I32($v) => SampleSlice::I32($body),
            $enum::I64($v) => SampleSlice::I64($body),
            $enum::F32($v) => SampleSlice::F32($body),
            $enum::F64($v) => SampleSlice::F64($body)
        }
    };
}

impl SampleSequence {
    /// An empty sequence of the given kind
    pub fn empty(kind: NumericKind) -> SampleSequence {
        match kind {
            NumericKind::Uint8 => Self::U8(Vec::new()),
            NumericKind::Uint16 => Self::U16(Vec::new()),
            NumericKind::Uint32 => Self::U32(Vec::new()),
            NumericKind::Uint64 => Self::U64(Vec::new()),
            NumericKind::Int8 => Self::I8(Vec::new()),
            NumericKind::Int16 => Self::I16(Vec::new()),
            NumericKind::Int32 => Self::I32(Vec::new()),
            NumericKind::Int64 => Self::I64(Vec::new()),
            NumericKind::Float32 => Self::F32(Vec::new()),
            NumericKind::Float64 => Self::F64(Vec::new())
        }
    }

    pub fn kind(&self) -> NumericKind {
        self.as_slice().kind()
    }

    pub fn len(&self) -> usize {
        with_variant!(SampleSequence, self, |v| v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow every sample of the sequence
    pub fn as_slice(&self) -> SampleSlice<'_> {
        map_to_slice!(SampleSequence, self, |v| v.as_slice())
    }
}

impl<'a> SampleSlice<'a> {
    pub fn kind(&self) -> NumericKind {
        match self {
            Self::U8(_) => u8::KIND,
            Self::U16(_) => u16::KIND,
            Self::U32(_) => u32::KIND,
            Self::U64(_) => u64::KIND,
            Self::I8(_) => i8::KIND,
            Self::I16(_) => i16::KIND,
            Self::I32(_) => i32::KIND,
            Self::I64(_) => i64::KIND,
            Self::F32(_) => f32::KIND,
            Self::F64(_) => f64::KIND
        }
    }

    pub fn len(&self) -> usize {
        with_variant!(SampleSlice, self, |v| v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The samples as host ordered bytes, for hashing and bit exact comparisons
    pub fn as_bytes(&self) -> &'a [u8] {
        with_variant!(SampleSlice, *self, |v| bytemuck::cast_slice(v))
    }

    /// Narrow the view to `range`, returning `None` if the range is out of bounds
    pub fn get(&self, range: Range<usize>) -> Option<SampleSlice<'a>> {
        let sub = map_to_slice!(SampleSlice, *self, |v| v.get(range)?);
        Some(sub)
    }
}

/// Reinterpret `raw` as a sequence of `kind` samples.
///
/// # Arguments
/// - `raw`: The raw bytes, usually the contents of a file
/// - `kind`: The numeric kind to decode samples as
/// - `alignment`: Number of leading bytes to skip before decoding
///
/// # Returns
/// A sequence of `floor((raw.len() - alignment) / kind.byte_width())` samples,
/// or an empty sequence when `alignment >= raw.len()`. Trailing bytes that
/// don't make up a whole sample are never read.
///
/// Samples are read in little endian order regardless of the host.
pub fn decode(raw: &[u8], kind: NumericKind, alignment: ByteAlignment) -> SampleSequence {
    let skip = alignment.as_usize();

    if skip >= raw.len() {
        trace!("Alignment {skip} consumes the whole buffer, no samples");
        return SampleSequence::empty(kind);
    }
    let aligned = &raw[skip..];
    let width = kind.byte_width();
    let usable = &aligned[..(aligned.len() / width) * width];

    trace!(
        "Decoding {} bytes as {kind}, discarding {} trailing bytes",
        usable.len(),
        aligned.len() - usable.len()
    );

    match kind {
        NumericKind::Uint8 => SampleSequence::U8(decode_le(usable)),
        NumericKind::Uint16 => SampleSequence::U16(decode_le(usable)),
        NumericKind::Uint32 => SampleSequence::U32(decode_le(usable)),
        NumericKind::Uint64 => SampleSequence::U64(decode_le(usable)),
        NumericKind::Int8 => SampleSequence::I8(decode_le(usable)),
        NumericKind::Int16 => SampleSequence::I16(decode_le(usable)),
        NumericKind::Int32 => SampleSequence::I32(decode_le(usable)),
        NumericKind::Int64 => SampleSequence::I64(decode_le(usable)),
        NumericKind::Float32 => SampleSequence::F32(decode_le(usable)),
        NumericKind::Float64 => SampleSequence::F64(decode_le(usable))
    }
}

/// Copy `bytes` into a vector of `T`.
///
/// `bytes` need not be aligned for `T` but its length must be a multiple
/// of `size_of::<T>()`.
fn decode_le<T: Sample>(bytes: &[u8]) -> Vec<T> {
    debug_assert_eq!(bytes.len() % core::mem::size_of::<T>(), 0);

    let mut samples: Vec<T> = bytemuck::allocation::pod_collect_to_vec(bytes);

    if cfg!(target_endian = "big") {
        samples.iter_mut().for_each(|x| *x = x.swap_from_le());
    }
    samples
}
