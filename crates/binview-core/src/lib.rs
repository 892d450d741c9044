/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core types shared by the binview crates
//!
//! It currently contains
//!
//! - The numeric kinds a byte buffer can be reinterpreted as
//! - Byte alignment, the number of leading bytes skipped before decoding
//! - Color modes used to group samples into pixels
//! - A logging shim that compiles away when the `log` feature is off
//!
//! # Features
//!  - `std`: Enables std, otherwise the crate is `#[no_std]`
//!
//!  - `log`: Forward the logging macros to the `log` crate
//!
//!  - `serde`: Enables serializing of the enums in the crate
//!
#![cfg_attr(not(feature = "std"), no_std)]

pub mod alignment;
pub mod color_mode;
pub mod log;
pub mod numeric_kind;
pub mod serde;
