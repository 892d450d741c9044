/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Logging shim
//!
//! With the `log` feature the pipeline logs through the `log` crate.
//! Without it every statement is swallowed, its arguments are still
//! type checked so values only used for logging stay "used".

#[cfg(feature = "log")]
pub use log::{debug, info, trace, warn};

#[cfg(not(feature = "log"))]
pub use crate::{
    __binview_skip_log as debug, __binview_skip_log as info, __binview_skip_log as trace,
    __binview_skip_log as warn
};

// exported macros land in the crate root, the re-exports above give
// them their names under `binview_core::log`
#[doc(hidden)]
#[macro_export]
macro_rules! __binview_skip_log {
    (target: $target:expr, $($arg:tt)+) => {
        $crate::__binview_skip_log!($($arg)+)
    };
    ($($arg:tt)+) => {{
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    }};
}
