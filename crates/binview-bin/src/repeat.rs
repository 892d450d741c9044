/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Press-and-hold auto repeat
//!
//! Holding a step button fires its action once on press, again after
//! [`FIRST_DELAY`] and then every [`REPEAT_INTERVAL`] until released.
//!
//! The machine doesn't own a timer, the caller feeds it timestamps
//! through [`RepeatTimer::poll`] and runs the action as many times as
//! it returns.
use std::time::Duration;

/// Delay between the press and the first repeat
pub const FIRST_DELAY: Duration = Duration::from_millis(300);
/// Delay between repeats once repeating
pub const REPEAT_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RepeatState {
    /// Not pressed
    Idle,
    /// Pressed, waiting for the first repeat due at `deadline`
    FirstDelay { deadline: Duration },
    /// Repeating, next fire due at `deadline`
    Repeating { deadline: Duration }
}

#[derive(Copy, Clone, Debug)]
pub struct RepeatTimer {
    state:    RepeatState,
    delay:    Duration,
    interval: Duration
}

impl Default for RepeatTimer {
    fn default() -> Self {
        RepeatTimer::new()
    }
}

impl RepeatTimer {
    pub const fn new() -> RepeatTimer {
        RepeatTimer::with_timings(FIRST_DELAY, REPEAT_INTERVAL)
    }

    /// A timer with custom timings, a zero `interval` is treated as one millisecond
    pub const fn with_timings(delay: Duration, interval: Duration) -> RepeatTimer {
        let interval = if interval.is_zero() {
            Duration::from_millis(1)
        } else {
            interval
        };
        RepeatTimer {
            state: RepeatState::Idle,
            delay,
            interval
        }
    }

    pub const fn state(&self) -> RepeatState {
        self.state
    }

    pub const fn is_pressed(&self) -> bool {
        !matches!(self.state, RepeatState::Idle)
    }

    /// Start a press at `now`.
    ///
    /// The action fires once immediately, pressing again while held
    /// restarts the delay.
    pub fn press(&mut self, now: Duration) -> u32 {
        self.release();
        self.state = RepeatState::FirstDelay {
            deadline: now.saturating_add(self.delay)
        };
        1
    }

    /// Stop repeating, no more fires until the next press
    pub fn release(&mut self) {
        self.state = RepeatState::Idle;
    }

    /// Advance to `now`, returning how many times the action should fire
    pub fn poll(&mut self, now: Duration) -> u32 {
        let deadline = match self.state {
            RepeatState::Idle => return 0,
            RepeatState::FirstDelay { deadline } | RepeatState::Repeating { deadline } => deadline
        };
        if now < deadline {
            return 0;
        }
        // the fire due at `deadline` plus every whole interval after it
        let missed = (now - deadline).as_nanos() / self.interval.as_nanos();
        let fires = u32::try_from(missed.saturating_add(1)).unwrap_or(u32::MAX);

        self.state = RepeatState::Repeating {
            deadline: deadline.saturating_add(self.interval.saturating_mul(fires))
        };
        fires
    }

    /// Number of fires a press held for `held` produces, counting the
    /// initial one
    pub fn fires_while_held(held: Duration) -> u32 {
        let mut timer = RepeatTimer::new();
        let fires = timer.press(Duration::ZERO).saturating_add(timer.poll(held));
        timer.release();
        fires
    }
}
