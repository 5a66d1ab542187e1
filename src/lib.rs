//! A 12-hour digital clock driven by per-minute ticks.
//!
//! The clock keeps 24-hour state in two wrapping counters and caches the
//! `HH:MM AM` string after every change. Everything here is `no_std` and
//! allocation-free so the same types run on the Pico firmware and on the host.

#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod counter;
pub mod display;
pub mod error;
pub mod font;

pub use clock::{ClockDisplay, Period};
pub use counter::BoundedCounter;
pub use error::{ClockError, Result};
