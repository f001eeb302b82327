//! Platform abstraction layer
//!
//! The simulation never reads a wall clock. The surface feeds frame deltas
//! into the timers here, and the session dispatches whatever fired.

pub mod clock;

pub use clock::{IntervalTimer, TimerKind, Timers};
