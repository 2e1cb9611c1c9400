//! Foundation types for rgrid.
//!
//! This crate contains the toolkit-agnostic types shared by the rgrid crates:
//! named width breakpoints, width-to-breakpoint resolution, and the error type.

pub mod breakpoint;
pub mod error;

pub use breakpoint::{Breakpoint, BreakpointRange, BreakpointResolver};
pub use error::{GridError, Result};
