//! rgrid-ui: responsive grid layout.
//!
//! Resolves the container width to a breakpoint, looks up the configured
//! column count, and computes a uniform cell width and per-item placements.
//! Rendering, scrolling and hit testing stay with the host toolkit.

pub mod config;
pub mod engine;
pub mod grid;

pub use rgrid_types::breakpoint;
pub use rgrid_types::error;

pub use config::GridConfiguration;
pub use engine::{GridCellPlacement, GridLayoutEngine, LayoutResult, layout};
pub use grid::{GridCellContext, ResponsiveGrid};
