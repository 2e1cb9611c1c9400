//! Responsive grid layout engine.
//!
//! Turns a container width and a [`GridConfiguration`] into a column count,
//! a uniform cell width and one placement per item. The engine is stateless:
//! hosts call it again whenever the container width changes and drop the
//! previous result.

use rgrid_types::breakpoint::{Breakpoint, BreakpointResolver};
use rgrid_types::error::{GridError, Result};

use crate::config::GridConfiguration;

/// Where one item lands in the grid for a single layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCellPlacement {
    /// Item index in the source collection.
    pub index: usize,
    pub column: usize,
    pub row: usize,
    /// Leading edge of the cell, padding included.
    pub x: f32,
    pub cell_width: f32,
}

/// Output of [`GridLayoutEngine::layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub breakpoint: Breakpoint,
    pub column_count: usize,
    pub cell_width: f32,
    /// One entry per item, in item order.
    pub placements: Vec<GridCellPlacement>,
}

impl LayoutResult {
    /// Number of rows needed to hold every placement.
    pub fn row_count(&self) -> usize {
        self.placements.len().div_ceil(self.column_count)
    }

    /// Total content height when every row is `row_height` tall.
    pub fn content_height(&self, row_height: f32, config: &GridConfiguration) -> f32 {
        let rows = self.row_count();
        let mut height = config.padding * 2.0;
        if rows > 0 {
            height += rows as f32 * row_height + config.row_spacing * (rows - 1) as f32;
        }
        height
    }
}

/// Computes grid layouts against a set of breakpoint ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridLayoutEngine {
    resolver: BreakpointResolver,
}

impl GridLayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(resolver: BreakpointResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &BreakpointResolver {
        &self.resolver
    }

    /// Lay out `item_count` items across `total_width`.
    ///
    /// Fails with [`GridError::Config`] when the active breakpoint maps to a
    /// column count of zero or less. The cell width is not clamped: padding
    /// and spacing wider than the container give a zero or negative width.
    pub fn layout(
        &self,
        item_count: usize,
        total_width: f32,
        config: &GridConfiguration,
    ) -> Result<LayoutResult> {
        let breakpoint = self.resolver.resolve(total_width);
        let columns = config.columns(breakpoint);
        if columns <= 0 {
            return Err(GridError::Config(format!(
                "column count for breakpoint {breakpoint} must be positive, got {columns}"
            )));
        }
        let column_count = columns as usize;

        let available = total_width
            - config.padding * 2.0
            - config.column_spacing * (column_count - 1) as f32;
        let cell_width = available / column_count as f32;
        if cell_width <= 0.0 {
            log::warn!(
                "grid cell width {cell_width} at container width {total_width}: \
                 padding and spacing exceed the available space"
            );
        }
        log::debug!(
            "grid layout: width={total_width} breakpoint={breakpoint} columns={column_count} \
             cell_width={cell_width} items={item_count}"
        );

        let stride = cell_width + config.column_spacing;
        let placements = (0..item_count)
            .map(|index| {
                let column = index % column_count;
                GridCellPlacement {
                    index,
                    column,
                    row: index / column_count,
                    x: config.padding + column as f32 * stride,
                    cell_width,
                }
            })
            .collect();

        Ok(LayoutResult {
            breakpoint,
            column_count,
            cell_width,
            placements,
        })
    }
}

/// Lay out with the standard breakpoint ranges.
pub fn layout(
    item_count: usize,
    total_width: f32,
    config: &GridConfiguration,
) -> Result<LayoutResult> {
    GridLayoutEngine::default().layout(item_count, total_width, config)
}
