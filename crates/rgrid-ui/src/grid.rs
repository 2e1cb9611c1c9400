//! ResponsiveGrid: binds an item collection to a grid configuration.
//!
//! The grid does no drawing itself. Each layout pass hands every item to a
//! host callback together with its index and the computed cell width.

use rgrid_types::error::Result;

use crate::config::GridConfiguration;
use crate::engine::{GridLayoutEngine, LayoutResult};

/// What a cell renderer receives for one item.
#[derive(Debug, PartialEq)]
pub struct GridCellContext<'a, T> {
    pub item: &'a T,
    pub index: usize,
    pub cell_width: f32,
}

/// A responsive grid over `items`.
#[derive(Debug, Clone)]
pub struct ResponsiveGrid<T> {
    pub items: Vec<T>,
    pub config: GridConfiguration,
    engine: GridLayoutEngine,
}

impl<T> ResponsiveGrid<T> {
    /// Create a grid with the default configuration.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_config(items, GridConfiguration::default())
    }

    pub fn with_config(items: Vec<T>, config: GridConfiguration) -> Self {
        Self {
            items,
            config,
            engine: GridLayoutEngine::default(),
        }
    }

    /// Use a custom engine, e.g. one with non-standard breakpoint ranges.
    pub fn with_engine(mut self, engine: GridLayoutEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn layout(&self, total_width: f32) -> Result<LayoutResult> {
        self.engine.layout(self.items.len(), total_width, &self.config)
    }

    /// Pair every item with its index and cell width, in item order.
    pub fn cells(&self, total_width: f32) -> Result<Vec<GridCellContext<'_, T>>> {
        let result = self.layout(total_width)?;
        Ok(self
            .items
            .iter()
            .zip(&result.placements)
            .map(|(item, p)| GridCellContext {
                item,
                index: p.index,
                cell_width: p.cell_width,
            })
            .collect())
    }

    /// Run `render` for every cell, stopping at the first error.
    pub fn for_each_cell<F>(&self, total_width: f32, mut render: F) -> Result<()>
    where
        F: FnMut(GridCellContext<'_, T>) -> Result<()>,
    {
        for cell in self.cells(total_width)? {
            render(cell)?;
        }
        Ok(())
    }
}
