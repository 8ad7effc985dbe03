//! Pavement layout: a grid of cells with explicit origin and span.
//!
//! Every child declares the column/row it starts at and how many columns/rows
//! it covers. The engine measures in two passes:
//!
//! 1. **Measure** derives the column width from the available width (or from a
//!    column width hint when the width is unconstrained) and sizes every cell
//!    exactly from its spans. Row height is always configured.
//! 2. **Place** turns each cell's grid coordinates into a pixel rectangle.
//!
//! Cell coordinates are trusted: overlapping declarations produce overlapping
//! rectangles.

use std::hash::Hash;

use gallery_ui_graphics::{Dp, EdgeInsets, Point, Rect, Size};
use indexmap::IndexMap;

use crate::constraints::{Constraints, MeasureMode};

/// Row height used when none is configured.
pub const DEFAULT_ROW_HEIGHT: Dp = Dp(48.0);

/// Column width hint used when the width is unconstrained.
pub const DEFAULT_COLUMN_WIDTH: Dp = Dp(48.0);

/// Grid coordinates declared by a child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellSpec {
    pub column: u32,
    pub row: u32,
    pub column_span: u32,
    pub row_span: u32,
}

impl Default for CellSpec {
    fn default() -> Self {
        Self {
            column: 0,
            row: 0,
            column_span: 1,
            row_span: 1,
        }
    }
}

impl CellSpec {
    /// A 1x1 cell at the given column and row.
    pub fn at(column: u32, row: u32) -> Self {
        Self {
            column,
            row,
            ..Self::default()
        }
    }

    /// Sets the spans. Spans below one are raised to one.
    pub fn with_span(self, column_span: u32, row_span: u32) -> Self {
        Self {
            column_span: column_span.max(1),
            row_span: row_span.max(1),
            ..self
        }
    }

    /// Index of the first column to the right of this cell, saturating at
    /// `u32::MAX`.
    #[inline]
    pub fn column_end(&self) -> u32 {
        self.column.saturating_add(self.column_span.max(1))
    }
}

/// A managed child: its declaration plus the results of the last pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    spec: CellSpec,
    measured: Size,
    placed: Point,
}

impl Cell {
    fn new(spec: CellSpec) -> Self {
        Self {
            spec: spec.with_span(spec.column_span, spec.row_span),
            measured: Size::ZERO,
            placed: Point::ZERO,
        }
    }

    pub fn spec(&self) -> CellSpec {
        self.spec
    }

    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Rectangle from the last placement pass.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.placed, self.measured)
    }
}

/// Host-side configuration of a [`PavementLayout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PavementConfig {
    pub row_height: f32,
    /// Column width used when the width is unconstrained and no earlier pass
    /// derived one. `None` leaves such grids zero-width.
    pub default_column_width: Option<f32>,
    pub horizontal_spacing: f32,
    pub vertical_spacing: f32,
    pub padding: EdgeInsets,
}

impl Default for PavementConfig {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

impl PavementConfig {
    /// Default configuration with dp values converted for `density`.
    pub fn with_density(density: f32) -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT.to_px(density),
            default_column_width: Some(DEFAULT_COLUMN_WIDTH.to_px(density)),
            horizontal_spacing: 0.0,
            vertical_spacing: 0.0,
            padding: EdgeInsets::default(),
        }
    }

    pub fn row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn default_column_width(mut self, column_width: Option<f32>) -> Self {
        self.default_column_width = column_width;
        self
    }

    pub fn spacing(mut self, horizontal: f32, vertical: f32) -> Self {
        self.horizontal_spacing = horizontal;
        self.vertical_spacing = vertical;
        self
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }
}

/// Render adapter implemented by the host view layer.
pub trait PavementHost<K> {
    /// Measure `child` at the given (always tight) constraints.
    fn measure_child(&mut self, child: &K, constraints: Constraints);

    /// Position `child` at `bounds`, relative to the container.
    fn place_child(&mut self, child: &K, bounds: Rect);
}

/// Grid layout engine keyed by host child ids, in insertion order.
#[derive(Clone, Debug)]
pub struct PavementLayout<K> {
    config: PavementConfig,
    cells: IndexMap<K, Cell>,
    column_width: Option<f32>,
    measured_size: Size,
}

impl<K: Hash + Eq> Default for PavementLayout<K> {
    fn default() -> Self {
        Self::new(PavementConfig::default())
    }
}

impl<K: Hash + Eq> PavementLayout<K> {
    pub fn new(config: PavementConfig) -> Self {
        Self {
            config,
            cells: IndexMap::new(),
            column_width: None,
            measured_size: Size::ZERO,
        }
    }

    pub fn config(&self) -> &PavementConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PavementConfig) {
        self.config = config;
    }

    /// Adds or replaces a child. Returns the previous declaration, if any.
    pub fn insert(&mut self, child: K, spec: CellSpec) -> Option<CellSpec> {
        self.cells
            .insert(child, Cell::new(spec))
            .map(|previous| previous.spec)
    }

    /// Removes a child, keeping the order of the remaining ones.
    pub fn remove(&mut self, child: &K) -> Option<CellSpec> {
        self.cells.shift_remove(child).map(|cell| cell.spec)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, child: &K) -> bool {
        self.cells.contains_key(child)
    }

    /// Number of columns needed to hold the rightmost cell.
    pub fn column_count(&self) -> u32 {
        self.cells
            .values()
            .map(|cell| cell.spec.column_end())
            .max()
            .unwrap_or(0)
    }

    /// Column width derived by the last measure pass, or 0 if none was.
    pub fn column_width(&self) -> f32 {
        self.column_width.unwrap_or(0.0)
    }

    pub fn row_height(&self) -> f32 {
        self.config.row_height
    }

    /// Size reported by the last measure pass.
    pub fn measured_size(&self) -> Size {
        self.measured_size
    }

    pub fn cell(&self, child: &K) -> Option<&Cell> {
        self.cells.get(child)
    }

    pub fn cell_bounds(&self, child: &K) -> Option<Rect> {
        self.cells.get(child).map(Cell::bounds)
    }

    /// Tight constraints the child was measured with in the last pass.
    pub fn child_constraints(&self, child: &K) -> Option<Constraints> {
        self.cells
            .get(child)
            .map(|cell| Constraints::tight(cell.measured.width, cell.measured.height))
    }

    pub fn cells(&self) -> impl Iterator<Item = (&K, &Cell)> {
        self.cells.iter()
    }

    /// Runs the measure pass without a host.
    pub fn measure(&mut self, constraints: Constraints) -> Size {
        self.measure_cells(constraints, |_, _| {})
    }

    /// Runs the placement pass without a host.
    pub fn place(&mut self) {
        self.place_cells(|_, _| {});
    }

    /// Runs both passes, reporting every child to `host`.
    pub fn layout<H>(&mut self, constraints: Constraints, host: &mut H) -> Size
    where
        H: PavementHost<K> + ?Sized,
    {
        let size = self.measure_cells(constraints, |child, child_constraints| {
            host.measure_child(child, child_constraints)
        });
        self.place_cells(|child, bounds| host.place_child(child, bounds));
        size
    }

    fn measure_cells(
        &mut self,
        constraints: Constraints,
        mut on_child: impl FnMut(&K, Constraints),
    ) -> Size {
        let width_spec = constraints.width_spec();
        let height_spec = constraints.height_spec();
        let columns = self.column_count();

        let measure_width_by_children = width_spec.mode == MeasureMode::Unspecified;
        let measure_height_by_children = height_spec.mode == MeasureMode::Unspecified;

        if measure_width_by_children {
            if self.column_width.is_none() {
                self.column_width = self.config.default_column_width;
            }
        } else if columns > 0 {
            self.column_width = Some(width_spec.size / columns as f32);
        }

        let column_width = match self.column_width {
            Some(width) => width,
            None if measure_width_by_children && columns > 0 => {
                log::warn!(
                    "PavementLayout: unconstrained width with no column width hint; \
                     {} cells measured at zero width",
                    self.cells.len()
                );
                0.0
            }
            None => 0.0,
        };
        let width_known = self.column_width.is_some();

        let PavementConfig {
            row_height,
            horizontal_spacing,
            vertical_spacing,
            ..
        } = self.config;

        let mut measured_width = if measure_width_by_children {
            0.0
        } else {
            width_spec.size
        };
        let mut measured_height = if measure_height_by_children {
            0.0
        } else {
            height_spec.size
        };

        for (child, cell) in self.cells.iter_mut() {
            let spec = cell.spec;
            let width = if width_known {
                spec.column_span as f32 * column_width
                    + (spec.column_span - 1) as f32 * horizontal_spacing
            } else {
                0.0
            };
            let height = spec.row_span as f32 * row_height
                + (spec.row_span - 1) as f32 * vertical_spacing;

            cell.measured = Size::new(width, height);
            on_child(child, Constraints::tight(width, height));

            if measure_width_by_children && width_known {
                let left = spec.column as f32 * (column_width + horizontal_spacing)
                    + horizontal_spacing;
                measured_width = f32::max(measured_width, left + width);
            }
            if measure_height_by_children {
                let top = spec.row as f32 * (row_height + vertical_spacing) + vertical_spacing;
                measured_height = f32::max(measured_height, top + height);
            }
        }

        self.measured_size = Size::new(measured_width, measured_height);
        log::debug!(
            "PavementLayout: {} cells in {} columns, column width {}, measured {:?}",
            self.cells.len(),
            columns,
            column_width,
            self.measured_size
        );
        self.measured_size
    }

    fn place_cells(&mut self, mut on_child: impl FnMut(&K, Rect)) {
        let column_width = self.column_width();
        let PavementConfig {
            row_height,
            horizontal_spacing,
            vertical_spacing,
            padding,
            ..
        } = self.config;

        for (child, cell) in self.cells.iter_mut() {
            let left =
                cell.spec.column as f32 * (column_width + horizontal_spacing) + padding.left;
            let top = cell.spec.row as f32 * (row_height + vertical_spacing) + padding.top;
            cell.placed = Point::new(left, top);
            on_child(child, cell.bounds());
        }
    }
}

#[cfg(test)]
#[path = "tests/pavement_tests.rs"]
mod tests;
