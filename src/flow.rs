//! Responsive grid flow
//!
//! Turns a flat list of swatches into rows sized for the space the grid has.
//! [`FlowLayout::compute`] and [`split_into_rows`] are pure; [`FlowState`]
//! owns the measured ideal cell size and the last layout, so a resize only
//! re-partitions when something actually changed.

use thiserror::Error;
use tracing::{debug, trace};

/// Smallest width the measurement side will hand to the calculator.
pub const MIN_MEASURED_WIDTH: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FlowError {
    #[error("container width must be finite and positive, got {0}")]
    InvalidContainerWidth(f32),

    #[error("ideal cell width must be finite and positive, got {0}")]
    InvalidCellWidth(f32),

    #[error("max columns must be at least 1")]
    ZeroMaxColumns,

    #[error("sample cell has not been measured yet")]
    Unmeasured,
}

/// Validated calculator input. Widths are finite and > 0, `max_columns >= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowInput {
    container_width: f32,
    ideal_cell_width: f32,
    max_columns: usize,
}

impl FlowInput {
    pub fn new(
        container_width: f32,
        ideal_cell_width: f32,
        max_columns: usize,
    ) -> Result<Self, FlowError> {
        if !container_width.is_finite() || container_width <= 0.0 {
            return Err(FlowError::InvalidContainerWidth(container_width));
        }
        if !ideal_cell_width.is_finite() || ideal_cell_width <= 0.0 {
            return Err(FlowError::InvalidCellWidth(ideal_cell_width));
        }
        if max_columns == 0 {
            return Err(FlowError::ZeroMaxColumns);
        }
        Ok(Self {
            container_width,
            ideal_cell_width,
            max_columns,
        })
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn ideal_cell_width(&self) -> f32 {
        self.ideal_cell_width
    }

    pub fn max_columns(&self) -> usize {
        self.max_columns
    }

    /// `floor(container / ideal)` clamped to `[1, max_columns]`.
    pub fn column_count(&self) -> usize {
        // `as` saturates, so a huge ratio just lands on max_columns
        let fit = (self.container_width / self.ideal_cell_width).floor() as usize;
        fit.clamp(1, self.max_columns)
    }
}

/// Column count and cell size for one grid at one container width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowLayout {
    pub column_count: usize,
    /// Share of the container per column. Never wider than the container,
    /// even when a single column is narrower than the ideal cell.
    pub cell_width: f32,
    /// `None` when rows size themselves to their content.
    pub cell_height: Option<f32>,
}

impl FlowLayout {
    pub fn compute(input: &FlowInput, cell_height: Option<f32>) -> Self {
        let column_count = input.column_count();
        Self {
            column_count,
            cell_width: input.container_width / column_count as f32,
            cell_height,
        }
    }

    pub fn row_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.column_count)
    }
}

/// Split `items` into rows of exactly `column_count` slots, row-major.
///
/// Slots past the end of `items` are `None` so every row has the same shape
/// and the renderer can keep the columns aligned. Empty input gives no rows.
///
/// # Panics
///
/// If `column_count` is zero. [`FlowLayout`] never produces that.
pub fn split_into_rows<T>(items: &[T], column_count: usize) -> Vec<Vec<Option<&T>>> {
    assert!(column_count > 0, "column_count must be at least 1");
    items
        .chunks(column_count)
        .map(|chunk| {
            let mut row: Vec<Option<&T>> = chunk.iter().map(Some).collect();
            row.resize(column_count, None);
            row
        })
        .collect()
}

/// A computed layout together with the rows it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowGrid<'a, T> {
    pub layout: FlowLayout,
    pub rows: Vec<Vec<Option<&'a T>>>,
}

pub fn flow<'a, T>(
    items: &'a [T],
    input: &FlowInput,
    cell_height: Option<f32>,
) -> FlowGrid<'a, T> {
    let layout = FlowLayout::compute(input, cell_height);
    FlowGrid {
        rows: split_into_rows(items, layout.column_count),
        layout,
    }
}

/// What the sample cell was measured against. Any change forces a re-measure.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureKey {
    pub pixels_per_point: f32,
    pub sample: String,
    pub chip_min: f32,
}

/// Natural size of the sample cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub width: f32,
    pub height: Option<f32>,
}

#[derive(Debug, Clone)]
struct Measured {
    key: MeasureKey,
    size: Measurement,
}

/// Re-flow state for one grid view.
///
/// The ideal width comes from a sample cell measured once per [`MeasureKey`].
/// Layout output is never fed back as the ideal, so repeated resizes converge.
#[derive(Debug, Clone, Default)]
pub struct FlowState {
    measured: Option<Measured>,
    cached: Option<(FlowInput, FlowLayout)>,
    /// Layouts actually computed, as opposed to served from `cached`.
    reflows: u64,
}

impl FlowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached measurement for `key`, running `measure` only when
    /// the key differs from the last one.
    pub fn measure_with(
        &mut self,
        key: MeasureKey,
        measure: impl FnOnce() -> Measurement,
    ) -> Measurement {
        if let Some(measured) = &self.measured {
            if measured.key == key {
                return measured.size;
            }
        }

        let raw = measure();
        let size = Measurement {
            width: raw.width.max(MIN_MEASURED_WIDTH),
            height: raw.height.map(|h| h.max(MIN_MEASURED_WIDTH)),
        };
        debug!(
            width = size.width,
            height = ?size.height,
            ppp = key.pixels_per_point,
            sample = %key.sample,
            "Sample cell measured"
        );
        self.measured = Some(Measured { key, size });
        self.cached = None;
        size
    }

    pub fn measurement(&self) -> Option<Measurement> {
        self.measured.as_ref().map(|m| m.size)
    }

    /// Lay `items` out for the current container width. Identical inputs
    /// reuse the cached layout and only re-split the rows.
    pub fn grid<'a, T>(
        &mut self,
        items: &'a [T],
        container_width: f32,
        max_columns: usize,
    ) -> Result<FlowGrid<'a, T>, FlowError> {
        let size = self.measurement().ok_or(FlowError::Unmeasured)?;
        let input = FlowInput::new(
            container_width.max(MIN_MEASURED_WIDTH),
            size.width,
            max_columns,
        )?;

        if let Some((prev, layout)) = &self.cached {
            if *prev == input {
                return Ok(FlowGrid {
                    rows: split_into_rows(items, layout.column_count),
                    layout: *layout,
                });
            }
        }

        let grid = flow(items, &input, size.height);
        self.reflows += 1;
        trace!(
            container = input.container_width(),
            ideal = input.ideal_cell_width(),
            max_columns = input.max_columns(),
            columns = grid.layout.column_count,
            rows = grid.layout.row_count(items.len()),
            cell_width = grid.layout.cell_width,
            reflows = self.reflows,
            "Grid re-flowed"
        );
        self.cached = Some((input, grid.layout));
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn input(container: f32, ideal: f32, max: usize) -> FlowInput {
        FlowInput::new(container, ideal, max).unwrap()
    }

    fn layout(
        state: &mut FlowState,
        container: f32,
        max: usize,
    ) -> Result<FlowLayout, FlowError> {
        state.grid::<u8>(&[], container, max).map(|grid| grid.layout)
    }

    fn key(sample: &str) -> MeasureKey {
        MeasureKey {
            pixels_per_point: 1.0,
            sample: sample.to_string(),
            chip_min: 50.0,
        }
    }

    #[test]
    fn test_five_items_three_columns() {
        let items = ["A", "B", "C", "D", "E"];
        let grid = flow(&items, &input(500.0, 150.0, 8), None);

        assert_eq!(grid.layout.column_count, 3);
        assert_eq!(
            grid.rows,
            vec![
                vec![Some(&"A"), Some(&"B"), Some(&"C")],
                vec![Some(&"D"), Some(&"E"), None],
            ]
        );
    }

    #[test]
    fn test_empty_items_give_no_rows() {
        let items: [u32; 0] = [];
        let grid = flow(&items, &input(800.0, 150.0, 4), None);
        assert!(grid.rows.is_empty());
        assert_eq!(grid.layout.row_count(0), 0);
    }

    #[test]
    fn test_narrow_container_still_gets_one_column() {
        let input = input(50.0, 150.0, 5);
        assert_eq!(input.column_count(), 1);

        let items = [1, 2, 3];
        let rows = split_into_rows(&items, input.column_count());
        assert_eq!(rows, vec![vec![Some(&1)], vec![Some(&2)], vec![Some(&3)]]);
    }

    #[test]
    fn test_single_column_cell_clamped_to_container() {
        let layout = FlowLayout::compute(&input(50.0, 150.0, 5), None);
        assert_eq!(layout.column_count, 1);
        assert_eq!(layout.cell_width, 50.0);
    }

    #[test]
    fn test_max_columns_caps_wide_containers() {
        let input = input(10_000.0, 100.0, 4);
        assert_eq!(input.column_count(), 4);
        let layout = FlowLayout::compute(&input, Some(120.0));
        assert_eq!(layout.cell_width, 2_500.0);
        assert_eq!(layout.cell_height, Some(120.0));
    }

    #[test]
    fn test_exact_multiple_has_no_placeholders() {
        let items: Vec<u32> = (0..12).collect();
        let rows = split_into_rows(&items, 4);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().flatten().all(Option::is_some));
    }

    #[test]
    fn test_rows_are_rectangular_and_ordered() {
        for n in 0..40usize {
            for width in [90.0_f32, 180.0, 333.0, 640.0, 1280.0] {
                let items: Vec<usize> = (0..n).collect();
                let grid = flow(&items, &input(width, 150.0, 6), None);
                let cols = grid.layout.column_count;

                assert!((1..=6).contains(&cols));
                assert!(grid.rows.iter().all(|row| row.len() == cols));

                let slots: Vec<Option<&usize>> = grid.rows.into_iter().flatten().collect();
                assert_eq!(slots.len(), n.div_ceil(cols) * cols);
                for (i, slot) in slots.iter().enumerate() {
                    if i < n {
                        assert_eq!(*slot, Some(&i));
                    } else {
                        assert_eq!(*slot, None);
                    }
                }
            }
        }
    }

    #[test]
    fn test_flow_is_idempotent() {
        let items = ["a", "b", "c", "d", "e", "f", "g"];
        let input = input(437.5, 120.0, 5);
        assert_eq!(flow(&items, &input, Some(90.0)), flow(&items, &input, Some(90.0)));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert_eq!(
            FlowInput::new(0.0, 150.0, 3),
            Err(FlowError::InvalidContainerWidth(0.0))
        );
        assert_eq!(
            FlowInput::new(-10.0, 150.0, 3),
            Err(FlowError::InvalidContainerWidth(-10.0))
        );
        assert_eq!(
            FlowInput::new(300.0, 0.0, 3),
            Err(FlowError::InvalidCellWidth(0.0))
        );
        assert!(matches!(
            FlowInput::new(f32::NAN, 150.0, 3),
            Err(FlowError::InvalidContainerWidth(_))
        ));
        assert!(matches!(
            FlowInput::new(300.0, f32::INFINITY, 3),
            Err(FlowError::InvalidCellWidth(_))
        ));
        assert_eq!(FlowInput::new(300.0, 150.0, 0), Err(FlowError::ZeroMaxColumns));
    }

    #[test]
    #[should_panic(expected = "column_count must be at least 1")]
    fn test_split_with_zero_columns_panics() {
        split_into_rows(&[1, 2, 3], 0);
    }

    #[test]
    fn test_state_requires_measurement() {
        let mut state = FlowState::new();
        assert_eq!(layout(&mut state, 400.0, 3), Err(FlowError::Unmeasured));
    }

    #[test]
    fn test_state_measures_once_per_key() {
        let calls = Cell::new(0);
        let mut state = FlowState::new();
        let measure = || {
            calls.set(calls.get() + 1);
            Measurement {
                width: 150.0,
                height: Some(110.0),
            }
        };

        state.measure_with(key("Secondary System"), measure);
        state.measure_with(key("Secondary System"), measure);
        assert_eq!(calls.get(), 1);

        state.measure_with(key("Something else"), measure);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_state_converges_across_resizes() {
        let mut state = FlowState::new();
        state.measure_with(key("sample"), || Measurement {
            width: 150.0,
            height: None,
        });

        let first = layout(&mut state, 500.0, 8).unwrap();
        assert_eq!(first.column_count, 3);

        let wider = layout(&mut state, 900.0, 8).unwrap();
        assert_eq!(wider.column_count, 6);

        // Shrinking back must land on the same layout, not drift
        let again = layout(&mut state, 500.0, 8).unwrap();
        assert_eq!(again, first);
        assert_eq!(layout(&mut state, 500.0, 8).unwrap(), first);
    }

    #[test]
    fn test_state_reuses_layout_for_identical_widths() {
        let items = ["A", "B", "C", "D", "E"];
        let mut state = FlowState::new();
        state.measure_with(key("sample"), || Measurement {
            width: 150.0,
            height: Some(120.0),
        });

        let first = state.grid(&items, 500.0, 8).unwrap();
        assert_eq!(state.reflows, 1);
        let cached = state.cached;
        assert_eq!(cached.map(|(_, layout)| layout), Some(first.layout));

        for _ in 0..5 {
            let grid = state.grid(&items, 500.0, 8).unwrap();
            assert_eq!(grid, first);
        }
        assert_eq!(state.reflows, 1);
        assert_eq!(state.cached, cached);

        state.grid(&items, 640.0, 8).unwrap();
        assert_eq!(state.reflows, 2);

        // A new measurement key drops the cached layout
        state.measure_with(key("other sample"), || Measurement {
            width: 200.0,
            height: Some(120.0),
        });
        assert!(state.cached.is_none());
        let regrown = state.grid(&items, 640.0, 8).unwrap();
        assert_eq!(state.reflows, 3);
        assert_eq!(regrown.layout.column_count, 3);
        assert_eq!(regrown.rows.len(), 2);
    }

    #[test]
    fn test_state_clamps_degenerate_widths() {
        let mut state = FlowState::new();
        let size = state.measure_with(key("x"), || Measurement {
            width: 0.0,
            height: Some(-4.0),
        });
        assert_eq!(size.width, MIN_MEASURED_WIDTH);
        assert_eq!(size.height, Some(MIN_MEASURED_WIDTH));

        let layout = layout(&mut state, 0.0, 3).unwrap();
        assert_eq!(layout.column_count, 1);
        assert_eq!(layout.cell_width, MIN_MEASURED_WIDTH);
    }
}
