//! Dense grid reconstruction for surface plots.
//!
//! Samples arrive as sparse `(x, y, z)` records. The grid has one column per
//! distinct `x` and one row per distinct `y`, both sorted ascending; cells
//! with no sample stay null.

use tracing::{debug, trace};

use crate::data::{Dataset, Scalar};
use crate::error::{ChartError, Result};
use crate::ir::{AxisSelection, SurfaceGrid};
use crate::registry::{AxisRole, ChartFamily};
use crate::resolve::{check_bound, resolve_axes};

/// Build the surface grid from the `x`, `y` and `z` bindings.
///
/// When several records share an `(x, y)` pair the later record in input
/// order wins.
pub fn build_grid(data: &Dataset, selection: &AxisSelection) -> Result<SurfaceGrid> {
    let descriptor = ChartFamily::Surface.descriptor();
    check_bound(descriptor, selection)?;
    if data.is_empty() {
        return Err(ChartError::InsufficientAxes);
    }
    let axes = resolve_axes(descriptor, selection, data)?;
    let (Some(x_col), Some(y_col), Some(z_col)) = (
        axes.column(AxisRole::X),
        axes.column(AxisRole::Y),
        axes.column(AxisRole::Z),
    ) else {
        return Err(ChartError::InsufficientAxes);
    };

    let x_levels = distinct_levels(data, x_col);
    let y_levels = distinct_levels(data, y_col);
    if x_levels.is_empty() || y_levels.is_empty() {
        return Err(ChartError::InsufficientAxes);
    }

    debug!(
        records = data.len(),
        columns = x_levels.len(),
        rows = y_levels.len(),
        "building surface grid"
    );

    let mut grid = vec![vec![Scalar::Null; x_levels.len()]; y_levels.len()];
    for row in 0..data.len() {
        let (Ok(col_idx), Ok(row_idx)) = (
            level_index(&x_levels, data.cell(row, x_col)),
            level_index(&y_levels, data.cell(row, y_col)),
        ) else {
            continue;
        };
        let cell = &mut grid[row_idx][col_idx];
        if !cell.is_null() {
            trace!(row, x = %x_levels[col_idx], y = %y_levels[row_idx], "overwriting duplicate sample");
        }
        *cell = data.cell(row, z_col).clone();
    }

    Ok(SurfaceGrid {
        grid,
        x_levels,
        y_levels,
    })
}

fn distinct_levels(data: &Dataset, col: usize) -> Vec<Scalar> {
    let mut levels: Vec<Scalar> = (0..data.len()).map(|row| data.cell(row, col).clone()).collect();
    levels.sort_by(|a, b| a.level_cmp(b));
    levels.dedup_by(|a, b| a.level_cmp(b).is_eq());
    levels
}

fn level_index(levels: &[Scalar], value: &Scalar) -> std::result::Result<usize, usize> {
    levels.binary_search_by(|probe| probe.level_cmp(value))
}
