use std::cmp::Ordering;

use tracing::debug;

use crate::data::{Dataset, Scalar};
use crate::error::Result;
use crate::grid::build_grid;
use crate::ir::{
    AxisSelection, CategoricalData, ChartReadyData, ColorSpec, CoordinateData, GridData, Point,
};
use crate::palette::{discrete_colors, sequential_scale, Theme};
use crate::registry::{AxisRole, ChartFamily, Coloring, Layout};
use crate::resolve::{resolve_axes, ResolvedAxes};
use crate::title::fill_template;

/// Bubble radius is the size column divided by this. No clamping.
pub const BUBBLE_RADIUS_SCALE: f64 = 5.0;

/// Main entry point: shape a dataset into the renderer-ready form of
/// `family`, colored from `theme`.
///
/// Records are stably sorted by the family's sort column first. Categorical
/// and coordinate outputs keep one element per record; nothing is merged,
/// coerced or filtered.
pub fn shape(
    data: &Dataset,
    selection: &AxisSelection,
    family: ChartFamily,
    theme: Theme,
) -> Result<ChartReadyData> {
    let descriptor = family.descriptor();
    let axes = resolve_axes(descriptor, selection, data)?;

    debug!(family = %family, records = data.len(), theme = %theme, "shaping dataset");

    let order = match descriptor.sort_role.and_then(|role| axes.column(role)) {
        Some(col) => sorted_order(data, col),
        None => (0..data.len()).collect(),
    };
    let series_label = fill_template(descriptor.series_template, selection);

    let shaped = match descriptor.layout {
        Layout::Categorical { label_role } => {
            let labels = column_values(data, &order, &axes, label_role);
            let values = column_values(data, &order, &axes, AxisRole::Y);
            let colors = color_spec(descriptor.coloring, theme, labels.len());
            ChartReadyData::Categorical(CategoricalData {
                labels,
                data: values,
                series_label,
                colors,
            })
        }
        Layout::Points { with_z } => {
            let points = order
                .iter()
                .map(|&row| Point {
                    x: cell(data, &axes, row, AxisRole::X),
                    y: cell(data, &axes, row, AxisRole::Y),
                    z: with_z.then(|| cell(data, &axes, row, AxisRole::Z)),
                    r: None,
                })
                .collect();
            ChartReadyData::Coordinate(CoordinateData {
                points,
                series_label,
                colors: color_spec(descriptor.coloring, theme, order.len()),
            })
        }
        Layout::Bubble => {
            let points = order
                .iter()
                .map(|&row| Point {
                    x: cell(data, &axes, row, AxisRole::X),
                    y: cell(data, &axes, row, AxisRole::Y),
                    z: None,
                    r: Some(bubble_radius(&cell(data, &axes, row, AxisRole::Size))),
                })
                .collect();
            ChartReadyData::Coordinate(CoordinateData {
                points,
                series_label,
                colors: color_spec(descriptor.coloring, theme, order.len()),
            })
        }
        Layout::Grid => ChartReadyData::Grid(GridData {
            surface: build_grid(data, selection)?,
            colorscale: sequential_scale(theme),
        }),
    };

    Ok(shaped)
}

/// Colors for a family's coloring rule; `n` sizes discrete palettes.
pub fn color_spec(coloring: Coloring, theme: Theme, n: usize) -> ColorSpec {
    match coloring {
        Coloring::Accent { fill_alpha } => {
            let accent = theme.accent();
            let fill = fill_alpha.map_or(accent, |a| accent.with_alpha(a));
            ColorSpec::Accent {
                color: accent.to_hex(),
                fill: fill.to_hex(),
            }
        }
        Coloring::Discrete => ColorSpec::Discrete {
            colors: discrete_colors(theme, n),
        },
        Coloring::Sequential => ColorSpec::Sequential {
            colorscale: sequential_scale(theme),
        },
    }
}

fn bubble_radius(size: &Scalar) -> Scalar {
    size.as_number()
        .map(|s| Scalar::Number(s / BUBBLE_RADIUS_SCALE))
        .unwrap_or(Scalar::Null)
}

fn cell(data: &Dataset, axes: &ResolvedAxes, row: usize, role: AxisRole) -> Scalar {
    axes.column(role)
        .map(|col| data.cell(row, col).clone())
        .unwrap_or(Scalar::Null)
}

fn column_values(data: &Dataset, order: &[usize], axes: &ResolvedAxes, role: AxisRole) -> Vec<Scalar> {
    order.iter().map(|&row| cell(data, axes, row, role)).collect()
}

/// Record indices stably ordered by the key column.
fn sorted_order(data: &Dataset, col: usize) -> Vec<usize> {
    stable_order_by(data.len(), |a, b| data.cell(a, col).key_cmp(data.cell(b, col)))
}

/// Bottom-up merge sort of `0..len`. Equal elements keep their input order,
/// and a comparator that is not a total order yields some permutation
/// instead of a panic.
fn stable_order_by<F>(len: usize, mut cmp: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut order: Vec<usize> = (0..len).collect();
    let mut buf = order.clone();
    let mut width = 1;

    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut i, mut j, mut k) = (start, mid, start);

            while i < mid && j < end {
                // take from the right run only when strictly smaller
                if cmp(order[j], order[i]) == Ordering::Less {
                    buf[k] = order[j];
                    j += 1;
                } else {
                    buf[k] = order[i];
                    i += 1;
                }
                k += 1;
            }
            buf[k..k + (mid - i)].copy_from_slice(&order[i..mid]);
            k += mid - i;
            buf[k..end].copy_from_slice(&order[j..end]);

            start = end;
        }
        std::mem::swap(&mut order, &mut buf);
        width *= 2;
    }

    order
}
