use serde::{Deserialize, Serialize};

use crate::data::Scalar;
use crate::palette::{Colorscale, Hsla};
use crate::registry::AxisRole;

// =============================================================================
// Input: axis bindings
// =============================================================================

/// Column bound to each axis role. Empty names count as unbound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSelection {
    pub x: Option<String>,
    pub y: Option<String>,
    pub z: Option<String>,
    pub label: Option<String>,
    pub size: Option<String>,
    pub categories: Option<String>,
}

impl AxisSelection {
    /// Initial bindings for a freshly loaded dataset: first column on x,
    /// second on y, and with three or more columns the third on z and size
    /// while the first also feeds label and categories.
    pub fn seeded(headers: &[String]) -> Self {
        let mut sel = AxisSelection {
            x: headers.first().cloned(),
            y: headers.get(1).cloned(),
            ..Default::default()
        };
        if headers.len() > 2 {
            sel.z = headers.get(2).cloned();
            sel.size = headers.get(2).cloned();
            sel.label = headers.first().cloned();
            sel.categories = headers.first().cloned();
        }
        sel
    }

    fn slot(&self, role: AxisRole) -> &Option<String> {
        match role {
            AxisRole::X => &self.x,
            AxisRole::Y => &self.y,
            AxisRole::Z => &self.z,
            AxisRole::Label => &self.label,
            AxisRole::Size => &self.size,
            AxisRole::Categories => &self.categories,
        }
    }

    fn slot_mut(&mut self, role: AxisRole) -> &mut Option<String> {
        match role {
            AxisRole::X => &mut self.x,
            AxisRole::Y => &mut self.y,
            AxisRole::Z => &mut self.z,
            AxisRole::Label => &mut self.label,
            AxisRole::Size => &mut self.size,
            AxisRole::Categories => &mut self.categories,
        }
    }

    pub fn get(&self, role: AxisRole) -> Option<&str> {
        self.slot(role).as_deref().filter(|c| !c.is_empty())
    }

    pub fn set(&mut self, role: AxisRole, column: impl Into<String>) {
        *self.slot_mut(role) = Some(column.into());
    }

    pub fn clear(&mut self, role: AxisRole) {
        *self.slot_mut(role) = None;
    }

    pub fn with(mut self, role: AxisRole, column: impl Into<String>) -> Self {
        self.set(role, column);
        self
    }
}

// =============================================================================
// Output: renderer-ready data
// =============================================================================

/// Shaped chart data, one variant per layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChartReadyData {
    Categorical(CategoricalData),
    Coordinate(CoordinateData),
    Grid(GridData),
}

impl ChartReadyData {
    /// Labels, points or grid cells, depending on the variant.
    pub fn element_count(&self) -> usize {
        match self {
            ChartReadyData::Categorical(c) => c.labels.len(),
            ChartReadyData::Coordinate(c) => c.points.len(),
            ChartReadyData::Grid(g) => g.surface.cell_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoricalData {
    pub labels: Vec<Scalar>,
    pub data: Vec<Scalar>,
    pub series_label: String,
    pub colors: ColorSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateData {
    pub points: Vec<Point>,
    pub series_label: String,
    pub colors: ColorSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: Scalar,
    pub y: Scalar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<Scalar>,
    /// Bubble radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<Scalar>,
}

/// Dense `z` matrix: `grid[row][col]` holds the value at
/// `(x_levels[col], y_levels[row])`, null where no sample exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceGrid {
    pub grid: Vec<Vec<Scalar>>,
    pub x_levels: Vec<Scalar>,
    pub y_levels: Vec<Scalar>,
}

impl SurfaceGrid {
    pub fn cell_count(&self) -> usize {
        self.grid.iter().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridData {
    #[serde(flatten)]
    pub surface: SurfaceGrid,
    pub colorscale: Colorscale,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ColorSpec {
    /// Single theme color: `color` for strokes, `fill` for areas and markers.
    Accent { color: String, fill: String },
    /// One color per label.
    Discrete { colors: Vec<Hsla> },
    Sequential { colorscale: Colorscale },
}
