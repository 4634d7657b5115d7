//! Static catalog of chart families.
//!
//! Every family is one entry in [`REGISTRY`]: its dimension, the axis roles
//! it needs bound, how records are laid out for it, how it is colored and
//! which template its title uses. Registration order matters: it is the
//! order families are listed in, and the first family of a dimension is the
//! one selected when the dimension tab changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "2D")]
    #[default]
    TwoD,
    #[serde(rename = "3D")]
    ThreeD,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::TwoD => f.pad("2D"),
            Dimension::ThreeD => f.pad("3D"),
        }
    }
}

/// A named slot a chart family needs bound to a dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisRole {
    X,
    Y,
    Z,
    Label,
    Size,
    Categories,
}

impl AxisRole {
    pub const ALL: [AxisRole; 6] = [
        AxisRole::X,
        AxisRole::Y,
        AxisRole::Z,
        AxisRole::Label,
        AxisRole::Size,
        AxisRole::Categories,
    ];

    /// Tag used in title templates and request expressions.
    pub fn tag(self) -> &'static str {
        match self {
            AxisRole::X => "x",
            AxisRole::Y => "y",
            AxisRole::Z => "z",
            AxisRole::Label => "label",
            AxisRole::Size => "size",
            AxisRole::Categories => "categories",
        }
    }

    /// Name of the selector the host shows for this role.
    pub fn field_label(self) -> &'static str {
        match self {
            AxisRole::X => "X Axis",
            AxisRole::Y => "Y Axis",
            AxisRole::Z => "Z Axis",
            AxisRole::Label => "Label Field",
            AxisRole::Size => "Size Field",
            AxisRole::Categories => "Categories Field",
        }
    }
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for AxisRole {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AxisRole::ALL.into_iter().find(|r| r.tag() == s).ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartFamily {
    #[default]
    Line,
    Bar,
    HorizontalBar,
    Pie,
    Doughnut,
    Radar,
    Scatter,
    Bubble,
    Scatter3d,
    Surface,
    Mesh3d,
    Line3d,
}

impl ChartFamily {
    /// Wire id, as used by hosts and request expressions.
    pub fn id(self) -> &'static str {
        match self {
            ChartFamily::Line => "line",
            ChartFamily::Bar => "bar",
            ChartFamily::HorizontalBar => "horizontalBar",
            ChartFamily::Pie => "pie",
            ChartFamily::Doughnut => "doughnut",
            ChartFamily::Radar => "radar",
            ChartFamily::Scatter => "scatter",
            ChartFamily::Bubble => "bubble",
            ChartFamily::Scatter3d => "scatter3d",
            ChartFamily::Surface => "surface",
            ChartFamily::Mesh3d => "mesh3d",
            ChartFamily::Line3d => "line3d",
        }
    }

    pub fn descriptor(self) -> &'static ChartDescriptor {
        // Every variant has exactly one registry entry.
        REGISTRY
            .iter()
            .find(|d| d.family == self)
            .unwrap_or(&REGISTRY[0])
    }

    pub fn dimension(self) -> Dimension {
        self.descriptor().dimension
    }
}

impl fmt::Display for ChartFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ChartFamily {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        describe(s).map(|d| d.family)
    }
}

/// How a family arranges sorted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `labels` from `label_role`, one `data` series from `y`.
    Categorical { label_role: AxisRole },
    /// `{x, y}` or `{x, y, z}` points, passed through untouched.
    Points { with_z: bool },
    /// `{x, y, r}` points with `r` derived from the size column.
    Bubble,
    /// Dense `z` matrix over distinct `x`/`y` levels.
    Grid,
}

/// How a family is colored from the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coloring {
    /// Theme accent with a translucent fill; `fill_alpha` of `None` means
    /// the fill is the opaque accent.
    Accent { fill_alpha: Option<u8> },
    /// One generated color per label.
    Discrete,
    /// Backend colorscale keyed on `z`.
    Sequential,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDescriptor {
    pub family: ChartFamily,
    pub display_name: &'static str,
    pub dimension: Dimension,
    pub required_roles: &'static [AxisRole],
    pub layout: Layout,
    pub coloring: Coloring,
    /// Column records are ordered by before shaping; `None` keeps input order.
    pub sort_role: Option<AxisRole>,
    /// Dataset legend label; same placeholder rules as `title_template`.
    pub series_template: &'static str,
    /// `{role}` placeholders are replaced by the bound column names.
    pub title_template: &'static str,
    /// Axes the renderer labels with their bound column, in display order.
    pub axis_titles: &'static [AxisRole],
}

impl ChartDescriptor {
    pub fn requires(&self, role: AxisRole) -> bool {
        self.required_roles.contains(&role)
    }
}

const XY: &[AxisRole] = &[AxisRole::X, AxisRole::Y];
const XYZ: &[AxisRole] = &[AxisRole::X, AxisRole::Y, AxisRole::Z];

const TITLE_VS: &str = "{y} vs {x}";
const TITLE_3D: &str = "{z} vs {y} vs {x}";

pub static REGISTRY: [ChartDescriptor; 12] = [
    // 2D
    ChartDescriptor {
        family: ChartFamily::Line,
        display_name: "Line Chart",
        dimension: Dimension::TwoD,
        required_roles: XY,
        layout: Layout::Categorical { label_role: AxisRole::X },
        coloring: Coloring::Accent { fill_alpha: Some(0x66) },
        sort_role: Some(AxisRole::X),
        series_template: TITLE_VS,
        title_template: TITLE_VS,
        axis_titles: XY,
    },
    ChartDescriptor {
        family: ChartFamily::Bar,
        display_name: "Bar Chart",
        dimension: Dimension::TwoD,
        required_roles: XY,
        layout: Layout::Categorical { label_role: AxisRole::X },
        coloring: Coloring::Accent { fill_alpha: Some(0x66) },
        sort_role: Some(AxisRole::X),
        series_template: TITLE_VS,
        title_template: TITLE_VS,
        axis_titles: XY,
    },
    ChartDescriptor {
        family: ChartFamily::HorizontalBar,
        display_name: "Horizontal Bar Chart",
        dimension: Dimension::TwoD,
        required_roles: XY,
        layout: Layout::Categorical { label_role: AxisRole::X },
        coloring: Coloring::Accent { fill_alpha: Some(0x66) },
        sort_role: Some(AxisRole::X),
        series_template: TITLE_VS,
        title_template: TITLE_VS,
        axis_titles: XY,
    },
    ChartDescriptor {
        family: ChartFamily::Pie,
        display_name: "Pie Chart",
        dimension: Dimension::TwoD,
        required_roles: &[AxisRole::Y, AxisRole::Label],
        layout: Layout::Categorical { label_role: AxisRole::Label },
        coloring: Coloring::Discrete,
        sort_role: Some(AxisRole::Label),
        series_template: "{y}",
        title_template: "{y} by {label}",
        axis_titles: &[],
    },
    ChartDescriptor {
        family: ChartFamily::Doughnut,
        display_name: "Doughnut Chart",
        dimension: Dimension::TwoD,
        required_roles: &[AxisRole::Y, AxisRole::Label],
        layout: Layout::Categorical { label_role: AxisRole::Label },
        coloring: Coloring::Discrete,
        sort_role: Some(AxisRole::Label),
        series_template: "{y}",
        title_template: "{y} by {label}",
        axis_titles: &[],
    },
    ChartDescriptor {
        family: ChartFamily::Radar,
        display_name: "Radar Chart",
        dimension: Dimension::TwoD,
        required_roles: &[AxisRole::Y, AxisRole::Categories],
        layout: Layout::Categorical { label_role: AxisRole::Categories },
        coloring: Coloring::Accent { fill_alpha: Some(0x33) },
        sort_role: Some(AxisRole::Categories),
        series_template: "{y}",
        title_template: "{y} by {categories}",
        axis_titles: &[],
    },
    ChartDescriptor {
        family: ChartFamily::Scatter,
        display_name: "Scatter Plot",
        dimension: Dimension::TwoD,
        required_roles: XY,
        layout: Layout::Points { with_z: false },
        coloring: Coloring::Accent { fill_alpha: None },
        sort_role: Some(AxisRole::X),
        series_template: TITLE_VS,
        title_template: TITLE_VS,
        axis_titles: XY,
    },
    ChartDescriptor {
        family: ChartFamily::Bubble,
        display_name: "Bubble Chart",
        dimension: Dimension::TwoD,
        required_roles: &[AxisRole::X, AxisRole::Y, AxisRole::Size],
        layout: Layout::Bubble,
        coloring: Coloring::Accent { fill_alpha: Some(0x80) },
        sort_role: Some(AxisRole::X),
        series_template: TITLE_VS,
        title_template: "{y} vs {x} with {size}",
        axis_titles: XY,
    },
    // 3D
    ChartDescriptor {
        family: ChartFamily::Scatter3d,
        display_name: "3D Scatter Plot",
        dimension: Dimension::ThreeD,
        required_roles: XYZ,
        layout: Layout::Points { with_z: true },
        coloring: Coloring::Sequential,
        sort_role: Some(AxisRole::X),
        series_template: "{z}",
        title_template: TITLE_3D,
        axis_titles: XYZ,
    },
    ChartDescriptor {
        family: ChartFamily::Surface,
        display_name: "3D Surface Plot",
        dimension: Dimension::ThreeD,
        required_roles: XYZ,
        layout: Layout::Grid,
        coloring: Coloring::Sequential,
        sort_role: None,
        series_template: "{z}",
        title_template: TITLE_3D,
        axis_titles: XYZ,
    },
    ChartDescriptor {
        family: ChartFamily::Mesh3d,
        display_name: "3D Mesh Plot",
        dimension: Dimension::ThreeD,
        required_roles: XYZ,
        layout: Layout::Points { with_z: true },
        coloring: Coloring::Sequential,
        sort_role: Some(AxisRole::X),
        series_template: "{z}",
        title_template: TITLE_3D,
        axis_titles: XYZ,
    },
    ChartDescriptor {
        family: ChartFamily::Line3d,
        display_name: "3D Line Plot",
        dimension: Dimension::ThreeD,
        required_roles: XYZ,
        layout: Layout::Points { with_z: true },
        coloring: Coloring::Sequential,
        sort_role: Some(AxisRole::X),
        series_template: "{z}",
        title_template: TITLE_3D,
        axis_titles: XYZ,
    },
];

/// Look up a family by its wire id.
pub fn describe(family_id: &str) -> Result<&'static ChartDescriptor> {
    REGISTRY
        .iter()
        .find(|d| d.family.id() == family_id)
        .ok_or_else(|| ChartError::UnknownFamily(family_id.to_string()))
}

/// Families of one dimension, in registration order.
pub fn families_for(dimension: Dimension) -> impl Iterator<Item = ChartFamily> {
    REGISTRY
        .iter()
        .filter(move |d| d.dimension == dimension)
        .map(|d| d.family)
}

/// Family selected when the user switches to `dimension`.
pub fn default_family(dimension: Dimension) -> ChartFamily {
    families_for(dimension).next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_registered_once() {
        for d in &REGISTRY {
            let count = REGISTRY.iter().filter(|o| o.family == d.family).count();
            assert_eq!(count, 1, "{} registered {} times", d.family, count);
            assert_eq!(d.family.descriptor().family, d.family);
        }
    }

    #[test]
    fn test_describe_known_and_unknown() {
        let d = describe("horizontalBar").unwrap();
        assert_eq!(d.family, ChartFamily::HorizontalBar);
        assert_eq!(d.display_name, "Horizontal Bar Chart");

        assert_eq!(
            describe("histogram"),
            Err(ChartError::UnknownFamily("histogram".to_string()))
        );
        // ids are case sensitive
        assert!(describe("Line").is_err());
    }

    #[test]
    fn test_dimension_partition() {
        let two_d: Vec<_> = families_for(Dimension::TwoD).collect();
        assert_eq!(two_d.len(), 8);
        let three_d: Vec<_> = families_for(Dimension::ThreeD).collect();
        assert_eq!(
            three_d,
            vec![
                ChartFamily::Scatter3d,
                ChartFamily::Surface,
                ChartFamily::Mesh3d,
                ChartFamily::Line3d
            ]
        );
    }

    #[test]
    fn test_default_family_is_first_registered() {
        assert_eq!(default_family(Dimension::TwoD), ChartFamily::Line);
        assert_eq!(default_family(Dimension::ThreeD), ChartFamily::Scatter3d);
    }

    #[test]
    fn test_required_roles() {
        assert_eq!(ChartFamily::Pie.descriptor().required_roles, &[AxisRole::Y, AxisRole::Label]);
        assert!(ChartFamily::Bubble.descriptor().requires(AxisRole::Size));
        assert!(ChartFamily::Radar.descriptor().requires(AxisRole::Categories));
        assert!(!ChartFamily::Radar.descriptor().requires(AxisRole::X));
        for f in families_for(Dimension::ThreeD) {
            assert_eq!(f.descriptor().required_roles, XYZ);
        }
    }

    #[test]
    fn test_axis_titles() {
        assert_eq!(ChartFamily::Bubble.descriptor().axis_titles, XY);
        assert_eq!(ChartFamily::Surface.descriptor().axis_titles, XYZ);
        for f in [ChartFamily::Pie, ChartFamily::Doughnut, ChartFamily::Radar] {
            assert!(f.descriptor().axis_titles.is_empty(), "{}", f);
        }
    }

    #[test]
    fn test_dimension_display_pads() {
        assert_eq!(format!("{:<4}|", Dimension::TwoD), "2D  |");
        assert_eq!(format!("{:>3}", Dimension::ThreeD), " 3D");
    }

    #[test]
    fn test_family_serde_uses_wire_ids() {
        let json = serde_json::to_string(&ChartFamily::HorizontalBar).unwrap();
        assert_eq!(json, "\"horizontalBar\"");
        let fam: ChartFamily = serde_json::from_str("\"scatter3d\"").unwrap();
        assert_eq!(fam, ChartFamily::Scatter3d);
        for d in &REGISTRY {
            let json = serde_json::to_string(&d.family).unwrap();
            assert_eq!(json, format!("\"{}\"", d.family.id()));
        }
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("categories".parse::<AxisRole>(), Ok(AxisRole::Categories));
        assert!("color".parse::<AxisRole>().is_err());
    }
}
