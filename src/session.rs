use serde::{Deserialize, Serialize};

use crate::ir::AxisSelection;
use crate::palette::Theme;
use crate::registry::{default_family, ChartFamily, Dimension};

/// Everything the user has picked for one chart. Passed by value to the
/// pipeline; changing any field means recomputing from scratch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSession {
    pub family: ChartFamily,
    pub dimension: Dimension,
    pub theme: Theme,
    pub selection: AxisSelection,
}

impl AnalysisSession {
    pub fn new(family: ChartFamily, theme: Theme, selection: AxisSelection) -> Self {
        Self {
            family,
            dimension: family.dimension(),
            theme,
            selection,
        }
    }

    /// Session for a freshly loaded dataset, with axes seeded from its
    /// headers.
    pub fn for_headers(headers: &[String]) -> Self {
        Self {
            selection: AxisSelection::seeded(headers),
            ..Default::default()
        }
    }

    /// Switch the dimension tab; the family resets to the first one
    /// registered for that dimension.
    pub fn switch_dimension(&mut self, dimension: Dimension) {
        self.dimension = dimension;
        self.family = default_family(dimension);
    }

    /// Pick a family; the dimension tab follows it.
    pub fn select_family(&mut self, family: ChartFamily) {
        self.family = family;
        self.dimension = family.dimension();
    }

    /// Bring a deserialized session back in line when its dimension tab
    /// disagrees with its family. The family wins.
    pub fn normalized(mut self) -> Self {
        self.dimension = self.family.dimension();
        self
    }
}
