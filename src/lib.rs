// Library exports for sheetchart

pub mod csv_reader;
pub mod data;
pub mod error;
pub mod grid;
pub mod ir;
pub mod palette;
pub mod parser;
pub mod registry;
pub mod resolve;
pub mod runtime;
pub mod session;
pub mod telemetry;
pub mod title;
pub mod transform;

pub use data::{Dataset, Record, Scalar};
pub use error::{ChartError, Result};
pub use grid::build_grid;
pub use ir::{AxisSelection, ChartReadyData};
pub use palette::{discrete_colors, sequential_scale, Theme};
pub use registry::{describe, AxisRole, ChartDescriptor, ChartFamily, Dimension};
pub use runtime::{build_chart, ChartOutput};
pub use session::AnalysisSession;
pub use title::compose_title;
pub use transform::shape;

use serde::Deserialize;

/// Image formats the export collaborator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum ExportFormat {
    #[serde(rename = "png")]
    #[default]
    Png,
    #[serde(rename = "pdf")]
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// File name offered when a rendered chart is exported.
pub fn export_file_name(family: ChartFamily, format: ExportFormat) -> String {
    format!("chart-{}.{}", family.id(), format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(ChartFamily::HorizontalBar, ExportFormat::Png), "chart-horizontalBar.png");
        assert_eq!(export_file_name(ChartFamily::Surface, ExportFormat::Pdf), "chart-surface.pdf");
    }

    #[test]
    fn test_export_format_deserialize() {
        let f: ExportFormat = serde_json::from_str("\"pdf\"").unwrap();
        assert_eq!(f, ExportFormat::Pdf);
        assert_eq!(ExportFormat::default(), ExportFormat::Png);
    }
}
