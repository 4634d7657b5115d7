// Runtime executor for chart requests

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::data::Dataset;
use crate::error::Result;
use crate::ir::{AxisSelection, ChartReadyData};
use crate::palette::Theme;
use crate::parser::ChartRequest;
use crate::registry::{describe, AxisRole, ChartFamily, Dimension};
use crate::session::AnalysisSession;
use crate::title::compose_title;
use crate::transform::shape;

/// Everything a rendering backend needs for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOutput {
    pub family: ChartFamily,
    pub dimension: Dimension,
    pub title: String,
    /// Axis label per titled role; empty for pie, doughnut and radar.
    pub axis_titles: BTreeMap<AxisRole, String>,
    pub data: ChartReadyData,
}

/// Shape `data` for the session's family and attach its title.
pub fn build_chart(session: &AnalysisSession, data: &Dataset) -> Result<ChartOutput> {
    debug!(family = %session.family, records = data.len(), "building chart");

    let shaped = shape(data, &session.selection, session.family, session.theme)?;
    Ok(ChartOutput {
        family: session.family,
        dimension: session.family.dimension(),
        title: compose_title(session.family, &session.selection),
        axis_titles: axis_titles(session.family, &session.selection),
        data: shaped,
    })
}

fn axis_titles(family: ChartFamily, selection: &AxisSelection) -> BTreeMap<AxisRole, String> {
    family
        .descriptor()
        .axis_titles
        .iter()
        .filter_map(|&role| selection.get(role).map(|column| (role, column.to_string())))
        .collect()
}

/// Turn a parsed request into a session. Roles the request does not bind
/// keep the bindings of `base`.
pub fn session_from_request(request: &ChartRequest, base: AnalysisSession) -> Result<AnalysisSession> {
    let family = describe(&request.family)?.family;

    let mut session = base;
    session.select_family(family);
    for (role, column) in &request.bindings {
        session.selection.set(*role, column.clone());
    }
    if let Some(name) = &request.theme {
        session.theme = Theme::from_name(name);
    }
    Ok(session)
}
