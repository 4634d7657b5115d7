use crate::data::Dataset;
use crate::error::{ChartError, Result};
use crate::ir::AxisSelection;
use crate::registry::{AxisRole, ChartDescriptor};

/// Required roles resolved to dataset column indices.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAxes {
    columns: Vec<(AxisRole, usize)>,
}

impl ResolvedAxes {
    /// Column index for `role`. Only roles the descriptor requires are
    /// resolved.
    pub fn column(&self, role: AxisRole) -> Option<usize> {
        self.columns
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, idx)| *idx)
    }
}

/// Check that every required role is bound, without looking at the data.
pub fn check_bound(descriptor: &ChartDescriptor, selection: &AxisSelection) -> Result<()> {
    for &role in descriptor.required_roles {
        if selection.get(role).is_none() {
            return Err(ChartError::MissingAxis { role, column: None });
        }
    }
    Ok(())
}

/// Resolve a selection against the dataset header set.
///
/// Unbound roles are reported before an empty dataset, and an empty dataset
/// before a bound column that does not exist.
pub fn resolve_axes(
    descriptor: &ChartDescriptor,
    selection: &AxisSelection,
    data: &Dataset,
) -> Result<ResolvedAxes> {
    check_bound(descriptor, selection)?;

    if data.is_empty() {
        return Err(ChartError::EmptyDataset);
    }

    let mut columns = Vec::with_capacity(descriptor.required_roles.len());
    for &role in descriptor.required_roles {
        // bound, checked above
        let name = selection.get(role).unwrap_or_default();
        let idx = data.column_index(name).ok_or_else(|| ChartError::MissingAxis {
            role,
            column: Some(name.to_string()),
        })?;
        columns.push((role, idx));
    }

    Ok(ResolvedAxes { columns })
}
