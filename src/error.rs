use thiserror::Error;

use crate::registry::AxisRole;

pub type Result<T> = std::result::Result<T, ChartError>;

/// Validation failures raised while turning a dataset into chart data.
///
/// None of these are retryable: they are deterministic functions of the
/// dataset, selection and family, and the host is expected to withhold
/// rendering until the caller fixes the input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("unknown chart type '{0}'")]
    UnknownFamily(String),

    /// `column` is `None` when the role is unbound, `Some` when it names a
    /// column the dataset does not have.
    #[error("select a column for {}{}", field_label(.role), missing_column_suffix(.column))]
    MissingAxis {
        role: AxisRole,
        column: Option<String>,
    },

    #[error("dataset has no records")]
    EmptyDataset,

    #[error("surface plot needs at least one x and one y value")]
    InsufficientAxes,

    #[error("invalid input data: {0}")]
    InvalidInput(String),
}

fn field_label(role: &AxisRole) -> &'static str {
    role.field_label()
}

fn missing_column_suffix(column: &Option<String>) -> String {
    match column {
        Some(c) => format!(" ('{}' not found)", c),
        None => String::new(),
    }
}
