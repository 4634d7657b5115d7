// Abstract Syntax Tree for chart request expressions

use crate::registry::AxisRole;

/// A parsed request such as `pie(y: sales, label: region) | theme(blue)`.
///
/// Names are kept as written; the family id and theme name are only
/// resolved when the request becomes a session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartRequest {
    pub family: String,
    pub bindings: Vec<(AxisRole, String)>,
    pub theme: Option<String>,
}

/// Pipeline stages after the family call.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Theme(String),
}
