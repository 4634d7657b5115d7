// Chart request expression parser

pub mod ast;
pub mod lexer;
pub mod pipeline;

// Public API re-exports
pub use ast::ChartRequest;
pub use pipeline::parse_chart_request;
