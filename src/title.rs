use crate::ir::AxisSelection;
use crate::registry::{AxisRole, ChartFamily};

/// Display title for a chart, e.g. `"sales vs month (Line Chart)"`.
pub fn compose_title(family: ChartFamily, selection: &AxisSelection) -> String {
    let descriptor = family.descriptor();
    format!(
        "{} ({})",
        fill_template(descriptor.title_template, selection),
        descriptor.display_name
    )
}

/// Replace `{role}` placeholders with bound column names in one pass, so a
/// column name that itself looks like a placeholder is left alone. Unbound
/// roles become empty; unknown placeholders are kept verbatim.
pub fn fill_template(template: &str, selection: &AxisSelection) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let tag = &after[..close];
                match tag.parse::<AxisRole>() {
                    Ok(role) => out.push_str(selection.get(role).unwrap_or_default()),
                    Err(()) => {
                        out.push('{');
                        out.push_str(tag);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
