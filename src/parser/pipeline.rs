// Pipeline parser for chart request expressions

use super::ast::{ChartRequest, Component};
use super::lexer::{column_name, identifier, ws};
use crate::registry::AxisRole;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::value,
    multi::{many0, separated_list0},
    sequence::{preceded, separated_pair},
    IResult,
};

/// Parse a role tag. Longer tags first so none is shadowed.
fn parse_role(input: &str) -> IResult<&str, AxisRole> {
    alt((
        value(AxisRole::Categories, tag("categories")),
        value(AxisRole::Label, tag("label")),
        value(AxisRole::Size, tag("size")),
        value(AxisRole::X, tag("x")),
        value(AxisRole::Y, tag("y")),
        value(AxisRole::Z, tag("z")),
    ))(input)
}

/// `role: column`
fn parse_binding(input: &str) -> IResult<&str, (AxisRole, String)> {
    separated_pair(ws(parse_role), char(':'), ws(column_name))(input)
}

/// `family(role: column, ...)`
fn parse_family_call(input: &str) -> IResult<&str, (String, Vec<(AxisRole, String)>)> {
    let (input, family) = ws(identifier)(input)?;
    let (input, _) = ws(char('('))(input)?;
    let (input, bindings) = separated_list0(ws(char(',')), parse_binding)(input)?;
    let (input, _) = ws(char(')'))(input)?;
    Ok((input, (family, bindings)))
}

/// `theme(name)`, the name bare or quoted.
fn parse_theme(input: &str) -> IResult<&str, Component> {
    let (input, _) = ws(tag("theme"))(input)?;
    let (input, _) = ws(char('('))(input)?;
    let (input, name) = ws(column_name)(input)?;
    let (input, _) = ws(char(')'))(input)?;
    Ok((input, Component::Theme(name)))
}

fn parse_component(input: &str) -> IResult<&str, Component> {
    // only one stage kind so far
    parse_theme(input)
}

/// Parse a complete chart request
/// Format: family(role: column, ...) | component | ...
///
/// Whatever follows the last recognised component is returned unconsumed.
pub fn parse_chart_request(input: &str) -> IResult<&str, ChartRequest> {
    let (input, (family, bindings)) = parse_family_call(input)?;
    let (input, components) = many0(preceded(ws(char('|')), parse_component))(input)?;

    let mut request = ChartRequest {
        family,
        bindings,
        theme: None,
    };
    for component in components {
        match component {
            Component::Theme(name) => request.theme = Some(name),
        }
    }

    Ok((input, request))
}
