use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_while1},
    character::complete::{alpha1, alphanumeric1, char, multispace0},
    combinator::{map, opt, recognize},
    multi::many0,
    sequence::{delimited, pair},
    IResult,
};

/// Wrap a parser so it skips surrounding whitespace.
pub fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn identifier(input: &str) -> IResult<&str, String> {
    map(
        recognize(pair(
            alt((alpha1, tag("_"))),
            many0(alt((alphanumeric1, tag("_")))),
        )),
        String::from,
    )(input)
}

/// Double-quoted string without escapes; `""` is allowed.
pub fn string_literal(input: &str) -> IResult<&str, String> {
    map(
        delimited(char('"'), opt(is_not("\"")), char('"')),
        |s: Option<&str>| s.unwrap_or_default().to_string(),
    )(input)
}

/// A column reference: a quoted string, or a bare name that may also
/// contain `-` and `.`.
pub fn column_name(input: &str) -> IResult<&str, String> {
    alt((
        string_literal,
        map(
            take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-' || c == '.'),
            String::from,
        ),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier() {
        assert_eq!(identifier("scatter3d(").unwrap(), ("(", "scatter3d".to_string()));
        assert!(identifier("3d").is_err());
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(
            string_literal(r#""Total Sales" rest"#).unwrap(),
            (" rest", "Total Sales".to_string())
        );
        assert_eq!(string_literal(r#""""#).unwrap(), ("", String::new()));
    }

    #[test]
    fn test_column_name() {
        assert_eq!(column_name("unit.price)").unwrap(), (")", "unit.price".to_string()));
        assert_eq!(column_name(r#""a b","#).unwrap(), (",", "a b".to_string()));
    }

    #[test]
    fn test_ws() {
        let mut p = ws(identifier);
        assert_eq!(p("  line  |").unwrap(), ("|", "line".to_string()));
    }
}
