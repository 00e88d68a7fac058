use tracing::trace;

use crate::domain::FalsyOrLiteral;

/// Whitespace as trimmed by ECMAScript: Unicode White_Space plus the BOM.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Check if a value is falsy or a whitespace-only string, ignoring the number 0.
///
/// ```
/// use valkit::is_falsy_or_spaces;
///
/// assert!(!is_falsy_or_spaces(0));
/// assert!(is_falsy_or_spaces("   "));
/// assert!(!is_falsy_or_spaces("x"));
/// ```
pub fn is_falsy_or_spaces(value: impl Into<FalsyOrLiteral>) -> bool {
    let value = value.into();
    let result = match &value {
        FalsyOrLiteral::Number(n) if *n == 0.0 => false,
        FalsyOrLiteral::String(s) => s.trim_matches(is_space).is_empty(),
        other => other.is_falsy(),
    };
    trace!(kind = value.kind(), result, "is_falsy_or_spaces");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FalsyOrLiteral::Number(0.0), false)]
    #[case(FalsyOrLiteral::Number(-0.0), false)]
    #[case(FalsyOrLiteral::Number(f64::NAN), true)]
    #[case(FalsyOrLiteral::Number(1.5), false)]
    #[case(FalsyOrLiteral::String(String::new()), true)]
    #[case(FalsyOrLiteral::String(" \t\n ".into()), true)]
    #[case(FalsyOrLiteral::String(" x ".into()), false)]
    #[case(FalsyOrLiteral::String("\u{FEFF}".into()), true)]
    #[case(FalsyOrLiteral::String("\u{FEFF} \u{00A0}\u{2028}".into()), true)]
    #[case(FalsyOrLiteral::String("\u{FEFF}x".into()), false)]
    #[case(FalsyOrLiteral::Undefined, true)]
    #[case(FalsyOrLiteral::Null, true)]
    #[case(FalsyOrLiteral::Bool(false), true)]
    #[case(FalsyOrLiteral::Bool(true), false)]
    #[case(FalsyOrLiteral::Symbol(String::new()), false)]
    fn given_literal_when_checking_falsy_or_spaces_then_matches(
        #[case] value: FalsyOrLiteral,
        #[case] expected: bool,
    ) {
        assert_eq!(is_falsy_or_spaces(value), expected);
    }
}
