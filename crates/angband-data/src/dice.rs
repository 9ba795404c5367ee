//! Grammars for the composite field formats: random values, `N to M`
//! ranges and `NAME[arg]` value tokens.

use angband_types::Random;
use winnow::ascii::digit1;
use winnow::combinator::{delimited, fail, opt, preceded, separated_pair};
use winnow::prelude::*;
use winnow::token::take_till;

fn number(input: &mut &str) -> ModalResult<i32> {
    digit1.parse_to().parse_next(input)
}

fn signed(input: &mut &str) -> ModalResult<i32> {
    (opt('-'), number)
        .map(|(neg, n)| if neg.is_some() { -n } else { n })
        .parse_next(input)
}

/// One of `b+NdSMm`, `b+dSMm`, `b+Mm`, `b+NdS`, `b+dS`, `NdSMm`, `dSMm`, `Mm`,
/// `NdS`, `dS` or `b`, optionally preceded by `-`.
fn random(input: &mut &str) -> ModalResult<Random> {
    let sign = if opt('-').parse_next(input)?.is_some() { -1 } else { 1 };
    let lead = opt(number).parse_next(input)?;

    let (base, count) = if opt('+').parse_next(input)?.is_some() {
        match lead {
            Some(base) => (base, opt(number).parse_next(input)?),
            None => return fail(input),
        }
    } else if input.starts_with(['d', 'M']) {
        (0, lead)
    } else {
        return match lead {
            Some(base) => Ok(Random::fixed(sign * base)),
            None => fail(input),
        };
    };

    let sides = opt(preceded('d', number)).parse_next(input)?;
    let m_bonus = opt(preceded('M', number)).parse_next(input)?;
    let dice = match (count, sides) {
        (_, Some(_)) => count.unwrap_or(1),
        (None, None) if m_bonus.is_some() => 0,
        _ => return fail(input),
    };

    Ok(Random::new(
        sign * base,
        sign * dice,
        sides.unwrap_or(0),
        sign * m_bonus.unwrap_or(0),
    ))
}

fn range(input: &mut &str) -> ModalResult<(i32, i32)> {
    separated_pair(signed, " to ", signed).parse_next(input)
}

fn value_token<'s>(input: &mut &'s str) -> ModalResult<(&'s str, &'s str)> {
    (
        take_till(1.., '['),
        delimited('[', take_till(1.., ']'), ']'),
    )
        .parse_next(input)
}

/// Parse a whole field as a random value.
pub fn parse_random(text: &str) -> Option<Random> {
    random.parse(text).ok()
}

/// Parse `"min to max"`.
pub fn parse_range(text: &str) -> Option<(i32, i32)> {
    range.parse(text.trim()).ok()
}

/// Split `NAME[arg]` into its name and argument.
pub fn parse_value_token(text: &str) -> Option<(&str, &str)> {
    value_token.parse(text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_base() {
        assert_eq!(parse_random("7"), Some(Random::fixed(7)));
        assert_eq!(parse_random("-3"), Some(Random::fixed(-3)));
    }

    #[test]
    fn dice_forms() {
        assert_eq!(parse_random("2d3"), Some(Random::new(0, 2, 3, 0)));
        assert_eq!(parse_random("d8"), Some(Random::new(0, 1, 8, 0)));
        assert_eq!(parse_random("3d4M10"), Some(Random::new(0, 3, 4, 10)));
        assert_eq!(parse_random("d4M10"), Some(Random::new(0, 1, 4, 10)));
        assert_eq!(parse_random("M5"), Some(Random::new(0, 0, 0, 5)));
    }

    #[test]
    fn based_forms() {
        assert_eq!(parse_random("5+2d10M50"), Some(Random::new(5, 2, 10, 50)));
        assert_eq!(parse_random("5+d10M50"), Some(Random::new(5, 1, 10, 50)));
        assert_eq!(parse_random("5+M50"), Some(Random::new(5, 0, 0, 50)));
        assert_eq!(parse_random("5+2d10"), Some(Random::new(5, 2, 10, 0)));
        assert_eq!(parse_random("5+d10"), Some(Random::new(5, 1, 10, 0)));
    }

    #[test]
    fn negative_values() {
        assert_eq!(parse_random("-1d4"), Some(Random::new(0, -1, 4, 0)));
        assert_eq!(parse_random("-2+1d4M3"), Some(Random::new(-2, -1, 4, -3)));
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "1d6+1d10", "5+", "+3", "d", "2d", "5M3", "abc", "2d3x", "5+7"] {
            assert_eq!(parse_random(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn ranges() {
        assert_eq!(parse_range("5 to 10"), Some((5, 10)));
        assert_eq!(parse_range("0 to 100"), Some((0, 100)));
        assert_eq!(parse_range("5 to 300"), Some((5, 300)));
        assert_eq!(parse_range("5-10"), None);
        assert_eq!(parse_range("5 to"), None);
    }

    #[test]
    fn value_tokens() {
        assert_eq!(parse_value_token("STR[2]"), Some(("STR", "2")));
        assert_eq!(parse_value_token("SPEED[d4M5]"), Some(("SPEED", "d4M5")));
        assert_eq!(parse_value_token("SLAY_ORC[3]"), Some(("SLAY_ORC", "3")));
        assert_eq!(parse_value_token("STR"), None);
        assert_eq!(parse_value_token("STR[]"), None);
        assert_eq!(parse_value_token("STR[2]x"), None);
    }
}
