//! Randomized string-conversion helpers.
//!
//! Each helper draws one element from the supplied pool and then applies
//! a base-10 or double-quoting conversion, wrapping any conversion
//! failure with the operation's name.

use randpick_core::error::RandomError;
use randpick_core::source::RandomSource;

use crate::choice::choice;

/// Draws one string from `pool` and parses it as a base-10 integer.
///
/// # Errors
///
/// Returns [`RandomError::EmptyPool`] if `pool` is empty, or
/// [`RandomError::ParseInt`] if the drawn string is not a valid base-10
/// integer.
pub fn parse_integer<S: AsRef<str>>(
    pool: &[S],
    source: &mut dyn RandomSource,
) -> Result<i64, RandomError> {
    const OP: &str = "parse_integer";
    let drawn = pick(OP, pool, source)?.as_ref();
    drawn
        .parse()
        .map_err(|source| RandomError::ParseInt { op: OP, source })
}

/// Draws one integer from `pool` and formats it as a base-10 string.
///
/// # Errors
///
/// Returns [`RandomError::EmptyPool`] if `pool` is empty.
pub fn format_integer(
    pool: &[i64],
    source: &mut dyn RandomSource,
) -> Result<String, RandomError> {
    let drawn = pick("format_integer", pool, source)?;
    Ok(drawn.to_string())
}

/// Draws one string from `pool` and returns it double-quoted, with
/// backslash escapes for quotes, backslashes, and control characters.
///
/// # Errors
///
/// Returns [`RandomError::EmptyPool`] if `pool` is empty.
pub fn quote<S: AsRef<str>>(
    pool: &[S],
    source: &mut dyn RandomSource,
) -> Result<String, RandomError> {
    let drawn = pick("quote", pool, source)?.as_ref();
    Ok(format!("{drawn:?}"))
}

/// Draws one double-quoted string from `pool` and returns it with the
/// surrounding quotes removed and escapes resolved. Inverse of [`quote`].
///
/// # Errors
///
/// Returns [`RandomError::EmptyPool`] if `pool` is empty, or
/// [`RandomError::MalformedQuote`] if the drawn string is not surrounded
/// by double quotes or contains an unknown escape.
pub fn unquote<S: AsRef<str>>(
    pool: &[S],
    source: &mut dyn RandomSource,
) -> Result<String, RandomError> {
    const OP: &str = "unquote";
    let drawn = pick(OP, pool, source)?.as_ref();
    let inner = drawn
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or(RandomError::MalformedQuote { op: OP })?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '"' {
            // A bare interior quote would have terminated the literal.
            return Err(RandomError::MalformedQuote { op: OP });
        }
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('0') => out.push('\0'),
            Some('u') => out.push(unescape_unicode(OP, &mut chars)?),
            _ => return Err(RandomError::MalformedQuote { op: OP }),
        }
    }
    Ok(out)
}

/// Resolves the `{hex}` tail of a `\u{...}` escape.
fn unescape_unicode(
    op: &'static str,
    chars: &mut std::str::Chars<'_>,
) -> Result<char, RandomError> {
    if chars.next() != Some('{') {
        return Err(RandomError::MalformedQuote { op });
    }
    let mut code = 0_u32;
    let mut digits = 0;
    loop {
        match chars.next() {
            Some('}') if digits > 0 => break,
            Some(c) => {
                let digit = c
                    .to_digit(16)
                    .ok_or(RandomError::MalformedQuote { op })?;
                code = code
                    .checked_mul(16)
                    .and_then(|v| v.checked_add(digit))
                    .ok_or(RandomError::MalformedQuote { op })?;
                digits += 1;
            }
            None => return Err(RandomError::MalformedQuote { op }),
        }
    }
    char::from_u32(code).ok_or(RandomError::MalformedQuote { op })
}

fn pick<'a, T>(
    op: &'static str,
    pool: &'a [T],
    source: &mut dyn RandomSource,
) -> Result<&'a T, RandomError> {
    choice(pool, source).map_err(|_| RandomError::EmptyPool { op })
}
