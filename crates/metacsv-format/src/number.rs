//! Numbers written with explicit thousands/decimal separators.
//!
//! [`normalize_number`] turns cell text such as `-1 234,5` into the canonical ASCII form
//! (`-1234.5`) understood by `str::parse`; [`group_number`] is its inverse.

/// Validate `text` against the given separators and return its canonical ASCII form.
///
/// Accepted shape: an optional `+`/`-` sign, an integer part that is either plain digits or
/// grouped with `thousands_separator` (first group 1-3 digits, every other group exactly 3), then
/// optionally `decimal_separator` followed by one or more digits. When `allow_exponent` is set an
/// `e`/`E` exponent with an optional sign may follow. At least one digit is required.
///
/// Returns `None` for anything else: doubled or misplaced separators, trailing characters,
/// whitespace, an empty string.
pub fn normalize_number(
    text: &str,
    thousands_separator: Option<&str>,
    decimal_separator: Option<&str>,
    allow_exponent: bool,
) -> Option<String> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = if allow_exponent {
        match body.rfind(['e', 'E']) {
            Some(idx) => (&body[..idx], Some(parse_exponent(&body[idx + 1..])?)),
            None => (body, None),
        }
    } else {
        (body, None)
    };

    let (int_part, frac_part) = match decimal_separator.and_then(|sep| mantissa.split_once(sep)) {
        // A separator needs digits after it.
        Some((_, "")) => return None,
        Some(parts) => parts,
        None => (mantissa, ""),
    };

    if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let int_digits = ungroup_integer(int_part, thousands_separator)?;
    if int_digits.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(text.len() + 2);
    if negative {
        out.push('-');
    }
    if int_digits.is_empty() {
        out.push('0');
    } else {
        out.push_str(&int_digits);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    if let Some(exp) = exponent {
        out.push('e');
        out.push_str(exp);
    }
    Some(out)
}

fn parse_exponent(s: &str) -> Option<&str> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s)
}

fn ungroup_integer(int_part: &str, thousands_separator: Option<&str>) -> Option<String> {
    let grouped = thousands_separator.filter(|sep| !sep.is_empty() && int_part.contains(*sep));
    let Some(sep) = grouped else {
        if !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        return Some(int_part.to_string());
    };

    let mut out = String::with_capacity(int_part.len());
    for (idx, group) in int_part.split(sep).enumerate() {
        let valid_len = if idx == 0 {
            (1..=3).contains(&group.len())
        } else {
            group.len() == 3
        };
        if !valid_len || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        out.push_str(group);
    }
    Some(out)
}

/// Render a canonical ASCII number (`-1234.5`, as produced by `Display` for integers, floats and
/// decimals) with the given separators.
///
/// Strings that aren't plain `[-]digits[.digits]` (exponents, `NaN`, `inf`) are returned
/// unchanged except for the decimal separator of an exponent's mantissa.
pub fn group_number(
    canonical: &str,
    thousands_separator: Option<&str>,
    decimal_separator: &str,
) -> String {
    if let Some(idx) = canonical.find(['e', 'E']) {
        let mantissa = group_mantissa(&canonical[..idx], None, decimal_separator);
        return format!("{mantissa}{}", &canonical[idx..]);
    }
    group_mantissa(canonical, thousands_separator, decimal_separator)
}

fn group_mantissa(
    mantissa: &str,
    thousands_separator: Option<&str>,
    decimal_separator: &str,
) -> String {
    // Handle sign separately so grouping code only sees digits.
    let (sign, unsigned) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return mantissa.to_string();
    }

    let grouped_int = match thousands_separator {
        Some(sep) if !sep.is_empty() => group_thousands(int_part, sep),
        _ => int_part.to_string(),
    };

    if frac_part.is_empty() {
        format!("{sign}{grouped_int}")
    } else {
        format!("{sign}{grouped_int}{decimal_separator}{frac_part}")
    }
}

fn group_thousands(int_part: &str, sep: &str) -> String {
    let len = int_part.len();
    if len <= 3 {
        return int_part.to_string();
    }

    let mut out = String::with_capacity(len + (len / 3) * sep.len());
    let mut first_group = len % 3;
    if first_group == 0 {
        first_group = 3;
    }

    out.push_str(&int_part[..first_group]);
    let mut idx = first_group;
    while idx < len {
        out.push_str(sep);
        out.push_str(&int_part[idx..idx + 3]);
        idx += 3;
    }

    out
}
