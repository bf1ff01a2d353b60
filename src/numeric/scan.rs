// ============================================================================
// Lenient Float Scanning
// Leading-prefix float parsing over separator-normalized strings
// ============================================================================

/// Outcome of scanning a normalized numeric string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scanned {
    /// Value of the longest numeric prefix, `0.0` when there is none
    pub value: f64,
    /// Whether the prefix contained at least one digit
    pub has_digits: bool,
    /// Whether the prefix spans the entire input
    pub complete: bool,
}

impl Scanned {
    /// True when the whole input is a single well-formed number.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.has_digits && self.complete
    }
}

/// Parse the longest prefix of `s` matching `-?[0-9]*(\.[0-9]*)?`.
///
/// Anything after the prefix is ignored, and a prefix without digits yields
/// `0.0`. Callers normalize separators first, so `s` is expected to contain
/// only `-`, `.` and ASCII digits.
///
/// # Examples
/// - "1234.56" -> 1234.56
/// - "-.5" -> -0.5
/// - "1.2.3" -> 1.2 (incomplete)
/// - "" -> 0.0 (no digits)
pub fn scan_leading_float(s: &str) -> Scanned {
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = bytes.first() == Some(&b'-');
    if negative {
        pos += 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Scanned {
            value: 0.0,
            has_digits: false,
            complete: s.is_empty(),
        };
    }

    let literal = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
    );

    Scanned {
        value: literal.parse().unwrap_or(0.0),
        has_digits: true,
        complete: pos == s.len(),
    }
}
