//! Land-use categories for NYC PLUTO tax lots.
//!
//! The table is closed: codes 1..=11 have their own color and label, and every
//! other input (12, out of range, missing, unparsable) resolves to [`FALLBACK`].

use std::ops::RangeInclusive;

use foundation::Rgb;
use serde_json::Value;

use crate::legend::LegendEntry;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LandUseCategory {
    pub code: u8,
    pub color: Rgb,
    pub label: &'static str,
}

impl LandUseCategory {
    const fn new(code: u8, color: u32, label: &'static str) -> Self {
        Self {
            code,
            color: Rgb::from_u32(color),
            label,
        }
    }
}

/// Category for code 12 and anything unrecognized.
pub const FALLBACK: LandUseCategory = LandUseCategory::new(12, 0x5f5f60, "Other");

/// Codes that get their own legend entry and fill stop.
pub const LEGEND_CODES: RangeInclusive<i64> = 1..=11;

static TABLE: [LandUseCategory; 11] = [
    LandUseCategory::new(1, 0xffffb3, "1 & 2 Family"),
    LandUseCategory::new(2, 0xfdb462, "Multifamily Walk-up"),
    LandUseCategory::new(3, 0xfccde5, "Multifamily Elevator"),
    LandUseCategory::new(4, 0xfb8072, "Mixed Res. & Commercial"),
    LandUseCategory::new(5, 0x8dd3c7, "Commercial & Office"),
    LandUseCategory::new(6, 0xbebada, "Industrial & Manufacturing"),
    LandUseCategory::new(7, 0xdac0e8, "Transportation & Utility"),
    LandUseCategory::new(8, 0x80b1d3, "Public Facilities & Institutions"),
    LandUseCategory::new(9, 0xb3de69, "Open Space & Outdoor Recreation"),
    LandUseCategory::new(10, 0xd9d9d9, "Parking Facilities"),
    LandUseCategory::new(11, 0x5f5f60, "Vacant Land"),
];

/// Total lookup over all integers.
pub fn lookup(code: i64) -> &'static LandUseCategory {
    match code {
        1..=11 => &TABLE[(code - 1) as usize],
        _ => &FALLBACK,
    }
}

/// Resolves a raw `landuse` feature property to its category.
///
/// Missing or unparsable values resolve to [`FALLBACK`].
pub fn lookup_property(value: Option<&Value>) -> &'static LandUseCategory {
    value.and_then(parse_code).map_or(&FALLBACK, lookup)
}

/// Reads a land-use code out of a property value.
///
/// Strings are read like a lenient integer parse: leading whitespace is
/// skipped, an optional sign is accepted, and the longest run of leading
/// decimal digits is used (`"05"` -> 5, `"7 (mixed)"` -> 7). Numbers are
/// truncated toward zero. Anything else has no code.
pub fn parse_code(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => parse_int_prefix(s),
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            f.is_finite().then(|| f.trunc() as i64)
        }),
        _ => None,
    }
}

fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    // Saturate: anything this large is out of range for the table anyway.
    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// `(two-digit code, color)` pairs in the form the parcel dataset stores them.
pub fn fill_color_stops() -> Vec<(String, Rgb)> {
    LEGEND_CODES
        .map(|code| (format!("{code:02}"), lookup(code).color))
        .collect()
}

/// One entry per legend code, ascending.
pub fn legend_entries() -> Vec<LegendEntry> {
    LEGEND_CODES
        .map(|code| LegendEntry::from_category(lookup(code)))
        .collect()
}
