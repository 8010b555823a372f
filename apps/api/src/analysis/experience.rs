//! Years-of-experience estimation: numeric patterns first, keyword buckets second.

use once_cell::sync::Lazy;
use regex::Regex;

/// Tried strictly in order. The first pattern with any match wins, even if a
/// later one would have found a larger number.
// ASCII digits only: "٥ years" does not match. Overlong runs saturate to u32::MAX.
static YEARS_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"([0-9]+)\+?\s*years?").unwrap(),
        Regex::new(r"([0-9]+)\+?\s*yrs?").unwrap(),
        Regex::new(r"experience.*?([0-9]+)\+?").unwrap(),
    ]
});

const SENIOR_BUCKET: &[&str] = &["senior", "lead", "principal", "10+", "15+", "20+"];
const MID_BUCKET: &[&str] = &["mid-level", "mid level", "5+", "7+"];
const JUNIOR_BUCKET: &[&str] = &["junior", "entry", "fresher", "0-2", "1-2"];

pub const DEFAULT_YEARS: u32 = 3;

/// Estimates years of experience. Never fails; falls back to [`DEFAULT_YEARS`].
pub fn estimate_years(text: &str) -> u32 {
    let text_lower = text.to_lowercase();

    for pattern in YEARS_PATTERNS.iter() {
        let max = pattern
            .captures_iter(&text_lower)
            .filter_map(|caps| caps.get(1))
            .map(|m| parse_saturating(m.as_str()))
            .max();
        if let Some(years) = max {
            return years;
        }
    }

    estimate_from_keywords(&text_lower)
}

fn estimate_from_keywords(text_lower: &str) -> u32 {
    let any = |bucket: &[&str]| bucket.iter().any(|kw| text_lower.contains(kw));

    if any(SENIOR_BUCKET) {
        8
    } else if any(MID_BUCKET) {
        5
    } else if any(JUNIOR_BUCKET) {
        1
    } else {
        DEFAULT_YEARS
    }
}

/// Absurdly long digit runs clamp to `u32::MAX` instead of being dropped.
fn parse_saturating(digits: &str) -> u32 {
    digits.parse::<u32>().unwrap_or(u32::MAX)
}
