//! Display formatting for latest values.

const PERCENT_HINTS: &[&str] = &["percent", "share", "rate", "coverage", "access"];
const HEADCOUNT_HINTS: &[&str] = &["population", "people"];
const DURATION_HINTS: &[&str] = &["year", "expectancy"];

pub const NOT_AVAILABLE: &str = "Data not available";

/// Rounds half away from zero, so 1.25 shows as 1.3 regardless of how the
/// formatter breaks ties.
fn fixed(value: f64, decimals: i32) -> String {
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    format!("{:.*}", decimals as usize, rounded)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Renders a latest value with a unit inferred from its column name, falling
/// back to magnitude. The first matching rule wins.
pub fn format_value(value: Option<f64>, column: &str) -> String {
    let Some(v) = value else {
        return NOT_AVAILABLE.to_string();
    };
    let column = column.to_lowercase();

    if contains_any(&column, PERCENT_HINTS) || (v <= 100.0 && contains_any(&column, HEADCOUNT_HINTS))
    {
        return format!("{}%", fixed(v, 1));
    }
    if contains_any(&column, DURATION_HINTS) {
        return format!("{} years", fixed(v, 1));
    }

    match v {
        v if v >= 1_000_000.0 => format!("{}M", fixed(v / 1_000_000.0, 1)),
        v if v >= 1_000.0 => format!("{}K", fixed(v / 1_000.0, 1)),
        v if v > 0.0 && v < 1.0 => fixed(v, 3),
        v => fixed(v, 1),
    }
}
