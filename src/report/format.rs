//! Rounding and display formatting for monetary figures
//!
//! Rounding rule: half away from zero, applied to the f64 value scaled by 100
//! (`f64::round`). Only the presentation layer calls these; the engine always
//! carries full precision.

/// Round to 2 decimals, ties away from zero
///
/// Values too large to scale by 100 are already whole and come back as is.
pub fn round_money(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// French-style grouping separator (narrow no-break space)
const GROUP_SEPARATOR: char = '\u{202f}';

/// Amount in French locale notation, without currency sign
///
/// Rounded to cents; trailing zero decimals are dropped like the browser's
/// `toLocaleString('fr-FR')` does: 1234.5 gives "1 234,5", 20 gives "20".
pub fn format_amount(value: f64) -> String {
    let rounded = round_money(value);
    if rounded.is_nan() {
        return "NaN".to_string();
    }
    if rounded.is_infinite() {
        return if rounded > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let negative = rounded < 0.0;
    let text = format!("{:.2}", rounded.abs());
    let (units, cents) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut out = String::with_capacity(units.len() + units.len() / 3 + 4);
    if negative {
        out.push('-');
    }
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }

    let cents = cents.trim_end_matches('0');
    if !cents.is_empty() {
        out.push(',');
        out.push_str(cents);
    }
    out
}

/// Amount followed by the euro sign
pub fn format_eur(value: f64) -> String {
    format!("{} €", format_amount(value))
}

/// Compact label for the chart's value axis
pub fn format_axis_tick(value: f64) -> String {
    // Scale first, then round half away from zero like the amounts
    if value >= 1_000_000.0 {
        let millions = (value / 100_000.0).round() / 10.0;
        format!("{:.1} M€", millions)
    } else if value >= 1000.0 {
        format!("{} k€", (value / 1000.0).round())
    } else {
        format!("{} €", value)
    }
}

/// Percent as typed in the form: 2.5 gives "2.5 %", 3.0 gives "3 %"
pub fn format_percent(value: f64) -> String {
    format!("{} %", value)
}
