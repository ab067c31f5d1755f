use crate::core::{ElementValue, GridStep};

/// Formats a grid-line value with exactly as many decimals as the step needs.
///
/// `0.1` steps print `0.3`, never `0.30000000000000004`; integral steps print
/// no decimals. Negative zero loses its sign.
#[must_use]
pub fn format_grid_value(value: f64, step: GridStep) -> String {
    strip_negative_zero(format!("{:.*}", step.decimals(), value))
}

/// Formats a data value for tooltips: integers as is, fractions with up to
/// four decimals and no trailing zeros.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return strip_negative_zero(format!("{value:.0}"));
    }
    let text = format!("{value:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    strip_negative_zero(text.to_owned())
}

/// Text describing one element: `"<label>: <value>"`, with the series name
/// after the label when there is one, or the four OHLC fields for candles.
#[must_use]
pub fn tooltip_text(label: &str, series_name: Option<&str>, value: ElementValue) -> String {
    let head = match series_name {
        Some(name) if !name.is_empty() => format!("{label}, {name}"),
        _ => label.to_owned(),
    };
    match value {
        ElementValue::Scalar(value) => format!("{head}: {}", format_value(value)),
        ElementValue::Ohlc(ohlc) => format!(
            "{head}: O {} H {} L {} C {}",
            format_value(ohlc.open),
            format_value(ohlc.high),
            format_value(ohlc.low),
            format_value(ohlc.close)
        ),
    }
}

/// Pixel width reserved for one grid label from [`format_grid_value`].
///
/// Grid labels hold digits, at most one decimal point and a leading minus,
/// so advances are only tabulated for those glyphs, in ems. The result
/// depends on the string alone, never on the backend's font.
pub(crate) fn estimate_grid_label_width_px(text: &str, font_size_px: f64) -> f64 {
    let ems = text
        .chars()
        .map(|ch| match ch {
            '.' => 0.3,
            '-' => 0.4,
            _ => 0.6,
        })
        .sum::<f64>();
    (ems * font_size_px).max(font_size_px)
}

fn strip_negative_zero(text: String) -> String {
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|ch| ch == '0' || ch == '.') => rest.to_owned(),
        _ => text,
    }
}
