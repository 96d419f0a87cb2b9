//! Progress bar rendering.
//!
//! `Mouse Movement Progress |████░░░░| 50% | 50/100 Cycles`

use super::theme::Theme;

/// Default bar width in cells.
pub const BAR_WIDTH: usize = 40;

/// Cells taken by the label, percentage and counter around the bar.
const LINE_OVERHEAD: usize = 52;

/// Narrowest bar drawn on small terminals.
const MIN_BAR_WIDTH: usize = 10;

const COMPLETE: char = '█';
const INCOMPLETE: char = '░';

/// Build the bar cells and the whole-number percentage.
///
/// Filled cells are rounded, the percentage is floored, and progress past
/// `total` is clamped to 100%.
pub fn build_progress_bar(bar_width: usize, value: u32, total: u32) -> (String, u32) {
    let progress = if total > 0 {
        (f64::from(value) / f64::from(total)).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = ((bar_width as f64) * progress).round() as usize;
    let mut bar = String::with_capacity(bar_width * COMPLETE.len_utf8());
    bar.extend(std::iter::repeat(COMPLETE).take(filled));
    bar.extend(std::iter::repeat(INCOMPLETE).take(bar_width - filled));

    let percent = match total {
        0 => 100,
        _ => (u64::from(value.min(total)) * 100 / u64::from(total)) as u32,
    };

    (bar, percent)
}

/// Bar width that fits a terminal `columns` wide.
pub fn progress_bar_width(columns: Option<u16>) -> usize {
    match columns {
        Some(cols) => (cols as usize)
            .saturating_sub(LINE_OVERHEAD)
            .clamp(MIN_BAR_WIDTH, BAR_WIDTH),
        None => BAR_WIDTH,
    }
}

/// Render the full progress line.
pub fn render_progress_line(theme: &Theme, bar_width: usize, value: u32, total: u32) -> String {
    let (bar, percent) = build_progress_bar(bar_width, value, total);
    format!(
        "Mouse Movement Progress |{}| {}% | {}/{} Cycles",
        theme.accent_text(&bar),
        percent,
        value,
        total
    )
}
