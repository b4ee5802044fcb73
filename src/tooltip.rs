//! Tooltip resolution for star positions.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

/// Tooltip text for the star at `position` (1-based).
///
/// A caller override wins when one exists at `position - 1` and is
/// non-empty; otherwise the label falls back to `"1 Star"` for the first
/// position and `"{position} Stars"` beyond it.
#[must_use]
pub fn resolve(position: usize, overrides: &[String]) -> String {
    if let Some(text) = overrides.get(position.saturating_sub(1)) {
        if !text.is_empty() {
            return text.clone();
        }
    }
    if position == 1 {
        "1 Star".to_owned()
    } else {
        format!("{position} Stars")
    }
}
