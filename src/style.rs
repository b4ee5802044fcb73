//! Inline-style builders for the container and the star buttons.
//!
//! Caller-supplied gap, size, and colour values are forwarded verbatim into
//! the style strings; nothing is validated or normalized.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

/// Inline style for the flex container holding the star buttons.
#[must_use]
pub fn container(gap: &str) -> String {
    format!("display: flex; gap: {gap};")
}

/// Inline style for a single star button.
///
/// Strips the browser button chrome so only the glyph shows; `color`
/// carries the active/inactive state.
#[must_use]
pub fn star(size: &str, color: &str) -> String {
    format!(
        "background: none; border: none; cursor: pointer; font-size: {size}; color: {color}; transition: color 0.2s;"
    )
}
