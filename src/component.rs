//! The star-rating selector component.

#[cfg(test)]
#[path = "component_test.rs"]
mod component_test;

use leptos::prelude::*;

use crate::state::RatingState;
use crate::style;
use crate::tooltip;

/// A row of clickable star buttons for picking a rating.
///
/// Hovering a star previews the rating it would commit; clicking commits it
/// and runs `on_change` with the new value. Every prop is optional, and
/// values are forwarded unvalidated: `total_stars = 0` renders an empty row,
/// and an `initial_rating` above `total_stars` simply renders every star in
/// the active colour.
///
/// ```ignore
/// view! {
///     <StarRating
///         total_stars=5
///         initial_rating=2
///         on_change=Callback::new(move |rating| set_score.set(rating))
///     />
/// }
/// ```
#[component]
pub fn StarRating(
    /// Number of stars rendered. Defaults to 5.
    #[prop(into, optional)]
    total_stars: Option<usize>,
    /// Rating shown before any click. Defaults to 0 (no stars active).
    #[prop(into, optional)]
    initial_rating: Option<usize>,
    /// Run with the new rating on every click commit.
    #[prop(into, optional)]
    on_change: Option<Callback<usize>>,
    /// Colour of stars at or below the threshold. Defaults to "yellow".
    #[prop(into, optional)]
    active_color: Option<String>,
    /// Colour of stars above the threshold. Defaults to "gray".
    #[prop(into, optional)]
    inactive_color: Option<String>,
    /// Glyph font size. Defaults to "2rem".
    #[prop(into, optional)]
    size: Option<String>,
    /// Flex gap between stars. Defaults to "5px".
    #[prop(into, optional)]
    gap: Option<String>,
    /// Extra class appended to the container's.
    #[prop(into, optional)]
    class_name: Option<String>,
    /// Per-star tooltip overrides, index 0 mapping to star 1. Empty entries
    /// fall back to the default "{n} Star(s)" label.
    #[prop(into, optional)]
    tooltip_texts: Option<Vec<String>>,
    /// Accessible label on the container. Defaults to "Star rating".
    #[prop(into, optional)]
    aria_label: Option<String>,
) -> impl IntoView {
    let total_stars = total_stars.unwrap_or(5);
    let initial_rating = initial_rating.unwrap_or(0);
    let active_color = active_color.unwrap_or_else(|| "yellow".to_owned());
    let inactive_color = inactive_color.unwrap_or_else(|| "gray".to_owned());
    let size = size.unwrap_or_else(|| "2rem".to_owned());
    let gap = gap.unwrap_or_else(|| "5px".to_owned());
    let tooltip_texts = tooltip_texts.unwrap_or_default();
    let aria_label = aria_label.unwrap_or_else(|| "Star rating".to_owned());

    let container_class = match class_name {
        Some(ref extra) if !extra.is_empty() => format!("star-rating-container {extra}"),
        _ => "star-rating-container".to_owned(),
    };

    let state = RwSignal::new(RatingState::new(initial_rating));

    let stars = (1..=total_stars)
        .map(|position| {
            let tooltip = tooltip::resolve(position, &tooltip_texts);
            let aria = tooltip.clone();
            let active = active_color.clone();
            let inactive = inactive_color.clone();
            let size = size.clone();

            let star_style = move || {
                let color = if state.get().is_active(position) {
                    active.as_str()
                } else {
                    inactive.as_str()
                };
                style::star(&size, color)
            };

            let on_click = move |_| commit_click(state, position, on_change);

            view! {
                <button
                    type="button"
                    class="star-button"
                    style=star_style
                    title=tooltip
                    aria-label=aria
                    on:click=on_click
                    on:mouseenter=move |_| state.update(|s| s.pointer_enter(position))
                    on:mouseleave=move |_| state.update(|s| s.pointer_leave())
                >
                    "\u{2605}"
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=container_class style=style::container(&gap) aria-label=aria_label>
            {stars}
        </div>
    }
}

/// Click commit for the star at `position`: updates `state` and runs the
/// caller's callback with the new rating. The component's only external
/// side effect; every click runs the callback, repeats included.
fn commit_click(state: RwSignal<RatingState>, position: usize, on_change: Option<Callback<usize>>) {
    let mut next = state.get_untracked();
    let rating = next.click(position);
    state.set(next);
    if let Some(callback) = on_change {
        callback.run(rating);
    }
}
