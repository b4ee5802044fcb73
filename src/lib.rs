//! # star-rating
//!
//! A reusable star-rating selector component for Leptos.
//!
//! Renders a horizontal row of clickable star buttons. Hovering a star
//! previews the rating it would commit; clicking commits it and notifies the
//! caller through an optional callback. All interaction state is local to
//! the component instance and mutated synchronously inside event handlers;
//! there is no I/O, no shared state, and no background work.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`component`] | The [`StarRating`] Leptos component |
//! | [`state`] | Pure interaction state machine (committed rating + hover) |
//! | [`tooltip`] | Per-star tooltip resolution |
//! | [`style`] | Inline-style builders for the container and stars |

pub mod component;
pub mod state;
pub mod style;
pub mod tooltip;

pub use component::StarRating;
