//! Interaction state for the rating selector: the committed rating and the
//! transient hover preview, plus the transitions that connect them.
//!
//! Kept free of Leptos types so the transition rules test natively. The
//! component owns one [`RatingState`] per instance inside an `RwSignal`,
//! created on mount and destroyed with the instance.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Committed rating plus transient hover preview.
///
/// Star positions are 1-based; `hover == 0` means no star is hovered.
/// Neither field is clamped against the star count: the component forwards
/// whatever initial rating the caller supplied, and hover/click positions
/// only ever arrive from rendered stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingState {
    /// Last clicked star position, seeded from the caller's initial rating.
    pub committed: usize,
    /// Currently hovered star position; 0 when no hover is active.
    pub hover: usize,
}

impl RatingState {
    /// State for a freshly mounted component with the given initial rating.
    #[must_use]
    pub fn new(initial_rating: usize) -> Self {
        Self { committed: initial_rating, hover: 0 }
    }

    /// Position up to which stars render in the active colour: the hovered
    /// position while a hover is active, the committed rating otherwise.
    #[must_use]
    pub fn threshold(self) -> usize {
        if self.hover > 0 { self.hover } else { self.committed }
    }

    /// Whether the star at `position` renders in the active colour.
    #[must_use]
    pub fn is_active(self, position: usize) -> bool {
        position <= self.threshold()
    }

    /// Pointer entered the star at `position`. Preview only; the committed
    /// rating is untouched and no notification fires.
    pub fn pointer_enter(&mut self, position: usize) {
        self.hover = position;
    }

    /// Pointer left a star. The hover marker reverts to the committed
    /// rating rather than clearing to zero, so the display falls back to
    /// the last commit.
    pub fn pointer_leave(&mut self) {
        self.hover = self.committed;
    }

    /// Click on the star at `position`: commits it and returns the new
    /// rating. The sole state-committing transition; the component runs the
    /// caller's callback with the returned value.
    pub fn click(&mut self, position: usize) -> usize {
        self.committed = position;
        position
    }
}
