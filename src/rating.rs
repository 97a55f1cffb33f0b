//! Star-rating widget state machine.
//!
//! Five fixed affordances, 1-based. A click commits a rating; hovering only
//! repaints the strip for preview and never touches the committed value.
//! The feedback form renders its star strip from this state, and the same
//! rules drive which submitted values the form accepts.

pub const STAR_COUNT: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingWidget {
    /// 0 = nothing committed yet.
    committed: u8,
    /// Transient preview; None when the pointer is off the strip.
    hover: Option<u8>,
}

impl RatingWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widget with a prior commitment, used to re-render a submitted form.
    /// Values outside the strip leave the widget uncommitted.
    pub fn with_committed(rating: u8) -> Self {
        Self {
            committed: if Self::accepts(rating) { rating } else { 0 },
            hover: None,
        }
    }

    /// Whether `value` is a rating the strip can produce.
    pub fn accepts(value: u8) -> bool {
        (1..=STAR_COUNT).contains(&value)
    }

    /// Commit the clicked star. Clicking the same star again is a no-op;
    /// positions outside the strip are ignored.
    pub fn click(&mut self, star: u8) {
        if Self::accepts(star) {
            self.committed = star;
        }
    }

    /// Preview stars 1..=star without changing the commitment.
    pub fn hover(&mut self, star: u8) {
        if Self::accepts(star) {
            self.hover = Some(star);
        }
    }

    /// Pointer left the strip: the paint falls back to the committed state.
    pub fn unhover(&mut self) {
        self.hover = None;
    }

    /// Clear both the commitment and any preview (after a successful submit).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn committed(&self) -> u8 {
        self.committed
    }

    pub fn is_committed(&self) -> bool {
        self.committed > 0
    }

    /// Visual projection of the strip: `painted()[k]` is true when star k+1
    /// is lit. A hover preview wins over the committed state while it lasts.
    pub fn painted(&self) -> [bool; STAR_COUNT as usize] {
        let lit = self.hover.unwrap_or(self.committed);
        let mut stars = [false; STAR_COUNT as usize];
        for (i, star) in stars.iter_mut().enumerate() {
            *star = (i as u8) < lit;
        }
        stars
    }
}
