//! Panel visibility around the host's modal screens
//!
//! Hiding is immediate: the panel must never show stale data over an
//! inventory or container screen. Reappearing is debounced by `show_delay`
//! so that closing one container and opening another does not flash the panel.

/// Current visibility state of the overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisibilityState {
    Shown,
    HiddenByModal,
    /// Modal closed; shown once the clock reaches `reappear_at`
    PendingReappear { reappear_at: f64 },
}

/// Result of one visibility evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub visible: bool,
}

/// State machine deciding whether the overlay may be shown
#[derive(Debug, Clone)]
pub struct VisibilityController {
    state: VisibilityState,
    show_delay: f64,
}

impl VisibilityController {
    /// Starts hidden; nothing is drawn before the first successful data read.
    pub fn new(show_delay: f64) -> Self {
        Self {
            state: VisibilityState::HiddenByModal,
            show_delay,
        }
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == VisibilityState::Shown
    }

    /// Return to the initial hidden state
    pub fn reset(&mut self) {
        self.state = VisibilityState::HiddenByModal;
    }

    /// Advance the state machine with this frame's modal flag
    pub fn update(&mut self, modal_open: bool, now: f64) -> Visibility {
        self.state = match (self.state, modal_open) {
            // Any open modal hides at once and drops a pending reappearance
            (_, true) => VisibilityState::HiddenByModal,
            (VisibilityState::HiddenByModal, false) => VisibilityState::PendingReappear {
                reappear_at: now + self.show_delay,
            },
            (state, false) => state,
        };

        if let VisibilityState::PendingReappear { reappear_at } = self.state {
            if now >= reappear_at {
                self.state = VisibilityState::Shown;
            }
        }

        Visibility {
            visible: self.is_visible(),
        }
    }
}
