//! Toolbar sticky-state tracking.
//!
//! # Responsibility
//! - Compute toolbar sticky state as a pure function of offset and mode.
//! - Push the computed state to the styling collaborator.
//!
//! # Invariants
//! - Modes that do not pin the toolbar always yield the unstuck state.
//! - `applied_offset` is zero whenever `stuck` is false.

use crate::config::FormConfig;
use crate::model::mode::{Directive, PresentationMode, Region};
use crate::view::collaborators::Styling;
use serde::Serialize;

const TOOLBAR_FIXED: Directive = Directive::new(Region::Toolbar, "wmd-bar-fixed");

/// Sticky state of the toolbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollState {
    pub stuck: bool,
    pub applied_offset: i64,
}

impl ScrollState {
    pub const UNSTUCK: ScrollState = ScrollState {
        stuck: false,
        applied_offset: 0,
    };
}

/// Computes toolbar state for `offset` under `mode`.
///
/// A missing offset (no scroll event yet) is treated like an unpinned mode.
pub fn toolbar_scroll_state(
    offset: Option<i64>,
    mode: PresentationMode,
    threshold: i64,
    adjust: i64,
) -> ScrollState {
    match offset {
        Some(offset) if mode.pins_toolbar() && offset >= threshold => ScrollState {
            stuck: true,
            applied_offset: offset - adjust,
        },
        _ => ScrollState::UNSTUCK,
    }
}

/// Stateful wrapper remembering the last offset and applied state.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    threshold: i64,
    adjust: i64,
    last_offset: Option<i64>,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            threshold: config.sticky_threshold,
            adjust: config.sticky_adjust,
            last_offset: None,
            state: ScrollState::UNSTUCK,
        }
    }

    /// Records a scroll event and recomputes.
    ///
    /// `None` means no scroll position is known and unsticks the toolbar.
    pub fn on_scroll(
        &mut self,
        offset: Option<i64>,
        mode: PresentationMode,
        styling: &dyn Styling,
    ) -> ScrollState {
        self.last_offset = offset;
        self.recompute(mode, styling)
    }

    /// Recomputes with the last seen offset, e.g. after a mode transition.
    pub fn recompute(&mut self, mode: PresentationMode, styling: &dyn Styling) -> ScrollState {
        self.state = toolbar_scroll_state(self.last_offset, mode, self.threshold, self.adjust);
        apply_state(self.state, styling);
        self.state
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn last_offset(&self) -> Option<i64> {
        self.last_offset
    }
}

fn apply_state(state: ScrollState, styling: &dyn Styling) {
    if state.stuck {
        styling.add_directive(TOOLBAR_FIXED);
    } else {
        styling.remove_directive(TOOLBAR_FIXED);
    }
    styling.set_top_offset(Region::Toolbar, state.applied_offset);
}

#[cfg(test)]
mod tests {
    use super::{toolbar_scroll_state, ScrollState};
    use crate::model::mode::PresentationMode;

    #[test]
    fn unpinned_mode_never_sticks() {
        for offset in [None, Some(0), Some(259), Some(260), Some(5000)] {
            assert_eq!(
                toolbar_scroll_state(offset, PresentationMode::Normal, 260, 2),
                ScrollState::UNSTUCK
            );
        }
    }

    #[test]
    fn pinned_mode_sticks_from_threshold() {
        let mode = PresentationMode::Fullscreen;
        assert_eq!(
            toolbar_scroll_state(Some(259), mode, 260, 2),
            ScrollState::UNSTUCK
        );
        assert_eq!(
            toolbar_scroll_state(Some(260), mode, 260, 2),
            ScrollState {
                stuck: true,
                applied_offset: 258
            }
        );
        assert_eq!(
            toolbar_scroll_state(Some(1000), PresentationMode::Preview, 260, 2).applied_offset,
            998
        );
    }

    #[test]
    fn pinned_mode_without_offset_is_unstuck() {
        assert_eq!(
            toolbar_scroll_state(None, PresentationMode::Preview, 260, 2),
            ScrollState::UNSTUCK
        );
    }
}
