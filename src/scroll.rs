//! Scroll signals and the proximity trigger.
//!
//! The host list reports raw scroll activity as [`ScrollMsg`] values through
//! the normal message flow; [`ProximityTrigger`] turns one of those signals
//! into a load-more decision. The trigger is a pure function over the
//! signal, the current [`PageState`], and the configured load threshold; it
//! holds no state of its own.
//!
//! The metric is only meaningful for a linear (single-axis) layout, where
//! "last visible index" and "items from the end" describe the same axis.
//! Grid and staggered layouts need a different proximity metric and are
//! deliberately unhandled.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_paging::pagedlist::PageState;
//! use bubbletea_paging::scroll::{ProximityTrigger, ScrollMsg};
//!
//! let trigger = ProximityTrigger::new(2);
//! let near_end = ScrollMsg {
//!     total_item_count: 20,
//!     last_visible_index: 18,
//!     vertical_delta: 3,
//! };
//! assert!(trigger.should_request(PageState::Loaded, &near_end));
//! assert!(!trigger.should_request(PageState::Loading, &near_end));
//! ```

use crate::pagedlist::PageState;

/// A raw scroll signal from the host list.
///
/// Sent as a bubbletea-rs message and consumed by
/// [`crate::pagedlist::Model::update`]. Carries the total slot count as
/// currently laid out, the index of the last visible slot, and the vertical
/// scroll delta (positive values scroll toward the end of the list).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMsg {
    /// Total number of slots currently laid out, footer included.
    pub total_item_count: usize,
    /// Index of the last slot visible in the viewport.
    pub last_visible_index: usize,
    /// Vertical movement since the previous signal; positive is toward the
    /// end of the list.
    pub vertical_delta: i32,
}

/// Converts scroll signals into load-more decisions.
///
/// A signal fires when all of the following hold:
/// - the state is neither [`PageState::ReachedLimit`] nor
///   [`PageState::Loading`] nor [`PageState::Error`],
/// - the delta indicates downward movement (`vertical_delta > 0`),
/// - the viewport is within `load_threshold` items of the end:
///   `total_item_count <= last_visible_index + load_threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProximityTrigger {
    load_threshold: usize,
}

impl ProximityTrigger {
    /// Creates a trigger with the given prefetch distance.
    pub fn new(load_threshold: usize) -> Self {
        Self { load_threshold }
    }

    /// Decides whether this scroll signal should request another page.
    pub fn should_request(&self, state: PageState, scroll: &ScrollMsg) -> bool {
        if matches!(
            state,
            PageState::ReachedLimit | PageState::Loading | PageState::Error
        ) {
            return false;
        }
        if scroll.vertical_delta <= 0 {
            return false;
        }
        scroll.total_item_count <= scroll.last_visible_index + self.load_threshold
    }
}
