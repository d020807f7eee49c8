//! Core types and traits for the paged list controller.
//!
//! This module contains the fundamental types that define the controller's
//! contract with a host list view:
//! - `Item` marker trait for data items
//! - `PageState` load state machine
//! - `SlotKind` classification of display slots
//! - `ListChange` index-range change notifications
//! - `ItemDelegate` and `FooterDelegate` render capabilities
//! - Load callback type aliases

use bubbletea_rs::{Cmd, Msg};
use std::fmt::Display;

/// Marker trait for items a paged list can hold.
///
/// Items must be displayable (for default rendering), cloneable (pages are
/// handed to the controller by value), and comparable by equality (so items
/// can be removed by value with [`super::Model::remove_item`]).
///
/// A blanket implementation covers every type with those bounds, so most
/// item types need no explicit `impl`.
///
/// # Examples
///
/// ```rust
/// use bubbletea_paging::pagedlist::Item;
/// use std::fmt::Display;
///
/// #[derive(Clone, PartialEq)]
/// struct Book {
///     title: String,
///     author: String,
/// }
///
/// impl Display for Book {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{} by {}", self.title, self.author)
///     }
/// }
///
/// fn assert_item<I: Item>() {}
/// assert_item::<Book>();
/// ```
pub trait Item: Display + Clone + PartialEq {}

impl<T: Display + Clone + PartialEq> Item for T {}

/// Load state of a paged list.
///
/// The state governs two derived facts the host list needs: whether a
/// trailing footer slot exists (`Loading` and `Error` only) and which footer
/// capability renders it (progress for `Loading`, error-with-retry for
/// `Error`).
///
/// Transitions:
/// ```text
/// Loaded  → Loading       (request_more)
/// Error   → Loading       (retry)
/// Loading → Loaded        (append)
/// Loading → ReachedLimit  (append returning a short page or hitting the limit)
/// Loading → Error         (report_error)
/// any     → Loaded        (reset)
/// ```
/// `ReachedLimit` is terminal except for an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
    /// The last requested page arrived; the list is idle and eligible for
    /// another load.
    #[default]
    Loaded,
    /// A load is in flight; a progress footer trails the items.
    Loading,
    /// The last load failed; an error footer with a retry affordance trails
    /// the items.
    Error,
    /// No further loads will be attempted: either the data limit was hit or
    /// a page arrived with fewer items than the page size.
    ReachedLimit,
}

impl PageState {
    /// Returns true when a trailing footer slot exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_paging::pagedlist::PageState;
    ///
    /// assert!(PageState::Loading.has_footer());
    /// assert!(PageState::Error.has_footer());
    /// assert!(!PageState::Loaded.has_footer());
    /// assert!(!PageState::ReachedLimit.has_footer());
    /// ```
    pub fn has_footer(self) -> bool {
        matches!(self, PageState::Loading | PageState::Error)
    }
}

/// What occupies one slot of the displayed sequence.
///
/// Derived purely from `(position, item count, state)` by
/// [`super::Model::slot_at`]; replaces ambient integer view-type tags with a
/// closed union.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// A data item backed by the controller's collection.
    Item,
    /// The trailing footer while a load is in flight.
    FooterProgress,
    /// The trailing footer after a failed load.
    FooterError,
}

/// An index-range change notification for the host list.
///
/// The controller records one `ListChange` per structural mutation, in the
/// exact order the mutations logically happen, so a host maintaining a
/// parallel index-based view stays consistent by replaying them 1:1.
/// Footer slots participate: a footer appearing at the end of the list is an
/// `Inserted` of count 1 at the trailing index, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    /// `count` slots were inserted starting at `start`.
    Inserted {
        /// First inserted index.
        start: usize,
        /// Number of inserted slots.
        count: usize,
    },
    /// `count` slots were removed starting at `start`.
    Removed {
        /// First removed index.
        start: usize,
        /// Number of removed slots.
        count: usize,
    },
    /// The slot at `index` changed in place and should be re-rendered.
    Changed {
        /// The changed index.
        index: usize,
    },
}

/// Callback requesting the next page as an item window.
///
/// Invoked with `(offset, count)`: fetch `count` items starting at item
/// `offset`. The caller must eventually resolve the request by calling
/// [`super::Model::append`] or [`super::Model::report_error`].
pub type LoadWindowCallback = Box<dyn FnMut(usize, usize) + Send>;

/// Callback requesting the next page by 1-indexed page number.
///
/// Only consulted when no window callback is registered. The caller must
/// eventually resolve the request by calling [`super::Model::append`] or
/// [`super::Model::report_error`].
pub type LoadPageCallback = Box<dyn FnMut(usize) + Send>;

/// Render capability for data items.
///
/// The host list asks the delegate to render each slot classified as
/// [`SlotKind::Item`]. The controller itself never renders; it only supplies
/// the item and surrounding state.
///
/// # Examples
///
/// ```rust
/// use bubbletea_paging::pagedlist::{Item, ItemDelegate, Model};
///
/// struct PlainDelegate;
///
/// impl<I: Item> ItemDelegate<I> for PlainDelegate {
///     fn render(&self, _m: &Model<I>, index: usize, item: &I) -> String {
///         format!("{:>3}. {}", index + 1, item)
///     }
/// }
/// ```
pub trait ItemDelegate<I: Item> {
    /// Renders the item at `index` as a styled string.
    fn render(&self, m: &super::Model<I>, index: usize, item: &I) -> String;

    /// Height in terminal lines of one rendered item.
    fn height(&self) -> usize {
        1
    }

    /// Blank lines between items.
    fn spacing(&self) -> usize {
        0
    }

    /// Handles messages addressed to item slots; most delegates need none.
    fn update(&mut self, _msg: &Msg, _m: &mut super::Model<I>) -> Option<Cmd> {
        None
    }
}

/// Render capability for the trailing footer slot.
///
/// The host list asks the delegate to render the footer whenever
/// [`super::Model::slot_at`] classifies the trailing index as
/// [`SlotKind::FooterProgress`] or [`SlotKind::FooterError`]. The current
/// [`PageState`] is supplied at render time; the delegate decides what each
/// state looks like.
///
/// `update` gives footer implementations a way to react to messages: the
/// default progress footer advances its animation on tick messages, and the
/// default error footer watches for its retry key and calls
/// [`super::Model::retry`].
pub trait FooterDelegate<I: Item> {
    /// Renders the footer for the given state.
    ///
    /// Called only while a footer slot exists; implementations should return
    /// an empty string for states they do not display.
    fn render(&self, state: PageState) -> String;

    /// Height in terminal lines of the rendered footer.
    fn height(&self) -> usize {
        1
    }

    /// Handles messages addressed to the footer.
    fn update(&mut self, _msg: &Msg, _m: &mut super::Model<I>) -> Option<Cmd> {
        None
    }
}
