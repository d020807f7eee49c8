//! Incremental-loading paged list controller with footer states and
//! customizable rendering.
//!
//! This module exposes a generic `Model<I: Item>` plus supporting traits and
//! submodules:
//! - `Item`: blanket-implemented marker for displayable, comparable items
//! - `ItemDelegate` / `FooterDelegate`: the two render capabilities a host
//!   list supplies
//! - Submodules: `defaultitem` and `defaultfooter` with drop-in renderers
//!
//! ## Architecture Overview
//!
//! The controller sits between a data source and a host list view:
//!
//! ```text
//! scroll signals ──► proximity trigger ──► request_more()
//!                                              │ invokes load callback
//!                                              ▼
//!                                   caller fetches asynchronously
//!                                              │
//!                          append(page) ◄──────┴──────► report_error()
//!                                              │
//!                       ListChange journal ──► host re-renders ranges
//! ```
//!
//! ### Load states
//!
//! [`PageState`] has four states. `Loading` and `Error` add a synthetic
//! trailing footer slot to the displayed sequence; `Loaded` and
//! `ReachedLimit` do not. The footer's sub-kind (progress vs error) follows
//! the state, and [`Model::slot_at`] classifies any position into the closed
//! [`SlotKind`] union so hosts never juggle magic view-type numbers.
//!
//! ### Change notifications
//!
//! Every mutation journals [`ListChange`] values in the exact order a host
//! maintaining a parallel index-based view must apply them (footer removal
//! before page insertion, single removal before trailing-page eviction, and
//! so on). Drain the journal with [`Model::take_changes`] after each batch
//! of operations.
//!
//! ### One outstanding load
//!
//! The controller is single-threaded and non-blocking. While a load is in
//! flight (`Loading`), further requests are no-ops; the caller completes the
//! cycle with [`Model::append`] or [`Model::report_error`] from the same
//! event thread. Structural edits made while a load is in flight are the
//! caller's responsibility to reconcile with the eventual completion.

// Module declarations

/// Default item implementation and delegate for basic paged lists.
///
/// Provides `DefaultItem` (title + description) and `DefaultDelegate`, a
/// lipgloss-styled renderer with width-aware truncation.
pub mod defaultitem;

/// Default footer capabilities: animated progress and error-with-retry.
pub mod defaultfooter;

// Internal modules
mod model;
mod types;

#[cfg(test)]
mod tests;

/// The paged list controller.
///
/// Owns the item collection, the load state machine, and the page/offset
/// bookkeeping; see the module docs for the overall flow.
pub use model::Model;

/// Core traits and types for paged list functionality.
pub use types::{
    FooterDelegate, Item, ItemDelegate, ListChange, LoadPageCallback, LoadWindowCallback,
    PageState, SlotKind,
};

/// Ready-to-use renderers for common paged list scenarios.
pub use defaultfooter::{ErrorFooter, FooterTickMsg, ProgressFooter, PROGRESS_FRAMES};
pub use defaultitem::{DefaultDelegate, DefaultItem, DefaultItemStyles};
