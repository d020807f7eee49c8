#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-paging/")]

//! # bubbletea-paging
//!
//! Incremental-loading paged list components for terminal applications built
//! with [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs).
//!
//! ## Overview
//!
//! bubbletea-paging provides the state machine behind an "infinite scroll"
//! list: a controller that owns a page-by-page item collection, decides when
//! to request more data, tracks how much has been loaded, reconciles list
//! mutations with an in-flight or failed fetch, and tells the host list
//! exactly which index ranges changed. The host view stays in charge of
//! layout, rendering, and input; this crate supplies the loading brain.
//!
//! ## Components
//!
//! - **`pagedlist::Model<I>`**: the controller owning the item collection,
//!   load state, offset/page bookkeeping, mutation operations, and the
//!   change journal
//! - **`config::PagingConfig`**: page size, prefetch threshold, data limit
//! - **`scroll::ProximityTrigger` / `scroll::ScrollMsg`**: turns raw
//!   scroll signals into load-more decisions
//! - **`pagedlist::ItemDelegate` / `pagedlist::FooterDelegate`**: the two
//!   render capabilities a host implements (or takes from `defaultitem` /
//!   `defaultfooter`)
//!
//! ## The load cycle
//!
//! The controller initiates loads but never performs them. Register one
//! load callback (window form `(offset, count)` or page form
//! `(page number)`); when the controller wants data it invokes the callback
//! and shows a progress footer. The caller fetches however it likes and
//! eventually completes the cycle with `append` (the new page) or
//! `report_error` (show the error footer with a retry affordance).
//!
//! ```rust
//! use bubbletea_paging::prelude::*;
//!
//! let config = PagingConfig::new().with_page_size(20).with_load_threshold(2);
//! let mut list: PagedList<String> = PagedList::new(Vec::new(), config);
//! list.set_on_load_window(|offset, count| {
//!     // kick off an asynchronous fetch of `count` items at `offset`
//!     let _ = (offset, count);
//! });
//!
//! // Usually driven by scroll proximity; hosts start the first load directly.
//! list.request_more();
//! assert_eq!(list.state(), PageState::Loading);
//!
//! list.append((0..20).map(|i| format!("item {i}")).collect());
//! assert_eq!(list.state(), PageState::Loaded);
//! assert_eq!(list.len(), 20);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! Scroll signals travel as ordinary messages: construct a
//! [`scroll::ScrollMsg`] from your layout state and forward it through
//! [`pagedlist::Model::update`], the same way other components consume
//! their messages. After each batch of operations, drain
//! [`pagedlist::Model::take_changes`] and apply the ranges to whatever the
//! host view maintains.
//!
//! ```rust
//! use bubbletea_paging::prelude::*;
//! use bubbletea_rs::Msg;
//!
//! let mut list: PagedList<String> = PagedList::new(Vec::new(), PagingConfig::default());
//! let scroll: Msg = Box::new(ScrollMsg {
//!     total_item_count: 0,
//!     last_visible_index: 0,
//!     vertical_delta: 1,
//! });
//! list.update(&scroll);
//! # let _ = list.take_changes();
//! ```
//!
//! ## Quick Start
//!
//! Add bubbletea-paging to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bubbletea-paging = "0.1"
//! bubbletea-rs = "0.0.7"
//! crossterm = "0.29"
//! ```
//!
//! For convenience, you can import the prelude:
//!
//! ```rust
//! use bubbletea_paging::prelude::*;
//! ```

pub mod config;
pub mod key;
pub mod pagedlist;
pub mod scroll;

pub use config::PagingConfig;
pub use pagedlist::Model as PagedList;
pub use pagedlist::{
    DefaultDelegate, DefaultItem, DefaultItemStyles, ErrorFooter, FooterDelegate, FooterTickMsg,
    Item, ItemDelegate, ListChange, LoadPageCallback, LoadWindowCallback, PageState,
    ProgressFooter, SlotKind, PROGRESS_FRAMES,
};
pub use scroll::{ProximityTrigger, ScrollMsg};

/// Prelude module for convenient imports.
///
/// Re-exports the types most applications touch: the controller, its
/// configuration, states and notifications, the render capabilities, and
/// the default renderers.
///
/// # Usage
///
/// ```rust
/// use bubbletea_paging::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::PagingConfig;
    pub use crate::key::Binding;
    pub use crate::pagedlist::Model as PagedList;
    pub use crate::pagedlist::{
        DefaultDelegate, DefaultItem, DefaultItemStyles, ErrorFooter, FooterDelegate,
        FooterTickMsg, Item, ItemDelegate, ListChange, PageState, ProgressFooter, SlotKind,
    };
    pub use crate::scroll::{ProximityTrigger, ScrollMsg};
}
