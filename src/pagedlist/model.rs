//! The paged list controller model.
//!
//! This module contains the `Model` struct that owns the item collection,
//! the load state machine, and the page/offset bookkeeping, along with every
//! public mutation operation and the derived queries a host list needs.

use super::types::{
    Item, ListChange, LoadPageCallback, LoadWindowCallback, PageState, SlotKind,
};
use crate::config::PagingConfig;
use crate::scroll::{ProximityTrigger, ScrollMsg};
use bubbletea_rs::Msg;

/// An incremental-loading paged list controller.
///
/// `Model<I>` owns an ordered collection of items that grows one page at a
/// time. It decides when more data is needed, invokes a caller-supplied load
/// callback with the next fetch window, and reconciles the collection with
/// the load's eventual outcome ([`append`](Model::append) on success,
/// [`report_error`](Model::report_error) on failure). Every structural
/// mutation is journaled as [`ListChange`] notifications, in the exact order
/// the host list must replay them.
///
/// The controller never fetches and never renders. Fetching belongs to the
/// registered callback; rendering belongs to the host's
/// [`ItemDelegate`](super::ItemDelegate) and
/// [`FooterDelegate`](super::FooterDelegate) implementations, which the host
/// invokes per slot after classifying it with [`slot_at`](Model::slot_at).
///
/// # Load cycle
///
/// ```text
/// request_more()  ── invokes callback(offset, count), state → Loading,
///                    footer appears
/// append(page)    ── state → Loaded (or ReachedLimit), footer removed,
///                    items inserted, offset advanced
/// report_error()  ── state → Error, footer switches to the error capability
/// retry()         ── re-requests the same window, state → Loading
/// ```
///
/// At most one load is logically outstanding: while the state is `Loading`,
/// [`request_more`](Model::request_more) is a guaranteed no-op. That is the
/// sole concurrency-control mechanism; all operations are expected to run on
/// one event thread and none of them block.
///
/// # Examples
///
/// ```rust
/// use bubbletea_paging::config::PagingConfig;
/// use bubbletea_paging::pagedlist::{Model, PageState};
/// use std::sync::{Arc, Mutex};
///
/// let config = PagingConfig::new().with_page_size(20).with_load_threshold(2);
/// let mut list: Model<String> = Model::new(Vec::new(), config);
///
/// let requested = Arc::new(Mutex::new(Vec::new()));
/// let seen = requested.clone();
/// list.set_on_load_window(move |offset, count| {
///     seen.lock().unwrap().push((offset, count));
/// });
///
/// list.request_more();
/// assert_eq!(requested.lock().unwrap().as_slice(), &[(0, 20)]);
/// assert_eq!(list.state(), PageState::Loading);
///
/// list.append((0..20).map(|i| format!("item {i}")).collect());
/// assert_eq!(list.state(), PageState::Loaded);
/// assert_eq!(list.len(), 20);
/// assert_eq!(list.next_offset(), 20);
/// ```
pub struct Model<I: Item> {
    items: Vec<I>,
    state: PageState,
    config: PagingConfig,
    // Start of the next fetch window; advances by one page per successful
    // append, retreats by one page per removal.
    next_offset: usize,
    changes: Vec<ListChange>,
    on_load_window: Option<LoadWindowCallback>,
    on_load_page: Option<LoadPageCallback>,
}

impl<I: Item> Model<I> {
    /// Creates a controller over an initial (possibly empty) collection.
    ///
    /// The controller starts in [`PageState::Loaded`] with the next fetch
    /// window at offset 0, regardless of the initial collection's size; the
    /// first successful [`append`](Model::append) is treated as the first
    /// page.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_paging::config::PagingConfig;
    /// use bubbletea_paging::pagedlist::{Model, PageState};
    ///
    /// let list: Model<String> = Model::new(Vec::new(), PagingConfig::default());
    /// assert_eq!(list.state(), PageState::Loaded);
    /// assert_eq!(list.next_offset(), 0);
    /// assert_eq!(list.current_page(), 0);
    /// ```
    pub fn new(items: Vec<I>, config: PagingConfig) -> Self {
        Self {
            items,
            state: PageState::Loaded,
            config,
            next_offset: 0,
            changes: Vec::new(),
            on_load_window: None,
            on_load_page: None,
        }
    }

    /// Registers the window-form load callback.
    ///
    /// The callback receives `(offset, count)` and takes precedence over a
    /// registered page-form callback. Exactly one of the two forms should be
    /// registered.
    pub fn set_on_load_window<F>(&mut self, callback: F)
    where
        F: FnMut(usize, usize) + Send + 'static,
    {
        self.on_load_window = Some(Box::new(callback));
    }

    /// Registers the page-form load callback.
    ///
    /// The callback receives the 1-indexed number of the page being
    /// requested. Ignored while a window-form callback is registered.
    pub fn set_on_load_page<F>(&mut self, callback: F)
    where
        F: FnMut(usize) + Send + 'static,
    {
        self.on_load_page = Some(Box::new(callback));
    }

    /// Appends the next page of items.
    ///
    /// This is the success completion of a load started by
    /// [`request_more`](Model::request_more); `new_items` must be exactly
    /// the page that was requested.
    ///
    /// In order: the state becomes [`PageState::Loaded`]; if a footer slot
    /// was showing, its removal is journaled first; the items are appended
    /// and their insertion journaled; the fetch window advances by one page.
    /// Finally, limit detection runs as a pure state update with no further
    /// notification: if the list now holds at least the configured data
    /// limit, or the page was shorter than the page size, the state becomes
    /// [`PageState::ReachedLimit`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_paging::config::PagingConfig;
    /// use bubbletea_paging::pagedlist::{ListChange, Model, PageState};
    ///
    /// let config = PagingConfig::new().with_page_size(3);
    /// let mut list: Model<i32> = Model::new(Vec::new(), config);
    ///
    /// list.append(vec![1, 2, 3]);
    /// assert_eq!(list.state(), PageState::Loaded);
    /// assert_eq!(
    ///     list.take_changes(),
    ///     vec![ListChange::Inserted { start: 0, count: 3 }]
    /// );
    ///
    /// // A short page means the data source is exhausted.
    /// list.append(vec![4]);
    /// assert_eq!(list.state(), PageState::ReachedLimit);
    /// ```
    pub fn append(&mut self, new_items: Vec<I>) {
        let had_footer = self.state.has_footer();
        self.state = PageState::Loaded;
        if had_footer {
            self.changes.push(ListChange::Removed {
                start: self.items.len(),
                count: 1,
            });
        }

        let start = self.items.len();
        let added = new_items.len();
        self.items.extend(new_items);
        self.changes.push(ListChange::Inserted {
            start,
            count: added,
        });

        self.next_offset += self.config.page_size();

        if self.items.len() >= self.config.data_limit() || added < self.config.page_size() {
            self.state = PageState::ReachedLimit;
        }
    }

    /// Reports that the in-flight load failed.
    ///
    /// The failure completion of a load: the state becomes
    /// [`PageState::Error`] and a change notification is journaled for the
    /// footer slot, which switches from progress to the error capability in
    /// place. A no-op unless a load is in flight (`state == Loading`); with
    /// no load in flight there is no footer slot to repurpose.
    ///
    /// Recovery is [`retry`](Model::retry).
    pub fn report_error(&mut self) {
        if self.state != PageState::Loading {
            return;
        }
        self.state = PageState::Error;
        self.changes.push(ListChange::Changed {
            index: self.items.len(),
        });
    }

    /// Leaves the error state by requesting the failed window again.
    ///
    /// A no-op unless the state is [`PageState::Error`]. The offset did not
    /// advance on failure, so the callback receives the same window as the
    /// failed attempt.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_paging::config::PagingConfig;
    /// use bubbletea_paging::pagedlist::{Model, PageState};
    ///
    /// let mut list: Model<i32> = Model::new(Vec::new(), PagingConfig::default());
    /// list.retry(); // not in Error: nothing happens
    /// assert_eq!(list.state(), PageState::Loaded);
    ///
    /// list.request_more();
    /// list.report_error();
    /// assert_eq!(list.state(), PageState::Error);
    ///
    /// list.retry();
    /// assert_eq!(list.state(), PageState::Loading);
    /// ```
    pub fn retry(&mut self) {
        if self.state == PageState::Error {
            self.request_more();
        }
    }

    /// Requests one more page from the registered load callback.
    ///
    /// A no-op while the state is [`PageState::ReachedLimit`] (nothing left
    /// to fetch) or [`PageState::Loading`] (at most one load may be
    /// outstanding). Otherwise the window-form callback is invoked with
    /// `(next_offset, page_size)`, or, if only the page form is registered,
    /// with the next 1-indexed page number; then the state becomes
    /// [`PageState::Loading`] and the footer transition is journaled: an
    /// insertion at the trailing index when coming from `Loaded`, an
    /// in-place change when coming from `Error` (the slot already existed).
    ///
    /// Ordinarily this fires from the proximity trigger, from
    /// [`retry`](Model::retry), or from the refetch after
    /// [`remove_at`](Model::remove_at); it is public so hosts can kick off
    /// the initial load.
    pub fn request_more(&mut self) {
        if matches!(self.state, PageState::ReachedLimit | PageState::Loading) {
            return;
        }

        let page_size = self.config.page_size();
        if let Some(callback) = self.on_load_window.as_mut() {
            callback(self.next_offset, page_size);
        } else if let Some(callback) = self.on_load_page.as_mut() {
            callback(self.next_offset / page_size + 1);
        }

        let prev = self.state;
        self.state = PageState::Loading;
        match prev {
            PageState::Loaded => self.changes.push(ListChange::Inserted {
                start: self.items.len(),
                count: 1,
            }),
            PageState::Error => self.changes.push(ListChange::Changed {
                index: self.items.len(),
            }),
            _ => {}
        }
    }

    /// Inserts an item at `position`, evicting the current last item.
    ///
    /// The net item count is unchanged: the insertion is journaled, then the
    /// last item's removal. This keeps the loaded window aligned when a new
    /// item logically pushes an old one across the trailing page boundary;
    /// the evicted item should be the first of the next requested page.
    /// Keeping inserted items consistent with page ordering is the caller's
    /// responsibility.
    ///
    /// # Panics
    ///
    /// Panics if `position > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_paging::config::PagingConfig;
    /// use bubbletea_paging::pagedlist::Model;
    ///
    /// let mut list = Model::new(vec![1, 2, 3], PagingConfig::default());
    /// list.insert_at(0, 0);
    /// assert_eq!(list.items(), &[0, 1, 2]); // 3 fell off the end
    /// ```
    pub fn insert_at(&mut self, item: I, position: usize) {
        if position > self.items.len() {
            panic!(
                "insert position {} out of bounds (len {})",
                position,
                self.items.len()
            );
        }

        self.items.insert(position, item);
        self.changes.push(ListChange::Inserted {
            start: position,
            count: 1,
        });

        self.items.pop();
        self.changes.push(ListChange::Removed {
            start: self.items.len(),
            count: 1,
        });
    }

    /// Removes the item at `position` and refetches the trailing page.
    ///
    /// A no-op on an empty collection. Otherwise the item is removed and its
    /// removal journaled; then the trailing `page_size - 1` items are
    /// evicted as one journaled range so the list stays aligned to full-page
    /// boundaries; the fetch window retreats by one page; and
    /// [`request_more`](Model::request_more) fires unconditionally so the
    /// now-missing trailing page is refetched (the refetch is suppressed by
    /// the usual guard when a load is already in flight, but the bookkeeping
    /// above still happens).
    ///
    /// When fewer than `page_size - 1` items remain after the removal, the
    /// eviction clamps to what exists.
    ///
    /// # Panics
    ///
    /// Panics if the collection is non-empty and `position >= len()`.
    pub fn remove_at(&mut self, position: usize) {
        if self.items.is_empty() {
            return;
        }
        if position >= self.items.len() {
            panic!(
                "remove position {} out of bounds (len {})",
                position,
                self.items.len()
            );
        }

        self.items.remove(position);
        self.changes.push(ListChange::Removed {
            start: position,
            count: 1,
        });

        let len = self.items.len();
        let page_size = self.config.page_size();
        let evict = (page_size - 1).min(len);
        self.items.truncate(len - evict);
        if evict > 0 {
            // The journaled range spans one full page when the whole trailing
            // page could be evicted; clamped evictions cover what was removed.
            let count = if evict == page_size - 1 { page_size } else { evict };
            self.changes.push(ListChange::Removed {
                start: len - evict,
                count,
            });
        }

        self.next_offset = self.next_offset.saturating_sub(page_size);
        self.request_more();
    }

    /// Removes `item` by equality, if present.
    ///
    /// A no-op when the collection is empty or the item is absent; otherwise
    /// delegates to [`remove_at`](Model::remove_at) with the first matching
    /// index.
    pub fn remove_item(&mut self, item: &I) {
        if self.items.is_empty() {
            return;
        }
        if let Some(position) = self.items.iter().position(|candidate| candidate == item) {
            self.remove_at(position);
        }
    }

    /// Returns the controller to its initial state.
    ///
    /// If a footer was showing its removal is journaled first, then the
    /// removal of the whole prior extent; the collection is cleared, the
    /// fetch window returns to offset 0, and the state becomes
    /// [`PageState::Loaded`]. The next successful
    /// [`append`](Model::append) is treated as the first page.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_paging::config::PagingConfig;
    /// use bubbletea_paging::pagedlist::{Model, PageState};
    ///
    /// let config = PagingConfig::new().with_page_size(2);
    /// let mut list = Model::new(Vec::new(), config);
    /// list.append(vec![1, 2]);
    /// list.append(vec![3]); // short page
    /// assert_eq!(list.state(), PageState::ReachedLimit);
    ///
    /// list.reset();
    /// assert_eq!(list.state(), PageState::Loaded);
    /// assert!(list.is_empty());
    /// assert_eq!(list.next_offset(), 0);
    /// ```
    pub fn reset(&mut self) {
        let prev = self.state;
        self.state = PageState::Loaded;

        let len = self.items.len();
        if prev.has_footer() {
            self.changes.push(ListChange::Removed {
                start: len,
                count: 1,
            });
        }

        self.items.clear();
        self.changes.push(ListChange::Removed {
            start: 0,
            count: len,
        });

        self.next_offset = 0;
    }

    /// Routes messages to the controller.
    ///
    /// Currently this handles [`ScrollMsg`]: the proximity trigger evaluates
    /// the scroll signal against the current state and configured load
    /// threshold, and calls [`request_more`](Model::request_more) when the
    /// viewport is close enough to the end. Other messages are ignored.
    ///
    /// Hosts forward their scroll signals here from the application's
    /// `update`, the same way other components consume their messages.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(scroll) = msg.downcast_ref::<ScrollMsg>() {
            let trigger = ProximityTrigger::new(self.config.load_threshold());
            if trigger.should_request(self.state, scroll) {
                self.request_more();
            }
        }
    }

    /// Drains the journaled change notifications.
    ///
    /// Returns every [`ListChange`] recorded since the previous drain, in
    /// emission order, leaving the journal empty. Hosts translate these 1:1
    /// into their own incremental update mechanism after each batch of
    /// operations.
    pub fn take_changes(&mut self) -> Vec<ListChange> {
        std::mem::take(&mut self.changes)
    }

    /// Total number of display slots: the items plus the footer, when one
    /// exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_paging::config::PagingConfig;
    /// use bubbletea_paging::pagedlist::Model;
    ///
    /// let mut list = Model::new(vec![1, 2, 3], PagingConfig::default());
    /// assert_eq!(list.item_count(), 3);
    ///
    /// list.request_more();
    /// assert_eq!(list.item_count(), 4); // progress footer appeared
    /// ```
    pub fn item_count(&self) -> usize {
        self.items.len() + usize::from(self.state.has_footer())
    }

    /// Classifies the display slot at `position`.
    ///
    /// The trailing index (`position == len()`) is a footer slot only while
    /// one exists, and its sub-kind follows the state; every other position
    /// is an item slot.
    pub fn slot_at(&self, position: usize) -> SlotKind {
        if position == self.items.len() {
            match self.state {
                PageState::Loading => return SlotKind::FooterProgress,
                PageState::Error => return SlotKind::FooterError,
                _ => {}
            }
        }
        SlotKind::Item
    }

    /// Number of data items (excluding any footer slot).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the controller holds no data items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The data items in display order.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// The current load state.
    pub fn state(&self) -> PageState {
        self.state
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &PagingConfig {
        &self.config
    }

    /// Offset of the next fetch window.
    pub fn next_offset(&self) -> usize {
        self.next_offset
    }

    /// Number of full pages loaded so far (0 before the first page).
    ///
    /// Kept consistent with the offset at all times; the page-form load
    /// callback requests `current_page() + 1`.
    pub fn current_page(&self) -> usize {
        self.next_offset / self.config.page_size()
    }
}
