//! Default footer capabilities for paged lists.
//!
//! Two ready-made [`FooterDelegate`](super::FooterDelegate) implementations
//! cover the common cases:
//!
//! - [`ProgressFooter`] renders an animated frame while a load is in
//!   flight. Animation runs on [`FooterTickMsg`] messages routed by a unique
//!   per-footer id; the host schedules the first tick with
//!   [`ProgressFooter::tick`] when a load starts and forwards subsequent
//!   tick messages through the footer's `update`.
//! - [`ErrorFooter`] renders the failure message after a failed load, plus
//!   a retry hint; its `update` watches for the retry key (default `r`) and
//!   calls [`Model::retry`](super::Model::retry).
//!
//! Hosts wanting different visuals implement
//! [`FooterDelegate`](super::FooterDelegate) themselves.

use super::types::{FooterDelegate, Item, PageState};
use super::Model;
use crate::key::Binding;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management so tick messages reach the right footer instance.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Frames cycled by the default progress footer.
pub static PROGRESS_FRAMES: Lazy<Vec<String>> = Lazy::new(|| {
    ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]
        .iter()
        .map(|frame| frame.to_string())
        .collect()
});

/// Message that advances a progress footer's animation by one frame.
///
/// Carries the id of the footer it belongs to; footers ignore ticks
/// addressed to other instances.
#[derive(Debug)]
pub struct FooterTickMsg {
    /// When the tick fired.
    pub time: std::time::SystemTime,
    /// Id of the footer this tick belongs to.
    pub id: i64,
}

/// Footer that shows animated progress while a load is in flight.
///
/// # Examples
///
/// ```rust
/// use bubbletea_paging::pagedlist::{FooterDelegate, PageState, ProgressFooter};
///
/// let footer = ProgressFooter::new();
/// let rendered: String =
///     FooterDelegate::<String>::render(&footer, PageState::Loading);
/// assert!(!rendered.is_empty());
///
/// // Nothing renders unless a load is in flight.
/// let idle: String = FooterDelegate::<String>::render(&footer, PageState::Loaded);
/// assert!(idle.is_empty());
/// ```
pub struct ProgressFooter {
    id: i64,
    frame: usize,
    fps: Duration,
    /// Style applied to the whole rendered line.
    pub style: Style,
    /// Text shown next to the animated frame.
    pub label: String,
}

impl Default for ProgressFooter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressFooter {
    /// Creates a progress footer with default frames and styling.
    pub fn new() -> Self {
        Self {
            id: next_id(),
            frame: 0,
            fps: Duration::from_millis(100),
            style: Style::new().foreground(Color::from("#EE6FF8")).padding_left(2),
            label: "Loading...".to_string(),
        }
    }

    /// Returns this footer's unique id, used to route tick messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Creates the command that schedules the next animation frame.
    ///
    /// Hosts return this from their `update` when a load starts; afterwards
    /// the footer reschedules itself from
    /// [`update`](FooterDelegate::update) for as long as the load is in
    /// flight.
    pub fn tick(&self) -> Cmd {
        let id = self.id;
        let fps = self.fps;
        bubbletea_tick(fps, move |_| {
            Box::new(FooterTickMsg {
                time: std::time::SystemTime::now(),
                id,
            }) as Msg
        })
    }
}

impl<I: Item> FooterDelegate<I> for ProgressFooter {
    fn render(&self, state: PageState) -> String {
        if state != PageState::Loading {
            return String::new();
        }
        let frame = &PROGRESS_FRAMES[self.frame % PROGRESS_FRAMES.len()];
        self.style.render(&format!("{} {}", frame, self.label))
    }

    fn update(&mut self, msg: &Msg, m: &mut Model<I>) -> Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<FooterTickMsg>() {
            if tick_msg.id != self.id {
                return None;
            }
            self.frame = (self.frame + 1) % PROGRESS_FRAMES.len();
            // Keep animating only while a load is actually in flight.
            if m.state() == PageState::Loading {
                return Some(self.tick());
            }
        }
        None
    }
}

/// Footer that shows the failure message after a failed load.
///
/// Renders only in [`PageState::Error`]; its `update` watches for the retry
/// key and calls [`Model::retry`](super::Model::retry), which re-requests
/// the failed window.
pub struct ErrorFooter {
    /// Message shown when a load has failed.
    pub message: String,
    /// Key binding that triggers a retry.
    pub retry_key: Binding,
    /// Style applied to the failure message.
    pub style: Style,
    /// Style applied to the retry hint.
    pub hint_style: Style,
}

impl Default for ErrorFooter {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorFooter {
    /// Creates an error footer with the default message and `r` retry key.
    pub fn new() -> Self {
        Self {
            message: "Couldn't load more items.".to_string(),
            retry_key: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "retry"),
            style: Style::new().foreground(Color::from("#FF5F87")).padding_left(2),
            hint_style: Style::new().foreground(Color::from("#777777")),
        }
    }
}

impl<I: Item> FooterDelegate<I> for ErrorFooter {
    fn render(&self, state: PageState) -> String {
        if state != PageState::Error {
            return String::new();
        }
        let hint = format!("(press {} to retry)", self.retry_key.help);
        format!(
            "{} {}",
            self.style.render(&self.message),
            self.hint_style.render(&hint)
        )
    }

    fn update(&mut self, msg: &Msg, m: &mut Model<I>) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.retry_key.matches(key_msg) {
                // retry() is a no-op outside the error state.
                m.retry();
            }
        }
        None
    }
}
