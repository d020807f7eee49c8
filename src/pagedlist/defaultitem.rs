//! Default item implementation and delegate for paged lists.
//!
//! `DefaultItem` is a simple two-line item with a title and a description;
//! `DefaultDelegate` renders it with lipgloss styling and display-width-aware
//! truncation. Both are drop-in implementations for hosts that do not need
//! custom item types.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_paging::pagedlist::{DefaultDelegate, DefaultItem};
//!
//! let item = DefaultItem::new("The Left Hand of Darkness", "Ursula K. Le Guin");
//! let delegate = DefaultDelegate::new().with_width(40);
//! ```

use super::types::ItemDelegate;
use super::Model;
use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `text` to at most `max_width` terminal columns, appending an
/// ellipsis when anything was cut. A `max_width` of 0 disables truncation.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 || text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Styling for the default item renderer.
#[derive(Debug, Clone)]
pub struct DefaultItemStyles {
    /// Style applied to the title line.
    pub title: Style,
    /// Style applied to the description line.
    pub desc: Style,
}

impl Default for DefaultItemStyles {
    fn default() -> Self {
        let title = Style::new()
            .foreground(Color::from("#dddddd"))
            .padding_left(2);
        let desc = title.clone().foreground(Color::from("#777777"));
        Self { title, desc }
    }
}

/// Simple item with a title and a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultItem {
    /// Main item text.
    pub title: String,
    /// Secondary item text (optional display).
    pub desc: String,
}

impl DefaultItem {
    /// Creates a new default item with title and description.
    pub fn new(title: &str, desc: &str) -> Self {
        Self {
            title: title.to_string(),
            desc: desc.to_string(),
        }
    }
}

impl std::fmt::Display for DefaultItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Delegate that renders [`DefaultItem`] instances.
#[derive(Debug, Clone)]
pub struct DefaultDelegate {
    /// Whether to show the description beneath the title.
    pub show_description: bool,
    /// Styling for the two lines.
    pub styles: DefaultItemStyles,
    width: usize,
    spacing: usize,
}

impl Default for DefaultDelegate {
    fn default() -> Self {
        Self {
            show_description: true,
            styles: Default::default(),
            width: 0,
            spacing: 1,
        }
    }
}

impl DefaultDelegate {
    /// Creates a delegate with default styles and layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the available width in terminal columns (builder pattern).
    ///
    /// Rendered lines are truncated to this width; 0 (the default) leaves
    /// lines untruncated.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the available width in terminal columns.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }
}

impl ItemDelegate<DefaultItem> for DefaultDelegate {
    fn render(&self, _m: &Model<DefaultItem>, _index: usize, item: &DefaultItem) -> String {
        let title = self
            .styles
            .title
            .render(&truncate_to_width(&item.title, self.width));

        if self.show_description && !item.desc.is_empty() {
            let desc = self
                .styles
                .desc
                .render(&truncate_to_width(&item.desc, self.width));
            format!("{}\n{}", title, desc)
        } else {
            title
        }
    }

    fn height(&self) -> usize {
        if self.show_description {
            2
        } else {
            1
        }
    }

    fn spacing(&self) -> usize {
        self.spacing
    }
}
