//! Key binding support for footer affordances.
//!
//! The default error footer ships with a retry binding, and hosts can build
//! their own bindings for custom footers. A [`Binding`] is a set of key
//! codes plus the help text describing them.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// A named set of keys that trigger one action.
///
/// # Examples
///
/// ```rust
/// use bubbletea_paging::key::Binding;
/// use crossterm::event::KeyCode;
///
/// let retry = Binding::new(vec![KeyCode::Char('r'), KeyCode::Enter])
///     .with_help("r", "retry the failed load");
/// assert_eq!(retry.help, "r");
/// assert_eq!(retry.description, "retry the failed load");
/// ```
#[derive(Debug, Clone)]
pub struct Binding {
    /// Key codes that activate this binding.
    pub keys: Vec<KeyCode>,
    /// Short key label for help text (e.g. "r").
    pub help: String,
    /// Description of the action (e.g. "retry").
    pub description: String,
}

impl Binding {
    /// Creates a binding for the given key codes.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: String::new(),
            description: String::new(),
        }
    }

    /// Sets the key label and action description (builder pattern).
    pub fn with_help(mut self, help: impl Into<String>, description: impl Into<String>) -> Self {
        self.help = help.into();
        self.description = description.into();
        self
    }

    /// Returns true when the key message matches one of the bound keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_paging::key::Binding;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let retry = Binding::new(vec![KeyCode::Char('r')]);
    /// let press = KeyMsg {
    ///     key: KeyCode::Char('r'),
    ///     modifiers: KeyModifiers::empty(),
    /// };
    /// assert!(retry.matches(&press));
    /// ```
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.keys.contains(&key_msg.key)
    }
}
