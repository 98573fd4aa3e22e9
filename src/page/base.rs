//! Behaviour shared by every connection editor page.

use futures::stream::Stream;

use super::PageError;
use crate::common::Property;

/// Title, initialization flag and change counter of a page.
#[derive(Debug, Clone)]
pub struct PageBase {
    title: String,
    initialized: Property<bool>,
    revision: Property<u64>,
}

impl PageBase {
    /// Creates an uninitialized page publishing changes to `revision`.
    pub fn new(title: impl Into<String>, revision: Property<u64>) -> Self {
        Self {
            title: title.into(),
            initialized: Property::new(false),
            revision,
        }
    }

    /// Marks the page as populated from its setting.
    pub fn complete_init(&self) {
        self.initialized.set(true);
    }

    /// Page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the page has been populated.
    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    /// Stream of the initialization flag, starting with its current value.
    pub fn initialized(&self) -> impl Stream<Item = bool> + Send {
        self.initialized.watch()
    }

    /// Current revision of the change counter.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Stream of revisions, starting with the current one.
    pub fn changes(&self) -> impl Stream<Item = u64> + Send {
        self.revision.watch()
    }
}

/// A page editing one setting of a connection.
pub trait ConnectionPage {
    /// Setting this page edits.
    type Setting;

    /// Shared page state.
    fn base(&self) -> &PageBase;

    /// Page title.
    fn title(&self) -> &str {
        self.base().title()
    }

    /// Whether the page has been populated.
    fn is_initialized(&self) -> bool {
        self.base().is_initialized()
    }

    /// Stream of change revisions.
    fn changes(&self) -> impl Stream<Item = u64> + Send {
        self.base().changes()
    }

    /// Writes the page's edits into `setting`.
    ///
    /// Pages with nothing to check accept every setting unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error when the edits cannot be applied; `setting` is
    /// then left untouched.
    fn validate(&self, _setting: &mut Self::Setting) -> Result<(), PageError> {
        Ok(())
    }
}
