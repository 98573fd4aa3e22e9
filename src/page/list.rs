//! Ordered list of editable rows of one kind.

use std::fmt;

use futures::stream::Stream;

use super::rows::Row;
use crate::common::Property;

/// Stable handle to a row.
///
/// Handles are never reused within a list, so removing a row leaves every
/// other handle valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Non-entry rows pinned to the top or bottom of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pinned {
    /// The "Automatic" switch above DNS and route entries.
    AutomaticToggle,
    /// The action that appends a blank row.
    AddButton,
}

/// One position in a list's visual layout.
#[derive(Debug, PartialEq, Eq)]
pub enum Slot<'a, R> {
    /// Pinned row above all entries.
    Header(Pinned),
    /// An editable entry.
    Entry(RowId, &'a R),
    /// Pinned row below all entries.
    Footer(Pinned),
}

/// Ordered, mutable collection of rows.
///
/// Every mutation bumps the shared revision counter handed in at
/// construction, which is how the owning page learns that something
/// changed.
#[derive(Debug)]
pub struct RowList<R: Row> {
    entries: Vec<(RowId, R)>,
    next_id: u64,
    header: Option<Pinned>,
    revision: Property<u64>,
}

impl<R: Row> Default for RowList<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Row> RowList<R> {
    /// Creates an empty list with its own revision counter.
    pub fn new() -> Self {
        Self::with_revision(Property::new(0))
    }

    /// Creates an empty list publishing to an existing revision counter.
    pub(crate) fn with_revision(revision: Property<u64>) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            header: None,
            revision,
        }
    }

    /// Pins a header row above the entries.
    pub fn with_header(mut self, header: Pinned) -> Self {
        self.header = Some(header);
        self
    }

    /// Appends a row with the given text and returns its handle.
    pub fn append(&mut self, row: R) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, row));
        self.notify();
        id
    }

    /// Appends a row with every field empty.
    pub fn append_blank(&mut self) -> RowId {
        self.append(R::default())
    }

    /// Removes a row. Returns the removed row, or `None` for a stale handle.
    pub fn remove(&mut self, id: RowId) -> Option<R> {
        let index = self.position(id)?;
        let (_, row) = self.entries.remove(index);
        self.notify();
        Some(row)
    }

    /// Replaces one field of a row. Returns false for a stale handle.
    pub fn set_text(&mut self, id: RowId, field: R::Field, text: impl Into<String>) -> bool {
        let Some((_, row)) = self.entries.iter_mut().find(|(row_id, _)| *row_id == id) else {
            return false;
        };
        row.set_text(field, text.into());
        self.notify();
        true
    }

    /// Looks up a row by handle.
    pub fn get(&self, id: RowId) -> Option<&R> {
        self.entries
            .iter()
            .find(|(row_id, _)| *row_id == id)
            .map(|(_, row)| row)
    }

    /// Current position of a row, counting blank rows.
    pub fn position(&self, id: RowId) -> Option<usize> {
        self.entries.iter().position(|(row_id, _)| *row_id == id)
    }

    /// Rows in current order.
    ///
    /// The iterator is lazy and can be cloned to restart from the current
    /// position; calling `rows` again starts from the top.
    pub fn rows(&self) -> impl Iterator<Item = (RowId, &R)> + Clone + '_ {
        self.entries.iter().map(|(id, row)| (*id, row))
    }

    /// Number of rows, blank ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the list holds no rows at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The pinned header, if any.
    pub fn header(&self) -> Option<Pinned> {
        self.header
    }

    /// The pinned footer. Every list ends with the add action.
    pub fn footer(&self) -> Pinned {
        Pinned::AddButton
    }

    /// Header, entries and footer in display order.
    pub fn layout(&self) -> impl Iterator<Item = Slot<'_, R>> + '_ {
        self.header
            .map(Slot::Header)
            .into_iter()
            .chain(self.rows().map(|(id, row)| Slot::Entry(id, row)))
            .chain(std::iter::once(Slot::Footer(self.footer())))
    }

    /// Current revision of the shared counter.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Stream of revisions, starting with the current one.
    pub fn changes(&self) -> impl Stream<Item = u64> + Send {
        self.revision.watch()
    }

    fn notify(&self) {
        self.revision.update(|revision| *revision = revision.wrapping_add(1));
    }
}
