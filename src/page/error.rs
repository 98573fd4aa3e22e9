use thiserror::Error;

use super::{RowId, RowKind, entry::EntryError};
use crate::settings::{Ip6Method, VerifyError};

/// A row that stopped a commit.
///
/// `index` counts every row of the list in commit order, blank rows
/// included, so it matches what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} row {}: {reason}", .index + 1)]
pub struct ValidationError {
    /// List holding the row.
    pub kind: RowKind,
    /// Position of the row in its list.
    pub index: usize,
    /// Handle of the row, for highlighting.
    pub row: RowId,
    /// Why the row was rejected.
    pub reason: EntryError,
}

/// Errors reported by an editor page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// A row failed to parse; nothing was applied.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The rebuilt setting is inconsistent; nothing was applied.
    #[error("setting is inconsistent: {0}")]
    Verify(#[from] VerifyError),

    /// The method selector was asked for a method it does not offer.
    #[error("method '{0}' cannot be selected directly")]
    MethodNotSelectable(Ip6Method),
}
