//! Domain layer - Journal models and entry composition

pub mod catalog;
pub mod date_input;
pub mod draft;
pub mod entry;
pub mod profile;

pub use date_input::{parse_date, DateInput};
pub use draft::{DraftAction, DraftField, DraftStatus, EntryDraft};
pub use entry::{Entry, EntryId, EntryKind, EntryType, NewEntry};
pub use profile::{Profile, ProfileId};
