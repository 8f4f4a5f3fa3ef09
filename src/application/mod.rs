//! Application layer - Stores, session and derived views

pub mod entry_store;
pub mod manage_config;
pub mod profile_store;
pub mod session;
pub mod views;

pub use entry_store::EntryStore;
pub use manage_config::ConfigService;
pub use profile_store::ProfileStore;
pub use session::{submit_draft, Session};
pub use views::{Dashboard, EntrySummary, ProfileCard};
