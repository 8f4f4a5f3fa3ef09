//! little-memories - Child journaling core
//!
//! Keeps child profiles and dated entries about them (favorites,
//! measurements, memories, journal notes, milestones) in memory, and derives
//! the timeline and dashboard views shown to the user.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::{EntryStore, ProfileStore, Session};
pub use error::MemoriesError;
