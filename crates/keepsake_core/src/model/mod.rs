//! Pure widget state for the commemorative site.
//!
//! # Responsibility
//! - Define the persisted data structures for every widget.
//! - Keep state transitions pure: state in, new state plus outcome out.
//!
//! # Invariants
//! - No module here performs I/O; persistence lives in `repo`.
//! - Serialized layouts match the historical store values exactly.

pub mod achievement;
pub mod checkin;
pub mod guestbook;
pub mod memory;
pub mod settings;
