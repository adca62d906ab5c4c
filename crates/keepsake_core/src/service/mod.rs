//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate load, pure transition, persist, and render effects for
//!   every widget.
//! - Keep hosts (CLI, any UI) decoupled from storage details.

pub mod achievement_service;
pub mod checkin_service;
pub mod guestbook_service;
pub mod memory_service;
pub mod settings_service;
