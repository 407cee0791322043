//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and classifier calls into use-case level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod book_service;
