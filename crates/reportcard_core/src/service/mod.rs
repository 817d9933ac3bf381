//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and persistence calls into use-case level APIs.
//! - Keep front-ends decoupled from storage details.

pub mod grade_service;
