//! Core domain types for Sentience.
//!
//! This crate contains the pure node model of the quiz graph with no IO, no
//! async, and minimal dependencies. Everything here can be used from any layer
//! of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod ids;
mod node;
mod subject;
mod text;
pub mod ui;

pub use ids::{IdError, NodeId, OptionId};
pub use node::{End, Node, NodeKind, Question, QuestionOption, Reference, Tone, Verdict};
pub use subject::{
    DEFAULT_SUBJECT_TERM, SUBJECT_TOKEN, SUBJECT_TOKEN_CAP, Subject, capitalize_first,
    substitute_subject,
};
pub use text::{sanitize_display_text, truncate_to_width};
