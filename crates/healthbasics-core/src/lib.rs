//! healthbasics-core — content catalog, quiz engine, contact submission and routing.
//!
//! This crate holds the data model and the interaction logic every view of
//! the Healthy Living Basics site is built on.

pub mod catalog;
pub mod contact;
pub mod error;
pub mod model;
pub mod quiz;
pub mod route;

pub use catalog::ContentCatalog;
pub use contact::{ContactFormInput, ContactSubmitter, ContactTransport, SubmissionOutcome};
pub use error::QuizError;
pub use quiz::{QuizSession, QuizState};
pub use route::Route;
