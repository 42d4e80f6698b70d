//! Read-only weekly reference schedule and motivational text.
//!
//! The catalog is injected configuration: the core consumes it but never
//! mutates it, and nothing in the domain logic depends on the specific
//! shipped content.

pub mod catalog;

pub use catalog::{DayTemplate, TemplateCatalog, TemplateExercise};
