//! User-facing wording for dosing outcomes.
//!
//! The built-in catalog carries the exact wording existing callers expect.
//! Deployments may override any subset of it from a YAML or JSON file that
//! validates against `schema/catalog.schema.json`.

mod parser;
mod schema;

pub use parser::{CatalogError, MessageCatalog, NoteMessages, SuggestionMessages, ValidationMessages};
