//! Rights statement vocabulary wiring.
//!
//! This module wraps the vocabulary snapshot embedded from
//! `schema/rights_statements.json` so consumers can load a validated index
//! and expose consistent identifiers. Types here mirror the snapshot fields;
//! callers use `StatementIndex` for fast lookups.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::{ImageSlug, StatementFamily, VocabularyCode};
pub use index::StatementIndex;
pub use model::{RightsCatalog, RightsStatement, VocabularyInfo};

pub use model::parse_catalog_json;
