//! Typed access to the RightsStatements.org controlled vocabulary.
//!
//! The crate exposes the twelve standardized rights statements as an
//! immutable, validated catalog: each entry carries its vocabulary code,
//! display label, canonical URI, and badge image slug. The snapshot is
//! compiled into the binary and checked against its JSON Schema at
//! construction, so a `StatementIndex` either holds the published vocabulary
//! exactly or fails to build. Construct one with `StatementIndex::builtin()`
//! at startup and hand it to whatever renders badges or resolves URIs; the
//! index is immutable and shares freely across threads.

pub mod catalog;

pub use catalog::{
    ImageSlug, RightsCatalog, RightsStatement, StatementFamily, StatementIndex, VocabularyCode,
    VocabularyInfo, parse_catalog_json,
};
