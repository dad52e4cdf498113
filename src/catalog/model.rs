//! Deserializable representation of `schema/rights_statements.json`.
//!
//! The types mirror the vocabulary snapshot so consumers can reason about
//! rights statements without ad-hoc JSON handling. Use `StatementIndex` for
//! validation and code lookup; use these structs when the raw snapshot surface
//! is required (vocabulary metadata, declaration order).

use crate::catalog::identity::{ImageSlug, StatementFamily, VocabularyCode};
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Full vocabulary snapshot as embedded in the binary.
pub struct RightsCatalog {
    pub schema_version: String,
    pub vocabulary: VocabularyInfo,
    pub statements: Vec<RightsStatement>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Title and canonical source of the controlled vocabulary.
pub struct VocabularyInfo {
    pub title: String,
    pub source: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// One rights statement: code, display label, canonical URI, badge slug.
pub struct RightsStatement {
    pub code: VocabularyCode,
    pub statement: String,
    pub uri: String,
    pub image_slug: ImageSlug,
}

impl RightsStatement {
    /// Badge family derived from the image slug prefix.
    ///
    /// `None` only for slugs outside the known families; indexed entries are
    /// guaranteed a family by construction-time validation.
    pub fn family(&self) -> Option<StatementFamily> {
        StatementFamily::from_slug(&self.image_slug)
    }
}

/// Parse a vocabulary snapshot without additional validation.
pub fn parse_catalog_json(data: &str) -> Result<RightsCatalog> {
    let catalog: RightsCatalog = serde_json::from_str(data)?;
    Ok(catalog)
}
