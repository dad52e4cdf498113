//! Indexed view of the rights statement vocabulary.
//!
//! The index enforces the expected snapshot schema version and provides fast
//! lookup by vocabulary code. It is intentionally strict about duplicates,
//! malformed URIs, and unknown badge families so consumers cannot silently
//! render entries that drifted from the RightsStatements.org vocabulary.

use crate::catalog::identity::{StatementFamily, VocabularyCode};
use crate::catalog::model::{RightsCatalog, RightsStatement, parse_catalog_json};
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::collections::BTreeMap;

/// The crate ships a single vocabulary snapshot; reject unexpected versions
/// rather than risk serving entries with mismatched metadata.
const SCHEMA_VERSION: &str = "rights_vocabulary_v1";

const BUILTIN_CATALOG: &str = include_str!("../../schema/rights_statements.json");
const BUILTIN_SCHEMA: &str = include_str!("../../schema/rights_statements.schema.json");

const VOCAB_URI_PREFIX: &str = "http://rightsstatements.org/vocab/";

#[derive(Debug)]
/// Vocabulary snapshot plus a derived index keyed by statement code.
pub struct StatementIndex {
    catalog: RightsCatalog,
    by_code: BTreeMap<VocabularyCode, RightsStatement>,
}

impl StatementIndex {
    /// Build the index from the vocabulary compiled into the binary.
    ///
    /// Runs the same schema and semantic validation as [`Self::from_json`];
    /// the embedded snapshot is not trusted just because it ships with the
    /// crate. No I/O is performed.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("loading embedded rights statement vocabulary")
    }

    /// Build an index from a caller-supplied vocabulary snapshot.
    ///
    /// Validates against the embedded JSON Schema, checks the schema version,
    /// ensures codes are unique, and builds a deterministic BTreeMap for
    /// lookups.
    pub fn from_json(data: &str) -> Result<Self> {
        validate_against_schema(data)?;

        let catalog = parse_catalog_json(data).context("parsing vocabulary snapshot")?;
        validate_schema_version(&catalog.schema_version)?;
        let by_code = build_index(&catalog)?;
        Ok(Self { catalog, by_code })
    }

    /// The schema version declared in the loaded snapshot.
    pub fn key(&self) -> &str {
        &self.catalog.schema_version
    }

    /// The complete mapping from code to statement.
    ///
    /// The map is immutable for the lifetime of the index; repeated calls
    /// observe identical data.
    pub fn all(&self) -> &BTreeMap<VocabularyCode, RightsStatement> {
        &self.by_code
    }

    /// Resolve a statement by code.
    ///
    /// Returns `None` instead of erroring; callers surface errors with the
    /// context that referenced the missing code.
    pub fn statement(&self, code: &VocabularyCode) -> Option<&RightsStatement> {
        self.by_code.get(code)
    }

    /// Resolve a statement by code, failing when the code is not defined.
    ///
    /// This is the strict counterpart to [`Self::statement`] for callers that
    /// treat an unrecognized code as an error rather than a branch.
    pub fn lookup(&self, code: &str) -> Result<&RightsStatement> {
        self.by_code
            .get(code)
            .ok_or_else(|| anyhow!("unknown rights statement code '{code}'"))
    }

    /// Iterates vocabulary codes in stable order.
    pub fn codes(&self) -> impl Iterator<Item = &VocabularyCode> {
        self.by_code.keys()
    }

    /// Number of statements in the vocabulary.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Access the underlying snapshot (vocabulary metadata, declaration order).
    pub fn catalog(&self) -> &RightsCatalog {
        &self.catalog
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }
    if schema_version != SCHEMA_VERSION {
        bail!(
            "schema_version '{}' does not match expected '{}'",
            schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(())
}

fn build_index(catalog: &RightsCatalog) -> Result<BTreeMap<VocabularyCode, RightsStatement>> {
    if catalog.statements.is_empty() {
        bail!("vocabulary contains no statements");
    }
    if catalog.vocabulary.title.trim().is_empty() {
        bail!("vocabulary.title must not be empty");
    }

    let mut map = BTreeMap::new();
    for entry in &catalog.statements {
        validate_statement(entry)?;
        if map.contains_key(&entry.code) {
            bail!("duplicate vocabulary code {}", entry.code.0);
        }
        map.insert(entry.code.clone(), entry.clone());
    }
    Ok(map)
}

fn validate_statement(entry: &RightsStatement) -> Result<()> {
    if entry.code.0.trim().is_empty() {
        bail!("encountered statement with no code");
    }
    if entry.statement.trim().is_empty() {
        bail!("statement {} has an empty display label", entry.code.0);
    }

    // Canonical URIs are versioned per code and never regenerated; anything
    // else means the snapshot no longer describes the published vocabulary.
    let expected_uri = format!("{VOCAB_URI_PREFIX}{}/1.0/", entry.code.0);
    if entry.uri != expected_uri {
        bail!(
            "statement {} has uri '{}', expected '{}'",
            entry.code.0,
            entry.uri,
            expected_uri
        );
    }

    if entry.family().is_none() {
        bail!(
            "statement {} has image slug '{}' outside the known badge families {:?}",
            entry.code.0,
            entry.image_slug.0,
            [
                StatementFamily::InCopyright.as_str(),
                StatementFamily::NoCopyright.as_str(),
                StatementFamily::Other.as_str(),
            ]
        );
    }
    Ok(())
}

fn validate_against_schema(data: &str) -> Result<()> {
    let snapshot: Value =
        serde_json::from_str(data).context("parsing vocabulary snapshot as JSON")?;
    let schema: Value = serde_json::from_str(BUILTIN_SCHEMA)
        .context("parsing embedded vocabulary schema")?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling embedded vocabulary schema: {err}"))?;

    if let Err(errors) = compiled.validate(&snapshot) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!("vocabulary snapshot failed schema validation:\n{details}");
    }
    Ok(())
}
