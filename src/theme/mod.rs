use std::fs;
use std::path::Path;

use crate::defaults::default_table;
use crate::error::{TokenError, TokenResult};
use crate::table::TokenTable;

/// Reads and validates a token document at an explicit location.
pub fn load_token_table_from(path: &Path) -> TokenResult<TokenTable> {
    let serialized = fs::read_to_string(path).map_err(|source| TokenError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_token_document(&serialized).inspect_err(|err| {
        tracing::warn!(%err, ?path, "rejected token document");
    })?;
    Ok(table)
}

pub fn parse_token_document(serialized: &str) -> TokenResult<TokenTable> {
    let raw: serde_json::Value = serde_json::from_str(serialized)?;
    Ok(TokenTable::load(&raw)?)
}

/// Built-in tokens with the overrides document at `overrides` merged on top.
pub fn resolve_token_table(overrides: &Path) -> TokenResult<TokenTable> {
    let base = default_table()?;
    let overrides = load_token_table_from(overrides)?;
    Ok(base.merged_with(&overrides))
}

/// Same as [`resolve_token_table`] for overrides already held in memory.
pub fn resolve_token_document(overrides: &str) -> TokenResult<TokenTable> {
    let base = default_table()?;
    let overrides = parse_token_document(overrides)?;
    Ok(base.merged_with(&overrides))
}
