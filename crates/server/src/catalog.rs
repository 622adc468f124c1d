use std::{fs, path::Path};

use anyhow::Context;
use shared::protocol::CatalogPayload;
use tracing::info;

const BUILTIN_CATALOG: &str = include_str!("../data/clothing.json");

/// Reads and validates the catalog fixture once at startup.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<CatalogPayload> {
    let (source, raw) = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog fixture '{}'", path.display()))?;
            (path.display().to_string(), raw)
        }
        None => ("<builtin>".to_string(), BUILTIN_CATALOG.to_string()),
    };

    let payload = parse_catalog(&raw).with_context(|| format!("invalid catalog '{source}'"))?;
    info!(
        %source,
        items = payload.item_count(),
        saved_outfits = payload.saved_outfits.len(),
        "catalog loaded"
    );
    Ok(payload)
}

pub fn parse_catalog(raw: &str) -> anyhow::Result<CatalogPayload> {
    let payload: CatalogPayload = serde_json::from_str(raw).context("malformed catalog JSON")?;
    payload.validate()?;
    Ok(payload)
}
