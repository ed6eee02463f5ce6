use crate::models::Paste;
use crate::store::PasteStore;
use crate::validation;
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Loads a JSON array of pastes from `path` into a fresh store.
pub fn load(path: &Path) -> Result<PasteStore> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    let store = parse(&raw).with_context(|| format!("Invalid seed file {}", path.display()))?;
    tracing::info!("Seeded {} pastes from {}", store.len(), path.display());
    Ok(store)
}

/// Every record must carry a positive integer `id` and pass the same
/// checks a create request would.
pub fn parse(raw: &str) -> Result<PasteStore> {
    let records: Vec<Value> =
        serde_json::from_str(raw).context("seed data must be a JSON array of pastes")?;

    let pastes = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            seed_record(record).with_context(|| format!("record {} is invalid", index))
        })
        .collect::<Result<Vec<_>>>()?;

    PasteStore::with_pastes(pastes)
}

fn seed_record(record: Value) -> Result<Paste> {
    let Value::Object(data) = record else {
        bail!("expected an object");
    };

    let id = data
        .get("id")
        .and_then(Value::as_u64)
        .filter(|id| *id > 0)
        .context("id must be a positive integer")?;

    let new = validation::validate_create(&data)?;
    Ok(Paste::from_new(id, new))
}
