//! Named JSON fixtures shared by the dance crates' tests.
//!
//! `fixtures/manifest.json` maps a fixture name to a file under `fixtures/`,
//! grouped by kind. Only controller configs exist today.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../../../fixtures/manifest.json"))
        .expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Catalog {
    controllers: BTreeMap<String, PathBuf>,
}

/// One manifest entry, resolved against the fixtures directory.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub name: String,
    pub path: PathBuf,
}

impl Fixture {
    pub fn text(&self) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading fixture '{}' ({})", self.name, self.path.display()))
    }

    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        let text = self.text()?;
        serde_json::from_str(&text).with_context(|| format!("decoding fixture '{}'", self.name))
    }
}

fn fixture_dir() -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "..", "..", "..", "fixtures"]
        .iter()
        .collect()
}

fn find(entries: &BTreeMap<String, PathBuf>, name: &str) -> Result<Fixture> {
    match entries.get(name) {
        Some(rel) => Ok(Fixture {
            name: name.to_string(),
            path: fixture_dir().join(rel),
        }),
        None => bail!(
            "no fixture named '{name}' (known: {})",
            entries.keys().cloned().collect::<Vec<_>>().join(", ")
        ),
    }
}

/// Controller configuration documents.
pub mod controllers {
    use super::*;

    /// Fixture names in sorted order.
    pub fn keys() -> Vec<String> {
        CATALOG.controllers.keys().cloned().collect()
    }

    pub fn fixture(name: &str) -> Result<Fixture> {
        find(&CATALOG.controllers, name)
    }

    pub fn json(name: &str) -> Result<String> {
        fixture(name)?.text()
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        fixture(name)?.parse()
    }
}
