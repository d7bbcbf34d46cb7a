use crate::StoreResult;
use serde::Deserialize;
use standings::{Club, League};
use std::path::Path;

const DEMO_SEED_JSON: &str = include_str!("../../data/demo.json");

#[derive(Debug, Default, Deserialize)]
pub struct SeedEntity {
    #[serde(default)]
    pub clubs: Vec<Club>,
    #[serde(default)]
    pub tables: Vec<League>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load(path: &Path) -> StoreResult<SeedEntity> {
        let content = std::fs::read_to_string(path)?;

        Ok(serde_json::from_str(&content)?)
    }

    pub fn demo() -> StoreResult<SeedEntity> {
        Ok(serde_json::from_str(DEMO_SEED_JSON)?)
    }
}
