//! Explicit commands listed in the config file

use super::{Catalog, Source, SourceError};

pub struct CustomSource {
    pub games: Vec<(String, Vec<String>)>,
}

impl CustomSource {
    pub fn new(games: Vec<(String, Vec<String>)>) -> Self {
        Self { games }
    }
}

impl Source for CustomSource {
    fn name(&self) -> &str {
        "Custom"
    }

    fn tag(&self) -> &str {
        "custom"
    }

    fn enumerate(&self) -> Result<Catalog, SourceError> {
        Ok(self.games.iter().cloned().collect())
    }
}
