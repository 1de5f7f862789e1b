/// In-memory catalog store
///
/// Loads commands and quotes once at startup and hands out read-only slices.
/// Nothing mutates the records after loading.

use crate::catalog::models::{CatalogFile, CommandRecord, QuoteRecord};
use crate::error::{CatalogError, Result};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Read-only catalog of commands and quotes
#[derive(Debug, Clone)]
pub struct CatalogStore {
    commands: Arc<[CommandRecord]>,
    quotes: Arc<[QuoteRecord]>,
    source: PathBuf,
}

impl CatalogStore {
    /// Load a catalog from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the catalog JSON file
    ///
    /// # Returns
    /// * `Ok(CatalogStore)` - Catalog loaded and validated
    /// * `Err(CatalogError)` - If the file can't be read, parsed, or has duplicate keys
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        debug!(path = %path.display(), "Reading catalog");

        let raw = tokio::fs::read_to_string(&path).await?;
        let mut store = Self::from_json(&raw)?;
        store.source = path;

        info!(
            commands = store.commands.len(),
            quotes = store.quotes.len(),
            path = %store.source.display(),
            "Catalog loaded"
        );

        Ok(store)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::from_records(file.commands, file.quotes)
    }

    /// Build a catalog from records already in memory
    pub fn from_records(commands: Vec<CommandRecord>, quotes: Vec<QuoteRecord>) -> Result<Self> {
        let mut seen_ids = HashSet::new();
        for cmd in &commands {
            if !seen_ids.insert(cmd.id.as_str()) {
                return Err(CatalogError::DuplicateKey {
                    kind: "command",
                    key: cmd.id.clone(),
                });
            }
        }

        let mut seen_numbers = HashSet::new();
        for quote in &quotes {
            if !seen_numbers.insert(quote.number) {
                return Err(CatalogError::DuplicateKey {
                    kind: "quote",
                    key: quote.number.to_string(),
                });
            }
        }

        Ok(Self {
            commands: commands.into(),
            quotes: quotes.into(),
            source: PathBuf::from(":memory:"),
        })
    }

    /// All commands in catalog order
    pub fn commands(&self) -> &[CommandRecord] {
        &self.commands
    }

    /// All quotes in catalog order
    pub fn quotes(&self) -> &[QuoteRecord] {
        &self.quotes
    }

    /// Where the catalog came from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Look up a command by id
    pub fn find_command(&self, id: &str) -> Option<&CommandRecord> {
        self.commands.iter().find(|cmd| cmd.id == id)
    }

    /// Every command group used by any command, sorted and de-duplicated
    pub fn available_tags(&self) -> Vec<String> {
        self.commands
            .iter()
            .flat_map(|cmd| cmd.command_groups().iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every game quoted, sorted and de-duplicated
    pub fn available_games(&self) -> Vec<String> {
        self.quotes
            .iter()
            .map(|quote| quote.game.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
