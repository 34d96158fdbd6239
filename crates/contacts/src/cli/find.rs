//! Find command implementation

use super::output::{self, OutputFormat};
use crate::Contacts;
use anyhow::{Context, Result, anyhow};
use contacts_model::{Contact, Field, MemoryRowSource};
use contacts_query::Query;
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Configuration for the find command
#[derive(Debug, Clone, Default)]
pub struct FindConfig {
    /// JSON file holding an array of rows
    pub rows: PathBuf,
    pub include: Vec<String>,
    pub equal: Vec<String>,
    pub not_equal: Vec<String>,
    pub contains: Vec<String>,
    pub starts_with: Vec<String>,
    pub has_phone_number: bool,
    pub sort: Option<String>,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Parse a field name
pub fn parse_field(name: &str) -> Result<Field> {
    name.parse::<Field>()
        .map_err(|e| anyhow!("{} (run `contacts fields` to list the known fields)", e))
}

/// Parse a `FIELD=VALUE` constraint
pub fn parse_constraint(arg: &str) -> Result<(Field, String)> {
    let (field, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("expected FIELD=VALUE, got `{}`", arg))?;
    Ok((parse_field(field.trim())?, value.to_string()))
}

/// Build the query described by `config` on top of a configured handle
pub fn build_query(contacts: &Contacts, config: &FindConfig) -> Result<Query> {
    let mut query = contacts.query()?;

    for arg in &config.equal {
        let (field, value) = parse_constraint(arg)?;
        query = query.where_equal_to(field, value)?;
    }
    for arg in &config.not_equal {
        let (field, value) = parse_constraint(arg)?;
        query = query.where_not_equal_to(field, value)?;
    }
    for arg in &config.contains {
        let (field, value) = parse_constraint(arg)?;
        query = query.where_contains(field, value)?;
    }
    for arg in &config.starts_with {
        let (field, value) = parse_constraint(arg)?;
        query = query.where_starts_with(field, value)?;
    }
    if config.has_phone_number {
        query = query.has_phone_number()?;
    }

    if !config.include.is_empty() {
        let fields = config
            .include
            .iter()
            .map(|name| parse_field(name))
            .collect::<Result<Vec<_>>>()?;
        query = query.include(fields);
    }
    if let Some(sort) = &config.sort {
        query = query.sort_order(parse_field(sort)?);
    }
    Ok(query)
}

/// Load a row file into an in-memory source
pub fn load_rows(path: &Path) -> Result<MemoryRowSource> {
    let source = MemoryRowSource::from_json_file(path)
        .with_context(|| format!("Failed to load rows from {}", path.display()))?;
    info!("loaded {} rows from {}", source.len(), path.display());
    Ok(source)
}

/// Run the find command and return the matched contacts
pub fn run(config: &FindConfig) -> Result<Vec<Contact>> {
    let source = load_rows(&config.rows)?;
    let contacts = Contacts::new().with_source(Arc::new(source));
    let found = build_query(&contacts, config)?
        .find()
        .context("Query failed")?;
    info!("found {} contacts", found.len());
    Ok(found)
}

/// Run the find command and print the result
pub fn find(config: FindConfig) -> Result<()> {
    let found = run(&config)?;
    let value = serde_json::to_value(&found).context("Failed to serialize contacts")?;
    let content = output::format_json(&value, config.format)?;
    output::write_output(&content, config.output_file.as_deref())
}
