//! Fields command implementation

use super::output::{self, OutputFormat};
use anyhow::Result;
use colored::Colorize;
use contacts_model::CATALOG;
use serde_json::json;

/// Render the field catalog
pub fn render(format: Option<OutputFormat>) -> Result<String> {
    match format {
        Some(format) => {
            let entries: Vec<_> = CATALOG
                .iter()
                .map(|spec| {
                    json!({
                        "name": spec.name,
                        "kind": spec.kind.map(|kind| kind.tag()),
                        "columns": spec.columns,
                    })
                })
                .collect();
            output::format_json(&serde_json::Value::Array(entries), format)
        }
        None => {
            let width = CATALOG.iter().map(|spec| spec.name.len()).max().unwrap_or(0);
            let lines: Vec<String> = CATALOG
                .iter()
                .map(|spec| {
                    let kind = spec.kind.map_or("(every row)", |kind| kind.tag());
                    format!(
                        "{:width$}  {}  {}",
                        spec.name.bold(),
                        spec.columns.join(", ").cyan(),
                        kind.dimmed(),
                        width = width
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

/// Print the field catalog
pub fn fields(format: Option<OutputFormat>) -> Result<()> {
    output::write_output(&render(format)?, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json_lists_every_field() {
        let text = render(Some(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), CATALOG.len());
        assert_eq!(entries[0]["name"], "ContactId");
        assert_eq!(entries[0]["kind"], serde_json::Value::Null);
    }
}
