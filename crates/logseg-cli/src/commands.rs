use crate::args::{Cli, Commands};
use crate::render;
use anyhow::{Context, Result};
use logseg_engine::{expand_field_paths, TextSegmenter};
use logseg_types::{FieldDescriptor, SegmentConfig};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Tokenize {
            fields,
            row,
            field,
            json,
        } => tokenize(&fields, &row, field.as_deref(), json, config),
        Commands::Expand { fields, json } => expand(&fields, json),
    }
}

/// Missing config file means defaults, matching the engine's built-in
/// budgets; a present but invalid file is an error.
fn load_config(path: Option<&Path>) -> Result<SegmentConfig> {
    let Some(path) = path else {
        return Ok(SegmentConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}

fn load_fields(path: &Path) -> Result<Vec<FieldDescriptor>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read field schema {}", path.display()))?;
    let fields: Vec<FieldDescriptor> =
        serde_json::from_str(&content).with_context(|| "invalid field schema")?;
    Ok(fields)
}

/// Records arrive as JSON Lines, a single JSON document, or a JSON array of
/// records. `-` reads from stdin.
fn load_rows(path: &Path) -> Result<Vec<Value>> {
    let content = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read records from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read records {}", path.display()))?
    };

    // whole-document form first, so pretty-printed JSON works
    if let Ok(value) = serde_json::from_str::<Value>(&content) {
        return Ok(match value {
            Value::Array(rows) => rows,
            row => vec![row],
        });
    }

    let mut rows = Vec::new();
    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row: Value = serde_json::from_str(line)
            .with_context(|| format!("invalid record on line {}", number + 1))?;
        rows.push(row);
    }
    Ok(rows)
}

fn tokenize(
    fields_path: &Path,
    row_path: &Path,
    only_field: Option<&str>,
    json: bool,
    config: SegmentConfig,
) -> Result<()> {
    let fields = expand_field_paths(&load_fields(fields_path)?);
    let rows = load_rows(row_path)?;
    let segmenter = TextSegmenter::new(config);

    if let Some(name) = only_field {
        anyhow::ensure!(
            fields.iter().any(|f| f.field_name == name),
            "field {:?} is not in the schema (after expansion)",
            name
        );
    }

    for (index, row) in rows.iter().enumerate() {
        if rows.len() > 1 && !json {
            println!("# record {}", index + 1);
        }
        for field in &fields {
            if only_field.is_some_and(|name| name != field.field_name) {
                continue;
            }
            let tokens = segmenter.tokenize(field, row);
            if json {
                println!(
                    "{}",
                    serde_json::to_string(&serde_json::json!({
                        "field": field.field_name,
                        "tokens": tokens,
                    }))?
                );
            } else {
                println!("{}: {}", field.display_name(), render::tokens(&tokens));
            }
        }
    }
    Ok(())
}

fn expand(fields_path: &Path, json: bool) -> Result<()> {
    let expanded = expand_field_paths(&load_fields(fields_path)?);

    if json {
        println!("{}", serde_json::to_string_pretty(&expanded)?);
        return Ok(());
    }

    for field in &expanded {
        let marker = if field.is_virtual_obj_node {
            " (virtual)"
        } else {
            ""
        };
        println!("{}{}", field.field_name, marker);
    }
    Ok(())
}
