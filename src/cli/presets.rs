use crate::catalog::registry::PresetRegistry;
use crate::cli::OutputFormat;
use crate::utils::validation::validate_preset_key;

pub fn run_list(
    registry: &PresetRegistry,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = registry.list_presets()?;

    if verbose {
        eprintln!(
            "Loaded {} weather presets from {}",
            catalog.len(),
            registry.base_dir().display()
        );
    }

    match format {
        OutputFormat::Text => {
            let key_width = column_width(catalog.keys(), 3, usize::MAX);
            let name_width = column_width(catalog.iter().map(|(_, name)| name), 4, 40);

            println!("Weather Presets ({} presets)\n", catalog.len());
            println!(
                "{:<key_w$} {:<name_w$}",
                "Key",
                "Name",
                key_w = key_width,
                name_w = name_width
            );
            println!("{}", "-".repeat(key_width + name_width + 1));

            for (key, name) in catalog.iter() {
                println!(
                    "{:<key_w$} {:<name_w$}",
                    key,
                    truncate(name, name_width),
                    key_w = key_width,
                    name_w = name_width
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        OutputFormat::Tsv => {
            println!("key\tdisplay_name");
            for (key, name) in catalog.iter() {
                println!("{key}\t{name}");
            }
        }
    }

    Ok(())
}

pub fn run_show(
    registry: &PresetRegistry,
    key: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let key = validate_preset_key(key)?;
    let resolved = registry.resolve_display_name(key)?;
    let display_name = resolved.as_deref().unwrap_or(key);

    match format {
        OutputFormat::Text => {
            println!("Preset:  {key}");
            println!("Name:    {display_name}");
            if resolved.is_none() {
                println!("         (no name in weather.ini, using the preset key)");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key,
                "display_name": display_name,
                "resolved": resolved.is_some(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("key\tdisplay_name\tresolved");
            println!("{key}\t{display_name}\t{}", resolved.is_some());
        }
    }

    Ok(())
}

/// Delete a preset and report the outcome. Returns whether the preset was removed.
pub fn run_delete(
    registry: &PresetRegistry,
    key: &str,
    format: OutputFormat,
) -> anyhow::Result<bool> {
    let outcome = registry.delete_preset(key)?;

    match format {
        OutputFormat::Text => println!("{}", outcome.message()),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key,
                "success": outcome.is_success(),
                "message": outcome.message(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("key\tsuccess\tmessage");
            println!("{key}\t{}\t{}", outcome.is_success(), outcome.message());
        }
    }

    Ok(outcome.is_success())
}

/// Display width of a text column, counted in characters
fn column_width<'a>(cells: impl Iterator<Item = &'a str>, min: usize, max: usize) -> usize {
    cells
        .map(|cell| cell.chars().count().min(max))
        .max()
        .unwrap_or(min)
        .max(min)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
