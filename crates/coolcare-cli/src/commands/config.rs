use anyhow::{Context, Result};
use colored::Colorize;
use coolcare_infrastructure::ConfigService;

pub fn show(service: &ConfigService) -> Result<()> {
    let path = service.config_path()?;
    let config = service.get_config()?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;

    let source = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("{}", format!("# {}{source}", path.display()).dimmed());
    print!("{rendered}");
    Ok(())
}
