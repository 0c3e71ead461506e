use crate::config::CliConfig;
use dialoguer::Confirm;
use namedraw_core::Result;
use std::path::Path;

pub fn handle_config_command(
    path: &Path,
    effective: &CliConfig,
    init: bool,
    force: bool,
) -> Result<()> {
    if !init {
        println!("Config file: {}", path.display());
        if !path.exists() {
            println!("(not found, using defaults)");
        }
        println!("{}", serde_json::to_string_pretty(effective)?);
        return Ok(());
    }

    if path.exists() && !force {
        let confirm = Confirm::new()
            .with_prompt(format!(
                "Overwrite existing config at '{}'?",
                path.display()
            ))
            .default(false)
            .interact()?;

        if !confirm {
            println!("Config unchanged.");
            return Ok(());
        }
    }

    CliConfig::default().save(path)?;
    tracing::info!("Wrote default config to {}", path.display());
    println!("Default config written to {}", path.display());

    Ok(())
}
