use anyhow::{anyhow, Result};

use carousel_core::CarouselConfig;

pub fn show(config: &CarouselConfig) -> Result<()> {
    let text = toml::to_string_pretty(config)?;
    println!("# {}", CarouselConfig::config_path().display());
    println!("{}", text);
    Ok(())
}

pub fn init(force: bool) -> Result<()> {
    let path = CarouselConfig::config_path();
    if path.exists() && !force {
        return Err(anyhow!(
            "Configuration already exists at {}\nUse --force to overwrite it.",
            path.display()
        ));
    }

    CarouselConfig::default().save()?;
    tracing::info!(path = %path.display(), "Wrote default configuration");
    println!("Wrote {}", path.display());
    Ok(())
}

pub fn path() -> Result<()> {
    println!("{}", CarouselConfig::config_path().display());
    Ok(())
}
