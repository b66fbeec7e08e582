use anyhow::Result;
use persnamer_etl::{config, Config};

/// Show the current effective configuration.
pub fn show_config() -> Result<()> {
    let config = Config::load()?;
    let config_path = config::config_file_path();

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config_path.display());
    let exists = config_path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!("  base_url: {}", config.base_url);
    println!("  timeout_secs: {}", config.timeout_secs);
    println!("  user_agent: {}", config.user_agent);
    println!("  split_camel_case: {}", config.split_camel_case);
    println!("  truncate_unknown_day: {}", config.truncate_unknown_day);

    println!("\nPriority: CLI args > ENV vars (PERSNAMER_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Show example configuration.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure persnamer.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
