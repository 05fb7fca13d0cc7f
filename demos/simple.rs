use std::path::PathBuf;
use tinyconf::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    config_path.push("demos/tiny.conf");

    let mut config = Config::load(&config_path)?;
    println!("✅ Successfully parsed configuration!\n");

    let player_power = config.get_int("player_power")?;
    println!("Player power: {}", player_power);

    match config.get_int("player_intelligence") {
        Ok(value) => println!("Player intelligence: {}", value),
        Err(e) if e.is_key_not_found() => println!("Player intelligence: <unset>"),
        Err(e) => return Err(e.into()),
    }

    let base_attack = config.get_float("base_attack")?;
    println!("Base attack: {}", base_attack);

    if let Some(name) = config.get_value("player_name") {
        println!("Player name: {}", name);
    }

    config.set_value("player_power", "330")?;
    println!("Player power after mutation: {}", config.get_int("player_power")?);

    let new_config_path = std::env::temp_dir().join("tiny_modified.conf");
    config.save_as(&new_config_path)?;
    println!("\nSaved to {}:\n{}", new_config_path.display(), config);

    Ok(())
}
