use tracing::info;
use tracing_subscriber::EnvFilter;
use user_registry::config::{CONFIG, Config};
use user_registry::{RegistryError, UserRegistry};

fn main() -> Result<(), RegistryError> {
    let level = CONFIG.level_filter()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level.to_string().to_lowercase()))
        .init();
    let config: &Config = &CONFIG;
    info!(?config, "Starting user registry");

    let mut registry = UserRegistry::new(config.database_url.as_str());
    let user = registry.create_user("Alice".to_string(), 30, None);
    let json = user.to_json()?;
    info!(user = %json, "User registered");

    println!("Created user: {:?}", user);
    Ok(())
}
