use crate::*;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

#[instrument(skip(path))]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ServiceConfig> {
    let path = path.as_ref();
    info!("Loading configuration from: {:?}", path);

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    debug!("Config file content length: {} bytes", content.len());

    let config = parse_config(&content)?;
    info!("Configuration loaded successfully");
    Ok(config)
}

/// Parse a YAML document after environment variable substitution
pub fn parse_config(content: &str) -> Result<ServiceConfig> {
    let substituted = substitution::substitute_env_vars(content)?;
    debug!("Environment variable substitution completed");

    serde_yaml::from_str(&substituted).with_context(|| "Failed to parse YAML configuration")
}

#[instrument]
pub fn generate_default_config() -> ServiceConfig {
    use defaults::*;

    ServiceConfig {
        service: ServiceSection::default(),
        storage: StorageConfig {
            storage_type: StorageType::Postgres,
            postgres: Some(PostgresConfig {
                host: "${DB_HOST}".to_string(),
                port: default_postgres_port(),
                database: "${DB_NAME}".to_string(),
                user: "${DB_USER}".to_string(),
                password: "${DB_PASSWORD}".to_string(),
                ssl_mode: default_ssl_mode(),
                max_connections: default_max_connections(),
                connection_timeout_seconds: default_connection_timeout(),
                idle_timeout_seconds: default_idle_timeout(),
                create_table: default_enabled(),
            }),
        },
        api: ApiConfig::default(),
        logging: LoggingConfig::default(),
    }
}

#[instrument]
pub fn save_config<P: AsRef<Path> + std::fmt::Debug>(config: &ServiceConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    info!("Saving configuration to: {:?}", path);

    let yaml = serde_yaml::to_string(config)
        .with_context(|| "Failed to serialize configuration to YAML")?;

    fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    info!("Configuration saved successfully");
    Ok(())
}
