//! Inventory service binary
//!
//! Loads configuration, opens the product store, mounts the product routes
//! and serves them until Ctrl+C.

use anyhow::{Context, Result};
use cli::{Cli, Commands};
use config::{
    generate_default_config, load_config, save_config, validate_config, PostgresConfig,
    ServiceConfig, StorageType, ValidationReport,
};
use observability::{init_logging, LogFormat};
use product::{
    product_routes, ApiState, InMemoryProductStore, PoolSettings, PostgresProductStore,
    ProductStore,
};
use server::{HttpServer, ServerConfig, ServerExt};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Start { config, host, port } => start_service(config, host, port).await,
        Commands::Validate { config } => {
            init_logging("inventory", LogFormat::Pretty)?;
            info!("Executing 'validate' command");
            validate_command(config)
        }
        Commands::Init { output } => {
            init_logging("inventory", LogFormat::Pretty)?;
            info!("Executing 'init' command");
            init_command(output)
        }
    }
}

async fn start_service(
    config_path: PathBuf,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    let config = load_config(&config_path)?;

    let format = LogFormat::parse(&config.logging.format).unwrap_or_default();
    init_logging(&config.service.name, format)?;
    info!(path = ?config_path, "Configuration loaded");

    let report = validate_config(&config);
    log_report(&report);
    if !report.is_valid() {
        anyhow::bail!("Cannot start service due to configuration errors");
    }

    let server_config = ServerConfig::new(
        host_override.unwrap_or_else(|| config.service.host.clone()),
        port_override.unwrap_or(config.service.http_port),
    );
    if port_override.is_some() || server_config.host != config.service.host {
        debug!(?server_config, "Listener overridden from command line");
    }

    let (store, postgres) = open_store(&config).await?;
    let state = ApiState::new(store).with_strict_delete(config.api.strict_delete);
    let router = product_routes(Arc::new(state));

    info!(
        service = %config.service.name,
        host = %server_config.host,
        port = server_config.http_port,
        storage = config.storage.storage_type.as_str(),
        "Starting service"
    );

    let result = HttpServer::new(server_config, router).run_with_ctrl_c().await;

    if let Some(postgres) = postgres {
        postgres.close().await;
    }

    result.context("HTTP server failed")
}

/// Open the configured store.
///
/// The PostgreSQL handle is returned separately so it can be closed on shutdown.
async fn open_store(
    config: &ServiceConfig,
) -> Result<(Arc<dyn ProductStore>, Option<PostgresProductStore>)> {
    match config.storage.storage_type {
        StorageType::Memory => {
            warn!("Using in-memory product store");
            let store: Arc<dyn ProductStore> = Arc::new(InMemoryProductStore::new());
            Ok((store, None))
        }
        StorageType::Postgres => {
            let postgres = config
                .storage
                .postgres
                .as_ref()
                .context("storage.postgres section is required when type is postgres")?;

            let settings = pool_settings(postgres);
            let options = connect_options(postgres)?;
            let store = PostgresProductStore::connect_with(options, &settings)
                .await
                .with_context(|| {
                    format!("Failed to open database {} on {}", postgres.database, postgres.host)
                })?;

            if postgres.create_table {
                store.ensure_schema().await?;
            }

            let shared: Arc<dyn ProductStore> = Arc::new(store.clone());
            Ok((shared, Some(store)))
        }
    }
}

/// Build connect options field by field; credentials are never spliced into a URL.
fn connect_options(postgres: &PostgresConfig) -> Result<PgConnectOptions> {
    let ssl_mode: PgSslMode = postgres
        .ssl_mode
        .parse()
        .with_context(|| format!("Invalid ssl_mode: {}", postgres.ssl_mode))?;

    Ok(PgConnectOptions::new()
        .host(&postgres.host)
        .port(postgres.port)
        .username(&postgres.user)
        .password(&postgres.password)
        .database(&postgres.database)
        .ssl_mode(ssl_mode))
}

fn pool_settings(postgres: &PostgresConfig) -> PoolSettings {
    PoolSettings {
        max_connections: postgres.max_connections,
        acquire_timeout: Duration::from_secs(postgres.connection_timeout_seconds),
        idle_timeout: Duration::from_secs(postgres.idle_timeout_seconds),
    }
}

fn log_report(report: &ValidationReport) {
    for default in &report.defaults_applied {
        debug!(field = %default.field, value = %default.value, "Default applied");
    }
    for warning in &report.warnings {
        warn!(field = %warning.field, message = %warning.message);
    }
    if !report.is_valid() {
        error!(
            error_count = report.errors.len(),
            "Configuration validation failed"
        );
        for err in &report.errors {
            error!("{}", err);
        }
    }
}

fn validate_command<P: AsRef<Path>>(config_path: P) -> Result<()> {
    info!(path = ?config_path.as_ref(), "Validating configuration");

    let config = match load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            error!(%e, "Failed to load configuration");
            return Err(e);
        }
    };

    let report = validate_config(&config);

    println!("\n=== Configuration Validation Report ===\n");

    if !report.defaults_applied.is_empty() {
        println!("Defaults Applied ({}):", report.defaults_applied.len());
        for default in &report.defaults_applied {
            println!("  [info] {} = {}", default.field, default.value);
        }
        println!();
    }

    if !report.warnings.is_empty() {
        println!("Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            println!("  [warn] [{}] {}", warning.field, warning.message);
        }
        println!();
    }

    if !report.errors.is_empty() {
        println!("Errors ({}):", report.errors.len());
        for err in &report.errors {
            println!("  [error] {}", err);
        }
        println!();
        anyhow::bail!("Configuration validation failed");
    }

    println!("[ok] Configuration is valid!");
    println!();
    println!("Service: {}", config.service.name);
    println!("Listen: {}:{}", config.service.host, config.service.http_port);
    println!("Storage: {}", config.storage.storage_type.as_str());
    println!("Strict delete: {}", config.api.strict_delete);

    Ok(())
}

fn init_command<P: AsRef<Path>>(output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    info!(?output_path, "Initializing new configuration file");

    let config = generate_default_config();

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    save_config(&config, output_path)?;

    println!("[ok] Configuration file created successfully!");
    println!();
    println!("Location: {:?}", output_path);
    println!();
    println!("Next steps:");
    println!("  1. Set DB_HOST, DB_NAME, DB_USER and DB_PASSWORD");
    println!(
        "  2. Run 'inventory validate --config {:?}' to check configuration",
        output_path
    );
    println!(
        "  3. Run 'inventory start --config {:?}' to start the service",
        output_path
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn postgres_config(password: &str) -> PostgresConfig {
        let yaml = format!(
            "host: db.internal\nport: 6432\ndatabase: inventory\nuser: app\npassword: '{}'\n",
            password
        );
        serde_yaml::from_str(&yaml).unwrap()
    }

    #[test]
    fn test_connect_options_keep_reserved_characters() {
        let options = connect_options(&postgres_config("p@ss/w#rd")).unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6432);
        assert_eq!(options.get_username(), "app");
        assert_eq!(options.get_database(), Some("inventory"));
        assert_matches!(options.get_ssl_mode(), PgSslMode::Prefer);
    }

    #[test]
    fn test_connect_options_reject_unknown_ssl_mode() {
        let mut postgres = postgres_config("secret");
        postgres.ssl_mode = "sometimes".to_string();
        assert!(connect_options(&postgres).is_err());
    }

    #[test]
    fn test_pool_settings() {
        let settings = pool_settings(&postgres_config("secret"));
        assert_eq!(settings.max_connections, 20);
        assert_eq!(settings.acquire_timeout, Duration::from_secs(30));
    }
}
