use crate::*;
use thiserror::Error;

const LOG_FORMATS: [&str; 3] = ["pretty", "json", "compact"];

#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Service name is required")]
    MissingServiceName,

    #[error("service.http_port must be a non-zero port")]
    InvalidHttpPort,

    #[error("Storage: {message}")]
    InvalidStorage { message: String },

    #[error("{field} must be a positive integer")]
    InvalidPositiveInteger { field: String },

    #[error("Invalid log format: {0}. Must be one of: pretty, json, compact")]
    InvalidLogFormat(String),

    #[error("Environment variable placeholder in '{field}' was not resolved")]
    UnresolvedEnvVar { field: String },
}

#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct DefaultApplied {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
    pub defaults_applied: Vec<DefaultApplied>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            defaults_applied: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationWarning {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn add_default(&mut self, field: &str, value: &str) {
        self.defaults_applied.push(DefaultApplied {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

pub fn validate_config(config: &ServiceConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    validate_service(&config.service, &mut report);
    validate_storage(&config.storage, &mut report);
    validate_api(&config.api, &mut report);
    validate_logging(&config.logging, &mut report);

    report
}

fn validate_service(service: &ServiceSection, report: &mut ValidationReport) {
    if service.name.is_empty() {
        report.add_error(ValidationError::MissingServiceName);
    }

    if service.http_port == 0 {
        report.add_error(ValidationError::InvalidHttpPort);
    }

    if service.http_port == default_http_port() {
        report.add_default("service.http_port", &service.http_port.to_string());
    }
}

fn validate_storage(storage: &StorageConfig, report: &mut ValidationReport) {
    match storage.storage_type {
        StorageType::Memory => {
            report.add_warning(
                "storage.type",
                "In-memory storage selected; products are lost on restart",
            );
        }
        StorageType::Postgres => match &storage.postgres {
            Some(postgres) => validate_postgres(postgres, report),
            None => report.add_error(ValidationError::InvalidStorage {
                message: "storage.postgres section is required when type is postgres".to_string(),
            }),
        },
    }
}

fn validate_postgres(postgres: &PostgresConfig, report: &mut ValidationReport) {
    if postgres.host.is_empty() {
        report.add_error(ValidationError::InvalidStorage {
            message: "postgres.host is required".to_string(),
        });
    }

    if postgres.database.is_empty() {
        report.add_error(ValidationError::InvalidStorage {
            message: "postgres.database is required".to_string(),
        });
    }

    if postgres.user.is_empty() {
        report.add_error(ValidationError::InvalidStorage {
            message: "postgres.user is required".to_string(),
        });
    }

    if postgres.max_connections == 0 {
        report.add_error(ValidationError::InvalidPositiveInteger {
            field: "postgres.max_connections".to_string(),
        });
    }

    if postgres.connection_timeout_seconds == 0 {
        report.add_error(ValidationError::InvalidPositiveInteger {
            field: "postgres.connection_timeout_seconds".to_string(),
        });
    }

    let fields = [
        ("postgres.host", &postgres.host),
        ("postgres.database", &postgres.database),
        ("postgres.user", &postgres.user),
        ("postgres.password", &postgres.password),
    ];
    for (field, value) in fields {
        if has_unresolved_env_vars(value) {
            report.add_error(ValidationError::UnresolvedEnvVar {
                field: field.to_string(),
            });
        }
    }

    if postgres.password.is_empty() {
        report.add_warning("postgres.password", "Connecting without a password");
    }
}

fn validate_api(api: &ApiConfig, report: &mut ValidationReport) {
    if api.strict_delete {
        report.add_warning(
            "api.strict_delete",
            "Deleting a missing product answers 404 instead of 200",
        );
    }
}

fn validate_logging(logging: &LoggingConfig, report: &mut ValidationReport) {
    let format = logging.format.to_lowercase();
    if !LOG_FORMATS.contains(&format.as_str()) {
        report.add_error(ValidationError::InvalidLogFormat(logging.format.clone()));
    }
}
