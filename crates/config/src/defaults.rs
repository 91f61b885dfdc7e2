pub fn default_enabled() -> bool {
    true
}

pub fn default_service_name() -> String {
    "inventory".to_string()
}

pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_http_port() -> u16 {
    10000
}

pub fn default_postgres_port() -> u16 {
    5432
}

pub fn default_ssl_mode() -> String {
    "prefer".to_string()
}

pub fn default_max_connections() -> u32 {
    20
}

pub fn default_connection_timeout() -> u64 {
    30
}

pub fn default_idle_timeout() -> u64 {
    600
}

pub fn default_log_format() -> String {
    "pretty".to_string()
}
