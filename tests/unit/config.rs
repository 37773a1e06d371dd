use doctor_invite::config::Config;

fn sample_config() -> Config {
    Config {
        database_url: "postgres://localhost/doctor_invite".to_string(),
        database_max_connections: 20,
        database_min_connections: 5,
        database_connection_timeout: 30,
        server_host: "127.0.0.1".to_string(),
        server_port: 8000,
        cors_origins: vec!["*".to_string()],
        log_level: "info".to_string(),
        log_format: "json".to_string(),
        referral_code_length: 12,
    }
}

#[test]
fn accepts_sane_config() {
    let config = sample_config();
    assert!(config.validate().is_ok());
    assert_eq!(config.server_address(), "127.0.0.1:8000");
    assert_eq!(config.database().max_connections, 20);
    assert_eq!(config.logging().format, "json");
}

#[test]
fn rejects_bad_pool_and_code_settings() {
    let mut config = sample_config();
    config.database_max_connections = 0;
    assert!(config.validate().is_err());

    let mut config = sample_config();
    config.database_min_connections = 30;
    assert!(config.validate().is_err());

    let mut config = sample_config();
    config.referral_code_length = 0;
    assert!(config.validate().is_err());
}
