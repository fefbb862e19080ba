use super::*;

use std::collections::HashMap;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_have_no_backend_and_listen_on_3000() {
    let settings = Settings::default();
    assert!(settings.backend_url.is_none());
    assert_eq!(settings.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn missing_backend_url_refuses_to_start() {
    let err = Settings::default().client_config().expect_err("should fail");
    assert!(err.to_string().contains("backend url is not configured"));

    let blank = Settings {
        backend_url: Some("   ".into()),
        ..Settings::default()
    };
    assert!(blank.client_config().is_err());
}

#[test]
fn token_selects_authenticated_mode() {
    let mut settings = Settings::default();
    settings.apply_env(env(&[
        ("WORDPRESS_URL", "https://blog.example"),
        ("WORDPRESS_API_TOKEN", "abc123"),
    ]));

    let config = settings.client_config().expect("config");
    assert_eq!(config.api_root(), "https://blog.example/wp-json/wp/v2");
    assert_eq!(
        config.auth,
        AuthMode::Authenticated {
            token: "abc123".into()
        }
    );
}

#[test]
fn no_token_selects_public_mode() {
    let mut settings = Settings::default();
    settings.apply_env(env(&[("WORDPRESS_URL", "https://blog.example")]));
    assert_eq!(settings.client_config().expect("config").auth, AuthMode::Public);
}

#[test]
fn prefixed_env_overrides_short_names() {
    let mut settings = Settings::default();
    settings.apply_env(env(&[
        ("WORDPRESS_URL", "https://short.example"),
        ("APP__BACKEND_URL", "https://prefixed.example"),
        ("PORT", "8080"),
        ("APP__PORT", "9090"),
        ("APP__BIND_HOST", "127.0.0.1"),
        ("APP__UPSTREAM_TIMEOUT_SECS", "3"),
    ]));

    assert_eq!(settings.backend_url.as_deref(), Some("https://prefixed.example"));
    assert_eq!(settings.bind_addr(), "127.0.0.1:9090");
    assert_eq!(settings.upstream_timeout_secs, 3);
    assert_eq!(
        settings.client_config().expect("config").timeout,
        Duration::from_secs(3)
    );
}

#[test]
fn invalid_numbers_in_env_are_ignored() {
    let mut settings = Settings::default();
    settings.apply_env(env(&[("PORT", "http"), ("APP__UPSTREAM_TIMEOUT_SECS", "0")]));
    assert_eq!(settings.port, 3000);
    assert_eq!(settings.upstream_timeout_secs, 10);
}

#[test]
fn file_settings_fill_in_defaults() {
    let settings = parse_settings(
        r#"
backend_url = "https://blog.example"
port = 4000
"#,
    )
    .expect("parse");

    assert_eq!(settings.backend_url.as_deref(), Some("https://blog.example"));
    assert_eq!(settings.port, 4000);
    assert_eq!(settings.bind_host, "0.0.0.0");
    assert_eq!(settings.upstream_timeout_secs, 10);
}

#[test]
fn malformed_file_is_an_error() {
    assert!(parse_settings("port = \"not a number\"").is_err());
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("frontend-config-that-does-not-exist.toml");
    let settings = load_settings(&path).expect("load");
    assert_eq!(settings.port, Settings::default().port);
}
