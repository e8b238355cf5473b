#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use cachestat_agent::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
cache:
  segmnets: 2 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.stats_path, "/");
    assert!(cfg.cache.enabled);
    assert_eq!(cfg.cache.segments, 1);
    assert_eq!(cfg.cache.segment_size, 32 * 1024 * 1024);
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn stats_path_must_be_absolute_and_free() {
    let err = config::load_from_str("version: 1\nserver: { stats_path: \"apc\" }\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_CONFIG");

    let err = config::load_from_str("version: 1\nserver: { stats_path: \"/healthz\" }\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_CONFIG");

    let cfg = config::load_from_str("version: 1\nserver: { stats_path: \"/apc-nrp\" }\n").expect("must parse");
    assert_eq!(cfg.server.stats_path, "/apc-nrp");
}

#[test]
fn listen_must_be_socket_addr() {
    let err = config::load_from_str("version: 1\nserver: { listen: \"localhost\" }\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_CONFIG");
}

#[test]
fn cache_bounds() {
    for bad in [
        "version: 1\ncache: { segments: 0 }\n",
        "version: 1\ncache: { segments: 65 }\n",
        "version: 1\ncache: { segment_size: 1024 }\n",
        "version: 1\ncache: { segment_size: 65537 }\n",
        "version: 1\ncache: { user_slots: 0 }\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.client_code().as_str(), "BAD_CONFIG");
    }
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("/nonexistent/cachestat.yaml").expect("defaults");
    assert_eq!(cfg.version, 1);
    assert!(config::load_from_file("/nonexistent/cachestat.yaml").is_err());
}
