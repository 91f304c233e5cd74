use super::*;
use serial_test::serial;
use std::env;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_bktree_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("BKTREE_TREE_SIZE");
        env::remove_var("BKTREE_QUERIES");
        env::remove_var("BKTREE_TOLERANCES");
        env::remove_var("BKTREE_SEED");
        env::remove_var("BKTREE_VERIFY");
    }
}

#[test]
fn test_default_config() {
    let config = HarnessConfig::default();

    assert_eq!(config.tree_size, 10_000);
    assert_eq!(config.queries, 1_000);
    assert_eq!(config.tolerances, vec![0, 1, 2, 8, 32]);
    assert_eq!(config.seed, 42);
    assert!(!config.verify);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_bktree_env();

    let config = HarnessConfig::from_env().expect("should parse with defaults");
    assert_eq!(config, HarnessConfig::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_bktree_env();

    with_env_vars(
        &[
            ("BKTREE_TREE_SIZE", "500"),
            ("BKTREE_QUERIES", " 20 "),
            ("BKTREE_TOLERANCES", "0,3, 5"),
            ("BKTREE_SEED", "7"),
            ("BKTREE_VERIFY", "true"),
        ],
        || {
            let config = HarnessConfig::from_env().expect("should parse");
            assert_eq!(config.tree_size, 500);
            assert_eq!(config.queries, 20);
            assert_eq!(config.tolerances, vec![0, 3, 5]);
            assert_eq!(config.seed, 7);
            assert!(config.verify);
        },
    );
}

#[test]
#[serial]
fn test_from_env_invalid_tree_size() {
    clear_bktree_env();

    with_env_vars(&[("BKTREE_TREE_SIZE", "lots")], || {
        let result = HarnessConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::ParseInt {
                var: "BKTREE_TREE_SIZE",
                ..
            })
        ));
    });
}

#[test]
#[serial]
fn test_from_env_invalid_seed() {
    clear_bktree_env();

    with_env_vars(&[("BKTREE_SEED", "-3")], || {
        let err = HarnessConfig::from_env().expect_err("negative seed");
        assert!(err.to_string().contains("BKTREE_SEED"));
        assert!(err.to_string().contains("-3"));
    });
}

#[test]
#[serial]
fn test_from_env_negative_tolerance_rejected() {
    clear_bktree_env();

    with_env_vars(&[("BKTREE_TOLERANCES", "0,-1,2")], || {
        let result = HarnessConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidTolerance { ref value }) if value == "-1"
        ));
    });
}

#[test]
#[serial]
fn test_from_env_verify_values() {
    for (raw, expected) in [
        ("1", true),
        ("YES", true),
        ("on", true),
        ("0", false),
        ("off", false),
        ("maybe", false),
    ] {
        clear_bktree_env();
        with_env_vars(&[("BKTREE_VERIFY", raw)], || {
            let config = HarnessConfig::from_env().expect("should parse");
            assert_eq!(config.verify, expected, "BKTREE_VERIFY={raw}");
        });
    }
}

#[test]
fn test_parse_tolerances_skips_empty_segments() {
    assert_eq!(
        HarnessConfig::parse_tolerances(" 1,, 2 ,").expect("valid"),
        vec![1, 2]
    );
    assert!(HarnessConfig::parse_tolerances("").expect("valid").is_empty());
}

#[test]
fn test_parse_tolerances_rejects_garbage() {
    let err = HarnessConfig::parse_tolerances("1,two").expect_err("invalid");
    assert!(matches!(err, ConfigError::InvalidTolerance { ref value } if value == "two"));
}

#[test]
fn test_validate_zero_tree_size() {
    let config = HarnessConfig {
        tree_size: 0,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::ZeroTreeSize)));
}

#[test]
fn test_validate_empty_tolerances() {
    let config = HarnessConfig {
        tolerances: vec![],
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::EmptyTolerances)
    ));
}

#[test]
fn test_config_serializes_to_json() {
    let config = HarnessConfig::default();
    let json = serde_json::to_string(&config).expect("serialize");
    let back: HarnessConfig = serde_json::from_str(&json).expect("deserialize");

    assert!(json.contains("\"tree_size\":10000"));
    assert_eq!(back, config);
}

#[test]
fn test_error_display() {
    let err = ConfigError::ZeroTreeSize;
    assert_eq!(err.to_string(), "tree size must be greater than zero");

    let err = ConfigError::InvalidTolerance {
        value: "-4".to_string(),
    };
    assert!(err.to_string().contains("-4"));
}
