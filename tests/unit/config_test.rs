//! Tests for configuration parsing and clamping

use attack_orchestrator::config::{OrchestratorConfig, StrategyConfig, SwingConfig, MIN_PARAMETER};

#[test]
fn test_default_config_is_valid() {
    let cfg = OrchestratorConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.interval_min, 0.5);
    assert_eq!(cfg.interval_max, 1.5);
    assert_eq!(cfg.interval_speed, 1.0);
    assert!(cfg.randomize_order_each_cycle);
}

#[test]
fn test_validate_reports_non_positive_speed() {
    let cfg = OrchestratorConfig {
        interval_speed: 0.0,
        ..OrchestratorConfig::default()
    };
    assert!(cfg.validate().is_err());
    assert_eq!(cfg.sanitized().interval_speed, MIN_PARAMETER);
}

#[test]
fn test_validate_reports_inverted_duration() {
    let cfg = OrchestratorConfig {
        duration_min: 3.0,
        duration_max: 1.0,
        ..OrchestratorConfig::default()
    };
    assert!(cfg.validate().is_err());
    let fixed = cfg.sanitized();
    assert_eq!((fixed.duration_min, fixed.duration_max), (1.0, 3.0));
}

#[test]
fn test_from_json_fills_defaults_and_clamps() {
    let json = r#"{
        "interval_min": 0.2,
        "interval_max": 0.4,
        "duration_min": -1.0,
        "randomize_order_each_cycle": false,
        "seed": 1234
    }"#;

    let cfg = OrchestratorConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.interval_min, 0.2);
    assert_eq!(cfg.interval_max, 0.4);
    assert_eq!(cfg.duration_min, MIN_PARAMETER);
    assert_eq!(cfg.duration_max, 1.5);
    assert!(!cfg.randomize_order_each_cycle);
    assert!(cfg.fire_on_activate);
    assert_eq!(cfg.seed, Some(1234));
}

#[test]
fn test_from_json_rejects_malformed_input() {
    assert!(OrchestratorConfig::from_json_str("{ interval_min: ").is_err());
    assert!(OrchestratorConfig::from_json_str(r#"{"interval_min": "fast"}"#).is_err());
}

#[test]
fn test_swing_config_from_json() {
    let json = r#"{ "weapon_type": "Katana", "strategy": "normal", "arc_degrees": 720 }"#;
    let cfg: SwingConfig = serde_json::from_str(json).unwrap();
    assert_eq!(cfg.strategy, StrategyConfig::Normal);
    assert_eq!(cfg.variation_offset, 45.0);
    assert_eq!(cfg.sanitized().arc_degrees, 360.0);
}
