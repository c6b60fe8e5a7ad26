//! serde round-trips of the public records

use crate::sweep::{SweepConfig, sweep_by_allocation};
use crate::{compute_power, compute_sample_size};

#[test]
fn test_power_result_round_trips_through_json() {
    let result = compute_power(2000, 50.0, 0.02, 0.05).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let back: crate::PowerResult = serde_json::from_str(&json).unwrap();

    assert_eq!(back, result);
    assert!(json.contains("\"power\""));
    assert!(json.contains("\"treatment\""));
}

#[test]
fn test_sweep_result_round_trips_through_json() {
    let result = sweep_by_allocation(&SweepConfig::mde(2000, 0.8)).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let back: crate::SweepResult = serde_json::from_str(&json).unwrap();

    assert_eq!(back, result);
}

#[test]
fn test_sweep_config_defaults_fill_in() {
    // Omitted alpha and grid take the compile-time defaults
    let config: SweepConfig =
        serde_json::from_str(r#"{"mode":{"Mde":{"n_total":2000,"power":0.8}}}"#).unwrap();

    assert_eq!(config.alpha, 0.05);
    assert_eq!(config.grid.start_pct, 5.0);
    assert_eq!(config.grid.end_pct, 95.0);
    assert_eq!(config.grid.step_pct, 5.0);

    let result = sweep_by_allocation(&config).unwrap();
    assert_eq!(result.points.len(), 19);
}

#[test]
fn test_sample_size_result_is_plain_integers_in_json() {
    let result = compute_sample_size(0.05, 0.8, 50.0, 0.05).unwrap();
    let json = serde_json::to_string(&result).unwrap();

    assert!(json.contains("\"total\":3140"));
    assert!(json.contains("\"treatment\":1570"));
    assert!(json.contains("\"control\":1570"));
}
