//! Content domain: unit tests for controller tuning files.

use std::path::Path;

use super::{CONTROLLER_TUNING_PATH, load_controller_tuning, parse_controller_tuning};
use crate::movement::{LadderExitPolicy, MovementTuning};

#[test]
fn test_parse_full_controller_file() {
    let contents = r#"
        (
            schema_version: 1,
            player: (
                horizontal_speed: 250.0,
                smooth_time: 0.1,
                jump_impulse: 400.0,
                move_deadzone: 0.1,
                ladder_speed: 120.0,
                ladder_probe_distance: 10.0,
                ladder_entry_nudge: 8.0,
                ladder_exit: ClearBelow,
                repair_duration: 0.25,
            ),
        )
    "#;

    let tuning = parse_controller_tuning("controller.ron", contents).expect("valid file");
    assert_eq!(tuning.horizontal_speed, 250.0);
    assert_eq!(tuning.ladder_exit, LadderExitPolicy::ClearBelow);
    assert_eq!(tuning.repair_duration, 0.25);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let contents = "(schema_version: 1, player: (horizontal_speed: 200.0))";

    let tuning = parse_controller_tuning("controller.ron", contents).expect("valid file");
    assert_eq!(tuning.horizontal_speed, 200.0);
    assert_eq!(tuning.smooth_time, MovementTuning::default().smooth_time);
    assert_eq!(tuning.ladder_exit, LadderExitPolicy::GroundBelow);
}

#[test]
fn test_rejects_out_of_range_smooth_time() {
    let contents = "(schema_version: 1, player: (smooth_time: 1.5))";

    let err = parse_controller_tuning("controller.ron", contents).unwrap_err();
    assert_eq!(err.file, "controller.ron");
    assert!(err.message.contains("smooth_time"));
}

#[test]
fn test_rejects_unknown_schema_version() {
    let contents = "(schema_version: 7, player: (horizontal_speed: 1.0))";

    let err = parse_controller_tuning("controller.ron", contents).unwrap_err();
    assert!(err.message.contains("schema_version"));
}

#[test]
fn test_reports_parse_errors() {
    let err = parse_controller_tuning("controller.ron", "(schema_version: 1,").unwrap_err();
    assert!(err.to_string().starts_with("Failed to load controller.ron"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = load_controller_tuning(Path::new("assets/data/does_not_exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_controller_file_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONTROLLER_TUNING_PATH);
    let tuning = load_controller_tuning(&path).expect("shipped controller.ron loads");
    assert_eq!(tuning, MovementTuning::default());
}
