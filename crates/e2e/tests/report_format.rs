//! Report serialization shape

use chrono::Utc;
use ide_e2e::{ScenarioResult, StepResult, SuiteConfig, SuiteReport, SuiteRunner};
use ide_e2e_driver::DriverConfig;

#[test]
fn report_round_trips_through_json() {
    let dir = tempfile::tempdir().unwrap();

    let suite_config = SuiteConfig {
        artifact_dir: dir.path().to_path_buf(),
        ..SuiteConfig::default()
    };
    let runner = SuiteRunner::new(DriverConfig::default(), suite_config);

    let report = SuiteReport {
        total: 1,
        passed: 1,
        failed: 0,
        duration_ms: 1234,
        finished_at: Utc::now(),
        results: vec![ScenarioResult {
            name: "cpp-workspace".into(),
            success: true,
            duration_ms: 1234,
            steps: vec![StepResult {
                success: true,
                label: "run_task:build".into(),
                duration_ms: 900,
                error: None,
                screenshot_path: None,
            }],
            error: None,
            failure_screenshot: None,
        }],
    };

    let path = runner.write_report(&report).unwrap();
    let raw = std::fs::read_to_string(path).unwrap();
    let parsed: SuiteReport = serde_json::from_str(&raw).unwrap();

    assert_eq!(parsed.total, 1);
    assert_eq!(parsed.passed, 1);
    assert_eq!(parsed.results[0].steps[0].label, "run_task:build");
}
