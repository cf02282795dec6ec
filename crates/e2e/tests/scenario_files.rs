//! The shipped scenario files must parse

use std::path::Path;

use ide_e2e::{Scenario, Step};

#[test]
fn shipped_scenarios_parse() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    let scenarios = Scenario::load_all(&dir).unwrap();
    assert!(!scenarios.is_empty());

    let cpp = scenarios
        .iter()
        .find(|s| s.name == "cpp-workspace")
        .expect("cpp-workspace scenario");
    assert!(matches!(cpp.steps[0], Step::CreateWorkspace { .. }));
    assert!(matches!(
        cpp.steps.last().unwrap(),
        Step::StopAndRemoveWorkspace
    ));
    assert!(cpp.tags.iter().any(|t| t == "languageserver"));
}
