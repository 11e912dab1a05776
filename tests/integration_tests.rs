use scoped_kit::core::ConfigProvider;
use scoped_kit::{KitError, ScenarioEngine};
use std::io::Write;
use tempfile::NamedTempFile;

struct TestConfig {
    path: Option<String>,
    removals: Vec<String>,
    json: bool,
}

impl ConfigProvider for TestConfig {
    fn config_path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    fn removals(&self) -> &[String] {
        &self.removals
    }

    fn json_output(&self) -> bool {
        self.json
    }
}

fn write_scenario(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_built_in_scenario() {
    let engine = ScenarioEngine::new(TestConfig {
        path: None,
        removals: vec!["Banana".to_string()],
        json: false,
    });

    let output = engine.run().unwrap();
    let cart = output.cart.as_ref().unwrap();
    assert_eq!(cart.total, 2.75);
    assert_eq!(cart.removed, vec!["Banana".to_string()]);

    let buffer = output.buffer.as_ref().unwrap();
    assert_eq!(buffer.original, vec![10, 20, 30]);
    assert_eq!(buffer.duplicate, vec![99, 20, 30]);

    let text = output.render(false).unwrap();
    assert!(text.contains("  - Apple: $1.50"));
    assert!(!text.contains("Banana"));
    assert!(text.contains("Total: $2.75"));
}

#[test]
fn test_scenario_from_file_as_json() {
    let file = write_scenario(
        r#"
[cart]
name = "Stationery"

[[cart.entries]]
label = "Pen"
amount = 2.0

[[cart.entries]]
label = "Paper"
amount = 4.5
"#,
    );

    let engine = ScenarioEngine::new(TestConfig {
        path: Some(file.path().to_str().unwrap().to_string()),
        removals: vec![],
        json: true,
    });

    let rendered = engine.run_and_render().unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["cart"]["name"], "Stationery");
    assert_eq!(value["cart"]["total"], 6.5);
    assert_eq!(value["cart"]["entries"][1]["label"], "Paper");
    assert!(value["buffer"].is_null());
}

#[test]
fn test_invalid_scenario_is_rejected() {
    let file = write_scenario(
        r#"
[buffer]
capacity = 2
values = [1, 2, 3]
"#,
    );

    let engine = ScenarioEngine::new(TestConfig {
        path: Some(file.path().to_str().unwrap().to_string()),
        removals: vec![],
        json: false,
    });

    assert!(matches!(
        engine.run(),
        Err(KitError::ConfigValidationError { field, .. }) if field == "buffer.values"
    ));
}

#[test]
fn test_missing_scenario_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let engine = ScenarioEngine::new(TestConfig {
        path: Some(dir.path().join("missing.toml").to_str().unwrap().to_string()),
        removals: vec![],
        json: false,
    });

    assert!(matches!(engine.run(), Err(KitError::IoError(_))));
}
