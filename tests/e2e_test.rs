/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn stdout_json(args: &[&str]) -> serde_json::Value {
    let output = cargo_bin_cmd!("mot-eval").args(args).output().unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("mot-eval")
            .arg(fixture("open-model.yml"))
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("mot-eval").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("mot-eval")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 1: a model misses the requested class
    #[test]
    fn test_exit_code_threshold_not_met() {
        cargo_bin_cmd!("mot-eval")
            .args(["-t", "1", &fixture("open-model.yml")])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("below Class 1"));
    }

    /// Exit code 0: every model meets the requested class
    #[test]
    fn test_exit_code_threshold_met() {
        cargo_bin_cmd!("mot-eval")
            .args([
                "-t",
                "3",
                &fixture("open-model.yml"),
                &fixture("open-science.yml"),
            ])
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("mot-eval")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: No model file given
    #[test]
    fn test_exit_code_missing_model_files() {
        cargo_bin_cmd!("mot-eval").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("mot-eval")
            .args(["-f", "invalid_format", &fixture("open-model.yml")])
            .assert()
            .code(2);
    }

    /// Exit code 2: Threshold outside 1..=3
    #[test]
    fn test_exit_code_invalid_threshold() {
        cargo_bin_cmd!("mot-eval")
            .args(["-t", "4", &fixture("open-model.yml")])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - non-existent model file
    #[test]
    fn test_exit_code_application_error_missing_file() {
        cargo_bin_cmd!("mot-eval")
            .arg("/nonexistent/model.yml")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to load model file"));
    }

    /// Exit code 3: Application error - component name not in catalog
    #[test]
    fn test_exit_code_application_error_unknown_component() {
        cargo_bin_cmd!("mot-eval")
            .arg(fixture("unknown-component.yml"))
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Unknown component: \"Training logs\""));
    }

    /// Exit code 3: Application error - malformed model file
    #[test]
    fn test_exit_code_application_error_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.yml");
        fs::write(&path, "release: [unclosed").unwrap();

        cargo_bin_cmd!("mot-eval")
            .arg(path.to_str().unwrap())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse model file"));
    }
}

mod json_output_tests {
    use super::*;

    #[test]
    fn test_open_model_is_class_three() {
        let json = stdout_json(&[&fixture("open-model.yml")]);
        let model = &json["models"][0];

        assert_eq!(json["metadata"]["tool"], "mot-eval");
        assert!(json["metadata"]["runId"]
            .as_str()
            .unwrap()
            .starts_with("urn:uuid:"));
        assert_eq!(model["name"], "Pythia");
        assert_eq!(model["organization"], "EleutherAI");
        assert_eq!(model["classification"]["value"], 3);
        assert_eq!(model["classification"]["label"], "Class III - Open Model");
        assert_eq!(model["progress"]["3"], 100.0);
        assert_eq!(model["progress"]["2"], 60.0);
        assert_eq!(model["progress"]["1"], 0.0);
        assert_eq!(model["badges"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_global_licenses_reach_class_one() {
        let json = stdout_json(&[&fixture("open-science.yml")]);
        let model = &json["models"][0];

        assert_eq!(model["name"], "Olmo");
        assert_eq!(model["classification"]["value"], 1);
        assert_eq!(model["totalProgress"], 100.0);
        assert_eq!(model["evaluation"]["1"]["licenses"]["9"], "Apache-2.0");
        assert_eq!(model["evaluation"]["1"]["licenses"]["21"], "CC-BY-4.0");
    }

    #[test]
    fn test_research_paper_substitution() {
        let json = stdout_json(&[&fixture("research-paper.yml")]);
        let model = &json["models"][0];

        assert_eq!(model["classification"]["value"], 3);
        let missing = model["evaluation"]["3"]["components"]["missing"]
            .as_array()
            .unwrap();
        assert!(!missing.contains(&serde_json::json!(11)));
    }

    #[test]
    fn test_conditional_pass() {
        let json = stdout_json(&[&fixture("conditional.yml")]);
        let model = &json["models"][0];

        assert_eq!(model["classification"]["value"], 3);
        assert_eq!(model["conditionalPass"], true);
        assert_eq!(model["evaluation"]["not-type-appropriate"][0], 13);
        assert_eq!(model["messages"][1], "Model card of type document");
    }

    #[test]
    fn test_restricted_license_is_unclassified() {
        let json = stdout_json(&[&fixture("restricted.json")]);
        let model = &json["models"][0];

        assert_eq!(model["classification"]["value"], 0);
        assert_eq!(model["classification"]["label"], "Unclassified");
        let invalid = model["evaluation"]["3"]["components"]["invalid"]
            .as_array()
            .unwrap();
        assert_eq!(invalid.len(), 3);
    }

    #[test]
    fn test_pending_model() {
        let json = stdout_json(&[&fixture("pending.yml")]);
        let model = &json["models"][0];

        assert_eq!(model["pending"], true);
        assert_eq!(model["classification"]["label"], "Pending evaluation");
    }

    #[test]
    fn test_declared_data_json() {
        let json = stdout_json(&[&fixture("declared.json")]);
        assert_eq!(json["models"][0]["name"], "Declared");
        assert_eq!(json["models"][0]["classification"]["value"], 3);
    }

    #[test]
    fn test_batch_keeps_argument_order() {
        let json = stdout_json(&[
            &fixture("restricted.json"),
            &fixture("open-science.yml"),
            &fixture("open-model.yml"),
        ]);
        let names: Vec<&str> = json["models"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Llama", "Olmo", "Pythia"]);
    }

    #[test]
    fn test_mini_badges() {
        let json = stdout_json(&["--mini", &fixture("open-model.yml")]);
        let badges = json["models"][0]["badges"].as_array().unwrap();

        assert_eq!(badges.len(), 2);
        assert_eq!(badges[0]["status"], "Qualified");
        assert_eq!(badges[1]["status"], "In progress (60%)");
    }

    #[test]
    fn test_custom_license_file_replaces_bundled_list() {
        let json = stdout_json(&[
            "--licenses",
            &fixture("extra-licenses.json"),
            &fixture("restricted.json"),
        ]);
        let model = &json["models"][0];

        assert_eq!(model["progress"]["3"], 50.0);
        assert_eq!(
            model["evaluation"]["3"]["components"]["included"]
                .as_array()
                .unwrap()
                .len(),
            3
        );
    }

    #[test]
    fn test_custom_component_catalog() {
        let dir = TempDir::new().unwrap();
        let components = dir.path().join("components.yml");
        fs::write(
            &components,
            r#"
components:
  - id: 9
    name: Model architecture
    description: Network code
    content_type: code
    class: 3
    required: true
"#,
        )
        .unwrap();
        let model = dir.path().join("tiny.yml");
        fs::write(
            &model,
            "release:\n  name: Tiny\n  components:\n    - name: MODEL ARCHITECTURE\n      license_name: MIT\n",
        )
        .unwrap();

        let json = stdout_json(&[
            "--components",
            components.to_str().unwrap(),
            model.to_str().unwrap(),
        ]);
        let model = &json["models"][0];
        assert_eq!(model["classification"]["value"], 1);
        assert_eq!(model["components"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_component_catalog_is_an_application_error() {
        let dir = TempDir::new().unwrap();
        let components = dir.path().join("components.yml");
        fs::write(
            &components,
            "components:\n  - id: 9\n    name: A\n    content_type: code\n    class: 3\n    colour: red\n",
        )
        .unwrap();

        cargo_bin_cmd!("mot-eval")
            .args([
                "--components",
                components.to_str().unwrap(),
                &fixture("open-model.yml"),
            ])
            .assert()
            .code(3);
    }
}

mod markdown_output_tests {
    use super::*;

    #[test]
    fn test_markdown_report() {
        cargo_bin_cmd!("mot-eval")
            .args(["-f", "markdown", &fixture("conditional.yml")])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("# Model Openness Evaluation"))
            .stdout(predicate::str::contains("## Mislabelled"))
            .stdout(predicate::str::contains("| Model card | 3 | yes | ✅ included | MIT |"))
            .stdout(predicate::str::contains("> - Model card of type document"));
    }

    #[test]
    fn test_output_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("report.md");

        cargo_bin_cmd!("mot-eval")
            .args([
                "-f",
                "md",
                "-o",
                output.to_str().unwrap(),
                &fixture("open-model.yml"),
            ])
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Report written"));

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("## Pythia (6.9B)"));
    }

    #[test]
    fn test_output_file_missing_directory() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("missing").join("report.md");

        cargo_bin_cmd!("mot-eval")
            .args(["-o", output.to_str().unwrap(), &fixture("open-model.yml")])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Parent directory does not exist"));
    }
}
