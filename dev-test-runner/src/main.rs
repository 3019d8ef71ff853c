//! Sweep the fixture manifest: generate every case, check the expected
//! snippets, and make sure a second run gives identical output.
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use json_modelgen::path_de::from_str_with_path;
use json_modelgen::{generate, ConfigRecord, Selection};
use regex::Regex;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Manifest {
    cases: Vec<Case>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Case {
    name: String,
    input: PathBuf,
    root_type: String,
    #[serde(flatten)]
    selection: ConfigRecord,
    #[serde(default)]
    expect: Vec<String>,
    #[serde(default)]
    expect_regex: Vec<String>,
    #[serde(default)]
    expect_error: Option<String>,
}

impl Case {
    /// Every problem found with this case; empty means it passed.
    fn check(&self, fixtures: &Path) -> Vec<String> {
        let path = fixtures.join(&self.input);
        let source = match std::fs::read_to_string(&path) {
            Ok(x) => x,
            Err(error) => return vec![format!("failed to read {}: {error}", path.display())],
        };
        let config = Selection::from_record(&self.selection).to_config();

        let output = match (generate(&source, &self.root_type, &config), &self.expect_error) {
            (Err(error), Some(expected)) if error.to_string().contains(expected.as_str()) => {
                return Vec::new();
            }
            (Err(error), _) => return vec![format!("generation failed: {error}")],
            (Ok(_), Some(expected)) => return vec![format!("expected an error containing {expected:?}")],
            (Ok(output), None) => output,
        };

        let mut problems = Vec::new();
        for snippet in &self.expect {
            if !output.contains(snippet.as_str()) {
                problems.push(format!("missing snippet {snippet:?}"));
            }
        }
        for pattern in &self.expect_regex {
            match Regex::new(pattern) {
                Ok(re) if re.is_match(&output) => {}
                Ok(_) => problems.push(format!("no match for /{pattern}/")),
                Err(error) => problems.push(format!("bad pattern /{pattern}/: {error}")),
            }
        }
        match generate(&source, &self.root_type, &config) {
            Ok(again) if again == output => {}
            _ => problems.push("second run produced different output".to_string()),
        }
        if !problems.is_empty() {
            problems.push(format!("output was:\n{output}"));
        }
        problems
    }
}

fn main() -> ExitCode {
    let fixtures = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures"));
    let manifest_path = fixtures.join("manifest.json");

    let manifest = std::fs::read_to_string(&manifest_path)
        .map_err(|error| error.to_string())
        .and_then(|src| from_str_with_path::<Manifest>(&src).map_err(|error| error.to_string()));
    let manifest = match manifest {
        Ok(x) => x,
        Err(error) => {
            eprintln!("❌ failed to load {}: {error}", manifest_path.display());
            return ExitCode::FAILURE;
        }
    };

    let mut failed = 0usize;
    for case in &manifest.cases {
        let problems = case.check(&fixtures);
        if problems.is_empty() {
            eprintln!("✅ {}", case.name);
        } else {
            failed += 1;
            eprintln!("❌ {}", case.name);
            for problem in problems {
                eprintln!("    {problem}");
            }
        }
    }

    eprintln!("—— {} passed, {failed} failed ——", manifest.cases.len() - failed);
    if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
