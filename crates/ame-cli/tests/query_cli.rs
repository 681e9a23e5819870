use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn fixture_table() -> PathBuf {
    workspace_root().join("crates/ame-core/tests/fixtures/mass_1.mas20.excerpt.txt")
}

fn run_ame(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ame"))
        .arg("--table")
        .arg(fixture_table())
        .args(args)
        .output()
        .expect("ame binary should run")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn mass_command_prints_combined_molecule() {
    let output = run_ame(&["mass", "2H1:1O16"]);
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("2H1:1O16: mass = "), "{stdout}");
    assert!(stdout.contains("A = 18"), "{stdout}");
    assert!(stdout.contains("Z = 9"), "{stdout}");
}

#[test]
fn mass_command_json_output() {
    let output = run_ame(&["mass", "40Ca:19F", "--json"]);
    assert!(output.status.success(), "{:?}", output);

    let json = stdout_json(&output);
    assert_eq!(json["symbol"], "CaF");
    assert_eq!(json["mass_number"], 59);
    assert_eq!(json["charge"], 1);
    let mass = json["mass"].as_f64().expect("mass should be a number");
    assert!((mass - (39_962_590.850 + 18_998_403.16207)).abs() < 1.0e-6);
}

#[test]
fn ion_at_zero_charge_matches_atomic_mass() {
    let atom = stdout_json(&run_ame(&["--json", "mass", "85Rb"]));
    let ion = stdout_json(&run_ame(&["--json", "ion", "85Rb", "--charge", "0"]));

    assert_eq!(ion["charge"], 0);
    assert_eq!(ion["mass"], atom["mass"]);
    assert_eq!(ion["mass_uncertainty"], atom["mass_uncertainty"]);
}

#[test]
fn excess_command_reports_kev() {
    let output = run_ame(&["excess", "12C"]);
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "12C: mass excess = 0.000 +/- 0.000 keV"
    );
}

#[test]
fn isomer_command_marks_metastable_symbol() {
    let output = run_ame(&["--json", "isomer", "85Rb", "--energy", "514"]);
    assert!(output.status.success(), "{:?}", output);

    let json = stdout_json(&output);
    assert_eq!(json["symbol"], "Rb^m");
    assert_eq!(json["mass_uncertainty"], 0.0);
    let excess = json["mass_excess"]
        .as_f64()
        .expect("excess should be a number");
    assert!((excess - (-82167.3410 + 514.0)).abs() < 1.0e-6);
}

#[test]
fn listings_return_rows_in_table_order() {
    let isobars = stdout_json(&run_ame(&["--json", "isobars", "40"]));
    let symbols: Vec<_> = isobars
        .as_array()
        .expect("isobars should be an array")
        .iter()
        .map(|entry| entry["symbol"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(symbols, vec!["Ar", "K", "Ca"]);

    let isotones = stdout_json(&run_ame(&["--json", "isotones", "20"]));
    assert_eq!(isotones.as_array().map(Vec::len), Some(2));

    let output = run_ame(&["element", "H"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 4);
}

#[test]
fn empty_listing_is_not_an_error() {
    let output = run_ame(&["isobars", "7"]);
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "No rows found for A = 7."
    );
}

#[test]
fn parse_command_does_not_need_the_table() {
    let output = Command::new(env!("CARGO_BIN_EXE_ame"))
        .args(["--table", "absent.txt", "--json", "parse", "2H1:1O16"])
        .output()
        .expect("ame binary should run");
    assert!(output.status.success(), "{:?}", output);

    let json = stdout_json(&output);
    assert_eq!(json["constituents"][0]["multiplicity"], 2);
    assert_eq!(json["constituents"][1]["mass_number"], 16);
    assert_eq!(json["combined"]["symbol"], "HO");
}

#[test]
fn unknown_symbol_exits_with_input_error() {
    let output = run_ame(&["mass", "99Zz"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[INPUT.UNKNOWN_SYMBOL]"), "{stderr}");
    assert!(stderr.contains("FATAL EXIT CODE: 2"), "{stderr}");
}

#[test]
fn missing_nuclide_exits_with_computation_error() {
    let output = run_ame(&["mass", "87Rb"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no table entry for 87Rb"), "{stderr}");
}

#[test]
fn missing_table_exits_with_io_error() {
    let temp = TempDir::new().expect("tempdir should be created");
    let output = Command::new(env!("CARGO_BIN_EXE_ame"))
        .arg("--table")
        .arg(temp.path().join("absent.txt"))
        .args(["mass", "85Rb"])
        .output()
        .expect("ame binary should run");

    assert_eq!(output.status.code(), Some(3));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[IO.TABLE_READ]"), "{stderr}");
    assert_eq!(stderr.lines().last(), Some("FATAL EXIT CODE: 3"));
}

#[test]
fn schema_override_is_validated() {
    let temp = TempDir::new().expect("tempdir should be created");
    let schema_path = temp.path().join("schema.json");
    fs::write(
        &schema_path,
        r#"{ "columnWidths": [1, 3], "columnNames": ["cc"], "skipRows": 36 }"#,
    )
    .expect("schema should be written");

    let output = run_ame(&["--schema", schema_path.to_str().unwrap(), "mass", "85Rb"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[INPUT.SCHEMA_SHAPE]"));

    let output = run_ame(&[
        "--schema",
        temp.path().join("absent.json").to_str().unwrap(),
        "mass",
        "85Rb",
    ]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read table schema"));
}

#[test]
fn bad_arguments_exit_with_usage_error() {
    let output = run_ame(&["isobars", "forty"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("ERROR: [INPUT.CLI_USAGE]"), "{stderr}");
    assert_eq!(stderr.lines().last(), Some("FATAL EXIT CODE: 2"));
}
