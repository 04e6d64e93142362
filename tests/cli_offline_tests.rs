mod common;
use common::{
    ACTIVITY_JSON, EMPLOYEES_JSON, REPORT_CSV, config_path, fixture, rat, rat_cfg, temp_out,
};
use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

fn matrix_args<'a>(activity: &'a str, employees: &'a str) -> Vec<&'a str> {
    vec![
        "matrix",
        "--input",
        activity,
        "--employees",
        employees,
        "--from",
        "2026-01-05",
        "--to",
        "2026-01-06",
    ]
}

// ---------------------------
// matrix
// ---------------------------

#[test]
fn test_matrix_from_files() {
    let act = fixture("matrix_files_act", "json", ACTIVITY_JSON);
    let emp = fixture("matrix_files_emp", "json", EMPLOYEES_JSON);

    rat("matrix_files")
        .args(matrix_args(&act, &emp))
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Rossi"))
        .stdout(predicate::str::contains("09:20 - 18:00 LATE"))
        .stdout(predicate::str::contains("08:55 - 18:05"))
        .stdout(predicate::str::contains("09:00 - --:-- MISSING OUT"))
        .stdout(predicate::str::contains("Carla Neri"))
        .stdout(predicate::str::contains("15:50"))
        .stderr(predicate::str::contains("1 record(s) skipped"));
}

#[test]
fn test_matrix_pin_and_detail() {
    let act = fixture("matrix_pin_act", "json", ACTIVITY_JSON);
    let emp = fixture("matrix_pin_emp", "json", EMPLOYEES_JSON);

    let mut args = matrix_args(&act, &emp);
    args.extend(["--pin", "9", "--detail"]);

    let output = rat("matrix_pin").args(&args).output().expect("run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let bruno = stdout.find("📌 Bruno Verdi").expect("pinned row");
    let alice = stdout.find("Alice Rossi").expect("alice row");
    assert!(bruno < alice);

    assert!(stdout.contains("note   : traffic"));
    assert!(stdout.contains("place  : HQ Milano"));
    assert!(stdout.contains("openstreetmap.org"));
}

#[test]
fn test_matrix_without_directory_uses_unknown_labels() {
    let act = fixture("matrix_nodir_act", "json", ACTIVITY_JSON);

    rat("matrix_nodir")
        .args([
            "matrix",
            "--input",
            &act,
            "--period",
            "2026-01-05:2026-01-06",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown #7"))
        .stdout(predicate::str::contains("Unknown #9"));
}

#[test]
fn test_matrix_export_csv() {
    let act = fixture("matrix_csv_act", "json", ACTIVITY_JSON);
    let emp = fixture("matrix_csv_emp", "json", EMPLOYEES_JSON);
    let out = temp_out("matrix_csv", "csv");

    let mut args = matrix_args(&act, &emp);
    args.extend(["--export", "csv", "--file", &out]);
    rat("matrix_csv").args(&args).assert().success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("ID,Employee,Department,01-05,01-06,Total,Trend")
    );
    let first = lines.next().expect("first row");
    assert!(first.starts_with("7,Alice Rossi,Sales,09:20 - 18:00 LATE,08:55 - 18:05,15:50,"));
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_matrix_export_json() {
    let act = fixture("matrix_json_act", "json", ACTIVITY_JSON);
    let emp = fixture("matrix_json_emp", "json", EMPLOYEES_JSON);
    let out = temp_out("matrix_json", "json");

    let mut args = matrix_args(&act, &emp);
    args.extend(["--export", "json", "--file", &out]);
    rat("matrix_json").args(&args).assert().success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["Employee"], "Alice Rossi");
    assert_eq!(rows[0]["Total"], "15:50");
    assert_eq!(rows[1]["01-06"], "");
}

#[test]
fn test_matrix_export_xlsx_and_pdf() {
    let act = fixture("matrix_bin_act", "json", ACTIVITY_JSON);
    let emp = fixture("matrix_bin_emp", "json", EMPLOYEES_JSON);

    let xlsx = temp_out("matrix_bin", "xlsx");
    let mut args = matrix_args(&act, &emp);
    args.extend(["--export", "xlsx", "--file", &xlsx]);
    rat("matrix_bin_xlsx").args(&args).assert().success();
    let bytes = fs::read(&xlsx).expect("xlsx");
    assert!(bytes.starts_with(b"PK"));

    let pdf = temp_out("matrix_bin", "pdf");
    let mut args = matrix_args(&act, &emp);
    args.extend(["--export", "pdf", "--file", &pdf]);
    rat("matrix_bin_pdf").args(&args).assert().success();
    let bytes = fs::read(&pdf).expect("pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let act = fixture("matrix_force_act", "json", ACTIVITY_JSON);
    let emp = fixture("matrix_force_emp", "json", EMPLOYEES_JSON);
    let out = temp_out("matrix_force", "csv");
    fs::write(&out, "keep me").expect("seed");

    let mut args = matrix_args(&act, &emp);
    args.extend(["--export", "csv", "--file", &out]);
    rat("matrix_force")
        .args(&args)
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    args.push("--force");
    rat("matrix_force").args(&args).assert().success();
    assert!(fs::read_to_string(&out).expect("read").contains("Alice Rossi"));
}

#[test]
fn test_export_of_empty_range_writes_nothing() {
    let act = fixture("matrix_empty_act", "json", "[]");
    let out = temp_out("matrix_empty", "csv");

    rat("matrix_empty")
        .args([
            "matrix", "--input", &act, "--period", "2026-01", "--export", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("No rows to export"));
    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_matrix_rejects_bad_dates() {
    let act = fixture("matrix_baddate_act", "json", "[]");
    rat("matrix_baddate")
        .args(["matrix", "--input", &act, "--from", "2026-13-01", "--to", "2026-12-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_unknown_tz_flag_is_an_error() {
    let act = fixture("matrix_badtz_act", "json", "[]");
    let cfg = config_path("matrix_badtz");
    cargo_bin_cmd!("rattendance")
        .env("NO_COLOR", "1")
        .env_remove("RATTENDANCE_CONFIG")
        .args(["--config", &cfg, "--tz", "Mars/Olympus"])
        .args(["matrix", "--input", &act, "--period", "2026-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone: Mars/Olympus"));
}

#[test]
fn test_matrix_rejects_malformed_input_file() {
    let act = fixture("matrix_malformed_act", "json", "{ not json");
    rat("matrix_malformed")
        .args(["matrix", "--input", &act, "--period", "2026-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input data"));
}

// ---------------------------
// report
// ---------------------------

#[test]
fn test_report_from_file() {
    let csv = fixture("report_file", "csv", REPORT_CSV);

    rat("report_file")
        .args(["report", "--input", &csv])
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 rows)"))
        .stdout(predicate::str::contains("Jan 5, 2026, 9:20 AM"))
        .stdout(predicate::str::contains("late, traffic"));
}

#[test]
fn test_report_filter_and_limit() {
    let csv = fixture("report_filter", "csv", REPORT_CSV);

    rat("report_filter")
        .args(["report", "--input", &csv, "--filter", "Department=ops"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bruno Verdi"))
        .stdout(predicate::str::contains("Alice Rossi").not());

    rat("report_filter")
        .args(["report", "--input", &csv, "--search", "alice", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 rows)"));

    rat("report_filter")
        .args(["report", "--input", &csv, "--filter", "Department"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("COLUMN=VALUE"));
}

#[test]
fn test_report_export_csv_uses_iso_times() {
    let csv = fixture("report_export", "csv", REPORT_CSV);
    let out = temp_out("report_export", "csv");

    rat("report_export")
        .args([
            "report", "--input", &csv, "--search", "alice", "--export", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("Employee,Department,Date,Check In,Check Out,Notes"));
    assert!(content.contains("2026-01-05 09:20"));
    assert!(content.contains("\"late, traffic\""));
    assert!(!content.contains("Bruno"));
}

// ---------------------------
// init / config / logout
// ---------------------------

#[test]
fn test_init_then_check() {
    let cfg = config_path("init_check");

    rat_cfg(&cfg)
        .args(["init", "--api-url", "http://example.test/api"])
        .assert()
        .success();
    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("api_base_url: http://example.test/api"));

    rat_cfg(&cfg)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));

    rat_cfg(&cfg)
        .args(["init", "--api-url", "not a url"])
        .assert()
        .failure();
}

#[test]
fn test_config_migrate_adds_missing_keys() {
    let cfg = config_path("config_migrate");
    fs::write(&cfg, "api_base_url: http://example.test/api\n").expect("seed");

    rat_cfg(&cfg)
        .args(["config", "--check"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Missing keys"))
        .stderr(predicate::str::contains("pinned_employees"));

    rat_cfg(&cfg)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added:"));

    let content = fs::read_to_string(&cfg).expect("read");
    assert!(content.contains("api_base_url: http://example.test/api"));
    assert!(content.contains("pinned_employees"));
    assert!(content.contains("# display_timezone options"));

    rat_cfg(&cfg)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to migrate"));
}

#[test]
fn test_config_print_masks_token() {
    let cfg = config_path("config_print");
    fs::write(&cfg, "api_token: very-secret\n").expect("seed");

    rat_cfg(&cfg)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains("very-secret").not())
        .stdout(predicate::str::contains("Display timezone: UTC"));
}

#[test]
fn test_logout_clears_token() {
    let cfg = config_path("logout");
    fs::write(&cfg, "api_token: abc\n").expect("seed");

    rat_cfg(&cfg).arg("logout").assert().success();
    let content = fs::read_to_string(&cfg).expect("read");
    assert!(!content.contains("abc"));

    rat_cfg(&cfg)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("No stored token"));
}

#[test]
fn test_config_env_variable_is_honoured() {
    let cfg = config_path("config_env");
    fs::write(&cfg, "display_timezone: Asia/Tokyo\n").expect("seed");

    let mut cmd = assert_cmd::cargo_bin_cmd!("rattendance");
    cmd.env("NO_COLOR", "1")
        .env("RATTENDANCE_CONFIG", &cfg)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Display timezone: Asia/Tokyo"));
}
