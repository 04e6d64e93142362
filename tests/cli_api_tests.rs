mod common;
use common::{config_path, rat_cfg, serve_once, serve_raw, temp_out, write_config};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_login_stores_token() {
    let (base, server) = serve_once(200, "application/json", r#"{"token":"t-9"}"#);
    let cfg = config_path("cli_login");
    write_config(&cfg, &base, None);

    rat_cfg(&cfg)
        .env("RATTENDANCE_PASSWORD", "pw")
        .args(["login", "--email", "ada@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as ada@example.com"));

    let request = server.join().expect("server");
    assert!(request.contains(r#""password":"pw""#));
    assert!(fs::read_to_string(&cfg).expect("read").contains("api_token: t-9"));
}

#[test]
fn test_login_requires_password() {
    let cfg = config_path("cli_login_nopw");
    rat_cfg(&cfg)
        .args(["login", "--email", "ada@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RATTENDANCE_PASSWORD"));
}

#[test]
fn test_employees_listing() {
    let body = r#"{"data":[{"id":2,"name":"Zoe"},{"id":1,"firstName":"Ada","lastName":"L","department":"IT"}]}"#;
    let (base, server) = serve_once(200, "application/json", body);
    let cfg = config_path("cli_employees");
    write_config(&cfg, &base, Some("tok"));

    let output = rat_cfg(&cfg).args(["employees"]).output().expect("run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let ada = stdout.find("Ada L").expect("ada");
    let zoe = stdout.find("Zoe").expect("zoe");
    assert!(ada < zoe);
    assert!(stdout.contains("Employees (2)"));

    let request = server.join().expect("server");
    assert!(request.starts_with("GET /api/employees"));
}

#[test]
fn test_expired_token_prints_login_hint() {
    let (base, server) = serve_once(401, "application/json", r#"{"message":"Token expired"}"#);
    let cfg = config_path("cli_expired");
    write_config(&cfg, &base, Some("old"));

    rat_cfg(&cfg)
        .arg("holidays")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Token expired"))
        .stderr(predicate::str::contains("rattendance login"));
    server.join().expect("server");
}

#[test]
fn test_server_error_has_no_login_hint() {
    let (base, server) = serve_once(500, "text/plain", "database unavailable");
    let cfg = config_path("cli_500");
    write_config(&cfg, &base, Some("tok"));

    rat_cfg(&cfg)
        .args(["leave", "types"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API error (500): database unavailable"))
        .stderr(predicate::str::contains("rattendance login").not());
    server.join().expect("server");
}

#[test]
fn test_truncated_error_body_is_logged_and_reported_by_status() {
    let (base, server) = serve_raw(
        "HTTP/1.1 502 X\r\nContent-Type: text/plain\r\nContent-Length: 200\r\nConnection: close\r\n\r\npartial"
            .to_string(),
    );
    let cfg = config_path("cli_502_truncated");
    write_config(&cfg, &base, Some("tok"));

    rat_cfg(&cfg)
        .args(["-v", "holidays"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error body unreadable"))
        .stderr(predicate::str::contains("API error (502): HTTP 502"));
    server.join().expect("server");
}

#[test]
fn test_clock_in_with_location() {
    let (base, server) = serve_once(201, "application/json", r#"{"message":"Clocked in"}"#);
    let cfg = config_path("cli_clock");
    write_config(&cfg, &base, Some("tok"));

    rat_cfg(&cfg)
        .args([
            "clock", "in", "--note", "on site", "--lat", "45.5", "--lng", "9.25", "--place", "HQ",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clock-in recorded"))
        .stdout(predicate::str::contains("Clocked in"))
        .stdout(predicate::str::contains("Location: HQ"));

    let request = server.join().expect("server");
    assert!(request.starts_with("POST /api/attendance/clock-in"));
    assert!(request.contains(r#""note":"on site""#));
    assert!(request.contains(r#""locationName":"HQ""#));
    assert!(request.contains(r#""latitude":45.5"#));
}

#[test]
fn test_clock_rejects_out_of_range_coordinates() {
    let cfg = config_path("cli_clock_bad");
    rat_cfg(&cfg)
        .args(["clock", "out", "--lat", "95", "--lng", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_history_table() {
    let body = r#"[
        {"id":1,"checkInAt":"2026-01-05T09:30:00Z","checkOutAt":"2026-01-05T18:00:00Z","note":"dentist"},
        {"id":2,"checkInAt":"2026-01-06T09:00:00Z"}
    ]"#;
    let (base, server) = serve_once(200, "application/json", body);
    let cfg = config_path("cli_history");
    write_config(&cfg, &base, Some("tok"));

    rat_cfg(&cfg)
        .args(["history", "--period", "2026-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("My attendance for January 2026"))
        .stdout(predicate::str::contains("LATE"))
        .stdout(predicate::str::contains("MISSING OUT"))
        .stdout(predicate::str::contains("dentist"))
        .stdout(predicate::str::contains("Total worked: 07h 30m"));

    let request = server.join().expect("server");
    assert!(request.starts_with("GET /api/attendance/me?from=2026-01-01&to=2026-01-31"));
}

#[test]
fn test_edit_log_sends_utc() {
    let (base, server) = serve_once(200, "application/json", r#"{"message":"updated"}"#);
    let cfg = config_path("cli_edit");
    write_config(&cfg, &base, Some("tok"));

    rat_cfg(&cfg)
        .args(["edit-log", "5", "--in", "2026-01-05 10:00", "--note", "fixed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Log #5 updated"));

    let request = server.join().expect("server");
    assert!(request.starts_with("PUT /api/attendance/logs/5"));
    assert!(request.contains(r#""checkInAt":"2026-01-05T10:00:00Z""#));
    assert!(!request.contains("checkOutAt"));
}

#[test]
fn test_edit_log_needs_a_change() {
    let cfg = config_path("cli_edit_empty");
    rat_cfg(&cfg)
        .args(["edit-log", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to change"));
}

#[test]
fn test_leave_apply_validates_range() {
    let cfg = config_path("cli_leave_range");
    rat_cfg(&cfg)
        .args([
            "leave", "apply", "--type", "1", "--from", "2026-02-10", "--to", "2026-02-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("end is before start"));
}

#[test]
fn test_leave_apply_posts_request() {
    let (base, server) = serve_once(201, "application/json", r#"{"status":"pending"}"#);
    let cfg = config_path("cli_leave");
    write_config(&cfg, &base, Some("tok"));

    rat_cfg(&cfg)
        .args([
            "leave", "apply", "--type", "3", "--from", "2026-02-02", "--to", "2026-02-04",
            "--reason", "trip",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("pending"));

    let request = server.join().expect("server");
    assert!(request.starts_with("POST /api/leaves"));
    assert!(request.contains(r#""leaveTypeId":3"#));
    assert!(request.contains(r#""from":"2026-02-02""#));
}

#[test]
fn test_report_download_saves_server_file() {
    let (base, server) = serve_once(200, "application/pdf", "%PDF-fake");
    let cfg = config_path("cli_download");
    write_config(&cfg, &base, Some("tok"));
    let out = temp_out("cli_download", "pdf");

    rat_cfg(&cfg)
        .args([
            "report",
            "--period",
            "2026-01",
            "--download",
            &out,
            "--server-format",
            "pdf",
        ])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).expect("read"), "%PDF-fake");
    let request = server.join().expect("server");
    assert!(request.contains("format=pdf"));
}

#[test]
fn test_report_from_api() {
    let csv = "Employee,Date\nAlice,2026-01-05\nBruno,2026-01-06\n";
    let (base, server) = serve_once(200, "text/csv", csv);
    let cfg = config_path("cli_report_api");
    write_config(&cfg, &base, Some("tok"));

    rat_cfg(&cfg)
        .args(["report", "--from", "2026-01-05", "--to", "2026-01-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 rows)"))
        .stdout(predicate::str::contains("Jan 6, 2026"));

    let request = server.join().expect("server");
    assert!(request.starts_with("GET /api/reports/attendance?from=2026-01-05&to=2026-01-06&format=csv"));
}
