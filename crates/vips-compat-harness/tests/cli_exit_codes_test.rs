//! Exit-code contract of the `vips-compat-audit` binary:
//! 0 link-clean, 1 audit found a broken link, 2 usage or I/O error.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use vips_compat_harness::AuditReport;

fn audit_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vips-compat-audit"))
}

struct TempDump {
    path: PathBuf,
}

impl TempDump {
    fn write(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("vips-compat-cli-{}-{name}", std::process::id()));
        fs::write(&path, contents).expect("write temp dump");
        Self { path }
    }
}

impl Drop for TempDump {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("spawn vips-compat-audit")
}

#[test]
fn clean_audit_exits_zero() {
    let referenced = TempDump::write(
        "clean-ref.txt",
        "vips_target_finish\nvips_rawsave_fd\nvips_cache\nvips_image_new\n",
    );
    let exported = TempDump::write("clean-exp.txt", "vips_target_end\nvips_image_new\n");

    let out = run(audit_bin()
        .arg("audit")
        .arg("--referenced")
        .arg(&referenced.path)
        .arg("--exported")
        .arg(&exported.path));

    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("link clean"));
}

#[test]
fn broken_audit_exits_one() {
    let referenced = TempDump::write("dirty-ref.txt", "vips_totally_unknown\n");
    let exported = TempDump::write("dirty-exp.txt", "vips_target_end\n");

    let out = run(audit_bin()
        .arg("audit")
        .arg("--referenced")
        .arg(&referenced.path)
        .arg("--exported")
        .arg(&exported.path));

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("link BROKEN"));
    assert!(stdout.contains("UNRESOLVED"));
}

#[test]
fn missing_dump_file_exits_two() {
    let exported = TempDump::write("io-exp.txt", "vips_target_end\n");
    let missing = std::env::temp_dir().join("vips-compat-cli-no-such-dump.txt");

    let out = run(audit_bin()
        .arg("audit")
        .arg("--referenced")
        .arg(&missing)
        .arg("--exported")
        .arg(&exported.path));

    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("failed to read"));
}

#[test]
fn unknown_manifest_format_exits_two() {
    let out = run(audit_bin().arg("manifest").arg("--format").arg("yaml"));

    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("unknown output format"));
}

#[test]
fn audit_output_flag_writes_a_parseable_json_report() {
    let referenced = TempDump::write("json-ref.txt", "vips_target_finish\n");
    let exported = TempDump::write("json-exp.txt", "vips_target_end\n");
    let report_path = std::env::temp_dir().join(format!(
        "vips-compat-cli-{}-report.json",
        std::process::id()
    ));

    let out = run(audit_bin()
        .arg("audit")
        .arg("--referenced")
        .arg(&referenced.path)
        .arg("--exported")
        .arg(&exported.path)
        .arg("--output")
        .arg(&report_path));

    assert_eq!(out.status.code(), Some(0));
    let json = fs::read_to_string(&report_path).expect("report written");
    let _ = fs::remove_file(&report_path);

    let report: AuditReport = serde_json::from_str(&json).unwrap();
    assert!(report.link_clean);
    assert_eq!(report.counts.forwarded, 1);
}

#[test]
fn skew_command_exits_zero_for_valid_versions() {
    let out = run(audit_bin()
        .arg("skew")
        .arg("--built-against")
        .arg("8.15.1")
        .arg("--deployed")
        .arg("8.18.0"));

    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("vips_target_finish"));

    let bad = run(audit_bin()
        .arg("skew")
        .arg("--built-against")
        .arg("not-a-version")
        .arg("--deployed")
        .arg("8.18.0"));
    assert_eq!(bad.status.code(), Some(2));
}