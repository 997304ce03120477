mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn clone_dry_run_pins_the_assembled_command() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["clone", "--dir-path", "/repo", "--system", "GPU", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::diff("python3 scripts/FVClone.py --clone_path /repo --system_name GPU\n"));
}

#[test]
fn clone_flag_order_follows_argument_application_order() {
    let ctx = TestContext::new();

    // Optional fields land after the mandatory ones in application order,
    // not declaration order.
    ctx.cli()
        .args([
            "clone",
            "--folder",
            "scratch",
            "--dir-path",
            "/repo",
            "--system",
            "NIC",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "python3 scripts/FVClone.py --clone_path /repo --system_name NIC --folder_name scratch\n",
        ));
}

#[test]
fn clone_not_ready_reports_missing_count() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["clone", "--dir-path", "/repo", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 field(s) left to fill"));
}

#[test]
fn clone_rejects_values_with_whitespace() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["clone", "--dir-path", "two words", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn clone_rejects_an_unknown_system_choice() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["clone", "--dir-path", "/repo", "--system", "Mainframe", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("choose one of Switch, GPU, NIC"));
}

#[test]
fn build_dry_run_assembles_all_six_fields() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "build",
            "pelican",
            "--env-location",
            "/fv/env",
            "--env-name",
            "demo",
            "--function-name",
            "checksum",
            "--exe-file",
            "/fv/bin/app",
            "--c-file-name",
            "checksum.c",
            "--make-log-location",
            "/fv/make.log",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "python3 scripts/FVBuild.py --env_location /fv/env --env_name demo \
             --Function_name checksum --exe_file /fv/bin/app --c_file_name checksum.c \
             --make_log_location /fv/make.log\n",
        ));
}

#[test]
fn build_missing_fields_report_their_count() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["build", "gpu-fw", "--env-location", "/fv/env", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("5 field(s) left to fill"));
}

#[test]
fn build_rejects_an_unknown_target() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["build", "mainframe", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid build target 'mainframe'"));
}

#[test]
fn verify_dry_run_carries_exactly_one_unroll_token() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "verify",
            "--env-location",
            "/fv/env",
            "--multiple-cex",
            "--unroll",
            "500",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "python3 scripts/SmcverRun.py --env_location /fv/env -multiple_cex --u 500\n",
        ));
}

#[test]
fn verify_defaults_the_unroll_to_32() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["verify", "--env-location", "/fv/env", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::diff("python3 scripts/SmcverRun.py --env_location /fv/env --u 32\n"));
}

#[test]
fn verify_rejects_a_zero_unroll() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["verify", "--env-location", "/fv/env", "--unroll", "0", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than 0"));
}

#[test]
fn verify_accepts_but_warns_on_a_high_unroll() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["verify", "--env-location", "/fv/env", "--unroll", "1000", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("High unroll value may cause performance issues"))
        .stdout(predicate::str::contains("--u 1000"));
}

#[test]
fn compile_dry_run_joins_checkbox_flags_before_the_env_location() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["compile", "--env-location", "/fv/env", "--first-cmp", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "python3 scripts/FVCompile.py -first_cmp y --env_location /fv/env\n",
        ));
}

#[test]
fn compile_not_ready_asks_for_the_env_location() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["compile", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 field(s) left to fill"));
}

#[test]
fn compile_streams_output_and_reports_success() {
    let ctx = TestContext::new();
    ctx.use_echo_executable();

    ctx.cli()
        .args(["compile", "--env-location", "/fv/env", "--first-cmp"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "scripts/FVCompile.py -first_cmp y --env_location /fv/env",
        ))
        .stdout(predicate::str::contains("Compilation finished."));
}

#[test]
fn failed_command_surfaces_once_and_exits_nonzero() {
    let ctx = TestContext::new();
    ctx.write_config("executable = \"false\"\n");

    ctx.cli()
        .args(["compile", "--env-location", "/fv/env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to compile."))
        .stderr(predicate::str::contains("Command failed"));
}

#[test]
fn config_overrides_the_interpreter_and_scripts() {
    let ctx = TestContext::new();
    ctx.write_config("executable = \"python3.7\"\nverify_script = \"/opt/fv/SmcverRun.py\"\n");

    ctx.cli()
        .args(["verify", "--env-location", "/fv/env", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::diff("python3.7 /opt/fv/SmcverRun.py --env_location /fv/env --u 32\n"));
}

#[test]
fn malformed_config_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_config("surprise = true\n");

    ctx.cli()
        .args(["verify", "--env-location", "/fv/env", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}
