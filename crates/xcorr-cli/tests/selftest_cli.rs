// crates/xcorr-cli/tests/selftest_cli.rs

use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xcorr-cli"))
        .args(args)
        .output()
        .expect("run xcorr-cli")
}

fn stdout_of(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).expect("utf8 stdout")
}

fn assert_ok(out: &Output) {
    assert!(
        out.status.success(),
        "status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn selftest_passes_in_every_mode() {
    let modes: [&[&str]; 5] = [
        &["--numeric", "float", "--layout", "tiled"],
        &["--numeric", "float", "--layout", "split"],
        &["--numeric", "fixed", "--layout", "tiled"],
        &["--numeric", "fixed", "--accum", "extended", "--layout", "tiled"],
        &["--numeric", "fixed", "--accum", "extended", "--layout", "split", "--pulsar-bins", "1"],
    ];
    for mode in modes {
        let mut args = vec!["selftest", "--strict", "--stations", "8", "--times", "16", "--time-pipe", "8"];
        args.extend_from_slice(mode);
        let out = run_cli(&args);
        assert_ok(&out);
        let stdout = stdout_of(&out);
        assert!(stdout.contains("Outer product summation successful"), "{mode:?}\n{stdout}");
    }
}

#[test]
fn perturbed_elements_are_reported() {
    let out = run_cli(&["selftest", "--perturb", "3", "--verbose", "1"]);
    assert_ok(&out);
    let stdout = stdout_of(&out);
    assert!(stdout.contains("failed with 3 deviations"), "{stdout}");
    // header + 3 deviation lines + summary + blank
    assert_eq!(stdout.lines().count(), 6, "{stdout}");
}

#[test]
fn strict_mode_fails_on_deviations() {
    let out = run_cli(&["selftest", "--perturb", "2", "--strict", "--numeric", "fixed"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("2 deviations"));
}

#[test]
fn product_trace_is_printed_at_level_two() {
    let out = run_cli(&[
        "selftest", "--perturb", "1", "--verbose", "2", "--stations", "4", "--times", "8", "--time-pipe", "4",
    ]);
    assert_ok(&out);
    let stdout = stdout_of(&out);
    assert!(stdout.contains(" -> ("), "{stdout}");
    // header + deviation + 8 terms + sum + summary + blank
    assert_eq!(stdout.lines().count(), 1 + 1 + 8 + 1 + 1 + 1, "{stdout}");
}

#[test]
fn stimulus_is_reproducible() {
    let a = run_cli(&["stimulus", "--seed", "42", "--swizzle"]);
    let b = run_cli(&["stimulus", "--seed", "42", "--swizzle"]);
    assert_ok(&a);
    assert_eq!(a.stdout, b.stdout);

    let stdout = stdout_of(&a);
    assert!(stdout.contains("sample_id"));
    assert!(stdout.contains("swizzle_id"));

    let fixed = run_cli(&["stimulus", "--numeric", "fixed", "--replicate"]);
    assert_ok(&fixed);
    let stdout = stdout_of(&fixed);
    assert!(stdout.contains("numeric         = Fixed"), "{stdout}");
    assert!(stdout.contains("samples         = 8192"), "{stdout}");
}

#[test]
fn expand_reports_hermitian_dense_matrix() {
    let out = run_cli(&["expand", "--stations", "4", "--show-plane", "0"]);
    assert_ok(&out);
    let stdout = stdout_of(&out);
    assert!(stdout.contains("hermitian_bad   = 0"), "{stdout}");
    assert!(stdout.contains("--- plane 0 (pol 0,0) ---"));
}

#[test]
fn invalid_geometry_is_rejected() {
    let out = run_cli(&["geometry", "--stations", "6", "--layout", "tiled"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("multiple of 4"));

    let out = run_cli(&["geometry", "--stations", "6", "--layout", "split"]);
    assert_ok(&out);
    assert!(stdout_of(&out).contains("canonical_len   = "));
}
