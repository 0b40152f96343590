use std::process::Command;

fn workload_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_container-workload"));
    for var in [
        "CONTAINER_NUMBER",
        "WORKLOAD_PRIME_LIMIT",
        "WORKLOAD_MEMORY_MB",
        "WORKLOAD_FILLER",
        "WORKLOAD_MATRIX_SIZE",
        "WORKLOAD_MONITOR",
        "WORKLOAD_LOG_FORMAT",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_end_to_end_output_with_container_number() {
    let output = workload_command()
        .env("CONTAINER_NUMBER", "test-1")
        .output()
        .expect("run container-workload");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();

    let primes = stdout.find("Container test-1: Found 168 primes").expect("prime line");
    let memory = stdout.find("Allocated 100MB").expect("memory line");
    let matrix = stdout.find("Matrix sum = 15562562500").expect("matrix line");
    let done = stdout.find("Hello from test-1 - Heavy task completed!").expect("banner");
    assert!(primes < memory && memory < matrix && matrix < done);

    // Diagnostics never leak into the progress stream.
    assert!(stdout
        .lines()
        .all(|line| line.starts_with("Container test-1: ") || line.starts_with("Hello from test-1 - ")));
}

#[test]
fn test_missing_container_number_uses_unknown() {
    let output = workload_command()
        .env("WORKLOAD_MEMORY_MB", "1")
        .output()
        .expect("run container-workload");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Hello from unknown - Starting heavy task..."));
    assert!(stdout.contains("Container unknown: Allocated 1MB"));
}

#[test]
fn test_invalid_override_fails_before_any_phase() {
    let output = workload_command()
        .env("CONTAINER_NUMBER", "bad")
        .env("WORKLOAD_MATRIX_SIZE", "0")
        .output()
        .expect("run container-workload");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WORKLOAD_MATRIX_SIZE"));
}
