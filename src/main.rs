use container_workload::utils::{logger, validation::Validate};
use container_workload::{LogFormat, WorkloadConfig, WorkloadEngine, WorkloadError};

fn main() {
    let config = match WorkloadConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // The log format comes from the same environment, so use the default.
            logger::init_logger(LogFormat::default());
            fail(e);
        }
    };

    logger::init_logger(config.log_format);
    tracing::info!(container = %config.container_id, "Starting container-workload");
    tracing::debug!("Workload config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine = WorkloadEngine::new_with_monitoring(config, monitor_enabled);
    let stdout = std::io::stdout();
    let report = match engine.run(&mut stdout.lock()) {
        Ok(report) => report,
        Err(e) => fail(e),
    };

    match serde_json::to_string(&report).map_err(WorkloadError::from) {
        Ok(encoded) => tracing::info!(
            report = %encoded,
            total_seconds = report.total_elapsed().as_secs_f64(),
            "✅ Workload completed"
        ),
        // Low severity: every phase already finished and printed.
        Err(e) => tracing::warn!("Run report unavailable: {}", e.user_friendly_message()),
    }
}

fn fail(e: WorkloadError) -> ! {
    tracing::error!(
        "❌ Workload failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code().max(1));
}
