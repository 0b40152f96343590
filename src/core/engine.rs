use crate::config::WorkloadConfig;
use crate::core::{matrix, memory, primes};
use crate::domain::model::{PhaseKind, PhaseReport, RunReport};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::io::Write;
use std::time::{Duration, Instant};

/// Runs the primes, memory and matrix phases in order, printing progress to `out`.
pub struct WorkloadEngine {
    config: WorkloadConfig,
    monitor: SystemMonitor,
}

impl WorkloadEngine {
    pub fn new(config: WorkloadConfig) -> Self {
        Self::new_with_monitoring(config, false)
    }

    pub fn new_with_monitoring(config: WorkloadConfig, monitor_enabled: bool) -> Self {
        Self {
            config,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunReport> {
        let id = self.config.container_id.as_str();
        let mut report = RunReport::new(id);

        if self.monitor.is_enabled() {
            self.monitor.log_stats("Start");
        }
        emit(out, format_args!("Hello from {id} - Starting heavy task..."))?;

        while let Some(phase) = report.state.next_phase() {
            tracing::debug!(%phase, state = ?report.state, "starting phase");
            // Opens the CPU measurement interval closed by the post-phase sample.
            self.monitor.sample();
            let phase_report = self.run_phase(phase, out)?;
            tracing::info!(
                %phase,
                value = phase_report.value,
                elapsed_ms = phase_report.elapsed.as_millis() as u64,
                "phase completed"
            );
            report.record(phase_report);

            if self.monitor.is_enabled() {
                self.monitor.log_stats(&phase.to_string());
            }
        }

        emit(out, format_args!("Hello from {id} - Heavy task completed!"))?;

        if self.monitor.is_enabled() {
            self.monitor.log_final_stats();
            report.peak_memory_mb = self.monitor.peak_memory_mb();
        }

        Ok(report)
    }

    fn run_phase<W: Write>(&self, phase: PhaseKind, out: &mut W) -> Result<PhaseReport> {
        let id = self.config.container_id.as_str();

        let (value, elapsed) = match phase {
            PhaseKind::Primes => {
                let limit = self.config.prime_limit;
                emit(out, format_args!("Container {id}: Finding prime numbers up to {limit}..."))?;
                let (found, elapsed) = timed(|| primes::find_primes(limit));
                emit(
                    out,
                    format_args!(
                        "Container {id}: Found {} primes in {:.2} seconds",
                        found.len(),
                        elapsed.as_secs_f64()
                    ),
                )?;
                (found.len() as u64, elapsed)
            }
            PhaseKind::Memory => {
                let size_mb = self.config.memory_mb;
                emit(out, format_args!("Container {id}: Allocating ~{size_mb}MB of memory..."))?;
                let (allocated, elapsed) =
                    memory::memory_intensive_task(size_mb, self.config.filler, || {
                        self.monitor.log_stats("memory (resident)")
                    });
                emit(
                    out,
                    format_args!(
                        "Container {id}: Allocated {allocated}MB in {:.2} seconds",
                        elapsed.as_secs_f64()
                    ),
                )?;
                (allocated as u64, elapsed)
            }
            PhaseKind::Matrix => {
                emit(out, format_args!("Container {id}: Performing matrix calculations..."))?;
                let (total, elapsed) = timed(|| matrix::matrix_task(self.config.matrix_size));
                emit(
                    out,
                    format_args!(
                        "Container {id}: Matrix sum = {total}, computed in {:.2} seconds",
                        elapsed.as_secs_f64()
                    ),
                )?;
                (total, elapsed)
            }
        };

        Ok(PhaseReport {
            phase,
            value,
            elapsed,
        })
    }
}

fn timed<T>(work: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = work();
    (value, start.elapsed())
}

// Flush per line so progress is visible while a long phase is still running.
fn emit<W: Write>(out: &mut W, line: std::fmt::Arguments<'_>) -> Result<()> {
    out.write_fmt(line)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
