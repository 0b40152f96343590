use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKind {
    Primes,
    Memory,
    Matrix,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseKind::Primes => f.write_str("primes"),
            PhaseKind::Memory => f.write_str("memory"),
            PhaseKind::Matrix => f.write_str("matrix"),
        }
    }
}

/// Linear run progression; each completed phase moves exactly one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    #[default]
    Start,
    PrimesDone,
    MemoryDone,
    MatrixDone,
}

impl RunState {
    /// The phase that runs next, or `None` once the run is complete.
    pub fn next_phase(self) -> Option<PhaseKind> {
        match self {
            RunState::Start => Some(PhaseKind::Primes),
            RunState::PrimesDone => Some(PhaseKind::Memory),
            RunState::MemoryDone => Some(PhaseKind::Matrix),
            RunState::MatrixDone => None,
        }
    }

    pub fn advance(self) -> Self {
        match self {
            RunState::Start => RunState::PrimesDone,
            RunState::PrimesDone => RunState::MemoryDone,
            RunState::MemoryDone | RunState::MatrixDone => RunState::MatrixDone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseReport {
    pub phase: PhaseKind,
    /// Prime count, megabytes allocated, or matrix sum.
    pub value: u64,
    #[serde(rename = "elapsed_seconds", serialize_with = "serialize_seconds")]
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub container_id: String,
    pub started_at: DateTime<Utc>,
    pub state: RunState,
    pub phases: Vec<PhaseReport>,
    /// Peak resident memory, present only when the system monitor ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_memory_mb: Option<u64>,
}

impl RunReport {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            started_at: Utc::now(),
            state: RunState::Start,
            phases: Vec::with_capacity(3),
            peak_memory_mb: None,
        }
    }

    pub fn record(&mut self, report: PhaseReport) {
        self.phases.push(report);
        self.state = self.state.advance();
    }

    pub fn phase(&self, kind: PhaseKind) -> Option<&PhaseReport> {
        self.phases.iter().find(|p| p.phase == kind)
    }

    pub fn total_elapsed(&self) -> Duration {
        self.phases.iter().map(|p| p.elapsed).sum()
    }
}

fn serialize_seconds<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_machine_is_linear() {
        let mut state = RunState::default();
        let mut order = Vec::new();
        while let Some(phase) = state.next_phase() {
            order.push(phase);
            state = state.advance();
        }
        assert_eq!(
            order,
            vec![PhaseKind::Primes, PhaseKind::Memory, PhaseKind::Matrix]
        );
        assert_eq!(state, RunState::MatrixDone);
        assert_eq!(state.advance(), RunState::MatrixDone);
    }

    #[test]
    fn test_report_serializes_seconds() {
        let mut report = RunReport::new("7");
        report.record(PhaseReport {
            phase: PhaseKind::Primes,
            value: 168,
            elapsed: Duration::from_millis(1500),
        });

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["container_id"], "7");
        assert_eq!(json["state"], "primes_done");
        assert_eq!(json["phases"][0]["phase"], "primes");
        assert_eq!(json["phases"][0]["value"], 168);
        assert_eq!(json["phases"][0]["elapsed_seconds"], 1.5);
        assert_eq!(report.total_elapsed(), Duration::from_millis(1500));
        assert!(json.get("peak_memory_mb").is_none());
    }
}
