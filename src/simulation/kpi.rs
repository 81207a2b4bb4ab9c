//! Schedule quality metrics (KPIs).
//!
//! Computes the classic CPU-scheduling performance indicators from a
//! timeline and the processes it was computed from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | completed processes / makespan |
//! | Context Switches | adjacent intervals owned by different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::Serialize;

use crate::models::{ProcessSpec, Timeline};

/// Per-process timing results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub process_id: String,
    /// Tick the process finished.
    pub completion: i64,
    /// completion - arrival.
    pub turnaround: i64,
    /// turnaround - burst.
    pub waiting: i64,
    /// first dispatch - arrival.
    pub response: i64,
}

/// Schedule performance indicators.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleKpi {
    /// Latest completion tick.
    pub makespan: i64,
    /// Ticks the CPU was busy.
    pub busy_time: i64,
    /// busy_time / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Number of switches between different processes.
    pub context_switches: usize,
    /// Metrics for every process that appears in the timeline, in input order.
    pub per_process: Vec<ProcessMetrics>,
}

impl ScheduleKpi {
    /// Computes KPIs from a timeline and its input processes.
    ///
    /// Processes absent from the timeline are left out of the averages.
    pub fn calculate(timeline: &Timeline, processes: &[ProcessSpec]) -> Self {
        let per_process: Vec<ProcessMetrics> = processes
            .iter()
            .filter_map(|p| {
                let completion = timeline.completion_time(&p.id)?;
                let first_start = timeline.first_start(&p.id)?;
                let turnaround = completion - p.arrival_time;
                Some(ProcessMetrics {
                    process_id: p.id.clone(),
                    completion,
                    turnaround,
                    waiting: turnaround - p.burst_time,
                    response: first_start - p.arrival_time,
                })
            })
            .collect();

        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();
        let ratio = |n: f64| if makespan <= 0 { 0.0 } else { n / makespan as f64 };

        Self {
            makespan,
            busy_time,
            cpu_utilization: ratio(busy_time as f64),
            throughput: ratio(per_process.len() as f64),
            avg_turnaround: mean(per_process.iter().map(|m| m.turnaround)),
            avg_waiting: mean(per_process.iter().map(|m| m.waiting)),
            avg_response: mean(per_process.iter().map(|m| m.response)),
            context_switches: timeline.context_switches(),
            per_process,
        }
    }

    /// Metrics for one process.
    pub fn process(&self, process_id: &str) -> Option<&ProcessMetrics> {
        self.per_process.iter().find(|m| m.process_id == process_id)
    }
}

fn mean(values: impl Iterator<Item = i64>) -> f64 {
    let (sum, count) = values.fold((0i64, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Algorithm, ExecutionInterval};
    use crate::simulation::Simulator;

    #[test]
    fn test_kpi_fcfs() {
        let procs = ProcessSpec::from_tuples(&[(0, 5, 0), (1, 3, 0)]);
        let t = Simulator::new().simulate(&procs, Algorithm::Fcfs).unwrap();
        let kpi = ScheduleKpi::calculate(&t, &procs);

        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.busy_time, 8);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        // P1: turnaround 5, waiting 0. P2: turnaround 7, waiting 4.
        assert!((kpi.avg_turnaround - 6.0).abs() < 1e-10);
        assert!((kpi.avg_waiting - 2.0).abs() < 1e-10);
        assert!((kpi.avg_response - 2.0).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 1);
    }

    #[test]
    fn test_kpi_srtf_response_vs_waiting() {
        let procs = ProcessSpec::from_tuples(&[(0, 8, 0), (1, 4, 0)]);
        let t = Simulator::new().simulate(&procs, Algorithm::Srtf).unwrap();
        let kpi = ScheduleKpi::calculate(&t, &procs);

        let p1 = kpi.process("P1").unwrap();
        assert_eq!(p1.completion, 12);
        assert_eq!(p1.turnaround, 12);
        assert_eq!(p1.waiting, 4);
        assert_eq!(p1.response, 0);

        let p2 = kpi.process("P2").unwrap();
        assert_eq!(p2.waiting, 0);
        assert_eq!(p2.response, 0);
        assert_eq!(kpi.context_switches, 2);
    }

    #[test]
    fn test_kpi_idle_lowers_utilization() {
        let t: Timeline = vec![
            ExecutionInterval::new("P1", 0, 2),
            ExecutionInterval::new("P2", 6, 8),
        ]
        .into_iter()
        .collect();
        let procs = ProcessSpec::from_tuples(&[(0, 2, 0), (6, 2, 0)]);
        let kpi = ScheduleKpi::calculate(&t, &procs);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
        assert!((kpi.avg_waiting - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Timeline::new(), &[]);
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.avg_turnaround - 0.0).abs() < 1e-10);
        assert!(kpi.per_process.is_empty());
    }

    #[test]
    fn test_kpi_serializes() {
        let procs = ProcessSpec::from_tuples(&[(0, 1, 0)]);
        let t = Simulator::new().simulate(&procs, Algorithm::Fcfs).unwrap();
        let json = serde_json::to_value(ScheduleKpi::calculate(&t, &procs)).unwrap();
        assert_eq!(json["makespan"], 1);
        assert_eq!(json["per_process"][0]["process_id"], "P1");
    }
}
