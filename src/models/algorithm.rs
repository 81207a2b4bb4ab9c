//! Scheduling policy selector.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;

/// The six supported scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Shortest Remaining Time First (preemptive SJF).
    Srtf,
    /// Round Robin with a fixed quantum.
    RoundRobin,
    /// Priority scheduling, non-preemptive.
    PriorityNonPreemptive,
    /// Priority scheduling, preemptive.
    PriorityPreemptive,
}

impl Algorithm {
    /// Every policy, in presentation order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
        Algorithm::PriorityNonPreemptive,
        Algorithm::PriorityPreemptive,
    ];

    /// Canonical name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::RoundRobin => "RR",
            Self::PriorityNonPreemptive => "PriorityNonPreemptive",
            Self::PriorityPreemptive => "PriorityPreemptive",
        }
    }

    /// Whether a running process can lose the CPU before it finishes.
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::Srtf | Self::RoundRobin | Self::PriorityPreemptive
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    /// Accepts canonical names, the labels `"Priority Non-Preemptive"` /
    /// `"Priority Preemptive"`, and a few lowercase aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "fcfs" | "fifo" | "firstcomefirstserved" => Ok(Self::Fcfs),
            "sjf" | "shortestjobfirst" => Ok(Self::Sjf),
            "srtf" | "shortestremainingtimefirst" => Ok(Self::Srtf),
            "rr" | "roundrobin" => Ok(Self::RoundRobin),
            "prioritynonpreemptive" | "prioritynp" => Ok(Self::PriorityNonPreemptive),
            "prioritypreemptive" | "priorityp" => Ok(Self::PriorityPreemptive),
            _ => Err(SimulationError::InvalidAlgorithm(s.to_string())),
        }
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_labels() {
        assert_eq!("FCFS".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("SJF".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!("SRTF".parse::<Algorithm>().unwrap(), Algorithm::Srtf);
        assert_eq!("RR".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!(
            "Priority Non-Preemptive".parse::<Algorithm>().unwrap(),
            Algorithm::PriorityNonPreemptive
        );
        assert_eq!(
            "Priority Preemptive".parse::<Algorithm>().unwrap(),
            Algorithm::PriorityPreemptive
        );
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.as_str().parse::<Algorithm>().unwrap(), algo);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("round_robin".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!("fifo".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
    }

    #[test]
    fn test_unknown_selector() {
        let err = "Lottery".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, SimulationError::InvalidAlgorithm("Lottery".into()));
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_preemptive_flags() {
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
        assert!(Algorithm::Srtf.is_preemptive());
        assert!(Algorithm::RoundRobin.is_preemptive());
        assert!(!Algorithm::PriorityNonPreemptive.is_preemptive());
        assert!(Algorithm::PriorityPreemptive.is_preemptive());
    }

    #[test]
    fn test_serde_as_name() {
        let json = serde_json::to_string(&Algorithm::Srtf).unwrap();
        assert_eq!(json, "\"SRTF\"");
        let back: Algorithm = serde_json::from_str("\"Priority Preemptive\"").unwrap();
        assert_eq!(back, Algorithm::PriorityPreemptive);
        assert!(serde_json::from_str::<Algorithm>("\"MLFQ\"").is_err());
    }
}
