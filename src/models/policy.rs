//! Scheduling policy selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The CPU scheduling policies the simulator supports.
///
/// Serializes in kebab-case (`"fcfs"`, `"sjf-nonpreemptive"`,
/// `"sjf-preemptive"`, `"priority"`, `"round-robin"`). Deserialization goes
/// through [`FromStr`], so the short forms `sjf`, `sjf-np`, `sjf-p`, `srtf`
/// and `rr` are accepted wherever a policy name is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum PolicyKind {
    /// First-come, first-served.
    Fcfs,
    /// Shortest job first, non-preemptive.
    #[serde(rename = "sjf-nonpreemptive")]
    SjfNonPreemptive,
    /// Shortest remaining time first (preemptive SJF).
    #[serde(rename = "sjf-preemptive")]
    SjfPreemptive,
    /// Static priority, non-preemptive.
    Priority,
    /// Round-robin with a fixed time quantum.
    RoundRobin,
}

impl PolicyKind {
    /// All policies, in presentation order.
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fcfs,
        PolicyKind::SjfNonPreemptive,
        PolicyKind::SjfPreemptive,
        PolicyKind::Priority,
        PolicyKind::RoundRobin,
    ];

    /// Canonical wire name.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "fcfs",
            PolicyKind::SjfNonPreemptive => "sjf-nonpreemptive",
            PolicyKind::SjfPreemptive => "sjf-preemptive",
            PolicyKind::Priority => "priority",
            PolicyKind::RoundRobin => "round-robin",
        }
    }

    /// Whether the policy needs a time quantum.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, PolicyKind::RoundRobin)
    }

    /// Whether every process must carry a priority.
    pub fn requires_priority(&self) -> bool {
        matches!(self, PolicyKind::Priority)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized policy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown policy '{}' (expected one of: fcfs, sjf-nonpreemptive, sjf-preemptive, priority, round-robin)",
            self.0
        )
    }
}

impl std::error::Error for UnknownPolicy {}

impl FromStr for PolicyKind {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(PolicyKind::Fcfs),
            "sjf-nonpreemptive" | "sjf-np" | "sjf" => Ok(PolicyKind::SjfNonPreemptive),
            "sjf-preemptive" | "sjf-p" | "srtf" => Ok(PolicyKind::SjfPreemptive),
            "priority" => Ok(PolicyKind::Priority),
            "round-robin" | "rr" => Ok(PolicyKind::RoundRobin),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

impl TryFrom<String> for PolicyKind {
    type Error = UnknownPolicy;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}
