//! Execution timeline (Gantt chart) model.
//!
//! A timeline is the ordered sequence of CPU occupancy segments produced by
//! a simulation run, idle time included.
//!
//! # Invariants
//! - The first segment starts at t=0.
//! - `segments[i].end == segments[i + 1].start` (no gaps, no overlaps).
//! - Adjacent segments never share an occupant; the builder merges them.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who holds the CPU during a segment.
///
/// Serializes as a bare string: the process id, or `"Idle"` for idle time.
/// Validation reserves that id, so the encoding is unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Occupant {
    /// A process, by id.
    Process(String),
    /// No process is ready.
    Idle,
}

impl Occupant {
    /// Wire and display form of idle time.
    pub const IDLE: &'static str = "Idle";

    /// Occupant for the given process id.
    pub fn process(id: impl Into<String>) -> Self {
        Occupant::Process(id.into())
    }

    /// Process id, or `None` for idle time.
    pub fn process_id(&self) -> Option<&str> {
        match self {
            Occupant::Process(id) => Some(id),
            Occupant::Idle => None,
        }
    }

    /// Whether this is idle time.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Occupant::Idle)
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupant::Process(id) => f.write_str(id),
            Occupant::Idle => f.write_str(Self::IDLE),
        }
    }
}

impl From<String> for Occupant {
    fn from(id: String) -> Self {
        if id == Occupant::IDLE {
            Occupant::Idle
        } else {
            Occupant::Process(id)
        }
    }
}

impl From<Occupant> for String {
    fn from(occupant: Occupant) -> Self {
        match occupant {
            Occupant::Process(id) => id,
            Occupant::Idle => Occupant::IDLE.to_string(),
        }
    }
}

/// A half-open interval `[start, end)` of CPU occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Process or idle.
    pub occupant: Occupant,
    /// Start tick (inclusive).
    pub start: i64,
    /// End tick (exclusive).
    pub end: i64,
}

impl Segment {
    /// Creates a segment.
    pub fn new(occupant: Occupant, start: i64, end: i64) -> Self {
        Self {
            occupant,
            start,
            end,
        }
    }

    /// Length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the segment is idle time.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.occupant.is_idle()
    }

    /// Whether the segment belongs to the given process.
    pub fn is_process(&self, id: &str) -> bool {
        self.occupant.process_id() == Some(id)
    }
}

/// A finished timeline.
///
/// Serializes as a plain array of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    /// All segments in chronological order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates segments in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End of the last segment.
    pub fn makespan(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Ticks spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| !s.is_idle())
            .map(Segment::duration)
            .sum()
    }

    /// Ticks spent idle.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.is_idle())
            .map(Segment::duration)
            .sum()
    }

    /// All segments of a given process.
    pub fn segments_for(&self, id: &str) -> Vec<&Segment> {
        self.segments.iter().filter(|s| s.is_process(id)).collect()
    }

    /// First tick at which the process held the CPU.
    pub fn first_start(&self, id: &str) -> Option<i64> {
        self.segments.iter().find(|s| s.is_process(id)).map(|s| s.start)
    }

    /// End of the process's last segment.
    pub fn completion_time(&self, id: &str) -> Option<i64> {
        self.segments
            .iter()
            .rev()
            .find(|s| s.is_process(id))
            .map(|s| s.end)
    }

    /// Number of times the CPU passes from one process to a different one.
    ///
    /// Idle gaps are skipped: `A, Idle, A` is not a switch, `A, Idle, B` is.
    pub fn context_switches(&self) -> usize {
        let running: Vec<&str> = self
            .segments
            .iter()
            .filter_map(|s| s.occupant.process_id())
            .collect();
        running.windows(2).filter(|w| w[0] != w[1]).count()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Accumulates CPU occupancy in time order, merging contiguous runs of the
/// same occupant.
///
/// # Example
/// ```
/// use u_cpusched::models::{Occupant, TimelineBuilder};
///
/// let mut builder = TimelineBuilder::new();
/// builder.run("P1", 1);
/// builder.run("P1", 2);
/// builder.idle(1);
/// let timeline = builder.finish();
/// assert_eq!(timeline.len(), 2);
/// assert_eq!(timeline.segments()[0].end, 3);
/// assert_eq!(timeline.segments()[1].occupant, Occupant::Idle);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimelineBuilder {
    segments: Vec<Segment>,
    clock: i64,
}

impl TimelineBuilder {
    /// Creates an empty builder at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock (end of the last segment).
    #[inline]
    pub fn now(&self) -> i64 {
        self.clock
    }

    /// Appends `duration` ticks of `occupant`.
    ///
    /// Extends the last segment when it has the same occupant.
    /// Non-positive durations are ignored.
    pub fn advance(&mut self, occupant: Occupant, duration: i64) {
        if duration <= 0 {
            return;
        }
        let end = self.clock + duration;
        match self.segments.last_mut() {
            Some(last) if last.occupant == occupant && last.end == self.clock => {
                last.end = end;
            }
            _ => self.segments.push(Segment::new(occupant, self.clock, end)),
        }
        self.clock = end;
    }

    /// Appends `duration` ticks of the given process.
    pub fn run(&mut self, id: &str, duration: i64) {
        self.advance(Occupant::process(id), duration);
    }

    /// Appends `duration` idle ticks.
    pub fn idle(&mut self, duration: i64) {
        self.advance(Occupant::Idle, duration);
    }

    /// Idles until `time`. No-op if the clock is already there.
    pub fn idle_until(&mut self, time: i64) {
        self.idle(time - self.clock);
    }

    /// Consumes the builder.
    pub fn finish(self) -> Timeline {
        Timeline {
            segments: self.segments,
        }
    }
}
