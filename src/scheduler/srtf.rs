//! Shortest remaining time first (preemptive SJF).
//!
//! # Algorithm
//!
//! Semantically the decision is re-made every tick, so a newly arrived
//! process with less remaining work than the running one takes the CPU
//! immediately. Between arrivals the running process only gets shorter
//! while every other candidate stays the same, so the choice cannot change
//! and the loop steps from event to event:
//! 1. Collect arrived processes with remaining work.
//! 2. If none, idle until the next arrival.
//! 3. Otherwise run the smallest-remaining candidate (ties: earliest
//!    arrival, then input order) until it finishes or the next process
//!    arrives, whichever comes first.
//!
//! Consecutive runs of the same process merge into one segment, so the
//! timeline equals the tick-by-tick one.
//!
//! # Complexity
//! O(n² · r): at most 2n decision points (arrivals and completions).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use log::{debug, trace};

use super::state::RunTable;
use super::{Execution, Scheduler};
use crate::dispatching::RuleEngine;
use crate::models::{PolicyKind, Process, TimelineBuilder};

/// Preemptive shortest-remaining-time-first scheduler.
///
/// # Example
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{Scheduler, SrtfScheduler};
///
/// let processes = vec![Process::new("P1", 0, 8), Process::new("P2", 1, 4)];
/// let exec = SrtfScheduler::new().run(&processes);
/// assert_eq!(exec.timeline.segments_for("P1").len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SrtfScheduler {
    engine: RuleEngine,
}

impl SrtfScheduler {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::shortest_remaining(),
        }
    }
}

impl Default for SrtfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SrtfScheduler {
    fn policy(&self) -> PolicyKind {
        PolicyKind::SjfPreemptive
    }

    fn run(&self, processes: &[Process]) -> Execution {
        let mut table = RunTable::new(processes);
        let mut timeline = TimelineBuilder::new();
        let mut running: Option<usize> = None;

        while !table.all_completed() {
            let clock = timeline.now();
            let ready = table.ready_at(clock);

            let Some(index) = self.engine.select_best(&ready) else {
                match table.next_arrival_after(clock) {
                    Some(arrival) => timeline.idle_until(arrival),
                    None => break,
                }
                running = None;
                continue;
            };

            let process = table.process(index);
            match running {
                Some(prev) if prev != index && !table.is_completed(prev) => {
                    debug!(
                        "t={clock} {} preempts {} ({} < {})",
                        process.id,
                        table.process(prev).id,
                        table.remaining(index),
                        table.remaining(prev)
                    );
                }
                Some(prev) if prev == index => {}
                _ => debug!("t={clock} dispatch {}", process.id),
            }
            let remaining = table.remaining(index);
            let slice = match table.next_arrival_after(clock) {
                Some(arrival) => remaining.min(arrival - clock),
                None => remaining,
            };
            trace!("t={clock} run {} for {slice} (remaining {remaining})", process.id);

            table.execute(index, clock, slice);
            timeline.run(&process.id, slice);
            running = Some(index);
        }

        table.into_execution(timeline.finish())
    }
}
