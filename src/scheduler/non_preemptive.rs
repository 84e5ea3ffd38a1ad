//! Shared loop for selection-based, run-to-completion policies.
//!
//! # Algorithm
//!
//! At each decision point (t=0 and every completion):
//! 1. Collect processes that have arrived and are not completed.
//! 2. If none, idle until the next arrival.
//! 3. Otherwise dispatch the candidate the rule engine ranks first and
//!    run it to completion in one segment.
//!
//! # Complexity
//! O(n² · r) where r is the number of rules.

use log::debug;

use super::state::RunTable;
use super::Execution;
use crate::dispatching::RuleEngine;
use crate::models::{Process, TimelineBuilder};

pub(crate) fn run_to_completion(processes: &[Process], engine: &RuleEngine) -> Execution {
    let mut table = RunTable::new(processes);
    let mut timeline = TimelineBuilder::new();

    while !table.all_completed() {
        let clock = timeline.now();
        let ready = table.ready_at(clock);

        let Some(index) = engine.select_best(&ready) else {
            match table.next_arrival_after(clock) {
                Some(arrival) => timeline.idle_until(arrival),
                None => break,
            }
            continue;
        };

        let process = table.process(index);
        let burst = table.remaining(index);
        debug!(
            "t={clock} dispatch {} for {burst} ({} ready)",
            process.id,
            ready.len()
        );
        table.execute(index, clock, burst);
        timeline.run(&process.id, burst);
    }

    table.into_execution(timeline.finish())
}
