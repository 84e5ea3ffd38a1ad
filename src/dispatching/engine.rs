//! Rule engine for multi-criteria dispatching.
//!
//! Applies rules in sequence: the first rule whose scores differ decides.
//! When every rule ties, original input order decides, so selection is
//! always total and deterministic.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, Candidate, DispatchingRule, RuleScore};

/// A composable, sequential rule engine.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::HighestPriority)
///     .with_tie_breaker(rules::EarliestArrival);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FCFS"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty engine. With no rules, input order alone decides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine for non-preemptive shortest-job-first.
    pub fn shortest_job() -> Self {
        Self::new()
            .with_rule(rules::ShortestBurst)
            .with_tie_breaker(rules::EarliestArrival)
    }

    /// Engine for shortest-remaining-time-first.
    pub fn shortest_remaining() -> Self {
        Self::new()
            .with_rule(rules::ShortestRemaining)
            .with_tie_breaker(rules::EarliestArrival)
    }

    /// Engine for static-priority scheduling.
    pub fn priority() -> Self {
        Self::new()
            .with_rule(rules::HighestPriority)
            .with_tie_breaker(rules::EarliestArrival)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when all earlier rules tie.
    ///
    /// Equivalent to [`with_rule`](Self::with_rule); the separate name
    /// documents intent at the call site.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the input-list index of the best candidate.
    pub fn select_best(&self, candidates: &[Candidate<'_>]) -> Option<usize> {
        candidates
            .iter()
            .min_by(|a, b| self.compare(a, b))
            .map(|c| c.index)
    }

    /// Scores from each rule for a single candidate.
    pub fn evaluate(&self, candidate: &Candidate<'_>) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(candidate)).collect()
    }

    fn compare(&self, a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(a).cmp(&rule.evaluate(b)))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| a.index.cmp(&b.index))
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn candidates(processes: &[Process]) -> Vec<Candidate<'_>> {
        processes
            .iter()
            .enumerate()
            .map(|(i, p)| Candidate::fresh(i, p))
            .collect()
    }

    #[test]
    fn test_shortest_burst_ordering() {
        let processes = vec![
            Process::new("long", 0, 8),
            Process::new("short", 0, 2),
            Process::new("medium", 0, 5),
        ];
        let ready = candidates(&processes);
        assert_eq!(RuleEngine::shortest_job().select_best(&ready), Some(1));
        assert_eq!(RuleEngine::shortest_job().select_best(&ready[2..]), Some(2));
    }

    #[test]
    fn test_tie_broken_by_arrival_then_input_order() {
        let processes = vec![
            Process::new("A", 2, 3),
            Process::new("B", 1, 3),
            Process::new("C", 1, 3),
        ];
        let ready = candidates(&processes);
        let engine = RuleEngine::shortest_job();
        assert_eq!(engine.select_best(&ready), Some(1));
        // without B, C's earlier arrival still beats A
        let without_b = [ready[0], ready[2]];
        assert_eq!(engine.select_best(&without_b), Some(2));
    }

    #[test]
    fn test_select_best_returns_input_index() {
        let processes = vec![
            Process::new("P0", 0, 4),
            Process::new("P1", 0, 9),
            Process::new("P2", 0, 1),
        ];
        // Only P1 and P2 are ready; positions differ from input indices.
        let ready = vec![
            Candidate::fresh(1, &processes[1]),
            Candidate::fresh(2, &processes[2]),
        ];
        assert_eq!(RuleEngine::shortest_job().select_best(&ready), Some(2));
    }

    #[test]
    fn test_remaining_overrides_burst() {
        let processes = vec![Process::new("P1", 0, 8), Process::new("P2", 1, 4)];
        let ready = vec![
            Candidate::new(0, &processes[0], 7),
            Candidate::fresh(1, &processes[1]),
        ];
        assert_eq!(RuleEngine::shortest_remaining().select_best(&ready), Some(1));

        let ready = vec![
            Candidate::new(0, &processes[0], 3),
            Candidate::fresh(1, &processes[1]),
        ];
        assert_eq!(RuleEngine::shortest_remaining().select_best(&ready), Some(0));
    }

    #[test]
    fn test_priority_equal_falls_back_to_input_order() {
        let processes = vec![
            Process::new("first", 0, 5).with_priority(1),
            Process::new("second", 0, 1).with_priority(1),
        ];
        let ready = candidates(&processes);
        assert_eq!(RuleEngine::priority().select_best(&ready), Some(0));
    }

    #[test]
    fn test_empty_candidates() {
        let engine = RuleEngine::shortest_job();
        assert!(engine.select_best(&[]).is_none());
    }

    #[test]
    fn test_no_rules_uses_input_order() {
        let processes = vec![Process::new("A", 5, 1), Process::new("B", 0, 9)];
        let ready = candidates(&processes);
        assert_eq!(RuleEngine::new().select_best(&ready), Some(0));
    }

    #[test]
    fn test_evaluate_scores() {
        let p = Process::new("T1", 3, 6).with_priority(2);
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_rule(rules::EarliestArrival)
            .with_rule(rules::HighestPriority);
        assert_eq!(engine.evaluate(&Candidate::fresh(0, &p)), vec![6, 3, 2]);
    }

    #[test]
    fn test_debug_lists_rules() {
        let text = format!("{:?}", RuleEngine::shortest_remaining());
        assert!(text.contains("SRTF"));
        assert!(text.contains("FCFS"));
    }
}
