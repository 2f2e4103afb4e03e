//! Rule-driven selection among ready processes.

use std::sync::Arc;

use super::DispatchingRule;
use crate::models::ProcessInput;

/// Selects the next process to dispatch at a decision point.
///
/// Only processes that have arrived (`arrival_time <= now`) are eligible.
/// Among them the rule's lowest score wins; equal scores fall back to the
/// position in the caller's input, which keeps every run deterministic.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, Dispatcher};
/// use u_cpusched::models::ProcessInput;
///
/// let ps = vec![ProcessInput::new("late", 5, 1), ProcessInput::new("early", 0, 9)];
/// let d = Dispatcher::new(rules::ShortestBurst);
/// // "late" is shorter but has not arrived at t=0
/// assert_eq!(d.select(&ps, &[0, 1], 0), Some(1));
/// assert_eq!(d.select(&ps, &[0, 1], 5), Some(0));
/// ```
#[derive(Clone)]
pub struct Dispatcher {
    rule: Arc<dyn DispatchingRule>,
}

impl Dispatcher {
    /// Creates a dispatcher driven by `rule`.
    pub fn new<R: DispatchingRule + 'static>(rule: R) -> Self {
        Self {
            rule: Arc::new(rule),
        }
    }

    /// The driving rule's name.
    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Picks the best arrived process among `pending`.
    ///
    /// `pending` holds indices into `processes`. Returns the chosen index,
    /// or `None` if nothing has arrived by `now`.
    pub fn select(&self, processes: &[ProcessInput], pending: &[usize], now: i64) -> Option<usize> {
        pending
            .iter()
            .copied()
            .filter(|&i| processes[i].arrival_time <= now)
            .min_by_key(|&i| (self.rule.evaluate(&processes[i]), i))
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("rule", &self.rule.name())
            .finish()
    }
}
