use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::OrderStatus;

/// Transitions that move an order back to an earlier stage.
/// Every pair here needs an operator-supplied justification.
pub const REVERSAL_TRANSITIONS: [(OrderStatus, OrderStatus); 6] = [
    (OrderStatus::Accepted, OrderStatus::Pending),
    (OrderStatus::Preparing, OrderStatus::Accepted),
    (OrderStatus::Ready, OrderStatus::Preparing),
    (OrderStatus::OutForDelivery, OrderStatus::Ready),
    (OrderStatus::Canceled, OrderStatus::Pending),
    (OrderStatus::Canceled, OrderStatus::Accepted),
];

/// Tunable parts of the transition table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TransitionPolicyConfig {
    /// Whether a canceled order may be reopened as Pending or Accepted
    pub allow_reactivation: bool,
}

impl Default for TransitionPolicyConfig {
    fn default() -> Self {
        Self {
            allow_reactivation: true,
        }
    }
}

/// Table of legal operator transitions between order statuses
#[derive(Debug, Clone, Default)]
pub struct StatusTransitionPolicy {
    config: TransitionPolicyConfig,
}

impl StatusTransitionPolicy {
    pub fn new(config: TransitionPolicyConfig) -> Self {
        Self { config }
    }

    /// Statuses an operator may move an order to from `current`
    pub fn allowed_next_statuses(&self, current: OrderStatus) -> HashSet<OrderStatus> {
        self.next_statuses(current).iter().copied().collect()
    }

    pub fn is_allowed(&self, from: OrderStatus, to: OrderStatus) -> bool {
        self.next_statuses(from).contains(&to)
    }

    pub fn requires_justification(&self, from: OrderStatus, to: OrderStatus) -> bool {
        REVERSAL_TRANSITIONS.contains(&(from, to))
    }

    fn next_statuses(&self, current: OrderStatus) -> &'static [OrderStatus] {
        use OrderStatus::*;

        match current {
            Pending => &[Accepted, Canceled],
            Accepted => &[Pending, Preparing, Canceled],
            Preparing => &[Accepted, Ready, Canceled],
            Ready => &[Preparing, OutForDelivery, Canceled],
            OutForDelivery => &[Ready, Completed, Canceled],
            Completed => &[],
            Canceled if self.config.allow_reactivation => &[Pending, Accepted],
            Canceled => &[],
        }
    }
}
