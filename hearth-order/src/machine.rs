use chrono::{DateTime, Utc};

use crate::models::{OrderStatus, StatusChange, TransitionRequest};
use crate::policy::StatusTransitionPolicy;

/// Validates operator-requested status changes against the transition policy.
///
/// Never mutates anything: a successful result only says the move is legal.
/// Persisting the new status is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct OrderStatusMachine {
    policy: StatusTransitionPolicy,
}

impl OrderStatusMachine {
    pub fn new(policy: StatusTransitionPolicy) -> Self {
        Self { policy }
    }

    /// Check a single transition, returning the target status when legal
    pub fn attempt_transition(
        &self,
        current: OrderStatus,
        target: OrderStatus,
        justification: Option<&str>,
    ) -> Result<OrderStatus, TransitionError> {
        if !self.policy.is_allowed(current, target) {
            tracing::info!(from = ?current, to = ?target, "Rejected order status transition");
            return Err(TransitionError::InvalidTransition {
                from: current,
                to: target,
            });
        }

        let justified = justification.is_some_and(|note| !note.trim().is_empty());
        if self.policy.requires_justification(current, target) && !justified {
            tracing::info!(
                from = ?current,
                to = ?target,
                "Reversal attempted without justification"
            );
            return Err(TransitionError::JustificationRequired {
                from: current,
                to: target,
            });
        }

        tracing::debug!(from = ?current, to = ?target, "Order status transition accepted");
        Ok(target)
    }

    pub fn attempt(&self, request: &TransitionRequest) -> Result<OrderStatus, TransitionError> {
        self.attempt_transition(request.from, request.to, request.justification.as_deref())
    }

    /// Validate `request` and build the audit entry for it
    pub fn record(
        &self,
        request: &TransitionRequest,
        at: DateTime<Utc>,
    ) -> Result<StatusChange, TransitionError> {
        let to = self.attempt(request)?;

        Ok(StatusChange {
            from: request.from,
            to,
            justification: request
                .justification
                .as_deref()
                .map(str::trim)
                .filter(|note| !note.is_empty())
                .map(str::to_string),
            at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Invalid state transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Moving an order from {from:?} back to {to:?} requires a justification")]
    JustificationRequired {
        from: OrderStatus,
        to: OrderStatus,
    },
}

impl TransitionError {
    /// Whether resubmitting the same transition with more input can succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TransitionError::JustificationRequired { .. })
    }
}
