use hearth_shared::CancellationLabels;

use crate::models::OrderStatus;

/// Customer-side cancellation rules.
///
/// Stricter than the operator table: operators can cancel any open order,
/// customers only before the kitchen starts on it.
#[derive(Debug, Clone, Default)]
pub struct CancellationPolicy {
    labels: CancellationLabels,
}

impl CancellationPolicy {
    pub fn new(labels: CancellationLabels) -> Self {
        Self { labels }
    }

    pub fn customer_can_cancel(status: OrderStatus) -> bool {
        matches!(status, OrderStatus::Pending | OrderStatus::Accepted)
    }

    /// Explanation shown next to the cancel action, if any
    pub fn cancellation_warning(&self, status: OrderStatus) -> Option<&str> {
        match status {
            OrderStatus::Pending => Some(self.labels.pending.as_str()),
            OrderStatus::Accepted => Some(self.labels.accepted.as_str()),
            OrderStatus::Preparing => Some(self.labels.preparing.as_str()),
            OrderStatus::Ready => Some(self.labels.ready.as_str()),
            OrderStatus::OutForDelivery => Some(self.labels.out_for_delivery.as_str()),
            OrderStatus::Completed | OrderStatus::Canceled => None,
        }
    }
}
