use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Order status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Preparing,
    Ready,
    OutForDelivery,
    Completed,
    Canceled,
}

impl OrderStatus {
    /// Every status, in lifecycle order
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::OutForDelivery,
        OrderStatus::Completed,
        OrderStatus::Canceled,
    ];

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Canceled)
    }

    /// Display mapping for status badges.
    pub fn presentation(&self) -> StatusPresentation {
        let (label, icon, tone) = match self {
            OrderStatus::Pending => ("Pending", "clock", StatusTone::Attention),
            OrderStatus::Accepted => ("Accepted", "check", StatusTone::Info),
            OrderStatus::Preparing => ("Preparing", "flame", StatusTone::Progress),
            OrderStatus::Ready => ("Ready", "bell", StatusTone::Ready),
            OrderStatus::OutForDelivery => ("Out for delivery", "truck", StatusTone::Transit),
            OrderStatus::Completed => ("Completed", "check-circle", StatusTone::Success),
            OrderStatus::Canceled => ("Canceled", "x-circle", StatusTone::Danger),
        };
        StatusPresentation { label, icon, tone }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.presentation().label)
    }
}

/// Visual emphasis of a status badge; themes map each tone to a color
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Attention,
    Info,
    Progress,
    Ready,
    Transit,
    Success,
    Danger,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StatusPresentation {
    pub label: &'static str,
    pub icon: &'static str,
    pub tone: StatusTone,
}

/// A requested status change for a single order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransitionRequest {
    pub from: OrderStatus,
    pub to: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

impl TransitionRequest {
    pub fn new(from: OrderStatus, to: OrderStatus) -> Self {
        Self {
            from,
            to,
            justification: None,
        }
    }

    pub fn with_justification(mut self, justification: impl Into<String>) -> Self {
        self.justification = Some(justification.into());
        self
    }
}

/// Audit entry for an accepted transition, ready for the caller to persist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusChange {
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub justification: Option<String>,
    pub at: DateTime<Utc>,
}
