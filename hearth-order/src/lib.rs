pub mod models;
pub mod policy;
pub mod machine;
pub mod cancellation;

pub use models::{OrderStatus, StatusChange, StatusPresentation, StatusTone, TransitionRequest};
pub use policy::{StatusTransitionPolicy, TransitionPolicyConfig, REVERSAL_TRANSITIONS};
pub use machine::{OrderStatusMachine, TransitionError};
pub use cancellation::CancellationPolicy;
