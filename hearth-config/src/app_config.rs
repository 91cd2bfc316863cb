use hearth_order::{
    CancellationPolicy, OrderStatusMachine, StatusTransitionPolicy, TransitionPolicyConfig,
};
use hearth_schedule::AvailabilityEngine;
use hearth_shared::LocaleLabels;
use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub order_policy: TransitionPolicyConfig,
    pub labels: LocaleLabels,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, overridden by `RUST_LOG` when set
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hearth_order=info,hearth_schedule=info".to_string(),
        }
    }
}

/// Engines built from one configuration
#[derive(Debug, Clone)]
pub struct Engines {
    pub transitions: OrderStatusMachine,
    pub cancellation: CancellationPolicy,
    pub availability: AvailabilityEngine,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Layered load from `dir`: `default`, then the `RUN_MODE` file, then
    /// `local`, then `HEARTH__*` environment variables.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let file = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&file("default")))
            .add_source(config::File::with_name(&file(&run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&file("local")).required(false))
            .add_source(config::Environment::with_prefix("HEARTH").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn engines(&self) -> Engines {
        let policy = StatusTransitionPolicy::new(self.order_policy.clone());
        Engines {
            transitions: OrderStatusMachine::new(policy),
            cancellation: CancellationPolicy::new(self.labels.cancellation.clone()),
            availability: AvailabilityEngine::new(self.labels.clone()),
        }
    }
}
