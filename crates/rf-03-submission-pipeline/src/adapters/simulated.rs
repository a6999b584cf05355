//! Simulated backend: resolves after a fixed delay, succeeding with a
//! configured probability.

use crate::config::SimulatedBackendConfig;
use crate::domain::{message_reference, order_reference, BackendError};
use crate::ports::outbound::SubmissionBackend;
use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use shared_types::{FormKind, FormSnapshot, TimeSource};
use std::sync::Arc;
use tracing::debug;

/// Shape of the references a backend hands out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceStyle {
    /// `MSG_<micros>_<hex>`
    Message,
    /// `CMD-<digits>`
    Order,
}

impl From<FormKind> for ReferenceStyle {
    fn from(kind: FormKind) -> Self {
        match kind {
            FormKind::Contact => ReferenceStyle::Message,
            FormKind::Order => ReferenceStyle::Order,
        }
    }
}

pub struct SimulatedBackend {
    config: SimulatedBackendConfig,
    style: ReferenceStyle,
    clock: Arc<dyn TimeSource>,
}

impl SimulatedBackend {
    pub fn new(
        config: SimulatedBackendConfig,
        style: ReferenceStyle,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        Self {
            config,
            style,
            clock,
        }
    }

    pub fn config(&self) -> &SimulatedBackendConfig {
        &self.config
    }

    /// Roll the outcome. Kept synchronous so the thread-local RNG never
    /// lives across an await point.
    fn resolve(&self) -> Result<String, BackendError> {
        let probability = if self.config.success_probability.is_nan() {
            0.0
        } else {
            self.config.success_probability.clamp(0.0, 1.0)
        };

        let mut rng = rand::thread_rng();
        if !rng.gen_bool(probability) {
            return Err(BackendError::SimulatedFailure(
                self.config.failure_reason.clone(),
            ));
        }

        let now = self.clock.now();
        Ok(match self.style {
            ReferenceStyle::Message => message_reference(now, &mut rng),
            ReferenceStyle::Order => order_reference(now, &mut rng),
        })
    }
}

#[async_trait]
impl SubmissionBackend for SimulatedBackend {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn submit(&self, snapshot: &FormSnapshot) -> Result<String, BackendError> {
        debug!(
            form = %snapshot.kind(),
            delay_ms = self.config.delay_ms,
            "Simulating submission"
        );
        tokio::time::sleep(self.config.delay()).await;
        self.resolve()
    }
}
