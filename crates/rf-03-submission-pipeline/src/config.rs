//! Configuration for the Submission Pipeline Subsystem

use rf_04_notifier::ContactAlternatives;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pipeline configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Upper bound on one backend call (milliseconds); `None` waits forever
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_timeout_ms: Option<u64>,
    /// Banner shown on success
    pub success_message: String,
    /// Banner shown on failure
    pub failure_message: String,
    /// Offer direct contact channels after a failure
    pub offer_alternative_contact: bool,
    pub alternatives: ContactAlternatives,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::contact()
    }
}

impl PipelineConfig {
    /// Contact form defaults.
    pub fn contact() -> Self {
        Self {
            backend_timeout_ms: None,
            success_message: "Your message has been sent. We will get back to you shortly."
                .to_string(),
            failure_message: "An error occurred while sending your message. Please try again."
                .to_string(),
            offer_alternative_contact: true,
            alternatives: ContactAlternatives::default(),
        }
    }

    /// Book checkout defaults.
    pub fn order() -> Self {
        Self {
            backend_timeout_ms: None,
            success_message: "Order confirmed. Redirecting to payment.".to_string(),
            failure_message: "Payment could not be processed. Please try again.".to_string(),
            offer_alternative_contact: false,
            alternatives: ContactAlternatives::default(),
        }
    }

    pub fn backend_timeout(&self) -> Option<Duration> {
        self.backend_timeout_ms.map(Duration::from_millis)
    }
}

/// Simulated backend configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatedBackendConfig {
    /// Delay before resolving (milliseconds)
    pub delay_ms: u64,
    /// Probability in `[0, 1]` that a call succeeds
    pub success_probability: f64,
    /// Reason carried by simulated failures
    pub failure_reason: String,
}

impl Default for SimulatedBackendConfig {
    fn default() -> Self {
        Self::contact()
    }
}

impl SimulatedBackendConfig {
    /// Contact form: succeeds nine times out of ten.
    pub fn contact() -> Self {
        Self {
            delay_ms: 1_500,
            success_probability: 0.9,
            failure_reason: "Simulated network error".to_string(),
        }
    }

    /// Payment: always succeeds.
    pub fn order() -> Self {
        Self {
            success_probability: 1.0,
            ..Self::contact()
        }
    }

    /// Never succeeds.
    pub fn always_fail() -> Self {
        Self {
            success_probability: 0.0,
            ..Self::contact()
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Remote backend configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteBackendConfig {
    /// Endpoint receiving the JSON snapshot
    pub endpoint: String,
    /// Whole-request timeout (seconds)
    pub request_timeout_secs: u64,
    /// Connection timeout (seconds)
    pub connect_timeout_secs: u64,
}

impl Default for RemoteBackendConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080/submit".to_string(),
            request_timeout_secs: 5,
            connect_timeout_secs: 2,
        }
    }
}

/// Mailto hand-off configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailtoConfig {
    pub recipient: String,
}

impl Default for MailtoConfig {
    fn default() -> Self {
        Self {
            recipient: "contact@reveilinterieur.sn".to_string(),
        }
    }
}
