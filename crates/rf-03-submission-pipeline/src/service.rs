//! Submission Pipeline Service
//!
//! One instance per form. The busy flag is taken with a compare-exchange
//! before anything else happens and released by a guard on every exit path,
//! so a run that errors or is dropped mid-flight still leaves the pipeline
//! resubmittable.

use crate::config::PipelineConfig;
use crate::domain::{BackendError, PipelineError, PipelineState, SubmissionReport};
use crate::extractor::SnapshotExtractor;
use crate::ports::inbound::FormSubmissionApi;
use crate::ports::outbound::SubmissionBackend;
use async_trait::async_trait;
use parking_lot::Mutex;
use rf_01_field_validation::{FieldValidationApi, FieldValidator};
use rf_02_local_ledger::{LedgerConfig, LocalLedger, OrderBook, OutcomeSink, Persistence};
use rf_04_notifier::Notifier;
use rf_telemetry::log_submission_event;
use shared_types::{FormKind, FormSnapshot, SubmissionOutcome, ValidationResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

pub struct SubmissionPipeline {
    kind: FormKind,
    config: PipelineConfig,
    validator: Arc<dyn FieldValidationApi>,
    extractor: SnapshotExtractor,
    backend: Arc<dyn SubmissionBackend>,
    sinks: Vec<Arc<dyn OutcomeSink>>,
    notifier: Arc<dyn Notifier>,
    busy: AtomicBool,
    state: Mutex<PipelineState>,
}

/// Releases the busy flag and returns the state to `Idle` on drop.
struct RunGuard<'a> {
    pipeline: &'a SubmissionPipeline,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        *self.pipeline.state.lock() = PipelineState::Idle;
        self.pipeline.busy.store(false, Ordering::Release);
    }
}

impl SubmissionPipeline {
    /// Bare pipeline with the form's schema and no outcome sinks.
    pub fn new(
        kind: FormKind,
        extractor: SnapshotExtractor,
        backend: Arc<dyn SubmissionBackend>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let config = match kind {
            FormKind::Contact => PipelineConfig::contact(),
            FormKind::Order => PipelineConfig::order(),
        };
        Self {
            kind,
            config,
            validator: Arc::new(FieldValidator::for_kind(kind)),
            extractor,
            backend,
            sinks: Vec::new(),
            notifier,
            busy: AtomicBool::new(false),
            state: Mutex::new(PipelineState::Idle),
        }
    }

    /// Contact form pipeline recording into `contactFormHistory`.
    pub fn contact(
        store: Arc<dyn Persistence>,
        extractor: SnapshotExtractor,
        backend: Arc<dyn SubmissionBackend>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let ledger = LocalLedger::new(store, LedgerConfig::contact_history());
        Self::new(FormKind::Contact, extractor, backend, notifier).with_sink(Arc::new(ledger))
    }

    /// Checkout pipeline recording into `orderFormHistory` and the order book.
    pub fn order(
        store: Arc<dyn Persistence>,
        extractor: SnapshotExtractor,
        backend: Arc<dyn SubmissionBackend>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let ledger = LocalLedger::new(store.clone(), LedgerConfig::order_history());
        let book = OrderBook::new(store);
        Self::new(FormKind::Order, extractor, backend, notifier)
            .with_sink(Arc::new(ledger))
            .with_sink(Arc::new(book))
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_validator(mut self, validator: Arc<dyn FieldValidationApi>) -> Self {
        self.validator = validator;
        self
    }

    /// Record every outcome into `sink`, after the sinks already attached.
    pub fn with_sink(mut self, sink: Arc<dyn OutcomeSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    fn set_state(&self, state: PipelineState) {
        *self.state.lock() = state;
        debug!(form = %self.kind, state = %state, "Pipeline state");
    }

    fn try_begin(&self) -> Result<RunGuard<'_>, PipelineError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| PipelineError::Busy)?;
        Ok(RunGuard { pipeline: self })
    }

    async fn call_backend(&self, snapshot: &FormSnapshot) -> Result<String, BackendError> {
        match self.config.backend_timeout() {
            None => self.backend.submit(snapshot).await,
            Some(limit) => tokio::time::timeout(limit, self.backend.submit(snapshot))
                .await
                .unwrap_or_else(|_| Err(BackendError::Timeout(limit.as_millis() as u64))),
        }
    }

    /// Hand the outcome to every sink. Storage failures never change the
    /// outcome the user sees.
    fn record(&self, snapshot: &FormSnapshot, outcome: &SubmissionOutcome) {
        let recorded_at = self.extractor.clock().now();
        for sink in &self.sinks {
            if let Err(e) = sink.record(snapshot, outcome, recorded_at) {
                log_submission_event!(
                    warn,
                    self.kind,
                    "Failed to record outcome",
                    sink = sink.name(),
                    error = %e
                );
            }
        }
    }

    fn announce(&self, outcome: &SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Success { .. } => {
                self.notifier.report_success(&self.config.success_message);
            }
            SubmissionOutcome::Failure { .. } => {
                self.notifier.report_global_error(&self.config.failure_message);
                if self.config.offer_alternative_contact {
                    self.notifier
                        .report_alternative_contact(&self.config.alternatives);
                }
            }
        }
    }
}

#[async_trait]
impl FormSubmissionApi for SubmissionPipeline {
    async fn submit(&self, fields: Vec<(String, String)>) -> Result<SubmissionReport, PipelineError> {
        let _guard = self.try_begin().map_err(|e| {
            log_submission_event!(debug, self.kind, "Submission ignored while busy");
            e
        })?;

        self.set_state(PipelineState::Validating);
        self.notifier.clear();

        let snapshot = self.extractor.capture(self.kind, fields);
        let report = self.validator.validate_snapshot(&snapshot);

        if !report.is_valid() {
            for error in report.errors() {
                self.notifier.report_field_error(
                    &error.field_name,
                    error.message.as_deref().unwrap_or_default(),
                );
            }
            log_submission_event!(
                info,
                self.kind,
                "Submission rejected by validation",
                errors = report.error_count()
            );
            return Ok(SubmissionReport::Rejected(report));
        }

        self.set_state(PipelineState::Submitting);
        let outcome = match self.call_backend(&snapshot).await {
            Ok(reference) => {
                self.set_state(PipelineState::Succeeded);
                log_submission_event!(
                    info,
                    self.kind,
                    "Submission succeeded",
                    backend = self.backend.name(),
                    reference = %reference
                );
                SubmissionOutcome::success(reference, self.extractor.clock().now())
            }
            Err(e) => {
                self.set_state(PipelineState::Failed);
                log_submission_event!(
                    warn,
                    self.kind,
                    "Submission failed",
                    backend = self.backend.name(),
                    error = %e
                );
                SubmissionOutcome::failure(e.to_string())
            }
        };

        self.record(&snapshot, &outcome);
        self.announce(&outcome);

        Ok(SubmissionReport::Completed { snapshot, outcome })
    }

    fn validate_field(&self, field_name: &str, raw_value: &str) -> ValidationResult {
        let result = self.validator.validate(field_name, raw_value);
        self.notifier.field_edited(field_name);
        if let Some(message) = result.message.as_deref() {
            self.notifier.report_field_error(field_name, message);
        }
        result
    }

    fn field_edited(&self, field_name: &str) {
        self.notifier.field_edited(field_name);
    }

    fn state(&self) -> PipelineState {
        *self.state.lock()
    }
}
