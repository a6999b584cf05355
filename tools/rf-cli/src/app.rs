//! Application wiring.
//!
//! `App` owns the store, the clock and the banner board, and builds a fresh
//! pipeline per command so the backend can be chosen on the command line.

use crate::config::{AppConfig, BackendKind};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use reqwest::Url;
use rf_02_local_ledger::{
    ContactArchive, JsonFilePersistence, LedgerConfig, LedgerEntry, LocalLedger, OrderBook,
    OrderRecord, Persistence, StorageError,
};
use rf_03_submission_pipeline::{
    confirmation_url, Backend, FormSubmissionApi, LocalEchoBackend, MailtoBackend,
    ReferenceStyle, RemoteBackend, SimulatedBackend, SnapshotExtractor, SubmissionPipeline,
    SubmissionReport,
};
use rf_04_notifier::{BannerBoard, NotifierView};
use shared_types::{
    offer_countdown, FormKind, OfferCountdown, PaymentMethod, SystemTimeSource, TimeSource,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// What a submit command produced.
#[derive(Debug)]
pub struct Outcome {
    pub report: SubmissionReport,
    /// Notifications left on the board after the run
    pub view: NotifierView,
    /// Payment confirmation page for a successful order
    pub confirmation: Option<Url>,
    /// Link handed to the mail client by the mailto backend
    pub mailto_link: Option<String>,
}

pub struct App {
    config: AppConfig,
    store: Arc<dyn Persistence>,
    clock: Arc<dyn TimeSource>,
    board: Arc<BannerBoard>,
    session: String,
}

impl App {
    /// Open the file-backed store under `config.data_dir`.
    pub fn open(config: AppConfig) -> Result<Self> {
        let store = JsonFilePersistence::open(&config.data_dir).with_context(|| {
            format!("cannot open data directory {}", config.data_dir.display())
        })?;
        Ok(Self::with_store(config, Arc::new(store), Arc::new(SystemTimeSource)))
    }

    pub fn with_store(
        config: AppConfig,
        store: Arc<dyn Persistence>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        let board = Arc::new(BannerBoard::with_config(config.notifier.clone()));
        let session = format!(
            "rf-cli/{} session {}",
            env!("CARGO_PKG_VERSION"),
            Uuid::new_v4()
        );
        Self {
            config,
            store,
            clock,
            board,
            session,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Client identifier stamped on every snapshot of this process.
    pub fn session(&self) -> &str {
        &self.session
    }

    fn extractor(&self) -> SnapshotExtractor {
        SnapshotExtractor::new(
            self.config.origin_page.clone(),
            self.session.clone(),
            self.clock.clone(),
        )
    }

    fn archive(&self) -> ContactArchive {
        ContactArchive::new(self.store.clone(), self.clock.clone())
    }

    fn book(&self) -> OrderBook {
        OrderBook::new(self.store.clone())
    }

    fn ledger(&self, kind: FormKind) -> LocalLedger {
        let config = match kind {
            FormKind::Contact => LedgerConfig::contact_history(),
            FormKind::Order => LedgerConfig::order_history(),
        };
        LocalLedger::new(self.store.clone(), config)
    }

    fn contact_backend(&self, kind: BackendKind) -> Result<Backend> {
        let section = &self.config.contact;
        let backend = match kind {
            BackendKind::Simulated => SimulatedBackend::new(
                section.simulated.clone(),
                ReferenceStyle::Message,
                self.clock.clone(),
            )
            .into(),
            BackendKind::LocalEcho => LocalEchoBackend::new(Arc::new(self.archive())).into(),
            BackendKind::Remote => RemoteBackend::new(section.remote.clone())?.into(),
            BackendKind::Mailto => MailtoBackend::new(section.mailto.clone()).into(),
        };
        Ok(backend)
    }

    /// Run the contact pipeline once.
    pub async fn submit_contact(
        &self,
        fields: Vec<(String, String)>,
        backend: Option<BackendKind>,
    ) -> Result<Outcome> {
        let kind = backend.unwrap_or(self.config.contact.backend);
        let backend = Arc::new(self.contact_backend(kind)?);

        let pipeline = SubmissionPipeline::contact(
            self.store.clone(),
            self.extractor(),
            backend.clone(),
            self.board.clone(),
        )
        .with_config(self.config.contact.pipeline.clone());

        let report = pipeline.submit(fields).await?;
        info!(backend = ?kind, success = report.is_success(), "Contact command finished");

        let mailto_link = match backend.as_ref() {
            Backend::Mailto(mailto) if report.is_success() => mailto.last_link(),
            _ => None,
        };

        Ok(Outcome {
            report,
            view: self.board.view(),
            confirmation: None,
            mailto_link,
        })
    }

    /// Run the checkout pipeline once against the simulated payment backend.
    pub async fn submit_order(&self, fields: Vec<(String, String)>) -> Result<Outcome> {
        let section = &self.config.order;
        let backend = Arc::new(SimulatedBackend::new(
            section.simulated.clone(),
            ReferenceStyle::Order,
            self.clock.clone(),
        ));

        let pipeline = SubmissionPipeline::order(
            self.store.clone(),
            self.extractor(),
            backend,
            self.board.clone(),
        )
        .with_config(section.pipeline.clone());

        let report = pipeline.submit(fields).await?;

        // Built from this run, not read back from the store
        let order = match &report {
            SubmissionReport::Completed { snapshot, outcome } => {
                OrderRecord::from_outcome(snapshot, outcome)
            }
            SubmissionReport::Rejected(_) => None,
        };
        let confirmation = order
            .map(|order| confirmation_url(&section.confirmation_base, &order))
            .transpose()?;

        Ok(Outcome {
            report,
            view: self.board.view(),
            confirmation,
            mailto_link: None,
        })
    }

    /// Write the contact archive as a CSV file into `dir`.
    ///
    /// Returns `None` when there is nothing to export.
    pub fn export_contacts(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let export = match self.archive().export_contact_messages() {
            Ok(export) => export,
            Err(StorageError::NothingToExport) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        fs::create_dir_all(dir)?;
        let path = dir.join(&export.file_name);
        fs::write(&path, export.content)
            .with_context(|| format!("cannot write {}", path.display()))?;
        info!(path = %path.display(), rows = export.rows, "Contact messages exported");
        Ok(Some(path))
    }

    /// Outcome history of a form as delimited text.
    pub fn export_history(&self, kind: FormKind) -> Result<String> {
        Ok(self.ledger(kind).export_as_delimited_text()?)
    }

    pub fn history(&self, kind: FormKind) -> Result<Vec<LedgerEntry>> {
        Ok(self.ledger(kind).list()?)
    }

    pub fn clear_history(&self, kind: FormKind) -> Result<()> {
        Ok(self.ledger(kind).clear()?)
    }

    pub fn orders(&self) -> Result<Vec<OrderRecord>> {
        Ok(self.book().history()?)
    }

    pub fn set_preferred_payment(&self, method: PaymentMethod) -> Result<()> {
        Ok(self.book().set_preferred_payment(method)?)
    }

    pub fn preferred_payment(&self) -> Result<PaymentMethod> {
        Ok(self.book().preferred_payment()?)
    }

    pub fn countdown(&self, now: NaiveDateTime) -> OfferCountdown {
        offer_countdown(now)
    }
}
