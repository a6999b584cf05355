//! # Form Flows
//!
//! Contact and checkout pipelines wired to the real validator, ledgers and
//! banner board, with scripted or simulated backends.
//!
//! ## Flows Tested:
//!
//! 1. **Contact**: validation gate, backend outcome, history entry, banners
//! 2. **Reentrancy**: a second submit while one is in flight is refused
//! 3. **Checkout**: order record, preferred payment, confirmation link,
//!    bookkeeping failures that must not change what the customer sees

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use rf_02_local_ledger::{
        keys, ContactArchive, InMemoryPersistence, LedgerConfig, LocalLedger, OrderBook,
        OrderRecord, Persistence,
    };
    use rf_03_submission_pipeline::{
        confirmation_url, BackendError, FormSubmissionApi, LocalEchoBackend, PipelineError,
        PipelineState, ReferenceStyle, SimulatedBackend, SimulatedBackendConfig,
        SubmissionPipeline, SubmissionReport,
    };
    use rf_04_notifier::{BannerBoard, Notice, Notifier};
    use shared_types::{LedgerStatus, PaymentMethod};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Notify;

    fn contact_pipeline(
        store: Arc<dyn Persistence>,
        backend: Arc<ScriptedBackend>,
        board: Arc<BannerBoard>,
    ) -> SubmissionPipeline {
        SubmissionPipeline::contact(store, extractor("contact.html"), backend, board)
    }

    // =========================================================================
    // CONTACT
    // =========================================================================

    #[tokio::test]
    async fn test_valid_contact_reaches_backend_and_history() {
        let store: Arc<dyn Persistence> = Arc::new(InMemoryPersistence::new());
        let backend = Arc::new(ScriptedBackend::ok("MSG_1726309800000_1a2b3c4d"));
        let board = Arc::new(BannerBoard::new());
        let pipeline = contact_pipeline(store.clone(), backend.clone(), board.clone());

        let report = pipeline.submit(valid_contact()).await.unwrap();

        assert!(report.is_success());
        assert_eq!(backend.call_count(), 1);
        let sent = backend.seen.lock()[0].clone();
        assert_eq!(sent.field("email"), Some("fatou.sow@example.sn"));
        assert_eq!(sent.origin_page(), "contact.html");

        let history = LocalLedger::new(store, LedgerConfig::contact_history())
            .list()
            .unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].status, LedgerStatus::Success);
        assert_eq!(history[0].detail, "MSG_1726309800000_1a2b3c4d");

        let view = board.view();
        assert!(view.success.is_some());
        assert!(view.error.is_none());
        assert_eq!(pipeline.state(), PipelineState::Idle);
    }

    #[tokio::test]
    async fn test_invalid_email_never_reaches_backend() {
        let store: Arc<dyn Persistence> = Arc::new(InMemoryPersistence::new());
        let backend = Arc::new(ScriptedBackend::ok("unused"));
        let board = Arc::new(BannerBoard::new());
        let pipeline = contact_pipeline(store.clone(), backend.clone(), board.clone());

        let report = pipeline
            .submit(contact_with_email("fatou.sow@example"))
            .await
            .unwrap();

        let SubmissionReport::Rejected(validation) = report else {
            panic!("expected validation rejection");
        };
        assert_eq!(validation.error_count(), 1);
        assert_eq!(backend.call_count(), 0);
        assert!(board.view().field_error("email").is_some());
        assert!(store.get(keys::CONTACT_FORM_HISTORY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_backend_failure_recorded_and_alternatives_offered() {
        let store: Arc<dyn Persistence> = Arc::new(InMemoryPersistence::new());
        let backend = Arc::new(ScriptedBackend::err(BackendError::Transport(
            "connection reset".into(),
        )));
        let board = Arc::new(BannerBoard::new());
        let mut notices = board.subscribe();
        let pipeline = contact_pipeline(store.clone(), backend, board.clone());

        let report = pipeline.submit(valid_contact()).await.unwrap();
        assert!(!report.is_success());

        let history = LocalLedger::new(store, LedgerConfig::contact_history())
            .list()
            .unwrap();
        assert_eq!(history[0].status, LedgerStatus::Failure);
        assert!(history[0].detail.contains("connection reset"));

        let mut seen = Vec::new();
        while let Ok(notice) = notices.try_recv() {
            seen.push(notice);
        }
        assert_eq!(seen.first(), Some(&Notice::Cleared));
        assert!(seen
            .iter()
            .any(|n| matches!(n, Notice::AlternativeContact(_))));
        assert!(board.view().alternative_contact.is_some());
    }

    #[tokio::test]
    async fn test_blur_validation_then_edit_clears_error() {
        let store: Arc<dyn Persistence> = Arc::new(InMemoryPersistence::new());
        let board = Arc::new(BannerBoard::new());
        let pipeline = contact_pipeline(store, Arc::new(ScriptedBackend::ok("x")), board.clone());

        let result = pipeline.validate_field("firstName", "A");
        assert!(!result.is_valid);
        assert!(board.view().field_error("firstName").is_some());

        pipeline.field_edited("firstName");
        assert!(board.view().field_error("firstName").is_none());
    }

    #[tokio::test]
    async fn test_local_echo_archives_message() {
        let store: Arc<dyn Persistence> = Arc::new(InMemoryPersistence::new());
        let archive = Arc::new(ContactArchive::new(store.clone(), clock()));
        let pipeline = SubmissionPipeline::contact(
            store,
            extractor("contact.html"),
            Arc::new(LocalEchoBackend::new(archive.clone())),
            Arc::new(BannerBoard::new()),
        );

        let report = pipeline.submit(valid_contact()).await.unwrap();

        let reference = report.outcome().and_then(|o| o.reference()).unwrap();
        let stored = archive.list().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(reference, format!("MSG_{}", stored[0].id));
        assert!(stored[0].wants_newsletter());
    }

    #[tokio::test]
    async fn test_local_echo_full_archive_is_failure() {
        let store: Arc<dyn Persistence> = Arc::new(InMemoryPersistence::with_quota(64));
        let archive = Arc::new(ContactArchive::new(store.clone(), clock()));
        let board = Arc::new(BannerBoard::new());
        let pipeline = SubmissionPipeline::contact(
            store,
            extractor("contact.html"),
            Arc::new(LocalEchoBackend::new(archive.clone())),
            board.clone(),
        );

        let report = pipeline.submit(valid_contact()).await.unwrap();

        assert_eq!(report.final_state(), PipelineState::Failed);
        assert!(archive.is_empty().unwrap());
        assert!(board.view().error.is_some());
        assert!(board.view().success.is_none());
    }

    #[tokio::test]
    async fn test_amy_question_local_echo_succeeds() {
        let store: Arc<dyn Persistence> = Arc::new(InMemoryPersistence::new());
        let archive = Arc::new(ContactArchive::new(store.clone(), clock()));
        let board = Arc::new(BannerBoard::new());
        let pipeline = SubmissionPipeline::contact(
            store.clone(),
            extractor("contact.html"),
            Arc::new(LocalEchoBackend::new(archive.clone())),
            board.clone(),
        );
        let ledger = LocalLedger::new(store, LedgerConfig::contact_history());
        let before = ledger.len().unwrap();

        let fields = [
            ("firstName", "Amy"),
            ("lastName", "Diallo"),
            ("email", "amy@example.com"),
            ("phone", ""),
            ("subject", "general"),
            ("message", "Hello, I have a question."),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let report = pipeline.submit(fields).await.unwrap();

        assert_eq!(report.final_state(), PipelineState::Succeeded);
        assert_eq!(ledger.len().unwrap(), before + 1);
        assert_eq!(archive.len().unwrap(), 1);
        assert!(board.view().success.is_some());
        assert!(board.view().field_errors.is_empty());
        assert_eq!(pipeline.state(), PipelineState::Idle);
    }

    // =========================================================================
    // REENTRANCY
    // =========================================================================

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_busy() {
        let store: Arc<dyn Persistence> = Arc::new(InMemoryPersistence::new());
        let release = Arc::new(Notify::new());
        let backend = Arc::new(ScriptedBackend::held("MSG_held", release.clone()));
        let pipeline = Arc::new(contact_pipeline(
            store.clone(),
            backend.clone(),
            Arc::new(BannerBoard::new()),
        ));

        let first = {
            let pipeline = pipeline.clone();
            tokio::spawn(async move { pipeline.submit(valid_contact()).await })
        };

        while backend.call_count() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(pipeline.is_busy());
        assert_eq!(pipeline.state(), PipelineState::Submitting);

        let second = pipeline.submit(valid_contact()).await;
        assert_eq!(second.unwrap_err(), PipelineError::Busy);

        release.notify_one();
        assert!(first.await.unwrap().unwrap().is_success());
        assert!(!pipeline.is_busy());
        assert_eq!(backend.call_count(), 1);

        let history = LocalLedger::new(store, LedgerConfig::contact_history());
        assert_eq!(history.len().unwrap(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_delay_then_resubmit() {
        let store: Arc<dyn Persistence> = Arc::new(InMemoryPersistence::new());
        let backend = Arc::new(SimulatedBackend::new(
            SimulatedBackendConfig::always_fail(),
            ReferenceStyle::Message,
            clock(),
        ));
        let pipeline = SubmissionPipeline::contact(
            store.clone(),
            extractor("contact.html"),
            backend,
            Arc::new(BannerBoard::new()),
        );

        let started = tokio::time::Instant::now();
        let first = pipeline.submit(valid_contact()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1_500));
        assert_eq!(
            first.outcome().unwrap(),
            &shared_types::SubmissionOutcome::failure("Simulated network error")
        );

        // Failure leaves the pipeline resubmittable.
        pipeline.submit(valid_contact()).await.unwrap();
        let history = LocalLedger::new(store, LedgerConfig::contact_history());
        assert_eq!(history.len().unwrap(), 2);
    }

    // =========================================================================
    // CHECKOUT
    // =========================================================================

    #[tokio::test]
    async fn test_order_records_book_and_confirmation() {
        let store: Arc<dyn Persistence> = Arc::new(InMemoryPersistence::new());
        let board = Arc::new(BannerBoard::new());
        let pipeline = SubmissionPipeline::order(
            store.clone(),
            extractor("index.html"),
            Arc::new(ScriptedBackend::ok("CMD-123456789")),
            board.clone(),
        );

        let report = pipeline.submit(valid_order("orange")).await.unwrap();
        assert!(report.is_success());

        let book = OrderBook::new(store.clone());
        let order = book.last_order().unwrap().unwrap();
        assert_eq!(order.order_id, "CMD-123456789");
        assert_eq!(order.payment_method, PaymentMethod::OrangeMoney);
        assert_eq!(order.book_price, "9900");
        assert_eq!(order.currency, "XOF");
        assert_eq!(book.history().unwrap().len(), 1);
        assert_eq!(book.preferred_payment().unwrap(), PaymentMethod::OrangeMoney);

        let order_history = LocalLedger::new(store, LedgerConfig::order_history());
        assert_eq!(order_history.len().unwrap(), 1);

        let url = confirmation_url("https://reveil.example/", &order).unwrap();
        assert_eq!(url.path(), "/payment-success.html");
        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(query.contains(&("order".into(), "CMD-123456789".into())));
        assert!(query.contains(&("name".into(), "Ibrahima Ndiaye".into())));
        assert!(query.contains(&("method".into(), "orange".into())));
        assert!(query.contains(&("amount".into(), "9900".into())));

        // Checkout never offers alternative contact channels.
        assert!(board.view().alternative_contact.is_none());
    }

    #[tokio::test]
    async fn test_failed_order_keeps_order_book_untouched() {
        let store: Arc<dyn Persistence> = Arc::new(InMemoryPersistence::new());
        let board = Arc::new(BannerBoard::new());
        let pipeline = SubmissionPipeline::order(
            store.clone(),
            extractor("index.html"),
            Arc::new(ScriptedBackend::err(BackendError::Rejected("declined".into()))),
            board.clone(),
        );

        let report = pipeline.submit(valid_order("card")).await.unwrap();
        assert!(!report.is_success());

        let book = OrderBook::new(store.clone());
        assert!(book.last_order().unwrap().is_none());
        assert_eq!(book.preferred_payment().unwrap(), PaymentMethod::Wave);

        let entries = LocalLedger::new(store, LedgerConfig::order_history())
            .list()
            .unwrap();
        assert_eq!(entries[0].status, LedgerStatus::Failure);
        assert!(board.view().error.is_some());
        assert!(board.view().alternative_contact.is_none());
    }

    #[tokio::test]
    async fn test_order_bookkeeping_failure_keeps_this_runs_confirmation() {
        for rejected in [keys::LAST_ORDER, keys::ORDER_HISTORY] {
            let inner = Arc::new(InMemoryPersistence::new());
            SubmissionPipeline::order(
                inner.clone(),
                extractor("index.html"),
                Arc::new(ScriptedBackend::ok("CMD-000000001")),
                Arc::new(BannerBoard::new()),
            )
            .submit(order_for("Awa Diop", "awa@example.sn", "card"))
            .await
            .unwrap();

            let board = Arc::new(BannerBoard::new());
            let pipeline = SubmissionPipeline::order(
                Arc::new(RejectingStore {
                    inner: inner.clone(),
                    key: rejected,
                }),
                extractor("index.html"),
                Arc::new(ScriptedBackend::ok("CMD-000000002")),
                board.clone(),
            );
            let report = pipeline
                .submit(order_for("Moussa Ndiaye", "moussa@example.sn", "wave"))
                .await
                .unwrap();

            assert!(report.is_success(), "{rejected}");
            assert_eq!(report.final_state(), PipelineState::Succeeded);
            assert!(board.view().success.is_some(), "{rejected}");
            assert!(board.view().error.is_none(), "{rejected}");

            let order = OrderRecord::from_outcome(
                report.snapshot().unwrap(),
                report.outcome().unwrap(),
            )
            .unwrap();
            let url = confirmation_url("https://reveil.example/", &order).unwrap();
            let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
            assert!(query.contains(&("order".into(), "CMD-000000002".into())));
            assert!(query.contains(&("name".into(), "Moussa Ndiaye".into())));
            assert!(query.contains(&("method".into(), "wave".into())));

            // lastOrder is written before the history is appended
            let book = OrderBook::new(inner);
            assert_eq!(book.history().unwrap().len(), 1, "{rejected}");
            let expected_last = if rejected == keys::LAST_ORDER {
                "CMD-000000001"
            } else {
                "CMD-000000002"
            };
            assert_eq!(book.last_order().unwrap().unwrap().order_id, expected_last);
        }
    }

    #[tokio::test]
    async fn test_order_blank_payment_defaults_to_wave() {
        let store: Arc<dyn Persistence> = Arc::new(InMemoryPersistence::new());
        let backend = Arc::new(ScriptedBackend::ok("CMD-000001000"));
        let pipeline = SubmissionPipeline::order(
            store.clone(),
            extractor("index.html"),
            backend.clone(),
            Arc::new(BannerBoard::new()),
        );

        pipeline.submit(valid_order("")).await.unwrap();

        let sent = backend.seen.lock()[0].clone();
        assert_eq!(sent.field("paymentMethod"), Some("wave"));
        assert_eq!(sent.field("bookTitle"), Some("Réveille Ton Potentiel"));
        let order = OrderBook::new(store).last_order().unwrap().unwrap();
        assert_eq!(order.payment_method, PaymentMethod::Wave);
    }

    #[tokio::test]
    async fn test_contact_and_order_share_one_store() {
        let store: Arc<dyn Persistence> = Arc::new(InMemoryPersistence::new());
        let board = Arc::new(BannerBoard::new());
        let contact = contact_pipeline(
            store.clone(),
            Arc::new(ScriptedBackend::ok("MSG_a")),
            board.clone(),
        );
        let order = SubmissionPipeline::order(
            store.clone(),
            extractor("index.html"),
            Arc::new(ScriptedBackend::ok("CMD-000002000")),
            board.clone(),
        );

        let (a, b) = tokio::join!(
            contact.submit(valid_contact()),
            order.submit(valid_order("wave"))
        );
        assert!(a.unwrap().is_success());
        assert!(b.unwrap().is_success());

        assert_eq!(
            LocalLedger::new(store.clone(), LedgerConfig::contact_history())
                .len()
                .unwrap(),
            1
        );
        assert_eq!(
            LocalLedger::new(store, LedgerConfig::order_history())
                .len()
                .unwrap(),
            1
        );
        board.clear();
        assert!(board.view().is_empty());
    }
}
