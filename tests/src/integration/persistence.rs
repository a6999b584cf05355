//! # Persistence Flows
//!
//! Ledgers, the contact archive and the order book over the file-backed
//! store: data survives reopening, bounds hold, exports read back, and
//! separate handles on one directory do not lose appends.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use rf_02_local_ledger::{
        keys, parse_delimited, ContactArchive, JsonFilePersistence, LedgerConfig, LedgerEntry,
        LocalLedger, OrderBook, Persistence, StorageError,
    };
    use rf_03_submission_pipeline::{FormSubmissionApi, LocalEchoBackend, SubmissionPipeline};
    use rf_04_notifier::BannerBoard;
    use shared_types::{FormKind, FormSnapshot, PaymentMethod, SubmissionOutcome};
    use std::sync::Arc;

    fn open(dir: &std::path::Path) -> Arc<dyn Persistence> {
        Arc::new(JsonFilePersistence::open(dir).unwrap())
    }

    #[tokio::test]
    async fn test_history_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let pipeline = SubmissionPipeline::contact(
                open(dir.path()),
                extractor("contact.html"),
                Arc::new(ScriptedBackend::ok("MSG_persisted")),
                Arc::new(BannerBoard::new()),
            );
            pipeline.submit(valid_contact()).await.unwrap();
        }

        let ledger = LocalLedger::new(open(dir.path()), LedgerConfig::contact_history());
        let entries = ledger.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].detail, "MSG_persisted");
        assert_eq!(entries[0].snapshot.field("firstName"), Some("Fatou"));
    }

    #[test]
    fn test_history_bound_evicts_oldest_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = LocalLedger::new(open(dir.path()), LedgerConfig::contact_history());

        for i in 0..55 {
            let snapshot = FormSnapshot::capture(
                FormKind::Contact,
                [("message", format!("message number {i}"))],
                fixed_now(),
                "contact.html",
                "agent",
            );
            let outcome = SubmissionOutcome::success(format!("MSG_{i}"), fixed_now());
            ledger
                .append(LedgerEntry::from_outcome(&snapshot, &outcome, fixed_now()))
                .unwrap();
        }

        let entries = ledger.list().unwrap();
        assert_eq!(entries.len(), 50);
        assert_eq!(entries[0].detail, "MSG_5");
        assert_eq!(entries[49].detail, "MSG_54");
    }

    #[tokio::test]
    async fn test_contact_export_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(dir.path());
        let archive = Arc::new(ContactArchive::new(store.clone(), clock()));
        let pipeline = SubmissionPipeline::contact(
            store,
            extractor("contact.html"),
            Arc::new(LocalEchoBackend::new(archive.clone())),
            Arc::new(BannerBoard::new()),
        );

        let mut tricky = valid_contact();
        for (name, value) in tricky.iter_mut() {
            if name.as_str() == "message" {
                *value = "Hello, \"team\"\nsecond line of the message".to_string();
            }
        }
        pipeline.submit(valid_contact()).await.unwrap();
        pipeline.submit(tricky).await.unwrap();

        let export = archive.export_contact_messages().unwrap();
        assert_eq!(export.file_name, "contacts_2024-09-14.csv");
        assert_eq!(export.rows, 2);

        let rows = parse_delimited(&export.content).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "ID");
        assert_eq!(rows[2][7], "Hello, \"team\"\nsecond line of the message");
        assert_eq!(rows[2][8], "Yes");
        assert_ne!(rows[1][0], rows[2][0]);
    }

    #[test]
    fn test_separate_handles_on_one_directory_keep_every_append() {
        let dir = tempfile::tempdir().unwrap();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                // Own store and ledger per writer, as two CLI processes would have
                let ledger =
                    LocalLedger::new(open(dir.path()), LedgerConfig::new("sharedHistory", 1000));
                std::thread::spawn(move || {
                    for i in 0..10 {
                        let snapshot = FormSnapshot::capture(
                            FormKind::Contact,
                            [("message", format!("writer {t} message {i}"))],
                            fixed_now(),
                            "contact.html",
                            "agent",
                        );
                        let outcome =
                            SubmissionOutcome::success(format!("MSG_{t}_{i}"), fixed_now());
                        ledger
                            .append(LedgerEntry::from_outcome(&snapshot, &outcome, fixed_now()))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let ledger = LocalLedger::new(open(dir.path()), LedgerConfig::new("sharedHistory", 1000));
        assert_eq!(ledger.len().unwrap(), 40);
    }

    #[test]
    fn test_empty_archive_export_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let archive = ContactArchive::new(open(dir.path()), clock());
        assert!(matches!(
            archive.export_contact_messages(),
            Err(StorageError::NothingToExport)
        ));
    }

    #[test]
    fn test_corrupted_history_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(dir.path());
        store
            .set(keys::CONTACT_FORM_HISTORY, serde_json::json!({"not": "a list"}))
            .unwrap();

        let ledger = LocalLedger::new(store, LedgerConfig::contact_history());
        assert!(matches!(
            ledger.list(),
            Err(StorageError::Corrupted { .. })
        ));
    }

    #[tokio::test]
    async fn test_order_history_and_preference_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = SubmissionPipeline::order(
            open(dir.path()),
            extractor("index.html"),
            Arc::new(ScriptedBackend::ok("CMD-424242001")),
            Arc::new(BannerBoard::new()),
        );
        pipeline.submit(valid_order("card")).await.unwrap();

        let book = OrderBook::new(open(dir.path()));
        assert_eq!(book.preferred_payment().unwrap(), PaymentMethod::Card);
        assert_eq!(
            book.last_order().unwrap().map(|o| o.order_id),
            Some("CMD-424242001".to_string())
        );

        let csv = LocalLedger::new(open(dir.path()), LedgerConfig::order_history())
            .export_as_delimited_text()
            .unwrap();
        let rows = parse_delimited(&csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains(&"customerEmail".to_string()));
        assert_eq!(rows[1][1], "success");
    }
}
