//! # Reveil-Forms Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | rf-01 Field Validation | full contact snapshot |
//! | rf-02 Local Ledger | bounded append at capacity, delimited export |

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rf_01_field_validation::{FieldValidationApi, FieldValidator};
use rf_02_local_ledger::{InMemoryPersistence, LedgerConfig, LedgerEntry, LocalLedger};
use shared_types::{FormKind, FormSnapshot, SubmissionOutcome};
use std::sync::Arc;

fn contact_snapshot(i: usize) -> FormSnapshot {
    FormSnapshot::capture(
        FormKind::Contact,
        [
            ("firstName", "Fatou".to_string()),
            ("lastName", "Sow".to_string()),
            ("email", format!("fatou{i}@example.sn")),
            ("phone", "+221 77 000 00 00".to_string()),
            ("subject", "general".to_string()),
            ("message", format!("Message number {i}, with a comma")),
        ],
        Utc::now(),
        "contact.html",
        "bench",
    )
}

fn bench_validation(c: &mut Criterion) {
    let validator = FieldValidator::for_kind(FormKind::Contact);
    let snapshot = contact_snapshot(0);

    c.bench_function("rf-01-validate-contact-snapshot", |b| {
        b.iter(|| black_box(validator.validate_snapshot(black_box(&snapshot))))
    });
}

fn filled_ledger(entries: usize) -> LocalLedger {
    let ledger = LocalLedger::new(
        Arc::new(InMemoryPersistence::new()),
        LedgerConfig::contact_history(),
    );
    for i in 0..entries {
        let outcome = SubmissionOutcome::success(format!("MSG_{i}"), Utc::now());
        let _ = ledger.append(LedgerEntry::from_outcome(
            &contact_snapshot(i),
            &outcome,
            Utc::now(),
        ));
    }
    ledger
}

fn bench_ledger(c: &mut Criterion) {
    let mut group = c.benchmark_group("rf-02-local-ledger");

    let ledger = filled_ledger(50);
    let snapshot = contact_snapshot(99);
    let outcome = SubmissionOutcome::failure("bench");
    group.bench_function("append-at-capacity", |b| {
        b.iter(|| {
            ledger
                .append(LedgerEntry::from_outcome(&snapshot, &outcome, Utc::now()))
                .ok()
        })
    });

    for size in [1usize, 10, 50] {
        let ledger = filled_ledger(size);
        group.bench_with_input(BenchmarkId::new("export", size), &ledger, |b, ledger| {
            b.iter(|| black_box(ledger.export_as_delimited_text().ok()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validation, bench_ledger);
criterion_main!(benches);
