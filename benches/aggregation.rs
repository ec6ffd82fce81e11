use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use expense_core::{
    BudgetService, NewBudget, NewTransaction, RecordStore, SummaryService, TransactionService,
    DEFAULT_RECENT_LIMIT,
};
use tracker_domain::EXPENSE_CATEGORIES;

fn build_sample_store(txn_count: usize) -> RecordStore {
    let store = RecordStore::in_memory();
    let start_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    let mut transactions = Vec::with_capacity(txn_count);
    for idx in 0..txn_count {
        let date = start_date + Duration::days((idx % 365) as i64);
        let category = EXPENSE_CATEGORIES[idx % EXPENSE_CATEGORIES.len()];
        let fields = if idx % 10 == 0 {
            NewTransaction::income(1500.0, "Salary", date)
        } else {
            NewTransaction::expense(5.0 + (idx % 100) as f64, category, date)
        };
        transactions.push(expense_core::Transaction::from_new(uuid::Uuid::new_v4(), fields));
    }
    store.replace_all_transactions(&transactions).unwrap();

    for category in EXPENSE_CATEGORIES {
        store
            .create_budget(NewBudget::monthly(*category, 2500.0))
            .unwrap();
    }
    store
}

fn bench_aggregation(c: &mut Criterion) {
    let store = build_sample_store(5_000);

    c.bench_function("compute_summary_5k", |b| {
        b.iter(|| SummaryService::compute_summary(black_box(&store), DEFAULT_RECENT_LIMIT))
    });

    c.bench_function("compute_utilization_5k", |b| {
        b.iter(|| BudgetService::compute_utilization(black_box(&store)))
    });

    let json = TransactionService::export(&store).unwrap();
    c.bench_function("import_5k", |b| {
        b.iter_batched(
            RecordStore::in_memory,
            |target| TransactionService::import(&target, black_box(&json)).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
