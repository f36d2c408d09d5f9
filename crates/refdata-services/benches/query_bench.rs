//! Benchmarks for the service query primitive.
//!
//! Run with: cargo bench -p refdata-services

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use refdata_core::{Currency, Date, DayCountConvention, PaymentFrequency};
use refdata_products::prelude::*;
use refdata_services::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_swap(i: usize) -> InterestRateSwap {
    let terms = [1, 2, 3, 5, 7, 10, 15, 20, 30];
    let term_years = terms[i % terms.len()];
    let effective = Date::from_ymd(2015, 11, 16).unwrap();

    InterestRateSwap::new(
        format!("SWAP-{i:06}"),
        SwapTerms {
            fixed_leg_day_count: DayCountConvention::Thirty360,
            floating_leg_day_count: DayCountConvention::Act360,
            fixed_leg_payment_frequency: PaymentFrequency::SemiAnnual,
            floating_index: if i % 2 == 0 {
                FloatingIndex::Libor
            } else {
                FloatingIndex::Euribor
            },
            floating_index_tenor: IndexTenor::M3,
            effective_date: effective,
            termination_date: effective.add_years(term_years).unwrap(),
            currency: Currency::USD,
            term_years,
            swap_type: SwapType::Spot,
            swap_leg_type: SwapLegType::Outright,
        },
    )
}

fn create_bond(i: usize) -> Bond {
    let tickers = ["T", "DBR", "UKT", "OAT"];
    Bond::new(
        format!("BOND-{i:06}"),
        BondIdType::Isin,
        tickers[i % tickers.len()],
        Decimal::new(225, 2),
        Date::from_ymd(2030, 5, 15).unwrap(),
    )
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_swap_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_queries");

    for size in [100, 1_000, 10_000] {
        let service = SwapService::new();
        for i in 0..size {
            service.add(create_swap(i));
        }

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("less_than", size), &service, |b, s| {
            b.iter(|| black_box(s.get_swaps_less_than(black_box(5))));
        });
        group.bench_with_input(BenchmarkId::new("by_index", size), &service, |b, s| {
            b.iter(|| black_box(s.get_swaps_by_floating_index(black_box(FloatingIndex::Libor))));
        });
    }

    group.finish();
}

fn bench_bond_lookup(c: &mut Criterion) {
    let service = BondService::new();
    for i in 0..10_000 {
        service.add(create_bond(i));
    }

    c.bench_function("bond_get_data", |b| {
        b.iter(|| black_box(service.get_data(black_box("BOND-005000"))));
    });
    c.bench_function("bond_get_bonds_by_ticker", |b| {
        b.iter(|| black_box(service.get_bonds(black_box("UKT"))));
    });
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("swap_add_1000", |b| {
        b.iter(|| {
            let service = SwapService::new();
            for i in 0..1_000 {
                service.add(create_swap(i));
            }
            black_box(service.len())
        });
    });
}

criterion_group!(benches, bench_swap_queries, bench_bond_lookup, bench_add);
criterion_main!(benches);
