//! Property-based tests for service invariants.
//!
//! These tests verify properties that should hold for any book of products:
//! - Add then get returns an equal value
//! - Re-adding an id leaves exactly one entry, equal to the last added
//! - Every query is sound and complete against a full scan
//! - The two term queries partition the swaps at any threshold

use refdata_core::prelude::*;
use refdata_products::prelude::*;
use refdata_services::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517c_c1b7_2722_0a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517c_c1b7_2722_0a95);
    x ^= x >> 32;
    x
}

fn pick<T: Copy>(items: &[T], hash: u64) -> T {
    items[(hash % items.len() as u64) as usize]
}

/// Generates `n` swaps with pseudo-random attributes. Ids repeat when
/// `id_space < n`, so later swaps replace earlier ones.
fn generate_swaps(n: usize, id_space: u64, seed: u64) -> Vec<InterestRateSwap> {
    let effective = Date::from_ymd(2015, 11, 16).unwrap();

    (0..n as u64)
        .map(|i| {
            let hash = simple_hash(seed, i);
            let term_years = (hash % 31) as i32;
            InterestRateSwap::new(
                format!("SWAP-{:04}", hash % id_space),
                SwapTerms {
                    fixed_leg_day_count: pick(
                        &[
                            DayCountConvention::Thirty360,
                            DayCountConvention::Act360,
                            DayCountConvention::Act365,
                        ],
                        hash >> 3,
                    ),
                    floating_leg_day_count: DayCountConvention::Act360,
                    fixed_leg_payment_frequency: pick(
                        &[
                            PaymentFrequency::Quarterly,
                            PaymentFrequency::SemiAnnual,
                            PaymentFrequency::Annual,
                        ],
                        hash >> 7,
                    ),
                    floating_index: pick(&[FloatingIndex::Libor, FloatingIndex::Euribor], hash >> 11),
                    floating_index_tenor: pick(
                        &[IndexTenor::M1, IndexTenor::M3, IndexTenor::M6, IndexTenor::M12],
                        hash >> 13,
                    ),
                    effective_date: effective,
                    termination_date: effective.add_years(term_years).unwrap(),
                    currency: pick(&[Currency::USD, Currency::EUR, Currency::GBP], hash >> 17),
                    term_years,
                    swap_type: pick(
                        &[
                            SwapType::Spot,
                            SwapType::Forward,
                            SwapType::Imm,
                            SwapType::Mac,
                            SwapType::Basis,
                        ],
                        hash >> 19,
                    ),
                    swap_leg_type: pick(
                        &[SwapLegType::Outright, SwapLegType::Curve, SwapLegType::Fly],
                        hash >> 23,
                    ),
                },
            )
        })
        .collect()
}

fn generate_bonds(n: usize, id_space: u64, seed: u64) -> Vec<Bond> {
    (0..n as u64)
        .map(|i| {
            let hash = simple_hash(seed, i);
            Bond::new(
                format!("BOND-{:04}", hash % id_space),
                pick(&[BondIdType::Cusip, BondIdType::Isin], hash >> 5),
                pick(&["T", "DBR", "UKT", "P"], hash >> 9),
                Decimal::new((hash % 800) as i64 - 100, 2),
                Date::from_ymd(2016 + (hash % 30) as i32, 1 + (hash % 12) as u32, 15).unwrap(),
            )
        })
        .collect()
}

/// Last value added for each id, in id order.
fn expected_entries<V: Clone>(values: &[V], key: impl Fn(&V) -> String) -> Vec<V> {
    let mut latest = std::collections::BTreeMap::new();
    for v in values {
        latest.insert(key(v), v.clone());
    }
    latest.into_values().collect()
}

fn load_swaps(swaps: &[InterestRateSwap]) -> SwapService {
    let service = SwapService::new();
    for swap in swaps {
        service.add(swap.clone());
    }
    service
}

// =============================================================================
// PROPERTY: ADD THEN GET
// =============================================================================

#[test]
fn prop_add_then_get_returns_equal_value() {
    for seed in 0..20 {
        let service = BondService::new();
        for bond in generate_bonds(50, 10_000, seed) {
            service.add(bond.clone());
            assert_eq!(service.get_data(bond.id()), Some(bond));
        }
    }
}

// =============================================================================
// PROPERTY: UPSERT
// =============================================================================

#[test]
fn prop_upsert_keeps_last_value_per_id() {
    for seed in 0..20 {
        let swaps = generate_swaps(200, 40, seed);
        let service = load_swaps(&swaps);

        let expected = expected_entries(&swaps, |s| s.id().to_string());
        assert_eq!(service.len(), expected.len());
        assert_eq!(service.all(), expected);
    }
}

// =============================================================================
// PROPERTY: FILTERS ARE SOUND AND COMPLETE
// =============================================================================

#[test]
fn prop_swap_filters_match_full_scan() {
    for seed in 0..10 {
        let swaps = generate_swaps(150, 100, seed);
        let service = load_swaps(&swaps);
        let stored = service.all();
        let scan = |pred: &dyn Fn(&InterestRateSwap) -> bool| -> Vec<InterestRateSwap> {
            stored.iter().filter(|s| pred(*s)).cloned().collect()
        };

        for dc in [
            DayCountConvention::Thirty360,
            DayCountConvention::Act360,
            DayCountConvention::Act365,
        ] {
            assert_eq!(
                service.get_swaps_by_day_count(dc),
                scan(&|s| s.fixed_leg_day_count() == dc)
            );
        }
        for freq in [
            PaymentFrequency::Quarterly,
            PaymentFrequency::SemiAnnual,
            PaymentFrequency::Annual,
        ] {
            assert_eq!(
                service.get_swaps_by_payment_frequency(freq),
                scan(&|s| s.fixed_leg_payment_frequency() == freq)
            );
        }
        for index in [FloatingIndex::Libor, FloatingIndex::Euribor] {
            assert_eq!(
                service.get_swaps_by_floating_index(index),
                scan(&|s| s.floating_index() == index)
            );
        }
        for swap_type in [
            SwapType::Spot,
            SwapType::Forward,
            SwapType::Imm,
            SwapType::Mac,
            SwapType::Basis,
        ] {
            assert_eq!(
                service.get_swaps_by_swap_type(swap_type),
                scan(&|s| s.swap_type() == swap_type)
            );
        }
        for leg_type in [SwapLegType::Outright, SwapLegType::Curve, SwapLegType::Fly] {
            assert_eq!(
                service.get_swaps_by_leg_type(leg_type),
                scan(&|s| s.swap_leg_type() == leg_type)
            );
        }
        for ccy in [Currency::USD, Currency::EUR, Currency::GBP] {
            assert_eq!(
                service.get_swaps_by_currency(ccy),
                scan(&|s| s.currency() == ccy)
            );
        }
    }
}

#[test]
fn prop_bond_filters_match_full_scan() {
    for seed in 0..10 {
        let service = BondService::new();
        for bond in generate_bonds(150, 100, seed) {
            service.add(bond);
        }
        let stored = service.all();

        for ticker in ["T", "DBR", "UKT", "P", "MISSING"] {
            let expected: Vec<Bond> = stored
                .iter()
                .filter(|b| b.ticker() == ticker)
                .cloned()
                .collect();
            assert_eq!(service.get_bonds(ticker), expected);
        }

        let cutoff = Date::from_ymd(2030, 6, 15).unwrap();
        let expected: Vec<Bond> = stored
            .iter()
            .filter(|b| b.maturity_date() < cutoff)
            .cloned()
            .collect();
        assert_eq!(service.get_bonds_maturing_before(cutoff), expected);

        for id_type in [BondIdType::Cusip, BondIdType::Isin] {
            let expected: Vec<Bond> = stored
                .iter()
                .filter(|b| b.id_type() == id_type)
                .cloned()
                .collect();
            assert_eq!(service.get_bonds_by_id_type(id_type), expected);
        }
    }
}

// =============================================================================
// PROPERTY: TERM QUERIES PARTITION THE SWAPS
// =============================================================================

#[test]
fn prop_term_queries_partition() {
    for seed in 0..10 {
        let service = load_swaps(&generate_swaps(120, 1_000, seed));

        for threshold in -1..=32 {
            let at_least = service.get_swaps_greater_or_equal(threshold);
            let below = service.get_swaps_less_than(threshold);

            assert_eq!(at_least.len() + below.len(), service.len());
            assert!(at_least.iter().all(|s| s.term_years() >= threshold));
            assert!(below.iter().all(|s| s.term_years() < threshold));
            assert!(below
                .iter()
                .all(|s| !at_least.iter().any(|t| t.id() == s.id())));
        }
    }
}
