use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use quote_configurator::application::services::UnifiedQuoteAggregator;
use quote_configurator::domain::catalog::catalog_for;
use quote_configurator::domain::entities::{QuoteSnapshot, Selections};
use quote_configurator::domain::services::compute_pricing;
use quote_configurator::domain::value_objects::ServiceType;
use quote_configurator::infrastructure::persistence::InMemoryKeyValueStore;
use std::hint::black_box;
use std::sync::Arc;

/// Selects the last option of every dimension, every option of multi-select ones.
fn full_selection(service: ServiceType) -> Selections {
    let catalog = catalog_for(service);
    let mut selections = Selections::new();
    for dimension in catalog.dimensions {
        if dimension.is_multi_select() {
            for option in dimension.options {
                selections.toggle(dimension.key, option.id);
            }
        } else if let Some(option) = dimension.options.last() {
            selections.set_single(dimension.key, option.id);
        }
    }
    selections
}

fn bench_compute_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_pricing");

    for service in [
        ServiceType::Website,
        ServiceType::PaidMedia,
        ServiceType::BrandApplications,
    ] {
        let catalog = catalog_for(service);
        let selections = full_selection(service);
        group.bench_with_input(
            BenchmarkId::new("full_selection", service),
            &selections,
            |b, s| b.iter(|| compute_pricing(black_box(catalog), black_box(s))),
        );
    }

    group.finish();
}

fn bench_unified_quote(c: &mut Criterion) {
    let aggregator = UnifiedQuoteAggregator::load(Arc::new(InMemoryKeyValueStore::new()));
    for service in ServiceType::ALL {
        let catalog = catalog_for(service);
        let selections = full_selection(service);
        aggregator.save_service_config(QuoteSnapshot::capture(
            catalog,
            &selections,
            &compute_pricing(catalog, &selections),
        ));
    }

    c.bench_function("unified_quote/totals", |b| {
        b.iter(|| black_box(&aggregator).totals());
    });
    c.bench_function("unified_quote/quote_request", |b| {
        b.iter(|| black_box(&aggregator).to_quote_request());
    });
}

criterion_group!(benches, bench_compute_pricing, bench_unified_quote);
criterion_main!(benches);
