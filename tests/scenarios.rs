//! End-to-end wizard scenarios driven through the [`Configurator`] registry.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use quote_configurator::application::Configurator;
use quote_configurator::domain::value_objects::{DimensionKey, Estimate, ServiceType};
use rust_decimal::Decimal;

fn finish(configurator: &mut Configurator, service: ServiceType) {
    let builder = configurator.builder(service);
    let summary = i64::from(builder.max_steps());
    builder.set_step(summary);
}

fn configure_website(configurator: &mut Configurator) {
    let website = configurator.builder(ServiceType::Website);
    website.select_option(DimensionKey::ProjectType, "landing-page");
    website.select_option(DimensionKey::SiteSize, "small");
    website.select_option(DimensionKey::Timeline, "standard");
    finish(configurator, ServiceType::Website);
}

fn configure_app(configurator: &mut Configurator) {
    let app = configurator.builder(ServiceType::App);
    app.select_option(DimensionKey::Platform, "native-both");
    finish(configurator, ServiceType::App);
}

#[test]
fn standard_landing_page() {
    let mut configurator = Configurator::in_memory();
    configure_website(&mut configurator);

    let pricing = *configurator.builder(ServiceType::Website).pricing();
    assert_eq!(pricing.one_time_total, Decimal::from(500));
    assert_eq!(pricing.monthly_total, Decimal::ZERO);
    assert!(!pricing.has_custom_quote);
}

#[test]
fn rush_landing_page() {
    let mut configurator = Configurator::in_memory();
    configure_website(&mut configurator);

    let website = configurator.builder(ServiceType::Website);
    website.select_option(DimensionKey::Timeline, "rush");

    assert_eq!(website.pricing().rush_fee(), Decimal::from(125));
    assert_eq!(website.pricing().one_time_total, Decimal::from(625));
}

#[test]
fn native_app_needs_custom_quote() {
    let mut configurator = Configurator::in_memory();
    configure_app(&mut configurator);

    let app = configurator.builder(ServiceType::App);
    assert!(app.pricing().has_custom_quote);
    assert_eq!(app.pricing().one_time_estimate(), Estimate::CustomQuote);
    assert_eq!(app.pricing().one_time_estimate().to_string(), "Custom Quote");

    let saved = configurator.aggregator().get(ServiceType::App).unwrap();
    assert_eq!(saved.total_estimate().to_string(), "Custom Quote");
}

#[test]
fn six_month_email_commitment() {
    let mut configurator = Configurator::in_memory();
    let email = configurator.builder(ServiceType::EmailMarketing);
    email.select_option(DimensionKey::Volume, "standard");
    email.select_option(DimensionKey::Duration, "6-months");

    assert_eq!(email.pricing().monthly_total, Decimal::from(180));
    assert_eq!(email.pricing().total_investment, Decimal::from(1080));
    assert_eq!(email.pricing().term_months, Some(6));
}

#[test]
fn two_services_in_unified_quote() {
    let mut configurator = Configurator::in_memory();
    configure_website(&mut configurator);
    configure_app(&mut configurator);

    let configured: Vec<_> = configurator
        .aggregator()
        .get_all_configured_services()
        .iter()
        .map(|snapshot| snapshot.service_type())
        .collect();
    assert_eq!(configured, vec![ServiceType::Website, ServiceType::App]);

    let available = configurator.aggregator().get_available_services();
    assert_eq!(available.len(), ServiceType::ALL.len() - 2);
    assert!(!available.contains(&ServiceType::Website));
    assert!(!available.contains(&ServiceType::App));
}

#[test]
fn clearing_website_keeps_app() {
    let mut configurator = Configurator::in_memory();
    configure_website(&mut configurator);
    configure_app(&mut configurator);

    configurator.clear_service(ServiceType::Website);

    let configured = configurator.aggregator().get_all_configured_services();
    assert_eq!(configured.len(), 1);
    assert_eq!(configured[0].service_type(), ServiceType::App);
    assert!(
        configurator
            .aggregator()
            .get_available_services()
            .contains(&ServiceType::Website)
    );
}

#[test]
fn editing_from_summary_updates_unified_quote() {
    let mut configurator = Configurator::in_memory();
    configure_website(&mut configurator);

    let website = configurator.builder(ServiceType::Website);
    let step = website.catalog().step_of(DimensionKey::Timeline).unwrap();
    website.set_step(i64::from(step));
    website.select_option(DimensionKey::Timeline, "expedited");
    website.next_step();

    let saved = configurator.aggregator().get(ServiceType::Website).unwrap();
    assert_eq!(saved.one_time_total(), Decimal::from(575));
    assert_eq!(configurator.aggregator().len(), 1);
}

#[test]
fn quote_request_lists_services_by_priority() {
    let mut configurator = Configurator::in_memory();
    configure_app(&mut configurator);

    let strategy = configurator.builder(ServiceType::BrandStrategy);
    strategy.select_option(DimensionKey::Package, "foundation");
    strategy.select_option(DimensionKey::Advisory, "monthly-advisory");
    strategy.select_option(DimensionKey::Duration, "12-months");
    finish(&mut configurator, ServiceType::BrandStrategy);

    let request = configurator.aggregator().to_quote_request();
    assert_eq!(request.services[0].service_type(), ServiceType::BrandStrategy);
    assert_eq!(request.services[0].monthly_total(), Decimal::new(63750, 2));
    assert_eq!(
        request.services[0].total_investment(),
        Decimal::from(2500 + 7650)
    );
    assert!(request.totals.has_custom_quote);
    assert_eq!(request.totals.service_count, 2);
}
