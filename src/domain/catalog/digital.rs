//! Website and app catalogs.

use super::{Dimension, PricingOption, PricingPolicy, ServiceCatalog};
use crate::domain::value_objects::{DimensionKey, ServiceType};

const WEBSITE_PROJECT_TYPES: &[PricingOption] = &[
    PricingOption::fixed("landing-page", "Landing Page", 500),
    PricingOption::fixed("business-site", "Business Website", 1500),
    PricingOption::fixed("e-commerce", "E-commerce Store", 3500),
    PricingOption::quote("web-application", "Web Application"),
];

const WEBSITE_SIZES: &[PricingOption] = &[
    PricingOption::fixed("small", "Up to 5 pages", 0),
    PricingOption::fixed("medium", "6-15 pages", 750),
    PricingOption::fixed("large", "16-30 pages", 1500),
    PricingOption::quote("enterprise", "30+ pages"),
];

const WEBSITE_DESIGN_STYLES: &[PricingOption] = &[
    PricingOption::fixed("template", "Template-based", 0),
    PricingOption::fixed("custom", "Custom Design", 1000),
    PricingOption::fixed("premium", "Premium Custom Design", 2500),
];

const WEBSITE_FEATURES: &[PricingOption] = &[
    PricingOption::fixed("contact-form", "Contact Form", 150),
    PricingOption::fixed("blog", "Blog", 400),
    PricingOption::fixed("booking-system", "Booking System", 600),
    PricingOption::fixed("seo-setup", "SEO Setup", 350),
    PricingOption::fixed("analytics", "Analytics Integration", 200),
    PricingOption::fixed("multilingual", "Multilingual Support", 800),
    PricingOption::fixed("cms", "Content Management System", 500),
    PricingOption::quote("custom-integration", "Custom Integration"),
];

const WEBSITE_MAINTENANCE: &[PricingOption] = &[
    PricingOption::monthly("none", "No Maintenance", 0),
    PricingOption::monthly("basic", "Basic Maintenance", 99),
    PricingOption::monthly("standard", "Standard Maintenance", 199),
    PricingOption::monthly("premium", "Premium Maintenance", 399),
];

const WEBSITE_TIMELINES: &[PricingOption] = &[
    PricingOption::speed("standard", "Standard (6-8 weeks)", 100),
    PricingOption::speed("expedited", "Expedited (4-5 weeks)", 115),
    PricingOption::speed("rush", "Rush (2-3 weeks)", 125),
];

/// Website design and development.
pub static WEBSITE: ServiceCatalog = ServiceCatalog {
    service: ServiceType::Website,
    policy: PricingPolicy::OneTimeRush,
    dimensions: &[
        Dimension::single(DimensionKey::ProjectType, "Project Type", WEBSITE_PROJECT_TYPES),
        Dimension::single(DimensionKey::SiteSize, "Site Size", WEBSITE_SIZES),
        Dimension::single(DimensionKey::DesignStyle, "Design Style", WEBSITE_DESIGN_STYLES),
        Dimension::multiple(DimensionKey::Features, "Features", WEBSITE_FEATURES),
        Dimension::single(DimensionKey::Maintenance, "Maintenance", WEBSITE_MAINTENANCE),
        Dimension::timeline(DimensionKey::Timeline, "Timeline", WEBSITE_TIMELINES),
    ],
};

const APP_PLATFORMS: &[PricingOption] = &[
    PricingOption::fixed("ios", "iOS", 8000),
    PricingOption::fixed("android", "Android", 8000),
    PricingOption::fixed("cross-platform", "Cross-platform", 12000),
    PricingOption::quote("native-both", "Native iOS + Android"),
];

const APP_COMPLEXITY: &[PricingOption] = &[
    PricingOption::fixed("simple", "Simple", 0),
    PricingOption::fixed("moderate", "Moderate", 5000),
    PricingOption::fixed("complex", "Complex", 15000),
    PricingOption::quote("enterprise", "Enterprise"),
];

const APP_FEATURES: &[PricingOption] = &[
    PricingOption::fixed("user-auth", "User Authentication", 1500),
    PricingOption::fixed("push-notifications", "Push Notifications", 1000),
    PricingOption::fixed("in-app-purchases", "In-app Purchases", 2000),
    PricingOption::fixed("offline-mode", "Offline Mode", 2500),
    PricingOption::fixed("chat", "In-app Chat", 3000),
    PricingOption::fixed("maps", "Maps & Location", 1500),
    PricingOption::fixed("admin-dashboard", "Admin Dashboard", 4000),
    PricingOption::quote("ai-integration", "AI Integration"),
];

const APP_DESIGNS: &[PricingOption] = &[
    PricingOption::fixed("standard-ui", "Standard UI", 0),
    PricingOption::fixed("custom-ui", "Custom UI", 3000),
    PricingOption::fixed("premium-ui", "Premium UI & Motion", 6000),
];

const APP_SUPPORT: &[PricingOption] = &[
    PricingOption::monthly("none", "No Support Plan", 0),
    PricingOption::monthly("basic", "Basic Support", 299),
    PricingOption::monthly("standard", "Standard Support", 599),
    PricingOption::monthly("premium", "Premium Support", 1199),
];

const APP_TIMELINES: &[PricingOption] = &[
    PricingOption::speed("standard", "Standard (4-6 months)", 100),
    PricingOption::speed("accelerated", "Accelerated (3 months)", 120),
    PricingOption::speed("rush", "Rush (8 weeks)", 140),
];

/// Mobile application development.
pub static APP: ServiceCatalog = ServiceCatalog {
    service: ServiceType::App,
    policy: PricingPolicy::OneTimeRush,
    dimensions: &[
        Dimension::single(DimensionKey::Platform, "Platform", APP_PLATFORMS),
        Dimension::single(DimensionKey::Complexity, "Complexity", APP_COMPLEXITY),
        Dimension::multiple(DimensionKey::Features, "Features", APP_FEATURES),
        Dimension::single(DimensionKey::Design, "Design", APP_DESIGNS),
        Dimension::single(DimensionKey::Support, "Support", APP_SUPPORT),
        Dimension::timeline(DimensionKey::Timeline, "Timeline", APP_TIMELINES),
    ],
};
