//! Brand strategy, visual identity, brand applications and content strategy catalogs.

use super::{COMMITMENT_TERMS, Dimension, PricingOption, PricingPolicy, ServiceCatalog};
use crate::domain::value_objects::{DimensionKey, ServiceType};

const STRATEGY_PACKAGES: &[PricingOption] = &[
    PricingOption::fixed("foundation", "Brand Foundation", 2500),
    PricingOption::fixed("comprehensive", "Comprehensive Strategy", 5000),
    PricingOption::quote("enterprise", "Enterprise Strategy"),
];

const STRATEGY_RESEARCH: &[PricingOption] = &[
    PricingOption::fixed("market-research", "Market Research", 1500),
    PricingOption::fixed("competitor-analysis", "Competitor Analysis", 1000),
    PricingOption::fixed("customer-personas", "Customer Personas", 800),
    PricingOption::fixed("brand-workshop", "Brand Workshop", 1200),
];

const STRATEGY_ADVISORY: &[PricingOption] = &[
    PricingOption::monthly("none", "No Ongoing Advisory", 0),
    PricingOption::monthly("quarterly-checkins", "Quarterly Check-ins", 300),
    PricingOption::monthly("monthly-advisory", "Monthly Advisory", 750),
    PricingOption::monthly("embedded-strategist", "Embedded Strategist", 2000),
];

/// Brand strategy engagements.
pub static BRAND_STRATEGY: ServiceCatalog = ServiceCatalog {
    service: ServiceType::BrandStrategy,
    policy: PricingPolicy::CommittedTerm,
    dimensions: &[
        Dimension::single(DimensionKey::Package, "Package", STRATEGY_PACKAGES),
        Dimension::multiple(DimensionKey::Research, "Research", STRATEGY_RESEARCH),
        Dimension::single(DimensionKey::Advisory, "Advisory", STRATEGY_ADVISORY),
        Dimension::timeline(DimensionKey::Duration, "Engagement Length", COMMITMENT_TERMS),
    ],
};

const IDENTITY_PACKAGES: &[PricingOption] = &[
    PricingOption::fixed("logo-only", "Logo Only", 800),
    PricingOption::fixed("essentials", "Identity Essentials", 2000),
    PricingOption::fixed("complete", "Complete Identity", 4500),
    PricingOption::quote("enterprise", "Enterprise Identity System"),
];

const IDENTITY_CONCEPTS: &[PricingOption] = &[
    PricingOption::fixed("two", "2 Concepts", 0),
    PricingOption::fixed("four", "4 Concepts", 400),
    PricingOption::fixed("six", "6 Concepts", 800),
];

const IDENTITY_DELIVERABLES: &[PricingOption] = &[
    PricingOption::fixed("brand-guidelines", "Brand Guidelines", 1200),
    PricingOption::fixed("color-palette", "Color Palette", 200),
    PricingOption::fixed("typography", "Typography System", 250),
    PricingOption::fixed("icon-set", "Icon Set", 600),
    PricingOption::fixed("pattern-library", "Pattern Library", 500),
    PricingOption::fixed("animated-logo", "Animated Logo", 700),
];

const IDENTITY_TIMELINES: &[PricingOption] = &[
    PricingOption::speed("standard", "Standard (4-6 weeks)", 100),
    PricingOption::speed("priority", "Priority (3 weeks)", 120),
    PricingOption::speed("rush", "Rush (10 days)", 140),
];

/// Logo and visual identity design.
pub static VISUAL_IDENTITY: ServiceCatalog = ServiceCatalog {
    service: ServiceType::VisualIdentity,
    policy: PricingPolicy::OneTimeRush,
    dimensions: &[
        Dimension::single(DimensionKey::Package, "Package", IDENTITY_PACKAGES),
        Dimension::single(DimensionKey::LogoConcepts, "Logo Concepts", IDENTITY_CONCEPTS),
        Dimension::multiple(DimensionKey::Deliverables, "Deliverables", IDENTITY_DELIVERABLES),
        Dimension::timeline(DimensionKey::Timeline, "Timeline", IDENTITY_TIMELINES),
    ],
};

const APPLICATION_PIECES: &[PricingOption] = &[
    PricingOption::fixed("business-cards", "Business Cards", 250),
    PricingOption::fixed("letterhead", "Letterhead", 200),
    PricingOption::fixed("email-signature", "Email Signature", 100),
    PricingOption::fixed("social-templates", "Social Media Templates", 500),
    PricingOption::fixed("presentation-template", "Presentation Template", 800),
    PricingOption::fixed("signage", "Signage", 700),
    PricingOption::fixed("merchandise", "Merchandise", 400),
    PricingOption::quote("packaging", "Packaging Design"),
];

const APPLICATION_VARIANTS: &[PricingOption] = &[
    PricingOption::fixed("standard", "Standard", 0),
    PricingOption::fixed("extended", "Extended Variants", 500),
    PricingOption::fixed("comprehensive", "Comprehensive Variants", 1200),
];

const APPLICATION_PRINT: &[PricingOption] = &[
    PricingOption::fixed("digital-only", "Digital Files Only", 0),
    PricingOption::fixed("print-ready", "Print-ready Files", 300),
    PricingOption::fixed("print-managed", "Managed Print Production", 800),
];

const APPLICATION_TIMELINES: &[PricingOption] = &[
    PricingOption::speed("standard", "Standard (3-4 weeks)", 100),
    PricingOption::speed("priority", "Priority (2 weeks)", 120),
    PricingOption::speed("rush", "Rush (1 week)", 135),
];

/// Brand collateral and applications.
pub static BRAND_APPLICATIONS: ServiceCatalog = ServiceCatalog {
    service: ServiceType::BrandApplications,
    policy: PricingPolicy::OneTimeRush,
    dimensions: &[
        Dimension::multiple(DimensionKey::Applications, "Applications", APPLICATION_PIECES),
        Dimension::single(DimensionKey::Variants, "Variants", APPLICATION_VARIANTS),
        Dimension::single(
            DimensionKey::PrintProduction,
            "Print Production",
            APPLICATION_PRINT,
        ),
        Dimension::timeline(DimensionKey::Timeline, "Timeline", APPLICATION_TIMELINES),
    ],
};

const CONTENT_STRATEGIES: &[PricingOption] = &[
    PricingOption::fixed("audit", "Content Audit", 1000),
    PricingOption::fixed("full-strategy", "Full Content Strategy", 3000),
    PricingOption::quote("enterprise", "Enterprise Content Program"),
];

const CONTENT_PRODUCTION: &[PricingOption] = &[
    PricingOption::monthly("none", "Strategy Only", 0),
    PricingOption::monthly("four-posts", "4 Articles per Month", 800),
    PricingOption::monthly("eight-posts", "8 Articles per Month", 1500),
    PricingOption::monthly("multi-channel", "Multi-channel Production", 2500),
];

const CONTENT_ADD_ONS: &[PricingOption] = &[
    PricingOption::fixed("editorial-calendar", "Editorial Calendar", 400),
    PricingOption::monthly("seo-optimization", "SEO Optimization", 300),
    PricingOption::monthly("distribution", "Content Distribution", 350),
    PricingOption::monthly("performance-reporting", "Performance Reporting", 150),
    PricingOption::quote("ghostwriting", "Executive Ghostwriting"),
];

/// Content strategy and production.
pub static CONTENT_STRATEGY: ServiceCatalog = ServiceCatalog {
    service: ServiceType::ContentStrategy,
    policy: PricingPolicy::CommittedTerm,
    dimensions: &[
        Dimension::single(DimensionKey::Strategy, "Strategy", CONTENT_STRATEGIES),
        Dimension::single(DimensionKey::Production, "Production", CONTENT_PRODUCTION),
        Dimension::multiple(DimensionKey::AddOns, "Add-ons", CONTENT_ADD_ONS),
        Dimension::timeline(DimensionKey::Duration, "Duration", COMMITMENT_TERMS),
    ],
};
