//! Paid media, social media and email marketing catalogs.
//!
//! All three are retainer-style: platform and volume choices recur monthly
//! and the duration step discounts the monthly total.

use super::{COMMITMENT_TERMS, Dimension, PricingOption, PricingPolicy, ServiceCatalog};
use crate::domain::value_objects::{DimensionKey, ServiceType};

const PAID_MEDIA_PLATFORMS: &[PricingOption] = &[
    PricingOption::monthly("google-ads", "Google Ads", 500),
    PricingOption::monthly("meta-ads", "Meta Ads", 450),
    PricingOption::monthly("linkedin-ads", "LinkedIn Ads", 600),
    PricingOption::monthly("tiktok-ads", "TikTok Ads", 400),
    PricingOption::monthly("youtube-ads", "YouTube Ads", 500),
    PricingOption::quote("programmatic", "Programmatic Display"),
];

const PAID_MEDIA_TIERS: &[PricingOption] = &[
    PricingOption::monthly("starter", "Starter (up to $5k spend)", 300),
    PricingOption::monthly("growth", "Growth (up to $20k spend)", 600),
    PricingOption::monthly("scale", "Scale (up to $50k spend)", 1200),
    PricingOption::quote("enterprise", "Enterprise ($50k+ spend)"),
];

const PAID_MEDIA_SETUP: &[PricingOption] = &[
    PricingOption::fixed("basic", "Basic Campaign Setup", 250),
    PricingOption::fixed("advanced", "Advanced Campaign Setup", 750),
];

const PAID_MEDIA_ADD_ONS: &[PricingOption] = &[
    PricingOption::fixed("creative-production", "Ad Creative Production", 800),
    PricingOption::fixed("landing-pages", "Landing Pages", 600),
    PricingOption::fixed("conversion-tracking", "Conversion Tracking", 300),
    PricingOption::monthly("reporting-dashboard", "Reporting Dashboard", 150),
    PricingOption::monthly("ab-testing", "A/B Testing", 200),
];

/// Paid advertising management.
pub static PAID_MEDIA: ServiceCatalog = ServiceCatalog {
    service: ServiceType::PaidMedia,
    policy: PricingPolicy::CommittedTerm,
    dimensions: &[
        Dimension::multiple(DimensionKey::Platforms, "Platforms", PAID_MEDIA_PLATFORMS),
        Dimension::single(DimensionKey::ManagementTier, "Management Tier", PAID_MEDIA_TIERS),
        Dimension::single(DimensionKey::CampaignSetup, "Campaign Setup", PAID_MEDIA_SETUP),
        Dimension::multiple(DimensionKey::AddOns, "Add-ons", PAID_MEDIA_ADD_ONS),
        Dimension::timeline(DimensionKey::Duration, "Duration", COMMITMENT_TERMS),
    ],
};

const SOCIAL_PLATFORMS: &[PricingOption] = &[
    PricingOption::monthly("instagram", "Instagram", 250),
    PricingOption::monthly("facebook", "Facebook", 200),
    PricingOption::monthly("linkedin", "LinkedIn", 250),
    PricingOption::monthly("tiktok", "TikTok", 300),
    PricingOption::monthly("x", "X", 150),
    PricingOption::monthly("youtube", "YouTube", 350),
];

const SOCIAL_FREQUENCIES: &[PricingOption] = &[
    PricingOption::monthly("light", "3 posts per week", 300),
    PricingOption::monthly("standard", "Daily posting", 600),
    PricingOption::monthly("intensive", "Multiple posts daily", 1000),
];

const SOCIAL_CONTENT_MIX: &[PricingOption] = &[
    PricingOption::monthly("graphics", "Graphics", 0),
    PricingOption::monthly("mixed", "Graphics + Short Video", 300),
    PricingOption::monthly("video-first", "Video First", 700),
];

const SOCIAL_ADD_ONS: &[PricingOption] = &[
    PricingOption::fixed("profile-setup", "Profile Setup & Optimization", 300),
    PricingOption::monthly("community-management", "Community Management", 400),
    PricingOption::monthly("paid-boosting", "Paid Post Boosting", 250),
    PricingOption::monthly("analytics-report", "Monthly Analytics Report", 100),
    PricingOption::quote("influencer-outreach", "Influencer Outreach"),
];

/// Social media management.
pub static SOCIAL_MEDIA: ServiceCatalog = ServiceCatalog {
    service: ServiceType::SocialMedia,
    policy: PricingPolicy::CommittedTerm,
    dimensions: &[
        Dimension::multiple(DimensionKey::Platforms, "Platforms", SOCIAL_PLATFORMS),
        Dimension::single(
            DimensionKey::PostingFrequency,
            "Posting Frequency",
            SOCIAL_FREQUENCIES,
        ),
        Dimension::single(DimensionKey::ContentMix, "Content Mix", SOCIAL_CONTENT_MIX),
        Dimension::multiple(DimensionKey::AddOns, "Add-ons", SOCIAL_ADD_ONS),
        Dimension::timeline(DimensionKey::Duration, "Duration", COMMITMENT_TERMS),
    ],
};

const EMAIL_VOLUMES: &[PricingOption] = &[
    PricingOption::monthly("starter", "2 campaigns per month", 100),
    PricingOption::monthly("standard", "4 campaigns per month", 200),
    PricingOption::monthly("growth", "8 campaigns per month", 400),
    PricingOption::quote("enterprise", "Enterprise Volume"),
];

const EMAIL_TEMPLATES: &[PricingOption] = &[
    PricingOption::fixed("existing", "Use Existing Template", 0),
    PricingOption::fixed("custom-template", "Custom Template", 500),
    PricingOption::fixed("template-system", "Modular Template System", 1200),
];

const EMAIL_ADD_ONS: &[PricingOption] = &[
    PricingOption::fixed("automation-flows", "Automation Flows", 300),
    PricingOption::fixed("list-cleanup", "List Cleanup", 200),
    PricingOption::monthly("list-segmentation", "List Segmentation", 150),
    PricingOption::monthly("ab-testing", "A/B Testing", 100),
    PricingOption::quote("crm-integration", "CRM Integration"),
];

/// Email marketing campaigns.
pub static EMAIL_MARKETING: ServiceCatalog = ServiceCatalog {
    service: ServiceType::EmailMarketing,
    policy: PricingPolicy::CommittedTerm,
    dimensions: &[
        Dimension::single(DimensionKey::Volume, "Volume", EMAIL_VOLUMES),
        Dimension::single(DimensionKey::TemplateDesign, "Template Design", EMAIL_TEMPLATES),
        Dimension::multiple(DimensionKey::AddOns, "Add-ons", EMAIL_ADD_ONS),
        Dimension::timeline(DimensionKey::Duration, "Duration", COMMITMENT_TERMS),
    ],
};
