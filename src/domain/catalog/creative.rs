//! Animation, image and sound catalogs.

use super::{Dimension, PricingOption, PricingPolicy, ServiceCatalog};
use crate::domain::value_objects::{DimensionKey, ServiceType};

const ANIMATION_TYPES: &[PricingOption] = &[
    PricingOption::fixed("motion-graphics", "Motion Graphics", 800),
    PricingOption::fixed("explainer", "Explainer Video", 1500),
    PricingOption::fixed("character", "Character Animation", 3000),
    PricingOption::fixed("3d", "3D Animation", 4000),
    PricingOption::quote("feature-production", "Feature Production"),
];

const ANIMATION_LENGTHS: &[PricingOption] = &[
    PricingOption::fixed("15s", "15 seconds", 0),
    PricingOption::fixed("30s", "30 seconds", 500),
    PricingOption::fixed("60s", "60 seconds", 1200),
    PricingOption::fixed("120s", "2 minutes", 2500),
    PricingOption::quote("long-form", "Long-form"),
];

const ANIMATION_STYLES: &[PricingOption] = &[
    PricingOption::fixed("flat-2d", "Flat 2D", 0),
    PricingOption::fixed("detailed-2d", "Detailed 2D", 700),
    PricingOption::fixed("stylized-3d", "Stylized 3D", 1800),
    PricingOption::quote("photoreal", "Photorealistic"),
];

const ANIMATION_ADD_ONS: &[PricingOption] = &[
    PricingOption::fixed("voiceover", "Professional Voiceover", 300),
    PricingOption::fixed("custom-music", "Custom Music", 500),
    PricingOption::fixed("sound-design", "Sound Design", 250),
    PricingOption::fixed("subtitles", "Subtitles", 100),
    PricingOption::fixed("extra-revisions", "Extra Revision Round", 200),
];

const ANIMATION_TIMELINES: &[PricingOption] = &[
    PricingOption::speed("standard", "Standard (4 weeks)", 100),
    PricingOption::speed("priority", "Priority (2-3 weeks)", 120),
    PricingOption::speed("rush", "Rush (1 week)", 150),
];

/// Animation and motion graphics.
pub static ANIMATION: ServiceCatalog = ServiceCatalog {
    service: ServiceType::Animation,
    policy: PricingPolicy::OneTimeRush,
    dimensions: &[
        Dimension::single(DimensionKey::AnimationType, "Animation Type", ANIMATION_TYPES),
        Dimension::single(DimensionKey::Length, "Length", ANIMATION_LENGTHS),
        Dimension::single(DimensionKey::Style, "Style", ANIMATION_STYLES),
        Dimension::multiple(DimensionKey::AddOns, "Add-ons", ANIMATION_ADD_ONS),
        Dimension::timeline(DimensionKey::Timeline, "Timeline", ANIMATION_TIMELINES),
    ],
};

const IMAGE_TYPES: &[PricingOption] = &[
    PricingOption::fixed("product", "Product Photography", 300),
    PricingOption::fixed("lifestyle", "Lifestyle Imagery", 500),
    PricingOption::fixed("illustration", "Illustration", 600),
    PricingOption::fixed("infographic", "Infographics", 400),
    PricingOption::quote("campaign", "Full Campaign Shoot"),
];

const IMAGE_QUANTITIES: &[PricingOption] = &[
    PricingOption::fixed("5", "5 images", 0),
    PricingOption::fixed("10", "10 images", 250),
    PricingOption::fixed("25", "25 images", 750),
    PricingOption::fixed("50", "50 images", 1500),
    PricingOption::quote("bulk", "Bulk (50+)"),
];

const IMAGE_EDITING: &[PricingOption] = &[
    PricingOption::fixed("basic", "Basic Editing", 0),
    PricingOption::fixed("advanced", "Advanced Editing", 200),
    PricingOption::fixed("premium-retouch", "Premium Retouching", 500),
];

const IMAGE_ADD_ONS: &[PricingOption] = &[
    PricingOption::fixed("background-removal", "Background Removal", 100),
    PricingOption::fixed("color-grading", "Color Grading", 150),
    PricingOption::fixed("multiple-formats", "Multiple Formats", 75),
    PricingOption::fixed("commercial-license", "Commercial License", 300),
    PricingOption::fixed("raw-files", "RAW Files", 200),
];

const IMAGE_TIMELINES: &[PricingOption] = &[
    PricingOption::speed("standard", "Standard (2 weeks)", 100),
    PricingOption::speed("express", "Express (1 week)", 125),
    PricingOption::speed("same-week", "Same Week", 150),
];

/// Image creation and photography.
pub static IMAGE: ServiceCatalog = ServiceCatalog {
    service: ServiceType::Image,
    policy: PricingPolicy::OneTimeRush,
    dimensions: &[
        Dimension::single(DimensionKey::ImageType, "Image Type", IMAGE_TYPES),
        Dimension::single(DimensionKey::Quantity, "Quantity", IMAGE_QUANTITIES),
        Dimension::single(DimensionKey::Editing, "Editing", IMAGE_EDITING),
        Dimension::multiple(DimensionKey::AddOns, "Add-ons", IMAGE_ADD_ONS),
        Dimension::timeline(DimensionKey::Timeline, "Timeline", IMAGE_TIMELINES),
    ],
};

const SOUND_TYPES: &[PricingOption] = &[
    PricingOption::fixed("jingle", "Jingle", 500),
    PricingOption::fixed("podcast-editing", "Podcast Editing", 300),
    PricingOption::fixed("sound-design", "Sound Design", 800),
    PricingOption::fixed("original-score", "Original Score", 2000),
    PricingOption::quote("full-soundtrack", "Full Soundtrack"),
];

const SOUND_LENGTHS: &[PricingOption] = &[
    PricingOption::fixed("up-to-30s", "Up to 30 seconds", 0),
    PricingOption::fixed("up-to-2min", "Up to 2 minutes", 400),
    PricingOption::fixed("up-to-5min", "Up to 5 minutes", 1000),
    PricingOption::quote("long-form", "Long-form"),
];

const SOUND_PRODUCTION: &[PricingOption] = &[
    PricingOption::fixed("standard", "Standard", 0),
    PricingOption::fixed("professional", "Professional", 500),
    PricingOption::fixed("studio", "Studio Grade", 1200),
];

const SOUND_ADD_ONS: &[PricingOption] = &[
    PricingOption::fixed("voice-talent", "Voice Talent", 400),
    PricingOption::fixed("mixing-mastering", "Mixing & Mastering", 300),
    PricingOption::fixed("stems", "Stem Files", 150),
    PricingOption::fixed("extended-license", "Extended License", 250),
];

const SOUND_TIMELINES: &[PricingOption] = &[
    PricingOption::speed("standard", "Standard (2-3 weeks)", 100),
    PricingOption::speed("priority", "Priority (1-2 weeks)", 120),
    PricingOption::speed("rush", "Rush (3-5 days)", 135),
];

/// Sound design, music and audio editing.
pub static SOUND: ServiceCatalog = ServiceCatalog {
    service: ServiceType::Sound,
    policy: PricingPolicy::OneTimeRush,
    dimensions: &[
        Dimension::single(DimensionKey::SoundType, "Sound Type", SOUND_TYPES),
        Dimension::single(DimensionKey::Length, "Length", SOUND_LENGTHS),
        Dimension::single(DimensionKey::Production, "Production", SOUND_PRODUCTION),
        Dimension::multiple(DimensionKey::AddOns, "Add-ons", SOUND_ADD_ONS),
        Dimension::timeline(DimensionKey::Timeline, "Timeline", SOUND_TIMELINES),
    ],
};
