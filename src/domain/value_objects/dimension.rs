//! # Dimension Keys
//!
//! Closed enumeration of every pricing dimension used by the service catalogs.
//!
//! A dimension is one independent axis of choice within a wizard
//! ("platform", "timeline", ...). Keys are shared across services where the
//! meaning lines up; each catalog decides which keys it uses.

use crate::domain::value_objects::enums::ParseEnumError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! dimension_keys {
    ($($(#[$doc:meta])* $variant:ident => $id:literal),+ $(,)?) => {
        /// Identifier of a pricing dimension.
        ///
        /// Serializes to its kebab-case identifier, which is also the key used
        /// in persisted selections.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
            JsonSchema,
        )]
        pub enum DimensionKey {
            $($(#[$doc])* #[serde(rename = $id)] $variant,)+
        }

        impl DimensionKey {
            /// Every dimension key.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Returns the kebab-case identifier.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $id,)+
                }
            }
        }
    };
}

dimension_keys! {
    /// Kind of website project.
    ProjectType => "project-type",
    /// Number of pages.
    SiteSize => "site-size",
    /// Website design treatment.
    DesignStyle => "design-style",
    /// Functional add-ons.
    Features => "features",
    /// Ongoing website maintenance plan.
    Maintenance => "maintenance",
    /// Delivery speed; carries a rush multiplier.
    Timeline => "timeline",
    /// Target app platform.
    Platform => "platform",
    /// App complexity tier.
    Complexity => "complexity",
    /// App interface design level.
    Design => "design",
    /// Ongoing app support plan.
    Support => "support",
    /// Kind of animation.
    AnimationType => "animation-type",
    /// Running time of the produced media.
    Length => "length",
    /// Visual style.
    Style => "style",
    /// Generic add-ons.
    AddOns => "add-ons",
    /// Kind of imagery.
    ImageType => "image-type",
    /// Number of deliverables.
    Quantity => "quantity",
    /// Post-production editing level.
    Editing => "editing",
    /// Kind of audio work.
    SoundType => "sound-type",
    /// Production level or recurring production volume.
    Production => "production",
    /// Advertising or social platforms.
    Platforms => "platforms",
    /// Paid media management tier.
    ManagementTier => "management-tier",
    /// One-time campaign setup.
    CampaignSetup => "campaign-setup",
    /// Social posting cadence.
    PostingFrequency => "posting-frequency",
    /// Social content format mix.
    ContentMix => "content-mix",
    /// Email send volume.
    Volume => "volume",
    /// Email template work.
    TemplateDesign => "template-design",
    /// Commitment length; carries a term discount.
    Duration => "duration",
    /// Service package tier.
    Package => "package",
    /// Brand research modules.
    Research => "research",
    /// Ongoing advisory retainer.
    Advisory => "advisory",
    /// Number of logo concepts.
    LogoConcepts => "logo-concepts",
    /// Identity deliverables.
    Deliverables => "deliverables",
    /// Brand application pieces.
    Applications => "applications",
    /// Number of layout variants.
    Variants => "variants",
    /// Print handling.
    PrintProduction => "print-production",
    /// Content strategy scope.
    Strategy => "strategy",
}

impl fmt::Display for DimensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DimensionKey {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| ParseEnumError::InvalidValue("DimensionKey", s.to_string()))
    }
}
