//! # Domain Enums
//!
//! Enumeration types for configurator concepts.
//!
//! This module provides the closed enumerations used throughout the pricing engine:
//!
//! - [`ServiceType`] - The twelve configurable services
//! - [`ServiceCategory`] - Grouping of services for summary views
//! - [`Recurrence`] - One-time or monthly-recurring cost
//! - [`SelectionMode`] - Single-select or multi-select dimension
//! - [`DimensionRole`] - Priced dimension or timeline/duration multiplier
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    /// The string does not name a variant of the enum.
    #[error("invalid {0} value: {1}")]
    InvalidValue(&'static str, String),
}

/// A configurable service, one per wizard.
///
/// The string form is the kebab-case identifier used in persistence keys
/// and in serialized snapshots.
///
/// # Examples
///
/// ```
/// use quote_configurator::domain::value_objects::enums::ServiceType;
///
/// let service: ServiceType = "paid-media".parse().unwrap();
/// assert_eq!(service, ServiceType::PaidMedia);
/// assert_eq!(service.label(), "Paid Media");
/// assert_eq!(service.storage_key(), "paid-media-builder");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    /// Website design and development.
    Website,
    /// Mobile application development.
    App,
    /// Animation and motion graphics.
    Animation,
    /// Image creation and photography.
    Image,
    /// Sound design, music and audio editing.
    Sound,
    /// Paid advertising management.
    PaidMedia,
    /// Social media management.
    SocialMedia,
    /// Email marketing campaigns.
    EmailMarketing,
    /// Brand strategy engagements.
    BrandStrategy,
    /// Logo and visual identity design.
    VisualIdentity,
    /// Brand collateral and applications.
    BrandApplications,
    /// Content strategy and production.
    ContentStrategy,
}

impl ServiceType {
    /// Every service type, in catalog order.
    pub const ALL: [Self; 12] = [
        Self::Website,
        Self::App,
        Self::Animation,
        Self::Image,
        Self::Sound,
        Self::PaidMedia,
        Self::SocialMedia,
        Self::EmailMarketing,
        Self::BrandStrategy,
        Self::VisualIdentity,
        Self::BrandApplications,
        Self::ContentStrategy,
    ];

    /// Returns the kebab-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::App => "app",
            Self::Animation => "animation",
            Self::Image => "image",
            Self::Sound => "sound",
            Self::PaidMedia => "paid-media",
            Self::SocialMedia => "social-media",
            Self::EmailMarketing => "email-marketing",
            Self::BrandStrategy => "brand-strategy",
            Self::VisualIdentity => "visual-identity",
            Self::BrandApplications => "brand-applications",
            Self::ContentStrategy => "content-strategy",
        }
    }

    /// Returns the display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::App => "App",
            Self::Animation => "Animation",
            Self::Image => "Image",
            Self::Sound => "Sound",
            Self::PaidMedia => "Paid Media",
            Self::SocialMedia => "Social Media",
            Self::EmailMarketing => "Email Marketing",
            Self::BrandStrategy => "Brand Strategy",
            Self::VisualIdentity => "Visual Identity",
            Self::BrandApplications => "Brand Applications",
            Self::ContentStrategy => "Content Strategy",
        }
    }

    /// Returns the category this service is listed under.
    #[must_use]
    pub const fn category(self) -> ServiceCategory {
        match self {
            Self::Website | Self::App => ServiceCategory::Digital,
            Self::Animation | Self::Image | Self::Sound => ServiceCategory::Creative,
            Self::PaidMedia | Self::SocialMedia | Self::EmailMarketing => {
                ServiceCategory::Marketing
            }
            Self::BrandStrategy
            | Self::VisualIdentity
            | Self::BrandApplications
            | Self::ContentStrategy => ServiceCategory::Brand,
        }
    }

    /// Position of this service in summary views (lower comes first).
    ///
    /// Brand foundations lead, followed by digital builds, creative
    /// production and ongoing marketing.
    #[must_use]
    pub const fn display_priority(self) -> u8 {
        match self {
            Self::BrandStrategy => 0,
            Self::VisualIdentity => 1,
            Self::BrandApplications => 2,
            Self::Website => 3,
            Self::App => 4,
            Self::ContentStrategy => 5,
            Self::Animation => 6,
            Self::Image => 7,
            Self::Sound => 8,
            Self::SocialMedia => 9,
            Self::PaidMedia => 10,
            Self::EmailMarketing => 11,
        }
    }

    /// Persistence key for this service's wizard state.
    #[must_use]
    pub fn storage_key(self) -> String {
        format!("{}-builder", self.as_str())
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|service| service.as_str() == normalized)
            .ok_or_else(|| ParseEnumError::InvalidValue("ServiceType", s.to_string()))
    }
}

/// Grouping of services for navigation and summary views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceCategory {
    /// Websites and apps.
    Digital,
    /// Animation, image and sound production.
    Creative,
    /// Paid, social and email marketing.
    Marketing,
    /// Strategy, identity, applications and content.
    Brand,
}

impl ServiceCategory {
    /// Every category, in navigation order.
    pub const ALL: [Self; 4] = [Self::Digital, Self::Creative, Self::Marketing, Self::Brand];

    /// Returns the services in this category, in catalog order.
    #[must_use]
    pub fn services(self) -> Vec<ServiceType> {
        ServiceType::ALL
            .into_iter()
            .filter(|service| service.category() == self)
            .collect()
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digital => write!(f, "DIGITAL"),
            Self::Creative => write!(f, "CREATIVE"),
            Self::Marketing => write!(f, "MARKETING"),
            Self::Brand => write!(f, "BRAND"),
        }
    }
}

impl FromStr for ServiceCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DIGITAL" => Ok(Self::Digital),
            "CREATIVE" => Ok(Self::Creative),
            "MARKETING" => Ok(Self::Marketing),
            "BRAND" => Ok(Self::Brand),
            _ => Err(ParseEnumError::InvalidValue("ServiceCategory", s.to_string())),
        }
    }
}

/// Billing recurrence of an option's price.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recurrence {
    /// Charged once.
    #[default]
    OneTime,
    /// Charged every month.
    Monthly,
}

impl Recurrence {
    /// Returns true if this is a monthly charge.
    #[inline]
    #[must_use]
    pub const fn is_monthly(self) -> bool {
        matches!(self, Self::Monthly)
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneTime => write!(f, "ONE_TIME"),
            Self::Monthly => write!(f, "MONTHLY"),
        }
    }
}

impl FromStr for Recurrence {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "ONE_TIME" | "ONETIME" => Ok(Self::OneTime),
            "MONTHLY" => Ok(Self::Monthly),
            _ => Err(ParseEnumError::InvalidValue("Recurrence", s.to_string())),
        }
    }
}

/// How many options of a dimension may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionMode {
    /// Exactly one option (or none yet).
    Single,
    /// Zero or more add-ons.
    Multiple,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "SINGLE"),
            Self::Multiple => write!(f, "MULTIPLE"),
        }
    }
}

/// What a dimension contributes to the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DimensionRole {
    /// Options add their price to a subtotal bucket.
    Priced,
    /// Options carry a multiplier applied after all priced dimensions.
    Timeline,
}

impl fmt::Display for DimensionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Priced => write!(f, "PRICED"),
            Self::Timeline => write!(f, "TIMELINE"),
        }
    }
}
