//! Product Catalog
//!
//! The fixed set of purchasable tiers. Tier keys are referenced by client
//! pages, so they are part of the public contract and must not change.

use std::str::FromStr;

use crate::error::{PaymentError, Result};

/// Product tiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Basic,
    Pro,
    Elite,
}

impl Tier {
    /// Every tier, in display order
    pub const ALL: [Tier; 3] = [Tier::Basic, Tier::Pro, Tier::Elite];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Basic => "basic",
            Tier::Pro => "pro",
            Tier::Elite => "elite",
        }
    }
}

impl FromStr for Tier {
    type Err = PaymentError;

    /// Exact, case-sensitive match on the tier key.
    fn from_str(s: &str) -> Result<Self> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| PaymentError::InvalidTier(s.to_string()))
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A priced product offering
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Offering {
    pub tier: Tier,

    /// Display name shown on the hosted payment page
    pub name: &'static str,

    /// Price in cents
    pub amount_minor_units: i64,

    pub description: &'static str,
}

static OFFERINGS: [Offering; 3] = [
    Offering {
        tier: Tier::Basic,
        name: "Neuro-Dashboard Basic",
        amount_minor_units: 9700, // $97.00
        description: "AI-powered cognitive performance tracking dashboard with personalized neuroscience protocols and biometric insights.",
    },
    Offering {
        tier: Tier::Pro,
        name: "Neuro-Dashboard Pro",
        amount_minor_units: 19700, // $197.00
        description: "Complete autonomous content pipeline blueprint. Scripts, templates, workflows, and automation recipes included.",
    },
    Offering {
        tier: Tier::Elite,
        name: "Neuro-Dashboard Elite",
        amount_minor_units: 29700, // $297.00
        description: "Custom AI automation setup for your small business. Local infrastructure deployment, workflow configuration, and training.",
    },
];

/// Read-only view over the offerings
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    offerings: &'static [Offering],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The catalog served in production
    pub fn standard() -> Self {
        Self { offerings: &OFFERINGS }
    }

    /// Resolve a tier key to its offering
    pub fn lookup(&self, key: &str) -> Result<&'static Offering> {
        let tier: Tier = key.parse()?;
        self.get(tier)
            .ok_or_else(|| PaymentError::InvalidTier(key.to_string()))
    }

    pub fn get(&self, tier: Tier) -> Option<&'static Offering> {
        self.offerings.iter().find(|o| o.tier == tier)
    }

    pub fn offerings(&self) -> &'static [Offering] {
        self.offerings
    }
}
