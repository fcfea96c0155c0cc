//! Canned-response rule table.
//!
//! Rules are evaluated top-down against the lower-cased input and the first
//! rule with a matching keyword wins. Table order is observable behavior: an
//! input mentioning both a leak and a cleaner is answered as plumbing because
//! plumbing is listed first. Do not sort or score these.

use serde::Serialize;
use strum::{Display, IntoStaticStr};

use super::model::RecommendationItem;
use crate::region::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    Plumbing,
    Cleaning,
    Electrical,
    Landscaping,
    AutoRepair,
    Photography,
}

/// Static description of a recommendation card; prices are per region.
#[derive(Debug)]
pub struct RecommendationTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub provider: &'static str,
    pub rating: f32,
    /// Amount without currency symbol, Cayman Islands.
    pub cayman_price: &'static str,
    /// Amount without currency symbol, Jamaica.
    pub jamaica_price: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    pub availability: &'static str,
}

impl RecommendationTemplate {
    pub fn build(&self, region: Region) -> RecommendationItem {
        let amount = match region {
            Region::Cayman => self.cayman_price,
            Region::Jamaica => self.jamaica_price,
        };
        RecommendationItem {
            id: self.id.to_string(),
            title: self.title.to_string(),
            attributed_name: self.provider.to_string(),
            rating: self.rating,
            display_price: region.price(amount),
            image_reference: self.image.to_string(),
            availability_label: self.availability.to_string(),
            category: self.category.to_string(),
        }
    }
}

/// One keyword group and the reply it produces.
#[derive(Debug)]
pub struct ResponseRule {
    pub topic: Topic,
    /// Lower-case substrings; any one of them selects this rule.
    pub keywords: &'static [&'static str],
    /// Reply template. Variables: `region`, `currency`, `city`.
    pub template: &'static str,
    pub recommendations: &'static [RecommendationTemplate],
    pub suggestions: &'static [&'static str],
}

impl ResponseRule {
    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }

    pub fn name(&self) -> &'static str {
        self.topic.into()
    }
}

pub const WELCOME_TEMPLATE: &str = "Hello! I'm your Antillas AI assistant. I'm here to help you find the perfect service provider in {{ region }}. What do you need help with today?";

pub const WELCOME_SUGGESTIONS: &[&str] = &[
    "Find home services",
    "Emergency repairs",
    "Schedule maintenance",
    "Browse categories",
];

/// Variables: `input`, `region`.
pub const FALLBACK_TEMPLATE: &str = "I understand you're looking for \"{{ input }}\". Let me search for the best service providers in {{ region }} for you. What specific details can you share about what you need?";

pub const FALLBACK_SUGGESTIONS: &[&str] = &[
    "More details",
    "Browse categories",
    "Emergency service",
    "Schedule later",
];

const PLUMBING_IMAGE: &str =
    "https://images.unsplash.com/photo-1581578731548-c64695cc6952?w=150&h=100&fit=crop";
const PIPE_IMAGE: &str =
    "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=150&h=100&fit=crop";

pub const RESPONSE_RULES: &[ResponseRule] = &[
    ResponseRule {
        topic: Topic::Plumbing,
        keywords: &["plumb", "leak", "pipe"],
        template: "I found several excellent plumbers in {{ region }}. Here are my top recommendations based on ratings, availability, and proximity to you (prices in {{ currency }}):",
        recommendations: &[
            RecommendationTemplate {
                id: "1",
                title: "Emergency Plumbing Repair",
                provider: "Marcus Johnson",
                rating: 4.9,
                cayman_price: "120/hr",
                jamaica_price: "8,500/hr",
                image: PLUMBING_IMAGE,
                category: "Plumbing",
                availability: "Available now",
            },
            RecommendationTemplate {
                id: "2",
                title: "Pipe Installation & Repair",
                provider: "Island Plumbing Co.",
                rating: 4.7,
                cayman_price: "95/hr",
                jamaica_price: "7,200/hr",
                image: PIPE_IMAGE,
                category: "Plumbing",
                availability: "Available today",
            },
        ],
        suggestions: &[
            "Book emergency service",
            "Compare prices",
            "Read reviews",
            "Schedule consultation",
        ],
    },
    ResponseRule {
        topic: Topic::Cleaning,
        keywords: &["clean", "house", "maid"],
        template: "Great! I've found trusted house cleaning services in {{ region }}. All providers are verified and have excellent customer reviews (prices in {{ currency }}):",
        recommendations: &[RecommendationTemplate {
            id: "3",
            title: "Deep House Cleaning",
            provider: "Caribbean Clean Co.",
            rating: 4.8,
            cayman_price: "80",
            jamaica_price: "5,500",
            image: PLUMBING_IMAGE,
            category: "Cleaning",
            availability: "Available tomorrow",
        }],
        suggestions: &[
            "Book weekly cleaning",
            "One-time deep clean",
            "Compare packages",
            "See availability",
        ],
    },
    ResponseRule {
        topic: Topic::Electrical,
        keywords: &["electric", "wiring", "outlet", "breaker"],
        template: "Licensed electricians are available around {{ city }}, {{ region }}. These providers handle wiring, outlets and panel upgrades (prices in {{ currency }}):",
        recommendations: &[
            RecommendationTemplate {
                id: "4",
                title: "Electrical Troubleshooting",
                provider: "Bright Spark Electric",
                rating: 4.8,
                cayman_price: "110/hr",
                jamaica_price: "7,800/hr",
                image: "assets/services/electrical.jpg",
                category: "Electrical",
                availability: "Available today",
            },
            RecommendationTemplate {
                id: "5",
                title: "Panel & Wiring Upgrade",
                provider: "Devon Clarke",
                rating: 4.6,
                cayman_price: "450",
                jamaica_price: "32,000",
                image: "assets/services/wiring.jpg",
                category: "Electrical",
                availability: "Available this week",
            },
        ],
        suggestions: &[
            "Book an inspection",
            "Emergency callout",
            "Compare prices",
            "Read reviews",
        ],
    },
    ResponseRule {
        topic: Topic::Landscaping,
        keywords: &["landscap", "lawn", "garden", "yard"],
        template: "Here are top-rated landscapers serving {{ city }} and the rest of {{ region }} (prices in {{ currency }}):",
        recommendations: &[RecommendationTemplate {
            id: "6",
            title: "Lawn & Garden Care",
            provider: "Tropical Greens",
            rating: 4.7,
            cayman_price: "65/visit",
            jamaica_price: "4,500/visit",
            image: "assets/services/landscaping.jpg",
            category: "Landscaping",
            availability: "Available tomorrow",
        }],
        suggestions: &[
            "Weekly maintenance",
            "One-time cleanup",
            "Get a quote",
            "See portfolio",
        ],
    },
    ResponseRule {
        topic: Topic::AutoRepair,
        keywords: &["mechanic", "car repair", "engine", "tire"],
        template: "I found reliable mechanics near {{ city }}, {{ region }}. Some of them offer mobile service at your location (prices in {{ currency }}):",
        recommendations: &[
            RecommendationTemplate {
                id: "7",
                title: "Mobile Mechanic Service",
                provider: "Andre's Auto Care",
                rating: 4.8,
                cayman_price: "90/hr",
                jamaica_price: "6,000/hr",
                image: "assets/services/mechanic.jpg",
                category: "Auto Repair",
                availability: "Available now",
            },
            RecommendationTemplate {
                id: "8",
                title: "Tire & Brake Service",
                provider: "Island Tire Centre",
                rating: 4.5,
                cayman_price: "75",
                jamaica_price: "5,000",
                image: "assets/services/tires.jpg",
                category: "Auto Repair",
                availability: "Available today",
            },
        ],
        suggestions: &[
            "Book a diagnostic",
            "Request mobile service",
            "Compare prices",
            "Read reviews",
        ],
    },
    ResponseRule {
        topic: Topic::Photography,
        keywords: &["photo", "camera", "wedding"],
        template: "These photographers in {{ region }} come highly recommended for events and portraits (prices in {{ currency }}):",
        recommendations: &[RecommendationTemplate {
            id: "9",
            title: "Event & Portrait Photography",
            provider: "Sunset Lens Studio",
            rating: 4.9,
            cayman_price: "250/session",
            jamaica_price: "18,000/session",
            image: "assets/services/photography.jpg",
            category: "Photography",
            availability: "Booking next week",
        }],
        suggestions: &[
            "View portfolio",
            "Check dates",
            "Compare packages",
            "Request a quote",
        ],
    },
];
