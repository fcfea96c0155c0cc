//! Assistant chat domain.
//!
//! - `model`: conversation records (`ChatExchange`, `ChatAuthor`, `RecommendationItem`)
//! - `rules`: the ordered canned-response rule table
//! - `dispatcher`: `CannedResponseDispatcher`, input → scripted reply
//! - `session`: `ChatSession`, the append-only conversation

mod dispatcher;
mod model;
mod rules;
mod session;

pub use dispatcher::CannedResponseDispatcher;
pub use model::{ChatAuthor, ChatExchange, RecommendationItem};
pub use rules::{
    FALLBACK_SUGGESTIONS, RESPONSE_RULES, RecommendationTemplate, ResponseRule, Topic,
    WELCOME_SUGGESTIONS,
};
pub use session::{ChatSession, QUICK_REQUESTS};
