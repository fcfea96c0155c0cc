//! Conversation records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who wrote an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatAuthor {
    User,
    Assistant,
}

/// A display-only service card attached to an assistant reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationItem {
    pub id: String,
    pub title: String,
    /// Provider the service is offered by.
    pub attributed_name: String,
    pub rating: f32,
    /// Price already formatted in the region's currency.
    pub display_price: String,
    pub image_reference: String,
    pub availability_label: String,
    pub category: String,
}

/// One message in a conversation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    pub id: String,
    pub author: ChatAuthor,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<RecommendationItem>,
}

impl ChatExchange {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatAuthor::User, text.into(), Vec::new(), Vec::new())
    }

    pub fn assistant(
        text: impl Into<String>,
        suggestions: Vec<String>,
        recommendations: Vec<RecommendationItem>,
    ) -> Self {
        Self::new(ChatAuthor::Assistant, text.into(), suggestions, recommendations)
    }

    fn new(
        author: ChatAuthor,
        text: String,
        suggestions: Vec<String>,
        recommendations: Vec<RecommendationItem>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author,
            text,
            timestamp: Utc::now(),
            suggestions,
            recommendations,
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.author == ChatAuthor::User
    }

    /// Compares everything except the generated `id` and `timestamp`.
    pub fn same_content(&self, other: &ChatExchange) -> bool {
        self.author == other.author
            && self.text == other.text
            && self.suggestions == other.suggestions
            && self.recommendations == other.recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_exchange() {
        let exchange = ChatExchange::user("hello");
        assert!(exchange.is_from_user());
        assert_eq!(exchange.text, "hello");
        assert!(exchange.suggestions.is_empty());
        assert!(exchange.recommendations.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let first = ChatExchange::user("hello");
        let second = ChatExchange::user("hello");
        assert_ne!(first.id, second.id);
        assert!(first.same_content(&second));
    }

    #[test]
    fn test_serialization_skips_empty_lists() {
        let exchange = ChatExchange::assistant("hi", Vec::new(), Vec::new());
        let json = serde_json::to_value(&exchange).unwrap();
        assert_eq!(json["author"], "assistant");
        assert!(json.get("suggestions").is_none());
        assert!(json.get("recommendations").is_none());
    }
}
