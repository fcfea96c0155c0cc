//! Scripted assistant replies.

use minijinja::{Environment, context};
use tracing::{debug, error};

use super::model::ChatExchange;
use super::rules::{
    FALLBACK_SUGGESTIONS, FALLBACK_TEMPLATE, RESPONSE_RULES, ResponseRule, WELCOME_SUGGESTIONS,
    WELCOME_TEMPLATE,
};
use crate::region::Region;

const WELCOME: &str = "welcome";
const FALLBACK: &str = "fallback";

/// Produces canned assistant replies from an ordered rule table.
///
/// `respond` is a pure function of `(input, region)` and the table, apart
/// from the generated exchange id and timestamp.
pub struct CannedResponseDispatcher {
    rules: &'static [ResponseRule],
    templates: Environment<'static>,
}

impl Default for CannedResponseDispatcher {
    fn default() -> Self {
        Self::with_rules(RESPONSE_RULES)
    }
}

impl CannedResponseDispatcher {
    /// Creates a dispatcher over the built-in rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dispatcher over a custom rule table, evaluated in slice order.
    pub fn with_rules(rules: &'static [ResponseRule]) -> Self {
        let mut templates = Environment::new();
        let sources = [(WELCOME, WELCOME_TEMPLATE), (FALLBACK, FALLBACK_TEMPLATE)]
            .into_iter()
            .chain(rules.iter().map(|rule| (rule.name(), rule.template)));
        for (name, source) in sources {
            if let Err(e) = templates.add_template(name, source) {
                error!(template = name, error = %e, "Invalid reply template");
            }
        }

        Self { rules, templates }
    }

    /// Returns the first rule, in table order, whose keywords occur in `input`.
    pub fn match_rule(&self, input: &str) -> Option<&'static ResponseRule> {
        let lowered = input.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    /// Answers `input` for `region`.
    ///
    /// Callers are expected to skip blank input.
    pub fn respond(&self, input: &str, region: Region) -> ChatExchange {
        match self.match_rule(input) {
            Some(rule) => {
                debug!(topic = rule.name(), region = %region, "Matched response rule");
                ChatExchange::assistant(
                    self.render(rule.name(), rule.template, input, region),
                    to_strings(rule.suggestions),
                    rule.recommendations
                        .iter()
                        .map(|template| template.build(region))
                        .collect(),
                )
            }
            None => {
                debug!(region = %region, "No response rule matched");
                ChatExchange::assistant(
                    self.render(FALLBACK, FALLBACK_TEMPLATE, input, region),
                    to_strings(FALLBACK_SUGGESTIONS),
                    Vec::new(),
                )
            }
        }
    }

    /// The greeting that opens a conversation in `region`.
    pub fn welcome(&self, region: Region) -> ChatExchange {
        ChatExchange::assistant(
            self.render(WELCOME, WELCOME_TEMPLATE, "", region),
            to_strings(WELCOME_SUGGESTIONS),
            Vec::new(),
        )
    }

    fn render(&self, name: &str, source: &str, input: &str, region: Region) -> String {
        let ctx = context! {
            input => input,
            region => region.display_name(),
            currency => region.currency_symbol(),
            city => region.primary_city(),
        };
        self.templates
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .unwrap_or_else(|e| {
                error!(template = name, error = %e, "Failed to render reply");
                source.to_string()
            })
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::model::ChatAuthor;
    use crate::chat::rules::Topic;

    fn topic_of(dispatcher: &CannedResponseDispatcher, input: &str) -> Option<Topic> {
        dispatcher.match_rule(input).map(|rule| rule.topic)
    }

    #[test]
    fn test_plumbing_matches_regardless_of_case() {
        let dispatcher = CannedResponseDispatcher::new();
        assert_eq!(topic_of(&dispatcher, "I have a leaky pipe"), Some(Topic::Plumbing));
        assert_eq!(topic_of(&dispatcher, "I HAVE A LEAKY PIPE"), Some(Topic::Plumbing));
        assert_eq!(topic_of(&dispatcher, "Need a PlUmBeR asap"), Some(Topic::Plumbing));
    }

    #[test]
    fn test_cleaning_matches() {
        let dispatcher = CannedResponseDispatcher::new();
        assert_eq!(
            topic_of(&dispatcher, "need a cleaner for my house"),
            Some(Topic::Cleaning)
        );
    }

    #[test]
    fn test_supplementary_topics_match_quick_requests() {
        let dispatcher = CannedResponseDispatcher::new();
        assert_eq!(topic_of(&dispatcher, "Electrician"), Some(Topic::Electrical));
        assert_eq!(topic_of(&dispatcher, "Landscaping"), Some(Topic::Landscaping));
        assert_eq!(topic_of(&dispatcher, "Car repair"), Some(Topic::AutoRepair));
        assert_eq!(topic_of(&dispatcher, "Photography"), Some(Topic::Photography));
    }

    #[test]
    fn test_first_rule_in_table_order_wins() {
        let dispatcher = CannedResponseDispatcher::new();
        // Both orders of mention resolve to the rule listed first.
        assert_eq!(topic_of(&dispatcher, "clean the pipe"), Some(Topic::Plumbing));
        assert_eq!(topic_of(&dispatcher, "plumb the house, then clean it"), Some(Topic::Plumbing));
        assert_eq!(
            topic_of(&dispatcher, "clean the garden after the wedding"),
            Some(Topic::Cleaning)
        );
    }

    #[test]
    fn test_custom_table_order_is_respected() {
        static REVERSED: [ResponseRule; 2] = [
            ResponseRule {
                topic: Topic::Cleaning,
                keywords: &["clean"],
                template: "cleaning in {{ region }}",
                recommendations: &[],
                suggestions: &[],
            },
            ResponseRule {
                topic: Topic::Plumbing,
                keywords: &["plumb"],
                template: "plumbing in {{ region }}",
                recommendations: &[],
                suggestions: &[],
            },
        ];
        let dispatcher = CannedResponseDispatcher::with_rules(&REVERSED);

        let reply = dispatcher.respond("plumb and clean", Region::Jamaica);

        assert_eq!(reply.text, "cleaning in Jamaica");
    }

    #[test]
    fn test_fallback_echoes_input() {
        let dispatcher = CannedResponseDispatcher::new();
        let reply = dispatcher.respond("xyzzy unrelated text", Region::Jamaica);

        assert_eq!(reply.author, ChatAuthor::Assistant);
        assert_eq!(
            reply.text,
            "I understand you're looking for \"xyzzy unrelated text\". Let me search for the best service providers in Jamaica for you. What specific details can you share about what you need?"
        );
        assert_eq!(reply.suggestions, to_strings(FALLBACK_SUGGESTIONS));
        assert!(reply.recommendations.is_empty());
    }

    #[test]
    fn test_plumbing_reply_for_cayman() {
        let dispatcher = CannedResponseDispatcher::new();
        let reply = dispatcher.respond("My pipe is leaking, help!", Region::Cayman);

        assert_eq!(reply.author, ChatAuthor::Assistant);
        assert_eq!(
            reply.text,
            "I found several excellent plumbers in Cayman Islands. Here are my top recommendations based on ratings, availability, and proximity to you (prices in CI$):"
        );
        assert_eq!(
            reply.suggestions,
            vec![
                "Book emergency service",
                "Compare prices",
                "Read reviews",
                "Schedule consultation",
            ]
        );

        let titles: Vec<&str> = reply.recommendations.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Emergency Plumbing Repair", "Pipe Installation & Repair"]);
        assert_eq!(reply.recommendations[0].attributed_name, "Marcus Johnson");
        assert_eq!(reply.recommendations[0].display_price, "CI$120/hr");
        assert_eq!(reply.recommendations[1].display_price, "CI$95/hr");
        assert_eq!(reply.recommendations[1].availability_label, "Available today");
    }

    #[test]
    fn test_cleaning_prices_follow_region() {
        let dispatcher = CannedResponseDispatcher::new();
        let cayman = dispatcher.respond("house cleaning", Region::Cayman);
        let jamaica = dispatcher.respond("house cleaning", Region::Jamaica);

        assert_eq!(cayman.recommendations[0].display_price, "CI$80");
        assert_eq!(jamaica.recommendations[0].display_price, "J$5,500");
        assert!(jamaica.text.contains("Jamaica"));
        assert!(jamaica.text.contains("J$"));
    }

    #[test]
    fn test_city_is_interpolated() {
        let dispatcher = CannedResponseDispatcher::new();
        let reply = dispatcher.respond("my breaker keeps tripping", Region::Jamaica);
        assert!(reply.text.starts_with("Licensed electricians are available around Kingston, Jamaica."));
    }

    #[test]
    fn test_respond_is_pure_apart_from_identity() {
        let dispatcher = CannedResponseDispatcher::new();
        for input in ["I have a leaky pipe", "xyzzy unrelated text", "wedding photos"] {
            let first = dispatcher.respond(input, Region::Jamaica);
            let second = dispatcher.respond(input, Region::Jamaica);
            assert!(first.same_content(&second), "{input}");
            assert_ne!(first.id, second.id);
        }
    }

    #[test]
    fn test_fallback_input_is_not_template_source() {
        let dispatcher = CannedResponseDispatcher::new();
        let reply = dispatcher.respond("{{ region }}", Region::Cayman);
        assert!(reply.text.contains("\"{{ region }}\""));
    }

    #[test]
    fn test_welcome_names_region() {
        let dispatcher = CannedResponseDispatcher::new();
        let welcome = dispatcher.welcome(Region::Jamaica);
        assert!(welcome.text.contains("perfect service provider in Jamaica"));
        assert_eq!(welcome.suggestions.len(), WELCOME_SUGGESTIONS.len());
    }
}
