//! Assistant conversation.

use tracing::debug;

use super::dispatcher::CannedResponseDispatcher;
use super::model::ChatExchange;
use crate::region::Region;

/// Popular requests offered before the user has typed anything.
pub const QUICK_REQUESTS: &[&str] = &[
    "Find a plumber",
    "House cleaning",
    "Car repair",
    "Photography",
    "Landscaping",
    "Electrician",
];

/// An append-only conversation with the scripted assistant.
///
/// Opens with a welcome exchange for the session's region. Nothing is
/// persisted; the history lives as long as the session.
pub struct ChatSession {
    region: Region,
    dispatcher: CannedResponseDispatcher,
    exchanges: Vec<ChatExchange>,
}

impl ChatSession {
    pub fn new(region: Region) -> Self {
        Self::with_dispatcher(region, CannedResponseDispatcher::new())
    }

    pub fn with_dispatcher(region: Region, dispatcher: CannedResponseDispatcher) -> Self {
        let welcome = dispatcher.welcome(region);
        Self {
            region,
            dispatcher,
            exchanges: vec![welcome],
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn exchanges(&self) -> &[ChatExchange] {
        &self.exchanges
    }

    /// True until the user has sent something.
    pub fn shows_quick_requests(&self) -> bool {
        self.exchanges.len() <= 1
    }

    /// Appends `text` and the assistant's reply, returning the reply.
    ///
    /// Input that is blank after trimming is ignored.
    pub fn submit(&mut self, text: &str) -> Option<&ChatExchange> {
        if text.trim().is_empty() {
            return None;
        }

        self.exchanges.push(ChatExchange::user(text));
        let reply = self.dispatcher.respond(text, self.region);
        self.exchanges.push(reply);
        debug!(count = self.exchanges.len(), "Assistant replied");
        self.exchanges.last()
    }

    /// Restarts the conversation for another region.
    pub fn switch_region(&mut self, region: Region) {
        self.region = region;
        self.exchanges = vec![self.dispatcher.welcome(region)];
    }
}
