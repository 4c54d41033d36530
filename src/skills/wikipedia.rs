//! Wikipedia lookups
//!
//! Fetches the page summary from the Wikipedia REST API and answers with its
//! first sentence.

use crate::core::{Reply, Skill};
use crate::error::{AssistError, AssistResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Phrases removed from the command to get the search subject
const LOOKUP_PREFIXES: &[&str] = &["who the heck is", "tell me about"];

/// Something that can summarize a topic
#[async_trait]
pub trait SummarySource: Send + Sync + std::fmt::Debug {
    /// Full summary text for an exact page title
    async fn summary(&self, title: &str) -> AssistResult<String>;
}

/// `/page/summary` response (only the parts we read)
#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(default)]
    extract: String,
}

/// Wikipedia REST API client
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    base_url: String,
    client: reqwest::Client,
}

impl WikipediaClient {
    pub fn new(base_url: &str) -> AssistResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("assistkit/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn summary_url(&self, title: &str) -> String {
        let title = title.trim().replace(' ', "_");
        format!(
            "{}/page/summary/{}",
            self.base_url,
            urlencoding::encode(&title)
        )
    }
}

#[async_trait]
impl SummarySource for WikipediaClient {
    async fn summary(&self, title: &str) -> AssistResult<String> {
        let url = self.summary_url(title);
        debug!("📚 Wikipedia request: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AssistError::NotFound(title.to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AssistError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let page: PageSummary = response.json().await?;
        if page.extract.trim().is_empty() {
            return Err(AssistError::NotFound(title.to_string()));
        }
        Ok(page.extract)
    }
}

/// Cut a summary down to its first sentence
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace and an
/// upper-case letter, or at the end of the text.
pub fn first_sentence(text: &str) -> &str {
    let text = text.trim();
    for (idx, c) in text.char_indices() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let rest = &text[idx + c.len_utf8()..];
        let trimmed = rest.trim_start();
        let spaced = trimmed.len() < rest.len();
        if spaced && trimmed.chars().next().is_some_and(char::is_uppercase) {
            return &text[..idx + c.len_utf8()];
        }
    }

    text
}

/// Extract the subject from a lookup command
pub fn lookup_subject(command: &str) -> String {
    LOOKUP_PREFIXES
        .iter()
        .fold(command.to_string(), |acc, prefix| acc.replace(prefix, ""))
        .trim()
        .to_string()
}

/// Answers "who the heck is ..." and "tell me about ..."
#[derive(Debug)]
pub struct WikipediaSkill {
    source: Arc<dyn SummarySource>,
    announce: bool,
}

impl WikipediaSkill {
    pub fn new(source: Arc<dyn SummarySource>) -> Self {
        Self {
            source,
            announce: false,
        }
    }

    /// Lead every answer with "Searching Wikipedia for <subject>."
    pub fn announcing(mut self, announce: bool) -> Self {
        self.announce = announce;
        self
    }
}

#[async_trait]
impl Skill for WikipediaSkill {
    async fn handle(&self, command: &str) -> Reply {
        let person = lookup_subject(command);
        if person.is_empty() {
            return Reply::say("Please tell me who you want to search for.");
        }

        info!("📚 Searching Wikipedia for {}", person);
        let answer = match self.source.summary(&person).await {
            Ok(summary) => first_sentence(&summary).to_string(),
            Err(AssistError::NotFound(_)) => format!(
                "Sorry, I couldn't find any Wikipedia information about {}.",
                person
            ),
            Err(e) => {
                warn!("❌ Wikipedia lookup failed for '{}': {}", person, e);
                "Sorry, I ran into an error fetching that information.".to_string()
            }
        };

        if self.announce {
            Reply::say(format!("Searching Wikipedia for {}. {}", person, answer))
        } else {
            Reply::say(answer)
        }
    }

    fn name(&self) -> &str {
        "wikipedia"
    }
}
