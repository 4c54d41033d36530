//! Skills
//!
//! Command handlers and the default trigger table that wires them together.

pub mod chat;
pub mod clock;
pub mod jokes;
pub mod wikipedia;
pub mod youtube;

use crate::config::Config;
use crate::core::{Router, Rule, RuleTable, Skill};
use crate::error::AssistResult;
use std::sync::Arc;
use tracing::info;

pub use chat::{FallbackSkill, FarewellSkill, RelationshipSkill, Surface};
pub use clock::{Clock, DateSkill, SystemClock, TimeSkill};
pub use jokes::JokeSkill;
pub use wikipedia::{SummarySource, WikipediaClient, WikipediaSkill};
pub use youtube::{BrowserLauncher, Launcher, PlaySkill};

/// Priority for multi-word phrases
pub const PHRASE_PRIORITY: i32 = 10;
/// Priority for single keywords
pub const KEYWORD_PRIORITY: i32 = 0;

/// One instance of every built-in skill
#[derive(Debug, Clone)]
pub struct Skills {
    pub relationship: Arc<dyn Skill>,
    pub wikipedia: Arc<dyn Skill>,
    pub farewell: Arc<dyn Skill>,
    pub joke: Arc<dyn Skill>,
    pub play: Arc<dyn Skill>,
    pub time: Arc<dyn Skill>,
    pub date: Arc<dyn Skill>,
    pub fallback: Arc<dyn Skill>,
}

impl Skills {
    /// Built-in skills backed by the real clock, browser and Wikipedia
    pub fn from_config(config: &Config, surface: Surface) -> AssistResult<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let launcher: Arc<dyn Launcher> =
            Arc::new(BrowserLauncher::new(&config.browser_command));
        let source: Arc<dyn SummarySource> =
            Arc::new(WikipediaClient::new(&config.wikipedia_base_url)?);

        Ok(Self::with_backends(clock, launcher, source, surface))
    }

    /// Built-in skills over caller-supplied backends
    pub fn with_backends(
        clock: Arc<dyn Clock>,
        launcher: Arc<dyn Launcher>,
        source: Arc<dyn SummarySource>,
        surface: Surface,
    ) -> Self {
        Self {
            relationship: Arc::new(RelationshipSkill),
            wikipedia: Arc::new(
                WikipediaSkill::new(source).announcing(surface == Surface::Console),
            ),
            farewell: Arc::new(FarewellSkill::new(surface)),
            joke: Arc::new(JokeSkill::new()),
            play: Arc::new(PlaySkill::new(launcher)),
            time: Arc::new(TimeSkill::new(clock.clone())),
            date: Arc::new(DateSkill::new(clock)),
            fallback: Arc::new(FallbackSkill),
        }
    }

    /// Phrases first, then keywords; "play" yields to "joke"
    pub fn table(&self) -> RuleTable {
        let phrase = |trigger: &str, skill: &Arc<dyn Skill>| {
            Rule::new(trigger, skill.clone()).with_priority(PHRASE_PRIORITY)
        };
        let keyword = |trigger: &str, skill: &Arc<dyn Skill>| {
            Rule::new(trigger, skill.clone()).with_priority(KEYWORD_PRIORITY)
        };

        [
            phrase("are you single", &self.relationship),
            phrase("who the heck is", &self.wikipedia),
            phrase("tell me about", &self.wikipedia),
            phrase("goodbye", &self.farewell),
            phrase("stop listening", &self.farewell),
            keyword("joke", &self.joke),
            keyword("play", &self.play).excluding("joke"),
            keyword("time", &self.time),
            keyword("date", &self.date),
            keyword("stop", &self.farewell),
            keyword("exit", &self.farewell),
        ]
        .into_iter()
        .collect()
    }

    /// Router over the default table
    pub fn into_router(self, config: &Config) -> Router {
        let table = self.table();
        info!(
            "🧭 Router ready: {} triggers, wake word '{}', {:?} matching",
            table.len(),
            config.wake_word,
            config.match_mode
        );
        Router::new(table, self.fallback)
            .with_wake_word(&config.wake_word)
            .with_match_mode(config.match_mode)
    }
}

/// Router with the real backends for the given surface
pub fn default_router(config: &Config, surface: Surface) -> AssistResult<Router> {
    Ok(Skills::from_config(config, surface)?.into_router(config))
}
