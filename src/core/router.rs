//! Command Router
//!
//! Matches normalized command text against an ordered rule table and hands
//! the command to the first matching skill.
//!
//! **Evaluation order:** rules run by priority (highest first). Rules with the
//! same priority keep the order they were added in, so multi-word phrases can
//! be listed ahead of the single keywords they contain.

use super::text_normalizer::TextNormalizer;
use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Reply spoken when the input carries no command
pub const EMPTY_COMMAND_REPLY: &str = "Please provide a command.";

/// Output of a skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to show or speak
    pub text: String,
    /// The user asked the assistant to stop
    pub quit: bool,
}

impl Reply {
    pub fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }

    pub fn farewell(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: true,
        }
    }
}

/// A command handler
///
/// Skills own their failures: anything that goes wrong while talking to the
/// outside world comes back as apology text, never as an error.
#[async_trait]
pub trait Skill: Send + Sync + std::fmt::Debug {
    /// Handle a normalized command
    async fn handle(&self, command: &str) -> Reply;

    /// Get the skill name
    fn name(&self) -> &str;
}

/// How a trigger is compared against command text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Trigger occurs anywhere, even inside a longer word ("play" in "display")
    #[default]
    Substring,
    /// Trigger must sit on regex word boundaries (`\b`)
    WholeWord,
}

impl MatchMode {
    /// Check whether `term` occurs in `text` under this mode
    pub fn contains(self, text: &str, term: &str) -> bool {
        Term::new(term).found_in(text, self)
    }
}

/// A trigger or exclusion word, with its whole-word pattern built up front
#[derive(Debug, Clone)]
struct Term {
    text: String,
    word: Option<Regex>,
}

impl Term {
    fn new(text: &str) -> Self {
        let text = text.trim().to_lowercase();
        let pattern = format!(r"\b{}\b", regex::escape(&text));
        let word = match Regex::new(&pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Cannot build word pattern for '{}': {}", text, e);
                None
            }
        };
        Self { text, word }
    }

    fn found_in(&self, command: &str, mode: MatchMode) -> bool {
        if self.text.is_empty() {
            return false;
        }

        match mode {
            MatchMode::Substring => command.contains(&self.text),
            MatchMode::WholeWord => self.word.as_ref().is_some_and(|re| re.is_match(command)),
        }
    }
}

/// A trigger phrase bound to a skill
#[derive(Debug, Clone)]
pub struct Rule {
    trigger: Term,
    skill: Arc<dyn Skill>,
    priority: i32,
    excludes: Vec<Term>,
}

impl Rule {
    /// Create a rule with priority 0 and no exclusions
    pub fn new(trigger: &str, skill: Arc<dyn Skill>) -> Self {
        Self {
            trigger: Term::new(trigger),
            skill,
            priority: 0,
            excludes: Vec::new(),
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Skip this rule whenever `word` also appears in the command
    pub fn excluding(mut self, word: &str) -> Self {
        self.excludes.push(Term::new(word));
        self
    }

    pub fn trigger(&self) -> &str {
        &self.trigger.text
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn excludes(&self) -> impl Iterator<Item = &str> {
        self.excludes.iter().map(|t| t.text.as_str())
    }

    pub fn skill(&self) -> &Arc<dyn Skill> {
        &self.skill
    }

    /// Trigger present and no exclusion word present
    pub fn matches(&self, command: &str, mode: MatchMode) -> bool {
        if !self.trigger.found_in(command, mode) {
            return false;
        }

        if let Some(word) = self.excludes.iter().find(|w| w.found_in(command, mode)) {
            debug!(
                "Skipping trigger '{}': excluded by '{}' in '{}'",
                self.trigger.text, word.text, command
            );
            return false;
        }

        true
    }
}

/// Rules kept in evaluation order
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule behind every rule of equal or higher priority
    pub fn push(&mut self, rule: Rule) {
        let pos = self
            .rules
            .iter()
            .position(|r| r.priority < rule.priority)
            .unwrap_or(self.rules.len());
        self.rules.insert(pos, rule);
    }

    pub fn with(mut self, rule: Rule) -> Self {
        self.push(rule);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Triggers in evaluation order
    pub fn triggers(&self) -> Vec<&str> {
        self.rules.iter().map(Rule::trigger).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleTable {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut table = Self::new();
        for rule in iter {
            table.push(rule);
        }
        table
    }
}

/// Routing decision for one command
#[derive(Debug, Clone, Copy)]
pub enum Route<'a> {
    /// First matching rule
    Rule(&'a Rule),
    /// No rule matched
    Fallback,
}

/// Result of dispatching one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Normalized command text
    pub command: String,
    /// Trigger that selected the skill, if any
    pub trigger: Option<String>,
    pub reply: Reply,
}

/// Routes commands to skills
#[derive(Debug, Clone)]
pub struct Router {
    table: RuleTable,
    fallback: Arc<dyn Skill>,
    normalizer: TextNormalizer,
    mode: MatchMode,
}

impl Router {
    /// Create a router with no wake word and substring matching
    pub fn new(table: RuleTable, fallback: Arc<dyn Skill>) -> Self {
        Self {
            table,
            fallback,
            normalizer: TextNormalizer::default(),
            mode: MatchMode::Substring,
        }
    }

    pub fn with_wake_word(mut self, wake_word: &str) -> Self {
        self.normalizer = TextNormalizer::new(wake_word);
        self
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn wake_word(&self) -> Option<&str> {
        self.normalizer.wake_word()
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Pick the first rule matching an already normalized command
    pub fn route(&self, command: &str) -> Route<'_> {
        self.table
            .iter()
            .find(|rule| rule.matches(command, self.mode))
            .map_or(Route::Fallback, Route::Rule)
    }

    /// Normalize, route and run a raw command
    pub async fn dispatch(&self, text: &str) -> Dispatch {
        if TextNormalizer::is_blank(text) {
            debug!("Empty command, skipping rule scan");
            return Dispatch {
                command: String::new(),
                trigger: None,
                reply: Reply::say(EMPTY_COMMAND_REPLY),
            };
        }

        let command = self.normalize(text);
        debug!("Processing command: '{}'", command);

        match self.route(&command) {
            Route::Rule(rule) => {
                info!(
                    "🎯 Matched trigger '{}' -> {} for command: '{}'",
                    rule.trigger(),
                    rule.skill.name(),
                    command
                );
                let reply = rule.skill.handle(&command).await;
                Dispatch {
                    trigger: Some(rule.trigger().to_string()),
                    command,
                    reply,
                }
            }
            Route::Fallback => {
                debug!("No trigger matched for: '{}'", command);
                let reply = self.fallback.handle(&command).await;
                Dispatch {
                    command,
                    trigger: None,
                    reply,
                }
            }
        }
    }
}
