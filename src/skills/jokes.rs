//! Canned jokes

use crate::core::{Reply, Skill};
use async_trait::async_trait;
use rand::seq::SliceRandom;

const JOKES: &[&str] = &[
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "There are 10 kinds of people in the world: those who understand binary and those who don't.",
    "A SQL query walks into a bar, goes up to two tables and asks: can I join you?",
    "Why did the developer go broke? Because they used up all their cache.",
    "I would tell you a UDP joke, but you might not get it.",
    "Debugging is like being the detective in a crime movie where you are also the murderer.",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem.",
    "Why do Java developers wear glasses? Because they don't C sharp.",
    "The two hardest problems in computer science are cache invalidation, naming things, and off-by-one errors.",
    "My code doesn't have bugs. It just develops random unexpected features.",
];

/// Tells a random joke from a fixed list
#[derive(Debug, Clone)]
pub struct JokeSkill {
    jokes: Vec<String>,
}

impl Default for JokeSkill {
    fn default() -> Self {
        Self::new()
    }
}

impl JokeSkill {
    pub fn new() -> Self {
        Self::with_jokes(JOKES.iter().map(|j| j.to_string()).collect())
    }

    pub fn with_jokes(jokes: Vec<String>) -> Self {
        Self { jokes }
    }

    pub fn jokes(&self) -> &[String] {
        &self.jokes
    }
}

#[async_trait]
impl Skill for JokeSkill {
    async fn handle(&self, _command: &str) -> Reply {
        let joke = self.jokes.choose(&mut rand::thread_rng()).cloned();
        Reply::say(joke.unwrap_or_else(|| "I'm all out of jokes right now.".to_string()))
    }

    fn name(&self) -> &str {
        "joke"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_joke_comes_from_list() {
        let skill = JokeSkill::new();
        for _ in 0..20 {
            let reply = skill.handle("tell me a joke").await;
            assert!(skill.jokes().contains(&reply.text));
            assert!(!reply.quit);
        }
    }

    #[tokio::test]
    async fn test_empty_joke_list() {
        let skill = JokeSkill::with_jokes(Vec::new());
        assert_eq!(
            skill.handle("joke").await.text,
            "I'm all out of jokes right now."
        );
    }
}
