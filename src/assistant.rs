//! Interactive assistant loop
//!
//! Reads one utterance per line, routes it and speaks the reply until the
//! input ends or the user says goodbye.

use crate::core::{Reply, Router};
use crate::tts::TtsEngine;
use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// A skill asked to quit
    Farewell,
    /// Input closed
    EndOfInput,
}

pub struct Assistant {
    router: Arc<Router>,
    tts: Arc<dyn TtsEngine>,
}

impl Assistant {
    pub fn new(router: Arc<Router>, tts: Arc<dyn TtsEngine>) -> Self {
        Self { router, tts }
    }

    pub fn greeting(&self) -> String {
        let wake = self.router.wake_word().unwrap_or("hey");
        format!(
            "Hello, I am ready. Say '{}, play a song' or '{}, what is the time'.",
            wake, wake
        )
    }

    /// Route one utterance and speak the reply
    ///
    /// Utterances that are blank, or blank once the wake word is removed,
    /// are ignored and return `None`.
    pub async fn handle_utterance(&self, text: &str) -> Option<Reply> {
        if self.router.normalize(text).is_empty() {
            debug!("Ignoring empty utterance: '{}'", text.trim());
            return None;
        }

        info!("📝 Heard: '{}'", text.trim());
        let dispatch = self.router.dispatch(text).await;
        self.say(&dispatch.reply.text).await;
        Some(dispatch.reply)
    }

    /// Greet, then process lines until farewell or end of input
    pub async fn run<R>(&self, input: R) -> Result<Exit>
    where
        R: AsyncBufRead + Unpin,
    {
        self.say(&self.greeting()).await;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if let Some(reply) = self.handle_utterance(&line).await {
                if reply.quit {
                    info!("👋 Farewell received, stopping");
                    return Ok(Exit::Farewell);
                }
            }
        }

        info!("Input closed, stopping");
        Ok(Exit::EndOfInput)
    }

    async fn say(&self, text: &str) {
        if let Err(e) = self.tts.speak(text).await {
            warn!("⚠️ TTS failed ({}): {}", self.tts.name(), e);
        }
    }
}
