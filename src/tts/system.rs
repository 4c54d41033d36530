//! System TTS engine
//!
//! Prints the reply and hands it to the first speech command found on the host.

use super::TtsEngine;
use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Speech commands tried in order; `spd-say -w` blocks until speech ends
const SPEECH_COMMANDS: &[(&str, &[&str])] = &[("spd-say", &["-w"]), ("espeak-ng", &[])];

#[derive(Debug)]
pub struct SystemEngine;

impl Default for SystemEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TtsEngine for SystemEngine {
    async fn speak(&self, text: &str) -> Result<()> {
        println!("Assistant: {}", text);

        // Wait for each utterance so replies never talk over each other.
        for (program, args) in SPEECH_COMMANDS {
            match Command::new(program).args(*args).arg(text).status().await {
                Ok(status) if status.success() => return Ok(()),
                Ok(status) => debug!("{} exited with {}", program, status),
                Err(e) => debug!("{} unavailable: {}", program, e),
            }
        }

        Err(anyhow::anyhow!(
            "No system TTS command found (tried spd-say, espeak-ng)"
        ))
    }

    fn name(&self) -> &str {
        "system"
    }
}
