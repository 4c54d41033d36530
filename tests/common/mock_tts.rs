//! Mock TTS Engine for Testing
//!
//! Records every reply the assistant tries to speak.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Mock TTS engine that records spoken text
#[derive(Debug, Default)]
pub struct MockTts {
    /// Everything passed to `speak`, including failed attempts
    spoken: Mutex<Vec<String>>,
    /// Fail every `speak` call after recording it
    failing: AtomicBool,
}

impl MockTts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later `speak` return an error
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Get all spoken phrases
    pub fn get_spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }

    /// Most recent phrase
    pub fn last(&self) -> Option<String> {
        self.spoken.lock().unwrap().last().cloned()
    }

    /// Check if a phrase was spoken
    pub fn was_spoken(&self, text: &str) -> bool {
        self.spoken.lock().unwrap().iter().any(|s| s.contains(text))
    }
}

#[async_trait]
impl assistkit::tts::TtsEngine for MockTts {
    async fn speak(&self, text: &str) -> Result<()> {
        self.spoken.lock().unwrap().push(text.to_string());
        if self.failing.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("Mock TTS failure"));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
