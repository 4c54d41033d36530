//! TTS (Text-to-Speech) Module
//!
//! Provides a unified interface for the assistant's speech backends.

use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

pub mod console;
pub mod system;

/// Trait for TTS engines
#[async_trait]
pub trait TtsEngine: Send + Sync + std::fmt::Debug {
    /// Speak the given text
    async fn speak(&self, text: &str) -> Result<()>;

    /// Get the engine name
    fn name(&self) -> &str;
}

/// Factory to create the configured TTS engine
pub fn create_engine(config: &Config) -> Arc<dyn TtsEngine> {
    info!("🛠️ Creating TTS engine: {}", config.tts_engine);
    let engine: Arc<dyn TtsEngine> = match config.tts_engine.as_str() {
        "system" => {
            info!("  - Using System TTS (spd-say / espeak-ng)");
            Arc::new(system::SystemEngine::new())
        }
        "console" => Arc::new(console::ConsoleEngine::new()),
        _ => {
            warn!(
                "  - Unknown engine '{}', falling back to console",
                config.tts_engine
            );
            Arc::new(console::ConsoleEngine::new())
        }
    };
    info!("✅ TTS engine '{}' initialized", engine.name());
    engine
}
