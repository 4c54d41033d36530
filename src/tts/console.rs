//! Console "speech": prints the reply

use super::TtsEngine;
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Default)]
pub struct ConsoleEngine;

impl ConsoleEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TtsEngine for ConsoleEngine {
    async fn speak(&self, text: &str) -> Result<()> {
        println!("Assistant: {}", text);
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
