#![allow(dead_code)]

pub mod mock_tts;

use assistkit::config::Config;
use assistkit::core::Router;
use assistkit::error::{AssistError, AssistResult};
use assistkit::skills::{Clock, Launcher, Skills, SummarySource, Surface};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::{Arc, Mutex};

/// Clock pinned to Friday 2024-03-01 15:07
#[derive(Debug)]
pub struct FixedClock(pub NaiveDateTime);

impl Default for FixedClock {
    fn default() -> Self {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(15, 7, 0))
            .expect("valid date");
        Self(dt)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Records URLs instead of opening a browser
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    pub opened: Mutex<Vec<String>>,
}

impl RecordingLauncher {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl Launcher for RecordingLauncher {
    async fn open(&self, url: &str) -> AssistResult<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Summaries served from memory; unknown titles are not found
#[derive(Debug, Default)]
pub struct CannedSummaries {
    pub pages: Vec<(&'static str, &'static str)>,
}

#[async_trait]
impl SummarySource for CannedSummaries {
    async fn summary(&self, title: &str) -> AssistResult<String> {
        self.pages
            .iter()
            .find(|(t, _)| *t == title)
            .map(|(_, text)| text.to_string())
            .ok_or_else(|| AssistError::NotFound(title.to_string()))
    }
}

pub struct Harness {
    pub router: Router,
    pub launcher: Arc<RecordingLauncher>,
}

/// Default trigger table over offline backends
pub fn harness(surface: Surface) -> Harness {
    let launcher = Arc::new(RecordingLauncher::default());
    let summaries = CannedSummaries {
        pages: vec![(
            "ada lovelace",
            "Augusta Ada King, Countess of Lovelace was an English mathematician. She wrote notes.",
        )],
    };
    let skills = Skills::with_backends(
        Arc::new(FixedClock::default()),
        launcher.clone(),
        Arc::new(summaries),
        surface,
    );

    Harness {
        router: skills.into_router(&Config::default()),
        launcher,
    }
}
