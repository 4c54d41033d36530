//! Song playback via a YouTube search in the browser

use crate::core::{Reply, Skill};
use crate::error::{AssistError, AssistResult};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, warn};

const YOUTUBE_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

/// How long to wait for the browser command before assuming it took over
const LAUNCH_WAIT: Duration = Duration::from_secs(5);

/// Opens URLs somewhere the user can see them
#[async_trait]
pub trait Launcher: Send + Sync + std::fmt::Debug {
    async fn open(&self, url: &str) -> AssistResult<()>;
}

/// Launches an external browser command (`xdg-open`, `firefox`, ...)
#[derive(Debug, Clone)]
pub struct BrowserLauncher {
    command: String,
}

impl BrowserLauncher {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
        }
    }
}

#[async_trait]
impl Launcher for BrowserLauncher {
    async fn open(&self, url: &str) -> AssistResult<()> {
        debug!("Opening {} with {}", url, self.command);
        let mut child = Command::new(&self.command).arg(url).spawn()?;

        // Some browsers stay in the foreground; tokio reaps the child once dropped.
        match tokio::time::timeout(LAUNCH_WAIT, child.wait()).await {
            Ok(status) => {
                let status = status?;
                if status.success() {
                    Ok(())
                } else {
                    Err(AssistError::Other(anyhow::anyhow!(
                        "{} exited with {}",
                        self.command,
                        status
                    )))
                }
            }
            Err(_) => {
                debug!("{} still running, assuming the browser opened", self.command);
                Ok(())
            }
        }
    }
}

/// YouTube search URL for a free-text query
pub fn search_url(query: &str) -> String {
    format!("{}{}", YOUTUBE_SEARCH_URL, urlencoding::encode(query.trim()))
}

/// "play <song>"
#[derive(Debug)]
pub struct PlaySkill {
    launcher: Arc<dyn Launcher>,
}

impl PlaySkill {
    pub fn new(launcher: Arc<dyn Launcher>) -> Self {
        Self { launcher }
    }
}

#[async_trait]
impl Skill for PlaySkill {
    async fn handle(&self, command: &str) -> Reply {
        let song = command.replace("play", "").trim().to_string();
        if song.is_empty() {
            return Reply::say("Please specify a song or artist to play.");
        }

        match self.launcher.open(&search_url(&song)).await {
            Ok(()) => {
                info!("🎵 Playing {} on YouTube", song);
                Reply::say(format!("Playing {} on YouTube.", song))
            }
            Err(e) => {
                warn!("❌ Could not open browser for '{}': {}", song, e);
                Reply::say(format!("Sorry, I couldn't open YouTube for {}.", song))
            }
        }
    }

    fn name(&self) -> &str {
        "play"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct Recorder {
        opened: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl Launcher for Recorder {
        async fn open(&self, url: &str) -> AssistResult<()> {
            if self.fail {
                return Err(AssistError::Other(anyhow::anyhow!("no display")));
            }
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_search_url_encoding() {
        assert_eq!(
            search_url("daft punk & friends"),
            "https://www.youtube.com/results?search_query=daft%20punk%20%26%20friends"
        );
    }

    #[tokio::test]
    async fn test_play_opens_search() {
        let recorder = Arc::new(Recorder::default());
        let skill = PlaySkill::new(recorder.clone());

        let reply = skill.handle("play bohemian rhapsody").await;
        assert_eq!(reply.text, "Playing bohemian rhapsody on YouTube.");
        assert_eq!(
            recorder.opened.lock().unwrap().as_slice(),
            ["https://www.youtube.com/results?search_query=bohemian%20rhapsody"]
        );
    }

    #[tokio::test]
    async fn test_play_without_song() {
        let recorder = Arc::new(Recorder::default());
        let skill = PlaySkill::new(recorder.clone());

        let reply = skill.handle("play").await;
        assert_eq!(reply.text, "Please specify a song or artist to play.");
        assert!(recorder.opened.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_launcher_failure_is_contained() {
        let skill = PlaySkill::new(Arc::new(Recorder {
            fail: true,
            ..Recorder::default()
        }));

        let reply = skill.handle("play jazz").await;
        assert_eq!(reply.text, "Sorry, I couldn't open YouTube for jazz.");
        assert!(!reply.quit);
    }

    #[tokio::test]
    async fn test_browser_exit_status_is_checked() {
        assert!(BrowserLauncher::new("true").open("https://example.com").await.is_ok());
        assert!(BrowserLauncher::new("false").open("https://example.com").await.is_err());
    }

    #[tokio::test]
    async fn test_missing_browser_command() {
        let launcher = BrowserLauncher::new("assistkit-no-such-browser");
        assert!(matches!(
            launcher.open("https://example.com").await,
            Err(AssistError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_failing_browser_gets_apology() {
        let skill = PlaySkill::new(Arc::new(BrowserLauncher::new("false")));
        let reply = skill.handle("play jazz").await;
        assert_eq!(reply.text, "Sorry, I couldn't open YouTube for jazz.");
    }
}
