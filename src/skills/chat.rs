//! Fixed-text replies: small talk, goodbye and the fallback

use crate::core::{Reply, Skill};
use async_trait::async_trait;

pub const RELATIONSHIP_REPLY: &str =
    "I am in a committed relationship with my dedicated server and Wi-Fi connection.";
pub const CONSOLE_FAREWELL: &str = "Goodbye! Have a nice day.";
pub const SERVER_FAREWELL: &str =
    "The server received a shutdown command, but it will remain running. Goodbye!";
pub const FALLBACK_REPLY: &str =
    "I didn't recognize that command. Try asking about the time, a person, or to play a song.";

/// "are you single"
#[derive(Debug, Default)]
pub struct RelationshipSkill;

#[async_trait]
impl Skill for RelationshipSkill {
    async fn handle(&self, _command: &str) -> Reply {
        Reply::say(RELATIONSHIP_REPLY)
    }

    fn name(&self) -> &str {
        "relationship"
    }
}

/// Where the assistant is running, which decides what "goodbye" does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Interactive loop; goodbye ends it
    Console,
    /// HTTP API; goodbye is acknowledged but the server keeps running
    Server,
}

/// "goodbye", "stop", "exit"
#[derive(Debug)]
pub struct FarewellSkill {
    surface: Surface,
}

impl FarewellSkill {
    pub fn new(surface: Surface) -> Self {
        Self { surface }
    }
}

#[async_trait]
impl Skill for FarewellSkill {
    async fn handle(&self, _command: &str) -> Reply {
        match self.surface {
            Surface::Console => Reply::farewell(CONSOLE_FAREWELL),
            Surface::Server => Reply::say(SERVER_FAREWELL),
        }
    }

    fn name(&self) -> &str {
        "farewell"
    }
}

/// Reply for commands no rule matched
#[derive(Debug, Default)]
pub struct FallbackSkill;

#[async_trait]
impl Skill for FallbackSkill {
    async fn handle(&self, _command: &str) -> Reply {
        Reply::say(FALLBACK_REPLY)
    }

    fn name(&self) -> &str {
        "fallback"
    }
}
