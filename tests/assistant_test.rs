use assistkit::assistant::{Assistant, Exit};
use assistkit::skills::chat::CONSOLE_FAREWELL;
use assistkit::skills::Surface;
use std::sync::Arc;

mod common;
use common::harness;
use common::mock_tts::MockTts;

fn assistant(tts: Arc<MockTts>) -> Assistant {
    Assistant::new(Arc::new(harness(Surface::Console).router), tts)
}

#[tokio::test]
async fn test_greeting_mentions_wake_word() {
    let tts = Arc::new(MockTts::new());
    let greeting = assistant(tts).greeting();
    assert_eq!(
        greeting,
        "Hello, I am ready. Say 'alexa, play a song' or 'alexa, what is the time'."
    );
}

#[tokio::test]
async fn test_loop_stops_on_farewell() {
    let tts = Arc::new(MockTts::new());
    let input: &[u8] = b"alexa what time is it\n\ngoodbye\nare you single\n";

    let exit = assistant(tts.clone()).run(input).await.unwrap();
    assert_eq!(exit, Exit::Farewell);

    let spoken = tts.get_spoken();
    // greeting, time, farewell; the blank line is skipped and nothing after goodbye runs
    assert_eq!(spoken.len(), 3);
    assert!(spoken[0].starts_with("Hello, I am ready."));
    assert_eq!(spoken[1], "Current time is 03:07 PM");
    assert_eq!(spoken[2], CONSOLE_FAREWELL);
    assert!(!tts.was_spoken("committed relationship"));
}

#[tokio::test]
async fn test_loop_ends_with_input() {
    let tts = Arc::new(MockTts::new());
    let input: &[u8] = b"tell me a joke\nare you single";

    let exit = assistant(tts.clone()).run(input).await.unwrap();
    assert_eq!(exit, Exit::EndOfInput);
    assert_eq!(tts.get_spoken().len(), 3);
    assert!(tts.was_spoken("committed relationship"));
}

#[tokio::test]
async fn test_tts_failure_does_not_stop_loop() {
    let tts = Arc::new(MockTts::new());
    tts.fail_all();
    let input: &[u8] = b"what's the date\nstop\n";

    let exit = assistant(tts.clone()).run(input).await.unwrap();
    assert_eq!(exit, Exit::Farewell);
    assert!(tts.was_spoken("Today's date is Friday, March 01, 2024"));
    assert_eq!(tts.last().as_deref(), Some(CONSOLE_FAREWELL));
}

#[tokio::test]
async fn test_blank_utterance_is_ignored() {
    let tts = Arc::new(MockTts::new());
    let reply = assistant(tts.clone()).handle_utterance("   ").await;
    assert!(reply.is_none());
    assert!(tts.get_spoken().is_empty());
}

#[tokio::test]
async fn test_wake_word_alone_is_ignored() {
    let tts = Arc::new(MockTts::new());
    let bot = assistant(tts.clone());
    assert!(bot.handle_utterance("Alexa").await.is_none());
    assert!(bot.handle_utterance("  alexa  ").await.is_none());
    assert!(tts.get_spoken().is_empty());
}

#[tokio::test]
async fn test_loop_skips_bare_wake_word() {
    let tts = Arc::new(MockTts::new());
    let input: &[u8] = b"alexa
alexa are you single
";

    let exit = assistant(tts.clone()).run(input).await.unwrap();
    assert_eq!(exit, Exit::EndOfInput);
    // greeting and the relationship answer only
    assert_eq!(tts.get_spoken().len(), 2);
    assert!(tts.was_spoken("committed relationship"));
}
