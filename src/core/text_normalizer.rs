//! Text Normalization
//!
//! Prepares raw utterances before command matching.

/// Normalizes command text and strips the wake word
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    /// Lower-cased wake word, if any
    wake_word: Option<String>,
}

impl TextNormalizer {
    /// Create a normalizer that strips `wake_word`
    ///
    /// An empty or blank wake word disables stripping.
    pub fn new(wake_word: &str) -> Self {
        let wake_word = wake_word.trim().to_lowercase();
        Self {
            wake_word: (!wake_word.is_empty()).then_some(wake_word),
        }
    }

    /// The active wake word
    pub fn wake_word(&self) -> Option<&str> {
        self.wake_word.as_deref()
    }

    /// Trim, lower-case and remove every occurrence of the wake word
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.trim().to_lowercase();

        match &self.wake_word {
            Some(wake) if lowered.contains(wake.as_str()) => {
                lowered.replace(wake.as_str(), "").trim().to_string()
            }
            _ => lowered,
        }
    }

    /// True when the raw input carries no command at all
    pub fn is_blank(text: &str) -> bool {
        text.trim().is_empty()
    }
}
