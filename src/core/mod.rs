//! Core processing modules
//!
//! Contains command text normalization and the rule-based command router.

pub mod router;
pub mod text_normalizer;

pub use router::{Dispatch, MatchMode, Reply, Route, Router, Rule, RuleTable, Skill};
pub use text_normalizer::TextNormalizer;
