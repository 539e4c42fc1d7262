//! Generative-AI collaborator for SaaS Radar.
//!
//! Builds prompts from analyzed posts, calls a hosted completion model, and
//! decodes replies into typed patterns and opportunities. Pattern extraction
//! always produces a result: when the model is unavailable or its reply does
//! not decode, keyword aggregation stands in.

pub mod client;
pub mod decode;
pub mod error;
pub mod extractor;
pub mod prompt;
pub mod render;

pub use client::{CompletionClient, GeminiClient, ResponseFormat};
pub use decode::{decode_opportunities, decode_patterns};
pub use error::AiError;
pub use extractor::{FallbackReason, PatternExtractor, PatternOutcome};
pub use prompt::format_posts_for_prompt;
pub use render::render_opportunities;
