//! Formatter trait

use crate::Result;
use async_trait::async_trait;

/// Something that turns complete source text into formatted source text.
///
/// Implementations only ever see whole units: either the whole document or
/// a top-level block (possibly wrapped in a unit header).
#[async_trait]
pub trait Formatter: Send + Sync {
    fn name(&self) -> &str;
    async fn format(&self, text: &str) -> Result<String>;
}
