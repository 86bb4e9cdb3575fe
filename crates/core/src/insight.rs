//! Collaborator seam for generative-AI annotations.
//!
//! The recommendation assembler asks an [`InsightSource`] for one short
//! natural-language note per recommendation. The call is enrichment only:
//! any failure is logged and swallowed, never propagated to the caller.

use async_trait::async_trait;

use crate::errors::InsightError;
use crate::recommend::{Item, Recommendation};

#[async_trait]
pub trait InsightSource: Send + Sync {
    /// Produce at most one insight string per recommendation, in order.
    ///
    /// Returning fewer strings than recommendations is valid; the tail
    /// simply stays unannotated.
    async fn insights(
        &self,
        items: &[Item],
        recommendations: &[Recommendation],
    ) -> Result<Vec<String>, InsightError>;
}

/// Default source used when no insight backend is configured.
///
/// Annotates nothing and never fails, so the engine behaves identically
/// with and without an AI credential.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledInsights;

#[async_trait]
impl InsightSource for DisabledInsights {
    async fn insights(
        &self,
        _items: &[Item],
        _recommendations: &[Recommendation],
    ) -> Result<Vec<String>, InsightError> {
        Ok(Vec::new())
    }
}
