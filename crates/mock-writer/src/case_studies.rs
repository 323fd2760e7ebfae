//! Case-study lookups with fixed outcomes.

use async_trait::async_trait;
use rewrite_core::{CaseStudy, CaseStudyLookup, LookupError};
use tokio::sync::Mutex;

/// Returns a fixed list, honoring the requested limit.
#[derive(Debug, Default)]
pub struct StaticCaseStudies {
    studies: Vec<CaseStudy>,
    ignore_limit: bool,
    queries: Mutex<Vec<(String, usize)>>,
}

impl StaticCaseStudies {
    pub fn new(studies: Vec<CaseStudy>) -> Self {
        Self {
            studies,
            ignore_limit: false,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Return the whole list regardless of the requested limit.
    pub fn ignoring_limit(mut self) -> Self {
        self.ignore_limit = true;
        self
    }

    /// `(keyword, limit)` pairs received so far.
    pub async fn queries(&self) -> Vec<(String, usize)> {
        self.queries.lock().await.clone()
    }

    /// Build `count` numbered case studies.
    pub fn numbered(count: usize) -> Vec<CaseStudy> {
        (1..=count)
            .map(|i| CaseStudy {
                title: format!("Caso {}", i),
                description: format!("Descrição do caso {}", i),
                growth_metric: format!("+{}0% tráfego orgânico", i),
                source_url: format!("https://exemplo.com.br/casos/{}", i),
            })
            .collect()
    }
}

#[async_trait]
impl CaseStudyLookup for StaticCaseStudies {
    async fn find(
        &self,
        keyword: &str,
        _content: &str,
        limit: usize,
    ) -> Result<Vec<CaseStudy>, LookupError> {
        self.queries.lock().await.push((keyword.to_string(), limit));
        let take = if self.ignore_limit {
            self.studies.len()
        } else {
            limit
        };
        Ok(self.studies.iter().take(take).cloned().collect())
    }
}

/// Fails every lookup.
#[derive(Debug, Clone)]
pub struct FailingCaseStudies {
    message: String,
}

impl FailingCaseStudies {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl CaseStudyLookup for FailingCaseStudies {
    async fn find(
        &self,
        _keyword: &str,
        _content: &str,
        _limit: usize,
    ) -> Result<Vec<CaseStudy>, LookupError> {
        Err(LookupError(self.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_honors_limit() {
        let lookup = StaticCaseStudies::new(StaticCaseStudies::numbered(5));
        let found = lookup.find("seo", "conteúdo", 3).await.unwrap();
        assert_eq!(found.len(), 3);
        assert_eq!(lookup.queries().await, vec![("seo".to_string(), 3)]);

        let lookup = lookup.ignoring_limit();
        assert_eq!(lookup.find("seo", "conteúdo", 3).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_failing_lookup() {
        let lookup = FailingCaseStudies::new("search offline");
        let err = lookup.find("seo", "", 3).await.unwrap_err();
        assert_eq!(err.to_string(), "case study lookup failed: search offline");
    }
}
