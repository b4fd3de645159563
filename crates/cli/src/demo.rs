//! Scripted session against an offline catalog.
//!
//! Drives one [`CatalogService`] backed by a [`MockUpstream`] through a
//! list, get, create, update and delete sequence, recording how many
//! upstream calls each step cost.

use std::sync::Arc;

use serde::Serialize;

use pokecache::upstream::MockUpstream;
use pokecache::CatalogService;
use pokecache_core::catalog::{EntityPatch, NewEntity, PageRequest, Result};

/// Number of items in the offline catalog.
const DEMO_CATALOG_SIZE: u64 = 30;

/// One step of the demo session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoStep {
    pub action: String,
    pub outcome: String,
    /// Upstream calls made by this step alone.
    pub upstream_calls: usize,
}

/// Outcome of a demo session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub steps: Vec<DemoStep>,
    pub total_upstream_calls: usize,
}

impl DemoReport {
    fn record(&mut self, action: impl Into<String>, outcome: impl Into<String>, calls: usize) {
        self.steps.push(DemoStep {
            action: action.into(),
            outcome: outcome.into(),
            upstream_calls: calls - self.total_upstream_calls,
        });
        self.total_upstream_calls = calls;
    }
}

/// Runs the scripted session.
pub async fn run_demo() -> Result<DemoReport> {
    let upstream = Arc::new(MockUpstream::with_items(DEMO_CATALOG_SIZE));
    let service = CatalogService::with_upstream(Arc::clone(&upstream));
    let mut report = DemoReport::default();

    let first_page = PageRequest::default();
    let page = service.list_entities(first_page).await?;
    report.record(
        format!("list page {}", first_page.key()),
        format!("{} pokemon", page.len()),
        upstream.total_calls(),
    );

    let page = service.list_entities(first_page).await?;
    report.record(
        format!("list page {} again", first_page.key()),
        format!("{} pokemon", page.len()),
        upstream.total_calls(),
    );

    let bulbasaur = service.get_entity(1).await?;
    report.record("get 1", bulbasaur.name, upstream.total_calls());

    let far = service.get_entity(DEMO_CATALOG_SIZE).await?;
    report.record(
        format!("get {}", DEMO_CATALOG_SIZE),
        far.name,
        upstream.total_calls(),
    );

    let created = service
        .create_entity(NewEntity::new("pikachu", "electric"))
        .await?;
    report.record(
        "create pikachu",
        format!("id {}", created.id),
        upstream.total_calls(),
    );

    let duplicate = service
        .create_entity(NewEntity::new("pikachu", "electric"))
        .await;
    let outcome = match duplicate {
        Ok(entity) => format!("id {}", entity.id),
        Err(err) => err.to_string(),
    };
    report.record("create pikachu again", outcome, upstream.total_calls());

    let renamed = service
        .update_entity(1, EntityPatch::rename("bulba"))
        .await?;
    report.record(
        "rename 1",
        format!("{} ({}, {} hp)", renamed.name, renamed.category, renamed.vitality),
        upstream.total_calls(),
    );

    let message = service.delete_entity(created.id).await?;
    report.record("delete pikachu", message, upstream.total_calls());

    let message = service.delete_entity(1).await?;
    report.record("delete 1", message, upstream.total_calls());

    let refetched = service.get_entity(1).await?;
    report.record("get 1 after delete", refetched.name, upstream.total_calls());

    tracing::info!(
        steps = report.steps.len(),
        upstream_calls = report.total_upstream_calls,
        "Demo session finished"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calls(report: &DemoReport) -> Vec<usize> {
        report.steps.iter().map(|s| s.upstream_calls).collect()
    }

    #[tokio::test]
    async fn test_demo_reports_cache_savings() {
        let report = run_demo().await.unwrap();

        // page miss, page hit, hit, miss, create, duplicate, update, delete, delete, refetch
        assert_eq!(calls(&report), vec![11, 0, 0, 1, 0, 0, 0, 0, 0, 1]);
        assert_eq!(report.total_upstream_calls, 13);
    }

    #[tokio::test]
    async fn test_demo_outcomes() {
        let report = run_demo().await.unwrap();

        assert_eq!(report.steps[0].outcome, "10 pokemon");
        assert_eq!(report.steps[2].outcome, "bulbasaur");
        assert_eq!(report.steps[5].outcome, "pikachu already exists");
        assert_eq!(report.steps[6].outcome, "bulba (grass, 45 hp)");
        assert_eq!(
            report.steps[8].outcome,
            "pokemon bulba with id 1 removed"
        );
        assert_eq!(report.steps[9].outcome, "bulbasaur");
    }
}
