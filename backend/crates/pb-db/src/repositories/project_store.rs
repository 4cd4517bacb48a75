use crate::Result as DbErrorResult;

use pb_core::{Project, ProjectPatch};

use async_trait::async_trait;

/// Persistence contract for project budget records.
///
/// Writes return the number of rows affected. Updating or deleting an id
/// that does not exist is a successful no-op (`Ok(0)`), not an error.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects, ordered by `project_id`
    async fn find_all(&self) -> DbErrorResult<Vec<Project>>;

    async fn find_by_id(&self, project_id: i64) -> DbErrorResult<Option<Project>>;

    async fn find_by_name_and_year(&self, name: &str, year: i32) -> DbErrorResult<Vec<Project>>;

    /// Insert a new row. Fails on a duplicate `project_id`.
    async fn create(&self, project: &Project) -> DbErrorResult<u64>;

    /// Write the present fields of `patch` to the row keyed by `project_id`
    async fn update(&self, project_id: i64, patch: &ProjectPatch) -> DbErrorResult<u64>;

    async fn delete(&self, project_id: i64) -> DbErrorResult<u64>;
}
