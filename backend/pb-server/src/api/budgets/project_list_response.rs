use crate::ProjectDto;

use serde::Serialize;

/// `{success: true, data: [...]}`
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub success: bool,
    pub data: Vec<ProjectDto>,
}

impl ProjectListResponse {
    pub fn new(data: Vec<ProjectDto>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
