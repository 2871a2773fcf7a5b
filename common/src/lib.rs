use serde::{Deserialize, Serialize};

/// One job posting: the company that posted it and the role title.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub company_name: String,
    pub job_title: String,
}

/// Jobs found on a single listing page.
///
/// `total_pages` is only known when page 1 was requested and is serialized
/// as `null` otherwise.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub jobs: Vec<JobRecord>,
    pub total_pages: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
