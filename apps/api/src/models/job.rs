use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employment type of a posting. Serialized with the labels the frontend
/// renders ("Full-time", "Part-time", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
    Remote,
}

impl JobType {
    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::Remote => "Remote",
        }
    }
}

/// A single posting in the catalog. Immutable after seeding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub company_logo: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    /// Display text, e.g. "$80,000 - $100,000".
    pub salary: String,
    pub posted_date: NaiveDate,
    pub deadline: NaiveDate,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub tags: Vec<String>,
    pub is_urgent: bool,
}
