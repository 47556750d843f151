//! Search & filter — pure narrowing of the catalog by free-text query and
//! category label. Order-preserving; never re-sorts.

use serde::Deserialize;

use crate::models::job::Job;

/// Filter parameters as they arrive on the query string. Both are optional;
/// empty or whitespace-only values mean "no constraint".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchFilter {
    pub query: Option<String>,
    pub category: Option<String>,
}

impl SearchFilter {
    fn query(&self) -> Option<&str> {
        normalize(self.query.as_deref())
    }

    fn category(&self) -> Option<&str> {
        normalize(self.category.as_deref())
    }
}

fn normalize(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Returns the jobs matching `filter`, in catalog order.
///
/// A job matches when (query absent OR query is a case-insensitive substring
/// of its title, company, or any tag) AND (category absent OR category
/// case-insensitively equals the employment-type label or one of its tags).
pub fn filter_jobs<'a>(jobs: &'a [Job], filter: &SearchFilter) -> Vec<&'a Job> {
    let query = filter.query().map(str::to_lowercase);
    let category = filter.category().map(str::to_lowercase);

    jobs.iter()
        .filter(|job| matches_query(job, query.as_deref()))
        .filter(|job| matches_category(job, category.as_deref()))
        .collect()
}

fn matches_query(job: &Job, query: Option<&str>) -> bool {
    let Some(query) = query else { return true };
    job.title.to_lowercase().contains(query)
        || job.company.to_lowercase().contains(query)
        || job.tags.iter().any(|tag| tag.to_lowercase().contains(query))
}

fn matches_category(job: &Job, category: Option<&str>) -> bool {
    let Some(category) = category else { return true };
    job.job_type.label().to_lowercase() == category
        || job.tags.iter().any(|tag| tag.to_lowercase() == category)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::job::JobType;

    fn job(id: &str, title: &str, company: &str, job_type: JobType, tags: &[&str]) -> Job {
        let day = NaiveDate::from_ymd_opt(2023, 4, 1).unwrap();
        Job {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            company_logo: String::new(),
            location: "Remote".to_string(),
            job_type,
            salary: String::new(),
            posted_date: day,
            deadline: day,
            description: String::new(),
            requirements: Vec::new(),
            benefits: Vec::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            is_urgent: false,
        }
    }

    fn fixture() -> Vec<Job> {
        vec![
            job("1", "Frontend Developer", "TechCorp", JobType::FullTime, &["React", "TypeScript"]),
            job("2", "Backend Engineer", "DataSystems", JobType::Contract, &["Node.js", "SQL"]),
            job("3", "UX Designer", "CreativeHub", JobType::PartTime, &["Figma", "Design"]),
        ]
    }

    fn filter(query: Option<&str>, category: Option<&str>) -> SearchFilter {
        SearchFilter {
            query: query.map(str::to_string),
            category: category.map(str::to_string),
        }
    }

    fn ids(matches: &[&Job]) -> Vec<String> {
        matches.iter().map(|job| job.id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_returns_all_in_order() {
        let jobs = fixture();
        let matches = filter_jobs(&jobs, &SearchFilter::default());
        assert_eq!(ids(&matches), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_whitespace_query_is_no_constraint() {
        let jobs = fixture();
        let matches = filter_jobs(&jobs, &filter(Some("   "), None));
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let jobs = fixture();
        let matches = filter_jobs(&jobs, &filter(Some("frontend"), None));
        assert_eq!(ids(&matches), vec!["1"]);
    }

    #[test]
    fn test_query_matches_company_substring() {
        let jobs = fixture();
        let matches = filter_jobs(&jobs, &filter(Some("datasys"), None));
        assert_eq!(ids(&matches), vec!["2"]);
    }

    #[test]
    fn test_query_matches_tags() {
        let jobs = fixture();
        let matches = filter_jobs(&jobs, &filter(Some("figma"), None));
        assert_eq!(ids(&matches), vec!["3"]);
    }

    #[test]
    fn test_query_without_match_returns_empty() {
        let jobs = fixture();
        assert!(filter_jobs(&jobs, &filter(Some("haskell"), None)).is_empty());
    }

    #[test]
    fn test_category_matches_type_label() {
        let jobs = fixture();
        let matches = filter_jobs(&jobs, &filter(None, Some("contract")));
        assert_eq!(ids(&matches), vec!["2"]);
    }

    #[test]
    fn test_category_matches_tag_exactly() {
        let jobs = fixture();
        let matches = filter_jobs(&jobs, &filter(None, Some("design")));
        assert_eq!(ids(&matches), vec!["3"]);
    }

    #[test]
    fn test_category_is_equality_not_substring() {
        let jobs = fixture();
        assert!(filter_jobs(&jobs, &filter(None, Some("Desig"))).is_empty());
    }

    #[test]
    fn test_query_and_category_combine() {
        let jobs = fixture();
        let matches = filter_jobs(&jobs, &filter(Some("engineer"), Some("Full-time")));
        assert!(matches.is_empty());

        let matches = filter_jobs(&jobs, &filter(Some("engineer"), Some("Contract")));
        assert_eq!(ids(&matches), vec!["2"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let jobs = fixture();
        let by_type = filter(None, Some("full-time"));
        let once: Vec<Job> = filter_jobs(&jobs, &by_type).into_iter().cloned().collect();
        let twice = filter_jobs(&once, &by_type);
        assert_eq!(ids(&twice), once.iter().map(|j| j.id.clone()).collect::<Vec<_>>());
    }
}
