//! Static job catalog — the fixed set of postings the service searches and
//! serves. Seeded once at startup and never mutated.

pub mod handlers;
pub mod search;

use chrono::NaiveDate;

use crate::models::job::{Job, JobType};

pub struct Catalog {
    jobs: Vec<Job>,
}

impl Catalog {
    /// Builds the catalog with the demo postings.
    pub fn seeded() -> Self {
        Self { jobs: seed_jobs() }
    }

    /// All postings, in catalog order.
    pub fn all(&self) -> &[Job] {
        &self.jobs
    }

    /// Lookup by identifier.
    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn seed_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "1".to_string(),
            title: "Frontend Developer".to_string(),
            company: "TechCorp".to_string(),
            company_logo: "https://via.placeholder.com/40".to_string(),
            location: "New York, NY".to_string(),
            job_type: JobType::FullTime,
            salary: "$80,000 - $100,000".to_string(),
            posted_date: date(2023, 4, 15),
            deadline: date(2023, 5, 15),
            description: "We are looking for an experienced Frontend Developer to join our \
                          team. The ideal candidate will have strong React and TypeScript \
                          skills, and experience with modern frontend frameworks."
                .to_string(),
            requirements: strings(&[
                "3+ years experience with React",
                "Strong knowledge of TypeScript",
                "Experience with REST APIs",
                "Understanding of responsive design principles",
                "Bachelor's degree in Computer Science or related field",
            ]),
            benefits: strings(&[
                "Competitive salary",
                "Healthcare benefits",
                "401k matching",
                "Flexible work schedule",
                "Remote work options",
            ]),
            tags: strings(&["React", "TypeScript", "Frontend", "JavaScript"]),
            is_urgent: true,
        },
        Job {
            id: "2".to_string(),
            title: "Backend Engineer".to_string(),
            company: "DataSystems".to_string(),
            company_logo: "https://via.placeholder.com/40".to_string(),
            location: "San Francisco, CA".to_string(),
            job_type: JobType::FullTime,
            salary: "$95,000 - $120,000".to_string(),
            posted_date: date(2023, 4, 10),
            deadline: date(2023, 5, 10),
            description: "We're seeking a Backend Engineer with expertise in Node.js and \
                          database design. You'll be responsible for developing server-side \
                          logic, defining and maintaining databases, and ensuring high \
                          performance and responsiveness to requests from the front-end."
                .to_string(),
            requirements: strings(&[
                "4+ years experience with Node.js",
                "Experience with SQL and NoSQL databases",
                "Knowledge of REST API design",
                "Understanding of server security and data protection",
                "BSc in Computer Science or relevant field",
            ]),
            benefits: strings(&[
                "Competitive compensation",
                "Health, dental, and vision insurance",
                "Generous PTO policy",
                "Professional development stipend",
                "Home office stipend",
            ]),
            tags: strings(&["Node.js", "Express", "MongoDB", "SQL", "API"]),
            is_urgent: false,
        },
        Job {
            id: "3".to_string(),
            title: "UX/UI Designer".to_string(),
            company: "CreativeHub".to_string(),
            company_logo: "https://via.placeholder.com/40".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::FullTime,
            salary: "$70,000 - $90,000".to_string(),
            posted_date: date(2023, 4, 5),
            deadline: date(2023, 5, 5),
            description: "We are looking for a talented UX/UI Designer to create amazing \
                          user experiences. The ideal candidate should have experience in \
                          delivering end-to-end UX/UI design for software products."
                .to_string(),
            requirements: strings(&[
                "3+ years of experience in UX/UI design",
                "Proficiency in design tools like Figma or Adobe XD",
                "Portfolio demonstrating UI design and interaction",
                "Experience conducting user research and testing",
                "Understanding of accessibility standards",
            ]),
            benefits: strings(&[
                "Flexible working hours",
                "Remote-first culture",
                "Health insurance",
                "Learning and development budget",
                "Team retreats",
            ]),
            tags: strings(&["UX", "UI", "Figma", "User Research", "Design"]),
            is_urgent: false,
        },
        Job {
            id: "4".to_string(),
            title: "Full Stack Developer".to_string(),
            company: "WebSolutions".to_string(),
            company_logo: "https://via.placeholder.com/40".to_string(),
            location: "Chicago, IL".to_string(),
            job_type: JobType::FullTime,
            salary: "$85,000 - $110,000".to_string(),
            posted_date: date(2023, 4, 20),
            deadline: date(2023, 5, 20),
            description: "We're looking for a Full Stack Developer who is passionate about \
                          building web applications from front to back. You should be \
                          comfortable working with both client and server-side technologies."
                .to_string(),
            requirements: strings(&[
                "3+ years of full stack development experience",
                "Proficiency with React, Node.js, and SQL/NoSQL databases",
                "Experience with cloud services (AWS, Azure, or GCP)",
                "Knowledge of CI/CD pipelines",
                "Strong problem-solving skills",
            ]),
            benefits: strings(&[
                "Competitive salary",
                "Comprehensive healthcare",
                "401(k) with company match",
                "Unlimited PTO",
                "Hybrid work model",
            ]),
            tags: strings(&["Full Stack", "React", "Node.js", "MongoDB", "AWS"]),
            is_urgent: true,
        },
        Job {
            id: "5".to_string(),
            title: "DevOps Engineer".to_string(),
            company: "CloudTech".to_string(),
            company_logo: "https://via.placeholder.com/40".to_string(),
            location: "Austin, TX".to_string(),
            job_type: JobType::FullTime,
            salary: "$90,000 - $115,000".to_string(),
            posted_date: date(2023, 4, 12),
            deadline: date(2023, 5, 12),
            description: "We are seeking a DevOps Engineer to help us build and maintain \
                          our infrastructure. The ideal candidate will have experience with \
                          cloud platforms, CI/CD, and automation."
                .to_string(),
            requirements: strings(&[
                "3+ years of DevOps experience",
                "Experience with AWS, Docker, and Kubernetes",
                "Knowledge of Infrastructure as Code (Terraform, CloudFormation)",
                "Experience with CI/CD pipelines",
                "Strong scripting skills (Bash, Python)",
            ]),
            benefits: strings(&[
                "Competitive compensation package",
                "Health and wellness benefits",
                "Flexible work arrangements",
                "Professional development opportunities",
                "Company equity",
            ]),
            tags: strings(&["DevOps", "AWS", "Docker", "Kubernetes", "CI/CD"]),
            is_urgent: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::seeded();
        let job = catalog.get("1").expect("job 1 is seeded");
        assert_eq!(job.title, "Frontend Developer");
        assert_eq!(job.company, "TechCorp");
    }

    #[test]
    fn test_lookup_unknown_id_is_none() {
        let catalog = Catalog::seeded();
        assert!(catalog.get("999").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let catalog = Catalog::seeded();
        let ids: HashSet<&str> = catalog.all().iter().map(|job| job.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.all().len());
    }

    #[test]
    fn test_catalog_order_is_stable() {
        let catalog = Catalog::seeded();
        let ids: Vec<&str> = catalog.all().iter().map(|job| job.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_urgent_flags_match_seed() {
        let catalog = Catalog::seeded();
        let urgent: Vec<&str> = catalog
            .all()
            .iter()
            .filter(|job| job.is_urgent)
            .map(|job| job.id.as_str())
            .collect();
        assert_eq!(urgent, vec!["1", "4"]);
    }
}
