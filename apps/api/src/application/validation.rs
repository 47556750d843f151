//! Application-form validation — pure field checks, callable without any
//! HTTP context. At most one message per field; an empty map means the form
//! is valid.

use std::collections::BTreeMap;

use bytes::Bytes;

/// Maximum accepted resume payload: 5 MiB.
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_RESUME_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Field name → single human-readable message.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Candidate-entered application fields plus the selected resume file.
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: Option<String>,
    pub resume: Option<ResumeUpload>,
}

/// An uploaded resume: the original file name plus its raw payload.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content: Bytes,
}

impl ResumeUpload {
    /// Extension after the last dot, lowercased. A dotless name has none.
    fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
    }
}

/// Checks the form against the submission rules.
///
/// The resume type check precedes the size check: a wrong-type oversized
/// file reports only the type error.
pub fn validate(form: &ApplicationForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.full_name.trim().is_empty() {
        errors.insert("fullName", "Full name is required".to_string());
    }

    if form.email.trim().is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !email_has_valid_shape(&form.email) {
        errors.insert("email", "Email is invalid".to_string());
    }

    if form.phone.trim().is_empty() {
        errors.insert("phone", "Phone number is required".to_string());
    }

    match &form.resume {
        None => {
            errors.insert("resume", "Resume is required".to_string());
        }
        Some(resume) => {
            let allowed = resume
                .extension()
                .is_some_and(|ext| ALLOWED_RESUME_EXTENSIONS.contains(&ext.as_str()));
            if !allowed {
                errors.insert("resume", "Resume must be PDF, DOC, or DOCX".to_string());
            } else if resume.content.len() > MAX_RESUME_BYTES {
                errors.insert("resume", "Resume must be less than 5MB".to_string());
            }
        }
    }

    errors
}

/// Minimal shape check: some whitespace-free run of the input must contain a
/// non-empty local part, an `@`, at least one character between the `@` and
/// a later dot, and at least one character after that dot.
fn email_has_valid_shape(email: &str) -> bool {
    email.split_whitespace().any(token_has_valid_shape)
}

fn token_has_valid_shape(token: &str) -> bool {
    token
        .char_indices()
        .filter(|&(_, c)| c == '@')
        .any(|(at, _)| {
            let domain = &token[at + 1..];
            at > 0
                && domain
                    .char_indices()
                    .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume(file_name: &str, size: usize) -> ResumeUpload {
        ResumeUpload {
            file_name: file_name.to_string(),
            content: Bytes::from(vec![0u8; size]),
        }
    }

    fn valid_form() -> ApplicationForm {
        ApplicationForm {
            full_name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            cover_letter: None,
            resume: Some(resume("resume.pdf", 1024)),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn test_missing_full_name_is_the_only_error() {
        let mut form = valid_form();
        form.full_name = String::new();
        let errors = validate(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["fullName"], "Full name is required");
    }

    #[test]
    fn test_whitespace_only_full_name_fails() {
        let mut form = valid_form();
        form.full_name = "   ".to_string();
        assert!(validate(&form).contains_key("fullName"));
    }

    #[test]
    fn test_missing_email_reports_required() {
        let mut form = valid_form();
        form.email = String::new();
        assert_eq!(validate(&form)["email"], "Email is required");
    }

    #[test]
    fn test_malformed_email_reports_format() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();
        assert_eq!(validate(&form)["email"], "Email is invalid");
    }

    #[test]
    fn test_email_missing_domain_dot_fails() {
        let mut form = valid_form();
        form.email = "jane@example".to_string();
        assert!(validate(&form).contains_key("email"));
    }

    #[test]
    fn test_email_with_empty_local_part_fails() {
        let mut form = valid_form();
        form.email = "@example.com".to_string();
        assert!(validate(&form).contains_key("email"));
    }

    #[test]
    fn test_email_shape_is_a_substring_test() {
        // The minimal pattern is a substring test: any whitespace-free run
        // of local@domain.tld shape passes.
        let mut form = valid_form();
        form.email = "reach me at jane@example.com please".to_string();
        assert!(!validate(&form).contains_key("email"));
    }

    #[test]
    fn test_missing_phone_reports_required() {
        let mut form = valid_form();
        form.phone = " ".to_string();
        assert_eq!(validate(&form)["phone"], "Phone number is required");
    }

    #[test]
    fn test_missing_resume_reports_required() {
        let mut form = valid_form();
        form.resume = None;
        assert_eq!(validate(&form)["resume"], "Resume is required");
    }

    #[test]
    fn test_wrong_extension_reports_type() {
        let mut form = valid_form();
        form.resume = Some(resume("resume.exe", 1024));
        assert_eq!(validate(&form)["resume"], "Resume must be PDF, DOC, or DOCX");
    }

    #[test]
    fn test_dotless_file_name_reports_type() {
        let mut form = valid_form();
        form.resume = Some(resume("resume", 1024));
        assert!(validate(&form)["resume"].contains("PDF"));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        let mut form = valid_form();
        form.resume = Some(resume("RESUME.PDF", 1024));
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_oversized_resume_reports_size() {
        let mut form = valid_form();
        form.resume = Some(resume("resume.pdf", 6 * 1024 * 1024));
        assert_eq!(validate(&form)["resume"], "Resume must be less than 5MB");
    }

    #[test]
    fn test_exactly_five_mib_is_accepted() {
        let mut form = valid_form();
        form.resume = Some(resume("resume.pdf", MAX_RESUME_BYTES));
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_wrong_type_oversized_reports_only_type() {
        let mut form = valid_form();
        form.resume = Some(resume("resume.exe", 6 * 1024 * 1024));
        let errors = validate(&form);
        assert_eq!(errors["resume"], "Resume must be PDF, DOC, or DOCX");
    }

    #[test]
    fn test_cover_letter_is_never_validated() {
        let mut form = valid_form();
        form.cover_letter = Some(String::new());
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_every_field_missing_reports_one_error_each() {
        let errors = validate(&ApplicationForm::default());
        assert_eq!(errors.len(), 4);
        for field in ["fullName", "email", "phone", "resume"] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
    }
}
