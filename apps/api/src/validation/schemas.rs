use crate::validation::rules::{FieldSpec, Rule, Schema};

pub const PROJECT_CATEGORIES: &[&str] = &[
    "Machine Learning",
    "Deep Learning",
    "Data Engineering",
    "Web Development",
    "Data Science",
    "Other",
];

pub const PROJECT_STATUSES: &[&str] = &["completed", "planning", "in_progress", "on_hold"];

pub const PERSONAL_INFO: Schema = Schema {
    form: "personal_info",
    fields: &[
        FieldSpec::required("name", &[Rule::MinLen(2, "Name must be at least 2 characters")]),
        FieldSpec::required(
            "title",
            &[Rule::MinLen(5, "Title must be at least 5 characters")],
        ),
        FieldSpec::required(
            "description",
            &[Rule::MinLen(20, "Description must be at least 20 characters")],
        ),
        FieldSpec::required("location", &[Rule::MinLen(2, "Location is required")]),
        FieldSpec::required("age", &[Rule::MinLen(1, "Age is required")]),
        FieldSpec::required("email", &[Rule::Email("Valid email is required")]),
        FieldSpec::optional("phone", &[]),
        FieldSpec::optional("github", &[Rule::Url("GitHub must be a valid URL")]),
        FieldSpec::optional("linkedin", &[Rule::Url("LinkedIn must be a valid URL")]),
    ],
};

pub const ABOUT: Schema = Schema {
    form: "about",
    fields: &[
        FieldSpec::required("bio", &[Rule::MinLen(50, "Bio must be at least 50 characters")]),
        FieldSpec::required("gpa", &[Rule::MinLen(1, "GPA is required")]),
        FieldSpec::required(
            "projects_completed",
            &[
                Rule::MinLen(1, "Number of projects is required"),
                Rule::Digits("Number of projects must be a whole number"),
            ],
        ),
    ],
};

// `technologies` is checked separately because it may arrive structured.
pub const PROJECT: Schema = Schema {
    form: "project",
    fields: &[
        FieldSpec::required(
            "title",
            &[Rule::MinLen(3, "Title must be at least 3 characters")],
        ),
        FieldSpec::required(
            "description",
            &[Rule::MinLen(20, "Description must be at least 20 characters")],
        ),
        FieldSpec::optional(
            "category",
            &[Rule::OneOf(PROJECT_CATEGORIES, "Select a valid category")],
        ),
        FieldSpec::optional("date", &[]),
        FieldSpec::optional("github_url", &[Rule::Url("GitHub URL must be a valid URL")]),
        FieldSpec::optional("live_url", &[Rule::Url("Live URL must be a valid URL")]),
        FieldSpec::optional(
            "read_more_url",
            &[Rule::Url("Read more link must be a valid URL")],
        ),
        FieldSpec::optional(
            "status",
            &[Rule::OneOf(PROJECT_STATUSES, "Select a valid status")],
        ),
    ],
};

pub const TECHNOLOGY_LINK: Schema = Schema {
    form: "technology",
    fields: &[
        FieldSpec::required("label", &[Rule::MinLen(1, "Technology label is required")]),
        FieldSpec::required("link", &[Rule::Url("Technology link must be a valid URL")]),
    ],
};

pub const EDUCATION: Schema = Schema {
    form: "education",
    fields: &[
        FieldSpec::required(
            "institution",
            &[Rule::MinLen(3, "Institution must be at least 3 characters")],
        ),
        FieldSpec::required(
            "degree",
            &[Rule::MinLen(3, "Degree must be at least 3 characters")],
        ),
        FieldSpec::required(
            "field",
            &[Rule::MinLen(3, "Field of study must be at least 3 characters")],
        ),
        FieldSpec::required(
            "start_year",
            &[
                Rule::MinLen(4, "Start year must be at least 4 characters"),
                Rule::Digits("Start year must be a year"),
            ],
        ),
        FieldSpec::required(
            "end_year",
            &[
                Rule::MinLen(4, "End year must be at least 4 characters"),
                Rule::Digits("End year must be a year"),
            ],
        ),
        FieldSpec::optional("gpa", &[]),
        FieldSpec::optional("description", &[]),
    ],
};

pub const CERTIFICATION: Schema = Schema {
    form: "certification",
    fields: &[
        FieldSpec::required(
            "name",
            &[Rule::MinLen(3, "Certification name must be at least 3 characters")],
        ),
        FieldSpec::required(
            "issuer",
            &[Rule::MinLen(3, "Issuer must be at least 3 characters")],
        ),
        FieldSpec::required(
            "issue_date",
            &[Rule::MinLen(4, "Issue date is required")],
        ),
        FieldSpec::optional("expiry_date", &[]),
        FieldSpec::optional("credential_id", &[]),
        FieldSpec::optional("url", &[Rule::Url("Credential URL must be a valid URL")]),
    ],
};

/// Single-field schema behind tag-list inputs. Only used to trim and reject
/// blanks; the tag list itself handles duplicates.
pub const TAG: Schema = Schema {
    form: "tag",
    fields: &[FieldSpec::required("value", &[Rule::MinLen(1, "Tag cannot be empty")])],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    fn personal(name: &str, email: &str) -> Vec<(&'static str, String)> {
        vec![
            ("name", name.to_string()),
            ("title", "Data Science Student".to_string()),
            ("description", "Third-year student specializing in data.".to_string()),
            ("location", "San Francisco, CA".to_string()),
            ("age", "21".to_string()),
            ("email", email.to_string()),
        ]
    }

    fn run(schema: &Schema, pairs: &[(&'static str, String)]) -> Result<(), crate::validation::FieldErrors> {
        validate(schema, pairs.iter().map(|(k, v)| (*k, v.as_str()))).map(|_| ())
    }

    #[test]
    fn test_personal_info_name_too_short() {
        let errs = run(&PERSONAL_INFO, &personal("A", "a@b.com")).unwrap_err();
        assert_eq!(errs.get("name"), Some("Name must be at least 2 characters"));
    }

    #[test]
    fn test_personal_info_email() {
        assert!(run(&PERSONAL_INFO, &personal("Alex", "a@b.com")).is_ok());
        let errs = run(&PERSONAL_INFO, &personal("Alex", "not-an-email")).unwrap_err();
        assert_eq!(errs.get("email"), Some("Valid email is required"));
    }

    #[test]
    fn test_personal_info_optional_links() {
        let mut pairs = personal("Alex", "a@b.com");
        pairs.push(("github", String::new()));
        pairs.push(("linkedin", "linkedin".to_string()));
        let errs = run(&PERSONAL_INFO, &pairs).unwrap_err();
        assert!(errs.get("github").is_none());
        assert_eq!(errs.get("linkedin"), Some("LinkedIn must be a valid URL"));
    }

    #[test]
    fn test_about_projects_completed_numeric() {
        let bio = "x".repeat(50);
        let ok = vec![
            ("bio", bio.clone()),
            ("gpa", "3.8".to_string()),
            ("projects_completed", "15".to_string()),
        ];
        assert!(run(&ABOUT, &ok).is_ok());

        let bad = vec![
            ("bio", bio),
            ("gpa", "3.8".to_string()),
            ("projects_completed", "fifteen".to_string()),
        ];
        let errs = run(&ABOUT, &bad).unwrap_err();
        assert_eq!(
            errs.get("projects_completed"),
            Some("Number of projects must be a whole number")
        );
    }

    #[test]
    fn test_about_bio_length() {
        let errs = run(
            &ABOUT,
            &[
                ("bio", "Too short".to_string()),
                ("gpa", String::new()),
                ("projects_completed", String::new()),
            ],
        )
        .unwrap_err();
        assert_eq!(errs.get("bio"), Some("Bio must be at least 50 characters"));
        assert_eq!(errs.get("gpa"), Some("GPA is required"));
        assert_eq!(
            errs.get("projects_completed"),
            Some("Number of projects is required")
        );
    }

    #[test]
    fn test_project_category_membership() {
        let base = vec![
            ("title", "Test".to_string()),
            ("description", "A description that is long enough".to_string()),
        ];
        assert!(run(&PROJECT, &base).is_ok());

        let mut bad = base.clone();
        bad.push(("category", "Astrology".to_string()));
        assert!(run(&PROJECT, &bad).is_err());

        let mut good = base;
        good.push(("category", "Deep Learning".to_string()));
        assert!(run(&PROJECT, &good).is_ok());
    }

    #[test]
    fn test_certification_url_optional() {
        let pairs = vec![
            ("name", "AWS Cloud Practitioner".to_string()),
            ("issuer", "Amazon Web Services".to_string()),
            ("issue_date", "June 2024".to_string()),
            ("url", "not a url".to_string()),
        ];
        let errs = run(&CERTIFICATION, &pairs).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert!(errs.get("url").is_some());
    }

    #[test]
    fn test_tag_schema_rejects_blank() {
        assert!(run(&TAG, &[("value", "   ".to_string())]).is_err());
        assert!(run(&TAG, &[("value", " Rust ".to_string())]).is_ok());
    }
}
