//! Field checks shared by the form models.

use crate::error::DomainError;

/// Collects every failed check so a form reports all its problems at once.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(&mut self, label: &str, value: &str, max: usize) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(format!("{label} is required"));
        } else {
            self.max_len(label, value, max);
        }
        self
    }

    pub fn optional(&mut self, label: &str, value: Option<&str>, max: usize) -> &mut Self {
        if let Some(value) = value {
            self.max_len(label, value, max);
        }
        self
    }

    pub fn slug(&mut self, label: &str, value: &str, max: usize) -> &mut Self {
        let before = self.errors.len();
        self.required(label, value, max);
        if self.errors.len() == before && !is_slug(value) {
            self.errors.push(format!(
                "{label} may only contain lowercase letters, digits and hyphens"
            ));
        }
        self
    }

    pub fn email(&mut self, label: &str, value: &str, max: usize) -> &mut Self {
        let before = self.errors.len();
        self.required(label, value, max);
        if self.errors.len() == before && !is_email(value) {
            self.errors.push(format!("{label} must be a valid email address"));
        }
        self
    }

    pub fn check(&mut self, condition: bool, message: impl Into<String>) -> &mut Self {
        if !condition {
            self.errors.push(message.into());
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), DomainError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(std::mem::take(&mut self.errors)))
        }
    }

    fn max_len(&mut self, label: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.errors
                .push(format!("{label} must be at most {max} characters"));
        }
    }
}

pub fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}

/// Lowercase, hyphen-separated form of `text`, e.g. `"SEO & Marketing"` to
/// `"seo-marketing"`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_all_failures() {
        let err = Validator::new()
            .required("Title", "  ", 200)
            .slug("Slug", "Not A Slug", 250)
            .email("Email", "nobody", 200)
            .finish()
            .unwrap_err();

        match err {
            DomainError::Validation(messages) => assert_eq!(messages.len(), 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn enforces_max_length() {
        let long = "x".repeat(101);
        assert!(Validator::new().required("Name", &long, 100).finish().is_err());
        assert!(Validator::new().optional("Notes", None, 10).finish().is_ok());
    }

    #[test]
    fn accepts_valid_values() {
        assert!(
            Validator::new()
                .slug("Slug", "web-development", 150)
                .email("Email", "ama@example.com", 200)
                .finish()
                .is_ok()
        );
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("SEO & Marketing"), "seo-marketing");
        assert_eq!(slugify("  ASP.NET Core "), "asp-net-core");
        assert_eq!(slugify("UI/UX"), "ui-ux");
    }
}
