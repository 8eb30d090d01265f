use thiserror::Error;

/// Navigation to a section that the site does not have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown page: '{0}'")]
    UnknownPage(String),
}

/// Field-level validation failures, in the order the rules were checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please correct the following errors:\n\n{}", .messages.join("\n"))]
pub struct ValidationErrors {
    pub messages: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// `Ok(())` when no rule failed, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_errors_pass() {
        assert_eq!(ValidationErrors::new().into_result(), Ok(()));
    }

    #[test]
    fn test_alert_text_lists_every_message() {
        let mut errors = ValidationErrors::new();
        errors.push("Please enter a valid name");
        errors.push("Please enter a valid email address");

        assert_eq!(
            errors.to_string(),
            "Please correct the following errors:\n\nPlease enter a valid name\nPlease enter a valid email address"
        );
    }

    #[test]
    fn test_unknown_page_message() {
        let err = RouteError::UnknownPage("blog".into());
        assert_eq!(err.to_string(), "unknown page: 'blog'");
    }
}
