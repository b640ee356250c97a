//! Creation Form State
//!
//! Raw field text plus the submit guard. Normalization into a `NewTodo`
//! happens here so the view only wires inputs.

use crate::models::{NewTodo, TodoItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    /// A create request is outstanding
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationForm {
    pub title: String,
    /// `YYYY-MM-DD` from the date input, or empty
    pub due_date: String,
    /// Comma separated
    pub categories: String,
    phase: FormPhase,
}

impl CreationForm {
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Enter `Submitting` and hand back the payload to send.
    ///
    /// Returns `None` without touching anything when a request is already
    /// outstanding or the title is blank.
    pub fn begin_submit(&mut self) -> Option<NewTodo> {
        if self.is_submitting() {
            return None;
        }
        let payload = self.payload()?;
        self.phase = FormPhase::Submitting;
        Some(payload)
    }

    /// Back to `Idle`. Fields are cleared only when the create went through.
    pub fn finish_submit(&mut self, created: Option<&TodoItem>) {
        if created.is_some() {
            self.title.clear();
            self.due_date.clear();
            self.categories.clear();
        }
        self.phase = FormPhase::Idle;
    }

    fn payload(&self) -> Option<NewTodo> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        let due_date = Some(self.due_date.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Some(NewTodo {
            title: title.to_string(),
            due_date,
            categories: split_categories(&self.categories),
        })
    }
}

/// `"x, ,y"` -> `["x", "y"]`
pub fn split_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::fake::{todo, Call, FakeApi, Reply};
    use crate::api::StoreClient;

    fn form(title: &str, due_date: &str, categories: &str) -> CreationForm {
        CreationForm {
            title: title.to_string(),
            due_date: due_date.to_string(),
            categories: categories.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_split_categories() {
        assert_eq!(split_categories("x, ,y"), vec!["x", "y"]);
        assert_eq!(split_categories(" work ,home,, "), vec!["work", "home"]);
        assert!(split_categories("").is_empty());
        assert!(split_categories(" , ,").is_empty());
    }

    #[test]
    fn test_payload_normalization() {
        let mut f = form(" Buy milk ", "", "x, ,y");

        let payload = f.begin_submit().expect("should submit");

        assert_eq!(payload, NewTodo {
            title: "Buy milk".to_string(),
            due_date: None,
            categories: vec!["x".to_string(), "y".to_string()],
        });
        assert!(f.is_submitting());
    }

    #[test]
    fn test_due_date_is_kept() {
        let mut f = form("Pay rent", "2025-02-01", "");
        let payload = f.begin_submit().unwrap();
        assert_eq!(payload.due_date.as_deref(), Some("2025-02-01"));
        assert!(payload.categories.is_empty());
    }

    #[test]
    fn test_blank_title_is_noop() {
        for title in ["", "   ", "\t\n"] {
            let mut f = form(title, "2025-02-01", "a,b");
            let before = f.clone();

            assert_eq!(f.begin_submit(), None);
            assert_eq!(f, before);
        }
    }

    #[test]
    fn test_no_double_submit() {
        let mut f = form("Walk dog", "", "");
        assert!(f.begin_submit().is_some());
        assert_eq!(f.begin_submit(), None);
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut f = form("Walk dog", "2025-03-03", "pets");
        f.begin_submit();

        f.finish_submit(None);

        assert_eq!(f, form("Walk dog", "2025-03-03", "pets"));
        assert!(!f.is_submitting());
    }

    #[test]
    fn test_success_resets_fields() {
        let mut f = form("Walk dog", "2025-03-03", "pets");
        f.begin_submit();

        f.finish_submit(Some(&todo(1, "Walk dog")));

        assert_eq!(f, CreationForm::default());
    }

    #[tokio::test]
    async fn test_submit_issues_one_create() {
        let api = Arc::new(FakeApi::new().on_create(Reply::Ok(todo(5, "Buy milk"))));
        let client = StoreClient::new(api.clone());
        let mut f = form(" Buy milk ", "", "x, ,y");

        let payload = f.begin_submit().unwrap();
        let created = client.create_item(&payload).await;
        f.finish_submit(created.as_ref());

        assert_eq!(created, Some(todo(5, "Buy milk")));
        assert_eq!(api.calls(), vec![Call::Create(NewTodo {
            title: "Buy milk".to_string(),
            due_date: None,
            categories: vec!["x".to_string(), "y".to_string()],
        })]);
        assert_eq!(f, CreationForm::default());
    }

    #[tokio::test]
    async fn test_blank_submit_sends_nothing() {
        let api = Arc::new(FakeApi::new());
        let client = StoreClient::new(api.clone());
        let mut f = form("  ", "", "x");

        if let Some(payload) = f.begin_submit() {
            client.create_item(&payload).await;
        }

        assert!(api.calls().is_empty());
    }
}
