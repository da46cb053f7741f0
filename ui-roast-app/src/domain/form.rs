use super::{Artifact, RoastRequest};
use chrono::{DateTime, Utc};

pub const SUBMIT_ERROR_MESSAGE: &str = "Something went wrong. Try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Ready,
    Submitting { since: DateTime<Utc> },
    ResultShown(String),
    ErrorShown(String),
}

/// Roast form: inputs plus where the submission stands.
///
/// A submission only fires with both a tag and an artifact set, and only one
/// can be in flight. Failures are not retried; the user submits again.
#[derive(Debug, Clone)]
pub struct RoastForm {
    tag: Option<String>,
    artifact: Option<Artifact>,
    state: FormState,
}

impl RoastForm {
    pub fn new() -> Self {
        Self {
            tag: None,
            artifact: None,
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FormState::Submitting { .. })
    }

    pub fn select_tag(&mut self, tag: impl Into<String>) {
        if self.is_loading() {
            return;
        }
        let tag = tag.into();
        self.tag = (!tag.trim().is_empty()).then_some(tag);
        self.refresh();
    }

    pub fn set_artifact(&mut self, artifact: Artifact) {
        if self.is_loading() {
            return;
        }
        self.artifact = Some(artifact);
        self.refresh();
    }

    pub fn clear_artifact(&mut self) {
        if self.is_loading() {
            return;
        }
        self.artifact = None;
        self.refresh();
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.tag.is_some() && self.artifact.is_some()
    }

    /// Starts a submission, stamping when loading began.
    pub fn submit(&mut self) -> Option<RoastRequest> {
        if !self.can_submit() {
            return None;
        }
        let artifact = self.artifact.clone()?;
        self.state = FormState::Submitting { since: Utc::now() };
        Some(RoastRequest::new(self.tag.clone(), artifact))
    }

    /// Settles the in-flight submission. Ignored when nothing is in flight.
    pub fn resolve<E>(&mut self, outcome: Result<String, E>) {
        if !self.is_loading() {
            return;
        }
        self.state = match outcome {
            Ok(roast) => FormState::ResultShown(roast),
            Err(_) => FormState::ErrorShown(SUBMIT_ERROR_MESSAGE.to_string()),
        };
    }

    fn refresh(&mut self) {
        self.state = if self.tag.is_some() && self.artifact.is_some() {
            FormState::Ready
        } else {
            FormState::Idle
        };
    }
}

impl Default for RoastForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screenshot() -> Artifact {
        Artifact::File {
            name: "landing.png".into(),
            content_type: Some("image/png".into()),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_ready_only_with_tag_and_artifact() {
        let mut form = RoastForm::new();
        assert_eq!(form.state(), &FormState::Idle);

        form.select_tag("grandma");
        assert_eq!(form.state(), &FormState::Idle);
        assert!(form.submit().is_none());

        form.set_artifact(screenshot());
        assert_eq!(form.state(), &FormState::Ready);

        form.clear_artifact();
        assert_eq!(form.state(), &FormState::Idle);
    }

    #[test]
    fn test_blank_tag_does_not_count() {
        let mut form = RoastForm::new();
        form.set_artifact(screenshot());
        form.select_tag("  ");
        assert!(!form.can_submit());
    }

    #[test]
    fn test_round_trip_shows_text_unmodified() {
        let mut form = RoastForm::new();
        form.select_tag("gordon");
        form.set_artifact(screenshot());

        let request = form.submit().expect("ready form submits");
        assert_eq!(request.tag.as_deref(), Some("gordon"));
        assert_eq!(request.artifact, screenshot());
        assert!(form.is_loading());

        let text = "  It's RAW!\n1. **Fix** <the> spacing  ".to_string();
        form.resolve::<()>(Ok(text.clone()));
        assert_eq!(form.state(), &FormState::ResultShown(text));
    }

    #[test]
    fn test_only_one_submission_in_flight() {
        let mut form = RoastForm::new();
        form.select_tag("ipad_kid");
        form.set_artifact(screenshot());

        assert!(form.submit().is_some());
        assert!(form.submit().is_none());

        form.select_tag("grandma");
        assert_eq!(form.tag(), Some("ipad_kid"));
    }

    #[test]
    fn test_failure_shows_fixed_message_and_needs_resubmit() {
        let mut form = RoastForm::new();
        form.select_tag("gordon");
        form.set_artifact(screenshot());
        form.submit();

        form.resolve::<&str>(Err("connection reset"));
        assert_eq!(
            form.state(),
            &FormState::ErrorShown(SUBMIT_ERROR_MESSAGE.to_string())
        );

        assert!(form.can_submit());
        assert!(form.submit().is_some());
    }

    #[test]
    fn test_resolve_without_submission_is_ignored() {
        let mut form = RoastForm::new();
        form.resolve::<()>(Ok("stray".into()));
        assert_eq!(form.state(), &FormState::Idle);
    }
}
