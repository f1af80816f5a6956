/// Example queries offered to the user, in the order the hint list shows them.
pub const EXAMPLES: [&str; 3] = [
    "I'm going to go to Bangalore, let's plan my trip.",
    "I'm going to go to Bangalore, what is the temperature there",
    "I'm going to go to Bangalore, what is the temperature there? And what are the places I can visit?",
];

pub const VALIDATION_MESSAGE: &str = "Please enter a query";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
}

/// Result of one submission cycle. At most one is held at a time, so the
/// response and error panes can never both be visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Response(String),
    Error(String),
}

pub struct QueryPanel {
    pub state: UiState,
    pub input: String,
    pub outcome: Option<Outcome>,
    // Status message for connectivity or other notices
    pub status: Option<String>,
    // Scroll offset for the outcome window
    pub scroll_offset: u16,
}

impl QueryPanel {
    pub fn new() -> Self {
        Self {
            state: UiState::Idle,
            input: String::new(),
            outcome: None,
            status: None,
            scroll_offset: 0,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Copy the example at `index` into the input. An out-of-range index
    /// does nothing.
    pub fn fill_example(&mut self, index: usize) {
        if let Some(example) = EXAMPLES.get(index) {
            self.input = example.to_string();
        }
    }

    /// Start a submission cycle: validate the input and, if it holds a
    /// query, hide any previous outcome and enter the loading state.
    /// Returns the trimmed query, or `None` when validation failed (the
    /// validation message is already on display and no request should go
    /// out).
    pub fn begin_submit(&mut self) -> Option<String> {
        let query = self.input.trim().to_string();
        if query.is_empty() {
            self.set_error(VALIDATION_MESSAGE.to_string());
            return None;
        }
        self.outcome = None;
        self.state = UiState::Loading;
        Some(query)
    }

    /// Return to idle. Runs after every submission, whatever the outcome.
    pub fn finish_submit(&mut self) {
        self.state = UiState::Idle;
    }

    pub fn set_response(&mut self, response: String) {
        self.outcome = Some(Outcome::Response(response));
        self.scroll_offset = 0;
    }

    pub fn set_error(&mut self, message: String) {
        self.outcome = Some(Outcome::Error(message));
        self.scroll_offset = 0;
    }

    /// Drop a displayed response. Errors stay until the next submission
    /// replaces them, and the input text is untouched.
    pub fn clear_response(&mut self) {
        if matches!(self.outcome, Some(Outcome::Response(_))) {
            self.outcome = None;
        }
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    pub fn scroll_up(&mut self) {
        if self.scroll_offset > 0 {
            self.scroll_offset -= 1;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_example_first_literal() {
        let mut panel = QueryPanel::new();
        panel.fill_example(0);
        assert_eq!(panel.input, "I'm going to go to Bangalore, let's plan my trip.");
    }

    #[test]
    fn test_fill_example_out_of_range_is_noop() {
        let mut panel = QueryPanel::new();
        panel.input = "typed so far".to_string();
        panel.fill_example(EXAMPLES.len());
        assert_eq!(panel.input, "typed so far");
    }

    #[test]
    fn test_begin_submit_trims_input() {
        let mut panel = QueryPanel::new();
        panel.input = "  Bangalore trip  ".to_string();
        let query = panel.begin_submit();
        assert_eq!(query.as_deref(), Some("Bangalore trip"));
        assert_eq!(panel.state, UiState::Loading);
        assert!(panel.outcome.is_none());
    }

    #[test]
    fn test_begin_submit_whitespace_only_is_validation_error() {
        let mut panel = QueryPanel::new();
        panel.input = "  ".to_string();
        assert!(panel.begin_submit().is_none());
        assert_eq!(panel.state, UiState::Idle);
        assert_eq!(
            panel.outcome,
            Some(Outcome::Error(VALIDATION_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_begin_submit_hides_previous_outcome() {
        let mut panel = QueryPanel::new();
        panel.set_error("City not found".to_string());
        panel.input = "Bangalore trip".to_string();
        panel.begin_submit();
        assert!(panel.outcome.is_none());
    }

    #[test]
    fn test_finish_submit_restores_idle() {
        let mut panel = QueryPanel::new();
        panel.input = "Bangalore trip".to_string();
        panel.begin_submit();
        panel.set_error("Network error: connection refused".to_string());
        panel.finish_submit();
        assert_eq!(panel.state, UiState::Idle);
    }

    #[test]
    fn test_outcome_is_mutually_exclusive() {
        let mut panel = QueryPanel::new();
        panel.set_response("In Bangalore, visit Lalbagh".to_string());
        panel.set_error("City not found".to_string());
        assert_eq!(panel.outcome, Some(Outcome::Error("City not found".to_string())));
    }

    #[test]
    fn test_clear_response_is_idempotent() {
        let mut panel = QueryPanel::new();
        panel.input = "keep me".to_string();
        panel.set_response("some reply".to_string());
        panel.clear_response();
        panel.clear_response();
        assert!(panel.outcome.is_none());
        assert_eq!(panel.input, "keep me");
    }

    #[test]
    fn test_clear_response_leaves_error_visible() {
        let mut panel = QueryPanel::new();
        panel.set_error("City not found".to_string());
        panel.clear_response();
        assert_eq!(panel.outcome, Some(Outcome::Error("City not found".to_string())));
    }

    #[test]
    fn test_scroll_resets_on_new_response() {
        let mut panel = QueryPanel::new();
        panel.scroll_down();
        panel.scroll_down();
        panel.set_response("reply".to_string());
        assert_eq!(panel.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_up_saturates_at_zero() {
        let mut panel = QueryPanel::new();
        panel.scroll_up();
        assert_eq!(panel.scroll_offset, 0);
    }
}
