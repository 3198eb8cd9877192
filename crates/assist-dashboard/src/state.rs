/// Everything the dashboard remembers between control events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub show_processed: bool,
}

impl DashboardState {
    pub fn new(show_processed: bool) -> Self {
        Self { show_processed }
    }

    /// Flips the processed filter and returns the new value.
    pub fn toggle_processed(&mut self) -> bool {
        self.show_processed = !self.show_processed;
        self.show_processed
    }

    /// Text of the toggle control: it offers the view that is *not* shown.
    pub fn toggle_label(&self) -> &'static str {
        if self.show_processed {
            "Show Unprocessed"
        } else {
            "Show Processed"
        }
    }

    pub fn emails_heading(&self) -> &'static str {
        if self.show_processed {
            "Processed Emails"
        } else {
            "Unprocessed Emails"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DashboardState;

    #[test]
    fn toggle_flips_label() {
        let mut state = DashboardState::default();
        assert_eq!(state.toggle_label(), "Show Processed");
        assert!(state.toggle_processed());
        assert_eq!(state.toggle_label(), "Show Unprocessed");
        assert_eq!(state.emails_heading(), "Processed Emails");
        assert!(!state.toggle_processed());
        assert_eq!(state.toggle_label(), "Show Processed");
    }
}
