use crate::catalog::{self, CodeSample, ElementEntry};
use crate::filter::{CategoryFilter, filter_entries};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Category sidebar, filtered element list, detail panel.
    Elements,
    /// The static code samples.
    Samples,
    Help,
}

/// Application state.
///
/// All state is UI-local: the search text, the selected category and the
/// list selection. The catalog itself is static. Filtering is recomputed
/// synchronously by [`App::refilter`] whenever a criterion changes.
pub struct App {
    pub query: String,
    /// 0 selects all categories; `i + 1` selects `catalog::categories()[i]`.
    pub category_index: usize,
    /// Visible entries under the current criteria, in catalog order.
    pub results: Vec<&'static ElementEntry>,
    pub selected: usize,
    pub view: View,
    /// View to return to when leaving help.
    pub previous_view: View,
    /// Index into `catalog::samples()`.
    pub sample_index: usize,
    pub sample_scroll: usize,
    pub status_message: String,
    /// Pending key for vim multi-key commands (e.g. 'g' for 'gg')
    pub pending_key: Option<char>,
}

impl App {
    pub fn new(initial_query: Option<String>) -> Self {
        let mut app = Self {
            query: initial_query.unwrap_or_default(),
            category_index: 0,
            results: Vec::new(),
            selected: 0,
            view: View::Elements,
            previous_view: View::Elements,
            sample_index: 0,
            sample_scroll: 0,
            status_message: String::new(),
            pending_key: None,
        };
        app.refilter();
        app
    }

    /// The label of the selected category, or `None` for "all".
    pub fn category_label(&self) -> Option<&'static str> {
        if self.category_index == 0 {
            None
        } else {
            Some(catalog::categories()[self.category_index - 1])
        }
    }

    fn category_filter(&self) -> CategoryFilter {
        match self.category_label() {
            Some(label) => CategoryFilter::Named(label.to_string()),
            None => CategoryFilter::All,
        }
    }

    /// Recompute the visible entries from the current criteria.
    ///
    /// Called by every input handler that edits the search text or the
    /// category selection; the selection is clamped into the new result set.
    pub fn refilter(&mut self) {
        self.results = filter_entries(catalog::entries(), &self.query, &self.category_filter());
        self.selected = self.selected.min(self.results.len().saturating_sub(1));

        let total = catalog::entries().len();
        self.status_message = match self.category_label() {
            Some(label) => format!("{} of {} elements ({})", self.results.len(), total, label),
            None => format!("{} of {} elements", self.results.len(), total),
        };
    }

    // Query editing

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.refilter();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.refilter();
    }

    /// Delete word backward from the search text (Ctrl+w)
    pub fn delete_word(&mut self) {
        while self.query.ends_with(' ') {
            self.query.pop();
        }
        while !self.query.is_empty() && !self.query.ends_with(' ') {
            self.query.pop();
        }
        self.refilter();
    }

    // Category selection

    /// Cycle to the next category ("all" comes first, wraps around).
    pub fn next_category(&mut self) {
        self.category_index = (self.category_index + 1) % (catalog::categories().len() + 1);
        self.refilter();
    }

    pub fn prev_category(&mut self) {
        let count = catalog::categories().len() + 1;
        self.category_index = (self.category_index + count - 1) % count;
        self.refilter();
    }

    // List selection

    pub fn select_next(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + 1).min(self.results.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_page_down(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + 10).min(self.results.len() - 1);
        }
    }

    pub fn select_page_up(&mut self) {
        self.selected = self.selected.saturating_sub(10);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        if !self.results.is_empty() {
            self.selected = self.results.len() - 1;
        }
    }

    pub fn selected_entry(&self) -> Option<&'static ElementEntry> {
        self.results.get(self.selected).copied()
    }

    // View switching

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Elements => View::Samples,
            View::Samples => View::Elements,
            View::Help => View::Help,
        };
    }

    pub fn show_help(&mut self) {
        if self.view != View::Help {
            self.previous_view = self.view;
            self.view = View::Help;
        }
    }

    pub fn hide_help(&mut self) {
        if self.view == View::Help {
            self.view = self.previous_view;
        }
    }

    // Code samples

    pub fn sample(&self) -> &'static CodeSample {
        &catalog::samples()[self.sample_index]
    }

    pub fn next_sample(&mut self) {
        self.sample_index = (self.sample_index + 1) % catalog::samples().len();
        self.sample_scroll = 0;
    }

    pub fn prev_sample(&mut self) {
        let count = catalog::samples().len();
        self.sample_index = (self.sample_index + count - 1) % count;
        self.sample_scroll = 0;
    }

    pub fn scroll_sample_down(&mut self) {
        let last = self.sample().content.lines().count().saturating_sub(1);
        self.sample_scroll = (self.sample_scroll + 1).min(last);
    }

    pub fn scroll_sample_up(&mut self) {
        self.sample_scroll = self.sample_scroll.saturating_sub(1);
    }

    pub fn scroll_sample_page_down(&mut self) {
        let last = self.sample().content.lines().count().saturating_sub(1);
        self.sample_scroll = (self.sample_scroll + 20).min(last);
    }

    pub fn scroll_sample_page_up(&mut self) {
        self.sample_scroll = self.sample_scroll.saturating_sub(20);
    }

    pub fn scroll_sample_to_top(&mut self) {
        self.sample_scroll = 0;
    }

    pub fn scroll_sample_to_bottom(&mut self) {
        self.sample_scroll = self.sample().content.lines().count().saturating_sub(20);
    }

    /// Clear pending key state
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_shows_whole_catalog() {
        let app = App::new(None);
        assert_eq!(app.results.len(), catalog::entries().len());
        assert_eq!(app.view, View::Elements);
    }

    #[test]
    fn test_initial_query_is_applied() {
        let app = App::new(Some("img".to_string()));
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.selected_entry().unwrap().tag, "<img>");
    }

    #[test]
    fn test_typing_refilters() {
        let mut app = App::new(None);
        app.push_char('i');
        app.push_char('m');
        app.push_char('g');
        assert_eq!(app.results.len(), 1);
        app.backspace();
        assert!(app.results.len() > 1);
        app.clear_query();
        assert_eq!(app.results.len(), catalog::entries().len());
    }

    #[test]
    fn test_selection_clamped_when_results_shrink() {
        let mut app = App::new(None);
        app.select_last();
        assert_eq!(app.selected, catalog::entries().len() - 1);
        app.push_char('h');
        assert!(app.selected < app.results.len());
    }

    #[test]
    fn test_no_match_clears_selection() {
        let app = App::new(Some("zzzznotfound".to_string()));
        assert!(app.results.is_empty());
        assert!(app.selected_entry().is_none());
    }

    #[test]
    fn test_category_cycling_wraps() {
        let mut app = App::new(None);
        let count = catalog::categories().len() + 1;
        for _ in 0..count {
            app.next_category();
        }
        assert_eq!(app.category_index, 0);
        app.prev_category();
        assert_eq!(app.category_index, count - 1);
    }

    #[test]
    fn test_category_restricts_results() {
        let mut app = App::new(None);
        // Step to the first real category (Básicos).
        app.next_category();
        assert_eq!(app.category_label(), Some("Básicos"));
        assert!(app.results.iter().all(|e| e.category == "Básicos"));
    }

    #[test]
    fn test_status_message_reports_counts() {
        let mut app = App::new(None);
        app.push_char('x');
        assert!(app.status_message.contains("of 58 elements"));
    }

    #[test]
    fn test_help_restores_previous_view() {
        let mut app = App::new(None);
        app.toggle_view();
        assert_eq!(app.view, View::Samples);
        app.show_help();
        assert_eq!(app.view, View::Help);
        app.hide_help();
        assert_eq!(app.view, View::Samples);
    }

    #[test]
    fn test_sample_switching_resets_scroll() {
        let mut app = App::new(None);
        app.scroll_sample_down();
        assert_eq!(app.sample_scroll, 1);
        app.next_sample();
        assert_eq!(app.sample().name, "css");
        assert_eq!(app.sample_scroll, 0);
        app.next_sample();
        assert_eq!(app.sample().name, "basic");
    }
}
