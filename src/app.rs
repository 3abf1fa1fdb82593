use crate::config::Config;
use crate::todo::{TodoItem, TodoList};
use crate::ui::Theme;

/// Where keyboard input goes - the entry bar or the item list.
///
/// The original touch UI had no focus concept; a keyboard UI needs one so
/// that typed characters either extend the draft or drive list navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Entry bar focused - characters edit the draft
    Entry,
    /// List focused - keys navigate and act on the selected item
    List,
}

/// Application state for the single to-do screen
pub struct App {
    /// Draft text for the next item, not yet submitted
    draft: String,
    /// The to-do collection
    todos: TodoList,
    /// Currently selected index into the list
    selected: usize,
    /// Current keyboard focus
    focus: Focus,
    /// Configuration
    config: Config,
    /// Resolved theme colors
    theme: Theme,
}

impl App {
    pub fn new(config: Config, theme: Theme) -> Self {
        let focus = if config.behavior.start_in_entry {
            Focus::Entry
        } else {
            Focus::List
        };

        Self {
            draft: String::new(),
            todos: TodoList::new(),
            selected: 0,
            focus,
            config,
            theme,
        }
    }

    /// Current draft text
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether the draft would produce an item if submitted.
    /// The add affordances render as disabled when this is false.
    pub fn can_add(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Append a character to the draft
    pub fn push_draft_char(&mut self, c: char) {
        self.draft.push(c);
    }

    /// Remove the last character from the draft
    pub fn pop_draft_char(&mut self) {
        self.draft.pop();
    }

    /// Submit the draft as a new item.
    ///
    /// Both add triggers (Enter in the entry bar, Ctrl+A anywhere) land
    /// here; the blank-draft guard lives in [`TodoList::add`] alone. The
    /// draft is cleared only when an item was actually created, and the
    /// selection moves to the new item.
    pub fn submit_draft(&mut self) {
        if let Some(id) = self.todos.add(&self.draft) {
            self.draft.clear();
            self.selected = self.todos.len() - 1;
            tracing::info!("Created todo {}", id);
        }
    }

    /// Flip completion of the selected item
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_item().map(|item| item.id) {
            self.todos.toggle(id);
        }
    }

    /// Delete the selected item and clamp the selection
    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_item().map(|item| item.id) {
            self.todos.remove(id);
            self.clamp_selection();
        }
    }

    /// The item under the cursor, if any
    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.todos.get(self.selected)
    }

    /// Selected index
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Move selection up
    pub fn previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down
    pub fn next(&mut self) {
        if self.selected < self.todos.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.todos.len() {
            self.selected = self.todos.len().saturating_sub(1);
        }
    }

    /// Current keyboard focus
    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_entry_focused(&self) -> bool {
        self.focus == Focus::Entry
    }

    /// Move focus to the entry bar
    pub fn focus_entry(&mut self) {
        self.focus = Focus::Entry;
    }

    /// Move focus to the list
    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
    }

    /// The to-do collection
    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    /// Get config reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get resolved theme reference
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let config = Config::default();
        let theme = config.resolve_theme();
        App::new(config, theme)
    }

    #[test]
    fn test_blank_submit_keeps_draft() {
        let mut app = app();
        app.push_draft_char(' ');
        app.push_draft_char(' ');

        app.submit_draft();

        assert!(app.todos().is_empty());
        assert_eq!(app.draft(), "  ");
        assert!(!app.can_add());
    }

    #[test]
    fn test_submit_clears_draft_and_selects_new_item() {
        let mut app = app();
        for c in "Buy milk".chars() {
            app.push_draft_char(c);
        }
        assert!(app.can_add());

        app.submit_draft();

        assert_eq!(app.draft(), "");
        assert_eq!(app.todos().len(), 1);
        assert_eq!(app.selected_item().unwrap().text, "Buy milk");
    }

    #[test]
    fn test_selection_clamps_after_removing_last_row() {
        let mut app = app();
        for text in ["A", "B", "C"] {
            for c in text.chars() {
                app.push_draft_char(c);
            }
            app.submit_draft();
        }
        // Submitting selects the newest item, i.e. the last row
        assert_eq!(app.selected_index(), 2);

        app.remove_selected();

        assert_eq!(app.todos().len(), 2);
        assert_eq!(app.selected_index(), 1);
        assert_eq!(app.selected_item().unwrap().text, "B");
    }

    #[test]
    fn test_toggle_selected_flips_item() {
        let mut app = app();
        app.push_draft_char('A');
        app.submit_draft();

        app.toggle_selected();
        assert!(app.selected_item().unwrap().completed);

        app.toggle_selected();
        assert!(!app.selected_item().unwrap().completed);
    }

    #[test]
    fn test_actions_on_empty_list_are_noops() {
        let mut app = app();
        app.toggle_selected();
        app.remove_selected();
        app.next();
        app.previous();

        assert!(app.todos().is_empty());
        assert_eq!(app.selected_index(), 0);
    }
}
