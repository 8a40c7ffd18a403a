//! TUI application: event loop and per-screen key handling.
//!
//! All state mutation happens on the event-loop task in response to
//! discrete input events. Remote operations are awaited inline, so a
//! response can never arrive after its screen was left; the two initial
//! posts-screen list requests still run concurrently inside the view-model.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;

use restdeck_core::{CollectionClient, Notice, NotificationSink as _, Result, UserDraft};
use restdeck_view::{PostField, PostInput, PostsPage, UserField, UsersPage};

use crate::ui::event_source::InputEventSource;
use crate::ui::input::FieldEditor;
use crate::ui::render;
use crate::ui::state::{AppState, Mode, Route};
use crate::ui::theme::Theme;

/// How long to wait for input before a housekeeping tick.
const TICK: Duration = Duration::from_millis(200);
/// Toast shown once at startup.
const WELCOME: &str = "Welcome!";
/// Toast shown when navigating from the home screen.
const DIRECTING: &str = "I direct you!";

/// Main TUI application
pub struct TuiApp<B: Backend> {
    /// Terminal instance used to render the UI
    terminal: Terminal<B>,
    /// Source of input events (abstracted for testing)
    events: Box<dyn InputEventSource>,
    /// Remote collection client shared by all screens
    client: Arc<dyn CollectionClient>,
    /// Routing, view-models, and the toast overlay
    state: AppState,
    /// Editor for the currently focused text field
    editor: FieldEditor,
    /// Active color theme
    theme: Theme,
    /// Set when the user asked to quit
    should_quit: bool,
}

impl<B: Backend> TuiApp<B> {
    /// Creates an app over the given terminal, input source, and client.
    pub fn new(
        terminal: Terminal<B>,
        events: Box<dyn InputEventSource>,
        client: Arc<dyn CollectionClient>,
        theme: Theme,
    ) -> Self {
        Self {
            terminal,
            events,
            client,
            state: AppState::new(),
            editor: FieldEditor::new(),
            theme,
            should_quit: false,
        }
    }

    /// Read access to the UI state, for tests.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Read access to the terminal, so tests can inspect the backend buffer.
    #[must_use]
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Runs the event loop until quit or input exhaustion.
    ///
    /// # Errors
    /// Returns an error if event polling or rendering fails.
    pub async fn run(&mut self) -> Result<()> {
        self.state.toasts.notify(Notice::success(WELCOME));
        self.render()?;

        while !self.should_quit {
            if self.events.poll(TICK)? {
                let event = self.events.read()?;
                if let Event::Key(key) = event
                    && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
                {
                    self.handle_key(key).await?;
                }
            } else if self.events.exhausted() {
                break;
            }

            self.state.toasts.prune();
            self.render()?;
        }

        Ok(())
    }

    /// Renders the current state to the terminal.
    ///
    /// # Errors
    /// Returns an error if drawing to the terminal fails.
    pub fn render(&mut self) -> Result<()> {
        let Self {
            terminal,
            state,
            editor,
            theme,
            ..
        } = self;
        terminal.draw(|frame| render::render(frame, state, editor, *theme))?;
        Ok(())
    }

    /// Dispatches a key press to the current screen's handler.
    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.route() {
            Route::Home => self.handle_home_key(key).await?,
            Route::Users => self.handle_users_key(key).await,
            Route::Posts => self.handle_posts_key(key).await,
        }
        Ok(())
    }

    /// Home screen keys: navigate, cycle theme, quit.
    async fn handle_home_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('t') => self.theme = self.theme.next(),
            KeyCode::Char('u') => {
                self.state.toasts.notify(Notice::success(DIRECTING));
                self.state.push_route(Route::Users);
                self.state.users = UsersPage::new();
                // Show the loading state while the list request is in flight.
                self.render()?;
                let client = Arc::clone(&self.client);
                if let Err(err) = self.state.users.load(client.as_ref()).await {
                    self.state
                        .toasts
                        .notify(Notice::error(format!("Failed to load users: {err}")));
                }
            }
            KeyCode::Char('p') => {
                self.state.toasts.notify(Notice::success(DIRECTING));
                self.state.push_route(Route::Posts);
                self.state.posts = PostsPage::new();
                self.render()?;
                let client = Arc::clone(&self.client);
                if let Err(err) = self.state.posts.load(client.as_ref()).await {
                    self.state
                        .toasts
                        .notify(Notice::error(format!("Failed to load posts: {err}")));
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Users screen keys, by interaction mode.
    async fn handle_users_key(&mut self, key: KeyEvent) {
        match self.state.mode {
            Mode::Browse => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc => {
                    self.state.pop_route();
                }
                KeyCode::Up => self.move_selection(-1),
                KeyCode::Down => self.move_selection(1),
                KeyCode::Char('/') => {
                    let query = self.state.users.search.clone();
                    self.editor.set_text(&query);
                    self.state.mode = Mode::Search;
                }
                KeyCode::Char('a') => self.toggle_users_form(),
                KeyCode::Char('e') => {
                    if let Some(id) = self.selected_user_id() {
                        self.state.users.begin_edit(id);
                        self.focus_user_field(Mode::Edit { field: 0 });
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(id) = self.selected_user_id() {
                        let client = Arc::clone(&self.client);
                        if let Err(err) = self.state.users.delete(client.as_ref(), id).await {
                            self.state
                                .toasts
                                .notify(Notice::error(format!("Delete failed: {err}")));
                        }
                        self.clamp_selection();
                    }
                }
                _ => {}
            },
            Mode::Search => match key.code {
                KeyCode::Esc | KeyCode::Enter => self.state.mode = Mode::Browse,
                _ => {
                    if self.editor.input(key) {
                        self.state.users.search = self.editor.text();
                        self.state.selected = 0;
                    }
                }
            },
            Mode::Edit { field } => match key.code {
                KeyCode::Enter => {
                    let client = Arc::clone(&self.client);
                    match self.state.users.commit_edit(client.as_ref()).await {
                        Ok(()) => {
                            self.state.mode = Mode::Browse;
                            self.clamp_selection();
                        }
                        Err(err) => {
                            // The row stays in edit mode with the unsent draft.
                            self.state
                                .toasts
                                .notify(Notice::error(format!("Update failed: {err}")));
                        }
                    }
                }
                KeyCode::Tab => {
                    let next = (field + 1) % UserField::ALL.len();
                    self.focus_user_field(Mode::Edit { field: next });
                }
                KeyCode::Up | KeyCode::Down => {
                    // Moving rows starts editing the newly selected row,
                    // silently discarding the previous draft.
                    self.move_selection(if key.code == KeyCode::Up { -1 } else { 1 });
                    if let Some(id) = self.selected_user_id() {
                        self.state.users.begin_edit(id);
                        self.focus_user_field(Mode::Edit { field });
                    }
                }
                KeyCode::Esc => {
                    self.state.pop_route();
                }
                _ => {
                    if self.editor.input(key) {
                        self.state
                            .users
                            .set_editing_field(UserField::ALL[field], self.editor.text());
                    }
                }
            },
            Mode::Form { field } => match key.code {
                KeyCode::Enter => {
                    let client = Arc::clone(&self.client);
                    match self
                        .state
                        .users
                        .add_new(client.as_ref(), &mut self.state.toasts)
                        .await
                    {
                        Ok(()) => {
                            if !self.state.users.form_visible {
                                self.state.mode = Mode::Browse;
                            }
                        }
                        Err(err) => {
                            self.state
                                .toasts
                                .notify(Notice::error(format!("Create failed: {err}")));
                        }
                    }
                }
                KeyCode::Tab => {
                    let next = (field + 1) % UserField::ALL.len();
                    self.focus_user_field(Mode::Form { field: next });
                }
                KeyCode::Esc => {
                    self.state.users.form_visible = false;
                    self.state.mode = Mode::Browse;
                }
                _ => {
                    if self.editor.input(key) {
                        self.state
                            .users
                            .set_new_field(UserField::ALL[field], self.editor.text());
                    }
                }
            },
        }
    }

    /// Posts screen keys, by interaction mode.
    async fn handle_posts_key(&mut self, key: KeyEvent) {
        match self.state.mode {
            Mode::Browse => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc => {
                    self.state.pop_route();
                }
                KeyCode::Up => self.move_selection(-1),
                KeyCode::Down => self.move_selection(1),
                KeyCode::Char('/') => {
                    let query = self.state.posts.search.clone();
                    self.editor.set_text(&query);
                    self.state.mode = Mode::Search;
                }
                KeyCode::Char('a') => self.toggle_posts_form(),
                KeyCode::Char('e') => {
                    if let Some(id) = self.selected_post_id() {
                        self.state.posts.begin_edit(id);
                        self.focus_post_field(Mode::Edit { field: 0 });
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(id) = self.selected_post_id() {
                        let client = Arc::clone(&self.client);
                        if let Err(err) = self.state.posts.delete(client.as_ref(), id).await {
                            self.state
                                .toasts
                                .notify(Notice::error(format!("Delete failed: {err}")));
                        }
                        self.clamp_selection();
                    }
                }
                _ => {}
            },
            Mode::Search => match key.code {
                KeyCode::Esc | KeyCode::Enter => self.state.mode = Mode::Browse,
                _ => {
                    if self.editor.input(key) {
                        self.state.posts.search = self.editor.text();
                        self.state.selected = 0;
                    }
                }
            },
            Mode::Edit { field } => match key.code {
                KeyCode::Enter => {
                    let client = Arc::clone(&self.client);
                    match self.state.posts.commit_edit(client.as_ref()).await {
                        Ok(()) => {
                            self.state.mode = Mode::Browse;
                            self.clamp_selection();
                        }
                        Err(err) => {
                            self.state
                                .toasts
                                .notify(Notice::error(format!("Update failed: {err}")));
                        }
                    }
                }
                KeyCode::Tab => {
                    let next = (field + 1) % PostField::ALL.len();
                    self.focus_post_field(Mode::Edit { field: next });
                }
                KeyCode::Up | KeyCode::Down => {
                    self.move_selection(if key.code == KeyCode::Up { -1 } else { 1 });
                    if let Some(id) = self.selected_post_id() {
                        self.state.posts.begin_edit(id);
                        self.focus_post_field(Mode::Edit { field });
                    }
                }
                KeyCode::Esc => {
                    self.state.pop_route();
                }
                _ => {
                    if self.editor.input(key) {
                        self.state
                            .posts
                            .set_editing_field(PostField::ALL[field], self.editor.text());
                    }
                }
            },
            Mode::Form { field } => match key.code {
                KeyCode::Enter => {
                    let client = Arc::clone(&self.client);
                    match self
                        .state
                        .posts
                        .add_new(client.as_ref(), &mut self.state.toasts)
                        .await
                    {
                        Ok(()) => {
                            if !self.state.posts.form_visible {
                                self.state.mode = Mode::Browse;
                            }
                        }
                        Err(err) => {
                            self.state
                                .toasts
                                .notify(Notice::error(format!("Create failed: {err}")));
                        }
                    }
                }
                KeyCode::Tab => {
                    let next = (field + 1) % PostField::ALL.len();
                    self.focus_post_field(Mode::Form { field: next });
                }
                KeyCode::Esc => {
                    self.state.posts.form_visible = false;
                    self.state.mode = Mode::Browse;
                }
                _ => {
                    if self.editor.input(key) {
                        self.state
                            .posts
                            .set_new_field(PostField::ALL[field], self.editor.text());
                    }
                }
            },
        }
    }

    /// Shows or hides the users creation form.
    fn toggle_users_form(&mut self) {
        let visible = !self.state.users.form_visible;
        self.state.users.form_visible = visible;
        if visible {
            self.focus_user_field(Mode::Form { field: 0 });
        } else {
            self.state.mode = Mode::Browse;
        }
    }

    /// Shows or hides the posts creation form.
    fn toggle_posts_form(&mut self) {
        let visible = !self.state.posts.form_visible;
        self.state.posts.form_visible = visible;
        if visible {
            self.focus_post_field(Mode::Form { field: 0 });
        } else {
            self.state.mode = Mode::Browse;
        }
    }

    /// Switches mode and loads the focused user field into the editor.
    fn focus_user_field(&mut self, mode: Mode) {
        let text = match mode {
            Mode::Edit { field } => {
                user_field_value(&self.state.users.editing_draft, UserField::ALL[field]).to_owned()
            }
            Mode::Form { field } => {
                user_field_value(&self.state.users.new_draft, UserField::ALL[field]).to_owned()
            }
            Mode::Browse | Mode::Search => String::new(),
        };
        self.editor.set_text(&text);
        self.state.mode = mode;
    }

    /// Switches mode and loads the focused post field into the editor.
    fn focus_post_field(&mut self, mode: Mode) {
        let text = match mode {
            Mode::Edit { field } => {
                post_field_value(&self.state.posts.editing_input, PostField::ALL[field]).to_owned()
            }
            Mode::Form { field } => {
                post_field_value(&self.state.posts.new_input, PostField::ALL[field]).to_owned()
            }
            Mode::Browse | Mode::Search => String::new(),
        };
        self.editor.set_text(&text);
        self.state.mode = mode;
    }

    /// Id of the selected row in the users filtered view.
    fn selected_user_id(&self) -> Option<i64> {
        self.state
            .users
            .filtered()
            .nth(self.state.selected)
            .map(|user| user.id)
    }

    /// Id of the selected row in the posts filtered view.
    fn selected_post_id(&self) -> Option<i64> {
        self.state
            .posts
            .filtered()
            .nth(self.state.selected)
            .map(|post| post.id)
    }

    /// Number of rows in the current screen's filtered view.
    fn visible_rows(&self) -> usize {
        match self.state.route() {
            Route::Home => 0,
            Route::Users => self.state.users.filtered().count(),
            Route::Posts => self.state.posts.filtered().count(),
        }
    }

    /// Moves the selection, clamped to the filtered view.
    fn move_selection(&mut self, delta: isize) {
        let rows = self.visible_rows();
        if rows == 0 {
            self.state.selected = 0;
            return;
        }
        let current = self.state.selected as isize;
        let next = (current + delta).clamp(0, rows as isize - 1);
        self.state.selected = next as usize;
    }

    /// Keeps the selection inside the filtered view after rows changed.
    fn clamp_selection(&mut self) {
        let rows = self.visible_rows();
        self.state.selected = self.state.selected.min(rows.saturating_sub(1));
    }
}

/// Value of a user draft field.
fn user_field_value(draft: &UserDraft, field: UserField) -> &str {
    match field {
        UserField::Name => &draft.name,
        UserField::Username => &draft.username,
        UserField::Email => &draft.email,
    }
}

/// Value of a post input field.
fn post_field_value(input: &PostInput, field: PostField) -> &str {
    match field {
        PostField::UserId => &input.user_id,
        PostField::Title => &input.title,
    }
}
