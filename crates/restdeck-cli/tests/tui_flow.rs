//! End-to-end TUI flows driven by scripted input over a test backend.

use std::sync::Arc;

use crossterm::event::{Event, KeyCode};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use restdeck_api::MockCollectionClient;
use restdeck_cli::ui::TuiApp;
use restdeck_cli::ui::event_source::ScriptedEventSource;
use restdeck_cli::ui::state::Route;
use restdeck_cli::ui::theme::Theme;
use restdeck_core::{Post, User};

fn user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_owned(),
        username: name.to_lowercase(),
        email: format!("{}@example.com", name.to_lowercase()),
    }
}

fn post(id: i64, user_id: i64, title: &str) -> Post {
    Post {
        id,
        user_id,
        title: title.to_owned(),
    }
}

fn app_with(events: Vec<Event>, client: MockCollectionClient) -> TuiApp<TestBackend> {
    let backend = TestBackend::new(100, 30);
    let terminal = Terminal::new(backend).expect("terminal init failed");
    TuiApp::new(
        terminal,
        Box::new(ScriptedEventSource::new(events)),
        Arc::new(client),
        Theme::default(),
    )
}

fn buffer_text(app: &TuiApp<TestBackend>) -> String {
    app.terminal()
        .backend()
        .buffer()
        .content
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

#[tokio::test]
async fn test_home_screen_shows_welcome_toast() {
    let mut app = app_with(Vec::new(), MockCollectionClient::new());
    app.run().await.expect("run failed");

    let text = buffer_text(&app);
    assert!(text.contains("Welcome to the Home Page!"));
    assert!(text.contains("Welcome!"), "startup toast visible");
}

#[tokio::test]
async fn test_users_screen_lists_records() {
    let client = MockCollectionClient::new().with_users(vec![user(1, "Ann"), user(2, "Ben")]);
    let mut app = app_with(
        vec![ScriptedEventSource::key(KeyCode::Char('u'))],
        client.clone(),
    );
    app.run().await.expect("run failed");

    assert_eq!(app.state().route(), Route::Users);
    let text = buffer_text(&app);
    assert!(text.contains("Ann"));
    assert!(text.contains("ben@example.com"));
    assert!(text.contains("I direct you!"), "navigation toast visible");
    assert!(client.call_history().contains(&"list_users".to_owned()));
}

#[tokio::test]
async fn test_posts_screen_joins_owner_columns() {
    let client = MockCollectionClient::new()
        .with_users(vec![user(5, "Cid")])
        .with_posts(vec![post(9, 5, "Hi")]);
    let mut app = app_with(vec![ScriptedEventSource::key(KeyCode::Char('p'))], client);
    app.run().await.expect("run failed");

    let text = buffer_text(&app);
    assert!(text.contains("Cid"));
    assert!(text.contains("Hi"));
}

#[tokio::test]
async fn test_posts_screen_renders_placeholders_for_dangling_owner() {
    let client = MockCollectionClient::new().with_posts(vec![post(9, 5, "Hi")]);
    let mut app = app_with(vec![ScriptedEventSource::key(KeyCode::Char('p'))], client);
    app.run().await.expect("run failed");

    let text = buffer_text(&app);
    assert!(text.contains("Unknown"), "dangling owner renders a placeholder");
    assert!(text.contains("Hi"));
}

#[tokio::test]
async fn test_search_hides_non_matching_rows() {
    let client = MockCollectionClient::new().with_users(vec![user(1, "Ann"), user(2, "Ben")]);
    let mut events = vec![
        ScriptedEventSource::key(KeyCode::Char('u')),
        ScriptedEventSource::key(KeyCode::Char('/')),
    ];
    events.extend(ScriptedEventSource::typed("b"));
    events.push(ScriptedEventSource::key(KeyCode::Esc));
    let mut app = app_with(events, client);
    app.run().await.expect("run failed");

    let text = buffer_text(&app);
    assert!(text.contains("Ben"));
    assert!(!text.contains("Ann"), "prefix filter hides the other row");
}

#[tokio::test]
async fn test_blank_add_form_warns_but_still_posts() {
    let client = MockCollectionClient::new().with_users(vec![user(1, "Ann")]);
    let events = vec![
        ScriptedEventSource::key(KeyCode::Char('u')),
        ScriptedEventSource::key(KeyCode::Char('a')),
        ScriptedEventSource::key(KeyCode::Enter),
    ];
    let mut app = app_with(events, client.clone());
    app.run().await.expect("run failed");

    let text = buffer_text(&app);
    assert!(text.contains("Please fill in all fields!"));
    assert_eq!(app.state().users.items.len(), 1, "nothing appended");
    // The users create path sends the request before validating.
    assert!(client.call_history().contains(&"create_user".to_owned()));
}

#[tokio::test]
async fn test_users_add_flow_appends_record() {
    let client = MockCollectionClient::new().with_users(vec![user(3, "Ann")]);
    let mut events = vec![
        ScriptedEventSource::key(KeyCode::Char('u')),
        ScriptedEventSource::key(KeyCode::Char('a')),
    ];
    events.extend(ScriptedEventSource::typed("Cid"));
    events.push(ScriptedEventSource::key(KeyCode::Tab));
    events.extend(ScriptedEventSource::typed("cid"));
    events.push(ScriptedEventSource::key(KeyCode::Tab));
    events.extend(ScriptedEventSource::typed("cid@example.com"));
    events.push(ScriptedEventSource::key(KeyCode::Enter));
    let mut app = app_with(events, client.clone());
    app.run().await.expect("run failed");

    assert_eq!(app.state().users.items.len(), 2);
    assert_eq!(app.state().users.items[1].id, 4, "max id + 1");
    assert!(!app.state().users.form_visible, "form hidden after add");
    let text = buffer_text(&app);
    assert!(text.contains("Cid"));
}

#[tokio::test]
async fn test_load_failure_surfaces_error_state() {
    let client = MockCollectionClient::new()
        .with_users(vec![user(1, "Ann")])
        .with_failure("list_users");
    let mut app = app_with(vec![ScriptedEventSource::key(KeyCode::Char('u'))], client);
    app.run().await.expect("run failed");

    let text = buffer_text(&app);
    assert!(text.contains("Failed to load users"));
    assert!(app.state().users.items.is_empty());
}
