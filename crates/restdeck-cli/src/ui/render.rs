//! UI rendering for the three screens and the toast overlay.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use unicode_width::UnicodeWidthStr as _;

use restdeck_core::{Position, Severity};
use restdeck_view::{LoadState, PostField, UserField};

use crate::ui::input::FieldEditor;
use crate::ui::state::{AppState, Mode, Route};
use crate::ui::theme::Theme;

// Layout constants
const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
const TOAST_HEIGHT: u16 = 3;
const TOAST_PADDING: u16 = 4;
const MAX_VISIBLE_TOASTS: usize = 4;

/// Renders the whole UI for the current route, with toasts on top.
pub fn render(frame: &mut Frame, state: &AppState, editor: &FieldEditor, theme: Theme) {
    match state.route() {
        Route::Home => render_home(frame, theme),
        Route::Users => render_users(frame, state, editor, theme),
        Route::Posts => render_posts(frame, state, editor, theme),
    }
    render_toasts(frame, state, theme);
}

/// Landing screen: a centered card with navigation hints.
fn render_home(frame: &mut Frame, theme: Theme) {
    let area = centered_rect(frame.area(), 44, 9);
    let lines = vec![
        Line::from(Span::styled(
            "Welcome to the Home Page!",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please press one of the buttons.",
            Style::default().fg(theme.text()),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[u] Users    [p] Posts",
            Style::default().fg(theme.text()),
        )),
        Line::from(Span::styled(
            "[t] theme    [q] quit",
            Style::default().fg(theme.muted()),
        )),
    ];
    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(bordered_block(theme).title("restdeck"));
    frame.render_widget(card, area);
}

/// Users screen: header (search or form), table, footer hints.
fn render_users(frame: &mut Frame, state: &AppState, editor: &FieldEditor, theme: Theme) {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(frame.area());

    if state.users.form_visible {
        let fields: Vec<(&str, &str)> = UserField::ALL
            .iter()
            .map(|field| {
                let value = match field {
                    UserField::Name => state.users.new_draft.name.as_str(),
                    UserField::Username => state.users.new_draft.username.as_str(),
                    UserField::Email => state.users.new_draft.email.as_str(),
                };
                (field.label(), value)
            })
            .collect();
        render_form_header(frame, chunks[0], "Add User", &fields, state.mode, theme);
    } else {
        render_search_header(
            frame,
            chunks[0],
            "Search users by name",
            &state.users.search,
            state.mode,
            editor,
            theme,
        );
    }

    match state.users.load {
        LoadState::Loading => render_status_line(frame, chunks[1], "Loading users...", theme, false),
        LoadState::Failed => render_status_line(
            frame,
            chunks[1],
            "Failed to load users (see debug.log)",
            theme,
            true,
        ),
        LoadState::Loaded => render_users_table(frame, chunks[1], state, theme),
    }

    render_footer(frame, chunks[2], state.mode, theme);
}

/// Posts screen: same shape as users with joined owner columns.
fn render_posts(frame: &mut Frame, state: &AppState, editor: &FieldEditor, theme: Theme) {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(frame.area());

    if state.posts.form_visible {
        let fields: Vec<(&str, &str)> = PostField::ALL
            .iter()
            .map(|field| {
                let value = match field {
                    PostField::UserId => state.posts.new_input.user_id.as_str(),
                    PostField::Title => state.posts.new_input.title.as_str(),
                };
                (field.label(), value)
            })
            .collect();
        render_form_header(frame, chunks[0], "Add Post", &fields, state.mode, theme);
    } else {
        render_search_header(
            frame,
            chunks[0],
            "Search posts by user name",
            &state.posts.search,
            state.mode,
            editor,
            theme,
        );
    }

    match state.posts.load {
        LoadState::Loading => render_status_line(frame, chunks[1], "Loading posts...", theme, false),
        LoadState::Failed => render_status_line(
            frame,
            chunks[1],
            "Failed to load posts (see debug.log)",
            theme,
            true,
        ),
        LoadState::Loaded => render_posts_table(frame, chunks[1], state, theme),
    }

    render_footer(frame, chunks[2], state.mode, theme);
}

/// The users table, with the editing row showing its draft values.
fn render_users_table(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let rows: Vec<Row> = state
        .users
        .filtered()
        .enumerate()
        .map(|(index, user)| {
            let editing = state.users.editing_id == Some(user.id);
            let cells: Vec<Cell> = if editing {
                vec![
                    Cell::from(user.id.to_string()),
                    Cell::from(state.users.editing_draft.name.clone()),
                    Cell::from(state.users.editing_draft.username.clone()),
                    Cell::from(state.users.editing_draft.email.clone()),
                ]
            } else {
                vec![
                    Cell::from(user.id.to_string()),
                    Cell::from(user.name.clone()),
                    Cell::from(user.username.clone()),
                    Cell::from(user.email.clone()),
                ]
            };
            Row::new(cells).style(row_style(index, editing, state, theme))
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
        Constraint::Percentage(40),
    ];
    let table = Table::new(rows, widths)
        .header(header_row(&["Id", "Name", "Username", "Email"], theme))
        .block(bordered_block(theme).title("Users"));
    frame.render_widget(table, area);
}

/// The posts table: each row joined with its owner, placeholders for
/// dangling references. The editing row resolves its owner from the draft
/// user id as it is typed.
fn render_posts_table(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let joined = state.posts.joined_rows();
    let rows: Vec<Row> = joined
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let editing = state.posts.editing_id == Some(row.post.id);
            let cells: Vec<Cell> = if editing {
                let owner = state
                    .posts
                    .editing_input
                    .parsed_user_id()
                    .and_then(|user_id| state.posts.users.iter().find(|user| user.id == user_id));
                vec![
                    Cell::from(row.post.id.to_string()),
                    Cell::from(owner.map_or("Unknown", |user| user.name.as_str()).to_owned()),
                    Cell::from(owner.map_or("-", |user| user.username.as_str()).to_owned()),
                    Cell::from(owner.map_or("-", |user| user.email.as_str()).to_owned()),
                    Cell::from(state.posts.editing_input.title.clone()),
                ]
            } else {
                vec![
                    Cell::from(row.post.id.to_string()),
                    Cell::from(row.owner_name().to_owned()),
                    Cell::from(row.owner_username().to_owned()),
                    Cell::from(row.owner_email().to_owned()),
                    Cell::from(row.post.title.clone()),
                ]
            };
            Row::new(cells).style(row_style(index, editing, state, theme))
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Percentage(18),
        Constraint::Percentage(16),
        Constraint::Percentage(24),
        Constraint::Percentage(36),
    ];
    let table = Table::new(rows, widths)
        .header(header_row(
            &["Post Id", "Name", "Username", "Email", "Title"],
            theme,
        ))
        .block(bordered_block(theme).title("Posts"));
    frame.render_widget(table, area);
}

/// Style for a table row given selection and editing state.
fn row_style(index: usize, editing: bool, state: &AppState, theme: Theme) -> Style {
    let mut style = if editing {
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(theme.text())
    };
    let selectable = matches!(state.mode, Mode::Browse | Mode::Edit { .. });
    if selectable && index == state.selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

/// Header with the search prompt and current query.
fn render_search_header(
    frame: &mut Frame,
    area: Rect,
    prompt: &str,
    query: &str,
    mode: Mode,
    editor: &FieldEditor,
    theme: Theme,
) {
    let searching = mode == Mode::Search;
    let shown = if searching { editor.text() } else { query.to_owned() };
    let mut spans = vec![
        Span::styled(format!("{prompt}: "), Style::default().fg(theme.muted())),
        Span::styled(shown, Style::default().fg(theme.text())),
    ];
    if searching {
        spans.push(Span::styled("|", Style::default().fg(theme.accent())));
    }
    let paragraph = Paragraph::new(Line::from(spans)).block(bordered_block(theme));
    frame.render_widget(paragraph, area);
}

/// Header with the creation form fields, focused field highlighted.
fn render_form_header(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    fields: &[(&str, &str)],
    mode: Mode,
    theme: Theme,
) {
    let focused = match mode {
        Mode::Form { field } => Some(field),
        Mode::Browse | Mode::Search | Mode::Edit { .. } => None,
    };
    let mut spans = Vec::new();
    for (index, (label, value)) in fields.iter().enumerate() {
        let style = if focused == Some(index) {
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(theme.text())
        };
        spans.push(Span::styled(
            format!("{label}: "),
            Style::default().fg(theme.muted()),
        ));
        spans.push(Span::styled((*value).to_owned(), style));
        spans.push(Span::raw("  "));
    }
    let paragraph = Paragraph::new(Line::from(spans)).block(bordered_block(theme).title(title.to_owned()));
    frame.render_widget(paragraph, area);
}

/// Loading/failure line shown in place of a table.
fn render_status_line(frame: &mut Frame, area: Rect, text: &str, theme: Theme, failed: bool) {
    let color = if failed {
        theme.severity(Severity::Error)
    } else {
        theme.muted()
    };
    let paragraph = Paragraph::new(text.to_owned())
        .style(Style::default().fg(color))
        .block(bordered_block(theme));
    frame.render_widget(paragraph, area);
}

/// Key hints for the current interaction mode.
fn render_footer(frame: &mut Frame, area: Rect, mode: Mode, theme: Theme) {
    let hints = match mode {
        Mode::Browse => "[/] search  [a] add  [e] edit  [d] delete  [Esc] back  [q] quit",
        Mode::Search => "type to filter  [Enter]/[Esc] done",
        Mode::Edit { .. } => "type to edit  [Tab] next field  [Enter] save  [Up/Down] edit other row",
        Mode::Form { .. } => "type to fill  [Tab] next field  [Enter] save  [Esc] close form",
    };
    let paragraph = Paragraph::new(hints).style(Style::default().fg(theme.muted()));
    frame.render_widget(paragraph, area);
}

/// Toast overlay: newest notices first, stacked per position.
fn render_toasts(frame: &mut Frame, state: &AppState, theme: Theme) {
    let area = frame.area();
    let mut next_right_y: u16 = 1;
    let mut next_center_y: u16 = 1;

    for toast in state.toasts.visible().iter().rev().take(MAX_VISIBLE_TOASTS) {
        let text = toast.notice.text.as_str();
        let width = (text.width() as u16 + TOAST_PADDING).min(area.width);
        let y_slot = match toast.notice.position {
            Position::TopRight => &mut next_right_y,
            Position::TopCenter => &mut next_center_y,
        };
        let x = match toast.notice.position {
            Position::TopRight => area.width.saturating_sub(width + 1),
            Position::TopCenter => area.width.saturating_sub(width) / 2,
        };
        let rect = Rect {
            x,
            y: *y_slot,
            width,
            height: TOAST_HEIGHT,
        };
        if rect.bottom() > area.height {
            break;
        }
        *y_slot += TOAST_HEIGHT;

        let border = Style::default().fg(theme.severity(toast.notice.severity));
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(theme.text()))
                .block(Block::default().borders(Borders::ALL).border_style(border)),
            rect,
        );
    }
}

/// Standard bordered block in the theme's border color.
fn bordered_block(theme: Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border()))
}

/// Bold header row for a table.
fn header_row(titles: &[&'static str], theme: Theme) -> Row<'static> {
    Row::new(
        titles
            .iter()
            .map(|title| Cell::from(*title))
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD),
    )
}

/// A rect of the given size centered in `area`, clamped to it.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
