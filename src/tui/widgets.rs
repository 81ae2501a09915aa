//! TUI widget rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::domain::{tool_status_label, InviteStep, DAY_CELLS};
use crate::engine::{FieldId, MenuItem, TextTarget};
use crate::schemas::{
    AllAccessScope, Config, Destination, InviteField, InviteType, ModalId, ProjectAccess,
    ProjectTool, Theme,
};
use crate::tui::state::TuiState;

/// Render the whole screen
pub fn render(f: &mut Frame, state: &TuiState, config: &Config) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], state, config);
    if state.show_logs {
        render_logs_pane(f, chunks[1], state);
    } else {
        render_page(f, chunks[1], state, config);
        render_modals(f, chunks[1], state);
        if state.dropdown_open {
            render_user_menu(f, chunks[1], state);
        }
    }
    render_footer(f, chunks[2], state);

    if let Some(message) = &state.alert {
        let area = f.area();
        render_alert(f, area, state, message);
    }
}

/// Render the header section (3 lines)
pub fn render_header(f: &mut Frame, area: Rect, state: &TuiState, config: &Config) {
    let accent = accent(state.theme);
    let border_width = area.width as usize;
    let name = format!("┌─ {} ", config.company_name);
    let title = Line::from(vec![
        Span::styled(name.clone(), Style::default().fg(accent)),
        Span::styled(
            "─".repeat(border_width.saturating_sub(name.chars().count() + 1)),
            Style::default().fg(accent),
        ),
        Span::styled("┐", Style::default().fg(accent)),
    ]);

    let status = format!(
        "{}  {} {}{}",
        state.page.title(),
        state.theme.toggle_icon(),
        state.theme,
        if state.idle { "  (idle)" } else { "" }
    );
    let status_line = boxed_line(&status, border_width, accent);

    let separator = Line::from(vec![
        Span::styled("├", Style::default().fg(accent)),
        Span::styled("─".repeat(border_width.saturating_sub(2)), Style::default().fg(accent)),
        Span::styled("┤", Style::default().fg(accent)),
    ]);

    f.render_widget(Paragraph::new(Text::from(vec![title, status_line, separator])), area);
}

/// Render the body of the current page
pub fn render_page(f: &mut Frame, area: Rect, state: &TuiState, config: &Config) {
    match state.page {
        Destination::Home => render_home(f, area, state, config),
        Destination::SignIn => render_sign_in(f, area, state),
        Destination::SignUp => render_sign_up(f, area, state),
        Destination::Dashboard => render_dashboard(f, area, state, config),
    }
}

fn render_home(f: &mut Frame, area: Rect, state: &TuiState, config: &Config) {
    let lines = vec![
        Line::from(Span::styled(
            format!("The all-in-one toolkit for working remotely at {}", config.company_name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Projects, to-dos, docs, chat and schedules, all in one place."),
        Line::from(""),
        Line::from("[s] Sign in   [u] Try it free   [d] Dashboard"),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(page_block("Home", state.theme))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_sign_in(f: &mut Frame, area: Rect, state: &TuiState) {
    let mut lines = vec![field_line(state, FieldId::SignInEmail, false), Line::from("")];
    if state.password_revealed {
        lines.push(field_line(state, FieldId::SignInPassword, !state.password_visible));
        lines.push(Line::from(""));
    }
    lines.push(button_line(state.text(TextTarget::SignInButton).unwrap_or("Next")));
    lines.push(Line::from(""));
    lines.push(Line::from("[g] Sign in with Google   [p] show/hide password   [u] Sign up"));

    f.render_widget(
        Paragraph::new(lines).block(page_block("Sign in", state.theme)),
        centered_rect(60, 60, area),
    );
}

fn render_sign_up(f: &mut Frame, area: Rect, state: &TuiState) {
    let mut lines = Vec::new();
    for field in [FieldId::SignUpFullName, FieldId::SignUpEmail, FieldId::SignUpOrganization] {
        lines.push(field_line(state, field, false));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "{} I agree to the terms of service   [t]",
        checkbox(state.terms_accepted)
    )));
    lines.push(Line::from(""));
    lines.push(button_line(state.text(TextTarget::SignUpButton).unwrap_or("Create account")));
    lines.push(Line::from(""));
    lines.push(Line::from("[g] Sign up with Google   [s] Sign in"));

    f.render_widget(
        Paragraph::new(lines).block(page_block("Sign up", state.theme)),
        centered_rect(60, 70, area),
    );
}

fn render_dashboard(f: &mut Frame, area: Rect, state: &TuiState, config: &Config) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let accent = accent(state.theme);
    let projects: Vec<ListItem> = config
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let marker = if index == state.project_cursor { "▶" } else { " " };
            let style = if index == state.project_cursor {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{} {}  {}", marker, project.name, project.tag),
                    style,
                )),
                Line::from(format!("    {}", project.description)),
            ])
        })
        .collect();
    f.render_widget(
        List::new(projects).block(page_block("Projects", state.theme)),
        columns[0],
    );

    f.render_widget(
        Paragraph::new(calendar_lines(state)).block(page_block("Schedule", state.theme)),
        columns[1],
    );
}

/// Month heading plus a seven-column day grid
pub fn calendar_lines(state: &TuiState) -> Vec<Line<'static>> {
    let month = state.calendar_month.clone();
    let mut lines = vec![
        Line::from(Span::styled(
            format!("[ {} ]", month),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let days: Vec<u32> = DAY_CELLS.collect();
    for week in days.chunks(7) {
        let spans: Vec<Span<'static>> = week
            .iter()
            .map(|day| {
                let mut style = Style::default();
                if state.selected_day == Some(*day) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                if state.day_cursor == *day {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                Span::styled(format!("{:>3} ", day), style)
            })
            .collect();
        lines.push(Line::from(spans));
    }
    lines
}

/// Render every open modal, oldest first so the top one ends up in front
pub fn render_modals(f: &mut Frame, area: Rect, state: &TuiState) {
    for (depth, modal) in state.modals.iter().enumerate() {
        let inset = (depth as u16).min(3) * 2;
        let rect = centered_rect(70 - inset, 80 - inset, area);
        f.render_widget(Clear, rect);

        let lines = match modal {
            ModalId::ProjectModal => project_modal_lines(state),
            ModalId::InviteModal => invite_modal_lines(state),
            ModalId::ProjectDetailModal => detail_modal_lines(state),
            other => tool_modal_lines(*other),
        };
        let title = match (modal, &state.project_detail) {
            (ModalId::ProjectDetailModal, Some(detail)) => detail.project.name.clone(),
            (ModalId::InviteModal, _) => state
                .text(TextTarget::InviteTitle)
                .unwrap_or(modal.title())
                .to_string(),
            _ => modal.title().to_string(),
        };
        f.render_widget(
            Paragraph::new(lines)
                .block(page_block(&title, state.theme))
                .wrap(Wrap { trim: false }),
            rect,
        );
    }
}

fn project_modal_lines(state: &TuiState) -> Vec<Line<'static>> {
    let mut lines = vec![
        field_line(state, FieldId::ProjectName, false),
        field_line(state, FieldId::ProjectDescription, false),
        Line::from(""),
        Line::from("Tools"),
    ];
    for (index, tool) in ProjectTool::ALL.iter().enumerate() {
        let marker = if index == state.tool_cursor { "▶" } else { " " };
        lines.push(Line::from(format!(
            "{} {} {:<16} {}",
            marker,
            tool.icon(),
            tool.label(),
            tool_status_label(state.tool_enabled(*tool))
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Access [a]: {} All access  {} Invite only",
        radio(state.access == ProjectAccess::AllAccess),
        radio(state.access == ProjectAccess::InviteOnly)
    )));
    let scope_style = if state.scope_enabled {
        Style::default()
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    lines.push(Line::from(Span::styled(
        format!(
            "  Scope [e]: {} Everyone  {} Employees only",
            radio(state.scope == AllAccessScope::Everyone),
            radio(state.scope == AllAccessScope::EmployeesOnly)
        ),
        scope_style,
    )));
    lines.push(Line::from(""));
    lines.push(button_line("Create project"));
    lines
}

fn invite_modal_lines(state: &TuiState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match state.invite_step {
        InviteStep::ChooseType => {
            for (index, invite_type) in InviteType::ALL.iter().enumerate() {
                lines.push(Line::from(format!(
                    "[{}] {} {}",
                    index + 1,
                    radio(state.invite_type == *invite_type),
                    invite_type.label()
                )));
            }
            lines.push(Line::from(""));
            lines.push(button_line("Next"));
        }
        InviteStep::Details => {
            if let Some(description) = state.text(TextTarget::InviteDescription) {
                lines.push(Line::from(description.to_string()));
                lines.push(Line::from(""));
            }
            for id in &state.invite_entries {
                for field in [
                    InviteField::FullName,
                    InviteField::Email,
                    InviteField::JobTitle,
                    InviteField::Company,
                ] {
                    lines.push(field_line(state, FieldId::Invite(*id, field), false));
                }
                lines.push(Line::from(""));
            }
            lines.push(Line::from("[+] Add another person   [b] Back"));
            lines.push(button_line("Send invitations"));
        }
    }
    lines
}

fn detail_modal_lines(state: &TuiState) -> Vec<Line<'static>> {
    let Some(detail) = &state.project_detail else {
        return vec![Line::from("No project selected")];
    };
    let mut lines = vec![Line::from(detail.project.description.clone()), Line::from("")];
    for (index, tool) in detail.tools.iter().enumerate() {
        let marker = if index == state.tool_cursor { "▶" } else { " " };
        lines.push(Line::from(format!("{} {} {}", marker, tool.icon(), tool.label())));
    }
    lines
}

fn tool_modal_lines(modal: ModalId) -> Vec<Line<'static>> {
    let blurb = ProjectTool::DETAIL
        .iter()
        .find(|tool| tool.modal() == Some(modal))
        .map(|tool| tool.blurb())
        .unwrap_or("");
    vec![Line::from(blurb), Line::from(""), Line::from("[x] close")]
}

fn render_user_menu(f: &mut Frame, area: Rect, state: &TuiState) {
    let width = 20.min(area.width);
    let rect = Rect::new(area.x + area.width.saturating_sub(width), area.y, width, 5);
    f.render_widget(Clear, rect);
    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(index, item)| ListItem::new(format!("[{}] {}", index + 1, item.label())))
        .collect();
    f.render_widget(List::new(items).block(page_block("Account", state.theme)), rect);
}

fn render_alert(f: &mut Frame, area: Rect, state: &TuiState, message: &str) {
    let rect = centered_rect(50, 20, area);
    f.render_widget(Clear, rect);
    let text = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(page_block("Notice", state.theme))
            .wrap(Wrap { trim: false }),
        rect,
    );
}

/// Render the logs pane (full width when toggled)
pub fn render_logs_pane(f: &mut Frame, area: Rect, state: &TuiState) {
    let max_log_lines = area.height.saturating_sub(2) as usize;

    let logs: Vec<ListItem> = if state.logs.is_empty() {
        vec![ListItem::new("(no output yet)")]
    } else {
        let start = state.logs.len().saturating_sub(max_log_lines);
        state.logs[start..]
            .iter()
            .map(|log| ListItem::new(log.as_str()))
            .collect()
    };

    f.render_widget(List::new(logs).block(page_block("Render log", state.theme)), area);
}

/// Render the footer section (3 lines)
pub fn render_footer(f: &mut Frame, area: Rect, state: &TuiState) {
    let accent = accent(state.theme);
    let border_width = area.width as usize;

    let separator = Line::from(vec![
        Span::styled("├", Style::default().fg(accent)),
        Span::styled("─".repeat(border_width.saturating_sub(2)), Style::default().fg(accent)),
        Span::styled("┤", Style::default().fg(accent)),
    ]);
    let keys_text = format!("{} | Runtime: {}", key_hints(state), format_runtime(state.start_time));
    let bottom = Line::from(vec![
        Span::styled("└", Style::default().fg(accent)),
        Span::styled("─".repeat(border_width.saturating_sub(2)), Style::default().fg(accent)),
        Span::styled("┘", Style::default().fg(accent)),
    ]);

    f.render_widget(
        Paragraph::new(Text::from(vec![
            separator,
            boxed_line(&keys_text, border_width, accent),
            bottom,
        ])),
        area,
    );
}

/// Key hints for the current context
pub fn key_hints(state: &TuiState) -> String {
    let logs_label = if state.show_logs { "page" } else { "logs" };
    let context = if state.focus.is_some() {
        "[tab] next field  [enter] submit  [esc] leave field"
    } else if state.top_modal().is_some() {
        "[tab] fields  [x] close  [esc] close all"
    } else if state.page == Destination::Dashboard {
        "[n] new project  [i] invite  [m] menu  [enter] open"
    } else {
        "[tab] fields  [h] home"
    };
    format!("{}  [^t] theme  [^l] {}  [^q] quit", context, logs_label)
}

// ===== HELPER FUNCTIONS =====

fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::Blue,
        Theme::Dark => Color::Cyan,
    }
}

fn page_block(title: &str, theme: Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent(theme)))
        .title(title.to_string())
}

fn boxed_line(text: &str, border_width: usize, accent: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled("│ ", Style::default().fg(accent)),
        Span::raw(pad_to_width(text, border_width.saturating_sub(4))),
        Span::styled(" │", Style::default().fg(accent)),
    ])
}

fn field_line(state: &TuiState, field: FieldId, masked: bool) -> Line<'static> {
    let value = state.value(field);
    let shown = if masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let focused = state.focus == Some(field);
    let mut style = Style::default();
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    if !state.is_editable(field) {
        style = style.add_modifier(Modifier::DIM);
    }
    Line::from(vec![
        Span::raw(format!("{:<24}", field.label())),
        Span::styled(
            format!("{}{}", pad_to_width(&shown, 30), if focused { "▏" } else { " " }),
            style,
        ),
    ])
}

fn button_line(label: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("[ {} ]", label),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn checkbox(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

fn radio(on: bool) -> &'static str {
    if on {
        "(•)"
    } else {
        "( )"
    }
}

/// Rectangle of the given percentage size centered in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Pad string to width in characters (truncate with ellipsis if too long)
pub fn pad_to_width(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        if width == 0 {
            return String::new();
        }
        let kept: String = text.chars().take(width - 1).collect();
        format!("{}…", kept)
    } else {
        format!("{}{}", text, " ".repeat(width - count))
    }
}

/// Format runtime duration
pub fn format_runtime(start_time: chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(start_time);

    let total_seconds = duration.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
