//! Unit tests for the terminal front end

use crate::engine::{FieldId, FieldState, Key, RenderCommand, Surface, TextTarget, UiAction, WorkflowEngine};
use crate::schemas::{Config, Destination, InviteType, ModalId, Theme};
use crate::store::MemoryThemeStore;
use crate::tui::events::{handle_key, KeyOutcome};
use crate::tui::runner::{TuiOptions, TuiRunner};
use crate::tui::state::TuiState;
use crate::tui::widgets::{format_runtime, key_hints, pad_to_width};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn runner(page: Destination) -> TuiRunner<MemoryThemeStore> {
        let engine = WorkflowEngine::new(Config::default(), MemoryThemeStore::new()).unwrap();
        let mut runner = TuiRunner::new(
            engine,
            TuiOptions {
                page,
                show_logs: false,
            },
        );
        runner.start().unwrap();
        runner
    }

    fn type_text(runner: &mut TuiRunner<MemoryThemeStore>, text: &str) {
        for c in text.chars() {
            assert!(!runner.handle_key(key(KeyCode::Char(c))));
        }
    }

    // ===== STATE =====

    #[test]
    fn test_tui_state_creation() {
        let state = TuiState::new();
        assert_eq!(state.page, Destination::Home);
        assert_eq!(state.theme, Theme::Light);
        assert!(state.modals.is_empty());
        assert_eq!(state.invite_entries, vec![0]);
        assert!(state.start_time <= Utc::now());
        assert!(state.logs.is_empty());
        assert!(!state.show_logs);
    }

    #[test]
    fn test_logs_enforce_max_limit() {
        let mut state = TuiState::new();
        for i in 0..600 {
            state.push_log(format!("line {}", i));
        }
        assert_eq!(state.logs.len(), 500);
        assert_eq!(state.logs[0], "line 100");
    }

    #[test]
    fn test_show_page_resets_page_state_but_keeps_theme_and_logs() {
        let mut state = TuiState::new().with_show_logs(true);
        state.render(&RenderCommand::ApplyTheme { theme: Theme::Dark });
        state.set_value(FieldId::SignUpEmail, "ada@example.com".to_string());
        state.open_modal(ModalId::InviteModal);

        state.show_page(Destination::Dashboard);

        assert_eq!(state.page, Destination::Dashboard);
        assert_eq!(state.theme, Theme::Dark);
        assert!(state.show_logs);
        assert!(state.fields.is_empty());
        assert!(state.modals.is_empty());
        assert!(state.logs.iter().any(|l| l == "show page dashboard"));
    }

    #[test]
    fn test_modals_stack_in_open_order() {
        let mut state = TuiState::new();
        state.open_modal(ModalId::ProjectDetailModal);
        state.open_modal(ModalId::ChatModal);
        assert_eq!(state.top_modal(), Some(ModalId::ChatModal));

        state.close_modal(ModalId::ChatModal);
        assert_eq!(state.top_modal(), Some(ModalId::ProjectDetailModal));
    }

    #[test]
    fn test_focus_cycles_through_revealed_fields() {
        let mut state = TuiState::new();
        state.show_page(Destination::SignIn);
        state.cycle_focus(true);
        state.cycle_focus(true);
        assert_eq!(state.focus, Some(FieldId::SignInEmail));

        state.render(&RenderCommand::RevealField { field: FieldId::SignInPassword });
        state.cycle_focus(true);
        assert_eq!(state.focus, Some(FieldId::SignInPassword));
        state.cycle_focus(false);
        assert_eq!(state.focus, Some(FieldId::SignInEmail));
    }

    #[test]
    fn test_remove_invite_entries_drops_their_fields() {
        let mut state = TuiState::new();
        let mut entry = crate::schemas::InviteEntry::blank(1);
        entry.full_name = "Grace".to_string();
        state.append_entry(&entry);
        assert_eq!(state.invite_entries, vec![0, 1]);
        assert_eq!(state.value(FieldId::Invite(1, crate::schemas::InviteField::FullName)), "Grace");

        state.render(&RenderCommand::RemoveInviteEntries { keep: 1 });
        assert_eq!(state.invite_entries, vec![0]);
        assert!(!state
            .fields
            .keys()
            .any(|f| matches!(f, FieldId::Invite(1, _))));
    }

    // ===== KEYS =====

    #[test]
    fn test_ctrl_keys() {
        let mut state = TuiState::new();
        assert_eq!(handle_key(&mut state, ctrl('c'), &[]), KeyOutcome::Quit);
        assert_eq!(
            handle_key(&mut state, ctrl('t'), &[]),
            KeyOutcome::Actions(vec![UiAction::ToggleTheme])
        );
        assert_eq!(handle_key(&mut state, ctrl('l'), &[]), KeyOutcome::Handled);
        assert!(state.show_logs);
    }

    #[test]
    fn test_alert_swallows_next_key() {
        let mut state = TuiState::new();
        state.alert("Please enter your email address");
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q')), &[]), KeyOutcome::Handled);
        assert!(state.alert.is_none());
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q')), &[]), KeyOutcome::Quit);
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut state = TuiState::new();
        state.show_page(Destination::SignUp);
        state.cycle_focus(true);

        handle_key(&mut state, key(KeyCode::Char('A')), &[]);
        let outcome = handle_key(&mut state, key(KeyCode::Char('l')), &[]);
        assert_eq!(
            outcome,
            KeyOutcome::Actions(vec![UiAction::Input {
                field: FieldId::SignUpFullName,
                value: "Al".to_string(),
            }])
        );

        handle_key(&mut state, key(KeyCode::Backspace), &[]);
        assert_eq!(state.value(FieldId::SignUpFullName), "A");
    }

    #[test]
    fn test_locked_field_ignores_typing() {
        let mut state = TuiState::new();
        state.set_field_state(
            FieldId::SignInEmail,
            &FieldState {
                value: "ada@example.com".to_string(),
                disabled: true,
                read_only: false,
            },
        );
        state.focus = Some(FieldId::SignInEmail);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('x')), &[]), KeyOutcome::Handled);
        assert_eq!(state.value(FieldId::SignInEmail), "ada@example.com");
    }

    #[test]
    fn test_escape_clears_focus_and_forwards_key() {
        let mut state = TuiState::new();
        state.focus = Some(FieldId::ProjectName);
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Esc), &[]),
            KeyOutcome::Actions(vec![UiAction::KeyPress { key: Key::Escape, target: None }])
        );
        assert_eq!(state.focus, None);
    }

    #[test]
    fn test_dashboard_enter_selects_project_under_cursor() {
        let projects = Config::default().projects;
        let mut state = TuiState::new();
        state.show_page(Destination::Dashboard);

        for _ in 0..10 {
            handle_key(&mut state, key(KeyCode::Down), &projects);
        }
        assert_eq!(state.project_cursor, projects.len() - 1);

        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter), &projects),
            KeyOutcome::Actions(vec![UiAction::SelectProject {
                project: projects[projects.len() - 1].id.clone(),
            }])
        );
    }

    #[test]
    fn test_open_dropdown_routes_keys_to_menu() {
        let mut state = TuiState::new();
        state.show_page(Destination::Dashboard);
        state.dropdown_open = true;
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('n')), &[]),
            KeyOutcome::Actions(vec![UiAction::DocumentClick])
        );
    }

    #[test]
    fn test_invite_type_keys() {
        let mut state = TuiState::new();
        state.show_page(Destination::Dashboard);
        state.open_modal(ModalId::InviteModal);
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('3')), &[]),
            KeyOutcome::Actions(vec![UiAction::SelectInviteType {
                invite_type: InviteType::Client,
            }])
        );
        assert_eq!(state.invite_type, InviteType::Client);
    }

    // ===== RUNNER =====

    #[test]
    fn test_sign_in_by_keyboard_reaches_dashboard() {
        let mut runner = runner(Destination::SignIn);

        runner.handle_key(key(KeyCode::Tab));
        type_text(&mut runner, "ada@example.com");
        runner.handle_key(key(KeyCode::Enter));

        assert!(runner.state().password_revealed);
        assert_eq!(runner.state().focus, Some(FieldId::SignInPassword));
        assert_eq!(runner.state().text(TextTarget::SignInButton), Some("Sign In"));
        assert!(!runner.state().is_editable(FieldId::SignInEmail));

        type_text(&mut runner, "hunter2");
        runner.handle_key(key(KeyCode::Enter));
        assert_eq!(runner.state().page, Destination::SignIn);

        runner.tick(Duration::from_millis(999));
        assert_eq!(runner.state().page, Destination::SignIn);
        runner.tick(Duration::from_millis(1000));
        assert_eq!(runner.state().page, Destination::Dashboard);
    }

    #[test]
    fn test_validation_error_becomes_alert() {
        let mut runner = runner(Destination::SignIn);
        runner.handle_key(key(KeyCode::Enter));
        assert_eq!(
            runner.state().alert.as_deref(),
            Some("Please enter your email address")
        );
        assert!(!runner.state().password_revealed);
    }

    #[test]
    fn test_theme_toggle_persists_to_store() {
        let mut runner = runner(Destination::Home);
        runner.handle_key(ctrl('t'));
        assert_eq!(runner.state().theme, Theme::Dark);
        assert_eq!(runner.engine().store().raw(), Some("dark"));
    }

    #[test]
    fn test_idle_marker_follows_engine() {
        let mut runner = runner(Destination::Dashboard);
        runner.tick(Duration::from_secs(300));
        assert!(runner.state().idle);

        runner.handle_key(key(KeyCode::Down));
        assert!(!runner.state().idle);
    }

    #[test]
    fn test_invite_flow_by_keyboard() {
        let mut runner = runner(Destination::Dashboard);
        runner.handle_key(key(KeyCode::Char('i')));
        runner.handle_key(key(KeyCode::Char('2')));
        runner.handle_key(key(KeyCode::Enter));
        assert_eq!(
            runner.state().text(TextTarget::InviteTitle),
            Some("Set up your contractor, vendor, etc.")
        );

        runner.handle_key(key(KeyCode::Tab));
        type_text(&mut runner, "Grace Hopper");
        runner.handle_key(key(KeyCode::Tab));
        type_text(&mut runner, "grace@example.com");
        runner.handle_key(key(KeyCode::Esc));
        // Escape closes every modal
        assert!(runner.state().modals.is_empty());
    }

    // ===== WIDGETS =====

    #[test]
    fn test_pad_to_width_counts_chars() {
        assert_eq!(pad_to_width("abc", 5), "abc  ");
        assert_eq!(pad_to_width("abcdef", 4), "abc…");
        assert_eq!(pad_to_width("☀️ light mode", 3).chars().count(), 3);
        assert_eq!(pad_to_width("abc", 0), "");
    }

    #[test]
    fn test_format_runtime() {
        let start = Utc::now() - chrono::Duration::seconds(3725);
        assert_eq!(format_runtime(start), "01:02:05");
    }

    #[test]
    fn test_key_hints_follow_context() {
        let mut state = TuiState::new();
        state.show_page(Destination::Dashboard);
        assert!(key_hints(&state).contains("[n] new project"));
        state.open_modal(ModalId::ProjectModal);
        assert!(key_hints(&state).contains("[x] close"));
        state.show_logs = true;
        assert!(key_hints(&state).contains("[^l] page"));
    }

    #[test]
    fn test_every_page_renders() {
        use ratatui::{backend::TestBackend, Terminal};

        let config = Config::default();
        for page in Destination::ALL {
            let mut runner = runner(page);
            if page == Destination::Dashboard {
                runner.send(UiAction::OpenModal { modal: ModalId::ProjectModal });
                runner.send(UiAction::OpenModal { modal: ModalId::InviteModal });
            }
            let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
            terminal
                .draw(|f| crate::tui::widgets::render(f, runner.state(), &config))
                .unwrap();

            let screen: String = terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|cell| cell.symbol())
                .collect();
            assert!(screen.contains("Data Prove"), "missing header on {}", page);
        }
    }
}
