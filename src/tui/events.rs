//! Key handling for the terminal front end
//!
//! Keys either change purely local presentation (focus, cursors, the log
//! pane) or translate into [`UiAction`]s for the engine.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::{InviteStep, DAY_CELLS};
use crate::engine::{FieldId, Key, MenuItem, UiAction};
use crate::schemas::{
    AllAccessScope, Destination, InviteType, ModalId, Project, ProjectAccess, ProjectTool,
};

/// What a key press amounts to
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    Quit,
    /// Send these actions to the engine, in order
    Actions(Vec<UiAction>),
    /// Handled locally; still counts as activity
    Handled,
    Ignored,
}

impl KeyOutcome {
    fn single(action: UiAction) -> Self {
        KeyOutcome::Actions(vec![action])
    }
}

/// Translate a key press, updating local-only state along the way
pub fn handle_key(state: &mut crate::tui::TuiState, key: KeyEvent, projects: &[Project]) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => KeyOutcome::Quit,
            KeyCode::Char('t') => KeyOutcome::single(UiAction::ToggleTheme),
            KeyCode::Char('j') => KeyOutcome::single(UiAction::KeyPress {
                key: Key::Ctrl('j'),
                target: None,
            }),
            KeyCode::Char('l') => {
                state.show_logs = !state.show_logs;
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        };
    }

    if state.alert.is_some() {
        state.alert = None;
        return KeyOutcome::Handled;
    }

    match key.code {
        KeyCode::Esc => {
            state.focus = None;
            return KeyOutcome::single(UiAction::KeyPress {
                key: Key::Escape,
                target: None,
            });
        }
        KeyCode::Tab => {
            state.cycle_focus(true);
            return KeyOutcome::Handled;
        }
        KeyCode::BackTab => {
            state.cycle_focus(false);
            return KeyOutcome::Handled;
        }
        _ => {}
    }

    if let Some(field) = state.focus {
        return handle_field_key(state, field, key.code);
    }

    if state.dropdown_open {
        let item = match key.code {
            KeyCode::Char('1') => Some(MenuItem::Profile),
            KeyCode::Char('2') => Some(MenuItem::Settings),
            KeyCode::Char('3') => Some(MenuItem::Logout),
            _ => None,
        };
        return match item {
            Some(item) => KeyOutcome::single(UiAction::SelectMenuItem { item }),
            // Anything else behaves like a click elsewhere on the page
            None => KeyOutcome::single(UiAction::DocumentClick),
        };
    }

    match state.top_modal() {
        Some(ModalId::ProjectModal) => project_modal_key(state, key.code),
        Some(ModalId::InviteModal) => invite_modal_key(state, key.code),
        Some(ModalId::ProjectDetailModal) => detail_modal_key(state, key.code),
        Some(modal) => match key.code {
            KeyCode::Char('x') => KeyOutcome::single(UiAction::CloseModal { modal }),
            _ => KeyOutcome::Ignored,
        },
        None => page_key(state, key.code, projects),
    }
}

fn handle_field_key(state: &mut crate::tui::TuiState, field: FieldId, code: KeyCode) -> KeyOutcome {
    match code {
        KeyCode::Enter => KeyOutcome::single(UiAction::KeyPress {
            key: Key::Enter,
            target: Some(field),
        }),
        KeyCode::Char(c) => edit_field(state, field, |value| value.push(c)),
        KeyCode::Backspace => edit_field(state, field, |value| {
            value.pop();
        }),
        _ => KeyOutcome::Ignored,
    }
}

fn edit_field(
    state: &mut crate::tui::TuiState,
    field: FieldId,
    edit: impl FnOnce(&mut String),
) -> KeyOutcome {
    if !state.is_editable(field) {
        return KeyOutcome::Handled;
    }
    let mut value = state.value(field).to_string();
    edit(&mut value);
    state.set_value(field, value.clone());
    KeyOutcome::single(UiAction::Input { field, value })
}

fn page_key(state: &mut crate::tui::TuiState, code: KeyCode, projects: &[Project]) -> KeyOutcome {
    let link = |destination| KeyOutcome::single(UiAction::FollowLink { destination });

    match (state.page, code) {
        (_, KeyCode::Char('q')) => KeyOutcome::Quit,
        (page, KeyCode::Char('h')) if page != Destination::Home => link(Destination::Home),

        (Destination::Home, KeyCode::Char('s')) => link(Destination::SignIn),
        (Destination::Home, KeyCode::Char('u')) => link(Destination::SignUp),
        (Destination::Home, KeyCode::Char('d')) => link(Destination::Dashboard),

        (Destination::SignIn, KeyCode::Enter) => KeyOutcome::single(UiAction::SignInAdvance),
        (Destination::SignIn, KeyCode::Char('p')) => {
            KeyOutcome::single(UiAction::TogglePasswordVisibility)
        }
        (Destination::SignIn, KeyCode::Char('u')) => link(Destination::SignUp),

        (Destination::SignUp, KeyCode::Enter) => KeyOutcome::single(UiAction::SubmitSignUp),
        (Destination::SignUp, KeyCode::Char('t')) => {
            state.terms_accepted = !state.terms_accepted;
            KeyOutcome::single(UiAction::SetTermsAccepted {
                accepted: state.terms_accepted,
            })
        }
        (Destination::SignUp, KeyCode::Char('s')) => link(Destination::SignIn),

        (Destination::SignIn | Destination::SignUp, KeyCode::Char('g')) => {
            KeyOutcome::single(UiAction::GoogleSignIn)
        }

        (Destination::Dashboard, code) => dashboard_key(state, code, projects),
        _ => KeyOutcome::Ignored,
    }
}

fn dashboard_key(state: &mut crate::tui::TuiState, code: KeyCode, projects: &[Project]) -> KeyOutcome {
    match code {
        KeyCode::Char('n') => KeyOutcome::single(UiAction::OpenModal {
            modal: ModalId::ProjectModal,
        }),
        KeyCode::Char('i') => KeyOutcome::single(UiAction::OpenModal {
            modal: ModalId::InviteModal,
        }),
        KeyCode::Char('m') => KeyOutcome::single(UiAction::ToggleUserMenu),
        KeyCode::Char('[') => KeyOutcome::single(UiAction::CalendarPrevious),
        KeyCode::Char(']') => KeyOutcome::single(UiAction::CalendarNext),
        KeyCode::Up | KeyCode::Char('k') => {
            state.project_cursor = state.project_cursor.saturating_sub(1);
            KeyOutcome::Handled
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.project_cursor + 1 < projects.len() {
                state.project_cursor += 1;
            }
            KeyOutcome::Handled
        }
        KeyCode::Left => {
            state.day_cursor = (state.day_cursor - 1).max(*DAY_CELLS.start());
            KeyOutcome::Handled
        }
        KeyCode::Right => {
            state.day_cursor = (state.day_cursor + 1).min(*DAY_CELLS.end());
            KeyOutcome::Handled
        }
        KeyCode::Char(' ') => KeyOutcome::single(UiAction::SelectDay {
            day: state.day_cursor,
        }),
        KeyCode::Enter => match projects.get(state.project_cursor) {
            Some(project) => KeyOutcome::single(UiAction::SelectProject {
                project: project.id.clone(),
            }),
            None => KeyOutcome::Ignored,
        },
        _ => KeyOutcome::Ignored,
    }
}

fn project_modal_key(state: &mut crate::tui::TuiState, code: KeyCode) -> KeyOutcome {
    match code {
        KeyCode::Char('x') => KeyOutcome::single(UiAction::CloseModal {
            modal: ModalId::ProjectModal,
        }),
        KeyCode::Up | KeyCode::Char('k') => {
            state.tool_cursor = state.tool_cursor.saturating_sub(1);
            KeyOutcome::Handled
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.tool_cursor = (state.tool_cursor + 1).min(ProjectTool::ALL.len() - 1);
            KeyOutcome::Handled
        }
        KeyCode::Char(' ') => {
            let tool = ProjectTool::ALL[state.tool_cursor.min(ProjectTool::ALL.len() - 1)];
            KeyOutcome::single(UiAction::ToggleTool {
                tool,
                enabled: !state.tool_enabled(tool),
            })
        }
        KeyCode::Char('a') => {
            state.access = match state.access {
                ProjectAccess::AllAccess => ProjectAccess::InviteOnly,
                ProjectAccess::InviteOnly => ProjectAccess::AllAccess,
            };
            KeyOutcome::single(UiAction::SelectAccess {
                access: state.access,
            })
        }
        KeyCode::Char('e') => {
            if !state.scope_enabled {
                return KeyOutcome::Handled;
            }
            state.scope = match state.scope {
                AllAccessScope::Everyone => AllAccessScope::EmployeesOnly,
                AllAccessScope::EmployeesOnly => AllAccessScope::Everyone,
            };
            KeyOutcome::single(UiAction::SelectAccessScope { scope: state.scope })
        }
        KeyCode::Enter => KeyOutcome::single(UiAction::SubmitProject),
        _ => KeyOutcome::Ignored,
    }
}

fn invite_modal_key(state: &mut crate::tui::TuiState, code: KeyCode) -> KeyOutcome {
    let select_type = |state: &mut crate::tui::TuiState, invite_type: InviteType| {
        state.invite_type = invite_type;
        KeyOutcome::single(UiAction::SelectInviteType { invite_type })
    };

    match (state.invite_step, code) {
        (_, KeyCode::Char('x')) => KeyOutcome::single(UiAction::CloseModal {
            modal: ModalId::InviteModal,
        }),
        (_, KeyCode::Char('1')) => select_type(state, InviteType::Coworker),
        (_, KeyCode::Char('2')) => select_type(state, InviteType::Contractor),
        (_, KeyCode::Char('3')) => select_type(state, InviteType::Client),
        (InviteStep::ChooseType, KeyCode::Enter) => KeyOutcome::single(UiAction::InviteNext),
        (InviteStep::Details, KeyCode::Char('b')) => KeyOutcome::single(UiAction::InviteBack),
        (InviteStep::Details, KeyCode::Char('+')) => KeyOutcome::single(UiAction::InviteAddEntry),
        (InviteStep::Details, KeyCode::Enter) => KeyOutcome::single(UiAction::SubmitInvite),
        _ => KeyOutcome::Ignored,
    }
}

fn detail_modal_key(state: &mut crate::tui::TuiState, code: KeyCode) -> KeyOutcome {
    let tools = ProjectTool::DETAIL;
    match code {
        KeyCode::Char('x') => KeyOutcome::single(UiAction::CloseModal {
            modal: ModalId::ProjectDetailModal,
        }),
        KeyCode::Up | KeyCode::Char('k') => {
            state.tool_cursor = state.tool_cursor.saturating_sub(1);
            KeyOutcome::Handled
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.tool_cursor = (state.tool_cursor + 1).min(tools.len() - 1);
            KeyOutcome::Handled
        }
        KeyCode::Enter => KeyOutcome::single(UiAction::SelectTool {
            tool: tools[state.tool_cursor.min(tools.len() - 1)],
        }),
        _ => KeyOutcome::Ignored,
    }
}
