//! TUI state management
//!
//! [`TuiState`] is the terminal's [`Surface`]: render commands from the engine
//! land here, and the widgets draw whatever it holds.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

use crate::domain::{current_month, InviteStep, MONTH_NAMES};
use crate::engine::{FieldId, FieldState, FormId, ProjectDetail, RenderCommand, Surface, TextTarget};
use crate::schemas::{
    AllAccessScope, Destination, InviteEntry, InviteField, InviteType, ModalId, ProjectAccess,
    ProjectTool, Theme,
};

/// Main TUI state
#[derive(Debug, Clone)]
pub struct TuiState {
    pub page: Destination,
    pub theme: Theme,
    pub fields: BTreeMap<FieldId, FieldState>,
    pub texts: HashMap<TextTarget, String>,
    pub focus: Option<FieldId>,
    pub password_revealed: bool,
    pub password_visible: bool,
    pub terms_accepted: bool,
    /// Visible modals in the order they were opened; the last one is on top
    pub modals: Vec<ModalId>,
    pub project_detail: Option<ProjectDetail>,
    pub invite_step: InviteStep,
    pub invite_entries: Vec<usize>,
    pub invite_type: InviteType,
    pub tool_status: Vec<(ProjectTool, bool)>,
    pub access: ProjectAccess,
    pub scope: AllAccessScope,
    pub scope_enabled: bool,
    pub calendar_month: String,
    pub selected_day: Option<u32>,
    pub dropdown_open: bool,
    pub idle: bool,
    /// Blocking message; any key dismisses it
    pub alert: Option<String>,
    /// Project card under the cursor
    pub project_cursor: usize,
    /// Tool row under the cursor in the project and detail modals
    pub tool_cursor: usize,
    pub day_cursor: u32,
    pub logs: Vec<String>,
    pub show_logs: bool,
    pub start_time: DateTime<Utc>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    const MAX_LOGS: usize = 500;

    pub fn new() -> Self {
        Self {
            page: Destination::default(),
            theme: Theme::default(),
            fields: BTreeMap::new(),
            texts: HashMap::new(),
            focus: None,
            password_revealed: false,
            password_visible: false,
            terms_accepted: false,
            modals: Vec::new(),
            project_detail: None,
            invite_step: InviteStep::default(),
            invite_entries: vec![0],
            invite_type: InviteType::default(),
            tool_status: ProjectTool::ALL.iter().map(|tool| (*tool, false)).collect(),
            access: ProjectAccess::default(),
            scope: AllAccessScope::default(),
            scope_enabled: true,
            calendar_month: MONTH_NAMES[current_month() as usize].to_string(),
            selected_day: None,
            dropdown_open: false,
            idle: false,
            alert: None,
            project_cursor: 0,
            tool_cursor: 0,
            day_cursor: 1,
            logs: Vec::new(),
            show_logs: false,
            start_time: Utc::now(),
        }
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new TuiState with show_logs toggled
    pub fn with_show_logs(mut self, show: bool) -> Self {
        self.show_logs = show;
        self
    }

    /// Return a new TuiState with a single log appended
    pub fn with_log(mut self, log: String) -> Self {
        self.push_log(log);
        self
    }

    // ===== QUERIES =====

    pub fn top_modal(&self) -> Option<ModalId> {
        self.modals.last().copied()
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.fields.get(&field).map(|s| s.value.as_str()).unwrap_or("")
    }

    /// Whether typing into `field` is allowed
    pub fn is_editable(&self, field: FieldId) -> bool {
        self.fields
            .get(&field)
            .map(|s| !s.disabled && !s.read_only)
            .unwrap_or(true)
    }

    pub fn text(&self, target: TextTarget) -> Option<&str> {
        self.texts.get(&target).map(String::as_str)
    }

    pub fn tool_enabled(&self, tool: ProjectTool) -> bool {
        self.tool_status.iter().any(|(t, on)| *t == tool && *on)
    }

    /// Fields that Tab cycles through in the current context
    pub fn focusable_fields(&self) -> Vec<FieldId> {
        match self.top_modal() {
            Some(ModalId::ProjectModal) => vec![FieldId::ProjectName, FieldId::ProjectDescription],
            Some(ModalId::InviteModal) if self.invite_step == InviteStep::Details => self
                .invite_entries
                .iter()
                .flat_map(|id| {
                    [
                        FieldId::Invite(*id, InviteField::FullName),
                        FieldId::Invite(*id, InviteField::Email),
                        FieldId::Invite(*id, InviteField::JobTitle),
                        FieldId::Invite(*id, InviteField::Company),
                    ]
                })
                .collect(),
            Some(_) => Vec::new(),
            None => match self.page {
                Destination::SignIn if self.password_revealed => {
                    vec![FieldId::SignInEmail, FieldId::SignInPassword]
                }
                Destination::SignIn => vec![FieldId::SignInEmail],
                Destination::SignUp => vec![
                    FieldId::SignUpFullName,
                    FieldId::SignUpEmail,
                    FieldId::SignUpOrganization,
                ],
                _ => Vec::new(),
            },
        }
    }

    // ===== LOCAL UPDATES =====

    /// Move focus to the next (or previous) focusable field
    pub fn cycle_focus(&mut self, forward: bool) {
        let fields = self.focusable_fields();
        if fields.is_empty() {
            self.focus = None;
            return;
        }
        let next = match self.focus.and_then(|f| fields.iter().position(|x| *x == f)) {
            Some(index) if forward => (index + 1) % fields.len(),
            Some(index) => (index + fields.len() - 1) % fields.len(),
            None if forward => 0,
            None => fields.len() - 1,
        };
        self.focus = Some(fields[next]);
    }

    /// Store a typed value before it is sent to the engine
    pub fn set_value(&mut self, field: FieldId, value: String) {
        self.fields.entry(field).or_default().value = value;
    }

    pub fn push_log(&mut self, log: String) {
        self.logs.push(log);
        if self.logs.len() > Self::MAX_LOGS {
            self.logs.remove(0);
        }
    }

    fn clear_values(&mut self, matches: impl Fn(&FieldId) -> bool) {
        self.fields.retain(|field, _| !matches(field));
    }

    fn reset_form(&mut self, form: FormId) {
        match form {
            FormId::Project => {
                self.clear_values(|f| matches!(f, FieldId::ProjectName | FieldId::ProjectDescription));
                self.access = ProjectAccess::default();
                self.scope = AllAccessScope::default();
                self.tool_cursor = 0;
            }
            FormId::Invite => {
                self.clear_values(|f| matches!(f, FieldId::Invite(..)));
                self.invite_type = InviteType::default();
            }
        }
        if self.focus.map(|f| !self.focusable_fields().contains(&f)).unwrap_or(false) {
            self.focus = None;
        }
    }

    fn load_page(&mut self, page: Destination) {
        let logs = std::mem::take(&mut self.logs);
        let show_logs = self.show_logs;
        let start_time = self.start_time;
        let theme = self.theme;
        let idle = self.idle;
        *self = TuiState {
            page,
            theme,
            idle,
            logs,
            show_logs,
            start_time,
            ..TuiState::new()
        };
    }
}

impl Surface for TuiState {
    fn show_page(&mut self, page: Destination) {
        self.push_log(format!("show page {}", page));
        self.load_page(page);
    }

    fn set_field_state(&mut self, field: FieldId, state: &FieldState) {
        self.push_log(format!("set {} = {:?}", field.label(), state.value));
        if field == FieldId::SignInEmail && state.disabled && self.focus == Some(field) {
            self.focus = None;
        }
        self.fields.insert(field, state.clone());
    }

    fn open_modal(&mut self, modal: ModalId) {
        self.push_log(format!("open {}", modal));
        self.modals.retain(|m| *m != modal);
        self.modals.push(modal);
        self.focus = None;
        self.tool_cursor = 0;
    }

    fn close_modal(&mut self, modal: ModalId) {
        self.push_log(format!("close {}", modal));
        self.modals.retain(|m| *m != modal);
        if self.focus.map(|f| !self.focusable_fields().contains(&f)).unwrap_or(false) {
            self.focus = None;
        }
    }

    fn append_entry(&mut self, entry: &InviteEntry) {
        self.push_log(format!("append invite entry #{}", entry.id));
        if !self.invite_entries.contains(&entry.id) {
            self.invite_entries.push(entry.id);
        }
        for field in [InviteField::FullName, InviteField::Email, InviteField::JobTitle, InviteField::Company] {
            self.fields.insert(
                FieldId::Invite(entry.id, field),
                FieldState {
                    value: entry.field(field).to_string(),
                    disabled: false,
                    read_only: field == InviteField::Company && entry.company_locked,
                },
            );
        }
    }

    fn alert(&mut self, message: &str) {
        self.push_log(format!("alert {:?}", message));
        self.alert = Some(message.to_string());
    }

    fn render(&mut self, command: &RenderCommand) {
        self.push_log(command.to_string());
        match command {
            RenderCommand::ApplyTheme { theme } => self.theme = *theme,
            RenderCommand::SetText { target, text } => {
                self.texts.insert(*target, text.clone());
            }
            RenderCommand::RevealField { field } => {
                if *field == FieldId::SignInPassword {
                    self.password_revealed = true;
                }
            }
            RenderCommand::Focus { field } => self.focus = Some(*field),
            RenderCommand::SetPasswordVisible { visible } => self.password_visible = *visible,
            RenderCommand::RenderProjectDetail { detail } => {
                self.project_detail = Some(detail.clone());
                self.tool_cursor = 0;
            }
            RenderCommand::ShowInviteStep { step } => {
                self.invite_step = *step;
                if !self.focusable_fields().iter().any(|f| Some(*f) == self.focus) {
                    self.focus = None;
                }
            }
            RenderCommand::RemoveInviteEntries { keep } => {
                self.invite_entries.truncate(*keep);
                let kept = self.invite_entries.clone();
                self.clear_values(|f| matches!(f, FieldId::Invite(id, _) if !kept.contains(id)));
            }
            RenderCommand::SetToolStatus { tool, enabled } => {
                if let Some(entry) = self.tool_status.iter_mut().find(|(t, _)| t == tool) {
                    entry.1 = *enabled;
                }
            }
            RenderCommand::SetScopeOptionsEnabled { enabled } => self.scope_enabled = *enabled,
            RenderCommand::ResetForm { form } => self.reset_form(*form),
            RenderCommand::SetCalendarMonth { name, .. } => self.calendar_month = name.clone(),
            RenderCommand::SelectDay { day } => self.selected_day = *day,
            RenderCommand::SetDropdownOpen { open } => self.dropdown_open = *open,
            RenderCommand::SetIdle { idle } => self.idle = *idle,
            // Page changes arrive as ShowPage right after
            RenderCommand::Navigate { .. } => {}
            RenderCommand::ShowPage { .. }
            | RenderCommand::SetFieldState { .. }
            | RenderCommand::OpenModal { .. }
            | RenderCommand::CloseModal { .. }
            | RenderCommand::AppendInviteEntry { .. }
            | RenderCommand::Alert { .. } => {}
        }
    }
}
