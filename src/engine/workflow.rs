//! The workflow engine: UI actions in, render commands out
//!
//! Each action is applied synchronously to the [`Session`] and answered with
//! the commands a surface needs to reflect the change. Delayed work (the
//! post-submit redirect and the idle timeout) goes through the [`Scheduler`],
//! which only fires when the caller advances the clock.

use std::time::Duration;

use crate::domain::{
    advance_sign_in, validate_required, RequiredField, SignInOutcome, SignInStep,
    TransitionResult, CHOOSE_TYPE_TITLE, CREATING_ACCOUNT_LABEL, SIGNING_IN_LABEL,
    SIGN_UP_INCOMPLETE,
};
use crate::errors::{DataproveError, Result};
use crate::schemas::{Config, Destination, InviteField, ModalId, ProjectTool};
use crate::store::ThemeStore;

use super::actions::{FieldId, Key, MenuItem, UiAction};
use super::commands::{FieldState, FormId, ProjectDetail, RenderCommand, TextTarget};
use super::scheduler::{Scheduler, TimerTask};
use super::session::Session;

/// Reported by the Ctrl+J accelerator on the dashboard
pub const COMMAND_PALETTE_NOTICE: &str = "Command palette would open here (Ctrl+J)";

/// Reported by the "Sign in with Google" control
pub const GOOGLE_SIGN_IN_NOTICE: &str = "Google Sign In integration would go here. (This is a demo)";

/// Resting label of the sign-up submit control
pub const SIGN_UP_LABEL: &str = "Create account";

pub struct WorkflowEngine<S: ThemeStore> {
    config: Config,
    store: S,
    scheduler: Scheduler,
    pub(crate) session: Session,
}

impl<S: ThemeStore> WorkflowEngine<S> {
    /// Create an engine on the home page, with the stored theme
    pub fn new(config: Config, store: S) -> Result<Self> {
        let theme = store.get_preference()?;
        let session = Session::new(&config, Destination::default(), theme);
        Ok(WorkflowEngine {
            config,
            store,
            scheduler: Scheduler::new(),
            session,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Load `page` as a fresh page view, re-reading the stored theme
    pub fn start(&mut self, page: Destination) -> Result<Vec<RenderCommand>> {
        self.session.theme = self.store.get_preference()?;
        tracing::info!("Loading {} page with {} theme", page, self.session.theme);
        Ok(self.load_page(page))
    }

    /// Apply one user action.
    ///
    /// Every action counts as input activity: the idle timer is re-armed
    /// first, even when the action itself is rejected. A rejected action
    /// returns the error instead of commands and leaves the idle flag as the
    /// surface last saw it; the next accepted action clears it.
    pub fn handle(&mut self, action: UiAction) -> Result<Vec<RenderCommand>> {
        let was_idle = self.session.idle;
        let mut commands: Vec<RenderCommand> = self.rearm_idle().into_iter().collect();

        if !available_on(&action, self.session.page) {
            tracing::debug!("Ignoring {:?} on the {} page", action, self.session.page);
            return Ok(commands);
        }

        match self.apply(action) {
            Ok(applied) => {
                commands.extend(applied);
                Ok(commands)
            }
            Err(e) => {
                self.session.idle = was_idle;
                Err(e)
            }
        }
    }

    /// Move the virtual clock to `now` and run every timer that came due
    pub fn advance_to(&mut self, now: Duration) -> Vec<RenderCommand> {
        let mut commands = Vec::new();
        for (id, task) in self.scheduler.advance_to(now) {
            match task {
                TimerTask::Navigate(destination) => {
                    if self.session.navigation_timer != Some(id) {
                        continue;
                    }
                    self.session.navigation_timer = None;
                    tracing::info!("Redirecting to {}", destination);
                    commands.push(RenderCommand::Navigate { destination });
                    commands.extend(self.load_page(destination));
                }
                TimerTask::MarkIdle => {
                    if self.session.idle_timer != Some(id) {
                        continue;
                    }
                    self.session.idle_timer = None;
                    self.session.idle = true;
                    tracing::info!("User is idle");
                    commands.push(RenderCommand::SetIdle { idle: true });
                }
            }
        }
        commands
    }

    pub fn advance_by(&mut self, delta: Duration) -> Vec<RenderCommand> {
        self.advance_to(self.scheduler.now().saturating_add(delta))
    }

    // ===== PAGE LIFECYCLE =====

    fn load_page(&mut self, page: Destination) -> Vec<RenderCommand> {
        // Leaving a page drops whatever redirect it had scheduled
        if let Some(id) = self.session.navigation_timer.take() {
            self.scheduler.cancel(id);
        }
        self.session.load_page(&self.config, page);
        let idle_reset = self.rearm_idle();

        let mut commands = vec![
            RenderCommand::ApplyTheme {
                theme: self.session.theme,
            },
            RenderCommand::ShowPage { page },
        ];
        commands.extend(idle_reset);

        match page {
            Destination::SignIn => {
                commands.push(RenderCommand::set_text(
                    TextTarget::SignInButton,
                    SignInStep::Email.advance_label(),
                ));
                commands.push(RenderCommand::SetFieldState {
                    field: FieldId::SignInEmail,
                    state: FieldState::default(),
                });
                commands.push(RenderCommand::SetPasswordVisible { visible: false });
            }
            Destination::SignUp => {
                commands.push(RenderCommand::set_text(TextTarget::SignUpButton, SIGN_UP_LABEL));
            }
            Destination::Dashboard => {
                commands.push(self.calendar_month_command());
                commands.push(RenderCommand::SelectDay { day: None });
                commands.extend(self.tool_status_commands());
                commands.push(RenderCommand::SetScopeOptionsEnabled {
                    enabled: self.session.project_setup.scope_enabled(),
                });
                commands.push(RenderCommand::set_text(TextTarget::InviteTitle, CHOOSE_TYPE_TITLE));
            }
            Destination::Home => {}
        }

        commands
    }

    /// Cancel the pending idle timer and arm a new one.
    ///
    /// Returns a command only when this ends an idle period.
    fn rearm_idle(&mut self) -> Option<RenderCommand> {
        if let Some(id) = self.session.idle_timer.take() {
            self.scheduler.cancel(id);
        }
        self.session.idle_timer = Some(
            self.scheduler
                .schedule(self.config.idle_timeout(), TimerTask::MarkIdle),
        );

        if self.session.idle {
            self.session.idle = false;
            tracing::debug!("User is active again");
            Some(RenderCommand::SetIdle { idle: false })
        } else {
            None
        }
    }

    fn navigate_now(&mut self, destination: Destination) -> Vec<RenderCommand> {
        tracing::info!("Following link to {}", destination);
        let mut commands = vec![RenderCommand::Navigate { destination }];
        commands.extend(self.load_page(destination));
        commands
    }

    // ===== DISPATCH =====

    fn apply(&mut self, action: UiAction) -> Result<Vec<RenderCommand>> {
        match action {
            UiAction::Activity => Ok(Vec::new()),
            UiAction::Input { field, value } => Ok(self.input(field, value)),
            UiAction::KeyPress { key, target } => self.key_press(key, target),

            UiAction::SignInAdvance => self.sign_in_advance(),
            UiAction::TogglePasswordVisibility => {
                let form = &mut self.session.sign_in;
                form.password_visible = !form.password_visible;
                Ok(vec![RenderCommand::SetPasswordVisible {
                    visible: form.password_visible,
                }])
            }
            UiAction::GoogleSignIn => {
                tracing::info!("Google Sign In clicked");
                Ok(vec![RenderCommand::alert(GOOGLE_SIGN_IN_NOTICE)])
            }
            UiAction::SetTermsAccepted { accepted } => {
                self.session.sign_up.terms_accepted = accepted;
                Ok(Vec::new())
            }
            UiAction::SubmitSignUp => self.submit_sign_up(),

            UiAction::OpenModal { modal } => Ok(self.open_modal(modal).into_iter().collect()),
            UiAction::CloseModal { modal } => Ok(self.close_modal(modal).into_iter().collect()),
            UiAction::BackdropClick { modal, on_root } => {
                if self.session.modals.backdrop_click(modal, on_root) {
                    Ok(vec![RenderCommand::CloseModal { modal }])
                } else {
                    Ok(Vec::new())
                }
            }

            UiAction::SelectProject { project } => self.select_project(&project),
            UiAction::SelectTool { tool } => Ok(self.select_tool(tool)),
            UiAction::CalendarPrevious => {
                self.session.calendar.previous();
                Ok(vec![self.calendar_month_command()])
            }
            UiAction::CalendarNext => {
                self.session.calendar.next();
                Ok(vec![self.calendar_month_command()])
            }
            UiAction::SelectDay { day } => {
                if self.session.calendar.select_day(day) {
                    tracing::debug!("Selected day: {}", day);
                    Ok(vec![RenderCommand::SelectDay { day: Some(day) }])
                } else {
                    tracing::debug!("Ignoring day {} outside the calendar grid", day);
                    Ok(Vec::new())
                }
            }

            UiAction::ToggleTool { tool, enabled } => {
                if self.session.project_setup.set_tool(tool, enabled) {
                    Ok(vec![RenderCommand::SetToolStatus { tool, enabled }])
                } else {
                    Ok(Vec::new())
                }
            }
            UiAction::SelectAccess { access } => {
                let enabled = self.session.project_setup.select_access(access);
                Ok(vec![RenderCommand::SetScopeOptionsEnabled { enabled }])
            }
            UiAction::SelectAccessScope { scope } => {
                if !self.session.project_setup.select_scope(scope) {
                    tracing::debug!("Access sub-options are disabled; ignoring {:?}", scope);
                }
                Ok(Vec::new())
            }
            UiAction::SubmitProject => self.submit_project(),

            UiAction::SelectInviteType { invite_type } => {
                if self.session.invite.select_type(invite_type) {
                    Ok(self.invite_copy_commands())
                } else {
                    Ok(Vec::new())
                }
            }
            UiAction::InviteNext => {
                self.session.invite.next();
                let mut commands = vec![RenderCommand::ShowInviteStep {
                    step: self.session.invite.step(),
                }];
                commands.extend(self.invite_copy_commands());
                Ok(commands)
            }
            UiAction::InviteBack => {
                self.session.invite.back();
                Ok(vec![
                    RenderCommand::ShowInviteStep {
                        step: self.session.invite.step(),
                    },
                    RenderCommand::set_text(TextTarget::InviteTitle, CHOOSE_TYPE_TITLE),
                ])
            }
            UiAction::InviteAddEntry => {
                let entry = self.session.invite.add_entry().clone();
                Ok(vec![RenderCommand::AppendInviteEntry { entry }])
            }
            UiAction::SubmitInvite => self.submit_invite(),

            UiAction::ToggleTheme => {
                let theme = self.session.theme.toggled();
                self.store.set_preference(theme)?;
                self.session.theme = theme;
                tracing::info!("Theme switched to {}", theme);
                Ok(vec![RenderCommand::ApplyTheme { theme }])
            }
            UiAction::ToggleUserMenu => {
                self.session.dropdown_open = !self.session.dropdown_open;
                Ok(vec![RenderCommand::SetDropdownOpen {
                    open: self.session.dropdown_open,
                }])
            }
            UiAction::DocumentClick => Ok(self.close_dropdown().into_iter().collect()),
            UiAction::SelectMenuItem { item } => {
                let commands = self.close_dropdown().into_iter().collect();
                match item {
                    MenuItem::Logout => tracing::info!("Logout clicked"),
                    other => tracing::debug!("{} selected", other.label()),
                }
                Ok(commands)
            }
            UiAction::FollowLink { destination } => Ok(self.navigate_now(destination)),
        }
    }

    // ===== FORMS & KEYS =====

    fn input(&mut self, field: FieldId, value: String) -> Vec<RenderCommand> {
        let session = &mut self.session;
        match field {
            FieldId::SignInEmail => {
                if !session.sign_in.set_email(value) {
                    // Disabled field: put the accepted email back
                    return vec![RenderCommand::SetFieldState {
                        field,
                        state: FieldState {
                            value: session.sign_in.email.clone(),
                            disabled: true,
                            read_only: false,
                        },
                    }];
                }
            }
            FieldId::SignInPassword => session.sign_in.set_password(value),
            FieldId::SignUpFullName => session.sign_up.full_name = value,
            FieldId::SignUpEmail => session.sign_up.email = value,
            FieldId::SignUpOrganization => session.sign_up.organization = value,
            FieldId::ProjectName => session.project_setup.name = value,
            FieldId::ProjectDescription => session.project_setup.description = value,
            FieldId::Invite(id, invite_field) => {
                if !session.invite.set_field(id, invite_field, value) {
                    return match session.invite.entry(id) {
                        Some(entry) => vec![RenderCommand::SetFieldState {
                            field,
                            state: FieldState {
                                value: entry.field(invite_field).to_string(),
                                disabled: false,
                                read_only: entry.company_locked,
                            },
                        }],
                        None => {
                            tracing::debug!("No invite entry #{}", id);
                            Vec::new()
                        }
                    };
                }
            }
        }
        Vec::new()
    }

    fn key_press(&mut self, key: Key, target: Option<FieldId>) -> Result<Vec<RenderCommand>> {
        match key {
            Key::Escape => {
                let mut commands: Vec<RenderCommand> = self
                    .session
                    .modals
                    .close_all()
                    .into_iter()
                    .map(|modal| RenderCommand::CloseModal { modal })
                    .collect();
                commands.extend(self.close_dropdown());
                Ok(commands)
            }
            Key::Ctrl(c) if c.eq_ignore_ascii_case(&'j') => {
                if self.session.page != Destination::Dashboard {
                    return Ok(Vec::new());
                }
                tracing::info!("Command palette shortcut triggered");
                Ok(vec![RenderCommand::alert(COMMAND_PALETTE_NOTICE)])
            }
            Key::Ctrl(_) => Ok(Vec::new()),
            Key::Enter => match target {
                Some(field) if field.page() != self.session.page => Ok(Vec::new()),
                Some(field @ (FieldId::SignInEmail | FieldId::SignInPassword)) => {
                    match field.sign_in_field() {
                        Some(f) if self.session.sign_in.accepts_enter_from(f) => self.sign_in_advance(),
                        _ => Ok(Vec::new()),
                    }
                }
                Some(FieldId::SignUpFullName | FieldId::SignUpEmail | FieldId::SignUpOrganization) => {
                    self.submit_sign_up()
                }
                Some(FieldId::ProjectName) => self.submit_project(),
                Some(FieldId::Invite(..)) => self.submit_invite(),
                // Enter in a multi-line field, or with nothing focused
                Some(FieldId::ProjectDescription) | None => Ok(Vec::new()),
            },
        }
    }

    fn sign_in_advance(&mut self) -> Result<Vec<RenderCommand>> {
        match advance_sign_in(&self.session.sign_in) {
            TransitionResult::Error { error } => {
                tracing::debug!("Sign in blocked: {}", error);
                Err(error.into())
            }
            TransitionResult::Success { next_form, outcome } => {
                self.session.sign_in = next_form;
                match outcome {
                    SignInOutcome::PasswordRevealed => Ok(vec![
                        RenderCommand::RevealField {
                            field: FieldId::SignInPassword,
                        },
                        RenderCommand::Focus {
                            field: FieldId::SignInPassword,
                        },
                        RenderCommand::set_text(
                            TextTarget::SignInButton,
                            SignInStep::Password.advance_label(),
                        ),
                        RenderCommand::SetFieldState {
                            field: FieldId::SignInEmail,
                            state: FieldState {
                                value: self.session.sign_in.email.clone(),
                                disabled: true,
                                read_only: false,
                            },
                        },
                    ]),
                    SignInOutcome::Submitted => {
                        tracing::info!("Sign in attempt: {}", self.session.sign_in.email);
                        Ok(self.schedule_navigation(
                            TextTarget::SignInButton,
                            SIGNING_IN_LABEL,
                            Destination::Dashboard,
                        ))
                    }
                    SignInOutcome::AlreadySubmitted => {
                        tracing::debug!("Sign in already submitted");
                        Ok(Vec::new())
                    }
                }
            }
        }
    }

    fn submit_sign_up(&mut self) -> Result<Vec<RenderCommand>> {
        if self.session.sign_up.navigation_pending {
            tracing::debug!("Sign up already submitted");
            return Ok(Vec::new());
        }
        let fields = self.session.sign_up.required_fields();
        let commands = self.submit_and_navigate(
            &fields,
            SIGN_UP_INCOMPLETE,
            TextTarget::SignUpButton,
            CREATING_ACCOUNT_LABEL,
            Destination::Dashboard,
        )?;
        self.session.sign_up.navigation_pending = true;
        tracing::info!(
            "Sign up attempt: {} <{}> at {}",
            self.session.sign_up.full_name,
            self.session.sign_up.email,
            self.session.sign_up.organization
        );
        Ok(commands)
    }

    /// Validate all required fields, show the busy label, then redirect after
    /// the navigation delay.
    fn submit_and_navigate(
        &mut self,
        fields: &[RequiredField],
        message: &str,
        control: TextTarget,
        busy_label: &str,
        destination: Destination,
    ) -> Result<Vec<RenderCommand>> {
        validate_required(fields).into_result(message)?;
        Ok(self.schedule_navigation(control, busy_label, destination))
    }

    fn schedule_navigation(
        &mut self,
        control: TextTarget,
        busy_label: &str,
        destination: Destination,
    ) -> Vec<RenderCommand> {
        let id = self.scheduler.schedule(
            self.config.navigation_delay(),
            TimerTask::Navigate(destination),
        );
        self.session.navigation_timer = Some(id);
        vec![RenderCommand::set_text(control, busy_label)]
    }

    // ===== DASHBOARD =====

    fn open_modal(&mut self, modal: ModalId) -> Option<RenderCommand> {
        self.session
            .modals
            .open(modal)
            .then_some(RenderCommand::OpenModal { modal })
    }

    fn close_modal(&mut self, modal: ModalId) -> Option<RenderCommand> {
        self.session
            .modals
            .close(modal)
            .then_some(RenderCommand::CloseModal { modal })
    }

    fn close_dropdown(&mut self) -> Option<RenderCommand> {
        if !self.session.dropdown_open {
            return None;
        }
        self.session.dropdown_open = false;
        Some(RenderCommand::SetDropdownOpen { open: false })
    }

    fn select_project(&mut self, id: &str) -> Result<Vec<RenderCommand>> {
        let project = self
            .config
            .project(id)
            .cloned()
            .ok_or_else(|| DataproveError::UnknownProject(id.to_string()))?;
        tracing::debug!("Opening project {}", project.name);
        self.session.active_project = Some(project.id.clone());

        let mut commands = vec![RenderCommand::RenderProjectDetail {
            detail: ProjectDetail {
                project,
                tools: ProjectTool::DETAIL.to_vec(),
            },
        }];
        commands.extend(self.open_modal(ModalId::ProjectDetailModal));
        Ok(commands)
    }

    fn select_tool(&mut self, tool: ProjectTool) -> Vec<RenderCommand> {
        let mut commands: Vec<RenderCommand> =
            self.close_modal(ModalId::ProjectDetailModal).into_iter().collect();
        match tool.modal() {
            Some(modal) => commands.extend(self.open_modal(modal)),
            None => tracing::debug!("{} has no detail view", tool),
        }
        commands
    }

    fn calendar_month_command(&self) -> RenderCommand {
        RenderCommand::SetCalendarMonth {
            month: self.session.calendar.month(),
            name: self.session.calendar.month_name().to_string(),
        }
    }

    fn tool_status_commands(&self) -> Vec<RenderCommand> {
        self.session
            .project_setup
            .toggles()
            .iter()
            .map(|(tool, enabled)| RenderCommand::SetToolStatus { tool, enabled })
            .collect()
    }

    fn submit_project(&mut self) -> Result<Vec<RenderCommand>> {
        let draft = self.session.project_setup.submit()?;
        tracing::info!(
            "Creating project: {} ({} tools, {:?})",
            draft.name,
            draft.tools.len(),
            draft.access
        );

        let mut commands = vec![RenderCommand::alert(draft.summary())];
        commands.extend(self.close_modal(ModalId::ProjectModal));
        commands.push(RenderCommand::ResetForm {
            form: FormId::Project,
        });
        commands.extend(self.tool_status_commands());
        commands.push(RenderCommand::SetScopeOptionsEnabled {
            enabled: self.session.project_setup.scope_enabled(),
        });
        Ok(commands)
    }

    /// Title, description and company fields for the selected invite type
    fn invite_copy_commands(&self) -> Vec<RenderCommand> {
        let copy = self.session.invite.copy();
        let mut commands = vec![
            RenderCommand::set_text(TextTarget::InviteTitle, copy.title),
            RenderCommand::set_text(TextTarget::InviteDescription, copy.description),
        ];
        commands.extend(self.session.invite.entries().iter().map(|entry| {
            RenderCommand::SetFieldState {
                field: FieldId::Invite(entry.id, InviteField::Company),
                state: FieldState {
                    value: entry.company.clone(),
                    disabled: false,
                    read_only: entry.company_locked,
                },
            }
        }));
        commands
    }

    fn submit_invite(&mut self) -> Result<Vec<RenderCommand>> {
        let submission = self.session.invite.submit()?;
        tracing::info!(
            "Inviting {} people as {}",
            submission.invitees.len(),
            submission.invite_type
        );

        let mut commands = vec![RenderCommand::alert(submission.summary())];
        commands.extend(self.close_modal(ModalId::InviteModal));
        commands.push(RenderCommand::ShowInviteStep {
            step: self.session.invite.step(),
        });
        commands.push(RenderCommand::set_text(TextTarget::InviteTitle, CHOOSE_TYPE_TITLE));
        commands.push(RenderCommand::ResetForm { form: FormId::Invite });
        commands.push(RenderCommand::RemoveInviteEntries { keep: 1 });
        Ok(commands)
    }
}

/// Whether the control behind `action` exists on `page`
fn available_on(action: &UiAction, page: Destination) -> bool {
    match action {
        UiAction::Activity
        | UiAction::KeyPress { .. }
        | UiAction::ToggleTheme
        | UiAction::FollowLink { .. } => true,
        UiAction::Input { field, .. } => field.page() == page,
        UiAction::GoogleSignIn => matches!(page, Destination::SignIn | Destination::SignUp),
        UiAction::SignInAdvance | UiAction::TogglePasswordVisibility => page == Destination::SignIn,
        UiAction::SetTermsAccepted { .. } | UiAction::SubmitSignUp => page == Destination::SignUp,
        _ => page == Destination::Dashboard,
    }
}
