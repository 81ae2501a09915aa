//! Session-local UI state owned by the workflow engine

use crate::domain::{Calendar, InviteWizard, ModalRegistry, ProjectSetupForm, SignInForm, SignUpForm};
use crate::schemas::{Config, Destination, Theme};

use super::scheduler::TimerId;

/// Everything the engine remembers between actions
///
/// Page-scoped parts (forms, modals, calendar, dropdown) start fresh on every
/// page load; the theme and the idle flag survive navigation.
#[derive(Debug, Clone)]
pub struct Session {
    pub page: Destination,
    pub sign_in: SignInForm,
    pub sign_up: SignUpForm,
    pub modals: ModalRegistry,
    pub invite: InviteWizard,
    pub project_setup: ProjectSetupForm,
    pub calendar: Calendar,
    /// Project whose detail modal was last rendered
    pub active_project: Option<String>,
    pub idle: bool,
    pub idle_timer: Option<TimerId>,
    /// Redirect scheduled from the current page
    pub navigation_timer: Option<TimerId>,
    pub dropdown_open: bool,
    pub theme: Theme,
}

impl Session {
    pub fn new(config: &Config, page: Destination, theme: Theme) -> Self {
        Session {
            page,
            sign_in: SignInForm::new(),
            sign_up: SignUpForm::new(),
            modals: ModalRegistry::new(),
            invite: InviteWizard::new(config.company_name.clone()),
            project_setup: ProjectSetupForm::new(config.default_enabled_tools),
            calendar: Calendar::default(),
            active_project: None,
            idle: false,
            idle_timer: None,
            navigation_timer: None,
            dropdown_open: false,
            theme,
        }
    }

    /// Replace every page-scoped piece of state, as a fresh page view would
    pub fn load_page(&mut self, config: &Config, page: Destination) {
        let theme = self.theme;
        let idle = self.idle;
        let idle_timer = self.idle_timer;
        *self = Session::new(config, page, theme);
        self.idle = idle;
        self.idle_timer = idle_timer;
    }

    /// A redirect is scheduled from the current page
    pub fn navigation_pending(&self) -> bool {
        match self.page {
            Destination::SignIn => self.sign_in.navigation_pending,
            Destination::SignUp => self.sign_up.navigation_pending,
            _ => false,
        }
    }
}
