//! Domain logic for the site's forms and dashboard widgets
//!
//! Every type here is plain state with synchronous transitions; rendering and
//! timers live in [`crate::engine`].

mod calendar;
mod invite;
mod modals;
mod project_setup;
mod sign_in;
mod sign_up;
mod validation;


pub use calendar::{current_month, Calendar, DAY_CELLS, MONTH_NAMES};
pub use invite::{InviteStep, InviteSubmission, InviteWizard, CHOOSE_TYPE_TITLE};
pub use modals::ModalRegistry;
pub use project_setup::{tool_status_label, ProjectDraft, ProjectSetupForm, ToolToggles};
pub use sign_in::{
    advance_sign_in, SignInField, SignInForm, SignInOutcome, SignInStep, TransitionResult,
    SIGNING_IN_LABEL, SIGN_IN_STEPS,
};
pub use sign_up::{SignUpForm, CREATING_ACCOUNT_LABEL};
pub use validation::{
    validate_required, RequiredField, ValidationError, ValidationResult, EMAIL_REQUIRED,
    INVITE_INCOMPLETE, PASSWORD_REQUIRED, PROJECT_NAME_REQUIRED, SIGN_UP_INCOMPLETE,
};
