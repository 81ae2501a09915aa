//! Workflow engine
//!
//! Turns [`UiAction`]s into [`RenderCommand`]s while owning the session state
//! and the virtual-clock scheduler.

mod actions;
mod commands;
mod scheduler;
mod session;
mod surface;
mod workflow;


pub use actions::{FieldId, Key, MenuItem, UiAction};
pub use commands::{FieldState, FormId, ProjectDetail, RenderCommand, TextTarget};
pub use scheduler::{Scheduler, TimerId, TimerTask};
pub use session::Session;
pub use surface::{dispatch, RecordingSurface, Surface};
pub use workflow::{
    WorkflowEngine, COMMAND_PALETTE_NOTICE, GOOGLE_SIGN_IN_NOTICE, SIGN_UP_LABEL,
};
