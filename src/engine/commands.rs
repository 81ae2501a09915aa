//! Rendering commands produced by the workflow engine

use serde::{Deserialize, Serialize};

use crate::domain::InviteStep;
use crate::schemas::{Destination, InviteEntry, ModalId, Project, ProjectTool, Theme};

use super::actions::FieldId;

/// A piece of text the engine rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTarget {
    /// The sign-in "Next" / "Sign In" button
    SignInButton,
    /// The sign-up submit button
    SignUpButton,
    InviteTitle,
    InviteDescription,
}

/// Presentation state of an input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FieldState {
    pub value: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub read_only: bool,
}

/// A form whose inputs can be reset to their defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormId {
    Project,
    Invite,
}

/// Content of the project detail modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub project: Project,
    pub tools: Vec<ProjectTool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum RenderCommand {
    ShowPage { page: Destination },
    ApplyTheme { theme: Theme },
    SetText { target: TextTarget, text: String },
    SetFieldState { field: FieldId, state: FieldState },
    RevealField { field: FieldId },
    Focus { field: FieldId },
    SetPasswordVisible { visible: bool },
    OpenModal { modal: ModalId },
    CloseModal { modal: ModalId },
    RenderProjectDetail { detail: ProjectDetail },
    ShowInviteStep { step: InviteStep },
    AppendInviteEntry { entry: InviteEntry },
    /// Drop every invite entry after the first `keep`
    RemoveInviteEntries { keep: usize },
    SetToolStatus { tool: ProjectTool, enabled: bool },
    SetScopeOptionsEnabled { enabled: bool },
    ResetForm { form: FormId },
    SetCalendarMonth { month: u32, name: String },
    SelectDay { day: Option<u32> },
    SetDropdownOpen { open: bool },
    SetIdle { idle: bool },
    /// Blocking message shown to the user
    Alert { message: String },
    Navigate { destination: Destination },
}

impl RenderCommand {
    pub fn set_text(target: TextTarget, text: impl Into<String>) -> Self {
        RenderCommand::SetText {
            target,
            text: text.into(),
        }
    }

    pub fn alert(message: impl Into<String>) -> Self {
        RenderCommand::Alert {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RenderCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderCommand::ShowPage { page } => write!(f, "show page {}", page),
            RenderCommand::ApplyTheme { theme } => write!(f, "apply theme {}", theme),
            RenderCommand::SetText { target, text } => write!(f, "set {:?} text to {:?}", target, text),
            RenderCommand::SetFieldState { field, state } => write!(
                f,
                "set {:?} = {:?}{}{}",
                field,
                state.value,
                if state.disabled { " (disabled)" } else { "" },
                if state.read_only { " (read-only)" } else { "" }
            ),
            RenderCommand::RevealField { field } => write!(f, "reveal {:?}", field),
            RenderCommand::Focus { field } => write!(f, "focus {:?}", field),
            RenderCommand::SetPasswordVisible { visible } => {
                write!(f, "password {}", if *visible { "visible" } else { "masked" })
            }
            RenderCommand::OpenModal { modal } => write!(f, "open {}", modal),
            RenderCommand::CloseModal { modal } => write!(f, "close {}", modal),
            RenderCommand::RenderProjectDetail { detail } => write!(
                f,
                "render project detail {:?} with {} tools",
                detail.project.name,
                detail.tools.len()
            ),
            RenderCommand::ShowInviteStep { step } => write!(f, "show invite step {:?}", step),
            RenderCommand::AppendInviteEntry { entry } => write!(f, "append invite entry #{}", entry.id),
            RenderCommand::RemoveInviteEntries { keep } => write!(f, "keep {} invite entries", keep),
            RenderCommand::SetToolStatus { tool, enabled } => {
                write!(f, "tool {} {}", tool, crate::domain::tool_status_label(*enabled))
            }
            RenderCommand::SetScopeOptionsEnabled { enabled } => write!(
                f,
                "access sub-options {}",
                if *enabled { "enabled" } else { "disabled" }
            ),
            RenderCommand::ResetForm { form } => write!(f, "reset {:?} form", form),
            RenderCommand::SetCalendarMonth { name, .. } => write!(f, "calendar month {}", name),
            RenderCommand::SelectDay { day: Some(day) } => write!(f, "select day {}", day),
            RenderCommand::SelectDay { day: None } => write!(f, "clear day selection"),
            RenderCommand::SetDropdownOpen { open } => {
                write!(f, "user menu {}", if *open { "open" } else { "closed" })
            }
            RenderCommand::SetIdle { idle } => write!(f, "idle {}", idle),
            RenderCommand::Alert { message } => write!(f, "alert {:?}", message),
            RenderCommand::Navigate { destination } => write!(f, "navigate to {}", destination),
        }
    }
}
