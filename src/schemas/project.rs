//! Project schema - dashboard projects, project tools and access modes

use serde::{Deserialize, Serialize};

use super::ModalId;

/// A project card shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier used to select the card
    pub id: String,

    /// Display name
    pub name: String,

    /// One-line description
    #[serde(default)]
    pub description: String,

    /// Short tag rendered next to the name
    #[serde(default)]
    pub tag: String,
}

impl Project {
    /// Create a new project card
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Project {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            tag: tag.into(),
        }
    }
}

/// A tool that can be enabled on a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectTool {
    MessageBoard,
    Todos,
    DocsFiles,
    Chat,
    Schedule,
    CardTable,
    CheckIns,
    EmailForwards,
}

impl ProjectTool {
    /// Tools in declaration order on the project-creation form.
    ///
    /// The first `default_enabled_tools` of these start switched on.
    pub const ALL: [ProjectTool; 8] = [
        ProjectTool::MessageBoard,
        ProjectTool::Todos,
        ProjectTool::DocsFiles,
        ProjectTool::Chat,
        ProjectTool::Schedule,
        ProjectTool::CardTable,
        ProjectTool::CheckIns,
        ProjectTool::EmailForwards,
    ];

    /// Tools offered in the project detail view
    pub const DETAIL: [ProjectTool; 6] = [
        ProjectTool::MessageBoard,
        ProjectTool::Todos,
        ProjectTool::DocsFiles,
        ProjectTool::Chat,
        ProjectTool::Schedule,
        ProjectTool::CardTable,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectTool::MessageBoard => "Message Board",
            ProjectTool::Todos => "To-dos",
            ProjectTool::DocsFiles => "Docs & Files",
            ProjectTool::Chat => "Chat",
            ProjectTool::Schedule => "Schedule",
            ProjectTool::CardTable => "Card Table",
            ProjectTool::CheckIns => "Automatic Check-ins",
            ProjectTool::EmailForwards => "Email Forwards",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ProjectTool::MessageBoard => "💬",
            ProjectTool::Todos => "✓",
            ProjectTool::DocsFiles => "📄",
            ProjectTool::Chat => "💭",
            ProjectTool::Schedule => "📅",
            ProjectTool::CardTable => "📊",
            ProjectTool::CheckIns => "❓",
            ProjectTool::EmailForwards => "✉",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            ProjectTool::MessageBoard => {
                "Post announcements, pitch ideas, and keep discussions on-topic."
            }
            ProjectTool::Todos => {
                "Organize work, assign tasks, set due dates, and stay on top of things."
            }
            ProjectTool::DocsFiles => {
                "Share and organize docs, spreadsheets, images, and other files."
            }
            ProjectTool::Chat => "Chat casually with your team and share things without ceremony.",
            ProjectTool::Schedule => {
                "Set important dates on a shared schedule and sync with calendars."
            }
            ProjectTool::CardTable => {
                "A Kanban-like tool for process-oriented work with visual organization."
            }
            ProjectTool::CheckIns => "Ask your team recurring questions on a schedule.",
            ProjectTool::EmailForwards => "Forward emails into the project to discuss them.",
        }
    }

    /// The modal a detail-view tool opens.
    ///
    /// Exactly the six detail tools have a modal; anything else returns `None`.
    pub fn modal(self) -> Option<ModalId> {
        match self {
            ProjectTool::MessageBoard => Some(ModalId::MessageBoardModal),
            ProjectTool::Todos => Some(ModalId::TodosModal),
            ProjectTool::DocsFiles => Some(ModalId::DocsFilesModal),
            ProjectTool::Chat => Some(ModalId::ChatModal),
            ProjectTool::Schedule => Some(ModalId::ScheduleModal),
            ProjectTool::CardTable => Some(ModalId::CardTableModal),
            ProjectTool::CheckIns | ProjectTool::EmailForwards => None,
        }
    }
}

impl std::fmt::Display for ProjectTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProjectTool::MessageBoard => "message-board",
            ProjectTool::Todos => "todos",
            ProjectTool::DocsFiles => "docs-files",
            ProjectTool::Chat => "chat",
            ProjectTool::Schedule => "schedule",
            ProjectTool::CardTable => "card-table",
            ProjectTool::CheckIns => "check-ins",
            ProjectTool::EmailForwards => "email-forwards",
        };
        f.write_str(name)
    }
}

/// Who can see a new project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectAccess {
    /// Everyone in the scope chosen by [`AllAccessScope`]
    #[default]
    AllAccess,
    /// Only people explicitly invited
    InviteOnly,
}

impl ProjectAccess {
    /// Whether the nested scope options apply
    pub fn enables_scope(self) -> bool {
        self == ProjectAccess::AllAccess
    }
}

/// Sub-options of [`ProjectAccess::AllAccess`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AllAccessScope {
    /// Anyone on the account
    #[default]
    Everyone,
    /// Only people who work at the company
    EmployeesOnly,
}
