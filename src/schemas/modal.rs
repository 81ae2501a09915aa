//! Named modal dialogs declared on the dashboard

use serde::{Deserialize, Serialize};

/// Identifier of a modal dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalId {
    /// "Make a new project" form
    ProjectModal,
    /// Invite wizard
    InviteModal,
    /// Project detail with the tool grid
    ProjectDetailModal,
    MessageBoardModal,
    TodosModal,
    DocsFilesModal,
    ChatModal,
    ScheduleModal,
    CardTableModal,
}

impl ModalId {
    /// Every declared modal
    pub const ALL: [ModalId; 9] = [
        ModalId::ProjectModal,
        ModalId::InviteModal,
        ModalId::ProjectDetailModal,
        ModalId::MessageBoardModal,
        ModalId::TodosModal,
        ModalId::DocsFilesModal,
        ModalId::ChatModal,
        ModalId::ScheduleModal,
        ModalId::CardTableModal,
    ];

    /// Dialog heading
    pub fn title(self) -> &'static str {
        match self {
            ModalId::ProjectModal => "Make a new project",
            ModalId::InviteModal => "Invite people",
            ModalId::ProjectDetailModal => "Project",
            ModalId::MessageBoardModal => "Message Board",
            ModalId::TodosModal => "To-dos",
            ModalId::DocsFilesModal => "Docs & Files",
            ModalId::ChatModal => "Chat",
            ModalId::ScheduleModal => "Schedule",
            ModalId::CardTableModal => "Card Table",
        }
    }
}

impl std::fmt::Display for ModalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModalId::ProjectModal => "projectModal",
            ModalId::InviteModal => "inviteModal",
            ModalId::ProjectDetailModal => "projectDetailModal",
            ModalId::MessageBoardModal => "messageBoardModal",
            ModalId::TodosModal => "todosModal",
            ModalId::DocsFilesModal => "docsFilesModal",
            ModalId::ChatModal => "chatModal",
            ModalId::ScheduleModal => "scheduleModal",
            ModalId::CardTableModal => "cardTableModal",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for ModalId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModalId::ALL
            .into_iter()
            .find(|modal| modal.to_string() == s)
            .ok_or_else(|| format!("Unknown modal: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_names_round_trip_through_from_str() {
        for modal in ModalId::ALL {
            assert_eq!(modal.to_string().parse::<ModalId>(), Ok(modal));
        }
    }

    #[test]
    fn test_modal_serialization_uses_element_ids() {
        assert_eq!(
            serde_json::to_string(&ModalId::ProjectDetailModal).unwrap(),
            "\"projectDetailModal\""
        );
        assert_eq!(serde_json::to_string(&ModalId::DocsFilesModal).unwrap(), "\"docsFilesModal\"");
    }
}
