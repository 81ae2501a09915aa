//! UI actions fed into the workflow engine

use serde::{Deserialize, Serialize};

use crate::domain::SignInField;
use crate::schemas::{
    AllAccessScope, Destination, InviteField, InviteType, ModalId, ProjectAccess, ProjectTool,
};

/// An input field the user can type into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    SignInEmail,
    SignInPassword,
    SignUpFullName,
    SignUpEmail,
    SignUpOrganization,
    ProjectName,
    ProjectDescription,
    /// Field of the invite entry with the given id
    Invite(usize, InviteField),
}

impl FieldId {
    /// The sign-in field this id refers to, if any
    pub fn sign_in_field(self) -> Option<SignInField> {
        match self {
            FieldId::SignInEmail => Some(SignInField::Email),
            FieldId::SignInPassword => Some(SignInField::Password),
            _ => None,
        }
    }

    /// The page the field lives on
    pub fn page(self) -> Destination {
        match self {
            FieldId::SignInEmail | FieldId::SignInPassword => Destination::SignIn,
            FieldId::SignUpFullName | FieldId::SignUpEmail | FieldId::SignUpOrganization => {
                Destination::SignUp
            }
            FieldId::ProjectName | FieldId::ProjectDescription | FieldId::Invite(..) => {
                Destination::Dashboard
            }
        }
    }

    pub fn label(self) -> String {
        match self {
            FieldId::SignInEmail | FieldId::SignUpEmail => "Email address".to_string(),
            FieldId::SignInPassword => "Password".to_string(),
            FieldId::SignUpFullName => "Full name".to_string(),
            FieldId::SignUpOrganization => "Organization".to_string(),
            FieldId::ProjectName => "Project name".to_string(),
            FieldId::ProjectDescription => "Description".to_string(),
            FieldId::Invite(id, field) => {
                let name = match field {
                    InviteField::FullName => "Full name",
                    InviteField::Email => "Email address",
                    InviteField::JobTitle => "Job title (optional)",
                    InviteField::Company => "Company/organization",
                };
                format!("{} #{}", name, id + 1)
            }
        }
    }
}

/// A key press the engine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Enter,
    Escape,
    /// Ctrl (or Cmd) plus a character
    Ctrl(char),
}

/// Entries of the user profile dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuItem {
    Profile,
    Settings,
    Logout,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Profile, MenuItem::Settings, MenuItem::Logout];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Profile => "Profile",
            MenuItem::Settings => "Settings",
            MenuItem::Logout => "Log out",
        }
    }
}

/// A user gesture delivered to the engine
///
/// Every action also counts as input activity and resets the idle timer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UiAction {
    /// Pointer movement or any other activity without a specific target
    Activity,
    /// The value of an input field changed
    Input { field: FieldId, value: String },
    /// A key was pressed, optionally while an input field had focus
    KeyPress {
        key: Key,
        #[serde(default)]
        target: Option<FieldId>,
    },

    // Sign-in / sign-up
    SignInAdvance,
    TogglePasswordVisibility,
    GoogleSignIn,
    SetTermsAccepted { accepted: bool },
    SubmitSignUp,

    // Modals
    OpenModal { modal: ModalId },
    /// The close control inside a modal
    CloseModal { modal: ModalId },
    /// A click inside a modal overlay; `on_root` when the backdrop itself was hit
    BackdropClick { modal: ModalId, on_root: bool },

    // Dashboard
    SelectProject { project: String },
    SelectTool { tool: ProjectTool },
    CalendarPrevious,
    CalendarNext,
    SelectDay { day: u32 },

    // Project creation
    ToggleTool { tool: ProjectTool, enabled: bool },
    SelectAccess { access: ProjectAccess },
    SelectAccessScope { scope: AllAccessScope },
    SubmitProject,

    // Invite wizard
    SelectInviteType { invite_type: InviteType },
    InviteNext,
    InviteBack,
    InviteAddEntry,
    SubmitInvite,

    // Chrome
    ToggleTheme,
    ToggleUserMenu,
    /// A click anywhere outside the user dropdown
    DocumentClick,
    SelectMenuItem { item: MenuItem },
    FollowLink { destination: Destination },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_json_shape() {
        let action = UiAction::Input {
            field: FieldId::SignInEmail,
            value: "ada@example.com".to_string(),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "input");
        assert_eq!(json["field"], "sign_in_email");
    }

    #[test]
    fn test_parse_actions_from_script() {
        let actions: Vec<UiAction> = serde_json::from_str(
            r#"[
                {"action": "sign_in_advance"},
                {"action": "key_press", "key": "escape"},
                {"action": "input", "field": {"invite": [1, "email"]}, "value": "x@y.z"},
                {"action": "open_modal", "modal": "inviteModal"},
                {"action": "select_tool", "tool": "card-table"}
            ]"#,
        )
        .unwrap();

        assert_eq!(actions[0], UiAction::SignInAdvance);
        assert_eq!(actions[1], UiAction::KeyPress { key: Key::Escape, target: None });
        assert_eq!(
            actions[2],
            UiAction::Input {
                field: FieldId::Invite(1, InviteField::Email),
                value: "x@y.z".to_string()
            }
        );
        assert_eq!(actions[3], UiAction::OpenModal { modal: ModalId::InviteModal });
        assert_eq!(actions[4], UiAction::SelectTool { tool: ProjectTool::CardTable });
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(FieldId::SignInPassword.label(), "Password");
        assert_eq!(FieldId::Invite(0, InviteField::Email).label(), "Email address #1");
        assert_eq!(FieldId::SignInEmail.sign_in_field(), Some(SignInField::Email));
        assert_eq!(FieldId::ProjectName.sign_in_field(), None);
    }

    #[test]
    fn test_invite_fields_order_by_entry_then_field() {
        let mut fields = vec![
            FieldId::Invite(1, InviteField::FullName),
            FieldId::Invite(0, InviteField::Company),
            FieldId::Invite(0, InviteField::FullName),
            FieldId::SignInEmail,
        ];
        fields.sort();
        assert_eq!(
            fields,
            vec![
                FieldId::SignInEmail,
                FieldId::Invite(0, InviteField::FullName),
                FieldId::Invite(0, InviteField::Company),
                FieldId::Invite(1, InviteField::FullName),
            ]
        );
    }
}
