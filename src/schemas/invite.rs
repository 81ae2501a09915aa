//! Invite schema - invite types, their copy, and invitee entries

use serde::{Deserialize, Serialize};

/// Kind of person being invited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InviteType {
    /// Someone who works at the company
    #[default]
    Coworker,
    /// A contractor, vendor or other outside collaborator
    Contractor,
    /// A client
    Client,
}

/// Text and company-field policy for one invite type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InviteCopy {
    pub title: String,
    pub description: String,
    /// Value written into every company field
    pub company: String,
    /// Whether company fields are read-only
    pub locks_company: bool,
}

impl InviteType {
    pub const ALL: [InviteType; 3] = [InviteType::Coworker, InviteType::Contractor, InviteType::Client];

    /// Look up the step-2 copy for this type
    pub fn copy(self, company_name: &str) -> InviteCopy {
        match self {
            InviteType::Coworker => InviteCopy {
                title: "Set up your coworker's account".to_string(),
                description: format!(
                    "People who work at {company_name} are the only people who can create projects, \
                     add others to projects, and act as administrators. They can be full-time, \
                     part-time, or a volunteer."
                ),
                company: company_name.to_string(),
                locks_company: true,
            },
            InviteType::Contractor => InviteCopy {
                title: "Set up your contractor, vendor, etc.".to_string(),
                description: format!(
                    "People outside {company_name} can collaborate on projects with you, but they \
                     won't be able to create projects, invite people to the account, add people to \
                     projects, or be admins."
                ),
                company: String::new(),
                locks_company: false,
            },
            InviteType::Client => InviteCopy {
                title: "Set up your client's account".to_string(),
                description: "Clients can access projects you've created, but they can't create \
                              their own, invite or add new people, or become admins. You can hide \
                              parts of projects from them so they can't see work in progress."
                    .to_string(),
                company: String::new(),
                locks_company: false,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InviteType::Coworker => "A coworker",
            InviteType::Contractor => "A contractor, vendor, or other collaborator",
            InviteType::Client => "A client",
        }
    }
}

impl std::fmt::Display for InviteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InviteType::Coworker => write!(f, "coworker"),
            InviteType::Contractor => write!(f, "contractor"),
            InviteType::Client => write!(f, "client"),
        }
    }
}

/// Editable fields of an invitee entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InviteField {
    FullName,
    Email,
    JobTitle,
    Company,
}

/// One person to invite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InviteEntry {
    /// Sequential id, unique within an invite session
    pub id: usize,

    pub full_name: String,

    pub email: String,

    #[serde(default)]
    pub job_title: String,

    #[serde(default)]
    pub company: String,

    /// Company is filled in and read-only
    #[serde(default)]
    pub company_locked: bool,
}

impl InviteEntry {
    /// A blank, unlocked entry
    pub fn blank(id: usize) -> Self {
        InviteEntry {
            id,
            ..Default::default()
        }
    }

    pub fn field(&self, field: InviteField) -> &str {
        match field {
            InviteField::FullName => &self.full_name,
            InviteField::Email => &self.email,
            InviteField::JobTitle => &self.job_title,
            InviteField::Company => &self.company,
        }
    }

    /// Set a field value. Edits to a locked company field are ignored.
    pub fn set_field(&mut self, field: InviteField, value: impl Into<String>) -> bool {
        match field {
            InviteField::FullName => self.full_name = value.into(),
            InviteField::Email => self.email = value.into(),
            InviteField::JobTitle => self.job_title = value.into(),
            InviteField::Company => {
                if self.company_locked {
                    return false;
                }
                self.company = value.into();
            }
        }
        true
    }

    /// Apply an invite type's company policy to this entry
    pub fn apply_copy(&mut self, copy: &InviteCopy) {
        self.company = copy.company.clone();
        self.company_locked = copy.locks_company;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coworker_copy_locks_company() {
        let copy = InviteType::Coworker.copy("Data Prove");
        assert!(copy.locks_company);
        assert_eq!(copy.company, "Data Prove");
        assert!(copy.description.contains("Data Prove"));
    }

    #[test]
    fn test_other_types_leave_company_open() {
        for invite_type in [InviteType::Contractor, InviteType::Client] {
            let copy = invite_type.copy("Data Prove");
            assert!(!copy.locks_company);
            assert!(copy.company.is_empty());
        }
    }

    #[test]
    fn test_locked_company_ignores_edits() {
        let mut entry = InviteEntry::blank(0);
        entry.apply_copy(&InviteType::Coworker.copy("Data Prove"));

        assert!(!entry.set_field(InviteField::Company, "Acme"));
        assert_eq!(entry.company, "Data Prove");
        assert!(entry.set_field(InviteField::FullName, "Ada Lovelace"));
        assert_eq!(entry.field(InviteField::FullName), "Ada Lovelace");
    }

    #[test]
    fn test_invite_type_serialization() {
        assert_eq!(serde_json::to_string(&InviteType::Contractor).unwrap(), "\"contractor\"");
        assert_eq!(InviteType::default(), InviteType::Coworker);
    }
}
