//! Invite wizard
//!
//! Step 1 picks an [`InviteType`]; step 2 shows that type's copy and an
//! ordered, growable list of invitee entries. The company field of every
//! entry follows the selected type: pinned and read-only for coworkers,
//! blank and editable otherwise.

use serde::{Deserialize, Serialize};

use crate::schemas::{InviteCopy, InviteEntry, InviteField, InviteType};

use super::validation::{validate_required, RequiredField, ValidationError, INVITE_INCOMPLETE};

/// Title shown on step 1
pub const CHOOSE_TYPE_TITLE: &str = "Who are you inviting?";

/// Step of the invite wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InviteStep {
    #[default]
    ChooseType,
    Details,
}

/// Entries collected by a successful submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InviteSubmission {
    pub invite_type: InviteType,
    pub invitees: Vec<InviteEntry>,
}

impl InviteSubmission {
    /// Message reported after sending
    pub fn summary(&self) -> String {
        format!("Invitations sent to {} people!", self.invitees.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteWizard {
    step: InviteStep,
    invite_type: InviteType,
    entries: Vec<InviteEntry>,
    company_name: String,
}

impl InviteWizard {
    /// A wizard on step 1 with one blank entry
    pub fn new(company_name: impl Into<String>) -> Self {
        InviteWizard {
            step: InviteStep::ChooseType,
            invite_type: InviteType::default(),
            entries: vec![InviteEntry::blank(0)],
            company_name: company_name.into(),
        }
    }

    pub fn step(&self) -> InviteStep {
        self.step
    }

    pub fn invite_type(&self) -> InviteType {
        self.invite_type
    }

    pub fn entries(&self) -> &[InviteEntry] {
        &self.entries
    }

    pub fn entry(&self, id: usize) -> Option<&InviteEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Copy for the currently selected type
    pub fn copy(&self) -> InviteCopy {
        self.invite_type.copy(&self.company_name)
    }

    /// Title for the current step
    pub fn title(&self) -> String {
        match self.step {
            InviteStep::ChooseType => CHOOSE_TYPE_TITLE.to_string(),
            InviteStep::Details => self.copy().title,
        }
    }

    /// Select an invite type.
    ///
    /// On step 2 the new type's company policy is applied to every existing
    /// entry; returns true in that case.
    pub fn select_type(&mut self, invite_type: InviteType) -> bool {
        self.invite_type = invite_type;
        if self.step == InviteStep::Details {
            self.apply_company_policy();
            return true;
        }
        false
    }

    /// Move to step 2 and apply the selected type to all entries
    pub fn next(&mut self) {
        self.step = InviteStep::Details;
        self.apply_company_policy();
    }

    /// Return to step 1. Entries are kept.
    pub fn back(&mut self) {
        self.step = InviteStep::ChooseType;
    }

    /// Append a blank entry with the next sequential id.
    ///
    /// A new entry is pinned to the company when inviting a coworker.
    pub fn add_entry(&mut self) -> &InviteEntry {
        let id = self.entries.len();
        let mut entry = InviteEntry::blank(id);
        let copy = self.copy();
        if copy.locks_company {
            entry.apply_copy(&copy);
        }
        self.entries.push(entry);
        &self.entries[id]
    }

    /// Edit one field of an entry. Returns false for unknown entries and
    /// locked company fields.
    pub fn set_field(&mut self, id: usize, field: InviteField, value: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => entry.set_field(field, value),
            None => false,
        }
    }

    /// Collect all entries and reset the wizard.
    ///
    /// Every entry needs a full name and an email address. On failure nothing
    /// changes.
    pub fn submit(&mut self) -> Result<InviteSubmission, ValidationError> {
        let fields: Vec<RequiredField> = self
            .entries
            .iter()
            .flat_map(|e| {
                [
                    RequiredField::text("full name", &e.full_name),
                    RequiredField::text("email", &e.email),
                ]
            })
            .collect();
        validate_required(&fields).into_result(INVITE_INCOMPLETE)?;

        let submission = InviteSubmission {
            invite_type: self.invite_type,
            invitees: self.entries.clone(),
        };
        self.reset();
        Ok(submission)
    }

    /// Back to step 1 with exactly one blank entry and the default type
    pub fn reset(&mut self) {
        self.step = InviteStep::ChooseType;
        self.invite_type = InviteType::default();
        self.entries.clear();
        self.entries.push(InviteEntry::blank(0));
    }

    fn apply_company_policy(&mut self) {
        let copy = self.copy();
        for entry in &mut self.entries {
            entry.apply_copy(&copy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> InviteWizard {
        InviteWizard::new("Data Prove")
    }

    fn fill(wizard: &mut InviteWizard, id: usize, name: &str) {
        wizard.set_field(id, InviteField::FullName, name);
        wizard.set_field(id, InviteField::Email, format!("{}@example.com", name.to_lowercase()));
    }

    #[test]
    fn test_new_wizard_has_one_blank_entry() {
        let wizard = wizard();
        assert_eq!(wizard.step(), InviteStep::ChooseType);
        assert_eq!(wizard.entries(), &[InviteEntry::blank(0)]);
        assert_eq!(wizard.title(), CHOOSE_TYPE_TITLE);
    }

    #[test]
    fn test_next_applies_coworker_lock() {
        let mut wizard = wizard();
        wizard.next();
        assert_eq!(wizard.step(), InviteStep::Details);
        assert_eq!(wizard.title(), "Set up your coworker's account");
        let entry = &wizard.entries()[0];
        assert_eq!(entry.company, "Data Prove");
        assert!(entry.company_locked);
    }

    #[test]
    fn test_switching_type_on_step_two_updates_all_entries() {
        let mut wizard = wizard();
        wizard.next();
        wizard.add_entry();
        wizard.add_entry();

        assert!(wizard.select_type(InviteType::Client));
        for entry in wizard.entries() {
            assert_eq!(entry.company, "");
            assert!(!entry.company_locked);
        }

        assert!(wizard.select_type(InviteType::Coworker));
        for entry in wizard.entries() {
            assert_eq!(entry.company, "Data Prove");
            assert!(entry.company_locked);
        }
    }

    #[test]
    fn test_selecting_type_on_step_one_defers_policy() {
        let mut wizard = wizard();
        assert!(!wizard.select_type(InviteType::Contractor));
        assert_eq!(wizard.entries()[0].company, "");

        wizard.next();
        assert_eq!(wizard.title(), "Set up your contractor, vendor, etc.");
        assert!(!wizard.entries()[0].company_locked);
    }

    #[test]
    fn test_added_entries_get_sequential_ids() {
        let mut wizard = wizard();
        wizard.next();
        assert_eq!(wizard.add_entry().id, 1);
        assert_eq!(wizard.add_entry().id, 2);
        assert!(wizard.entry(2).unwrap().company_locked);
    }

    #[test]
    fn test_added_entry_is_open_for_contractors() {
        let mut wizard = wizard();
        wizard.select_type(InviteType::Contractor);
        wizard.next();
        let entry = wizard.add_entry();
        assert!(!entry.company_locked);
        assert_eq!(entry.company, "");
    }

    #[test]
    fn test_back_restores_step_one_title_and_keeps_entries() {
        let mut wizard = wizard();
        wizard.next();
        wizard.add_entry();
        wizard.back();
        assert_eq!(wizard.step(), InviteStep::ChooseType);
        assert_eq!(wizard.title(), CHOOSE_TYPE_TITLE);
        assert_eq!(wizard.entries().len(), 2);
    }

    #[test]
    fn test_submit_three_entries_then_reset() {
        let mut wizard = wizard();
        wizard.select_type(InviteType::Contractor);
        wizard.next();
        wizard.add_entry();
        wizard.add_entry();
        fill(&mut wizard, 0, "Ada");
        fill(&mut wizard, 1, "Grace");
        fill(&mut wizard, 2, "Linus");

        let submission = wizard.submit().unwrap();
        assert_eq!(submission.invitees.len(), 3);
        assert_eq!(submission.invite_type, InviteType::Contractor);
        assert_eq!(submission.summary(), "Invitations sent to 3 people!");
        assert_eq!(submission.invitees[2].full_name, "Linus");

        assert_eq!(wizard.step(), InviteStep::ChooseType);
        assert_eq!(wizard.invite_type(), InviteType::Coworker);
        assert_eq!(wizard.entries(), &[InviteEntry::blank(0)]);
    }

    #[test]
    fn test_submit_with_missing_email_changes_nothing() {
        let mut wizard = wizard();
        wizard.next();
        wizard.add_entry();
        fill(&mut wizard, 0, "Ada");
        wizard.set_field(1, InviteField::FullName, "Grace");
        let before = wizard.clone();

        let error = wizard.submit().unwrap_err();
        assert_eq!(error.message, INVITE_INCOMPLETE);
        assert_eq!(error.missing, vec!["email"]);
        assert_eq!(wizard, before);
    }

    #[test]
    fn test_locked_company_cannot_be_edited() {
        let mut wizard = wizard();
        wizard.next();
        assert!(!wizard.set_field(0, InviteField::Company, "Acme"));
        assert!(!wizard.set_field(7, InviteField::FullName, "Nobody"));
    }
}
