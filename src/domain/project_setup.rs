//! "Make a new project" form: tool toggles and access options

use serde::Serialize;

use crate::schemas::{AllAccessScope, ProjectAccess, ProjectTool};

use super::validation::{validate_required, RequiredField, ValidationError, PROJECT_NAME_REQUIRED};

/// Status label for a tool toggle
pub fn tool_status_label(enabled: bool) -> &'static str {
    if enabled {
        "ON"
    } else {
        "OFF"
    }
}

/// Per-tool on/off switches in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolToggles {
    toggles: Vec<(ProjectTool, bool)>,
    default_enabled: usize,
}

impl ToolToggles {
    /// The first `default_enabled` declared tools start on, the rest off
    pub fn new(default_enabled: usize) -> Self {
        let toggles = ProjectTool::ALL
            .iter()
            .enumerate()
            .map(|(index, tool)| (*tool, index < default_enabled))
            .collect();
        ToolToggles {
            toggles,
            default_enabled,
        }
    }

    /// Switch a tool. Returns false if it already had that state.
    pub fn set(&mut self, tool: ProjectTool, enabled: bool) -> bool {
        match self.toggles.iter_mut().find(|(t, _)| *t == tool) {
            Some((_, current)) if *current != enabled => {
                *current = enabled;
                true
            }
            _ => false,
        }
    }

    pub fn is_enabled(&self, tool: ProjectTool) -> bool {
        self.toggles.iter().any(|(t, on)| *t == tool && *on)
    }

    /// Restore the default-on set regardless of current state
    pub fn reset(&mut self) {
        *self = ToolToggles::new(self.default_enabled);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProjectTool, bool)> + '_ {
        self.toggles.iter().copied()
    }

    pub fn enabled_tools(&self) -> Vec<ProjectTool> {
        self.iter().filter(|(_, on)| *on).map(|(tool, _)| tool).collect()
    }
}

/// A project accepted by the creation form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub access: ProjectAccess,
    /// Only set for all-access projects
    pub scope: Option<AllAccessScope>,
    pub tools: Vec<ProjectTool>,
}

impl ProjectDraft {
    /// Message reported after creation
    pub fn summary(&self) -> String {
        format!("Project \"{}\" created successfully!", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSetupForm {
    pub name: String,
    pub description: String,
    access: ProjectAccess,
    scope: AllAccessScope,
    toggles: ToolToggles,
}

impl ProjectSetupForm {
    pub fn new(default_enabled_tools: usize) -> Self {
        ProjectSetupForm {
            name: String::new(),
            description: String::new(),
            access: ProjectAccess::default(),
            scope: AllAccessScope::default(),
            toggles: ToolToggles::new(default_enabled_tools),
        }
    }

    pub fn access(&self) -> ProjectAccess {
        self.access
    }

    pub fn scope(&self) -> AllAccessScope {
        self.scope
    }

    pub fn toggles(&self) -> &ToolToggles {
        &self.toggles
    }

    /// The scope sub-options are only usable for all-access projects
    pub fn scope_enabled(&self) -> bool {
        self.access.enables_scope()
    }

    /// Select an access mode; returns whether the scope options are now enabled
    pub fn select_access(&mut self, access: ProjectAccess) -> bool {
        self.access = access;
        self.scope_enabled()
    }

    /// Pick a scope. Ignored while the scope options are disabled.
    pub fn select_scope(&mut self, scope: AllAccessScope) -> bool {
        if !self.scope_enabled() {
            return false;
        }
        self.scope = scope;
        true
    }

    pub fn set_tool(&mut self, tool: ProjectTool, enabled: bool) -> bool {
        self.toggles.set(tool, enabled)
    }

    /// Validate, produce the draft, and reset the form and toggles
    pub fn submit(&mut self) -> Result<ProjectDraft, ValidationError> {
        validate_required(&[RequiredField::text("project name", &self.name)])
            .into_result(PROJECT_NAME_REQUIRED)?;

        let draft = ProjectDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            access: self.access,
            scope: self.scope_enabled().then_some(self.scope),
            tools: self.toggles.enabled_tools(),
        };
        self.reset();
        Ok(draft)
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.description.clear();
        self.access = ProjectAccess::default();
        self.scope = AllAccessScope::default();
        self.toggles.reset();
    }
}
