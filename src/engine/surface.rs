//! Rendering capability consumed by the engine's output
//!
//! A `Surface` is whatever actually shows the UI: the terminal front end, or a
//! recorder in tests. The engine never touches a surface directly; callers
//! hand its commands to [`dispatch`].

use crate::schemas::{Destination, InviteEntry, ModalId};

use super::actions::FieldId;
use super::commands::{FieldState, RenderCommand};

pub trait Surface {
    fn show_page(&mut self, page: Destination);

    fn set_field_state(&mut self, field: FieldId, state: &FieldState);

    fn open_modal(&mut self, modal: ModalId);

    fn close_modal(&mut self, modal: ModalId);

    fn append_entry(&mut self, entry: &InviteEntry);

    fn alert(&mut self, message: &str);

    /// Every other command
    fn render(&mut self, command: &RenderCommand);
}

/// Apply a batch of commands to a surface, in order
pub fn dispatch<S: Surface + ?Sized>(surface: &mut S, commands: &[RenderCommand]) {
    for command in commands {
        match command {
            RenderCommand::ShowPage { page } => surface.show_page(*page),
            RenderCommand::SetFieldState { field, state } => surface.set_field_state(*field, state),
            RenderCommand::OpenModal { modal } => surface.open_modal(*modal),
            RenderCommand::CloseModal { modal } => surface.close_modal(*modal),
            RenderCommand::AppendInviteEntry { entry } => surface.append_entry(entry),
            RenderCommand::Alert { message } => surface.alert(message),
            other => surface.render(other),
        }
    }
}

/// Surface that records every command it receives
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<RenderCommand>,
}

impl Surface for RecordingSurface {
    fn show_page(&mut self, page: Destination) {
        self.commands.push(RenderCommand::ShowPage { page });
    }

    fn set_field_state(&mut self, field: FieldId, state: &FieldState) {
        self.commands.push(RenderCommand::SetFieldState {
            field,
            state: state.clone(),
        });
    }

    fn open_modal(&mut self, modal: ModalId) {
        self.commands.push(RenderCommand::OpenModal { modal });
    }

    fn close_modal(&mut self, modal: ModalId) {
        self.commands.push(RenderCommand::CloseModal { modal });
    }

    fn append_entry(&mut self, entry: &InviteEntry) {
        self.commands.push(RenderCommand::AppendInviteEntry {
            entry: entry.clone(),
        });
    }

    fn alert(&mut self, message: &str) {
        self.commands.push(RenderCommand::alert(message));
    }

    fn render(&mut self, command: &RenderCommand) {
        self.commands.push(command.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::Theme;

    #[test]
    fn test_dispatch_preserves_order() {
        let commands = vec![
            RenderCommand::ApplyTheme { theme: Theme::Dark },
            RenderCommand::OpenModal { modal: ModalId::ChatModal },
            RenderCommand::alert("hello"),
            RenderCommand::ShowPage { page: Destination::Dashboard },
        ];
        let mut surface = RecordingSurface::default();
        dispatch(&mut surface, &commands);
        assert_eq!(surface.commands, commands);
    }
}
