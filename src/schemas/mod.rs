//! Schema types for dataprove
//!
//! Plain data shared by the engine, the CLI and the terminal front end.
//! All types serialize with the names the site's markup uses.

mod config;
mod invite;
mod modal;
mod page;
mod project;
mod theme;

pub use config::Config;
pub use invite::{InviteCopy, InviteEntry, InviteField, InviteType};
pub use modal::ModalId;
pub use page::Destination;
pub use project::{AllAccessScope, Project, ProjectAccess, ProjectTool};
pub use theme::Theme;
