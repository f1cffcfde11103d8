//! Command dispatch: bridges CLI args -> core commands -> output formatting.

pub mod amenities;
pub mod config_cmd;
pub mod events;
pub mod gallery;
pub mod menu;
pub mod policies;
pub mod pricing;
pub mod properties;
pub mod rooms;
pub mod tables;
pub mod util;

use std::sync::Arc;

use hostly_api::AdminClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &Arc<AdminClient>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Properties(args) => properties::handle(client, args, global).await,
        Command::Rooms(args) => rooms::handle(client, args, global).await,
        Command::Amenities(args) => amenities::handle(client, args, global).await,
        Command::Gallery(args) => gallery::handle(client, args, global).await,
        Command::Policies(args) => policies::handle(client, args, global).await,
        Command::Menu(args) => menu::handle(client, args, global).await,
        Command::Tables(args) => tables::handle(client, args, global).await,
        Command::Pricing(args) => pricing::handle(client, args, global).await,
        Command::Events(args) => events::handle(client, args, global).await,
        // Config is handled before dispatch
        Command::Config(_) => unreachable!(),
    }
}
