//! Menu command handlers.

use std::sync::Arc;

use tabled::Tabled;

use hostly_api::AdminClient;
use hostly_core::{
    Command as CoreCommand, CommandResult, MenuItem, MenuItemRequest, PropertySession, TabId,
};

use crate::cli::{GlobalOpts, MenuArgs, MenuCommand, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct MenuRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Available")]
    available: String,
}

impl From<&MenuItem> for MenuRow {
    fn from(m: &MenuItem) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            price: format!("{:.2}", m.price),
            category: m.category.clone().unwrap_or_default(),
            available: crate::output::yes_no(m.available),
        }
    }
}

/// Render the session's menu slice in the chosen format.
pub fn render(session: &PropertySession, format: &OutputFormat) -> String {
    let items: Vec<MenuItem> = session.menu().iter().map(|m| (**m).clone()).collect();
    output::render_list(format, &items, MenuRow::from, |m| m.id.to_string())
}

pub async fn handle(
    client: &Arc<AdminClient>,
    args: MenuArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        MenuCommand::List { property } => {
            let session = util::open_session(client, &property).await?;
            session.ensure_loaded(TabId::Menu).await?;
            output::print_output(&render(&session, &global.output), global.quiet);
            Ok(())
        }

        MenuCommand::Add {
            property,
            name,
            price,
            category,
            available,
        } => {
            let session = util::open_session(client, &property).await?;
            let result = session
                .execute(CoreCommand::CreateMenuItem(MenuItemRequest {
                    name,
                    price,
                    category,
                    available,
                }))
                .await?;
            if !global.quiet {
                if let CommandResult::MenuItem(item) = result {
                    eprintln!("Menu item '{}' created with id {}", item.name, item.id);
                } else {
                    eprintln!("Menu item created");
                }
            }
            Ok(())
        }

        MenuCommand::Update {
            property,
            item_id,
            name,
            price,
            category,
            available,
        } => {
            let session = util::open_session(client, &property).await?;
            session
                .execute(CoreCommand::UpdateMenuItem {
                    item_id,
                    request: MenuItemRequest {
                        name,
                        price,
                        category,
                        available,
                    },
                })
                .await?;
            if !global.quiet {
                eprintln!("Menu item {item_id} updated");
            }
            Ok(())
        }

        MenuCommand::Delete { property, item_id } => {
            if !util::confirm(&format!("Delete menu item {item_id}?"), global.yes)? {
                return Ok(());
            }
            let session = util::open_session(client, &property).await?;
            session
                .execute(CoreCommand::DeleteMenuItem { item_id })
                .await?;
            if !global.quiet {
                eprintln!("Menu item {item_id} deleted");
            }
            Ok(())
        }
    }
}
