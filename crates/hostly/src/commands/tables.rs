//! Dining table command handlers.

use std::sync::Arc;

use tabled::Tabled;

use hostly_api::AdminClient;
use hostly_core::{
    Command as CoreCommand, CommandResult, DiningTable, PropertySession, TabId, TableRequest,
};

use crate::cli::{GlobalOpts, OutputFormat, TablesArgs, TablesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Seats")]
    seats: i64,
    #[tabled(rename = "Zone")]
    zone: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&DiningTable> for TableRow {
    fn from(t: &DiningTable) -> Self {
        Self {
            id: t.id,
            number: t.table_number.clone(),
            seats: t.seats,
            zone: t.zone.clone().unwrap_or_default(),
            active: crate::output::yes_no(t.active),
        }
    }
}

/// Render the session's table slice in the chosen format.
pub fn render(session: &PropertySession, format: &OutputFormat) -> String {
    let tables: Vec<DiningTable> = session.tables().iter().map(|t| (**t).clone()).collect();
    output::render_list(format, &tables, TableRow::from, |t| t.id.to_string())
}

pub async fn handle(
    client: &Arc<AdminClient>,
    args: TablesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        TablesCommand::List { property } => {
            let session = util::open_session(client, &property).await?;
            session.ensure_loaded(TabId::Tables).await?;
            output::print_output(&render(&session, &global.output), global.quiet);
            Ok(())
        }

        TablesCommand::Add {
            property,
            number,
            seats,
            zone,
        } => {
            let session = util::open_session(client, &property).await?;
            let result = session
                .execute(CoreCommand::CreateTable(TableRequest {
                    table_number: number,
                    seats,
                    zone,
                    active: true,
                }))
                .await?;
            if !global.quiet {
                if let CommandResult::Table(table) = result {
                    eprintln!("Table '{}' created with id {}", table.table_number, table.id);
                } else {
                    eprintln!("Table created");
                }
            }
            Ok(())
        }

        TablesCommand::Delete { property, table_id } => {
            if !util::confirm(&format!("Delete table {table_id}?"), global.yes)? {
                return Ok(());
            }
            let session = util::open_session(client, &property).await?;
            session
                .execute(CoreCommand::DeleteTable { table_id })
                .await?;
            if !global.quiet {
                eprintln!("Table {table_id} deleted");
            }
            Ok(())
        }
    }
}
