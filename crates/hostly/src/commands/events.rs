//! Venue event command handlers.

use std::sync::Arc;

use tabled::Tabled;

use hostly_api::AdminClient;
use hostly_core::{
    Command as CoreCommand, CommandResult, EventRequest, PropertySession, TabId, VenueEvent,
};

use crate::cli::{EventsArgs, EventsCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&VenueEvent> for EventRow {
    fn from(e: &VenueEvent) -> Self {
        Self {
            id: e.id,
            title: e.title.clone(),
            date: e.date.map(|d| d.to_string()).unwrap_or_default(),
            description: e.description.clone().unwrap_or_default(),
        }
    }
}

/// Render the session's event slice in the chosen format.
pub fn render(session: &PropertySession, format: &OutputFormat) -> String {
    let events: Vec<VenueEvent> = session.events().iter().map(|e| (**e).clone()).collect();
    output::render_list(format, &events, EventRow::from, |e| e.id.to_string())
}

pub async fn handle(
    client: &Arc<AdminClient>,
    args: EventsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        EventsCommand::List { property } => {
            let session = util::open_session(client, &property).await?;
            session.ensure_loaded(TabId::Events).await?;
            output::print_output(&render(&session, &global.output), global.quiet);
            Ok(())
        }

        EventsCommand::Add {
            property,
            title,
            date,
            description,
        } => {
            let date = util::parse_date("date", &date)?;

            let session = util::open_session(client, &property).await?;
            let result = session
                .execute(CoreCommand::CreateEvent(EventRequest {
                    title,
                    date,
                    description,
                    active: true,
                }))
                .await?;
            if !global.quiet {
                if let CommandResult::Event(event) = result {
                    eprintln!("Event '{}' created with id {}", event.title, event.id);
                } else {
                    eprintln!("Event created");
                }
            }
            Ok(())
        }

        EventsCommand::Delete { property, event_id } => {
            if !util::confirm(&format!("Delete event {event_id}?"), global.yes)? {
                return Ok(());
            }
            let session = util::open_session(client, &property).await?;
            session
                .execute(CoreCommand::DeleteEvent { event_id })
                .await?;
            if !global.quiet {
                eprintln!("Event {event_id} deleted");
            }
            Ok(())
        }
    }
}
