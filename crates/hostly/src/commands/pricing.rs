//! Pricing season command handlers.

use std::sync::Arc;

use tabled::Tabled;

use hostly_api::AdminClient;
use hostly_core::{
    Command as CoreCommand, CommandResult, PricingSeason, PricingSeasonRequest, PropertySession,
    TabId,
};

use crate::cli::{GlobalOpts, OutputFormat, PricingArgs, PricingCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct SeasonRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Multiplier")]
    multiplier: String,
}

impl From<&PricingSeason> for SeasonRow {
    fn from(s: &PricingSeason) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
            start: s.start_date.to_string(),
            end: s.end_date.to_string(),
            multiplier: format!("{:.2}", s.multiplier),
        }
    }
}

/// Render the session's pricing slice in the chosen format.
pub fn render(session: &PropertySession, format: &OutputFormat) -> String {
    let seasons: Vec<PricingSeason> = session.pricing().iter().map(|s| (**s).clone()).collect();
    output::render_list(format, &seasons, SeasonRow::from, |s| s.id.to_string())
}

pub async fn handle(
    client: &Arc<AdminClient>,
    args: PricingArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PricingCommand::List { property } => {
            let session = util::open_session(client, &property).await?;
            session.ensure_loaded(TabId::Pricing).await?;
            output::print_output(&render(&session, &global.output), global.quiet);
            Ok(())
        }

        PricingCommand::Add {
            property,
            name,
            start,
            end,
            multiplier,
        } => {
            let start_date = util::parse_date("start", &start)?;
            let end_date = util::parse_date("end", &end)?;

            let session = util::open_session(client, &property).await?;
            let result = session
                .execute(CoreCommand::CreatePricingSeason(PricingSeasonRequest {
                    name,
                    start_date,
                    end_date,
                    multiplier,
                }))
                .await?;
            if !global.quiet {
                if let CommandResult::PricingSeason(season) = result {
                    eprintln!("Season '{}' created with id {}", season.name, season.id);
                } else {
                    eprintln!("Pricing season created");
                }
            }
            Ok(())
        }

        PricingCommand::Delete {
            property,
            season_id,
        } => {
            if !util::confirm(&format!("Delete pricing season {season_id}?"), global.yes)? {
                return Ok(());
            }
            let session = util::open_session(client, &property).await?;
            session
                .execute(CoreCommand::DeletePricingSeason { season_id })
                .await?;
            if !global.quiet {
                eprintln!("Pricing season {season_id} deleted");
            }
            Ok(())
        }
    }
}
