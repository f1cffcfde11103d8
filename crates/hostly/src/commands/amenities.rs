//! Amenity command handlers: global catalog plus per-property selection.

use std::sync::Arc;

use tabled::Tabled;

use hostly_api::AdminClient;
use hostly_api::types::AmenityFeatureWrite;
use hostly_core::{AmenityFeature, Command as CoreCommand, PropertySession, convert};

use crate::cli::{AmenitiesArgs, AmenitiesCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct AmenityRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&AmenityFeature> for AmenityRow {
    fn from(a: &AmenityFeature) -> Self {
        Self {
            id: a.id,
            name: a.name.clone(),
            active: crate::output::yes_no(a.active),
        }
    }
}

/// Render the property's selected amenities, resolved against the
/// catalog snapshot. Ids the catalog doesn't know are skipped.
pub fn render(session: &PropertySession, format: &OutputFormat) -> String {
    let ids = session
        .overview()
        .map(|p| p.amenity_ids.clone())
        .unwrap_or_default();
    let selected: Vec<AmenityFeature> = session
        .amenity_catalog()
        .snapshot()
        .iter()
        .filter(|f| ids.contains(&f.id))
        .cloned()
        .collect();
    output::render_list(format, &selected, AmenityRow::from, |a| a.id.to_string())
}

pub async fn handle(
    client: &Arc<AdminClient>,
    args: AmenitiesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AmenitiesCommand::Catalog => {
            let features: Vec<AmenityFeature> = client
                .list_amenity_features()
                .await?
                .into_iter()
                .map(convert::amenity_from_dto)
                .collect();
            let out =
                output::render_list(&global.output, &features, AmenityRow::from, |a| {
                    a.id.to_string()
                });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AmenitiesCommand::Create { name } => {
            let dto = client
                .create_amenity_feature(&AmenityFeatureWrite {
                    name,
                    is_active: true,
                })
                .await?;
            let created = convert::amenity_from_dto(dto);
            if !global.quiet {
                eprintln!("Amenity '{}' created with id {}", created.name, created.id);
            }
            Ok(())
        }

        AmenitiesCommand::Show { property } => {
            let session = util::open_session(client, &property).await?;
            session.load_amenity_catalog().await?;
            output::print_output(&render(&session, &global.output), global.quiet);
            Ok(())
        }

        AmenitiesCommand::Set { property, ids } => {
            let session = util::open_session(client, &property).await?;
            session
                .execute(CoreCommand::SetAmenities { amenity_ids: ids })
                .await?;
            if !global.quiet {
                eprintln!("Amenity selection updated");
            }
            Ok(())
        }
    }
}
