//! Property command handlers.

use std::sync::Arc;

use tabled::Tabled;

use hostly_api::AdminClient;
use hostly_core::{
    Command as CoreCommand, ListingRequest, Property, PropertyKind, PropertyRequest, TabId,
    convert,
};

use crate::cli::{GlobalOpts, PropertiesArgs, PropertiesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct PropertyRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kinds")]
    kinds: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&Property> for PropertyRow {
    fn from(p: &Property) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            kinds: p
                .kinds
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            location: p.location.clone().unwrap_or_default(),
            active: crate::output::yes_no(p.active),
        }
    }
}

fn detail(p: &Property) -> String {
    let mut out = format!(
        "Property {} ({})\n  Kinds:    {}\n  Location: {}\n  Address:  {}\n  Active:   {}",
        p.name,
        p.id,
        p.kinds
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        p.location.as_deref().unwrap_or("-"),
        p.address.as_deref().unwrap_or("-"),
        p.active,
    );
    if let Some(ref listing) = p.listing {
        out.push_str(&format!(
            "\n  Price:    {}\n  Capacity: {}\n  Rating:   {}",
            listing.price.map_or_else(|| "-".into(), |v| v.to_string()),
            listing.capacity.map_or_else(|| "-".into(), |v| v.to_string()),
            listing.rating.map_or_else(|| "-".into(), |v| v.to_string()),
        ));
    }
    out
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &Arc<AdminClient>,
    args: PropertiesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PropertiesCommand::List { kind, active } => {
            let kind: Option<PropertyKind> = kind.map(Into::into);
            let properties: Vec<Property> = client
                .list_properties()
                .await?
                .into_iter()
                .filter_map(convert::property_from_dto)
                .filter(|p| kind.as_ref().is_none_or(|k| p.kinds.contains(k)))
                .filter(|p| !active || p.active)
                .collect();

            let out = output::render_list(
                &global.output,
                &properties,
                PropertyRow::from,
                |p| p.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PropertiesCommand::Show { property, tab } => {
            let session = util::open_session(client, &property).await?;

            let tab: TabId = tab.parse().map_err(|_| CliError::Validation {
                field: "tab".into(),
                reason: format!("unknown tab '{tab}'"),
            })?;
            session.switch_tab(tab).map_err(CliError::from)?;
            session.ensure_loaded(tab).await?;

            let out = match tab {
                TabId::Overview => {
                    let overview = session.overview().ok_or_else(|| CliError::NotFound {
                        resource_type: "property".into(),
                        identifier: property.clone(),
                        list_command: "properties list".into(),
                    })?;
                    output::render_single(&global.output, &*overview, detail, |p| {
                        p.id.to_string()
                    })
                }
                TabId::Rooms => super::rooms::render(&session, &global.output),
                TabId::Amenities => super::amenities::render(&session, &global.output),
                TabId::Gallery => super::gallery::render(&session, &global.output),
                TabId::Policies => super::policies::render(&session, &global.output),
                TabId::Menu => super::menu::render(&session, &global.output),
                TabId::Tables => super::tables::render(&session, &global.output),
                TabId::Pricing => super::pricing::render(&session, &global.output),
                TabId::Events => super::events::render(&session, &global.output),
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PropertiesCommand::Tabs { property } => {
            let resolved = util::resolve_property(client, &property).await?;
            let tabs: Vec<String> = TabId::tabs_for(&resolved.kinds)
                .iter()
                .map(ToString::to_string)
                .collect();
            output::print_output(&tabs.join("\n"), global.quiet);
            Ok(())
        }

        PropertiesCommand::Create {
            name,
            kinds,
            location,
            address,
            price,
            capacity,
        } => {
            let listing = (price.is_some() || capacity.is_some()).then(|| ListingRequest {
                price,
                capacity,
                ..ListingRequest::default()
            });
            let request = PropertyRequest {
                name,
                kinds: kinds.into_iter().map(Into::into).collect(),
                location,
                address,
                listing,
            };
            request.validate()?;

            let dto = client.create_property(&request.into_write()).await?;
            let created = convert::property_from_dto(dto).ok_or_else(|| CliError::ApiError {
                code: "internal".into(),
                message: "backend returned property with unusable id".into(),
            })?;

            if !global.quiet {
                eprintln!("Property '{}' created with id {}", created.name, created.id);
            }
            Ok(())
        }

        PropertiesCommand::Update {
            property,
            name,
            kinds,
            location,
            address,
        } => {
            let session = util::open_session(client, &property).await?;
            let current = session.overview().ok_or_else(|| CliError::NotFound {
                resource_type: "property".into(),
                identifier: property.clone(),
                list_command: "properties list".into(),
            })?;

            // Unset flags keep the current value; the backend PUT is a
            // full replace.
            let request = PropertyRequest {
                name: name.unwrap_or_else(|| current.name.clone()),
                kinds: kinds.map_or_else(
                    || current.kinds.clone(),
                    |ks| ks.into_iter().map(Into::into).collect(),
                ),
                location: location.or_else(|| current.location.clone()),
                address: address.or_else(|| current.address.clone()),
                listing: None,
            };

            session
                .execute(CoreCommand::UpdateProperty(request))
                .await?;
            if !global.quiet {
                eprintln!("Property updated");
            }
            Ok(())
        }

        PropertiesCommand::Enable { property } => {
            let session = util::open_session(client, &property).await?;
            session.execute(CoreCommand::EnableProperty).await?;
            if !global.quiet {
                eprintln!("Property enabled");
            }
            Ok(())
        }

        PropertiesCommand::Disable { property } => {
            if !util::confirm(
                &format!("Disable property '{property}'? Guests will no longer see it."),
                global.yes,
            )? {
                return Ok(());
            }
            let session = util::open_session(client, &property).await?;
            session.execute(CoreCommand::DisableProperty).await?;
            if !global.quiet {
                eprintln!("Property disabled");
            }
            Ok(())
        }
    }
}
