//! Shared helpers for command handlers.

use std::sync::Arc;

use hostly_api::AdminClient;
use hostly_core::{Property, PropertyKind, PropertySession, convert};

use crate::cli::KindArg;
use crate::error::CliError;

impl From<KindArg> for PropertyKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Hotel => PropertyKind::Hotel,
            KindArg::Cafe => PropertyKind::Cafe,
            KindArg::Restaurant => PropertyKind::Restaurant,
        }
    }
}

/// Resolve a property identifier (numeric id or name) to a `Property`.
///
/// A numeric identifier is fetched directly; anything else is matched
/// case-insensitively against the property list.
pub async fn resolve_property(
    client: &Arc<AdminClient>,
    identifier: &str,
) -> Result<Property, CliError> {
    if let Ok(id) = identifier.parse::<i64>() {
        let dto = client.get_property(id).await?;
        return convert::property_from_dto(dto).ok_or_else(|| not_found(identifier));
    }

    let dtos = client.list_properties().await?;
    dtos.into_iter()
        .filter_map(convert::property_from_dto)
        .find(|p| p.name.eq_ignore_ascii_case(identifier))
        .ok_or_else(|| not_found(identifier))
}

fn not_found(identifier: &str) -> CliError {
    CliError::NotFound {
        resource_type: "property".into(),
        identifier: identifier.into(),
        list_command: "properties list".into(),
    }
}

/// Resolve a property and open a session on it.
pub async fn open_session(
    client: &Arc<AdminClient>,
    identifier: &str,
) -> Result<PropertySession, CliError> {
    let property = resolve_property(client, identifier).await?;
    Ok(PropertySession::open(Arc::clone(client), property).await)
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Parse a 24h `HH:MM` string, surfacing a usage error otherwise.
pub fn parse_wall_time(field: &str, raw: &str) -> Result<String, CliError> {
    let ok = raw.split_once(':').is_some_and(|(h, m)| {
        h.parse::<u32>().is_ok_and(|h| h < 24) && m.parse::<u32>().is_ok_and(|m| m < 60)
    });
    if ok {
        Ok(raw.to_string())
    } else {
        Err(CliError::Validation {
            field: field.into(),
            reason: format!("expected 24h HH:MM, got '{raw}'"),
        })
    }
}

/// Parse a `YYYY-MM-DD` date, surfacing a usage error otherwise.
pub fn parse_date(field: &str, raw: &str) -> Result<chrono::NaiveDate, CliError> {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("expected YYYY-MM-DD, got '{raw}'"),
    })
}
