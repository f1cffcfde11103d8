//! Policy command handlers: global options plus per-property attachment.

use std::sync::Arc;

use tabled::Tabled;

use hostly_api::AdminClient;
use hostly_api::types::PolicyOptionWrite;
use hostly_core::{
    AttachPoliciesRequest, Command as CoreCommand, PolicyOption, PolicySet, PropertySession,
    convert,
};

use crate::cli::{GlobalOpts, OutputFormat, PoliciesArgs, PoliciesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct PolicyOptionRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&PolicyOption> for PolicyOptionRow {
    fn from(p: &PolicyOption) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            description: p.description.clone().unwrap_or_default(),
            active: crate::output::yes_no(p.active),
        }
    }
}

fn detail(set: &PolicySet) -> String {
    let mut out = format!(
        "Check-in:      {}\nCheck-out:     {}\nCancellation:  {}",
        set.check_in_time.as_deref().unwrap_or("-"),
        set.check_out_time.as_deref().unwrap_or("-"),
        set.cancellation_policy.as_deref().unwrap_or("-"),
    );
    if !set.options.is_empty() {
        out.push_str("\nPolicies:");
        for option in &set.options {
            out.push_str(&format!("\n  [{}] {}", option.id, option.name));
        }
    }
    out
}

/// Render the session's attached policy set in the chosen format.
pub fn render(session: &PropertySession, format: &OutputFormat) -> String {
    match session.policies() {
        Some(set) => output::render_single(format, &*set, detail, |s| {
            s.option_ids()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        }),
        None => "No policies attached".to_string(),
    }
}

pub async fn handle(
    client: &Arc<AdminClient>,
    args: PoliciesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PoliciesCommand::Options => {
            let options: Vec<PolicyOption> = client
                .list_policy_options()
                .await?
                .into_iter()
                .map(convert::policy_option_from_dto)
                .collect();
            let out = output::render_list(&global.output, &options, PolicyOptionRow::from, |p| {
                p.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PoliciesCommand::Create { name, description } => {
            let dto = client
                .create_policy_option(&PolicyOptionWrite { name, description })
                .await?;
            let created = convert::policy_option_from_dto(dto);
            if !global.quiet {
                eprintln!(
                    "Policy option '{}' created with id {}",
                    created.name, created.id
                );
            }
            Ok(())
        }

        PoliciesCommand::Show { property } => {
            let session = util::open_session(client, &property).await?;
            output::print_output(&render(&session, &global.output), global.quiet);
            Ok(())
        }

        PoliciesCommand::Set {
            property,
            ids,
            check_in,
            check_out,
            cancellation,
        } => {
            let check_in_time = util::parse_wall_time("check-in", &check_in)?;
            let check_out_time = util::parse_wall_time("check-out", &check_out)?;

            let session = util::open_session(client, &property).await?;
            session
                .execute(CoreCommand::AttachPolicies(AttachPoliciesRequest {
                    policy_option_ids: ids,
                    check_in_time,
                    check_out_time,
                    cancellation_policy: cancellation,
                }))
                .await?;
            if !global.quiet {
                eprintln!("Policies updated");
            }
            Ok(())
        }
    }
}
