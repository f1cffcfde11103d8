//! Config command handlers. These run without a backend connection.

use tabled::Tabled;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Backend")]
    backend: String,
    #[tabled(rename = "Default")]
    default: String,
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out = match global.output {
                OutputFormat::Json => output::render_json_pretty(&cfg),
                OutputFormat::JsonCompact => output::render_json_compact(&cfg),
                _ => output::render_yaml(&cfg),
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_profile.clone().unwrap_or_default();
            let mut profiles: Vec<(String, config::Profile)> = cfg.profiles.into_iter().collect();
            profiles.sort_by(|a, b| a.0.cmp(&b.0));

            let out = output::render_list(
                &global.output,
                &profiles,
                |(name, profile)| ProfileRow {
                    name: name.clone(),
                    backend: profile.backend.clone(),
                    default: if *name == default {
                        "*".into()
                    } else {
                        String::new()
                    },
                },
                |(name, _)| name.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();
            if !cfg.profiles.contains_key(&name) {
                let mut available: Vec<&str> =
                    cfg.profiles.keys().map(String::as_str).collect();
                available.sort_unstable();
                return Err(CliError::ProfileNotFound {
                    name,
                    available: available.join(", "),
                });
            }
            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Default profile set to '{name}'");
            }
            Ok(())
        }

        ConfigCommand::SetKey { profile } => {
            let cfg = config::load_config_or_default();
            let name = profile.unwrap_or_else(|| config::active_profile_name(global, &cfg));

            let key = dialoguer::Password::new()
                .with_prompt(format!("API key for profile '{name}'"))
                .interact()
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

            hostly_config::store_api_key(&name, &key)?;
            if !global.quiet {
                eprintln!("API key stored in system keyring for profile '{name}'");
            }
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}
