// Command handlers. Each one loads what it needs from the `Config` it is
// given, performs one round trip and prints the result on stdout.

use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tracing::{debug, warn};

use crate::api::files::{parse_keyvalues, FileQuery};
use crate::api::gateways::DEFAULT_SIGNED_URL_EXPIRY;
use crate::api::groups::GroupQuery;
use crate::api::keys::{key_request, KeyQuery};
use crate::api::{self, ApiClient};
use crate::cli::{
    Commands, FilesCommand, GatewaysCommand, GroupsCommand, KeysCommand, SwapsCommand, UploadArgs,
};
use crate::config::Config;
use crate::error::Error;
use crate::render::to_pretty_json;
use crate::ui;
use crate::upload::{self, UploadOptions};

/// Dispatch one parsed command.
pub fn run(config: Config, command: Commands) -> Result<()> {
    match command {
        Commands::Auth { jwt } => auth(&config, jwt),
        Commands::Upload(args) => upload_path(config, args),
        Commands::Files(cmd) => files(&ApiClient::from_config(config)?, cmd),
        Commands::Groups(cmd) => groups(&ApiClient::from_config(config)?, cmd),
        Commands::Keys(cmd) => keys(&ApiClient::from_config(config)?, cmd),
        Commands::Gateways(cmd) => gateways(config, cmd),
        Commands::Swaps(cmd) => swaps(&ApiClient::from_config(config)?, cmd),
    }
}

/// Check the JWT against the API, store it, then offer to pick a gateway.
fn auth(config: &Config, jwt: Option<String>) -> Result<()> {
    let jwt = match jwt.map(|j| j.trim().to_string()) {
        Some(jwt) if !jwt.is_empty() => jwt,
        _ => ui::prompt_jwt()?,
    };

    let spinner = ui::spinner("Checking your JWT...")?;
    let checked = api::test_authentication(config, &jwt);
    spinner.finish_and_clear();
    checked.context("Authentication failed, make sure you are using the Pinata JWT")?;

    config.credentials.save_token(&jwt)?;
    println!("Authentication Successful!");

    let client = ApiClient::new(config.clone(), jwt)?;
    if let Err(e) = choose_gateway(&client) {
        warn!("gateway setup skipped: {:#}", e);
        eprintln!("Skipped gateway setup ({:#}), run 'pinata gateways set' later", e);
    }
    Ok(())
}

fn upload_path(mut config: Config, args: UploadArgs) -> Result<()> {
    if let Some(secs) = args.timeout {
        config.upload_timeout = Some(Duration::from_secs(secs));
    }
    let client = ApiClient::from_config(config)?;

    let options = UploadOptions {
        name: args.name,
        group_id: args.group,
    };
    let (target, payload) = upload::prepare(&args.path, &options)?;
    debug!(root = %target.root().display(), files = target.files().len(), "prepared upload");

    let outcome = if args.verbose {
        eprintln!(
            "Uploading {} ({})",
            target.root_name(),
            ui::format_size(payload.len())
        );
        let bar = ui::upload_bar(payload.len())?;
        match upload::send(&client, payload, Some(bar.clone())) {
            Ok(outcome) => outcome,
            Err(e) => {
                bar.abandon();
                return Err(e.into());
            }
        }
    } else {
        upload::send(&client, payload, None::<ProgressBar>)?
    };

    if args.cid_only {
        println!("{}", outcome.result.cid);
    } else {
        println!("{}", outcome.rendered);
    }
    Ok(())
}

fn files(client: &ApiClient, cmd: FilesCommand) -> Result<()> {
    match cmd {
        FilesCommand::List {
            name,
            cid,
            group,
            mime,
            amount,
            token,
            cid_pending,
            keyvalues,
        } => {
            let filter = FileQuery {
                name,
                cid,
                group,
                mime_type: mime,
                limit: amount,
                page_token: token,
                cid_pending,
                keyvalues: parse_keyvalues(&keyvalues),
            };
            print_json(&client.list_files(&filter)?)
        }
        FilesCommand::Get { id } => print_json(&client.get_file(&id)?),
        FilesCommand::Update { id, name } => print_json(&client.update_file(&id, &name)?),
        FilesCommand::Delete { id } => {
            client
                .delete_file(&id)
                .with_context(|| format!("could not delete file {}, check the ID", id))?;
            println!("File Deleted");
            Ok(())
        }
    }
}

fn groups(client: &ApiClient, cmd: GroupsCommand) -> Result<()> {
    match cmd {
        GroupsCommand::Create { name, public } => print_json(&client.create_group(&name, public)?),
        GroupsCommand::List {
            public,
            amount,
            name,
            token,
        } => {
            let filter = GroupQuery {
                limit: Some(amount),
                public_only: public,
                name,
                page_token: token,
            };
            print_json(&client.list_groups(&filter)?)
        }
        GroupsCommand::Get { id } => print_json(&client.get_group(&id)?),
        GroupsCommand::Update { id, name, public } => {
            print_json(&client.update_group(&id, &name, public)?)
        }
        GroupsCommand::Delete { id } => {
            client
                .delete_group(&id)
                .with_context(|| format!("could not delete group {}, check the ID", id))?;
            println!("Group Deleted");
            Ok(())
        }
        GroupsCommand::Add { group_id, file_id } => {
            client.add_file_to_group(&group_id, &file_id)?;
            println!("File added to group");
            Ok(())
        }
        GroupsCommand::Remove { group_id, file_id } => {
            client.remove_file_from_group(&group_id, &file_id)?;
            println!("File removed from group");
            Ok(())
        }
    }
}

fn keys(client: &ApiClient, cmd: KeysCommand) -> Result<()> {
    match cmd {
        KeysCommand::List {
            name,
            revoked,
            limited_use,
            exhausted,
            offset,
        } => {
            let filter = KeyQuery {
                name,
                revoked,
                limited_use,
                exhausted,
                offset,
            };
            print_json(&client.list_keys(&filter)?)
        }
        KeysCommand::Create {
            name,
            admin,
            uses,
            endpoints,
        } => {
            let body = key_request(&name, admin, uses, &endpoints)?;
            print_json(&client.create_key(&body)?)
        }
        KeysCommand::Revoke { key } => {
            client.revoke_key(&key)?;
            println!("Key Revoked");
            Ok(())
        }
    }
}

fn gateways(config: Config, cmd: GatewaysCommand) -> Result<()> {
    match cmd {
        GatewaysCommand::Set {
            domain: Some(domain),
        } => {
            // Storing a known domain needs no token.
            config.credentials.save_gateway(&domain)?;
            println!("Gateway Saved!");
            Ok(())
        }
        GatewaysCommand::Set { domain: None } => choose_gateway(&ApiClient::from_config(config)?),
        GatewaysCommand::Sign { cid, expires } => {
            let expires = parse_expiry(&expires)?;
            let client = ApiClient::from_config(config)?;
            println!("{}", signed_url(&client, &cid, expires)?);
            Ok(())
        }
        GatewaysCommand::Open { cid } => {
            let client = ApiClient::from_config(config)?;
            let url = signed_url(&client, &cid, DEFAULT_SIGNED_URL_EXPIRY)
                .context("Problem creating URL")?;
            open_in_browser(&url).context("Problem opening URL")
        }
    }
}

fn swaps(client: &ApiClient, cmd: SwapsCommand) -> Result<()> {
    match cmd {
        SwapsCommand::List { cid, domain } => {
            let domain = match domain.filter(|d| !d.trim().is_empty()) {
                Some(domain) => domain,
                None => client.config().credentials.load_gateway()?,
            };
            print_json(&client.swap_history(&cid, &domain)?)
        }
        SwapsCommand::Add { cid, swap_cid } => print_json(&client.add_swap(&cid, &swap_cid)?),
        SwapsCommand::Delete { cid } => {
            client.remove_swap(&cid)?;
            println!("Swap Deleted");
            Ok(())
        }
    }
}

/// List the account's gateways and store the one the user picks.
fn choose_gateway(client: &ApiClient) -> Result<()> {
    let spinner = ui::spinner("Fetching gateways...")?;
    let domains = client.list_gateway_domains();
    spinner.finish_and_clear();

    let domain = ui::select_gateway(&domains?)?;
    client.config().credentials.save_gateway(&domain)?;
    println!("Gateway Saved!");
    Ok(())
}

fn signed_url(client: &ApiClient, cid: &str, expires: u64) -> Result<String> {
    let gateway = client.config().credentials.load_gateway()?;
    Ok(client.sign_url(&gateway, cid, expires)?)
}

fn parse_expiry(value: &str) -> Result<u64, Error> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Input(format!("Invalid expire time '{}'", value)))
}

fn open_in_browser(url: &str) -> Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    };
    let status = cmd.arg(url).status().context("failed to launch a browser")?;
    if !status.success() {
        anyhow::bail!("browser launcher exited with {}", status);
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", to_pretty_json(value)?);
    Ok(())
}
