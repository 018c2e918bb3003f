use crate::{AdminCommands, Cli, Commands};
use anyhow::{Context, Result, bail};
use dialoguer::{Input, Password};
use sdherbs::chat::{ParsedDirective, parse_reply};
use sdherbs::ui::style as ui;
use sdherbs::{Config, Site};
use std::io::IsTerminal;
use tracing::info;

use crate::app::repl::{self, describe_page};
use crate::app::status::render_status;

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        // Pure text in, text out; no backend needed.
        Commands::Parse { reply, json } => print_parsed(&reply, json),

        Commands::Status => {
            let site = Site::new(config)?;
            println!("{}", render_status(site.config(), site.client().has_token()));
            Ok(())
        }

        Commands::Chat { message, voice } => {
            let site = Site::new(config)?;
            repl::run(&site, message, voice).await
        }

        Commands::Admin { admin_command } => {
            let mut site = Site::new(config)?;
            match admin_command {
                AdminCommands::Login { email } => login(&mut site, email).await,
                AdminCommands::Logout => {
                    site.admin_auth().logout(site.router().as_ref()).await?;
                    println!("{} logged out", ui::success("✓"));
                    Ok(())
                }
                AdminCommands::Open { path } => {
                    let path = path.unwrap_or_else(|| site.config().admin.landing_path.clone());
                    println!("{}", ui::dim("Checking session…"));
                    let page = site.visit(&path).await;
                    println!("{}", describe_page(&page, &site.router().current_path()));
                    Ok(())
                }
            }
        }
    }
}

fn print_parsed(reply: &str, json: bool) -> Result<()> {
    let parsed = parse_reply(reply);
    if json {
        let out = serde_json::to_string_pretty(&parsed).context("Failed to encode parsed reply")?;
        println!("{out}");
        return Ok(());
    }

    println!("{}", parsed.display_text);
    for directive in &parsed.directives {
        match directive {
            ParsedDirective::Navigate { target_path } => {
                println!("  {} navigate {}", ui::accent("→"), ui::value(target_path));
            }
            ParsedDirective::UiAction { action_name } => {
                println!("  {} action {}", ui::accent("→"), ui::value(action_name));
            }
        }
    }
    Ok(())
}

async fn login(site: &mut Site, email: Option<String>) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        bail!("admin login needs a terminal to prompt for the password");
    }

    let email = match email {
        Some(email) => email,
        None => Input::<String>::new()
            .with_prompt("Admin email")
            .interact_text()
            .context("Failed to read email from terminal")?,
    };
    let password = Password::new()
        .with_prompt("Password (input hidden)")
        .allow_empty_password(false)
        .interact()
        .context("Failed to read password from terminal")?;

    let router = site.router();
    let landing = site
        .admin_auth()
        .login(email.trim(), &password, router.as_ref())
        .await?;
    info!(%landing, "admin session stored");
    println!("{} logged in", ui::success("✓"));

    site.refresh_session();
    let page = site.render_current().await;
    println!("{}", describe_page(&page, &site.router().current_path()));
    Ok(())
}
