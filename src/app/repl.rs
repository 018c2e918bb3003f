use anyhow::{Context, Result};
use sdherbs::admin::GuardView;
use sdherbs::chat::{ChatWidget, InputOrigin, SUGGESTIONS, TurnOutcome};
use sdherbs::ui::style as ui;
use sdherbs::{Page, Site};
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "/clear  /mute  /theme  /suggest [N]  /quit";

/// Interactive chat loop, or a single turn when `message` is given.
pub async fn run(site: &Site, message: Option<String>, voice: bool) -> Result<()> {
    let origin = if voice {
        InputOrigin::Voice
    } else {
        InputOrigin::Typed
    };
    let mut widget = site.chat_widget();

    if let Some(greeting) = widget.open() {
        println!("{}", ui::message(greeting));
    }

    if let Some(message) = message {
        turn(site, &mut widget, &message, origin).await;
        return Ok(());
    }

    println!("{}", ui::dim(HELP));
    print_suggestions();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read from stdin")?
    {
        let line = line.trim();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
        match command {
            "/quit" | "/exit" => break,
            "/clear" => {
                if let Some(greeting) = widget.clear() {
                    println!("{}", ui::message(greeting));
                }
            }
            "/mute" => {
                let muted = widget.toggle_mute();
                println!("{}", ui::dim(if muted { "🔇 muted" } else { "🔊 unmuted" }));
            }
            "/theme" => println!("{}", ui::theme_badge(widget.toggle_theme())),
            "/suggest" => match suggestion(arg) {
                Some(text) => turn(site, &mut widget, text, InputOrigin::Typed).await,
                None => print_suggestions(),
            },
            _ => turn(site, &mut widget, line, origin).await,
        }
    }

    Ok(())
}

fn suggestion(arg: &str) -> Option<&'static str> {
    let index: usize = arg.trim().parse().ok()?;
    SUGGESTIONS.get(index.checked_sub(1)?).map(|s| s.text)
}

fn print_suggestions() {
    for (i, chip) in SUGGESTIONS.iter().enumerate() {
        println!("  {} {}", ui::accent(i + 1), chip.label);
    }
}

async fn turn(site: &Site, widget: &mut ChatWidget, text: &str, origin: InputOrigin) {
    let Some(outcome) = widget.send(text, origin).await else {
        return;
    };
    print_outcome(site, &outcome);

    if outcome.navigated_to.is_some() {
        let requested = site.router().current();
        if requested.is_protected() {
            println!("{}", ui::dim("Checking session…"));
        }
        let page = site.render_current().await;
        println!("{}", describe_page(&page, &site.router().current_path()));
    }
}

fn print_outcome(site: &Site, outcome: &TurnOutcome) {
    let line = ui::message(&outcome.reply);
    if outcome.offline {
        println!("{}", ui::yellow(line));
    } else {
        println!("{line}");
    }
    if outcome.theme_changed {
        println!("  {}", ui::theme_badge(site.theme().current()));
    }
    if let Some(path) = &outcome.audio {
        println!("  {} {}", ui::dim("🔊"), ui::dim(path.display()));
    }
}

/// One line describing where a navigation landed.
pub fn describe_page(page: &Page, current_path: &str) -> String {
    match &page.view {
        GuardView::Content => format!("→ {} {}", page.requested, ui::value(current_path)),
        GuardView::Redirect(login) => format!(
            "→ {} needs an admin session; redirected to {}",
            page.requested,
            ui::value(login)
        ),
        GuardView::Loading => format!("→ {} {}", page.requested, ui::dim("Checking session…")),
    }
}
