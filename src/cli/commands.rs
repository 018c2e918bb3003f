use clap::{Parser, Subcommand};

/// `sdherbs` - SD Herbs storefront client: chat assistant and admin console.
#[derive(Parser, Debug)]
#[command(name = "sdherbs")]
#[command(version)]
#[command(about = "Chat with the SD Herbs assistant and manage the admin session.", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Talk to the SD Herbs assistant
    Chat {
        /// Single message mode (don't enter interactive mode)
        #[arg(short, long)]
        message: Option<String>,

        /// Treat input as spoken: replies are read aloud
        #[arg(long)]
        voice: bool,
    },

    /// Split a raw chatbot reply into display text and directives
    Parse {
        /// Reply text as the chat backend would send it
        reply: String,

        /// Print the parsed reply as JSON
        #[arg(long)]
        json: bool,
    },

    /// Admin session and guarded admin pages
    Admin {
        #[command(subcommand)]
        admin_command: AdminCommands,
    },

    /// Show the active configuration
    Status,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Log in (password is prompted)
    Login {
        #[arg(long)]
        email: Option<String>,
    },

    /// Log out and forget the stored session
    Logout,

    /// Open an admin page through the session guard
    Open {
        /// Admin route, defaults to the landing page
        path: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::{AdminCommands, Cli, Commands};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_has_no_flag_conflicts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["sdherbs", "admin", "open", "/admin/gallery", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Admin {
                admin_command: AdminCommands::Open { path: Some(ref p) }
            } if p == "/admin/gallery"
        ));
    }

    #[test]
    fn chat_flags() {
        let cli = Cli::try_parse_from(["sdherbs", "chat", "-m", "hi", "--voice"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Chat { message: Some(_), voice: true }
        ));
    }
}
