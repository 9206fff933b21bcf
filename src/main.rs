use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use rewindcli::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the listening timeline for this day across years
    Timeline(TimelineOptions),

    /// Select or show the current Last.fm user
    User(UserOptions),

    /// Manage recently looked-up usernames
    Recent(RecentOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TimelineOptions {
    /// Anchor day for the timeline (YYYY-MM-DD, defaults to today)
    #[clap(long)]
    pub date: Option<String>,

    /// Username to build the timeline for (defaults to the stored user)
    #[clap(long)]
    pub user: Option<String>,

    /// Refetch even if a timeline was already fetched today
    #[clap(long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct UserOptions {
    /// Username to look up and store; omit to show the stored user
    pub username: Option<String>,
}

#[derive(Parser, Debug, Clone)]
#[command(args_conflicts_with_subcommands = true)]
pub struct RecentOptions {
    /// Remove a single username from the list
    #[clap(long)]
    pub remove: Option<String>,

    /// Clear the whole list
    #[clap(long)]
    pub clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Completions must work before any configuration exists
    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    match cli.command {
        Command::Timeline(opt) => cli::timeline(opt.date, opt.user, opt.force).await,
        Command::User(opt) => cli::user(opt.username).await,
        Command::Recent(opt) => cli::recent(opt.remove, opt.clear).await,
        Command::Completions(_) => unreachable!(),
    }
}
