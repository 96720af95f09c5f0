//! Todo bot binary.
//!
//! Start the bot with:
//! ```bash
//! TELEGRAM_BOT_TOKEN=xxx cargo run -p todo-bot
//! ```
//!
//! Or try it locally:
//! ```bash
//! cargo run -p todo-bot -- --shell
//! ```

use clap::Parser;
use todo_bot::config::{self, BotConfig, DEFAULT_TODO_DIR, TODO_DIR_ENV};
use todo_bot::{Shell, TodoBot};
use tracing_subscriber::EnvFilter;

/// Todo bot - keep a todo list from chat
#[derive(Parser, Debug)]
#[command(name = "todo-bot")]
#[command(about = "Chat bot that keeps a todo list, one file per item")]
struct Args {
    /// Run an interactive local shell instead of connecting to Telegram
    #[arg(short, long)]
    shell: bool,

    /// Directory holding the todo files
    #[arg(short, long, env = TODO_DIR_ENV, default_value = DEFAULT_TODO_DIR)]
    dir: String,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env files before clap reads env-backed arguments
    config::load_env_files();

    let args = Args::parse();

    let filter = match args.verbose {
        0 => "todo_bot=info,todo_persistence=info,teloxide=warn",
        1 => "todo_bot=debug,todo_persistence=debug,teloxide=info",
        2 => "todo_bot=trace,todo_persistence=trace,teloxide=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(filter))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = BotConfig::new(&args.dir);
    tracing::debug!(dir = %config.storage_dir.display(), "Configuration loaded");

    if args.shell {
        let mut shell = Shell::new(&config)?;
        shell.run()?;
        return Ok(());
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let bot = TodoBot::new(&config)?;

        match bot.get_me().await {
            Ok(username) => {
                tracing::info!(username = %username, "Bot initialized successfully");
                println!("\nTodo Bot");
                println!("   Bot: @{}", username);
                println!("   Storage: {}", config.storage_dir.display());
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to get bot info");
                return Err(e);
            }
        }

        println!("\nOpen Telegram and say \"show my todo list\"");
        println!("   Press Ctrl+C to stop\n");

        bot.start_polling().await
    })?;

    Ok(())
}
