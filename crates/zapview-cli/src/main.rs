//! zapview CLI: terminal viewer for WhatsApp-style conversations

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zapview_api::{ApiClient, DEFAULT_BASE_URL};
use zapview_tui::format::{direction_label, short_id, state_label, timestamp_label};

/// Conversation viewer with TUI and headless commands
#[derive(Parser)]
#[command(name = "zapview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// List conversations and exit
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one conversation with its messages and exit
    Show {
        /// Conversation id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Tui) => {
            // Default: open TUI
            let rt = runtime();
            if let Err(e) = rt.block_on(zapview_tui::run_tui(&cli.base_url)) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::List { json }) => {
            init_tracing();
            cmd_list(&cli.base_url, json);
        }
        Some(Commands::Show { id, json }) => {
            init_tracing();
            cmd_show(&cli.base_url, &id, json);
        }
    }
}

/// Headless commands log to stderr, filtered by `RUST_LOG`.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn runtime() -> tokio::runtime::Runtime {
    match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_list(base_url: &str, json: bool) {
    let rt = runtime();
    let client = ApiClient::new(base_url);

    let conversations = match rt.block_on(client.list_conversations()) {
        Ok(conversations) => conversations,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if json {
        print_json(&conversations);
        return;
    }

    if conversations.is_empty() {
        println!("Nenhuma conversa");
        return;
    }

    for conversation in &conversations {
        println!(
            "{}  {}",
            short_id(&conversation.id),
            state_label(conversation.state)
        );
    }
}

fn cmd_show(base_url: &str, id: &str, json: bool) {
    let rt = runtime();
    let client = ApiClient::new(base_url);

    let conversation = match rt.block_on(client.conversation_detail(id)) {
        Ok(conversation) => conversation,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if json {
        print_json(&conversation);
        return;
    }

    println!(
        "{}  {}",
        conversation.id,
        state_label(conversation.state)
    );
    println!();

    for message in &conversation.messages {
        println!(
            "[{}] {}",
            direction_label(message.direction),
            message.content
        );
        println!("    {}", timestamp_label(&message.timestamp));
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
