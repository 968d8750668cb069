//! Daybook CLI
//!
//! Command-line access to the dashboard state:
//! - Show the dashboard
//! - Manage todos, notes, profile and theme
//! - Quote, weather, clock and search widgets
//! - Generate a config file

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use daybook::clock::{spawn_ticker, ClockReading};
use daybook::config::{Config, LoggingConfig};
use daybook::dashboard::Dashboard;
use daybook::notify::Notifier;
use daybook::render::{DashboardView, EMPTY_TODOS_MESSAGE};
use daybook::state::TodoItem;
use daybook::store::FileStore;
use daybook::weather::WeatherService;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::time::Duration;

#[derive(Parser)]
#[command(name = "daybook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal dashboard: clock, weather, quotes, todos and notes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/daybook/config.toml or ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory, overrides the config file
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", global = true)]
    pub format: String,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the whole dashboard
    Show,

    /// Manage todos
    Todo {
        #[command(subcommand)]
        action: TodoCommand,
    },

    /// Read or write notes
    Notes {
        #[command(subcommand)]
        action: NotesCommand,
    },

    /// Read or write the user profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Read or switch the theme
    Theme {
        #[command(subcommand)]
        action: ThemeCommand,
    },

    /// Print a random quote
    Quote,

    /// Fetch current weather
    Weather,

    /// Print time, date and greeting
    Clock {
        /// Keep printing every second until Ctrl+C
        #[arg(short, long)]
        watch: bool,
    },

    /// Print the search URL for a query
    Search {
        /// Query words
        query: Vec<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum TodoCommand {
    /// Add a todo
    Add {
        /// Todo text
        text: Vec<String>,
    },
    /// Flip a todo's completion
    Toggle { id: i64 },
    /// Delete a todo
    Rm { id: i64 },
    /// List todos
    List,
}

#[derive(Subcommand)]
pub enum NotesCommand {
    /// Print notes
    Show,
    /// Replace notes silently
    Set { text: String },
    /// Replace notes and announce it
    Save { text: String },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Print the profile
    Show,
    /// Save name and location
    Set {
        name: String,
        #[arg(short, long, default_value = "")]
        location: String,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    /// Print the theme
    Show,
    /// Switch light/dark
    Toggle,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = dir.to_string_lossy().to_string();
    }

    daybook::logging::init(&LoggingConfig {
        level: if cli.verbose { "debug" } else { "warn" }.to_string(),
        format: config.logging.format.clone(),
    });

    if let Commands::Config { output } = &cli.command {
        let content = daybook::config::generate_default_config();
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &content)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let data_dir = config.storage.data_path();
    let store = Arc::new(
        FileStore::open(&data_dir)
            .with_context(|| format!("Cannot open data directory {:?}", data_dir))?,
    );
    let mut dashboard = Dashboard::new(
        store,
        WeatherService::from_config(&config.weather),
        Notifier::new((&config.notifications).into()),
    );
    let json = cli.format == "json";

    match cli.command {
        Commands::Show => {
            dashboard.refresh_weather().await;
            let view = dashboard.view();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_view(&view, dashboard.todos());
            }
        }

        Commands::Todo { action } => match action {
            TodoCommand::Add { text } => match dashboard.add_todo(&text.join(" ")) {
                Some(item) if json => println!("{}", serde_json::to_string_pretty(&item)?),
                Some(item) => println!("Added [{}] {}", item.id, item.text),
                None => {
                    eprintln!("Nothing to add: todo text is empty");
                    std::process::exit(1);
                }
            },
            TodoCommand::Toggle { id } => match dashboard.toggle_todo(id) {
                Some(true) => println!("Completed [{}]", id),
                Some(false) => println!("Reopened [{}]", id),
                None => {
                    eprintln!("No todo with id {}", id);
                    std::process::exit(1);
                }
            },
            TodoCommand::Rm { id } => {
                if !dashboard.delete_todo(id) {
                    eprintln!("No todo with id {}", id);
                    std::process::exit(1);
                }
            }
            TodoCommand::List => {
                if json {
                    println!("{}", serde_json::to_string_pretty(dashboard.todos())?);
                } else {
                    print_todos(dashboard.todos());
                }
            }
        },

        Commands::Notes { action } => match action {
            NotesCommand::Show => println!("{}", dashboard.notes()),
            NotesCommand::Set { text } => dashboard.notes_input(text),
            NotesCommand::Save { text } => dashboard.save_notes(text),
        },

        Commands::Profile { action } => match action {
            ProfileCommand::Show => {
                let profile = dashboard.profile();
                if json {
                    println!("{}", serde_json::to_string_pretty(profile)?);
                } else if profile.is_set() {
                    println!("Name:     {}", profile.name);
                    println!("Location: {}", profile.location.as_deref().unwrap_or("-"));
                } else {
                    println!("No profile saved yet.");
                    println!();
                    println!("Save one with:");
                    println!("  daybook-cli profile set <name> --location <place>");
                }
            }
            ProfileCommand::Set { name, location } => {
                if dashboard.save_profile(&name, &location).is_none() {
                    eprintln!("Name cannot be empty");
                    std::process::exit(1);
                }
            }
        },

        Commands::Theme { action } => {
            if let ThemeCommand::Toggle = action {
                dashboard.toggle_theme();
            }
            println!("{}", dashboard.theme());
        }

        Commands::Quote => {
            let quote = dashboard.refresh_quote();
            println!("{}", quote.quoted_text());
            println!("{}", quote.attribution());
        }

        Commands::Weather => {
            let reading = dashboard.refresh_weather().await;
            if json {
                println!("{}", serde_json::to_string_pretty(reading)?);
            } else {
                println!(
                    "{} {}, {}",
                    reading.temperature_label(),
                    reading.description,
                    reading.location_name
                );
            }
        }

        Commands::Clock { watch } => {
            if watch {
                let ticker = spawn_ticker(Duration::from_secs(1), |reading| async move {
                    print_clock(&reading);
                });
                tokio::signal::ctrl_c().await?;
                ticker.abort();
            } else {
                print_clock(&ClockReading::now());
            }
        }

        Commands::Search { query } => match dashboard.perform_search(&query.join(" ")) {
            Some(url) => println!("{}", url),
            None => {
                eprintln!("Nothing to search for");
                std::process::exit(1);
            }
        },

        Commands::Config { .. } => {}
    }

    for notification in dashboard.notifier().active(Utc::now()) {
        println!("{}", notification.message);
    }

    dashboard.shutdown();
    Ok(())
}

fn print_view(view: &DashboardView, todos: &[TodoItem]) {
    let greeting = match &view.header.user_name {
        Some(name) => format!("{}, {}!", view.header.greeting, name),
        None => format!("{}!", view.header.greeting),
    };
    println!("{}", greeting);
    print_clock(&view.clock);
    println!();
    println!(
        "Weather: {} {}, {}",
        view.weather.temperature, view.weather.description, view.weather.location
    );
    println!();
    println!("{}", view.quote.text);
    println!("  {}", view.quote.author);
    println!();
    println!(
        "Todos ({}/{} done):",
        view.todo_summary.completed, view.todo_summary.total
    );
    print_todos(todos);

    if !view.notes.is_empty() {
        println!();
        println!("Notes:");
        for line in view.notes.lines() {
            println!("  {}", line);
        }
    }
}

fn print_clock(reading: &ClockReading) {
    println!("{}  {}", reading.time, reading.date);
}

fn print_todos(todos: &[TodoItem]) {
    if todos.is_empty() {
        println!("  {}", EMPTY_TODOS_MESSAGE);
        return;
    }

    for item in todos {
        let mark = if item.completed { "x" } else { " " };
        println!("  [{}] {:<15} {}", mark, item.id, item.text);
    }
}
