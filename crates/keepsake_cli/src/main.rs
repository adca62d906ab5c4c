//! Command-line host for the keepsake widget engine.
//!
//! # Responsibility
//! - Run one widget use-case per invocation against the local store.
//! - Interpret the returned render effects as terminal output.

use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use directories::ProjectDirs;
use keepsake_core::db::open_db_or_in_memory;
use keepsake_core::{
    default_log_level, init_logging, AchievementService, CheckinService, GuestbookService,
    MemoryService, MemoryUpload, RenderEffect, SettingToggle, SettingsService,
    SqliteKvRepository, WidgetStore,
};
use std::error::Error;
use std::path::PathBuf;

/// Keepsake - local widget engine for a personal commemorative site.
#[derive(Parser)]
#[command(name = "keepsake")]
#[command(version)]
#[command(about = "Daily check-in, achievements, guestbook, memories and settings")]
struct Cli {
    /// Store database file (defaults to the platform data directory).
    #[arg(long)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Perform today's check-in
    Checkin,
    /// Show check-in progress without checking in
    Status,
    /// Show the achievement list
    Achievements,
    /// Guestbook operations
    Guestbook {
        #[command(subcommand)]
        command: GuestbookCommand,
    },
    /// Memory gallery operations
    Memory {
        #[command(subcommand)]
        command: MemoryCommand,
    },
    /// Settings operations
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
    /// Toggle winter mode (footer-button path, unlocks the achievement)
    Winter,
}

#[derive(Subcommand)]
enum GuestbookCommand {
    /// Append a signed message
    Add { name: String, message: String },
    /// List all messages in insertion order
    List,
}

#[derive(Subcommand)]
enum MemoryCommand {
    /// Add media files to the gallery as one batch
    Add { files: Vec<PathBuf> },
    /// List gallery items in insertion order
    List,
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Show current settings
    Show,
    /// Change one toggle
    Set {
        key: SettingKey,
        value: OnOff,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SettingKey {
    Winter,
    AutoMusic,
    Cursor,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OnOff {
    On,
    Off,
}

impl OnOff {
    fn as_bool(self) -> bool {
        matches!(self, Self::On)
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir();
    if let Some(log_dir) = data_dir.as_ref().map(|dir| dir.join("logs")) {
        if let Some(log_dir) = log_dir.to_str() {
            // Logging is best-effort here; the widgets work without it.
            if let Err(err) = init_logging(default_log_level(), log_dir) {
                eprintln!("warning: logging disabled: {err}");
            }
        }
    }

    let db_path = cli.db.clone().unwrap_or_else(|| {
        data_dir
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keepsake.sqlite3")
    });
    if let Some(parent) = db_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let conn = open_db_or_in_memory(&db_path)?;
    let store = || WidgetStore::new(SqliteKvRepository::new(&conn));

    match cli.command {
        Commands::Checkin => {
            let report = CheckinService::new(store()).check_in(Local::now().date_naive())?;
            print_effects(&report.effects);
        }
        Commands::Status => {
            print_effects(&CheckinService::new(store()).status());
        }
        Commands::Achievements => {
            print_effects(&[AchievementService::new(store()).render_list()]);
        }
        Commands::Guestbook { command } => match command {
            GuestbookCommand::Add { name, message } => {
                let report = GuestbookService::new(store()).add_entry(&name, &message)?;
                print_effects(&report.effects);
            }
            GuestbookCommand::List => {
                print_effects(&[GuestbookService::new(store()).render_list()]);
            }
        },
        Commands::Memory { command } => match command {
            MemoryCommand::Add { files } => {
                let uploads = read_uploads(&files)?;
                let report = MemoryService::new(store()).import(&uploads)?;
                println!("added {} item(s)", report.added);
                print_effects(&report.effects);
            }
            MemoryCommand::List => {
                print_effects(&[MemoryService::new(store()).render_gallery()]);
            }
        },
        Commands::Settings { command } => match command {
            SettingsCommand::Show => {
                print_effects(&SettingsService::new(store()).apply_on_load());
            }
            SettingsCommand::Set { key, value } => {
                let service = SettingsService::new(store());
                let effects = match key {
                    SettingKey::Winter => service.set_winter_mode(value.as_bool())?,
                    SettingKey::AutoMusic => service.set_auto_music(value.as_bool())?,
                    SettingKey::Cursor => service.set_show_cursor(value.as_bool())?,
                };
                print_effects(&effects);
            }
        },
        Commands::Winter => {
            let report = SettingsService::new(store()).toggle_winter_button()?;
            println!(
                "winter mode {}",
                if report.enabled { "enabled" } else { "disabled" }
            );
            print_effects(&report.effects);
        }
    }

    Ok(())
}

fn resolve_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "keepsake").map(|dirs| dirs.data_dir().to_path_buf())
}

fn read_uploads(files: &[PathBuf]) -> Result<Vec<MemoryUpload>, Box<dyn Error>> {
    let mut uploads = Vec::with_capacity(files.len());
    for path in files {
        let bytes = std::fs::read(path)
            .map_err(|err| format!("cannot read {}: {err}", path.display()))?;
        let mime = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| keepsake_core::mime_from_extension(&ext.to_ascii_lowercase()))
            .unwrap_or("application/octet-stream");
        uploads.push(MemoryUpload {
            mime: mime.to_string(),
            bytes,
        });
    }
    Ok(uploads)
}

fn print_effects(effects: &[RenderEffect]) {
    for effect in effects {
        match effect {
            RenderEffect::CheckinMessage(message) => println!("{message}"),
            RenderEffect::CheckinProgress { completed, goal } => {
                println!("You have completed {completed}/{goal} days.");
            }
            RenderEffect::AchievementList(views) => {
                println!("Achievements:");
                for view in views {
                    let mark = if view.unlocked { "x" } else { " " };
                    println!("  [{mark}] {} - {}", view.name, view.description);
                }
            }
            RenderEffect::GuestbookList(entries) => {
                if entries.is_empty() {
                    println!("The guestbook is empty.");
                }
                for (index, entry) in entries.iter().enumerate() {
                    println!("{:>3}. {}: {}", index + 1, entry.name, entry.message);
                }
            }
            RenderEffect::MemoryGallery(items) => {
                if items.is_empty() {
                    println!("The gallery is empty.");
                }
                for (index, item) in items.iter().enumerate() {
                    println!(
                        "{:>3}. {} ({} chars encoded)",
                        index + 1,
                        item.kind.as_str(),
                        item.data.len()
                    );
                }
            }
            RenderEffect::WinterModeClass(enabled) => {
                println!("winter theme: {}", on_off(*enabled));
            }
            RenderEffect::ToggleControl { control, value } => {
                let label = match control {
                    SettingToggle::WinterMode => "winter-mode",
                    SettingToggle::AutoMusic => "auto-music",
                    SettingToggle::ShowCursor => "show-cursor",
                };
                println!("toggle {label}: {}", on_off(*value));
            }
            RenderEffect::CursorVisible(visible) => {
                println!("custom cursor: {}", on_off(*visible));
            }
            RenderEffect::MusicAutoplay(playing) => {
                if !playing {
                    println!("background music paused");
                }
            }
        }
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
