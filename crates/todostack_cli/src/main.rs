//! Command-line front end for the TodoStack core.
//!
//! # Responsibility
//! - Map one subcommand to each operation of the core contract.
//! - Convert between human-readable dates and the core's epoch-millisecond
//!   timestamps.
//!
//! Mutating commands print the success destination path on their last line.

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use todostack_core::db::open_db;
use todostack_core::{
    default_log_level, init_logging, ItemChanges, ItemService, ListService, NewItem,
    SqliteItemRepository, SqliteListRepository, TodoItem,
};
use uuid::Uuid;

const DB_ENV_VAR: &str = "TODOSTACK_DB";
const DB_FILE_NAME: &str = "todostack.sqlite3";

#[derive(Parser)]
#[command(name = "todostack", version, about = "Minimal multi-list to-do manager")]
struct Cli {
    /// Database file (default: $TODOSTACK_DB, else ~/.todostack/todostack.sqlite3).
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Absolute directory for rolling log files; logging stays off when unset.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every list.
    Lists,
    /// Show one list and its items, soonest deadline first.
    Show { list: Uuid },
    /// Create a new list.
    AddList { title: String },
    /// Delete a list and every item it owns.
    RmList { list: Uuid },
    /// Add an item to a list.
    AddItem {
        list: Uuid,
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Due date as YYYY-MM-DD or YYYY-MM-DDTHH:MM; defaults to one week
        /// from now.
        #[arg(long)]
        due: Option<String>,
    },
    /// Edit an item; omitted flags keep their stored values.
    EditItem {
        item: Uuid,
        /// Move the item to another list.
        #[arg(long)]
        list: Option<Uuid>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        due: Option<String>,
    },
    /// Delete one item.
    RmItem { item: Uuid },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        init_logging(default_log_level(), &log_dir.to_string_lossy())?;
    }

    let conn = open_db(db_path(cli.db)?)?;
    let lists = ListService::new(
        SqliteListRepository::try_new(&conn)?,
        SqliteItemRepository::try_new(&conn)?,
    );
    let items = ItemService::new(
        SqliteListRepository::try_new(&conn)?,
        SqliteItemRepository::try_new(&conn)?,
    );

    match cli.command {
        Command::Lists => {
            for list in lists.overview()? {
                println!("{}  {}", list.uuid, list.title);
            }
        }
        Command::Show { list } => {
            let detail = lists.list_detail(list)?;
            println!("{}", detail.list.title);
            for item in &detail.items {
                println!("  {}  {}", item.uuid, render_item(item));
            }
        }
        Command::AddList { title } => {
            let (list, destination) = lists.create_list(&title)?;
            println!("created list {}  {}", list.uuid, list.title);
            println!("-> {destination}");
        }
        Command::RmList { list } => {
            let destination = lists.delete_list(list)?;
            println!("deleted list {list}");
            println!("-> {destination}");
        }
        Command::AddItem {
            list,
            title,
            description,
            due,
        } => {
            let due_at = due.as_deref().map(parse_due).transpose()?;
            let (item, destination) = items.create_item(
                list,
                NewItem {
                    title,
                    description,
                    due_at,
                },
            )?;
            println!("created item {}  {}", item.uuid, render_item(&item));
            println!("-> {destination}");
        }
        Command::EditItem {
            item,
            list,
            title,
            description,
            due,
        } => {
            let existing = items.get_item(item)?;
            let due_at = match due.as_deref() {
                Some(raw) => parse_due(raw)?,
                None => existing.due_at,
            };
            let changes = ItemChanges {
                list_uuid: list.unwrap_or(existing.list_uuid),
                title: title.unwrap_or(existing.title),
                description: description.or(existing.description),
                due_at,
            };
            let (updated, destination) = items.update_item(item, changes)?;
            println!("updated item {}  {}", updated.uuid, render_item(&updated));
            println!("-> {destination}");
        }
        Command::RmItem { item } => {
            let destination = items.delete_item(item)?;
            println!("deleted item {item}");
            println!("-> {destination}");
        }
    }

    Ok(())
}

fn db_path(flag: Option<PathBuf>) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DB_ENV_VAR) {
        return Ok(path.into());
    }

    let home: PathBuf = std::env::var_os("HOME")
        .ok_or("could not determine home directory; pass --db")?
        .into();
    let dir = home.join(".todostack");
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join(DB_FILE_NAME))
}

fn parse_due(raw: &str) -> Result<i64, String> {
    let naive = if let Ok(at) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        at
    } else if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        date.and_hms_opt(0, 0, 0)
            .ok_or_else(|| format!("invalid due date `{raw}`"))?
    } else {
        return Err(format!(
            "invalid due date `{raw}`; expected YYYY-MM-DD or YYYY-MM-DDTHH:MM"
        ));
    };
    Ok(naive.and_utc().timestamp_millis())
}

fn render_item(item: &TodoItem) -> String {
    let mut line = format!("{}: due {}", item.title, render_due(item.due_at));
    if let Some(description) = &item.description {
        line.push_str(&format!(" ({description})"));
    }
    line
}

fn render_due(epoch_ms: i64) -> String {
    match Utc.timestamp_millis_opt(epoch_ms).single() {
        Some(moment) => moment.format("%Y-%m-%d %H:%M").to_string(),
        None => format!("{epoch_ms}ms"),
    }
}
