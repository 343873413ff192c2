use std::error::Error;
use std::path::Path;

use tracing::info;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::storage::{FileStorage, StorageError};
use crate::ops::session::Session;
use crate::tui::view_model::remaining_label;

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

/// Open the file-backed session in `data_dir`
pub fn open_session(data_dir: &Path) -> Result<Session, StorageError> {
    let storage = FileStorage::open_dir(data_dir)?;
    info!(path = %storage.path().display(), "using storage");
    Ok(Session::open(Box::new(storage)))
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(command: Commands, json: bool, session: &mut Session) -> Result<(), Box<dyn Error>> {
    match command {
        // Read commands
        Commands::List(args) => cmd_list(args, json, session),
        Commands::Stats => cmd_stats(json, session),

        // Write commands
        Commands::Add(args) => cmd_add(args, json, session),
        Commands::Toggle(args) => cmd_toggle(args, json, session),
        Commands::Delete(args) => cmd_delete(args, json, session),
        Commands::ClearCompleted => cmd_clear_completed(json, session),
        Commands::Theme(args) => cmd_theme(args, json, session),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(args: ListArgs, json: bool, session: &mut Session) -> Result<(), Box<dyn Error>> {
    session.set_filter(args.filter);
    let store = session.store();
    if json {
        print_json(&TodoListJson {
            filter: store.filter(),
            todos: store.filtered(),
            remaining: store.remaining(),
        })
    } else {
        print!("{}", format_list(store));
        Ok(())
    }
}

fn cmd_stats(json: bool, session: &Session) -> Result<(), Box<dyn Error>> {
    let stats = StatsJson::from_store(session.store());
    if json {
        return print_json(&stats);
    }
    println!("{}", remaining_label(stats.remaining));
    println!("{} total, {} completed", stats.total, stats.completed);
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, json: bool, session: &mut Session) -> Result<(), Box<dyn Error>> {
    let text = args.text.join(" ");
    let id = session.add(&text)?;
    if json {
        return print_json(&AddedJson { id });
    }
    // Blank text is ignored silently
    if let Some(id) = id {
        println!("{}", id);
    }
    Ok(())
}

fn cmd_toggle(args: IdArgs, json: bool, session: &mut Session) -> Result<(), Box<dyn Error>> {
    let found = session.toggle(args.id)?;
    let completed = session.store().get(args.id).map(|t| t.completed);
    if json {
        return print_json(&ChangedJson {
            id: args.id,
            found,
            completed,
        });
    }
    if let Some(todo) = session.store().get(args.id) {
        println!("{}", format_todo_line(todo));
    }
    Ok(())
}

fn cmd_delete(args: IdArgs, json: bool, session: &mut Session) -> Result<(), Box<dyn Error>> {
    let found = session.delete(args.id)?;
    if json {
        return print_json(&ChangedJson {
            id: args.id,
            found,
            completed: None,
        });
    }
    Ok(())
}

fn cmd_clear_completed(json: bool, session: &mut Session) -> Result<(), Box<dyn Error>> {
    let removed = session.clear_completed()?;
    if json {
        return print_json(&ClearedJson { removed });
    }
    println!("removed {}", removed);
    Ok(())
}

fn cmd_theme(args: ThemeArgs, json: bool, session: &mut Session) -> Result<(), Box<dyn Error>> {
    let theme = match (args.theme, args.toggle) {
        (Some(theme), _) => session.set_theme(theme)?,
        (None, true) => session.toggle_theme()?,
        (None, false) => session.theme(),
    };
    if json {
        return print_json(&ThemeJson { theme });
    }
    println!("{}", theme);
    Ok(())
}
