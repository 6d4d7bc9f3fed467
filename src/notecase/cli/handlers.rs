use super::args::Commands;
use super::render::{print_full_note, print_labels, print_messages, print_notes, print_paths};
use notecase::api::{NotecaseApi, NoteUpdate};
use notecase::backup::DirectorySink;
use notecase::config::Settings;
use notecase::error::{NotecaseError, Result};
use notecase::location::{platform_default_dir, StorageLocator};
use notecase::model::parse_labels;
use notecase::store::fs::FileNotesStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

type Api = NotecaseApi<FileNotesStore<StorageLocator<Settings>>, Settings>;

struct AppContext {
    api: Api,
}

pub fn dispatch(command: Option<Commands>) -> Result<()> {
    let mut ctx = init_context()?;

    match command {
        Some(Commands::List { label }) => handle_list(&ctx, label),
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Add {
            content,
            title,
            labels,
        }) => handle_add(&mut ctx, title, content, labels),
        Some(Commands::Edit {
            id,
            title,
            content,
            labels,
        }) => handle_edit(&mut ctx, &id, title, content, labels),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, &id),
        Some(Commands::Labels) => handle_labels(&ctx),
        Some(Commands::Export { out }) => handle_export(&ctx, &out),
        Some(Commands::Backup { to, out, password }) => handle_backup(&ctx, &to, out, &password),
        Some(Commands::Restore { file, password }) => {
            handle_restore(&ctx, &file, password.as_deref())
        }
        Some(Commands::Location { path, clear }) => handle_location(&ctx, path, clear),
        None => handle_list(&ctx, None),
    }
}

/// Settings from `NOTECASE_CONFIG_DIR`, notes under `NOTECASE_DATA_DIR` unless overridden.
fn init_context() -> Result<AppContext> {
    let config_dir = match std::env::var_os("NOTECASE_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "notecase", "notecase")
            .map(|d| d.config_dir().to_path_buf())
            .ok_or_else(|| NotecaseError::Api("Could not determine config dir".into()))?,
    };
    let default_dir = match std::env::var_os("NOTECASE_DATA_DIR") {
        Some(dir) => PathBuf::from(dir).join("notes"),
        None => platform_default_dir()?,
    };

    let locator = StorageLocator::new(Settings::new(config_dir), default_dir);
    Ok(AppContext {
        api: NotecaseApi::open(locator),
    })
}

fn handle_list(ctx: &AppContext, label: Option<String>) -> Result<()> {
    let result = ctx.api.list_notes(label.as_deref())?;
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.view_note(id)?;
    for note in &result.listed_notes {
        print_full_note(note);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    content: String,
    labels: Option<String>,
) -> Result<()> {
    let labels = labels.as_deref().map(parse_labels).unwrap_or_default();
    let result = ctx.api.create_note(title, content, labels)?;
    print_messages(&result.messages);
    for note in &result.affected_notes {
        println!("{}", note.id);
    }
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: &str,
    title: Option<String>,
    content: Option<String>,
    labels: Option<String>,
) -> Result<()> {
    let update = NoteUpdate {
        title,
        content,
        labels: labels.as_deref().map(parse_labels),
    };
    let result = ctx.api.update_note(id, update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_note(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_labels(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.labels()?;
    print_labels(&result.labels);
    Ok(())
}

fn handle_export(ctx: &AppContext, out: &Path) -> Result<()> {
    let result = ctx.api.export_plain(out)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_backup(
    ctx: &AppContext,
    to: &Path,
    out: Option<PathBuf>,
    password: &str,
) -> Result<()> {
    if password.is_empty() {
        return Err(NotecaseError::Api("Password cannot be empty".into()));
    }
    let work_dir = out.unwrap_or_else(std::env::temp_dir);
    let mut sink = DirectorySink::new(to);
    let result = ctx.api.export_encrypted(password, &work_dir, &mut sink)?;
    print_messages(&result.messages);
    print_paths(sink.uploaded());
    Ok(())
}

fn handle_restore(ctx: &AppContext, file: &Path, password: Option<&str>) -> Result<()> {
    let result = ctx.api.import_backup(file, password)?;
    print_messages(&result.messages);
    print_notes(&result.listed_notes);
    Ok(())
}

fn handle_location(ctx: &AppContext, path: Option<PathBuf>, clear: bool) -> Result<()> {
    let result = if clear {
        ctx.api.set_notes_location(None)?
    } else if let Some(path) = path {
        ctx.api.set_notes_location(Some(&path))?
    } else {
        ctx.api.notes_location()?
    };
    print_paths(&result.paths);
    print_messages(&result.messages);
    Ok(())
}
