use clap::Parser;
use colored::*;
use jot::api::{CmdMessage, ListFilter, Mark, MessageLevel};
use jot::error::{JotError, Result};
use jot::init::{self, JotContext};
use jot::model::{Note, StoreKey};
use jot::record;
use std::io::{BufRead, Write};
use std::path::Path;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init::initialize()?;

    let key = match cli.category {
        Some(name) => StoreKey::Category(name),
        None => StoreKey::Notes,
    };

    match cli.command {
        Some(Commands::Add { content, date }) => handle_add(&mut ctx, &key, content, date),
        Some(Commands::List { undone, postponed }) => handle_list(&ctx, &key, undone, postponed),
        Some(Commands::Latest { count }) => handle_latest(&ctx, &key, count),
        Some(Commands::Tree) => handle_tree(&ctx, &key),
        Some(Commands::Search { term }) => handle_search(&ctx, &key, &term),
        Some(Commands::Grep { pattern }) => handle_grep(&ctx, &key, &pattern),
        Some(Commands::Done { id, all }) => handle_done(&mut ctx, &key, id, all),
        Some(Commands::Undone { id }) => handle_mark(&mut ctx, &key, id, Mark::Undone),
        Some(Commands::Postpone { id }) => handle_mark(&mut ctx, &key, id, Mark::Postponed),
        Some(Commands::Delete { id, all, done, yes }) => {
            handle_delete(&mut ctx, &key, id, all, done, yes)
        }
        Some(Commands::Replace { id, data }) => handle_replace(&mut ctx, &key, id, &data),
        Some(Commands::Export { path }) => handle_export(&ctx, &key, &path),
        Some(Commands::Path) => handle_path(&ctx, &key),
        Some(Commands::Categories) => handle_categories(&ctx),
        None => handle_list(&ctx, &key, false, false),
    }
}

fn handle_add(
    ctx: &mut JotContext,
    key: &StoreKey,
    content: String,
    date: Option<String>,
) -> Result<()> {
    if content == "-" {
        if date.is_some() {
            return Err(JotError::Malformed(
                "a date cannot be combined with stdin input".to_string(),
            ));
        }
        return add_from_stdin(ctx, key);
    }

    let result = ctx.api.add_note(key, &content, date.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

/// One note per stdin line, until end of input. Blank lines are skipped.
fn add_from_stdin(ctx: &mut JotContext, key: &StoreKey) -> Result<()> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let result = ctx.api.add_note(key, &line, None)?;
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_list(ctx: &JotContext, key: &StoreKey, undone: bool, postponed: bool) -> Result<()> {
    let filter = if undone {
        ListFilter::Undone
    } else if postponed {
        ListFilter::Postponed
    } else {
        ListFilter::Default
    };

    let result = ctx.api.list_notes(key, filter)?;
    print_notes(&result.notes);
    Ok(())
}

fn handle_latest(ctx: &JotContext, key: &StoreKey, count: i64) -> Result<()> {
    let result = ctx.api.latest_notes(key, count)?;
    print_notes(&result.notes);
    Ok(())
}

fn handle_tree(ctx: &JotContext, key: &StoreKey) -> Result<()> {
    let result = ctx.api.notes_by_date(key)?;
    for group in &result.groups {
        println!("{}", group.date);
        for note in &group.notes {
            match note.status {
                Some(status) => println!("\t{}\t{}\t{}", note.id, status, note.content),
                None => println!("\t{}\t{}", note.id, note.content),
            }
        }
    }
    Ok(())
}

fn handle_search(ctx: &JotContext, key: &StoreKey, term: &str) -> Result<()> {
    let result = ctx.api.search_notes(key, term)?;
    if result.notes.is_empty() {
        return Err(JotError::NoMatches);
    }
    print_notes(&result.notes);
    Ok(())
}

fn handle_grep(ctx: &JotContext, key: &StoreKey, pattern: &str) -> Result<()> {
    let result = ctx.api.search_regexp(key, pattern)?;
    if result.notes.is_empty() {
        return Err(JotError::NoMatches);
    }
    print_notes(&result.notes);
    Ok(())
}

fn handle_done(ctx: &mut JotContext, key: &StoreKey, id: Option<u32>, all: bool) -> Result<()> {
    let result = if all {
        ctx.api.mark_all_done(key)?
    } else {
        // clap guarantees the id when --all is absent
        let id = id.ok_or_else(|| JotError::Malformed("missing note id".to_string()))?;
        ctx.api.mark_note(key, id, Mark::Done)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_mark(ctx: &mut JotContext, key: &StoreKey, id: u32, mark: Mark) -> Result<()> {
    let result = ctx.api.mark_note(key, id, mark)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(
    ctx: &mut JotContext,
    key: &StoreKey,
    id: Option<u32>,
    all: bool,
    done: bool,
    yes: bool,
) -> Result<()> {
    let result = if all {
        if !yes && ctx.config.confirm_delete && !confirm("Really delete (y/N)? ")? {
            return Ok(());
        }
        ctx.api.delete_all_notes(key)?
    } else if done {
        ctx.api.delete_done_notes(key)?
    } else {
        let id = id.ok_or_else(|| JotError::Malformed("missing note id".to_string()))?;
        ctx.api.delete_note(key, id)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_replace(ctx: &mut JotContext, key: &StoreKey, id: u32, data: &str) -> Result<()> {
    let result = ctx.api.replace_note(key, id, data)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &JotContext, key: &StoreKey, path: &Path) -> Result<()> {
    let result = ctx.api.export_html(key)?;
    match result.rendered {
        Some(html) => {
            std::fs::write(path, html)?;
            println!("{}", format!("exported to {}", path.display()).green());
        }
        None => print_messages(&result.messages),
    }
    Ok(())
}

fn handle_path(ctx: &JotContext, key: &StoreKey) -> Result<()> {
    println!("{}", ctx.api.store_path(key)?.display());
    Ok(())
}

fn handle_categories(ctx: &JotContext) -> Result<()> {
    let result = ctx.api.categories()?;
    for category in &result.categories {
        match category.count {
            None => println!("{} (empty)", category.name),
            Some(n) => println!(
                "{} ({} {})",
                category.name,
                n,
                if n == 1 { "note" } else { "notes" }
            ),
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Records go to stdout exactly as stored, one per line.
fn print_notes(notes: &[Note]) {
    for note in notes {
        println!("{}", record::encode(note));
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// Block on a single confirmation line from stdin.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}
