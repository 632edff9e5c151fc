use cheatbank::api::{CheatbankApi, CmdMessage, CmdResult, ListedCheatsheet, MessageLevel};
use cheatbank::error::Result;
use cheatbank::prefs::UserPrefs;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let _logger = flexi_logger::Logger::try_with_env_or_str(if cli.verbose {
        "debug"
    } else {
        "warn"
    })
    .ok()
    .and_then(|logger| logger.start().ok());

    let (prefs, data_dir) = load_prefs();
    let data_path = resolve_data_path(&cli, &prefs, data_dir);
    let mut api = CheatbankApi::load(&data_path, prefs)?;

    match cli.command {
        Some(Commands::Add {
            title,
            contents,
            tags,
        }) => {
            let result = api.add(&title, &contents, &tags)?;
            api.save(&data_path)?;
            print_messages(&result.messages);
        }
        Some(Commands::Delete { index }) => {
            let result = api.delete(&index)?;
            api.save(&data_path)?;
            print_messages(&result.messages);
        }
        Some(Commands::List) | None => {
            let result = api.list()?;
            print_messages(&result.messages);
            print_listing(&result);
        }
        Some(Commands::Find { keywords }) => {
            let found = api.find(&keywords)?;
            print_messages(&found.messages);
            let result = api.list()?;
            print_listing(&result);
        }
        Some(Commands::Clear) => {
            let result = api.clear()?;
            api.save(&data_path)?;
            print_messages(&result.messages);
        }
        Some(Commands::Exec { line }) => {
            let result = api.execute(&line.join(" "))?;
            api.save(&data_path)?;
            print_listing(&result);
            print_messages(&result.messages);
        }
    }

    Ok(())
}

fn load_prefs() -> (UserPrefs, Option<PathBuf>) {
    match ProjectDirs::from("com", "cheatbank", "cheatbank") {
        Some(dirs) => {
            let data_dir = dirs.data_dir().to_path_buf();
            let prefs = UserPrefs::load(&data_dir).unwrap_or_default();
            (prefs, Some(data_dir))
        }
        None => (UserPrefs::default(), None),
    }
}

fn resolve_data_path(cli: &Cli, prefs: &UserPrefs, data_dir: Option<PathBuf>) -> PathBuf {
    if let Some(path) = &cli.data_file {
        return path.clone();
    }
    let stored = prefs.data_file_path();
    if stored.is_absolute() {
        return stored.to_path_buf();
    }
    match data_dir {
        Some(dir) => dir.join(stored),
        None => stored.to_path_buf(),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_listing(result: &CmdResult) {
    if result.listed.is_empty() {
        return;
    }

    let title_width = result
        .listed
        .iter()
        .map(|l| l.cheatsheet.title().as_str().width())
        .max()
        .unwrap_or(0);

    for listed in &result.listed {
        println!("{}", render_row(listed, title_width));
    }
}

fn render_row(listed: &ListedCheatsheet, title_width: usize) -> String {
    let title = listed.cheatsheet.title().as_str();
    let padding = " ".repeat(title_width.saturating_sub(title.width()));

    let tags = listed
        .cheatsheet
        .tags()
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let contents = match listed.cheatsheet.contents().len() {
        0 => String::new(),
        1 => "(1 fragment)".to_string(),
        n => format!("({} fragments)", n),
    };

    // Pad before coloring; ANSI escapes would throw off width formatting.
    let index = format!("{:>3}", listed.index);
    let mut row = format!("{}  {}{}", index.cyan(), title.bold(), padding);
    if !tags.is_empty() {
        row.push_str(&format!("  {}", tags.dimmed()));
    }
    if !contents.is_empty() {
        row.push_str(&format!("  {}", contents.dimmed()));
    }
    row
}
