use berichtsheft::application::{
    init::init, week_overview, AppendOutcome, ConfigService, EntryService, ExportService,
};
use berichtsheft::cli::{format_config, format_day, format_week_navigation, Cli, Commands, Menu};
use berichtsheft::domain::{resolve_date, DateReference};
use berichtsheft::error::{BerichtsheftError, Result};
use berichtsheft::infrastructure::{
    Config, DocumentFormat, EntryStore, JsonFileStore, OfficeConverter, Workspace,
};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::io::{self, BufRead};
use std::str::FromStr;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(Commands::Init { path }) = &cli.command {
        let config = init(path)?;
        println!("Initialized berichtsheft at {}", path.display());
        println!("Entries: {}", config.data_file.display());
        println!("Template: {}", config.template.display());
        return Ok(());
    }

    let workspace = Workspace::discover()?;
    let config = workspace.load_config()?;
    let mut service = EntryService::new(workspace.entry_store(&config));
    let today = Local::now().date_naive();

    let result = execute(cli.command, &workspace, &config, &mut service, today);
    print_warnings(&mut service);
    result
}

fn execute(
    command: Option<Commands>,
    workspace: &Workspace,
    config: &Config,
    service: &mut EntryService<JsonFileStore>,
    today: NaiveDate,
) -> Result<()> {
    match command {
        Some(Commands::Init { .. }) => Ok(()),
        Some(Commands::Add { date, text }) => {
            let date = DateReference::parse(&date)?.resolve(today);
            let text = if text.is_empty() {
                read_text_from_stdin()?
            } else {
                text.join(" ")
            };

            match service.append_entry(date, &text)? {
                AppendOutcome::Skipped => println!("No text entered - cancelled."),
                AppendOutcome::Created | AppendOutcome::Appended => {
                    println!("Saved for {}", date)
                }
            }
            Ok(())
        }
        Some(Commands::Set { date, text }) => {
            let date = DateReference::parse(&date)?.resolve(today);
            service.replace_entry(date, &text.join(" "))?;
            println!("Saved for {}", date);
            Ok(())
        }
        Some(Commands::Delete { date }) => {
            let date = DateReference::parse(&date)?.resolve(today);
            if service.delete_entry(date)? {
                println!("Deleted entry for {}", date);
            } else {
                println!("No entry to delete for {}", date);
            }
            Ok(())
        }
        Some(Commands::Show { date }) => {
            let date = DateReference::parse(&date)?.resolve(today);
            let text = service.entry(date)?;
            println!("{}", format_day(date, text.as_deref()));
            Ok(())
        }
        Some(Commands::Week { date, save }) => {
            let date = resolve_date(date.as_deref(), today)?;
            let overview = week_overview(service, date)?;
            println!("{}\n", overview.text);
            println!("{}", format_week_navigation(&overview.week));
            if save {
                let path = overview.save_to(workspace.root())?;
                println!("Saved as {}", path.display());
            }
            Ok(())
        }
        Some(Commands::Export {
            date,
            name,
            output,
            format,
            docx_only,
        }) => {
            let date = resolve_date(date.as_deref(), today)?;
            let reporter = name
                .or_else(|| config.reporter().map(str::to_string))
                .ok_or(BerichtsheftError::MissingReporterName)?;
            let target = if docx_only {
                None
            } else {
                Some(DocumentFormat::from_str(&format).map_err(BerichtsheftError::Config)?)
            };

            let (week, entries) = service.week(date)?;
            let exporter = ExportService::new(
                config.template_path(workspace.root()),
                OfficeConverter::new(config.converter.clone()),
            );
            let document = exporter.export(&entries, &week, &reporter, today, target)?;

            if let Some(notice) = document.notice() {
                eprintln!("Note: {}", notice);
            }
            let dir = output.unwrap_or_else(|| workspace.root().to_path_buf());
            let path = document.write_to(&dir)?;
            println!("Exported {}", path.display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let config_service = ConfigService::new(workspace.clone());

            if list {
                println!("{}", format_config(&config_service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    config_service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", config_service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: berichtsheft config [--list | <key> [<value>]]");
                println!("Valid keys: data_file, template, reporter, converter");
                Ok(())
            }
        }
        Some(Commands::Menu) | None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Menu::new(
                service,
                stdin.lock(),
                stdout.lock(),
                workspace.root().to_path_buf(),
                today,
            )
            .run()
        }
    }
}

/// Read entry text line by line until an empty line or end of input
fn read_text_from_stdin() -> Result<String> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

fn print_warnings<S: EntryStore>(service: &mut EntryService<S>) {
    for warning in service.take_warnings() {
        eprintln!("{}", warning);
    }
}

