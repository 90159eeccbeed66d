//! Goop CLI - expand `.goo` class syntax into plain Go.

mod ui;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use console::style;
use miette::IntoDiagnostic;
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use goop_compiler::discover::is_goop_file;
use goop_compiler::{CompileResult, Compiler, CompilerConfig, DEFAULT_MARKER};

#[derive(Parser)]
#[command(name = "goop")]
#[command(version)]
#[command(about = "Goop - classes for Go, expanded into plain Go")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transpile every .goo file under a directory into a .go file beside it
    Compile {
        /// Root directory to walk
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Marker character for interface references
        #[arg(short, long, default_value_t = DEFAULT_MARKER)]
        marker: char,

        /// Transpile without writing any .go files
        #[arg(long)]
        dry_run: bool,

        /// Do not follow symbolic links while walking
        #[arg(long)]
        no_follow_links: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Transpile everything under a directory and report classes, writing nothing
    Check {
        #[arg(default_value = ".")]
        root: PathBuf,

        #[arg(short, long, default_value_t = DEFAULT_MARKER)]
        marker: char,
    },

    /// Print the Go generated for a single .goo file
    Print {
        file: PathBuf,

        #[arg(short, long, default_value_t = DEFAULT_MARKER)]
        marker: char,
    },

    /// Recompile whenever a .goo file changes
    Watch {
        #[arg(default_value = ".")]
        root: PathBuf,

        #[arg(short, long, default_value_t = DEFAULT_MARKER)]
        marker: char,
    },
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Compile {
            root,
            marker,
            dry_run,
            no_follow_links,
            json,
        } => {
            let config = CompilerConfig {
                root_dir: root,
                marker,
                write_output: !dry_run,
                follow_links: !no_follow_links,
            };
            if json {
                let result = Compiler::new(config)?.compile()?;
                println!("{}", result.to_json().into_diagnostic()?);
                return Ok(());
            }
            run_compile(config)
        }
        Commands::Check { root, marker } => run_check(root, marker),
        Commands::Print { file, marker } => run_print(&file, marker),
        Commands::Watch { root, marker } => run_watch_mode(root, marker).await,
    }
}

fn init_tracing(verbose: bool) -> miette::Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let directive: Directive = format!("goop_compiler={level}").parse().into_diagnostic()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run_compile(config: CompilerConfig) -> miette::Result<()> {
    ui::print_compact_header(env!("CARGO_PKG_VERSION"));
    println!();

    let compiler = Compiler::new(config)?;
    let start = Instant::now();
    let result = compile_pass(&compiler)?;
    let elapsed = start.elapsed().as_millis();

    print_report(&compiler, &result);
    println!();
    ui::timing("Done", elapsed);
    Ok(())
}

/// Runs one directory pass behind a spinner.
fn compile_pass(compiler: &Compiler) -> miette::Result<CompileResult> {
    let spinner = ui::spinner("Transpiling...");
    let result = compiler.compile();
    spinner.finish_and_clear();
    Ok(result?)
}

fn print_report(compiler: &Compiler, result: &CompileResult) {
    for file in &result.files {
        ui::matched(&file.source, &file.output, file.written);
    }

    if !result.failures.is_empty() {
        ui::error_header();
        for failure in &result.failures {
            ui::error(&failure.message);
            if let Some(cause) = &failure.cause {
                ui::dim(&format!("  {}", cause));
            }
        }
    }

    println!();
    let title = if compiler.config().write_output { "COMPILED" } else { "DRY RUN" };
    ui::box_header(title);
    ui::box_line("");
    ui::box_line(&format!(
        "{}  {}  {}",
        ui::count("files", result.files.len()),
        ui::count("classes", result.classes()),
        ui::count("failed", result.failures.len())
    ));
    ui::box_line("");
    ui::box_footer();

    if result.matched() == 0 {
        println!();
        ui::info(&format!(
            "No .goo files under {}",
            compiler.config().root_dir.display()
        ));
    } else if result.failures.is_empty() {
        println!();
        ui::looking_good();
    }
}

fn run_check(root: PathBuf, marker: char) -> miette::Result<()> {
    let config = CompilerConfig {
        root_dir: root,
        marker,
        write_output: false,
        ..CompilerConfig::default()
    };
    let compiler = Compiler::new(config)?;
    let result = compile_pass(&compiler)?;

    for file in &result.files {
        ui::info(&ui::file_link(&file.source));
        if file.classes.is_empty() {
            ui::dim("  no classes");
        }
        for class in &file.classes {
            ui::dim(&format!(
                "  {}",
                ui::class_line(&class.name, class.fields, class.methods, class.accessors)
            ));
        }
    }

    print_report(&compiler, &result);
    Ok(())
}

fn run_print(file: &Path, marker: char) -> miette::Result<()> {
    let config = CompilerConfig {
        marker,
        write_output: false,
        ..CompilerConfig::default()
    };
    let compiler = Compiler::new(config)?;
    let transpiled = compiler.transpile_file(file)?;
    print!("{}", transpiled.code);
    Ok(())
}

async fn run_watch_mode(root: PathBuf, marker: char) -> miette::Result<()> {
    ui::print_compact_header(env!("CARGO_PKG_VERSION"));
    println!();

    let config = CompilerConfig {
        root_dir: root.clone(),
        marker,
        ..CompilerConfig::default()
    };
    let compiler = Compiler::new(config)?;

    let result = compile_pass(&compiler)?;
    print_report(&compiler, &result);

    let (tx, mut rx) = tokio::sync::mpsc::channel::<()>(1);

    // Generated .go files land in the watched tree, so only .goo events count.
    let mut debouncer = new_debouncer(
        Duration::from_millis(500),
        move |res: DebounceEventResult| {
            if let Ok(events) = res {
                let touched_goop = events.iter().any(|event| {
                    event
                        .path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(is_goop_file)
                });
                if touched_goop {
                    let _ = tx.try_send(());
                }
            }
        },
    )
    .map_err(|e| miette::miette!("Failed to create watcher: {}", e))?;

    debouncer
        .watcher()
        .watch(&root, RecursiveMode::Recursive)
        .map_err(|e| miette::miette!("Failed to watch {}: {}", root.display(), e))?;

    ui::divider();
    ui::info(&format!(
        "Watching {} for changes...",
        style(root.display()).fg(ui::colors::CYAN)
    ));
    ui::dim("Press Ctrl+C to stop");

    loop {
        tokio::select! {
            Some(()) = rx.recv() => {
                ui::divider();
                ui::info("Change detected, recompiling...");
                let start = Instant::now();
                match compile_pass(&compiler) {
                    Ok(result) => {
                        print_report(&compiler, &result);
                        println!();
                        ui::timing("Recompiled", start.elapsed().as_millis());
                    }
                    Err(e) => ui::error(&format!("{:?}", e)),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                ui::success("Stopped watching.");
                break;
            }
        }
    }

    Ok(())
}
