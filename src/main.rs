//! kedit - A small terminal text editor

use anyhow::Result;
use clap::{value_parser, Arg, Command};
use kedit::app::HELP_MESSAGE;
use kedit::{Editor, EditorConfig, TerminalUI};
use std::path::PathBuf;

fn cli() -> Command {
    let command = Command::new("kedit")
        .version(kedit::VERSION)
        .about("A small terminal text editor with syntax highlighting and incremental search")
        .arg(
            Arg::new("file")
                .help("File to open")
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("tab-stop")
                .long("tab-stop")
                .value_name("N")
                .help("Columns per tab stop")
                .value_parser(value_parser!(usize)),
        );

    #[cfg(feature = "config")]
    let command = command.arg(
        Arg::new("config")
            .long("config")
            .value_name("PATH")
            .help("Configuration file (default: <config dir>/kedit/config.toml)")
            .value_parser(value_parser!(PathBuf)),
    );

    command
}

fn main() -> Result<()> {
    // Logging goes to stderr and is off unless RUST_LOG is set
    env_logger::init();

    let matches = cli().get_matches();

    #[cfg(feature = "config")]
    let config = EditorConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    #[cfg(not(feature = "config"))]
    let config = EditorConfig::default();

    let config = match matches.get_one::<usize>("tab-stop") {
        Some(&tab_stop) => config.with_tab_stop(tab_stop)?,
        None => config,
    };

    let file_path = matches.get_one::<PathBuf>("file");
    if let Some(path) = file_path {
        if !path.exists() {
            anyhow::bail!("File does not exist: {}", path.display());
        }
        if !path.is_file() {
            anyhow::bail!("Path is not a regular file: {}", path.display());
        }
    }

    let ui = Box::new(TerminalUI::new()?);
    let mut editor = Editor::new(config, ui)?;
    if let Some(path) = file_path {
        editor.open_file(path)?;
    }
    editor.set_status_message(HELP_MESSAGE);
    editor.run()?;

    Ok(())
}
