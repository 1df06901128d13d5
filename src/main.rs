mod cli;

use clap::Parser;
use cli::{Args, Commands};
use eyre::Result;
use framefold::filter::{filter_extensions, parse_filter};
use framefold::fs::{read_path_list, scan_folder};
use framefold::{CollapseOptions, Listing, group};
use std::io::{self, IsTerminal, Write};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let verbose = args.command.output().verbose;

    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let output = args.command.output();
    let opts = CollapseOptions {
        min_members: output.min_members,
    };
    let json = output.json;

    let (paths, raw) = match &args.command {
        Commands::Scan(a) => {
            let mut paths = scan_folder(&a.dir)?;
            if let Some(text) = &a.filter {
                paths = filter_extensions(paths, &parse_filter(text));
            }
            tracing::info!(dir = %a.dir.display(), files = paths.len(), "scanned");
            (paths, a.raw)
        }
        Commands::Collapse(a) => {
            let paths = if !a.paths.is_empty() {
                a.paths.clone()
            } else if io::stdin().is_terminal() {
                Vec::new()
            } else {
                read_path_list(io::stdin().lock())?
            };
            (paths, false)
        }
    };

    if paths.is_empty() {
        tracing::warn!("nothing selected; no paths to list");
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    if raw {
        let mut files = paths;
        files.sort_unstable();
        if json {
            let listing = Listing {
                sequences: Vec::new(),
                files,
            };
            writeln!(stdout, "{}", serde_json::to_string_pretty(&listing)?)?;
        } else {
            for f in files {
                writeln!(stdout, "{f}")?;
            }
        }
        return Ok(());
    }

    let grouping = group(&paths);
    if json {
        let listing = grouping.listing(&opts);
        writeln!(stdout, "{}", serde_json::to_string_pretty(&listing)?)?;
    } else {
        let entries = grouping.rewrite(&opts);
        tracing::debug!(input = paths.len(), output = entries.len(), "collapsed");
        for entry in entries {
            writeln!(stdout, "{entry}")?;
        }
    }

    Ok(())
}
