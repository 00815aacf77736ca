mod classify;
mod formatter;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use formatter::{FormatOptions, Mode, format_source};
use rayon::prelude::*;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(name = "latexfmt", version, about = "LaTeX source formatter")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Fmt {
        /// Paths (files or directories) to format (reads stdin if omitted)
        paths: Vec<PathBuf>,
        /// Write the formatted content back to the files
        #[arg(long)]
        write: bool,
        /// Check if files are formatted; non-zero exit if changes needed
        #[arg(long)]
        check: bool,
        /// Column at which to wrap paragraph text
        #[arg(long, default_value_t = 80)]
        width: usize,
    },
    Debug {
        /// File to classify line by line
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    match cli.command {
        Commands::Fmt {
            paths,
            write,
            check,
            width,
        } => {
            if write && check {
                bail!("--write and --check are mutually exclusive");
            }
            let mode = if write {
                Mode::Write
            } else if check {
                Mode::Check
            } else {
                Mode::Stdout
            };
            let opts = FormatOptions { width, mode };
            if paths.is_empty() {
                if write {
                    bail!("--write requires file paths");
                }
                return format_stdin(&opts);
            }
            let mut input_files = Vec::new();
            let mut had_error = false;
            for p in &paths {
                if let Err(e) = collect_input_files(p, &mut input_files) {
                    eprintln!("{:#}", e);
                    had_error = true;
                }
            }

            let results: Vec<_> = input_files
                .par_iter()
                .map(|path| process_file(path, &opts))
                .collect();
            let mut had_change = false;
            for r in results {
                match r {
                    Ok(changed) => had_change |= changed,
                    Err(e) => {
                        eprintln!("{:#}", e);
                        had_error = true;
                    }
                }
            }
            if had_error {
                bail!("some input paths could not be processed");
            }
            if matches!(mode, Mode::Check) && had_change {
                std::process::exit(1);
            }
        }
        Commands::Debug { file } => {
            debug_file(&file)?;
        }
    }
    Ok(())
}

fn init_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
    if debug {
        log::debug!("Enabled debug output");
    }
}

fn format_stdin(opts: &FormatOptions) -> Result<()> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("failed to read stdin")?;
    let formatted = format_source(&content, opts);
    match opts.mode {
        Mode::Check => {
            if formatted != content {
                std::process::exit(1);
            }
        }
        Mode::Stdout | Mode::Write => print!("{}", formatted),
    }
    Ok(())
}

fn debug_file(path: &Path) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    println!("===== {} =====", path.display());
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        let kind = if trimmed.is_empty() {
            "blank".to_owned()
        } else if classify::is_comment(trimmed) {
            "comment".to_owned()
        } else if classify::is_sectioning(trimmed) {
            "section".to_owned()
        } else if classify::is_document_boundary(trimmed) {
            "doc-boundary".to_owned()
        } else {
            match classify::group_delta(trimmed) {
                0 => "text".to_owned(),
                d => format!("group({:+})", d),
            }
        };
        println!("{:>4} {:<12} {}", idx + 1, kind, line);
    }
    Ok(())
}

fn collect_input_files(path: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    if path.is_file() {
        // Files named explicitly are formatted regardless of extension; the
        // .tex filter only applies when walking directories.
        out.push(path.to_path_buf());
        return Ok(());
    }
    if !path.is_dir() {
        bail!("{}: no such file or directory", path.display());
    }
    for entry in WalkDir::new(path) {
        let entry = entry.with_context(|| format!("failed to walk {}", path.display()))?;
        let p = entry.path();
        if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("tex") {
            out.push(p.to_path_buf());
        }
    }
    Ok(())
}

fn process_file(path: &Path, opts: &FormatOptions) -> Result<bool> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let formatted = format_source(&content, opts);
    let changed = formatted != content;
    match opts.mode {
        Mode::Stdout => {
            println!("===== {} =====", path.display());
            print!("{}", formatted);
        }
        Mode::Write => {
            if changed {
                fs::write(path, formatted)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
        }
        Mode::Check => {}
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
