use clap::{Parser, Subcommand};
use guidebook::repository::Repository;
use guidebook::{config, generate, output, render};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "guidebook")]
#[command(about = "Static site generator for study-guide document collections")]
#[command(long_about = "\
Static site generator for study-guide document collections

Your filesystem is the data source. Every markdown file under the content
roots becomes a page at /docs/<slug>, ordered by its numeric prefix.

Site structure:

  site/
  ├── config.toml                      # Optional, see 'guidebook gen-config'
  └── content/
      ├── 01-introduction-to-spring.md # /docs/introduction-to-spring, first
      ├── 02-spring-boot-setup.md      # /docs/spring-boot-setup, second
      ├── README.md                    # /docs/readme, unordered (listed last)
      └── advanced/
          └── 10-testing.md            # Nested files are found too

Metadata resolution (first available wins):
  Title:    front matter → first heading → filename (03-spring-boot → \"Spring Boot\")
  Overview: front matter → first line of the '## Overview' section
  Glyph:    front matter → leading emoji → default glyph

Run 'guidebook gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site root (holds config.toml and the content directories)
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log per-document progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content and print the document inventory
    Check,
    /// Print every route the host must pre-render
    Paths {
        /// Print JSON instead of one route per line
        #[arg(long)]
        json: bool,
    },
    /// Print one document rendered to HTML
    Show {
        /// Document slug, e.g. spring-boot-setup
        slug: String,
        /// Print only the HTML, without the metadata header
        #[arg(long)]
        raw: bool,
    },
    /// Write the static site into the output directory
    Build,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let (_, repo) = load_site(&cli.source)?;
            output::print_check_output(&repo);
            println!("==> Content is valid");
        }
        Command::Paths { json } => {
            let (_, repo) = load_site(&cli.source)?;
            if json {
                println!("{}", output::format_paths_json(&repo)?);
            } else {
                output::print_paths(&repo);
            }
        }
        Command::Show { slug, raw } => {
            let (site_config, repo) = load_site(&cli.source)?;
            let doc = match repo.get(&slug) {
                Ok(doc) => doc,
                Err(not_found) => {
                    eprintln!("{not_found}");
                    eprintln!("Run 'guidebook paths' to list the available documents.");
                    return Ok(ExitCode::FAILURE);
                }
            };
            if !raw {
                let (prev, next) = repo.neighbors(&slug)?;
                for line in output::format_show_header(doc, prev, next) {
                    println!("{}", line);
                }
                println!();
            }
            let renderer = render::Renderer::new(&site_config.render);
            print!("{}", renderer.render(&doc.raw_text));
        }
        Command::Build => {
            println!("==> Scanning {}", cli.source.display());
            let (site_config, repo) = load_site(&cli.source)?;
            output::print_check_output(&repo);

            println!("==> Generating HTML \u{2192} {}", cli.output.display());
            let report = generate::generate(&repo, &site_config, &cli.output)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::GenConfig => print!("{}", config::stock_config_toml()),
    }

    Ok(ExitCode::SUCCESS)
}

/// Load `config.toml`, size the thread pool and build the repository.
fn load_site(
    source: &Path,
) -> Result<(config::SiteConfig, Repository), Box<dyn std::error::Error>> {
    let site_config = config::load_config(source)?;
    init_thread_pool(&site_config.processing);
    let repo = Repository::build(source, &site_config)?;
    Ok((site_config, repo))
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,guidebook=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Capped at the number of available CPU cores: config can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
