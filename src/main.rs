use clap::{Parser, Subcommand};
use serde_json::Value;
use simple_press::manifest::{MANIFEST_FILE, Manifest};
use simple_press::registry::Registry;
use simple_press::{config, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simple-press")]
#[command(about = "Content collections for a static content site")]
#[command(long_about = "\
Content collections for a static content site

Files under the content root become items. Named collections pick items by
glob and order them, then `build` writes collections.json for the renderer.

Project structure:

  .
  ├── config.toml                  # Optional, overrides stock defaults
  └── src/                         # content_root
      ├── about.md                 # → /about/
      ├── tutorial/
      │   ├── intro.md             # order: 1  → /tutorial/intro/
      │   └── setup.md             # order: 2  → /tutorial/setup/
      ├── en/
      │   └── tutorial/
      │       └── intro.md         # enTutorials → /en/tutorial/intro/
      └── 2026/
          └── 01/
              └── my-post.md       # → /2026/01/my-post/

Ordering:
  sequential             front matter `order` ascending, missing = 0
  reverse-chronological  newest first; date from front matter, else the
                         /YYYY/MM/ URL prefix, else epoch 0

Run 'simple-press gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Project directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    project: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List discovered content items
    Scan,
    /// Assemble collections and write collections.json
    Build,
    /// Report items that sort as undated in reverse-chronological collections
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Evaluate a template filter on string arguments
    Filter {
        /// Filter name, e.g. getSlug
        name: String,
        /// Positional arguments, passed as strings
        args: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let site_config = config::load_config(&cli.project)?;
            let index = scan::scan(&cli.project, &site_config)?;
            output::print_scan_output(&index);
        }
        Command::Build => {
            let site_config = config::load_config(&cli.project)?;
            let content_root = cli.project.join(&site_config.content_root);

            println!("==> Stage 1: Scanning {}", content_root.display());
            let index = scan::scan(&cli.project, &site_config)?;
            output::print_scan_output(&index);

            println!("==> Stage 2: Assembling collections");
            let registry = Registry::from_config(&site_config)?;
            let collections = registry.assemble(&index);
            output::print_collections_output(&collections);

            let output_dir = cli.project.join(&site_config.output_dir);
            println!(
                "==> Stage 3: Writing {}",
                output_dir.join(MANIFEST_FILE).display()
            );
            Manifest::build(&collections).write(&output_dir)?;

            println!("==> Build complete: {}", output_dir.display());
        }
        Command::Check => {
            let site_config = config::load_config(&cli.project)?;
            println!("==> Checking {}", cli.project.display());
            let index = scan::scan(&cli.project, &site_config)?;
            let registry = Registry::from_config(&site_config)?;
            let collections = registry.assemble(&index);
            output::print_check_output(&collections);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Filter { name, args } => {
            let registry = Registry::with_standard_filters();
            let args: Vec<Value> = args.into_iter().map(Value::String).collect();
            let result = registry
                .apply(&name, &args)
                .ok_or_else(|| format!("unknown filter: {name}"))?;
            println!("{}", serde_json::to_string(&result)?);
        }
    }

    Ok(())
}
