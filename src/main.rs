//! Pokedex - browse, filter and search the PokeAPI catalog from the terminal
//!
//! Every command prints JSON so the output can be piped into other tools.

mod settings;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pokedex_core::{
    format_generation_name, generation_short_label, type_style, Filters, Item, ItemRef, StatTier, TypeStyle,
};
use pokedex_integration::CatalogClient;

use settings::Settings;

/// Pokedex catalog CLI
#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse, filter and search the PokeAPI catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of items
    List {
        /// Page cursor, starting at 0
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// Only items with this type
        #[arg(long = "type", default_value = "all")]
        item_type: String,
        /// Only items from this generation (e.g. generation-i)
        #[arg(long, default_value = "all")]
        generation: String,
        /// Case-insensitive name search; expands matches to their evolution chains
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Show one item with its evolution chain
    Show {
        /// Numeric id or name
        id: String,
    },

    /// List all generations
    Generations,

    /// List member names of a type or a generation
    Members {
        #[arg(long = "type", conflicts_with = "generation", required_unless_present = "generation")]
        item_type: Option<String>,
        #[arg(long)]
        generation: Option<String>,
    },

    /// Show the settings path, optionally writing the defaults there
    Config {
        #[arg(long)]
        init: bool,
    },
}

/// Detail output: the item plus display-ready extras
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemView<'a> {
    #[serde(flatten)]
    item: &'a Item,
    generation_name: String,
    weight_kg: f32,
    height_m: f32,
    base_stat_total: u32,
    type_styles: Vec<&'static TypeStyle>,
    stat_tiers: Vec<(&'a str, StatTier)>,
}

impl<'a> ItemView<'a> {
    fn new(item: &'a Item) -> Self {
        Self {
            item,
            generation_name: format_generation_name(&item.generation),
            weight_kg: item.weight_kg(),
            height_m: item.height_m(),
            base_stat_total: item.base_stat_total(),
            type_styles: item.types.iter().filter_map(|t| type_style(&t.type_name)).collect(),
            stat_tiers: item
                .stats
                .iter()
                .map(|s| (s.stat_name.as_str(), StatTier::of(s.base_value)))
                .collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationView {
    name: String,
    display_name: String,
    short_label: String,
    url: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (settings, warnings) = Settings::load();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;
    Settings::report(&warnings);

    if let Commands::Config { init } = &cli.command {
        return run_config(&settings, *init);
    }

    info!("Using upstream {}", settings.catalog.base_url);
    let client = CatalogClient::new(settings.catalog.clone()).context("Failed to create catalog client")?;

    match cli.command {
        Commands::List {
            page,
            item_type,
            generation,
            search,
        } => {
            let filters = Filters::default()
                .with_type(item_type)
                .with_generation(generation)
                .with_search(search);
            let page = client.list_items(page, filters).wait()?;
            if page.is_empty() {
                info!("No items matched");
            }
            print_json(&page)
        }
        Commands::Show { id } => {
            let item = client
                .get_by_id(ItemRef::parse(&id))
                .wait()
                .with_context(|| format!("Failed to look up '{}'", id))?;
            print_json(&ItemView::new(&item))
        }
        Commands::Generations => {
            let generations: Vec<GenerationView> = client
                .list_generations()
                .wait()
                .context("Failed to list generations")?
                .into_iter()
                .map(|g| GenerationView {
                    display_name: format_generation_name(&g.name),
                    short_label: generation_short_label(&g.name),
                    name: g.name,
                    url: g.url,
                })
                .collect();
            print_json(&generations)
        }
        Commands::Members { item_type, generation } => {
            let members = match (item_type, generation) {
                (Some(item_type), _) => client.type_members(item_type).wait(),
                (None, Some(generation)) => client.generation_members(generation).wait(),
                (None, None) => anyhow::bail!("Either --type or --generation is required"),
            }
            .context("Failed to list members")?;
            print_json(&members)
        }
        Commands::Config { .. } => Ok(()),
    }
}

fn run_config(settings: &Settings, init: bool) -> Result<()> {
    if init {
        let path = settings.save()?;
        println!("{}", path.display());
        return Ok(());
    }
    match Settings::settings_path() {
        Some(path) => println!("{}", path.display()),
        None => println!("(no config directory)"),
    }
    println!("{}", toml::to_string_pretty(settings)?);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
