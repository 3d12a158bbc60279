//! Command-line planner for gift boxes.
//!
//! Prints cut lists and reference search links without running the HTTP
//! service.
//!
//! # Usage
//!
//! ```bash
//! # Show shapes, criteria and platforms
//! cargo run --bin giftbox -- catalog
//!
//! # Cut list and all search links for a rectangular box with a lid
//! cargo run --bin giftbox -- plan --shape rectangular --length 120 --width 90 --height 40 --criteria lid_base
//!
//! # One search link; prompts for the platform when omitted
//! cargo run --bin giftbox -- search --shape cube --criteria eco,window --platform pinterest
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOG_PATH` (optional): JSON catalog replacing the reference tables
//! - `RUST_LOG` (optional): log filter, default `warn`

use giftbox_assistant::infrastructure::load_catalog;
use giftbox_assistant::logging;
use giftbox_assistant::prelude::*;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::Select;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Gift box planner: cut lists and dieline search links.
#[derive(Parser)]
#[command(name = "giftbox")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog file (defaults to `CATALOG_PATH`, then the built-in tables)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List shapes, criteria and platforms
    Catalog,

    /// Print the cut lists, search links and materials for a box
    Plan {
        #[command(flatten)]
        design: DesignArgs,

        #[command(flatten)]
        dims: DimensionArgs,

        /// Gift name shown in the header
        #[arg(long)]
        name: Option<String>,
    },

    /// Build the search link for one platform
    Search {
        #[command(flatten)]
        design: DesignArgs,

        /// Platform id (e.g. google, pinterest); prompts when omitted
        #[arg(short, long)]
        platform: Option<String>,
    },
}

/// Shape and criteria shared by all design commands.
#[derive(Args)]
struct DesignArgs {
    /// Box shape: rectangular, cube, triangular_prism, quadrangular_prism
    #[arg(short, long, default_value = "rectangular")]
    shape: ShapeKind,

    /// Selected criterion ids, comma-separated (e.g. lid_base,eco)
    #[arg(short, long, value_delimiter = ',')]
    criteria: Vec<String>,
}

/// Dimension overrides in millimeters; unset fields keep the form defaults.
#[derive(Args)]
struct DimensionArgs {
    #[arg(long, allow_hyphen_values = true)]
    length: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    width: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    height: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    side: Option<f64>,

    /// Base edges of a prism, comma-separated, in order (e.g. 60,60,60)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    base_edges: Vec<f64>,
}

impl DimensionArgs {
    fn apply(&self, dims: &mut DimensionSet) {
        let singles = [
            (DimensionField::Length, self.length),
            (DimensionField::Width, self.width),
            (DimensionField::Height, self.height),
            (DimensionField::Side, self.side),
        ];
        for (field, value) in singles {
            if let Some(mm) = value {
                dims.set(field, mm);
            }
        }

        let edges = [
            DimensionField::BaseEdge1,
            DimensionField::BaseEdge2,
            DimensionField::BaseEdge3,
            DimensionField::BaseEdge4,
        ];
        for (field, &mm) in edges.iter().zip(&self.base_edges) {
            dims.set(*field, mm);
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    logging::init(&filter, "text");

    let cli = Cli::parse();

    let catalog_path = cli
        .catalog
        .or_else(|| std::env::var("CATALOG_PATH").ok().map(PathBuf::from));
    let catalog = load_catalog(catalog_path.as_deref()).context("Failed to load catalog")?;
    let state = AppState::new(catalog);

    match cli.command {
        Commands::Catalog => print_catalog(&state.catalog),
        Commands::Plan { design, dims, name } => print_plan(&state, design, dims, name),
        Commands::Search { design, platform } => print_search(&state, design, platform)?,
    }

    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    println!("{}", "📦 Shapes".bright_blue().bold());
    for entry in &catalog.shapes {
        println!(
            "  {:<20} {} {}",
            entry.shape.as_str().bold(),
            entry.name,
            format!("({})", entry.keyword).dimmed()
        );
    }

    println!();
    println!("{}", "✅ Criteria".bright_blue().bold());
    for criterion in &catalog.criteria {
        let marker = if criterion.id == catalog.lid_criterion {
            " [lid]".cyan().to_string()
        } else {
            String::new()
        };
        println!("  {:<20} {}{}", criterion.id.bold(), criterion.label, marker);
    }

    println!();
    println!("{}", "🔎 Platforms".bright_blue().bold());
    for platform in &catalog.platforms {
        println!("  {:<20} {}", platform.id.bold(), platform.name);
    }
}

fn print_plan(state: &AppState, design: DesignArgs, dims: DimensionArgs, name: Option<String>) {
    let mut form = state.catalog.default_form();
    form.shape = design.shape;
    form.name = name.unwrap_or_default();
    dims.apply(&mut form.dimensions);

    let selected: SelectedCriteria = design.criteria.into_iter().collect();
    warn_unknown_criteria(&state.catalog, &selected);

    let plan = state.plan_service.plan(&form, &selected);

    let title = if plan.name.is_empty() {
        plan.shape_name.clone()
    } else {
        format!("{} - {}", plan.name, plan.shape_name)
    };
    println!("{}", format!("🎁 {title}").bright_blue().bold());
    println!();

    println!("{}", "Kích thước cắt (Thân hộp):".green().bold());
    for cut in &plan.cut_list {
        println!("  {cut}");
    }

    if let Some(lid) = &plan.lid_list {
        println!();
        println!(
            "{}",
            format!("Kích thước cắt (Nắp hộp - Dư {LID_CLEARANCE_MM}mm):")
                .blue()
                .bold()
        );
        for cut in lid {
            println!("  {cut}");
        }
    }

    println!();
    println!("{}", "Hộp quà và bản vẽ:".magenta().bold());
    for link in &plan.references {
        println!("  {:<14} {}", link.name.bold(), link.url);
    }

    println!();
    println!("{}", "Vật liệu cần chuẩn bị:".yellow().bold());
    for material in &plan.materials {
        println!("  {}", material.title.bold());
        println!("    {}", material.description);
    }
}

fn print_search(state: &AppState, design: DesignArgs, platform: Option<String>) -> Result<()> {
    let platform = match platform {
        Some(p) => p,
        None => pick_platform(&state.catalog)?,
    };

    let selected: SelectedCriteria = design.criteria.into_iter().collect();
    warn_unknown_criteria(&state.catalog, &selected);

    let search = state
        .query_service
        .build_query(design.shape, &selected, &platform);

    println!("{} {}", "Query:".bold(), search.query);

    match search.url {
        Some(url) => println!("{} {}", "URL:".bold(), url.green()),
        None => println!(
            "{}",
            format!("⚠️  Unknown platform '{platform}', no link to open").yellow()
        ),
    }

    Ok(())
}

/// Asks for a platform interactively, or fails when stdin is not a terminal.
fn pick_platform(catalog: &Catalog) -> Result<String> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("--platform is required when not running interactively");
    }

    let names: Vec<&str> = catalog.platforms.iter().map(|p| p.name.as_str()).collect();
    let index = Select::new()
        .with_prompt("Platform")
        .items(&names)
        .default(0)
        .interact()?;

    Ok(catalog.platforms[index].id.clone())
}

fn warn_unknown_criteria(catalog: &Catalog, selected: &SelectedCriteria) {
    for id in selected.iter() {
        if catalog.criterion(id).is_none() {
            eprintln!(
                "{}",
                format!("⚠️  Unknown criterion '{id}' ignored").yellow()
            );
        }
    }
}
