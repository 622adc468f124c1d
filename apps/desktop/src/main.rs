use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    CatalogBrowser, CatalogSource, HttpCatalogSource, OutfitCreator, PreferenceField,
    TryOnController,
};
use shared::{
    domain::{CatalogItemId, Category},
    protocol::CatalogItem,
};
use tokio::runtime::Handle;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tryon", about = "Drive the virtual try-on views from a terminal")]
struct Args {
    #[arg(long, env = "TRYON_SERVER_URL", default_value = "http://127.0.0.1:8443")]
    server_url: String,
    /// Print catalog listings as JSON.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Every item, dresses first.
    Catalog,
    /// One category of the brand showcase.
    Gallery {
        #[arg(long, default_value = "dresses")]
        category: Category,
    },
    /// Run the simulated fitting for one item.
    TryOn { item_id: i64 },
    /// Previously saved outfits.
    Outfits,
    /// Run the outfit creator with the given choices.
    Create {
        #[arg(long)]
        weather: String,
        #[arg(long)]
        style: String,
        #[arg(long)]
        garment: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let source: Arc<dyn CatalogSource> = Arc::new(
        HttpCatalogSource::new(&args.server_url)
            .with_context(|| format!("invalid --server-url '{}'", args.server_url))?,
    );

    info!(server = %args.server_url, command = command_name(&args.command), "running subcommand");
    match args.command {
        Command::Catalog => {
            let controller = loaded_try_on(source).await?;
            print_items(&controller.all_items(), args.json)?;
        }
        Command::Gallery { category } => {
            let mut browser = CatalogBrowser::mount(source, Handle::current());
            browser.next_event().await;
            if !browser.catalog().is_loaded() {
                error!(view = "gallery", "catalog did not load");
                bail!("catalog did not load; see the logged error for the cause");
            }
            browser.set_category(category);
            println!(
                "{} ({} items)",
                category.label(),
                browser.item_count(category)
            );
            let items: Vec<&CatalogItem> = browser.filtered_items().iter().collect();
            print_items(&items, args.json)?;
        }
        Command::TryOn { item_id } => {
            let mut controller = loaded_try_on(source).await?;
            if !controller.select_item_by_id(CatalogItemId(item_id)) {
                bail!("no catalog item with id {item_id}");
            }
            if let Some(item) = controller.selected() {
                println!("Trying on {} by {} ({})", item.name, item.brand, item.price);
            }
            controller.start_try_on();
            println!("{}", controller.phase().label());
            controller.next_event().await;
            match controller.result_image() {
                Some(image) => println!("{}: {image}", controller.phase().label()),
                None => bail!("try-on did not complete"),
            }
        }
        Command::Outfits => {
            let mut controller = loaded_try_on(source).await?;
            controller.open_saved_outfits();
            if args.json {
                println!("{}", serde_json::to_string_pretty(controller.saved_outfits())?);
            } else {
                for outfit in controller.saved_outfits() {
                    println!(
                        "#{:<3} {:<24} {}  {}",
                        outfit.id.0, outfit.name, outfit.image_url, outfit.description
                    );
                }
            }
            controller.close_saved_outfits();
        }
        Command::Create {
            weather,
            style,
            garment,
        } => {
            let mut creator = OutfitCreator::new(Handle::current());
            creator.set_preference(PreferenceField::Weather, weather);
            creator.set_preference(PreferenceField::Style, style);
            creator.set_preference(PreferenceField::GarmentType, garment);
            for (field, value) in creator.summary() {
                println!("{field}: {value}");
            }
            creator.create()?;
            println!("Creating...");
            creator.next_event().await;
            if let Some(message) = creator.take_notification() {
                println!("{message}");
            }
        }
    }

    Ok(())
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Catalog => "catalog",
        Command::Gallery { .. } => "gallery",
        Command::TryOn { .. } => "try-on",
        Command::Outfits => "outfits",
        Command::Create { .. } => "create",
    }
}

async fn loaded_try_on(source: Arc<dyn CatalogSource>) -> Result<TryOnController> {
    let mut controller = TryOnController::mount(source, Handle::current());
    controller.next_event().await;
    if !controller.catalog().is_loaded() {
        error!(view = "try_on", "catalog did not load");
        bail!("catalog did not load; see the logged error for the cause");
    }
    Ok(controller)
}

fn print_items(items: &[&CatalogItem], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }
    for item in items {
        println!(
            "#{:<3} {:<24} {:<10} {:>8}  {}",
            item.id.0, item.name, item.brand, item.price, item.image_url
        );
    }
    Ok(())
}
