use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use vitrine::analytics::RecordingSink;
use vitrine::layout::select_layout;
use vitrine::offer::OfferSummary;
use vitrine::widgets::Collaborators;
use vitrine::{config, output, render, types};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Product detail page renderer for static storefronts")]
#[command(long_about = "\
Product detail page renderer for static storefronts

A resolved product-details payload (JSON from your data loader) goes in,
a self-contained product page (HTML with embedded CSS) comes out. A
top-level JSON null payload is the loader's not-found signal and renders
the not-found view.

Payload shape (schema.org commerce vocabulary):

  {
    \"breadcrumbList\": { \"itemListElement\": [ {\"name\", \"item\", \"position\"} ] },
    \"product\": {
      \"productID\", \"sku\", \"gtin\", \"name\", \"description\",
      \"image\": [ {\"url\", \"alternateName\"} ],
      \"isVariantOf\": { \"productGroupID\", \"hasVariant\": [ ...products ] },
      \"offers\": { \"priceCurrency\", \"offers\": [
        {\"price\", \"listPrice\", \"seller\", \"installments\", \"availability\"}
      ] }
    }
  }

Run 'vitrine gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Page configuration file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a payload to an HTML page
    Render {
        /// Resolved product-details payload (JSON)
        payload: PathBuf,
        /// Output HTML file
        #[arg(long, default_value = "product.html")]
        output: PathBuf,
        /// Append emitted analytics events to this file, one JSON per line
        #[arg(long)]
        events: Option<PathBuf>,
    },
    /// Validate a payload and config, print what would render
    Check {
        /// Resolved product-details payload (JSON)
        payload: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            payload,
            output,
            events,
        } => {
            let page_config = config::load_config(&cli.config)?;
            let page = types::load_payload(&payload)?;
            let collaborators = Collaborators::stock();
            let sink = RecordingSink::new();

            let document =
                render::render_document(page.as_ref(), &page_config, &collaborators, &sink);
            std::fs::write(&output, document.into_string())?;

            let summary = OfferSummary::resolve(
                page.as_ref().and_then(|p| p.product.offers.as_ref()),
            );
            let layout = select_layout(
                page_config.page.layout,
                page.as_ref().map(|p| p.product.image.len()),
            );
            output::print_render_output(page.as_ref(), layout, &summary);

            if let Some(events_path) = events {
                let mut file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&events_path)?;
                for event in sink.events() {
                    writeln!(file, "{}", serde_json::to_string(&event)?)?;
                }
            }
            println!("Rendered \u{2192} {}", output.display());
        }
        Command::Check { payload } => {
            let page_config = config::load_config(&cli.config)?;
            let page = types::load_payload(&payload)?;
            let summary = OfferSummary::resolve(
                page.as_ref().and_then(|p| p.product.offers.as_ref()),
            );
            let layout = select_layout(
                page_config.page.layout,
                page.as_ref().map(|p| p.product.image.len()),
            );
            output::print_render_output(page.as_ref(), layout, &summary);
            println!("Payload is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
