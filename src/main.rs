//! # Hangtag CLI
//!
//! Command-line interface for product label printing.
//!
//! ## Usage
//!
//! ```bash
//! # Show the code values for a SKU
//! hangtag encode "A00001_ffffff_S"
//!
//! # Save a barcode as PNG
//! hangtag render A00001_ffffff_S --png barcode.png --width 250 --height 40
//!
//! # Build a print document from a product file
//! hangtag labels --input products.json --out labels.html
//!
//! # Build a print document from the storefront backend
//! hangtag labels --catalog https://shop.example/api --id A00001 --id A00002 --out labels.html
//!
//! # Run the HTTP server
//! hangtag serve --listen 0.0.0.0:8080
//! ```

use clap::{Parser, Subcommand};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::path::PathBuf;

use hangtag::{
    HangtagError, LabelConfig, PrintDocument,
    barcode::{ChecksumSymbol, Encoder, sanitize},
    catalog::{FileCatalog, HttpCatalog, ProductSource},
    label::QrSource,
    render::{BarcodeSize, barcode},
    server::{self, ServerConfig},
};

/// Hangtag - product label printing utility
#[derive(Parser, Debug)]
#[command(name = "hangtag")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show how a string encodes as Code 128
    Encode {
        /// Data to encode (sanitized first)
        text: String,

        /// Checksum symbol mode: table-key or code-value
        #[arg(long, default_value = "table-key")]
        checksum: ChecksumSymbol,
    },

    /// Render a barcode to a PNG file
    Render {
        /// Data to encode (sanitized first)
        text: String,

        /// Output PNG file
        #[arg(long, value_name = "FILE")]
        png: PathBuf,

        /// Width in pixels
        #[arg(long, default_value = "250")]
        width: u32,

        /// Height in pixels
        #[arg(long, default_value = "40")]
        height: u32,

        /// Checksum symbol mode: table-key or code-value
        #[arg(long, default_value = "table-key")]
        checksum: ChecksumSymbol,
    },

    /// Build an HTML print document for a batch of products
    Labels {
        /// JSON file with an array of products
        #[arg(long, value_name = "FILE", conflicts_with = "catalog")]
        input: Option<PathBuf>,

        /// Storefront backend base URL
        #[arg(long, value_name = "URL")]
        catalog: Option<String>,

        /// Product IDs to print (repeatable; all products in --input if omitted)
        #[arg(long = "id", value_name = "ID")]
        ids: Vec<String>,

        /// Output HTML file
        #[arg(long, value_name = "FILE")]
        out: PathBuf,

        /// Label config file (JSON)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Render QR codes locally instead of linking a QR service
        #[arg(long)]
        embedded_qr: bool,

        /// Do not open the print dialog when the document loads
        #[arg(long)]
        no_auto_print: bool,
    },

    /// Run the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,

        /// Storefront backend base URL
        #[arg(long, value_name = "URL")]
        catalog: Option<String>,

        /// Label config file (JSON)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

/// Writes log records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let level = match record.level() {
                Level::Error => "error",
                Level::Warn => "warn",
                Level::Info => "info",
                Level::Debug => "debug",
                Level::Trace => "trace",
            };
            eprintln!("[{}] {}", level, record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        });
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), HangtagError> {
    match command {
        Commands::Encode { text, checksum } => {
            let sanitized = sanitize(&text);
            let message = Encoder::with_checksum_symbol(checksum).encode(&sanitized);

            println!("Input:     {:?}", text);
            println!("Sanitized: {:?}", message.data());
            if let Some(symbol) = message.checksum_symbol() {
                println!("Checksum:  {} (symbol {})", message.checksum(), symbol);
            }
            println!(
                "Values:    {}",
                message
                    .values()
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            println!("Modules:   {}", message.modules()?);
        }

        Commands::Render {
            text,
            png,
            width,
            height,
            checksum,
        } => {
            if width == 0 || height == 0 {
                return Err(HangtagError::Config(format!(
                    "barcode size must be positive, got {}x{}",
                    width, height
                )));
            }
            let message = Encoder::with_checksum_symbol(checksum).encode_sanitized(&text);
            let canvas = barcode::render(&message, BarcodeSize::new(width, height))?;
            canvas.save(&png)?;
            println!("Saved {}x{} barcode for {:?} to {}", width, height, message.data(), png.display());
        }

        Commands::Labels {
            input,
            catalog,
            ids,
            out,
            config,
            embedded_qr,
            no_auto_print,
        } => {
            let mut label_config = load_config(config.as_ref())?;
            apply_label_flags(&mut label_config, embedded_qr, no_auto_print);

            let source: Box<dyn ProductSource> = match (input, catalog) {
                (Some(path), _) => Box::new(FileCatalog::new(path)),
                (None, Some(url)) => {
                    if ids.is_empty() {
                        return Err(HangtagError::Config(
                            "--catalog needs at least one --id".to_string(),
                        ));
                    }
                    Box::new(HttpCatalog::new(&url)?)
                }
                (None, None) => {
                    return Err(HangtagError::Config(
                        "either --input or --catalog is required".to_string(),
                    ));
                }
            };

            let products = runtime()?.block_on(source.products(&ids))?;
            let doc = PrintDocument::assemble(&products, &label_config);
            doc.save(&out)?;

            println!(
                "Wrote {} labels ({} invalid) to {}",
                doc.labels.len(),
                doc.invalid_count(),
                out.display()
            );
        }

        Commands::Serve {
            listen,
            catalog,
            config,
        } => {
            let server_config = ServerConfig {
                listen_addr: listen,
                catalog_url: catalog,
                label: load_config(config.as_ref())?,
            };
            runtime()?.block_on(server::serve(server_config))?;
        }
    }

    Ok(())
}

/// Apply `labels` flags on top of the loaded config.
fn apply_label_flags(config: &mut LabelConfig, embedded_qr: bool, no_auto_print: bool) {
    if embedded_qr {
        config.qr = QrSource::Embedded;
    }
    if no_auto_print {
        config.auto_print = false;
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<LabelConfig, HangtagError> {
    match path {
        Some(path) => LabelConfig::load(path),
        None => Ok(LabelConfig::default()),
    }
}

fn runtime() -> Result<tokio::runtime::Runtime, HangtagError> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(HangtagError::Io)
}
