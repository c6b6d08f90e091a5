use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use pigmatch::api;
use pigmatch::models::AppConfig;
use pigmatch::server;

#[derive(Parser)]
#[command(name = "pigmatch")]
#[command(about = "CIELAB pigment-to-order matching service for production planning")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Match one pigment against an order table, without a server
    Match {
        /// Id of the pigment to match (e.g. "PIG-0001")
        #[arg(short, long)]
        pigment: String,

        /// Pigment table JSON file (seeded samples when omitted)
        #[arg(long)]
        pigments: Option<PathBuf>,

        /// Order table JSON file (seeded samples when omitted)
        #[arg(long)]
        orders: Option<PathBuf>,
    },
    /// Write sample pigment and order tables as JSON files
    Sample {
        /// Directory to write pigments.json and orders.json into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Number of sample pigments
        #[arg(long, default_value_t = 50)]
        pigments: usize,

        /// Number of sample orders
        #[arg(long, default_value_t = 30)]
        orders: usize,

        /// Seed for the pigment table
        #[arg(long, default_value_t = 42)]
        pigment_seed: u64,

        /// Seed for the order table
        #[arg(long, default_value_t = 123)]
        order_seed: u64,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pigmatch API",
        description = "CIELAB pigment-to-order matching service for production planning",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_list_pigments,
        api::handle_upload_pigments,
        api::handle_list_orders,
        api::handle_upload_orders,
        api::handle_match,
    ),
    components(schemas(
        api::PigmentTableResponse,
        api::OrderTableResponse,
        api::UploadPigmentsRequest,
        api::UploadOrdersRequest,
        api::UploadResponse,
        api::MatchRequest,
    )),
    tags(
        (name = "Tables", description = "Pigment and order table access"),
        (name = "Matching", description = "Pigment-to-orders matching and allocation")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Match {
            pigment,
            pigments,
            orders,
        }) => run_match_command(&pigment, pigments, orders),
        Some(Commands::Sample {
            output,
            pigments,
            orders,
            pigment_seed,
            order_seed,
        }) => run_sample_command(&output, pigments, orders, pigment_seed, order_seed),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Match one pigment against an order table and print the result (no server needed)
fn run_match_command(
    pigment_id: &str,
    pigments_path: Option<PathBuf>,
    orders_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    use lab_match::MatchEngine;
    use pigmatch::models::{orders_from_rows, pigments_from_rows, read_rows};
    use pigmatch::services::{sample_orders, sample_pigments};

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pigmatch=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let config = AppConfig::load(config_file.as_deref());

    let pigments = match pigments_path {
        Some(path) => pigments_from_rows(read_rows(&path)?)?,
        None => sample_pigments(config.sample.pigments, config.sample.pigment_seed),
    };
    let orders = match orders_path {
        Some(path) => orders_from_rows(read_rows(&path)?)?,
        None => sample_orders(config.sample.orders, config.sample.order_seed),
    };

    let pigment = pigments
        .iter()
        .find(|p| p.id == pigment_id)
        .ok_or_else(|| anyhow::anyhow!("Pigment {pigment_id} not found in the pigment table"))?;

    let engine = MatchEngine::new().with_top_n(config.matching.top_n);
    let result = engine.match_orders(pigment, &orders);

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

/// Write sample tables as JSON files that round-trip through table upload
fn run_sample_command(
    output: &Path,
    pigments: usize,
    orders: usize,
    pigment_seed: u64,
    order_seed: u64,
) -> anyhow::Result<()> {
    use pigmatch::models::{OrderRow, PigmentRow};
    use pigmatch::services::{sample_orders, sample_pigments};

    std::fs::create_dir_all(output)?;

    let pigment_rows: Vec<PigmentRow> = sample_pigments(pigments, pigment_seed)
        .iter()
        .map(|p| PigmentRow {
            pigment_id: Some(p.id.clone()),
            l: p.color.l,
            a: p.color.a,
            b: p.color.b,
            available_tonnage: p.available_tonnage,
        })
        .collect();
    let pigments_file = output.join("pigments.json");
    std::fs::write(&pigments_file, serde_json::to_string_pretty(&pigment_rows)?)?;
    println!(
        "Wrote {} pigments to {}",
        pigment_rows.len(),
        pigments_file.display()
    );

    let order_rows: Vec<OrderRow> = sample_orders(orders, order_seed)
        .iter()
        .map(|o| OrderRow {
            order_id: Some(o.id.clone()),
            customer_name: Some(o.customer_name.clone()),
            l: o.color.l,
            a: o.color.a,
            b: o.color.b,
            required_tonnage: o.required_tonnage,
            priority: Some(o.priority.to_string()),
        })
        .collect();
    let orders_file = output.join("orders.json");
    std::fs::write(&orders_file, serde_json::to_string_pretty(&order_rows)?)?;
    println!(
        "Wrote {} orders to {}",
        order_rows.len(),
        orders_file.display()
    );

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    // Header
    println!("Pigmatch v{VERSION} - CIELAB pigment-to-order matching");
    println!("Matches pigment batches to customer orders and plans tonnage allocation\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Resolved configuration section
    let config = AppConfig::load(config_file.as_deref().map(Path::new));
    println!("\nConfiguration:");
    println!("  matching.top_n  = {}", config.matching.top_n);
    println!(
        "  tables.pigments = {}",
        config
            .tables
            .pigments
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| format!(
                "(samples: {} records, seed {})",
                config.sample.pigments, config.sample.pigment_seed
            ))
    );
    println!(
        "  tables.orders   = {}",
        config
            .tables
            .orders
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| format!(
                "(samples: {} records, seed {})",
                config.sample.orders, config.sample.order_seed
            ))
    );

    // Commands section
    println!("\nCommands:");
    println!("  pigmatch serve    Start the HTTP server");
    println!("  pigmatch match    Match one pigment against an order table");
    println!("  pigmatch sample   Write sample pigment and order tables");
    println!("\nRun 'pigmatch --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pigmatch=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let config = AppConfig::load(config_file.as_deref());

    // Create application state and load the startup tables
    let state = server::create_app_state(&config);
    server::load_startup_tables(&state, &config).await?;

    // Build router: shared API routes plus OpenAPI documentation
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Pigmatch server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
