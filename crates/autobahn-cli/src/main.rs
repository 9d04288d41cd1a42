mod render;

use autobahn_api::{AutobahnClient, LoadReport, ResourceKind};
use autobahn_core::AppConfig;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "autobahn-cli")]
#[command(about = "Road status of the German autobahn network")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load every road and print a paginated status table (the default).
    Status(StatusArgs),
    /// List the road identifiers known to the API.
    Roads,
    /// Print a single roadwork, warning, closure, parking area, or station.
    Details {
        /// Resource kind, e.g. `closure` or `electric_charging_station`.
        kind: ResourceKind,
        /// Entry identifier as returned in a resource list.
        id: String,
    },
}

#[derive(Debug, Args)]
struct StatusArgs {
    /// 1-based page to print.
    #[arg(long, default_value_t = 1, value_parser = parse_positive)]
    page: usize,
    #[arg(long, default_value_t = render::DEFAULT_PAGE_SIZE, value_parser = parse_positive)]
    page_size: usize,
    /// Print the detail rows of this road below the table.
    #[arg(long)]
    expand: Option<String>,
    /// Print every summary as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

impl Default for StatusArgs {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: render::DEFAULT_PAGE_SIZE,
            expand: None,
            json: false,
        }
    }
}

fn parse_positive(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = autobahn_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = AutobahnClient::new(&config)?;
    tracing::debug!(env = %config.env, base_url = %config.base_url, "client ready");

    match cli.command {
        Some(Commands::Status(args)) => run_status(&client, &config, &args).await,
        None => run_status(&client, &config, &StatusArgs::default()).await,
        Some(Commands::Roads) => {
            for road in client.fetch_road_list().await? {
                println!("{road}");
            }
            Ok(())
        }
        Some(Commands::Details { kind, id }) => {
            let entry = client.fetch_details(kind, &id).await?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
            Ok(())
        }
    }
}

async fn run_status(
    client: &AutobahnClient,
    config: &AppConfig,
    args: &StatusArgs,
) -> anyhow::Result<()> {
    let load = autobahn_api::load_all_with_limit(client, config.max_concurrent_roads);
    let report = tokio::select! {
        report = load => report?,
        () = interrupted() => {
            tracing::info!("interrupted, discarding load results");
            return Ok(());
        }
    };
    print_report(&report, args)
}

fn print_report(report: &LoadReport, args: &StatusArgs) -> anyhow::Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.summaries)?);
        return Ok(());
    }

    let view = render::paginate(&report.summaries, args.page, args.page_size);
    print!("{}", render::render_table(&view));
    println!("{}", render::render_footer(&view, report.failed_roads.len()));

    if let Some(road) = &args.expand {
        let Some(summary) = report.summaries.iter().find(|s| &s.name == road) else {
            anyhow::bail!("road '{road}' is not in the loaded report");
        };
        println!();
        print!("{}", render::render_details(summary));
    }
    Ok(())
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
