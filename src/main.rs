use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use cinematch_api::{AppState, RestApi};
use cinematch_core::{Catalog, CatalogHandle, ItemId};
use cinematch_similarity::{
    FeatureWeights, RecommendResponse, Recommender, SimilarityScorer, DEFAULT_LIMIT,
};

/// Content-based movie recommendations
#[derive(Parser, Debug)]
#[command(name = "cinematch")]
#[command(about = "Recommend similar movies from a catalog", long_about = None)]
struct Args {
    /// Path to the catalog JSON document
    #[arg(short, long, default_value = "./data/movies.json", global = true)]
    catalog: PathBuf,

    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(flatten)]
    weights: WeightArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(ClapArgs, Debug)]
struct WeightArgs {
    /// Points for a shared director
    #[arg(long, default_value_t = cinematch_similarity::weights::DIRECTOR_WEIGHT, global = true)]
    director_weight: u32,

    /// Points per shared genre
    #[arg(long, default_value_t = cinematch_similarity::weights::GENRE_WEIGHT, global = true)]
    genre_weight: u32,

    /// Points per shared cast member
    #[arg(long, default_value_t = cinematch_similarity::weights::CAST_WEIGHT, global = true)]
    cast_weight: u32,

    /// Points for a shared language
    #[arg(long, default_value_t = cinematch_similarity::weights::LANGUAGE_WEIGHT, global = true)]
    language_weight: u32,
}

impl WeightArgs {
    fn to_weights(&self) -> FeatureWeights {
        FeatureWeights::new(
            self.director_weight,
            self.genre_weight,
            self.cast_weight,
            self.language_weight,
        )
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API
    Serve {
        /// HTTP API port
        #[arg(long, default_value_t = 8080)]
        http_port: u16,

        /// Recommendations returned when a request gives no limit
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
    /// Print recommendations for one item
    Recommend {
        /// Id of the source item
        #[arg(long)]
        id: ItemId,

        /// Maximum number of recommendations
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let weights = args.weights.to_weights();
    if weights.is_zero() {
        warn!("All feature weights are zero; every recommendation list will be empty");
    }
    let scorer = SimilarityScorer::new(weights);

    let catalog = Catalog::from_path(&args.catalog)?;

    match args.command {
        Command::Serve { http_port, limit } => {
            serve(catalog, Recommender::new(scorer).with_limit(limit), http_port).await
        }
        Command::Recommend { id, limit, json } => {
            print_recommendations(&catalog, Recommender::new(scorer), id, limit, json)
        }
    }
}

async fn serve(catalog: Catalog, recommender: Recommender, http_port: u16) -> anyhow::Result<()> {
    info!("Starting CineMatch v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP API port: {}", http_port);

    let state = AppState::new(CatalogHandle::new(catalog), recommender);

    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(state, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}

fn print_recommendations(
    catalog: &Catalog,
    recommender: Recommender,
    id: ItemId,
    limit: usize,
    json: bool,
) -> anyhow::Result<()> {
    let source = catalog.resolve(id)?;
    let recs = recommender.recommend_with_limit(source, catalog, limit);
    let response = RecommendResponse::new(source, &recs, catalog.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("Movies similar to \"{}\" ({})", source.title, source.year);
    if response.result.is_empty() {
        println!("No similar movies found");
        return Ok(());
    }

    for (rank, rec) in response.result.iter().enumerate() {
        println!("#{:<2} {:>3}%  {}", rank + 1, rec.score, rec.title);
        if !rec.reasons.is_empty() {
            println!("          {}", rec.reasons.join(" | "));
        }
    }
    Ok(())
}
