use clap::{Parser, Subcommand, ValueEnum};
use faceflow::{
    adapters::{FileStore, MemoryStore, RedisStore},
    config::Config,
    controllers::{get_or_create_identifier, prepare_license_request},
    models::{LicenseRegion, LicenseRequest},
    ports::KeyValueStore,
};
use std::path::PathBuf;
use std::process::ExitCode;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "faceflow", about = "Install identifier and license request helper")]
struct Cli {
    /// Where the install identifier is kept.
    #[arg(long, value_enum, default_value_t = StoreKind::File)]
    store: StoreKind,

    /// Settings file for the file store (defaults to FACEFLOW_STORE_PATH).
    #[arg(long)]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum StoreKind {
    Memory,
    File,
    Redis,
}

#[derive(Subcommand)]
enum Command {
    /// Print the install identifier, creating it if needed.
    Id,
    /// Print the license request the SDK would send.
    License {
        #[arg(long, value_enum, default_value_t = LicenseRegion::Cn)]
        region: LicenseRegion,
        #[arg(long)]
        duration: Option<String>,
        #[arg(long)]
        show_secret: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    pretty_env_logger::init();

    let cli = Cli::parse();
    let mut config = Config::new();
    if let Some(path) = cli.path.clone() {
        config.store_path = path;
    }

    let result = match cli.store {
        StoreKind::Memory => run(&cli.command, &config, &MemoryStore::new()).await,
        StoreKind::File => run(&cli.command, &config, &FileStore::new(&config.store_path)).await,
        StoreKind::Redis => match RedisStore::connect(&config.redis_url).await {
            Ok(store) => run(&cli.command, &config, &store).await,
            Err(e) => Err(e.into()),
        },
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run<S: KeyValueStore>(
    command: &Command,
    config: &Config,
    store: &S,
) -> Result<String, BoxError> {
    match command {
        Command::Id => Ok(get_or_create_identifier(store).await?),
        Command::License {
            region,
            duration,
            show_secret,
        } => {
            let mut request = prepare_license_request(config, *region, store).await?;
            if let Some(duration) = duration {
                request.duration = duration.clone();
            }
            let request: LicenseRequest = if *show_secret {
                request
            } else {
                request.redacted()
            };
            Ok(serde_json::to_string_pretty(&request)?)
        }
    }
}
