pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use carinsight_core::{BodyCategory, FuelType, SortKey};

#[derive(Debug, Parser)]
#[command(
    name = "carinsight",
    about = "CarInsight vehicle catalog CLI",
    long_about = "Browse, filter and score the vehicle catalog, and chat with the rule-based recommendation assistant.",
    after_help = "Examples:\n  carinsight browse --fuel hybrid --budget-max 4000\n  carinsight ask \"출퇴근용 SUV 추천해줘\"\n  carinsight strategy --lifestyle 캠핑\n  carinsight ranking"
)]
pub struct Cli {
    #[arg(long, global = true, value_name = "PATH", help = "Catalog TOML file (defaults to the bundled catalog)")]
    catalog: Option<PathBuf>,
    #[arg(long, global = true, value_name = "PATH", help = "Config file path")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    #[arg(long, default_value_t = 1500, help = "Lower budget bound, 10,000-won units")]
    pub budget_min: u32,
    #[arg(long, default_value_t = 8000, help = "Upper budget bound, 10,000-won units")]
    pub budget_max: u32,
    #[arg(long = "fuel", value_name = "FUEL", help = "Accepted fuel types (gasoline|diesel|hybrid|ev|lpg)")]
    pub fuel_types: Vec<FuelType>,
    #[arg(long = "category", value_name = "CATEGORY", help = "Accepted body categories (sedan|suv|mpv)")]
    pub categories: Vec<BodyCategory>,
    #[arg(long = "lifestyle", value_name = "TAG", help = "Lifestyle tags (a vehicle matches if it carries any of them)")]
    pub lifestyles: Vec<String>,
    #[arg(long = "brand", value_name = "BRAND", help = "Accepted brand ids, e.g. HYUNDAI")]
    pub brands: Vec<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List catalog vehicles matching the active filters")]
    Browse {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long, default_value = "popular", help = "Sort order (popular|price)")]
        sort: SortKey,
    },
    #[command(about = "Show the three strategy picks (value, performance, trend) for the active filters")]
    Strategy {
        #[command(flatten)]
        filters: FilterArgs,
    },
    #[command(about = "Ask the assistant a single question and print its reply")]
    Ask {
        #[arg(value_name = "MESSAGE")]
        message: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    #[command(about = "Chat with the assistant interactively (EOF or `exit` to quit)")]
    Chat {
        #[command(flatten)]
        filters: FilterArgs,
    },
    #[command(about = "Show the top-5 popularity ranking")]
    Ranking,
    #[command(subcommand, about = "Inspect or toggle liked vehicles")]
    Liked(LikedCommand),
    #[command(about = "Validate a catalog file and summarize its contents")]
    Catalog {
        #[arg(value_name = "PATH", help = "Catalog file to inspect (defaults to the active catalog)")]
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
enum LikedCommand {
    #[command(about = "List liked vehicles")]
    List,
    #[command(about = "Like or unlike one vehicle by id")]
    Toggle {
        #[arg(value_name = "VEHICLE_ID")]
        id: String,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Browse { filters, sort } => {
            commands::browse::run(cli.config.as_deref(), cli.catalog.as_deref(), &filters, sort)
        }
        Command::Strategy { filters } => {
            commands::strategy::run(cli.config.as_deref(), cli.catalog.as_deref(), &filters)
        }
        Command::Ask { message, filters } => {
            commands::ask::run(cli.config.as_deref(), cli.catalog.as_deref(), &filters, &message)
        }
        Command::Chat { filters } => {
            commands::chat::run(cli.config.as_deref(), cli.catalog.as_deref(), &filters)
        }
        Command::Ranking => commands::ranking::run(cli.config.as_deref(), cli.catalog.as_deref()),
        Command::Liked(LikedCommand::List) => {
            commands::liked::list(cli.config.as_deref(), cli.catalog.as_deref())
        }
        Command::Liked(LikedCommand::Toggle { id }) => {
            commands::liked::toggle(cli.config.as_deref(), cli.catalog.as_deref(), &id)
        }
        Command::Catalog { path } => {
            commands::catalog::run(cli.config.as_deref(), cli.catalog.as_deref(), path.as_deref())
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
