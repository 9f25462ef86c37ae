use clap::{Args, Parser, Subcommand};
use rating_cli::config::RatingsConfig;
use rating_cli::input;
use rating_cli::output::{self, ExpectedReport, OutputFormat, PerformanceReport};
use rating_core::{GameOutcome, PlayerContext, UscfProfile};
use rating_engine::expected::{expected_score, STANDARD_SCALE};
use rating_engine::{Ecf, Fide, PerformanceRatings, RatingResult, RatingSystem, Uscf};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "rating-calc")]
#[command(about = "Chess rating-change calculator for US Chess, FIDE and ECF")]
struct Cli {
    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log calculation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Rating and history before the session.
#[derive(Args, Debug)]
struct PlayerArgs {
    /// Current rating (0 if unrated)
    #[arg(short, long)]
    rating: i32,

    /// Rated games played before this session
    #[arg(short = 'n', long = "prior-games", default_value = "0")]
    prior_games: u32,
}

impl PlayerArgs {
    fn context(&self) -> PlayerContext {
        PlayerContext::new(self.rating, self.prior_games)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a US Chess rating change
    Uscf {
        #[command(flatten)]
        player: PlayerArgs,
        /// Do not apply bonus points
        #[arg(long)]
        no_bonus: bool,
        /// Highest rating ever achieved (sets the rating floor)
        #[arg(long)]
        highest: Option<i32>,
        /// Player's age
        #[arg(long)]
        age: Option<u32>,
        /// FIDE rating, used to seed an unrated player
        #[arg(long)]
        fide: Option<i32>,
        /// CFC rating, used to seed an unrated player
        #[arg(long)]
        cfc: Option<i32>,
        /// Player holds the Life Master title
        #[arg(long)]
        life_master: bool,
        /// Games as RATING:RESULT[:NAME], e.g. 1450:w 1500:d:Smith 1380:l.
        /// Unnamed games at the same rating count as one opponent for the
        /// bonus; add :NAME to tell them apart
        games: Vec<GameOutcome>,
    },
    /// Calculate a FIDE rating change
    Fide {
        #[command(flatten)]
        player: PlayerArgs,
        /// Games as RATING:RESULT[:NAME]
        games: Vec<GameOutcome>,
    },
    /// Calculate an ECF rating change, game by game
    Ecf {
        /// Current ECF rating
        #[arg(short, long)]
        rating: i32,
        /// K-factor, 40 or 20 (overrides the config file)
        #[arg(short, long)]
        k: Option<u32>,
        /// Games as RATING:RESULT[:NAME]
        games: Vec<GameOutcome>,
    },
    /// Expected score against a single opponent
    Expected {
        /// Player's rating
        #[arg(short, long)]
        rating: i32,
        /// Opponent's rating
        #[arg(short, long)]
        opponent: i32,
        /// Logistic scale: 400, or 50 for ECF ratings
        #[arg(long, default_value_t = STANDARD_SCALE)]
        scale: f64,
    },
    /// Performance rating from an aggregate score
    Performance {
        /// Average opponent rating
        #[arg(short, long)]
        average: i32,
        /// Points scored
        #[arg(short, long)]
        score: f64,
        /// Games played
        #[arg(short, long)]
        games: u32,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn rate<S: RatingSystem>(system: S, request: &S::Request) -> RatingResult {
    tracing::debug!("Calculating {} rating change", system.federation());
    let result = system.rate(request);
    let summary = result.summary();
    tracing::debug!(
        "Expected {:.2}, actual {}, K {:.2}, base change {:.2}",
        summary.expected_score,
        summary.actual_score,
        summary.k_factor,
        summary.base_rating_change
    );
    result
}

fn run(cli: Cli, config: RatingsConfig) -> anyhow::Result<String> {
    let format = cli.format.unwrap_or(config.format);

    let rendered = match cli.command {
        Commands::Uscf {
            player,
            no_bonus,
            highest,
            age,
            fide,
            cfc,
            life_master,
            games,
        } => {
            let profile = UscfProfile {
                highest_achieved_rating: highest,
                age,
                fide_rating: fide,
                cfc_rating: cfc,
                is_life_master: life_master,
            };
            let apply_bonus = config.uscf.apply_bonus && !no_bonus;
            let request = input::uscf_request(player.context(), profile, games, apply_bonus)?;
            if request.player.is_unrated() {
                tracing::info!("Unrated player; assigning an initial rating");
            }
            let result = rate(Uscf, &request);
            output::render(format, &result, output::rating_text)?
        }
        Commands::Fide { player, games } => {
            let request = input::fide_request(player.context(), games)?;
            let result = rate(Fide, &request);
            if result.summary().is_provisional {
                tracing::info!("Fewer than 5 games in total; no FIDE rating yet");
            }
            output::render(format, &result, output::rating_text)?
        }
        Commands::Ecf { rating, k, games } => {
            let k = k.unwrap_or_else(|| config.ecf.k_factor.value());
            let request = input::ecf_request(rating, games, k)?;
            let result = rate(Ecf, &request);
            output::render(format, &result, output::rating_text)?
        }
        Commands::Expected {
            rating,
            opponent,
            scale,
        } => {
            input::expected_query(rating, opponent, scale)?;
            let report = ExpectedReport {
                rating,
                opponent_rating: opponent,
                scale,
                expected_score: expected_score(rating, opponent, scale),
            };
            output::render(format, &report, output::expected_text)?
        }
        Commands::Performance {
            average,
            score,
            games,
        } => {
            let session = input::session_score(average, score, games)?;
            let report = PerformanceReport {
                average_opponent: average,
                score,
                games,
                estimates: PerformanceRatings::estimate(&session),
            };
            output::render(format, &report, output::performance_text)?
        }
    };

    Ok(rendered)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = RatingsConfig::load(cli.config.as_deref())?;
    tracing::debug!("Loaded config: {:?}", config);

    let rendered = run(cli, config)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
