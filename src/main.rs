use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pacman_agents::agent::ai::{AIType, Evaluation};
use pacman_agents::config::AppConfig;
use pacman_agents::game_repr::Layout;
use pacman_agents::orchestrator::run_games;

/// Play Pacman with a search agent against random ghosts.
#[derive(Parser)]
#[command(name = "pacman", about = "Pacman multi-agent search")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "pacman.toml")]
    config: PathBuf,

    /// Built-in layout name or layout file
    #[arg(long, short)]
    layout: Option<String>,

    /// Agent: reflex, minimax, alphabeta or expectimax
    #[arg(long, short)]
    agent: Option<String>,

    /// Evaluation function: score or better
    #[arg(long)]
    eval: Option<String>,

    /// Search depth in plies
    #[arg(long, short)]
    depth: Option<u32>,

    /// Number of games to play
    #[arg(long, short = 'n')]
    games: Option<usize>,

    /// Agent moves before a game is abandoned
    #[arg(long)]
    max_moves: Option<usize>,

    /// Keep at most this many ghosts
    #[arg(long)]
    ghosts: Option<usize>,

    /// Seed for the random ghosts
    #[arg(long)]
    seed: Option<u64>,

    /// Print the built-in layouts and exit
    #[arg(long)]
    list_layouts: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list_layouts {
        for name in Layout::builtin_names() {
            println!("{name}");
        }
        return Ok(());
    }

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(layout) = cli.layout {
        app_config.game.layout = layout;
    }
    if let Some(agent) = cli.agent {
        app_config.agent.kind = agent.parse::<AIType>()?;
    }
    if let Some(eval) = cli.eval {
        app_config.agent.evaluation = Some(eval.parse::<Evaluation>()?);
    }
    if let Some(depth) = cli.depth {
        app_config.agent.depth = depth;
    }
    if let Some(games) = cli.games {
        app_config.game.num_games = games;
    }
    if let Some(max_moves) = cli.max_moves {
        app_config.game.max_moves = max_moves;
    }
    if cli.ghosts.is_some() {
        app_config.game.max_ghosts = cli.ghosts;
    }
    if cli.seed.is_some() {
        app_config.game.ghost_seed = cli.seed;
    }
    app_config.validate()?;

    let layout = app_config
        .layout()
        .with_context(|| format!("loading layout '{}'", app_config.game.layout))?;
    let ai_config = app_config.to_ai_config();
    ai_config.validate()?;

    log::info!(
        "{} on {} ({} ghosts), {} game(s)",
        ai_config.display_string(),
        app_config.game.layout,
        layout.num_ghosts(),
        app_config.game.num_games
    );

    let summary = run_games(
        &layout,
        &ai_config,
        app_config.game.num_games,
        app_config.game.max_moves,
        app_config.game.ghost_seed,
    )?;

    for (i, outcome) in summary.outcomes.iter().enumerate() {
        let result = if outcome.win {
            "Win"
        } else if outcome.truncated {
            "Unfinished"
        } else {
            "Loss"
        };
        println!(
            "Game {:>3}: {:<10} score {:>8.1} in {} moves",
            i + 1,
            result,
            outcome.score,
            outcome.moves
        );
    }
    println!("Average score: {:.1}", summary.average_score());
    println!(
        "Win rate:      {}/{} ({:.2})",
        summary.wins(),
        summary.games(),
        summary.win_rate()
    );
    println!("Elapsed:       {} ms", summary.elapsed_ms);
    Ok(())
}
