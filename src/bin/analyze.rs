//! Normal-form game analysis CLI.
//!
//! Usage:
//!   cargo run --release --bin analyze -- [OPTIONS]
//!
//! Options:
//!   --game <NAME>        Catalog game (prisoners_dilemma, battle_of_the_sexes,
//!                        matching_pennies)
//!   --spec <FILE>        JSON GameSpec file instead of a catalog game
//!   --normalize          Rescale payoffs to [0, 1] before analyzing
//!   --json <FILE>        Also write the full report as JSON
//!
//! The binary is a thin display layer: it builds a game, hands it to the
//! analyzer, and renders whatever comes back.

use std::env;
use std::error::Error;
use std::fs;
use std::process;
use std::time::Duration;

use indicatif::ProgressBar;

use normal_form_analyzer::analysis::{
    AnalysisReport, Game, GameAnalyzer, GameSpec, PlayerReport, Profile,
};
use normal_form_analyzer::games::{classic, prep};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    let mut game_name: Option<String> = None;
    let mut spec_file: Option<String> = None;
    let mut normalize = false;
    let mut json_out: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--game" | "-g" => {
                i += 1;
                if i < args.len() {
                    game_name = Some(args[i].clone());
                }
            }
            "--spec" | "-s" => {
                i += 1;
                if i < args.len() {
                    spec_file = Some(args[i].clone());
                }
            }
            "--normalize" => {
                normalize = true;
            }
            "--json" => {
                i += 1;
                if i < args.len() {
                    json_out = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                return Err(format!("unknown argument: {}", other).into());
            }
        }
        i += 1;
    }

    let mut game = load_game(game_name.as_deref(), spec_file.as_deref())?;
    if normalize {
        game = prep::normalize(&game);
    }

    println!("game with {} players, shape {:?}", game.num_players(), game.shape());
    for player in game.players() {
        println!("  player {}: {}", player.id, player.strategies.join(", "));
    }

    let report = build_report(&game)?;
    print_report(&game, &report)?;

    if let Some(path) = json_out {
        fs::write(&path, serde_json::to_string_pretty(&report)?)?;
        println!("\nreport written to {}", path);
    }

    Ok(())
}

fn print_usage() {
    println!("analyze - pure-strategy solution concepts for normal-form games");
    println!();
    println!("  --game <NAME>   catalog game ({})", classic::NAMES.join(", "));
    println!("  --spec <FILE>   JSON GameSpec file");
    println!("  --normalize     rescale payoffs to [0, 1] first");
    println!("  --json <FILE>   also write the report as JSON");
}

fn load_game(game_name: Option<&str>, spec_file: Option<&str>) -> Result<Game, Box<dyn Error>> {
    match (game_name, spec_file) {
        (Some(name), None) => classic::by_name(name)
            .ok_or_else(|| format!("unknown catalog game: {}", name).into()),
        (None, Some(path)) => {
            let text = fs::read_to_string(path)?;
            let spec: GameSpec = serde_json::from_str(&text)?;
            Ok(spec.build()?)
        }
        (None, None) => {
            println!("no game given, defaulting to --game prisoners_dilemma\n");
            Ok(classic::prisoners_dilemma())
        }
        (Some(_), Some(_)) => Err("use either --game or --spec, not both".into()),
    }
}

fn build_report(game: &Game) -> Result<AnalysisReport, Box<dyn Error>> {
    let analyzer = GameAnalyzer::new(game);
    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(100));

    spinner.set_message("enumerating Nash equilibria");
    let nash_equilibria = analyzer.nash_equilibria();

    spinner.set_message("comparing profiles for Pareto optimality");
    let pareto_optimal = analyzer.pareto_optimal_profiles();

    spinner.set_message("eliminating dominated strategies");
    let elimination_strict = analyzer.elimination_with_trace(true);
    let elimination_weak = analyzer.elimination_with_trace(false);

    spinner.set_message("per-player dominance and security");
    let mut players = Vec::with_capacity(game.num_players());
    for player in game.players() {
        players.push(PlayerReport {
            player: player.id,
            dominance: analyzer.dominant_strategies(player.id)?,
            security: analyzer.security_level(player.id)?,
        });
    }
    spinner.finish_and_clear();

    Ok(AnalysisReport {
        players,
        nash_equilibria,
        pareto_optimal,
        elimination_strict,
        elimination_weak,
    })
}

fn print_report(game: &Game, report: &AnalysisReport) -> Result<(), Box<dyn Error>> {
    println!("\n=== Nash equilibria (pure strategies) ===");
    if report.nash_equilibria.is_empty() {
        println!("  none");
    }
    for profile in &report.nash_equilibria {
        println!("  {}", describe_profile(game, profile)?);
    }

    println!("\n=== Pareto-optimal profiles ===");
    for profile in &report.pareto_optimal {
        println!("  {}", describe_profile(game, profile)?);
    }

    println!("\n=== Dominance and security ===");
    for entry in &report.players {
        println!("  player {}:", entry.player);
        print_strategy_set(game, entry.player, "strictly dominant", &entry.dominance.strict)?;
        print_strategy_set(game, entry.player, "weakly dominant", &entry.dominance.weak)?;
        println!(
            "    security level: {:.2} playing {}",
            entry.security.value,
            game.strategy_name(entry.player, entry.security.strategy)?
        );
    }

    println!("\n=== Iterated elimination (strict) ===");
    for event in &report.elimination_strict.trace {
        println!("  {}", event);
    }
    if report.elimination_strict.trace.is_empty() {
        println!("  nothing to eliminate");
    }
    println!("  surviving profiles:");
    for profile in &report.elimination_strict.profiles {
        println!("    {}", describe_profile(game, profile)?);
    }

    Ok(())
}

fn print_strategy_set(
    game: &Game,
    player: u32,
    label: &str,
    indices: &[usize],
) -> Result<(), Box<dyn Error>> {
    if indices.is_empty() {
        println!("    no {} strategy", label);
    } else {
        let names: Result<Vec<&str>, _> = indices
            .iter()
            .map(|&s| game.strategy_name(player, s))
            .collect();
        println!("    {}: {}", label, names?.join(", "));
    }
    Ok(())
}

fn describe_profile(game: &Game, profile: &Profile) -> Result<String, Box<dyn Error>> {
    let names: Result<Vec<&str>, _> = game
        .players()
        .iter()
        .zip(profile)
        .map(|(player, &s)| game.strategy_name(player.id, s))
        .collect();
    Ok(format!("{:?}: {}", profile, names?.join(", ")))
}
