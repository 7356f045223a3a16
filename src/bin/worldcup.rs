//! Command-line runner: draws and plays a whole tournament, replaying it when a
//! placeholder ends up on the podium.
//! Run with: cargo run --bin worldcup
//! Configure with env: WORLDCUP_TEAMS, WORLDCUP_ROSTER, WORLDCUP_SEED,
//! WORLDCUP_MAX_ATTEMPTS, WORLDCUP_OUTPUT (text|json), WORLDCUP_STEPWISE.

use std::error::Error;
use std::process::ExitCode;
use world_cup_sim::{
    is_podium_legitimate, play_group_day, play_knockout_round, play_until_legitimate, render,
    start_attempt, Config, OutputFormat, Tournament, TournamentError, TournamentReport,
};

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    let participants = config.participants()?;
    log::info!("Loaded {} participant(s)", participants.len());

    match config.output {
        OutputFormat::Json => {
            let (tournament, attempts) =
                play_until_legitimate(&participants, config.max_attempts, config.seed)?;
            let report = TournamentReport::from_tournament(&tournament, attempts);
            println!("{}", report.to_json()?);
            Ok(())
        }
        OutputFormat::Text => run_text(&config, &participants),
    }
}

/// Text mode plays step by step so each day and round can be printed as it happens.
fn run_text(config: &Config, participants: &[String]) -> Result<(), Box<dyn Error>> {
    for attempt in 1..=config.max_attempts {
        let mut tournament = start_attempt(participants, config.seed, attempt)?;
        println!("Initial groups:");
        print!("{}", render::groups(&tournament.groups));
        println!("Initial roster:");
        print!("{}", render::group_schedule(&tournament.group_schedule));

        play_text(&mut tournament, config.stepwise)?;

        if is_podium_legitimate(&tournament) {
            println!("Podium:");
            print!("{}", render::podium(&tournament.podium));
            return Ok(());
        }
        log::warn!(
            "Attempt {}: a placeholder reached the podium; replaying the whole tournament",
            attempt
        );
    }
    Err(Box::new(TournamentError::RetriesExhausted {
        attempts: config.max_attempts,
    }))
}

fn play_text(tournament: &mut Tournament, stepwise: bool) -> Result<(), TournamentError> {
    loop {
        let day = tournament.days_played + 1;
        let done = play_group_day(tournament)?;
        if stepwise {
            if let Some(games) = tournament.group_schedule.day(day) {
                print!("{}", render::day_schedule(day, games));
            }
            print!("{}", render::standings(&tournament.groups));
        }
        if done {
            break;
        }
    }
    if !stepwise {
        print!("{}", render::standings(&tournament.groups));
    }

    loop {
        let number = tournament.knockout.next_round_number() - 1;
        let done = play_knockout_round(tournament)?;
        if let Some(round) = tournament.knockout.round(number) {
            print!("{}", render::knockout_round(round));
        }
        if done {
            return Ok(());
        }
    }
}
