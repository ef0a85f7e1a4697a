use std::fmt::Write as _;
use std::process::ExitCode;

use clap::Parser;
use dots_backend::prelude::*;
use dots_backend::{build_state, EngineConfig, ErrorCode};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "terminal-play")]
#[command(about = "Hot-seat chain-reaction game in the terminal")]
struct Args {
    /// Player names in turn order (at least one)
    #[arg(default_values_t = [String::from("red"), String::from("blue")])]
    players: Vec<String>,

    /// Board width; defaults to DOTS_BOARD_WIDTH or 6
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Board height; defaults to DOTS_BOARD_HEIGHT or 9
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Emit logs as JSON lines on stderr instead of compact text
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    if args.json_logs {
        dots_backend::telemetry::init_tracing();
    } else {
        dots_backend::telemetry::init_tracing_plain();
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error [{}]: {}", e.code(), e.detail());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let config = EngineConfig::from_env()?;
    let state = build_state().with_config(config).build()?;
    let flow = GameFlowService::new();

    let profiles: Vec<PlayerProfile> = args
        .players
        .iter()
        .map(|name| PlayerProfile::new(Uuid::new_v4(), name.clone()))
        .collect();
    let Some((creator, others)) = profiles.split_first() else {
        return Err(AppError::invalid(ErrorCode::NoPlayers, "name at least one player"));
    };

    let created = flow
        .create_game(&state, creator.clone(), args.width, args.height)
        .await?;
    for player in others {
        flow.join_game(&state, &created.code, player.clone()).await?;
    }
    flow.start_game(&state, created.game_id).await?;
    info!(game_id = %created.game_id, code = %created.code, "Game ready");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut turn = 0usize;
    loop {
        let player = &profiles[turn % profiles.len()];
        let view = flow
            .get_game_state(&state, created.game_id, player.id)
            .await?;
        if view.complete {
            break;
        }

        print_board(&view.board, &view.players).await?;
        prompt(&format!(
            "{} ({}) move #{}: row col (q to quit) > ",
            player.name,
            color_label(view.ordinal),
            view.turn_count + 1
        ))
        .await?;

        let Some(line) = lines.next_line().await.map_err(io_error)? else {
            return Ok(());
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(());
        }
        let Some((row, column)) = parse_cell(line) else {
            println!("expected two numbers, e.g. `0 3`");
            continue;
        };

        match flow
            .apply_move(&state, created.game_id, player.id, row, column)
            .await
        {
            Ok(outcome) => {
                let explosions = outcome
                    .actions
                    .iter()
                    .filter(|a| a.kind == ActionKind::Exploded)
                    .count();
                if explosions > 0 {
                    println!("{explosions} explosion(s)");
                }
                if let Some(winner) = outcome.winner {
                    let view = flow
                        .get_game_state(&state, created.game_id, player.id)
                        .await?;
                    print_board(&view.board, &view.players).await?;
                    println!("{} wins after {} turns", winner.name, outcome.turn_count);
                    return Ok(());
                }
                turn += 1;
            }
            Err(e) => match e.code() {
                ErrorCode::CellIncrementError | ErrorCode::CellOutOfBounds => {
                    println!("{}", e.detail());
                }
                _ => return Err(e),
            },
        }
    }
    Ok(())
}

fn parse_cell(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace().map(str::parse::<usize>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(row)), Some(Ok(column)), None) => Some((row, column)),
        _ => None,
    }
}

fn color_label(color: Color) -> char {
    char::from_u32(u32::from(b'A') + color % 26).unwrap_or('?')
}

async fn print_board(board: &Board, players: &[String]) -> Result<(), AppError> {
    let mut out = String::new();
    out.push_str("    ");
    for column in 0..board.width() {
        let _ = write!(out, "{column:>3}");
    }
    out.push('\n');
    for (row, cells) in board.rows().iter().enumerate() {
        let _ = write!(out, "{row:>3} ");
        for cell in cells {
            match cell.owner() {
                Some(color) => {
                    let _ = write!(out, " {}{}", cell.count(), color_label(color));
                }
                None => out.push_str("  ."),
            }
        }
        out.push('\n');
    }
    for (ordinal, name) in players.iter().enumerate() {
        let _ = writeln!(out, "  {} = {name}", color_label(ordinal as Color));
    }
    prompt(&out).await
}

async fn prompt(text: &str) -> Result<(), AppError> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(text.as_bytes()).await.map_err(io_error)?;
    stdout.flush().await.map_err(io_error)
}

fn io_error(e: std::io::Error) -> AppError {
    AppError::internal(ErrorCode::Internal, format!("terminal i/o failed: {e}"))
}
