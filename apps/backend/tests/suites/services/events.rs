use std::sync::Arc;

use dots_backend::build_state;
use dots_backend::domain::GameEvent;
use dots_backend::error::AppError;
use dots_backend::GameFlowService;

use crate::support::game_setup::{board_snapshot, profiles, Harness};
use crate::support::recording_sink::RecordingSink;

#[tokio::test]
async fn broadcast_subscribers_see_start_and_moves() -> Result<(), AppError> {
    let h = Harness::new();
    let mut rx = h.events.subscribe();
    let game = h.started_game(6, 9, 2).await?;

    h.flow
        .apply_move(&h.state, game.game_id, game.players[0].id, 2, 2)
        .await?;

    assert_eq!(
        rx.try_recv().expect("start event"),
        GameEvent::GameStarted {
            game_id: game.game_id
        }
    );
    match rx.try_recv().expect("move event") {
        GameEvent::MoveApplied {
            game_id,
            player_id,
            turn_count,
            actions,
        } => {
            assert_eq!(game_id, game.game_id);
            assert_eq!(player_id, game.players[0].id);
            assert_eq!(turn_count, 1);
            assert_eq!(actions.len(), 1);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(rx.try_recv().is_err());
    Ok(())
}

#[tokio::test]
async fn rejected_moves_publish_nothing() -> Result<(), AppError> {
    let h = Harness::new();
    let game = h.started_game(6, 9, 2).await?;
    let mut rx = h.events.subscribe();

    let _ = h
        .flow
        .apply_move(&h.state, game.game_id, game.players[1].id, 0, 0)
        .await
        .unwrap_err();
    assert!(rx.try_recv().is_err());
    Ok(())
}

#[tokio::test]
async fn winning_move_publishes_move_then_completion() -> Result<(), AppError> {
    let sink = Arc::new(RecordingSink::default());
    let state = build_state()
        .with_events(sink.clone())
        .build()?;
    let flow = GameFlowService::new();
    let players = profiles(2);

    let created = flow
        .create_game(&state, players[0].clone(), Some(3), Some(3))
        .await?;
    flow.join_game(&state, &created.code, players[1].clone())
        .await?;
    flow.start_game(&state, created.game_id).await?;
    state
        .boards
        .append(
            created.game_id,
            board_snapshot(3, 3, &[(0, 0, 1, 0), (0, 1, 1, 1)]),
        )
        .await?;
    state.games.save_turn_count(created.game_id, 2).await?;

    flow.apply_move(&state, created.game_id, players[0].id, 0, 0)
        .await?;

    let kinds: Vec<&'static str> = sink
        .take()
        .iter()
        .map(|event| match event {
            GameEvent::GameStarted { .. } => "started",
            GameEvent::MoveApplied { .. } => "move",
            GameEvent::GameCompleted { .. } => "completed",
        })
        .collect();
    assert_eq!(kinds, ["started", "move", "completed"]);
    Ok(())
}

#[tokio::test]
async fn check_game_end_publishes_completion_once() -> Result<(), AppError> {
    let sink = Arc::new(RecordingSink::default());
    let flow = GameFlowService::new();
    let state = build_state().with_events(sink.clone()).build()?;
    let players = profiles(2);
    let created = flow
        .create_game(&state, players[0].clone(), Some(3), Some(3))
        .await?;
    flow
        .join_game(&state, &created.code, players[1].clone())
        .await?;
    flow.start_game(&state, created.game_id).await?;
    state
        .boards
        .append(created.game_id, board_snapshot(3, 3, &[(2, 2, 1, 1)]))
        .await?;
    state.games.save_turn_count(created.game_id, 5).await?;
    sink.take();

    flow
        .check_game_end(&state, created.game_id, players[1].id)
        .await?;
    flow
        .check_game_end(&state, created.game_id, players[0].id)
        .await?;

    let events = sink.take();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        GameEvent::GameCompleted { winner_id, winner_name, .. }
            if *winner_id == players[1].id && *winner_name == players[1].name
    ));
    Ok(())
}
