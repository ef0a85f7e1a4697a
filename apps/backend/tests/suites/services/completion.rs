use dots_backend::domain::BoardAction;
use dots_backend::error::AppError;
use dots_backend::ErrorCode;
use uuid::Uuid;

use crate::support::game_setup::{board_snapshot, Harness};

/// A holds the top-left corner at capacity, B one charge on the edge next to it.
fn capture_board() -> String {
    board_snapshot(3, 3, &[(0, 0, 1, 0), (0, 1, 1, 1)])
}

#[tokio::test]
async fn capturing_move_after_full_round_wins() -> Result<(), AppError> {
    let h = Harness::new();
    let game = h.started_game(3, 3, 2).await?;
    let (a, b) = (&game.players[0], &game.players[1]);
    h.preload_board(game.game_id, capture_board()).await;
    h.set_turn_count(game.game_id, 2).await;

    let outcome = h
        .flow
        .apply_move(&h.state, game.game_id, a.id, 0, 0)
        .await?;
    assert_eq!(
        outcome.actions,
        vec![
            BoardAction::increment(0, 0, 0),
            BoardAction::exploded(0, 0, 0),
        ]
    );
    assert_eq!(outcome.turn_count, 3);
    let winner = outcome.winner.expect("move ends the game");
    assert_eq!(winner.player_id, a.id);
    assert_eq!(winner.name, a.name);

    let stored = h.game(game.game_id).await;
    assert!(stored.complete);
    assert_eq!(stored.winner, Some(a.id));

    let check = h.flow.check_game_end(&h.state, game.game_id, b.id).await?;
    assert!(check.ended);
    assert_eq!(check.winner.as_deref(), Some(a.name.as_str()));

    let err = h
        .flow
        .apply_move(&h.state, game.game_id, b.id, 2, 2)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameComplete);

    let view = h.flow.get_game_state(&h.state, game.game_id, b.id).await?;
    assert!(view.complete);
    assert!(!view.players_turn);
    Ok(())
}

#[tokio::test]
async fn single_color_board_does_not_end_before_everyone_moved() -> Result<(), AppError> {
    let h = Harness::new();
    let game = h.started_game(3, 3, 2).await?;
    let (a, b) = (&game.players[0], &game.players[1]);
    h.preload_board(game.game_id, capture_board()).await;

    let outcome = h
        .flow
        .apply_move(&h.state, game.game_id, a.id, 0, 0)
        .await?;
    assert_eq!(outcome.turn_count, 1);
    assert!(outcome.winner.is_none());

    let view = h.flow.get_game_state(&h.state, game.game_id, a.id).await?;
    assert!(view.board.is_complete());
    assert!(!view.complete);

    let check = h.flow.check_game_end(&h.state, game.game_id, a.id).await?;
    assert!(!check.ended);
    assert_eq!(check.winner, None);

    let outcome = h
        .flow
        .apply_move(&h.state, game.game_id, b.id, 2, 2)
        .await?;
    assert_eq!(outcome.turn_count, 2);
    assert!(outcome.winner.is_none());
    Ok(())
}

#[tokio::test]
async fn check_game_end_closes_a_decided_game() -> Result<(), AppError> {
    let h = Harness::new();
    let game = h.started_game(3, 3, 2).await?;
    let (a, b) = (&game.players[0], &game.players[1]);
    h.preload_board(game.game_id, board_snapshot(3, 3, &[(1, 1, 2, 0)]))
        .await;
    h.set_turn_count(game.game_id, 3).await;

    let check = h.flow.check_game_end(&h.state, game.game_id, a.id).await?;
    assert!(check.ended);
    assert_eq!(check.winner.as_deref(), Some(a.name.as_str()));
    assert!(h.game(game.game_id).await.complete);

    // Later callers see the recorded winner, not themselves
    let again = h.flow.check_game_end(&h.state, game.game_id, b.id).await?;
    assert_eq!(again.winner.as_deref(), Some(a.name.as_str()));
    Ok(())
}

#[tokio::test]
async fn check_game_end_before_play() -> Result<(), AppError> {
    let h = Harness::new();
    let game = h.lobby_game(6, 9, 2).await?;

    let check = h
        .flow
        .check_game_end(&h.state, game.game_id, game.players[0].id)
        .await?;
    assert!(!check.ended);

    let err = h
        .flow
        .check_game_end(&h.state, game.game_id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::PlayerNotFound);

    let err = h
        .flow
        .check_game_end(&h.state, Uuid::new_v4(), game.players[0].id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);
    Ok(())
}
