use dots_backend::domain::{ActionKind, BoardAction};
use dots_backend::error::AppError;
use dots_backend::ErrorCode;

use crate::support::game_setup::{board_snapshot, Harness};

#[tokio::test]
async fn corner_holds_one_charge_then_explodes_into_its_neighbors() -> Result<(), AppError> {
    let h = Harness::new();
    let game = h.started_game(6, 9, 2).await?;
    let (a, b) = (&game.players[0], &game.players[1]);

    let first = h
        .flow
        .apply_move(&h.state, game.game_id, a.id, 0, 0)
        .await?;
    assert_eq!(first.actions, vec![BoardAction::increment(0, 0, 0)]);
    assert_eq!(first.turn_count, 1);

    // B is now eligible
    h.flow
        .apply_move(&h.state, game.game_id, b.id, 8, 5)
        .await?;

    let second = h
        .flow
        .apply_move(&h.state, game.game_id, a.id, 0, 0)
        .await?;
    assert_eq!(
        second.actions,
        vec![
            BoardAction::increment(0, 0, 0),
            BoardAction::exploded(0, 0, 0),
        ]
    );
    assert_eq!(second.turn_count, 3);
    assert!(second.winner.is_none());

    let view = h.flow.get_game_state(&h.state, game.game_id, b.id).await?;
    let board = &view.board;
    assert_eq!(board.cell(0, 0).unwrap().count(), 0);
    assert_eq!(board.cell(0, 0).unwrap().owner(), None);
    for (row, column) in [(1, 0), (0, 1)] {
        let cell = board.cell(row, column).unwrap();
        assert_eq!((cell.count(), cell.owner()), (1, Some(0)));
    }
    assert_eq!(board.cell(8, 5).unwrap().owner(), Some(1));
    assert!(view.players_turn);
    Ok(())
}

#[tokio::test]
async fn cascade_log_is_breadth_first() -> Result<(), AppError> {
    let h = Harness::new();
    let game = h.started_game(3, 3, 1).await?;
    h.preload_board(
        game.game_id,
        board_snapshot(
            3,
            3,
            &[
                (0, 0, 1, 0),
                (1, 0, 2, 0),
                (0, 1, 2, 0),
                (1, 1, 3, 0),
                (2, 0, 1, 0),
            ],
        ),
    )
    .await;

    let outcome = h
        .flow
        .apply_move(&h.state, game.game_id, game.players[0].id, 0, 0)
        .await?;

    let exploded: Vec<(usize, usize)> = outcome
        .actions
        .iter()
        .filter(|a| a.kind == ActionKind::Exploded)
        .map(|a| (a.row, a.column))
        .collect();
    assert_eq!(
        exploded,
        vec![(0, 0), (1, 0), (0, 1), (2, 0), (1, 1), (0, 0), (1, 0)]
    );
    assert_eq!(outcome.actions[0], BoardAction::increment(0, 0, 0));
    // A lone player never satisfies turn_count > total_players on turn one
    assert!(outcome.winner.is_none());
    Ok(())
}

#[tokio::test]
async fn out_of_turn_move_changes_nothing() -> Result<(), AppError> {
    let h = Harness::new();
    let game = h.started_game(6, 9, 2).await?;
    let history_before = h.boards.history_len(game.game_id);

    let err = h
        .flow
        .apply_move(&h.state, game.game_id, game.players[1].id, 4, 4)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotPlayersTurn);
    assert_eq!(err.status(), 409);

    assert_eq!(h.game(game.game_id).await.turn_count, 0);
    assert_eq!(h.boards.history_len(game.game_id), history_before);
    let view = h
        .flow
        .get_game_state(&h.state, game.game_id, game.players[0].id)
        .await?;
    assert_eq!(view.board.total_charge(), 0);
    Ok(())
}

#[tokio::test]
async fn foreign_cell_is_rejected_without_advancing() -> Result<(), AppError> {
    let h = Harness::new();
    let game = h.started_game(6, 9, 2).await?;
    let (a, b) = (&game.players[0], &game.players[1]);
    h.flow
        .apply_move(&h.state, game.game_id, a.id, 3, 3)
        .await?;
    let history_before = h.boards.history_len(game.game_id);

    let err = h
        .flow
        .apply_move(&h.state, game.game_id, b.id, 3, 3)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::CellIncrementError);
    assert_eq!(h.game(game.game_id).await.turn_count, 1);
    assert_eq!(h.boards.history_len(game.game_id), history_before);

    // Still B's turn
    h.flow
        .apply_move(&h.state, game.game_id, b.id, 2, 2)
        .await?;
    Ok(())
}

#[tokio::test]
async fn off_board_target_is_a_validation_error() -> Result<(), AppError> {
    let h = Harness::new();
    let game = h.started_game(6, 9, 2).await?;

    let err = h
        .flow
        .apply_move(&h.state, game.game_id, game.players[0].id, 9, 0)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::CellOutOfBounds);
    assert_eq!(err.status(), 422);
    assert_eq!(h.game(game.game_id).await.turn_count, 0);
    Ok(())
}

#[tokio::test]
async fn move_errors_for_missing_or_unready_games() -> Result<(), AppError> {
    let h = Harness::new();
    let lobby = h.lobby_game(6, 9, 2).await?;
    let player = lobby.players[0].id;

    let err = h
        .flow
        .apply_move(&h.state, lobby.game_id, player, 0, 0)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotStarted);

    let err = h
        .flow
        .apply_move(&h.state, uuid::Uuid::new_v4(), player, 0, 0)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);
    assert_eq!(err.status(), 404);

    h.flow.start_game(&h.state, lobby.game_id).await?;
    let stranger = uuid::Uuid::new_v4();
    let err = h
        .flow
        .apply_move(&h.state, lobby.game_id, stranger, 0, 0)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::PlayerNotFound);
    Ok(())
}

#[tokio::test]
async fn damaged_board_history_is_reported() -> Result<(), AppError> {
    let h = Harness::new();
    let game = h.started_game(3, 3, 1).await?;
    h.preload_board(game.game_id, "{not a board".into()).await;

    let err = h
        .flow
        .apply_move(&h.state, game.game_id, game.players[0].id, 0, 0)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::MalformedBoardData);
    assert_eq!(err.status(), 500);
    assert_eq!(h.game(game.game_id).await.turn_count, 0);
    Ok(())
}

#[tokio::test]
async fn started_game_without_snapshot_is_reported() -> Result<(), AppError> {
    use dots_backend::repos::Game;

    let h = Harness::new();
    let players = crate::support::game_setup::profiles(1);
    let game = Game::new(uuid::Uuid::new_v4(), "NOBOARD".into(), 3, 3);
    let game_id = game.id;
    h.state.games.create(game).await?;
    h.state.roster.join(game_id, players[0].clone()).await?;
    h.state.games.save_started(game_id).await?;

    let err = h
        .flow
        .apply_move(&h.state, game_id, players[0].id, 0, 0)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoGameStateFound);
    Ok(())
}
