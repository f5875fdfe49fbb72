//! Tests for the move-history state machine.

use rewind_tictactoe::{GameError, GameState, GameStatus, MAX_SIZE, MoveError, Player, Square};

#[test]
fn test_occupied_cell_is_a_no_op() {
    let game = GameState::replay(3, &[4]).unwrap();
    let after = game.apply_move(4);
    assert_eq!(after, game);
    assert_eq!(after.history().len(), 2);
    assert_eq!(after.current_step(), 1);
}

#[test]
fn test_out_of_range_cell_is_a_no_op() {
    let game = GameState::replay(3, &[4]).unwrap();
    assert_eq!(game.apply_move(9), game);
    assert_eq!(game.apply_move(usize::MAX), game);
}

#[test]
fn test_move_after_win_is_a_no_op() {
    let game = GameState::replay(3, &[0, 1, 4, 2, 8]).unwrap();
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.apply_move(5), game);
    assert_eq!(game.try_apply_move(5), Err(MoveError::GameOver));
}

#[test]
fn test_diagonal_win_scenario() {
    let game = GameState::replay(3, &[0, 1, 4, 2, 8, 6]).unwrap();
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.current_step(), 5);
    let win = game.current().winner().unwrap();
    assert_eq!(win.player(), Player::X);
    assert_eq!(win.line(), &[0, 4, 8]);
    assert!(game.current().board().is_empty(6));
}

#[test]
fn test_row_win_rejects_later_move() {
    // X0 O4 X1 O3 X8 O5: O completes the middle row, X6 is ignored.
    let game = GameState::replay(3, &[0, 4, 1, 3, 8, 5, 6]).unwrap();
    assert_eq!(game.history().len(), 7);
    assert_eq!(game.status(), GameStatus::Won(Player::O));
    assert_eq!(game.winning_line(), Some(&[3, 4, 5][..]));
    assert_eq!(game.current().board().get(6), Some(Square::Empty));
}

#[test]
fn test_draw_scenario() {
    let game = GameState::replay(3, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
    assert_eq!(game.history().len(), 10);
    assert!(game.current().is_full());
    assert!(game.current().winner().is_none());
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "Draw: No more moves");
}

#[test]
fn test_filling_without_a_line_on_four_by_four() {
    // Rows alternate XXOO / OOXX so no row, column or diagonal is uniform.
    let cells = [0, 2, 1, 3, 6, 4, 7, 5, 8, 10, 9, 11, 14, 12, 15, 13];
    let game = GameState::replay(4, &cells).unwrap();
    assert_eq!(game.history().len(), 17);
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_jump_then_move_truncates_future() {
    let game = GameState::replay(3, &[0, 1, 2, 3, 5]).unwrap();
    assert_eq!(game.history().len(), 6);

    for k in 0..game.history().len() - 1 {
        let jumped = game.jump_to(k).unwrap();
        assert_eq!(jumped.history(), game.history());

        let cell = 8;
        let branched = jumped.apply_move(cell);
        assert_eq!(branched.history().len(), k + 2);
        assert_eq!(branched.current_step(), k + 1);
        assert_eq!(&branched.history()[..=k], &game.history()[..=k]);
        assert_eq!(branched.current().last_move().map(|m| m.cell), Some(cell));
    }
}

#[test]
fn test_jump_does_not_discard_history() {
    let game = GameState::replay(3, &[0, 1, 2]).unwrap();
    let back = game.jump_to(0).unwrap();
    assert_eq!(back.history().len(), 4);
    let forward = back.jump_to(3).unwrap();
    assert_eq!(forward, game);
}

#[test]
fn test_next_player_parity_after_jump() {
    let game = GameState::replay(3, &[0, 1, 2, 3, 5, 4]).unwrap();
    for step in 0..game.history().len() {
        let jumped = game.jump_to(step).unwrap();
        let expected = if step % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(jumped.next_player(), expected);
        assert_eq!(jumped.status(), GameStatus::InProgress { next: expected });
    }
}

#[test]
fn test_jump_out_of_range_is_rejected() {
    let game = GameState::new(3).unwrap();
    assert_eq!(
        game.jump_to(1),
        Err(GameError::StepOutOfRange { step: 1, len: 1 })
    );
}

#[test]
fn test_toggle_reversed_twice_restores_order() {
    let game = GameState::replay(3, &[4, 0, 8]).unwrap().jump_to(2).unwrap();
    let original = game.move_list();

    let reversed = game.toggle_reversed();
    let mut flipped = reversed.move_list();
    flipped.reverse();
    assert_eq!(flipped, original);
    assert_eq!(reversed.history(), game.history());
    assert_eq!(reversed.current_step(), game.current_step());

    let restored = reversed.toggle_reversed();
    assert_eq!(restored.move_list(), original);
    assert_eq!(restored, game);
}

#[test]
fn test_single_cell_game() {
    let game = GameState::new(1).unwrap().apply_move(0);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.winning_line(), Some(&[0][..]));
    assert_eq!(game.apply_move(0), game);
}

#[test]
fn test_zero_size_rejected() {
    assert_eq!(GameState::new(0), Err(GameError::InvalidSize { size: 0 }));
}

#[test]
fn test_huge_size_rejected_without_allocating() {
    let size = 1usize << 31;
    assert_eq!(GameState::new(size), Err(GameError::InvalidSize { size }));
    assert!(GameState::new(MAX_SIZE + 1).is_err());
    assert_eq!(GameState::new(MAX_SIZE).unwrap().size(), MAX_SIZE);
}

#[test]
fn test_state_serializes() {
    let game = GameState::replay(3, &[4]).unwrap();
    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["current_step"], 1);
    assert_eq!(json["history"].as_array().unwrap().len(), 2);
}
