//! Tests for full games played through `GameState`.

use arcade_core::{Difficulty, seeded_rng};
use arcade_tictactoe::{
    COMPUTER, GameMode, GameState, GameStatus, MoveError, Player, Position, random_move,
};

#[test]
fn test_pvp_draw() {
    let moves = [
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::TopCenter,
        Position::BottomCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomRight,
        Position::BottomLeft,
    ];
    let mut game = GameState::new(GameMode::PvP, Difficulty::Easy);
    for pos in moves {
        game = game.place(pos).expect("legal move");
    }
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.result_message().as_deref(), Some("Game is Draw"));
}

#[test]
fn test_pvc_games_always_terminate() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        for seed in 0..50 {
            let mut rng = seeded_rng(Some(seed));
            let mut game = GameState::new(GameMode::PvC, difficulty);
            while !game.status().is_over() {
                let pos = random_move(game.board(), &mut rng).expect("board not full");
                game = game.click(pos, &mut rng).expect("legal click");
            }
            assert!(game.history().len() <= 9);
            assert!(game.history().len() >= 5);
            // Marks alternate starting with O.
            for (i, mv) in game.history().iter().enumerate() {
                let expected = if i % 2 == 0 { Player::O } else { COMPUTER };
                assert_eq!(mv.player(), expected);
            }
            assert!(game.result_message().is_some());
        }
    }
}

#[test]
fn test_hard_computer_wins_when_player_ignores_it() {
    let mut rng = seeded_rng(Some(0));
    let game = GameState::new(GameMode::PvC, Difficulty::Hard);
    // Computer takes B2, then A1 (first corner), then finishes the diagonal.
    let game = game.click(Position::TopCenter, &mut rng).unwrap();
    let game = game.click(Position::MiddleLeft, &mut rng).unwrap();
    let game = game.click(Position::BottomCenter, &mut rng).unwrap();
    assert_eq!(game.status(), GameStatus::Won(COMPUTER));
    assert_eq!(game.result_message().as_deref(), Some("Computer Wins!"));
    assert_eq!(game.click(Position::MiddleRight, &mut rng), Err(MoveError::GameOver));
}

#[test]
fn test_reset_clears_board() {
    let mut rng = seeded_rng(Some(0));
    let game = GameState::new(GameMode::PvC, Difficulty::Hard)
        .click(Position::TopLeft, &mut rng)
        .unwrap()
        .reset();
    assert!(game.history().is_empty());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.mode(), GameMode::PvC);
    assert_eq!(game.difficulty(), Difficulty::Hard);
}
