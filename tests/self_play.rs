//! End-to-end games: the engine against itself and against scripted play.

use tictactoe::{
    AIEngine, Board, GameSession, Heuristic, Mark, Outcome, PlayerKind, Pos, Searcher, Settings,
};

fn ai_settings(width: usize, height: usize, win_length: usize) -> Settings {
    Settings {
        grid_width: width,
        grid_height: height,
        win_length,
        player_x: PlayerKind::Ai,
        player_o: PlayerKind::Ai,
        ..Settings::default()
    }
}

#[test]
fn test_classic_grid_is_a_draw_under_perfect_play() {
    let mut searcher = Searcher::new();
    let result = searcher.search(&Board::new(3, 3, 3), Mark::X, 9);
    assert_eq!(result.score, 0.0);
    assert!(result.best_move.is_some());
}

#[test]
fn test_diagonal_scenario() {
    let board = Board::from_rows(&[[1, 0, 0], [0, 1, 0], [0, 0, 1]], 3).unwrap();
    assert!(board.has_won(Pos::new(2, 2), Mark::X));
    assert!(!board.has_won(Pos::new(2, 2), Mark::O));
}

#[test]
fn test_full_board_scenario_is_a_draw() {
    let board = Board::from_rows(&[[1, -1, 1], [-1, 1, -1], [-1, 1, -1]], 3).unwrap();
    assert!(board.is_full());
    for (pos, mark) in board.cells() {
        assert!(!board.has_won(pos, mark), "{mark} should not win at {pos}");
    }
}

#[test]
fn test_self_play_rounds_are_all_drawn() {
    let settings = ai_settings(3, 3, 3);
    let mut engine = AIEngine::from_settings(&settings);
    let mut game = GameSession::new(settings).unwrap();

    for round in 0..2 {
        if round > 0 {
            game.next_round();
        }
        while !game.is_over() {
            game.play_ai(&mut engine).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Draw);
        assert!(game.board().is_full());
    }

    let tally = game.tally();
    assert_eq!(tally.draws, 2);
    assert_eq!(tally.rounds(), 2);
}

#[test]
fn test_engine_never_loses_to_naive_opener() {
    // X always takes the first free cell in row-major order
    let settings = Settings {
        player_o: PlayerKind::Ai,
        ..Settings::default()
    };
    let mut engine = AIEngine::from_settings(&settings);
    let mut game = GameSession::new(settings).unwrap();

    while !game.is_over() {
        if game.is_ai_turn() {
            game.play_ai(&mut engine).unwrap();
        } else {
            let pos = game.board().legal_moves()[0];
            game.play(pos).unwrap();
        }
    }
    assert_ne!(game.outcome(), Outcome::Win(Mark::X));
}

#[test]
fn test_engine_sees_forced_win_after_edge_reply() {
    // After X opens in a corner and O answers on an edge, X has a forced win
    let board = Board::from_rows(&[[1, -1, 0], [0, 0, 0], [0, 0, 0]], 3).unwrap();
    let mut engine = AIEngine::new();
    let result = engine.get_move_with_stats(&board, Mark::X);
    assert!(result.is_forced_win(Mark::X));
}

#[test]
fn test_larger_grid_self_play_terminates() {
    let settings = Settings {
        depth: Some(2),
        ..ai_settings(4, 4, 3)
    };
    let mut engine = AIEngine::from_settings(&settings);
    let mut game = GameSession::new(settings).unwrap();

    while !game.is_over() {
        assert!(game.play_ai(&mut engine).unwrap().is_some());
    }

    match game.outcome() {
        Outcome::Win(mark) => {
            let line = game.winning_line().unwrap();
            assert!(line.len() >= 3);
            assert!(line.iter().all(|&pos| game.board().value_at(pos) == mark));
        }
        Outcome::Draw => assert!(game.board().is_full()),
        Outcome::InProgress => unreachable!(),
    }
    assert_eq!(game.tally().rounds(), 1);
}

#[test]
fn test_combinations_heuristic_self_play() {
    let settings = Settings {
        depth: Some(1),
        heuristic: Heuristic::Combinations,
        ..ai_settings(5, 4, 4)
    };
    let mut engine = AIEngine::from_settings(&settings);
    let mut game = GameSession::new(settings).unwrap();

    while !game.is_over() {
        game.play_ai(&mut engine).unwrap();
    }
    assert_eq!(game.tally().rounds(), 1);
}

#[test]
fn test_one_cell_win_length_ends_on_first_move() {
    let settings = ai_settings(3, 2, 1);
    let mut engine = AIEngine::from_settings(&settings);
    let mut game = GameSession::new(settings).unwrap();
    assert_eq!(game.play_ai(&mut engine).unwrap(), Some(Pos::new(0, 0)));
    assert_eq!(game.outcome(), Outcome::Win(Mark::X));
}
