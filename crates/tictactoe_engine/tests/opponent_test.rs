//! Tests for the heuristic opponent.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_engine::{
    Actor, Board, Cell, GameState, Position, ScriptedSelector, WIN_LINES, select_move,
};

const X: Cell = Cell::Marked(Actor::Player);
const O: Cell = Cell::Marked(Actor::Opponent);
const E: Cell = Cell::Empty;

#[test]
fn test_blocks_scenario_board() {
    let board = Board::from_cells([X, X, E, O, O, E, E, E, E]);
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(select_move(&board, &mut rng), Some(Position::TopRight));
}

#[test]
fn test_empty_board_takes_center() {
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(select_move(&Board::new(), &mut rng), Some(Position::Center));
}

#[test]
fn test_every_two_of_three_threat_is_answered() {
    for line in WIN_LINES {
        for gap in 0..3 {
            let mut cells = [E; 9];
            for (i, pos) in line.iter().enumerate() {
                if i != gap {
                    cells[pos.to_index()] = X;
                }
            }
            // An open center is taken first and happens to be the block.
            if line[gap] != Position::Center && cells[4] == E {
                cells[4] = O;
            }
            let board = Board::from_cells(cells);
            let mut selector = ScriptedSelector::default();
            assert_eq!(
                select_move(&board, &mut selector),
                Some(line[gap]),
                "{line:?}"
            );
        }
    }
}

#[test]
fn test_seeded_choices_always_land_on_free_corners() {
    let board = Board::from_cells([X, E, E, E, O, E, E, E, E]);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let pos = select_move(&board, &mut rng).expect("free cells remain");
        assert!(pos.is_corner());
        assert!(board.is_empty(pos));
    }
}

#[test]
fn test_same_seed_same_game() {
    fn play_out(seed: u64) -> GameState {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::new();
        // Human always takes the first free cell.
        while !state.is_terminal() {
            let human = state.board().empty_positions()[0];
            state = state.apply_move(Actor::Player, human);
            if state.is_terminal() {
                break;
            }
            let reply = select_move(state.board(), &mut rng).expect("game in progress");
            state = state.apply_move(Actor::Opponent, reply);
        }
        state
    }

    assert_eq!(play_out(99), play_out(99));
}

#[test]
fn test_always_returns_free_cell_while_in_progress() {
    let mut rng = StdRng::seed_from_u64(5);
    for seed in 0..50u64 {
        let mut human = StdRng::seed_from_u64(seed);
        let mut state = GameState::new();
        while !state.is_terminal() {
            let free = state.board().empty_positions();
            let pick = free[rand::Rng::random_range(&mut human, 0..free.len())];
            state = state.apply_move(Actor::Player, pick);
            if state.is_terminal() {
                break;
            }
            let reply = select_move(state.board(), &mut rng).expect("game in progress");
            assert!(state.board().is_empty(reply));
            state = state.apply_move(Actor::Opponent, reply);
        }
    }
}
