//! Tests for the alpha-beta minimax search.

use std::collections::{HashMap, HashSet};
use strictly_minimax::{
    Action, Board, Player, actions, evaluate, initial_state, minimax, player, result, terminal,
    utility,
};

fn parse(s: &str) -> Board {
    s.parse().unwrap()
}

/// Plain minimax without pruning, memoized by board.
fn reference_value(board: Board, memo: &mut HashMap<Board, i8>) -> i8 {
    if let Some(value) = memo.get(&board) {
        return *value;
    }

    let value = if terminal(&board) {
        utility(&board)
    } else {
        let children = actions(&board)
            .into_iter()
            .map(|action| reference_value(result(&board, action).unwrap(), memo));
        match player(&board) {
            Player::X => children.max().unwrap(),
            Player::O => children.min().unwrap(),
        }
    };

    memo.insert(board, value);
    value
}

fn reachable_boards() -> Vec<Board> {
    fn walk(board: Board, seen: &mut HashSet<Board>) {
        if !seen.insert(board) || terminal(&board) {
            return;
        }
        for action in actions(&board) {
            walk(result(&board, action).unwrap(), seen);
        }
    }

    let mut seen = HashSet::new();
    walk(initial_state(), &mut seen);
    seen.into_iter().collect()
}

#[test]
fn test_empty_board_opening() {
    let action = minimax(&initial_state()).unwrap();
    let corners_and_center = [
        Action::new(0, 0),
        Action::new(0, 2),
        Action::new(1, 1),
        Action::new(2, 0),
        Action::new(2, 2),
    ];
    assert!(corners_and_center.contains(&action));
    assert_eq!(evaluate(&initial_state()).value, 0);
}

#[test]
fn test_x_completes_open_row() {
    // Equal counts, so X is to move and can win at once.
    let board = parse("XX_ OO_ ___");
    assert_eq!(player(&board), Player::X);
    assert_eq!(minimax(&board), Some(Action::new(0, 2)));
}

#[test]
fn test_o_must_block() {
    let board = parse("O__ XX_ ___");
    assert_eq!(player(&board), Player::O);
    assert_eq!(minimax(&board), Some(Action::new(1, 2)));
}

#[test]
fn test_x_finds_forced_win() {
    // O answered a corner with an adjacent edge; X wins by force.
    let eval = evaluate(&parse("XO_ ___ ___"));
    assert_eq!(eval.value, 1);
    assert_eq!(eval.action, Some(Action::new(1, 0)));
}

#[test]
fn test_o_answers_center_with_corner() {
    assert_eq!(minimax(&parse("___ _X_ ___")), Some(Action::new(0, 0)));
}

#[test]
fn test_o_answers_corner_with_center() {
    assert_eq!(minimax(&parse("X__ ___ ___")), Some(Action::new(1, 1)));
}

#[test]
fn test_o_avoids_fork_with_edge() {
    // X on opposite corners: O must take an edge, not a corner.
    let eval = evaluate(&parse("X__ _O_ __X"));
    assert_eq!(eval.value, 0);
    assert_eq!(eval.action, Some(Action::new(0, 1)));
}

#[test]
fn test_full_board_has_no_move() {
    let board = parse("XOX XOO OXX");
    assert!(terminal(&board));
    assert_eq!(minimax(&board), None);
}

#[test]
fn test_won_board_has_no_move() {
    assert_eq!(minimax(&parse("XXX OO_ ___")), None);
    assert_eq!(minimax(&parse("XXO OXO __X")), None);
}

#[test]
fn test_search_is_deterministic() {
    for board in [initial_state(), parse("X__ _O_ __X"), parse("O__ XX_ ___")] {
        assert_eq!(evaluate(&board), evaluate(&board));
        assert_eq!(minimax(&board), minimax(&board));
    }
}

#[test]
fn test_values_match_unpruned_minimax() {
    let mut memo = HashMap::new();
    for board in reachable_boards() {
        let eval = evaluate(&board);
        assert_eq!(eval.value, reference_value(board, &mut memo), "board:\n{}", board);
    }
}

#[test]
fn test_chosen_move_is_optimal_and_first() {
    let mut memo = HashMap::new();
    for board in reachable_boards().into_iter().filter(|b| !terminal(b)) {
        let value = reference_value(board, &mut memo);
        let chosen = minimax(&board).unwrap();
        let first_optimal = actions(&board)
            .into_iter()
            .find(|action| reference_value(result(&board, *action).unwrap(), &mut memo) == value);
        assert_eq!(Some(chosen), first_optimal, "board:\n{}", board);
    }
}

#[test]
fn test_optimal_player_never_loses() {
    // Let the solver play `side` against every possible opponent line.
    fn worst_case(board: Board, side: Player) -> i8 {
        if terminal(&board) {
            return utility(&board);
        }
        if player(&board) == side {
            let action = minimax(&board).unwrap();
            return worst_case(result(&board, action).unwrap(), side);
        }
        let replies = actions(&board)
            .into_iter()
            .map(|action| worst_case(result(&board, action).unwrap(), side));
        match side {
            Player::X => replies.min().unwrap(),
            Player::O => replies.max().unwrap(),
        }
    }

    assert!(worst_case(initial_state(), Player::X) >= 0);
    assert!(worst_case(initial_state(), Player::O) <= 0);
}

#[test]
fn test_search_leaves_board_untouched() {
    let board = parse("O__ XX_ ___");
    let copy = board;
    let _ = evaluate(&board);
    assert_eq!(board, copy);
}
