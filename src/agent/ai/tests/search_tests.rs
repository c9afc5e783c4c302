// Tests for minimax, alpha-beta and expectimax on explicit game trees

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::fixtures::{leaf, leaves, node, random_tree, scored_node, TreeState};
use crate::agent::ai::alpha_beta::alpha_beta_search;
use crate::agent::ai::evaluation::Evaluation;
use crate::agent::ai::expectimax::expectimax_search;
use crate::agent::ai::minimax::minimax_search;
use crate::agent::ai::search::SearchAlgorithm;
use crate::game_repr::{Direction, GameState, Layout, PacmanState, PACMAN_INDEX};

/// Pacman picks one of three ghost nodes, the ghost picks a leaf
fn textbook_tree() -> TreeState {
    TreeState::new(
        2,
        node(vec![
            leaves(&[3.0, 12.0, 8.0]),
            leaves(&[2.0, 4.0, 6.0]),
            leaves(&[14.0, 5.0, 2.0]),
        ]),
    )
}

#[test]
fn test_minimax_textbook_tree() {
    let result = minimax_search(&textbook_tree(), Evaluation::Score, 1);
    assert_eq!(result.value, 3.0);
    assert_eq!(result.action, Direction::North);
    assert_eq!(result.stats.leaf_evaluations, 9);
    assert_eq!(result.stats.nodes, 4);
    assert_eq!(result.stats.cutoffs, 0);
}

#[test]
fn test_alpha_beta_prunes_textbook_tree() {
    let result = alpha_beta_search(&textbook_tree(), Evaluation::Score, 1);
    assert_eq!(result.value, 3.0);
    assert_eq!(result.action, Direction::North);
    // The second ghost node stops after its first leaf, the third after its last
    assert_eq!(result.stats.leaf_evaluations, 7);
    assert_eq!(result.stats.cutoffs, 2);
}

#[test]
fn test_alpha_beta_matches_minimax_on_random_trees() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for num_agents in 1..=3usize {
        for depth in 1..=3u32 {
            if depth as usize * num_agents > 6 {
                continue;
            }
            for _ in 0..25 {
                let tree = random_tree(&mut rng, num_agents, depth as usize);
                // Full depth, and one ply short so interior values are used
                for search_depth in [depth, depth - 1] {
                    let plain = minimax_search(&tree, Evaluation::Score, search_depth);
                    let pruned = alpha_beta_search(&tree, Evaluation::Score, search_depth);
                    assert_eq!(
                        plain.value, pruned.value,
                        "{num_agents} agents, depth {search_depth}"
                    );
                    assert_eq!(
                        plain.action, pruned.action,
                        "{num_agents} agents, depth {search_depth}"
                    );
                    assert!(pruned.stats.leaf_evaluations <= plain.stats.leaf_evaluations);
                }
            }
        }
    }
}

#[test]
fn test_expectimax_matches_minimax_without_ghosts() {
    let mut rng = StdRng::seed_from_u64(7);
    for depth in 0..=4u32 {
        for _ in 0..10 {
            let tree = random_tree(&mut rng, 1, 4);
            let max = minimax_search(&tree, Evaluation::Score, depth);
            let expect = expectimax_search(&tree, Evaluation::Score, depth);
            assert_eq!(max.value, expect.value, "depth {depth}");
            assert_eq!(max.action, expect.action, "depth {depth}");
            assert_eq!(max.stats.leaf_evaluations, expect.stats.leaf_evaluations);
        }
    }
}

#[test]
fn test_alpha_beta_matches_minimax_on_layouts() {
    for name in ["testClassic", "trappedClassic", "smallClassic"] {
        let layout = Layout::builtin(name).unwrap().with_max_ghosts(2);
        let state = PacmanState::new(&layout);
        for eval in Evaluation::all() {
            let plain = minimax_search(&state, *eval, 2);
            let pruned = alpha_beta_search(&state, *eval, 2);
            assert_eq!(plain.value, pruned.value, "{name} {eval}");
            assert_eq!(plain.action, pruned.action, "{name} {eval}");
        }
    }
}

#[test]
fn test_expectimax_takes_mean_over_ghost_moves() {
    let tree = TreeState::new(2, node(vec![leaves(&[9.0, 12.0, 15.0])]));
    let result = expectimax_search(&tree, Evaluation::Score, 1);
    assert_eq!(result.value, 12.0);
    assert_eq!(result.action, Direction::North);
}

#[test]
fn test_expectimax_gambles_where_minimax_does_not() {
    let tree = TreeState::new(
        2,
        node(vec![leaves(&[0.0, 100.0]), leaves(&[10.0, 10.0])]),
    );

    let cautious = minimax_search(&tree, Evaluation::Score, 1);
    assert_eq!(cautious.action, Direction::South);
    assert_eq!(cautious.value, 10.0);

    let hopeful = expectimax_search(&tree, Evaluation::Score, 1);
    assert_eq!(hopeful.action, Direction::North);
    assert_eq!(hopeful.value, 50.0);
}

/// Ghost nodes scored 4, 7, 7, 1 whose own children tell another story
fn shallow_and_deep_tree() -> TreeState {
    TreeState::new(
        2,
        node(vec![
            scored_node(4.0, vec![leaf(20.0), leaf(30.0)]),
            scored_node(7.0, vec![leaf(0.0), leaf(50.0)]),
            scored_node(7.0, vec![leaf(-5.0), leaf(5.0)]),
            scored_node(1.0, vec![leaf(1.0), leaf(2.0)]),
        ]),
    )
}

#[test]
fn test_depth_zero_scores_root_successors() {
    let tree = shallow_and_deep_tree();
    for algorithm in SearchAlgorithm::all() {
        let result = algorithm.search(&tree, Evaluation::Score, 0);
        assert_eq!(result.action, Direction::South, "{algorithm}");
        assert_eq!(result.value, 7.0, "{algorithm}");
        assert_eq!(result.stats.leaf_evaluations, 4, "{algorithm}");
        assert_eq!(result.stats.nodes, 1, "{algorithm}");
    }
}

#[test]
fn test_depth_one_looks_past_ghost_nodes() {
    let tree = shallow_and_deep_tree();
    for algorithm in SearchAlgorithm::all() {
        let result = algorithm.search(&tree, Evaluation::Score, 1);
        assert_eq!(result.action, Direction::North, "{algorithm}");
    }
    assert_eq!(minimax_search(&tree, Evaluation::Score, 1).value, 20.0);
    assert_eq!(expectimax_search(&tree, Evaluation::Score, 1).value, 25.0);
}

#[test]
fn test_ties_go_to_first_action() {
    let tree = TreeState::new(
        2,
        node(vec![leaves(&[3.0]), leaves(&[5.0]), leaves(&[5.0])]),
    );
    for algorithm in SearchAlgorithm::all() {
        let result = algorithm.search(&tree, Evaluation::Score, 1);
        assert_eq!(result.action, Direction::South, "{algorithm}");
        assert_eq!(result.value, 5.0, "{algorithm}");
    }
}

#[test]
fn test_terminal_root_returns_stop() {
    let tree = TreeState::new(3, leaf(7.0));
    for algorithm in SearchAlgorithm::all() {
        let result = algorithm.search(&tree, Evaluation::Score, 2);
        assert_eq!(result.action, Direction::Stop, "{algorithm}");
        assert_eq!(result.value, 7.0, "{algorithm}");
        assert_eq!(result.stats.nodes, 0, "{algorithm}");
        assert_eq!(result.stats.leaf_evaluations, 1, "{algorithm}");
    }
}

#[test]
fn test_search_never_mutates_input() {
    let layout = Layout::builtin("minimaxClassic").unwrap();
    let state = PacmanState::new(&layout);
    let before = state.to_string();
    for algorithm in SearchAlgorithm::all() {
        let result = algorithm.search(&state, Evaluation::Better, 2);
        assert!(state.legal_actions(PACMAN_INDEX).contains(&result.action));
    }
    assert_eq!(state.to_string(), before);
}

#[test]
#[should_panic(expected = "no legal actions")]
fn test_stuck_ghost_panics() {
    let tree = TreeState::new(2, node(vec![node(vec![])]));
    minimax_search(&tree, Evaluation::Score, 1);
}

#[test]
#[should_panic(expected = "wrong agent")]
fn test_tree_fixture_checks_turn_order() {
    let tree = TreeState::new(2, node(vec![leaves(&[1.0])]));
    tree.legal_actions(1);
}
