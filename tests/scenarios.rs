use fading_game::{Board, GameResult};
use fading_oracle::Oracle;
use fading_solver::{enumerate, solve, write_table};
use googletest::prelude::*;

type Board3 = Board<3, 3, 9>;

#[gtest]
fn scenario_1_center_opening_is_not_terminal() {
  let mut board = Board3::new();
  board.play(4).unwrap();

  expect_eq!(board.x_queue().to_vec(), vec![4u8]);
  expect_that!(board.o_queue(), is_empty());
  expect_eq!(board.result(), GameResult::NotFinished);
}

#[gtest]
fn scenario_2_no_win_no_collinear_stones() {
  let mut board = Board3::new();
  for cell in [0u8, 4, 8, 2, 6] {
    board.play(cell).unwrap();
  }
  expect_eq!(board.x_queue().to_vec(), vec![0u8, 8, 6]);
  expect_eq!(board.result(), GameResult::NotFinished);
}

#[gtest]
fn scenario_3_left_column_win() {
  let mut board = Board3::new();
  for cell in [0u8, 1, 3, 4, 6] {
    board.play(cell).unwrap();
  }
  expect_eq!(board.x_queue().to_vec(), vec![0u8, 3, 6]);
  expect_eq!(board.result(), GameResult::Win(fading_game::Side::X));
}

#[gtest]
fn scenario_4_top_row_win() {
  let mut board = Board3::new();
  for cell in [0u8, 4, 1, 5, 2] {
    board.play(cell).unwrap();
  }
  expect_eq!(board.x_queue().to_vec(), vec![0u8, 1, 2]);
  expect_eq!(board.result(), GameResult::Win(fading_game::Side::X));
}

#[gtest]
fn scenario_5_oldest_stone_fades_and_o_completes_middle_row() {
  let mut board = Board3::new();
  for cell in [0u8, 4, 1, 5, 8, 3] {
    board.play(cell).unwrap();
  }
  // O's third stone (cell 3) completes the middle row {3, 4, 5}.
  expect_eq!(board.o_queue().to_vec(), vec![4u8, 5, 3]);
  expect_eq!(board.result(), GameResult::Win(fading_game::Side::O));

  // One more X move (cell 6) evicts X's oldest stone (cell 0), driving the
  // fading rule the scenario is named for, independent of the already
  // decided result.
  board.play(6).unwrap();
  expect_eq!(board.x_queue().to_vec(), vec![1u8, 8, 6]);
}

#[gtest]
fn scenario_6_perfect_play_from_a_drawn_game_never_forces_a_win() {
  let mut graph = enumerate::<3, 3, 9>(None);
  solve(&mut graph);
  // The empty (3, 3) position is a draw under perfect play.
  expect_eq!(graph.nodes[&0].v, [0, 0]);

  let dir = std::env::temp_dir().join(format!("fading_line_scenario6_{}", std::process::id()));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("3x3m3.data");
  write_table(&graph, &path).unwrap();

  let oracle = Oracle::<3, 3, 9>::open(&path).unwrap();
  let mut board = Board3::new();
  board.play(4).unwrap(); // scenario 1's opening

  // Perfect play from a drawn node can never be forced into a loss: with
  // 2*M < N*N, the fading rule always leaves an empty cell, so a drawn game
  // simply continues forever rather than ending in a tie.
  for _ in 0..20 {
    oracle.make_move(&mut board);
    if let GameResult::Win(_) = board.result() {
      panic!("perfect play from a draw produced a forced win");
    }
  }

  std::fs::remove_dir_all(&dir).ok();
}
