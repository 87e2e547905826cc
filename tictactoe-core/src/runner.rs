//! Game runner - plays full games and matches between two players

use serde::Serialize;

use crate::ai::Player;
use crate::board::{advance_game, starting_board, Board, Move, Side};
use crate::config::{MatchConfig, PlayerConfig};
use crate::error::GameError;
use crate::game::{score_game, Outcome};

// ============================================================================
// SINGLE GAME
// ============================================================================

/// Record of one finished game
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    /// Final outcome, never `InProgress`
    pub outcome: Outcome,
    /// Moves in play order, first side first
    pub moves: Vec<Move>,
    pub final_board: Board,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Side> {
        self.outcome.winner()
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == Outcome::Draw
    }
}

/// Plays games between two players from the starting board
pub struct GameRunner {
    first: Box<dyn Player>,
    second: Box<dyn Player>,
}

impl GameRunner {
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self { first, second }
    }

    /// Build both players from config for game `game_index` of a match
    pub fn from_config(first: &PlayerConfig, second: &PlayerConfig, game_index: u64) -> Self {
        Self::new(first.build(game_index), second.build(game_index))
    }

    /// Play a complete game
    pub fn play_game(&mut self) -> Result<GameRecord, GameError> {
        self.play_game_with(|_, _, _| {})
    }

    /// Play a complete game, calling `on_move` with the side, its move and the new board
    pub fn play_game_with<F>(&mut self, mut on_move: F) -> Result<GameRecord, GameError>
    where
        F: FnMut(Side, Move, &Board),
    {
        let mut board = starting_board();
        let mut side = Side::First;
        let mut moves = Vec::with_capacity(9);

        loop {
            let outcome = score_game(&board);
            if outcome.is_terminal() {
                tracing::debug!(?outcome, moves = moves.len(), "game finished");
                return Ok(GameRecord {
                    outcome,
                    moves,
                    final_board: board,
                });
            }

            let player = match side {
                Side::First => &mut self.first,
                Side::Second => &mut self.second,
            };
            let mv = player.choose_move(side, &board)?;
            board = advance_game(side, mv, &board)?;
            tracing::debug!(%side, %mv, player = player.name(), "move played");

            on_move(side, mv, &board);
            moves.push(mv);
            side = side.opponent();
        }
    }
}

// ============================================================================
// MATCH
// ============================================================================

/// Result of a match, counted per configured player rather than per side
#[derive(Clone, Debug, Default, Serialize)]
pub struct MatchResult {
    /// Wins for the player configured as `first`
    pub first_wins: u32,
    /// Wins for the player configured as `second`
    pub second_wins: u32,
    pub draws: u32,
    pub games_played: u32,
    /// Individual games, in play order
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn first_win_rate(&self) -> f32 {
        rate(self.first_wins, self.games_played)
    }

    pub fn second_win_rate(&self) -> f32 {
        rate(self.second_wins, self.games_played)
    }

    pub fn draw_rate(&self) -> f32 {
        rate(self.draws, self.games_played)
    }

    /// Tally a game in which the `first` player held `first_player_side`
    fn record(&mut self, game: GameRecord, first_player_side: Side) {
        match game.winner() {
            Some(side) if side == first_player_side => self.first_wins += 1,
            Some(_) => self.second_wins += 1,
            None => self.draws += 1,
        }
        self.games_played += 1;
        self.games.push(game);
    }
}

fn rate(count: u32, total: u32) -> f32 {
    if total == 0 {
        0.0
    } else {
        count as f32 / total as f32
    }
}

/// Side held by the `first` player in game `game_index`
pub fn first_player_side(config: &MatchConfig, game_index: usize) -> Side {
    if config.alternate_sides && game_index % 2 == 1 {
        Side::Second
    } else {
        Side::First
    }
}

/// Play every game of a match, calling `on_game` after each one
pub fn play_match<F>(config: &MatchConfig, mut on_game: F) -> Result<MatchResult, GameError>
where
    F: FnMut(usize, &GameRecord),
{
    let mut result = MatchResult::default();

    for game_index in 0..config.games {
        let side = first_player_side(config, game_index);
        let mut runner = match side {
            Side::First => GameRunner::from_config(&config.first, &config.second, game_index as u64),
            Side::Second => GameRunner::from_config(&config.second, &config.first, game_index as u64),
        };

        let game = runner.play_game()?;
        on_game(game_index, &game);
        result.record(game, side);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MinimaxAI, RandomAI};
    use crate::board::Cell;

    #[test]
    fn test_minimax_self_play() {
        let mut runner = GameRunner::new(Box::new(MinimaxAI::new()), Box::new(MinimaxAI::new()));
        let record = runner.play_game().unwrap();

        assert!(record.is_draw());
        assert_eq!(record.moves.len(), 9);
        assert_eq!(record.moves[0], Move::new(0, 0));
        assert_eq!(record.moves[1], Move::new(1, 1));
        assert!(record.final_board.is_full());
    }

    #[test]
    fn test_observer_sees_every_move() {
        let mut runner = GameRunner::new(
            Box::new(RandomAI::with_seed(1)),
            Box::new(RandomAI::with_seed(2)),
        );
        let mut seen = Vec::new();
        let record = runner
            .play_game_with(|side, mv, board| {
                assert_eq!(board.get(mv), Some(Cell::Mark(side)));
                seen.push((side, mv));
            })
            .unwrap();

        assert_eq!(seen.len(), record.moves.len());
        assert_eq!(seen[0].0, Side::First);
        assert!(record.outcome.is_terminal());
    }

    #[test]
    fn test_random_game_is_reproducible() {
        let play = || {
            GameRunner::new(
                Box::new(RandomAI::with_seed(11)),
                Box::new(RandomAI::with_seed(12)),
            )
            .play_game()
            .unwrap()
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn test_first_player_side_alternates() {
        let config = MatchConfig::default();
        assert_eq!(first_player_side(&config, 0), Side::First);
        assert_eq!(first_player_side(&config, 1), Side::Second);

        let fixed = MatchConfig::default().fixed_sides();
        assert_eq!(first_player_side(&fixed, 1), Side::First);
    }

    #[test]
    fn test_match_counts() {
        let config = MatchConfig::new(PlayerConfig::minimax(), PlayerConfig::minimax(), 2);
        let mut calls = 0;
        let result = play_match(&config, |_, _| calls += 1).unwrap();

        assert_eq!(calls, 2);
        assert_eq!(result.games_played, 2);
        assert_eq!(result.draws, 2);
        assert_eq!(result.first_win_rate(), 0.0);
        assert_eq!(result.draw_rate(), 1.0);
    }

    #[test]
    fn test_empty_match() {
        let config = MatchConfig::new(PlayerConfig::minimax(), PlayerConfig::random(), 0);
        let result = play_match(&config, |_, _| {}).unwrap();
        assert_eq!(result.games_played, 0);
        assert_eq!(result.second_win_rate(), 0.0);
    }
}
