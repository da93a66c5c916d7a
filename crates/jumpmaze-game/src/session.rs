//! State of one game, separate from any front end.

use std::collections::VecDeque;
use std::fmt;

use jumpmaze_core::{Board, Dir, Point};
use jumpmaze_gen::{generate, parse};
use jumpmaze_paths::{DiscoveryMap, JumpRules, Waypoint, discover};

use crate::config::GameConfig;
use crate::error::GameError;

/// Where the player stands, as far as winning goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// On a jump cell with at least one legal jump.
    Playing,
    /// On a jump cell with no legal jump left.
    Stuck,
    /// On an exit.
    Finished {
        /// The exit's rating as a rounded percentage.
        difficulty_percent: u32,
        /// Fewest jumps that reach this exit from the start.
        optimal_moves: u32,
    },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => f.write_str("playing"),
            Self::Stuck => f.write_str("no legal jump left"),
            Self::Finished {
                difficulty_percent,
                optimal_moves,
            } => write!(
                f,
                "finish reached! difficulty: {difficulty_percent}%, optimal route: {optimal_moves} moves"
            ),
        }
    }
}

/// One game on one board.
///
/// Owns the board, its discovery map and the player's progress. The board
/// never changes for the lifetime of a session; starting over on a new
/// board replaces the whole session.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    seed: Option<u32>,
    rules: JumpRules,
    help: bool,
    discovery: DiscoveryMap,
    pos: Point,
    moves_taken: u32,
    legal: Vec<Point>,
    replay: VecDeque<Waypoint>,
}

impl Session {
    /// Generate a board from `config` and start a game on it.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let config = config.normalized();
        let (board, seed) = generate(config.radius, config.seed)?;
        Self::with_board(board, Some(seed), &config)
    }

    /// Start a game on an existing board. The radius and seed of `config`
    /// are ignored.
    pub fn from_board(board: Board, config: &GameConfig) -> Result<Self, GameError> {
        Self::with_board(board, None, config)
    }

    /// Start a game on a board parsed from comma-separated text.
    pub fn import(text: &str, config: &GameConfig) -> Result<Self, GameError> {
        let board = parse(text)?;
        Self::from_board(board, config)
    }

    fn with_board(board: Board, seed: Option<u32>, config: &GameConfig) -> Result<Self, GameError> {
        let rules = config.rules();
        let start = board.center();
        let discovery = discover(&board, start, rules)?;
        let legal = rules.legal_moves(&board, start, None)?;
        log::info!(
            "new game: side {}, seed {}, {} reachable cells, {} reachable exits",
            board.side(),
            seed.map_or_else(|| "none".to_string(), |s| s.to_string()),
            discovery.len(),
            discovery.exit_count()
        );
        Ok(Self {
            board,
            seed,
            rules,
            help: !config.no_help,
            discovery,
            pos: start,
            moves_taken: 0,
            legal,
            replay: VecDeque::new(),
        })
    }

    /// Replace this game with a fresh one built from `config`.
    ///
    /// The new board and its discovery map are built in full before the
    /// swap; on error the current game is left untouched.
    pub fn regenerate(&mut self, config: &GameConfig) -> Result<(), GameError> {
        let next = Self::new(config)?;
        *self = next;
        Ok(())
    }

    /// Go back to the start with the move counter at zero.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.replay.clear();
        self.moves_taken = 0;
        self.pos = self.board.center();
        self.legal = self.rules.legal_moves(&self.board, self.pos, None)?;
        Ok(())
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seed the board was generated from; `None` for imported boards.
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    pub fn rules(&self) -> JumpRules {
        self.rules
    }

    pub fn discovery(&self) -> &DiscoveryMap {
        &self.discovery
    }

    /// The player's position.
    pub fn position(&self) -> Point {
        self.pos
    }

    pub fn start(&self) -> Point {
        self.discovery.start()
    }

    pub fn moves_taken(&self) -> u32 {
        self.moves_taken
    }

    /// Landing positions of the jumps currently allowed.
    pub fn legal_moves(&self) -> &[Point] {
        &self.legal
    }

    /// Whether `p` is one of the current legal landings.
    pub fn is_selectable(&self, p: Point) -> bool {
        self.legal.contains(&p)
    }

    pub fn help_enabled(&self) -> bool {
        self.help
    }

    /// Number of route steps still queued for replay.
    pub fn replay_pending(&self) -> usize {
        self.replay.len()
    }

    pub fn status(&self) -> Status {
        let on_exit = self.board.get(self.pos).is_some_and(|c| c.is_exit());
        if on_exit {
            if let Some(node) = self.discovery.get(self.pos) {
                let rating = node.rating.unwrap_or(0.0);
                return Status::Finished {
                    difficulty_percent: (rating * 100.0).round() as u32,
                    optimal_moves: node.depth,
                };
            }
        }
        if self.legal.is_empty() {
            Status::Stuck
        } else {
            Status::Playing
        }
    }

    // -------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------

    /// Jump to `to`, which must be a current legal landing.
    ///
    /// Cancels any pending replay.
    pub fn try_move(&mut self, to: Point) -> Result<Status, GameError> {
        if !self.is_selectable(to) {
            return Err(GameError::IllegalMove {
                from: self.pos,
                to,
            });
        }
        self.replay.clear();
        self.commit(to, None)?;
        Ok(self.status())
    }

    /// Queue the optimal route from the start to `target` for replay.
    ///
    /// Returns the number of queued steps; the first step returns to the
    /// start. Does nothing and returns 0 when help is disabled.
    pub fn explain(&mut self, target: Point) -> Result<usize, GameError> {
        if !self.help {
            return Ok(0);
        }
        let route = self.discovery.route_to(target)?;
        log::debug!("replaying {} steps to {target}", route.len());
        self.replay = route.into();
        Ok(self.replay.len())
    }

    /// Play the next queued route step, if any.
    ///
    /// Each step counts as a move. While a replay is running the legal-move
    /// set only holds the jump the route takes next.
    pub fn step_replay(&mut self) -> Result<Option<Point>, GameError> {
        let Some(w) = self.replay.pop_front() else {
            return Ok(None);
        };
        self.commit(w.pos, w.next)?;
        Ok(Some(w.pos))
    }

    fn commit(&mut self, to: Point, forced: Option<Dir>) -> Result<(), GameError> {
        self.legal = self.rules.legal_moves(&self.board, to, forced)?;
        self.pos = to;
        self.moves_taken += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumpmaze_core::Error;

    /// radius 1, seed 42:
    ///
    /// ```text
    /// ,0,0,0,
    /// 0,2,1,1,0
    /// 0,2,1,1,0
    /// 0,1,2,2,0
    /// ,0,0,0,
    /// ```
    fn seeded() -> Session {
        Session::new(&GameConfig {
            radius: 1,
            seed: Some(42),
            ..GameConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn starts_at_center() {
        let s = seeded();
        assert_eq!(s.seed(), Some(42));
        assert_eq!(s.position(), Point::new(2, 2));
        assert_eq!(s.start(), Point::new(2, 2));
        assert_eq!(s.moves_taken(), 0);
        assert_eq!(
            s.legal_moves(),
            &[
                Point::new(3, 2),
                Point::new(1, 2),
                Point::new(2, 3),
                Point::new(2, 1)
            ]
        );
        assert_eq!(s.status(), Status::Playing);
    }

    #[test]
    fn play_to_an_exit() {
        let mut s = seeded();
        assert_eq!(s.try_move(Point::new(3, 2)), Ok(Status::Playing));
        assert_eq!(
            s.legal_moves(),
            &[Point::new(1, 2), Point::new(3, 4), Point::new(3, 0)]
        );
        let status = s.try_move(Point::new(3, 4)).unwrap();
        assert_eq!(
            status,
            Status::Finished {
                difficulty_percent: 67,
                optimal_moves: 2
            }
        );
        assert_eq!(s.moves_taken(), 2);
        assert!(s.legal_moves().is_empty());
        assert_eq!(
            status.to_string(),
            "finish reached! difficulty: 67%, optimal route: 2 moves"
        );
    }

    #[test]
    fn illegal_move_is_rejected_without_changes() {
        let mut s = seeded();
        let err = s.try_move(Point::new(0, 2)).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                from: Point::new(2, 2),
                to: Point::new(0, 2)
            }
        );
        assert_eq!(s.position(), Point::new(2, 2));
        assert_eq!(s.moves_taken(), 0);
    }

    #[test]
    fn replay_walks_the_optimal_route() {
        let mut s = seeded();
        s.try_move(Point::new(2, 3)).unwrap();
        assert_eq!(s.explain(Point::new(0, 3)), Ok(4));

        assert_eq!(s.step_replay(), Ok(Some(Point::new(2, 2))));
        assert_eq!(s.legal_moves(), &[Point::new(1, 2)]);
        assert_eq!(s.step_replay(), Ok(Some(Point::new(1, 2))));
        assert_eq!(s.legal_moves(), &[Point::new(1, 3)]);
        assert_eq!(s.step_replay(), Ok(Some(Point::new(1, 3))));
        assert_eq!(s.legal_moves(), &[Point::new(0, 3)]);
        assert_eq!(s.step_replay(), Ok(Some(Point::new(0, 3))));
        assert_eq!(s.step_replay(), Ok(None));

        // One manual move plus four replayed ones.
        assert_eq!(s.moves_taken(), 5);
        assert_eq!(
            s.status(),
            Status::Finished {
                difficulty_percent: 100,
                optimal_moves: 3
            }
        );
    }

    #[test]
    fn manual_move_cancels_replay() {
        let mut s = seeded();
        s.explain(Point::new(0, 3)).unwrap();
        s.step_replay().unwrap();
        assert_eq!(s.replay_pending(), 3);
        s.restart().unwrap();
        assert_eq!(s.replay_pending(), 0);

        s.explain(Point::new(0, 3)).unwrap();
        s.step_replay().unwrap();
        s.try_move(Point::new(1, 2)).unwrap();
        assert_eq!(s.replay_pending(), 0);
    }

    #[test]
    fn explain_unreachable_target() {
        let mut s = seeded();
        assert_eq!(
            s.explain(Point::new(4, 3)),
            Err(GameError::Board(Error::Unreachable(Point::new(4, 3))))
        );
    }

    #[test]
    fn explain_is_disabled_without_help() {
        let mut s = Session::new(&GameConfig {
            radius: 1,
            seed: Some(42),
            no_help: true,
            ..GameConfig::default()
        })
        .unwrap();
        assert!(!s.help_enabled());
        assert_eq!(s.explain(Point::new(0, 3)), Ok(0));
        assert_eq!(s.step_replay(), Ok(None));
    }

    #[test]
    fn restart_resets_progress() {
        let mut s = seeded();
        s.try_move(Point::new(3, 2)).unwrap();
        s.restart().unwrap();
        assert_eq!(s.position(), s.start());
        assert_eq!(s.moves_taken(), 0);
        assert_eq!(s.legal_moves().len(), 4);
    }

    #[test]
    fn regenerate_replaces_everything() {
        let mut s = seeded();
        s.try_move(Point::new(3, 2)).unwrap();
        s.regenerate(&GameConfig {
            radius: 3,
            seed: Some(7),
            ..GameConfig::default()
        })
        .unwrap();
        assert_eq!(s.seed(), Some(7));
        assert_eq!(s.board().side(), 9);
        assert_eq!(s.position(), Point::new(4, 4));
        assert_eq!(s.moves_taken(), 0);
        assert_eq!(s.discovery().side(), 9);
    }

    #[test]
    fn same_seed_same_game() {
        let a = seeded();
        let b = seeded();
        assert_eq!(a.board(), b.board());
        assert_eq!(a.discovery().len(), b.discovery().len());
    }

    #[test]
    fn imported_dead_end_is_stuck() {
        let s = Session::import(",,,,\n,,,,\n,,1,,\n,,,,\n,,,,", &GameConfig::default()).unwrap();
        assert_eq!(s.seed(), None);
        assert_eq!(s.status(), Status::Stuck);
        assert!(!s.discovery().is_solvable());
    }

    #[test]
    fn imported_board_with_empty_center_fails() {
        let err = Session::import(",0,\n0,,0\n,0,", &GameConfig::default()).unwrap_err();
        assert_eq!(err, GameError::Board(Error::NotInPlay(Point::new(1, 1))));
    }

    #[test]
    fn skip_mode_is_latched_from_config() {
        let s = Session::import(
            ",,0,,\n,,,,\n0,,2,,0\n,,,,\n,,0,,",
            &GameConfig {
                skip_intermediate: true,
                ..GameConfig::default()
            },
        )
        .unwrap();
        assert_eq!(s.legal_moves().len(), 4);
        assert_eq!(s.discovery().exit_count(), 4);
    }

    mod random_play {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn random_play_never_beats_the_optimum(
                radius in 1i32..6,
                seed in 1u32..100_000,
                skip in any::<bool>(),
                picks in prop::collection::vec(any::<prop::sample::Index>(), 0..40),
            ) {
                let mut s = Session::new(&GameConfig {
                    radius,
                    seed: Some(seed),
                    skip_intermediate: skip,
                    no_help: false,
                }).unwrap();
                for pick in picks {
                    if s.legal_moves().is_empty() {
                        break;
                    }
                    let to = *pick.get(s.legal_moves());
                    s.try_move(to).unwrap();
                    prop_assert!(s.discovery().contains(s.position()));
                    prop_assert!(s.discovery().depth(s.position()).unwrap() <= s.moves_taken());
                }
                match s.status() {
                    Status::Finished { difficulty_percent, optimal_moves } => {
                        prop_assert!(difficulty_percent <= 100);
                        prop_assert!(optimal_moves <= s.moves_taken());
                        prop_assert!(s.legal_moves().is_empty());
                    }
                    Status::Stuck => prop_assert!(s.legal_moves().is_empty()),
                    Status::Playing => prop_assert!(!s.legal_moves().is_empty()),
                }
            }
        }
    }
}
