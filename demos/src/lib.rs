//! Text rendering shared by the jumpmaze command-line front end.

use std::fmt::Write;

use jumpmaze_core::{Dir, Point};
use jumpmaze_game::{GameError, Session};

/// Parse a position written as `X,Y`.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got \u{201c}{s}\u{201d}"))?;
    let coord = |t: &str| {
        t.trim()
            .parse::<i32>()
            .map_err(|e| format!("bad coordinate \u{201c}{}\u{201d}: {e}", t.trim()))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

/// Seed, board and what the reachability search found.
pub fn summary(session: &Session) -> String {
    let board = session.board();
    let map = session.discovery();
    let mut out = String::new();
    match session.seed() {
        Some(seed) => writeln!(out, "seed: {seed}").ok(),
        None => writeln!(out, "seed: none (loaded board)").ok(),
    };
    writeln!(out, "side: {}", board.side()).ok();
    writeln!(out, "{board}").ok();
    writeln!(
        out,
        "reachable: {} of {} cells, {} of {} exits",
        map.len(),
        board.jump_count() + board.exit_count(),
        map.exit_count(),
        board.exit_count()
    )
    .ok();
    if let Some(e) = map.easiest_exit() {
        writeln!(out, "easiest exit: {} in {} moves", e.pos, e.depth).ok();
    }
    if let Some(e) = map.hardest_exit() {
        writeln!(out, "hardest exit: {} in {} moves", e.pos, e.depth).ok();
    }
    if !map.is_solvable() {
        writeln!(out, "no exit can be reached").ok();
    }
    out
}

/// Replay the optimal route to `target` through the session.
///
/// Each line holds the step number, the position and the direction of the
/// jump taken from it. The last line is the resulting status.
pub fn replay(session: &mut Session, target: Point) -> Result<String, GameError> {
    let mut out = String::new();
    if session.explain(target)? == 0 {
        writeln!(out, "route replay is disabled without help").ok();
        return Ok(out);
    }
    let mut step = 0;
    while let Some(pos) = session.step_replay()? {
        step += 1;
        let dir = session
            .legal_moves()
            .first()
            .and_then(|&next| Dir::from_delta(next - pos));
        match dir {
            Some(dir) => writeln!(out, "{step:>3}. {pos} {dir}").ok(),
            None => writeln!(out, "{step:>3}. {pos}").ok(),
        };
    }
    writeln!(out, "{}", session.status()).ok();
    Ok(out)
}

/// Colour of every position, one board row per line.
pub fn shade_grid(session: &Session) -> String {
    let side = session.board().side();
    let mut out = String::new();
    for x in 0..side {
        let row: Vec<String> = (0..side)
            .map(|y| session.shade(Point::new(x, y)).color().to_string())
            .collect();
        writeln!(out, "{}", row.join(" ")).ok();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumpmaze_game::GameConfig;

    fn seeded() -> Session {
        Session::new(&GameConfig {
            radius: 1,
            seed: Some(42),
            ..GameConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn points() {
        assert_eq!(parse_point("3,4"), Ok(Point::new(3, 4)));
        assert_eq!(parse_point(" 0 , 12 "), Ok(Point::new(0, 12)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn summary_lists_the_search() {
        let text = summary(&seeded());
        assert!(text.starts_with("seed: 42\nside: 5\n,0,0,0,\n0,2,1,1,0\n"));
        assert!(text.contains("reachable: 17 of 21 cells, 8 of 12 exits"));
        assert!(text.contains("easiest exit: (3, 4) in 2 moves"));
        assert!(text.contains("hardest exit: (1, 4) in 3 moves"));
    }

    #[test]
    fn replay_prints_each_step() {
        let mut s = seeded();
        let text = replay(&mut s, Point::new(0, 3)).unwrap();
        assert_eq!(
            text,
            "  1. (2, 2) -x\n  2. (1, 2) +y\n  3. (1, 3) -x\n  4. (0, 3)\n\
             finish reached! difficulty: 100%, optimal route: 3 moves\n"
        );
    }

    #[test]
    fn replay_without_help() {
        let mut s = Session::new(&GameConfig {
            radius: 1,
            seed: Some(42),
            no_help: true,
            ..GameConfig::default()
        })
        .unwrap();
        let text = replay(&mut s, Point::new(0, 3)).unwrap();
        assert_eq!(text, "route replay is disabled without help\n");
    }

    #[test]
    fn grid_has_one_colour_per_position() {
        let grid = shade_grid(&seeded());
        let rows: Vec<&str> = grid.lines().collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.split(' ').count() == 5));
        assert!(rows[0].starts_with("#1e1e1e "));
        assert_eq!(rows[2].split(' ').nth(2), Some("#ffffff"));
    }
}
