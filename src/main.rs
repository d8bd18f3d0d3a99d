//! Turn a 3x3x3 cube from the terminal.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use facelet_cube::cube333::moves::Move333;
use facelet_cube::cube333::{ColorGrid, Cube, FaceId};
use facelet_cube::error::Error;
use facelet_cube::history::{History, Recorded};
use facelet_cube::moves::MoveSequence;
use facelet_cube::patterns::{Pattern, PATTERNS};

// The cube after R U F' D2 L B.
const GRID_EXAMPLE: &str = "w y y;w g g;w b b\n\
                            b b y;y r p;p p w\n\
                            b r g;b w w;p r r\n\
                            w p g;w p g;g g g\n\
                            r y y;r y y;y r r\n\
                            p b b;p b g;p w r\n";

#[derive(Debug, Parser)]
#[command(name = "cube")]
#[command(about = "Turn a 3x3x3 cube from the terminal", long_about = None)]
struct Cli {
    /// Start from this entry of the pattern list (0 is the solved cube)
    #[arg(long, default_value_t = 0)]
    pattern: usize,
    /// Apply these space separated moves to the start position, print the result and exit
    #[arg(long, value_name = "MOVES", allow_hyphen_values = true)]
    apply: Option<String>,
    /// Log filter such as `debug` or `facelet_cube=info`; overrides RUST_LOG
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let history = History::from_pattern(cli.pattern).context("building the start position")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(moves) = cli.apply {
        let moves: MoveSequence<Move333> = moves.parse()?;
        let cube = history.current().apply_sequence(&moves)?;
        write!(out, "{cube}")?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    Session { history }.run(&mut input, &mut out)
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

struct Session {
    history: History,
}

impl Session {
    fn run(mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        loop {
            writeln!(
                out,
                "Type a command: help, [FRULDB][2'], [fruldb][2'], [xyz][2'], exit, reset, undo, \
                 history, list, apply, read, or [0-{}]",
                PATTERNS.len() - 1
            )?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            if self.handle(line.trim(), input, out)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn handle(&mut self, line: &str, input: &mut impl BufRead, out: &mut impl Write) -> Result<Flow> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            write!(out, "{}", self.history.current())?;
            return Ok(Flow::Continue);
        };

        match first.to_ascii_lowercase().as_str() {
            "exit" | "quit" => return Ok(Flow::Exit),
            "help" => help(out)?,
            "reset" => {
                self.history = self.history.reset();
                write!(out, "{}", self.history.current())?;
            }
            "undo" => {
                if self.history.undo().is_none() {
                    writeln!(out, "nothing to undo")?;
                }
                write!(out, "{}", self.history.current())?;
            }
            "history" => {
                for (i, cube) in self.history.iter().enumerate() {
                    writeln!(out, "{}: step = {}, path={}", i + 1, cube.step(), cube.path())?;
                }
            }
            "list" => {
                for (i, pattern) in PATTERNS.iter().enumerate() {
                    writeln!(out, "{i}:\t{}", pattern.description)?;
                }
            }
            "read" => {
                if let Some(cube) = read_cube(input, out)? {
                    self.history = History::new(cube);
                }
                write!(out, "{}", self.history.current())?;
            }
            "apply" => self.apply(&words.collect::<Vec<_>>(), out)?,
            _ if first.starts_with(|c: char| c.is_ascii_digit()) => match line.parse::<usize>() {
                Ok(index) => {
                    self.history = History::from_pattern(index)?;
                    let pattern = Pattern::get(index);
                    let undo = pattern.sequence()?.inverse().cancel();
                    if !undo.is_empty() {
                        writeln!(out, "{}, undone by: {undo}", pattern.description)?;
                    }
                    write!(out, "{}", self.history.current())?;
                }
                Err(e) => writeln!(out, "[{line}] is not a pattern number: {e}")?,
            },
            _ => match line.parse::<Move333>() {
                Ok(mv) => {
                    let state = mv.act_on(self.history.current())?;
                    self.record(state, out)?;
                }
                Err(_) => writeln!(out, "invalid input!")?,
            },
        }
        Ok(Flow::Continue)
    }

    /// Apply all of `names`, or none of them if any is not a move.
    fn apply(&mut self, names: &[&str], out: &mut impl Write) -> Result<()> {
        if names.is_empty() {
            writeln!(out, "please specify a sequence of moves")?;
            return Ok(());
        }

        let invalid: Vec<&str> = names
            .iter()
            .copied()
            .filter(|name| !Move333::is_valid_name(name))
            .collect();
        for name in &invalid {
            writeln!(out, "please remove the invalid move [{name}] from the input")?;
        }
        if !invalid.is_empty() {
            return Ok(());
        }

        let moves = names
            .iter()
            .map(|name| name.parse())
            .collect::<Result<MoveSequence<Move333>, Error>>()?;
        let shortened = moves.clone().cancel();
        if shortened.len() < moves.len() {
            writeln!(out, "the moves reduce to [{shortened}]")?;
        }
        let state = self.history.current().apply_sequence(&moves)?;
        self.record(state, out)
    }

    fn record(&mut self, state: Cube, out: &mut impl Write) -> Result<()> {
        match self.history.add_if_not_duplicate(state)? {
            Recorded::Added => {}
            Recorded::Duplicate { index, step, path } => writeln!(
                out,
                "the new state is the same as history entry {index} (step = {step}, \
                 path={path}), not recorded"
            )?,
            Recorded::Similar { index, step, path } => writeln!(
                out,
                "the new state is a rotation of history entry {index} (step = {step}, \
                 path={path})"
            )?,
        }
        write!(out, "{}", self.history.current())?;
        Ok(())
    }
}

fn help(out: &mut impl Write) -> io::Result<()> {
    let last = PATTERNS.len() - 1;
    writeln!(out, "help: this text.")?;
    writeln!(out, "exit: leave the program.")?;
    writeln!(out, "reset: go back to the start position.")?;
    writeln!(out, "undo: take back the last move.")?;
    writeln!(out, "history: the states visited so far.")?;
    writeln!(out, "list: the {} start patterns.", PATTERNS.len())?;
    writeln!(out, "<n>: start from pattern n (n = 0..{last}).")?;
    writeln!(out, "read: type in the colours of a cube to start from.")?;
    writeln!(out, "apply <move> <move> ...: apply a sequence of moves, e.g. `apply U D'`.")?;
    writeln!(out, "x, y, z: turn the whole cube as R, U and F do.")?;
    for face in FaceId::ARRAY {
        let letter = face.letter();
        writeln!(
            out,
            "\t{letter}, {letter}2, {letter}': turn the {face} face 90, 180 or 270 degrees \
             clockwise; {} turns the middle slice with it.",
            letter.to_ascii_lowercase()
        )?;
    }
    Ok(())
}

/// Read one grid line per face. Returns `None` if the user gives up or the input ends.
fn read_cube(input: &mut impl BufRead, out: &mut impl Write) -> Result<Option<Cube>> {
    writeln!(out, "Please input the colours of the cube, for example:\n{GRID_EXAMPLE}")?;

    let mut grid = ColorGrid::default();
    for slot in FaceId::ARRAY {
        loop {
            write!(out, "Face {slot}: ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }
            match ColorGrid::parse_face(slot, line) {
                Ok(face) => {
                    grid.set_face(slot, face);
                    break;
                }
                Err(e) => writeln!(out, "{e}")?,
            }
        }
    }

    match Cube::from_grid(&grid) {
        Ok(cube) => Ok(Some(cube)),
        Err(e @ Error::InvalidConfiguration(_)) => {
            writeln!(out, "{e}")?;
            Ok(None)
        }
        Err(e) => Err(e).context("reading a cube"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session() -> Session {
        Session {
            history: History::new(Cube::solved()),
        }
    }

    fn send(session: &mut Session, line: &str, input: &str) -> (Flow, String) {
        let mut out = Vec::new();
        let flow = session
            .handle(line, &mut Cursor::new(input.as_bytes()), &mut out)
            .unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn moves_and_undo() {
        let mut s = session();
        send(&mut s, "R", "");
        assert_eq!(s.history.len(), 2);

        let (_, text) = send(&mut s, "R'", "");
        assert!(text.contains("same as history entry 1 (step = 0, path=)"));
        assert_eq!(s.history.len(), 2);

        send(&mut s, "undo", "");
        assert_eq!(s.history.len(), 1);
        let (_, text) = send(&mut s, "UNDO", "");
        assert!(text.contains("nothing to undo"));
    }

    #[test]
    fn apply_is_all_or_nothing() {
        let mut s = session();
        let (_, text) = send(&mut s, "apply R Q U w2", "");
        assert!(text.contains("[Q]"));
        assert!(text.contains("[w2]"));
        assert_eq!(s.history.len(), 1);

        send(&mut s, "Apply R U R' U'", "");
        assert_eq!(s.history.len(), 2);
        assert_eq!(s.history.current().path(), "RUR'U'");

        let (_, text) = send(&mut s, "apply", "");
        assert!(text.contains("please specify"));

        let (_, text) = send(&mut s, "apply U R R U'", "");
        assert!(text.contains("the moves reduce to [U R2 U']"));
        assert_eq!(s.history.current().path(), "RUR'U'URRU'");
    }

    #[test]
    fn pattern_prints_its_inverse() {
        let mut s = session();
        let (_, text) = send(&mut s, "37", "");
        assert!(text.contains("L shape, undone by: F R U R' U' F'"));
        let (_, text) = send(&mut s, "0", "");
        assert!(!text.contains("undone by"));
    }

    #[test]
    fn invalid_input_and_exit() {
        let mut s = session();
        let (flow, text) = send(&mut s, "hello", "");
        assert_eq!(flow, Flow::Continue);
        assert!(text.contains("invalid input!"));
        assert_eq!(send(&mut s, "Exit", "").0, Flow::Exit);
    }

    #[test]
    fn duplicate_names_the_earlier_move_counter() {
        let mut s = session();
        send(&mut s, "8", "");
        send(&mut s, "R", "");
        let (_, text) = send(&mut s, "R'", "");
        assert!(text.contains("same as history entry 1 (step = 6, path=U2D2F2B2R2L2)"));
    }

    #[test]
    fn patterns_and_reset() {
        let mut s = session();
        send(&mut s, "8", "");
        assert_eq!(s.history.current().path(), "U2D2F2B2R2L2");
        send(&mut s, "U", "");
        send(&mut s, "reset", "");
        assert_eq!(s.history.len(), 1);
        assert_eq!(s.history.current().path(), "U2D2F2B2R2L2");

        let (_, text) = send(&mut s, "list", "");
        assert_eq!(text.lines().count(), PATTERNS.len());
    }

    #[test]
    fn read_a_cube() {
        let mut s = session();
        send(&mut s, "F", "");
        send(&mut s, "read", &ColorGrid::default().to_string());
        assert_eq!(s.history.len(), 1);
        assert_eq!(s.history.current(), &Cube::solved());

        // a bad line is asked again, and quitting keeps the current history
        send(&mut s, "U", "");
        send(&mut s, "read", "g g g\nquit\n");
        assert_eq!(s.history.len(), 2);

        send(&mut s, "read", GRID_EXAMPLE);
        assert_eq!(s.history.len(), 1);
        assert_ne!(s.history.current(), &Cube::solved());
    }

    #[test]
    fn run_until_end_of_input() {
        let mut out = Vec::new();
        session()
            .run(&mut Cursor::new("R\n\nhistory\n".as_bytes()), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("2: step = 1, path=R"));
    }
}
