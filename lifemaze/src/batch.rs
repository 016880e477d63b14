//! Solving every maze of an input file.
//!
//! Each non-blank line is an independent maze. Lines are solved one after
//! another, or on a rayon pool when [`Config::parallel`] is set; either way
//! the outcomes come back in input order and a bad line does not stop the
//! others.

use std::fs;
use std::io::Write;
use std::path::Path;

use lifemaze_core::draw;
use rayon::prelude::*;

use crate::Result;
use crate::config::Config;
use crate::format::render;
use crate::record::parse_record;
use crate::solve::{Solution, Solver};

/// How a whole run ended. Maps onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every line produced a move list (possibly empty).
    Success,
    /// The input could not be read or the results could not be written.
    IoFailed,
    /// At least one line could not be parsed or built.
    LineFailed,
}

impl RunStatus {
    /// Process exit code: 0, 1 or 2.
    pub fn code(self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::IoFailed => 1,
            RunStatus::LineFailed => 2,
        }
    }
}

/// Result for one input line.
#[derive(Debug)]
pub struct Outcome {
    /// 1-based line number in the input.
    pub line: usize,
    pub result: Result<Solution>,
}

/// Read the whole input file.
pub fn read_input(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

fn solve_line(solver: &mut Solver, line: &str, config: &Config) -> Result<Solution> {
    let record = parse_record(line)?;
    solver.solve(&record, config.lives)
}

/// Solve every maze in `input`, skipping blank lines.
pub fn solve_batch(input: &str, config: &Config) -> Vec<Outcome> {
    let lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| (i + 1, l))
        .collect();
    log::info!(
        "solving {} mazes with {} lives{}",
        lines.len(),
        config.lives,
        if config.parallel { " in parallel" } else { "" }
    );

    if config.parallel {
        lines
            .par_iter()
            .map_init(Solver::new, |solver, &(line, text)| Outcome {
                line,
                result: solve_line(solver, text, config),
            })
            .collect()
    } else {
        let mut solver = Solver::new();
        lines
            .iter()
            .map(|&(line, text)| Outcome {
                line,
                result: solve_line(&mut solver, text, config),
            })
            .collect()
    }
}

/// Solve `input` and write one rendered move list per good line to `out`.
///
/// Bad lines are logged and skipped. With [`Config::draw`] set, each maze's
/// encodings, picture and arrow line go to `diag`.
pub fn run<W: Write, D: Write>(
    input: &str,
    config: &Config,
    out: &mut W,
    diag: &mut D,
) -> Result<RunStatus> {
    let mut status = RunStatus::Success;
    for outcome in solve_batch(input, config) {
        let solution = match outcome.result {
            Ok(solution) => solution,
            Err(e) => {
                log::error!("line {}: {e}", outcome.line);
                status = RunStatus::LineFailed;
                continue;
            }
        };
        if config.draw {
            write!(diag, "{}", draw::raw_matrix(&solution.maze))?;
            write!(diag, "{}", draw::draw(&solution.maze, &solution.path))?;
            if solution.is_solved() {
                writeln!(diag, "{}", draw::arrows(&solution.directions))?;
            }
        }
        writeln!(out, "{}", render(&solution.directions, config.format)?)?;
    }
    Ok(status)
}

/// Read the file at `path` and [`run`] it.
pub fn run_file<W: Write, D: Write>(
    path: &Path,
    config: &Config,
    out: &mut W,
    diag: &mut D,
) -> RunStatus {
    let input = match read_input(path) {
        Ok(input) => input,
        Err(e) => {
            log::error!("cannot read {}: {e}", path.display());
            log::error!("expected one maze per line: (<rows>,<columns>)-[#,#,#,...]");
            return RunStatus::IoFailed;
        }
    };
    match run(&input, config, out, diag) {
        Ok(status) => status,
        Err(e) => {
            log::error!("cannot write results: {e}");
            RunStatus::IoFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LifemazeError;
    use crate::format::{OutputFormat, render};
    use lifemaze_core::LifeBudget;

    const INPUT: &str = "\
(3,3)-[34,14,12,6,77,5,1,19,9]

(1,1)-[48]
not a maze
(1,2)-[16,32]
(2,2)-[16,32]
";

    fn rendered(outcomes: &[Outcome]) -> Vec<String> {
        outcomes
            .iter()
            .map(|o| match &o.result {
                Ok(s) => render(&s.directions, OutputFormat::List).unwrap(),
                Err(_) => "error".to_string(),
            })
            .collect()
    }

    #[test]
    fn batch_keeps_order_and_line_numbers() {
        let outcomes = solve_batch(INPUT, &Config::default());
        let lines: Vec<usize> = outcomes.iter().map(|o| o.line).collect();
        assert_eq!(lines, [1, 3, 4, 5, 6]);
        assert_eq!(
            rendered(&outcomes),
            ["['up','up','left']", "[]", "error", "[]", "error"]
        );
        assert!(matches!(outcomes[2].result, Err(LifemazeError::Record(_))));
        assert!(matches!(outcomes[4].result, Err(LifemazeError::Maze(_))));
    }

    #[test]
    fn parallel_matches_sequential() {
        let input: String = (0..40)
            .map(|i| {
                if i % 2 == 0 {
                    "(3,3)-[34,14,12,6,77,5,1,19,9]\n"
                } else {
                    "(1,1)-[48]\n"
                }
            })
            .collect();
        for lives in [1, 3] {
            let config = Config {
                lives: LifeBudget::new(lives).unwrap(),
                ..Config::default()
            };
            let parallel = Config {
                parallel: true,
                ..config
            };
            assert_eq!(
                rendered(&solve_batch(&input, &config)),
                rendered(&solve_batch(&input, &parallel))
            );
        }
    }

    #[test]
    fn lives_setting_applies_to_every_maze() {
        let config = Config {
            lives: LifeBudget::new(1).unwrap(),
            ..Config::default()
        };
        let outcomes = solve_batch(INPUT, &config);
        assert_eq!(rendered(&outcomes)[0], "['right','up','up','left','left']");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_input(Path::new("/nonexistent/mazes.txt")).unwrap_err();
        assert!(matches!(err, LifemazeError::Io(_)));
    }

    fn run_str(input: &str, config: &Config) -> (RunStatus, String, String) {
        let (mut out, mut diag) = (Vec::new(), Vec::new());
        let status = run(input, config, &mut out, &mut diag).unwrap();
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(diag).unwrap(),
        )
    }

    #[test]
    fn run_skips_bad_lines_and_reports_failure() {
        let (status, out, diag) = run_str(INPUT, &Config::default());
        assert_eq!(status, RunStatus::LineFailed);
        assert_eq!(status.code(), 2);
        assert_eq!(out, "['up','up','left']\n[]\n[]\n");
        assert!(diag.is_empty());
    }

    #[test]
    fn run_of_good_lines_succeeds() {
        let input = "(3,3)-[34,14,12,6,77,5,1,19,9]\n(1,1)-[48]\n";
        let config = Config {
            format: OutputFormat::Json,
            ..Config::default()
        };
        let (status, out, _) = run_str(input, &config);
        assert_eq!(status, RunStatus::Success);
        assert_eq!(status.code(), 0);
        assert_eq!(out, "[\"up\",\"up\",\"left\"]\n[]\n");
    }

    #[test]
    fn run_draws_to_diagnostics_only() {
        let config = Config {
            draw: true,
            ..Config::default()
        };
        let (status, out, diag) = run_str("(3,3)-[34,14,12,6,77,5,1,19,9]\n", &config);
        assert_eq!(status, RunStatus::Success);
        assert_eq!(out, "['up','up','left']\n");
        assert!(diag.contains("+ E   *     +\n"));
        assert!(diag.ends_with("S ^ ^ < E\n"));
    }

    #[test]
    fn run_file_exit_codes() {
        let config = Config::default();
        let (mut out, mut diag) = (Vec::new(), Vec::new());
        let missing = run_file(Path::new("/nonexistent/mazes.txt"), &config, &mut out, &mut diag);
        assert_eq!(missing, RunStatus::IoFailed);
        assert_eq!(missing.code(), 1);
        assert!(out.is_empty());

        let path = std::env::temp_dir().join(format!("lifemaze-run-{}.txt", std::process::id()));
        fs::write(&path, INPUT).unwrap();
        let status = run_file(&path, &config, &mut out, &mut diag);
        fs::remove_file(&path).unwrap();
        assert_eq!(status, RunStatus::LineFailed);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
    }
}
