use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;

use crate::error::{BenchError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrices {
    /// Rows of A, and columns of B.
    pub rows: usize,
    /// Columns of A, and rows of B.
    pub inner: usize,
    /// Base seed for operand generation; iteration `i` uses `seed + i`.
    /// `None` draws fresh entropy every iteration.
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    pub iterations: usize,
    pub data_dir: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Logging {
    pub level: LevelFilter,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    pub matrices: Matrices,
    pub run: Run,
    pub log: Logging,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            matrices: Matrices {
                rows: 300,
                inner: 400,
                seed: None,
            },
            run: Run {
                iterations: 5,
                data_dir: "matrices".into(),
            },
            log: Logging {
                level: LevelFilter::Info,
            },
        }
    }
}

impl BenchConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        Self::parse(&s)
    }

    /// Parse `section.key = value` lines on top of the defaults.
    ///
    /// `#` starts a comment unless it sits inside a quoted string. Strings may
    /// be quoted. Unknown keys are errors.
    pub fn parse(s: &str) -> Result<Self> {
        let mut cfg = Self::default();
        for (lineno, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let err = |reason: String| BenchError::Config {
                line: lineno + 1,
                reason,
            };
            let Some((lhs, rhs)) = line.split_once('=') else {
                return Err(err(format!("expected `key = value`, got {line:?}")));
            };
            let val = strip_comment(rhs).trim();
            let Some((section, key)) = lhs.trim().split_once('.') else {
                return Err(err(format!("key {:?} has no section", lhs.trim())));
            };
            cfg.set(section.trim(), key.trim(), val).map_err(err)?;
        }
        if cfg.run.iterations == 0 {
            return Err(BenchError::Config {
                line: 0,
                reason: "run.iterations must be at least 1".into(),
            });
        }
        Ok(cfg)
    }

    fn set(&mut self, section: &str, key: &str, val: &str) -> std::result::Result<(), String> {
        macro_rules! parse {
            (s) => {
                val.trim_matches('"').to_string()
            };
            (usize_) => {
                val.parse::<usize>().map_err(|e| format!("bad integer {val:?}: {e}"))?
            };
            (u64_) => {
                val.parse::<u64>().map_err(|e| format!("bad integer {val:?}: {e}"))?
            };
        }
        match (section, key) {
            ("matrices", "rows") => self.matrices.rows = parse!(usize_),
            ("matrices", "inner") => self.matrices.inner = parse!(usize_),
            ("matrices", "seed") => self.matrices.seed = Some(parse!(u64_)),

            ("run", "iterations") => self.run.iterations = parse!(usize_),
            ("run", "data_dir") => self.run.data_dir = PathBuf::from(parse!(s)),

            ("log", "level") => {
                self.log.level = parse!(s)
                    .parse::<LevelFilter>()
                    .map_err(|_| format!("bad log level {val:?}"))?
            }

            _ => return Err(format!("unknown key {section}.{key}")),
        }
        Ok(())
    }

    pub fn matrix_a_path(&self) -> PathBuf {
        self.run.data_dir.join("matrix_A.txt")
    }

    pub fn matrix_b_path(&self) -> PathBuf {
        self.run.data_dir.join("matrix_B.txt")
    }

    /// Where the persisted reference product is written.
    pub fn result_path(&self) -> PathBuf {
        self.run.data_dir.join("result.txt")
    }

    pub fn report_path(&self) -> PathBuf {
        self.run.data_dir.join("result_report.txt")
    }

    /// Operand seed for a 1-based iteration index.
    pub fn seed_for(&self, iteration: usize) -> Option<u64> {
        self.matrices.seed.map(|s| s.wrapping_add(iteration as u64))
    }
}

/// Cut a trailing `# comment`, ignoring `#` inside double quotes.
fn strip_comment(s: &str) -> &str {
    let mut in_quotes = false;
    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '#' if !in_quotes => return &s[..i],
            _ => {}
        }
    }
    s
}
