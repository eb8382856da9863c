//! Shared test constants and helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// A small bibliography covering a journal article, a preprint and an entry
/// with only a year, deliberately out of chronological order.
pub const SAMPLE_BIB: &str = r#"
@article{smith2022,
  title = {A Test, Paper.},
  author = {Smith, John and Doe, Jane},
  journal = {Phys Rev},
  volume = {12},
  pages = {345},
  year = {2022},
  month = {Mar},
  doi = {10.1103/PhysRev.12.345},
  abstract = {We study {QCD} at $T > 0$.}
}

@article{roe2019,
  title = {Preprint on {Things}},
  author = {Roe, Richard},
  year = {2019},
  month = {Jul},
  eprint = {1907.00001}
}

@misc{bare2020,
  title = {Bare Entry},
  year = {2020}
}
"#;

/// Filenames `SAMPLE_BIB` produces, in date order.
pub const SAMPLE_FILES: [&str; 3] = [
    "2019-07-01-Preprint_on_Things.md",
    "2020-01-01-Bare_Entry.md",
    "2022-03-01-A_Test_Paper.md",
];

/// Writes `content` as `bib.bib` inside `dir` and returns its path.
pub fn write_bib(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("bib.bib");
    fs::write(&path, content).unwrap();
    path
}

/// Reads every file in `dir`, sorted by name.
pub fn read_dir_sorted(dir: &Path) -> Vec<(String, String)> {
    let mut files: Vec<(String, String)> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            (name, fs::read_to_string(&path).unwrap())
        })
        .collect();
    files.sort();
    files
}
