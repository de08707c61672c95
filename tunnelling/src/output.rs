use std::{
    fs::{File, create_dir_all},
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("no data columns to save")]
    NoColumns,

    #[error("column {index} has {found} values, expected {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to serialize data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Saves same length columns as a tab separated table under `dir/filename.dat`.
pub fn save_data(
    dir: &Path,
    filename: &str,
    header: &str,
    data: &[&[f64]],
) -> Result<PathBuf, OutputError> {
    let n = data.first().ok_or(OutputError::NoColumns)?.len();
    if let Some((index, values)) = data.iter().enumerate().find(|(_, v)| v.len() != n) {
        return Err(OutputError::LengthMismatch {
            index,
            expected: n,
            found: values.len(),
        });
    }

    let mut buf = header.to_string();
    for i in 0..n {
        let line = data
            .iter()
            .fold(String::new(), |s, val| s + &format!("\t{:e}", val[i]));

        buf.push_str(&format!("\n{}", line.trim()));
    }

    write_file(dir, filename, "dat", buf.as_bytes())
}

/// Saves json serialization of `data` under `dir/filename.json`.
pub fn save_serialize(
    dir: &Path,
    filename: &str,
    data: &impl Serialize,
) -> Result<PathBuf, OutputError> {
    let buf = serde_json::to_string(data)?;

    write_file(dir, filename, "json", buf.as_bytes())
}

fn write_file(
    dir: &Path,
    filename: &str,
    extension: &str,
    buf: &[u8],
) -> Result<PathBuf, OutputError> {
    let mut path = dir.join(filename);
    path.set_extension(extension);

    let io_error = |source| OutputError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(filepath) = path.parent() {
        if !filepath.exists() {
            create_dir_all(filepath).map_err(io_error)?;
            log::info!("created path {}", filepath.display());
        }
    }

    let mut file = File::create(&path).map_err(io_error)?;
    file.write_all(buf).map_err(io_error)?;

    log::info!("saved data on {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod test {
    use super::*;

    fn test_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tunnelling-output-{}-{}", name, std::process::id()))
    }

    #[test]
    fn data_table() {
        let dir = test_dir("table");
        let path =
            save_data(&dir, "fusion/plot", "energy\tT", &[&[1.0, 2.0], &[0.5, 1.0]]).unwrap();

        assert_eq!(path, dir.join("fusion/plot.dat"));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "energy\tT\n1e0\t5e-1\n2e0\t1e0");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn rejects_ragged_columns() {
        let dir = test_dir("ragged");
        let result = save_data(&dir, "ragged", "a\tb", &[&[1.0, 2.0], &[1.0]]);
        assert!(matches!(
            result,
            Err(OutputError::LengthMismatch { index: 1, expected: 2, found: 1 })
        ));

        assert!(matches!(save_data(&dir, "none", "", &[]), Err(OutputError::NoColumns)));
        assert!(!dir.exists());
    }

    #[test]
    fn json() {
        let dir = test_dir("json");
        let path = save_serialize(&dir, "values", &vec![1.0, 0.5]).unwrap();

        assert_eq!(path, dir.join("values.json"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1.0,0.5]");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
