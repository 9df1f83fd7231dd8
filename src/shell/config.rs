// Runtime settings for the binary.
//
// `.env` is loaded when present; the process environment wins over it.

use std::env;
use std::path::PathBuf;

const DATA_DIR_VAR: &str = "WATER_BILLING_DATA_DIR";
const OPERATOR_VAR: &str = "WATER_BILLING_OPERATOR";
const EXPORT_DIR_VAR: &str = "WATER_BILLING_EXPORT_DIR";

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_OPERATOR: &str = "System Admin";

#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub operator: String,
    pub export_dir: PathBuf,
}

impl Settings {
    pub fn load() -> anyhow::Result<Self> {
        tolerate_missing_env_file(dotenvy::dotenv())?;

        let data_dir = non_blank(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let operator = non_blank(OPERATOR_VAR).unwrap_or_else(|| DEFAULT_OPERATOR.to_string());
        let export_dir = non_blank(EXPORT_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.clone());

        Ok(Self {
            data_dir,
            operator,
            export_dir,
        })
    }
}

fn tolerate_missing_env_file<T>(loaded: Result<T, dotenvy::Error>) -> anyhow::Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(anyhow::Error::new(e).context("load .env")),
    }
}

fn non_blank(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::fs;

    #[rstest]
    fn it_should_ignore_a_missing_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = dotenvy::from_path(dir.path().join(".env"));
        assert!(tolerate_missing_env_file(loaded).is_ok());
    }

    #[rstest]
    fn it_should_report_a_malformed_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "this line is not an assignment\n").unwrap();

        let error = tolerate_missing_env_file(dotenvy::from_path(&path)).unwrap_err();
        assert!(error.to_string().contains(".env"));
    }
}
