pub mod error;
pub mod settings;

pub use error::*;
pub use settings::{Settings, load_settings};

use std::path::PathBuf;

/// 設定ファイルのパスを直接指定する環境変数
pub const CONFIG_PATH_ENV: &str = "WEAVE_CONFIG_PATH";

/// 各ディレクトリで探すファイル名（先頭が優先）
pub const SETTINGS_FILE_NAMES: [&str; 2] = ["weave.yaml", ".weave.yaml"];

/// 設定ファイルを探す
///
/// `WEAVE_CONFIG_PATH` が存在するファイルを指していればそれを使う。
/// なければカレントディレクトリ、`./.cloudweave/`、
/// ユーザー設定ディレクトリ (`~/.config/cloudweave/`) の順に探す。
pub fn find_settings_file() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from) {
        if path.is_file() {
            return Ok(path);
        }
        tracing::warn!("{} が存在しないパスを指しています: {}", CONFIG_PATH_ENV, path.display());
    }

    search_dirs()?
        .iter()
        .flat_map(|dir| SETTINGS_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
        .ok_or(ConfigError::SettingsFileNotFound)
}

fn search_dirs() -> Result<Vec<PathBuf>> {
    let current_dir = std::env::current_dir()?;
    let mut candidates = vec![current_dir.clone(), current_dir.join(".cloudweave")];

    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("cloudweave"));
    }
    Ok(candidates)
}
