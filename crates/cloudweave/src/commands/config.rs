use cloudweave_config::{ConfigError, Settings, find_settings_file, load_settings};
use colored::Colorize;

/// 有効な設定をYAMLで表示
pub fn show() -> anyhow::Result<()> {
    let settings = match find_settings_file() {
        Ok(path) => {
            eprintln!("設定ファイル: {}", path.display().to_string().cyan());
            load_settings(&path)?
        }
        Err(ConfigError::SettingsFileNotFound) => {
            eprintln!("{}", "設定ファイルが見つからないためデフォルト設定を表示します".yellow());
            Settings::default()
        }
        Err(e) => return Err(e.into()),
    };

    print!("{}", settings.to_yaml()?);
    Ok(())
}
