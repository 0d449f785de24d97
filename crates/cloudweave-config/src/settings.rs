//! 実行時設定（バックオフ・リトライ・Glueウェイターのタイムアウト）

use crate::error::{ConfigError, Result};
use cloudweave_cloud::{BackoffConfig, RetryConfig};
use cloudweave_cloud_aws::GlueTimeouts;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Glueウェイターのタイムアウト上限（7日）
pub const MAX_WAIT_SECS: u64 = 7 * 24 * 60 * 60;

/// weave.yaml の内容
///
/// すべての項目にデフォルト値があるため、一部だけを書いたファイルも読み込めます。
///
/// ```yaml
/// backoff:
///   initial_delay_ms: 200
/// glue:
///   dev_endpoint_create_secs: 1800
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 状態待機のポーリング間隔
    pub backoff: BackoffConfig,
    /// 一時的なAPIエラーのリトライ
    pub retry: RetryConfig,
    /// Glueウェイターごとのタイムアウト
    pub glue: GlueTimeouts,
}

impl Settings {
    pub fn from_yaml(content: &str) -> Result<Self> {
        // 空ファイルはデフォルト設定として扱う
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Settings = serde_yaml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// 設定ファイルを探して読み込む（見つからなければデフォルト）
    pub fn load() -> Result<Self> {
        match crate::find_settings_file() {
            Ok(path) => load_settings(path),
            Err(ConfigError::SettingsFileNotFound) => {
                tracing::debug!("設定ファイルが見つからないためデフォルト設定を使用します");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.backoff.multiplier < 1.0 {
            return Err(ConfigError::Invalid(format!(
                "backoff.multiplier は 1.0 以上である必要があります (現在: {})",
                self.backoff.multiplier
            )));
        }
        if self.backoff.initial_delay_ms == 0 {
            return Err(ConfigError::Invalid(
                "backoff.initial_delay_ms は 1 以上である必要があります".to_string(),
            ));
        }
        if self.backoff.initial_delay_ms > self.backoff.max_delay_ms {
            return Err(ConfigError::Invalid(
                "backoff.initial_delay_ms が backoff.max_delay_ms を超えています".to_string(),
            ));
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "retry.max_attempts は 1 以上である必要があります".to_string(),
            ));
        }
        if self.retry.backoff_multiplier < 1.0 {
            return Err(ConfigError::Invalid(format!(
                "retry.backoff_multiplier は 1.0 以上である必要があります (現在: {})",
                self.retry.backoff_multiplier
            )));
        }
        for (name, secs) in self.glue.entries() {
            if secs == 0 || secs > MAX_WAIT_SECS {
                return Err(ConfigError::Invalid(format!(
                    "glue.{name} は 1〜{MAX_WAIT_SECS} 秒の範囲で指定してください (現在: {secs})"
                )));
            }
        }
        Ok(())
    }
}

/// 指定パスの設定ファイルを読み込む
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!("設定ファイルを読み込みました: {}", path.display());
    Settings::from_yaml(&content)
}
