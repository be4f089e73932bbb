use crate::shared::errors::{AppError, AppResult};
use url::Url;

/// アプリケーションの実行環境を表す列挙型
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 開発環境
    Development,
    /// プロダクション環境
    Production,
}

/// 環境設定を管理する構造体
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    /// 実行環境
    pub environment: String,
    /// デバッグモードの有効/無効
    pub debug_mode: bool,
    /// ログレベル
    pub log_level: String,
}

impl EnvironmentConfig {
    /// 環境変数から設定を読み込む
    ///
    /// # 戻り値
    /// 環境設定
    pub fn from_env() -> Self {
        let environment = get_environment();
        let debug_mode = environment == Environment::Development;
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| {
            if debug_mode {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

        Self {
            environment: format!("{environment:?}").to_lowercase(),
            debug_mode,
            log_level,
        }
    }

    /// プロダクション環境かどうかを判定
    ///
    /// # 戻り値
    /// プロダクション環境の場合はtrue
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 開発環境かどうかを判定
    ///
    /// # 戻り値
    /// 開発環境の場合はtrue
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

/// 現在の実行環境を判定する
///
/// # 戻り値
/// 現在の実行環境（Development または Production）
///
/// # 判定ロジック
/// 1. 実行時環境変数 ENVIRONMENT を確認
/// 2. デバッグビルドの場合は Development
/// 3. リリースビルドの場合は Production
pub fn get_environment() -> Environment {
    // 実行時環境変数を確認
    if let Ok(env_var) = std::env::var("ENVIRONMENT") {
        let env = match env_var.as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        };
        log::debug!("環境判定: 実行時環境変数を使用 -> {env_var} -> {env:?}");
        return env;
    }

    // フォールバック: ビルド設定に基づく判定
    let env = if cfg!(debug_assertions) {
        Environment::Development
    } else {
        Environment::Production
    };
    log::debug!(
        "環境判定: ビルド設定を使用 -> debug_assertions={} -> {env:?}",
        cfg!(debug_assertions)
    );
    env
}

/// バックエンドAPIへの接続設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// APIのベースURL
    pub base_url: Url,
}

/// デフォルトのベースURL（ローカル開発用バックエンド）
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

impl ApiConfig {
    /// 環境変数からAPI設定を読み込む
    ///
    /// # 戻り値
    /// API設定、またはベースURLが不正な場合はエラー
    ///
    /// # 環境変数
    /// - `SUBSCRIPTION_API_BASE_URL`: APIのベースURL（未設定時はローカル開発用のデフォルト）
    pub fn from_env() -> AppResult<Self> {
        let raw = std::env::var("SUBSCRIPTION_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(&raw)
    }

    /// 指定されたベースURLからAPI設定を作成する
    ///
    /// # 引数
    /// * `base_url` - APIのベースURL文字列
    ///
    /// # 戻り値
    /// API設定、またはURLが不正な場合はエラー
    pub fn with_base_url(base_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::configuration(format!("ベースURLが不正です: {e}")))?;
        Ok(Self { base_url })
    }

    /// エンドポイントの完全なURLを組み立てる
    ///
    /// # 引数
    /// * `path` - ベースURLからの相対パス（例: "/subscription/list"）
    ///
    /// # 戻り値
    /// 完全なURL、またはパスが不正な場合はエラー
    pub fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::configuration(format!("エンドポイントパスが不正です: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url() {
        // ベースURL設定のテスト
        let config = ApiConfig::with_base_url("http://localhost:8000").unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_with_invalid_base_url() {
        // 不正なベースURLのテスト
        let result = ApiConfig::with_base_url("not a url");
        assert!(result.is_err());
    }

    #[test]
    fn test_endpoint_join() {
        // エンドポイント組み立てのテスト
        let config = ApiConfig::with_base_url("http://localhost:8000").unwrap();
        let url = config.endpoint("/subscription/list").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/subscription/list");

        let url = config.endpoint("/subscription/update/42").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/subscription/update/42");
    }

    #[test]
    fn test_environment_config_defaults() {
        // 環境設定のデフォルト値テスト
        let config = EnvironmentConfig::from_env();
        assert!(config.is_development() || config.is_production());
    }
}
