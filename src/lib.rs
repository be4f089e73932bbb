pub mod features;
pub mod services;
pub mod shared;

use log::{info, warn};
use shared::config::EnvironmentConfig;

// 便利な再エクスポート
pub use features::auth::{
    CredentialStore, Credentials, LoginResponse, MemoryCredentialStore, RegisterRequest,
    UserProfile,
};
pub use features::subscriptions::{
    compute_stats, derive_status, is_expiring_soon, DashboardStats, RenewalStatus, RenewalTier,
    StatusColor, Subscription, SubscriptionDraft, SubscriptionForm, SubscriptionRepository,
    SubscriptionStore,
};
pub use services::ApiClient;
pub use shared::{ApiConfig, AppError, AppResult};

/// ライブラリを初期化する
///
/// ログシステムの初期化と.envファイルの読み込みを行う。プロセスの
/// 起動時に一度だけ呼び出すこと。
pub fn init() {
    // ログシステムを初期化
    initialize_logging_system();

    // 環境変数を読み込み（.envファイルがある場合）
    if dotenv::dotenv().is_err() {
        // .envファイルがない場合は無視（本番環境では環境変数が直接設定される）
        warn!(".envファイルが見つかりません。環境変数が直接設定されていることを確認してください。");
    } else {
        info!(".envファイルを読み込みました");
    }
}

/// ログシステムを初期化
fn initialize_logging_system() {
    // 環境設定を取得
    let env_config = EnvironmentConfig::from_env();

    // ログレベルを設定
    let log_level = match env_config.log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    };

    // env_loggerを初期化
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(false)
        .init();

    info!(
        "ログシステムを初期化しました: level={}, environment={}",
        env_config.log_level, env_config.environment
    );
}
