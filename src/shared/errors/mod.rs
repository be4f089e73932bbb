use thiserror::Error;

/// アプリケーション全体で使用される統一エラー型
#[derive(Debug, Error)]
pub enum AppError {
    /// バックエンドが構造化エラー（detailフィールド）を返した場合のエラー
    #[error("APIエラー: {0}")]
    Api(String),

    /// ネットワーク・HTTP関連のエラー（detailなし）
    #[error("通信エラー: {0}")]
    Transport(String),

    /// レスポンス形式が想定と異なる場合のエラー（リストが配列でない等）
    #[error("レスポンス形式エラー: {0}")]
    Shape(String),

    /// バリデーション関連のエラー
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 認証関連のエラー
    #[error("認証エラー: {0}")]
    Auth(String),

    /// 設定関連のエラー
    #[error("設定エラー: {0}")]
    Configuration(String),

    /// JSON解析エラー
    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// ユーザーに表示するためのフレンドリーなメッセージを取得
    ///
    /// # 戻り値
    /// ユーザーに表示可能なエラーメッセージ
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(detail) => detail.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Auth(msg) => msg.clone(),
            AppError::Transport(_) => "Network error. Please try again.".to_string(),
            AppError::Shape(_) => "Invalid response format from server.".to_string(),
            AppError::Configuration(_) => "設定エラーが発生しました".to_string(),
            AppError::Json(_) => "Invalid response format from server.".to_string(),
        }
    }

    /// エラーの詳細情報を取得
    ///
    /// # 戻り値
    /// エラーの詳細情報（ログ出力用）
    pub fn details(&self) -> String {
        format!("{self}")
    }

    /// バックエンドのdetail由来のエラーかどうかを判定
    ///
    /// # 戻り値
    /// 構造化エラーメッセージを保持している場合はtrue
    pub fn has_detail(&self) -> bool {
        matches!(self, AppError::Api(_))
    }

    /// APIエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `detail` - バックエンドが返したdetailメッセージ
    ///
    /// # 戻り値
    /// APIエラー
    pub fn api<S: Into<String>>(detail: S) -> Self {
        AppError::Api(detail.into())
    }

    /// 通信エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - 通信エラーメッセージ
    ///
    /// # 戻り値
    /// 通信エラー
    pub fn transport<S: Into<String>>(message: S) -> Self {
        AppError::Transport(message.into())
    }

    /// レスポンス形式エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - 形式エラーメッセージ
    ///
    /// # 戻り値
    /// レスポンス形式エラー
    pub fn shape<S: Into<String>>(message: S) -> Self {
        AppError::Shape(message.into())
    }

    /// バリデーションエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - バリデーションエラーメッセージ
    ///
    /// # 戻り値
    /// バリデーションエラー
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// 認証エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - 認証エラーメッセージ
    ///
    /// # 戻り値
    /// 認証エラー
    pub fn auth<S: Into<String>>(message: S) -> Self {
        AppError::Auth(message.into())
    }

    /// 設定エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - 設定エラーメッセージ
    ///
    /// # 戻り値
    /// 設定エラー
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

/// AppErrorからStringへの変換（呼び出し側でのアラート表示のため）
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.user_message()
    }
}

/// reqwest::ErrorからAppErrorへの変換
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Transport(error.to_string())
    }
}

/// Result型のエイリアス（アプリケーション全体で使用）
pub type AppResult<T> = Result<T, AppError>;
