// バックエンドAPIクライアントモジュール

use std::sync::Arc;

use log::{debug, info};
use reqwest::{Response, StatusCode};
use serde_json::Value;

use crate::features::auth::{CredentialStore, Credentials, LoginResponse, RegisterRequest, UserProfile};
use crate::features::subscriptions::{Subscription, SubscriptionDraft, SubscriptionRepository};
use crate::shared::config::ApiConfig;
use crate::shared::errors::{AppError, AppResult};

/// バックエンドREST APIのクライアント
///
/// `SubscriptionRepository`の本番実装。トークンは注入された
/// `CredentialStore`から都度取り出してBearerヘッダに付与する。
/// タイムアウトは設けず、失敗はトランスポート層の明示的な拒否
/// としてのみ報告される。
#[derive(Clone)]
pub struct ApiClient {
    /// 接続設定
    config: ApiConfig,
    /// HTTPクライアント
    http_client: reqwest::Client,
    /// トークン保管
    credentials: Arc<dyn CredentialStore>,
}

impl ApiClient {
    /// 新しいAPIクライアントを作成する
    ///
    /// # 引数
    /// * `config` - 接続設定
    /// * `credentials` - トークン保管の実装
    ///
    /// # 戻り値
    /// ApiClientインスタンス
    pub fn new(config: ApiConfig, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
            credentials,
        }
    }

    /// ログインしてアクセストークンを保存する
    ///
    /// # 引数
    /// * `credentials` - メールアドレスとパスワード
    ///
    /// # 戻り値
    /// ログインレスポンス、または失敗時はエラー
    pub async fn login(&self, credentials: &Credentials) -> AppResult<LoginResponse> {
        let url = self.config.endpoint("/auth/login")?;
        debug!("ログインリクエストを送信しています: {}", credentials.email);

        let response = self
            .http_client
            .post(url)
            .json(credentials)
            .send()
            .await?;

        let response = check_status(response).await?;
        let login: LoginResponse = response.json().await.map_err(response_shape_error)?;

        self.credentials.store_token(login.access_token.clone());
        info!("ログインしました: {}", credentials.email);
        Ok(login)
    }

    /// ユーザーを登録する
    ///
    /// # 引数
    /// * `request` - 登録リクエスト
    ///
    /// # 戻り値
    /// 作成されたユーザープロフィール、または失敗時はエラー
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<UserProfile> {
        let url = self.config.endpoint("/auth/register")?;
        let response = self.http_client.post(url).json(request).send().await?;

        let response = check_status(response).await?;
        response.json().await.map_err(response_shape_error)
    }

    /// ログイン中ユーザーのプロフィールを取得する
    ///
    /// # 戻り値
    /// ユーザープロフィール、または失敗時はエラー
    pub async fn profile(&self) -> AppResult<UserProfile> {
        let url = self.config.endpoint("/auth/profile")?;
        let response = self.authorized(self.http_client.get(url)).send().await?;

        let response = check_status(response).await?;
        response.json().await.map_err(response_shape_error)
    }

    /// リクエストに保存済みトークンのBearerヘッダを付与する
    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.credentials.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl SubscriptionRepository for ApiClient {
    async fn list(&self) -> AppResult<Vec<Subscription>> {
        let url = self.config.endpoint("/subscription/list")?;
        let response = self.authorized(self.http_client.get(url)).send().await?;

        let response = check_status(response).await?;
        let payload: Value = response.json().await.map_err(response_shape_error)?;
        parse_subscription_list(payload)
    }

    async fn create(&self, draft: &SubscriptionDraft) -> AppResult<Subscription> {
        let url = self.config.endpoint("/subscription/add")?;
        let response = self
            .authorized(self.http_client.post(url))
            .json(draft)
            .send()
            .await?;

        let response = check_status(response).await?;
        response.json().await.map_err(response_shape_error)
    }

    async fn update(&self, id: i64, draft: &SubscriptionDraft) -> AppResult<Subscription> {
        let url = self.config.endpoint(&format!("/subscription/update/{id}"))?;
        let response = self
            .authorized(self.http_client.put(url))
            .json(draft)
            .send()
            .await?;

        let response = check_status(response).await?;
        response.json().await.map_err(response_shape_error)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let url = self.config.endpoint(&format!("/subscription/delete/{id}"))?;
        let response = self
            .authorized(self.http_client.delete(url))
            .send()
            .await?;

        // 成功レスポンスのボディ（削除済みレコード）は利用しない
        check_status(response).await?;
        Ok(())
    }
}

/// HTTPステータスを確認し、エラーレスポンスをAppErrorへ変換する
///
/// エラーボディに構造化されたdetailフィールドがあればそれを抽出して
/// `AppError::Api`にし、なければステータスベースの通信エラーにする。
///
/// # 引数
/// * `response` - HTTPレスポンス
///
/// # 戻り値
/// 成功ステータスの場合は元のレスポンス、それ以外はエラー
async fn check_status(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.json::<Value>().await.ok();
    Err(error_from_status(status, body.as_ref()))
}

/// エラーステータスとボディからAppErrorを組み立てる
fn error_from_status(status: StatusCode, body: Option<&Value>) -> AppError {
    if let Some(detail) = body.and_then(extract_detail) {
        return AppError::api(detail);
    }
    AppError::transport(format!("HTTPステータス {status}"))
}

/// エラーボディから人間可読なdetailメッセージを抽出する
fn extract_detail(body: &Value) -> Option<String> {
    body.get("detail")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// 一覧レスポンスをサブスクリプションのリストへ変換する
///
/// 配列でないペイロードは形式エラーとして扱う（一覧はクリアされ、
/// エラーが表示される。トランスポート失敗と同等の回復可能なエラー）。
///
/// # 引数
/// * `payload` - 一覧エンドポイントのレスポンスボディ
///
/// # 戻り値
/// サブスクリプションのリスト、または形式が不正な場合はエラー
fn parse_subscription_list(payload: Value) -> AppResult<Vec<Subscription>> {
    if !payload.is_array() {
        return Err(AppError::shape(format!(
            "一覧レスポンスが配列ではありません: {payload}"
        )));
    }
    serde_json::from_value(payload).map_err(AppError::from)
}

/// 成功ステータスのボディが期待した形でなかった場合のエラー変換
fn response_shape_error(error: reqwest::Error) -> AppError {
    AppError::shape(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_subscription_list_accepts_array() {
        // 配列レスポンスのパーステスト
        let payload = json!([
            {"id": 1, "name": "Netflix", "renewal_date": "2024-04-01", "start_date": null, "note": null},
            {"id": 2, "name": "Spotify", "renewal_date": "2024-05-15", "note": "family plan", "user_id": 7}
        ]);
        let items = parse_subscription_list(payload).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Netflix");
        assert_eq!(items[1].note.as_deref(), Some("family plan"));
    }

    #[test]
    fn test_parse_subscription_list_rejects_non_array() {
        // 配列でないペイロードを形式エラーにするテスト
        let payload = json!({"detail": "Internal server error"});
        let err = parse_subscription_list(payload).unwrap_err();
        assert!(matches!(err, AppError::Shape(_)));
    }

    #[test]
    fn test_extract_detail() {
        // detailフィールド抽出のテスト
        let body = json!({"detail": "Invalid credentials"});
        assert_eq!(extract_detail(&body), Some("Invalid credentials".to_string()));

        // detailが文字列でない場合は抽出しない
        let body = json!({"detail": [{"loc": ["body", "name"], "msg": "field required"}]});
        assert_eq!(extract_detail(&body), None);

        let body = json!({"error": "something"});
        assert_eq!(extract_detail(&body), None);
    }

    #[test]
    fn test_error_from_status_prefers_detail() {
        // detailが存在すればそのまま表示されるテスト
        let body = json!({"detail": "name required"});
        let err = error_from_status(StatusCode::BAD_REQUEST, Some(&body));
        assert_eq!(err.user_message(), "name required");

        // detailがなければ汎用の通信エラーになる
        let err = error_from_status(StatusCode::BAD_GATEWAY, None);
        assert!(matches!(err, AppError::Transport(_)));
    }
}
