use serde::{Deserialize, Serialize};

/// ログイン資格情報
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// メールアドレス
    pub email: String,
    /// パスワード
    pub password: String,
}

/// ユーザー登録リクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// メールアドレス
    pub email: String,
    /// パスワード
    pub password: String,
    /// 電話番号（任意）
    pub phone: Option<String>,
}

/// ユーザープロフィール
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// ユーザーID
    pub id: i64,
    /// メールアドレス
    pub email: String,
    /// 電話番号
    #[serde(default)]
    pub phone: Option<String>,
    /// メール通知の有効/無効
    #[serde(default)]
    pub email_alerts_enabled: bool,
}

/// ログインレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// アクセストークン
    pub access_token: String,
    /// トークン種別（"bearer"）
    #[serde(default)]
    pub token_type: String,
    /// ログインしたユーザーの情報
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_deserialize() {
        // ログインレスポンスのデシリアライズテスト
        let json = r#"{
            "access_token": "abc.def.ghi",
            "token_type": "bearer",
            "user": {"id": 1, "email": "a@example.com", "phone": null, "email_alerts_enabled": true}
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "abc.def.ghi");
        assert_eq!(response.user.unwrap().email, "a@example.com");
    }

    #[test]
    fn test_login_response_without_user() {
        // userフィールドを省略したレスポンスのテスト
        let json = r#"{"access_token": "abc"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "abc");
        assert!(response.user.is_none());
    }
}
