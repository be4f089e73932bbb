use serde::{Deserialize, Serialize};

/// サブスクリプションデータモデル
///
/// バックエンドが所有するエンティティのローカルキャッシュ。
/// 日付はワイヤー上と同じISO形式（YYYY-MM-DD）の文字列のまま保持し、
/// 日数計算の時点でchronoにパースさせる。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Subscription {
    /// バックエンドが採番するID（変更不可）
    pub id: i64,
    /// サービス名（必須）
    pub name: String,
    /// 開始日（任意、未設定はnull）
    #[serde(default)]
    pub start_date: Option<String>,
    /// 次回更新日（必須）
    pub renewal_date: String,
    /// メモ（任意、未設定はnull）
    #[serde(default)]
    pub note: Option<String>,
}

/// サブスクリプション作成・更新用DTO
///
/// フォームバッファを正規化した後のワイヤー形式。任意フィールドの
/// 空文字列はここに到達する前にnullへ変換されている。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SubscriptionDraft {
    pub name: String,
    pub start_date: Option<String>,
    pub renewal_date: String,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_deserialize_with_nulls() {
        // 任意フィールドがnullのレスポンスをデシリアライズするテスト
        let json = r#"{"id": 1, "name": "Netflix", "renewal_date": "2024-04-01", "start_date": null, "note": null}"#;
        let sub: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.id, 1);
        assert_eq!(sub.name, "Netflix");
        assert_eq!(sub.start_date, None);
        assert_eq!(sub.note, None);
    }

    #[test]
    fn test_subscription_deserialize_ignores_unknown_fields() {
        // バックエンドが返す未知フィールド（user_id等）を無視するテスト
        let json = r#"{"id": 2, "name": "Spotify", "renewal_date": "2024-05-15", "note": "family plan", "user_id": 7}"#;
        let sub: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.name, "Spotify");
        assert_eq!(sub.note.as_deref(), Some("family plan"));
    }

    #[test]
    fn test_draft_serializes_nulls() {
        // Draftの任意フィールドがnullとしてシリアライズされるテスト
        let draft = SubscriptionDraft {
            name: "Netflix".to_string(),
            start_date: None,
            renewal_date: "2024-04-01".to_string(),
            note: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json["start_date"].is_null());
        assert!(json["note"].is_null());
        assert_eq!(json["name"], "Netflix");
    }
}
