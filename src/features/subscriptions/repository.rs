use super::models::{Subscription, SubscriptionDraft};
use crate::shared::errors::AppResult;

/// サブスクリプションのリモートデータアクセスを抽象化するトレイト
///
/// 本番実装はバックエンドAPIを呼び出す`ApiClient`。ストアはこの
/// トレイトにのみ依存するため、テストではモック実装を注入できる。
#[allow(async_fn_in_trait)]
pub trait SubscriptionRepository {
    /// サブスクリプション一覧を取得する
    ///
    /// # 戻り値
    /// サーバー順のサブスクリプションのリスト、または失敗時はエラー
    async fn list(&self) -> AppResult<Vec<Subscription>>;

    /// サブスクリプションを作成する
    ///
    /// # 引数
    /// * `draft` - 正規化済みのDraft
    ///
    /// # 戻り値
    /// 作成されたサブスクリプション、または失敗時はエラー
    async fn create(&self, draft: &SubscriptionDraft) -> AppResult<Subscription>;

    /// サブスクリプションを更新する（ID指定のレコード全体置換）
    ///
    /// # 引数
    /// * `id` - サブスクリプションID
    /// * `draft` - 正規化済みのDraft
    ///
    /// # 戻り値
    /// 更新されたサブスクリプション、または失敗時はエラー
    async fn update(&self, id: i64, draft: &SubscriptionDraft) -> AppResult<Subscription>;

    /// サブスクリプションを削除する
    ///
    /// # 引数
    /// * `id` - サブスクリプションID
    ///
    /// # 戻り値
    /// 成功時はOk(())、失敗時はエラー
    async fn delete(&self, id: i64) -> AppResult<()>;
}
