use chrono::NaiveDate;
use log::{debug, error, info};

use super::models::{Subscription, SubscriptionDraft};
use super::repository::SubscriptionRepository;
use super::status::{compute_stats, DashboardStats};
use crate::shared::errors::{AppError, AppResult};

/// 一覧取得失敗時の汎用フォールバックメッセージ
const FETCH_FALLBACK_MESSAGE: &str = "Failed to load subscriptions. Please try again.";

/// サブスクリプション一覧のローカルキャッシュとCRUD同期を担うストア
///
/// マウントされるダッシュボードビューごとに1つ保持される。全操作は
/// 非楽観的であり、`items`は確認済みのラウンドトリップ後にのみ変化する
/// （表示とサーバー状態の乖離を避けるための意図的なトレードオフ）。
pub struct SubscriptionStore<R: SubscriptionRepository> {
    /// リモートデータアクセス
    repository: R,
    /// サーバーのリスト順を保持したローカルキャッシュ
    items: Vec<Subscription>,
    /// リクエスト実行中フラグ
    pending: bool,
    /// 直近の一覧取得エラー（インライン表示用）
    last_error: Option<String>,
}

impl<R: SubscriptionRepository> SubscriptionStore<R> {
    /// 新しいストアを作成する
    ///
    /// # 引数
    /// * `repository` - リモートデータアクセスの実装
    ///
    /// # 戻り値
    /// 空のストア
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            items: Vec::new(),
            pending: false,
            last_error: None,
        }
    }

    /// 現在のサブスクリプション一覧を取得
    pub fn items(&self) -> &[Subscription] {
        &self.items
    }

    /// リクエスト実行中かどうか
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// 直近の一覧取得エラーメッセージを取得
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// ダッシュボードの集計値を計算する
    ///
    /// キャッシュせず、呼び出しのたびに現在の`items`から再計算する。
    ///
    /// # 引数
    /// * `today` - 今日の日付
    ///
    /// # 戻り値
    /// 集計値
    pub fn stats(&self, today: NaiveDate) -> DashboardStats {
        compute_stats(&self.items, today)
    }

    /// サブスクリプション一覧をバックエンドから再取得する
    ///
    /// 成功時は`items`を置き換えて`last_error`をクリアする。失敗時は
    /// 不整合な一覧を表示しないよう`items`をクリアし、エラーメッセージ
    /// （バックエンドのdetailがあればそれ、なければ汎用メッセージ）を
    /// 記録する。失敗は回復可能であり、再度`refresh`を呼べばリトライになる。
    pub async fn refresh(&mut self) {
        self.pending = true;
        debug!("サブスクリプション一覧を取得しています...");

        match self.repository.list().await {
            Ok(items) => {
                info!("サブスクリプション一覧を取得しました: {}件", items.len());
                self.items = items;
                self.last_error = None;
            }
            Err(e) => {
                error!("サブスクリプション一覧の取得に失敗しました: {}", e.details());
                self.last_error = Some(surface_message(&e, FETCH_FALLBACK_MESSAGE));
                self.items.clear();
            }
        }

        self.pending = false;
    }

    /// サブスクリプションを作成する
    ///
    /// 成功時は一覧を再取得して反映する（楽観的更新は行わない）。
    /// 失敗時は`items`に手を付けずエラーを返すので、呼び出し側は
    /// アラートを表示してフォームを開いたままリトライさせること。
    ///
    /// # 引数
    /// * `draft` - 正規化済みのDraft
    ///
    /// # 戻り値
    /// 成功時はOk(())、失敗時はエラー
    pub async fn create(&mut self, draft: &SubscriptionDraft) -> AppResult<()> {
        self.pending = true;
        let result = self.repository.create(draft).await;
        self.pending = false;

        match result {
            Ok(created) => {
                info!("サブスクリプションを作成しました: id={}", created.id);
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                error!("サブスクリプションの作成に失敗しました: {}", e.details());
                Err(e)
            }
        }
    }

    /// サブスクリプションを更新する
    ///
    /// 成功・失敗の契約は`create`と同じ。
    ///
    /// # 引数
    /// * `id` - サブスクリプションID
    /// * `draft` - 正規化済みのDraft
    ///
    /// # 戻り値
    /// 成功時はOk(())、失敗時はエラー
    pub async fn update(&mut self, id: i64, draft: &SubscriptionDraft) -> AppResult<()> {
        self.pending = true;
        let result = self.repository.update(id, draft).await;
        self.pending = false;

        match result {
            Ok(_) => {
                info!("サブスクリプションを更新しました: id={id}");
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                error!("サブスクリプションの更新に失敗しました: id={id}, {}", e.details());
                Err(e)
            }
        }
    }

    /// サブスクリプションを削除する
    ///
    /// ユーザーによる明示的な確認ステップを経てから呼び出すこと。
    /// 成功時は一覧を再取得し、失敗時は一覧を変更せずエラーを返す。
    ///
    /// # 引数
    /// * `id` - サブスクリプションID
    ///
    /// # 戻り値
    /// 成功時はOk(())、失敗時はエラー
    pub async fn remove(&mut self, id: i64) -> AppResult<()> {
        self.pending = true;
        let result = self.repository.delete(id).await;
        self.pending = false;

        match result {
            Ok(()) => {
                info!("サブスクリプションを削除しました: id={id}");
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                error!("サブスクリプションの削除に失敗しました: id={id}, {}", e.details());
                Err(e)
            }
        }
    }
}

/// ユーザーに表示するエラーメッセージを決定する
///
/// バックエンドが構造化されたdetailを返していればそれをそのまま使い、
/// なければ操作ごとの汎用メッセージにフォールバックする。
fn surface_message(error: &AppError, fallback: &str) -> String {
    if error.has_detail() {
        error.user_message()
    } else {
        fallback.to_string()
    }
}
