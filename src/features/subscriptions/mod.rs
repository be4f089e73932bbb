/// サブスクリプション機能モジュール
///
/// このモジュールは、サブスクリプション管理に関連するすべての機能を提供します：
/// - 更新ステータスの導出（日数・緊急度ティア・表示テキスト・色）
/// - 一覧のローカルキャッシュとCRUD同期（非楽観的更新）
/// - フォームバッファの検証とワイヤー形式への正規化
/// - ダッシュボード集計の計算
pub mod form;
pub mod models;
pub mod repository;
pub mod status;
pub mod store;

// 公開インターフェース
pub use form::SubscriptionForm;
pub use models::{Subscription, SubscriptionDraft};
pub use repository::SubscriptionRepository;
pub use status::{
    compute_stats, days_until_renewal, derive_status, is_expiring_soon, DashboardStats,
    RenewalStatus, RenewalTier, StatusColor,
};
pub use store::SubscriptionStore;
