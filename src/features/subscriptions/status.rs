use crate::shared::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::models::Subscription;

/// 更新日までの近さを表す緊急度ティア
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenewalTier {
    /// 更新日を過ぎている（daysUntil < 0）
    Expired,
    /// 更新が目前（0 <= daysUntil <= 3）
    Critical,
    /// 更新が近い（4 <= daysUntil <= 7）
    Warning,
    /// 余裕がある（daysUntil > 7）
    Ok,
}

/// カード表示に使う色分け
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusColor {
    Danger,
    Warning,
    Success,
}

impl StatusColor {
    /// フロントエンドのCSSカスタムプロパティ名を取得
    ///
    /// # 戻り値
    /// CSS変数参照（例: "var(--danger)"）
    pub fn css_var(&self) -> &'static str {
        match self {
            StatusColor::Danger => "var(--danger)",
            StatusColor::Warning => "var(--warning)",
            StatusColor::Success => "var(--success)",
        }
    }
}

/// 1件のサブスクリプションに対する更新ステータス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenewalStatus {
    /// 更新日までの日数（過去はマイナス）
    pub days_until: i64,
    /// 緊急度ティア
    pub tier: RenewalTier,
    /// 表示用テキスト
    pub text: String,
    /// 表示用の色
    pub color: StatusColor,
}

/// ダッシュボードの集計値
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// 登録件数
    pub total: usize,
    /// まもなく更新される件数（0〜7日以内）
    pub expiring_soon: usize,
    /// 今月中に更新日を迎える件数
    pub this_month: usize,
}

/// ISO形式（YYYY-MM-DD）の日付文字列をパースする
///
/// # 引数
/// * `date` - 日付文字列
///
/// # 戻り値
/// パースされた日付、または形式が不正な場合はバリデーションエラー
pub fn parse_iso_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("日付はYYYY-MM-DD形式で入力してください: {date}")))
}

/// 更新日までの日数を計算する
///
/// カレンダー上の日付同士の差分であり、時刻成分は構造上存在しない
/// （NaiveDate同士の減算）ため、実行時刻に依存しない整数が返る。
///
/// # 引数
/// * `renewal_date` - 更新日（ISO形式文字列）
/// * `today` - 今日の日付
///
/// # 戻り値
/// 更新日までの日数（過去はマイナス）、または日付が不正な場合はエラー
pub fn days_until_renewal(renewal_date: &str, today: NaiveDate) -> AppResult<i64> {
    let renewal = parse_iso_date(renewal_date)?;
    Ok((renewal - today).num_days())
}

/// まもなく更新されるかどうかを判定する
///
/// ダッシュボードの「Expiring Soon」集計と共有される述語。ティアの
/// 境界（3日/7日）とは別の独立した分類であり、統合しないこと。
///
/// # 引数
/// * `renewal_date` - 更新日（ISO形式文字列）
/// * `today` - 今日の日付
///
/// # 戻り値
/// 更新日まで0〜7日の場合はtrue（日付が不正な場合はfalse）
pub fn is_expiring_soon(renewal_date: &str, today: NaiveDate) -> bool {
    match days_until_renewal(renewal_date, today) {
        Ok(days) => (0..=7).contains(&days),
        Err(_) => false,
    }
}

/// 日数から緊急度ティアを分類する
///
/// # 引数
/// * `days` - 更新日までの日数
///
/// # 戻り値
/// 緊急度ティア
pub fn classify_tier(days: i64) -> RenewalTier {
    if days < 0 {
        RenewalTier::Expired
    } else if days <= 3 {
        RenewalTier::Critical
    } else if days <= 7 {
        RenewalTier::Warning
    } else {
        RenewalTier::Ok
    }
}

/// 日数から表示色を決定する
fn status_color(days: i64) -> StatusColor {
    if days < 0 {
        StatusColor::Danger
    } else if days <= 3 {
        StatusColor::Danger
    } else if days <= 7 {
        StatusColor::Warning
    } else {
        StatusColor::Success
    }
}

/// 日数から表示用テキストを組み立てる
fn status_text(days: i64) -> String {
    if days < 0 {
        "Expired".to_string()
    } else if days == 0 {
        "Renews today".to_string()
    } else if days == 1 {
        "Renews tomorrow".to_string()
    } else {
        format!("{days} days remaining")
    }
}

/// サブスクリプションの更新ステータスを導出する
///
/// 純粋関数であり、`today`を注入することで単体テスト可能。
///
/// # 引数
/// * `renewal_date` - 更新日（ISO形式文字列）
/// * `today` - 今日の日付
///
/// # 戻り値
/// 更新ステータス、または日付が不正な場合はエラー
pub fn derive_status(renewal_date: &str, today: NaiveDate) -> AppResult<RenewalStatus> {
    let days_until = days_until_renewal(renewal_date, today)?;

    Ok(RenewalStatus {
        days_until,
        tier: classify_tier(days_until),
        text: status_text(days_until),
        color: status_color(days_until),
    })
}

/// ダッシュボードの集計値を計算する
///
/// プレゼンテーション層が描画のたびに呼び出す純粋関数。結果は
/// キャッシュせず、常に現在の`items`から再計算する。パースできない
/// 更新日はexpiring_soon/this_monthのどちらにも数えない。
///
/// # 引数
/// * `items` - サブスクリプション一覧
/// * `today` - 今日の日付
///
/// # 戻り値
/// 集計値
pub fn compute_stats(items: &[Subscription], today: NaiveDate) -> DashboardStats {
    let expiring_soon = items
        .iter()
        .filter(|sub| is_expiring_soon(&sub.renewal_date, today))
        .count();

    let this_month = items
        .iter()
        .filter(|sub| match parse_iso_date(&sub.renewal_date) {
            Ok(renewal) => renewal.month() == today.month() && renewal.year() == today.year(),
            Err(_) => false,
        })
        .count();

    DashboardStats {
        total: items.len(),
        expiring_soon,
        this_month,
    }
}
