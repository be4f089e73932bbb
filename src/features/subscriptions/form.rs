use chrono::NaiveDate;

use super::models::{Subscription, SubscriptionDraft};
use super::status::parse_iso_date;
use crate::shared::errors::{AppError, AppResult};

/// サブスクリプション編集フォームのバッファ
///
/// 開いているフォームごとに1つ存在する一時的な状態。フィールドは
/// すべて生の文字列で保持し、任意フィールドの「未設定」は送信時の
/// 正規化まで空文字列で表現する。サーバーへのアクセスは行わない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionForm {
    /// サービス名
    pub name: String,
    /// 開始日（ISO形式、未設定は空文字列）
    pub start_date: String,
    /// 更新日（ISO形式）
    pub renewal_date: String,
    /// メモ（未設定は空文字列）
    pub note: String,
}

impl SubscriptionForm {
    /// 既存レコードまたは空の状態からフォームを初期化する
    ///
    /// # 引数
    /// * `record` - 編集対象のサブスクリプション（新規作成時はNone）
    ///
    /// # 戻り値
    /// 初期化されたフォームバッファ
    pub fn from_record(record: Option<&Subscription>) -> Self {
        match record {
            Some(sub) => Self {
                name: sub.name.clone(),
                start_date: sub.start_date.clone().unwrap_or_default(),
                renewal_date: sub.renewal_date.clone(),
                note: sub.note.clone().unwrap_or_default(),
            },
            None => Self::default(),
        }
    }

    /// フォーム入力を検証する
    ///
    /// ストアに到達する前の入力レベルで即座に失敗させる。更新日が
    /// 今日以降であることはUIレベルの制約であり、バックエンドの
    /// ストレージでは強制されない。
    ///
    /// # 引数
    /// * `today` - 今日の日付（送信時点の基準）
    ///
    /// # 戻り値
    /// 検証成功時はOk(())、失敗時はバリデーションエラー
    pub fn validate(&self, today: NaiveDate) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Subscription name is required."));
        }

        if self.renewal_date.trim().is_empty() {
            return Err(AppError::validation("Renewal date is required."));
        }

        let renewal = parse_iso_date(&self.renewal_date)?;
        if renewal < today {
            return Err(AppError::validation(
                "Renewal date must be today or later.",
            ));
        }

        if !self.start_date.is_empty() {
            parse_iso_date(&self.start_date)?;
        }

        Ok(())
    }

    /// フォームバッファをワイヤー形式のDraftへ正規化する
    ///
    /// 任意フィールドの空文字列をnullへ変換する。空文字列がDraftに
    /// 漏れることはない。必須フィールドは`validate`で弾かれている
    /// 前提だが、単体でも呼べるようここでも空を拒否する。
    ///
    /// # 引数
    /// * `today` - 今日の日付（検証の基準）
    ///
    /// # 戻り値
    /// 正規化されたDraft、または検証失敗時はエラー
    pub fn normalize(&self, today: NaiveDate) -> AppResult<SubscriptionDraft> {
        self.validate(today)?;

        Ok(SubscriptionDraft {
            name: self.name.clone(),
            start_date: if self.start_date.is_empty() {
                None
            } else {
                Some(self.start_date.clone())
            },
            renewal_date: self.renewal_date.clone(),
            note: if self.note.is_empty() {
                None
            } else {
                Some(self.note.clone())
            },
        })
    }
}
