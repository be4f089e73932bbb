use std::sync::Mutex;

/// アクセストークンの保管を抽象化するトレイト
///
/// ブラウザ版が使っていたグローバルなローカルストレージの置き換え。
/// コアはこのトレイトを通じてのみトークンに触れ、APIクライアントの
/// 構築時に注入される。
pub trait CredentialStore: Send + Sync {
    /// 保存されているアクセストークンを取得する
    ///
    /// # 戻り値
    /// トークン（未ログインの場合はNone）
    fn token(&self) -> Option<String>;

    /// アクセストークンを保存する
    ///
    /// # 引数
    /// * `token` - ログインで取得したアクセストークン
    fn store_token(&self, token: String);

    /// 保存されているトークンを破棄する（ログアウト）
    fn clear(&self);
}

/// メモリ上にトークンを保持するCredentialStore実装
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    /// 空のトークンストアを作成する
    ///
    /// # 戻り値
    /// MemoryCredentialStoreインスタンス
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn token(&self) -> Option<String> {
        self.token.lock().expect("トークンロックの取得に失敗").clone()
    }

    fn store_token(&self, token: String) {
        *self.token.lock().expect("トークンロックの取得に失敗") = Some(token);
        log::debug!("アクセストークンを保存しました");
    }

    fn clear(&self) {
        *self.token.lock().expect("トークンロックの取得に失敗") = None;
        log::debug!("アクセストークンを破棄しました");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_clear_token() {
        // トークンの保存・取得・破棄のテスト
        let store = MemoryCredentialStore::new();
        assert_eq!(store.token(), None);

        store.store_token("abc.def.ghi".to_string());
        assert_eq!(store.token(), Some("abc.def.ghi".to_string()));

        store.clear();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_store_token_overwrites() {
        // 再ログインでトークンが上書きされるテスト
        let store = MemoryCredentialStore::new();
        store.store_token("old".to_string());
        store.store_token("new".to_string());
        assert_eq!(store.token(), Some("new".to_string()));
    }
}
