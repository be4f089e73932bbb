// バックエンド連携サービス関連のモジュール

pub mod api_client;

pub use api_client::ApiClient;
