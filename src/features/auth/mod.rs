/// 認証機能のモジュール
pub mod models;
pub mod session;

pub use models::{Credentials, LoginResponse, RegisterRequest, UserProfile};
pub use session::{CredentialStore, MemoryCredentialStore};
