//! MessagePusher trait 定義
//!
//! クライアントへの通知手段の抽象化。具体的な実装（WebSocket）は
//! Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{error::MessagePushError, notification::Notification, value_object::ConnectionId};

/// 接続ごとの送信チャンネル（シリアライズ済みのテキストフレームを流す）
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// クライアントへの通知インターフェース
///
/// 配送保証はトランスポートの既定（接続ごとに高々 1 回）まで。
/// 再送や到達確認は行わない。
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続の送信チャンネルを登録
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// 接続の送信チャンネルを登録解除
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// 特定の接続にだけ通知する
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        notification: &Notification,
    ) -> Result<(), MessagePushError>;

    /// 複数の接続に通知する（一部の送信失敗は許容）
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        notification: &Notification,
    ) -> Result<(), MessagePushError>;
}
