use campus_notifier_client::{NotificationCenterServiceConfig, NotifierClient};
use futures::{
    channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender},
    SinkExt, StreamExt,
};
use std::time::Duration;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::{self, Message};

///
/// Delays short enough to keep the tests fast but long enough to be
/// reliably distinguishable.
///
pub fn test_config() -> NotificationCenterServiceConfig {
    NotificationCenterServiceConfig {
        auto_dismiss_delay: Duration::from_millis(100),
        exit_transition_delay: Duration::from_millis(50),
        flash_stagger_interval: Duration::from_millis(20),
    }
}

///
/// Server side of a fake push channel socket.
///
pub struct FakeServer {
    pub frames_tx: UnboundedSender<Result<Message, tungstenite::Error>>,
    pub frames_rx: UnboundedReceiver<Message>,
}

impl FakeServer {
    pub async fn send_frame(&mut self, json: &str) {
        self.frames_tx
            .send(Ok(Message::Text(json.to_string())))
            .await
            .unwrap();
    }

    pub async fn next_frame(&mut self) -> Message {
        timeout(Duration::from_secs(1), self.frames_rx.next())
            .await
            .unwrap() // timeout
            .unwrap() // frame
    }

    pub async fn expect_backlog_request(&mut self) {
        let Message::Text(payload) = self.next_frame().await else {
            panic!("invalid frame type");
        };
        assert_eq!(payload, r#"{"event":"get_unread_notifications"}"#);
    }

    pub async fn expect_no_frame(&mut self) {
        let result = timeout(Duration::from_millis(300), self.frames_rx.next()).await;
        assert!(result.is_err(), "unexpected frame: {result:?}");
    }
}

///
/// Attaches a fake socket to the client's push channel.
///
pub async fn connect(client: &NotifierClient) -> (tokio::task::JoinHandle<()>, FakeServer) {
    let (ws_server_tx, frames_rx) = unbounded();
    let (frames_tx, ws_server_rx) = unbounded();

    let handle = client
        .attach_push_channel(ws_server_tx, ws_server_rx)
        .await
        .unwrap();

    (
        handle,
        FakeServer {
            frames_tx,
            frames_rx,
        },
    )
}
