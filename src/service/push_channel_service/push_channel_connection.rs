use super::error::Error;
use crate::{
    dto::{input, output},
    service::notification_center_service::{
        Notification, NotificationCenterService, NotificationId,
    },
};
use anyhow::anyhow;
use futures::{Sink, SinkExt, Stream, StreamExt};
use std::{
    fmt::Display,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

///
/// One connected push channel. Requests the unread backlog on start,
/// then feeds server events into the notification center and pumps
/// queued client events (read-acknowledgements) to the server.
///
/// Connection failures are logged and end the task; reconnecting is
/// the host's visibility-driven decision, so there is no backoff here.
///
pub struct PushChannelConnection<WsSink, WsStream> {
    notification_center: Arc<dyn NotificationCenterService>,

    events_rx: mpsc::UnboundedReceiver<output::ClientEvent>,
    connected: Arc<AtomicBool>,

    ws_tx: WsSink,
    ws_rx: WsStream,
}

impl<WsSink, WsStream, SinkError, StreamError> PushChannelConnection<WsSink, WsStream>
where
    WsSink: Sink<Message, Error = SinkError> + Unpin,
    WsStream: Stream<Item = Result<Message, StreamError>> + Unpin,
    SinkError: Display,
    StreamError: Display,
{
    pub fn new(
        notification_center: Arc<dyn NotificationCenterService>,
        events_rx: mpsc::UnboundedReceiver<output::ClientEvent>,
        connected: Arc<AtomicBool>,
        ws_tx: WsSink,
        ws_rx: WsStream,
    ) -> Self {
        Self {
            notification_center,
            events_rx,
            connected,
            ws_tx,
            ws_rx,
        }
    }

    ///
    /// Runs until the channel closes or fails, then hands the
    /// outgoing event queue back so a new connection can take it over.
    ///
    #[tracing::instrument(name = "Push Channel", skip_all)]
    pub async fn run(mut self) -> mpsc::UnboundedReceiver<output::ClientEvent> {
        self.connected.store(true, Ordering::Release);

        match self.try_run().await {
            Ok(()) => (),
            Err(Error::Close(message)) => {
                tracing::info!("closing connection: {message}");
            }
            Err(Error::Anyhow(err)) => {
                tracing::warn!("{err}");
            }
        }

        self.connected.store(false, Ordering::Release);

        tracing::info!("closing push channel");
        match self.ws_tx.close().await {
            Ok(()) => tracing::info!("push channel closed"),
            Err(err) => tracing::warn!(%err, "failed to close push channel"),
        }

        self.events_rx
    }

    async fn try_run(&mut self) -> Result<(), Error> {
        // One backlog request per successful connection
        self.send_event(output::ClientEvent::GetUnreadNotifications)
            .await?;

        loop {
            tokio::select! {
                message = self.ws_rx.next() => {
                    self.process_incoming_message(message).await?;
                }

                event = self.events_rx.recv() => {
                    self.process_outgoing_event(event).await?;
                }
            }
        }
    }

    async fn process_incoming_message(
        &mut self,
        message: Option<Result<Message, StreamError>>,
    ) -> Result<(), Error> {
        match message {
            Some(Ok(Message::Text(payload))) => {
                self.process_server_frame(payload).await;
            }
            Some(Ok(Message::Binary(_))) => {
                tracing::warn!("received binary frame, skipping");
            }
            Some(Ok(Message::Ping(payload))) => {
                tracing::trace!("answering ping");
                self.ws_tx
                    .send(Message::Pong(payload))
                    .await
                    .map_err(|err| anyhow!("failed to send pong: {err}"))?;
            }
            Some(Ok(Message::Pong(_))) => tracing::trace!("ignoring pong"),
            Some(Ok(Message::Close(_))) => {
                return Err(Error::Close("received close frame"));
            }
            Some(Ok(Message::Frame(_))) => {
                tracing::warn!("received raw frame, skipping");
            }
            Some(Err(err)) => {
                return Err(Error::Anyhow(anyhow!(
                    "failed to read incoming frame: {err}"
                )));
            }
            None => return Err(Error::Anyhow(anyhow!("incoming frame stream closed"))),
        }

        Ok(())
    }

    ///
    /// A frame that does not parse is logged and skipped: losing one
    /// notification must not tear down the channel.
    ///
    async fn process_server_frame(&mut self, payload: String) {
        let event = match serde_json::from_str::<input::ServerEvent>(&payload) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(%err, "failed to decode server event, skipping frame");
                return;
            }
        };

        match event {
            input::ServerEvent::UnreadNotifications(backlog) => {
                tracing::info!(
                    count = backlog.notifications.len(),
                    "processing unread backlog"
                );
                for payload in backlog.notifications {
                    let notification = Notification::from_payload(payload);
                    self.notification_center.display(notification, false).await;
                }
            }
            input::ServerEvent::NewNotification(payload) => {
                tracing::info!(id = payload.id, "processing new notification");
                let notification = Notification::from_payload(payload);
                self.notification_center.display(notification, true).await;
            }
            input::ServerEvent::NotificationRemoved(removed) => {
                tracing::info!(id = removed.id, "processing remote removal");
                self.notification_center
                    .discard(NotificationId::Server(removed.id))
                    .await;
            }
        }
    }

    async fn process_outgoing_event(
        &mut self,
        event: Option<output::ClientEvent>,
    ) -> Result<(), Error> {
        match event {
            Some(event) => self.send_event(event).await,
            None => Err(Error::Close("outgoing event queue closed")),
        }
    }

    async fn send_event(&mut self, event: output::ClientEvent) -> Result<(), Error> {
        let payload = serde_json::to_string(&event)
            .map_err(|err| anyhow!("failed to encode client event: {err}"))?;

        self.ws_tx
            .send(Message::Text(payload))
            .await
            .map_err(|err| anyhow!("failed to send client event: {err}"))?;
        tracing::debug!(?event, "client event sent");

        Ok(())
    }
}
