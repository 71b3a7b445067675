use crate::{
    dto::{input, output},
    service::{
        acknowledgements_service::AcknowledgementsServiceImpl,
        notification_center_service::{
            NotificationCenterService, NotificationCenterServiceConfig,
            NotificationCenterServiceImpl,
        },
        push_channel_service::PushChannelConnection,
        surface_service::HtmlSurfaceService,
    },
};
use anyhow::anyhow;
use futures::{Sink, Stream};
use std::{
    fmt::Display,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
use tokio::{
    sync::{mpsc, Mutex},
    task::JoinHandle,
};
use tokio_tungstenite::tungstenite::Message;

///
/// One notification client per page view: wires the surface, the
/// acknowledgement queue and the lifecycle manager together and owns
/// the push channel's attach/re-attach cycle.
///
pub struct NotifierClient {
    authenticated: bool,

    notification_center: Arc<NotificationCenterServiceImpl>,
    surface_service: Arc<HtmlSurfaceService>,

    /// Parked while no connection holds it; a connection task returns
    /// it here when it ends so the channel can be re-attached.
    events_rx: Arc<Mutex<Option<mpsc::UnboundedReceiver<output::ClientEvent>>>>,
    connected: Arc<AtomicBool>,
}

impl NotifierClient {
    pub fn new(config: NotificationCenterServiceConfig, authenticated: bool) -> Self {
        let surface_service = HtmlSurfaceService::new();
        let surface_service = Arc::new(surface_service);

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let events_rx = Some(events_rx);
        let events_rx = Mutex::new(events_rx);
        let events_rx = Arc::new(events_rx);

        let connected = Arc::new(AtomicBool::new(false));

        let acknowledgements_service =
            AcknowledgementsServiceImpl::new(events_tx, Arc::clone(&connected));
        let acknowledgements_service = Arc::new(acknowledgements_service);

        let notification_center = NotificationCenterServiceImpl::new(
            config,
            Arc::clone(&surface_service) as _,
            acknowledgements_service,
        );
        let notification_center = Arc::new(notification_center);

        Self {
            authenticated,
            notification_center,
            surface_service,
            events_rx,
            connected,
        }
    }

    pub fn notification_center(&self) -> Arc<dyn NotificationCenterService> {
        Arc::clone(&self.notification_center) as _
    }

    pub fn surface_service(&self) -> Arc<HtmlSurfaceService> {
        Arc::clone(&self.surface_service)
    }

    ///
    /// Show the page's flash payloads, consuming the list so it
    /// cannot be replayed by a later re-render.
    ///
    pub async fn drain_flash(&self, payloads: Vec<input::FlashPayload>) {
        self.notification_center.drain_flash(payloads).await;
    }

    ///
    /// Whether the push channel is currently attached. The host's
    /// page-visibility handler checks this to decide on a reconnect.
    ///
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    ///
    /// Attach a freshly opened WebSocket as the push channel and spawn
    /// its connection task. The task requests the unread backlog, then
    /// runs until the socket closes or fails; afterwards the channel
    /// can be attached again with a new socket.
    ///
    /// ### Errors
    /// - when the viewer is not authenticated
    /// - when a connection is already attached
    ///
    pub async fn attach_push_channel<WsSink, WsStream, SinkError, StreamError>(
        &self,
        ws_tx: WsSink,
        ws_rx: WsStream,
    ) -> anyhow::Result<JoinHandle<()>>
    where
        WsSink: Sink<Message, Error = SinkError> + Unpin + Send + 'static,
        WsStream: Stream<Item = Result<Message, StreamError>> + Unpin + Send + 'static,
        SinkError: Display + Send + 'static,
        StreamError: Display + Send + 'static,
    {
        if !self.authenticated {
            return Err(anyhow!("push channel requires an authenticated viewer"));
        }

        let events_rx = {
            let mut events_rx = self.events_rx.lock().await;
            events_rx
                .take()
                .ok_or_else(|| anyhow!("push channel already attached"))?
        };

        let connection = PushChannelConnection::new(
            self.notification_center(),
            events_rx,
            Arc::clone(&self.connected),
            ws_tx,
            ws_rx,
        );

        let events_slot = Arc::clone(&self.events_rx);
        let handle = tokio::spawn(async move {
            let events_rx = connection.run().await;
            *events_slot.lock().await = Some(events_rx);
        });

        Ok(handle)
    }

    ///
    /// Back-forward-cache restoration: the snapshot shows stale,
    /// possibly already-acknowledged notifications. Everything visible
    /// is dropped without acknowledgements; the host discards its
    /// stale flash payloads by not draining them again.
    ///
    pub async fn restore_from_cache(&self) {
        tracing::info!("restored from cache snapshot, clearing stale notifications");
        self.notification_center.clear_all().await;
    }
}
