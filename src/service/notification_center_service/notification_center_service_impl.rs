use super::{
    dto::{
        DisplayState, DisplayedNotification, Notification, NotificationCenterServiceConfig,
        NotificationId, NotificationKind,
    },
    navigation::{self, NavigationTarget},
    render, NotificationCenterService,
};
use crate::{
    dto::input,
    service::{
        acknowledgements_service::AcknowledgementsService, surface_service::SurfaceService,
    },
};
use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};
use time::OffsetDateTime;
use tokio::{sync::Mutex, task::JoinHandle};

pub struct NotificationCenterServiceImpl {
    inner: Arc<CenterInner>,
}

struct CenterInner {
    config: NotificationCenterServiceConfig,

    surface_service: Arc<dyn SurfaceService>,
    acknowledgements_service: Arc<dyn AcknowledgementsService>,

    entries: Mutex<HashMap<NotificationId, DisplayedNotification>>,

    /// Disambiguates synthetic identifiers created within the same
    /// millisecond.
    synthetic_sequence: AtomicU64,
}

impl NotificationCenterServiceImpl {
    pub fn new(
        config: NotificationCenterServiceConfig,
        surface_service: Arc<dyn SurfaceService>,
        acknowledgements_service: Arc<dyn AcknowledgementsService>,
    ) -> Self {
        let entries = HashMap::new();
        let entries = Mutex::new(entries);

        let inner = CenterInner {
            config,
            surface_service,
            acknowledgements_service,
            entries,
            synthetic_sequence: AtomicU64::new(0),
        };
        let inner = Arc::new(inner);

        Self { inner }
    }
}

impl CenterInner {
    async fn display(self: &Arc<Self>, notification: Notification, live: bool) {
        let mut entries = self.entries.lock().await;
        if entries.contains_key(&notification.id) {
            tracing::debug!(id = %notification.id, "notification already visible");
            return;
        }

        let id = notification.id.clone();
        let html = render::notification_html(&notification, OffsetDateTime::now_utc());

        let dismiss_timer = match live && notification.auto_dismiss {
            true => Some(self.spawn_dismiss_timer(id.clone())),
            false => None,
        };

        let entry = DisplayedNotification {
            notification,
            state: DisplayState::Visible,
            dismiss_timer,
        };
        entries.insert(id.clone(), entry);

        // Mounted while the lock is held so the collection and the
        // surface never disagree from a caller's perspective
        self.surface_service.mount(&id, html).await;
        tracing::trace!(%id, live, "notification displayed");
    }

    fn spawn_dismiss_timer(self: &Arc<Self>, id: NotificationId) -> JoinHandle<()> {
        let inner = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(inner.config.auto_dismiss_delay).await;

            // Detach this task's own handle before the removal path
            // aborts whatever handle is stored in the entry
            {
                let mut entries = inner.entries.lock().await;
                if let Some(entry) = entries.get_mut(&id) {
                    entry.dismiss_timer = None;
                }
            }

            tracing::trace!(%id, "auto-dismiss countdown elapsed");
            inner.remove_entry(id, true).await;
        })
    }

    async fn remove_entry(self: &Arc<Self>, id: NotificationId, acknowledge: bool) {
        {
            let mut entries = self.entries.lock().await;
            let Some(entry) = entries.get_mut(&id) else {
                tracing::trace!(%id, "removal target not visible");
                return;
            };
            if entry.state == DisplayState::Hiding {
                tracing::trace!(%id, "removal already in progress");
                return;
            }

            entry.state = DisplayState::Hiding;
            if let Some(timer) = entry.dismiss_timer.take() {
                timer.abort();
            }
        }

        if acknowledge {
            if let NotificationId::Server(server_id) = &id {
                self.acknowledgements_service.send(*server_id).await;
            }
        }

        self.surface_service.set_hiding(&id).await;

        // The entry stays in the collection while the exit transition
        // runs; the identifier is freed only once it is deleted
        let inner = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(inner.config.exit_transition_delay).await;

            let mut entries = inner.entries.lock().await;
            let still_hiding =
                matches!(entries.get(&id), Some(entry) if entry.state == DisplayState::Hiding);
            if !still_hiding {
                // cleared in the meantime
                return;
            }

            entries.remove(&id);
            inner.surface_service.unmount(&id).await;
            tracing::trace!(%id, "notification removed");
        });
    }

    async fn activate_action(self: &Arc<Self>, id: NotificationId) -> Option<NavigationTarget> {
        let target = {
            let entries = self.entries.lock().await;
            let entry = entries.get(&id)?;
            let action = entry.notification.action.as_ref()?;
            navigation::navigation_target(action)
        };

        tracing::debug!(%id, path = target.path(), "action activated");
        self.remove_entry(id, true).await;

        Some(target)
    }

    async fn drain_flash(self: &Arc<Self>, payloads: Vec<input::FlashPayload>) {
        for (position, payload) in payloads.into_iter().enumerate() {
            let id = NotificationId::Flash(self.synthetic_suffix());
            let notification = Notification::from_flash(id, payload);
            let delay = self.config.flash_stagger_interval * position as u32;

            let inner = Arc::clone(self);
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                inner.display(notification, true).await;
            });
        }
    }

    async fn clear_all(&self) {
        let mut entries = self.entries.lock().await;
        for entry in entries.values_mut() {
            if let Some(timer) = entry.dismiss_timer.take() {
                timer.abort();
            }
        }

        let count = entries.len();
        entries.clear();
        self.surface_service.clear().await;

        tracing::debug!(count, "cleared all notifications");
    }

    async fn notify(
        self: &Arc<Self>,
        kind: NotificationKind,
        message: String,
        auto_dismiss: Option<bool>,
    ) -> NotificationId {
        let id = NotificationId::Local(self.synthetic_suffix());
        let notification = Notification {
            id: id.clone(),
            kind,
            message,
            created_at: Some(OffsetDateTime::now_utc()),
            auto_dismiss: auto_dismiss.unwrap_or_else(|| kind.default_auto_dismiss()),
            action: None,
        };

        self.display(notification, true).await;

        id
    }

    fn synthetic_suffix(&self) -> String {
        let sequence = self.synthetic_sequence.fetch_add(1, Ordering::Relaxed);
        let now_millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;

        format!("{now_millis}-{sequence}")
    }
}

#[async_trait]
impl NotificationCenterService for NotificationCenterServiceImpl {
    #[tracing::instrument(
        name = "Notification Center",
        skip_all,
        fields(id = %notification.id, live)
    )]
    async fn display(&self, notification: Notification, live: bool) {
        self.inner.display(notification, live).await;
    }

    #[tracing::instrument(name = "Notification Center", skip_all, fields(%id))]
    async fn remove(&self, id: NotificationId) {
        self.inner.remove_entry(id, true).await;
    }

    #[tracing::instrument(name = "Notification Center", skip_all, fields(%id))]
    async fn discard(&self, id: NotificationId) {
        self.inner.remove_entry(id, false).await;
    }

    #[tracing::instrument(name = "Notification Center", skip_all, fields(%id))]
    async fn activate_action(&self, id: NotificationId) -> Option<NavigationTarget> {
        self.inner.activate_action(id).await
    }

    #[tracing::instrument(name = "Notification Center", skip_all, fields(count = payloads.len()))]
    async fn drain_flash(&self, payloads: Vec<input::FlashPayload>) {
        self.inner.drain_flash(payloads).await;
    }

    #[tracing::instrument(name = "Notification Center", skip_all)]
    async fn clear_all(&self) {
        self.inner.clear_all().await;
    }

    async fn notify(
        &self,
        kind: NotificationKind,
        message: String,
        auto_dismiss: Option<bool>,
    ) -> NotificationId {
        self.inner.notify(kind, message, auto_dismiss).await
    }

    async fn success(&self, message: String) -> NotificationId {
        self.inner
            .notify(NotificationKind::Success, message, None)
            .await
    }

    async fn error(&self, message: String) -> NotificationId {
        self.inner
            .notify(NotificationKind::Error, message, None)
            .await
    }

    async fn warning(&self, message: String) -> NotificationId {
        self.inner
            .notify(NotificationKind::Warning, message, None)
            .await
    }

    async fn info(&self, message: String) -> NotificationId {
        self.inner
            .notify(NotificationKind::Info, message, None)
            .await
    }
}
