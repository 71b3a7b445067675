use super::SurfaceService;
use crate::service::notification_center_service::NotificationId;
use async_trait::async_trait;
use tokio::sync::RwLock;

///
/// In-memory rendering surface producing the notification container
/// markup for the host page to paint. Items keep insertion order;
/// hiding items stay mounted inside an exit-transition wrapper until
/// the manager unmounts them.
///
pub struct HtmlSurfaceService {
    items: RwLock<Vec<SurfaceItem>>,
}

struct SurfaceItem {
    id: NotificationId,
    html: String,
    hiding: bool,
}

impl HtmlSurfaceService {
    pub fn new() -> Self {
        let items = Vec::new();
        let items = RwLock::new(items);

        Self { items }
    }

    ///
    /// The single container, marked as a polite, non-atomic live
    /// region for assistive technology.
    ///
    pub async fn container_html(&self) -> String {
        let items = self.items.read().await;

        let mut html = String::from(
            "<div id=\"notification-container\" class=\"notification-container\" \
             aria-live=\"polite\" aria-atomic=\"false\">",
        );
        for item in items.iter() {
            match item.hiding {
                true => {
                    html.push_str("<div class=\"notification-exit\">");
                    html.push_str(&item.html);
                    html.push_str("</div>");
                }
                false => html.push_str(&item.html),
            }
        }
        html.push_str("</div>");

        html
    }

    pub async fn is_mounted(&self, id: &NotificationId) -> bool {
        let items = self.items.read().await;
        items.iter().any(|item| item.id == *id)
    }

    pub async fn mounted_count(&self) -> usize {
        let items = self.items.read().await;
        items.len()
    }
}

impl Default for HtmlSurfaceService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SurfaceService for HtmlSurfaceService {
    async fn mount(&self, id: &NotificationId, html: String) {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|item| item.id == *id) {
            Some(item) => {
                item.html = html;
                item.hiding = false;
            }
            None => items.push(SurfaceItem {
                id: id.clone(),
                html,
                hiding: false,
            }),
        }
    }

    async fn set_hiding(&self, id: &NotificationId) {
        let mut items = self.items.write().await;
        if let Some(item) = items.iter_mut().find(|item| item.id == *id) {
            item.hiding = true;
        }
    }

    async fn unmount(&self, id: &NotificationId) {
        let mut items = self.items.write().await;
        items.retain(|item| item.id != *id);
    }

    async fn clear(&self) {
        let mut items = self.items.write().await;
        items.clear();
    }
}
