mod common;

use campus_notifier_client::{dto::input::FlashPayload, NotifierClient};
use common::test_config;
use tokio::time::sleep;

#[tokio::test]
async fn flash_rendered_for_unauthenticated_viewer() {
    let client = NotifierClient::new(test_config(), false);

    client
        .drain_flash(vec![FlashPayload {
            kind: "success".to_string(),
            message: "Saved".to_string(),
            timestamp: None,
        }])
        .await;

    sleep(test_config().flash_stagger_interval * 2).await;

    let surface = client.surface_service();
    assert_eq!(surface.mounted_count().await, 1);

    let html = surface.container_html().await;
    assert!(html.contains("Saved"));
    assert!(html.contains("Just now"));
    assert!(html.contains("notification-success"));

    // no push channel was ever opened
    assert!(!client.is_connected());
}

#[tokio::test]
async fn flash_payloads_shown_once_in_source_order() {
    let client = NotifierClient::new(test_config(), false);

    client
        .drain_flash(vec![
            FlashPayload {
                kind: "success".to_string(),
                message: "First change saved".to_string(),
                timestamp: None,
            },
            FlashPayload {
                kind: "info".to_string(),
                message: "Second change pending".to_string(),
                timestamp: None,
            },
        ])
        .await;

    sleep(test_config().flash_stagger_interval * 4).await;

    let surface = client.surface_service();
    assert_eq!(surface.mounted_count().await, 2);

    let html = surface.container_html().await;
    let first = html.find("First change saved").unwrap();
    let second = html.find("Second change pending").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn success_flash_auto_dismissed() {
    let config = test_config();
    let client = NotifierClient::new(config.clone(), false);

    client
        .drain_flash(vec![FlashPayload {
            kind: "success".to_string(),
            message: "Saved".to_string(),
            timestamp: None,
        }])
        .await;

    sleep(config.flash_stagger_interval * 2).await;
    assert_eq!(client.surface_service().mounted_count().await, 1);

    sleep(config.auto_dismiss_delay + config.exit_transition_delay * 3).await;
    assert_eq!(client.surface_service().mounted_count().await, 0);
}

#[tokio::test]
async fn error_flash_stays_until_dismissed() {
    let config = test_config();
    let client = NotifierClient::new(config.clone(), false);

    client
        .drain_flash(vec![FlashPayload {
            kind: "error".to_string(),
            message: "Save failed".to_string(),
            timestamp: None,
        }])
        .await;

    sleep(config.flash_stagger_interval * 2 + config.auto_dismiss_delay * 3).await;

    assert_eq!(client.surface_service().mounted_count().await, 1);
}
