//! Frame loop driven by a tokio interval.

use std::sync::Arc;
use std::time::Duration;

use min_core::headless::{HeadlessDocument, HeadlessLayout};
use min_core::{Config, KeyPress, Shell};
use min_navbar::dom::{Rect, CONTAINER_ID, INPUT_ID};
use tokio::sync::watch;

/// Test that the loop plays the reveal and applies submissions until shutdown
#[tokio::test(start_paused = true)]
async fn test_frame_loop_runs_until_shutdown() {
    let document = HeadlessDocument::standard();
    let layout = Arc::new(HeadlessLayout::new(1280.0));
    let shell = Shell::new(Config::default(), &document, layout.clone()).unwrap();

    shell.open_tab("https://example.com").unwrap();
    let tab = shell.open_tab("https://example.org").unwrap();
    layout.set_tab_rect(&tab.id, Rect::new(600.0, 0.0, 200.0, 36.0));
    layout.set_container_rect(Rect::new(0.0, 0.0, 1280.0, 36.0));
    shell.edit_tab(&tab.id, None).unwrap();

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let looping = shell.clone();
    let handle = tokio::spawn(async move { looping.run_frame_loop(shutdown_rx).await });

    tokio::time::sleep(Duration::from_millis(100)).await;

    let overlay = document.headless_overlay(CONTAINER_ID).unwrap();
    assert_eq!(overlay.style().opacity, Some(1.0));
    assert_eq!(shell.frames().pending(), 0);

    let input = document.headless_input(INPUT_ID).unwrap();
    input.type_text("example.net");
    input.press_key(KeyPress::enter());

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(
        shell.tabs().get_tab(&tab.id).unwrap().url,
        "https://example.net"
    );
    assert!(!shell.editor().is_shown());

    shutdown_tx.send(true).unwrap();
    handle.await.unwrap();
}

/// Test that dropping the shutdown sender also stops the loop
#[tokio::test(start_paused = true)]
async fn test_frame_loop_stops_when_sender_dropped() {
    let document = HeadlessDocument::standard();
    let layout = Arc::new(HeadlessLayout::new(1280.0));
    let shell = Shell::new(Config::default(), &document, layout).unwrap();

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let handle = tokio::spawn(async move { shell.run_frame_loop(shutdown_rx).await });

    tokio::time::sleep(Duration::from_millis(50)).await;
    drop(shutdown_tx);
    handle.await.unwrap();
}
