//! Simulation behavior against the production panel surface

use std::{sync::Arc, time::Duration};

use tokio::task::yield_now;
use tokio::time::sleep;

use green_wave::scheduler::TrafficScheduler;
use green_wave::state::{LightColor, Mode};
use green_wave::surface::PanelSurface;

/// Let freshly spawned run tasks reach their first sleep
async fn settle() {
    for _ in 0..4 {
        yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn panel_follows_the_fixed_cycle() {
    let panel = Arc::new(PanelSurface::new());
    let scheduler = TrafficScheduler::new(Arc::clone(&panel));
    scheduler.initialize();
    settle().await;

    let snapshot = panel.snapshot().unwrap();
    assert_eq!(snapshot.light, Some(LightColor::Red));
    assert!(!snapshot.traffic.moving);
    assert_eq!(snapshot.system_type.text, "Fixed Schedule");
    assert_eq!(snapshot.toggle.label, "Switch to AI Control");

    sleep(Duration::from_millis(4001)).await;
    let snapshot = panel.snapshot().unwrap();
    assert_eq!(snapshot.light, Some(LightColor::Green));
    assert!(snapshot.traffic.moving);
    assert_eq!(snapshot.traffic.lap_ms, Some(4000));

    sleep(Duration::from_millis(3000)).await;
    let snapshot = panel.snapshot().unwrap();
    assert_eq!(snapshot.light, Some(LightColor::Yellow));
    assert!(!snapshot.traffic.moving);
}

#[tokio::test(start_paused = true)]
async fn toggling_restyles_the_panel() {
    let panel = Arc::new(PanelSurface::new());
    let scheduler = TrafficScheduler::new(Arc::clone(&panel));
    scheduler.initialize();
    settle().await;

    let snapshot = scheduler.toggle_mode().unwrap();
    assert_eq!(snapshot.mode, Mode::Adaptive);
    settle().await;

    let snapshot = panel.snapshot().unwrap();
    assert_eq!(snapshot.light, Some(LightColor::Red));
    assert_eq!(snapshot.system_type.text, "AI Adaptive");
    assert_eq!(snapshot.system_type.color, "#00d4ff");
    assert_eq!(snapshot.waiting_time.text, "Low (-21.6%)");
    assert_eq!(snapshot.emissions.text, "Low (-31.73%)");
    assert_eq!(snapshot.toggle.label, "Switch to Fixed Schedule");

    sleep(Duration::from_millis(2001)).await;
    let snapshot = panel.snapshot().unwrap();
    assert_eq!(snapshot.light, Some(LightColor::Green));
    assert_eq!(snapshot.traffic.lap_ms, Some(2500));
}
