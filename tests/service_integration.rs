// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;
use toastkit::config::ToastConfig;
use toastkit::notifications::{Manager, ToastOptions, ToastService};

fn service(max: usize) -> ToastService {
    ToastService::new(Manager::new(ToastConfig {
        allow_multiple: true,
        max_concurrent: max,
        duration_ms: 1000,
        ..ToastConfig::default()
    }))
    .expect("inside runtime")
}

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    tokio::task::yield_now().await;
}

fn visible(service: &ToastService) -> Vec<String> {
    service
        .snapshot()
        .active
        .iter()
        .map(|t| t.message().to_owned())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn queue_drains_in_submission_order() {
    let service = service(2);
    for message in ["A", "B", "C", "D"] {
        assert!(service.submit(message, ToastOptions::new()).is_some());
    }
    assert_eq!(visible(&service), ["A", "B"]);

    advance(1001).await;
    assert_eq!(visible(&service), ["C", "D"]);

    advance(1001).await;
    assert!(service.snapshot().is_idle());
}

#[tokio::test(start_paused = true)]
async fn early_dismissal_backfills_immediately() {
    let service = service(1);
    let a = service.submit("A", ToastOptions::new()).expect("admitted");
    service.submit("B", ToastOptions::new().duration_ms(500));

    advance(200).await;
    assert!(service.dismiss(&a));
    assert_eq!(visible(&service), ["B"]);

    // B's clock starts at promotion, not at submission.
    advance(400).await;
    assert_eq!(visible(&service), ["B"]);
    advance(101).await;
    assert!(service.snapshot().is_idle());
}

#[tokio::test(start_paused = true)]
async fn swipe_only_removes_swipeable_toasts() {
    let service = service(2);
    let fixed = service.submit("fixed", ToastOptions::new()).expect("admitted");
    let loose = service
        .submit("loose", ToastOptions::new().swipeable(true))
        .expect("admitted");

    assert!(!service.swipe(&fixed));
    assert!(service.swipe(&loose));
    assert_eq!(visible(&service), ["fixed"]);
}

#[tokio::test(start_paused = true)]
async fn clear_cancels_everything() {
    let service = service(1);
    let mut rx = service.subscribe();
    service.submit("A", ToastOptions::new());
    service.submit("B", ToastOptions::new());
    rx.borrow_and_update();

    service.clear();
    assert!(rx.has_changed().expect("sender alive"));
    assert!(rx.borrow_and_update().is_idle());

    advance(5000).await;
    assert!(service.snapshot().is_idle());
}
