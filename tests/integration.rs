// SPDX-License-Identifier: MPL-2.0
use std::time::{Duration, Instant};
use tempfile::tempdir;
use toastkit::config::{self, Config, ToastConfig};
use toastkit::diagnostics::DiagnosticsCollector;
use toastkit::input::{apply_mask, remove_mask, Mask};
use toastkit::layout::{position, Rect, Side, Size};
use toastkit::notifications::{Admission, Manager, Placement, RejectReason, ToastOptions};
use toastkit::style::{cn, style_toast, StyleBackend, ToastStyle};

fn stacked(max: usize) -> Manager {
    Manager::new(ToastConfig {
        allow_multiple: true,
        max_concurrent: max,
        ..ToastConfig::default()
    })
}

fn messages(manager: &Manager) -> Vec<String> {
    manager
        .snapshot()
        .active
        .iter()
        .map(|t| t.message().to_owned())
        .collect()
}

#[test]
fn queued_toast_is_promoted_when_an_active_one_expires() {
    let mut manager = stacked(2);
    let start = Instant::now();
    for message in ["A", "B", "C"] {
        assert!(manager
            .submit(message, ToastOptions::new().duration_ms(3000))
            .is_some());
    }
    assert_eq!(messages(&manager), ["A", "B"]);
    assert_eq!(manager.pending_count(), 1);

    let expired = manager.tick_at(start + Duration::from_secs(5));
    assert_eq!(expired.len(), 2);
    assert_eq!(messages(&manager), ["C"]);
    assert_eq!(manager.pending_count(), 0);
}

#[test]
fn single_mode_rejects_while_a_toast_is_visible() {
    let mut manager = Manager::default();
    let first = manager.submit("first", ToastOptions::new());
    assert!(first.is_some());

    let second = manager.submit_detailed("second", ToastOptions::new());
    assert_eq!(second.admission, Admission::Rejected(RejectReason::Busy));
    assert_eq!(messages(&manager), ["first"]);

    let first = first.expect("admitted");
    assert!(manager.dismiss(&first));
    assert!(manager.submit("third", ToastOptions::new()).is_some());
}

#[test]
fn dismissing_twice_is_a_no_op() {
    let mut manager = stacked(2);
    let id = manager.submit("A", ToastOptions::new()).expect("admitted");
    assert!(manager.dismiss(&id));
    assert!(!manager.dismiss(&id));
    assert!(!manager.has_notifications());
}

#[test]
fn diagnostics_record_the_toast_lifecycle() {
    let mut collector = DiagnosticsCollector::new(Default::default());
    let mut manager = stacked(1);
    manager.set_diagnostics(collector.handle());

    let a = manager.submit("A", ToastOptions::new()).expect("admitted");
    manager.submit("B", ToastOptions::new());
    manager.dismiss(&a);

    collector.process_pending();
    let summary = collector.summary();
    assert_eq!(summary.admitted, 2);
    assert_eq!(summary.promoted, 2);
    assert_eq!(summary.removed, 1);

    let json = collector.export_json().expect("export");
    assert!(json.contains("\"type\": \"promoted\""));
}

#[test]
fn config_file_drives_manager_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.toast.allow_multiple = true;
    initial.toast.max_concurrent = 3;
    initial.toast.position = Placement::Bottom;
    config::save_to_path(&initial, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let mut manager = Manager::new(loaded.toast);
    for i in 0..5 {
        manager.submit(format!("toast {i}"), ToastOptions::new());
    }
    let snapshot = manager.snapshot();
    assert_eq!(snapshot.active.len(), 3);
    assert_eq!(snapshot.pending, 2);
    assert!(snapshot
        .active
        .iter()
        .all(|t| t.placement() == Placement::Bottom));
}

#[test]
fn styled_toast_uses_configured_backend() {
    let mut manager = Manager::default();
    manager.submit("saved", ToastOptions::new().offset_y(12.0));
    let snapshot = manager.snapshot();
    let toast = &snapshot.active[0];

    match style_toast(StyleBackend::Utility, toast, "p-6") {
        ToastStyle::Classes(classes) => {
            assert!(classes.ends_with("p-6"));
            assert!(classes.contains("mt-[12px]"));
        }
        ToastStyle::Inline(_) => panic!("expected classes"),
    }
    assert!(matches!(
        style_toast(StyleBackend::Stylesheet, toast, "p-6"),
        ToastStyle::Inline(_)
    ));
}

#[test]
fn cn_lets_later_classes_win() {
    assert_eq!(cn(["px-2 py-1 bg-red-500", "p-4 bg-blue-500"]), "p-4 bg-blue-500");
    assert_eq!(cn(["text-sm text-gray-900", "text-lg"]), "text-gray-900 text-lg");
}

#[test]
fn masked_input_round_trips() {
    let mask = Mask::parse("999.999.999-99").expect("valid mask");
    let formatted = mask.apply("12345678901");
    assert_eq!(formatted, "123.456.789-01");
    assert_eq!(remove_mask(&formatted, mask.pattern()), "12345678901");
    assert_eq!(apply_mask("1234", mask.pattern()), "123.4");
}

#[test]
fn dropdown_flips_near_viewport_bottom() {
    let viewport = Size::new(360.0, 640.0);
    let content = Size::new(200.0, 240.0);

    let near_top = position(Rect::new(16.0, 40.0, 120.0, 32.0), content, viewport, Side::Bottom);
    assert_eq!(near_top.side, Side::Bottom);

    let near_bottom = position(Rect::new(16.0, 560.0, 120.0, 32.0), content, viewport, Side::Bottom);
    assert_eq!(near_bottom.side, Side::Top);
    assert!(near_bottom.top >= 0.0);
}

#[test]
fn style_section_selects_backend() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[style]\nbackend = \"stylesheet\"\n").expect("write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.style.backend, StyleBackend::Stylesheet);

    let mut manager = Manager::new(loaded.toast);
    manager.submit("saved", ToastOptions::new());
    let snapshot = manager.snapshot();
    assert!(matches!(
        style_toast(loaded.style.backend, &snapshot.active[0], ""),
        ToastStyle::Inline(_)
    ));
}
