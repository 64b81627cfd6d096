//! Example: Run every operation against a few focus snapshots.
//!
//! Run with: cargo run -p clipspeak --example announce_demo

use clipspeak::adapters::PlatformClipboard;
use clipspeak::focus::{FocusSnapshot, StaticProvider};
use clipspeak::gesture::{Gesture, NullSink};
use clipspeak::{LogAnnouncer, Operation, OperationController, Settings, SettingsStore};
use std::sync::Arc;

const SNAPSHOTS: &str = r#"[
    {"window_class_name": "Edit", "role": "editable_text", "states": ["editable", "focused"]},
    {"window_class_name": "Edit", "role": "document", "states": ["multiline", "read_only"]},
    {"window_class_name": "DirectUIHWND", "role": "list_item", "states": ["selected"]},
    {"window_class_name": "Button", "role": "button", "states": ["focused"]}
]"#;

fn load_settings() -> clipspeak::Result<Settings> {
    match SettingsStore::open_default() {
        Ok(store) => Ok(store.load()?),
        Err(e) => {
            println!("Using default settings ({})", e);
            Ok(Settings::default())
        }
    }
}

fn main() -> clipspeak::Result<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter("clipspeak=debug,clipspeak_focus=debug,clipspeak_gesture=debug")
        .init();

    let settings = load_settings()?;
    println!("Terse announcements: {}\n", settings.terse_announcements);

    let snapshots: Vec<FocusSnapshot> = match serde_json::from_str(SNAPSHOTS) {
        Ok(snapshots) => snapshots,
        Err(e) => {
            eprintln!("Bad snapshot list: {}", e);
            return Ok(());
        }
    };

    for snapshot in snapshots {
        println!("=== {} / {:?} ===", snapshot.window_class_name, snapshot.role);

        let controller = OperationController::new(
            Arc::new(StaticProvider::new(Some(snapshot))),
            Arc::new(PlatformClipboard::new()),
            Arc::new(LogAnnouncer),
            Arc::new(NullSink),
        )
        .with_settings(settings);

        for op in Operation::ALL {
            let gesture = Gesture::new([op.default_gesture()]);
            let outcome = controller.handle_gesture(op, &gesture, None)?;
            println!("{:5} -> {:?}", op.label(), outcome);
        }
        println!();
    }

    Ok(())
}
