//! End-to-end form flow through the TEA message loop
//!
//! Loads the bundled demo form definition and drives it with key messages the
//! way the terminal runner does, minus the terminal.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use crmform_app::config::{load_form_definition, load_initial_values, Settings};
use crmform_app::process::process_message;
use crmform_app::{AppState, ChannelSubmitHandler, InputKey, Message, Submission, UiMode};
use crmform_core::FieldValue;

struct Harness {
    state: AppState,
    msg_tx: mpsc::Sender<Message>,
    msg_rx: mpsc::Receiver<Message>,
    handler: Arc<ChannelSubmitHandler>,
    submissions: mpsc::Receiver<Submission>,
}

impl Harness {
    fn new() -> Self {
        let definition = load_form_definition(&demo_path("client.toml")).unwrap();
        let settings = Settings::default();
        let state = AppState::new(definition.into_props(&settings).unwrap(), settings);
        let (msg_tx, msg_rx) = mpsc::channel(32);
        let (handler, submissions) = ChannelSubmitHandler::channel(4);
        let mut harness = Self {
            state,
            msg_tx,
            msg_rx,
            handler: Arc::new(handler),
            submissions,
        };
        harness.send(Message::OpenForm);
        harness
    }

    fn send(&mut self, message: Message) {
        process_message(&mut self.state, message, &self.msg_tx, &self.handler);
    }

    fn key(&mut self, key: InputKey) {
        self.send(Message::Key(key));
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.key(InputKey::Char(c));
        }
    }

    /// Wait for the spawned submit task to report back and apply its result
    async fn settle_submit(&mut self) {
        let message = self.msg_rx.recv().await.unwrap();
        assert!(matches!(message, Message::SubmitCompleted { .. }));
        self.send(message);
    }

    fn value(&self, name: &str) -> Option<&FieldValue> {
        self.state.form.form().value(name)
    }
}

fn demo_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(file)
}

#[test]
fn test_demo_definition_uses_split_layout() {
    let harness = Harness::new();
    let columns = harness.state.form.columns();

    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].fields.len(), 8);
    assert_eq!(columns[1].fields.len(), 2);
    assert!(columns.iter().all(|column| column.show_extra));
}

#[test]
fn test_definition_initial_values_prefill_form() {
    let harness = Harness::new();
    assert_eq!(harness.value("stage"), Some(&FieldValue::text("lead")));
}

#[tokio::test]
async fn test_fill_and_submit_resets_form() {
    let mut h = Harness::new();

    h.type_text("Acme");
    h.key(InputKey::Tab);
    h.type_text("Ada");
    h.key(InputKey::CharCtrl('s'));
    assert!(h.state.form.is_submitting());

    let submission = h.submissions.recv().await.unwrap();
    assert_eq!(
        submission.values.get("company"),
        Some(&FieldValue::text("Acme"))
    );
    assert_eq!(
        submission.values.get("contact"),
        Some(&FieldValue::text("Ada"))
    );
    assert_eq!(
        submission.values.get("stage"),
        Some(&FieldValue::text("lead"))
    );

    h.settle_submit().await;

    assert_eq!(h.state.ui_mode(), UiMode::Form);
    assert!(h.state.form.form().values().is_empty());
    assert_eq!(h.state.submissions, 1);
}

#[tokio::test]
async fn test_failed_submit_keeps_input() {
    let mut h = Harness::new();
    h.type_text("Acme");
    h.key(InputKey::Tab);
    h.type_text("Ada");

    // Nobody listens for submissions any more
    h.submissions.close();
    h.key(InputKey::CharCtrl('s'));
    h.settle_submit().await;

    assert_eq!(h.value("company"), Some(&FieldValue::text("Acme")));
    assert!(h.state.form.last_error().is_some());
    assert_eq!(h.state.submissions, 0);
}

#[test]
fn test_required_fields_gate_submit() {
    let mut h = Harness::new();
    h.type_text("Acme");

    h.key(InputKey::CharCtrl('s'));

    assert!(!h.state.form.is_submitting());
}

#[test]
fn test_close_with_prefilled_values_asks_first() {
    let mut h = Harness::new();

    h.key(InputKey::Esc);
    assert_eq!(h.state.ui_mode(), UiMode::ConfirmDiscard);

    h.key(InputKey::Char('n'));
    assert_eq!(h.state.ui_mode(), UiMode::Form);
    assert_eq!(h.value("stage"), Some(&FieldValue::text("lead")));

    h.key(InputKey::Esc);
    h.key(InputKey::Char('y'));
    assert_eq!(h.state.ui_mode(), UiMode::Page);
    assert!(h.state.form.form().values().is_empty());
}

#[test]
fn test_loaded_record_merges_over_definition_values() {
    let mut h = Harness::new();
    let record = load_initial_values(&demo_path("acme.json")).unwrap();

    h.send(Message::InitialValuesLoaded {
        values: Arc::new(record),
    });

    assert_eq!(h.value("company"), Some(&FieldValue::text("Acme Corp")));
    assert_eq!(h.value("budget"), Some(&FieldValue::Number(25000.0)));
    assert_eq!(h.value("stage"), Some(&FieldValue::text("lead")));
    assert!(h.state.form.is_submit_enabled());
}
