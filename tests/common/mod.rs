//! Shared utilities for integration tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use iris_serve::http::{AppState, HttpServer};
use iris_serve::lifecycle::Shutdown;
use iris_serve::model::{Classifier, InferenceError, SoftmaxClassifier, FEATURE_COUNT};

/// A classifier whose softmax decisively separates the iris classes on
/// petal features; the classic setosa row scores near 1.0 for class 0.
pub fn well_trained_model() -> SoftmaxClassifier {
    SoftmaxClassifier {
        coefficients: vec![
            [0.0, 0.0, -6.0, 0.0],
            [0.0, 0.0, 3.0, -6.0],
            [0.0, 0.0, 2.0, 8.0],
        ],
        intercepts: vec![12.0, -6.0, -16.0],
    }
}

/// Four-class model dominated by the class outside the label table.
#[allow(dead_code)]
pub fn four_class_model() -> SoftmaxClassifier {
    SoftmaxClassifier {
        coefficients: vec![[0.0; FEATURE_COUNT]; 4],
        intercepts: vec![0.0, 0.0, 0.0, 10.0],
    }
}

/// A classifier that always fails, for exercising the inference error path.
#[allow(dead_code)]
pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict_proba(&self, _features: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>, InferenceError> {
        Err(InferenceError::NonFinite { class: 0 })
    }
}

/// Write a model artifact to a unique temp path.
#[allow(dead_code)]
pub fn write_model_file(model: &SoftmaxClassifier) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "iris-serve-test-model-{}.json",
        uuid::Uuid::new_v4().simple()
    ));
    std::fs::write(&path, serde_json::to_string(model).unwrap()).unwrap();
    path
}

/// One log event flattened into its string fields (message included).
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

struct CaptureLayer;

impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldCollector(&mut fields));
        recorded_events()
            .lock()
            .unwrap()
            .push(CapturedEvent { fields });
    }
}

struct FieldCollector<'a>(&'a mut HashMap<String, String>);

impl Visit for FieldCollector<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

fn recorded_events() -> &'static Mutex<Vec<CapturedEvent>> {
    static EVENTS: OnceLock<Mutex<Vec<CapturedEvent>>> = OnceLock::new();
    EVENTS.get_or_init(|| Mutex::new(Vec::new()))
}

/// Install the capturing subscriber for the whole test binary. The event
/// store is shared across tests, so assertions filter by trace id, which is
/// unique per request.
pub fn init_log_capture() {
    static INSTALL: OnceLock<()> = OnceLock::new();
    INSTALL.get_or_init(|| {
        let subscriber = tracing_subscriber::registry().with(CaptureLayer);
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// All captured events whose `trace_id` field matches.
pub fn events_for_trace(trace_id: &str) -> Vec<CapturedEvent> {
    recorded_events()
        .lock()
        .unwrap()
        .iter()
        .filter(|event| event.field("trace_id") == Some(trace_id))
        .cloned()
        .collect()
}

/// A fresh well-formed trace id for pinning a request to its log records.
#[allow(dead_code)]
pub fn fresh_trace_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// A service instance bound to an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub state: AppState,
    shutdown: Shutdown,
}

impl TestServer {
    /// Spawn the full middleware stack around the given state.
    pub async fn spawn(state: AppState) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let shutdown = Shutdown::new();
        let rx = shutdown.subscribe();
        let server = HttpServer::new(state.clone());
        tokio::spawn(async move {
            let _ = server.run(listener, rx).await;
        });

        Self {
            addr,
            state,
            shutdown,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}
