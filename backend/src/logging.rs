use tracing::{Event, Subscriber};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{layer::Context, EnvFilter, Layer, Registry};

#[derive(Default)]
struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0.push_str(&format!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        }
    }
}

/// One line per event: timestamp, level tag, target, message.
struct LineLayer;

impl<S: Subscriber> Layer<S> for LineLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // SQL statements are too noisy even at debug
        if metadata.target().starts_with("sqlx") {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if visitor.0.is_empty() {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        match *metadata.level() {
            tracing::Level::ERROR => eprintln!("[{}] ERROR {} - {}", timestamp, metadata.target(), visitor.0),
            tracing::Level::WARN => eprintln!("[{}] WARN  {} - {}", timestamp, metadata.target(), visitor.0),
            tracing::Level::INFO => println!("[{}] INFO  {} - {}", timestamp, metadata.target(), visitor.0),
            _ => println!("[{}] DEBUG {} - {}", timestamp, metadata.target(), visitor.0),
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter. Records
/// emitted through `log` by the shared crate are forwarded as well.
pub fn setup() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,lander_backend=info,lander_shared=info,tower_http=info"));

    let subscriber = Registry::default().with(env_filter).with(LineLayer);

    if let Err(e) = subscriber.try_init() {
        eprintln!("logging already initialised: {}", e);
    }
}
