//! RouterLayer - `tracing` events into a [`LogRouter`]
//!
//! Maps each tracing event to a [`LogEvent`]: the level becomes the
//! severity, the target becomes the tag, and the message is the `message`
//! field followed by the remaining fields as ` key=value`.

use std::fmt;
use std::sync::Arc;

use logcrumb_core::domain::{LogEvent, Severity};
use tracing::{
    field::{Field, Visit},
    Event, Level, Subscriber,
};
use tracing_subscriber::{layer::Context, Layer};

use crate::router::LogRouter;

/// Layer that forwards every event it sees to a router.
#[derive(Clone)]
pub struct RouterLayer {
    router: Arc<LogRouter>,
}

impl RouterLayer {
    pub fn new(router: Arc<LogRouter>) -> Self {
        Self { router }
    }
}

/// Severity for a tracing level.
pub fn severity_for(level: &Level) -> Severity {
    if *level == Level::ERROR {
        Severity::Error
    } else if *level == Level::WARN {
        Severity::Warn
    } else if *level == Level::INFO {
        Severity::Info
    } else if *level == Level::DEBUG {
        Severity::Debug
    } else {
        Severity::Verbose
    }
}

impl<S: Subscriber> Layer<S> for RouterLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        self.router.emit(LogEvent::new(
            severity_for(metadata.level()),
            metadata.target(),
            visitor.finish(),
        ));
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        let mut out = self.message;
        for field in self.fields {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&field);
        }
        out
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logcrumb_core::{domain::FormattedLine, ports::ILogSink};
    use std::sync::Mutex;
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Default)]
    struct RecordingSink {
        lines: Mutex<Vec<String>>,
    }

    impl ILogSink for RecordingSink {
        fn accept(&self, line: &FormattedLine) {
            self.lines.lock().unwrap().push(line.as_str().to_string());
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    fn with_layer(f: impl FnOnce()) -> Vec<String> {
        let recorder = Arc::new(RecordingSink::default());
        let mut router = LogRouter::new();
        router.install(recorder.clone());

        let subscriber =
            tracing_subscriber::registry().with(RouterLayer::new(Arc::new(router)));
        tracing::subscriber::with_default(subscriber, f);

        let lines = recorder.lines.lock().unwrap().clone();
        lines
    }

    #[test]
    fn test_event_is_routed_with_target_as_tag() {
        let lines = with_layer(|| {
            tracing::error!(target: "player", "boom");
        });
        assert_eq!(lines, vec!["E/[player]\tboom\n".to_string()]);
    }

    #[test]
    fn test_fields_follow_message() {
        let lines = with_layer(|| {
            tracing::info!(target: "net", peer = 3, name = "alpha", "connected");
        });
        assert_eq!(lines, vec!["I/[net]\tconnected peer=3 name=alpha\n".to_string()]);
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(severity_for(&Level::TRACE), Severity::Verbose);
        assert_eq!(severity_for(&Level::DEBUG), Severity::Debug);
        assert_eq!(severity_for(&Level::INFO), Severity::Info);
        assert_eq!(severity_for(&Level::WARN), Severity::Warn);
        assert_eq!(severity_for(&Level::ERROR), Severity::Error);
    }
}
