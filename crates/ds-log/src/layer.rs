//! Redacting line formatter as a tracing layer.
//!
//! Renders each event into a fixed line layout, pipes the whole rendered
//! line through the redactor, then writes it to the owned sink. Because
//! redaction runs after rendering, a sensitive `field=value;` shape is
//! masked no matter which rendered component it leaked through.

use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

use chrono::Utc;
use ds_redact::Redactor;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use crate::record::render_row;

/// A visitor that collects the message and remaining fields of an event.
#[derive(Default)]
struct LineVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for LineVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        let rendered = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(rendered);
        } else {
            self.fields.push((field.name().to_string(), rendered));
        }
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }
}

/// Tracing layer that redacts rendered lines before they reach the sink.
///
/// Line layout: `<prefix> <target> <LEVEL> <timestamp>: <message>`,
/// followed by any structured fields rendered as `field=value;`
/// segments so they fall under the same redaction pass.
pub struct RedactingLayer<W = io::Stderr> {
    prefix: String,
    redactor: Redactor,
    writer: Mutex<W>,
}

impl RedactingLayer<io::Stderr> {
    /// Create a redacting layer writing to stderr.
    pub fn stderr(prefix: impl Into<String>, redactor: Redactor) -> Self {
        RedactingLayer {
            prefix: prefix.into(),
            redactor,
            writer: Mutex::new(io::stderr()),
        }
    }
}

impl<W: Write> RedactingLayer<W> {
    /// Create a redacting layer with a custom sink.
    pub fn new(writer: W, prefix: impl Into<String>, redactor: Redactor) -> Self {
        RedactingLayer {
            prefix: prefix.into(),
            redactor,
            writer: Mutex::new(writer),
        }
    }

    fn render(&self, event: &Event<'_>) -> String {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let meta = event.metadata();
        let mut line = format!(
            "{} {} {} {}: {}",
            self.prefix,
            meta.target(),
            meta.level(),
            Utc::now().to_rfc3339(),
            visitor.message.unwrap_or_default()
        );
        if !visitor.fields.is_empty() {
            line.push(' ');
            line.push_str(&render_row(
                visitor.fields.iter().map(|(k, v)| (k.as_str(), v.as_str())),
                self.redactor.config().separator,
            ));
        }
        line
    }
}

impl<S, W> Layer<S> for RedactingLayer<W>
where
    S: Subscriber,
    W: Write + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let line = self.render(event);
        let line = self.redactor.redact(&line);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }
}
