use crate::err;
use crate::error::HelloResult;
use std::fmt;
pub use tracing::instrument;
pub use tracing::{debug, error, info, trace, warn};
use tracing::Subscriber;
use tracing_error::ErrorLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::field::RecordFields;
use tracing_subscriber::fmt::format::{DefaultFields, FormatFields, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

/// Used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/* 📖 # Why a separate field formatter for span traces?
Span extensions cache formatted fields keyed by formatter type. With plain
`DefaultFields` the ErrorLayer would pick up the fmt layer's ANSI-styled copy,
so error traces would carry escape codes. A distinct type gets its own plain copy.
*/
pub(crate) struct TraceFields(DefaultFields);

impl<'writer> FormatFields<'writer> for TraceFields {
    fn format_fields<R: RecordFields>(&self, writer: Writer<'writer>, fields: R) -> fmt::Result {
        self.0.format_fields(writer, fields)
    }
}

/// ErrorLayer recording span fields as plain `key=value` text.
pub(crate) fn error_layer<S>() -> ErrorLayer<S, TraceFields>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    ErrorLayer::new(TraceFields(DefaultFields::new()))
}

/// Installs the global subscriber: `RUST_LOG` filter, fmt output and the
/// [`ErrorLayer`] that feeds span traces into [`crate::HelloError`].
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> HelloResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(error_layer())
        .try_init()
        .map_err(|e| err!("Failed to initialize tracing: {}", e))
}
