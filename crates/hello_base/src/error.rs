use std::error::Error as StdError;
use std::fmt;
use tracing_error::{SpanTrace, SpanTraceStatus};

/* 📖 # Why a custom error type and not anyhow/eyre/thiserror?

- The error renders as a tree of context and causes, which generic crates do not do
- Span traces are captured at construction without opting in per call site
- No extra error crates to compile
 */

/// Error variants that can occur in hello operations.
#[derive(Debug)]
pub enum ErrorKind {
    /// Catch-all for errors with a message
    Message { message: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Message { message } => write!(f, "{}", message),
        }
    }
}

/// Error type wrapping an [`ErrorKind`] with context, an optional cause and the
/// span trace active at the point of creation.
pub struct HelloError {
    kind: ErrorKind,
    context: Vec<String>,
    cause: Option<Box<HelloError>>,
    span_trace: SpanTrace,
}

impl HelloError {
    /// Creates a new error from an ErrorKind, capturing the current span trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            cause: None,
            span_trace: SpanTrace::capture(),
        }
    }

    /// Shorthand for an [`ErrorKind::Message`] error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Attaches context to an error.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    /// Records the error that led to this one.
    pub fn caused_by(mut self, cause: HelloError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Returns a reference to the underlying ErrorKind.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the attached contexts, oldest first.
    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    /// Returns the error recorded with [`HelloError::caused_by`], if any.
    pub fn cause(&self) -> Option<&HelloError> {
        self.cause.as_deref()
    }

    /// Returns the span trace captured when the error was created.
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// Returns the innermost error in the source chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        writeln!(f, "{}", self.kind)?;
        let last_context = self.context.len().saturating_sub(1);
        for (i, ctx) in self.context.iter().enumerate() {
            let branch = if i == last_context && self.cause.is_none() {
                "└─"
            } else {
                "├─"
            };
            writeln!(f, "{indent}{branch} {ctx}")?;
        }
        if let Some(cause) = &self.cause {
            write!(f, "{indent}└─ cause: ")?;
            cause.fmt_tree(f, &format!("{indent}   "))?;
        }
        Ok(())
    }
}

impl From<ErrorKind> for HelloError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl StdError for HelloError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl fmt::Display for HelloError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in &self.context {
            write!(f, "{}: ", ctx)?;
        }
        write!(f, "{}", self.kind)
    }
}

/* 📖 # Why a hand-written Debug impl?
`{:?}` on an error is what ends up in test failures and `main` returning `Err`.
A tree of message, context and causes followed by the span trace reads far better
than the derived struct dump.
*/
impl fmt::Debug for HelloError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, "")?;
        if self.span_trace.status() == SpanTraceStatus::CAPTURED {
            writeln!(f, "Trace: {}", self.span_trace)?;
        }
        Ok(())
    }
}

/// Standard result type for hello operations.
pub type HelloResult<T> = std::result::Result<T, Box<HelloError>>;

/// Extension trait for attaching context to Results during propagation.
pub trait ResultExt<T> {
    /// Attaches context to an error. Eager evaluation.
    fn context(self, context: impl Into<String>) -> HelloResult<T>;

    /// Attaches context, only evaluated if the result is an error.
    fn with_context<F>(self, f: F) -> HelloResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for HelloResult<T> {
    fn context(self, context: impl Into<String>) -> HelloResult<T> {
        self.map_err(|err| Box::new((*err).context(context)))
    }

    fn with_context<F>(self, f: F) -> HelloResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new((*err).with_context(f)))
    }
}

/// Creates a boxed [`HelloError`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        ::std::boxed::Box::new($crate::HelloError::message(::std::format!($($arg)*)))
    };
}

/// Returns early with an error built by [`err!`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return ::std::result::Result::Err($crate::err!($($arg)*))
    };
}
