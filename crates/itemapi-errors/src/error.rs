//! The error taxonomy itself.

use crate::trigger::TriggerAction;
use bytes::Bytes;

/// Boxed lower-level cause. Owned by the wrapping error, so chains are
/// acyclic by construction.
type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error raised by the Item API SDK.
///
/// Every error carries a human-readable description, an optional numeric
/// code and an optional lower-level cause, plus a [`ErrorKind`] that says
/// which failure condition it describes. Consumers branch on the kind, not
/// on the description text.
///
/// Fields are fixed once the value is handed off; the `with_*` methods
/// consume `self` and are meant to be chained at the construction site.
#[derive(Debug, thiserror::Error)]
#[error("{description}")]
pub struct Error {
    kind: ErrorKind,
    description: String,
    code: Option<i64>,
    #[source]
    source: Option<BoxedSource>,
}

/// The failure condition an [`Error`] describes.
///
/// This set is closed: there is no catch-all variant, and no error exists
/// without one of these kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// An item lookup returned no item.
    NoItem,
    /// Item creation failed, either from insufficient permissions or
    /// connectivity problems.
    CreateItem,
    /// A requested field does not exist on the item.
    NoField,
    /// A supplied content-tree path is malformed.
    InvalidPath,
    /// A supplied item identifier is malformed.
    InvalidItemId {
        /// The identifier as the caller passed it.
        item_id: String,
    },
    /// The underlying transport failed while loading data.
    Network,
    /// The encryption provider is not configured properly on the server.
    Encryption,
    /// The backend returned a structured error envelope instead of data.
    Response {
        /// Status code from the envelope.
        status_code: u16,
        /// Error message from the envelope.
        message: String,
        /// Error type name from the envelope, e.g. `ItemNotFoundException`.
        error_type: String,
        /// The API method that failed, e.g. `item.get`.
        method: String,
    },
    /// The response body could not be parsed into the expected shape.
    InvalidResponseFormat {
        /// The raw body, untouched, for diagnostic replay.
        response_data: Bytes,
    },
    /// A response expected to be image bytes is not a valid image.
    NotImageFound {
        /// The raw body, untouched, for diagnostic replay.
        response_data: Bytes,
    },
    /// A goal or campaign triggering request was not accepted.
    Triggering {
        /// Path of the item in the content tree.
        item_path: String,
        /// Which trigger was reported.
        action: TriggerAction,
        /// Goal name or campaign id, depending on the action.
        action_value: String,
    },
}

/// Coarse grouping of [`ErrorKind`]s, for handlers that treat whole
/// families of failures the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// `NoItem`, `CreateItem`, `NoField`.
    ItemLookup,
    /// `InvalidPath`, `InvalidItemId`.
    Addressing,
    /// `Network`.
    Transport,
    /// `Encryption`.
    ServerConfiguration,
    /// `Response`, `InvalidResponseFormat`, `NotImageFound`, `Triggering`.
    Backend,
}

impl ErrorKind {
    /// The family this kind belongs to.
    pub fn category(&self) -> Category {
        match self {
            ErrorKind::NoItem | ErrorKind::CreateItem | ErrorKind::NoField => Category::ItemLookup,
            ErrorKind::InvalidPath | ErrorKind::InvalidItemId { .. } => Category::Addressing,
            ErrorKind::Network => Category::Transport,
            ErrorKind::Encryption => Category::ServerConfiguration,
            ErrorKind::Response { .. }
            | ErrorKind::InvalidResponseFormat { .. }
            | ErrorKind::NotImageFound { .. }
            | ErrorKind::Triggering { .. } => Category::Backend,
        }
    }
}

impl Error {
    /// Create an error of the given kind with an explicit description.
    ///
    /// The description must be non-empty; it is for logging and display
    /// only, never for dispatch.
    pub fn new(kind: ErrorKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            code: None,
            source: None,
        }
    }

    /// Attach a numeric classifier.
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Replace the default description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach the lower-level error that triggered this one.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Per-kind constructors. Each bakes in a formulaic description that
    // `with_description` can override.

    /// An item lookup returned no item.
    pub fn no_item() -> Self {
        Self::new(ErrorKind::NoItem, "no item found for the request")
    }

    /// Item creation failed.
    pub fn create_item() -> Self {
        Self::new(ErrorKind::CreateItem, "item could not be created")
    }

    /// A requested field does not exist.
    pub fn no_field() -> Self {
        Self::new(ErrorKind::NoField, "requested field does not exist on the item")
    }

    /// A supplied content-tree path is malformed.
    pub fn invalid_path() -> Self {
        Self::new(ErrorKind::InvalidPath, "invalid content tree path")
    }

    /// A supplied item identifier is malformed.
    pub fn invalid_item_id(item_id: impl Into<String>) -> Self {
        let item_id = item_id.into();
        let description = format!("invalid item id: {item_id}");
        Self::new(ErrorKind::InvalidItemId { item_id }, description)
    }

    /// The transport failed. Usually constructed through
    /// `From<reqwest::Error>` so the cause rides along.
    pub fn network() -> Self {
        Self::new(ErrorKind::Network, "network failure while loading data")
    }

    /// Server-side encryption misconfiguration.
    pub fn encryption() -> Self {
        Self::new(
            ErrorKind::Encryption,
            "encryption provider is not configured on the server",
        )
    }

    /// The backend answered with a structured error envelope. The numeric
    /// code mirrors the envelope's status code.
    pub fn response(
        status_code: u16,
        message: impl Into<String>,
        error_type: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        let message = message.into();
        let method = method.into();
        let description = format!("{method} failed with status {status_code}: {message}");
        Self::new(
            ErrorKind::Response {
                status_code,
                message,
                error_type: error_type.into(),
                method,
            },
            description,
        )
        .with_code(i64::from(status_code))
    }

    /// The response body could not be parsed.
    pub fn invalid_response_format(response_data: impl Into<Bytes>) -> Self {
        Self::new(
            ErrorKind::InvalidResponseFormat {
                response_data: response_data.into(),
            },
            "could not process the server response",
        )
    }

    /// The response is not a valid image.
    pub fn not_image_found(response_data: impl Into<Bytes>) -> Self {
        Self::new(
            ErrorKind::NotImageFound {
                response_data: response_data.into(),
            },
            "server response is not a valid image",
        )
    }

    /// A triggering request was rejected by the backend.
    pub fn triggering(
        item_path: impl Into<String>,
        action: TriggerAction,
        action_value: impl Into<String>,
    ) -> Self {
        let item_path = item_path.into();
        let action_value = action_value.into();
        let description =
            format!("trigger {action}={action_value} was not accepted for item {item_path}");
        Self::new(
            ErrorKind::Triggering {
                item_path,
                action,
                action_value,
            },
            description,
        )
    }

    /// The failure condition this error describes.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Human-readable message, for logging and display.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Optional numeric classifier.
    pub fn code(&self) -> Option<i64> {
        self.code
    }

    /// The family this error belongs to.
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Whether this is a backend error (structured API error, unparseable
    /// response, or rejected trigger).
    pub fn is_backend(&self) -> bool {
        self.category() == Category::Backend
    }

    /// The lower-level error that triggered this one, if any.
    pub fn underlying(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }

    /// Walk this error and its chain of underlying causes, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn std::error::Error + 'static)> {
        std::iter::successors(Some(self as &(dyn std::error::Error + 'static)), |err| {
            err.source()
        })
    }

    // Payload projections. Each answers `None` for kinds that do not carry
    // the field, so callers can probe without matching the whole kind.

    /// The malformed item id, for `InvalidItemId`.
    pub fn item_id(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::InvalidItemId { item_id } => Some(item_id),
            _ => None,
        }
    }

    /// The backend status code, for `Response`.
    pub fn status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Response { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// The backend error message, for `Response`.
    pub fn message(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Response { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The backend error type name, for `Response`.
    pub fn error_type(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Response { error_type, .. } => Some(error_type),
            _ => None,
        }
    }

    /// The API method that failed, for `Response`.
    pub fn method(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Response { method, .. } => Some(method),
            _ => None,
        }
    }

    /// The raw response body, for `InvalidResponseFormat` and
    /// `NotImageFound`.
    pub fn response_data(&self) -> Option<&Bytes> {
        match &self.kind {
            ErrorKind::InvalidResponseFormat { response_data }
            | ErrorKind::NotImageFound { response_data } => Some(response_data),
            _ => None,
        }
    }

    /// The triggered item's content-tree path, for `Triggering`.
    pub fn item_path(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Triggering { item_path, .. } => Some(item_path),
            _ => None,
        }
    }

    /// Which trigger was reported, for `Triggering`.
    pub fn action(&self) -> Option<TriggerAction> {
        match &self.kind {
            ErrorKind::Triggering { action, .. } => Some(*action),
            _ => None,
        }
    }

    /// Goal name or campaign id, for `Triggering`.
    pub fn action_value(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Triggering { action_value, .. } => Some(action_value),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::network().with_source(err)
    }
}
