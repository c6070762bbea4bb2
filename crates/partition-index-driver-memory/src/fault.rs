use partition_index_core::Error;

/// A failure to inject into the next executions of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    /// Catalog API name of the targeted operation, e.g. `GetPartitionIndexes`
    pub(crate) operation: &'static str,
    pub(crate) kind: FaultKind,
    pub(crate) remaining: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// Retryable: the service is shedding load
    Throttling,

    /// Retryable: the service failed internally
    InternalFailure,

    /// Retryable: the operation takes effect but its response never arrives
    ResponseLost,

    /// Fatal: the caller is not authorized
    AccessDenied,
}

impl Fault {
    /// Fails the next `times` executions of `operation`.
    pub fn new(operation: &'static str, kind: FaultKind, times: u32) -> Self {
        Self {
            operation,
            kind,
            remaining: times,
        }
    }

    pub(crate) fn to_error(&self) -> Error {
        let injected = InjectedFault {
            operation: self.operation,
            kind: self.kind,
        };

        match self.kind {
            FaultKind::Throttling | FaultKind::InternalFailure => Error::transient(injected),
            FaultKind::ResponseLost => Error::outcome_unknown(injected),
            FaultKind::AccessDenied => Error::fatal(injected),
        }
    }
}

impl FaultKind {
    /// Whether the operation still runs before the fault is reported.
    pub(crate) fn takes_effect(self) -> bool {
        matches!(self, FaultKind::ResponseLost)
    }

    fn code(self) -> &'static str {
        match self {
            FaultKind::Throttling => "ThrottlingException",
            FaultKind::InternalFailure => "InternalServiceException",
            FaultKind::ResponseLost => "RequestTimeout",
            FaultKind::AccessDenied => "AccessDeniedException",
        }
    }
}

#[derive(Debug)]
struct InjectedFault {
    operation: &'static str,
    kind: FaultKind,
}

impl std::error::Error for InjectedFault {}

impl core::fmt::Display for InjectedFault {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{}: injected into {}",
            self.kind.code(),
            self.operation
        )
    }
}

/// Service-side rejection raised by the catalog itself, mirroring Glue's
/// `InvalidInputException`.
#[derive(Debug)]
pub(crate) struct InvalidInput(pub(crate) String);

impl std::error::Error for InvalidInput {}

impl core::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "InvalidInputException: {}", self.0)
    }
}
