use composer::try_pipe;
use log::debug;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub user: Option<String>,
    pub payload: String,
}

/// Ways a middleware can reject a request.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MiddlewareError {
    #[error("Request has no authenticated user.")]
    Unauthenticated,
    #[error("Request payload is empty.")]
    EmptyPayload,
}

fn authenticate(request: Request) -> Result<Request, MiddlewareError> {
    match request.user {
        Some(_) => Ok(request),
        None => Err(MiddlewareError::Unauthenticated),
    }
}

fn log_request(request: Request) -> Result<Request, MiddlewareError> {
    debug!(
        "Handling request from {}.",
        request.user.as_deref().unwrap_or("<anonymous>")
    );
    Ok(request)
}

fn validate(request: Request) -> Result<Request, MiddlewareError> {
    if request.payload.is_empty() {
        Err(MiddlewareError::EmptyPayload)
    } else {
        Ok(request)
    }
}

/// Runs the request through every middleware in order. The first rejection
/// aborts the chain; the stages after it never see the request.
pub fn handle(request: Request) -> Result<Request, MiddlewareError> {
    let middlewares = [
        authenticate as fn(Request) -> Result<Request, MiddlewareError>,
        log_request,
        validate,
    ];
    try_pipe(request, middlewares)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(user: Option<&str>, payload: &str) -> Request {
        Request {
            user: user.map(str::to_owned),
            payload: payload.to_owned(),
        }
    }

    #[test]
    fn authenticated_request_passes_through_unchanged() {
        let req = request(Some("user123"), "{\"key\": \"value\"}");
        assert_eq!(handle(req.clone()), Ok(req));
    }

    #[test]
    fn anonymous_request_rejected_first() {
        // Anonymous and empty: authentication runs before validation, so its
        // error is the one that surfaces.
        let req = request(None, "");
        assert_eq!(handle(req), Err(MiddlewareError::Unauthenticated));
    }

    #[test]
    fn empty_payload_rejected() {
        let req = request(Some("user123"), "");
        assert_eq!(handle(req), Err(MiddlewareError::EmptyPayload));
    }
}
