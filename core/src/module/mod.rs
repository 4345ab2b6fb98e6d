//! Module controllers binding reducer state to the HTTP client.
//!
//! # Design
//! A controller owns its state, an `ApiClient`, and a transport. Every
//! mutation dispatches actions through the pure reducer; network-touching
//! operations return `Result` and log failures, leaving state untouched on
//! error. A presentation layer binds to the controller surface and reads
//! state through `state()`.

mod todo;
mod users;

pub use todo::TodoModule;
pub use users::UserModule;

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use crate::error::ApiError;
    use crate::http::{HttpRequest, HttpResponse, HttpTransport};

    /// Replays a fixed queue of responses and records every request sent.
    pub struct ScriptedTransport {
        responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
        requests: Rc<RefCell<Vec<HttpRequest>>>,
    }

    impl ScriptedTransport {
        pub fn new(responses: Vec<Result<HttpResponse, ApiError>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                requests: Rc::new(RefCell::new(Vec::new())),
            }
        }

        pub fn ok(status: u16, body: &str) -> Result<HttpResponse, ApiError> {
            Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            })
        }

        /// Shared handle to the request log, cloned before the transport
        /// moves into a module.
        pub fn request_log(&self) -> Rc<RefCell<Vec<HttpRequest>>> {
            Rc::clone(&self.requests)
        }
    }

    impl HttpTransport for ScriptedTransport {
        fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.borrow_mut().push(request.clone());
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("scripted transport ran out of responses")
        }
    }
}
