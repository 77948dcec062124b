//! Scripted transport shared by the network and session tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::net::transport::{ApiRequest, HttpResponse, Transport, TransportError};

/// Transport that replays a scripted sequence of responses and records
/// every request it saw. Panics when called more times than scripted.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    seen: Rc<RefCell<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn push_ok(&self, status: u16, body: &str) {
        self.script
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
    }

    pub fn push_network_error(&self) {
        self.script
            .borrow_mut()
            .push_back(Err(TransportError::Network("connection refused".to_owned())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.seen.borrow().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.seen.borrow().last().cloned().expect("no request was sent")
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, TransportError> {
        self.seen.borrow_mut().push(request);
        self.script
            .borrow_mut()
            .pop_front()
            .expect("transport called more times than scripted")
    }
}

/// Canned profile JSON for an active admin account.
pub fn admin_profile_json() -> &'static str {
    r#"{"id":1,"email":"admin@msdp.pk","first_name":"Site","last_name":"Admin","role":"ADMIN","is_active":true}"#
}
