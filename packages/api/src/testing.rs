//! Recording transport shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Replays queued responses and records every request it receives.
/// Answers `200 {}` once the queue is empty.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    requests: Rc<RefCell<Vec<ApiRequest>>>,
    responses: Rc<RefCell<VecDeque<Result<ApiResponse, ApiError>>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn last(&self) -> Option<ApiRequest> {
        self.requests.borrow().last().cloned()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses.borrow_mut().pop_front().unwrap_or(Ok(ApiResponse {
            status: 200,
            body: "{}".to_string(),
        }))
    }
}
