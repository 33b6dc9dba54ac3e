//! Scriptable transport for tests.

use std::{cell::RefCell, collections::VecDeque};

use async_trait::async_trait;
use futures::channel::oneshot;
use serde::Serialize;

use crate::{Error, Method, Request, Response, Result, Transport};

enum Reply {
    Ready(Response),
    Failed(String),
    Pending(oneshot::Receiver<Response>),
}

/// Records all requests and answers them in the scripted order.
#[derive(Default)]
pub struct MockTransport {
    requests: RefCell<Vec<Request>>,
    replies: RefCell<VecDeque<Reply>>,
}

impl MockTransport {
    pub fn respond(&self, status: u16, body: &str) {
        self.push(Reply::Ready(Response::new(status, body)));
    }

    pub fn respond_json<T>(&self, status: u16, body: &T)
    where
        T: Serialize,
    {
        let body = serde_json::to_string(body).expect("JSON body");
        self.push(Reply::Ready(Response::new(status, body)));
    }

    pub fn fail(&self, message: &str) {
        self.push(Reply::Failed(message.to_owned()));
    }

    /// The next request stays pending until a response is sent.
    pub fn respond_later(&self) -> oneshot::Sender<Response> {
        let (tx, rx) = oneshot::channel();
        self.push(Reply::Pending(rx));
        tx
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    fn push(&self, reply: Reply) {
        self.replies.borrow_mut().push_back(reply);
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: Request) -> Result<Response> {
        let description = format!("{} {}", request.method, request.path);
        self.requests.borrow_mut().push(request);
        let reply = self.replies.borrow_mut().pop_front();
        match reply {
            Some(Reply::Ready(response)) => Ok(response),
            Some(Reply::Failed(message)) => Err(Error::Fetch(message)),
            Some(Reply::Pending(rx)) => rx
                .await
                .map_err(|_| Error::Fetch(format!("{description}: canceled"))),
            None => Err(Error::Fetch(format!("{description}: no response"))),
        }
    }
}
