// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Response bodies that report when they are released.

use bytes::Bytes;
use futures_util::Stream;
use http::{HeaderMap, StatusCode};
use std::collections::VecDeque;
use std::io;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::task::{Context, Poll};

/// Counts released response bodies; cloning shares the count.
#[derive(Clone, Debug, Default)]
pub struct ReleaseCounter(Arc<AtomicUsize>);

impl ReleaseCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Body streaming `data` in chunks of at most 8 KiB.
    pub fn body(&self, data: Bytes) -> CountingBody {
        let mut chunks = VecDeque::new();
        let mut rest = data;
        while !rest.is_empty() {
            let n = rest.len().min(8 * 1024);
            chunks.push_back(rest.split_to(n));
        }
        CountingBody {
            chunks,
            released: self.0.clone(),
        }
    }

    /// Builds a response whose body bumps this counter once it is dropped.
    pub fn response(&self, status: StatusCode, headers: HeaderMap, data: Bytes) -> reqwest::Response {
        let mut resp = http::Response::new(reqwest::Body::wrap_stream(self.body(data)));
        *resp.status_mut() = status;
        *resp.headers_mut() = headers;
        reqwest::Response::from(resp)
    }
}

pub struct CountingBody {
    chunks: VecDeque<Bytes>,
    released: Arc<AtomicUsize>,
}

impl Stream for CountingBody {
    type Item = Result<Bytes, io::Error>;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.get_mut().chunks.pop_front().map(Ok))
    }
}

impl Drop for CountingBody {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_body_is_released_once() {
        let counter = ReleaseCounter::default();
        let resp = counter.response(StatusCode::OK, HeaderMap::new(), Bytes::from(vec![7u8; 20000]));
        assert_eq!(counter.count(), 0);
        let body = resp.bytes().await.unwrap();
        assert_eq!(body.len(), 20000);
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_dropped_body_is_released_once() {
        let counter = ReleaseCounter::default();
        drop(counter.response(StatusCode::NO_CONTENT, HeaderMap::new(), Bytes::new()));
        assert_eq!(counter.count(), 1);
    }
}
