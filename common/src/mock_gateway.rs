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

//! In-process RADOS Gateway double.
//!
//! [`MockGateway`] plugs into [`RgwClient::with_executor`] and answers requests the
//! way a single-zone gateway would: server-side copy (including the
//! `rgwx-copy-if-newer` precondition), idempotent delete and a couple of admin
//! resources. Replies can also be scripted to inject gateway failures or
//! transport errors. Every response body it hands out is counted when released.

use crate::counting_body::ReleaseCounter;
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Duration, DurationRound, Utc};
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use minio_rgw::s3::client::{RequestExecutor, RgwClient};
use minio_rgw::s3::error::{Error, NetworkError};
use minio_rgw::s3::header_constants::{RGWX_COPY_IF_NEWER, X_AMZ_COPY_SOURCE, X_AMZ_REQUEST_ID};
use minio_rgw::s3::multimap_ext::{Multimap, MultimapExt};
use minio_rgw::s3::types::S3Request;
use minio_rgw::s3::utils::{decode_copy_source, to_iso8601utc, utc_now};
use serde_json::json;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Object held by the gateway double.
#[derive(Clone, Debug)]
pub struct StoredObject {
    pub data: Bytes,
    pub etag: String,
    pub content_type: String,
    pub last_modified: DateTime<Utc>,
    pub metadata: HashMap<String, String>,
}

/// What the double saw for one executed request.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub resource: String,
    pub region: String,
    pub query_params: Multimap,
    pub headers: Multimap,
    pub content_sha256: Option<String>,
}

/// Reply returned for the next request instead of the simulated one.
#[derive(Clone, Debug)]
pub enum ScriptedReply {
    Respond { status: StatusCode, body: Bytes },
    TransportFailure(String),
}

#[derive(Debug, Default)]
pub struct MockGateway {
    objects: Mutex<HashMap<(String, String), StoredObject>>,
    scripted: Mutex<VecDeque<ScriptedReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
    calls: AtomicUsize,
    released: ReleaseCounter,
}

impl MockGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Client that sends every request to `gateway`.
    pub fn client(gateway: &Arc<Self>) -> RgwClient {
        RgwClient::with_executor(gateway.clone())
    }

    /// Stores an object as a regular upload would; returns its ETag.
    pub fn put_object(&self, bucket: &str, object: &str, data: impl Into<Bytes>) -> String {
        self.put_object_with_type(bucket, object, data, "binary/octet-stream")
    }

    pub fn put_object_with_type(
        &self,
        bucket: &str,
        object: &str,
        data: impl Into<Bytes>,
        content_type: &str,
    ) -> String {
        let data: Bytes = data.into();
        let etag = format!("{:x}", md5::compute(&data));
        let stored = StoredObject {
            data,
            etag: etag.clone(),
            content_type: content_type.to_string(),
            last_modified: now_millis(),
            metadata: HashMap::new(),
        };
        self.lock_objects()
            .insert((bucket.to_string(), object.to_string()), stored);
        etag
    }

    pub fn stat_object(&self, bucket: &str, object: &str) -> Option<StoredObject> {
        self.lock_objects()
            .get(&(bucket.to_string(), object.to_string()))
            .cloned()
    }

    /// Queues a reply for the next request, ahead of the simulation.
    pub fn script(&self, reply: ScriptedReply) {
        self.scripted
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(reply);
    }

    /// Number of requests that reached the double.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of response bodies released so far.
    pub fn released_bodies(&self) -> usize {
        self.released.count()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests().pop()
    }

    fn lock_objects(&self) -> std::sync::MutexGuard<'_, HashMap<(String, String), StoredObject>> {
        self.objects.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn reply(&self, status: StatusCode, content_type: &str, body: impl Into<Bytes>) -> reqwest::Response {
        let request_id = format!("tx{:021x}", self.calls());
        let mut headers = HeaderMap::new();
        headers.insert(http::header::CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers.insert(X_AMZ_REQUEST_ID, HeaderValue::from_str(&request_id).unwrap());
        self.released.response(status, headers, body.into())
    }

    fn error(&self, status: StatusCode, code: &str, resource: &str) -> reqwest::Response {
        let body = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Error><Code>{code}</Code>\
             <Resource>{resource}</Resource><RequestId>tx{:021x}</RequestId></Error>",
            self.calls()
        );
        self.reply(status, "application/xml", body)
    }

    fn copy(&self, request: &S3Request, source: &str) -> reqwest::Response {
        let Some((src_bucket, src_object)) = decode_copy_source(source) else {
            return self.error(StatusCode::BAD_REQUEST, "InvalidArgument", &request.resource());
        };
        let dst = (
            request.bucket().unwrap_or_default().to_string(),
            request.object().unwrap_or_default().to_string(),
        );

        let mut objects = self.lock_objects();
        let Some(src) = objects.get(&(src_bucket.clone(), src_object.clone())).cloned() else {
            drop(objects);
            return self.error(
                StatusCode::NOT_FOUND,
                "NoSuchKey",
                &format!("/{src_bucket}/{src_object}"),
            );
        };

        let copy_if_newer = request
            .query_params()
            .get(RGWX_COPY_IF_NEWER)
            .is_some_and(|v| v == "true");
        if copy_if_newer
            && objects
                .get(&dst)
                .is_some_and(|existing| existing.last_modified >= src.last_modified)
        {
            drop(objects);
            return self.error(StatusCode::PRECONDITION_FAILED, "PreconditionFailed", &request.resource());
        }

        let metadata: HashMap<String, String> = request
            .headers()
            .iter_all()
            .filter(|(k, _)| k.to_ascii_lowercase().starts_with("x-amz-meta-"))
            .filter_map(|(k, v)| v.first().map(|v| (k.to_ascii_lowercase(), v.clone())))
            .collect();
        let copied = StoredObject {
            data: src.data.clone(),
            etag: src.etag.clone(),
            content_type: src.content_type.clone(),
            last_modified: now_millis(),
            metadata: if metadata.is_empty() { src.metadata } else { metadata },
        };
        let body = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <CopyObjectResult xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
             <LastModified>{}</LastModified><ETag>&quot;{}&quot;</ETag></CopyObjectResult>",
            to_iso8601utc(copied.last_modified),
            copied.etag
        );
        objects.insert(dst, copied);
        drop(objects);
        self.reply(StatusCode::OK, "application/xml", body)
    }

    fn delete(&self, request: &S3Request) -> reqwest::Response {
        let key = (
            request.bucket().unwrap_or_default().to_string(),
            request.object().unwrap_or_default().to_string(),
        );
        self.lock_objects().remove(&key);
        self.reply(StatusCode::NO_CONTENT, "application/xml", Bytes::new())
    }

    fn admin(&self, request: &S3Request) -> reqwest::Response {
        let query = request.query_params();
        let kind = query.get("type").map(String::as_str).unwrap_or_default();
        let doc = match (request.object().unwrap_or_default(), kind) {
            ("log", "data") | ("log", "bucket-index") => match query.get("id") {
                Some(shard) => json!({
                    "marker": query.get("marker").cloned().unwrap_or_default(),
                    "entries": [],
                    "truncated": false,
                    "shard": shard,
                }),
                None => json!({ "num_objects": 128 }),
            },
            ("log", "metadata") => match query.get("id") {
                Some(_) => json!({ "marker": "", "entries": [], "truncated": false }),
                None => json!({ "num_objects": 64 }),
            },
            ("config", "zone") => json!({
                "id": "8d1b4b64-2c3e-4a8e-9c2d-6b6a9c5d1e0f",
                "name": "default",
                "domain_root": "default.rgw.meta:root",
            }),
            _ => return self.reply(StatusCode::NOT_FOUND, "application/json", "{\"Code\":\"NoSuchKey\"}"),
        };
        self.reply(StatusCode::OK, "application/json", doc.to_string())
    }
}

#[async_trait]
impl RequestExecutor for MockGateway {
    async fn execute(&self, request: &S3Request) -> Result<reqwest::Response, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedRequest {
                method: request.method().clone(),
                resource: request.resource(),
                region: request.region().to_string(),
                query_params: request.query_params().clone(),
                headers: request.headers().clone(),
                content_sha256: request.content_sha256().map(String::from),
            });

        let scripted = self
            .scripted
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        match scripted {
            Some(ScriptedReply::Respond { status, body }) => {
                return Ok(self.reply(status, "application/xml", body));
            }
            Some(ScriptedReply::TransportFailure(msg)) => {
                return Err(NetworkError::from(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    msg,
                ))
                .into());
            }
            None => {}
        }

        let method = request.method().clone();
        let resp = if method == Method::GET && request.bucket() == Some("admin") {
            self.admin(request)
        } else if method == Method::PUT {
            match request.headers().get_ignore_case(X_AMZ_COPY_SOURCE) {
                Some(source) => self.copy(request, source),
                None => self.error(StatusCode::NOT_IMPLEMENTED, "NotImplemented", &request.resource()),
            }
        } else if method == Method::DELETE {
            self.delete(request)
        } else {
            self.error(StatusCode::METHOD_NOT_ALLOWED, "MethodNotAllowed", &request.resource())
        };
        Ok(resp)
    }
}

/// Current time truncated to the millisecond precision of the wire format.
fn now_millis() -> DateTime<Utc> {
    let now = utc_now();
    now.duration_trunc(Duration::milliseconds(1)).unwrap_or(now)
}
