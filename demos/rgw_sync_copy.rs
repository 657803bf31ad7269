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

//! Replays one object sync step the way a multisite agent does: a server-side copy
//! guarded by `rgwx-copy-if-newer`, optionally followed by removing the source.
//!
//! ```
//! cargo run --example rgw_sync_copy -- b1 o1 b2 o1 --source-zone zone-a
//! ```

use clap::Parser;
use log::{info, warn};
use minio_rgw::s3::RgwClient;
use minio_rgw::s3::error::{Error, S3ServerError};
use minio_rgw::s3::header_constants::*;
use minio_rgw::s3::types::S3Api;
use std::collections::HashMap;

/// Copy an object on a RADOS Gateway unless the destination is already current.
#[derive(Parser)]
struct Cli {
    src_bucket: String,
    src_object: String,
    dst_bucket: String,
    dst_object: String,
    /// Gateway endpoint as host[:port]
    #[arg(long, default_value = "localhost:8000")]
    endpoint: String,
    #[arg(long, default_value = "rgwadmin")]
    access_key: String,
    #[arg(long, default_value = "rgwadmin")]
    secret_key: String,
    #[arg(long)]
    secure: bool,
    /// Zone the object is replicated from
    #[arg(long)]
    source_zone: Option<String>,
    /// Delete the source after a successful copy
    #[arg(long)]
    delete_source: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();
    let args = Cli::parse();

    let client = RgwClient::new_path_style(
        &args.endpoint,
        &args.access_key,
        &args.secret_key,
        args.secure,
    )?;

    let mut params = HashMap::from([
        (RGWX_COPY_IF_NEWER.to_string(), "true".to_string()),
        (RGWX_CLIENT_ID.to_string(), "rgw-sync-copy".to_string()),
    ]);
    if let Some(zone) = &args.source_zone {
        params.insert(RGWX_SOURCE_ZONE.to_string(), zone.clone());
    }
    let metadata = HashMap::from([(
        "x-amz-meta-rgw-sync-origin".to_string(),
        args.source_zone.clone().unwrap_or_else(|| "local".to_string()),
    )]);

    let copied = client
        .copy_object_with_params(
            &args.src_bucket,
            &args.src_object,
            &args.dst_bucket,
            &args.dst_object,
        )
        .metadata(metadata)
        .extra_query_params(params.clone())
        .build()
        .send()
        .await;

    match copied {
        Ok(resp) => info!(
            "copied {}/{} -> {}/{} (etag {}, last modified {})",
            args.src_bucket,
            args.src_object,
            args.dst_bucket,
            args.dst_object,
            resp.etag(),
            resp.last_modified()
        ),
        Err(Error::S3Server(S3ServerError::RemoteCopy {
            http_status_code: 412,
            ..
        })) => {
            warn!("{}/{} is already current", args.dst_bucket, args.dst_object);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    if args.delete_source {
        params.remove(RGWX_COPY_IF_NEWER);
        client
            .delete_object_with_params(&args.src_bucket, &args.src_object)
            .extra_query_params(params)
            .build()
            .send()
            .await?;
        info!("removed {}/{}", args.src_bucket, args.src_object);
    }

    Ok(())
}
