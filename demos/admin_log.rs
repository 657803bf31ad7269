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

//! Reads the replication logs of a RADOS Gateway through `/admin/log`.
//!
//! Without `--id` the gateway reports the number of log shards; with `--id` it lists
//! the entries of one shard, starting after `--marker`.
//!
//! ```
//! cargo run --example admin_log -- --endpoint localhost:8000 --log-type data
//! cargo run --example admin_log -- --log-type data --id 17 --max-entries 100
//! ```

use clap::Parser;
use log::info;
use minio_rgw::s3::RgwClient;
use minio_rgw::s3::multimap_ext::{Multimap, MultimapExt};
use minio_rgw::s3::types::S3Api;

/// Query the replication logs of a RADOS Gateway.
#[derive(Parser)]
struct Cli {
    /// Gateway endpoint as host[:port]
    #[arg(long, default_value = "localhost:8000")]
    endpoint: String,
    /// Access key of a user with admin capabilities
    #[arg(long, default_value = "rgwadmin")]
    access_key: String,
    /// Secret key of that user
    #[arg(long, default_value = "rgwadmin")]
    secret_key: String,
    /// Use HTTPS
    #[arg(long)]
    secure: bool,
    /// Log kind: data, metadata or bucket-index
    #[arg(long, default_value = "data")]
    log_type: String,
    /// Shard to list; shard info is printed when omitted
    #[arg(long)]
    id: Option<u32>,
    /// Resume listing after this marker
    #[arg(long)]
    marker: Option<String>,
    /// Upper bound on returned entries
    #[arg(long)]
    max_entries: Option<u32>,
    /// Bucket instance, required for bucket-index logs
    #[arg(long)]
    bucket_instance: Option<String>,
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

    let mut query = Multimap::new();
    query.add("type", args.log_type.as_str());
    if let Some(id) = args.id {
        query.add("id", id.to_string());
        query.add("extra-info", "true");
    }
    if let Some(marker) = args.marker {
        query.add("marker", marker);
    }
    if let Some(n) = args.max_entries {
        query.add("max-entries", n.to_string());
    }
    if let Some(instance) = args.bucket_instance {
        query.add("bucket-instance", instance);
    }

    let resp = client
        .admin_query("admin", "log")
        .query_params(query)
        .build()
        .send()
        .await?;

    let status = resp.status();
    info!("GET /admin/log?type={} -> {status}", args.log_type);
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(format!("gateway answered {status}: {body}").into());
    }
    println!("{body}");

    Ok(())
}
