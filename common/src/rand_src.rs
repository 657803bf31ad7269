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

use bytes::Bytes;
use rand::prelude::SmallRng;
use rand::{RngCore, SeedableRng};

/// Source of random object payloads.
pub struct RandSrc {
    size: usize,
    rng: SmallRng,
}

impl RandSrc {
    pub fn new(size: usize) -> RandSrc {
        let rng: SmallRng = SmallRng::from_os_rng();
        RandSrc { size, rng }
    }

    /// Same payload on every run for a given `seed`.
    pub fn seeded(size: usize, seed: u64) -> RandSrc {
        RandSrc {
            size,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn into_bytes(mut self) -> Bytes {
        let mut buf = vec![0; self.size];
        self.rng.fill_bytes(&mut buf);
        Bytes::from(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_payload_is_stable() {
        let a = RandSrc::seeded(32768, 7).into_bytes();
        let b = RandSrc::seeded(32768, 7).into_bytes();
        assert_eq!(a.len(), 32768);
        assert_eq!(a, b);
    }
}
