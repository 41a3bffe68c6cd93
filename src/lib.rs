// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Environment variable names for the HCP Packer registry.
//!
//! The HCP Packer registry integration reads its credentials and registry
//! coordinates from the process environment. This crate exposes the variable
//! names as constants so that configuration loaders never hardcode the
//! literal strings.
//!
//! Operators set `HCP_CLIENT_ID` and `HCP_CLIENT_SECRET` to authenticate
//! against HCP; the remaining variables select the project, registry, bucket
//! and build fingerprint a run operates on. Reading the actual values and
//! handling a missing variable is the consuming loader's job, not this
//! crate's.
//!
//! ## Example
//!
//! ```
//! use hcp_packer_env::HCP_CLIENT_ID;
//!
//! let client_id = std::env::var(HCP_CLIENT_ID).ok();
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;
pub use constants::HCP_CLIENT_ID;
pub use constants::HCP_CLIENT_SECRET;
pub use constants::HCP_PACKER_BUCKET_NAME;
pub use constants::HCP_PACKER_BUILD_FINGERPRINT;
pub use constants::HCP_PACKER_REGISTRY;
pub use constants::HCP_PROJECT_ID;
