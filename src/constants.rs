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

// Env values used in the HCP Packer registry integration.

/// Service principal client ID used to authenticate with HCP.
pub const HCP_CLIENT_ID: &str = "HCP_CLIENT_ID";

/// Service principal client secret used to authenticate with HCP.
pub const HCP_CLIENT_SECRET: &str = "HCP_CLIENT_SECRET";

/// ID of the HCP project that owns the registry.
pub const HCP_PROJECT_ID: &str = "HCP_PROJECT_ID";

/// Name of the HCP Packer registry to target.
pub const HCP_PACKER_REGISTRY: &str = "HCP_PACKER_REGISTRY";

/// Name of the HCP Packer bucket a build is published under.
pub const HCP_PACKER_BUCKET_NAME: &str = "HCP_PACKER_BUCKET_NAME";

/// Fingerprint that ties a build back to its registry iteration.
pub const HCP_PACKER_BUILD_FINGERPRINT: &str = "HCP_PACKER_BUILD_FINGERPRINT";

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    /// (constant, expected env value)
    type TestCase = (&'static str, &'static str);

    // Every exported constant must appear here exactly once.
    fn test_cases() -> Vec<TestCase> {
        vec![
            (HCP_CLIENT_ID, "HCP_CLIENT_ID"),
            (HCP_CLIENT_SECRET, "HCP_CLIENT_SECRET"),
            (HCP_PROJECT_ID, "HCP_PROJECT_ID"),
            (HCP_PACKER_REGISTRY, "HCP_PACKER_REGISTRY"),
            (HCP_PACKER_BUCKET_NAME, "HCP_PACKER_BUCKET_NAME"),
            (HCP_PACKER_BUILD_FINGERPRINT, "HCP_PACKER_BUILD_FINGERPRINT"),
        ]
    }

    #[test]
    fn test_env_value_spelling() {
        for (actual, expected) in test_cases() {
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_env_values_distinct() {
        let cases = test_cases();
        let values: HashSet<&str> = cases.iter().map(|(v, _)| *v).collect();
        assert_eq!(values.len(), cases.len());
        assert_eq!(cases.len(), 6);
    }
}
