/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstractions for testing code that interacts with the operating system
//!
//! Currently, only the environment is covered.

use std::collections::HashMap;
use std::env::VarError;
use std::sync::Arc;

/// Environment variable abstraction
///
/// `Env::real()` reads from the process environment. `Env::from_slice` builds a fixed environment
/// for tests so that providers can be exercised without mutating global state.
#[derive(Clone, Debug)]
pub struct Env(Inner);

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

impl Env {
    pub fn get(&self, k: &str) -> Result<String, VarError> {
        use Inner::*;
        match &self.0 {
            Real => std::env::var(k),
            Fake(map) => map.get(k).cloned().ok_or(VarError::NotPresent),
        }
    }

    /// Create a fake process environment from a slice of tuples.
    ///
    /// # Example
    /// ```rust
    /// use aws_types::os_shim_internal::Env;
    /// let mock_env = Env::from_slice(&[
    ///     ("HOME", "/home/myname"),
    ///     ("AWS_REGION", "us-west-2")
    /// ]);
    /// assert_eq!(mock_env.get("HOME").unwrap(), "/home/myname");
    /// ```
    pub fn from_slice<'a>(vars: &[(&'a str, &'a str)]) -> Self {
        let map: HashMap<_, _> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self::from(map)
    }

    /// Create a process environment that uses the real process environment
    pub fn real() -> Self {
        Self(Inner::Real)
    }
}

impl From<HashMap<String, String>> for Env {
    fn from(hash_map: HashMap<String, String>) -> Self {
        Self(Inner::Fake(Arc::new(hash_map)))
    }
}

#[derive(Clone, Debug)]
enum Inner {
    Real,
    Fake(Arc<HashMap<String, String>>),
}

#[cfg(test)]
mod test {
    use super::Env;
    use std::env::VarError;

    #[test]
    fn fake_env_returns_only_configured_vars() {
        let env = Env::from_slice(&[("AWS_REGION", "eu-west-1")]);
        assert_eq!(env.get("AWS_REGION"), Ok("eu-west-1".to_string()));
        assert_eq!(env.get("AWS_DEFAULT_REGION"), Err(VarError::NotPresent));
    }
}
