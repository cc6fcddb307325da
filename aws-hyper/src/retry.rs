/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Retry support for aws-hyper
//!
//! Retries are driven by two pieces of state:
//! - a cross-request retry quota shared by every request sent from the same [`Client`](crate::Client)
//! - the number of attempts made for the request currently in flight
//!
//! Whether an individual attempt is retryable at all is decided by the operation's
//! [`ClassifyResponse`](smithy_http::retry::ClassifyResponse) implementation.

use smithy_http::operation::Operation;
use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind, RetryKind};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::Instrument;

/// Retry configuration for a [`Client`](crate::Client)
///
/// The default configuration makes up to 3 attempts per request with exponential backoff
/// (`base * 2^attempt`, capped at 20 seconds) drawing from a quota of 500 retry tokens.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    initial_retry_tokens: usize,
    retry_cost: usize,
    no_retry_increment: usize,
    timeout_retry_cost: usize,
    max_attempts: u32,
    max_backoff: Duration,
    base: fn() -> f64,
}

impl RetryConfig {
    pub fn new() -> Self {
        Default::default()
    }

    /// A configuration that sends every request exactly once
    pub fn disabled() -> Self {
        Self::default().with_max_attempts(1)
    }

    /// Maximum number of attempts per request, including the initial attempt
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Upper bound for the delay between two attempts
    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff = max_backoff;
        self
    }

    /// For deterministic tests, enable using a static base instead of random base for exponential backoff
    pub fn with_static_base(mut self, base: fn() -> f64) -> Self {
        self.base = base;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_retry_tokens: INITIAL_RETRY_TOKENS,
            retry_cost: RETRY_COST,
            no_retry_increment: 1,
            timeout_retry_cost: 10,
            max_attempts: MAX_ATTEMPTS,
            max_backoff: Duration::from_secs(20),
            // by default, use a random base for exponential backoff
            base: fastrand::f64,
        }
    }
}

const MAX_ATTEMPTS: u32 = 3;
const INITIAL_RETRY_TOKENS: usize = 500;
const RETRY_COST: usize = 5;

/// StandardRetryStrategy
///
/// `ctx` captures cross-request retry state, whereas `attempts` captures retry state local to this
/// request
#[derive(Clone)]
pub(crate) struct StandardRetryStrategy {
    attempts: u32,
    ctx: Arc<Mutex<RetryCtx>>,
}

impl StandardRetryStrategy {
    pub(crate) fn new(config: RetryConfig) -> Self {
        Self {
            attempts: 0,
            ctx: Arc::new(Mutex::new(RetryCtx::new(config))),
        }
    }

    /// A fresh policy for a new request that shares this strategy's retry quota
    pub(crate) fn new_request_policy(&self) -> Self {
        Self {
            attempts: 0,
            ctx: self.ctx.clone(),
        }
    }

    fn ctx(&self) -> MutexGuard<'_, RetryCtx> {
        self.ctx.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a successful attempt, refunding the cost of the last retry to the quota
    fn record_success(&self) {
        self.ctx().retry_quota_release();
    }

    /// Decide whether a failed attempt should be retried
    ///
    /// Returns the policy for the next attempt along with the delay to wait before making it.
    fn should_retry(&self, retry_kind: RetryKind) -> Option<(Self, Duration)> {
        let (error_kind, explicit_delay) = match retry_kind {
            RetryKind::NotRetryable => return None,
            RetryKind::Error(kind) => (kind, None),
            RetryKind::Explicit(delay) => (ErrorKind::ThrottlingError, Some(delay)),
        };
        let mut ctx = self.ctx();
        if self.attempts + 1 >= ctx.config.max_attempts {
            tracing::debug!(attempts = self.attempts + 1, "not retrying: no attempts left");
            return None;
        }
        if !ctx.acquire_retry_quota(error_kind) {
            tracing::debug!(quota = ctx.retry_quota, "not retrying: retry quota exhausted");
            return None;
        }
        let backoff = explicit_delay
            .unwrap_or_else(|| {
                let base = (ctx.config.base)();
                Duration::from_secs_f64(base * 2_f64.powi(self.attempts as i32))
            })
            .min(ctx.config.max_backoff);
        let mut next = self.clone();
        next.attempts += 1;
        Some((next, backoff))
    }
}

struct RetryCtx {
    retry_quota: usize,
    last_retry: Option<usize>,
    config: RetryConfig,
}

impl RetryCtx {
    fn new(config: RetryConfig) -> Self {
        RetryCtx {
            retry_quota: config.initial_retry_tokens,
            last_retry: None,
            config,
        }
    }

    fn retry_quota_release(&mut self) {
        let refund = self
            .last_retry
            .take()
            .unwrap_or(self.config.no_retry_increment);
        self.retry_quota = (self.retry_quota + refund).min(self.config.initial_retry_tokens);
    }

    fn acquire_retry_quota(&mut self, err: ErrorKind) -> bool {
        let retry_cost = if err == ErrorKind::TransientError {
            self.config.timeout_retry_cost
        } else {
            self.config.retry_cost
        };
        if retry_cost > self.retry_quota {
            false
        } else {
            self.last_retry = Some(retry_cost);
            self.retry_quota -= retry_cost;
            true
        }
    }
}

impl<Handler, R, T, E> tower::retry::Policy<Operation<Handler, R>, SdkSuccess<T>, SdkError<E>>
    for StandardRetryStrategy
where
    Handler: Clone,
    R: ClassifyResponse<SdkSuccess<T>, SdkError<E>>,
{
    type Future = Pin<Box<dyn Future<Output = Self> + Send>>;

    fn retry(
        &self,
        req: &Operation<Handler, R>,
        result: Result<&SdkSuccess<T>, &SdkError<E>>,
    ) -> Option<Self::Future> {
        if result.is_ok() {
            self.record_success();
            return None;
        }
        let retry_kind = req.retry_policy().classify(result);
        let (next, delay) = self.should_retry(retry_kind)?;
        let span = tracing::debug_span!("retry", attempt = next.attempts + 1, kind = ?retry_kind);
        let fut = async move {
            tracing::debug!(delay = ?delay, "waiting before retrying");
            tokio::time::sleep(delay).await;
            next
        };
        Some(Box::pin(fut.instrument(span)))
    }

    fn clone_request(&self, req: &Operation<Handler, R>) -> Option<Operation<Handler, R>> {
        req.try_clone()
    }
}

#[cfg(test)]
mod test {
    use crate::retry::{RetryConfig, StandardRetryStrategy};
    use smithy_types::retry::{ErrorKind, RetryKind};
    use std::time::Duration;

    const SERVER_ERROR: RetryKind = RetryKind::Error(ErrorKind::ServerError);

    fn test_config() -> RetryConfig {
        RetryConfig::default().with_static_base(|| 1_f64)
    }

    #[test]
    fn eventual_success() {
        let strategy = StandardRetryStrategy::new(test_config());
        let (strategy, dur) = strategy.should_retry(SERVER_ERROR).expect("should retry");
        assert_eq!(dur, Duration::from_secs(1));
        assert_eq!(strategy.ctx().retry_quota, 495);

        let (strategy, dur) = strategy.should_retry(SERVER_ERROR).expect("should retry");
        assert_eq!(dur, Duration::from_secs(2));
        assert_eq!(strategy.ctx().retry_quota, 490);

        strategy.record_success();
        assert_eq!(strategy.ctx().retry_quota, 495);
    }

    #[test]
    fn no_more_attempts() {
        let strategy = StandardRetryStrategy::new(test_config());
        let (strategy, dur) = strategy.should_retry(SERVER_ERROR).expect("should retry");
        assert_eq!(dur, Duration::from_secs(1));
        assert_eq!(strategy.ctx().retry_quota, 495);

        let (strategy, dur) = strategy.should_retry(SERVER_ERROR).expect("should retry");
        assert_eq!(dur, Duration::from_secs(2));
        assert_eq!(strategy.ctx().retry_quota, 490);

        let no_retry = strategy.should_retry(SERVER_ERROR);
        assert!(no_retry.is_none());
        assert_eq!(strategy.ctx().retry_quota, 490);
    }

    #[test]
    fn no_quota() {
        let mut conf = test_config();
        conf.initial_retry_tokens = 5;
        let strategy = StandardRetryStrategy::new(conf);
        let (strategy, dur) = strategy.should_retry(SERVER_ERROR).expect("should retry");
        assert_eq!(dur, Duration::from_secs(1));
        assert_eq!(strategy.ctx().retry_quota, 0);
        let no_retry = strategy.should_retry(SERVER_ERROR);
        assert!(no_retry.is_none());
        assert_eq!(strategy.ctx().retry_quota, 0);
    }

    #[test]
    fn transient_errors_cost_more() {
        let strategy = StandardRetryStrategy::new(test_config());
        let (strategy, _) = strategy
            .should_retry(RetryKind::Error(ErrorKind::TransientError))
            .expect("should retry");
        assert_eq!(strategy.ctx().retry_quota, 490);
        strategy.record_success();
        assert_eq!(strategy.ctx().retry_quota, 500);
        // the refund is only paid out once
        strategy.record_success();
        assert_eq!(strategy.ctx().retry_quota, 500);
    }

    #[test]
    fn backoff_timing() {
        let strategy = StandardRetryStrategy::new(test_config().with_max_attempts(5));
        let (strategy, dur) = strategy.should_retry(SERVER_ERROR).expect("should retry");
        assert_eq!(dur, Duration::from_secs(1));
        assert_eq!(strategy.ctx().retry_quota, 495);

        let (strategy, dur) = strategy.should_retry(SERVER_ERROR).expect("should retry");
        assert_eq!(dur, Duration::from_secs(2));
        assert_eq!(strategy.ctx().retry_quota, 490);

        let (strategy, dur) = strategy.should_retry(SERVER_ERROR).expect("should retry");
        assert_eq!(dur, Duration::from_secs(4));
        assert_eq!(strategy.ctx().retry_quota, 485);

        let (strategy, dur) = strategy.should_retry(SERVER_ERROR).expect("should retry");
        assert_eq!(dur, Duration::from_secs(8));
        assert_eq!(strategy.ctx().retry_quota, 480);

        let no_retry = strategy.should_retry(SERVER_ERROR);
        assert!(no_retry.is_none());
        assert_eq!(strategy.ctx().retry_quota, 480);
    }

    #[test]
    fn max_backoff_time() {
        let strategy = StandardRetryStrategy::new(
            test_config()
                .with_max_attempts(5)
                .with_max_backoff(Duration::from_secs(3)),
        );
        let (strategy, dur) = strategy.should_retry(SERVER_ERROR).expect("should retry");
        assert_eq!(dur, Duration::from_secs(1));
        assert_eq!(strategy.ctx().retry_quota, 495);

        let (strategy, dur) = strategy.should_retry(SERVER_ERROR).expect("should retry");
        assert_eq!(dur, Duration::from_secs(2));
        assert_eq!(strategy.ctx().retry_quota, 490);

        let (strategy, dur) = strategy.should_retry(SERVER_ERROR).expect("should retry");
        assert_eq!(dur, Duration::from_secs(3));
        assert_eq!(strategy.ctx().retry_quota, 485);

        let (strategy, dur) = strategy.should_retry(SERVER_ERROR).expect("should retry");
        assert_eq!(dur, Duration::from_secs(3));
        assert_eq!(strategy.ctx().retry_quota, 480);

        let no_retry = strategy.should_retry(SERVER_ERROR);
        assert!(no_retry.is_none());
        assert_eq!(strategy.ctx().retry_quota, 480);
    }

    #[test]
    fn explicit_delays_are_honored_and_capped() {
        let strategy = StandardRetryStrategy::new(test_config());
        let (strategy, dur) = strategy
            .should_retry(RetryKind::Explicit(Duration::from_millis(300)))
            .expect("should retry");
        assert_eq!(dur, Duration::from_millis(300));
        assert_eq!(strategy.ctx().retry_quota, 495);
        let (_, dur) = strategy
            .should_retry(RetryKind::Explicit(Duration::from_secs(60)))
            .expect("should retry");
        assert_eq!(dur, Duration::from_secs(20));
    }

    #[test]
    fn disabled_never_retries() {
        let strategy = StandardRetryStrategy::new(RetryConfig::disabled());
        assert!(strategy.should_retry(SERVER_ERROR).is_none());
        assert!(strategy
            .should_retry(RetryKind::Error(ErrorKind::ThrottlingError))
            .is_none());
        assert_eq!(strategy.ctx().retry_quota, 500);
    }

    #[test]
    fn requests_share_the_quota() {
        let strategy = StandardRetryStrategy::new(test_config());
        let first = strategy.new_request_policy();
        let second = strategy.new_request_policy();
        first.should_retry(SERVER_ERROR).expect("should retry");
        second.should_retry(SERVER_ERROR).expect("should retry");
        assert_eq!(strategy.ctx().retry_quota, 490);
    }

    #[test]
    fn not_retryable() {
        let strategy = StandardRetryStrategy::new(test_config());
        assert!(strategy.should_retry(RetryKind::NotRetryable).is_none());
        assert_eq!(strategy.ctx().retry_quota, 500);
    }
}
