use std::thread;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::PollPolicy;

/// Polls `url` until it answers with a status below 500.
///
/// Returns `true` on the first healthy answer. Sleeps only between attempts,
/// so an unhealthy target costs `attempts - 1` intervals before `false`.
pub fn wait_until_healthy(http: &Client, url: &str, policy: &PollPolicy) -> bool {
    for attempt in 1..=policy.attempts {
        match http.get(url).timeout(policy.timeout).send() {
            Ok(resp) if resp.status().as_u16() < 500 => return true,
            Ok(resp) => debug!("health check returned {}", resp.status()),
            Err(e) => debug!("health check failed: {e}"),
        }
        if attempt < policy.attempts {
            info!(
                "Waiting for Formbricks to be ready... ({attempt}/{})",
                policy.attempts
            );
            thread::sleep(policy.interval);
        }
    }
    false
}
