use anyhow::Result;

use crate::application::errors::CommandError;
use crate::models::heroku::{Tier, TierChange};
use crate::providers::apps_api::AppsApi;
use crate::utils::formatting::format_dollars;

macro_rules! message {
    ($cb:expr, $($arg:tt)*) => {{
        if let Some(cb) = $cb.as_mut() {
            cb(&format!($($arg)*));
        }
    }};
}

/// Rejects a missing tier argument before any network traffic.
pub fn require_tier(tier: Option<&str>, change: TierChange) -> Result<&str, CommandError> {
    tier.filter(|t| !t.is_empty())
        .ok_or_else(|| CommandError::Usage(change.usage()))
}

/// Lines printed after a successful tier change.
pub fn tier_summary(tier: &Tier, change: TierChange, process_count: usize) -> Vec<String> {
    match (tier, tier.hourly_rate()) {
        (Tier::Dev, _) => vec!["App downgraded to Dev (free)".to_string()],
        (_, Some(rate)) => vec![
            format!("App {} to {} (${} per dyno hour)", change.verb(), tier, rate),
            format!(
                "Total dyno cost: ${} per hour ({}*{})",
                format_dollars(process_count as f64 * rate),
                process_count,
                rate
            ),
        ],
        (_, None) => vec![format!("App {} to {}", change.verb(), tier)],
    }
}

pub struct TierOperation<'a, A: AppsApi> {
    api: &'a A,
}

impl<'a, A: AppsApi> TierOperation<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    pub async fn run<F>(
        &self,
        app: &str,
        tier: &str,
        change: TierChange,
        message_callback: &mut Option<F>,
    ) -> Result<()>
    where
        F: FnMut(&str),
    {
        let processes = self.api.get_ps(app).await?;
        tracing::debug!(app, tier, processes = processes.len(), "changing tier");

        self.api.put_app_tier(app, tier).await?;

        for line in tier_summary(&Tier::parse(tier), change, processes.len()) {
            message!(message_callback, "{}", line);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../tests/application/operations/tier_operation.rs"]
mod tests;
