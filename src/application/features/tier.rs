use anyhow::Result;

use crate::{
    application::operations::{
        app_resolver::AppTarget,
        session::Session,
        tier_operation::{TierOperation, require_tier},
    },
    models::heroku::TierChange,
};

pub async fn run(target: &AppTarget, tier: Option<String>, change: TierChange) -> Result<()> {
    let tier = require_tier(tier.as_deref(), change)?;
    let session = Session::open(target)?;

    let mut message_callback = Some(|msg: &str| {
        println!("{}", msg);
    });

    TierOperation::new(&session.client)
        .run(&session.app, tier, change, &mut message_callback)
        .await
}
