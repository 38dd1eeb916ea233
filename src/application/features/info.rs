use anyhow::Result;

use crate::application::operations::{
    app_resolver::AppTarget, info_operation::InfoOperation, session::Session,
};

pub async fn run(target: &AppTarget, shell: bool) -> Result<()> {
    let session = Session::open(target)?;

    let mut message_callback = Some(|msg: &str| {
        println!("{}", msg);
    });

    InfoOperation::new(&session.client)
        .run(&session.app, shell, &mut message_callback)
        .await
}
