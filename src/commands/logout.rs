use super::App;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let app = App::open()?;
    let mut session = app.session()?;

    if !session.is_authenticated() {
        msg_info!(Message::NotLoggedIn);
        return Ok(());
    }

    match session.logout() {
        Ok(()) => msg_success!(Message::LoggedOut),
        Err(e) => msg_warning!(Message::SessionClearFailed(e.to_string())),
    }
    Ok(())
}
