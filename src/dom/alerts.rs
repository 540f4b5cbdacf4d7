//! Auto-dismissal of alert banners rendered by the server.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::toast::schedule_dismissal;
use super::{document, query_all};
use crate::consts::ALERT_SELECTOR;
use crate::dismiss::ALERT;
use crate::error::UiError;

/// Schedule every alert present now; toasts created later are not included.
pub fn bind() -> Result<(), UiError> {
    let alerts = query_all(&document()?, ALERT_SELECTOR)?;
    let mut scheduled = 0;
    for alert in alerts {
        let alert = match alert.dyn_into::<HtmlElement>() {
            Ok(alert) => alert,
            Err(other) => {
                log::debug!("skipping non-HTML alert <{}>", other.tag_name());
                continue;
            }
        };
        schedule_dismissal(alert, ALERT);
        scheduled += 1;
    }
    log::debug!("scheduled dismissal of {scheduled} alerts");
    Ok(())
}
