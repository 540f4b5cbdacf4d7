//! Hover stacking for glass cards.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::{document, listen, query_all};
use crate::card::Hover;
use crate::consts::CARD_SELECTOR;
use crate::error::UiError;

pub fn bind() -> Result<(), UiError> {
    let cards = query_all(&document()?, CARD_SELECTOR)?;
    let mut bound = 0;
    for card in cards {
        let card = match card.dyn_into::<HtmlElement>() {
            Ok(card) => card,
            Err(other) => {
                log::debug!("skipping non-HTML card <{}>", other.tag_name());
                continue;
            }
        };
        for hover in [Hover::Enter, Hover::Leave] {
            let target = card.clone();
            listen(&card, hover.event(), move |_event| {
                if let Err(err) = target.style().set_property("z-index", hover.z_index()) {
                    log::warn!("card z-index not set: {}", UiError::from(err));
                }
            })?;
        }
        bound += 1;
    }
    log::debug!("bound hover on {bound} cards");
    Ok(())
}
