//! Contact input switcher
//!
//! The contact form has one shared "social" input and a group of buttons,
//! each naming an input type and placeholder. Selecting a button makes it the
//! only active one and retargets the shared input.

use lol_html::{element, rewrite_str, RewriteStrSettings};
use serde::Serialize;
use serde_json::Value;

use crate::binder::sections::contact::ACTIVE_BUTTON_CLASS;
use crate::content::{field, items};
use crate::error::{BindError, ContactError};

const SOCIAL_INPUT_SELECTOR: &str = ".contact__input--social";
const BUTTON_SELECTOR: &str = ".contact__btns .btn";

/// One input-type button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactButton {
    pub text: String,
    pub input_type: String,
    pub placeholder: String,
}

/// Which button is active and what the shared input currently looks like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSwitcher {
    buttons: Vec<ContactButton>,
    active: usize,
}

impl ContactSwitcher {
    pub fn new(buttons: Vec<ContactButton>) -> Self {
        Self { buttons, active: 0 }
    }

    /// Build from the `contact` section; the first button starts active.
    pub fn from_content(contact: &Value) -> Self {
        let buttons = contact
            .get("buttons")
            .map(items)
            .unwrap_or_default()
            .iter()
            .map(|b| ContactButton {
                text: field(b, "text"),
                input_type: field(b, "type"),
                placeholder: field(b, "placeholder"),
            })
            .collect();
        Self::new(buttons)
    }

    pub fn buttons(&self) -> &[ContactButton] {
        &self.buttons
    }

    pub fn active_index(&self) -> Option<usize> {
        (!self.buttons.is_empty()).then_some(self.active)
    }

    pub fn active(&self) -> Option<&ContactButton> {
        self.buttons.get(self.active)
    }

    /// Click button `index`. Returns the input type and placeholder now in effect.
    pub fn select(&mut self, index: usize) -> Result<(&str, &str), ContactError> {
        let button = self.buttons.get(index).ok_or(ContactError::OutOfRange {
            index,
            len: self.buttons.len(),
        })?;
        self.active = index;
        Ok((&button.input_type, &button.placeholder))
    }

    /// Reflect the current state onto a bound page.
    pub fn apply(&self, html: &str) -> Result<String, BindError> {
        let Some(active) = self.active() else {
            return Ok(html.to_string());
        };
        let mut index = 0usize;

        let output = rewrite_str(
            html,
            RewriteStrSettings {
                element_content_handlers: vec![
                    element!(SOCIAL_INPUT_SELECTOR, |el| {
                        el.set_attribute("type", &active.input_type)?;
                        el.set_attribute("placeholder", &active.placeholder)?;
                        Ok(())
                    }),
                    element!(BUTTON_SELECTOR, |el| {
                        let current = el.get_attribute("class").unwrap_or_default();
                        let mut classes: Vec<&str> = current
                            .split_whitespace()
                            .filter(|c| *c != ACTIVE_BUTTON_CLASS)
                            .collect();
                        if index == self.active {
                            classes.push(ACTIVE_BUTTON_CLASS);
                        }
                        el.set_attribute("class", &classes.join(" "))?;
                        index += 1;
                        Ok(())
                    }),
                ],
                ..RewriteStrSettings::new()
            },
        )?;

        Ok(output)
    }
}
