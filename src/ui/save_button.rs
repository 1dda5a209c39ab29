/// Save button label state and its timed reset

use std::rc::Rc;

use yew::platform::time::sleep;
use yew::prelude::*;

use crate::config::{ALREADY_SAVED_LABEL, SAVE_LABEL, SAVED_LABEL, SAVED_LABEL_RESET};
use crate::controller::SaveOutcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveLabel {
    #[default]
    Idle,
    Saved,
    AlreadySaved,
}

impl SaveLabel {
    pub fn text(self) -> &'static str {
        match self {
            SaveLabel::Idle => SAVE_LABEL,
            SaveLabel::Saved => SAVED_LABEL,
            SaveLabel::AlreadySaved => ALREADY_SAVED_LABEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveButtonAction {
    /// Popup opened; `already_saved` when the foreground tab is in the collection
    Opened { already_saved: bool },
    /// A save finished; `ticket` identifies this press for its reset
    Pressed { outcome: SaveOutcome, ticket: u32 },
    /// The reset delay for `ticket` ran out
    Reset(u32),
}

/// Current label plus the ticket of the press that set it
///
/// A reset only applies while its ticket is still the latest one, so an
/// earlier press can never cut a later press's label short.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveButton {
    pub label: SaveLabel,
    ticket: Option<u32>,
}

impl SaveButton {
    pub fn is_idle(&self) -> bool {
        self.label == SaveLabel::Idle
    }

    pub fn apply(self, action: SaveButtonAction) -> SaveButton {
        match action {
            SaveButtonAction::Opened { already_saved: true } if self.is_idle() => SaveButton {
                label: SaveLabel::AlreadySaved,
                ticket: None,
            },
            SaveButtonAction::Opened { .. } => self,
            SaveButtonAction::Pressed { outcome, ticket } => match outcome {
                SaveOutcome::Saved => SaveButton {
                    label: SaveLabel::Saved,
                    ticket: Some(ticket),
                },
                SaveOutcome::AlreadySaved => SaveButton {
                    label: SaveLabel::AlreadySaved,
                    ticket: Some(ticket),
                },
                SaveOutcome::NoTab => self,
            },
            SaveButtonAction::Reset(ticket) if self.ticket == Some(ticket) => SaveButton::default(),
            SaveButtonAction::Reset(_) => self,
        }
    }
}

impl Reducible for SaveButton {
    type Action = SaveButtonAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Wait out the label delay, then hand back the reset for `ticket`
pub async fn reset_after_delay<F>(ticket: u32, dispatch: F)
where
    F: FnOnce(SaveButtonAction),
{
    sleep(SAVED_LABEL_RESET).await;
    dispatch(SaveButtonAction::Reset(ticket));
}
