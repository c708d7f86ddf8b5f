use eframe::egui::{Button, Context, Id, Modal, RichText};

use crate::{
    domain::Symbol,
    ui::{UI_CONFIG, UI_TEXT},
};

/// State of the "maximum coins" dialog: the coin the user tried to add and
/// which selected coin they picked to drop.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceDialog {
    pub candidate: Symbol,
    pub choice: Option<Symbol>,
}

impl ReplaceDialog {
    pub fn new(candidate: Symbol) -> Self {
        Self {
            candidate,
            choice: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogAction {
    Confirm { remove: Symbol, add: Symbol },
    Cancel,
}

pub fn render_replace_dialog(
    ctx: &Context,
    dialog: &mut ReplaceDialog,
    selected: &[Symbol],
) -> Option<DialogAction> {
    let mut action = None;
    let response = Modal::new(Id::new("max_coins_modal")).show(ctx, |ui| {
        ui.heading(RichText::new(UI_TEXT.max_coins_title).color(UI_CONFIG.colors.heading));
        ui.add_space(6.0);
        ui.label(format!("{} {}:", UI_TEXT.max_coins_body, dialog.candidate));
        ui.add_space(6.0);

        for symbol in selected {
            ui.radio_value(&mut dialog.choice, Some(symbol.clone()), symbol.as_str());
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let confirm = ui.add_enabled(
                dialog.choice.is_some(),
                Button::new(UI_TEXT.max_coins_confirm),
            );
            if confirm.clicked() {
                if let Some(remove) = dialog.choice.clone() {
                    action = Some(DialogAction::Confirm {
                        remove,
                        add: dialog.candidate.clone(),
                    });
                }
            }
            if ui.button(UI_TEXT.max_coins_cancel).clicked() {
                action = Some(DialogAction::Cancel);
            }
        });
    });

    // Escape or a click on the backdrop.
    if action.is_none() && response.should_close() {
        action = Some(DialogAction::Cancel);
    }
    action
}
