// Keybindings for the dual carousel window
//
// Keybindings:
// - Left / h: Previous item
// - Right / l: Next item
// - Up / k: Scroll thumbnail strip up
// - Down / j: Scroll thumbnail strip down
// - Home / End: First / last item

use gdk4::Key;
use gtk4::prelude::*;
use gtk4::{EventControllerKey, PropagationPhase, Widget};
use std::cell::RefCell;
use std::rc::Rc;

use crate::navigation::Command;

/// Callback type for carousel commands
pub type CommandCallback = Box<dyn Fn(Command)>;

/// Map a key press to a carousel command. `last` is the catalog's last index.
pub fn command_for_key(keyval: Key, last: usize) -> Option<Command> {
    match keyval {
        Key::Left | Key::h => Some(Command::Previous),
        Key::Right | Key::l => Some(Command::Next),
        Key::Up | Key::k => Some(Command::StepUp),
        Key::Down | Key::j => Some(Command::StepDown),
        Key::Home => Some(Command::SelectIndicator(0)),
        Key::End => Some(Command::SelectIndicator(last)),
        _ => None,
    }
}

/// Keybinding manager for the carousel window
pub struct Keybindings {
    controller: EventControllerKey,
    on_command: Rc<RefCell<Option<CommandCallback>>>,
}

impl Keybindings {
    /// Create a new keybinding manager for a catalog of `len` items
    pub fn new(len: usize) -> Self {
        let controller = EventControllerKey::new();
        controller.set_propagation_phase(PropagationPhase::Capture);

        let on_command: Rc<RefCell<Option<CommandCallback>>> = Rc::new(RefCell::new(None));
        let on_command_clone = on_command.clone();
        let last = len.saturating_sub(1);

        controller.connect_key_pressed(move |_controller, keyval, _keycode, _state| {
            let Some(command) = command_for_key(keyval, last) else {
                return glib::Propagation::Proceed;
            };
            if let Some(ref callback) = *on_command_clone.borrow() {
                callback(command);
                return glib::Propagation::Stop;
            }
            glib::Propagation::Proceed
        });

        Self {
            controller,
            on_command,
        }
    }

    /// Attach keybindings to a widget (typically the main window)
    pub fn attach(&self, widget: &impl IsA<Widget>) {
        widget.add_controller(self.controller.clone());
    }

    /// Connect callback for carousel commands
    pub fn connect_command<F>(&self, callback: F)
    where
        F: Fn(Command) + 'static,
    {
        *self.on_command.borrow_mut() = Some(Box::new(callback));
    }
}
