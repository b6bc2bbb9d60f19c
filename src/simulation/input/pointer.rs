use crate::domain::{Contact, DragState, Pointer};

use super::SimulatorCore;

pub(super) fn pointer_down(sim: &mut SimulatorCore, x: f64, y: f64) {
    sim.pointer = Pointer::new(x, y);
    // A new gesture always starts without a previous angle, even if the
    // release of the last one was never delivered.
    sim.drag = DragState::Dragging(Contact::grab(sim.pointer, sim.disk_center()));
}

pub(super) fn pointer_move(sim: &mut SimulatorCore, x: f64, y: f64) {
    sim.pointer = Pointer::new(x, y);
    let center = sim.disk_center();
    if let Some(contact) = sim.drag.contact_mut() {
        contact.follow(sim.pointer, center);
    }
}

pub(super) fn pointer_up(sim: &mut SimulatorCore) {
    sim.drag = DragState::Idle;
}
