use super::{Journal, StubClass};
use crate::toolkit::ComponentTable;
use std::rc::Rc;

/// Component table with stub versions of common GTK widgets.
///
/// Boxes and windows are containers. Setting `active` on toggle buttons and
/// switches emits their signal synchronously, as GTK does. `GtkFrame` stands in for single-child
/// wrappers that do not expose the container capability.
pub fn gtk_table(journal: &Journal) -> ComponentTable {
    let class = |name: &str| StubClass::new(name, journal);

    ComponentTable::builder()
        .register(
            "GtkWindow",
            Rc::new(class("Window").container().signals(&["destroy", "deleteEvent", "show"])),
        )
        .register("GtkVBox", Rc::new(class("VBox").container().signals(&["add", "remove"])))
        .register("GtkHBox", Rc::new(class("HBox").container().signals(&["add", "remove"])))
        .register("GtkFrame", Rc::new(class("Frame")))
        .register(
            "GtkButton",
            Rc::new(class("Button").signals(&["clicked", "activate", "enter", "leave"])),
        )
        .register(
            "GtkToggleButton",
            Rc::new(
                class("ToggleButton")
                    .signals(&["clicked", "toggled", "activate"])
                    .notify("active", "toggled"),
            ),
        )
        .register(
            "GtkSwitch",
            Rc::new(
                class("Switch")
                    .signals(&["stateSet", "activate"])
                    .notify("active", "stateSet"),
            ),
        )
        .register(
            "GtkSpinButton",
            Rc::new(class("SpinButton").signals(&["valueChanged", "changed", "activate"])),
        )
        .register(
            "GtkHScale",
            Rc::new(class("HScale").signals(&["valueChanged", "formatValue"])),
        )
        .register(
            "GtkEntry",
            Rc::new(class("Entry").signals(&["changed", "activate", "insertText"])),
        )
        .register("GtkLabel", Rc::new(class("Label").signals(&["activateLink"])))
        .build()
}
