use dioxus::prelude::*;

/// The fixed palette offered for subjects. Any CSS color string is valid on
/// the wire; these are just the one-click choices.
pub const PALETTE: [&str; 12] = [
    "#ff6b6b", "#ee5a24", "#f0932b", "#feca57",
    "#6ab04c", "#badc58", "#48dbfb", "#4A90D9",
    "#6c5ce7", "#a29bfe", "#e056fd", "#fd79a8",
];

/// Stateless swatch row; the owner holds the selected value.
#[component]
pub fn ColorPicker(value: String, on_pick: EventHandler<String>) -> Element {
    rsx! {
        div { class: "color-picker",
            for color in PALETTE {
                button {
                    key: "{color}",
                    r#type: "button",
                    class: "color-option",
                    class: if value == color { "selected" },
                    style: "background: {color}",
                    onclick: move |_| on_pick.call(color.to_string()),
                }
            }
        }
    }
}
