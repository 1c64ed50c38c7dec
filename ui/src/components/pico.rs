//! Thin Dioxus wrappers around the Pico.css elements this app uses.
//! Pico styles plain semantic HTML, so most of these only pick the element.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

/// An unlabeled `type=number` field that reports its raw text on every input.
///
/// Any step is allowed, so fractional amounts do not trip the browser's
/// own validation.
#[component]
pub fn NumberInput(value: String, placeholder: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            r#type: "number",
            step: "any",
            inputmode: "decimal",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |event| on_input.call(event.value()),
        }
    }
}
