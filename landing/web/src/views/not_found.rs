use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        div {
            class: "not-found",
            h1 {
                class: "not-found-code",
                "404"
            }
            p {
                class: "not-found-message",
                "There is no story at /{path}."
            }
            Link {
                to: "/",
                class: "btn btn-primary",
                "Return to Home"
            }
        }
    }
}
