use dioxus::prelude::*;

use crate::common::platform::use_controller;
use api::category::Category;

#[derive(Clone, PartialEq, Props)]
struct CategoryCardProps {
    category: Category,
}

#[component]
fn CategoryCard(props: CategoryCardProps) -> Element {
    let ctl = use_controller();
    let category = props.category;

    rsx! {
        div {
            class: "category-card",
            onclick: move |_| async move { ctl.navigate_to_category(category).await },
            div { class: "category-icon", "{category.icon()}" }
            div { class: "category-info",
                h3 { "{category.name()}" }
                p { "Click to view gallery" }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "hero",
            h1 { class: "hero-title", "Decorations for Every Occasion" }
            p { class: "hero-subtitle", "Browse our work, one celebration at a time" }
        }
        section { class: "categories-section",
            div { class: "category-grid",
                for category in Category::ALL {
                    CategoryCard { key: "{category}", category }
                }
            }
        }
    }
}
