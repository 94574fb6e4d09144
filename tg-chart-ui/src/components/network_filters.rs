//! Network checkboxes used to narrow region searches.

use crate::state::AppState;
use dioxus::prelude::*;

/// Only affects searches started after the change.
#[component]
pub fn NetworkFilters() -> Element {
    let mut state = use_context::<AppState>();
    let filters = (state.filters)();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            span { style: "font-weight: bold;", "Networks:" }
            FilterCheckbox {
                name: "WMO".to_string(),
                checked: filters.wmo,
                on_toggle: move |v| state.filters.with_mut(|f| f.wmo = v),
            }
            FilterCheckbox {
                name: "GSN".to_string(),
                checked: filters.gsn,
                on_toggle: move |v| state.filters.with_mut(|f| f.gsn = v),
            }
            FilterCheckbox {
                name: "HCN/CRN".to_string(),
                checked: filters.hcn_crn,
                on_toggle: move |v| state.filters.with_mut(|f| f.hcn_crn = v),
            }
            FilterCheckbox {
                name: "Other".to_string(),
                checked: filters.others,
                on_toggle: move |v| state.filters.with_mut(|f| f.others = v),
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FilterCheckboxProps {
    name: String,
    checked: bool,
    on_toggle: EventHandler<bool>,
}

#[component]
fn FilterCheckbox(props: FilterCheckboxProps) -> Element {
    let on_toggle = props.on_toggle;
    rsx! {
        label {
            style: "display: flex; gap: 4px; align-items: center;",
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |evt: Event<FormData>| on_toggle.call(evt.checked()),
            }
            "{props.name}"
        }
    }
}
