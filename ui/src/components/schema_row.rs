use audience::domain::catalog::{indicator_for, SchemaOption};
use leptos::prelude::*;

/// One schema slot: trait indicator, field dropdown and a remove button.
///
/// The add row shows a hidden placeholder while nothing is picked and its
/// remove button is disabled; it is cleared by committing, not removing.
#[component]
pub fn SchemaRow(
    value: String,
    /// Options this row may switch to
    options: Vec<&'static SchemaOption>,
    #[prop(optional)] is_add_row: bool,
    on_change: Callback<String>,
    #[prop(optional)] on_remove: Option<Callback<String>>,
) -> impl IntoView {
    let dot = indicator_for(&value).css_class();
    let nothing_picked = value.is_empty();

    let option_views = options
        .into_iter()
        .map(|option| {
            let selected = option.value == value;
            view! {
                <option value=option.value selected=selected>
                    {option.label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="schema_row">
            <div class="colored_dot_area">
                <span class=format!("dot {}", dot)></span>
            </div>

            <div class="input_area">
                <select
                    class="form_select"
                    on:change=move |ev| on_change.run(event_target_value(&ev))
                >
                    {is_add_row.then(|| view! {
                        <option value="" disabled=true hidden=true selected=nothing_picked>
                            " Add schema to segment "
                        </option>
                    })}
                    {option_views}
                </select>
            </div>

            <div class="button_area">
                <button
                    class="btn_minus"
                    disabled=is_add_row
                    on:click=move |_| {
                        if let (false, Some(remove)) = (is_add_row, on_remove) {
                            remove.run(value.clone());
                        }
                    }
                >
                    <i class="bi bi-dash-lg"></i>
                </button>
            </div>
        </div>
    }
}
