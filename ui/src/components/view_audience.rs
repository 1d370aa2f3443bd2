//! View Audience page and the "Saving Segment" side panel.

use audience::domain::{catalog, SegmentEditor};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::schema_row::SchemaRow;
use crate::components::toast::Toasts;
use crate::types::UiConfig;

#[component]
pub fn ViewAudience(config: RwSignal<UiConfig>) -> impl IntoView {
    let editor = RwSignal::new(SegmentEditor::new());

    view! {
        <div class="view_audience">
            <div class="navigation_bar">
                <h5>
                    <span class="icon_left_arrow"><i class="bi bi-chevron-left"></i></span>
                    " View Audience"
                </h5>
            </div>

            <main class="content">
                <button class="btn_save_segment" on:click=move |_| editor.update(|e| e.open())>
                    "Save Segment"
                </button>

                <Show when=move || editor.with(|e| e.is_open())>
                    <SegmentPanel editor=editor config=config />
                </Show>
            </main>
        </div>
    }
}

#[component]
fn SegmentPanel(editor: RwSignal<SegmentEditor>, config: RwSignal<UiConfig>) -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    let selected = Memo::new(move |_| editor.with(|e| e.selected().to_vec()));
    let pending = Memo::new(move |_| editor.with(|e| e.pending().to_string()));
    let submitting = Memo::new(move |_| editor.with(|e| e.is_submitting()));
    // Bumped when a row change is refused so the rows redraw from state
    let refusals = RwSignal::new(0u64);

    let close = move || editor.update(|e| e.close());

    let submit = move |_| {
        let Some(Ok(submission)) = editor.try_update(|e| e.begin_submit(&toasts)) else {
            return;
        };
        let endpoint = config.with_untracked(|c| c.endpoint.clone());
        spawn_local(async move {
            let result = api::send_segment(&endpoint, &submission.payload).await;
            editor.update(|e| {
                e.finish_submit(submission.ticket, result, &toasts);
            });
        });
    };

    let change_row = move |index: usize| {
        Callback::new(move |value: String| change_row_value(editor, refusals, index, &value))
    };

    let remove_row = Callback::new(move |value: String| {
        editor.update(|e| {
            e.remove_selection(&value);
        })
    });

    let pick_pending = Callback::new(move |value: String| editor.update(|e| e.set_pending(value)));

    let add_pending = move |_| {
        editor.update(|e| {
            if let Err(err) = e.add_pending() {
                log::debug!("Nothing added: {}", err);
            }
        })
    };

    view! {
        <div class="offcanvas_backdrop"></div>
        <div class="save_segment offcanvas_end" role="dialog">
            <div class="navigation_bar">
                <h5>
                    <span class="icon_left_arrow" on:click=move |_| close()>
                        <i class="bi bi-chevron-left"></i>
                    </span>
                    " Saving Segment"
                </h5>
            </div>

            <div class="offcanvas_body">
                <div class="form_group">
                    <label for="segment_name">"Enter the Name of the Segment"</label>
                    <input
                        id="segment_name"
                        type="text"
                        class="segment_name_input"
                        placeholder="Name of the segment"
                        name="segment_name"
                        autocomplete="off"
                        prop:value=move || editor.with(|e| e.name().to_string())
                        on:input=move |ev| editor.update(|e| e.set_name(event_target_value(&ev)))
                    />
                </div>

                <p>"To save your segment, you need to add the schemas to build the query"</p>
                <div class="legends">
                    <p><span class="dot green_dot"></span><span>" - User Traits"</span></p>
                    <p><span class="dot red_dot"></span><span>" - Group Traits"</span></p>
                </div>

                {move || {
                    refusals.track();
                    let selected = selected.get();
                    (!selected.is_empty()).then(|| {
                        let rows = selected
                            .iter()
                            .enumerate()
                            .map(|(index, value)| {
                                view! {
                                    <SchemaRow
                                        value=value.clone()
                                        options=catalog::row_options(&selected, value)
                                        on_change=change_row(index)
                                        on_remove=remove_row
                                    />
                                }
                            })
                            .collect_view();
                        view! { <div class="schema_list blue_border">{rows}</div> }
                    })
                }}

                {move || {
                    let available = catalog::available_options(&selected.get());
                    (!available.is_empty()).then(|| view! {
                        <div class="schema_list">
                            <SchemaRow
                                value=pending.get()
                                options=available
                                is_add_row=true
                                on_change=pick_pending
                            />
                            <button class="btn_add_new_schema" on:click=add_pending>
                                "+ "<span>"Add new schema"</span>
                            </button>
                        </div>
                    })
                }}
            </div>

            <div class="button_panel">
                <button
                    class="btn_save_segment"
                    disabled=move || submitting.get()
                    on:click=submit
                >
                    "Save the Segment"
                </button>
                <button class="btn_cancel" on:click=move |_| close()>"Cancel"</button>
            </div>
        </div>
    }
}

/// Apply a row's new value. A refused change bumps `refusals` so the rows
/// are redrawn and the dropdown snaps back to the value still in state.
fn change_row_value(
    editor: RwSignal<SegmentEditor>,
    refusals: RwSignal<u64>,
    index: usize,
    value: &str,
) {
    if let Some(Err(err)) = editor.try_update(|e| e.change_selection(index, value)) {
        log::warn!("Schema change refused: {}", err);
        refusals.update(|n| *n += 1);
    }
}
