//! Todo Form Component
//!
//! Title, priority and completion fields shared by the create and edit
//! pages. Submit stays disabled while the form is invalid.

use leptos::prelude::*;

use crate::controller::TodoForm;
use crate::components::PrioritySelector;

/// Form for creating or editing a todo
#[component]
pub fn TodoFormView(
    form: RwSignal<TodoForm>,
    submitting: ReadSignal<bool>,
    submit_label: &'static str,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    // Only complain about the title once the user has typed something
    let (touched, set_touched) = signal(false);
    let validation_error = move || {
        if !touched.get() {
            return None;
        }
        form.with(|f| f.validate().err()).map(|err| err.user_message())
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_touched.set(true);
        if form.with_untracked(TodoForm::is_valid) {
            on_submit.run(());
        }
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <label for="todo-title">"Title *"</label>
            <input
                id="todo-title"
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || form.with(|f| f.title.clone())
                on:input=move |ev| {
                    set_touched.set(true);
                    form.update(|f| f.title = event_target_value(&ev));
                }
            />

            <label>"Priority"</label>
            <PrioritySelector
                current=Signal::derive(move || form.with(|f| f.priority))
                on_change=move |value| form.update(|f| f.priority = value)
            />

            <label class="checkbox-row">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.completed)
                    on:change=move |ev| form.update(|f| f.completed = event_target_checked(&ev))
                />
                "Completed"
            </label>

            {move || validation_error().map(|msg| view! { <p class="form-error">{msg}</p> })}

            <div class="form-actions">
                <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button
                    type="submit"
                    class="btn primary"
                    disabled=move || submitting.get() || !form.with(TodoForm::is_valid)
                >
                    {move || if submitting.get() { "Saving..." } else { submit_label }}
                </button>
            </div>
        </form>
    }
}
