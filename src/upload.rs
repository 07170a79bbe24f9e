use gloo_file::{File, FileList};
use leptos::*;
use web_sys::Event;

use crate::api;
use crate::app::alert;
use crate::choices;
use crate::material::MaterialType;

/// Modal form for contributing a new course file. Course and instructor
/// come from selection-with-create widgets backed by the reference lists;
/// submission posts one multipart request and asks the parent to refresh.
#[component]
pub fn UploadForm<F, C>(username: Memo<String>, on_uploaded: F, on_close: C) -> impl IntoView
where
    F: Fn() + Copy + 'static,
    C: Fn() + Copy + 'static,
{
    let (course, set_course) = create_signal(String::new());
    let (batch, set_batch) = create_signal(String::new());
    let (instructor, set_instructor) = create_signal(String::new());
    let (material_type, set_material_type) = create_signal(String::new());
    let (remark, set_remark) = create_signal(String::new());
    let (file, set_file) = create_signal(None::<File>);
    let (course_options, set_course_options) = create_signal(Vec::<String>::new());
    let (faculty_options, set_faculty_options) = create_signal(Vec::<String>::new());
    let (show_new_course, set_show_new_course) = create_signal(false);
    let (show_new_instructor, set_show_new_instructor) = create_signal(false);
    let (uploading, set_uploading) = create_signal(false);
    let file_input_ref = create_node_ref::<html::Input>();

    let load_courses = move || {
        spawn_local(async move {
            match api::fetch_courses().await {
                Ok(list) => set_course_options.set(choices::sorted_names(
                    list.into_iter().map(|record| record.name).collect(),
                )),
                Err(message) => {
                    web_sys::console::error_1(
                        &format!("Error fetching course list: {message}").into(),
                    );
                }
            }
        });
    };

    let load_faculty = move || {
        spawn_local(async move {
            match api::fetch_faculty().await {
                Ok(list) => set_faculty_options.set(choices::sorted_names(
                    list.into_iter().map(|record| record.name).collect(),
                )),
                Err(message) => {
                    web_sys::console::error_1(
                        &format!("Error fetching faculty list: {message}").into(),
                    );
                }
            }
        });
    };

    create_effect(move |_| {
        load_courses();
        load_faculty();
    });

    let on_file_change = move |_ev: Event| {
        if let Some(input) = file_input_ref.get_untracked() {
            if let Some(files) = input.files() {
                let list = FileList::from(files);
                set_file.set(list.first().cloned());
            }
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = api::UploadFields {
            course_name: course.get(),
            batch: batch.get(),
            instructor: instructor.get(),
            material_type: material_type.get(),
            remark: remark.get(),
        };
        let attachment = file.get();
        let uploader = username.get();
        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_material(&fields, attachment.as_ref(), &uploader).await {
                Ok(()) => {
                    alert("Upload successful!");
                    on_uploaded();
                }
                Err(message) => alert(&message),
            }
            set_uploading.set(false);
        });
    };

    let submit_new_course = move |name: String| {
        spawn_local(async move {
            match api::add_course(&name).await {
                Ok(()) => {
                    alert("New course added successfully!");
                    load_courses();
                    set_show_new_course.set(false);
                }
                // the popup stays open so the user can retry
                Err(message) => alert(&message),
            }
        });
    };

    let submit_new_instructor = move |name: String| {
        spawn_local(async move {
            match api::add_faculty(&name).await {
                Ok(()) => {
                    alert("New instructor added successfully!");
                    load_faculty();
                    set_show_new_instructor.set(false);
                }
                Err(message) => alert(&message),
            }
        });
    };

    view! {
        <div class="upload-form border-container">
            <button class="close-btn" on:click=move |_| on_close()>"close"</button>
            <h2 style="color: #cdd6f4; margin: 0 0 24px 0; font-size: 1.4rem; font-weight: 500;">
                "Upload Course Information"
            </h2>
            <form on:submit=on_submit>
                <div class="form-row">
                    <div class="form-field">
                        <label class="field-label">"course name"</label>
                        <SelectWithCreate
                            label="select course"
                            options=course_options
                            value=course
                            set_value=set_course
                            on_create=move || set_show_new_course.set(true)
                        />
                    </div>
                    <div class="form-field">
                        <label class="field-label">"year"</label>
                        <input
                            type="number"
                            class="upload-input"
                            prop:value=move || batch.get()
                            on:input=move |ev| set_batch.set(event_target_value(&ev))
                            placeholder="Enter year"
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-field">
                        <label class="field-label">"instructor"</label>
                        <SelectWithCreate
                            label="select instructor"
                            options=faculty_options
                            value=instructor
                            set_value=set_instructor
                            on_create=move || set_show_new_instructor.set(true)
                        />
                    </div>
                    <div class="form-field">
                        <label class="field-label">"type"</label>
                        <select
                            class="type-select"
                            on:change=move |ev| set_material_type.set(event_target_value(&ev))
                        >
                            <option value="" selected=move || material_type.get().is_empty()>
                                "Select Type"
                            </option>
                            <For each=move || MaterialType::ALL key=|kind| *kind let:kind>
                                <option
                                    value=kind.as_str()
                                    selected=move || material_type.get() == kind.as_str()
                                >
                                    {kind.as_str()}
                                </option>
                            </For>
                        </select>
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-field">
                        <label class="field-label">"remark"</label>
                        <input
                            type="text"
                            class="upload-input"
                            prop:value=move || remark.get()
                            on:input=move |ev| set_remark.set(event_target_value(&ev))
                            placeholder="Enter remark"
                        />
                    </div>
                    <div class="form-field">
                        <label class="field-label">"file"</label>
                        <input
                            type="file"
                            accept="image/*,.pdf"
                            class="file-input"
                            node_ref=file_input_ref
                            on:change=on_file_change
                        />
                    </div>
                </div>
                <button
                    type="submit"
                    class="upload-submit-btn"
                    disabled=move || uploading.get()
                >
                    {move || if uploading.get() { "uploading..." } else { "upload" }}
                </button>
            </form>

            <Show when=move || show_new_course.get()>
                <NamePopup
                    prompt="Enter new course name:"
                    placeholder="Course Name"
                    on_submit=submit_new_course
                    on_close=move || set_show_new_course.set(false)
                />
            </Show>
            <Show when=move || show_new_instructor.get()>
                <NamePopup
                    prompt="Enter new instructor name:"
                    placeholder="Instructor Name"
                    on_submit=submit_new_instructor
                    on_close=move || set_show_new_instructor.set(false)
                />
            </Show>
        </div>
    }
}

/// Searchable dropdown over a reference list plus the reserved
/// "not in the list" entry. Picking a real option commits it; picking the
/// sentinel only opens the creation popup, never setting a value.
#[component]
pub fn SelectWithCreate<F>(
    label: &'static str,
    options: ReadSignal<Vec<String>>,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    on_create: F,
) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let (query, set_query) = create_signal(String::new());
    let (open, set_open) = create_signal(false);

    let filtered = create_memo(move |_| choices::filter_names(&options.get(), &query.get()));

    view! {
        <div class="select-create">
            <input
                type="text"
                class="upload-input"
                placeholder=label
                prop:value=move || if open.get() { query.get() } else { value.get() }
                on:focus=move |_| {
                    set_query.set(String::new());
                    set_open.set(true);
                }
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                    set_open.set(true);
                }
            />
            <Show when=move || open.get()>
                <div class="select-options border-container">
                    <For each=move || filtered.get() key=|name| name.clone() let:name>
                        {
                            let committed = name.clone();
                            view! {
                                <div
                                    class="select-option"
                                    on:mousedown=move |_| {
                                        set_value.set(committed.clone());
                                        set_open.set(false);
                                    }
                                >
                                    {name}
                                </div>
                            }
                        }
                    </For>
                    <div
                        class="select-option select-option-new"
                        on:mousedown=move |_| {
                            set_open.set(false);
                            on_create();
                        }
                    >
                        {choices::NOT_IN_LIST}
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Single-field creation popup shared by the course and instructor flows.
/// The parent decides when to close it, so a failed submit leaves it open.
#[component]
pub fn NamePopup<S, C>(
    prompt: &'static str,
    placeholder: &'static str,
    on_submit: S,
    on_close: C,
) -> impl IntoView
where
    S: Fn(String) + Copy + 'static,
    C: Fn() + Copy + 'static,
{
    let (name, set_name) = create_signal(String::new());

    view! {
        <div class="popup-overlay">
            <div class="popup border-container">
                <form on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    on_submit(name.get());
                }>
                    <label class="field-label">{prompt}</label>
                    <input
                        type="text"
                        class="popup-input"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        placeholder=placeholder
                    />
                    <div class="popup-actions">
                        <button type="submit" class="popup-btn">"add"</button>
                        <button type="button" class="popup-btn" on:click=move |_| on_close()>
                            "cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
