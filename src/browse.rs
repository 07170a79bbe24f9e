use leptos::*;

use crate::api;
use crate::listing;
use crate::session;
use crate::upload::UploadForm;
use crate::UploadRecord;

/// Main listing page: fetches the full upload list once, then searches and
/// paginates it entirely client-side.
#[component]
pub fn BrowsePage<F>(token: ReadSignal<Option<String>>, on_logout: F) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let (records, set_records) = create_signal(Vec::<UploadRecord>::new());
    let (query, set_query) = create_signal(String::new());
    let (page, set_page) = create_signal(1usize);
    let (show_upload, set_show_upload) = create_signal(false);

    let username = create_memo(move |_| {
        token
            .get()
            .and_then(|token| session::claims_username(&token))
            .unwrap_or_default()
    });

    let refresh = move || {
        spawn_local(async move {
            match api::fetch_uploads().await {
                Ok(list) => set_records.set(list),
                Err(message) => {
                    web_sys::console::error_1(
                        &format!("Error fetching uploaded files: {message}").into(),
                    );
                }
            }
        });
    };

    // Route guard and initial fetch. The guard is a presence test only;
    // the token is never validated client-side.
    create_effect(move |_| {
        if session::stored_token().is_none() {
            on_logout();
            return;
        }
        refresh();
    });

    let filtered = create_memo(move |_| listing::filter_records(&records.get(), &query.get()));
    let max_pages = create_memo(move |_| listing::page_count(filtered.get().len()));
    let visible = create_memo(move |_| listing::page_slice(&filtered.get(), page.get()).to_vec());

    view! {
        <div>
            <div class="main-header border-container">
                <h1 class="main-title">"EduWise"</h1>
                <ProfileMenu username=username on_logout=on_logout />
            </div>

            <div class="search-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button
                    class="toggle-upload-btn"
                    on:click=move |_| set_show_upload.update(|open| *open = !*open)
                >
                    {move || if show_upload.get() { "close form" } else { "upload files" }}
                </button>
            </div>

            <Show when=move || show_upload.get()>
                <div class="upload-overlay">
                    <UploadForm
                        username=username
                        on_uploaded=refresh
                        on_close=move || set_show_upload.set(false)
                    />
                </div>
            </Show>

            <Show
                when=move || !visible.get().is_empty()
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <div style="font-size: 32px; margin-bottom: 10px;">"[ ]"</div>
                            <div>"no course materials to show"</div>
                        </div>
                    }
                }
            >
                <div class="records-grid">
                    <For each=move || visible.get() key=|record| record.id.clone() let:record>
                        <a class="record-card border-container" href=record.link.clone() download>
                            <h2 class="record-course">{record.course_name.clone()}</h2>
                            <p class="record-type">{record.material_type.clone()}</p>
                            <p class="record-meta">
                                "Instructor: " {record.instructor.clone()}
                                ", Batch: " {record.batch.clone()}
                            </p>
                            <p class="record-meta">"Remark: " {record.remark.clone()}</p>
                        </a>
                    </For>
                </div>
            </Show>

            <Show when=move || filtered.get().len() > listing::PAGE_SIZE>
                <div class="pagination">
                    <button
                        class="page-btn"
                        disabled=move || page.get() <= 1
                        on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                    >
                        "<<"
                    </button>
                    <For
                        each=move || listing::page_frame(page.get(), max_pages.get())
                        key=|number| *number
                        let:number
                    >
                        <button
                            class="page-btn"
                            class:current=move || page.get() == number
                            on:click=move |_| set_page.set(number)
                        >
                            {number}
                        </button>
                    </For>
                    <button
                        class="page-btn"
                        disabled=move || page.get() >= max_pages.get()
                        on:click=move |_| set_page.update(|p| *p += 1)
                    >
                        ">>"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ProfileMenu<F>(username: Memo<String>, on_logout: F) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let (open, set_open) = create_signal(false);

    let initial = move || {
        username
            .get()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    };

    view! {
        <div class="profile-menu">
            <button
                class="profile-btn"
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                {initial}
            </button>
            <Show when=move || open.get()>
                <div class="profile-dropdown border-container">
                    <p class="profile-name">"Username: " {move || username.get()}</p>
                    <button class="profile-logout" on:click=move |_| on_logout()>
                        "logout"
                    </button>
                </div>
            </Show>
        </div>
    }
}
