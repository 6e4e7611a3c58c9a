use contracts::export::FilterMode;
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use super::preview::PreviewTable;
use super::view_model::GeneratorViewModel;
use crate::session::use_session;
use crate::shared::feedback::ResultPanel;
use crate::shared::filter_control::FilterControl;

#[component]
pub fn GeneratorPage() -> impl IntoView {
    let vm = GeneratorViewModel::new(use_session());
    vm.init_command();

    let file_input = NodeRef::<html::Input>::new();

    let on_upload = move |ev: SubmitEvent| {
        ev.prevent_default();
        let file = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        vm.upload_command(file);
    };

    view! {
        <div class="card">
            <div class="card__body">
                <h2 class="section-title">"Upload Mailing Data"</h2>
                <form on:submit=on_upload>
                    <div class="form__row">
                        <input
                            class="form__input"
                            type="file"
                            accept=".xlsx,.xls"
                            node_ref=file_input
                        />
                        <button class="button button--primary" type="submit">
                            "Upload"
                        </button>
                    </div>
                </form>

                <ResultPanel feedback=vm.upload_feedback />
                {move || {
                    vm.upload_feedback.get().is_none().then(|| {
                        vm.summary.get().map(|summary| {
                            view! {
                                <div class="file-info">
                                    <h5>"File uploaded successfully"</h5>
                                    <p><strong>"Filename: "</strong>{summary.filename.clone()}</p>
                                    <p><strong>"Total rows: "</strong>{summary.rows}</p>
                                    <p><strong>"Columns: "</strong>{summary.columns.join(", ")}</p>
                                </div>
                            }
                        })
                    })
                }}

                {move || {
                    let files = vm.known_files.get();
                    (!files.is_empty()).then(|| {
                        view! {
                            <div class="form__group">
                                <label class="form__label">"Previously uploaded files"</label>
                                <div class="file-list">
                                    {files
                                        .into_iter()
                                        .map(|file| {
                                            let name = file.clone();
                                            view! {
                                                <button
                                                    class="button button--ghost"
                                                    type="button"
                                                    on:click=move |_| vm.adopt_existing(name.clone())
                                                >
                                                    {file}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                }}
            </div>
        </div>

        <Show when=move || vm.revealed.get()>
            <div class="card">
                <div class="card__body">
                    <h2 class="section-title">"Filter Options"</h2>
                    <FilterControl
                        label="Categories to include"
                        options=vm.category_options
                        value=vm.category_include
                        placeholder="C_col,C_fac"
                    />
                    <FilterControl
                        label="Categories to exclude"
                        options=vm.category_options
                        value=vm.category_exclude
                    />
                    <FilterControl
                        label="Statuses to include"
                        options=vm.status_options
                        value=vm.status_include
                    />
                    <FilterControl
                        label="Statuses to exclude"
                        options=vm.status_options
                        value=vm.status_exclude
                    />
                    <FilterControl
                        label="Mail zone"
                        options=vm.mail_zone_options
                        value=vm.mail_zone
                    />

                    <div class="form__group">
                        <label class="form__label">"Filter combination"</label>
                        <div class="form__radio-group">
                            <div class="form__radio-wrapper">
                                <input
                                    id="filter-mode-or"
                                    class="form__radio"
                                    type="radio"
                                    name="filter-mode"
                                    prop:checked=move || vm.filter_mode.get() == FilterMode::Or
                                    on:change=move |_| vm.filter_mode.set(FilterMode::Or)
                                />
                                <label class="form__radio-label" for="filter-mode-or">"OR"</label>
                            </div>
                            <div class="form__radio-wrapper">
                                <input
                                    id="filter-mode-and"
                                    class="form__radio"
                                    type="radio"
                                    name="filter-mode"
                                    prop:checked=move || vm.filter_mode.get() == FilterMode::And
                                    on:change=move |_| vm.filter_mode.set(FilterMode::And)
                                />
                                <label class="form__radio-label" for="filter-mode-and">"AND"</label>
                            </div>
                        </div>
                        <Show
                            when=move || vm.filter_mode.get() == FilterMode::Or
                            fallback=|| {
                                view! {
                                    <div class="info-box">
                                        "AND: a row is kept only when it matches every active filter."
                                    </div>
                                }
                            }
                        >
                            <div class="info-box">
                                "OR: a row is kept when it matches any active filter."
                            </div>
                        </Show>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Publication columns"</label>
                        <div class="checkbox-group">
                            <div class="form__checkbox-wrapper">
                                <input
                                    id="publication-be"
                                    class="form__checkbox"
                                    type="checkbox"
                                    prop:checked=move || vm.publication_be.get()
                                    on:change=move |ev| {
                                        vm.publication_be.set(event_target_checked(&ev));
                                    }
                                />
                                <label class="form__checkbox-label" for="publication-be">
                                    "Bulletin (English)"
                                </label>
                            </div>
                            <div class="form__checkbox-wrapper">
                                <input
                                    id="publication-bc"
                                    class="form__checkbox"
                                    type="checkbox"
                                    prop:checked=move || vm.publication_bc.get()
                                    on:change=move |ev| {
                                        vm.publication_bc.set(event_target_checked(&ev));
                                    }
                                />
                                <label class="form__checkbox-label" for="publication-bc">
                                    "Bulletin (Chinese)"
                                </label>
                            </div>
                            <div class="form__checkbox-wrapper">
                                <input
                                    id="publication-ar"
                                    class="form__checkbox"
                                    type="checkbox"
                                    prop:checked=move || vm.publication_ar.get()
                                    on:change=move |ev| {
                                        vm.publication_ar.set(event_target_checked(&ev));
                                    }
                                />
                                <label class="form__checkbox-label" for="publication-ar">
                                    "Annual Report"
                                </label>
                            </div>
                        </div>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label class="form__label" for="limit">"Limit"</label>
                            <input
                                id="limit"
                                class="form__input"
                                type="number"
                                min="1"
                                prop:value=move || vm.limit.get()
                                on:input=move |ev| vm.limit.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label" for="batch-size">"Batch size"</label>
                            <input
                                id="batch-size"
                                class="form__input"
                                type="number"
                                min="1"
                                prop:value=move || vm.batch_size.get()
                                on:input=move |ev| vm.batch_size.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label" for="start-index">"Start index"</label>
                            <input
                                id="start-index"
                                class="form__input"
                                type="number"
                                min="0"
                                prop:value=move || vm.start_index.get()
                                on:input=move |ev| vm.start_index.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                </div>
            </div>

            {move || {
                vm.summary
                    .get()
                    .filter(|summary| !summary.sample_data.is_empty())
                    .map(|summary| {
                        view! {
                            <div class="card">
                                <div class="card__body">
                                    <h2 class="section-title">"Data Preview"</h2>
                                    <PreviewTable summary=summary />
                                </div>
                            </div>
                        }
                    })
            }}

            <div class="card">
                <div class="card__body">
                    <h2 class="section-title">"Export Filtered Data"</h2>
                    <button
                        class="button button--primary"
                        type="button"
                        disabled=move || vm.exporting.get()
                        on:click=move |_| vm.export_command()
                    >
                        {move || if vm.exporting.get() { "Exporting..." } else { "Export Filtered Excel" }}
                    </button>
                    <ResultPanel feedback=vm.export_feedback />
                </div>
            </div>

            <div class="card">
                <div class="card__body">
                    <h2 class="section-title">"Generate Labels"</h2>
                    <button
                        class="button button--primary"
                        type="button"
                        on:click=move |_| vm.generate_command()
                    >
                        "Generate PDF Labels"
                    </button>
                    <ResultPanel feedback=vm.generate_feedback />
                </div>
            </div>
        </Show>
    }
}
