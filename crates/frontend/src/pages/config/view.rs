use leptos::prelude::*;

use super::view_model::ConfigPageViewModel;
use crate::session::use_session;
use crate::shared::feedback::ResultPanel;

#[component]
pub fn ConfigPage() -> impl IntoView {
    let vm = ConfigPageViewModel::new(use_session());
    // Pull the current record as soon as the page opens.
    vm.load_command();

    view! {
        <div class="card config-page">
            <div class="card__body">
                <div class="page-header-row">
                    <h2 class="section-title">"Label Configuration"</h2>
                    <div class="page-header-actions">
                        <button
                            class="button button--primary"
                            type="button"
                            on:click=move |_| vm.save_command()
                        >
                            "Save"
                        </button>
                        <button
                            class="button button--secondary"
                            type="button"
                            on:click=move |_| vm.load_command()
                        >
                            "Reload"
                        </button>
                        <button
                            class="button button--secondary"
                            type="button"
                            on:click=move |_| vm.reset_command()
                        >
                            "Reset to Defaults"
                        </button>
                    </div>
                </div>

                <ResultPanel feedback=vm.feedback />

                <div class="form-section-group">
                    <div>
                        <h2 class="section-title">"Page Layout"</h2>
                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label" for="page-size">"Page size"</label>
                                <select
                                    id="page-size"
                                    class="form__select"
                                    prop:value=move || vm.form.get().page_size
                                    on:change=move |ev| {
                                        vm.form.update(|f| f.page_size = event_target_value(&ev));
                                    }
                                >
                                    <option value="A4">"A4"</option>
                                    <option value="A5">"A5"</option>
                                    <option value="Letter">"Letter"</option>
                                    <option value="Legal">"Legal"</option>
                                </select>
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="columns">"Columns"</label>
                                <input
                                    id="columns"
                                    class="form__input"
                                    type="number"
                                    min="1"
                                    prop:value=move || vm.form.get().columns
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.columns = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="rows">"Rows"</label>
                                <input
                                    id="rows"
                                    class="form__input"
                                    type="number"
                                    min="1"
                                    prop:value=move || vm.form.get().rows
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.rows = event_target_value(&ev));
                                    }
                                />
                            </div>
                        </div>
                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label" for="label-width">"Label width (mm)"</label>
                                <input
                                    id="label-width"
                                    class="form__input"
                                    type="number"
                                    step="0.1"
                                    prop:value=move || vm.form.get().label_width
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.label_width = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="label-height">"Label height (mm)"</label>
                                <input
                                    id="label-height"
                                    class="form__input"
                                    type="number"
                                    step="0.1"
                                    prop:value=move || vm.form.get().label_height
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.label_height = event_target_value(&ev));
                                    }
                                />
                            </div>
                        </div>
                        <div class="form__row">
                            <div class="form__checkbox-wrapper">
                                <input
                                    id="show-border"
                                    class="form__checkbox"
                                    type="checkbox"
                                    prop:checked=move || vm.form.get().show_border
                                    on:change=move |ev| {
                                        vm.form.update(|f| f.show_border = event_target_checked(&ev));
                                    }
                                />
                                <label class="form__checkbox-label" for="show-border">"Show border"</label>
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="border-width">"Border width"</label>
                                <input
                                    id="border-width"
                                    class="form__input"
                                    type="number"
                                    step="0.1"
                                    prop:value=move || vm.form.get().border_width
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.border_width = event_target_value(&ev));
                                    }
                                />
                            </div>
                        </div>
                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label" for="margin-top">"Margin top"</label>
                                <input
                                    id="margin-top"
                                    class="form__input"
                                    type="number"
                                    step="0.1"
                                    prop:value=move || vm.form.get().margin_top
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.margin_top = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="margin-bottom">"Margin bottom"</label>
                                <input
                                    id="margin-bottom"
                                    class="form__input"
                                    type="number"
                                    step="0.1"
                                    prop:value=move || vm.form.get().margin_bottom
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.margin_bottom = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="margin-left">"Margin left"</label>
                                <input
                                    id="margin-left"
                                    class="form__input"
                                    type="number"
                                    step="0.1"
                                    prop:value=move || vm.form.get().margin_left
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.margin_left = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="margin-right">"Margin right"</label>
                                <input
                                    id="margin-right"
                                    class="form__input"
                                    type="number"
                                    step="0.1"
                                    prop:value=move || vm.form.get().margin_right
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.margin_right = event_target_value(&ev));
                                    }
                                />
                            </div>
                        </div>
                    </div>

                    <div>
                        <h2 class="section-title">"Fonts"</h2>
                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label" for="title-font-name">"Title font"</label>
                                <input
                                    id="title-font-name"
                                    class="form__input"
                                    type="text"
                                    prop:value=move || vm.form.get().title_font_name
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.title_font_name = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="title-font-size">"Size"</label>
                                <input
                                    id="title-font-size"
                                    class="form__input"
                                    type="number"
                                    min="1"
                                    prop:value=move || vm.form.get().title_font_size
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.title_font_size = event_target_value(&ev));
                                    }
                                />
                            </div>
                        </div>
                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label" for="body-font-name">"Body font"</label>
                                <input
                                    id="body-font-name"
                                    class="form__input"
                                    type="text"
                                    prop:value=move || vm.form.get().body_font_name
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.body_font_name = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="body-font-size">"Size"</label>
                                <input
                                    id="body-font-size"
                                    class="form__input"
                                    type="number"
                                    min="1"
                                    prop:value=move || vm.form.get().body_font_size
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.body_font_size = event_target_value(&ev));
                                    }
                                />
                            </div>
                        </div>
                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label" for="cjk-font-name">"CJK font"</label>
                                <input
                                    id="cjk-font-name"
                                    class="form__input"
                                    type="text"
                                    prop:value=move || vm.form.get().cjk_font_name
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.cjk_font_name = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="cjk-font-size">"Size"</label>
                                <input
                                    id="cjk-font-size"
                                    class="form__input"
                                    type="number"
                                    min="1"
                                    prop:value=move || vm.form.get().cjk_font_size
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.cjk_font_size = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="cjk-font-file">"Font file"</label>
                                <input
                                    id="cjk-font-file"
                                    class="form__input"
                                    type="text"
                                    prop:value=move || vm.form.get().cjk_font_file
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.cjk_font_file = event_target_value(&ev));
                                    }
                                />
                            </div>
                        </div>
                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label" for="annotation-font-name">"Annotation font"</label>
                                <input
                                    id="annotation-font-name"
                                    class="form__input"
                                    type="text"
                                    prop:value=move || vm.form.get().annotation_font_name
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.annotation_font_name = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="annotation-font-size">"Size"</label>
                                <input
                                    id="annotation-font-size"
                                    class="form__input"
                                    type="number"
                                    min="1"
                                    prop:value=move || vm.form.get().annotation_font_size
                                    on:input=move |ev| {
                                        vm.form.update(|f| {
                                            f.annotation_font_size = event_target_value(&ev);
                                        });
                                    }
                                />
                            </div>
                        </div>
                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label" for="publication-font-name">"Publication font"</label>
                                <input
                                    id="publication-font-name"
                                    class="form__input"
                                    type="text"
                                    prop:value=move || vm.form.get().publication_font_name
                                    on:input=move |ev| {
                                        vm.form.update(|f| {
                                            f.publication_font_name = event_target_value(&ev);
                                        });
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="publication-font-size">"Size"</label>
                                <input
                                    id="publication-font-size"
                                    class="form__input"
                                    type="number"
                                    min="1"
                                    prop:value=move || vm.form.get().publication_font_size
                                    on:input=move |ev| {
                                        vm.form.update(|f| {
                                            f.publication_font_size = event_target_value(&ev);
                                        });
                                    }
                                />
                            </div>
                        </div>
                    </div>

                    <div>
                        <h2 class="section-title">"Colors"</h2>
                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label" for="text-color">"Text"</label>
                                <input
                                    id="text-color"
                                    class="form__input"
                                    type="color"
                                    prop:value=move || vm.form.get().text_color
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.text_color = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="title-color">"Title"</label>
                                <input
                                    id="title-color"
                                    class="form__input"
                                    type="color"
                                    prop:value=move || vm.form.get().title_color
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.title_color = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="body-color">"Body"</label>
                                <input
                                    id="body-color"
                                    class="form__input"
                                    type="color"
                                    prop:value=move || vm.form.get().body_color
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.body_color = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="border-color">"Border"</label>
                                <input
                                    id="border-color"
                                    class="form__input"
                                    type="color"
                                    prop:value=move || vm.form.get().border_color
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.border_color = event_target_value(&ev));
                                    }
                                />
                            </div>
                        </div>
                    </div>

                    <div>
                        <h2 class="section-title">"Custom Text"</h2>
                        <div class="form__group">
                            <label class="form__label" for="bulletin-text">"Bulletin text"</label>
                            <input
                                id="bulletin-text"
                                class="form__input"
                                type="text"
                                prop:value=move || vm.form.get().bulletin_text
                                on:input=move |ev| {
                                    vm.form.update(|f| f.bulletin_text = event_target_value(&ev));
                                }
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label" for="bulletin-number">"Bulletin number"</label>
                            <input
                                id="bulletin-number"
                                class="form__input"
                                type="text"
                                prop:value=move || vm.form.get().bulletin_number_text
                                on:input=move |ev| {
                                    vm.form.update(|f| f.bulletin_number_text = event_target_value(&ev));
                                }
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label" for="right-panel-text">"Right panel text"</label>
                            <textarea
                                id="right-panel-text"
                                class="form__textarea"
                                rows="3"
                                prop:value=move || vm.form.get().custom_right_panel_text
                                on:input=move |ev| {
                                    vm.form.update(|f| {
                                        f.custom_right_panel_text = event_target_value(&ev);
                                    });
                                }
                            ></textarea>
                        </div>
                    </div>

                    <div>
                        <h2 class="section-title">"Fields on Label"</h2>
                        <div class="checkbox-group">
                            <For
                                each=move || vm.form.get().fields
                                key=|toggle| toggle.key.clone()
                                children=move |toggle| {
                                    let display = toggle.display();
                                    let checkbox_id = format!("field-{}", toggle.key);
                                    let label_for = checkbox_id.clone();
                                    let key_for_checked = toggle.key.clone();
                                    let key_for_change = toggle.key.clone();
                                    let checked = move || {
                                        vm.form.with(|f| {
                                            f.fields
                                                .iter()
                                                .find(|t| t.key == key_for_checked)
                                                .map(|t| t.selected)
                                                .unwrap_or(false)
                                        })
                                    };
                                    view! {
                                        <div class="form__checkbox-wrapper">
                                            <input
                                                id=checkbox_id
                                                class="form__checkbox"
                                                type="checkbox"
                                                prop:checked=checked
                                                on:change=move |ev| {
                                                    let value = event_target_checked(&ev);
                                                    vm.form.update(|f| {
                                                        f.set_selected(&key_for_change, value);
                                                    });
                                                }
                                            />
                                            <label class="form__checkbox-label" for=label_for>
                                                {display}
                                            </label>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
