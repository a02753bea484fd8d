use yew::prelude::*;

use crate::components::layout::page_shell;
use crate::settings::{save_settings, AppSettings, CURRENCIES};
use crate::storage::BrowserStorage;

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();

    let current_currency = settings
        .as_ref()
        .map(|s| s.currency_code.clone())
        .unwrap_or_else(|| AppSettings::default().currency_code);

    let on_currency_change = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            if let Some(settings) = settings.as_ref() {
                let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
                let next = AppSettings::for_currency(&input.value());
                tracing::debug!(currency = %next.currency_code, "currency changed");
                save_settings(&BrowserStorage, &next);
                settings.set(next);
            }
        })
    };

    html! {
        { page_shell(
            "Settings",
            html! {},
            html! {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div class="bg-white rounded-lg p-6 border border-slate-200">
                        <h2 class="text-xl font-bold text-[#173E63] mb-6">{"Preferences"}</h2>
                        <div class="space-y-4">
                            <div>
                                <label class="block text-sm font-medium text-[#173E63] mb-2">{"Currency"}</label>
                                <select onchange={on_currency_change} class="w-full px-4 py-2 bg-[#f1f4f9] border border-slate-200 rounded-lg text-[#173E63] focus:outline-none focus:ring-2 focus:ring-[#173E63]">
                                    { for CURRENCIES.iter().map(|(code, label)| html! {
                                        <option value={*code} selected={*code == current_currency}>{ *label }</option>
                                    }) }
                                </select>
                                <p class="text-xs text-slate-500 mt-2">{"Amounts across the tracker are shown in this currency."}</p>
                            </div>
                        </div>
                    </div>
                </div>
            }
        ) }
    }
}
