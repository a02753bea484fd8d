use chrono::Utc;
use yew::prelude::*;

use crate::components::{
    page_shell, CategorySummary, ExpenseForm, ExpenseList, Layout, ListControls, Page, PieChart,
    SettingsPage,
};
use crate::model::ExpenseDraft;
use crate::query::{DateRange, ListOptions, SortOrder};
use crate::settings::{load_settings, AppSettings};
use crate::storage::BrowserStorage;
use crate::store::{total, ExpenseStore};

const INVALID_INPUT_MESSAGE: &str = "Please fill in all required fields correctly.";

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component(TrackerPage)]
fn tracker_page() -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let currency_symbol = settings
        .as_ref()
        .map(|s| s.currency_symbol.clone())
        .unwrap_or_else(|| AppSettings::default().currency_symbol);

    let store = use_state(|| ExpenseStore::load(BrowserStorage));
    let draft = use_state(ExpenseDraft::default);
    let editing = use_state(|| None::<i64>);

    let filter_start = use_state(String::new);
    let filter_end = use_state(String::new);
    let options = use_state(ListOptions::default);

    let on_draft_change = {
        let draft = draft.clone();
        Callback::from(move |next: ExpenseDraft| draft.set(next))
    };

    let on_submit = {
        let store = store.clone();
        let draft = draft.clone();
        let editing = editing.clone();
        Callback::from(move |_| {
            let mut next = (*store).clone();
            let result = match *editing {
                Some(id) => next.update(id, &draft).map(|_| ()),
                None => next.add(&draft, Utc::now()).map(|_| ()),
            };

            match result {
                Ok(()) => {
                    store.set(next);
                    draft.set(ExpenseDraft::default());
                    editing.set(None);
                }
                Err(err) => {
                    tracing::warn!(%err, "rejected expense form");
                    alert(INVALID_INPUT_MESSAGE);
                }
            }
        })
    };

    let on_cancel = {
        let draft = draft.clone();
        let editing = editing.clone();
        Callback::from(move |_| {
            draft.set(ExpenseDraft::default());
            editing.set(None);
        })
    };

    let on_edit = {
        let store = store.clone();
        let draft = draft.clone();
        let editing = editing.clone();
        Callback::from(move |id: i64| {
            if let Some(expense) = store.get(id) {
                draft.set(ExpenseDraft::from_expense(expense));
                editing.set(Some(id));
            }
        })
    };

    let on_delete = {
        let store = store.clone();
        let draft = draft.clone();
        let editing = editing.clone();
        Callback::from(move |id: i64| {
            let mut next = (*store).clone();
            if next.delete(id).is_some() {
                store.set(next);
            }
            if *editing == Some(id) {
                draft.set(ExpenseDraft::default());
                editing.set(None);
            }
        })
    };

    let on_sort = {
        let options = options.clone();
        Callback::from(move |order: SortOrder| {
            options.set(ListOptions {
                sort: Some(order),
                ..*options
            });
        })
    };

    let on_filter_start = {
        let filter_start = filter_start.clone();
        Callback::from(move |value: String| filter_start.set(value))
    };
    let on_filter_end = {
        let filter_end = filter_end.clone();
        Callback::from(move |value: String| filter_end.set(value))
    };

    let on_apply = {
        let options = options.clone();
        let filter_start = filter_start.clone();
        let filter_end = filter_end.clone();
        Callback::from(move |_| {
            options.set(ListOptions {
                filter: Some(DateRange::parse(&filter_start, &filter_end)),
                ..*options
            });
        })
    };

    let on_reset = {
        let options = options.clone();
        let filter_start = filter_start.clone();
        let filter_end = filter_end.clone();
        Callback::from(move |_| {
            filter_start.set(String::new());
            filter_end.set(String::new());
            options.set(ListOptions {
                filter: None,
                ..*options
            });
        })
    };

    let view = store.list(&options);
    let view_total = total(&view);
    let visible = view.into_iter().cloned().collect::<Vec<_>>();
    let category_totals = store.aggregate_by_category();

    html! {
        { page_shell(
            "Expense Tracker",
            html! {
                <span class="text-sm text-slate-500">{ format!("{} recorded", store.len()) }</span>
            },
            html! {
                <>
                    <ExpenseForm
                        draft={(*draft).clone()}
                        editing={editing.is_some()}
                        currency_symbol={currency_symbol.clone()}
                        on_change={on_draft_change}
                        on_submit={on_submit}
                        on_cancel={on_cancel}
                    />

                    <ListControls
                        filter_start={(*filter_start).clone()}
                        filter_end={(*filter_end).clone()}
                        sort={options.sort}
                        filtered={options.filter.is_some()}
                        on_sort={on_sort}
                        on_filter_start={on_filter_start}
                        on_filter_end={on_filter_end}
                        on_apply={on_apply}
                        on_reset={on_reset}
                    />

                    <ExpenseList
                        expenses={visible}
                        total={view_total}
                        currency_symbol={currency_symbol.clone()}
                        editing={*editing}
                        on_edit={on_edit}
                        on_delete={on_delete}
                    />

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <CategorySummary totals={category_totals.clone()} currency_symbol={currency_symbol.clone()} />
                        <PieChart totals={category_totals} currency_symbol={currency_symbol} />
                    </div>
                </>
            }
        ) }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let active_page = use_state(|| Page::Tracker);
    let settings = use_state(|| load_settings(&BrowserStorage));
    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let content = match *active_page {
        Page::Tracker => html! { <TrackerPage /> },
        Page::Settings => html! { <SettingsPage /> },
    };

    html! {
        <ContextProvider<UseStateHandle<AppSettings>> context={settings}>
            <Layout active_page={*active_page} on_select={on_select}>
                { content }
            </Layout>
        </ContextProvider<UseStateHandle<AppSettings>>>
    }
}
