use yew::prelude::*;

use crate::components::layout::icon_plus;
use crate::model::{ExpenseDraft, DEFAULT_CATEGORIES};

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub draft: ExpenseDraft,
    pub editing: bool,
    pub currency_symbol: String,
    pub on_change: Callback<ExpenseDraft>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Controlled form; the page owns the draft so Edit can fill it in.
#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let field_input = |apply: fn(&mut ExpenseDraft, String)| {
        let draft = props.draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = draft.clone();
            apply(&mut next, input.value());
            on_change.emit(next);
        })
    };

    let on_category = {
        let draft = props.draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = draft.clone();
            next.category = select.value();
            on_change.emit(next);
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| on_submit.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    // keep a category from an older record selectable while editing it
    let mut categories: Vec<String> = DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect();
    if !props.draft.category.is_empty() && !categories.contains(&props.draft.category) {
        categories.push(props.draft.category.clone());
    }

    let input_class = "w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[12px] text-[#173E63] border-none";

    html! {
        <div class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50">
            <h4 class="text-[#1D617A] font-bold text-[15px] mb-3 tracking-wider">
                { if props.editing { "Edit Expense" } else { "Add New Expense" } }
            </h4>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-3 mb-4">
                <div class="space-y-1">
                    <label class="text-[12px] font-bold text-slate-500">{"Name"}</label>
                    <input type="text" placeholder="Expense name" value={props.draft.name.clone()}
                        oninput={field_input(|d, v| d.name = v)} class={input_class} />
                </div>
                <div class="space-y-1">
                    <label class="text-[12px] font-bold text-slate-500">{ format!("Amount ({})", props.currency_symbol) }</label>
                    <input type="number" step="0.01" min="0" placeholder="0.00" value={props.draft.amount.clone()}
                        oninput={field_input(|d, v| d.amount = v)} class={input_class} />
                </div>
                <div class="space-y-1">
                    <label class="text-[12px] font-bold text-slate-500">{"Category"}</label>
                    <select onchange={on_category} class={input_class}>
                        <option value="" selected={props.draft.category.is_empty()}>{"Select a category"}</option>
                        { for categories.iter().map(|category| html! {
                            <option value={category.clone()} selected={*category == props.draft.category}>{ category.clone() }</option>
                        }) }
                    </select>
                </div>
                <div class="space-y-1">
                    <label class="text-[12px] font-bold text-slate-500">{"Date"}</label>
                    <input type="date" value={props.draft.date.clone()}
                        oninput={field_input(|d, v| d.date = v)} class={input_class} />
                </div>
            </div>
            <div class="flex gap-3">
                <button type="button" onclick={on_submit} class="flex-1 bg-[#173E63] text-white py-2 rounded-[10px] text-[11px] font-bold flex items-center justify-center gap-2">
                    { icon_plus() }
                    { if props.editing { "Save Changes" } else { "Add Expense" } }
                </button>
                <button type="button" onclick={on_cancel} class="flex-1 bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-[11px] font-bold">
                    { if props.editing { "Cancel" } else { "Clear" } }
                </button>
            </div>
        </div>
    }
}
