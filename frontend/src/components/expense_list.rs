use yew::prelude::*;

use crate::format::format_currency;
use crate::model::{Expense, DATE_FORMAT};
use crate::query::SortOrder;

#[derive(Properties, PartialEq)]
pub struct ListControlsProps {
    pub filter_start: String,
    pub filter_end: String,
    pub sort: Option<SortOrder>,
    pub filtered: bool,
    pub on_sort: Callback<SortOrder>,
    pub on_filter_start: Callback<String>,
    pub on_filter_end: Callback<String>,
    pub on_apply: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(ListControls)]
pub fn list_controls(props: &ListControlsProps) -> Html {
    let sort_button = |order: SortOrder, label: &'static str| {
        let on_sort = props.on_sort.clone();
        let class_name = if props.sort == Some(order) {
            "px-3 py-2 rounded-[10px] text-[11px] font-bold bg-[#173E63] text-white"
        } else {
            "px-3 py-2 rounded-[10px] text-[11px] font-bold bg-[#B2CBDE] text-[#173E63]"
        };
        html! {
            <button type="button" class={class_name} onclick={Callback::from(move |_| on_sort.emit(order))}>{ label }</button>
        }
    };

    let date_input = |callback: &Callback<String>| {
        let callback = callback.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.value());
        })
    };

    let on_apply = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |_| on_apply.emit(()))
    };
    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_| on_reset.emit(()))
    };

    let input_class = "bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none";

    html! {
        <div class="flex flex-wrap items-end gap-4">
            <div class="flex gap-2">
                { sort_button(SortOrder::Ascending, "Sort by Date ↑") }
                { sort_button(SortOrder::Descending, "Sort by Date ↓") }
            </div>
            <div class="flex flex-wrap items-end gap-2">
                <div class="space-y-1">
                    <label class="block text-[11px] font-bold text-slate-500">{"From"}</label>
                    <input type="date" value={props.filter_start.clone()} oninput={date_input(&props.on_filter_start)} class={input_class} />
                </div>
                <div class="space-y-1">
                    <label class="block text-[11px] font-bold text-slate-500">{"To"}</label>
                    <input type="date" value={props.filter_end.clone()} oninput={date_input(&props.on_filter_end)} class={input_class} />
                </div>
                <button type="button" onclick={on_apply} class="px-3 py-2 rounded-[10px] text-[11px] font-bold bg-[#173E63] text-white">{"Apply Filter"}</button>
                <button type="button" onclick={on_reset} class="px-3 py-2 rounded-[10px] text-[11px] font-bold bg-[#B2CBDE] text-[#173E63]">{"Reset"}</button>
                {
                    if props.filtered {
                        html! { <span class="text-[11px] text-slate-500">{"Filtered"}</span> }
                    } else { html!{} }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub expenses: Vec<Expense>,
    pub total: f64,
    pub currency_symbol: String,
    pub editing: Option<i64>,
    pub on_edit: Callback<i64>,
    pub on_delete: Callback<i64>,
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    html! {
        <div class="bg-white rounded-2xl shadow-md border border-slate-200 overflow-hidden">
            <div class="p-5 border-b border-slate-200 flex items-center justify-between">
                <h3 class="font-bold text-lg text-[#173E63]">{"Expenses"}</h3>
                <span class="text-sm text-slate-500">
                    {"Total: "}
                    <span class="font-bold text-[#1D617A]">{ format_currency(props.total, &props.currency_symbol) }</span>
                </span>
            </div>
            <div class="overflow-x-auto">
                <table class="w-full text-left border-collapse">
                    <thead>
                        <tr class="bg-slate-50 text-slate-500 text-[10px] uppercase tracking-widest">
                            <th class="px-8 py-4 font-bold">{"Date"}</th>
                            <th class="px-8 py-4 font-bold">{"Name"}</th>
                            <th class="px-8 py-4 font-bold">{"Category"}</th>
                            <th class="px-8 py-4 font-bold">{"Amount"}</th>
                            <th class="px-8 py-4 font-bold">{"Action"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-200">
                        { if props.expenses.is_empty() {
                            html! { <tr><td colspan="5" class="px-8 py-6 text-center text-slate-500">{"No expenses to show."}</td></tr> }
                        } else {
                            html! {
                                <>
                                    { for props.expenses.iter().map(|item| {
                                        let id = item.id;
                                        let on_edit = props.on_edit.clone();
                                        let on_delete = props.on_delete.clone();
                                        let row_class = if props.editing == Some(id) {
                                            "text-sm bg-[#eef4f9]"
                                        } else {
                                            "text-sm hover:bg-slate-50 transition-colors"
                                        };
                                        html! {
                                            <tr key={id.to_string()} class={row_class}>
                                                <td class="px-8 py-4 text-slate-500">{ item.date.format(DATE_FORMAT).to_string() }</td>
                                                <td class="px-8 py-4 text-[#173E63]">{ item.name.clone() }</td>
                                                <td class="px-8 py-4">
                                                    <span class="bg-[#dae3f0] text-[#173E63] px-3 py-1 rounded-full text-[10px] font-bold">{ item.category.clone() }</span>
                                                </td>
                                                <td class="px-8 py-4 font-semibold text-[#173E63]">{ format_currency(item.amount, &props.currency_symbol) }</td>
                                                <td class="px-8 py-4 space-x-2">
                                                    <button type="button" class="text-[11px] font-bold text-[#1D617A] hover:underline" onclick={Callback::from(move |_| on_edit.emit(id))}>{"Edit"}</button>
                                                    <button type="button" class="text-[11px] font-bold text-red-600 hover:underline" onclick={Callback::from(move |_| on_delete.emit(id))}>{"Delete"}</button>
                                                </td>
                                            </tr>
                                        }
                                    }) }
                                </>
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
