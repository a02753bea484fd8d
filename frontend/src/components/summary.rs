use yew::prelude::*;

use crate::chart::{pie_slices, RADIUS, VIEW_SIZE};
use crate::components::layout::icon_pie_chart;
use crate::format::format_currency;
use crate::store::CategoryTotal;

#[derive(Properties, PartialEq)]
pub struct CategorySummaryProps {
    pub totals: Vec<CategoryTotal>,
    pub currency_symbol: String,
}

#[function_component(CategorySummary)]
pub fn category_summary(props: &CategorySummaryProps) -> Html {
    html! {
        <div class="bg-white rounded-[10px] p-6 border border-slate-200">
            <div class="flex items-center gap-2 mb-4">
                <div class="p-1.5 bg-[#f1f5f9] rounded-lg">{ icon_pie_chart() }</div>
                <h3 class="font-bold text-[#173E63] text-lg">{"Expense Summary"}</h3>
            </div>
            { if props.totals.is_empty() {
                html! { <p class="text-sm text-slate-500">{"Add expenses to see totals by category."}</p> }
            } else {
                html! {
                    <ul class="space-y-2">
                        { for props.totals.iter().map(|total| html! {
                            <li class="flex items-center justify-between text-sm">
                                <span class="text-slate-500">{ total.category.clone() }</span>
                                <span class="font-semibold text-[#173E63]">{ format_currency(total.amount, &props.currency_symbol) }</span>
                            </li>
                        }) }
                    </ul>
                }
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub totals: Vec<CategoryTotal>,
    pub currency_symbol: String,
}

#[function_component(PieChart)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    let slices = pie_slices(&props.totals);
    let center = (VIEW_SIZE / 2.0).to_string();

    html! {
        <div class="bg-white rounded-[10px] p-6 border border-slate-200">
            <h3 class="font-bold text-[#173E63] text-lg mb-4">{"Expenses by Category"}</h3>
            { if slices.is_empty() {
                html! { <p class="text-sm text-slate-500">{"Nothing to chart yet."}</p> }
            } else {
                html! {
                    <div class="flex flex-col sm:flex-row items-center gap-6">
                        <svg class="w-48 h-48" viewBox={format!("0 0 {} {}", VIEW_SIZE, VIEW_SIZE)}>
                            { for slices.iter().map(|slice| {
                                let title = format!(
                                    "{}: {} ({:.1}%)",
                                    slice.label,
                                    format_currency(slice.value, &props.currency_symbol),
                                    slice.fraction * 100.0
                                );
                                if slice.is_full_circle() {
                                    html! {
                                        <circle cx={center.clone()} cy={center.clone()} r={RADIUS.to_string()} fill={slice.color}>
                                            <title>{ title }</title>
                                        </circle>
                                    }
                                } else {
                                    html! {
                                        <path d={slice.path.clone()} fill={slice.color} stroke="#ffffff" stroke-width="1">
                                            <title>{ title }</title>
                                        </path>
                                    }
                                }
                            }) }
                        </svg>
                        <ul class="space-y-1">
                            { for slices.iter().map(|slice| html! {
                                <li class="flex items-center gap-2 text-sm text-slate-600">
                                    <span class="inline-block w-3 h-3 rounded-sm" style={format!("background-color: {}", slice.color)}></span>
                                    <span>{ slice.label.clone() }</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                }
            }}
        </div>
    }
}
