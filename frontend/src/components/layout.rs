use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum Page {
    Tracker,
    Settings,
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active_page: Page,
    pub on_select: Callback<Page>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex h-screen bg-slate-100">
            <div class="hidden md:flex">
                <Sidebar active_page={props.active_page} on_select={props.on_select.clone()} />
            </div>

            <div class="flex-1 flex flex-col overflow-hidden">
                <MobileNav active_page={props.active_page} on_select={props.on_select.clone()} />
                <main class="flex-1 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "Expense Tracker",
            page: Page::Tracker,
            icon: icon_credit_card,
        },
        NavItem {
            label: "Settings",
            page: Page::Settings,
            icon: icon_settings,
        },
    ]
}

#[derive(Properties, PartialEq)]
struct NavProps {
    active_page: Page,
    on_select: Callback<Page>,
}

/// Top bar shown below the `md` breakpoint, where the sidebar is hidden.
#[function_component(MobileNav)]
fn mobile_nav(props: &NavProps) -> Html {
    html! {
        <nav class="md:hidden flex items-center gap-2 bg-[#173E63] px-3 py-2">
            { for nav_items().iter().map(|item| {
                let class_name = if item.page == props.active_page {
                    "flex items-center gap-2 px-3 py-2 rounded-xl text-[12px] font-medium bg-[#B2CBDE] text-[#173E63]"
                } else {
                    "flex items-center gap-2 px-3 py-2 rounded-xl text-[12px] font-medium text-slate-300"
                };
                let on_select = props.on_select.clone();
                let page = item.page;

                html! {
                    <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                        { (item.icon)() }
                        <span>{ item.label }</span>
                    </button>
                }
            }) }
        </nav>
    }
}

#[function_component(Sidebar)]
fn sidebar(props: &NavProps) -> Html {
    let nav_items = nav_items();

    html! {
        <div class="w-[220px] h-screen bg-[#D8E1E8] p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-8">
                <div class="w-12 h-12 bg-[#173E63] rounded-full flex items-center justify-center text-white">
                    { icon_wallet() }
                </div>
                <span class="text-[#173E63] text-xl font-black tracking-tight">{"Expenses"}</span>
            </div>

            <div class="flex-1 bg-[#173E63] rounded-[24px] flex flex-col py-6 px-3 shadow-lg">
                <nav class="flex-1 space-y-2">
                    { for nav_items.iter().map(|item| {
                        let is_active = item.page == props.active_page;
                        let class_name = if is_active {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-[#B2CBDE] text-[#173E63] w-full"
                        } else {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full"
                        };
                        let on_select = props.on_select.clone();
                        let page = item.page;

                        html! {
                            <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                                <span class="shrink-0">{ (item.icon)() }</span>
                                <span class="truncate whitespace-nowrap text-left">{ item.label }</span>
                            </button>
                        }
                    }) }
                </nav>
            </div>
        </div>
    }
}

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-slate-300">
                <h1 class="text-2xl font-bold text-[#173E63]">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
pub fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
pub fn icon_settings() -> Html {
    icon_base("M12 1v3M12 20v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M1 12h3M20 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
pub fn icon_pie_chart() -> Html {
    icon_base("M21.2 15.9A10 10 0 118 2.8M22 12A10 10 0 0012 2v10z")
}
