use shared::CategoryFilter;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryTabsProps {
    pub selected: CategoryFilter,
    pub on_select: Callback<CategoryFilter>,
}

#[function_component(CategoryTabs)]
pub fn category_tabs(props: &CategoryTabsProps) -> Html {
    html! {
        <div class="category-tabs" role="tablist">
            {for CategoryFilter::tabs().map(|tab| {
                let is_active = tab == props.selected;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(tab))
                };

                html! {
                    <button
                        type="button"
                        role="tab"
                        class={classes!("category-tab", is_active.then_some("active"))}
                        aria-selected={is_active.to_string()}
                        {onclick}
                    >
                        {tab.tab_key()}
                    </button>
                }
            })}
        </div>
    }
}
