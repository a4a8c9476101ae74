use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: AttrValue,
}

#[function_component(BusinessIcon)]
pub fn business_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.to_string()} viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M19 5H5C3.9 5 3 5.9 3 7V17C3 18.1 3.9 19 5 19H19C20.1 19 21 18.1 21 17V7C21 5.9 20.1 5 19 5Z" />
            <path d="M3 7H21" />
            <path d="M16 21H8C6.9 21 6 20.1 6 19C6 17.9 6.9 17 8 17H16C17.1 17 18 17.9 18 19C18 20.1 17.1 21 16 21Z" />
            <path d="M16 21V19C16 17.9 15.1 17 14 17H10C8.9 17 8 17.9 8 19V21" />
        </svg>
    }
}

#[function_component(AuditIcon)]
pub fn audit_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.to_string()} viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M12 9V11M12 15H12.01M8 21H16C18.76 21 21 18.76 21 16V8C21 5.24 18.76 3 16 3H8C5.24 3 3 5.24 3 8V16C3 18.76 5.24 21 8 21Z" />
        </svg>
    }
}

#[function_component(StrategyIcon)]
pub fn strategy_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.to_string()} viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M19 21H5C3.9 21 3 20.1 3 19V5C3 3.9 3.9 3 5 3H19C20.1 3 21 3.9 21 5V19C21 20.1 20.1 21 19 21Z" />
            <path d="M8 7H16M8 11H16M8 15H16" />
        </svg>
    }
}

#[function_component(GrowthIcon)]
pub fn growth_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.to_string()} viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M16 20L12 16M12 16L8 20M12 16L12 4" />
        </svg>
    }
}

#[function_component(SupportIcon)]
pub fn support_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.to_string()} viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M20 21C20 18.17 18.83 15.13 17 13.1C15.18 11.07 12.64 10 10 10C7.36 10 4.83 11.07 3 13.1C1.18 15.13 0 18.17 0 21M16 8C16 10.21 14.21 12 12 12C9.79 12 8 10.21 8 8C8 5.79 9.79 4 12 4C14.21 4 16 5.79 16 8Z" />
        </svg>
    }
}

#[function_component(QuoteIcon)]
pub fn quote_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.to_string()} viewBox="0 0 24 24" fill="currentColor">
            <path d="M14.017 21v-7.391c0-5.704 3.731-9.57 8.983-10.609l.995 2.151c-2.432.917-3.995 3.638-3.995 5.849h4v10h-9.983zm-14.017 0v-7.391c0-5.704 3.748-9.57 9-10.609l.996 2.151c-2.433.917-3.996 3.638-3.996 5.849h3.983v10h-9.983z" />
        </svg>
    }
}

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <svg class="spinner" viewBox="0 0 24 24" fill="none">
            <circle class="spinner-track" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
            <path class="spinner-head" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"></path>
        </svg>
    }
}
