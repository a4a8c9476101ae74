use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BenefitCardProps {
    pub icon: Html,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(BenefitCard)]
pub fn benefit_card(props: &BenefitCardProps) -> Html {
    html! {
        <div class="benefit-card">
            <div class="benefit-icon">
                <div class="benefit-icon-glow"></div>
                { props.icon.clone() }
            </div>
            <div>
                <p class="benefit-title">{ &*props.title }</p>
                <p class="benefit-description">{ &*props.description }</p>
            </div>
        </div>
    }
}
