use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use log::{debug, error, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::Spinner;
use crate::config;
use crate::lead::form::{FormField, LeadForm, SubmitOutcome};
use crate::lead::submission::LeadSubmission;

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    #[prop_or(config::SUBMIT_DELAY_MS)]
    pub submit_delay_ms: u32,
}

pub enum LeadFormMsg {
    UpdateField(FormField, String),
    Submit,
    SubmissionCompleted,
}

pub struct LeadFormSection {
    form: LeadForm,
}

impl Component for LeadFormSection {
    type Message = LeadFormMsg;
    type Properties = LeadFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: LeadForm::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LeadFormMsg::UpdateField(field, value) => {
                self.form.update_field(field, value);
                true
            }
            LeadFormMsg::Submit => match self.form.submit() {
                Ok(SubmitOutcome::Started) => {
                    info!("Lead form submitted, confirming in {}ms", ctx.props().submit_delay_ms);
                    match LeadSubmission::from_fields(self.form.fields(), Utc::now()).to_json() {
                        Ok(payload) => debug!("Lead payload: {}", payload),
                        Err(e) => error!("Failed to serialize lead payload: {}", e),
                    }

                    let delay = ctx.props().submit_delay_ms;
                    ctx.link().send_future(async move {
                        TimeoutFuture::new(delay).await;
                        LeadFormMsg::SubmissionCompleted
                    });
                    true
                }
                Ok(SubmitOutcome::Ignored) => {
                    debug!("Submit ignored in state {:?}", self.form.state());
                    false
                }
                Err(e) => {
                    warn!("Lead form rejected, missing fields: {:?}", e.missing);
                    true
                }
            },
            LeadFormMsg::SubmissionCompleted => {
                let changed = self.form.complete_submission();
                if changed {
                    info!("Lead submission confirmed");
                }
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.form.is_submitted() {
            return self.render_confirmation();
        }

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            LeadFormMsg::Submit
        });
        let submitting = self.form.is_submitting();

        html! {
            <form class="lead-form" {onsubmit}>
                <h3>{"Reservá tu sesión estratégica"}</h3>
                <p class="lead-form-subtitle">{"Cupos limitados disponibles cada semana"}</p>

                if let Some(error) = self.form.error() {
                    <div class="lead-form-error">{ error }</div>
                }

                <div class="lead-form-grid">
                    { for FormField::ALL.into_iter()
                        .filter(|field| *field != FormField::Reto)
                        .map(|field| self.render_input(ctx, field)) }
                </div>
                { self.render_textarea(ctx, FormField::Reto) }

                <button
                    type="submit"
                    class={classes!("lead-form-submit", submitting.then(|| "loading"))}
                    disabled={submitting}
                >
                    if submitting {
                        <Spinner />
                        {"Enviando..."}
                    } else {
                        {"Agendar sesión estratégica"}
                    }
                </button>
                <p class="lead-form-note">
                    {"*Solo para responsables de toma de decisiones que buscan resultados reales."}
                </p>
            </form>
        }
    }
}

impl LeadFormSection {
    fn render_input(&self, ctx: &Context<Self>, field: FormField) -> Html {
        html! {
            <input
                required={true}
                name={field.name()}
                type={field.input_type()}
                placeholder={field.placeholder()}
                value={self.form.fields().get(field).to_string()}
                oninput={Self::on_field_input::<HtmlInputElement>(ctx)}
            />
        }
    }

    fn render_textarea(&self, ctx: &Context<Self>, field: FormField) -> Html {
        html! {
            <textarea
                required={true}
                name={field.name()}
                rows="3"
                placeholder={field.placeholder()}
                value={self.form.fields().get(field).to_string()}
                oninput={Self::on_field_input::<HtmlTextAreaElement>(ctx)}
            />
        }
    }

    /// The element's `name` attribute decides which field is updated.
    fn on_field_input<E>(ctx: &Context<Self>) -> Callback<InputEvent>
    where
        E: FieldElement + JsCast + AsRef<EventTarget> + 'static,
    {
        ctx.link().batch_callback(|e: InputEvent| {
            let element: E = e.target_unchecked_into();
            FormField::from_name(&element.field_name())
                .map(|field| LeadFormMsg::UpdateField(field, element.field_value()))
        })
    }

    fn render_confirmation(&self) -> Html {
        html! {
            <div class="lead-form-confirmation">
                {"¡Agenda confirmada! En breve recibirás los detalles en tu correo."}
                <br />
                {"Si necesitás reprogramar, avísame por "}
                <a href={config::WHATSAPP_URL}>{"WhatsApp"}</a>
                {"."}
                <span class="lead-form-confirmation-note">
                    {"Prepárate para una sesión directa, enfocada en resultados y sin rodeos."}
                </span>
            </div>
        }
    }
}

trait FieldElement {
    fn field_name(&self) -> String;
    fn field_value(&self) -> String;
}

impl FieldElement for HtmlInputElement {
    fn field_name(&self) -> String {
        self.name()
    }

    fn field_value(&self) -> String {
        self.value()
    }
}

impl FieldElement for HtmlTextAreaElement {
    fn field_name(&self) -> String {
        self.name()
    }

    fn field_value(&self) -> String {
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_comes_from_config() {
        let props = yew::props!(LeadFormProps {});
        assert_eq!(props.submit_delay_ms, config::SUBMIT_DELAY_MS);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::lead::form::MISSING_FIELDS_MESSAGE;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, EventInit, HtmlButtonElement};

    wasm_bindgen_test_configure!(run_in_browser);

    const DELAY_MS: u32 = 200;

    fn mount() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<LeadFormSection>::with_root_and_props(
            root.clone(),
            LeadFormProps { submit_delay_ms: DELAY_MS },
        )
        .render();
        root
    }

    fn fire(target: &Element, kind: &str) {
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict(kind, &init).unwrap();
        target.dispatch_event(&event).unwrap();
    }

    fn field(root: &Element, field: FormField) -> Element {
        root.query_selector(&format!("[name={}]", field.name()))
            .unwrap()
            .unwrap()
    }

    async fn type_into(root: &Element, name: FormField, value: &str) {
        let element = field(root, name);
        match name {
            FormField::Reto => element.unchecked_ref::<HtmlTextAreaElement>().set_value(value),
            _ => element.unchecked_ref::<HtmlInputElement>().set_value(value),
        }
        fire(&element, "input");
        settle(0).await;
    }

    async fn submit(root: &Element) {
        fire(&root.query_selector("form").unwrap().unwrap(), "submit");
        settle(0).await;
    }

    async fn settle(ms: u32) {
        TimeoutFuture::new(ms + 10).await;
    }

    #[wasm_bindgen_test]
    async fn empty_form_shows_the_error_and_stays_open() {
        let root = mount();
        settle(0).await;

        submit(&root).await;

        let error = root.query_selector(".lead-form-error").unwrap().unwrap();
        assert_eq!(error.text_content().unwrap(), MISSING_FIELDS_MESSAGE);
        assert!(root.query_selector("form").unwrap().is_some());
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn typed_values_reach_the_form() {
        let root = mount();
        settle(0).await;

        type_into(&root, FormField::Correo, "a@a.com").await;
        type_into(&root, FormField::Reto, "growth").await;

        let correo = field(&root, FormField::Correo);
        assert_eq!(correo.unchecked_ref::<HtmlInputElement>().value(), "a@a.com");
        let reto = field(&root, FormField::Reto);
        assert_eq!(reto.unchecked_ref::<HtmlTextAreaElement>().value(), "growth");
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn complete_form_confirms_only_after_the_delay() {
        let root = mount();
        settle(0).await;

        for (name, value) in [
            (FormField::Nombre, "Ana"),
            (FormField::Cargo, "CEO"),
            (FormField::Empresa, "Acme"),
            (FormField::Telefono, "555"),
            (FormField::Correo, "a@a.com"),
            (FormField::Reto, "growth"),
        ] {
            type_into(&root, name, value).await;
        }

        submit(&root).await;
        let button = root.query_selector(".lead-form-submit").unwrap().unwrap();
        assert!(button.unchecked_ref::<HtmlButtonElement>().disabled());
        assert!(button.text_content().unwrap().contains("Enviando..."));
        assert!(root.query_selector(".lead-form-error").unwrap().is_none());

        // A second submit while in flight changes nothing.
        submit(&root).await;
        assert!(root.query_selector(".lead-form-confirmation").unwrap().is_none());

        settle(DELAY_MS).await;
        assert!(root.query_selector(".lead-form-confirmation").unwrap().is_some());
        assert!(root.query_selector("form").unwrap().is_none());
        root.remove();
    }
}
