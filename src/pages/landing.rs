use log::info;
use yew::prelude::*;

use crate::components::benefit_card::BenefitCard;
use crate::components::icons::{
    AuditIcon, BusinessIcon, GrowthIcon, QuoteIcon, StrategyIcon, SupportIcon,
};
use crate::components::lead_form::LeadFormSection;
use crate::config;
use crate::visibility::observer::use_region_visibility;
use crate::visibility::regions::Region;

#[function_component(Landing)]
pub fn landing() -> Html {
    let seen = use_region_visibility(config::VISIBILITY_THRESHOLD);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            info!("Landing page mounted");
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || info!("Landing page unmounted")
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>{ LANDING_CSS }</style>
            <header class="top-bar">
                <div class="top-bar-logos">
                    <img src="https://escaladeventas.site/logo.png" alt="Escaladeventas Logo" />
                    <span class="top-bar-x">{"x"}</span>
                    <img src="https://iaparanegocios.com/logo.png" alt="IAParaNegocios Logo" />
                </div>
                <a href={format!("#{}", Region::Formulario.id())} class="top-bar-cta">
                    {"Agenda tu sesión"}
                </a>
            </header>

            <section id={Region::Hero.id()} class={seen.fade_classes(Region::Hero, "hero")}>
                <div class="hero-content">
                    <h1>
                        {"¿Listo para "}<span class="highlight">{"transformar"}</span>
                        {" los resultados de tu empresa?"}
                    </h1>
                    <p>
                        {"Reservá tu sesión estratégica personalizada con "}
                        <strong>{"Jhon Mario Hernández"}</strong>
                        <br />
                        {"Solo para dueños de empresa, gerentes y líderes que buscan soluciones reales, no más promesas vacías."}
                    </p>
                    <a href={format!("#{}", Region::Formulario.id())} class="hero-cta">{"Reservar ahora"}</a>
                </div>
                <div class="hero-art">
                    <div class="hero-art-glow"></div>
                    <BusinessIcon class="hero-art-icon" />
                </div>
            </section>

            <section id={Region::Autoridad.id()} class={seen.fade_classes(Region::Autoridad, "authority")}>
                <div class="panel">
                    <h2>{"Autoridad y resultados comprobados"}</h2>
                    <p>
                        {"He ayudado a empresas en Colombia y Latinoamérica a duplicar sus leads, reducir su costo de adquisición y escalar ventas automatizando procesos clave. Trabajo con resultados reales, no con teorías."}
                    </p>
                    <div class="authority-grid">
                        { authority_item("Duplicamos leads", "Calificados en menos de 60 días") }
                        { authority_item("Reducimos costos", "Costo por venta en servicios y retail") }
                        { authority_item("Automatizamos", "Procesos comerciales con IA") }
                    </div>
                </div>
            </section>

            <section id={Region::Beneficios.id()} class={seen.fade_classes(Region::Beneficios, "benefits")}>
                <h2>{"Beneficios claros y diferenciadores"}</h2>
                <div class="benefits-grid">
                    <BenefitCard
                        icon={html! { <AuditIcon class="benefit-svg" /> }}
                        title="Auditoría rápida"
                        description="Detectá fugas de dinero y oportunidades reales en tu proceso actual"
                    />
                    <BenefitCard
                        icon={html! { <StrategyIcon class="benefit-svg" /> }}
                        title="Estrategias personalizadas"
                        description="Plan a medida según tu sector y momento de negocio"
                    />
                    <BenefitCard
                        icon={html! { <GrowthIcon class="benefit-svg" /> }}
                        title="Escalamiento sin aumentar presupuesto"
                        description="Crecé en ventas sin gastar más en pauta"
                    />
                    <BenefitCard
                        icon={html! { <SupportIcon class="benefit-svg" /> }}
                        title="Casos reales y soporte experto"
                        description="Acceso prioritario a experiencias reales y acompañamiento"
                    />
                </div>
            </section>

            <section id={Region::Testimonio.id()} class={seen.fade_classes(Region::Testimonio, "testimonial")}>
                <div class="testimonial-card">
                    <QuoteIcon class="testimonial-quote" />
                    <p class="testimonial-text">
                        {"\"En menos de 60 días pasamos de sobrevivir a tener lista de espera de clientes, solo afinando nuestra estrategia digital.\""}
                    </p>
                    <span class="testimonial-author">{"– CEO, Empresa del sector X"}</span>
                </div>
            </section>

            <section id={Region::Formulario.id()} class={seen.fade_classes(Region::Formulario, "form-section")}>
                <LeadFormSection />
            </section>

            <section id={Region::Cierre.id()} class={seen.fade_classes(Region::Cierre, "closing")}>
                <div class="panel closing-panel">
                    <h2>{"No dejes pasar otra semana"}</h2>
                    <p>{"Da el primer paso para transformar tu empresa"}</p>
                    <a href={format!("#{}", Region::Formulario.id())} class="hero-cta">{"Reservar ahora"}</a>
                </div>
            </section>

            <footer id="footer" class="footer">
                <span>
                    {"Escaladeventas.site x IAParaNegocios © 2025 | Transformando empresas con estrategias y automatización real."}
                </span>
                <a href={config::WHATSAPP_URL} class="footer-link">{"¿Dudas? Escribí directo a WhatsApp"}</a>
                <p class="footer-note">
                    {"*Solo agendá si sos responsable de la toma de decisiones en tu empresa y realmente estás buscando implementar cambios que generen resultados. Valoro tu tiempo y el mío."}
                </p>
            </footer>
        </div>
    }
}

fn authority_item(title: &'static str, detail: &'static str) -> Html {
    html! {
        <div class="authority-item">
            <div class="authority-title">{ title }</div>
            <p>{ detail }</p>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        background: linear-gradient(135deg, #0f2027, #203a43, #2c5364);
    }
    .fade-in {
        opacity: 0;
        transform: translateY(2.5rem);
        transition: opacity 0.7s ease-out, transform 0.7s ease-out;
    }
    .fade-in.visible {
        opacity: 1;
        transform: translateY(0);
    }
    .top-bar {
        position: sticky;
        top: 0;
        z-index: 50;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1.25rem 1rem;
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(8px);
        border-radius: 0 0 1.5rem 1.5rem;
    }
    .top-bar-logos {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .top-bar-logos img {
        height: 2.5rem;
        border-radius: 0.75rem;
    }
    .top-bar-x {
        font-size: 1.5rem;
        font-weight: bold;
    }
    .top-bar-cta, .hero-cta {
        background: #2563eb;
        color: #fff;
        font-weight: bold;
        padding: 0.5rem 1.5rem;
        border-radius: 1rem;
        text-decoration: none;
    }
    .hero-cta {
        display: inline-block;
        font-size: 1.25rem;
        padding: 0.75rem 2rem;
    }
    .hero {
        display: flex;
        flex-wrap: wrap-reverse;
        align-items: center;
        justify-content: space-between;
        gap: 2rem;
        padding: 3.5rem 1.5rem;
    }
    .hero-content {
        flex: 1;
        min-width: 18rem;
    }
    .hero h1 {
        font-size: 2.5rem;
        line-height: 1.2;
    }
    .highlight {
        color: #60a5fa;
    }
    .hero-art {
        flex: 1;
        display: flex;
        justify-content: center;
        position: relative;
    }
    .hero-art-glow {
        position: absolute;
        width: 12rem;
        height: 12rem;
        background: #3b82f6;
        opacity: 0.3;
        filter: blur(48px);
        border-radius: 50%;
    }
    .hero-art-icon {
        position: relative;
        width: 16rem;
        height: 16rem;
    }
    .authority, .benefits, .testimonial, .closing {
        padding: 0 1.5rem;
        margin-bottom: 2.5rem;
    }
    .panel {
        background: rgba(255, 255, 255, 0.15);
        border-radius: 1rem;
        padding: 2rem;
    }
    .panel h2 {
        color: #93c5fd;
    }
    .authority-grid, .benefits-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
        gap: 1.5rem;
    }
    .authority-item {
        background: rgba(30, 58, 138, 0.7);
        padding: 1rem;
        border-radius: 0.75rem;
    }
    .authority-title {
        font-weight: bold;
        color: #93c5fd;
    }
    .benefits h2 {
        text-align: center;
    }
    .benefit-card {
        display: flex;
        align-items: center;
        gap: 1rem;
        background: rgba(30, 64, 175, 0.6);
        border-radius: 1rem;
        padding: 1.5rem;
        transition: transform 0.3s;
    }
    .benefit-card:hover {
        transform: scale(1.05);
    }
    .benefit-icon {
        position: relative;
    }
    .benefit-icon-glow {
        position: absolute;
        inset: 0;
        background: #60a5fa;
        opacity: 0.3;
        filter: blur(16px);
        border-radius: 50%;
    }
    .benefit-svg {
        position: relative;
        width: 4rem;
        height: 4rem;
    }
    .benefit-title {
        font-weight: bold;
        font-size: 1.25rem;
    }
    .testimonial-card {
        max-width: 36rem;
        margin: 0 auto;
        text-align: center;
        background: rgba(255, 255, 255, 0.1);
        border-radius: 1rem;
        padding: 1.5rem;
    }
    .testimonial-quote {
        width: 3rem;
        height: 3rem;
        color: #93c5fd;
    }
    .testimonial-text {
        font-size: 1.25rem;
        font-style: italic;
        font-weight: 600;
    }
    .testimonial-author {
        font-size: 0.875rem;
        font-weight: bold;
    }
    .form-section {
        padding: 0 1.5rem;
        margin-bottom: 5rem;
    }
    .lead-form, .lead-form-confirmation {
        max-width: 42rem;
        margin: 0 auto;
        border-radius: 1rem;
        padding: 2rem;
    }
    .lead-form {
        background: rgba(255, 255, 255, 0.8);
        color: #1f2937;
    }
    .lead-form h3 {
        color: #1e3a8a;
        font-size: 1.5rem;
    }
    .lead-form-error {
        background: #fee2e2;
        border-left: 4px solid #ef4444;
        color: #b91c1c;
        padding: 1rem;
        border-radius: 0.5rem;
        margin-bottom: 1rem;
    }
    .lead-form-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
        gap: 1.5rem;
        margin-bottom: 1.5rem;
    }
    .lead-form input, .lead-form textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem 1rem;
        border-radius: 0.75rem;
        border: 1px solid #bfdbfe;
        background: #f9fafb;
    }
    .lead-form-submit {
        width: 100%;
        margin-top: 1.5rem;
        padding: 1rem;
        border: none;
        border-radius: 1rem;
        background: #1d4ed8;
        color: #fff;
        font-size: 1.125rem;
        font-weight: bold;
        display: flex;
        align-items: center;
        justify-content: center;
        cursor: pointer;
    }
    .lead-form-submit.loading {
        opacity: 0.7;
        cursor: not-allowed;
    }
    .spinner {
        width: 1.25rem;
        height: 1.25rem;
        margin-right: 0.75rem;
        animation: spin 1s linear infinite;
    }
    .spinner-track {
        opacity: 0.25;
    }
    .spinner-head {
        opacity: 0.75;
    }
    @keyframes spin {
        from { transform: rotate(0deg); }
        to { transform: rotate(360deg); }
    }
    .lead-form-note {
        text-align: center;
        font-size: 0.75rem;
    }
    .lead-form-confirmation {
        background: #dcfce7;
        border-left: 4px solid #22c55e;
        color: #15803d;
        text-align: center;
        font-size: 1.125rem;
        font-weight: bold;
    }
    .lead-form-confirmation-note {
        display: block;
        margin-top: 0.5rem;
        color: #1d4ed8;
    }
    .closing-panel {
        background: rgba(30, 58, 138, 0.7);
        text-align: center;
    }
    .closing-panel h2 {
        color: #fff;
    }
    .footer {
        margin-top: auto;
        padding: 1.5rem;
        text-align: center;
        background: rgba(0, 0, 0, 0.3);
        border-radius: 1.5rem 1.5rem 0 0;
        font-size: 0.875rem;
    }
    .footer-link {
        display: inline-block;
        margin-top: 0.5rem;
        color: #93c5fd;
    }
    .footer-note {
        margin-top: 1rem;
        font-size: 0.75rem;
        color: #9ca3af;
    }
"#;
