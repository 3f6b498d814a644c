use yew::prelude::*;

use crate::components::reveal::REVEAL_STYLE;
use crate::config;
use crate::pages::{
    about::AboutSection, contact::ContactSection, hero::HeroSection, portfolio::PortfolioSection,
};

const PAGE_STYLE: &str = r#"
    :root {
        --bg: #0b0b14;
        --fg: #f4f4f8;
        --muted: #a1a1b5;
        --glass: rgba(255, 255, 255, 0.05);
        --glass-border: rgba(255, 255, 255, 0.12);
    }
    body {
        margin: 0;
        background: var(--bg);
        color: var(--fg);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    html { scroll-behavior: smooth; }
    .page { min-height: 100vh; overflow-x: hidden; }
    .section { position: relative; overflow: hidden; padding: 6rem 1.5rem; }
    .container { max-width: 72rem; margin: 0 auto; position: relative; }
    .container.wide { max-width: 80rem; }
    .section-heading { text-align: center; margin-bottom: 4rem; }
    .section-heading h2 { font-size: clamp(2.25rem, 5vw, 3rem); font-weight: 700; margin: 0 0 1.5rem; }
    .section-heading p { font-size: 1.25rem; color: var(--muted); max-width: 48rem; margin: 0 auto; line-height: 1.7; }
    .heading-rule {
        height: 4px;
        width: 6rem;
        margin: 0 auto 2rem;
        border-radius: 9999px;
        background: linear-gradient(90deg, #7c3aed, #06b6d4);
    }
    .hero-text {
        background: linear-gradient(135deg, #a78bfa, #22d3ee, #f472b6);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    @keyframes glowPulse {
        0%, 100% { filter: drop-shadow(0 0 8px rgba(124, 58, 237, 0.4)); }
        50% { filter: drop-shadow(0 0 20px rgba(124, 58, 237, 0.8)); }
    }
    .glow-pulse { animation: glowPulse 3s ease-in-out infinite; }
    .glass-card {
        background: var(--glass);
        backdrop-filter: blur(12px);
        border: 1px solid var(--glass-border);
        border-radius: 12px;
    }
    .card-pad { padding: 2rem; }
    .hover-lift { transition: transform 0.3s ease, box-shadow 0.3s ease; }
    .hover-lift:hover { transform: translateY(-4px); box-shadow: 0 20px 40px rgba(124, 58, 237, 0.15); }
    .glass-button {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 0.75rem 1.25rem;
        border-radius: 10px;
        border: 1px solid rgba(124, 58, 237, 0.4);
        background: linear-gradient(135deg, rgba(124, 58, 237, 0.8), rgba(6, 182, 212, 0.8));
        color: #fff;
        font: inherit;
        cursor: pointer;
        transition: transform 0.3s ease;
    }
    .glass-button:hover { transform: scale(1.03); }
    .glass-button.outline { background: var(--glass); }
    .glass-button.cta { padding: 1.25rem 2rem; font-size: 1.1rem; }
    .glass-button.square { padding: 0.75rem; }
    .icon { width: 1.25rem; height: 1.25rem; flex-shrink: 0; }
    .icon-badge {
        width: 4rem;
        height: 4rem;
        margin: 0 auto 1rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
        background: linear-gradient(135deg, #7c3aed, #06b6d4);
    }
    .badge {
        display: inline-block;
        list-style: none;
        padding: 0.5rem 1rem;
        font-size: 0.875rem;
        font-weight: 500;
    }
    .badge.outline { padding: 0.25rem 0.6rem; font-size: 0.75rem; }
    .project-tech { padding: 0; margin-top: 0; }
    .strong { font-weight: 600; }
    .text-primary { color: #a78bfa; }
    .text-accent { color: #22d3ee; }
    .text-secondary { color: #f472b6; }
    .text-glow { color: #c4b5fd; }
    .blob { position: absolute; border-radius: 50%; filter: blur(64px); width: 24rem; height: 24rem; pointer-events: none; }
    .blob.primary { background: rgba(124, 58, 237, 0.05); }
    .blob.accent { background: rgba(6, 182, 212, 0.1); }
    .blob.secondary { background: rgba(236, 72, 153, 0.1); }
    .blob.top-right { top: 0; right: 0; }
    .blob.bottom-left { bottom: 0; left: 0; }
    .blob.mid-left { top: 25%; left: 0; width: 18rem; height: 18rem; }
    .blob.mid-right { bottom: 25%; right: 0; width: 18rem; height: 18rem; }
    .blob.top-center { top: 0; left: 50%; transform: translateX(-50%); }
    .blob.bottom-right { bottom: 0; right: 0; width: 18rem; height: 18rem; }
    .footer {
        border-top: 1px solid var(--glass-border);
        padding: 2rem 1.5rem;
        text-align: center;
        color: var(--muted);
    }
"#;

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <p>
                { format!(
                    "© {} {}. Crafted with passion and modern technology.",
                    config::COPYRIGHT_YEAR,
                    config::OWNER_NAME
                ) }
            </p>
        </footer>
    }
}

/// The whole site: four sections stacked top to bottom, then the footer.
#[function_component(Index)]
pub fn index() -> Html {
    html! {
        <main class="page">
            <style>{ PAGE_STYLE }</style>
            <style>{ REVEAL_STYLE }</style>
            <HeroSection />
            <AboutSection />
            <PortfolioSection />
            <ContactSection />
            <Footer />
        </main>
    }
}
