use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::{reveal_class, use_reveal, Motion};
use crate::config;
use crate::contact::Handoff;
use crate::content::STATS;
use crate::sections::{scroll_to, Section};

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(&node, Section::Hero.reveal_trigger());
    let cascade = Section::Hero.cascade();

    let view_work = Callback::from(|_: MouseEvent| scroll_to(Section::Portfolio));
    let to_about = Callback::from(|_: MouseEvent| scroll_to(Section::About));
    let mail = Callback::from(|_: MouseEvent| Handoff::mail_direct().open());
    let call = Callback::from(|_: MouseEvent| Handoff::call().open());

    let (first, last) = config::OWNER_NAME
        .split_once(' ')
        .unwrap_or((config::OWNER_NAME, ""));

    html! {
        <section id={Section::Hero.anchor()} ref={node} class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        overflow: hidden;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        opacity: 0.2;
                        background: linear-gradient(135deg, #7c3aed, #06b6d4, #ec4899, #7c3aed);
                        background-size: 400% 400%;
                        animation: gradientShift 15s ease infinite;
                    }
                    @keyframes gradientShift {
                        0% { background-position: 0% 50%; }
                        50% { background-position: 100% 50%; }
                        100% { background-position: 0% 50%; }
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-20px); }
                    }
                    .hero-shape {
                        position: absolute;
                        animation: float 6s ease-in-out infinite;
                    }
                    .hero-shape.one { top: 5rem; left: 5rem; width: 8rem; height: 8rem; border-radius: 50%; opacity: 0.3; }
                    .hero-shape.two { bottom: 8rem; right: 5rem; width: 6rem; height: 6rem; border-radius: 0.5rem; opacity: 0.4; animation-delay: 2s; }
                    .hero-shape.three { top: 50%; left: 2.5rem; width: 4rem; height: 4rem; border-radius: 50%; opacity: 0.25; animation-delay: 4s; }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        max-width: 56rem;
                        padding: 0 1.5rem;
                    }
                    .hero-name {
                        font-size: clamp(3.5rem, 10vw, 6rem);
                        font-weight: 700;
                        line-height: 1.05;
                        letter-spacing: -0.02em;
                        margin: 0 0 1rem;
                    }
                    .hero-rule {
                        height: 4px;
                        width: 8rem;
                        margin: 0 auto 2rem;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #7c3aed, #06b6d4);
                    }
                    .hero-tagline {
                        font-size: 1.35rem;
                        color: var(--muted);
                        line-height: 1.6;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .hero-stats {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        max-width: 42rem;
                        margin: 3rem auto 0;
                    }
                    .hero-stat { padding: 1rem; }
                    .hero-stat-value { font-size: 1.5rem; font-weight: 700; }
                    .hero-stat-label { font-size: 0.875rem; color: var(--muted); }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        align-items: center;
                        flex-wrap: wrap;
                        margin-top: 3rem;
                    }
                    .hero-quick { display: flex; gap: 0.75rem; }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid rgba(124, 58, 237, 0.3);
                        border-radius: 9999px;
                        display: flex;
                        justify-content: center;
                        background: none;
                        cursor: pointer;
                        animation: bounce 1.5s infinite;
                    }
                    .scroll-indicator span {
                        width: 4px;
                        height: 0.75rem;
                        margin-top: 0.5rem;
                        border-radius: 9999px;
                        background: #7c3aed;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, -25%); }
                    }
                    @media (max-width: 768px) {
                        .hero-stats { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <div class="hero-backdrop" />
            <div class="hero-shape one glass-card" />
            <div class="hero-shape two glass-card" />
            <div class="hero-shape three glass-card" />

            <div
                class={classes!("hero-content", reveal_class(Motion::Rise, revealed))}
                style={cascade.style(0)}
            >
                <h1 class="hero-name">
                    <span class="hero-text glow-pulse">{ first }</span>
                    <br />
                    <span class="hero-text">{ last }</span>
                </h1>
                <div class="hero-rule" />
                <p class="hero-tagline">
                    {"Passionate Developer crafting innovative"}
                    <span class="text-accent strong">{" mobile apps"}</span>
                    {" and"}
                    <span class="text-glow strong">{" websites"}</span>
                    {" that transform education and beyond"}
                </p>

                <div class="hero-stats">
                    { for STATS.iter().map(|(value, label, accent)| html! {
                        <div key={*label} class="hero-stat glass-card hover-lift">
                            <div class={classes!("hero-stat-value", *accent)}>{ *value }</div>
                            <div class="hero-stat-label">{ *label }</div>
                        </div>
                    }) }
                </div>

                <div class="hero-actions">
                    <button class="glass-button cta" onclick={view_work}>
                        {"View My Work"}
                        <Icon kind={IconKind::ArrowDown} />
                    </button>
                    <div class="hero-quick">
                        <button class="glass-button square" title="Email" onclick={mail}>
                            <Icon kind={IconKind::Mail} />
                        </button>
                        <button class="glass-button square" title="Call" onclick={call}>
                            <Icon kind={IconKind::Phone} />
                        </button>
                        <button class="glass-button square" title="GitHub">
                            <Icon kind={IconKind::Github} />
                        </button>
                    </div>
                </div>
            </div>

            <button class="scroll-indicator" title="Scroll down" onclick={to_about}>
                <span />
            </button>
        </section>
    }
}
