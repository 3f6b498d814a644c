use yew::prelude::*;

use crate::components::icons::Icon;
use crate::components::reveal::{reveal_class, use_reveal, Motion};
use crate::content::{EXPERTISE, SKILLS};
use crate::sections::Section;

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(&node, Section::About.reveal_trigger());
    let cascade = Section::About.cascade();
    let skills = cascade.from_slot(2, 100);
    let expertise = cascade.from_slot(3, 200);

    html! {
        <section id={Section::About.anchor()} ref={node} class="section">
            <style>
                {r#"
                    .about-columns {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                        margin-bottom: 4rem;
                    }
                    .about-story h3 {
                        font-size: 1.5rem;
                        color: #06b6d4;
                        margin: 0 0 1rem;
                    }
                    .about-story p {
                        color: var(--muted);
                        line-height: 1.7;
                    }
                    .skills-title {
                        font-size: 1.5rem;
                        text-align: center;
                        margin: 0 0 1.5rem;
                    }
                    .skills {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        justify-content: center;
                    }
                    .expertise-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }
                    .expertise-card {
                        text-align: center;
                        padding: 1.5rem;
                    }
                    .expertise-card h3 { font-size: 1.1rem; margin: 0 0 0.75rem; }
                    .expertise-card p { font-size: 0.875rem; color: var(--muted); line-height: 1.6; margin: 0; }
                    @media (max-width: 1024px) {
                        .expertise-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 768px) {
                        .about-columns, .expertise-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="blob top-right primary" />
            <div class="blob bottom-left accent" />

            <div class="container">
                <div
                    class={classes!("section-heading", reveal_class(Motion::Rise, revealed))}
                    style={cascade.style(0)}
                >
                    <h2>{"About "}<span class="hero-text">{"Me"}</span></h2>
                    <div class="heading-rule" />
                    <p>
                        {"I'm a passionate developer with a strong focus on educational technology. \
                          My journey in development has been driven by the desire to create meaningful \
                          solutions that enhance learning experiences and empower institutions."}
                    </p>
                </div>

                <div class="about-columns">
                    <div
                        class={classes!("about-story", reveal_class(Motion::FromLeft, revealed))}
                        style={cascade.style(1)}
                    >
                        <div class="glass-card hover-lift card-pad">
                            <h3>{"My Journey"}</h3>
                            <p>
                                {"As a new developer with years of hands-on experience, I've dedicated myself to \
                                  mastering the art of creating digital solutions that make a real impact. \
                                  My specialization in educational technology stems from my belief that \
                                  technology should serve to enhance learning and make education more accessible."}
                            </p>
                            <p>
                                {"From mobile apps that streamline school operations to web platforms that \
                                  connect students with resources, I bring creativity, technical expertise, \
                                  and a deep understanding of user needs to every project."}
                            </p>
                        </div>
                    </div>

                    <div class={reveal_class(Motion::FromRight, revealed)} style={cascade.style(2)}>
                        <h3 class="skills-title">{"Technical Skills"}</h3>
                        <div class="skills">
                            { for SKILLS.iter().enumerate().map(|(index, skill)| html! {
                                <span
                                    key={index}
                                    class={classes!("badge", "glass-card", reveal_class(Motion::Rise, revealed))}
                                    style={skills.style(index)}
                                >
                                    { *skill }
                                </span>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="expertise-grid">
                    { for EXPERTISE.iter().enumerate().map(|(index, item)| html! {
                        <div
                            key={index}
                            class={classes!("expertise-card", "glass-card", "hover-lift", reveal_class(Motion::Rise, revealed))}
                            style={expertise.style(index)}
                        >
                            <div class="icon-badge">
                                <Icon kind={item.icon} />
                            </div>
                            <h3>{ item.title }</h3>
                            <p>{ item.description }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
