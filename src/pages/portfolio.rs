use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::{reveal_class, use_reveal, Cascade, Motion};
use crate::content::{Project, PROJECTS};
use crate::sections::{scroll_to, Section};

/// Cascade slot of the closing "Start a Project" call to action.
const CTA_SLOT: usize = 5;

/// Project cards start one slot after the heading, 200ms apart.
fn card_cascade() -> Cascade {
    Section::Portfolio.cascade().from_slot(1, 200)
}

#[function_component(PortfolioSection)]
pub fn portfolio_section() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(&node, Section::Portfolio.reveal_trigger());
    let cascade = Section::Portfolio.cascade();
    let start_project = Callback::from(|_: MouseEvent| scroll_to(Section::Contact));

    html! {
        <section id={Section::Portfolio.anchor()} ref={node} class="section">
            <div class="blob mid-left secondary" />
            <div class="blob mid-right accent" />

            <div class="container wide">
                <div
                    class={classes!("section-heading", reveal_class(Motion::Rise, revealed))}
                    style={cascade.style(0)}
                >
                    <h2>{"My "}<span class="hero-text">{"Portfolio"}</span></h2>
                    <div class="heading-rule" />
                    <p>
                        {"Explore my latest projects showcasing innovative solutions in educational technology \
                          and beyond. Each project represents a commitment to excellence and user-centric design."}
                    </p>
                </div>

                <ProjectGrid
                    projects={PROJECTS}
                    revealed={revealed}
                    cascade={card_cascade()}
                />

                <div
                    class={classes!("portfolio-cta", reveal_class(Motion::Rise, revealed))}
                    style={cascade.style(CTA_SLOT)}
                >
                    <p>{"Interested in working together? Let's create something amazing!"}</p>
                    <button class="glass-button cta" onclick={start_project}>
                        {"Start a Project"}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectGridProps {
    pub projects: &'static [Project],
    pub revealed: bool,
    pub cascade: Cascade,
}

/// One card per project, in the order given.
#[function_component(ProjectGrid)]
pub fn project_grid(props: &ProjectGridProps) -> Html {
    html! {
        <div class="project-grid">
            <style>
                {r#"
                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                    }
                    .project-card { padding: 2rem; }
                    .project-header { display: flex; align-items: center; gap: 1rem; margin-bottom: 1.5rem; }
                    .project-glyph { font-size: 2.25rem; }
                    .project-title { font-size: 1.25rem; margin: 0; transition: color 0.3s; }
                    .project-card:hover .project-title { color: #7c3aed; }
                    .project-category { display: flex; align-items: center; gap: 0.5rem; margin-top: 0.25rem; font-size: 0.875rem; color: var(--muted); }
                    .project-description { color: var(--muted); line-height: 1.7; margin-bottom: 1.5rem; }
                    .project-card h4 { font-size: 0.875rem; margin: 0 0 0.75rem; }
                    .project-tech { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1.5rem; }
                    .project-highlights { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.5rem; margin-bottom: 1.5rem; }
                    .project-highlight { padding: 0.5rem; text-align: center; font-size: 0.75rem; color: #06b6d4; }
                    .project-footer { padding-top: 1rem; border-top: 1px solid var(--glass-border); }
                    .project-footer .glass-button { width: 100%; }
                    .portfolio-cta { text-align: center; margin-top: 4rem; }
                    .portfolio-cta p { color: var(--muted); margin-bottom: 1.5rem; }
                    @media (max-width: 1024px) {
                        .project-grid { grid-template-columns: 1fr; }
                    }
                    @media (max-width: 640px) {
                        .project-highlights { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            { for props.projects.iter().enumerate().map(|(index, project)| html! {
                <ProjectCard
                    key={index}
                    project={project.clone()}
                    revealed={props.revealed}
                    delay_ms={props.cascade.delay_ms(index)}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub revealed: bool,
    pub delay_ms: u32,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let talk = Callback::from(|_: MouseEvent| scroll_to(Section::Contact));

    html! {
        <article
            class={classes!("project-card", "glass-card", "hover-lift", reveal_class(Motion::Rise, props.revealed))}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            <div class="project-header">
                <div class="project-glyph">{ project.glyph }</div>
                <div>
                    <h3 class="project-title">{ project.title }</h3>
                    <div class="project-category">
                        <Icon kind={project.category.icon()} />
                        <span>{ project.category.label() }</span>
                    </div>
                </div>
            </div>

            <p class="project-description">{ project.description }</p>

            <h4>{"Technologies Used"}</h4>
            <ul class="project-tech">
                { for project.tech.iter().enumerate().map(|(index, tech)| html! {
                    <li key={index} class="badge outline glass-card">{ *tech }</li>
                }) }
            </ul>

            <h4>{"Key Highlights"}</h4>
            <div class="project-highlights">
                { for project.highlights.iter().enumerate().map(|(index, highlight)| html! {
                    <div key={index} class="project-highlight glass-card">{ *highlight }</div>
                }) }
            </div>

            <div class="project-footer">
                <button class="glass-button outline" onclick={talk}>
                    <Icon kind={IconKind::Mail} />
                    {"Interested? Let's Talk"}
                </button>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;

    const SAMPLE: &[Project] = &[
        Project {
            title: "Alpha Tracker",
            description: "First sample.",
            category: Category::Web,
            tech: &["Rust", "Yew", "Trunk"],
            glyph: "A",
            highlights: &["one", "two", "three"],
        },
        Project {
            title: "Beta Notes",
            description: "Second sample.",
            category: Category::Mobile,
            tech: &["Kotlin", "SQLite"],
            glyph: "B",
            highlights: &["four", "five", "six"],
        },
        Project {
            title: "Gamma Board",
            description: "Third sample.",
            category: Category::Web,
            tech: &["TypeScript", "Postgres", "Redis", "Docker"],
            glyph: "C",
            highlights: &["seven", "eight", "nine"],
        },
    ];

    async fn render_grid(projects: &'static [Project]) -> String {
        yew::LocalServerRenderer::<ProjectGrid>::with_props(ProjectGridProps {
            projects,
            revealed: false,
            cascade: Cascade::new(400, 200),
        })
        .hydratable(false)
        .render()
        .await
    }

    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("{needle} missing")))
            .collect()
    }

    #[tokio::test]
    async fn renders_one_card_per_project_in_order() {
        let html = render_grid(SAMPLE).await;

        assert_eq!(html.matches("<article").count(), SAMPLE.len());
        for project in SAMPLE {
            assert_eq!(html.matches(project.title).count(), 1, "{}", project.title);
        }

        let titles: Vec<&str> = SAMPLE.iter().map(|p| p.title).collect();
        let at = positions(&html, &titles);
        assert!(at.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn each_card_keeps_its_own_tech_order() {
        let html = render_grid(SAMPLE).await;
        let cards: Vec<&str> = html.split("<article").skip(1).collect();
        assert_eq!(cards.len(), SAMPLE.len());

        for (card, project) in cards.iter().zip(SAMPLE) {
            assert!(card.contains(project.title));
            assert_eq!(card.matches("<li").count(), project.tech.len());
            let at = positions(card, project.tech);
            assert!(at.windows(2).all(|pair| pair[0] < pair[1]), "{}", project.title);
        }
    }

    #[tokio::test]
    async fn cards_start_hidden_with_staggered_delays() {
        let html = render_grid(SAMPLE).await;
        assert!(!html.contains("is-revealed"));
        let delays = positions(
            &html,
            &["transition-delay: 400ms;", "transition-delay: 600ms;", "transition-delay: 800ms;"],
        );
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
    }

    const REPEATED: &[Project] = &[
        Project {
            title: "Twin",
            description: "Same title twice.",
            category: Category::Web,
            tech: &["Rust", "Rust"],
            glyph: "T",
            highlights: &["same", "same", "same"],
        },
        Project {
            title: "Twin",
            description: "Same title twice.",
            category: Category::Web,
            tech: &["Rust", "Rust"],
            glyph: "T",
            highlights: &["same", "same", "same"],
        },
    ];

    #[tokio::test]
    async fn repeated_titles_and_tech_still_render_every_entry() {
        let html = render_grid(REPEATED).await;
        assert_eq!(html.matches("<article").count(), 2);
        assert_eq!(html.matches("<li").count(), 4);
        assert_eq!(html.matches("project-highlight glass-card").count(), 6);
    }

    #[test]
    fn cards_and_closing_cta_follow_the_heading() {
        let section = Section::Portfolio.cascade();
        let cards = card_cascade();
        assert!(section.delay_ms(0) < cards.delay_ms(0));
        let delays: Vec<u32> = (0..PROJECTS.len()).map(|i| cards.delay_ms(i)).collect();
        assert_eq!(delays, vec![400, 600, 800, 1000]);
        assert_eq!(section.delay_ms(CTA_SLOT), 1000);
    }

    #[tokio::test]
    async fn empty_listing_renders_no_cards() {
        let html = render_grid(&[]).await;
        assert_eq!(html.matches("<article").count(), 0);
    }
}
