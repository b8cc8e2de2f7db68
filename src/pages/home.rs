//! Assembly of the single portfolio page.
//!
//! Section content is rendered from the knowledge base so the page and the
//! assistant never disagree. The markup supplies the hooks the animators
//! rely on: `.reveal` sections, `.list li` / `.card h3` / `.typewriter`
//! blink targets, and the `.menu` container.

use leptos::prelude::*;

use crate::assistant::knowledge::KnowledgeBase;
use crate::components::assistant_panel::AssistantPanel;
use crate::components::menu::NavMenu;
use crate::components::particle_host::ParticleHost;
use crate::components::typewriter::Typewriter;

/// Phrases cycled by the hero typewriter.
const TYPED_PHRASES: &[&str] = &[
    "Technology",
    "Programming",
    "Projects",
    "Artificial intelligence",
    "Science and analytics",
];

/// The portfolio page: hero, reveal sections fed from the knowledge base,
/// and the assistant widget.
#[component]
pub fn HomePage() -> impl IntoView {
    let kb = expect_context::<KnowledgeBase>();

    view! {
        <ParticleHost/>

        <header class="site-header">
            <span class="brand">{kb.name}</span>
            <NavMenu/>
        </header>

        <main>
            <section class="hero">
                <h1>{kb.name}</h1>
                <p class="hero-line">"I am interested in: " <Typewriter phrases=TYPED_PHRASES/></p>
            </section>

            <section class="reveal" id="about">
                <h2>"About"</h2>
                <p>{format!("{} years old, {}.", kb.age, kb.grade)}</p>
                <p>{kb.why}</p>
            </section>

            <section class="reveal" id="skills">
                <h2>"Technical skills"</h2>
                <ul class="list">
                    {kb.tech_skills.iter().map(|skill| view! { <li>{*skill}</li> }).collect::<Vec<_>>()}
                </ul>
            </section>

            <section class="reveal" id="projects">
                <h2>"Projects"</h2>
                <div class="cards">
                    {kb.projects
                        .iter()
                        .map(|project| {
                            view! {
                                <div class="card">
                                    <h3>{*project}</h3>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="reveal" id="strengths">
                <h2>"Strengths"</h2>
                <ul class="list">
                    {kb.traits.iter().map(|t| view! { <li>{*t}</li> }).collect::<Vec<_>>()}
                </ul>
            </section>

            <section class="reveal" id="goals">
                <h2>"Goals"</h2>
                <div class="cards">
                    <div class="card">
                        <h3>"Short-term"</h3>
                        <ul class="list">
                            {kb.goals_short.iter().map(|goal| view! { <li>{*goal}</li> }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div class="card">
                        <h3>"Long-term"</h3>
                        <ul class="list">
                            {kb.goals_long.iter().map(|goal| view! { <li>{*goal}</li> }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>
            </section>
        </main>

        <AssistantPanel/>

        <footer class="site-footer">
            <span>{format!("© {}", kb.name)}</span>
        </footer>
    }
}
