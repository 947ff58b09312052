use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    content::{Project, EXPERIENCES, HERO_TAGLINE, HERO_TITLE, OWNER, PROJECTS, SKILL_GROUPS},
    interaction::RevealKind,
};

use super::{
    contact::ContactSection,
    controller::scroll_to_section,
    reveal::{Reveal, SkillBar},
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Frontend Developer" />
        <Hero />
        <About />
        <Projects />
        <ContactSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero" data-parallax="hero">
            <div class="parallax-layer container">
                <Reveal class="hero-text">
                    <h1 class="hero-title">
                        {HERO_TITLE
                            .into_iter()
                            .map(|word| view! { <span class="hero-title-part">{word}</span> })
                            .collect_view()}
                    </h1>
                    <div class="hero-description">
                        {HERO_TAGLINE
                            .into_iter()
                            .map(|word| view! { <span class="hero-description-word">{word}</span> })
                            .collect_view()}
                    </div>
                    <div class="hero-buttons">
                        <a
                            href="#projects"
                            class="button button-primary"
                            on:click=move |ev| {
                                ev.prevent_default();
                                scroll_to_section("projects");
                            }
                        >
                            "View Projects"
                        </a>
                        <a
                            href="#contact"
                            class="button button-outline"
                            on:click=move |ev| {
                                ev.prevent_default();
                                scroll_to_section("contact");
                            }
                        >
                            "Contact Me"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="about" data-parallax="section">
            <div class="parallax-layer container">
                <Reveal class="section-header">
                    <h2 class="section-title">"About " <span class="highlight">"Me"</span></h2>
                    <p class="section-description">
                        "Passionate about creating beautiful and functional web experiences"
                    </p>
                </Reveal>
                <Reveal class="about-intro">
                    <h3>{format!("Hi, I'm {OWNER}")}</h3>
                    <p>
                        "I'm a frontend developer who enjoys building modern, responsive web applications. "
                        "Most of my work is in React and TypeScript, and lately in Rust compiled to WebAssembly."
                    </p>
                    <p>
                        "My journey in web development started with a curiosity for beautiful user interfaces. "
                        "Today I focus on applications that stay fast and pleasant to use as they grow."
                    </p>
                    <p>
                        "When I'm not coding you can find me exploring new technologies, contributing to "
                        "open-source projects, or writing up what I learned along the way."
                    </p>
                </Reveal>
                <h3 class="subsection-title">"Skills & Expertise"</h3>
                <div class="skills-grid">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <Reveal kind=RevealKind::Group class="skill-card">
                                    <i class=group.icon></i>
                                    <h4>{group.title}</h4>
                                    {group
                                        .skills
                                        .iter()
                                        .map(|skill| view! { <SkillBar skill=*skill /> })
                                        .collect_view()}
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <h3 class="subsection-title">"Experience"</h3>
                <Reveal kind=RevealKind::Group class="timeline">
                    {EXPERIENCES
                        .iter()
                        .map(|exp| {
                            view! {
                                <div class="timeline-item">
                                    <span class="timeline-period">{exp.period}</span>
                                    <div class="timeline-body">
                                        <h4>{exp.role}</h4>
                                        <p class="timeline-company">{exp.company}</p>
                                        <p>{exp.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="project-card" data-parallax="card">
            <div class="parallax-layer">
                <div class="project-card-image">
                    <img src=project.image alt=project.title loading="lazy" />
                </div>
                <div class="project-card-content">
                    <h3 class="project-card-title">{project.title}</h3>
                    <p class="project-card-description">{project.description}</p>
                    <div class="project-card-technologies">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| view! { <span class="tech-tag">{*tech}</span> })
                            .collect_view()}
                    </div>
                    <a
                        href=project.link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="button button-primary"
                    >
                        "View Project"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="projects" data-parallax="section">
            <div class="parallax-layer container">
                <Reveal class="section-header">
                    <h2 class="section-title">"My Projects"</h2>
                </Reveal>
                <Reveal kind=RevealKind::Group class="projects-grid">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}
