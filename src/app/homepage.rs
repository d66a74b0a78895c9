use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::ContactSection;
use super::game::GameSection;
use super::projects::ProjectsSection;
use super::resume::{ExperienceSection, SkillsSection};
use crate::content::{ABOUT_PARAGRAPHS, EDUCATION, PROFILE, SOCIAL_LINKS, STATS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="w-full page-content">
            <HeroSection />
            <AboutSection />
            <ExperienceSection />
            <ProjectsSection />
            <GameSection />
            <SkillsSection />
            <ContactSection />
        </div>
    }
}

/// Section heading shared by every block on the page.
#[component]
pub fn SectionHeading(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <span class="text-cyan text-sm font-medium uppercase tracking-wider">{eyebrow}</span>
            <h2 class="text-3xl md:text-4xl font-bold mt-4">{title}</h2>
            {subtitle.map(|s| view! { <p class="text-muted max-w-2xl mx-auto mt-4">{s}</p> })}
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let contacts = SOCIAL_LINKS
        .iter()
        .map(|l| (l.label, l.href.to_string()))
        .chain([("Email", PROFILE.mailto()), ("Phone", PROFILE.tel())])
        .collect::<Vec<_>>();

    view! {
        <section id="hero" class="min-h-[80vh] flex items-center justify-center px-6">
            <div class="text-center max-w-4xl">
                <p class="text-muted font-mono text-sm md:text-base mb-6">"< Hello World />"</p>
                <h1 class="text-5xl md:text-7xl font-bold mb-6">
                    "I'm " <span class="text-cyan">{PROFILE.first_name}</span> <br />
                    <span class="text-purple">{PROFILE.last_name}</span>
                </h1>
                <p class="text-xl md:text-2xl font-light text-muted">{PROFILE.title}</p>
                <p class="text-muted mt-4 text-base md:text-lg max-w-2xl mx-auto">
                    {PROFILE.tagline}
                </p>
                <div class="flex items-center justify-center gap-4 my-10">
                    {contacts
                        .into_iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-4 py-2 rounded-full border border-muted/30 hover:text-cyan"
                                    aria-label=label
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <a
                        href="#projects"
                        class="px-8 py-4 rounded-full font-medium bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30"
                    >
                        "View Projects"
                    </a>
                    <a
                        href=PROFILE.resume_path
                        download=PROFILE.resume_file_name
                        class="px-8 py-4 rounded-full font-medium border border-muted/30 hover:bg-muted/20"
                    >
                        "Download Resume"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-16 px-6">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    eyebrow="About Me"
                    title="Crafting Digital Experiences"
                    subtitle="Transforming complex problems into elegant, user-centric solutions"
                />
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div>
                        <div class="p-8 rounded-2xl border border-muted/30 space-y-4">
                            {ABOUT_PARAGRAPHS
                                .iter()
                                .map(|p| {
                                    view! { <p class="text-lg text-muted leading-relaxed">{*p}</p> }
                                })
                                .collect_view()}
                        </div>
                        <div class="mt-6 p-6 rounded-2xl border border-muted/30">
                            <h4 class="font-semibold">{EDUCATION.degree}</h4>
                            <p class="text-muted text-sm">
                                {format!("{} • {}", EDUCATION.institution, EDUCATION.period)}
                            </p>
                        </div>
                    </div>
                    <div class="grid grid-cols-2 gap-6">
                        {STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="p-6 rounded-2xl border border-muted/30 text-center">
                                        <div class="text-4xl font-bold text-cyan">{stat.value}</div>
                                        <p class="text-muted text-sm mt-2">{stat.label}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
