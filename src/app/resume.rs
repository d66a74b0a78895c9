use leptos::prelude::*;

use super::homepage::SectionHeading;
use crate::content::{Experience, CORE_SKILLS, EXPERIENCE, TECH_STACK};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="py-16 px-6">
            <div class="max-w-4xl mx-auto">
                <SectionHeading
                    eyebrow="Career Path"
                    title="Work Experience"
                    subtitle="Building enterprise applications and growing through real-world projects"
                />
                <ol class="relative border-l border-muted/30 space-y-12">
                    {EXPERIENCE
                        .iter()
                        .map(|exp| view! { <ExperienceEntry exp=*exp /> })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
fn ExperienceEntry(exp: Experience) -> impl IntoView {
    view! {
        <li class="ml-6">
            <span class=if exp.current {
                "absolute -left-2 w-4 h-4 rounded-full bg-green"
            } else {
                "absolute -left-2 w-4 h-4 rounded-full bg-muted"
            }></span>
            <div class="p-6 rounded-2xl border border-muted/30">
                <div class="flex flex-wrap items-center gap-4 text-sm text-muted mb-2">
                    <span>"📅 " {exp.period}</span>
                    <span>"📍 " {exp.location}</span>
                    {exp
                        .current
                        .then(|| {
                            view! {
                                <span class="bg-green/20 text-green px-2 py-1 rounded text-xs">
                                    "Current"
                                </span>
                            }
                        })}
                </div>
                <h3 class="text-xl font-bold">{exp.company}</h3>
                <p class="text-cyan font-medium">{exp.role}</p>
                <p class="text-muted mt-4 leading-relaxed">{exp.description}</p>
                <ul class="mt-4 space-y-2 text-sm">
                    {exp
                        .highlights
                        .iter()
                        .map(|h| view! { <li>"› " {*h}</li> })
                        .collect_view()}
                </ul>
            </div>
        </li>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let chips = |items: &'static [&'static str]| {
        items
            .iter()
            .map(|s| {
                view! {
                    <span class="rounded-md px-3 py-2 bg-brightBlack/30 border border-muted/30 text-sm">
                        {*s}
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <section id="skills" class="py-16 px-6">
            <div class="max-w-5xl mx-auto">
                <SectionHeading
                    eyebrow="Expertise"
                    title="Skills & Technologies"
                    subtitle="Tools and technologies I use to bring ideas to life"
                />
                <div class="grid gap-12">
                    <div>
                        <h3 class="text-xl font-semibold mb-6">"Core Skills"</h3>
                        <div class="flex flex-wrap gap-3">{chips(CORE_SKILLS)}</div>
                    </div>
                    <div>
                        <h3 class="text-xl font-semibold mb-6">"Tools & Tech Stack"</h3>
                        <div class="flex flex-wrap gap-3">{chips(TECH_STACK)}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
