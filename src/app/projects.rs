use leptos::prelude::*;

use super::homepage::SectionHeading;
use crate::content::{filter_projects, project_categories, Project, ALL_CATEGORIES, PROJECTS};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (filter, set_filter) = signal(ALL_CATEGORIES);

    view! {
        <section id="projects" class="py-16 px-6">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    eyebrow="Portfolio"
                    title="Featured Projects"
                    subtitle="A selection of things I've built, from quick experiments to full products"
                />
                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {project_categories(PROJECTS)
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if filter.get() == category {
                                            "px-6 py-2 rounded-full bg-cyan/20 text-cyan border border-cyan/30"
                                        } else {
                                            "px-6 py-2 rounded-full border border-muted/30 text-muted hover:text-foreground"
                                        }
                                    }
                                    on:click=move |_| set_filter.set(category)
                                >
                                    {category}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        filter_projects(PROJECTS, filter.get())
                            .into_iter()
                            .map(|project| view! { <ProjectCard project=*project /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="rounded-2xl overflow-hidden border border-muted/30 flex flex-col">
            <div class="relative">
                <img src=project.image alt=project.title class="w-full h-48 object-cover" />
                <span class="absolute top-4 left-4 rounded-full px-3 py-1 text-xs bg-black/60 text-cyan">
                    {project.category}
                </span>
            </div>
            <div class="p-6 flex flex-col flex-grow">
                <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                <p class="text-muted text-sm leading-relaxed flex-grow">{project.description}</p>
                <div class="flex flex-wrap gap-2 mt-4">
                    {project
                        .tech
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="rounded-md px-2 py-1 bg-brightBlack/30 text-xs">{*t}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4 mt-6">
                    {project
                        .github
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer" class="text-sm hover:text-cyan">
                                    "Code →"
                                </a>
                            }
                        })}
                    {project
                        .demo
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer" class="text-sm hover:text-cyan">
                                    "Live Demo →"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
