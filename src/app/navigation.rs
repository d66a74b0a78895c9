use leptos::prelude::*;

use super::Theme;
use crate::content::{NAV_ITEMS, PROFILE};

#[component]
pub fn Navigation(theme: ReadSignal<Theme>, toggle_theme: Callback<()>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let links = move |class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|(id, label)| {
                view! {
                    <a
                        href=format!("#{id}")
                        class=class
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    let theme_button = move || {
        view! {
            <button
                type="button"
                class="p-2 rounded-full border border-muted/30 hover:bg-muted/20"
                aria-label="Toggle colour scheme"
                on:click=move |_| toggle_theme.run(())
            >
                {move || if theme.get().is_dark() { "☀" } else { "☾" }}
            </button>
        }
    };

    view! {
        <header class="sticky top-0 z-50 backdrop-blur shadow">
            <nav class="mx-auto max-w-6xl px-6 py-4 flex items-center justify-between">
                <a href="#hero" class="text-2xl font-bold">
                    {PROFILE.first_name}
                    <span class="text-cyan">"."</span>
                </a>
                <div class="hidden md:flex items-center gap-8">
                    {links("text-muted hover:text-foreground transition-colors")}
                    {theme_button()}
                </div>
                <div class="flex md:hidden items-center gap-2">
                    {theme_button()}
                    <button
                        type="button"
                        class="p-2"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="md:hidden flex flex-col gap-4 px-6 pb-4">
                    {links("py-2 text-muted hover:text-foreground")}
                </div>
            </Show>
        </header>
    }
}
