use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::content::{PROFILE, SOCIAL_LINKS};

fn copyright_year(build_time: &str) -> i32 {
    match DateTime::parse_from_rfc3339(build_time) {
        Ok(dt) => dt.year(),
        Err(_) => Utc::now().year(),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = copyright_year(env!("BUILD_TIME"));

    view! {
        <footer class="w-full border-t border-muted/30 py-8 px-6">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="text-muted text-sm">
                    {format!("© {year} {}. All rights reserved.", PROFILE.full_name())}
                </p>
                <div class="flex gap-6">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-muted hover:text-foreground text-sm"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href="#hero" class="text-muted hover:text-foreground text-sm">
                        "Back to top ↑"
                    </a>
                </div>
            </div>
        </footer>
    }
}
