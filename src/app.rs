mod contact;
mod footer;
mod game;
mod homepage;
mod navigation;
mod projects;
mod resume;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::content::PROFILE;
use footer::Footer;
use homepage::HomePage;
use navigation::Navigation;

pub use contact::send_contact;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark bg-background text-foreground",
            Theme::Light => "light bg-white text-slate-900",
        }
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="description" content=PROFILE.tagline />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (theme, set_theme) = signal(Theme::default());
    provide_context(theme);

    #[cfg(feature = "hydrate")]
    {
        let (stored_theme, set_stored_theme, _) =
            use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
        Effect::watch(
            || (),
            move |_, _, _| set_theme.set(stored_theme.get_untracked()),
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |theme, _, _| set_stored_theme.set(*theme),
            false,
        );
    }

    let toggle_theme = Callback::new(move |_: ()| set_theme.update(|t| *t = t.toggled()));

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.full_name()) />

        <Router>
            <div class=move || {
                format!("min-h-screen flex flex-col {}", theme.get().class())
            }>
                <Navigation theme toggle_theme />
                <main class="flex flex-col flex-grow items-center mx-auto w-full">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
