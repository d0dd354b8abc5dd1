mod background;
mod context;
mod hero;
mod loading;
mod navbar;
mod sections;

pub use context::{use_locale, use_theme, Locale, ThemeState};

use background::AmbientBackground;
use context::provide_stores;
use hero::Hero;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use loading::LoadingScreen;
use navbar::Navbar;
use sections::{About, Contact, Experience, Footer, Projects, Skills, Stats, Testimonials};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        // client applies the stored theme and language after hydration
        <html lang="en" dir="ltr" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let (locale, _) = provide_stores();

    view! {
        <Title formatter=move |title| format!("{} - {title}", locale.t("hero.name")) />
        <Meta name="description" content="AI Specialist & Full-Stack Developer" />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site: a loading screen, then one page of sections over the
/// animated background.
#[component]
fn HomePage() -> impl IntoView {
    let locale = use_locale();
    let (loaded, set_loaded) = signal(false);
    view! {
        <Title text="Portfolio" />
        <Show
            when=move || loaded.get()
            fallback=move || view! { <LoadingScreen on_complete=move || set_loaded.set(true) /> }
        >
            <div class="min-h-screen relative" dir=move || locale.direction().as_str()>
                <AmbientBackground />
                <div class="relative z-10">
                    <Navbar />
                    <main>
                        <Hero />
                        <Stats />
                        <About />
                        <Experience />
                        <Projects />
                        <Skills />
                        <Testimonials />
                        <Contact />
                    </main>
                    <Footer />
                </div>
            </div>
        </Show>
    }
}
