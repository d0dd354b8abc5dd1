use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::typewriter::{Typewriter, TICK_MS};

use super::context::use_locale;

const ROLE_KEYS: [&str; 4] = ["hero.role1", "hero.role2", "hero.role3", "hero.role4"];

#[component]
pub fn Hero() -> impl IntoView {
    let locale = use_locale();
    let (typer, set_typer) = signal(Typewriter::new(Vec::new()));

    // restart the cycle in the new language
    Effect::new(move |_| {
        let titles = ROLE_KEYS.iter().map(|k| locale.t(k)).collect::<Vec<_>>();
        set_typer.update(|t| t.reset(titles));
    });
    use_interval_fn(move || set_typer.update(Typewriter::tick), TICK_MS);

    let align = move || if locale.is_rtl() { "text-right" } else { "text-left" };

    view! {
        <section
            id="hero"
            class="min-h-screen flex items-center justify-center relative pt-20 px-4"
            data-testid="section-hero"
        >
            <div class=move || format!("max-w-7xl mx-auto w-full {}", align())>
                <p class="text-primary font-medium mb-4 text-lg" data-testid="text-greeting">
                    "👋 " {move || locale.t("hero.greeting")}
                </p>
                <h1 class="text-3xl md:text-5xl lg:text-6xl font-bold mb-4">
                    {move || locale.t("hero.name")}
                </h1>
                <p class="text-2xl md:text-3xl font-semibold text-primary h-10 mb-6">
                    {move || typer.with(|t| t.text().to_string())}
                    <span class="animate-pulse">"|"</span>
                </p>
                <p class="max-w-2xl text-foreground/80 leading-relaxed mb-8">
                    {move || locale.t("hero.bio")}
                </p>
                <div class="flex flex-wrap gap-4">
                    <a href="#projects" class="px-6 py-3 rounded-md bg-primary text-background font-medium">
                        {move || locale.t("hero.viewProjects")}
                    </a>
                    <a href="#contact" class="px-6 py-3 rounded-md border border-primary text-primary font-medium">
                        {move || locale.t("hero.getInTouch")}
                    </a>
                </div>
                <a href="#about" class="block mt-16 text-sm text-foreground/60">
                    {move || locale.t("hero.scrollDown")}
                    " ↓"
                </a>
            </div>
        </section>
    }
}
