use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::context::{use_locale, use_theme};

const SCROLLED_PAST: f64 = 50.0;

pub static NAV_LINKS: [(&str, &str); 5] = [
    ("nav.about", "#about"),
    ("nav.experience", "#experience"),
    ("nav.projects", "#projects"),
    ("nav.skills", "#skills"),
    ("nav.contact", "#contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let locale = use_locale();
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y.get() > SCROLLED_PAST;

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|(key, href)| {
                view! {
                    <a
                        href=*href
                        class="text-foreground/80 hover:text-primary transition-colors"
                        on:click=move |_| set_menu_open(false)
                    >
                        {locale.t(key)}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            let base = "fixed top-0 z-50 w-full transition-all duration-300";
            if scrolled() {
                format!("{base} bg-background/80 backdrop-blur-md shadow-lg")
            } else {
                format!("{base} bg-transparent")
            }
        }>
            <div class="max-w-7xl mx-auto px-4 py-4 flex items-center justify-between">
                <a href="#hero" class="text-xl font-bold text-primary">
                    "MM"
                </a>
                <div class="hidden md:flex items-center gap-6">{links}</div>
                <div class="flex items-center gap-2">
                    <LanguageToggle />
                    <ThemeToggle />
                    <button
                        class="md:hidden px-2 py-1"
                        aria-label=move || locale.t("nav.menu")
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden flex flex-col gap-4 px-4 pb-4 bg-background/95">{links}</div>
            </Show>
        </nav>
    }
}

#[component]
pub fn LanguageToggle() -> impl IntoView {
    let locale = use_locale();
    view! {
        <button
            class="min-w-[60px] px-3 py-1 rounded-md border border-foreground/20 hover:bg-primary/10 font-medium"
            data-testid="button-language-toggle"
            on:click=move |_| locale.toggle()
        >
            // names the language you switch to
            {move || locale.t("language.toggle")}
        </button>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let locale = use_locale();
    let theme = use_theme();
    view! {
        <button
            class="px-2 py-1 rounded-md border border-foreground/20 hover:bg-primary/10"
            data-testid="button-theme-toggle"
            aria-label=move || locale.t("theme.toggle")
            on:click=move |_| theme.toggle()
        >
            {move || if theme.is_dark() { "☾" } else { "☀" }}
        </button>
    }
}
