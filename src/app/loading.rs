use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::progress::LoadingProgress;

use super::context::use_locale;

/// Full-screen progress bar shown before the page content mounts.
/// Calls `on_complete` once, after the bar has held at 100%.
#[component]
pub fn LoadingScreen(on_complete: impl Fn() + Clone + Send + Sync + 'static) -> impl IntoView {
    let locale = use_locale();
    let (progress, set_progress) = signal(LoadingProgress::default());
    let interval_ms = progress.with_untracked(LoadingProgress::interval_ms);

    use_interval_fn(
        move || {
            let mut finished = false;
            set_progress.update(|p| finished = p.tick());
            if finished {
                log::debug!("loading screen complete");
                on_complete();
            }
        },
        interval_ms,
    );

    let percent = move || progress.with(LoadingProgress::percent);

    view! {
        <div
            class="fixed inset-0 z-50 flex flex-col items-center justify-center bg-background"
            data-testid="loading-screen"
        >
            <div class="flex flex-col items-center gap-8">
                <span class="text-5xl font-bold text-primary">"MM"</span>
                <div class="w-48 md:w-64">
                    <div class="h-1 w-full bg-primary/20 rounded-full overflow-hidden">
                        <div
                            class="h-full bg-primary rounded-full transition-all duration-100"
                            style:width=move || format!("{}%", percent())
                        />
                    </div>
                    <p class="text-foreground/60 text-sm mt-3 text-center">
                        {move || locale.t("loading.label")}
                        " "
                        {percent}
                        "%"
                    </p>
                </div>
            </div>
        </div>
    }
}
