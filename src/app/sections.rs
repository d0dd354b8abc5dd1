use leptos::{html, prelude::*};
use leptos_use::{use_element_visibility, use_interval_fn_with_options, UseIntervalFnOptions};

use crate::{locale::Language, progress::count_up};

use super::{context::use_locale, navbar::NAV_LINKS};

const GITHUB: &str = "https://github.com/Mohamed-Eslam777";
const LINKEDIN: &str = "https://www.linkedin.com/in/mohammed-maklad-469557381/";
const EMAIL: &str = "mo7amed2slam77@gmail.com";

struct Stat {
    value: u32,
    label: &'static str,
}

const COUNT_UP_MS: u64 = 2000;
const COUNT_TICK_MS: u64 = 16;

static STATS: [Stat; 4] = [
    Stat { value: 10, label: "stats.projects" },
    Stat { value: 1, label: "stats.years" },
    Stat { value: 5, label: "stats.certifications" },
    Stat { value: 500, label: "stats.coffee" },
];

struct Job {
    prefix: &'static str,
    duties: usize,
}

static JOBS: [Job; 2] = [
    Job { prefix: "experience.ai", duties: 4 },
    Job { prefix: "experience.dev", duties: 4 },
];

struct Project {
    key: &'static str,
    tags: &'static [&'static str],
    live: Option<&'static str>,
    code: &'static str,
}

static PROJECTS: [Project; 3] = [
    Project {
        key: "projects.nexus",
        tags: &["Next.js", "React", "AI", "Vercel"],
        live: None,
        code: GITHUB,
    },
    Project {
        key: "projects.dashboard",
        tags: &["JavaScript", "Chart.js", "CSV"],
        live: Some("https://mohamed-eslam777.github.io/data-dashboard"),
        code: "https://github.com/Mohamed-Eslam777/data-dashboard",
    },
    Project {
        key: "projects.election",
        tags: &["HTML", "CSS", "RTL"],
        live: None,
        code: GITHUB,
    },
];

static SKILLS: [(&str, &[&str]); 5] = [
    ("skills.programming", &["Python", "Java", "C#", "Node.js", "PHP", "JavaScript", "TypeScript"]),
    ("skills.web", &["HTML", "CSS", "React", "Next.js", "Express.js", "REST APIs", "Tailwind CSS"]),
    (
        "skills.ai",
        &[
            "LLM Training",
            "Data Annotation",
            "Search Relevance",
            "AI Evaluation",
            "Prompt Engineering",
        ],
    ),
    ("skills.devops", &["Git", "GitHub", "Docker", "Vercel", "Agile/Scrum"]),
    ("skills.languages", &["Arabic", "English"]),
];

struct Testimonial {
    initials: &'static str,
    name: [&'static str; 2],
    role: [&'static str; 2],
    quote: [&'static str; 2],
}

impl Testimonial {
    fn pick(field: &[&'static str; 2], lang: Language) -> &'static str {
        match lang {
            Language::En => field[0],
            Language::Ar => field[1],
        }
    }
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        initials: "AH",
        name: ["Ahmed Hassan", "أحمد حسن"],
        role: ["Project Manager at Tech Solutions", "مدير مشاريع في Tech Solutions"],
        quote: [
            "Mohammed delivered exceptional work on our AI integration project. His attention to detail and technical expertise exceeded our expectations.",
            "قدم محمد عملاً استثنائياً في مشروع دمج الذكاء الاصطناعي. اهتمامه بالتفاصيل وخبرته التقنية فاقت توقعاتنا.",
        ],
    },
    Testimonial {
        initials: "SJ",
        name: ["Sarah Johnson", "سارة جونسون"],
        role: ["Startup Founder at DataViz Pro", "مؤسسة شركة ناشئة في DataViz Pro"],
        quote: [
            "He built our data dashboard from scratch and the results were amazing. Professional and responsive throughout.",
            "بنى لنا لوحة البيانات من الصفر وكانت النتائج مذهلة. محترف ومتجاوب طوال الوقت.",
        ],
    },
    Testimonial {
        initials: "OK",
        name: ["Omar Khaled", "عمر خالد"],
        role: ["Marketing Director at Campaign Hub", "مدير تسويق في Campaign Hub"],
        quote: [
            "His understanding of both Arabic RTL design and modern web standards is impressive.",
            "فهمه لتصميم RTL العربي ومعايير الويب الحديثة مثير للإعجاب.",
        ],
    },
];

#[component]
fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    let locale = use_locale();
    view! {
        <div class="text-center mb-12">
            <h2 class="text-3xl md:text-4xl font-bold mb-4">{move || locale.t(title)}</h2>
            {subtitle
                .map(|s| {
                    view! { <p class="max-w-2xl mx-auto text-foreground/70">{move || locale.t(s)}</p> }
                })}
        </div>
    }
}

#[component]
pub fn Stats() -> impl IntoView {
    let locale = use_locale();
    view! {
        <section class="py-16 px-4" data-testid="section-stats">
            <div class="max-w-5xl mx-auto grid grid-cols-2 md:grid-cols-4 gap-6">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="p-6 rounded-lg bg-primary/5 text-center">
                                <div class="text-3xl font-bold text-primary">
                                    <CountUp end=stat.value />
                                    "+"
                                </div>
                                <div class="mt-2 text-sm text-foreground/70">{move || locale.t(stat.label)}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Counts from 0 to `end` the first time it scrolls into view.
#[component]
fn CountUp(end: u32) -> impl IntoView {
    let target = NodeRef::<html::Span>::new();
    let visible = use_element_visibility(target);
    let (elapsed, set_elapsed) = signal(0u64);
    let counter = use_interval_fn_with_options(
        move || set_elapsed.update(|ms| *ms += COUNT_TICK_MS),
        COUNT_TICK_MS,
        UseIntervalFnOptions::default().immediate(false),
    );

    let resume = counter.resume;
    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        if visible.get() {
            resume();
            return true;
        }
        false
    });
    let pause = counter.pause;
    Effect::new(move |_| {
        if elapsed.get() >= COUNT_UP_MS {
            pause();
        }
    });

    view! { <span node_ref=target>{move || count_up(elapsed.get(), COUNT_UP_MS, end)}</span> }
}

#[component]
pub fn About() -> impl IntoView {
    let locale = use_locale();
    let facts = [
        ("about.location", "about.city"),
        ("about.education", "about.degree"),
        ("about.graduation", "about.expected"),
    ];
    view! {
        <section id="about" class="py-16 md:py-24 px-4" data-testid="section-about">
            <div class="max-w-5xl mx-auto">
                <SectionHeading title="about.title" />
                <div class="grid md:grid-cols-3 gap-8">
                    <div class="md:col-span-2 space-y-4 leading-relaxed">
                        {["about.p1", "about.p2", "about.p3"]
                            .into_iter()
                            .map(|key| view! { <p>{move || locale.t(key)}</p> })
                            .collect_view()}
                    </div>
                    <dl class="space-y-4">
                        {facts
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div>
                                        <dt class="text-sm text-primary">{move || locale.t(label)}</dt>
                                        <dd class="font-medium">{move || locale.t(value)}</dd>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </dl>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    let locale = use_locale();
    view! {
        <section id="experience" class="py-16 md:py-24 px-4" data-testid="section-experience">
            <div class="max-w-4xl mx-auto">
                <SectionHeading title="experience.title" />
                <ol class="relative border-s border-primary/30 space-y-10">
                    {JOBS
                        .iter()
                        .map(|job| {
                            let key = move |field: &str| locale.t(&format!("{}.{field}", job.prefix));
                            view! {
                                <li class="ms-6">
                                    <h3 class="text-xl font-semibold">{move || key("title")}</h3>
                                    <p class="text-primary">{move || key("company")}</p>
                                    <p class="text-sm text-foreground/60 mb-3">{move || key("period")}</p>
                                    <ul class="list-disc ms-5 space-y-1">
                                        {(1..=job.duties)
                                            .map(|n| view! { <li>{move || key(&format!("d{n}"))}</li> })
                                            .collect_view()}
                                    </ul>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let locale = use_locale();
    view! {
        <section id="projects" class="py-16 md:py-24 px-4" data-testid="section-projects">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="projects.title" subtitle="projects.subtitle" />
                <div class="grid md:grid-cols-3 gap-6">
                    {PROJECTS
                        .iter()
                        .map(|p| {
                            let title = format!("{}.title", p.key);
                            let desc = format!("{}.desc", p.key);
                            view! {
                                <article class="p-6 rounded-lg border border-foreground/10 bg-background/60 flex flex-col">
                                    <h3 class="text-lg font-semibold mb-2">{move || locale.t(&title)}</h3>
                                    <p class="text-sm text-foreground/70 flex-grow">{move || locale.t(&desc)}</p>
                                    <div class="flex flex-wrap gap-2 my-4">
                                        {p
                                            .tags
                                            .iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="rounded-md px-2 py-1 bg-primary/10 text-xs">{*tag}</span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <div class="flex gap-4 text-sm">
                                        {p
                                            .live
                                            .map(|href| {
                                                view! {
                                                    <a href=href target="_blank" rel="noopener noreferrer" class="text-primary">
                                                        {move || locale.t("projects.liveDemo")}
                                                    </a>
                                                }
                                            })}
                                        <a href=p.code target="_blank" rel="noopener noreferrer">
                                            {move || locale.t("projects.code")}
                                        </a>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-center mt-10">
                    {move || locale.t("projects.more")} " "
                    <a href=GITHUB target="_blank" rel="noopener noreferrer" class="text-primary">
                        "GitHub"
                    </a>
                </p>
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let locale = use_locale();
    view! {
        <section id="skills" class="py-16 md:py-24 px-4" data-testid="section-skills">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="skills.title" subtitle="skills.subtitle" />
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SKILLS
                        .iter()
                        .map(|(category, skills)| {
                            view! {
                                <div class="p-6 rounded-lg border border-foreground/10">
                                    <h3 class="font-semibold mb-4">{move || locale.t(category)}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {skills
                                            .iter()
                                            .map(|s| {
                                                view! {
                                                    <span class="rounded-full px-3 py-1 bg-primary/10 text-sm">{*s}</span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let locale = use_locale();
    view! {
        <section id="testimonials" class="py-16 md:py-24 px-4" data-testid="section-testimonials">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="testimonials.title" subtitle="testimonials.subtitle" />
                <div class="grid md:grid-cols-3 gap-6">
                    {TESTIMONIALS
                        .iter()
                        .map(|item| {
                            view! {
                                <figure class="p-6 rounded-lg border border-foreground/10 flex flex-col gap-4">
                                    <div class="text-yellow-400">"★★★★★"</div>
                                    <blockquote class="italic text-foreground/80">
                                        {move || Testimonial::pick(&item.quote, locale.language())}
                                    </blockquote>
                                    <figcaption class="flex items-center gap-3">
                                        <span class="w-10 h-10 rounded-full bg-primary/20 flex items-center justify-center font-bold">
                                            {item.initials}
                                        </span>
                                        <span>
                                            <span class="block font-semibold">
                                                {move || Testimonial::pick(&item.name, locale.language())}
                                            </span>
                                            <span class="block text-sm text-foreground/60">
                                                {move || Testimonial::pick(&item.role, locale.language())}
                                            </span>
                                        </span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let locale = use_locale();
    view! {
        <section id="contact" class="py-16 md:py-24 px-4" data-testid="section-contact">
            <div class="max-w-3xl mx-auto text-center">
                <span class="inline-block mb-4 px-3 py-1 rounded-full bg-primary/10 text-primary text-sm">
                    {move || locale.t("contact.badge")}
                </span>
                <SectionHeading title="contact.title" subtitle="contact.subtitle" />
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <a href=format!("mailto:{EMAIL}") class="px-6 py-3 rounded-md bg-primary text-background font-medium">
                        {EMAIL}
                    </a>
                    <a href=LINKEDIN target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                        "LinkedIn"
                    </a>
                    <a href=GITHUB target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                        "GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let locale = use_locale();
    let year = &env!("BUILD_TIME")[..4];
    view! {
        <footer class="border-t border-foreground/10 py-10 px-4" data-testid="footer">
            <div class="max-w-6xl mx-auto grid md:grid-cols-3 gap-8">
                <div>
                    <p class="text-xl font-bold text-primary">"MM"</p>
                    <p class="text-foreground/70">{move || locale.t("footer.tagline")}</p>
                </div>
                <div>
                    <h3 class="font-semibold mb-3">{move || locale.t("footer.quickLinks")}</h3>
                    <ul class="space-y-2">
                        {NAV_LINKS
                            .iter()
                            .filter(|(_, href)| *href != "#experience")
                            .map(|(key, href)| {
                                view! {
                                    <li>
                                        <a href=*href class="hover:text-primary">{move || locale.t(key)}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h3 class="font-semibold mb-3">{move || locale.t("footer.followMe")}</h3>
                    <div class="flex gap-4">
                        <a href=GITHUB target="_blank" rel="noopener noreferrer">"GitHub"</a>
                        <a href=LINKEDIN target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                        <a href=format!("mailto:{EMAIL}")>"Email"</a>
                    </div>
                </div>
            </div>
            <p class="text-center text-sm text-foreground/60 mt-10">
                {format!("© {year} ")} {move || locale.t("footer.rights")} " · "
                {move || locale.t("footer.designedBy")}
            </p>
        </footer>
    }
}
