use gloo_timers::callback::Timeout;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::content::{
    CONTACT_CHANNELS, CONTACT_EMAIL_URI, HERO_STATS, NAV_SECTIONS, PROJECTS, REVIEW_URL,
    TESTIMONIALS,
};
use crate::i18n::{translate, Language};
use crate::loading::LoadingPhase;
use crate::motion::{count_at, map_fraction, stagger_ms, HERO_ENTRANCE};
use crate::observe::{use_region_exit, use_reveal_once, use_scroll_progress, use_scrolled_past};
use crate::pager::Pager;
use crate::typewriter::{reveal_wait_ms, typed_prefix};

const NAV_RESTYLE_AFTER_PX: f64 = 50.0;
const RAIL_VISIBLE_AFTER_PX: f64 = 100.0;
const SECTION_REVEAL_MARGIN: &str = "-100px";
const SUBTITLE_TYPE_DELAY_MS: u32 = 2_000;
const COUNT_TICK_MS: u32 = 40;

fn scroll_to_section(id: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// The session's language selection: the one intentional process-wide
/// mutable value, shared through context and written only by the switcher.
#[derive(Clone, PartialEq)]
pub struct LanguageHandle {
    state: UseStateHandle<Language>,
}

impl LanguageHandle {
    pub fn current(&self) -> Language {
        *self.state
    }

    pub fn switch(&self, language: Language) {
        self.state.set(language);
    }

    pub fn t(&self, key: &'static str) -> &'static str {
        translate(*self.state, key)
    }
}

fn apply_document_language(language: Language) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("lang", language.code());
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(LanguageProvider)]
fn language_provider(props: &LanguageProviderProps) -> Html {
    let state = use_state_eq(Language::default);

    {
        let current = *state;
        use_effect_with(current, move |language| {
            apply_document_language(*language);
            || ()
        });
    }

    let handle = LanguageHandle { state };

    html! {
        <ContextProvider<LanguageHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<LanguageHandle>>
    }
}

#[hook]
fn use_language() -> LanguageHandle {
    use_context::<LanguageHandle>().expect("LanguageProvider must wrap the page")
}

#[derive(Properties, PartialEq)]
struct LoadingScreenProps {
    on_complete: Callback<()>,
}

#[function_component(LoadingScreen)]
fn loading_screen(props: &LoadingScreenProps) -> Html {
    let phase = use_state_eq(|| LoadingPhase::Showing);

    {
        let phase_handle = phase.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with(*phase, move |current| {
            let mut pending = None;

            if let Some(wait) = current.dwell_ms() {
                let next = current.advanced();
                pending = Some(Timeout::new(wait, move || {
                    phase_handle.set(next);
                    if next.is_hidden() {
                        on_complete.emit(());
                    }
                }));
            }

            move || drop(pending)
        });
    }

    if phase.is_hidden() {
        return Html::default();
    }

    html! {
        <div class={phase.overlay_class()} role="status" aria-label="Loading">
            <div class="splash-mark">
                <h1 class="splash-wordmark">
                    {"Prestige"}<span class="accent">{"Websites"}</span>
                </h1>
                <div class="splash-dots" aria-hidden="true">
                    { for (0..3_usize).map(|index| html! {
                        <span
                            key={index.to_string()}
                            class="dot"
                            style={format!("animation-delay:{}ms;", stagger_ms(0, index, 200))}
                        ></span>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TypewriterProps {
    text: AttrValue,
    #[prop_or(0)]
    start_delay_ms: u32,
}

#[function_component(Typewriter)]
fn typewriter(props: &TypewriterProps) -> Html {
    let shown = use_state_eq(|| 0_usize);

    // A changed target restarts the effect from an empty prefix.
    {
        let shown = shown.clone();
        use_effect_with(props.text.clone(), move |_| {
            shown.set(0);
            || ()
        });
    }

    {
        let shown_handle = shown.clone();
        let start_delay_ms = props.start_delay_ms;
        use_effect_with((props.text.clone(), *shown), move |(text, shown_now)| {
            let mut pending = None;
            let total = text.chars().count();

            if *shown_now < total {
                let next = *shown_now + 1;
                let wait = reveal_wait_ms(*shown_now, start_delay_ms);
                pending = Some(Timeout::new(wait, move || shown_handle.set(next)));
            }

            move || drop(pending)
        });
    }

    let visible = typed_prefix(&props.text, *shown).to_string();

    html! {
        <span class="typewriter">
            { visible }
            <span class="caret" aria-hidden="true"></span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct CountUpProps {
    end: u32,
    #[prop_or(2_000)]
    duration_ms: u32,
    #[prop_or_default]
    suffix: AttrValue,
}

#[function_component(CountUp)]
fn count_up(props: &CountUpProps) -> Html {
    let elapsed = use_state_eq(|| 0_u32);

    {
        let elapsed_handle = elapsed.clone();
        let duration_ms = props.duration_ms;
        use_effect_with(*elapsed, move |current| {
            let mut pending = None;

            if *current < duration_ms {
                let next = (*current + COUNT_TICK_MS).min(duration_ms);
                pending = Some(Timeout::new(COUNT_TICK_MS, move || elapsed_handle.set(next)));
            }

            move || drop(pending)
        });
    }

    let value = count_at(*elapsed, props.duration_ms, props.end);

    html! {
        <span class="stat-number">{ value }{ props.suffix.clone() }</span>
    }
}

fn star_row(rating: u8) -> Html {
    html! {
        <div class="star-row" aria-label={format!("{rating} out of 5 stars")}>
            { for (0..5_u8).map(|index| html! {
                <span
                    key={index.to_string()}
                    class={classes!("star", (index < rating).then_some("is-filled"))}
                    style={format!("animation-delay:{}ms;", stagger_ms(0, index as usize, 100))}
                    aria-hidden="true"
                >{"\u{2605}"}</span>
            }) }
        </div>
    }
}

#[function_component(LanguageSwitcher)]
fn language_switcher() -> Html {
    let language = use_language();
    let open = use_state_eq(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    let options = Language::ALL
        .iter()
        .map(|candidate| {
            let candidate = *candidate;
            let selected = language.current() == candidate;
            let onclick = {
                let language = language.clone();
                let open = open.clone();
                Callback::from(move |_| {
                    language.switch(candidate);
                    open.set(false);
                })
            };

            html! {
                <li key={candidate.code()}>
                    <button
                        class={classes!("lang-option", selected.then_some("is-selected"))}
                        role="option"
                        aria-selected={selected.to_string()}
                        onclick={onclick}
                    >
                        <span class="lang-flag" aria-hidden="true">{ candidate.flag() }</span>
                        <span>{ candidate.label() }</span>
                    </button>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <div class="lang-switcher">
            <button
                class="lang-toggle"
                aria-haspopup="listbox"
                aria-expanded={(*open).to_string()}
                onclick={toggle}
            >
                <span class="lang-flag" aria-hidden="true">{ language.current().flag() }</span>
                <span class="lang-name">{ language.current().label() }</span>
            </button>
            if *open {
                <ul class="lang-menu" role="listbox">{ options }</ul>
            }
        </div>
    }
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let language = use_language();
    let scrolled = use_scrolled_past(NAV_RESTYLE_AFTER_PX);
    let menu_open = use_state_eq(|| false);

    let nav_button = |index: usize, id: &'static str, key: &'static str| {
        let onclick = {
            let menu_open = menu_open.clone();
            Callback::from(move |_| {
                scroll_to_section(id);
                menu_open.set(false);
            })
        };

        html! {
            <button
                key={id}
                class="nav-link"
                style={format!("animation-delay:{}ms;", stagger_ms(300, index, 100))}
                onclick={onclick}
            >
                { language.t(key) }
            </button>
        }
    };

    let desktop_links = NAV_SECTIONS
        .iter()
        .enumerate()
        .map(|(index, &(id, key))| nav_button(index, id, key))
        .collect::<Html>();

    let mobile_links = NAV_SECTIONS
        .iter()
        .enumerate()
        .map(|(index, &(id, key))| nav_button(index, id, key))
        .collect::<Html>();

    let on_logo = Callback::from(move |_| scroll_to_section("home"));
    let on_burger = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    html! {
        <nav class={classes!("site-nav", scrolled.then_some("is-scrolled"))}>
            <div class="nav-inner">
                <button class="brand" onclick={on_logo}>
                    {"Prestige"}<span class="accent">{"Websites"}</span>
                </button>
                <div class="nav-links">{ desktop_links }</div>
                <div class="nav-tools">
                    <LanguageSwitcher />
                    <button
                        class="burger"
                        aria-label="Toggle menu"
                        aria-expanded={(*menu_open).to_string()}
                        onclick={on_burger}
                    >
                        <span aria-hidden="true">{ if *menu_open { "\u{2715}" } else { "\u{2630}" } }</span>
                    </button>
                </div>
            </div>
            if *menu_open {
                <div class="mobile-menu">{ mobile_links }</div>
            }
        </nav>
    }
}

fn accent_last_word(text: &'static str) -> Html {
    match text.rsplit_once(' ') {
        Some((head, tail)) => html! {
            <>{ head }{ " " }<span class="accent">{ tail }</span></>
        },
        None => html! { <>{ text }</> },
    }
}

#[function_component(HeroSection)]
fn hero_section() -> Html {
    let language = use_language();
    let container = use_node_ref();
    let exit = use_region_exit(container.clone());

    // Content drifts down and fades as the hero scrolls out, gone at 80%.
    let parallax = format!(
        "transform:translateY({:.2}%);opacity:{:.3};",
        map_fraction(exit, (0.0, 50.0)),
        map_fraction(exit / 0.8, (1.0, 0.0)),
    );

    let on_cta = Callback::from(move |_| scroll_to_section("contact"));
    let on_hint = Callback::from(move |_| scroll_to_section("about"));

    let stats = HERO_STATS
        .iter()
        .enumerate()
        .map(|(index, stat)| {
            html! {
                <div
                    key={stat.label}
                    class="stat-chip entrance"
                    style={format!(
                        "animation-delay:{}ms;animation-duration:600ms;",
                        stagger_ms(4_500, index, 200)
                    )}
                >
                    <span class="stat-chip-value">{ stat.value }</span>
                    <span class="stat-chip-label">{ stat.label }</span>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id="home" ref={container} class="hero">
            <div class="hero-backdrop" aria-hidden="true">
                <div class="orb orb-a"></div>
                <div class="orb orb-b"></div>
                <div class="orb orb-c"></div>
            </div>
            <div class="hero-content" style={parallax}>
                <h1 class="hero-heading entrance" style={HERO_ENTRANCE.style_for("heading")}>
                    { accent_last_word(language.t("hero.title")) }
                </h1>
                <div class="hero-subtitle entrance" style={HERO_ENTRANCE.style_for("subtitle")}>
                    <Typewriter
                        text={language.t("hero.subtitle")}
                        start_delay_ms={SUBTITLE_TYPE_DELAY_MS}
                    />
                </div>
                <div class="hero-cta entrance" style={HERO_ENTRANCE.style_for("cta")}>
                    <button class="button-primary" onclick={on_cta}>
                        { language.t("hero.cta") }
                        <span class="arrow" aria-hidden="true">{"\u{2192}"}</span>
                    </button>
                </div>
                <div class="hero-stats entrance" style={HERO_ENTRANCE.style_for("stats")}>
                    { stats }
                </div>
            </div>
            <div class="scroll-hint entrance" style={HERO_ENTRANCE.style_for("hint")}>
                <button aria-label="Scroll to the about section" onclick={on_hint}>
                    <span aria-hidden="true">{"\u{2193}"}</span>
                </button>
            </div>
        </section>
    }
}

const ABOUT_CARDS: [(&str, &str); 4] = [
    ("about.whoWeAre.title", "about.whoWeAre.content"),
    ("about.whyChoose.title", "about.whyChoose.content"),
    ("about.strategic.title", "about.strategic.content"),
    ("about.values.title", "about.values.content"),
];

#[function_component(AboutSection)]
fn about_section() -> Html {
    let language = use_language();
    let container = use_node_ref();
    let revealed = use_reveal_once(container.clone(), SECTION_REVEAL_MARGIN);

    let cards = ABOUT_CARDS
        .iter()
        .enumerate()
        .map(|(index, &(title, body))| {
            html! {
                <article
                    key={title}
                    class="about-card reveal-item"
                    style={format!("animation-delay:{}ms;", stagger_ms(200, index, 150))}
                >
                    <h3>{ language.t(title) }</h3>
                    <p>{ language.t(body) }</p>
                </article>
            }
        })
        .collect::<Html>();

    html! {
        <section
            id="about"
            ref={container}
            class={classes!("section", "about", revealed.then_some("is-revealed"))}
        >
            <div class="section-inner">
                <header class="section-header reveal-item">
                    <h2>{ language.t("about.title") }</h2>
                    <div class="header-rule" aria-hidden="true"></div>
                </header>
                <div class="about-grid">{ cards }</div>
                // Counters mount on reveal so the count-up starts in view.
                if revealed {
                    <div class="about-stats">
                        <div class="about-stat">
                            <CountUp end={60} suffix="+" />
                            <span class="stat-label">{ language.t("about.stats.projects") }</span>
                        </div>
                        <div class="about-stat">
                            <CountUp end={40} suffix="+" />
                            <span class="stat-label">{"Countries"}</span>
                        </div>
                        <div class="about-stat">
                            { star_row(5) }
                            <span class="stat-label">{ language.t("about.stats.clients") }</span>
                        </div>
                    </div>
                }
            </div>
        </section>
    }
}

#[function_component(PortfolioSection)]
fn portfolio_section() -> Html {
    let language = use_language();
    let container = use_node_ref();
    let revealed = use_reveal_once(container.clone(), SECTION_REVEAL_MARGIN);

    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| {
            html! {
                <article
                    key={project.title}
                    class="project-card reveal-item"
                    style={format!("animation-delay:{}ms;", stagger_ms(200, index, 200))}
                >
                    <div class="project-media">
                        if let Some(image) = project.image {
                            <img src={image} alt={project.title} loading="lazy" />
                        } else {
                            <div class="project-placeholder" aria-hidden="true">{"\u{1f310}"}</div>
                        }
                        <a
                            class="project-overlay"
                            href={project.link}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { language.t("portfolio.viewProject") }
                            <span class="arrow" aria-hidden="true">{"\u{2192}"}</span>
                        </a>
                    </div>
                    <div class="project-body">
                        <h3>{ project.title }</h3>
                        <p>{ project.description }</p>
                        <ul class="tag-list">
                            { for project.tags.iter().enumerate().map(|(tag_index, tag)| html! {
                                <li
                                    key={*tag}
                                    class="tag reveal-item"
                                    style={format!(
                                        "animation-delay:{}ms;",
                                        stagger_ms(500, tag_index, 100)
                                    )}
                                >{ *tag }</li>
                            }) }
                        </ul>
                        <a
                            class="button-primary project-link"
                            href={project.link}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { language.t("portfolio.exploreProject") }
                            <span class="arrow" aria-hidden="true">{"\u{2192}"}</span>
                        </a>
                    </div>
                </article>
            }
        })
        .collect::<Html>();

    let on_start = Callback::from(move |_| scroll_to_section("contact"));

    html! {
        <section
            id="portfolio"
            ref={container}
            class={classes!("section", "portfolio", revealed.then_some("is-revealed"))}
        >
            <div class="section-inner">
                <header class="section-header reveal-item">
                    <h2>{ language.t("portfolio.title") }</h2>
                    <p>{ language.t("portfolio.subtitle") }</p>
                    <div class="header-rule" aria-hidden="true"></div>
                </header>
                <div class="project-grid">{ cards }</div>
                <div class="section-cta reveal-item" style="animation-delay:900ms;">
                    <button class="button-primary" onclick={on_start}>
                        { language.t("portfolio.startProject") }
                        <span class="arrow" aria-hidden="true">{"\u{2192}"}</span>
                    </button>
                </div>
            </div>
        </section>
    }
}

#[function_component(TestimonialsSection)]
fn testimonials_section() -> Html {
    let language = use_language();
    let container = use_node_ref();
    let revealed = use_reveal_once(container.clone(), SECTION_REVEAL_MARGIN);
    let pager = use_state_eq(|| Pager::new(TESTIMONIALS.len()));

    let on_prev = {
        let pager = pager.clone();
        Callback::from(move |_| {
            let mut next = *pager;
            next.prev();
            pager.set(next);
        })
    };
    let on_next = {
        let pager = pager.clone();
        Callback::from(move |_| {
            let mut next = *pager;
            next.next();
            pager.set(next);
        })
    };

    let dots = (0..pager.page_count())
        .map(|page| {
            let onclick = {
                let pager = pager.clone();
                Callback::from(move |_| {
                    let mut next = *pager;
                    next.jump(page);
                    pager.set(next);
                })
            };

            html! {
                <button
                    key={page.to_string()}
                    class={classes!("dot-control", (pager.page() == page).then_some("is-active"))}
                    aria-label={format!("Show testimonials page {}", page + 1)}
                    onclick={onclick}
                ></button>
            }
        })
        .collect::<Html>();

    // Cards are keyed by page so a page change remounts them and replays
    // their entrance.
    let cards = pager
        .visible()
        .enumerate()
        .map(|(index, record_index)| {
            let record = &TESTIMONIALS[record_index];
            html! {
                <blockquote
                    key={format!("{}-{record_index}", pager.page())}
                    class="testimonial-card reveal-item"
                    style={format!("animation-delay:{}ms;", stagger_ms(100, index, 100))}
                >
                    <div class="quote-badge" aria-hidden="true">{"\u{201d}"}</div>
                    { star_row(record.rating) }
                    <p class="testimonial-comment">{ record.comment }</p>
                    <footer class="testimonial-author">
                        <span class="author-initial" aria-hidden="true">
                            { record.name.chars().next().unwrap_or('?').to_string() }
                        </span>
                        <span class="author-meta">
                            <strong>{ record.name }</strong>
                            <span>{ record.position }</span>
                        </span>
                    </footer>
                </blockquote>
            }
        })
        .collect::<Html>();

    html! {
        <section
            id="testimonials"
            ref={container}
            class={classes!("section", "testimonials", revealed.then_some("is-revealed"))}
        >
            <div class="section-inner">
                <header class="section-header reveal-item">
                    <h2>{ language.t("testimonials.title") }</h2>
                    <p>{ language.t("testimonials.subtitle") }</p>
                    <div class="header-rule" aria-hidden="true"></div>
                </header>
                <div class="testimonial-grid">{ cards }</div>
                <div class="carousel-controls reveal-item">
                    <button class="carousel-arrow" aria-label="Previous testimonials" onclick={on_prev}>
                        <span aria-hidden="true">{"\u{2039}"}</span>
                    </button>
                    <div class="carousel-dots">{ dots }</div>
                    <button class="carousel-arrow" aria-label="Next testimonials" onclick={on_next}>
                        <span aria-hidden="true">{"\u{203a}"}</span>
                    </button>
                </div>
                <div class="section-cta reveal-item">
                    <a
                        class="button-primary"
                        href={REVIEW_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Leave a Review"}
                        <span class="arrow" aria-hidden="true">{"\u{2605}"}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let language = use_language();
    let container = use_node_ref();
    let revealed = use_reveal_once(container.clone(), SECTION_REVEAL_MARGIN);

    let channels = CONTACT_CHANNELS
        .iter()
        .enumerate()
        .map(|(index, channel)| {
            html! {
                <a
                    key={channel.title}
                    class="contact-card reveal-item"
                    style={format!("animation-delay:{}ms;", stagger_ms(200, index, 200))}
                    href={channel.href}
                    target={if channel.href.starts_with("mailto:") { None } else { Some("_blank") }}
                    rel="noopener noreferrer"
                >
                    <h3>{ channel.title }</h3>
                    <p>{ channel.display }</p>
                </a>
            }
        })
        .collect::<Html>();

    html! {
        <section
            id="contact"
            ref={container}
            class={classes!("section", "contact", revealed.then_some("is-revealed"))}
        >
            <div class="contact-backdrop" aria-hidden="true">
                <div class="orb orb-a"></div>
                <div class="orb orb-b"></div>
            </div>
            <div class="section-inner">
                <header class="section-header reveal-item">
                    <h2>{ language.t("contact.title") }</h2>
                    <p>{ language.t("contact.subtitle") }</p>
                    <div class="header-rule" aria-hidden="true"></div>
                </header>
                <div class="contact-grid">{ channels }</div>
                <div class="section-cta reveal-item">
                    <a class="button-primary" href={CONTACT_EMAIL_URI}>
                        {"Start Your Project Today"}
                        <span class="arrow" aria-hidden="true">{"\u{2192}"}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

const FOOTER_SERVICES: [&str; 4] = [
    "footer.services.seo",
    "footer.services.content",
    "footer.services.local",
    "footer.services.technical",
];

#[function_component(SiteFooter)]
fn site_footer() -> Html {
    let language = use_language();
    let year = js_sys::Date::new_0().get_full_year();

    let quick_links = NAV_SECTIONS
        .iter()
        .map(|&(id, key)| {
            let onclick = Callback::from(move |_| scroll_to_section(id));
            html! {
                <li key={id}>
                    <button class="footer-link" onclick={onclick}>{ language.t(key) }</button>
                </li>
            }
        })
        .collect::<Html>();

    let services = FOOTER_SERVICES
        .iter()
        .map(|&key| html! { <li key={key}>{ language.t(key) }</li> })
        .collect::<Html>();

    let socials = CONTACT_CHANNELS
        .iter()
        .map(|channel| {
            html! {
                <li key={channel.title}>
                    <a href={channel.href} target="_blank" rel="noopener noreferrer">
                        { channel.title }
                    </a>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <span class="brand">{"Prestige"}<span class="accent">{"Websites"}</span></span>
                    <p>{ language.t("footer.description") }</p>
                </div>
                <nav aria-label="Quick links">
                    <h3>{ language.t("footer.quickLinks") }</h3>
                    <ul>{ quick_links }</ul>
                </nav>
                <div>
                    <h3>{ language.t("footer.services") }</h3>
                    <ul>{ services }</ul>
                </div>
                <div>
                    <h3>{ language.t("footer.contact") }</h3>
                    <ul class="footer-socials">{ socials }</ul>
                </div>
            </div>
            <p class="footer-rights">
                { format!("\u{a9} {year} Prestige Websites. ") }{ language.t("footer.rights") }
            </p>
        </footer>
    }
}

#[function_component(ScrollProgress)]
fn scroll_progress() -> Html {
    let visible = use_scrolled_past(RAIL_VISIBLE_AFTER_PX);
    let fraction = use_scroll_progress();

    html! {
        <div class={classes!("scroll-rail", visible.then_some("is-visible"))} aria-hidden="true">
            <div
                class="scroll-rail-fill"
                style={format!("height:{:.1}%;", map_fraction(fraction, (0.0, 100.0)))}
            ></div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let loaded = use_state_eq(|| false);

    let on_loading_complete = {
        let loaded = loaded.clone();
        Callback::from(move |_| loaded.set(true))
    };

    html! {
        <LanguageProvider>
            <LoadingScreen on_complete={on_loading_complete} />
            if *loaded {
                <>
                    <Navigation />
                    <main>
                        <HeroSection />
                        <AboutSection />
                        <PortfolioSection />
                        <TestimonialsSection />
                        <ContactSection />
                    </main>
                    <SiteFooter />
                    <ScrollProgress />
                </>
            }
        </LanguageProvider>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
