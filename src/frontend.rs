use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, Event, HtmlElement, HtmlVideoElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent,
    ScrollBehavior, ScrollToOptions,
};
use yew::prelude::*;

use crate::interaction::{
    active_section, animated_selector, ModalState, RevealLedger, SectionSpan, NAV_LINKS,
    NAV_SCROLL_OFFSET_PX, REVEALED_CLASS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SECTION_SELECTOR,
};

/// Deployment path prefix baked in at build time so media references keep
/// resolving under subpath deployments (GitHub Pages style).
fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

fn video_title(source: &str) -> String {
    source
        .rsplit('/')
        .next()
        .unwrap_or(source)
        .trim_end_matches(".mp4")
        .to_string()
}

fn scroll_to_section(section_id: &str) {
    let Some(win) = window() else {
        return;
    };
    let Some(element) = win.document().and_then(|d| d.get_element_by_id(section_id)) else {
        return;
    };
    let Ok(element) = element.dyn_into::<HtmlElement>() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(f64::from(element.offset_top()) - NAV_SCROLL_OFFSET_PX);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };

    let value = if locked { "hidden" } else { "unset" };
    let _ = body.style().set_property("overflow", value);
}

/// Reads the current vertical span of every content section. Measured fresh
/// on each scroll event rather than cached, so layout shifts are picked up
/// without a resize listener.
fn measure_sections() -> Vec<SectionSpan> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(SECTION_SELECTOR) else {
        return Vec::new();
    };

    let mut sections = Vec::with_capacity(nodes.length() as usize);

    for index in 0..nodes.length() {
        let Some(element) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };

        let id = element.id();
        if id.is_empty() {
            continue;
        }

        sections.push(SectionSpan {
            id,
            top: f64::from(element.offset_top()),
            height: f64::from(element.client_height()),
        });
    }

    sections
}

type EntryAnimator = (
    IntersectionObserver,
    Rc<Vec<Element>>,
    Closure<dyn FnMut(js_sys::Array)>,
);

/// Creates the viewport-intersection watcher and registers every section and
/// animation-marked element with it. Returns the live resources so the
/// caller's effect destructor can release them; `None` means the document
/// was unavailable and nothing needs releasing.
fn start_entry_animator() -> Option<EntryAnimator> {
    let document = window()?.document()?;
    let nodes = document.query_selector_all(&animated_selector()).ok()?;

    let mut targets = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(element) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            targets.push(element);
        }
    }

    let targets = Rc::new(targets);
    let ledger = Rc::new(RefCell::new(RevealLedger::new(targets.len())));

    let callback = {
        let targets = Rc::clone(&targets);
        Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                let Some(index) = targets.iter().position(|candidate| *candidate == target)
                else {
                    continue;
                };

                if ledger.borrow_mut().reveal(index) {
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                }
            }
        })
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .ok()?;

    for target in targets.iter() {
        observer.observe(target);
    }

    Some((observer, targets, callback))
}

fn attach_escape_listener(
    modal: UseStateHandle<ModalState>,
) -> Option<Closure<dyn FnMut(KeyboardEvent)>> {
    let document = window()?.document()?;

    let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if event.key() == "Escape" {
            modal.set(ModalState::closed());
        }
    });

    document
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .ok()?;

    Some(closure)
}

#[derive(Properties, PartialEq)]
struct WorksCardProps {
    badge: AttrValue,
    title: AttrValue,
    description: AttrValue,
    video: AttrValue,
    on_open_video: Callback<AttrValue>,
}

#[function_component(WorksCard)]
fn works_card(props: &WorksCardProps) -> Html {
    let onclick = {
        let video = props.video.clone();
        let on_open_video = props.on_open_video.clone();
        Callback::from(move |_: MouseEvent| on_open_video.emit(video.clone()))
    };

    html! {
        <div class="works-card fade-in-up">
            <div class="works-image-wrapper">
                <div class="works-image-placeholder" aria-hidden="true"></div>
                <div class="works-cut-out"></div>
            </div>
            <div class="works-details">
                <div class="works-badge">
                    <span>{props.badge.clone()}</span>
                </div>
                <h3 class="works-title">{props.title.clone()}</h3>
                <p class="works-description">{props.description.clone()}</p>
                <button class="works-button" onclick={onclick}>
                    <span>{"View Demo"}</span>
                    <span aria-hidden="true">{"→"}</span>
                </button>
            </div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let active = use_state_eq(|| Option::<String>::None);
    let menu_open = use_state(|| false);
    let modal = use_state(ModalState::closed);

    // Scroll tracker: re-measure every section on each scroll event and
    // reflect the classification in the nav highlight.
    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                let handler_window = win.clone();
                let closure = Closure::<dyn FnMut()>::new(move || {
                    let scroll_y = handler_window.scroll_y().unwrap_or(0.0);
                    let sections = measure_sections();
                    let current = active_section(scroll_y, &sections).map(ToString::to_string);
                    active.set(current);
                });
                let _ = win
                    .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
                closure
            });

            move || {
                if let (Some(win), Some(closure)) = (window(), listener.as_ref()) {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    // Entry animator: one observer for the page's lifetime; every target is
    // unobserved before the observer itself is discarded.
    use_effect_with((), move |_| {
        let animator = start_entry_animator();

        move || {
            if let Some((observer, targets, _callback)) = animator {
                for target in targets.iter() {
                    observer.unobserve(target);
                }
                observer.disconnect();
            }
        }
    });

    // Modal side effects: the Escape listener and the body scroll lock are
    // acquired while a video is open and released on close and on unmount
    // alike.
    {
        let modal = modal.clone();
        use_effect_with(modal.is_open(), move |open: &bool| {
            let listener = if *open {
                attach_escape_listener(modal.clone())
            } else {
                None
            };
            set_body_scroll_locked(*open);

            move || {
                if let Some(closure) = listener {
                    if let Some(document) = window().and_then(|w| w.document()) {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            closure.as_ref().unchecked_ref(),
                        );
                    }
                }
                set_body_scroll_locked(false);
            }
        });
    }

    let on_nav_select = {
        let menu_open = menu_open.clone();
        Callback::from(move |section_id: AttrValue| {
            scroll_to_section(&section_id);
            menu_open.set(false);
        })
    };

    let on_menu_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_logo_click = {
        let on_nav_select = on_nav_select.clone();
        Callback::from(move |_: MouseEvent| on_nav_select.emit(AttrValue::from("profile")))
    };

    let on_open_video = {
        let modal = modal.clone();
        Callback::from(move |source: AttrValue| {
            modal.set(ModalState::open(&source, public_url()));
        })
    };

    let view_projects = {
        let on_nav_select = on_nav_select.clone();
        Callback::from(move |_: MouseEvent| on_nav_select.emit(AttrValue::from("works")))
    };

    let contact_me = {
        let on_nav_select = on_nav_select.clone();
        Callback::from(move |_: MouseEvent| on_nav_select.emit(AttrValue::from("contact")))
    };

    let open_tournament_demo = {
        let on_open_video = on_open_video.clone();
        Callback::from(move |_: MouseEvent| {
            on_open_video.emit(AttrValue::from("/media/Tournament.mp4"));
        })
    };

    let open_ayurastra_demo = {
        let on_open_video = on_open_video.clone();
        Callback::from(move |_: MouseEvent| {
            on_open_video.emit(AttrValue::from("/media/AyurAstra.mp4"));
        })
    };

    let open_gateguard_demo = {
        let on_open_video = on_open_video.clone();
        Callback::from(move |_: MouseEvent| {
            on_open_video.emit(AttrValue::from("/media/GateGuard.mp4"));
        })
    };

    let nav_items = NAV_LINKS
        .iter()
        .map(|link| {
            let onclick = {
                let on_nav_select = on_nav_select.clone();
                let id = AttrValue::from(link.id);
                Callback::from(move |_: MouseEvent| on_nav_select.emit(id.clone()))
            };
            let is_active = active.as_deref() == Some(link.id);

            html! {
                <li key={link.id} class={classes!(is_active.then_some("active"))}>
                    <a onclick={onclick} tabindex="0" aria-label={format!("Go to {}", link.label)}>
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect::<Html>();

    let modal_state = (*modal).clone();
    let modal_overlay = modal_state.video_source().map(|source| {
        let source = AttrValue::from(source.to_string());

        let close_on_click = {
            let modal = modal.clone();
            Callback::from(move |_: MouseEvent| modal.set(ModalState::closed()))
        };
        let close_on_ended = {
            let modal = modal.clone();
            Callback::from(move |_: Event| modal.set(ModalState::closed()))
        };
        let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());
        let on_metadata = {
            let modal = modal.clone();
            let source = source.clone();
            Callback::from(move |event: Event| {
                let Some(video) = event
                    .target()
                    .and_then(|target| target.dyn_into::<HtmlVideoElement>().ok())
                else {
                    return;
                };
                modal.set((*modal).with_orientation(
                    &source,
                    video.video_width(),
                    video.video_height(),
                ));
            })
        };

        let container_class = classes!(
            "video-container",
            modal_state.is_portrait().then_some("portrait")
        );
        let player_class = classes!(
            "video-modal-player",
            modal_state.is_portrait().then_some("portrait")
        );

        html! {
            <div class="video-modal-overlay" onclick={close_on_click.clone()}>
                <div class="video-modal-content" onclick={keep_open}>
                    <button class="video-modal-close" onclick={close_on_click} aria-label="Close video">
                        {"✕"}
                    </button>
                    <div class={container_class}>
                        <video
                            key={source.to_string()}
                            class={player_class}
                            controls={true}
                            autoplay={true}
                            src={source.clone()}
                            onended={close_on_ended}
                            onloadedmetadata={on_metadata}
                        >
                            {"Your browser does not support the video tag."}
                        </video>
                        <div class="video-controls-overlay">
                            <div class="video-title">{video_title(&source)}</div>
                            <div class="video-hint">
                                {"Press "}<kbd>{"Esc"}</kbd>{" to close"}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <div class="portfolio-container">
            <nav class="navbar" role="navigation" aria-label="Main Navigation">
                <div class="nav-content">
                    <div class="logo" onclick={on_logo_click} tabindex="0" aria-label="Go to Profile">
                        {"BF"}
                    </div>
                    <div class="menu-toggle" onclick={on_menu_toggle} tabindex="0" aria-label="Toggle menu">
                        <div class={classes!("hamburger", (*menu_open).then_some("active"))}>
                            <span></span>
                            <span></span>
                            <span></span>
                        </div>
                    </div>
                    <ul class={classes!("nav-links", (*menu_open).then_some("active"))}>
                        {nav_items}
                    </ul>
                </div>
            </nav>

            <header class="hero">
                <div class="hero-content">
                    <div class="hero-grid">
                        <div class="hero-left">
                            <div class="hero-kicker">
                                <span class="kicker-dot" aria-hidden="true">{"◎"}</span>
                                {" Ben Furtado"}
                            </div>
                            <h1 class="hero-heading">{"Full-Stack Developer"}</h1>
                            <p class="hero-subhead">
                                {"AI & Automation enthusiast crafting scalable apps across web and \
                                  mobile. Focused on clean UX, performance, and shipping real products."}
                            </p>
                            <div class="hero-cards-wrapper">
                                <div class="hero-card">
                                    <h3 class="hero-card-title">{"Bringing Ideas to Life"}</h3>
                                    <p class="hero-card-subtitle">{"Designing & Building Digital Experiences"}</p>
                                </div>
                                <div class="hero-card">
                                    <h3 class="hero-card-title">{"3+ Years"}</h3>
                                    <p class="hero-card-subtitle">{"Experience"}</p>
                                </div>
                            </div>
                            <div class="hero-actions">
                                <button class="link-button" onclick={view_projects}>{"View Projects"}</button>
                                <button class="link-button" onclick={contact_me}>{"Contact Me"}</button>
                            </div>
                        </div>
                        <div class="hero-right">
                            <div class="hero-astronaut" aria-hidden="true"></div>
                        </div>
                    </div>
                </div>
            </header>

            <section class="section" id="profile">
                <div class="section-container">
                    <h2 class="section-title">{"Profile Summary"}</h2>
                    <div class="divider"></div>
                    <p class="profile-text">
                        {"Full-Stack Developer with expertise in UI/UX design, machine learning, and \
                          mobile app development. Experienced in building real-world solutions in \
                          Flutter, React, and Django, integrating AI-powered features and automation \
                          workflows. Skilled in web and mobile apps, embedded systems, and computer vision."}
                    </p>
                </div>
            </section>

            <section class="section" id="skills">
                <div class="section-container">
                    <h2 class="section-title">{"Technical Skills"}</h2>
                    <div class="divider"></div>
                    <div class="skills-container">
                        <div class="skill-group fade-in-up">
                            <div class="skill-group-header">
                                <h3>{"Languages"}</h3>
                            </div>
                            <div class="skill-tags">
                                {for ["Rust", "C++", "C", "Java", "Python", "JavaScript", "HTML5", "CSS3", "Dart"]
                                    .iter()
                                    .map(|skill| html! { <span class="skill-tag">{*skill}</span> })}
                            </div>
                        </div>
                        <div class="skill-group fade-in-up">
                            <div class="skill-group-header">
                                <h3>{"Frameworks & Libraries"}</h3>
                            </div>
                            <div class="skill-tags">
                                {for ["Next.js", "Flutter", "React.js", "Django", "Node.js", "Express",
                                      "TensorFlow.js", "OpenCV", "NumPy", "Pandas", "scikit-learn", "Tailwind CSS"]
                                    .iter()
                                    .map(|skill| html! { <span class="skill-tag">{*skill}</span> })}
                            </div>
                        </div>
                        <div class="skill-group fade-in-up">
                            <div class="skill-group-header">
                                <h3>{"Tools & Platforms"}</h3>
                            </div>
                            <div class="skill-tags">
                                {for ["MySQL", "MongoDB", "Git", "GitHub", "Blender", "Figma",
                                      "Raspberry Pi", "ESP32", "Arduino", "Linux"]
                                    .iter()
                                    .map(|skill| html! { <span class="skill-tag">{*skill}</span> })}
                            </div>
                        </div>
                        <div class="skill-group fade-in-up">
                            <div class="skill-group-header">
                                <h3>{"Design & Specializations"}</h3>
                            </div>
                            <div class="skill-tags">
                                {for ["UI/UX Design", "Graphic Design", "Hardware Integration",
                                      "Machine Learning", "Computer Vision"]
                                    .iter()
                                    .map(|skill| html! { <span class="skill-tag">{*skill}</span> })}
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section" id="works">
                <div class="section-container">
                    <h2 class="section-title">{"Featured Works"}</h2>
                    <div class="divider"></div>
                    <div class="works-grid">
                        <WorksCard
                            badge="Mobile App"
                            title="Basch Tournament App"
                            description="Flutter & Django based tournament management system"
                            video="/media/Tournament.mp4"
                            on_open_video={on_open_video.clone()}
                        />
                        <WorksCard
                            badge="Computer Vision"
                            title="GateGuard System"
                            description="Facial recognition & barcode entry-exit system"
                            video="/media/GateGuard.mp4"
                            on_open_video={on_open_video.clone()}
                        />
                        <WorksCard
                            badge="AI/ML"
                            title="AyurAstra Plant Recognition"
                            description="Plant recognition system with 3D model generation"
                            video="/media/AyurAstra.mp4"
                            on_open_video={on_open_video.clone()}
                        />
                    </div>
                </div>
            </section>

            <section class="section" id="experience">
                <div class="section-container">
                    <h2 class="section-title">{"Work Experience"}</h2>
                    <div class="divider"></div>
                    <div class="timeline">
                        <div class="timeline-item">
                            <div class="timeline-badge"><span></span></div>
                            <div class="timeline-content">
                                <h3 class="job-title">{"Internship - Website Lead | DBIT Website"}</h3>
                                <p class="job-date">{"Don Bosco Institute of Technology, Mumbai | July 2024 - July 2025"}</p>
                                <ul class="job-duties">
                                    <li>{"Refined UI/UX design for an improved website experience as the Web Dev Head of CSI DBIT."}</li>
                                    <li>{"Optimized code structure for better performance and scalability."}</li>
                                    <li>{"Led website management and enhancement initiatives."}</li>
                                </ul>
                                <div class="project-links">
                                    <a href="https://dbit.in/" target="_blank" rel="noreferrer" class="link-button">
                                        {"Visit DBIT Website"}
                                    </a>
                                </div>
                            </div>
                        </div>
                        <div class="timeline-item">
                            <div class="timeline-badge"><span></span></div>
                            <div class="timeline-content">
                                <h3 class="job-title">{"Full-Stack App Developer | CS Tennis Academy"}</h3>
                                <p class="job-date">{"Basch Tournament App | March 2025 - Present"}</p>
                                <ul class="job-duties">
                                    <li>{"Created and maintained the Basch app for multi-sport tournaments, registrations, and scoring."}</li>
                                    <li>{"Flutter and Django-based application, developed with a core Dev team."}</li>
                                    <li>{"Releasing on Play Store and App Store soon."}</li>
                                </ul>
                                <button class="link-button" onclick={open_tournament_demo}>
                                    {"Watch Basch App Demo"}
                                </button>
                            </div>
                        </div>
                        <div class="timeline-item">
                            <div class="timeline-badge"><span></span></div>
                            <div class="timeline-content">
                                <h3 class="job-title">{"Codeverse Hackathon | 3rd Place Winner"}</h3>
                                <p class="job-date">{"November 2024 - December 2024"}</p>
                                <ul class="job-duties">
                                    <li>{"Developed a plant recognition system with mapped navigation to sellers and live seller information."}</li>
                                    <li>{"Built an automated 3D plant model generator using Blender."}</li>
                                </ul>
                                <button class="link-button" onclick={open_ayurastra_demo}>
                                    {"Watch AyurAstra Demo"}
                                </button>
                            </div>
                        </div>
                        <div class="timeline-item">
                            <div class="timeline-badge"><span></span></div>
                            <div class="timeline-content">
                                <h3 class="job-title">{"Facial Recognition & Barcode Entry-Exit System (GateGuard)"}</h3>
                                <p class="job-date">{"College Project | July 2023 - Present"}</p>
                                <ul class="job-duties">
                                    <li>{"Developed GateGuard for access monitoring in the college library using Django and Raspberry Pi."}</li>
                                    <li>{"Integrated computer vision with OpenCV to track and analyze security data."}</li>
                                </ul>
                                <button class="link-button" onclick={open_gateguard_demo}>
                                    {"Watch GateGuard Demo"}
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section" id="education">
                <div class="section-container">
                    <h2 class="section-title">{"Education"}</h2>
                    <div class="divider"></div>
                    <div class="education-card">
                        <div class="education-details">
                            <h3>{"Don Bosco Institute of Technology, Mumbai"}</h3>
                            <p>{"B.E. Information Technology"}</p>
                            <p class="education-date">{"Expected Graduation: July 2026 (Currently 4th year)"}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section" id="achievements">
                <div class="section-container">
                    <h2 class="section-title">{"Certificates & Achievements"}</h2>
                    <div class="divider"></div>
                    <div class="achievements-pro">
                        <div class="certs-col">
                            <h3 class="subsection-title">{"Certificates"}</h3>
                            <ul class="cert-list">
                                <li class="cert-row">
                                    <div class="cert-main">
                                        <h4 class="cert-title">{"Machine Learning"}</h4>
                                        <div class="cert-meta"><span>{"Coursera"}</span><span>{"2024"}</span></div>
                                        <p class="cert-desc">{"Supervised/unsupervised learning, model evaluation and pipelines."}</p>
                                    </div>
                                </li>
                                <li class="cert-row">
                                    <div class="cert-main">
                                        <h4 class="cert-title">{"Agentic AI & LLM Apps"}</h4>
                                        <div class="cert-meta"><span>{"Python / GenAI"}</span><span>{"2025"}</span></div>
                                        <p class="cert-desc">{"Agent frameworks, tool use, orchestration, production readiness."}</p>
                                    </div>
                                </li>
                            </ul>
                        </div>
                        <div class="awards-col">
                            <h3 class="subsection-title">{"Awards"}</h3>
                            <div class="awards-timeline">
                                <div class="awards-item">
                                    <div class="awards-dot"></div>
                                    <div class="awards-content">
                                        <h4 class="award-title">{"3rd Place - DBIT Hackathon (Codeverse)"}</h4>
                                        <p class="award-desc">{"Plant recognition with seller mapping and procedural 3D model generation."}</p>
                                        <span class="award-date">{"Nov-Dec 2024"}</span>
                                    </div>
                                </div>
                                <div class="awards-item">
                                    <div class="awards-dot"></div>
                                    <div class="awards-content">
                                        <h4 class="award-title">{"3rd Place - CRM for Gym (InoQuest)"}</h4>
                                        <p class="award-desc">{"CRM concept & prototype for gym member lifecycle management."}</p>
                                        <span class="award-date">{"2024"}</span>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section" id="contact">
                <div class="section-container">
                    <h2 class="section-title">{"Contact"}</h2>
                    <div class="divider"></div>
                    <div class="contact-grid">
                        <div class="contact-card">
                            <div class="contact-info">
                                <h3>{"Email"}</h3>
                                <a href="mailto:raynfurtado@gmail.com">{"raynfurtado@gmail.com"}</a>
                            </div>
                        </div>
                        <div class="contact-card">
                            <div class="contact-info">
                                <h3>{"LinkedIn"}</h3>
                                <a href="https://linkedin.com/in/ben-furtado-26ab4b201" target="_blank" rel="noreferrer">
                                    {"ben-furtado-26ab4b201"}
                                </a>
                            </div>
                        </div>
                        <div class="contact-card">
                            <div class="contact-info">
                                <h3>{"GitHub"}</h3>
                                <a href="https://github.com/benfurtado" target="_blank" rel="noreferrer">
                                    {"github.com/benfurtado"}
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="footer-content">
                    <p>
                        {format!("© {} Ben Furtado. All rights reserved.", js_sys::Date::new_0().get_full_year())}
                    </p>
                </div>
            </footer>

            {modal_overlay}
        </div>
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
