//! Public hero slideshow

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use partner_core::autoplay::{run_autoplay, Cancel, TaskSlot};
use partner_core::client::HeroClient;
use partner_core::config::{self, AUTOPLAY_PERIOD};
use partner_core::Carousel;

use crate::hooks::preload_image;

/// Dioxus task handle usable in a [`TaskSlot`]
struct AutoplayTask(Task);

impl Cancel for AutoplayTask {
    fn cancel(self) {
        self.0.cancel();
    }
}

/// Full-screen slideshow with remote-configurable images and copy
#[component]
pub fn Hero() -> Element {
    let mut carousel = use_signal(Carousel::default);
    let autoplay = use_hook(|| Rc::new(RefCell::new(TaskSlot::<AutoplayTask>::default())));

    // One-shot remote config; defaults stay on any failure
    use_future(move || async move {
        let client = HeroClient::from_config(&config::current());
        if let Some(remote) = client.fetch_or_default().await {
            carousel.write().apply_config(remote);
        }
    });

    // Restart the timer only when the index or slide set changes, not on hover
    let epoch = use_memo(move || carousel.read().epoch());

    use_effect(move || {
        let epoch = epoch();
        preload_image(&carousel.peek().preload_target().full);

        let task = spawn(run_autoplay(AUTOPLAY_PERIOD, epoch, move |started| {
            carousel.write().tick(started)
        }));
        autoplay.borrow_mut().replace(AutoplayTask(task));
    });

    let state = carousel.read();
    let text = state.text().clone();
    let index = state.index();

    rsx! {
        header {
            id: "home",
            class: "relative w-full h-screen overflow-hidden",
            onmouseenter: move |_| carousel.write().set_hovered(true),
            onmouseleave: move |_| carousel.write().set_hovered(false),

            // Slides
            div {
                class: "absolute inset-0",
                for (i, slide) in state.slides().iter().enumerate() {
                    div {
                        key: "{i}",
                        class: if i == index {
                            "absolute inset-0 transition-all duration-700 opacity-100 z-10"
                        } else {
                            "absolute inset-0 transition-all duration-700 opacity-0 z-0 pointer-events-none"
                        },
                        img { src: "{slide.full}", alt: "", class: "w-full h-full object-cover" }
                        div { class: "absolute inset-0 bg-black/30" }
                    }
                }
            }

            // Copy and calls to action
            div {
                class: "relative z-20 flex flex-col items-center justify-center h-full text-center px-6",
                style: "color: {text.text_color}",
                div {
                    class: "max-w-4xl",
                    h1 {
                        class: "text-4xl sm:text-6xl md:text-7xl font-bold leading-tight mb-4",
                        "{text.heading}"
                        br {}
                        span { style: "color: {text.highlight_color}", "{text.highlight}" }
                    }
                    p {
                        class: "text-lg sm:text-xl md:text-2xl max-w-3xl mx-auto mb-8",
                        "{text.subheading}"
                    }
                    div {
                        class: "flex flex-col sm:flex-row justify-center items-center gap-4 mb-8",
                        a {
                            href: "/contact-us",
                            class: "inline-flex items-center gap-3 px-8 py-4 border-2 rounded-full text-lg font-semibold transition-all duration-200 hover:scale-105",
                            style: "border-color: {text.text_color}; color: {text.text_color}; background-color: transparent",
                            "Book Free Consultation \u{203A}"
                        }
                        a {
                            href: "/services",
                            class: "inline-flex items-center gap-3 px-8 py-4 rounded-full text-lg font-semibold transition-all duration-200 hover:scale-105",
                            style: "background-color: {text.button_bg}; color: {text.button_text_color}",
                            "Explore Services \u{203A}"
                        }
                    }
                }
            }

            // Controls
            div {
                class: "absolute inset-x-0 top-1/2 z-30 flex items-center justify-between px-4",
                button {
                    class: "rounded-full p-3 bg-black/30 text-white",
                    aria_label: "Previous slide",
                    onclick: move |_| carousel.write().prev(),
                    "\u{2039}"
                }
                button {
                    class: "rounded-full p-3 bg-black/30 text-white",
                    aria_label: "Next slide",
                    onclick: move |_| carousel.write().next(),
                    "\u{203A}"
                }
            }

            // Dots
            div {
                class: "absolute bottom-8 left-1/2 -translate-x-1/2 z-30 flex gap-3",
                for i in 0..state.slides().len() {
                    button {
                        key: "{i}",
                        aria_label: format!("Go to slide {}", i + 1),
                        class: if i == index { "w-3 h-3 rounded-full bg-white" } else { "w-3 h-3 rounded-full bg-white/40" },
                        onclick: move |_| {
                            if let Err(e) = carousel.write().go_to(i) {
                                tracing::warn!(error = %e, "Ignoring slide selection");
                            }
                        },
                    }
                }
            }
        }
    }
}
