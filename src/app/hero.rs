use leptos::prelude::*;
use leptos_use::{use_interval_fn, utils::Pausable};

use super::{browser::scroll_to_section, reveal::motion_style};
use crate::{
    config::SiteSettings,
    content::Profile,
    motion::{Entrance, Motion, Typewriter},
};

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();

    // The hero is above the fold, so it plays as soon as the page is live
    // rather than waiting on the viewport.
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));

    let typed = RwSignal::new(Typewriter::new(&profile.tagline));
    let Pausable { pause, .. } = use_interval_fn(
        move || {
            typed.maybe_update(Typewriter::tick);
        },
        settings.typewriter_interval_ms,
    );
    Effect::new(move |_| {
        if typed.with(Typewriter::is_done) {
            pause();
        }
    });

    let step = |ms| motion_style(Motion::new(Entrance::Fade).delay_ms(ms), mounted);

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative overflow-hidden pt-20"
        >
            <div class="absolute inset-0 opacity-20">
                <div class="absolute top-20 left-10 w-32 h-32 border-2 border-cyan-400 rounded-full"></div>
                <div class="absolute bottom-40 right-20 w-24 h-24 border-2 border-emerald-400 rounded-lg rotate-45"></div>
                <div class="absolute top-1/2 left-1/4 w-16 h-16 border-2 border-cyan-400"></div>
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 relative z-10">
                <div class="text-center">
                    <div class="mb-6" style=motion_style(Motion::new(Entrance::Drop(20.0)), mounted)>
                        <span class="text-cyan-400 text-lg">{profile.greeting.as_str()}</span>
                    </div>

                    <h1
                        class="text-5xl sm:text-6xl md:text-7xl lg:text-8xl mb-6 bg-gradient-to-r from-cyan-400 via-emerald-400 to-cyan-400 bg-clip-text text-transparent bg-[length:200%_auto]"
                        style=motion_style(Motion::new(Entrance::Zoom(0.9)).delay_ms(200), mounted)
                    >
                        {profile.name.as_str()}
                    </h1>

                    <div
                        class="text-xl sm:text-2xl md:text-3xl text-gray-300 mb-4 h-12 flex items-center justify-center"
                        style=step(400)
                    >
                        <span class="font-mono">{move || typed.with(|t| t.visible())}</span>
                        <span class="animate-pulse ml-1 text-cyan-400">"|"</span>
                    </div>

                    <p class="text-gray-400 mb-12" style=step(600)>
                        {profile.headline.as_str()}
                    </p>

                    <div
                        class="flex flex-wrap gap-4 justify-center mb-16"
                        style=motion_style(Motion::new(Entrance::Rise(20.0)).delay_ms(800), mounted)
                    >
                        <a
                            href=profile.resume.as_str()
                            download=""
                            class="group px-8 py-4 bg-gradient-to-r from-cyan-500 to-emerald-500 rounded-lg hover:from-cyan-400 hover:to-emerald-400 transition-all duration-300 flex items-center gap-2 shadow-lg shadow-cyan-500/30 hover:shadow-cyan-500/50"
                        >
                            <span class="group-hover:animate-bounce">"⬇"</span>
                            "Download Resume"
                        </a>
                        <button
                            on:click=|_| scroll_to_section("contact")
                            class="px-8 py-4 bg-transparent border-2 border-cyan-400 text-cyan-400 rounded-lg hover:bg-cyan-400/10 transition-all duration-300"
                        >
                            "Contact Me"
                        </button>
                        <button
                            on:click=|_| scroll_to_section("projects")
                            class="px-8 py-4 bg-transparent border-2 border-emerald-400 text-emerald-400 rounded-lg hover:bg-emerald-400/10 transition-all duration-300"
                        >
                            "View Projects"
                        </button>
                    </div>

                    <div class="flex gap-6 justify-center mb-12" style=step(1000)>
                        {profile
                            .socials
                            .iter()
                            .map(|s| {
                                view! {
                                    <a
                                        href=s.href.as_str()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=s.label.as_str()
                                        class="p-4 bg-gray-800/50 rounded-full hover:bg-cyan-400/20 hover:text-cyan-400 transition-all duration-300 border border-gray-700 hover:border-cyan-400"
                                    >
                                        <i class=format!("{} text-2xl", s.icon)></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=format!("mailto:{}", profile.email)
                            aria-label="Email"
                            class="p-4 bg-gray-800/50 rounded-full hover:bg-cyan-400/20 hover:text-cyan-400 transition-all duration-300 border border-gray-700 hover:border-cyan-400"
                        >
                            <span class="text-2xl">"✉"</span>
                        </a>
                    </div>

                    <div class="flex flex-col items-center" style=step(1200)>
                        <span class="text-gray-500 text-sm mb-2">"Scroll to explore"</span>
                        <span class="text-cyan-400 animate-bounce">"↓"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
