use leptos::{html, prelude::*};

use super::browser::BrowserViewport;
use crate::{
    config::SiteSettings,
    motion::Motion,
    reveal::{RevealController, REVEAL_THRESHOLD},
};

/// Latches `true` the first time enough of `target` scrolls into view.
///
/// The observer is attached once the section is in the DOM and disconnected
/// when the owning component is cleaned up, whether or not it ever fired.
pub fn use_reveal(target: NodeRef<html::Section>) -> ReadSignal<bool> {
    let threshold = use_context::<SiteSettings>()
        .map(|s| s.reveal_threshold)
        .unwrap_or(REVEAL_THRESHOLD);
    let (revealed, set_revealed) = signal(false);
    let viewport = BrowserViewport { threshold };
    let controller = StoredValue::new_local(RevealController::<BrowserViewport>::new(threshold));

    Effect::new(move |_| {
        let region: Option<web_sys::Element> = target.get().map(Into::into);
        controller.update_value(|c| {
            c.observe(&viewport, region.as_ref(), move || set_revealed.set(true));
        });
    });

    on_cleanup(move || controller.update_value(|c| c.release()));

    revealed
}

/// Inline style that tracks `revealed`.
pub fn motion_style(
    motion: Motion,
    revealed: ReadSignal<bool>,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || motion.style(revealed.get())
}

#[component]
pub fn SectionTitle(
    title: &'static str,
    revealed: ReadSignal<bool>,
    #[prop(optional)] subtitle: Option<String>,
) -> impl IntoView {
    use crate::motion::Entrance;

    view! {
        <div
            class="text-center mb-16"
            style=motion_style(Motion::new(Entrance::Rise(20.0)), revealed)
        >
            <h2 class="text-4xl md:text-5xl mb-4 bg-gradient-to-r from-cyan-400 to-emerald-400 bg-clip-text text-transparent">
                {title}
            </h2>
            <div class="w-24 h-1 bg-gradient-to-r from-cyan-400 to-emerald-400 mx-auto mb-4"></div>
            {subtitle.map(|s| view! { <p class="text-gray-400 max-w-2xl mx-auto">{s}</p> })}
        </div>
    }
}
